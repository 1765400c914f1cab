//! Signal/slot integration tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;

use lattice_grid_core::{PerfSpan, Signal};

#[test]
fn test_slots_run_in_connection_order() {
    let signal = Signal::<&'static str>::new();
    let log = Arc::new(Mutex::new(Vec::new()));

    for name in ["first", "second", "third"] {
        let log = log.clone();
        signal.connect(move |value| log.lock().push(format!("{name}:{value}")));
    }

    signal.emit("go");

    assert_eq!(
        *log.lock(),
        vec!["first:go", "second:go", "third:go"]
    );
}

#[test]
fn test_scoped_connection() {
    let signal = Signal::<usize>::new();
    let count = Arc::new(AtomicUsize::new(0));

    {
        let count = count.clone();
        let _guard = signal.connect_scoped(move |value| {
            count.fetch_add(*value, Ordering::SeqCst);
        });
        signal.emit(2);
        assert_eq!(signal.connection_count(), 1);
    }

    signal.emit(5);
    assert_eq!(count.load(Ordering::SeqCst), 2);
    assert_eq!(signal.connection_count(), 0);
}

#[test]
fn test_blocked_signal_skips_slots() {
    let signal = Signal::<()>::new();
    let count = Arc::new(AtomicUsize::new(0));
    let count_clone = count.clone();
    signal.connect(move |_| {
        count_clone.fetch_add(1, Ordering::SeqCst);
    });

    signal.set_blocked(true);
    signal.emit(());
    signal.set_blocked(false);
    signal.emit(());

    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
fn test_slot_connecting_during_emit_takes_effect_next_time() {
    let signal = Arc::new(Signal::<u8>::new());
    let count = Arc::new(AtomicUsize::new(0));

    let weak = Arc::downgrade(&signal);
    let count_clone = count.clone();
    signal.connect(move |_| {
        if let Some(signal) = weak.upgrade() {
            let count = count_clone.clone();
            signal.connect(move |_| {
                count.fetch_add(1, Ordering::SeqCst);
            });
        }
    });

    signal.emit(0);
    assert_eq!(count.load(Ordering::SeqCst), 0);
    assert_eq!(signal.connection_count(), 2);

    signal.emit(0);
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
fn test_perf_span_with_subscriber() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let _span = PerfSpan::new("signal_tests");
    Signal::<i32>::new().emit(1);
}
