//! Core plumbing for Lattice Grid.
//!
//! This crate provides the pieces the grid engine is wired with:
//!
//! - **Signal/Slot System**: synchronous, type-safe change notification
//! - **Logging**: `tracing` targets per subsystem and timing spans
//!
//! # Signal Example
//!
//! ```
//! use lattice_grid_core::Signal;
//!
//! let selected_changed = Signal::<Option<String>>::new();
//!
//! let conn_id = selected_changed.connect(|item| {
//!     println!("selected: {:?}", item);
//! });
//!
//! selected_changed.emit(Some("photo-17.png".to_string()));
//! selected_changed.disconnect(conn_id);
//! ```

pub mod logging;
pub mod signal;

pub use logging::PerfSpan;
pub use signal::{ConnectionGuard, ConnectionId, Signal};
