//! Logging facilities for Lattice Grid.
//!
//! Lattice Grid uses the `tracing` crate for instrumentation. Nothing is
//! printed unless the host application installs a subscriber:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("lattice_grid::columns=debug,lattice_grid::model=trace")
//!         .init();
//! }
//! ```
//!
//! Each subsystem logs under its own target (see [`targets`]) so the noisy
//! per-row refresh traffic can be filtered independently of structural
//! events such as column count changes.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "lattice_grid_core::signal";
    /// Grid projection model (row set reconciliation and refresh).
    pub const MODEL: &str = "lattice_grid::model";
    /// Column count policy and restructuring.
    pub const COLUMNS: &str = "lattice_grid::columns";
    /// Selection reconciler and the cell selection surface.
    pub const SELECTION: &str = "lattice_grid::selection";
    /// Sorted/filtered linear source.
    pub const SOURCE: &str = "lattice_grid::source";
    /// Performance spans.
    pub const PERF: &str = "lattice_grid::perf";
}

/// A guard for timing a grid operation.
///
/// Creates an `info`-level span on the [`targets::PERF`] target that stays
/// entered until the guard is dropped. Subscribers that record span timings
/// (for example `tracing-subscriber` with `FmtSpan::CLOSE`) report how long
/// restructuring and full refreshes took.
///
/// # Example
///
/// ```ignore
/// use lattice_grid_core::logging::PerfSpan;
///
/// fn rebuild_columns() {
///     let _span = PerfSpan::new("rebuild_columns");
///     // ... expensive work ...
/// }
/// ```
#[derive(Debug)]
pub struct PerfSpan {
    _span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create and enter a new performance span.
    pub fn new(operation: &'static str) -> Self {
        let span = tracing::info_span!(target: "lattice_grid::perf", "perf", operation);
        Self {
            _span: span.entered(),
        }
    }
}
