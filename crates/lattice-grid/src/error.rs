//! Error types for the grid engine.

/// Result type alias for grid operations.
pub type Result<T> = std::result::Result<T, GridError>;

/// Errors that can occur in the grid engine.
///
/// A cell that resolves to no item because the source shrank is not an
/// error; lookups return `None` for it.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GridError {
    /// Index arithmetic was attempted with fewer than one column.
    #[error("invalid column count {columns}: a grid needs at least one column")]
    InvalidColumnCount { columns: usize },

    /// The item is not present in the current (filtered, sorted) projection.
    #[error("item is not present in the current projection")]
    ItemNotFound,

    /// A flat index outside the current projection was requested.
    #[error("flat index {index} is out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },

    /// A cell width that cannot produce a column count.
    #[error("invalid cell width {width}: must be finite and greater than zero")]
    InvalidCellWidth { width: f64 },
}

impl GridError {
    /// Returns `true` for errors caused by a broken internal invariant
    /// rather than by a bad caller argument.
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, Self::InvalidColumnCount { .. })
    }
}
