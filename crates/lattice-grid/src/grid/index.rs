//! Conversion between flat item indices and grid cell positions.
//!
//! For a grid with `C` columns, flat index `i` lives at row `i / C`,
//! column `i % C`, and cell `(r, c)` holds flat index `r * C + c`. The
//! mapping is pure: it knows nothing about how many items exist, so a
//! position on the partially filled last row may map past the end of the
//! source.

use std::fmt;
use std::num::NonZeroUsize;

use crate::error::{GridError, Result};

/// A cell position within the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct CellPosition {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub column: usize,
}

impl CellPosition {
    /// Creates a new cell position.
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for CellPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

impl From<(usize, usize)> for CellPosition {
    fn from((row, column): (usize, usize)) -> Self {
        Self { row, column }
    }
}

/// Converts a flat index to a cell position.
///
/// Fails with [`GridError::InvalidColumnCount`] when `column_count` is zero.
pub fn to_row_col(index: usize, column_count: usize) -> Result<CellPosition> {
    let columns = checked_columns(column_count)?;
    Ok(position_of(index, columns))
}

/// Converts a cell position to a flat index.
///
/// Fails with [`GridError::InvalidColumnCount`] when `column_count` is zero.
pub fn to_index(position: CellPosition, column_count: usize) -> Result<usize> {
    let columns = checked_columns(column_count)?;
    Ok(index_of(position, columns))
}

/// Number of rows needed to show `len` items in `columns` columns.
pub fn row_count_for(len: usize, columns: NonZeroUsize) -> usize {
    len.div_ceil(columns.get())
}

pub(crate) fn position_of(index: usize, columns: NonZeroUsize) -> CellPosition {
    let row = index / columns.get();
    CellPosition {
        row,
        column: index - row * columns.get(),
    }
}

pub(crate) fn index_of(position: CellPosition, columns: NonZeroUsize) -> usize {
    position.row * columns.get() + position.column
}

fn checked_columns(column_count: usize) -> Result<NonZeroUsize> {
    NonZeroUsize::new(column_count).ok_or(GridError::InvalidColumnCount {
        columns: column_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_row_col() {
        assert_eq!(to_row_col(4, 3), Ok(CellPosition::new(1, 1)));
        assert_eq!(to_row_col(0, 3), Ok(CellPosition::new(0, 0)));
        assert_eq!(to_row_col(2, 3), Ok(CellPosition::new(0, 2)));
        assert_eq!(to_row_col(3, 3), Ok(CellPosition::new(1, 0)));
        assert_eq!(to_row_col(9, 1), Ok(CellPosition::new(9, 0)));
    }

    #[test]
    fn test_to_index() {
        assert_eq!(to_index(CellPosition::new(1, 1), 3), Ok(4));
        assert_eq!(to_index(CellPosition::new(3, 0), 3), Ok(9));
        assert_eq!(to_index((2, 4).into(), 5), Ok(14));
    }

    #[test]
    fn test_zero_columns_is_invalid_state() {
        assert_eq!(
            to_row_col(4, 0),
            Err(GridError::InvalidColumnCount { columns: 0 })
        );
        assert_eq!(
            to_index(CellPosition::new(0, 0), 0),
            Err(GridError::InvalidColumnCount { columns: 0 })
        );
    }

    #[test]
    fn test_round_trip() {
        for columns in 1..=7 {
            for index in 0..50 {
                let position = to_row_col(index, columns).unwrap();
                assert!(position.column < columns);
                assert_eq!(to_index(position, columns), Ok(index));
            }
        }
    }

    #[test]
    fn test_row_count_for() {
        let three = NonZeroUsize::new(3).unwrap();
        assert_eq!(row_count_for(0, three), 0);
        assert_eq!(row_count_for(1, three), 1);
        assert_eq!(row_count_for(3, three), 1);
        assert_eq!(row_count_for(10, three), 4);
    }
}
