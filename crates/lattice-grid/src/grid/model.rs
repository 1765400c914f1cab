//! The grid projection model: the row set over a linear source.
//!
//! [`GridModel`] owns one [`RowHandle`] per grid row. It never holds the
//! source; every operation takes the [`LinearSource`] it should read, so the
//! model can be driven by a plain slice in tests and by a
//! [`SortedFilteredList`](crate::source::SortedFilteredList) in the grid.

use std::collections::BTreeSet;
use std::num::NonZeroUsize;
use std::ops::Range;

use lattice_grid_core::logging::targets;

use super::index::{CellPosition, index_of, row_count_for};
use super::row::RowHandle;
use crate::source::LinearSource;

/// How [`GridModel::normalize_rows`] changed the row set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowDelta {
    /// Rows `from..to` were appended.
    Grew { from: usize, to: usize },
    /// Rows `to..from` were cleared and removed.
    Shrunk { from: usize, to: usize },
    /// The row count already matched; every row was updated.
    Unchanged,
}

impl RowDelta {
    /// Returns `true` if rows were added or removed.
    pub fn is_structural(&self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

/// The row set of the grid.
#[derive(Debug, Clone)]
pub struct GridModel<T> {
    rows: Vec<RowHandle<T>>,
    columns: NonZeroUsize,
}

impl<T: Clone + PartialEq> GridModel<T> {
    /// Creates an empty model with `columns` columns.
    ///
    /// Call [`normalize_rows`](Self::normalize_rows) to build the row set.
    pub fn new(columns: NonZeroUsize) -> Self {
        Self {
            rows: Vec::new(),
            columns,
        }
    }

    /// Current column count.
    pub fn column_count(&self) -> NonZeroUsize {
        self.columns
    }

    /// Number of rows in the row set.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// The row handles, in row order.
    pub fn rows(&self) -> &[RowHandle<T>] {
        &self.rows
    }

    /// The handle for row `index`.
    pub fn row(&self, index: usize) -> Option<&RowHandle<T>> {
        self.rows.as_slice().get(index)
    }

    /// Changes the column count.
    ///
    /// The row set is left as is; callers normalize and update afterwards.
    pub fn set_column_count(&mut self, columns: NonZeroUsize) {
        self.columns = columns;
    }

    /// The item shown at `(row, column)`.
    ///
    /// Positions past the last column or mapping past the end of the source
    /// are `None`. Values are cached in the row handle on first access.
    pub fn get<S>(&mut self, source: &S, row: usize, column: usize) -> Option<T>
    where
        S: LinearSource<T> + ?Sized,
    {
        if column >= self.columns.get() {
            return None;
        }
        let index = index_of(CellPosition::new(row, column), self.columns);
        if index >= source.len() {
            tracing::trace!(target: targets::MODEL, row, column, index, "cell maps past the source");
            return None;
        }

        match self.rows.get_mut(row) {
            Some(handle) => handle.cell(column, || source.get(index)),
            None => source.get(index),
        }
    }

    /// Reconciles the row set with `ceil(len / columns)`.
    ///
    /// Surplus trailing rows are cleared and removed, missing rows are
    /// appended tagged with their index. If the count already matches,
    /// every row is updated instead.
    pub fn normalize_rows<S>(&mut self, source: &S) -> RowDelta
    where
        S: LinearSource<T> + ?Sized,
    {
        let current = self.rows.len();
        let desired = row_count_for(source.len(), self.columns);

        if desired < current {
            for handle in &mut self.rows[desired..] {
                handle.clear();
            }
            self.rows.truncate(desired);
            tracing::debug!(target: targets::MODEL, from = current, to = desired, "row set shrank");
            RowDelta::Shrunk {
                from: current,
                to: desired,
            }
        } else if desired > current {
            self.rows.extend((current..desired).map(RowHandle::new));
            tracing::debug!(target: targets::MODEL, from = current, to = desired, "row set grew");
            RowDelta::Grew {
                from: current,
                to: desired,
            }
        } else {
            self.update_all(source);
            RowDelta::Unchanged
        }
    }

    /// Updates every row containing one of the flat `indices`.
    ///
    /// Each affected row is updated once. Returns the updated rows.
    pub fn update_rows_containing<S>(&mut self, source: &S, indices: &BTreeSet<usize>) -> Vec<usize>
    where
        S: LinearSource<T> + ?Sized,
    {
        let columns = self.columns.get();
        let rows: BTreeSet<usize> = indices
            .iter()
            .map(|index| index / columns)
            .filter(|&row| row < self.rows.len())
            .collect();

        for &row in &rows {
            self.update_row(source, row);
        }
        rows.into_iter().collect()
    }

    /// Updates every row from the one containing flat `index` to the last.
    ///
    /// Returns the updated row range, empty if `index` lies past the row set.
    pub fn update_rows_from<S>(&mut self, source: &S, index: usize) -> Range<usize>
    where
        S: LinearSource<T> + ?Sized,
    {
        let start = (index / self.columns.get()).min(self.rows.len());
        let rows = start..self.rows.len();
        for row in rows.clone() {
            self.update_row(source, row);
        }
        rows
    }

    /// Updates every row.
    pub fn update_all<S>(&mut self, source: &S) -> Range<usize>
    where
        S: LinearSource<T> + ?Sized,
    {
        self.update_rows_from(source, 0)
    }

    fn update_row<S>(&mut self, source: &S, row: usize)
    where
        S: LinearSource<T> + ?Sized,
    {
        let columns = self.columns;
        let changed = self.rows[row].update(columns, |column| {
            source.get(index_of(CellPosition::new(row, column), columns))
        });
        tracing::trace!(target: targets::MODEL, row, changed, "row updated");
    }
}
