//! Lattice Grid - a width-adaptive grid engine.
//!
//! Lattice Grid re-flows a one-dimensional list of items into as many
//! columns as fit the available width, and tracks selection by item
//! identity so it survives insertions, removals, re-sorts, re-filters and
//! column count changes.
//!
//! The main entry point is [`DynamicGrid`], which owns:
//!
//! - the row set ([`GridModel`] of [`RowHandle`]s),
//! - the [`ColumnCountPolicy`] and the [`GridColumn`] definitions,
//! - the position selection surface ([`CellSelection`]),
//! - the item [`SelectionSet`].
//!
//! Items come from a shared [`SortedFilteredList`], which reports every
//! change to its projection as a [`SourceChange`].
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use lattice_grid::{DynamicGrid, GridConfig, SortedFilteredList};
//!
//! let items = Arc::new(SortedFilteredList::new(
//!     ('a'..='j').collect::<Vec<char>>(),
//! ));
//! let mut grid = DynamicGrid::with_config(
//!     items,
//!     GridConfig::default().with_cell_width(100.0),
//! )
//! .unwrap();
//!
//! grid.select_item(&'e').unwrap();
//! grid.select_next();
//! assert_eq!(grid.selected_item(), Some('f'));
//! ```

pub mod config;
pub mod error;
pub mod grid;
pub mod selection;
pub mod source;
pub mod view;

pub use lattice_grid_core::{ConnectionGuard, ConnectionId, PerfSpan, Signal};

pub use config::{GridConfig, SelectionMode};
pub use error::{GridError, Result};
pub use grid::{
    CellPosition, CellSlot, ColumnCountPolicy, GridColumn, GridModel, RowDelta, RowHandle,
    desired_column_count, row_count_for, to_index, to_row_col,
};
pub use selection::{CellSelection, CellSelectionChange, SelectionSet};
pub use source::{LinearSource, SortedFilteredList, SourceChange};
pub use view::{DynamicGrid, GridSignals};
