//! Grid projection: index mapping, row handles, the row set and the column
//! count policy.

mod columns;
mod index;
mod model;
mod row;

pub use columns::{ColumnCountPolicy, DEFAULT_CELL_WIDTH, GridColumn, desired_column_count};
pub(crate) use columns::{resize_column_defs, validate_cell_width};
pub use index::{CellPosition, row_count_for, to_index, to_row_col};
pub(crate) use index::{index_of, position_of};
pub use model::{GridModel, RowDelta};
pub use row::{CellSlot, RowHandle};
