//! Selection: the position surface and the item selection set behind it.
//!
//! A rendering layer selects cells on [`CellSelection`]. The grid resolves
//! each batch of added and removed cells to items and applies it to the
//! [`SelectionSet`], which tracks the selection by item identity so it
//! survives insertions, removals and re-sorts of the source.

mod cells;
mod reconciler;

pub use cells::{CellSelection, CellSelectionChange};
pub use reconciler::SelectionSet;
