//! The position selection surface.
//!
//! [`CellSelection`] is what a rendering layer clicks on: an ordered set of
//! selected [`CellPosition`]s. It knows nothing about items. Every mutation
//! returns the batch of cells it added and removed, which the grid hands to
//! the [`SelectionSet`](super::SelectionSet) reconciler.
//!
//! # Example
//!
//! ```
//! use lattice_grid::{CellPosition, CellSelection, SelectionMode};
//!
//! let mut cells = CellSelection::new(SelectionMode::Multiple);
//! cells.changed.connect(|change| {
//!     println!("+{} -{}", change.added.len(), change.removed.len());
//! });
//!
//! cells.select(CellPosition::new(0, 1));
//! cells.toggle(CellPosition::new(2, 0));
//! assert_eq!(cells.len(), 2);
//! ```

use std::collections::HashSet;
use std::num::NonZeroUsize;

use lattice_grid_core::Signal;
use lattice_grid_core::logging::targets;

use crate::config::SelectionMode;
use crate::grid::{CellPosition, position_of};

/// Cells added to and removed from a [`CellSelection`] by one operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellSelectionChange {
    /// Newly selected cells, in selection order.
    pub added: Vec<CellPosition>,
    /// Newly deselected cells, in their former selection order.
    pub removed: Vec<CellPosition>,
}

impl CellSelectionChange {
    /// Returns `true` if nothing was added or removed.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// An ordered set of selected cell positions.
///
/// # Signals
///
/// - `changed`: emitted after every mutation that added or removed cells
pub struct CellSelection {
    mode: SelectionMode,

    /// Set of selected cells for O(1) lookup.
    selected: HashSet<CellPosition>,

    /// Selected cells in selection order.
    order: Vec<CellPosition>,

    /// Emitted when cells are selected or deselected.
    pub changed: Signal<CellSelectionChange>,
}

impl std::fmt::Debug for CellSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CellSelection")
            .field("mode", &self.mode)
            .field("cells", &self.order)
            .finish()
    }
}

impl Default for CellSelection {
    fn default() -> Self {
        Self::new(SelectionMode::default())
    }
}

impl CellSelection {
    /// Creates an empty selection.
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            selected: HashSet::new(),
            order: Vec::new(),
            changed: Signal::new(),
        }
    }

    // =========================================================================
    // Mode
    // =========================================================================

    /// Gets the selection mode.
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Sets the selection mode.
    ///
    /// Switching to [`SelectionMode::Single`] keeps only the most recently
    /// selected cell.
    pub fn set_mode(&mut self, mode: SelectionMode) -> CellSelectionChange {
        self.mode = mode;
        let mut change = CellSelectionChange::default();
        if mode == SelectionMode::Single && self.order.len() > 1 {
            let keep = self.order.len() - 1;
            change.removed = self.order.drain(..keep).collect();
            for cell in &change.removed {
                self.selected.remove(cell);
            }
        }
        self.finish(change)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Checks if a cell is selected.
    pub fn is_selected(&self, cell: CellPosition) -> bool {
        self.selected.contains(&cell)
    }

    /// Selected cells in selection order.
    pub fn cells(&self) -> &[CellPosition] {
        &self.order
    }

    /// The most recently selected cell.
    ///
    /// Selecting a cell that is already selected makes it the last one
    /// again, without reporting a change.
    pub fn last(&self) -> Option<CellPosition> {
        self.order.last().copied()
    }

    /// Number of selected cells.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if no cell is selected.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Selects a cell. In single mode the previous selection is cleared.
    pub fn select(&mut self, cell: CellPosition) -> CellSelectionChange {
        let mut change = CellSelectionChange::default();
        if self.mode == SelectionMode::Single {
            self.take_all_except(cell, &mut change);
        }
        self.add(cell, &mut change);
        self.finish(change)
    }

    /// Clears the selection and selects `cell`, as one change.
    pub fn clear_and_select(&mut self, cell: CellPosition) -> CellSelectionChange {
        let mut change = CellSelectionChange::default();
        self.take_all_except(cell, &mut change);
        self.add(cell, &mut change);
        self.finish(change)
    }

    /// Selects several cells. In single mode only the last one stays.
    pub fn select_many<I>(&mut self, cells: I) -> CellSelectionChange
    where
        I: IntoIterator<Item = CellPosition>,
    {
        let mut change = CellSelectionChange::default();
        match self.mode {
            SelectionMode::Single => {
                if let Some(cell) = cells.into_iter().last() {
                    self.take_all_except(cell, &mut change);
                    self.add(cell, &mut change);
                }
            }
            SelectionMode::Multiple => {
                for cell in cells {
                    self.add(cell, &mut change);
                }
            }
        }
        self.finish(change)
    }

    /// Selects every occupied cell of a grid showing `len` items in
    /// `columns` columns, in row-major order.
    ///
    /// Empty cells on a partially filled last row stay unselected.
    pub fn select_all(&mut self, len: usize, columns: NonZeroUsize) -> CellSelectionChange {
        self.select_many((0..len).map(|index| position_of(index, columns)))
    }

    /// Deselects a cell.
    pub fn deselect(&mut self, cell: CellPosition) -> CellSelectionChange {
        let mut change = CellSelectionChange::default();
        if self.selected.remove(&cell) {
            self.order.retain(|selected| *selected != cell);
            change.removed.push(cell);
        }
        self.finish(change)
    }

    /// Toggles a cell.
    pub fn toggle(&mut self, cell: CellPosition) -> CellSelectionChange {
        if self.is_selected(cell) {
            self.deselect(cell)
        } else {
            self.select(cell)
        }
    }

    /// Deselects every cell.
    pub fn clear(&mut self) -> CellSelectionChange {
        let change = CellSelectionChange {
            added: Vec::new(),
            removed: std::mem::take(&mut self.order),
        };
        self.selected.clear();
        self.finish(change)
    }

    /// Rewrites the selection to `cells`, in order, ignoring the mode.
    ///
    /// Used to follow a selection that was re-anchored elsewhere. The
    /// returned change lists the cells that moved and is emitted on
    /// `changed` like any other.
    pub(crate) fn mirror(
        &mut self,
        cells: impl IntoIterator<Item = CellPosition>,
    ) -> CellSelectionChange {
        let previous = std::mem::take(&mut self.order);
        let previous_set = std::mem::take(&mut self.selected);
        for cell in cells {
            if self.selected.insert(cell) {
                self.order.push(cell);
            }
        }

        let change = CellSelectionChange {
            added: self
                .order
                .iter()
                .copied()
                .filter(|cell| !previous_set.contains(cell))
                .collect(),
            removed: previous
                .into_iter()
                .filter(|cell| !self.selected.contains(cell))
                .collect(),
        };
        self.finish(change)
    }

    fn add(&mut self, cell: CellPosition, change: &mut CellSelectionChange) {
        if self.selected.insert(cell) {
            self.order.push(cell);
            change.added.push(cell);
        } else if self.order.last() != Some(&cell) {
            self.order.retain(|selected| *selected != cell);
            self.order.push(cell);
        }
    }

    fn take_all_except(&mut self, keep: CellPosition, change: &mut CellSelectionChange) {
        let kept = self.selected.contains(&keep);
        change
            .removed
            .extend(self.order.iter().copied().filter(|cell| *cell != keep));
        self.order.clear();
        self.selected.clear();
        if kept {
            self.selected.insert(keep);
            self.order.push(keep);
        }
    }

    fn finish(&self, change: CellSelectionChange) -> CellSelectionChange {
        if !change.is_empty() {
            tracing::trace!(
                target: targets::SELECTION,
                added = change.added.len(),
                removed = change.removed.len(),
                "cell selection changed"
            );
            self.changed.emit(change.clone());
        }
        change
    }
}
