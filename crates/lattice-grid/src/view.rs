//! The dynamic grid: a width-adaptive grid over a sorted, filtered list.
//!
//! [`DynamicGrid`] owns the row set, the column count policy, the position
//! selection surface and the selection set, and keeps all of them in step
//! with a shared [`SortedFilteredList`].
//!
//! Source changes arrive through a channel fed by the list's `changes`
//! signal. Every grid operation drains that channel before doing anything
//! else, so a host may mutate the list from anywhere and the grid catches
//! up on its next call (or an explicit [`DynamicGrid::process_pending`]).
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use lattice_grid::{DynamicGrid, GridConfig, SortedFilteredList};
//!
//! let photos = Arc::new(SortedFilteredList::new(
//!     (0..10).map(|n| format!("photo-{n}.png")).collect(),
//! ));
//! let config = GridConfig::default()
//!     .with_cell_width(100.0)
//!     .with_available_width(320.0);
//! let mut grid = DynamicGrid::with_config(photos.clone(), config).unwrap();
//!
//! assert_eq!(grid.column_count(), 3);
//! assert_eq!(grid.row_count(), 4);
//! assert_eq!(grid.get(1, 1), Some("photo-4.png".to_string()));
//!
//! grid.select(4).unwrap();
//! photos.remove(0);
//! assert_eq!(grid.selected_index(), Some(3));
//! ```

use std::fmt;
use std::num::NonZeroUsize;
use std::sync::Arc;

use crossbeam_channel::Receiver;
use lattice_grid_core::logging::targets;
use lattice_grid_core::{ConnectionId, PerfSpan, Signal};

use crate::config::{GridConfig, SelectionMode};
use crate::error::{GridError, Result};
use crate::grid::{
    CellPosition, ColumnCountPolicy, GridColumn, GridModel, RowDelta, RowHandle, index_of,
    position_of, resize_column_defs,
};
use crate::selection::{CellSelection, CellSelectionChange, SelectionSet};
use crate::source::{LinearSource, SortedFilteredList, SourceChange};

/// Signals emitted by a [`DynamicGrid`].
pub struct GridSignals<T> {
    // -------------------------------------------------------------------------
    // Row set signals
    // -------------------------------------------------------------------------
    /// Emitted after rows were appended.
    /// Args: (first row, last row)
    pub rows_inserted: Signal<(usize, usize)>,

    /// Emitted after trailing rows were cleared and removed.
    /// Args: (first row, last row)
    pub rows_removed: Signal<(usize, usize)>,

    /// Emitted after rows were told to re-resolve their cells.
    /// Args: updated rows, ascending
    pub rows_updated: Signal<Vec<usize>>,

    /// Emitted when the column count is republished.
    pub column_count_changed: Signal<usize>,

    /// Emitted when the number of items in the projection changes.
    pub item_count_changed: Signal<usize>,

    // -------------------------------------------------------------------------
    // Selection signals
    // -------------------------------------------------------------------------
    /// Emitted when the selected flat indices change.
    /// Args: (selected, deselected)
    pub selection_changed: Signal<(Vec<usize>, Vec<usize>)>,

    /// Emitted when the current selected item changes.
    pub selected_item_changed: Signal<Option<T>>,
}

impl<T> GridSignals<T> {
    /// Creates a new set of grid signals.
    pub fn new() -> Self {
        Self {
            rows_inserted: Signal::new(),
            rows_removed: Signal::new(),
            rows_updated: Signal::new(),
            column_count_changed: Signal::new(),
            item_count_changed: Signal::new(),
            selection_changed: Signal::new(),
            selected_item_changed: Signal::new(),
        }
    }
}

impl<T> Default for GridSignals<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Selection state before an operation, for change notification.
struct SelectionSnapshot<T> {
    indices: Vec<usize>,
    current: Option<T>,
}

/// A grid that re-flows a linear list into as many columns as fit.
pub struct DynamicGrid<T: Clone + PartialEq + Send + Sync + 'static> {
    source: Arc<SortedFilteredList<T>>,
    events: Receiver<SourceChange<T>>,
    connection: ConnectionId,
    model: GridModel<T>,
    policy: ColumnCountPolicy,
    columns: Vec<GridColumn>,
    cells: CellSelection,
    selection: SelectionSet<T>,
    item_count: usize,
    restructuring: bool,
    signals: GridSignals<T>,
}

impl<T: Clone + PartialEq + Send + Sync + 'static> fmt::Debug for DynamicGrid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicGrid")
            .field("columns", &self.model.column_count())
            .field("rows", &self.model.row_count())
            .field("items", &self.item_count)
            .field("selected", &self.selection.len())
            .field("restructuring", &self.restructuring)
            .finish()
    }
}

impl<T: Clone + PartialEq + Send + Sync + 'static> DynamicGrid<T> {
    /// Creates a grid with the default configuration.
    ///
    /// The grid starts with one column until the layout reports a width via
    /// [`set_available_width`](Self::set_available_width).
    pub fn new(source: Arc<SortedFilteredList<T>>) -> Self {
        Self::build(source, SelectionMode::default(), ColumnCountPolicy::default())
    }

    /// Creates a grid from a configuration.
    pub fn with_config(source: Arc<SortedFilteredList<T>>, config: GridConfig) -> Result<Self> {
        config.validate()?;
        let policy = ColumnCountPolicy::new(
            config.cell_width,
            config.cell_width_scale,
            config.available_width,
        )?;
        Ok(Self::build(source, config.selection_mode, policy))
    }

    fn build(
        source: Arc<SortedFilteredList<T>>,
        mode: SelectionMode,
        policy: ColumnCountPolicy,
    ) -> Self {
        let (sender, events) = crossbeam_channel::unbounded();
        let connection = source.changes().connect(move |change: &SourceChange<T>| {
            // The grid disconnects before dropping the receiver.
            let _ = sender.send(change.clone());
        });

        let mut model = GridModel::new(policy.column_count());
        model.normalize_rows(&*source);
        let item_count = source.len();

        tracing::debug!(
            target: targets::MODEL,
            columns = policy.column_count().get(),
            rows = model.row_count(),
            items = item_count,
            "grid created"
        );

        Self {
            columns: policy.column_defs(),
            source,
            events,
            connection,
            model,
            policy,
            cells: CellSelection::new(mode),
            selection: SelectionSet::new(),
            item_count,
            restructuring: false,
            signals: GridSignals::new(),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The list this grid projects.
    pub fn source(&self) -> &Arc<SortedFilteredList<T>> {
        &self.source
    }

    /// The grid's signals.
    pub fn signals(&self) -> &GridSignals<T> {
        &self.signals
    }

    /// The position selection surface.
    ///
    /// Subscribe to its `changed` signal to follow cell-level selection,
    /// including cells that move when source changes shift the selection.
    pub fn cell_selection(&self) -> &CellSelection {
        &self.cells
    }

    /// The selection set.
    pub fn selection(&mut self) -> &SelectionSet<T> {
        self.process_pending();
        &self.selection
    }

    /// Current column count.
    pub fn column_count(&self) -> usize {
        self.model.column_count().get()
    }

    /// The column definitions, one per column.
    pub fn columns(&self) -> &[GridColumn] {
        &self.columns
    }

    /// Number of rows.
    pub fn row_count(&mut self) -> usize {
        self.process_pending();
        self.model.row_count()
    }

    /// Number of items in the projection.
    pub fn item_count(&mut self) -> usize {
        self.process_pending();
        self.item_count
    }

    /// The row handles, in row order.
    pub fn rows(&mut self) -> &[RowHandle<T>] {
        self.process_pending();
        self.model.rows()
    }

    /// The handle for row `index`.
    pub fn row(&mut self, index: usize) -> Option<&RowHandle<T>> {
        self.process_pending();
        self.model.row(index)
    }

    /// The item shown at `(row, column)`, if any.
    pub fn get(&mut self, row: usize, column: usize) -> Option<T> {
        self.process_pending();
        self.model.get(&*self.source, row, column)
    }

    /// The cell position of flat `index`.
    pub fn to_row_col(&self, index: usize) -> CellPosition {
        position_of(index, self.model.column_count())
    }

    /// The flat index of `cell`.
    pub fn to_index(&self, cell: CellPosition) -> usize {
        index_of(cell, self.model.column_count())
    }

    /// Returns `true` while the column count is being applied.
    pub fn is_restructuring(&self) -> bool {
        self.restructuring
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// The width last reported by the layout.
    pub fn available_width(&self) -> f64 {
        self.policy.available_width()
    }

    /// The requested cell width, before scaling.
    pub fn cell_width(&self) -> f64 {
        self.policy.cell_width()
    }

    /// The cell width multiplier.
    pub fn cell_width_scale(&self) -> f64 {
        self.policy.scale()
    }

    /// Reports the width available to the grid.
    pub fn set_available_width(&mut self, width: f64) {
        self.process_pending();
        if let Some(columns) = self.policy.set_available_width(width) {
            self.restructure(columns);
        }
    }

    /// Sets the requested cell width.
    pub fn set_cell_width(&mut self, width: f64) -> Result<()> {
        self.process_pending();
        let changed = self.policy.set_cell_width(width)?;
        self.apply_cell_width(changed);
        Ok(())
    }

    /// Sets the cell width multiplier.
    pub fn set_cell_width_scale(&mut self, scale: f64) -> Result<()> {
        self.process_pending();
        let changed = self.policy.set_scale(scale)?;
        self.apply_cell_width(changed);
        Ok(())
    }

    fn apply_cell_width(&mut self, changed: Option<NonZeroUsize>) {
        match changed {
            Some(columns) => self.restructure(columns),
            None => {
                let _perf = PerfSpan::new("refresh_rows");
                resize_column_defs(
                    &mut self.columns,
                    self.model.column_count(),
                    self.policy.effective_cell_width(),
                );
                let updated = self.model.update_all(&*self.source);
                self.emit_rows_updated(updated.collect());
            }
        }
    }

    /// Applies a new column count.
    fn restructure(&mut self, columns: NonZeroUsize) {
        let _perf = PerfSpan::new("restructure_columns");
        self.restructuring = true;

        if !self.selection.is_empty() {
            tracing::debug!(
                target: targets::SELECTION,
                selected = self.selection.len(),
                "column count changed, clearing selection"
            );
        }
        self.clear_selection_inner();

        let (added, removed) = resize_column_defs(
            &mut self.columns,
            columns,
            self.policy.effective_cell_width(),
        );
        self.model.set_column_count(columns);
        // An unchanged row count already updated every row.
        let delta = self.model.normalize_rows(&*self.source);
        let updated = if delta.is_structural() {
            self.model.update_all(&*self.source).collect()
        } else {
            Vec::new()
        };

        self.restructuring = false;

        tracing::debug!(
            target: targets::COLUMNS,
            columns = columns.get(),
            added,
            removed,
            rows = self.model.row_count(),
            "grid restructured"
        );
        self.signals.column_count_changed.emit(columns.get());
        self.emit_row_delta(delta);
        self.emit_rows_updated(updated);
    }

    // =========================================================================
    // Source changes
    // =========================================================================

    /// Reconciles every source change received since the last call.
    ///
    /// Returns the number of changes processed.
    pub fn process_pending(&mut self) -> usize {
        let batch: Vec<SourceChange<T>> = self.events.try_iter().collect();
        if batch.is_empty() {
            return 0;
        }

        let before = self.snapshot();
        let count = batch.len();
        // Index arithmetic cannot be replayed across a re-sort or re-filter.
        if batch.iter().any(SourceChange::is_full_refresh) {
            self.full_refresh();
        } else {
            for change in batch {
                self.apply_change(change);
            }
        }

        let source = &self.source;
        self.selection.refresh_items(|index| source.get(index));
        let columns = self.model.column_count();
        // Renderers follow the moved cells; the set is already reconciled.
        self.cells.mirror(
            self.selection
                .indices()
                .iter()
                .map(|&index| position_of(index, columns)),
        );
        self.emit_selection_diff(before);

        let item_count = self.source.len();
        if item_count != self.item_count {
            self.item_count = item_count;
            self.signals.item_count_changed.emit(item_count);
        }
        count
    }

    /// Runs `f` against the source and reconciles the changes it made.
    pub fn update_items<R>(&mut self, f: impl FnOnce(&SortedFilteredList<T>) -> R) -> R {
        self.process_pending();
        let result = f(&self.source);
        self.process_pending();
        result
    }

    fn apply_change(&mut self, change: SourceChange<T>) {
        match change {
            SourceChange::Inserted { range } => {
                let len = range.len();
                self.selection.reanchor(|_, index| {
                    Some(if index >= range.start { index + len } else { index })
                });
                self.resize_rows(range.start);
            }
            SourceChange::Removed { range, .. } => {
                let len = range.len();
                self.selection.reanchor(|_, index| {
                    if range.contains(&index) {
                        None
                    } else if index >= range.end {
                        Some(index - len)
                    } else {
                        Some(index)
                    }
                });
                self.resize_rows(range.start);
            }
            SourceChange::Permuted { range, permutation } => {
                self.selection.reanchor(|_, index| {
                    if range.contains(&index) {
                        permutation
                            .as_slice()
                            .get(index - range.start)
                            .copied()
                            .or(Some(index))
                    } else {
                        Some(index)
                    }
                });
                self.update_rows_in(range.start, range.end);
            }
            SourceChange::Updated { range } => self.update_rows_in(range.start, range.end),
            SourceChange::ComparatorChanged | SourceChange::PredicateChanged => self.full_refresh(),
        }
    }

    /// Rebuilds the row set after the item count may have changed at
    /// flat index `start`.
    fn resize_rows(&mut self, start: usize) {
        if self.restructuring {
            tracing::trace!(target: targets::MODEL, start, "restructuring, row resize skipped");
            return;
        }
        let delta = self.model.normalize_rows(&*self.source);
        self.emit_row_delta(delta);
        if delta.is_structural() {
            let updated = self.model.update_rows_from(&*self.source, start);
            self.emit_rows_updated(updated.collect());
        }
    }

    fn update_rows_in(&mut self, start: usize, end: usize) {
        if self.restructuring {
            tracing::trace!(target: targets::MODEL, start, end, "restructuring, row update skipped");
            return;
        }
        let indices = (start..end).collect();
        let updated = self.model.update_rows_containing(&*self.source, &indices);
        self.emit_rows_updated(updated);
    }

    /// Re-anchors the selection by identity and refreshes every row.
    fn full_refresh(&mut self) {
        let _perf = PerfSpan::new("full_refresh");

        let projection = self.source.items();
        let mut claimed = vec![false; projection.len()];
        self.selection.reanchor(|item, _| {
            let index = (0..projection.len()).find(|&i| !claimed[i] && projection[i] == *item)?;
            claimed[index] = true;
            Some(index)
        });

        if self.restructuring {
            tracing::trace!(target: targets::MODEL, "restructuring, full refresh skipped");
            return;
        }
        let delta = self.model.normalize_rows(&*self.source);
        self.emit_row_delta(delta);
        if delta.is_structural() {
            let updated = self.model.update_all(&*self.source);
            self.emit_rows_updated(updated.collect());
        }
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Gets the selection mode.
    pub fn selection_mode(&self) -> SelectionMode {
        self.cells.mode()
    }

    /// Sets the selection mode.
    pub fn set_selection_mode(&mut self, mode: SelectionMode) {
        self.process_pending();
        let change = self.cells.set_mode(mode);
        self.apply_cell_change(change, None);
    }

    /// Selects the item at flat `index`, making it current.
    pub fn select(&mut self, index: usize) -> Result<()> {
        self.process_pending();
        self.checked_cell(index)?;
        self.focus(index);
        Ok(())
    }

    /// Selects `item`, which must be in the current projection.
    pub fn select_item(&mut self, item: &T) -> Result<()> {
        self.process_pending();
        let index = self.source.position_of(item).ok_or(GridError::ItemNotFound)?;
        self.select(index)
    }

    /// Selects the item shown at `cell`.
    pub fn select_cell(&mut self, cell: CellPosition) -> Result<()> {
        self.process_pending();
        let index = self.checked_index(cell)?;
        self.select(index)
    }

    /// Deselects `cell`. Deselecting an unselected cell does nothing.
    pub fn deselect_cell(&mut self, cell: CellPosition) {
        self.process_pending();
        let change = self.cells.deselect(cell);
        self.apply_cell_change(change, None);
    }

    /// Toggles the selection of the item shown at `cell`.
    pub fn toggle_cell(&mut self, cell: CellPosition) -> Result<()> {
        self.process_pending();
        let index = self.checked_index(cell)?;
        let change = self.cells.toggle(cell);
        let focus = self.cells.is_selected(cell).then_some(index);
        self.apply_cell_change(change, focus);
        Ok(())
    }

    /// Clears the selection and selects flat `index`.
    pub fn clear_and_select(&mut self, index: usize) -> Result<()> {
        self.process_pending();
        let cell = self.checked_cell(index)?;
        let change = self.cells.clear_and_select(cell);
        self.apply_cell_change(change, Some(index));
        Ok(())
    }

    /// Selects every listed flat index; the last one becomes current.
    ///
    /// Nothing is selected if any index is out of range.
    pub fn select_indices(&mut self, indices: &[usize]) -> Result<()> {
        self.process_pending();
        let cells = indices
            .iter()
            .map(|&index| self.checked_cell(index))
            .collect::<Result<Vec<_>>>()?;
        let change = self.cells.select_many(cells);
        let focus = self.cells.last().map(|cell| self.to_index(cell));
        self.apply_cell_change(change, focus);
        Ok(())
    }

    /// Selects every item. Does nothing in single selection mode.
    pub fn select_all(&mut self) {
        self.process_pending();
        if self.cells.mode() == SelectionMode::Single {
            tracing::trace!(target: targets::SELECTION, "select all ignored in single mode");
            return;
        }
        let change = self.cells.select_all(self.item_count, self.model.column_count());
        self.apply_cell_change(change, None);
    }

    /// Selects the item before the current one, which becomes current.
    ///
    /// In multiple selection mode the rest of the selection is kept. With
    /// nothing selected the first item is selected. Does nothing on the
    /// first item or when the grid is empty.
    pub fn select_previous(&mut self) {
        self.process_pending();
        if self.item_count == 0 {
            return;
        }
        match self.selection.current_index() {
            None => self.focus(0),
            Some(0) => {}
            Some(index) => self.focus(index - 1),
        }
    }

    /// Selects the item after the current one, which becomes current.
    ///
    /// With nothing selected the first item is selected. Does nothing on
    /// the last item or when the grid is empty.
    pub fn select_next(&mut self) {
        self.process_pending();
        if self.item_count == 0 {
            return;
        }
        match self.selection.current_index() {
            None => self.focus(0),
            Some(index) if index + 1 >= self.item_count => {}
            Some(index) => self.focus(index + 1),
        }
    }

    /// Selects the first item and makes it current.
    pub fn select_first(&mut self) {
        self.process_pending();
        if self.item_count > 0 {
            self.focus(0);
        }
    }

    /// Selects the last item and makes it current.
    pub fn select_last(&mut self) {
        self.process_pending();
        if let Some(last) = self.item_count.checked_sub(1) {
            self.focus(last);
        }
    }

    /// Clears the whole selection.
    pub fn clear_selection(&mut self) {
        self.process_pending();
        self.clear_selection_inner();
    }

    /// Deselects the item at flat `index`.
    pub fn clear_selection_at(&mut self, index: usize) {
        self.process_pending();
        let cell = self.to_row_col(index);
        let change = self.cells.deselect(cell);
        self.apply_cell_change(change, None);
    }

    /// Checks if the item at flat `index` is selected.
    pub fn is_selected(&mut self, index: usize) -> bool {
        self.process_pending();
        self.selection.contains_index(index)
    }

    /// Returns `true` if nothing is selected.
    pub fn is_selection_empty(&mut self) -> bool {
        self.process_pending();
        self.selection.is_empty()
    }

    /// The current selected item.
    pub fn selected_item(&mut self) -> Option<T> {
        self.process_pending();
        self.selection.current_item().cloned()
    }

    /// Flat index of the current selected item.
    pub fn selected_index(&mut self) -> Option<usize> {
        self.process_pending();
        self.selection.current_index()
    }

    /// Every selected item, in selection order.
    pub fn selected_items(&mut self) -> Vec<T> {
        self.process_pending();
        self.selection.items().to_vec()
    }

    /// Flat indices of every selected item, in selection order.
    pub fn selected_indices(&mut self) -> Vec<usize> {
        self.process_pending();
        self.selection.indices().to_vec()
    }

    /// Number of selected items.
    pub fn selected_count(&mut self) -> usize {
        self.process_pending();
        self.selection.len()
    }

    /// Selected cell positions, in selection order.
    pub fn selected_cells(&mut self) -> Vec<CellPosition> {
        self.process_pending();
        self.cells.cells().to_vec()
    }

    /// Selects `index`, which must be in range, and makes it current.
    fn focus(&mut self, index: usize) {
        let cell = self.to_row_col(index);
        let change = self.cells.select(cell);
        self.apply_cell_change(change, Some(index));
    }

    fn clear_selection_inner(&mut self) {
        let before = self.snapshot();
        let change = self.cells.clear();
        let removed = self.resolve_cells(&change.removed);
        self.selection.apply_removed(&removed);
        // Cells that no longer resolve still leave the set.
        self.selection.clear();
        self.emit_selection_diff(before);
    }

    fn checked_cell(&self, index: usize) -> Result<CellPosition> {
        let len = self.source.len();
        if index >= len {
            return Err(GridError::IndexOutOfRange { index, len });
        }
        Ok(self.to_row_col(index))
    }

    fn checked_index(&self, cell: CellPosition) -> Result<usize> {
        let columns = self.column_count();
        let index = cell.row.saturating_mul(columns).saturating_add(cell.column);
        let len = self.source.len();
        if cell.column >= columns || index >= len {
            return Err(GridError::IndexOutOfRange { index, len });
        }
        Ok(index)
    }

    /// Feeds a batch from the position surface to the selection set.
    fn apply_cell_change(&mut self, change: CellSelectionChange, focus: Option<usize>) {
        let before = self.snapshot();
        let removed = self.resolve_cells(&change.removed);
        let added = self.resolve_cells(&change.added);
        self.selection.apply_removed(&removed);
        self.selection.apply_added(&added);
        if let Some(index) = focus {
            self.selection.promote(index);
        }
        self.emit_selection_diff(before);
    }

    fn resolve_cells(&self, cells: &[CellPosition]) -> Vec<(T, usize)> {
        let columns = self.model.column_count();
        cells
            .iter()
            .filter_map(|&cell| {
                let index = index_of(cell, columns);
                let item = self.source.get(index);
                if item.is_none() {
                    tracing::trace!(target: targets::SELECTION, %cell, index, "stale cell position");
                }
                item.map(|item| (item, index))
            })
            .collect()
    }

    // =========================================================================
    // Notification
    // =========================================================================

    fn snapshot(&self) -> SelectionSnapshot<T> {
        SelectionSnapshot {
            indices: self.selection.indices().to_vec(),
            current: self.selection.current_item().cloned(),
        }
    }

    fn emit_selection_diff(&self, before: SelectionSnapshot<T>) {
        let selected: Vec<usize> = self
            .selection
            .indices()
            .iter()
            .copied()
            .filter(|index| !before.indices.contains(index))
            .collect();
        let deselected: Vec<usize> = before
            .indices
            .iter()
            .copied()
            .filter(|&index| !self.selection.contains_index(index))
            .collect();
        if !selected.is_empty() || !deselected.is_empty() {
            tracing::trace!(
                target: targets::SELECTION,
                selected = selected.len(),
                deselected = deselected.len(),
                "selection changed"
            );
            self.signals.selection_changed.emit((selected, deselected));
        }

        let current = self.selection.current_item().cloned();
        if current != before.current {
            self.signals.selected_item_changed.emit(current);
        }
    }

    fn emit_row_delta(&self, delta: RowDelta) {
        match delta {
            RowDelta::Grew { from, to } => self.signals.rows_inserted.emit((from, to - 1)),
            RowDelta::Shrunk { from, to } => self.signals.rows_removed.emit((to, from - 1)),
            RowDelta::Unchanged => self.emit_rows_updated((0..self.model.row_count()).collect()),
        }
    }

    fn emit_rows_updated(&self, rows: Vec<usize>) {
        if !rows.is_empty() {
            tracing::trace!(target: targets::MODEL, rows = rows.len(), "rows updated");
            self.signals.rows_updated.emit(rows);
        }
    }
}

impl<T: Clone + PartialEq + Send + Sync + 'static> Drop for DynamicGrid<T> {
    fn drop(&mut self) {
        self.source.changes().disconnect(self.connection);
    }
}
