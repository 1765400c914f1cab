//! Row handles: one per grid row, with a lazily filled, versioned cell cache.

use std::collections::HashMap;
use std::num::NonZeroUsize;

/// A cached cell value.
#[derive(Debug, Clone, PartialEq)]
pub struct CellSlot<T> {
    value: Option<T>,
    generation: u64,
}

impl<T> CellSlot<T> {
    /// The cached value, `None` when the cell maps past the end of the source.
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Bumped every time the cached value changes.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// The per-row object the grid hands to a rendering layer.
///
/// A handle is tagged with its row index at creation and never re-tagged.
/// Cell values are resolved on first access and kept until the next
/// [`update`](Self::update). The row [`generation`](Self::generation) is
/// bumped on every update or clear, so a renderer can compare it against
/// the generation it last drew to detect staleness.
#[derive(Debug, Clone)]
pub struct RowHandle<T> {
    index: usize,
    generation: u64,
    cells: HashMap<usize, CellSlot<T>>,
    cleared: bool,
}

impl<T: Clone + PartialEq> RowHandle<T> {
    /// Creates an empty handle for row `index`.
    pub fn new(index: usize) -> Self {
        Self {
            index,
            generation: 0,
            cells: HashMap::new(),
            cleared: false,
        }
    }

    /// The row index this handle was created for.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Current generation of the row.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns `true` once the handle has been cleared by a shrinking row set.
    pub fn is_cleared(&self) -> bool {
        self.cleared
    }

    /// Number of columns with a cached slot.
    pub fn cached_cells(&self) -> usize {
        self.cells.len()
    }

    /// The cached slot for `column`, without resolving it.
    pub fn slot(&self, column: usize) -> Option<&CellSlot<T>> {
        self.cells.get(&column)
    }

    /// The value of the cell at `column`, resolving it with `resolve` on
    /// first access.
    pub fn cell(&mut self, column: usize, resolve: impl FnOnce() -> Option<T>) -> Option<T> {
        let generation = self.generation;
        self.cells
            .entry(column)
            .or_insert_with(|| CellSlot {
                value: resolve(),
                generation,
            })
            .value
            .clone()
    }

    /// Re-resolves every cached cell.
    ///
    /// `resolve` receives a column and returns the value now at that cell.
    /// Cached cells at columns `>= columns` are dropped. A slot's generation
    /// only moves when its value actually changed. Returns the number of
    /// cells whose value changed.
    pub fn update(
        &mut self,
        columns: NonZeroUsize,
        mut resolve: impl FnMut(usize) -> Option<T>,
    ) -> usize {
        self.generation += 1;
        self.cleared = false;
        self.cells.retain(|&column, _| column < columns.get());

        let mut changed = 0;
        for (&column, slot) in self.cells.iter_mut() {
            let value = resolve(column);
            if slot.value != value {
                slot.value = value;
                slot.generation = self.generation;
                changed += 1;
            }
        }
        changed
    }

    /// Drops every cached cell and marks the handle cleared.
    pub fn clear(&mut self) {
        self.cells.clear();
        self.generation += 1;
        self.cleared = true;
    }
}
