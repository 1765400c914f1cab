//! The linear source the grid projects.
//!
//! The grid engine reads items through [`LinearSource`] and learns about
//! mutations through [`SourceChange`] events. [`SortedFilteredList`] is the
//! stock implementation: a mutable list with an optional filter predicate
//! and sort comparator, which reports every change to its projection on a
//! [`Signal`].
//!
//! # Example
//!
//! ```
//! use lattice_grid::source::{LinearSource, SortedFilteredList};
//!
//! let photos = SortedFilteredList::new(vec!["c.png", "a.png", "b.jpg"])
//!     .with_filter(|name| name.ends_with(".png"))
//!     .with_comparator(|a, b| a.cmp(b));
//!
//! assert_eq!(photos.len(), 2);
//! assert_eq!(photos.get(0), Some("a.png"));
//!
//! photos.changes().connect(|change| println!("{:?}", change));
//! photos.push("0.png"); // prints Inserted { range: 0..1 }
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::ops::Range;
use std::sync::Arc;

use lattice_grid_core::Signal;
use lattice_grid_core::logging::targets;
use parking_lot::RwLock;

/// Read access to an ordered sequence of items.
///
/// Indices are flat indices into the current projection.
pub trait LinearSource<T> {
    /// Number of items in the projection.
    fn len(&self) -> usize;

    /// The item at `index`, or `None` past the end.
    fn get(&self, index: usize) -> Option<T>;

    /// Returns `true` if the projection holds no items.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flat index of the first item equal to `item`.
    fn position_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        (0..self.len()).find(|&index| self.get(index).as_ref() == Some(item))
    }
}

impl<T: Clone> LinearSource<T> for [T] {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn get(&self, index: usize) -> Option<T> {
        <[T]>::get(self, index).cloned()
    }

    fn position_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|candidate| candidate == item)
    }
}

/// A change to a linear source's projection.
///
/// Ranges are flat index ranges in the projection, as it is after the change
/// for insertions, updates and permutations, and as it was before the change
/// for removals.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceChange<T> {
    /// Items were inserted at `range`.
    Inserted {
        /// Flat indices of the new items.
        range: Range<usize>,
    },
    /// Items previously at `range` were removed.
    Removed {
        /// Flat indices the items occupied.
        range: Range<usize>,
        /// The removed items, in order.
        items: Vec<T>,
    },
    /// Items within `range` were reordered.
    Permuted {
        /// The reordered range.
        range: Range<usize>,
        /// `permutation[i]` is the new flat index of the item that was at
        /// `range.start + i`.
        permutation: Vec<usize>,
    },
    /// Items within `range` were replaced in place.
    Updated {
        /// Flat indices of the updated items.
        range: Range<usize>,
    },
    /// The sort comparator changed; the whole projection may be reordered.
    ComparatorChanged,
    /// The filter predicate changed; the whole projection may differ.
    PredicateChanged,
}

impl<T> SourceChange<T> {
    /// Returns `true` for changes that invalidate the whole projection.
    pub fn is_full_refresh(&self) -> bool {
        matches!(self, Self::ComparatorChanged | Self::PredicateChanged)
    }
}

/// Type alias for a filter predicate.
///
/// Returns `true` if the item should be part of the projection.
pub type FilterFn<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// Type alias for a sort comparator.
pub type CompareFn<T> = Arc<dyn Fn(&T, &T) -> Ordering + Send + Sync>;

struct ListState<T> {
    /// Backing items in insertion order.
    items: Vec<T>,
    filter: Option<FilterFn<T>>,
    compare: Option<CompareFn<T>>,
    /// Projection: flat index -> backing index.
    view: Vec<usize>,
}

impl<T> ListState<T> {
    fn accepts(&self, backing: usize) -> bool {
        match &self.filter {
            Some(filter) => filter(&self.items[backing]),
            None => true,
        }
    }

    fn view_position(&self, backing: usize) -> Option<usize> {
        self.view.iter().position(|&entry| entry == backing)
    }

    /// Where `backing` belongs in the view. Ties keep backing order.
    fn insertion_point(&self, backing: usize) -> usize {
        match &self.compare {
            Some(compare) => self.view.partition_point(|&entry| {
                compare(&self.items[entry], &self.items[backing]).then(entry.cmp(&backing))
                    == Ordering::Less
            }),
            None => self.view.partition_point(|&entry| entry < backing),
        }
    }

    fn rebuild(&mut self) {
        self.view = (0..self.items.len())
            .filter(|&backing| self.accepts(backing))
            .collect();
        self.sort_view();
    }

    /// Orders the view by comparator, then by backing index.
    fn sort_view(&mut self) {
        let mut view = std::mem::take(&mut self.view);
        match &self.compare {
            Some(compare) => view.sort_by(|&a, &b| {
                compare(&self.items[a], &self.items[b]).then(a.cmp(&b))
            }),
            None => view.sort_unstable(),
        }
        self.view = view;
    }

    /// Shift backing indices after an insertion at `backing`.
    fn shift_up_from(&mut self, backing: usize) {
        for entry in &mut self.view {
            if *entry >= backing {
                *entry += 1;
            }
        }
    }

    /// Shift backing indices after a removal at `backing`.
    fn shift_down_after(&mut self, backing: usize) {
        for entry in &mut self.view {
            if *entry > backing {
                *entry -= 1;
            }
        }
    }
}

/// A mutable list with a filtered and sorted projection.
///
/// Mutations address the backing list (insertion order); reads and change
/// events address the projection. Each mutation emits the resulting
/// projection changes on [`changes`](Self::changes) after the list lock is
/// released, so slots may read the list.
pub struct SortedFilteredList<T> {
    state: RwLock<ListState<T>>,
    changes: Signal<SourceChange<T>>,
}

impl<T> fmt::Debug for SortedFilteredList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.read();
        f.debug_struct("SortedFilteredList")
            .field("backing_len", &state.items.len())
            .field("len", &state.view.len())
            .field("filtered", &state.filter.is_some())
            .field("sorted", &state.compare.is_some())
            .finish()
    }
}

impl<T: Clone + Send + Sync + 'static> Default for SortedFilteredList<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T: Clone + Send + Sync + 'static> FromIterator<T> for SortedFilteredList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T: Clone + Send + Sync + 'static> SortedFilteredList<T> {
    /// Creates a list with no filter and no sort.
    pub fn new(items: Vec<T>) -> Self {
        let view = (0..items.len()).collect();
        Self {
            state: RwLock::new(ListState {
                items,
                filter: None,
                compare: None,
                view,
            }),
            changes: Signal::new(),
        }
    }

    /// Sets a filter predicate at construction time.
    pub fn with_filter<F>(self, filter: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        {
            let mut state = self.state.write();
            state.filter = Some(Arc::new(filter));
            state.rebuild();
        }
        self
    }

    /// Sets a sort comparator at construction time.
    pub fn with_comparator<F>(self, compare: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        {
            let mut state = self.state.write();
            state.compare = Some(Arc::new(compare));
            state.rebuild();
        }
        self
    }

    /// The signal carrying every change to the projection.
    pub fn changes(&self) -> &Signal<SourceChange<T>> {
        &self.changes
    }

    /// Number of items in the backing list, including filtered-out items.
    pub fn backing_len(&self) -> usize {
        self.state.read().items.len()
    }

    /// Snapshot of the projection, in flat index order.
    pub fn items(&self) -> Vec<T> {
        let state = self.state.read();
        state
            .view
            .iter()
            .map(|&backing| state.items[backing].clone())
            .collect()
    }

    /// Snapshot of the backing list, in insertion order.
    pub fn backing_items(&self) -> Vec<T> {
        self.state.read().items.clone()
    }

    /// Appends an item to the backing list.
    pub fn push(&self, item: T) {
        let backing = self.backing_len();
        self.insert(backing, item);
    }

    /// Appends several items, reporting each visible one.
    pub fn extend<I: IntoIterator<Item = T>>(&self, items: I) {
        for item in items {
            self.push(item);
        }
    }

    /// Inserts an item into the backing list at `backing_index`.
    ///
    /// # Panics
    ///
    /// Panics if `backing_index > backing_len()`.
    pub fn insert(&self, backing_index: usize, item: T) {
        let change = {
            let mut state = self.state.write();
            state.items.insert(backing_index, item);
            state.shift_up_from(backing_index);
            if state.accepts(backing_index) {
                let position = state.insertion_point(backing_index);
                state.view.insert(position, backing_index);
                Some(SourceChange::Inserted {
                    range: position..position + 1,
                })
            } else {
                None
            }
        };

        match change {
            Some(change) => self.publish(change),
            None => tracing::trace!(
                target: targets::SOURCE,
                backing_index,
                "inserted item is filtered out"
            ),
        }
    }

    /// Removes and returns the item at `backing_index` of the backing list.
    ///
    /// # Panics
    ///
    /// Panics if `backing_index >= backing_len()`.
    pub fn remove(&self, backing_index: usize) -> T {
        let (item, change) = {
            let mut state = self.state.write();
            let position = state.view_position(backing_index);
            if let Some(position) = position {
                state.view.remove(position);
            }
            let item = state.items.remove(backing_index);
            state.shift_down_after(backing_index);
            let change = position.map(|position| SourceChange::Removed {
                range: position..position + 1,
                items: vec![item.clone()],
            });
            (item, change)
        };

        if let Some(change) = change {
            self.publish(change);
        }
        item
    }

    /// Removes the first backing item equal to `item`.
    pub fn remove_item(&self, item: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let backing = self
            .state
            .read()
            .items
            .iter()
            .position(|candidate| candidate == item)?;
        Some(self.remove(backing))
    }

    /// Replaces the item at `backing_index`, returning the old item.
    ///
    /// If the replacement keeps its flat index the projection reports an
    /// update; if it moves, enters or leaves the projection it reports the
    /// corresponding removal and insertion.
    ///
    /// # Panics
    ///
    /// Panics if `backing_index >= backing_len()`.
    pub fn replace(&self, backing_index: usize, item: T) -> T {
        let (old, changes) = {
            let mut state = self.state.write();
            let old = std::mem::replace(&mut state.items[backing_index], item);
            let old_position = state.view_position(backing_index);
            let accepted = state.accepts(backing_index);

            let mut changes = Vec::with_capacity(2);
            match (old_position, accepted) {
                (None, false) => {}
                (None, true) => {
                    let position = state.insertion_point(backing_index);
                    state.view.insert(position, backing_index);
                    changes.push(SourceChange::Inserted {
                        range: position..position + 1,
                    });
                }
                (Some(position), false) => {
                    state.view.remove(position);
                    changes.push(SourceChange::Removed {
                        range: position..position + 1,
                        items: vec![old.clone()],
                    });
                }
                (Some(position), true) => {
                    state.view.remove(position);
                    let new_position = state.insertion_point(backing_index);
                    state.view.insert(new_position, backing_index);
                    if new_position == position {
                        changes.push(SourceChange::Updated {
                            range: position..position + 1,
                        });
                    } else {
                        changes.push(SourceChange::Removed {
                            range: position..position + 1,
                            items: vec![old.clone()],
                        });
                        changes.push(SourceChange::Inserted {
                            range: new_position..new_position + 1,
                        });
                    }
                }
            }
            (old, changes)
        };

        for change in changes {
            self.publish(change);
        }
        old
    }

    /// Swaps two items of the backing list.
    ///
    /// Without a comparator both items trade flat positions and the
    /// projection reports a permutation. With a comparator the sorted order
    /// only changes among equal items, which are ordered by backing index.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn swap(&self, a: usize, b: usize) {
        let change = {
            let mut state = self.state.write();
            state.items.swap(a, b);
            // Keep each view entry pointing at the same item.
            for entry in &mut state.view {
                if *entry == a {
                    *entry = b;
                } else if *entry == b {
                    *entry = a;
                }
            }
            let before = state.view.clone();
            state.sort_view();
            permutation_between(&before, &state.view)
        };

        if let Some(change) = change {
            self.publish(change);
        }
    }

    /// Replaces the whole backing list.
    pub fn set_items(&self, items: Vec<T>) {
        let (removed, inserted) = {
            let mut state = self.state.write();
            let removed: Vec<T> = state
                .view
                .iter()
                .map(|&backing| state.items[backing].clone())
                .collect();
            state.items = items;
            state.rebuild();
            (removed, state.view.len())
        };

        if !removed.is_empty() {
            self.publish(SourceChange::Removed {
                range: 0..removed.len(),
                items: removed,
            });
        }
        if inserted > 0 {
            self.publish(SourceChange::Inserted { range: 0..inserted });
        }
    }

    /// Removes every item.
    pub fn clear(&self) {
        self.set_items(Vec::new());
    }

    /// Sets the filter predicate.
    pub fn set_filter<F>(&self, filter: F)
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.state.write().filter = Some(Arc::new(filter));
        self.invalidate_filter();
    }

    /// Clears the filter predicate, showing every backing item.
    pub fn clear_filter(&self) {
        self.state.write().filter = None;
        self.invalidate_filter();
    }

    /// Re-evaluates the filter predicate.
    ///
    /// Call this when the predicate depends on state that changed outside
    /// the list.
    pub fn invalidate_filter(&self) {
        self.state.write().rebuild();
        self.publish(SourceChange::PredicateChanged);
    }

    /// Sets the sort comparator.
    pub fn set_comparator<F>(&self, compare: F)
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        self.state.write().compare = Some(Arc::new(compare));
        self.invalidate_sort();
    }

    /// Sorts by a key extracted from each item.
    pub fn sort_by_key<K, F>(&self, key: F)
    where
        K: Ord,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        self.set_comparator(move |a, b| key(a).cmp(&key(b)));
    }

    /// Clears the sort comparator, restoring backing order.
    pub fn clear_comparator(&self) {
        self.state.write().compare = None;
        self.invalidate_sort();
    }

    /// Re-applies the sort comparator.
    pub fn invalidate_sort(&self) {
        self.state.write().rebuild();
        self.publish(SourceChange::ComparatorChanged);
    }

    fn publish(&self, change: SourceChange<T>) {
        tracing::trace!(
            target: targets::SOURCE,
            kind = change_kind(&change),
            "source changed"
        );
        self.changes.emit(change);
    }
}

/// Describes how `before` was reordered into `after` as a `Permuted` change
/// over the smallest range that moved.
fn permutation_between<T>(before: &[usize], after: &[usize]) -> Option<SourceChange<T>> {
    let start = before.iter().zip(after).position(|(old, new)| old != new)?;
    let end = before.len()
        - before
            .iter()
            .rev()
            .zip(after.iter().rev())
            .position(|(old, new)| old != new)?;

    let permutation = before[start..end]
        .iter()
        .map(|backing| {
            after[start..end]
                .iter()
                .position(|entry| entry == backing)
                .map_or(start, |offset| start + offset)
        })
        .collect();

    Some(SourceChange::Permuted {
        range: start..end,
        permutation,
    })
}

fn change_kind<T>(change: &SourceChange<T>) -> &'static str {
    match change {
        SourceChange::Inserted { .. } => "inserted",
        SourceChange::Removed { .. } => "removed",
        SourceChange::Permuted { .. } => "permuted",
        SourceChange::Updated { .. } => "updated",
        SourceChange::ComparatorChanged => "comparator_changed",
        SourceChange::PredicateChanged => "predicate_changed",
    }
}

impl<T: Clone + Send + Sync + 'static> LinearSource<T> for SortedFilteredList<T> {
    fn len(&self) -> usize {
        self.state.read().view.len()
    }

    fn get(&self, index: usize) -> Option<T> {
        let state = self.state.read();
        state
            .view
            .as_slice()
            .get(index)
            .map(|&backing| state.items[backing].clone())
    }

    fn position_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        let state = self.state.read();
        state
            .view
            .iter()
            .position(|&backing| &state.items[backing] == item)
    }
}

#[cfg(test)]
mod tests {
    use parking_lot::Mutex;

    use super::*;

    fn recorder<T: Clone + Send + Sync + 'static>(
        list: &SortedFilteredList<T>,
    ) -> Arc<Mutex<Vec<SourceChange<T>>>> {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = events.clone();
        list.changes().connect(move |change| sink.lock().push(change.clone()));
        events
    }

    #[test]
    fn test_slice_is_a_linear_source() {
        let items: &[&str] = &["a", "b", "c"];
        assert_eq!(LinearSource::len(items), 3);
        assert_eq!(LinearSource::get(items, 1), Some("b"));
        assert_eq!(LinearSource::get(items, 3), None);
        assert_eq!(LinearSource::position_of(items, &"c"), Some(2));
        assert!(!LinearSource::is_empty(items));
    }

    #[test]
    fn test_push_without_sort_appends() {
        let list = SortedFilteredList::new(vec![1, 2]);
        let events = recorder(&list);

        list.push(3);

        assert_eq!(list.items(), vec![1, 2, 3]);
        assert_eq!(*events.lock(), vec![SourceChange::Inserted { range: 2..3 }]);
    }

    #[test]
    fn test_insert_lands_at_sorted_position() {
        let list = SortedFilteredList::new(vec![5, 1, 9]).with_comparator(|a, b| a.cmp(b));
        assert_eq!(list.items(), vec![1, 5, 9]);
        let events = recorder(&list);

        list.push(6);

        assert_eq!(list.items(), vec![1, 5, 6, 9]);
        assert_eq!(*events.lock(), vec![SourceChange::Inserted { range: 2..3 }]);
    }

    #[test]
    fn test_equal_keys_keep_backing_order() {
        let list = SortedFilteredList::new(vec![(1, 'a'), (0, 'b'), (1, 'c')])
            .with_comparator(|a: &(i32, char), b| a.0.cmp(&b.0));
        list.insert(0, (1, 'z'));

        assert_eq!(list.items(), vec![(0, 'b'), (1, 'z'), (1, 'a'), (1, 'c')]);
    }

    #[test]
    fn test_filtered_insert_is_silent() {
        let list = SortedFilteredList::new(vec![2, 4]).with_filter(|n| n % 2 == 0);
        let events = recorder(&list);

        list.push(3);
        list.push(8);

        assert_eq!(list.len(), 3);
        assert_eq!(list.backing_len(), 4);
        assert_eq!(*events.lock(), vec![SourceChange::Inserted { range: 2..3 }]);
    }

    #[test]
    fn test_remove_reports_flat_range_and_item() {
        let list = SortedFilteredList::new(vec!["c", "a", "b"]).with_comparator(|a, b| a.cmp(b));
        let events = recorder(&list);

        let removed = list.remove(0);

        assert_eq!(removed, "c");
        assert_eq!(list.items(), vec!["a", "b"]);
        assert_eq!(
            *events.lock(),
            vec![SourceChange::Removed {
                range: 2..3,
                items: vec!["c"]
            }]
        );

        // Backing indices after the removal still resolve.
        assert_eq!(list.remove(1), "b");
        assert_eq!(list.items(), vec!["a"]);
    }

    #[test]
    fn test_remove_item_by_value() {
        let list = SortedFilteredList::new(vec!["x", "y"]);
        assert_eq!(list.remove_item(&"y"), Some("y"));
        assert_eq!(list.remove_item(&"nope"), None);
        assert_eq!(list.items(), vec!["x"]);
    }

    #[test]
    fn test_replace_in_place_is_update() {
        let list = SortedFilteredList::new(vec![1, 5, 9]).with_comparator(|a, b| a.cmp(b));
        let events = recorder(&list);

        assert_eq!(list.replace(1, 6), 5);

        assert_eq!(list.items(), vec![1, 6, 9]);
        assert_eq!(*events.lock(), vec![SourceChange::Updated { range: 1..2 }]);
    }

    #[test]
    fn test_replace_that_moves_is_remove_then_insert() {
        let list = SortedFilteredList::new(vec![1, 5, 9]).with_comparator(|a, b| a.cmp(b));
        let events = recorder(&list);

        list.replace(0, 10);

        assert_eq!(list.items(), vec![5, 9, 10]);
        assert_eq!(
            *events.lock(),
            vec![
                SourceChange::Removed {
                    range: 0..1,
                    items: vec![1]
                },
                SourceChange::Inserted { range: 2..3 },
            ]
        );
    }

    #[test]
    fn test_replace_across_filter_boundary() {
        let list = SortedFilteredList::new(vec![2, 3]).with_filter(|n| n % 2 == 0);
        let events = recorder(&list);

        list.replace(1, 4);
        list.replace(0, 1);

        assert_eq!(list.items(), vec![4]);
        assert_eq!(
            *events.lock(),
            vec![
                SourceChange::Inserted { range: 1..2 },
                SourceChange::Removed {
                    range: 0..1,
                    items: vec![2]
                },
            ]
        );
    }

    #[test]
    fn test_set_filter_and_comparator_notify_full_refresh() {
        let list = SortedFilteredList::new(vec![3, 1, 2, 4]);
        let events = recorder(&list);

        list.set_filter(|n| *n > 1);
        assert_eq!(list.items(), vec![3, 2, 4]);

        list.sort_by_key(|n| *n);
        assert_eq!(list.items(), vec![2, 3, 4]);

        list.clear_filter();
        assert_eq!(list.items(), vec![1, 2, 3, 4]);

        list.clear_comparator();
        assert_eq!(list.items(), vec![3, 1, 2, 4]);

        let events = events.lock();
        assert_eq!(events.len(), 4);
        assert!(events.iter().all(SourceChange::is_full_refresh));
        assert_eq!(events[0], SourceChange::PredicateChanged);
        assert_eq!(events[1], SourceChange::ComparatorChanged);
    }

    #[test]
    fn test_swap_reports_permutation() {
        let list = SortedFilteredList::new(vec!["a", "b", "c", "d"]);
        let events = recorder(&list);

        list.swap(1, 3);

        assert_eq!(list.items(), vec!["a", "d", "c", "b"]);
        assert_eq!(
            *events.lock(),
            vec![SourceChange::Permuted {
                range: 1..4,
                permutation: vec![3, 2, 1]
            }]
        );
    }

    #[test]
    fn test_swap_in_sorted_view_only_moves_ties() {
        let list = SortedFilteredList::new(vec![(2, 'x'), (1, 'a'), (1, 'b')])
            .with_comparator(|a: &(i32, char), b| a.0.cmp(&b.0));
        let events = recorder(&list);

        list.swap(0, 1);
        assert!(events.lock().is_empty());
        assert_eq!(list.items(), vec![(1, 'a'), (1, 'b'), (2, 'x')]);

        list.swap(0, 2);
        assert_eq!(list.items(), vec![(1, 'b'), (1, 'a'), (2, 'x')]);
        assert_eq!(
            *events.lock(),
            vec![SourceChange::Permuted {
                range: 0..2,
                permutation: vec![1, 0]
            }]
        );
    }

    #[test]
    fn test_set_items_reports_remove_then_insert() {
        let list = SortedFilteredList::new(vec!["a", "b"]);
        let events = recorder(&list);

        list.set_items(vec!["x", "y", "z"]);
        list.clear();

        assert!(list.is_empty());
        assert_eq!(
            *events.lock(),
            vec![
                SourceChange::Removed {
                    range: 0..2,
                    items: vec!["a", "b"]
                },
                SourceChange::Inserted { range: 0..3 },
                SourceChange::Removed {
                    range: 0..3,
                    items: vec!["x", "y", "z"]
                },
            ]
        );
    }

    #[test]
    fn test_slots_can_read_the_list() {
        let list = Arc::new(SortedFilteredList::new(vec![1]));
        let seen = Arc::new(Mutex::new(Vec::new()));

        let reader = Arc::downgrade(&list);
        let seen_clone = seen.clone();
        list.changes().connect(move |_| {
            if let Some(list) = reader.upgrade() {
                seen_clone.lock().push(list.len());
            }
        });

        list.push(2);
        assert_eq!(*seen.lock(), vec![2]);
    }

    #[test]
    fn test_position_of_uses_projection() {
        let list = SortedFilteredList::new(vec!["b", "a"]).with_comparator(|a, b| a.cmp(b));
        assert_eq!(list.position_of(&"a"), Some(0));
        assert_eq!(list.position_of(&"b"), Some(1));
        assert_eq!(list.position_of(&"q"), None);
    }
}
