//! The selection set: selected items, by identity, with their flat indices.

/// The selected items and their flat indices.
///
/// `items[i]` is the item at flat index `indices[i]`; the two lists always
/// have the same length. The current item is always the last pair, so it is
/// the most recently added or re-selected one, or after a removal the last
/// remaining one.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionSet<T> {
    items: Vec<T>,
    indices: Vec<usize>,
}

impl<T> Default for SelectionSet<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            indices: Vec::new(),
        }
    }
}

impl<T: Clone + PartialEq> SelectionSet<T> {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected items, in selection order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Flat indices of the selected items, parallel to [`items`](Self::items).
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// `(item, flat index)` pairs, in selection order.
    pub fn iter(&self) -> impl Iterator<Item = (&T, usize)> + '_ {
        self.items.iter().zip(self.indices.iter().copied())
    }

    /// Number of selected items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The current selected item.
    pub fn current_item(&self) -> Option<&T> {
        self.items.last()
    }

    /// Flat index of the current selected item.
    pub fn current_index(&self) -> Option<usize> {
        self.indices.last().copied()
    }

    /// Checks if the item at flat `index` is selected.
    pub fn contains_index(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    /// Checks if `item` is selected.
    pub fn contains_item(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    /// Applies a batch of deselected cells, resolved to `(item, index)`.
    ///
    /// The batch is processed in reverse. Each entry drops the pair with the
    /// same flat index, or failing that the first pair holding an equal item.
    pub(crate) fn apply_removed(&mut self, removed: &[(T, usize)]) {
        for (item, index) in removed.iter().rev() {
            let slot = self
                .indices
                .iter()
                .position(|selected| selected == index)
                .or_else(|| self.items.iter().position(|selected| selected == item));
            if let Some(slot) = slot {
                self.items.remove(slot);
                self.indices.remove(slot);
            }
        }
    }

    /// Applies a batch of newly selected cells, resolved to `(item, index)`.
    ///
    /// Pairs are appended in order; the last one becomes current. A pair
    /// whose index is already selected moves to the end instead.
    pub(crate) fn apply_added(&mut self, added: &[(T, usize)]) {
        for (item, index) in added {
            if !self.promote(*index) {
                self.items.push(item.clone());
                self.indices.push(*index);
            }
        }
    }

    /// Moves the selected pair at flat `index` to the end, making it current.
    ///
    /// Returns `false` if nothing at `index` is selected.
    pub(crate) fn promote(&mut self, index: usize) -> bool {
        let Some(slot) = self.indices.iter().position(|&selected| selected == index) else {
            return false;
        };
        let item = self.items.remove(slot);
        self.indices.remove(slot);
        self.items.push(item);
        self.indices.push(index);
        true
    }

    /// Empties the set.
    pub(crate) fn clear(&mut self) {
        self.items.clear();
        self.indices.clear();
    }

    /// Moves every pair to the flat index `remap` returns for it, dropping
    /// pairs it maps to `None`.
    ///
    /// Order is kept, so the current item stays current if it survives.
    pub(crate) fn reanchor(&mut self, mut remap: impl FnMut(&T, usize) -> Option<usize>) {
        let items = std::mem::take(&mut self.items);
        let indices = std::mem::take(&mut self.indices);
        (self.items, self.indices) = items
            .into_iter()
            .zip(indices)
            .filter_map(|(item, index)| remap(&item, index).map(|new_index| (item, new_index)))
            .unzip();
    }

    /// Replaces each stored item with what `resolve` returns for its index,
    /// dropping pairs that no longer resolve.
    pub(crate) fn refresh_items(&mut self, mut resolve: impl FnMut(usize) -> Option<T>) {
        (self.items, self.indices) = self
            .indices
            .iter()
            .filter_map(|&index| resolve(index).map(|item| (item, index)))
            .unzip();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&'static str, usize)]) -> Vec<(&'static str, usize)> {
        items.to_vec()
    }

    #[test]
    fn test_added_last_wins() {
        let mut set = SelectionSet::new();
        set.apply_added(&pairs(&[("a", 0), ("c", 2)]));

        assert_eq!(set.items(), &["a", "c"]);
        assert_eq!(set.indices(), &[0, 2]);
        assert_eq!(set.current_item(), Some(&"c"));
        assert_eq!(set.current_index(), Some(2));
    }

    #[test]
    fn test_removed_current_becomes_last_remaining() {
        let mut set = SelectionSet::new();
        set.apply_added(&pairs(&[("a", 0), ("b", 1), ("c", 2)]));

        set.apply_removed(&pairs(&[("c", 2)]));
        assert_eq!(set.current_item(), Some(&"b"));

        set.apply_removed(&pairs(&[("a", 0), ("b", 1)]));
        assert!(set.is_empty());
        assert_eq!(set.current_item(), None);
        assert_eq!(set.items().len(), set.indices().len());
    }

    #[test]
    fn test_removed_falls_back_to_item_identity() {
        let mut set = SelectionSet::new();
        set.apply_added(&pairs(&[("a", 0), ("b", 4)]));

        set.apply_removed(&pairs(&[("b", 9)]));

        assert_eq!(set.items(), &["a"]);
        assert_eq!(set.indices(), &[0]);
    }

    #[test]
    fn test_promote_moves_pair_to_the_end() {
        let mut set = SelectionSet::new();
        set.apply_added(&pairs(&[("a", 0), ("b", 1), ("c", 2)]));

        assert!(set.promote(0));
        assert_eq!(set.items(), &["b", "c", "a"]);
        assert_eq!(set.indices(), &[1, 2, 0]);
        assert_eq!(set.current_item(), set.items().last());

        assert!(!set.promote(7));
        assert_eq!(set.current_index(), Some(0));
    }

    #[test]
    fn test_added_duplicate_index_is_promoted() {
        let mut set = SelectionSet::new();
        set.apply_added(&pairs(&[("a", 0), ("b", 1)]));

        set.apply_added(&pairs(&[("a", 0)]));

        assert_eq!(set.items(), &["b", "a"]);
        assert_eq!(set.current_item(), Some(&"a"));
    }

    #[test]
    fn test_reanchor_shifts_and_drops() {
        let mut set = SelectionSet::new();
        set.apply_added(&pairs(&[("b", 1), ("e", 4), ("c", 2)]));
        set.promote(4);

        // Item at 2 removed, later items shift down.
        set.reanchor(|_, index| match index {
            2 => None,
            i if i > 2 => Some(i - 1),
            i => Some(i),
        });

        assert_eq!(set.items(), &["b", "e"]);
        assert_eq!(set.indices(), &[1, 3]);
        assert_eq!(set.current_item(), Some(&"e"));
        assert_eq!(set.current_index(), Some(3));
    }

    #[test]
    fn test_reanchor_dropping_current() {
        let mut set = SelectionSet::new();
        set.apply_added(&pairs(&[("a", 0), ("b", 1)]));

        set.reanchor(|item, index| (*item != "b").then_some(index));

        assert_eq!(set.current_item(), Some(&"a"));
    }

    #[test]
    fn test_refresh_items() {
        let mut set = SelectionSet::new();
        set.apply_added(&pairs(&[("a", 0), ("z", 5)]));

        let source = ["A", "B", "C"];
        set.refresh_items(|index| source.get(index).copied());

        assert_eq!(set.items(), &["A"]);
        assert_eq!(set.indices(), &[0]);
        assert_eq!(set.current_item(), Some(&"A"));
    }
}
