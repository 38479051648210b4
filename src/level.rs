//! Leveled frequent-itemset table.
//!
//! A [`Level`] maps every frequent itemset of one size to its support and
//! remembers enumeration order. [`FrequentItemsets`] is the ordered
//! sequence of levels produced by the miner, indexed by itemset size
//! starting at 1.

use crate::error::{MiningError, Result};
use crate::itemset::{Item, Itemset};
use crate::order::{sort_items, OrderMode};
use serde::Serialize;
use std::collections::HashMap;

/// Frequent itemsets of a single size, with their supports.
///
/// Entries keep the order they were inserted in until [`Level::sort`] is
/// called. Lookup by itemset is constant time.
#[derive(Debug, Clone, Serialize)]
pub struct Level<T> {
    entries: Vec<(Itemset<T>, f64)>,
    #[serde(skip)]
    index: HashMap<Itemset<T>, usize>,
}

impl<T: Item> Level<T> {
    /// Create an empty level.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Record the support of an itemset.
    ///
    /// Re-inserting an itemset overwrites its support in place.
    ///
    /// # Errors
    ///
    /// Returns [`MiningError::LevelSizeMismatch`] when the itemset size
    /// differs from the itemsets already in the level.
    pub fn insert(&mut self, itemset: Itemset<T>, support: f64) -> Result<()> {
        if let Some(expected) = self.itemset_size() {
            if itemset.len() != expected {
                return Err(MiningError::LevelSizeMismatch {
                    level: expected,
                    expected,
                    actual: itemset.len(),
                });
            }
        }

        if let Some(&i) = self.index.get(&itemset) {
            self.entries[i].1 = support;
        } else {
            self.index.insert(itemset.clone(), self.entries.len());
            self.entries.push((itemset, support));
        }
        Ok(())
    }

    /// Support recorded for `itemset`, if it is in this level.
    #[must_use]
    pub fn get(&self, itemset: &Itemset<T>) -> Option<f64> {
        self.index.get(itemset).map(|&i| self.entries[i].1)
    }

    /// True when `itemset` is recorded in this level.
    #[must_use]
    pub fn contains(&self, itemset: &Itemset<T>) -> bool {
        self.index.contains_key(itemset)
    }

    /// Number of itemsets in the level.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the level holds no itemsets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Size shared by every itemset in the level, `None` when empty.
    #[must_use]
    pub fn itemset_size(&self) -> Option<usize> {
        self.entries.first().map(|(itemset, _)| itemset.len())
    }

    /// `(itemset, support)` pairs in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (&Itemset<T>, f64)> + '_ {
        self.entries.iter().map(|(itemset, support)| (itemset, *support))
    }

    /// Itemsets in enumeration order.
    pub fn itemsets(&self) -> impl Iterator<Item = &Itemset<T>> + '_ {
        self.entries.iter().map(|(itemset, _)| itemset)
    }

    /// Reorder the level. Membership and supports are unchanged.
    pub fn sort(&mut self, mode: OrderMode) {
        sort_items(&mut self.entries, mode);
        self.reindex();
    }

    /// Consume the level, yielding its entries in enumeration order.
    #[must_use]
    pub fn into_entries(self) -> Vec<(Itemset<T>, f64)> {
        self.entries
    }

    fn reindex(&mut self) {
        for (i, (itemset, _)) in self.entries.iter().enumerate() {
            if let Some(slot) = self.index.get_mut(itemset) {
                *slot = i;
            }
        }
    }
}

impl<T: Item> Default for Level<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Two levels are equal when they map the same itemsets to the same
/// supports, regardless of enumeration order.
impl<T: Item> PartialEq for Level<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(itemset, support)| other.get(itemset) == Some(support))
    }
}

impl<T: Item> FromIterator<(Itemset<T>, f64)> for Level<T> {
    /// Collect entries into a level; a later duplicate overwrites an earlier
    /// one. Entries are expected to share one itemset size.
    fn from_iter<I: IntoIterator<Item = (Itemset<T>, f64)>>(iter: I) -> Self {
        let mut level = Level::new();
        for (itemset, support) in iter {
            if let Some(&i) = level.index.get(&itemset) {
                level.entries[i].1 = support;
            } else {
                level.index.insert(itemset.clone(), level.entries.len());
                level.entries.push((itemset, support));
            }
        }
        level
    }
}

/// Frequent itemsets of every size, bottom-up.
///
/// `levels()[i]` holds the itemsets of size `i + 1`. No level is empty.
///
/// # Example
///
/// ```
/// use arules::itemset::Itemset;
/// use arules::level::{FrequentItemsets, Level};
///
/// let mut singles = Level::new();
/// singles.insert(Itemset::singleton("beer"), 0.6).unwrap();
/// let table = FrequentItemsets::from_levels(vec![singles]).unwrap();
///
/// assert_eq!(table.support_of(&Itemset::singleton("beer")), Some(0.6));
/// assert_eq!(table.len(), 1);
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct FrequentItemsets<T> {
    levels: Vec<Level<T>>,
}

impl<T: Item> FrequentItemsets<T> {
    /// A table with no levels.
    #[must_use]
    pub fn empty() -> Self {
        Self { levels: Vec::new() }
    }

    /// Build a table from hand-assembled levels.
    ///
    /// Empty trailing levels are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`MiningError::LevelSizeMismatch`] when any itemset of level
    /// `k` has a size other than `k`, or when an empty level is followed by
    /// a non-empty one. Every entry is checked, including those of levels
    /// collected from an iterator.
    pub fn from_levels(mut levels: Vec<Level<T>>) -> Result<Self> {
        while levels.last().is_some_and(Level::is_empty) {
            levels.pop();
        }

        for (i, level) in levels.iter().enumerate() {
            let expected = i + 1;
            if level.is_empty() {
                return Err(MiningError::LevelSizeMismatch {
                    level: expected,
                    expected,
                    actual: 0,
                });
            }
            if let Some(itemset) = level.itemsets().find(|itemset| itemset.len() != expected) {
                return Err(MiningError::LevelSizeMismatch {
                    level: expected,
                    expected,
                    actual: itemset.len(),
                });
            }
        }

        Ok(Self { levels })
    }

    /// Append the next level. Only the miner calls this, and only with a
    /// non-empty level of the right size.
    pub(crate) fn push(&mut self, level: Level<T>) {
        debug_assert!(!level.is_empty());
        debug_assert_eq!(level.itemset_size(), Some(self.levels.len() + 1));
        self.levels.push(level);
    }

    /// Level holding itemsets of size `k` (1-based).
    #[must_use]
    pub fn level(&self, k: usize) -> Option<&Level<T>> {
        k.checked_sub(1).and_then(|i| self.levels.get(i))
    }

    /// All levels, smallest itemsets first.
    #[must_use]
    pub fn levels(&self) -> &[Level<T>] {
        &self.levels
    }

    /// Support recorded for `itemset` at the level matching its size.
    #[must_use]
    pub fn support_of(&self, itemset: &Itemset<T>) -> Option<f64> {
        self.level(itemset.len()).and_then(|level| level.get(itemset))
    }

    /// Number of levels (the size of the largest frequent itemset).
    #[must_use]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// True when not even a single item is frequent.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Number of frequent itemsets across every level.
    #[must_use]
    pub fn total_itemsets(&self) -> usize {
        self.levels.iter().map(Level::len).sum()
    }

    /// Levels, smallest itemsets first.
    pub fn iter(&self) -> std::slice::Iter<'_, Level<T>> {
        self.levels.iter()
    }

    /// Consume the table, yielding its levels.
    #[must_use]
    pub fn into_levels(self) -> Vec<Level<T>> {
        self.levels
    }
}

impl<T: Item> PartialEq for FrequentItemsets<T> {
    fn eq(&self, other: &Self) -> bool {
        self.levels == other.levels
    }
}

impl<'a, T> IntoIterator for &'a FrequentItemsets<T> {
    type Item = &'a Level<T>;
    type IntoIter = std::slice::Iter<'a, Level<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.levels.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(item: &'static str) -> Itemset<&'static str> {
        Itemset::singleton(item)
    }

    fn level(pairs: Vec<(Vec<&'static str>, f64)>) -> Level<&'static str> {
        pairs
            .into_iter()
            .map(|(items, support)| (Itemset::new(items), support))
            .collect()
    }

    #[test]
    fn test_insert_and_get() {
        let mut l = Level::new();
        l.insert(single("a"), 0.5).unwrap();
        l.insert(single("b"), 0.25).unwrap();
        assert_eq!(l.len(), 2);
        assert_eq!(l.get(&single("a")), Some(0.5));
        assert_eq!(l.get(&single("z")), None);
        assert_eq!(l.itemset_size(), Some(1));
    }

    #[test]
    fn test_insert_overwrites() {
        let mut l = Level::new();
        l.insert(single("a"), 0.5).unwrap();
        l.insert(single("a"), 0.75).unwrap();
        assert_eq!(l.len(), 1);
        assert_eq!(l.get(&single("a")), Some(0.75));
    }

    #[test]
    fn test_insert_rejects_size_mismatch() {
        let mut l = Level::new();
        l.insert(single("a"), 0.5).unwrap();
        let err = l.insert(Itemset::new(["a", "b"]), 0.5).unwrap_err();
        assert!(matches!(
            err,
            MiningError::LevelSizeMismatch {
                expected: 1,
                actual: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_sort_keeps_lookup_consistent() {
        let mut l = level(vec![(vec!["b"], 0.2), (vec!["a"], 0.9), (vec!["c"], 0.5)]);
        l.sort(OrderMode::SupportDescending);

        let order: Vec<_> = l.itemsets().map(|s| s.as_slice()[0]).collect();
        assert_eq!(order, vec!["a", "c", "b"]);
        assert_eq!(l.get(&single("b")), Some(0.2));
        assert_eq!(l.get(&single("a")), Some(0.9));
    }

    #[test]
    fn test_equality_ignores_order() {
        let a = level(vec![(vec!["a"], 0.5), (vec!["b"], 0.25)]);
        let b = level(vec![(vec!["b"], 0.25), (vec!["a"], 0.5)]);
        let c = level(vec![(vec!["a"], 0.5), (vec!["b"], 0.3)]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_from_levels_validates_sizes() {
        let ones = level(vec![(vec!["a"], 0.5)]);
        let pairs = level(vec![(vec!["a", "b"], 0.5)]);
        let table = FrequentItemsets::from_levels(vec![ones.clone(), pairs.clone()]).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.total_itemsets(), 2);

        let err = FrequentItemsets::from_levels(vec![pairs]).unwrap_err();
        assert!(matches!(
            err,
            MiningError::LevelSizeMismatch {
                level: 1,
                actual: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_from_levels_rejects_mixed_sizes_in_one_level() {
        let mixed = level(vec![(vec!["a"], 0.5), (vec!["a", "b"], 0.5)]);
        let err = FrequentItemsets::from_levels(vec![mixed]).unwrap_err();
        assert!(matches!(
            err,
            MiningError::LevelSizeMismatch {
                level: 1,
                expected: 1,
                actual: 2,
            }
        ));

        let ones = level(vec![(vec!["a"], 0.5), (vec!["b"], 0.5)]);
        let late = level(vec![(vec!["a", "b"], 0.5), (vec!["a", "b", "c"], 0.25)]);
        let err = FrequentItemsets::from_levels(vec![ones, late]).unwrap_err();
        assert!(matches!(
            err,
            MiningError::LevelSizeMismatch {
                level: 2,
                actual: 3,
                ..
            }
        ));
    }

    #[test]
    fn test_from_levels_drops_trailing_empty() {
        let ones = level(vec![(vec!["a"], 0.5)]);
        let table = FrequentItemsets::from_levels(vec![ones, Level::new()]).unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_from_levels_rejects_inner_gap() {
        let pairs = level(vec![(vec!["a", "b"], 0.5)]);
        let err = FrequentItemsets::from_levels(vec![Level::new(), pairs]).unwrap_err();
        assert!(matches!(err, MiningError::LevelSizeMismatch { level: 1, .. }));
    }

    #[test]
    fn test_level_lookup_is_one_based() {
        let table = FrequentItemsets::from_levels(vec![level(vec![(vec!["a"], 0.5)])]).unwrap();
        assert!(table.level(0).is_none());
        assert!(table.level(1).is_some());
        assert!(table.level(2).is_none());
        assert_eq!(table.support_of(&single("a")), Some(0.5));
        assert_eq!(table.support_of(&Itemset::new(["a", "b"])), None);
    }
}
