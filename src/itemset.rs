//! Canonical itemset container.
//!
//! An [`Itemset`] keeps its items sorted and free of duplicates, so two
//! itemsets built from the same items in a different insertion order are
//! equal, hash the same, and can be used interchangeably as map keys.
//!
//! # Example
//!
//! ```
//! use arules::itemset::Itemset;
//!
//! let a = Itemset::new(["milk", "bread", "milk"]);
//! let b = Itemset::new(["bread", "milk"]);
//! assert_eq!(a, b);
//! assert_eq!(a.len(), 2);
//! assert!(Itemset::singleton("milk").is_subset(&a));
//! ```

use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;

/// Bound satisfied by any value usable as an item.
///
/// Items are opaque tokens; only equality, hashing and a total order are
/// required. Implemented for every type meeting those bounds.
pub trait Item: Clone + Eq + Hash + Ord + fmt::Debug {}

impl<T: Clone + Eq + Hash + Ord + fmt::Debug> Item for T {}

/// Unordered, duplicate-free collection of items.
///
/// Items are stored sorted ascending, which makes the derived `Ord` the
/// element-wise lexical comparison used by
/// [`OrderMode::LexicalAscending`](crate::order::OrderMode::LexicalAscending).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Itemset<T> {
    items: Vec<T>,
}

/// A transaction is a set of items; the miner only ever reads it.
pub type Transaction<T> = Itemset<T>;

impl<T: Item> Itemset<T> {
    /// Build an itemset from any collection of items, dropping duplicates.
    pub fn new(items: impl IntoIterator<Item = T>) -> Self {
        let mut items: Vec<T> = items.into_iter().collect();
        items.sort();
        items.dedup();
        Self { items }
    }

    /// Build a one-item itemset.
    #[must_use]
    pub fn singleton(item: T) -> Self {
        Self { items: vec![item] }
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the itemset holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in ascending order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Items in ascending order, as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// True when `item` belongs to this itemset.
    #[must_use]
    pub fn contains(&self, item: &T) -> bool {
        self.items.binary_search(item).is_ok()
    }

    /// True when every item of `self` is also in `other`.
    ///
    /// Both sides are sorted, so this is a single merge walk.
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        if self.items.len() > other.items.len() {
            return false;
        }

        let mut theirs = other.items.iter();
        'outer: for mine in &self.items {
            for candidate in theirs.by_ref() {
                match candidate.cmp(mine) {
                    Ordering::Less => continue,
                    Ordering::Equal => continue 'outer,
                    Ordering::Greater => return false,
                }
            }
            return false;
        }
        true
    }

    /// Items present in either itemset.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let (a, b) = (&self.items, &other.items);
        let mut items = Vec::with_capacity(a.len() + b.len());
        let (mut i, mut j) = (0, 0);

        while i < a.len() && j < b.len() {
            match a[i].cmp(&b[j]) {
                Ordering::Less => {
                    items.push(a[i].clone());
                    i += 1;
                }
                Ordering::Greater => {
                    items.push(b[j].clone());
                    j += 1;
                }
                Ordering::Equal => {
                    items.push(a[i].clone());
                    i += 1;
                    j += 1;
                }
            }
        }
        items.extend_from_slice(&a[i..]);
        items.extend_from_slice(&b[j..]);

        Self { items }
    }

    /// Items of `self` that are not in `other`.
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        Self {
            items: self
                .items
                .iter()
                .filter(|item| !other.contains(item))
                .cloned()
                .collect(),
        }
    }
}

impl<T: Item> FromIterator<T> for Itemset<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<T: Item> From<Vec<T>> for Itemset<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<'a, T> IntoIterator for &'a Itemset<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Itemset<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "}}")
    }
}
