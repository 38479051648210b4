//! Candidate itemset generation.
//!
//! Candidates of size `k` are every union of two frequent `(k-1)`-itemsets
//! that has exactly `k` items. All pairs are tried, with no shared-prefix
//! join, so one call costs `O(P^2)` in the number of previous itemsets.

use crate::itemset::{Item, Itemset, Transaction};
use std::collections::BTreeSet;

/// One-item candidates: every distinct item appearing in any transaction.
pub fn singleton_candidates<T: Item>(transactions: &[Transaction<T>]) -> BTreeSet<Itemset<T>> {
    transactions
        .iter()
        .flat_map(|transaction| transaction.iter().cloned())
        .map(Itemset::singleton)
        .collect()
}

/// Self-join the previous level into candidates of `target_size` items.
///
/// A pair may be joined with itself; the size check discards it along with
/// every other union of the wrong size. The set keeps each candidate once.
///
/// # Example
///
/// ```
/// use arules::candidates::generate_candidates;
/// use arules::itemset::Itemset;
///
/// let previous = [
///     Itemset::singleton("a"),
///     Itemset::singleton("b"),
///     Itemset::singleton("c"),
/// ];
/// let candidates = generate_candidates(&previous, 2);
///
/// assert_eq!(candidates.len(), 3);
/// assert!(candidates.contains(&Itemset::new(["a", "c"])));
/// ```
pub fn generate_candidates<'a, T, I>(previous: I, target_size: usize) -> BTreeSet<Itemset<T>>
where
    T: Item + 'a,
    I: IntoIterator<Item = &'a Itemset<T>>,
{
    let previous: Vec<&Itemset<T>> = previous.into_iter().collect();
    let mut candidates = BTreeSet::new();

    for left in &previous {
        for right in &previous {
            let union = left.union(right);
            if union.len() == target_size {
                candidates.insert(union);
            }
        }
    }

    candidates
}
