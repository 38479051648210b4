//! Support counting.
//!
//! Support is recomputed by a full scan of the transactions for every
//! candidate. There is no shared index between candidates or between
//! levels, so one level costs `O(candidates * transactions)`.

use crate::error::{MiningError, Result};
use crate::itemset::{Item, Itemset, Transaction};
use crate::level::Level;

/// Fraction of transactions that contain every item of `itemset`.
///
/// # Errors
///
/// Returns [`MiningError::EmptyTransactions`] when `transactions` is empty.
///
/// # Example
///
/// ```
/// use arules::itemset::Itemset;
/// use arules::support::support;
///
/// let transactions = vec![
///     Itemset::new(["a", "b"]),
///     Itemset::new(["a", "b", "c"]),
///     Itemset::new(["a", "c"]),
///     Itemset::new(["a", "b", "c", "e"]),
/// ];
///
/// assert_eq!(support(&Itemset::singleton("a"), &transactions).unwrap(), 1.0);
/// assert_eq!(support(&Itemset::new(["b", "c"]), &transactions).unwrap(), 0.5);
/// ```
pub fn support<T: Item>(itemset: &Itemset<T>, transactions: &[Transaction<T>]) -> Result<f64> {
    if transactions.is_empty() {
        return Err(MiningError::EmptyTransactions);
    }

    let count = transactions
        .iter()
        .filter(|transaction| itemset.is_subset(transaction))
        .count();

    Ok(count as f64 / transactions.len() as f64)
}

/// Keep the candidates whose support reaches `min_support`.
///
/// Supports of rejected candidates are dropped immediately. The returned
/// level enumerates survivors in candidate order.
///
/// # Errors
///
/// Returns [`MiningError::EmptyTransactions`] when `transactions` is empty.
pub fn filter_candidates<T: Item>(
    transactions: &[Transaction<T>],
    candidates: impl IntoIterator<Item = Itemset<T>>,
    min_support: f64,
) -> Result<Level<T>> {
    if transactions.is_empty() {
        return Err(MiningError::EmptyTransactions);
    }

    let mut frequent = Level::new();
    for candidate in candidates {
        let s = support(&candidate, transactions)?;
        if s >= min_support {
            frequent.insert(candidate, s)?;
        }
    }

    Ok(frequent)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data() -> Vec<Transaction<&'static str>> {
        vec![
            Itemset::new(["a", "b"]),
            Itemset::new(["b", "c", "a"]),
            Itemset::new(["a", "c"]),
            Itemset::new(["a", "b", "c", "e"]),
        ]
    }

    #[test]
    fn test_support_calculation() {
        let transactions = data();
        assert_eq!(support(&Itemset::singleton("a"), &transactions).unwrap(), 1.0);
        assert_eq!(support(&Itemset::new(["b", "c"]), &transactions).unwrap(), 0.5);
        assert_eq!(support(&Itemset::singleton("e"), &transactions).unwrap(), 0.25);
        assert_eq!(support(&Itemset::singleton("z"), &transactions).unwrap(), 0.0);
    }

    #[test]
    fn test_support_of_empty_itemset_is_one() {
        let empty: Itemset<&str> = Itemset::new([]);
        assert_eq!(support(&empty, &data()).unwrap(), 1.0);
    }

    #[test]
    fn test_support_empty_transactions() {
        let transactions: Vec<Transaction<&str>> = vec![];
        let err = support(&Itemset::singleton("a"), &transactions).unwrap_err();
        assert!(matches!(err, MiningError::EmptyTransactions));
    }

    #[test]
    fn test_filter_candidates() {
        let candidates = vec![
            Itemset::singleton("a"),
            Itemset::singleton("b"),
            Itemset::singleton("c"),
            Itemset::singleton("e"),
        ];

        let level = filter_candidates(&data(), candidates, 0.75).unwrap();

        let expected: Level<&str> = [
            (Itemset::singleton("a"), 1.0),
            (Itemset::singleton("b"), 0.75),
            (Itemset::singleton("c"), 0.75),
        ]
        .into_iter()
        .collect();
        assert_eq!(level, expected);
        assert!(!level.contains(&Itemset::singleton("e")));
    }

    #[test]
    fn test_filter_candidates_keeps_candidate_order() {
        let candidates = vec![Itemset::singleton("c"), Itemset::singleton("a")];
        let level = filter_candidates(&data(), candidates, 0.0).unwrap();
        let order: Vec<_> = level.itemsets().cloned().collect();
        assert_eq!(order, vec![Itemset::singleton("c"), Itemset::singleton("a")]);
    }

    #[test]
    fn test_filter_candidates_threshold_above_one() {
        let level = filter_candidates(&data(), vec![Itemset::singleton("a")], 1.5).unwrap();
        assert!(level.is_empty());
    }

    #[test]
    fn test_filter_candidates_empty_transactions() {
        let transactions: Vec<Transaction<&str>> = vec![];
        let result = filter_candidates(&transactions, Vec::new(), 0.5);
        assert!(matches!(result, Err(MiningError::EmptyTransactions)));
    }
}
