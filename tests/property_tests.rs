//! Property-based tests using proptest.
//!
//! These tests verify invariants of the miner and the rule generator.

use arules::candidates::generate_candidates;
use arules::order::sort_items;
use arules::prelude::*;
use arules::support::support;
use proptest::prelude::*;

const UNIVERSE: u8 = 6;

// Strategy for generating small transaction collections over a 6-item universe
fn transactions_strategy() -> impl Strategy<Value = Vec<Transaction<u8>>> {
    proptest::collection::vec(
        proptest::collection::vec(0..UNIVERSE, 0..=UNIVERSE as usize).prop_map(Itemset::new),
        1..12,
    )
}

fn itemset_strategy() -> impl Strategy<Value = Itemset<u8>> {
    proptest::collection::vec(0..UNIVERSE, 0..4).prop_map(Itemset::new)
}

// Thresholds at or below 0 keep every union of observed items, support-0 ones included
fn min_support_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![
        Just(0.0),
        -0.5f64..0.0,
        0.05f64..0.9,
    ]
}

fn order_strategy() -> impl Strategy<Value = OrderMode> {
    prop_oneof![
        Just(OrderMode::SupportAscending),
        Just(OrderMode::SupportDescending),
        Just(OrderMode::LexicalAscending),
        Just(OrderMode::LexicalDescending),
    ]
}

// Every non-empty subset of the universe, by bitmask
fn all_itemsets() -> Vec<Itemset<u8>> {
    (1u32..(1u32 << UNIVERSE))
        .map(|mask| Itemset::new((0..UNIVERSE).filter(|&bit| mask & (1u32 << bit) != 0)))
        .collect()
}

fn subsets_one_smaller(itemset: &Itemset<u8>) -> Vec<Itemset<u8>> {
    itemset
        .iter()
        .map(|dropped| Itemset::new(itemset.iter().copied().filter(|item| item != dropped)))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn support_is_fraction_of_supersets(
        transactions in transactions_strategy(),
        itemset in itemset_strategy(),
    ) {
        let count = transactions
            .iter()
            .filter(|t| itemset.iter().all(|item| t.contains(item)))
            .count();
        let expected = count as f64 / transactions.len() as f64;
        prop_assert_eq!(support(&itemset, &transactions).unwrap(), expected);
    }

    #[test]
    fn levels_hold_itemsets_of_their_size(
        transactions in transactions_strategy(),
        min_support in min_support_strategy(),
    ) {
        let itemsets = Apriori::new().with_min_support(min_support).mine(&transactions).unwrap();
        for (i, level) in itemsets.iter().enumerate() {
            prop_assert!(!level.is_empty());
            for itemset in level.itemsets() {
                prop_assert_eq!(itemset.len(), i + 1);
            }
        }
    }

    #[test]
    fn kept_supports_meet_threshold_and_are_exact(
        transactions in transactions_strategy(),
        min_support in min_support_strategy(),
    ) {
        let itemsets = Apriori::new().with_min_support(min_support).mine(&transactions).unwrap();
        for level in &itemsets {
            for (itemset, s) in level.iter() {
                prop_assert!(s >= min_support);
                prop_assert_eq!(s, support(itemset, &transactions).unwrap());
            }
        }
    }

    #[test]
    fn every_frequent_itemset_is_found(
        transactions in transactions_strategy(),
        min_support in min_support_strategy(),
    ) {
        let itemsets = Apriori::new().with_min_support(min_support).mine(&transactions).unwrap();
        let observed: Itemset<u8> = transactions.iter().flat_map(|t| t.iter().copied()).collect();
        for candidate in all_itemsets() {
            let s = support(&candidate, &transactions).unwrap();
            let expected = s >= min_support && candidate.is_subset(&observed);
            prop_assert_eq!(itemsets.support_of(&candidate).is_some(), expected);
        }
    }

    #[test]
    fn anti_monotonicity(
        transactions in transactions_strategy(),
        min_support in min_support_strategy(),
    ) {
        let itemsets = Apriori::new().with_min_support(min_support).mine(&transactions).unwrap();
        for level in itemsets.iter().skip(1) {
            for itemset in level.itemsets() {
                for subset in subsets_one_smaller(itemset) {
                    prop_assert!(itemsets.support_of(&subset).is_some());
                }
            }
        }
    }

    #[test]
    fn rules_meet_confidence_and_match_supports(
        transactions in transactions_strategy(),
        min_support in min_support_strategy(),
        min_confidence in 0.0f64..1.0,
    ) {
        let result = apriori(&transactions, min_support, min_confidence, None).unwrap();
        for rule in &result.rules {
            prop_assert!(rule.confidence >= min_confidence);
            prop_assert!(rule.lift.is_finite());
            prop_assert!(!rule.antecedent.is_empty());
            prop_assert!(!rule.consequent.is_empty());
            prop_assert!(rule.antecedent.difference(&rule.consequent) == rule.antecedent);

            let whole = rule.antecedent.union(&rule.consequent);
            let whole_support = result.itemsets.support_of(&whole).unwrap();
            let antecedent_support = result.itemsets.support_of(&rule.antecedent).unwrap();
            prop_assert!((rule.confidence - whole_support / antecedent_support).abs() < 1e-12);
        }
    }

    #[test]
    fn ordering_is_idempotent_and_preserves_entries(
        transactions in transactions_strategy(),
        mode in order_strategy(),
    ) {
        let itemsets = Apriori::new().with_min_support(0.1).mine(&transactions).unwrap();
        for level in itemsets.into_levels() {
            let original = level.into_entries();
            let mut once = original.clone();
            sort_items(&mut once, mode);
            let mut twice = once.clone();
            sort_items(&mut twice, mode);

            prop_assert_eq!(&once, &twice);
            prop_assert_eq!(once.len(), original.len());
            for entry in &original {
                prop_assert!(once.contains(entry));
            }
        }
    }

    #[test]
    fn candidates_are_exact_unions(
        previous in proptest::collection::btree_set(
            proptest::collection::vec(0..UNIVERSE, 2).prop_map(Itemset::new),
            0..8,
        ),
    ) {
        let previous: Vec<Itemset<u8>> = previous.into_iter().filter(|s| s.len() == 2).collect();
        let candidates = generate_candidates(&previous, 3);

        for candidate in &candidates {
            prop_assert_eq!(candidate.len(), 3);
        }
        for left in &previous {
            for right in &previous {
                let union = left.union(right);
                if union.len() == 3 {
                    prop_assert!(candidates.contains(&union));
                }
            }
        }
    }
}
