//! Level-wise frequent itemset mining.
//!
//! # Example
//!
//! ```
//! use arules::itemset::Itemset;
//! use arules::miner::Apriori;
//! use arules::order::OrderMode;
//!
//! let transactions = vec![
//!     Itemset::new(["bread", "milk"]),
//!     Itemset::new(["bread", "cookies", "beer", "eggs"]),
//!     Itemset::new(["milk", "cookies", "beer", "cola"]),
//!     Itemset::new(["bread", "milk", "cookies", "beer"]),
//!     Itemset::new(["bread", "milk", "cookies", "cola"]),
//! ];
//!
//! let apriori = Apriori::new()
//!     .with_min_support(0.5)
//!     .with_min_confidence(0.5)
//!     .with_order(OrderMode::LexicalAscending);
//!
//! let result = apriori.fit(&transactions).unwrap();
//! assert_eq!(result.itemsets.len(), 2);
//! for rule in &result.rules {
//!     println!("{rule}");
//! }
//! ```

use crate::candidates::{generate_candidates, singleton_candidates};
use crate::config::MiningConfig;
use crate::error::{MiningError, Result};
use crate::itemset::{Item, Transaction};
use crate::level::{FrequentItemsets, Level};
use crate::order::OrderMode;
use crate::rules::{generate_rules, AssociationRule};
use crate::support::filter_candidates;
use serde::Serialize;

/// Frequent itemsets together with the rules derived from them.
#[derive(Debug, Clone, Serialize)]
pub struct MiningResult<T> {
    /// Frequent itemsets, one level per itemset size
    pub itemsets: FrequentItemsets<T>,
    /// Rules whose confidence reached the threshold
    pub rules: Vec<AssociationRule<T>>,
}

/// Apriori algorithm for frequent itemset mining and association rule generation.
///
/// # Algorithm
///
/// 1. Every distinct item is a 1-candidate; keep those with support >= `min_support`
/// 2. Join frequent (k-1)-itemsets pairwise into k-candidates
/// 3. Keep the k-candidates with support >= `min_support`
/// 4. Stop at the first k with no survivors; that empty level is not kept
/// 5. Derive rules from the levels, keeping confidence >= `min_confidence`
///
/// Candidates are only ever unions of frequent itemsets, so every
/// (k-1)-subset of a frequent k-itemset is itself frequent.
///
/// # Parameters
///
/// - `min_support`: Minimum support threshold (0.0 to 1.0)
/// - `min_confidence`: Minimum confidence threshold (0.0 to 1.0)
/// - `order`: Optional ordering applied to every level
///
/// Thresholds are not range-checked: values above 1 give empty results and
/// values at or below 0 keep everything.
#[derive(Debug, Clone, PartialEq)]
pub struct Apriori {
    min_support: f64,
    min_confidence: f64,
    order: Option<OrderMode>,
}

impl Apriori {
    /// Create a new Apriori instance with default parameters.
    ///
    /// # Default Parameters
    ///
    /// - `min_support`: 0.1 (10%)
    /// - `min_confidence`: 0.5 (50%)
    /// - `order`: none (levels keep candidate order)
    #[must_use]
    pub fn new() -> Self {
        Self {
            min_support: 0.1,
            min_confidence: 0.5,
            order: None,
        }
    }

    /// Build a miner from a loaded configuration.
    #[must_use]
    pub fn from_config(config: &MiningConfig) -> Self {
        Self {
            min_support: config.min_support,
            min_confidence: config.min_confidence,
            order: config.order,
        }
    }

    /// Set the minimum support threshold.
    ///
    /// # Arguments
    ///
    /// * `min_support` - Minimum support (0.0 to 1.0)
    #[must_use]
    pub fn with_min_support(mut self, min_support: f64) -> Self {
        self.min_support = min_support;
        self
    }

    /// Set the minimum confidence threshold.
    ///
    /// # Arguments
    ///
    /// * `min_confidence` - Minimum confidence (0.0 to 1.0)
    #[must_use]
    pub fn with_min_confidence(mut self, min_confidence: f64) -> Self {
        self.min_confidence = min_confidence;
        self
    }

    /// Order every level with `order`.
    #[must_use]
    pub fn with_order(mut self, order: OrderMode) -> Self {
        self.order = Some(order);
        self
    }

    /// Set or clear the level ordering.
    #[must_use]
    pub fn with_optional_order(mut self, order: Option<OrderMode>) -> Self {
        self.order = order;
        self
    }

    /// Minimum support threshold.
    #[must_use]
    pub fn min_support(&self) -> f64 {
        self.min_support
    }

    /// Minimum confidence threshold.
    #[must_use]
    pub fn min_confidence(&self) -> f64 {
        self.min_confidence
    }

    /// Level ordering, if any.
    #[must_use]
    pub fn order(&self) -> Option<OrderMode> {
        self.order
    }

    /// Find every frequent itemset, level by level.
    ///
    /// # Errors
    ///
    /// Returns [`MiningError::EmptyTransactions`] when `transactions` is empty.
    pub fn mine<T: Item>(&self, transactions: &[Transaction<T>]) -> Result<FrequentItemsets<T>> {
        if transactions.is_empty() {
            return Err(MiningError::EmptyTransactions);
        }

        let mut itemsets = FrequentItemsets::empty();
        let mut candidates = singleton_candidates(transactions);
        let mut k = 1;

        loop {
            let n_candidates = candidates.len();
            let mut level = filter_candidates(transactions, candidates, self.min_support)?;
            tracing::debug!(
                k,
                candidates = n_candidates,
                frequent = level.len(),
                "filtered candidates"
            );
            if level.is_empty() {
                break;
            }

            self.apply_order(&mut level);
            candidates = generate_candidates(level.itemsets(), k + 1);
            itemsets.push(level);
            k += 1;
        }

        tracing::info!(
            transactions = transactions.len(),
            levels = itemsets.len(),
            frequent = itemsets.total_itemsets(),
            min_support = self.min_support,
            "mined frequent itemsets"
        );
        Ok(itemsets)
    }

    /// Derive association rules from a mined table.
    ///
    /// # Errors
    ///
    /// Returns [`MiningError::MissingAntecedent`] or
    /// [`MiningError::MissingConsequent`] if the table lacks the support of
    /// some side of a rule.
    pub fn rules<T: Item>(&self, itemsets: &FrequentItemsets<T>) -> Result<Vec<AssociationRule<T>>> {
        generate_rules(itemsets, self.min_confidence)
    }

    /// Mine frequent itemsets and derive rules in one call.
    ///
    /// # Errors
    ///
    /// Returns [`MiningError::EmptyTransactions`] when `transactions` is empty.
    pub fn fit<T: Item>(&self, transactions: &[Transaction<T>]) -> Result<MiningResult<T>> {
        let itemsets = self.mine(transactions)?;
        let rules = self.rules(&itemsets)?;
        Ok(MiningResult { itemsets, rules })
    }

    fn apply_order<T: Item>(&self, level: &mut Level<T>) {
        if let Some(order) = self.order {
            level.sort(order);
        }
    }
}

impl Default for Apriori {
    fn default() -> Self {
        Self::new()
    }
}

/// Run Apriori with explicit thresholds.
///
/// Shorthand for building an [`Apriori`] and calling [`Apriori::fit`].
///
/// # Errors
///
/// Returns [`MiningError::EmptyTransactions`] when `transactions` is empty.
pub fn apriori<T: Item>(
    transactions: &[Transaction<T>],
    min_support: f64,
    confidence_threshold: f64,
    order: Option<OrderMode>,
) -> Result<MiningResult<T>> {
    Apriori::new()
        .with_min_support(min_support)
        .with_min_confidence(confidence_threshold)
        .with_optional_order(order)
        .fit(transactions)
}
