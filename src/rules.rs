//! Association rule generation.
//!
//! Rules are derived from a finished [`FrequentItemsets`] table. Every
//! support needed for a confidence is read from the table, never recomputed
//! from transactions.

use crate::error::{MiningError, Result};
use crate::itemset::{Item, Itemset};
use crate::level::FrequentItemsets;
use itertools::Itertools;
use serde::Serialize;
use std::fmt;

/// Association rule: antecedent => consequent
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssociationRule<T> {
    /// Items in the antecedent (left side)
    pub antecedent: Itemset<T>,
    /// Items in the consequent (right side)
    pub consequent: Itemset<T>,
    /// Support: P(antecedent ∪ consequent)
    pub support: f64,
    /// Confidence: P(consequent | antecedent) = support / P(antecedent)
    pub confidence: f64,
    /// Lift: confidence / P(consequent)
    pub lift: f64,
}

impl<T: fmt::Display> fmt::Display for AssociationRule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} => {} (conf={:.6}, lift={:.6})",
            self.antecedent, self.consequent, self.confidence, self.lift
        )
    }
}

/// Derive every rule whose confidence reaches `confidence_threshold`.
///
/// Levels are visited smallest first and itemsets in each level's own
/// order. For one itemset, antecedents grow from one item upward, and the
/// antecedents of one size follow the combination order of the itemset's
/// sorted items.
///
/// An antecedent with support 0 has no defined confidence, so no rule is
/// emitted for it. A kept rule whose consequent has support 0 gets lift 0.
///
/// # Errors
///
/// Returns [`MiningError::MissingAntecedent`] if an antecedent has no
/// support recorded at its own level, and
/// [`MiningError::MissingConsequent`] if a kept rule's consequent has none.
/// Tables produced by the miner always satisfy both; hand-built ones might
/// not.
pub fn generate_rules<T: Item>(
    itemsets: &FrequentItemsets<T>,
    confidence_threshold: f64,
) -> Result<Vec<AssociationRule<T>>> {
    let mut rules = Vec::new();

    for level in itemsets.iter().skip(1) {
        for (itemset, itemset_support) in level.iter() {
            for size in 1..itemset.len() {
                for items in itemset.iter().cloned().combinations(size) {
                    let antecedent = Itemset::new(items);
                    let antecedent_support = itemsets.support_of(&antecedent).ok_or_else(|| {
                        MiningError::missing_antecedent(render(&antecedent), antecedent.len())
                    })?;

                    // An antecedent with support 0 gives NaN, which compares false both ways.
                    let confidence = itemset_support / antecedent_support;
                    if !confidence.is_finite() || confidence < confidence_threshold {
                        continue;
                    }

                    let consequent = itemset.difference(&antecedent);
                    let consequent_support =
                        itemsets.support_of(&consequent).ok_or_else(|| {
                            MiningError::MissingConsequent {
                                consequent: render(&consequent),
                                size: consequent.len(),
                            }
                        })?;
                    let lift = if consequent_support > 0.0 {
                        confidence / consequent_support
                    } else {
                        0.0
                    };

                    rules.push(AssociationRule {
                        antecedent,
                        consequent,
                        support: itemset_support,
                        confidence,
                        lift,
                    });
                }
            }
        }
    }

    tracing::debug!(
        rules = rules.len(),
        confidence_threshold,
        "generated association rules"
    );
    Ok(rules)
}

fn render<T: Item>(itemset: &Itemset<T>) -> String {
    format!("{:?}", itemset.as_slice())
}
