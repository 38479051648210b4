//! Ordering directives for frequent-itemset levels.
//!
//! Ordering only changes enumeration and display order; membership and
//! support values are never touched.

use crate::error::MiningError;
use crate::itemset::{Item, Itemset};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// How the entries of a level are ordered after filtering.
///
/// # Example
///
/// ```
/// use arules::order::OrderMode;
///
/// let mode: OrderMode = "lexical-asc".parse().unwrap();
/// assert_eq!(mode, OrderMode::LexicalAscending);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderMode {
    /// Lowest support first.
    SupportAscending,
    /// Highest support first.
    SupportDescending,
    /// Itemsets compared element-wise on their ascending-sorted items.
    LexicalAscending,
    /// Itemsets compared element-wise on their descending-sorted items,
    /// whole ordering reversed.
    LexicalDescending,
}

impl OrderMode {
    /// All four modes, in declaration order.
    pub const ALL: [OrderMode; 4] = [
        OrderMode::SupportAscending,
        OrderMode::SupportDescending,
        OrderMode::LexicalAscending,
        OrderMode::LexicalDescending,
    ];

    /// Compare two `(itemset, support)` entries under this mode.
    pub fn compare<T: Item>(self, a: (&Itemset<T>, f64), b: (&Itemset<T>, f64)) -> Ordering {
        match self {
            OrderMode::SupportAscending => a.1.total_cmp(&b.1),
            OrderMode::SupportDescending => b.1.total_cmp(&a.1),
            OrderMode::LexicalAscending => a.0.cmp(b.0),
            OrderMode::LexicalDescending => a.0.iter().rev().cmp(b.0.iter().rev()).reverse(),
        }
    }

    /// Short name accepted on the command line.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            OrderMode::SupportAscending => "support-asc",
            OrderMode::SupportDescending => "support-desc",
            OrderMode::LexicalAscending => "lexical-asc",
            OrderMode::LexicalDescending => "lexical-desc",
        }
    }
}

impl fmt::Display for OrderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderMode {
    type Err = MiningError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "support-asc" | "support-ascending" => Ok(OrderMode::SupportAscending),
            "support-desc" | "support-descending" => Ok(OrderMode::SupportDescending),
            "lexical-asc" | "lexical-ascending" => Ok(OrderMode::LexicalAscending),
            "lexical-desc" | "lexical-descending" => Ok(OrderMode::LexicalDescending),
            _ => Err(MiningError::UnknownOrderMode(s.to_string())),
        }
    }
}

/// Reorder `(itemset, support)` entries in place.
///
/// The sort is stable: entries that compare equal keep their relative order,
/// so applying the same mode twice is a no-op.
pub fn sort_items<T: Item>(entries: &mut [(Itemset<T>, f64)], mode: OrderMode) {
    entries.sort_by(|a, b| mode.compare((&a.0, a.1), (&b.0, b.1)));
}
