//! Arules: Apriori frequent itemset mining and association rules in pure Rust.
//!
//! Given a collection of transactions, the miner finds every itemset whose
//! support reaches a threshold, level by level, and derives implication
//! rules between the subsets of each frequent itemset whose confidence
//! reaches a second threshold.
//!
//! # Quick Start
//!
//! ```
//! use arules::prelude::*;
//!
//! let transactions = vec![
//!     Itemset::new(["bread", "milk"]),
//!     Itemset::new(["bread", "cookies", "beer", "eggs"]),
//!     Itemset::new(["milk", "cookies", "beer", "cola"]),
//!     Itemset::new(["bread", "milk", "cookies", "beer"]),
//!     Itemset::new(["bread", "milk", "cookies", "cola"]),
//! ];
//!
//! let result = Apriori::new()
//!     .with_min_support(0.5)
//!     .with_min_confidence(0.5)
//!     .fit(&transactions)
//!     .unwrap();
//!
//! assert_eq!(result.itemsets.support_of(&Itemset::singleton("beer")), Some(0.6));
//! assert!(result
//!     .rules
//!     .iter()
//!     .any(|r| r.antecedent == Itemset::singleton("beer") && r.confidence == 1.0));
//! ```
//!
//! # Modules
//!
//! - [`itemset`]: Canonical itemset container and transactions
//! - [`support`]: Support counting and candidate filtering
//! - [`candidates`]: Candidate generation by self-join
//! - [`order`]: Level ordering modes
//! - [`level`]: Leveled frequent-itemset table
//! - [`miner`]: The Apriori miner
//! - [`rules`]: Association rule generation
//! - [`config`]: TOML configuration
//! - [`loader`]: CSV transaction loading
//! - [`experiment`]: Parallel threshold sweeps

pub mod candidates;
pub mod config;
pub mod error;
pub mod experiment;
pub mod itemset;
pub mod level;
pub mod loader;
pub mod miner;
pub mod order;
pub mod prelude;
pub mod rules;
pub mod support;

pub use error::{MiningError, Result};
pub use itemset::{Item, Itemset, Transaction};
pub use miner::{apriori, Apriori, MiningResult};
