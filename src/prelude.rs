//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use arules::prelude::*;
//! ```

pub use crate::config::MiningConfig;
pub use crate::error::MiningError;
pub use crate::experiment::{SweepAxis, SweepPoint, ThresholdSweep};
pub use crate::itemset::{Item, Itemset, Transaction};
pub use crate::level::{FrequentItemsets, Level};
pub use crate::loader::{load_transactions, read_transactions, LoadOptions};
pub use crate::miner::{apriori, Apriori, MiningResult};
pub use crate::order::OrderMode;
pub use crate::rules::AssociationRule;
