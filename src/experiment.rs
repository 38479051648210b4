//! Threshold sweeps.
//!
//! Runs the whole algorithm once per threshold and records how long each
//! run took and how much it found. Runs share nothing and by default
//! execute in parallel; a single run is never split across threads.
//!
//! Parallel runs compete for cores, so their `elapsed` values include that
//! contention. Use [`ThresholdSweep::sequential`] when the timings
//! themselves are the result.

use crate::error::Result;
use crate::itemset::{Item, Transaction};
use crate::miner::Apriori;
use crate::order::OrderMode;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

/// Which threshold a sweep varies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SweepAxis {
    /// Vary the rule confidence threshold at a fixed minimum support.
    Confidence,
    /// Vary the minimum support at a fixed confidence threshold.
    Support,
}

impl fmt::Display for SweepAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SweepAxis::Confidence => f.write_str("confidence"),
            SweepAxis::Support => f.write_str("support"),
        }
    }
}

impl FromStr for SweepAxis {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "confidence" => Ok(SweepAxis::Confidence),
            "support" => Ok(SweepAxis::Support),
            other => Err(format!("unknown sweep axis '{other}', expected confidence or support")),
        }
    }
}

/// Outcome of one run of a sweep.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepPoint {
    /// Value of the varied threshold
    pub threshold: f64,
    /// Number of frequent itemsets across all levels
    pub frequent_itemsets: usize,
    /// Number of levels (largest frequent itemset size)
    pub levels: usize,
    /// Number of rules generated
    pub rules: usize,
    /// Wall-clock time of mining plus rule generation
    pub elapsed: Duration,
}

/// A batch of independent runs over one threshold axis.
///
/// # Example
///
/// ```
/// use arules::experiment::{SweepAxis, ThresholdSweep};
/// use arules::itemset::Itemset;
///
/// let transactions = vec![
///     Itemset::new(["bread", "milk"]),
///     Itemset::new(["bread", "beer"]),
///     Itemset::new(["bread", "milk", "beer"]),
/// ];
///
/// let sweep = ThresholdSweep::new(SweepAxis::Confidence, 0.3, vec![0.1, 0.5, 0.9]);
/// let points = sweep.run(&transactions).unwrap();
///
/// assert_eq!(points.len(), 3);
/// assert!(points[0].rules >= points[2].rules);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdSweep {
    axis: SweepAxis,
    fixed: f64,
    thresholds: Vec<f64>,
    order: Option<OrderMode>,
    parallel: bool,
}

impl ThresholdSweep {
    /// Sweep `axis` over `thresholds`, holding the other threshold at `fixed`.
    #[must_use]
    pub fn new(axis: SweepAxis, fixed: f64, thresholds: Vec<f64>) -> Self {
        Self {
            axis,
            fixed,
            thresholds,
            order: None,
            parallel: true,
        }
    }

    /// Run thresholds one after another so each timing has the machine to
    /// itself.
    #[must_use]
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Order every level of every run.
    #[must_use]
    pub fn with_order(mut self, order: OrderMode) -> Self {
        self.order = Some(order);
        self
    }

    /// The varied axis.
    #[must_use]
    pub fn axis(&self) -> SweepAxis {
        self.axis
    }

    /// Value of the threshold that is held fixed.
    #[must_use]
    pub fn fixed(&self) -> f64 {
        self.fixed
    }

    /// True when runs execute concurrently.
    #[must_use]
    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Thresholds visited, in output order.
    #[must_use]
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    fn miner_for(&self, threshold: f64) -> Apriori {
        let miner = Apriori::new().with_optional_order(self.order);
        match self.axis {
            SweepAxis::Confidence => miner
                .with_min_support(self.fixed)
                .with_min_confidence(threshold),
            SweepAxis::Support => miner
                .with_min_support(threshold)
                .with_min_confidence(self.fixed),
        }
    }

    /// Run every threshold and collect the points in threshold order.
    ///
    /// # Errors
    ///
    /// Fails if any single run fails, e.g. with
    /// [`MiningError::EmptyTransactions`](crate::error::MiningError::EmptyTransactions).
    pub fn run<T: Item + Send + Sync>(&self, transactions: &[Transaction<T>]) -> Result<Vec<SweepPoint>> {
        if self.parallel {
            self.thresholds
                .par_iter()
                .map(|&threshold| self.run_point(threshold, transactions))
                .collect()
        } else {
            self.thresholds
                .iter()
                .map(|&threshold| self.run_point(threshold, transactions))
                .collect()
        }
    }

    fn run_point<T: Item>(&self, threshold: f64, transactions: &[Transaction<T>]) -> Result<SweepPoint> {
        let miner = self.miner_for(threshold);

        let start = Instant::now();
        let result = miner.fit(transactions)?;
        let elapsed = start.elapsed();

        let point = SweepPoint {
            threshold,
            frequent_itemsets: result.itemsets.total_itemsets(),
            levels: result.itemsets.len(),
            rules: result.rules.len(),
            elapsed,
        };
        tracing::info!(
            axis = %self.axis,
            threshold,
            parallel = self.parallel,
            rules = point.rules,
            elapsed_ms = elapsed.as_secs_f64() * 1e3,
            "sweep point"
        );
        Ok(point)
    }
}
