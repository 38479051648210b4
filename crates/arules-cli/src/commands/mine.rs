//! Mine command implementation

use super::read_baskets;
use crate::error::Result;
use crate::output;
use arules::config::MiningConfig;
use arules::order::OrderMode;
use arules::Apriori;
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Threshold sources for one run; flags win over the config file
#[derive(Debug, Default)]
pub(crate) struct Overrides {
    pub(crate) config: Option<PathBuf>,
    pub(crate) min_support: Option<f64>,
    pub(crate) min_confidence: Option<f64>,
    pub(crate) order: Option<OrderMode>,
}

impl Overrides {
    /// Resolve the final configuration
    pub(crate) fn resolve(&self) -> Result<MiningConfig> {
        let mut config = match &self.config {
            Some(path) => {
                super::validate_path(path)?;
                MiningConfig::load(path)?
            }
            None => MiningConfig::default(),
        };

        if let Some(min_support) = self.min_support {
            config.min_support = min_support;
        }
        if let Some(min_confidence) = self.min_confidence {
            config.min_confidence = min_confidence;
        }
        if self.order.is_some() {
            config.order = self.order;
        }
        Ok(config)
    }
}

/// Run the mine command
pub(crate) fn run(
    path: &Path,
    overrides: &Overrides,
    no_header: bool,
    delimiter: char,
    json: bool,
) -> Result<()> {
    let config = overrides.resolve()?;
    tracing::debug!(?config, "resolved mining configuration");
    let transactions = read_baskets(path, no_header, delimiter)?;

    let start = Instant::now();
    let result = Apriori::from_config(&config).fit(&transactions)?;
    let elapsed = start.elapsed();

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    output::section("Input");
    output::kv("File", path.display());
    output::kv("Transactions", transactions.len());
    output::kv("Min support", config.min_support);
    output::kv("Min confidence", config.min_confidence);
    output::kv(
        "Order",
        config
            .order
            .map_or_else(|| "none".to_string(), |order| order.to_string()),
    );

    output::section("Frequent itemsets");
    output::print_levels(&result.itemsets);

    output::section("Rules");
    output::print_rules(&result.rules);

    println!(
        "\n{} {} itemsets, {} rules in {:.6}s",
        "Done:".green().bold(),
        result.itemsets.total_itemsets(),
        result.rules.len(),
        elapsed.as_secs_f64()
    );
    Ok(())
}
