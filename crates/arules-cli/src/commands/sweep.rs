//! Sweep command implementation
//!
//! Times one full run per threshold and charts elapsed time and rule
//! count against the threshold.

use super::read_baskets;
use crate::error::{CliError, Result};
use crate::output;
use arules::experiment::ThresholdSweep;
use std::path::Path;

/// Run the sweep command
pub(crate) fn run(
    path: &Path,
    experiment: &ThresholdSweep,
    no_header: bool,
    delimiter: char,
    json: bool,
) -> Result<()> {
    if experiment.thresholds().is_empty() {
        return Err(CliError::InvalidArgument(
            "at least one threshold is required".to_string(),
        ));
    }

    let transactions = read_baskets(path, no_header, delimiter)?;
    let points = experiment.run(&transactions)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&points)?);
        return Ok(());
    }

    output::section("Sweep");
    output::kv("File", path.display());
    output::kv("Transactions", transactions.len());
    output::kv("Varied", experiment.axis());
    output::kv("Fixed", experiment.fixed());
    output::kv(
        "Runs",
        if experiment.is_parallel() { "parallel" } else { "sequential" },
    );

    let rows: Vec<Vec<String>> = points
        .iter()
        .map(|p| {
            vec![
                output::fraction(p.threshold),
                p.frequent_itemsets.to_string(),
                p.levels.to_string(),
                p.rules.to_string(),
                format!("{:.3}", p.elapsed.as_secs_f64() * 1e3),
            ]
        })
        .collect();
    println!(
        "{}",
        output::table(&["Threshold", "Itemsets", "Levels", "Rules", "Time (ms)"], &rows)
    );

    let labels: Vec<String> = points.iter().map(|p| output::fraction(p.threshold)).collect();

    output::section("Time (ms)");
    let times: Vec<f64> = points.iter().map(|p| p.elapsed.as_secs_f64() * 1e3).collect();
    println!("{}", output::bar_chart(&labels, &times, "ms"));

    output::section("Rules");
    let counts: Vec<f64> = points.iter().map(|p| p.rules as f64).collect();
    println!("{}", output::bar_chart(&labels, &counts, ""));

    Ok(())
}
