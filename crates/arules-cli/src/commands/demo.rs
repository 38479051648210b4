//! Demo command implementation
//!
//! Mines five small grocery baskets so the output can be checked by hand.

use crate::error::Result;
use crate::output;
use arules::order::OrderMode;
use arules::{Apriori, Itemset, Transaction};

/// Built-in grocery baskets
pub(crate) fn grocery_baskets() -> Vec<Transaction<&'static str>> {
    vec![
        Itemset::new(["bread", "milk"]),
        Itemset::new(["bread", "cookies", "beer", "eggs"]),
        Itemset::new(["milk", "cookies", "beer", "cola"]),
        Itemset::new(["bread", "milk", "cookies", "beer"]),
        Itemset::new(["bread", "milk", "cookies", "cola"]),
    ]
}

/// Run the demo command
pub(crate) fn run(min_support: f64, min_confidence: f64, order: OrderMode, json: bool) -> Result<()> {
    let transactions = grocery_baskets();
    let result = Apriori::new()
        .with_min_support(min_support)
        .with_min_confidence(min_confidence)
        .with_order(order)
        .fit(&transactions)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    output::section("Transactions");
    for (i, transaction) in transactions.iter().enumerate() {
        println!("  {}: {transaction}", i + 1);
    }

    output::section("Parameters");
    output::kv("Min support", min_support);
    output::kv("Min confidence", min_confidence);
    output::kv("Order", order);

    output::section("Frequent itemsets");
    output::print_levels(&result.itemsets);

    output::section("Rules");
    output::print_rules(&result.rules);

    Ok(())
}
