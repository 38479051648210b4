//! Output formatting utilities

use arules::level::FrequentItemsets;
use arules::rules::AssociationRule;
use colored::Colorize;
use std::fmt::Display;

/// Width of the longest bar in a chart
const BAR_WIDTH: usize = 40;

/// Print a section header
pub(crate) fn section(title: &str) {
    println!("\n{}", format!("=== {title} ===").cyan().bold());
}

/// Print a key-value pair
pub(crate) fn kv(key: &str, value: impl Display) {
    println!("  {}: {}", key.white().bold(), value);
}

/// Round a support or confidence for display, as the tables show it
pub(crate) fn fraction(value: f64) -> String {
    let rounded = format!("{value:.6}");
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Render a left-aligned boxed table
pub(crate) fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let rule: String = widths
        .iter()
        .map(|w| "-".repeat(w + 2))
        .collect::<Vec<_>>()
        .join("+");
    let rule = format!("+{rule}+");

    let mut out = Vec::with_capacity(rows.len() + 4);
    out.push(rule.clone());
    out.push(format_row(headers.iter().copied(), &widths));
    out.push(rule.clone());
    for row in rows {
        out.push(format_row(row.iter().map(String::as_str), &widths));
    }
    out.push(rule);
    out.join("\n")
}

fn format_row<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let body: Vec<String> = cells
        .zip(widths)
        .map(|(cell, &w)| {
            let pad = w.saturating_sub(cell.chars().count());
            format!(" {cell}{} ", " ".repeat(pad))
        })
        .collect();
    format!("|{}|", body.join("|"))
}

/// Print every level as a table of itemsets and supports
pub(crate) fn print_levels<T: arules::Item + Display>(itemsets: &FrequentItemsets<T>) {
    if itemsets.is_empty() {
        println!("{}", "No frequent itemsets.".yellow());
        return;
    }

    for (i, level) in itemsets.iter().enumerate() {
        println!("Support of itemsets of size {}:", i + 1);
        let rows: Vec<Vec<String>> = level
            .iter()
            .map(|(itemset, support)| vec![itemset.to_string(), fraction(support)])
            .collect();
        println!("{}", table(&["Items", "Support"], &rows));
    }
}

/// Print rules as a table
pub(crate) fn print_rules<T: arules::Item + Display>(rules: &[AssociationRule<T>]) {
    if rules.is_empty() {
        println!("{}", "No rules.".yellow());
        return;
    }

    let rows: Vec<Vec<String>> = rules
        .iter()
        .map(|rule| {
            vec![
                rule.antecedent.to_string(),
                rule.consequent.to_string(),
                fraction(rule.confidence),
                fraction(rule.lift),
            ]
        })
        .collect();
    println!(
        "{}",
        table(&["Antecedent", "Consequent", "Confidence", "Lift"], &rows)
    );
}

/// Render a horizontal bar chart, one bar per label
pub(crate) fn bar_chart(labels: &[String], values: &[f64], unit: &str) -> String {
    let max = values.iter().copied().fold(0.0_f64, f64::max);
    let label_width = labels.iter().map(String::len).max().unwrap_or(0);

    labels
        .iter()
        .zip(values)
        .map(|(label, &value)| {
            let len = if max > 0.0 {
                ((value / max) * BAR_WIDTH as f64).round() as usize
            } else {
                0
            };
            format!(
                "  {label:>label_width$} | {} {value:.3}{unit}",
                "#".repeat(len).blue()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction_rounds_to_six_places() {
        assert_eq!(fraction(0.7499999999999999), "0.75");
        assert_eq!(fraction(1.0), "1");
        assert_eq!(fraction(0.6), "0.6");
        assert_eq!(fraction(0.1234567), "0.123457");
        assert_eq!(fraction(0.0), "0");
    }

    #[test]
    fn test_table_alignment() {
        let rows = vec![
            vec!["{beer}".to_string(), "0.6".to_string()],
            vec!["{bread, milk}".to_string(), "0.6".to_string()],
        ];
        let rendered = table(&["Items", "Support"], &rows);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 6);
        assert!(lines.iter().all(|l| l.chars().count() == lines[0].chars().count()));
        assert!(lines[1].contains("Items"));
        assert!(lines[4].contains("{bread, milk}"));
    }

    #[test]
    fn test_bar_chart_scales_to_max() {
        colored::control::set_override(false);
        let labels = vec!["0.1".to_string(), "0.5".to_string()];
        let chart = bar_chart(&labels, &[10.0, 5.0], "");
        let lines: Vec<&str> = chart.lines().collect();
        assert_eq!(lines[0].matches('#').count(), BAR_WIDTH);
        assert_eq!(lines[1].matches('#').count(), BAR_WIDTH / 2);
    }
}
