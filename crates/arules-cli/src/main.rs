//! arules - frequent itemset and association rule mining CLI
//!
//! Usage:
//!   arules demo                                  # Mine the built-in grocery baskets
//!   arules mine baskets.csv --min-support 0.01   # Mine a CSV of transactions
//!   arules mine baskets.csv --config arules.toml # Thresholds from a TOML file
//!   arules sweep baskets.csv                     # Time runs across confidence thresholds
//!   arules sweep baskets.csv --axis support      # Time runs across support thresholds
//!   arules sweep baskets.csv --sequential        # Time runs one at a time

use arules::experiment::SweepAxis;
use arules::order::OrderMode;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod commands;
mod error;
mod output;

use commands::{demo, mine, sweep};

/// arules - Apriori frequent itemsets and association rules
#[derive(Parser)]
#[command(name = "arules")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Mine the built-in five-basket grocery example
    Demo {
        /// Minimum support (0.0 to 1.0)
        #[arg(long, default_value = "0.1")]
        min_support: f64,

        /// Minimum rule confidence (0.0 to 1.0)
        #[arg(long, default_value = "0.1")]
        min_confidence: f64,

        /// Level ordering: support-asc, support-desc, lexical-asc, lexical-desc
        #[arg(long, default_value = "lexical-asc")]
        order: OrderMode,
    },

    /// Mine a CSV file of transactions, one basket per row
    Mine {
        /// Path to the CSV file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// TOML file with min_support, min_confidence and order
        #[arg(long, value_name = "TOML")]
        config: Option<PathBuf>,

        /// Minimum support, overrides the config file
        #[arg(long)]
        min_support: Option<f64>,

        /// Minimum rule confidence, overrides the config file
        #[arg(long)]
        min_confidence: Option<f64>,

        /// Level ordering, overrides the config file
        #[arg(long)]
        order: Option<OrderMode>,

        /// First row holds items, not column names
        #[arg(long)]
        no_header: bool,

        /// Field delimiter
        #[arg(long, default_value = ",")]
        delimiter: char,
    },

    /// Time one run per threshold and chart the results
    Sweep {
        /// Path to the CSV file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Threshold to vary: confidence or support
        #[arg(long, default_value = "confidence")]
        axis: SweepAxis,

        /// Value of the threshold held fixed
        #[arg(long, default_value = "0.01")]
        fixed: f64,

        /// Comma-separated thresholds to visit
        #[arg(long, value_delimiter = ',', default_value = "0.1,0.2,0.3,0.4,0.5")]
        thresholds: Vec<f64>,

        /// Level ordering
        #[arg(long)]
        order: Option<OrderMode>,

        /// Run thresholds one at a time instead of in parallel
        #[arg(long)]
        sequential: bool,

        /// First row holds items, not column names
        #[arg(long)]
        no_header: bool,

        /// Field delimiter
        #[arg(long, default_value = ",")]
        delimiter: char,
    },
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Demo {
            min_support,
            min_confidence,
            order,
        } => demo::run(min_support, min_confidence, order, cli.json),

        Commands::Mine {
            file,
            config,
            min_support,
            min_confidence,
            order,
            no_header,
            delimiter,
        } => mine::run(
            &file,
            &mine::Overrides {
                config,
                min_support,
                min_confidence,
                order,
            },
            no_header,
            delimiter,
            cli.json,
        ),

        Commands::Sweep {
            file,
            axis,
            fixed,
            thresholds,
            order,
            sequential,
            no_header,
            delimiter,
        } => {
            let mut experiment = arules::experiment::ThresholdSweep::new(axis, fixed, thresholds);
            if let Some(order) = order {
                experiment = experiment.with_order(order);
            }
            if sequential {
                experiment = experiment.sequential();
            }
            sweep::run(&file, &experiment, no_header, delimiter, cli.json)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            e.exit_code()
        }
    }
}
