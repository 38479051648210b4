//! Error types for mining operations.
//!
//! Provides rich error context for library consumers.

use thiserror::Error;

/// Main error type for mining operations.
///
/// Covers invalid input (an empty transaction collection), inconsistent
/// leveled tables, and the I/O and parsing failures of the loaders.
///
/// # Examples
///
/// ```
/// use arules::error::MiningError;
///
/// let err = MiningError::MissingAntecedent {
///     antecedent: "{beer}".to_string(),
///     size: 1,
/// };
/// assert!(err.to_string().contains("{beer}"));
/// ```
#[derive(Error, Debug)]
pub enum MiningError {
    /// Support was requested over a collection with no transactions.
    #[error("empty input: support is undefined over zero transactions")]
    EmptyTransactions,

    /// A rule antecedent has no recorded support at its own level.
    #[error("inconsistent itemset table: antecedent {antecedent} missing from level {size}")]
    MissingAntecedent {
        /// Rendered antecedent itemset
        antecedent: String,
        /// Level (itemset size) the lookup was made in
        size: usize,
    },

    /// A rule consequent has no recorded support, so its lift is undefined.
    #[error("inconsistent itemset table: consequent {consequent} missing from level {size}")]
    MissingConsequent {
        /// Rendered consequent itemset
        consequent: String,
        /// Level (itemset size) the lookup was made in
        size: usize,
    },

    /// A level holds itemsets of the wrong size.
    #[error("level {level} holds itemsets of size {actual}, expected {expected}")]
    LevelSizeMismatch {
        /// 1-based level index
        level: usize,
        /// Size every itemset of the level must have
        expected: usize,
        /// Size actually found
        actual: usize,
    },

    /// Unrecognised ordering directive.
    #[error("unknown order mode '{0}', expected one of: support-asc, support-desc, lexical-asc, lexical-desc")]
    UnknownOrderMode(String),

    /// Configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Malformed delimited transaction source.
    #[error("CSV error at line {line}: {message}")]
    Csv {
        /// 1-based line of the offending record
        line: u64,
        /// Parser message
        message: String,
    },

    /// I/O error (file not found, permission denied, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MiningError {
    /// Create a missing-antecedent error for an itemset of the given size.
    #[must_use]
    pub fn missing_antecedent(antecedent: impl std::fmt::Display, size: usize) -> Self {
        Self::MissingAntecedent {
            antecedent: antecedent.to_string(),
            size,
        }
    }
}

impl From<csv::Error> for MiningError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map_or(0, csv::Position::line);
        let message = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(e) => MiningError::Io(e),
            _ => MiningError::Csv { line, message },
        }
    }
}

impl From<toml::de::Error> for MiningError {
    fn from(err: toml::de::Error) -> Self {
        MiningError::Config(err.message().to_string())
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, MiningError>;
