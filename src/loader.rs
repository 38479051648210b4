//! CSV transaction loading.
//!
//! Each record of a delimited file is one basket. Every non-blank field is
//! an item; blank fields are absent items, so ragged rows padded with empty
//! cells load naturally.
//!
//! ```text
//! item1,item2,item3
//! bread,milk,
//! beer,cookies,eggs
//! ```

use crate::error::Result;
use crate::itemset::{Itemset, Transaction};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Options for reading a transaction file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// First record is a header row and carries no items
    pub has_headers: bool,
    /// Field delimiter
    pub delimiter: u8,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            has_headers: true,
            delimiter: b',',
        }
    }
}

impl LoadOptions {
    /// Treat the first record as data.
    #[must_use]
    pub fn without_headers(mut self) -> Self {
        self.has_headers = false;
        self
    }

    /// Use `delimiter` instead of a comma.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

/// Load transactions from a CSV file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened, or
/// [`MiningError::Csv`](crate::error::MiningError::Csv) for malformed or
/// non-UTF-8 records.
pub fn load_transactions(
    path: impl AsRef<Path>,
    options: &LoadOptions,
) -> Result<Vec<Transaction<String>>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let transactions = read_transactions(file, options)?;
    tracing::debug!(
        path = %path.display(),
        transactions = transactions.len(),
        "loaded transactions"
    );
    Ok(transactions)
}

/// Read transactions from any CSV source.
///
/// # Errors
///
/// Returns [`MiningError::Csv`](crate::error::MiningError::Csv) for
/// malformed or non-UTF-8 records.
///
/// # Example
///
/// ```
/// use arules::loader::{read_transactions, LoadOptions};
///
/// let data = "a,b,c\nbread,milk,\nbeer,,eggs\n";
/// let transactions = read_transactions(data.as_bytes(), &LoadOptions::default()).unwrap();
///
/// assert_eq!(transactions.len(), 2);
/// assert_eq!(transactions[0].len(), 2);
/// assert!(transactions[1].contains(&"eggs".to_string()));
/// ```
pub fn read_transactions<R: Read>(reader: R, options: &LoadOptions) -> Result<Vec<Transaction<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(options.has_headers)
        .delimiter(options.delimiter)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut transactions = Vec::new();
    for record in reader.records() {
        let record = record?;
        let transaction: Itemset<String> = record
            .iter()
            .filter(|field| !field.is_empty())
            .map(str::to_string)
            .collect();
        transactions.push(transaction);
    }

    Ok(transactions)
}
