//! Command implementations

pub(crate) mod demo;
pub(crate) mod mine;
pub(crate) mod sweep;

use crate::error::{CliError, Result};
use arules::loader::{load_transactions, LoadOptions};
use arules::Transaction;
use std::path::Path;

/// Reject paths that are missing or not regular files
pub(crate) fn validate_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(CliError::NotAFile(path.to_path_buf()));
    }
    Ok(())
}

/// Build reader options from the shared CSV flags
pub(crate) fn load_options(no_header: bool, delimiter: char) -> Result<LoadOptions> {
    if !delimiter.is_ascii() {
        return Err(CliError::InvalidArgument(format!(
            "delimiter must be a single ASCII character, got '{delimiter}'"
        )));
    }

    let mut options = LoadOptions::default().with_delimiter(delimiter as u8);
    if no_header {
        options = options.without_headers();
    }
    Ok(options)
}

/// Validate and read a transaction file
pub(crate) fn read_baskets(
    path: &Path,
    no_header: bool,
    delimiter: char,
) -> Result<Vec<Transaction<String>>> {
    validate_path(path)?;
    let options = load_options(no_header, delimiter)?;
    Ok(load_transactions(path, &options)?)
}
