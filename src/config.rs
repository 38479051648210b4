//! Mining configuration.
//!
//! Thresholds and ordering can be kept in a TOML file:
//!
//! ```toml
//! min_support = 0.01
//! min_confidence = 0.3
//! order = "support-descending"
//! ```

use crate::error::Result;
use crate::order::OrderMode;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Thresholds and ordering for one mining run.
///
/// Missing fields fall back to the [`Apriori::new`](crate::miner::Apriori::new)
/// defaults.
///
/// # Example
///
/// ```
/// use arules::config::MiningConfig;
/// use arules::order::OrderMode;
///
/// let config = MiningConfig::from_toml_str("min_support = 0.5\norder = \"lexical-ascending\"").unwrap();
/// assert_eq!(config.min_support, 0.5);
/// assert_eq!(config.min_confidence, 0.5);
/// assert_eq!(config.order, Some(OrderMode::LexicalAscending));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MiningConfig {
    /// Minimum support (0.0 to 1.0)
    pub min_support: f64,
    /// Minimum rule confidence (0.0 to 1.0)
    pub min_confidence: f64,
    /// Ordering applied to every level
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<OrderMode>,
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            min_support: 0.1,
            min_confidence: 0.5,
            order: None,
        }
    }
}

impl MiningConfig {
    /// Parse a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`MiningError::Config`](crate::error::MiningError::Config) on
    /// malformed TOML, unknown keys or wrongly typed values.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, or a config error if
    /// it does not parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Render the configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns a config error if serialization fails.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| crate::error::MiningError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MiningError;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = MiningConfig::from_toml_str("").unwrap();
        assert_eq!(config, MiningConfig::default());
    }

    #[test]
    fn test_full_config() {
        let config = MiningConfig::from_toml_str(
            "min_support = 0.01\nmin_confidence = 0.3\norder = \"support-descending\"\n",
        )
        .unwrap();
        assert_eq!(config.min_support, 0.01);
        assert_eq!(config.min_confidence, 0.3);
        assert_eq!(config.order, Some(OrderMode::SupportDescending));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = MiningConfig::from_toml_str("min_lift = 2.0").unwrap_err();
        assert!(matches!(err, MiningError::Config(_)));
    }

    #[test]
    fn test_unknown_order_rejected() {
        let err = MiningConfig::from_toml_str("order = \"by-price\"").unwrap_err();
        assert!(matches!(err, MiningError::Config(_)));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = MiningConfig {
            min_support: 0.2,
            min_confidence: 0.6,
            order: Some(OrderMode::LexicalDescending),
        };
        let text = config.to_toml_string().unwrap();
        assert_eq!(MiningConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "min_confidence = 0.75").unwrap();

        let config = MiningConfig::load(file.path()).unwrap();
        assert_eq!(config.min_confidence, 0.75);
        assert_eq!(config.min_support, 0.1);
    }

    #[test]
    fn test_load_missing_file() {
        let err = MiningConfig::load("/nonexistent/arules.toml").unwrap_err();
        assert!(matches!(err, MiningError::Io(_)));
    }
}
