//! # Configuration State
//!
//! Presentation settings loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`CATALOG_*`)
//! 2. Config file (`config.toml`)
//! 3. Defaults (this file)
//!
//! ## Configuration File Format
//! ```toml
//! page_size = 5
//! search_debounce_ms = 500
//! currency_symbol = "₹"
//! default_view = "list"   # list | card
//! card_columns = 2
//! ```
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::path::{Path, PathBuf};
use std::time::Duration;

use catalog_core::{ViewMode, DEFAULT_PAGE_SIZE, DEFAULT_SEARCH_DEBOUNCE_MS};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{ConfigError, ConfigResult};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigState {
    /// Products per page.
    pub page_size: usize,

    /// Quiet period before a search commits, in milliseconds.
    pub search_debounce_ms: u64,

    /// Prefix for prices.
    pub currency_symbol: String,

    /// View mode on startup.
    pub default_view: ViewMode,

    /// Cards per row in card view.
    pub card_columns: usize,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - 5 products per page
    /// - 500 ms search debounce
    /// - Rupee prices, list view, two cards per row
    fn default() -> Self {
        ConfigState {
            page_size: DEFAULT_PAGE_SIZE,
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            currency_symbol: "₹".to_string(),
            default_view: ViewMode::List,
            card_columns: 2,
        }
    }
}

impl ConfigState {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file: `config_path`, else `CATALOG_CONFIG`, else the
    ///    platform config directory. A missing file is not an error.
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let path = config_path
            .or_else(|| std::env::var("CATALOG_CONFIG").ok().map(PathBuf::from))
            .or_else(Self::default_config_path);

        let mut config = match path {
            Some(path) if path.exists() => Self::from_file(&path)?,
            Some(path) => {
                debug!(?path, "Config file not found, using defaults");
                Self::default()
            }
            None => Self::default(),
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Reads a TOML config file. Missing keys fall back to defaults.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        info!(?path, "Loading config from file");
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.page_size == 0 {
            return Err(ConfigError::Invalid(
                "page_size must be greater than 0".into(),
            ));
        }

        if self.card_columns == 0 {
            return Err(ConfigError::Invalid(
                "card_columns must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Applies `CATALOG_*` environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from any key lookup. Unparseable values are
    /// logged and ignored.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(value) = lookup("CATALOG_PAGE_SIZE") {
            match value.trim().parse() {
                Ok(size) => {
                    debug!(page_size = size, "Overriding page size from environment");
                    self.page_size = size;
                }
                Err(_) => warn!(value = %value, "Ignoring invalid CATALOG_PAGE_SIZE"),
            }
        }

        if let Some(value) = lookup("CATALOG_DEBOUNCE_MS") {
            match value.trim().parse() {
                Ok(ms) => self.search_debounce_ms = ms,
                Err(_) => warn!(value = %value, "Ignoring invalid CATALOG_DEBOUNCE_MS"),
            }
        }

        if let Some(symbol) = lookup("CATALOG_CURRENCY_SYMBOL") {
            self.currency_symbol = symbol;
        }

        if let Some(value) = lookup("CATALOG_DEFAULT_VIEW") {
            match value.parse() {
                Ok(mode) => self.default_view = mode,
                Err(e) => warn!(value = %value, "Ignoring CATALOG_DEFAULT_VIEW: {}", e),
            }
        }

        if let Some(value) = lookup("CATALOG_CARD_COLUMNS") {
            match value.trim().parse() {
                Ok(columns) => self.card_columns = columns,
                Err(_) => warn!(value = %value, "Ignoring invalid CATALOG_CARD_COLUMNS"),
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "catalog", "console")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Debounce window as a `Duration`.
    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    /// Formats a price for display.
    ///
    /// ## Example
    /// ```rust
    /// use catalog_console::state::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_price(799.0), "₹799");
    /// assert_eq!(config.format_price(12.5), "₹12.5");
    /// ```
    pub fn format_price(&self, price: f64) -> String {
        format!("{}{}", self.currency_symbol, price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ConfigState::default();
        assert_eq!(config.page_size, 5);
        assert_eq!(config.search_debounce(), Duration::from_millis(500));
        assert_eq!(config.default_view, ViewMode::List);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: ConfigState = toml::from_str("page_size = 3\ndefault_view = \"card\"").unwrap();
        assert_eq!(config.page_size, 3);
        assert_eq!(config.default_view, ViewMode::Card);
        assert_eq!(config.search_debounce_ms, 500);
        assert_eq!(config.currency_symbol, "₹");
    }

    #[test]
    fn test_overrides() {
        let mut config = ConfigState::default();
        config.apply_overrides(lookup(&[
            ("CATALOG_PAGE_SIZE", "10"),
            ("CATALOG_DEBOUNCE_MS", "250"),
            ("CATALOG_CURRENCY_SYMBOL", "$"),
            ("CATALOG_DEFAULT_VIEW", "cards"),
        ]));

        assert_eq!(config.page_size, 10);
        assert_eq!(config.search_debounce_ms, 250);
        assert_eq!(config.format_price(15.0), "$15");
        assert_eq!(config.default_view, ViewMode::Card);
    }

    #[test]
    fn test_invalid_overrides_ignored() {
        let mut config = ConfigState::default();
        config.apply_overrides(lookup(&[
            ("CATALOG_PAGE_SIZE", "many"),
            ("CATALOG_DEFAULT_VIEW", "tiles"),
        ]));

        assert_eq!(config, ConfigState::default());
    }

    #[test]
    fn test_validation() {
        let mut config = ConfigState::default();
        config.page_size = 0;
        assert!(config.validate().is_err());

        config.page_size = 5;
        config.card_columns = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_file_missing_is_read_error() {
        let err = ConfigState::from_file(Path::new("/nonexistent/catalog/config.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
