//! Dashboard configuration
//!
//! Loaded from TOML; every field is optional and falls back to the demo
//! defaults:
//!
//! ```toml
//! currency_symbol = "Q "
//! document_type = "FACT"
//! latency_ms = 500
//!
//! [[cards]]
//! field = "grandTotal"
//! label = "Grand Total"
//! style_tag = "border-green-500"
//! ```

use crate::error::ConfigError;
use crate::layout::CardLayout;
use figures_gateway::{FiguresQuery, DEFAULT_DOCUMENT_TYPE, DEFAULT_LATENCY};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Currency prefix shown before every amount
pub const DEFAULT_CURRENCY_SYMBOL: &str = "Q ";

/// Dashboard configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    /// Prefix concatenated in front of formatted amounts
    pub currency_symbol: String,
    /// Document type code sent with every query
    pub document_type: String,
    /// Simulated gateway latency in milliseconds
    pub latency_ms: u64,
    /// Card table
    pub cards: CardLayout,
}

impl DashboardConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse TOML text
    ///
    /// # Errors
    /// - `ConfigError::Parse` for malformed TOML or unknown keys
    /// - `ConfigError::Invalid` / `ConfigError::Layout` if validation fails
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file
    ///
    /// # Errors
    /// - `ConfigError::Io` if the file cannot be read
    /// - anything [`DashboardConfig::from_toml_str`] returns
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("Loaded dashboard config from {}", path.display());
        Self::from_toml_str(&text)
    }

    /// Check field values
    ///
    /// # Errors
    /// - `ConfigError::Invalid` for a blank document type
    /// - `ConfigError::Layout` for an invalid card table
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.base_query()?;
        self.cards.validate()?;
        Ok(())
    }

    /// Query for the configured document type over all dates
    ///
    /// # Errors
    /// - `ConfigError::Invalid` for a blank document type
    pub fn base_query(&self) -> Result<FiguresQuery, ConfigError> {
        FiguresQuery::new(self.document_type.as_str())
            .map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// With currency symbol
    #[inline]
    #[must_use]
    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    /// With document type
    #[inline]
    #[must_use]
    pub fn with_document_type(mut self, doc_type: impl Into<String>) -> Self {
        self.document_type = doc_type.into();
        self
    }

    /// With latency
    #[inline]
    #[must_use]
    pub fn with_latency_ms(mut self, latency_ms: u64) -> Self {
        self.latency_ms = latency_ms;
        self
    }

    /// With card layout
    #[inline]
    #[must_use]
    pub fn with_cards(mut self, cards: CardLayout) -> Self {
        self.cards = cards;
        self
    }

    /// Latency as a duration
    #[inline]
    #[must_use]
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            document_type: DEFAULT_DOCUMENT_TYPE.to_string(),
            latency_ms: u64::try_from(DEFAULT_LATENCY.as_millis()).unwrap_or(500),
            cards: CardLayout::default(),
        }
    }
}
