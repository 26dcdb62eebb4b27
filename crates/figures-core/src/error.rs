//! Error types for the dashboard layer
//!
//! Gateway failures never appear here: the controller absorbs them. These
//! errors cover setup problems only.

use std::path::PathBuf;

/// Card layout errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// Layout has no cards
    #[error("card layout is empty")]
    Empty,

    /// A card has a blank label
    #[error("card {index} has a blank label")]
    BlankLabel {
        /// Position in the layout
        index: usize,
    },
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config {path}: {source}")]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Invalid document type or other field value
    #[error("invalid configuration: {0}")]
    Invalid(String),

    /// Invalid card layout
    #[error("invalid card layout: {0}")]
    Layout(#[from] LayoutError),
}
