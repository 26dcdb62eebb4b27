//! Error types for the gateway layer
//!
//! Every [`GatewayError`] variant is a gateway failure: callers that only
//! care whether the fetch worked can treat them uniformly.

/// Failure of a figures fetch
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    /// Network or transport level failure
    #[error("transport failure: {0}")]
    Transport(String),

    /// Backend answered with an error status
    #[error("request rejected ({status}): {message}")]
    Rejected {
        /// Status code reported by the backend
        status: u16,
        /// Backend message
        message: String,
    },

    /// Backend answered with no records
    #[error("response batch is empty")]
    EmptyBatch,

    /// Payload could not be decoded
    #[error("malformed response: {0}")]
    Decode(String),
}

impl GatewayError {
    /// Check if a retry could plausibly succeed
    #[inline]
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::Rejected { status, .. } => *status >= 500,
            Self::EmptyBatch | Self::Decode(_) => false,
        }
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Invalid query parameters
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// Document type code is blank
    #[error("document type must not be empty")]
    EmptyDocumentType,

    /// Start date falls after end date
    #[error("start date {start} is after end date {end}")]
    InvertedRange {
        /// Requested start
        start: chrono::NaiveDate,
        /// Requested end
        end: chrono::NaiveDate,
    },
}
