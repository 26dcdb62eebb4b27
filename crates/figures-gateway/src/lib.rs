//! Figures Gateway - control-figure data model and fetch abstraction
//!
//! Provides:
//! - `ControlFigures`, the fixed-shape record of fiscal totals
//! - `FiguresQuery` / `DateRange`, the filter sent with each request
//! - `MetricsGateway`, the async seam between callers and a backend
//! - `SimulatedGateway`, a fixed-response implementation for demos and tests
//!
//! # Example
//!
//! ```rust,ignore
//! use figures_gateway::{FiguresQuery, MetricsGateway, SimulatedGateway};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let gateway = SimulatedGateway::new();
//! let batch = gateway.fetch_figures(&FiguresQuery::new("FACT")?).await?;
//! println!("documents: {}", batch.first().map_or(0, |f| f.document_count));
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]

pub mod error;
pub mod figures;
pub mod query;
pub mod simulated;

pub use error::{GatewayError, QueryError};
pub use figures::{ControlFigures, FigureField, FiguresBatch};
pub use query::{DateRange, FiguresQuery, RangeKind, DEFAULT_DOCUMENT_TYPE};
pub use simulated::{demo_figures, SimulatedGateway, DEFAULT_LATENCY};

use async_trait::async_trait;

/// Source of control figures
///
/// A simulated backend and a real network client satisfy the same contract,
/// so callers hold an `Arc<dyn MetricsGateway>` and never know which one
/// they talk to.
#[async_trait]
pub trait MetricsGateway: Send + Sync {
    /// Fetch the batch of figures matching `query`
    ///
    /// # Errors
    /// Any [`GatewayError`]; callers treat every variant as a failed fetch.
    async fn fetch_figures(&self, query: &FiguresQuery) -> Result<FiguresBatch, GatewayError>;

    /// Short name used in logs
    fn name(&self) -> &str {
        "gateway"
    }
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
