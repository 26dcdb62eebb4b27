//! Figures Core - dashboard over fiscal control figures
//!
//! Fetches control figures through a [`MetricsGateway`], maps the first
//! record through an ordered card layout, and publishes the cards for a
//! renderer:
//! - `CardLayout` decides which figures become cards and in what order
//! - `DashboardController` runs one fetch at a time and swaps the card list
//!   atomically
//! - `DisplayCard::render` applies the amount formatter and currency prefix
//!
//! # Example
//!
//! ```rust,ignore
//! use figures_core::{DashboardConfig, DashboardController};
//! use figures_gateway::SimulatedGateway;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let dashboard = DashboardController::new(Arc::new(SimulatedGateway::new()), DashboardConfig::new())?;
//! dashboard.refresh().await;
//!
//! for card in dashboard.render()?.unwrap_or_default() {
//!     println!("{card}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! [`MetricsGateway`]: figures_gateway::MetricsGateway

#![warn(unreachable_pub)]

pub mod card;
pub mod config;
pub mod controller;
pub mod error;
pub mod layout;

pub use card::{DisplayCard, RenderedCard};
pub use config::{DashboardConfig, DEFAULT_CURRENCY_SYMBOL};
pub use controller::{DashboardController, DashboardSnapshot, FetchOutcome, FetchPhase, FetchStats};
pub use error::{ConfigError, LayoutError};
pub use layout::{CardLayout, CardSpec};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the dashboard
    pub use crate::{
        CardLayout, CardSpec, DashboardConfig, DashboardController, DisplayCard, FetchOutcome,
        FetchPhase, RenderedCard,
    };
    pub use figures_gateway::{DateRange, FiguresQuery, GatewayError, MetricsGateway};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
