//! Dashboard controller
//!
//! Runs fetch cycles against a [`MetricsGateway`] and publishes the resulting
//! card list:
//! - One gateway call in flight at a time; overlapping refreshes queue
//! - The card list is replaced as a whole, never patched
//! - Gateway failures are logged and counted, never propagated

use crate::card::{DisplayCard, RenderedCard};
use crate::config::DashboardConfig;
use crate::error::ConfigError;
use figures_format::FormatError;
use figures_gateway::{DateRange, FiguresBatch, FiguresQuery, GatewayError, MetricsGateway};
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::sync::watch;

/// Fetch lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FetchPhase {
    /// No fetch running
    #[default]
    Idle,
    /// Waiting on the gateway
    Pending,
}

/// Everything a renderer needs, published atomically
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardSnapshot {
    /// Current phase
    pub phase: FetchPhase,
    /// Cards from the last successful fetch, absent before the first one
    pub cards: Option<Arc<[DisplayCard]>>,
    /// Bumped on every successful update
    pub generation: u64,
}

/// Result of one refresh
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// Card list replaced
    Updated {
        /// Generation now published
        generation: u64,
        /// Number of cards published
        cards: usize,
    },
    /// Gateway failed; previous cards left in place
    Failed(GatewayError),
}

impl FetchOutcome {
    /// Whether the card list changed
    #[inline]
    #[must_use]
    pub fn is_updated(&self) -> bool {
        matches!(self, Self::Updated { .. })
    }
}

/// Fetch counters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchStats {
    /// Refreshes that reached the gateway
    pub attempts: u64,
    /// Refreshes that published cards
    pub successes: u64,
    /// Refreshes that failed
    pub failures: u64,
    /// Message of the most recent failure
    pub last_failure: Option<String>,
}

/// Owns the card list and drives fetch cycles
pub struct DashboardController {
    gateway: Arc<dyn MetricsGateway>,
    config: DashboardConfig,
    base_query: FiguresQuery,
    range: Mutex<DateRange>,
    fetch_gate: tokio::sync::Mutex<()>,
    snapshot_tx: watch::Sender<DashboardSnapshot>,
    snapshot_rx: watch::Receiver<DashboardSnapshot>,
    stats: Mutex<FetchStats>,
}

impl DashboardController {
    /// Create a controller over `gateway`
    ///
    /// # Errors
    /// - `ConfigError` if the configuration does not validate
    pub fn new(
        gateway: Arc<dyn MetricsGateway>,
        config: DashboardConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let base_query = config.base_query()?;
        let (snapshot_tx, snapshot_rx) = watch::channel(DashboardSnapshot::default());

        Ok(Self {
            gateway,
            config,
            base_query,
            range: Mutex::new(DateRange::unbounded()),
            fetch_gate: tokio::sync::Mutex::new(()),
            snapshot_tx,
            snapshot_rx,
            stats: Mutex::new(FetchStats::default()),
        })
    }

    /// Run one fetch cycle
    ///
    /// Waits for any refresh already in flight, then queries the gateway and
    /// maps the first record of the batch through the card layout. On
    /// failure the published cards stay as they were.
    pub async fn refresh(&self) -> FetchOutcome {
        let _turn = self.fetch_gate.lock().await;

        let query = self.base_query.clone().with_range(*self.range.lock());
        self.snapshot_tx.send_modify(|s| s.phase = FetchPhase::Pending);
        let _idle = IdleOnDrop(&self.snapshot_tx);
        self.stats.lock().attempts += 1;

        tracing::info!(
            gateway = self.gateway.name(),
            "Fetching control figures: type={} range={:?}",
            query.doc_type(),
            query.range().kind()
        );

        let result = self
            .gateway
            .fetch_figures(&query)
            .await
            .and_then(|batch| self.map_batch(&batch));

        match result {
            Ok(cards) => {
                let count = cards.len();
                let mut generation = 0;
                self.snapshot_tx.send_modify(|s| {
                    s.generation += 1;
                    s.cards = Some(cards);
                    s.phase = FetchPhase::Idle;
                    generation = s.generation;
                });
                self.stats.lock().successes += 1;

                tracing::info!("Published {} cards (generation {})", count, generation);
                FetchOutcome::Updated {
                    generation,
                    cards: count,
                }
            }
            Err(err) => {
                tracing::error!("Error fetching control figures: {}", err);
                let mut stats = self.stats.lock();
                stats.failures += 1;
                stats.last_failure = Some(err.to_string());
                FetchOutcome::Failed(err)
            }
        }
    }

    fn map_batch(&self, batch: &FiguresBatch) -> Result<Arc<[DisplayCard]>, GatewayError> {
        let figures = batch.first().ok_or(GatewayError::EmptyBatch)?;
        if batch.len() > 1 {
            tracing::debug!("Ignoring {} extra records in batch", batch.len() - 1);
        }
        Ok(self.config.cards.build(figures))
    }

    /// Set the date range used by subsequent refreshes
    pub fn select_range(&self, range: DateRange) {
        tracing::debug!("Selected range {:?}", range.kind());
        *self.range.lock() = range;
    }

    /// Range used by the next refresh
    #[must_use]
    pub fn selected_range(&self) -> DateRange {
        *self.range.lock()
    }

    /// Currency prefix for rendering
    #[inline]
    #[must_use]
    pub fn currency_symbol(&self) -> &str {
        &self.config.currency_symbol
    }

    /// Cards from the last successful fetch
    #[must_use]
    pub fn cards(&self) -> Option<Arc<[DisplayCard]>> {
        self.snapshot_rx.borrow().cards.clone()
    }

    /// Current phase, cards and generation
    #[must_use]
    pub fn snapshot(&self) -> DashboardSnapshot {
        self.snapshot_rx.borrow().clone()
    }

    /// Receiver notified on every phase or card change
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<DashboardSnapshot> {
        self.snapshot_tx.subscribe()
    }

    /// Format the current cards with the configured currency prefix
    ///
    /// # Errors
    /// - `FormatError::NonFinite` if a card carries a NaN or infinite value
    pub fn render(&self) -> Result<Option<Vec<RenderedCard>>, FormatError> {
        self.cards()
            .map(|cards| {
                cards
                    .iter()
                    .map(|card| card.render(self.currency_symbol()))
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()
    }

    /// Fetch counters
    #[must_use]
    pub fn stats(&self) -> FetchStats {
        self.stats.lock().clone()
    }

    /// Get configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }
}

impl std::fmt::Debug for DashboardController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardController")
            .field("gateway", &self.gateway.name())
            .field("config", &self.config)
            .field("range", &*self.range.lock())
            .field("snapshot", &*self.snapshot_rx.borrow())
            .finish_non_exhaustive()
    }
}

/// Returns the phase to idle if a refresh is dropped mid-flight.
struct IdleOnDrop<'a>(&'a watch::Sender<DashboardSnapshot>);

impl Drop for IdleOnDrop<'_> {
    fn drop(&mut self) {
        self.0.send_if_modified(|s| {
            let was_pending = s.phase == FetchPhase::Pending;
            s.phase = FetchPhase::Idle;
            was_pending
        });
    }
}
