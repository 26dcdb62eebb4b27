//! Simulated gateway
//!
//! Answers every query with the same fixed batch after a fixed delay, the way
//! a backend round-trip would look from the caller's side. No transport, no
//! retry, and it never fails.

use crate::error::GatewayError;
use crate::figures::{ControlFigures, FiguresBatch};
use crate::query::FiguresQuery;
use crate::MetricsGateway;
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Emulated round-trip latency
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(500);

/// The record the simulated backend always returns
#[must_use]
pub fn demo_figures() -> ControlFigures {
    ControlFigures {
        document_count: 128,
        grand_total: 452_300.75,
        vat: 54_321.12,
        petroleum_tax: 1200.0,
        hospitality_tourism: 800.0,
        ..ControlFigures::default()
    }
}

/// Fixed-response, fixed-latency gateway
#[derive(Debug)]
pub struct SimulatedGateway {
    latency: Duration,
    batch: FiguresBatch,
    calls: AtomicU64,
}

impl SimulatedGateway {
    /// Gateway returning [`demo_figures`] after [`DEFAULT_LATENCY`]
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            latency: DEFAULT_LATENCY,
            batch: FiguresBatch::single(demo_figures()),
            calls: AtomicU64::new(0),
        }
    }

    /// Gateway replaying a JSON payload instead of the demo record
    ///
    /// # Errors
    /// - `GatewayError::Decode` if the payload is not a valid batch
    pub fn from_json(payload: &str) -> Result<Self, GatewayError> {
        Ok(Self::new().with_batch(FiguresBatch::from_json(payload)?))
    }

    /// With latency
    #[inline]
    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// With batch
    #[inline]
    #[must_use]
    pub fn with_batch(mut self, batch: FiguresBatch) -> Self {
        self.batch = batch;
        self
    }

    /// Configured latency
    #[inline]
    #[must_use]
    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// Number of fetches served so far
    #[inline]
    #[must_use]
    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::Relaxed)
    }
}

impl Default for SimulatedGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MetricsGateway for SimulatedGateway {
    async fn fetch_figures(&self, query: &FiguresQuery) -> Result<FiguresBatch, GatewayError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(
            "Simulated fetch: type={} range={:?} latency={:?}",
            query.doc_type(),
            query.range().kind(),
            self.latency
        );

        tokio::time::sleep(self.latency).await;
        Ok(self.batch.clone())
    }

    fn name(&self) -> &str {
        "simulated"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::DateRange;
    use chrono::NaiveDate;

    #[tokio::test(start_paused = true)]
    async fn returns_demo_batch_after_latency() {
        let gateway = SimulatedGateway::new();
        let query = FiguresQuery::new("FACT").unwrap();

        let started = tokio::time::Instant::now();
        let batch = gateway.fetch_figures(&query).await.unwrap();

        assert!(started.elapsed() >= DEFAULT_LATENCY);
        assert_eq!(batch.len(), 1);
        assert_eq!(batch.first(), Some(&demo_figures()));
        assert_eq!(gateway.calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn ignores_query_contents() {
        let gateway = SimulatedGateway::new().with_latency(Duration::from_millis(5));
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

        let plain = gateway
            .fetch_figures(&FiguresQuery::new("FACT").unwrap())
            .await
            .unwrap();
        let ranged = gateway
            .fetch_figures(
                &FiguresQuery::new("NCRE")
                    .unwrap()
                    .with_range(DateRange::starting(day)),
            )
            .await
            .unwrap();

        assert_eq!(plain, ranged);
        assert_eq!(gateway.calls(), 2);
    }

    #[tokio::test]
    async fn replays_json_payload() {
        let gateway = SimulatedGateway::from_json(r#"{"data":[{"documentCount":7},{"documentCount":9}]}"#)
            .unwrap()
            .with_latency(Duration::ZERO);

        let batch = gateway
            .fetch_figures(&FiguresQuery::new("FACT").unwrap())
            .await
            .unwrap();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch.first().map(|f| f.document_count), Some(7));
    }

    #[test]
    fn demo_record_values() {
        let figures = demo_figures();
        assert_eq!(figures.document_count, 128);
        assert_eq!(figures.grand_total, 452_300.75);
        assert_eq!(figures.vat, 54_321.12);
        assert_eq!(figures.petroleum_tax, 1200.0);
        assert_eq!(figures.hospitality_tourism, 800.0);
        assert_eq!(figures.first_invalid_field(), None);
    }
}
