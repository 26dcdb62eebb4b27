//! Testing utilities for the control figures workspace
//!
//! Fake gateways and fixtures shared by the crates' test suites.

#![allow(missing_docs)]

use async_trait::async_trait;
use chrono::NaiveDate;
use figures_gateway::{
    demo_figures, ControlFigures, FiguresBatch, FiguresQuery, GatewayError, MetricsGateway,
};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

pub fn demo_batch() -> FiguresBatch {
    FiguresBatch::single(demo_figures())
}

pub fn batch_with_grand_total(grand_total: f64) -> FiguresBatch {
    FiguresBatch::single(ControlFigures {
        grand_total,
        ..demo_figures()
    })
}

/// Gateway that rejects every request with the same error.
#[derive(Debug)]
pub struct FailingGateway {
    error: GatewayError,
    calls: AtomicUsize,
}

impl FailingGateway {
    pub fn new(error: GatewayError) -> Self {
        Self {
            error,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MetricsGateway for FailingGateway {
    async fn fetch_figures(&self, _query: &FiguresQuery) -> Result<FiguresBatch, GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::task::yield_now().await;
        Err(self.error.clone())
    }

    fn name(&self) -> &str {
        "failing"
    }
}

/// Gateway that replays scripted replies in order, then serves the demo
/// batch. Records every query and the peak number of concurrent calls.
#[derive(Debug, Default)]
pub struct ScriptedGateway {
    latency: Duration,
    replies: Mutex<VecDeque<Result<FiguresBatch, GatewayError>>>,
    queries: Mutex<Vec<FiguresQuery>>,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
}

impl ScriptedGateway {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    #[must_use]
    pub fn then_ok(self, batch: FiguresBatch) -> Self {
        self.replies.lock().push_back(Ok(batch));
        self
    }

    #[must_use]
    pub fn then_err(self, error: GatewayError) -> Self {
        self.replies.lock().push_back(Err(error));
        self
    }

    pub fn queries(&self) -> Vec<FiguresQuery> {
        self.queries.lock().clone()
    }

    pub fn calls(&self) -> usize {
        self.queries.lock().len()
    }

    pub fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MetricsGateway for ScriptedGateway {
    async fn fetch_figures(&self, query: &FiguresQuery) -> Result<FiguresBatch, GatewayError> {
        self.queries.lock().push(query.clone());
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(now, Ordering::SeqCst);

        if self.latency.is_zero() {
            tokio::task::yield_now().await;
        } else {
            tokio::time::sleep(self.latency).await;
        }

        let reply = self.replies.lock().pop_front().unwrap_or_else(|| Ok(demo_batch()));
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        reply
    }

    fn name(&self) -> &str {
        "scripted"
    }
}
