//! Terminal front-end: runs one fetch cycle and prints the cards.

use anyhow::Context;
use figures_core::{DashboardConfig, DashboardController, FetchOutcome, RenderedCard};
use figures_gateway::SimulatedGateway;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonOut<'a> {
    ok: bool,
    currency_symbol: &'a str,
    cards: Vec<RenderedCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = cli::command().get_matches();
    init_tracing(args.get_flag("log-json"));

    let config = match args.get_one::<PathBuf>("config") {
        Some(path) => {
            let config = DashboardConfig::load(path)
                .with_context(|| format!("loading {}", path.display()))?;
            tracing::info!("Loaded config from {}", path.display());
            config
        }
        None => {
            tracing::debug!("No config file given, using defaults");
            DashboardConfig::default()
        }
    };
    let config = cli::apply_overrides(config, &args);
    let range = cli::date_range(&args)?;

    let gateway = match args.get_one::<PathBuf>("fixture") {
        Some(path) => {
            let payload = std::fs::read_to_string(path)
                .with_context(|| format!("reading fixture {}", path.display()))?;
            tracing::info!("Replaying fixture {}", path.display());
            SimulatedGateway::from_json(&payload)?
        }
        None => SimulatedGateway::new(),
    }
    .with_latency(config.latency());

    tracing::info!(
        document_type = %config.document_type,
        latency_ms = config.latency_ms,
        cards = config.cards.len(),
        "Starting dashboard"
    );
    let dashboard = DashboardController::new(Arc::new(gateway), config)?;
    tracing::info!(
        kind = ?range.kind(),
        start = ?range.start(),
        end = ?range.end(),
        "Selected range"
    );
    dashboard.select_range(range);

    let outcome = dashboard.refresh().await;
    let cards = dashboard.render()?.unwrap_or_default();
    let error = match &outcome {
        FetchOutcome::Failed(err) => Some(err.to_string()),
        FetchOutcome::Updated { .. } => None,
    };

    if args.get_flag("json") {
        let out = JsonOut {
            ok: error.is_none(),
            currency_symbol: dashboard.currency_symbol(),
            cards,
            error,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        for card in &cards {
            println!("{card}");
        }
        if let Some(error) = &error {
            eprintln!("fetch failed: {error}");
        }
    }

    if !outcome.is_updated() {
        std::process::exit(1);
    }
    Ok(())
}
