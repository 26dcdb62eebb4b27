use chrono::NaiveDate;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use figures_core::DashboardConfig;
use figures_gateway::DateRange;
use std::path::PathBuf;

pub(crate) fn command() -> Command {
    Command::new("figures-dashboard")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Fetch control figures and print them as summary cards")
        .arg(
            Arg::new("config")
                .long("config")
                .value_parser(value_parser!(PathBuf))
                .help("TOML configuration file"),
        )
        .arg(
            Arg::new("type")
                .long("type")
                .help("Document type code (overrides config)"),
        )
        .arg(
            Arg::new("from")
                .long("from")
                .value_parser(parse_date)
                .help("First day of the range, YYYY-MM-DD"),
        )
        .arg(
            Arg::new("to")
                .long("to")
                .value_parser(parse_date)
                .help("Last day of the range, YYYY-MM-DD"),
        )
        .arg(
            Arg::new("currency")
                .long("currency")
                .help("Currency prefix (overrides config)"),
        )
        .arg(
            Arg::new("latency-ms")
                .long("latency-ms")
                .value_parser(value_parser!(u64))
                .help("Simulated backend latency (overrides config)"),
        )
        .arg(
            Arg::new("fixture")
                .long("fixture")
                .value_parser(value_parser!(PathBuf))
                .help("JSON response the simulated backend replays instead of the demo record"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Output machine-readable JSON"),
        )
        .arg(
            Arg::new("log-json")
                .long("log-json")
                .action(ArgAction::SetTrue)
                .help("Emit logs as JSON lines on stderr"),
        )
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|e| format!("invalid date '{raw}': {e}"))
}

/// Fold command-line overrides into the loaded configuration.
pub(crate) fn apply_overrides(mut config: DashboardConfig, args: &ArgMatches) -> DashboardConfig {
    if let Some(doc_type) = args.get_one::<String>("type") {
        config = config.with_document_type(doc_type.clone());
    }
    if let Some(currency) = args.get_one::<String>("currency") {
        config = config.with_currency_symbol(currency.clone());
    }
    if let Some(latency_ms) = args.get_one::<u64>("latency-ms") {
        config = config.with_latency_ms(*latency_ms);
    }
    config
}

pub(crate) fn date_range(args: &ArgMatches) -> Result<DateRange, figures_gateway::QueryError> {
    DateRange::new(
        args.get_one::<NaiveDate>("from").copied(),
        args.get_one::<NaiveDate>("to").copied(),
    )
}
