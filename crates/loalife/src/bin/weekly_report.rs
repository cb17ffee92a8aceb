//! # Weekly Report
//!
//! Prints the weekly gold income of a saved search payload.
//!
//! ```text
//! weekly_report <payload.json> [--config <loalife.toml>] [--tables]
//! ```
//!
//! Set `RUST_LOG=loalife_economy=debug` to see what the ingestion step drops.

use std::path::PathBuf;

use anyhow::{bail, Context};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use loalife::{aggregate, parse_search_response, render, render_tables, CalculationConfig, Selections};

struct Args {
    payload: PathBuf,
    config: Option<PathBuf>,
    tables: bool,
}

fn parse_args() -> anyhow::Result<Option<Args>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(payload) = args.first().filter(|a| !a.starts_with("--")) else {
        return Ok(None);
    };

    let config = match args.iter().position(|a| a == "--config") {
        Some(i) => match args.get(i + 1) {
            Some(path) => Some(PathBuf::from(path)),
            None => bail!("--config needs a file"),
        },
        None => None,
    };

    Ok(Some(Args {
        payload: PathBuf::from(payload),
        config,
        tables: args.iter().any(|a| a == "--tables"),
    }))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let Some(args) = parse_args()? else {
        println!("Usage: weekly_report <payload.json> [--config <file.toml>] [--tables]");
        println!();
        println!("Options:");
        println!("  --config <file>  Calculation options and price overrides (TOML)");
        println!("  --tables         Also print every reward table at current prices");
        return Ok(());
    };

    let json = std::fs::read_to_string(&args.payload)
        .with_context(|| format!("cannot read {}", args.payload.display()))?;
    let search = parse_search_response(&json).context("cannot decode search payload")?;
    let config = match &args.config {
        Some(path) => CalculationConfig::from_path(path)?,
        None => CalculationConfig::default(),
    };
    info!(
        characters = search.roster.len(),
        servers = search.roster.servers().len(),
        "calculating weekly income"
    );

    let calculator = config.calculator(&search.prices);
    let mut selections = Selections::defaults(&search.roster);
    config.apply_to_selections(&search.roster, &mut selections);
    let options = config.aggregation_options(&search.roster, &calculator);

    let summary = aggregate(&search.roster, &selections, &calculator, &options);
    print!("{}", render(&summary));

    if args.tables {
        println!();
        print!("{}", render_tables(calculator.prices()));
    }
    Ok(())
}
