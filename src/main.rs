//! Medboard Server
//!
//! Run with: cargo run --bin medboard [-- --config path/to/config.toml]
//!
//! # Configuration
//!
//! Read from the first of `--config`, `~/.config/medboard/config.toml`,
//! `/etc/medboard/config.toml`, `./config.toml`; `MEDBOARD_*` environment
//! variables override the file. `RUST_LOG` overrides the configured level.

use anyhow::Context;
use clap::Parser;
use medboard::api::{serve, AppState};
use medboard::config::{Config, LoggingConfig};
use medboard::store::RecordStore;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "medboard")]
#[command(about = "Hospital admin dashboard server")]
#[command(version)]
struct Args {
    /// Config file; defaults to the standard search locations
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match args.config {
        Some(path) => Config::load_with_env(&path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load_default(),
    };

    init_tracing(&config.logging);

    tracing::info!("Starting Medboard v{}", env!("CARGO_PKG_VERSION"));

    let store = Arc::new(RecordStore::seeded());
    let stats = store.get_stats();
    tracing::info!(
        total_patients = stats.total_patients,
        total_doctors = stats.total_doctors,
        "Record store seeded"
    );

    let state = AppState::new(
        store,
        config.api.clone(),
        config.navigation.to_navigation_config(),
    );

    serve(state, &config.api).await.context("server error")?;

    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("medboard={},tower_http=debug", logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);
    if logging.is_json() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
