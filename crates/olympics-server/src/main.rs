//! olympics-server binary.
//!
//! Reads `config.toml` (or the path given with `--config`), loads the dataset
//! once, and serves the dashboard API under `/api`.
//!
//! # Checking a dataset
//!
//! To load the configured dataset and print the overview without serving:
//!
//! ```
//! cargo run -p olympics-server -- --check
//! ```

mod settings;

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use axum::Router;
use clap::Parser;
use olympics_api::{AppState, api_router};
use olympics_core::view::build_overview;
use olympics_store::{DatasetStore, LoadStatus, Source};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::settings::ServerConfig;

#[derive(Parser)]
#[command(author, version, about = "Olympics dashboard API server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  /// Load the dataset, print the overview as JSON and exit.
  #[arg(long)]
  check: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let server_cfg = ServerConfig::load(&cli.config)
    .with_context(|| format!("failed to read config from {:?}", cli.config))?;

  let source = Source::from_location(&server_cfg.data_source).with_context(
    || format!("failed to set up data source {:?}", server_cfg.data_source),
  )?;

  // Initial load. A failure leaves the store empty rather than aborting.
  let store = DatasetStore::new();
  if store.load(&source).await == LoadStatus::Reset {
    tracing::warn!("starting with an empty dataset");
  }

  // Helper mode: print the overview and exit.
  if cli.check {
    let overview = build_overview(&store.current());
    println!("{}", serde_json::to_string_pretty(&overview)?);
    return Ok(());
  }

  let state = AppState {
    store,
    source: Arc::new(source),
  };

  let app = Router::new()
    .nest("/api", api_router(state))
    .layer(TraceLayer::new_for_http());
  let address = server_cfg.address();

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
