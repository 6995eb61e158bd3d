//! Assetboard Relay
//!
//! Run with: cargo run --bin assetboard
//!
//! # Configuration
//!
//! Settings come from `config.toml` (see `assetboard-cli init-config`) with
//! environment overrides:
//! - `ASSETBOARD_API_KEY` / `ASSETBOARD_SECRET_KEY`: exchange credentials
//! - `ASSETBOARD_HOST` / `ASSETBOARD_PORT`: feed address (default: localhost:8000)
//! - `RUST_LOG`: log filter (default: assetboard=info,tower_http=debug)

use assetboard::api::{serve, AppState};
use assetboard::config::{Config, LoggingConfig};
use assetboard::exchange::ExchangeClient;
use assetboard::upstream::{BalanceRelay, FeedStatus, UserDataStream};
use assetboard::websocket::{ConnectionHub, HubConfig};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::watch;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "assetboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Relay live exchange balances to Assetboard dashboards")]
struct Args {
    /// Config file (default: search standard locations)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the feed host
    #[arg(long)]
    host: Option<String>,

    /// Override the feed port
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_path = args.config.clone().or_else(Config::find_default_path);
    let mut config = match Config::load_or_env(config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            init_logging(&LoggingConfig::default());
            tracing::error!("{}", e);
            return Err(e.into());
        }
    };
    if let Some(host) = args.host {
        config.relay.host = host;
    }
    if let Some(port) = args.port {
        config.relay.port = port;
    }

    init_logging(&config.logging);

    match &config_path {
        Some(path) => tracing::info!("Loaded config from {:?}", path),
        None => tracing::info!("Using default config with environment overrides"),
    }
    tracing::info!("Starting Assetboard relay v{}", env!("CARGO_PKG_VERSION"));
    tracing::debug!(exchange = ?config.exchange, "Exchange settings");

    let hub = Arc::new(ConnectionHub::new(HubConfig {
        max_connections: config.relay.max_clients,
    }));
    let feed = Arc::new(FeedStatus::new());
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let upstream = if config.exchange.has_credentials() {
        let client = Arc::new(ExchangeClient::new(config.exchange.clone())?);
        let relay = Arc::new(BalanceRelay::new(
            Arc::clone(&client),
            Arc::clone(&hub),
            Arc::clone(&feed),
            config.exchange.quote_asset.clone(),
        ));

        // Seed the snapshot so the first dashboards do not wait for an event
        relay.refresh_and_publish().await;

        let stream = UserDataStream::new(client, relay, Arc::clone(&feed), config.upstream.clone());
        Some(stream.spawn(shutdown_rx))
    } else {
        tracing::warn!(
            "Exchange credentials not set (ASSETBOARD_API_KEY / ASSETBOARD_SECRET_KEY); \
             serving the feed without an upstream"
        );
        None
    };

    let state = AppState::new(hub, feed);
    serve(state, &config.relay.addr()).await?;

    let _ = shutdown_tx.send(true);
    if let Some((stream, keepalive)) = upstream {
        let _ = stream.await;
        let _ = keepalive.await;
    }

    tracing::info!("Assetboard relay stopped");
    Ok(())
}

fn init_logging(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("assetboard={},tower_http=debug", logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
