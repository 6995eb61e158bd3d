//! # Assetboard
//!
//! Live exchange balance relay for the Assetboard dashboard.
//!
//! The relay holds a private user-data stream to the exchange. Every account
//! event triggers a refresh of balances and prices; balances are valued in
//! the quote asset and the full set is pushed to every dashboard connected
//! on `/ws`.
//!
//! ## Modules
//!
//! - [`exchange`]: Signed REST client for the exchange
//! - [`valuation`]: Conversion of raw balances into the quote asset
//! - [`upstream`]: User-data stream lifecycle
//! - [`websocket`]: Dashboard fan-out hub
//! - [`api`]: HTTP server with Axum
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use assetboard::{value_balances, ExchangeClient, BalanceSource, ExchangeConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ExchangeClient::new(ExchangeConfig::default())?;
//!
//!     let account = client.account().await?;
//!     let prices = client.ticker_prices().await?;
//!
//!     for balance in value_balances(&account.balances, &prices, "USDT") {
//!         println!("{}: {:.4}", balance.asset, balance.total());
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod balance;
pub mod config;
pub mod exchange;
pub mod upstream;
pub mod valuation;
pub mod websocket;

// Re-export top-level types for convenience
pub use balance::{format_amount, Balance};

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{
    Config, ConfigError, ExchangeConfig, LoggingConfig, RelayConfig, UpstreamConfig,
};

pub use exchange::{
    BalanceSource, ExchangeClient, ExchangeError, ListenKeySource, RawBalance, TickerPrice,
};

pub use upstream::{BalanceRelay, FeedStatus, UpstreamError, UserDataStream};

pub use valuation::value_balances;

pub use websocket::{websocket_handler, ConnectionHub, HubConfig, HubError, ServerMessage};
