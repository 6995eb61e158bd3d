//! Exchange REST Integration
//!
//! Signed access to the exchange account endpoints the relay needs:
//! listen keys for the private user-data stream, account balances and
//! spot ticker prices.
//!
//! ## Modules
//!
//! - [`signing`]: HMAC-SHA256 request signatures
//! - [`client`]: HTTP client and the [`BalanceSource`] abstraction
//! - [`types`]: Response payloads

pub mod client;
pub mod error;
pub mod signing;
pub mod types;

pub use client::{BalanceSource, ExchangeClient, ListenKeySource};
pub use error::{ExchangeError, ExchangeResult};
pub use types::{AccountInfo, RawBalance, TickerPrice};
