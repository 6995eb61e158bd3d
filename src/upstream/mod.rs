//! Exchange User-Data Stream
//!
//! Keeps a private stream to the exchange open and turns every account event
//! into a fresh, valued balance snapshot for the dashboards.
//!
//! ## Lifecycle
//!
//! 1. Obtain a listen key and connect to `{ws_url}?listenKey={key}`
//! 2. Subscribe to the configured streams
//! 3. Ping every `ping_interval_secs`; answer application pings
//! 4. On each event: refresh balances and broadcast them through the hub
//! 5. On close or error: wait `reconnect_delay_ms`, then start over
//!
//! A separate task extends the listen key while the relay runs.

mod error;
mod messages;
mod relay;
mod status;
mod stream;

pub use error::UpstreamError;
pub use messages::{Inbound, StreamRequest};
pub use relay::BalanceRelay;
pub use status::{FeedStatus, FeedStatusReport};
pub use stream::UserDataStream;
