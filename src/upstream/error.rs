//! Upstream stream errors

use thiserror::Error;

use crate::exchange::ExchangeError;

#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("Exchange error: {0}")]
    Exchange(#[from] ExchangeError),

    #[error("WebSocket error: {0}")]
    WebSocket(#[from] tokio_tungstenite::tungstenite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
