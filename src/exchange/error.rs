//! Exchange error types

use thiserror::Error;

/// Errors returned by the exchange client
#[derive(Error, Debug)]
pub enum ExchangeError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Request timed out")]
    Timeout,

    #[error("Exchange unavailable")]
    Unavailable,

    #[error("Exchange returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Unexpected response: {0}")]
    Decode(String),

    #[error("API credentials are not configured")]
    MissingCredentials,
}

impl ExchangeError {
    /// Map a transport error onto the timeout/unavailable variants where possible
    pub(crate) fn from_transport(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ExchangeError::Timeout
        } else if e.is_connect() {
            ExchangeError::Unavailable
        } else {
            ExchangeError::Request(e)
        }
    }
}

pub type ExchangeResult<T> = Result<T, ExchangeError>;
