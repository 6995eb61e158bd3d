//! Exchange REST API Client
//!
//! HTTP client for the exchange's spot REST API.

use async_trait::async_trait;
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;

use super::error::{ExchangeError, ExchangeResult};
use super::signing::{signed_query, timestamp_ms};
use super::types::{AccountInfo, ListenKeyResponse, TickerPrice};
use crate::config::ExchangeConfig;

const API_KEY_HEADER: &str = "X-MEXC-APIKEY";
const USER_DATA_STREAM: &str = "/api/v3/userDataStream";
const ACCOUNT: &str = "/api/v3/account";
const TICKER_PRICE: &str = "/api/v3/ticker/price";

/// Source of account balances and prices used to value them
#[async_trait]
pub trait BalanceSource: Send + Sync {
    /// Current account balances
    async fn account(&self) -> ExchangeResult<AccountInfo>;

    /// Latest price for every spot symbol
    async fn ticker_prices(&self) -> ExchangeResult<Vec<TickerPrice>>;
}

/// Issuer of listen keys for the private user-data stream
#[async_trait]
pub trait ListenKeySource: Send + Sync {
    /// Open a user-data stream and return its listen key
    async fn create_listen_key(&self) -> ExchangeResult<String>;

    /// Extend the validity of a listen key
    async fn keepalive_listen_key(&self, listen_key: &str) -> ExchangeResult<()>;
}

/// Exchange REST API client
pub struct ExchangeClient {
    client: Client,
    config: ExchangeConfig,
}

impl ExchangeClient {
    /// Create a new client with the given configuration
    pub fn new(config: ExchangeConfig) -> ExchangeResult<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self { client, config })
    }

    fn signed(&self, params: &[(&str, String)]) -> ExchangeResult<String> {
        if !self.config.has_credentials() {
            return Err(ExchangeError::MissingCredentials);
        }
        Ok(signed_query(&self.config.secret_key, params))
    }

    fn url(&self, path: &str, query: Option<&str>) -> String {
        let base = self.config.rest_url.trim_end_matches('/');
        match query {
            Some(q) => format!("{}{}?{}", base, path, q),
            None => format!("{}{}", base, path),
        }
    }

    async fn request(
        &self,
        method: Method,
        path: &str,
        query: Option<&str>,
    ) -> ExchangeResult<Response> {
        let mut request = self.client.request(method, self.url(path, query));
        if query.is_some() {
            request = request.header(API_KEY_HEADER, &self.config.api_key);
        }
        request.send().await.map_err(ExchangeError::from_transport)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: Option<&str>,
    ) -> ExchangeResult<T> {
        let response = check_status(self.request(method, path, query).await?).await?;
        let body = response.text().await.map_err(ExchangeError::from_transport)?;
        serde_json::from_str(&body).map_err(|e| ExchangeError::Decode(e.to_string()))
    }
}

async fn check_status(response: Response) -> ExchangeResult<Response> {
    if response.status().is_success() {
        Ok(response)
    } else {
        let status = response.status();
        let message = response.text().await.unwrap_or_default();
        Err(ExchangeError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl ListenKeySource for ExchangeClient {
    async fn create_listen_key(&self) -> ExchangeResult<String> {
        let query = self.signed(&[("timestamp", timestamp_ms().to_string())])?;
        let response: ListenKeyResponse = self
            .send(Method::POST, USER_DATA_STREAM, Some(&query))
            .await?;

        tracing::debug!("Obtained listen key");
        Ok(response.listen_key)
    }

    async fn keepalive_listen_key(&self, listen_key: &str) -> ExchangeResult<()> {
        let query = self.signed(&[
            ("timestamp", timestamp_ms().to_string()),
            ("listenKey", listen_key.to_string()),
        ])?;
        let response = self
            .request(Method::PUT, USER_DATA_STREAM, Some(&query))
            .await?;
        check_status(response).await?;
        Ok(())
    }
}

#[async_trait]
impl BalanceSource for ExchangeClient {
    async fn account(&self) -> ExchangeResult<AccountInfo> {
        let query = self.signed(&[("timestamp", timestamp_ms().to_string())])?;
        self.send(Method::GET, ACCOUNT, Some(&query)).await
    }

    async fn ticker_prices(&self) -> ExchangeResult<Vec<TickerPrice>> {
        self.send(Method::GET, TICKER_PRICE, None).await
    }
}
