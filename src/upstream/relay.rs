//! Balance Relay
//!
//! Turns upstream events into valued snapshots and hands them to the hub.

use std::sync::Arc;

use super::messages::Inbound;
use super::status::FeedStatus;
use crate::balance::Balance;
use crate::exchange::{BalanceSource, ExchangeResult};
use crate::valuation::value_balances;
use crate::websocket::ConnectionHub;

/// Refreshes balances from a [`BalanceSource`] and publishes them
pub struct BalanceRelay<S> {
    source: Arc<S>,
    hub: Arc<ConnectionHub>,
    status: Arc<FeedStatus>,
    quote_asset: String,
}

impl<S: BalanceSource> BalanceRelay<S> {
    pub fn new(
        source: Arc<S>,
        hub: Arc<ConnectionHub>,
        status: Arc<FeedStatus>,
        quote_asset: impl Into<String>,
    ) -> Self {
        Self {
            source,
            hub,
            status,
            quote_asset: quote_asset.into(),
        }
    }

    /// Fetch account and prices concurrently and value the balances
    pub async fn refresh(&self) -> ExchangeResult<Vec<Balance>> {
        let (account, prices) =
            tokio::try_join!(self.source.account(), self.source.ticker_prices())?;

        Ok(value_balances(&account.balances, &prices, &self.quote_asset))
    }

    /// Refresh and broadcast; failures go out to clients as error frames
    pub async fn refresh_and_publish(&self) {
        match self.refresh().await {
            Ok(balances) => {
                let assets = balances.len();
                let clients = self.hub.publish_balances(balances).await;
                tracing::info!(assets, clients, "Published balances");
            }
            Err(e) => {
                self.status.record_failure();
                tracing::warn!(error = %e, "Balance refresh failed");
                self.hub.publish_error(e.to_string()).await;
            }
        }
    }

    /// Handle one text frame from the exchange stream.
    ///
    /// Returns the reply to send back, if any.
    pub async fn handle_frame(&self, text: &str) -> Option<String> {
        match Inbound::parse(text) {
            Ok(inbound @ Inbound::Ping(_)) => {
                tracing::debug!("Answering application ping");
                inbound.reply()
            }
            Ok(Inbound::Event(_)) => {
                self.status.record_event();
                tracing::debug!(frame = %text, "Upstream event");
                self.refresh_and_publish().await;
                None
            }
            Err(e) => {
                self.status.record_failure();
                tracing::warn!(error = %e, frame = %text, "Unparseable upstream frame");
                self.hub.publish_error(e.to_string()).await;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exchange::{AccountInfo, ExchangeError, RawBalance, TickerPrice};
    use crate::websocket::ServerMessage;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::mpsc;

    struct FakeExchange {
        balances: Vec<RawBalance>,
        prices: Vec<TickerPrice>,
        fail: bool,
        account_calls: AtomicUsize,
    }

    impl FakeExchange {
        fn new(fail: bool) -> Self {
            Self {
                balances: vec![
                    RawBalance::new("BTC", 0.5, 0.0),
                    RawBalance::new("USDT", 100.0, 5.0),
                ],
                prices: vec![TickerPrice {
                    symbol: "BTCUSDT".to_string(),
                    price: 40000.0,
                }],
                fail,
                account_calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl BalanceSource for FakeExchange {
        async fn account(&self) -> ExchangeResult<AccountInfo> {
            self.account_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(ExchangeError::Timeout);
            }
            Ok(AccountInfo {
                balances: self.balances.clone(),
            })
        }

        async fn ticker_prices(&self) -> ExchangeResult<Vec<TickerPrice>> {
            Ok(self.prices.clone())
        }
    }

    async fn setup(
        fail: bool,
    ) -> (
        BalanceRelay<FakeExchange>,
        Arc<FakeExchange>,
        Arc<ConnectionHub>,
        mpsc::UnboundedReceiver<ServerMessage>,
    ) {
        let source = Arc::new(FakeExchange::new(fail));
        let hub = Arc::new(ConnectionHub::default());
        let (tx, rx) = mpsc::unbounded_channel();
        hub.register(tx).await.unwrap();

        let relay = BalanceRelay::new(
            Arc::clone(&source),
            Arc::clone(&hub),
            Arc::new(FeedStatus::new()),
            "USDT",
        );
        (relay, source, hub, rx)
    }

    #[tokio::test]
    async fn test_event_publishes_valued_snapshot() {
        let (relay, _source, hub, mut rx) = setup(false).await;

        assert!(relay.handle_frame(r#"{"c":"spot@private.account.v3.api"}"#).await.is_none());

        let expected = vec![
            Balance::new("BTC", 20000.0, 0.0),
            Balance::new("USDT", 100.0, 5.0),
        ];
        assert_eq!(rx.try_recv().unwrap(), ServerMessage::Balances(expected.clone()));
        assert_eq!(hub.latest().await.unwrap().balances, expected);
        assert!(relay.status.report().last_event.is_some());
    }

    #[tokio::test]
    async fn test_ping_is_answered_without_refresh() {
        let (relay, source, _hub, mut rx) = setup(false).await;

        let reply = relay.handle_frame(r#"{"ping": 42}"#).await;

        assert_eq!(reply.as_deref(), Some(r#"{"pong":42}"#));
        assert_eq!(source.account_calls.load(Ordering::SeqCst), 0);
        assert!(rx.try_recv().is_err());
        assert!(relay.status.report().last_event.is_none());
    }

    #[tokio::test]
    async fn test_refresh_failure_broadcasts_error() {
        let (relay, _source, hub, mut rx) = setup(true).await;

        relay.handle_frame(r#"{"c":"spot@private.account.v3.api"}"#).await;

        assert_eq!(
            rx.try_recv().unwrap(),
            ServerMessage::error("Request timed out")
        );
        assert!(hub.latest().await.is_none());
        assert_eq!(relay.status.report().refresh_failures, 1);
    }

    #[tokio::test]
    async fn test_unparseable_frame_broadcasts_error() {
        let (relay, source, _hub, mut rx) = setup(false).await;

        relay.handle_frame("not json").await;

        assert!(matches!(rx.try_recv().unwrap(), ServerMessage::Error { .. }));
        assert_eq!(source.account_calls.load(Ordering::SeqCst), 0);
        assert!(relay.status.report().last_event.is_none());
    }
}
