//! User-data stream connection loop

use futures_util::{SinkExt, StreamExt};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{watch, RwLock};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, sleep, Instant};
use tokio_tungstenite::{connect_async, tungstenite::Message};

use super::error::UpstreamError;
use super::messages::StreamRequest;
use super::relay::BalanceRelay;
use super::status::FeedStatus;
use crate::config::UpstreamConfig;
use crate::exchange::{BalanceSource, ListenKeySource};

/// Private exchange stream feeding a [`BalanceRelay`]
pub struct UserDataStream<C> {
    client: Arc<C>,
    relay: Arc<BalanceRelay<C>>,
    status: Arc<FeedStatus>,
    config: UpstreamConfig,
    listen_key: Arc<RwLock<Option<String>>>,
}

impl<C> UserDataStream<C>
where
    C: BalanceSource + ListenKeySource + 'static,
{
    pub fn new(
        client: Arc<C>,
        relay: Arc<BalanceRelay<C>>,
        status: Arc<FeedStatus>,
        config: UpstreamConfig,
    ) -> Self {
        Self {
            client,
            relay,
            status,
            config,
            listen_key: Arc::new(RwLock::new(None)),
        }
    }

    /// Spawn the connection loop and the listen key keepalive task.
    ///
    /// Both stop once `shutdown` turns true.
    pub fn spawn(self, shutdown: watch::Receiver<bool>) -> (JoinHandle<()>, JoinHandle<()>) {
        let keepalive = tokio::spawn(run_keepalive(
            Arc::clone(&self.client),
            Arc::clone(&self.listen_key),
            self.config.keepalive_interval(),
            self.config.keepalive_retry(),
            shutdown.clone(),
        ));
        let stream = tokio::spawn(self.run(shutdown));
        (stream, keepalive)
    }

    /// Connect, stream, and reconnect until shutdown
    pub async fn run(self, mut shutdown: watch::Receiver<bool>) {
        loop {
            if *shutdown.borrow() {
                break;
            }

            match self.connect_once(&mut shutdown).await {
                Ok(()) => tracing::info!("Exchange stream closed"),
                Err(e) => tracing::warn!(error = %e, "Exchange stream failed"),
            }
            self.status.set_connected(false);

            if *shutdown.borrow() {
                break;
            }

            tracing::info!(
                delay_ms = self.config.reconnect_delay_ms,
                "Reconnecting to exchange stream"
            );
            tokio::select! {
                _ = sleep(self.config.reconnect_delay()) => {}
                _ = shutdown.changed() => {}
            }
        }

        tracing::info!("Exchange stream stopped");
    }

    async fn connect_once(&self, shutdown: &mut watch::Receiver<bool>) -> Result<(), UpstreamError> {
        let key = self.client.create_listen_key().await?;
        *self.listen_key.write().await = Some(key.clone());

        let url = format!("{}?listenKey={}", self.config.ws_url, key);
        tracing::info!(url = %self.config.ws_url, "Connecting to exchange stream");

        let (ws_stream, _) = connect_async(url.as_str()).await?;
        let (mut write, mut read) = ws_stream.split();

        let subscribe = serde_json::to_string(&StreamRequest::subscription(&self.config.streams))?;
        write.send(Message::Text(subscribe)).await?;
        tracing::info!(streams = ?self.config.streams, "Subscribed to exchange streams");
        self.status.set_connected(true);

        let ping_text = serde_json::to_string(&StreamRequest::ping())?;
        let period = self.config.ping_interval();
        let mut ping = interval_at(Instant::now() + period, period);

        loop {
            tokio::select! {
                _ = shutdown.changed() => {
                    let _ = write.send(Message::Close(None)).await;
                    return Ok(());
                }
                _ = ping.tick() => {
                    tracing::trace!("Sending ping");
                    write.send(Message::Text(ping_text.clone())).await?;
                }
                frame = read.next() => match frame {
                    Some(Ok(Message::Text(text))) => {
                        if let Some(reply) = self.relay.handle_frame(&text).await {
                            write.send(Message::Text(reply)).await?;
                        }
                    }
                    Some(Ok(Message::Close(frame))) => {
                        tracing::info!(?frame, "Exchange closed the stream");
                        return Ok(());
                    }
                    // Protocol pings are answered by tungstenite
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    None => return Ok(()),
                },
            }
        }
    }
}

/// Extend the current listen key every `interval`, or after `retry` when
/// there is no key yet or the last extension failed
async fn run_keepalive<C: ListenKeySource>(
    client: Arc<C>,
    listen_key: Arc<RwLock<Option<String>>>,
    interval: Duration,
    retry: Duration,
    mut shutdown: watch::Receiver<bool>,
) {
    let mut wait = interval;

    loop {
        tokio::select! {
            _ = sleep(wait) => {}
            _ = shutdown.changed() => {}
        }
        if *shutdown.borrow() {
            break;
        }

        let Some(key) = listen_key.read().await.clone() else {
            wait = retry;
            continue;
        };

        wait = match client.keepalive_listen_key(&key).await {
            Ok(()) => {
                tracing::info!("Listen key extended");
                interval
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to extend listen key");
                retry
            }
        };
    }
}
