//! WebSocket Connection Hub
//!
//! Manages all dashboard connections and broadcasts balance snapshots.
//! The most recent snapshot is kept so late joiners start with data.

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use thiserror::Error;
use tokio::sync::{mpsc, RwLock};
use uuid::Uuid;

use super::messages::ServerMessage;
use crate::balance::Balance;

/// Unique identifier for a WebSocket connection
pub type ConnectionId = String;

/// Latest balances published to clients
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub balances: Vec<Balance>,
    pub updated_at: DateTime<Utc>,
}

/// Configuration for the connection hub
#[derive(Debug, Clone)]
pub struct HubConfig {
    /// Maximum number of concurrent connections
    pub max_connections: usize,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            max_connections: 256,
        }
    }
}

/// Manages all WebSocket connections and the current snapshot
pub struct ConnectionHub {
    /// Active connections: ConnectionId → outbound channel
    connections: RwLock<HashMap<ConnectionId, mpsc::UnboundedSender<ServerMessage>>>,
    /// Last published balances
    latest: RwLock<Option<Snapshot>>,
    config: HubConfig,
}

impl ConnectionHub {
    /// Create a new connection hub
    pub fn new(config: HubConfig) -> Self {
        Self {
            connections: RwLock::new(HashMap::new()),
            latest: RwLock::new(None),
            config,
        }
    }

    /// Register a new WebSocket connection
    ///
    /// The latest snapshot, if any, is queued for the new connection before
    /// it becomes visible to broadcasts, so it can never arrive after a
    /// newer one.
    pub async fn register(
        &self,
        sender: mpsc::UnboundedSender<ServerMessage>,
    ) -> Result<ConnectionId, HubError> {
        let mut connections = self.connections.write().await;
        if connections.len() >= self.config.max_connections {
            return Err(HubError::TooManyConnections(self.config.max_connections));
        }

        let id = Uuid::new_v4().to_string();

        if let Some(snapshot) = self.latest.read().await.as_ref() {
            let _ = sender.send(ServerMessage::Balances(snapshot.balances.clone()));
        }

        connections.insert(id.clone(), sender);

        tracing::info!(connection_id = %id, clients = connections.len(), "Dashboard connected");
        Ok(id)
    }

    /// Unregister a connection
    pub async fn unregister(&self, id: &str) {
        let mut connections = self.connections.write().await;
        if connections.remove(id).is_some() {
            tracing::info!(connection_id = %id, clients = connections.len(), "Dashboard disconnected");
        }
    }

    /// Store a new snapshot and send it to every client
    ///
    /// Returns the number of clients the frame was queued for.
    pub async fn publish_balances(&self, balances: Vec<Balance>) -> usize {
        *self.latest.write().await = Some(Snapshot {
            balances: balances.clone(),
            updated_at: Utc::now(),
        });

        let sent = self.broadcast(ServerMessage::Balances(balances)).await;
        tracing::debug!(clients = sent, "Broadcast balances");
        sent
    }

    /// Send an error frame to every client; the stored snapshot is unchanged
    pub async fn publish_error(&self, message: impl Into<String>) -> usize {
        self.broadcast(ServerMessage::error(message)).await
    }

    async fn broadcast(&self, message: ServerMessage) -> usize {
        let connections = self.connections.read().await;

        connections
            .values()
            .filter(|sender| sender.send(message.clone()).is_ok())
            .count()
    }

    /// Latest published snapshot
    pub async fn latest(&self) -> Option<Snapshot> {
        self.latest.read().await.clone()
    }

    /// Get the current connection count
    pub async fn connection_count(&self) -> usize {
        self.connections.read().await.len()
    }
}

impl Default for ConnectionHub {
    fn default() -> Self {
        Self::new(HubConfig::default())
    }
}

/// Errors that can occur in the connection hub
#[derive(Debug, Error)]
pub enum HubError {
    #[error("Too many connections (limit: {0})")]
    TooManyConnections(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn btc() -> Vec<Balance> {
        vec![Balance::new("BTC", 1.0, 0.0)]
    }

    fn eth() -> Vec<Balance> {
        vec![Balance::new("ETH", 2.0, 1.0)]
    }

    #[tokio::test]
    async fn test_register_unregister() {
        let hub = ConnectionHub::default();
        let (tx, _rx) = mpsc::unbounded_channel();

        let id = hub.register(tx).await.unwrap();
        assert!(!id.is_empty());
        assert_eq!(hub.connection_count().await, 1);

        hub.unregister(&id).await;
        assert_eq!(hub.connection_count().await, 0);
    }

    #[tokio::test]
    async fn test_connection_limit() {
        let hub = ConnectionHub::new(HubConfig { max_connections: 2 });

        let (tx1, _) = mpsc::unbounded_channel();
        let (tx2, _) = mpsc::unbounded_channel();
        let (tx3, _) = mpsc::unbounded_channel();

        hub.register(tx1).await.unwrap();
        hub.register(tx2).await.unwrap();
        let result = hub.register(tx3).await;

        assert!(matches!(result, Err(HubError::TooManyConnections(2))));
    }

    #[tokio::test]
    async fn test_broadcast_reaches_every_client() {
        let hub = ConnectionHub::default();
        let (tx1, mut rx1) = mpsc::unbounded_channel();
        let (tx2, mut rx2) = mpsc::unbounded_channel();
        hub.register(tx1).await.unwrap();
        hub.register(tx2).await.unwrap();

        assert_eq!(hub.publish_balances(btc()).await, 2);

        assert_eq!(rx1.try_recv().unwrap(), ServerMessage::Balances(btc()));
        assert_eq!(rx2.try_recv().unwrap(), ServerMessage::Balances(btc()));
    }

    #[tokio::test]
    async fn test_new_client_gets_latest_snapshot() {
        let hub = ConnectionHub::default();
        hub.publish_balances(btc()).await;
        hub.publish_balances(eth()).await;

        let (tx, mut rx) = mpsc::unbounded_channel();
        hub.register(tx).await.unwrap();

        assert_eq!(rx.try_recv().unwrap(), ServerMessage::Balances(eth()));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_no_snapshot_before_first_publish() {
        let hub = ConnectionHub::default();
        let (tx, mut rx) = mpsc::unbounded_channel();
        hub.register(tx).await.unwrap();

        assert!(rx.try_recv().is_err());
        assert!(hub.latest().await.is_none());
    }

    #[tokio::test]
    async fn test_error_does_not_replace_snapshot() {
        let hub = ConnectionHub::default();
        let (tx, mut rx) = mpsc::unbounded_channel();
        hub.register(tx).await.unwrap();

        hub.publish_balances(btc()).await;
        hub.publish_error("Request timed out").await;

        assert_eq!(rx.try_recv().unwrap(), ServerMessage::Balances(btc()));
        assert_eq!(rx.try_recv().unwrap(), ServerMessage::error("Request timed out"));
        assert_eq!(hub.latest().await.unwrap().balances, btc());
    }

    #[tokio::test]
    async fn test_closed_receiver_not_counted() {
        let hub = ConnectionHub::default();
        let (tx, rx) = mpsc::unbounded_channel();
        hub.register(tx).await.unwrap();
        drop(rx);

        assert_eq!(hub.publish_balances(btc()).await, 0);
    }
}
