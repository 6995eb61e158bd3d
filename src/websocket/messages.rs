//! WebSocket Message Types
//!
//! Frames sent from the relay to dashboards. The channel is receive-only for
//! clients, so there is no client message type.

use serde::Serialize;

use crate::balance::Balance;

/// Frames sent from server to client
///
/// Serialized untagged: a balance snapshot goes out as the bare JSON array
/// the dashboard expects, an error as `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ServerMessage {
    /// Full replacement set of balances
    Balances(Vec<Balance>),
    /// Upstream refresh failure
    Error { error: String },
}

impl ServerMessage {
    pub fn error(message: impl Into<String>) -> Self {
        ServerMessage::Error {
            error: message.into(),
        }
    }

    /// Serialize to the text frame sent on the wire
    pub fn to_text(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
