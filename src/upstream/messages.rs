//! Upstream Message Types
//!
//! Requests sent to the exchange stream and classification of what comes
//! back.

use serde::Serialize;
use serde_json::{json, Value};

/// Request sent to the exchange stream
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StreamRequest {
    pub method: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<String>,
}

impl StreamRequest {
    /// Subscribe to the given streams
    pub fn subscription(streams: &[String]) -> Self {
        Self {
            method: "SUBSCRIPTION",
            params: streams.to_vec(),
        }
    }

    /// Application-level keepalive
    pub fn ping() -> Self {
        Self {
            method: "PING",
            params: Vec::new(),
        }
    }
}

/// Parsed inbound frame
#[derive(Debug, Clone, PartialEq)]
pub enum Inbound {
    /// `{"ping": n}`, must be answered with `{"pong": n}`
    Ping(Value),
    /// Anything else: account pushes, acks, pong replies
    Event(Value),
}

impl Inbound {
    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(text)?;
        match value.get("ping") {
            Some(ping) => Ok(Inbound::Ping(ping.clone())),
            None => Ok(Inbound::Event(value)),
        }
    }

    /// Text to send back, if the frame needs a reply
    pub fn reply(&self) -> Option<String> {
        match self {
            Inbound::Ping(ping) => Some(json!({ "pong": ping }).to_string()),
            Inbound::Event(_) => None,
        }
    }
}
