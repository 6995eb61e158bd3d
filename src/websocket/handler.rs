//! WebSocket Handler
//!
//! Handles WebSocket upgrade requests and manages the connection lifecycle.

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use futures_util::{SinkExt, StreamExt};
use std::sync::Arc;
use tokio::sync::mpsc;

use super::hub::ConnectionHub;
use super::messages::ServerMessage;
use crate::api::AppState;

/// WebSocket upgrade handler
///
/// This is the entry point for dashboard connections.
pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> Response {
    let hub = Arc::clone(&state.hub);
    ws.on_upgrade(move |socket| handle_socket(socket, hub))
}

/// Handle an established WebSocket connection
async fn handle_socket(socket: WebSocket, hub: Arc<ConnectionHub>) {
    let (mut sender, mut receiver) = socket.split();

    // Create channel for sending messages to this connection
    let (tx, mut rx) = mpsc::unbounded_channel::<ServerMessage>();

    let connection_id = match hub.register(tx).await {
        Ok(id) => id,
        Err(e) => {
            tracing::warn!(error = %e, "Rejected dashboard connection");
            if let Ok(text) = ServerMessage::error(e.to_string()).to_text() {
                let _ = sender.send(Message::Text(text)).await;
            }
            let _ = sender.send(Message::Close(None)).await;
            return;
        }
    };

    let conn_id_for_send = connection_id.clone();

    // Task to forward messages from channel to WebSocket
    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            match msg.to_text() {
                Ok(text) => {
                    if sender.send(Message::Text(text)).await.is_err() {
                        tracing::debug!(
                            connection_id = %conn_id_for_send,
                            "WebSocket send failed, closing connection"
                        );
                        break;
                    }
                }
                Err(e) => {
                    tracing::error!(error = %e, "Failed to serialize message");
                }
            }
        }
    });

    let conn_id_for_recv = connection_id.clone();

    // The feed is receive-only; drain the socket until the client goes away
    let mut recv_task = tokio::spawn(async move {
        while let Some(result) = receiver.next().await {
            match result {
                Ok(msg) => {
                    if !keep_open(&conn_id_for_recv, msg) {
                        break;
                    }
                }
                Err(e) => {
                    tracing::debug!(
                        connection_id = %conn_id_for_recv,
                        error = %e,
                        "WebSocket receive error"
                    );
                    break;
                }
            }
        }
    });

    // Wait for either task to complete
    tokio::select! {
        _ = &mut send_task => {
            recv_task.abort();
        }
        _ = &mut recv_task => {
            send_task.abort();
        }
    }

    hub.unregister(&connection_id).await;
}

/// Returns false if the connection should be closed.
fn keep_open(connection_id: &str, message: Message) -> bool {
    match message {
        Message::Text(text) => {
            tracing::debug!(
                connection_id = %connection_id,
                len = text.len(),
                "Ignoring client text frame"
            );
            true
        }
        Message::Binary(_) => true,
        // Axum answers pings automatically
        Message::Ping(_) | Message::Pong(_) => true,
        Message::Close(_) => {
            tracing::debug!(connection_id = %connection_id, "Client requested close");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keep_open() {
        assert!(keep_open("c", Message::Text("hello".to_string())));
        assert!(keep_open("c", Message::Binary(vec![1, 2, 3])));
        assert!(keep_open("c", Message::Ping(vec![])));
        assert!(!keep_open("c", Message::Close(None)));
    }
}
