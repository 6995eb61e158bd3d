//! End-to-end feed tests against a relay bound to a local port

use assetboard::websocket::HubConfig;
use assetboard::{build_router, AppState, Balance};
use futures_util::StreamExt;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::time::timeout;
use tokio_tungstenite::{connect_async, tungstenite::Message, MaybeTlsStream, WebSocketStream};

type Client = WebSocketStream<MaybeTlsStream<tokio::net::TcpStream>>;

async fn start_relay(hub_config: HubConfig) -> (String, AppState) {
    let state = AppState::with_hub_config(hub_config);
    let router = build_router(state.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    (format!("ws://{}/ws", addr), state)
}

async fn next_text(client: &mut Client) -> String {
    loop {
        let frame = timeout(Duration::from_secs(5), client.next())
            .await
            .expect("timed out waiting for a frame")
            .expect("stream ended")
            .unwrap();
        match frame {
            Message::Text(text) => return text,
            Message::Close(_) => panic!("connection closed"),
            _ => continue,
        }
    }
}

#[tokio::test]
async fn test_new_client_receives_latest_then_updates() {
    let (url, state) = start_relay(HubConfig::default()).await;
    state
        .hub
        .publish_balances(vec![Balance::new("BTC", 1.5, 0.0)])
        .await;

    let (mut client, _) = connect_async(url.as_str()).await.unwrap();

    let first: Vec<Balance> = serde_json::from_str(&next_text(&mut client).await).unwrap();
    assert_eq!(first, vec![Balance::new("BTC", 1.5, 0.0)]);

    state
        .hub
        .publish_balances(vec![Balance::new("ETH", 2.0, 0.25)])
        .await;

    let text = next_text(&mut client).await;
    assert_eq!(text, r#"[{"asset":"ETH","free":2.0,"locked":0.25}]"#);
}

#[tokio::test]
async fn test_error_frame_reaches_clients() {
    let (url, state) = start_relay(HubConfig::default()).await;
    state.hub.publish_balances(Vec::new()).await;

    let (mut client, _) = connect_async(url.as_str()).await.unwrap();
    assert_eq!(next_text(&mut client).await, "[]");

    state.hub.publish_error("Request timed out").await;

    assert_eq!(
        next_text(&mut client).await,
        r#"{"error":"Request timed out"}"#
    );
}

#[tokio::test]
async fn test_connection_limit_rejects_extra_clients() {
    let (url, state) = start_relay(HubConfig { max_connections: 1 }).await;
    state.hub.publish_balances(Vec::new()).await;

    let (mut first, _) = connect_async(url.as_str()).await.unwrap();
    assert_eq!(next_text(&mut first).await, "[]");

    let (mut second, _) = connect_async(url.as_str()).await.unwrap();
    let text = next_text(&mut second).await;
    let body: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert!(body["error"].is_string());
    assert_eq!(state.hub.connection_count().await, 1);
}
