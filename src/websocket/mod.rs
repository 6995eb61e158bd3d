//! WebSocket Balance Feed
//!
//! Fans out valued balance snapshots to dashboard clients.
//!
//! ## Architecture
//!
//! - **ConnectionHub**: Tracks connected dashboards and the latest snapshot
//! - **Handler**: Handles WebSocket upgrade and the connection lifecycle
//! - **Messages**: Frames sent on the wire
//!
//! ## Usage
//!
//! Clients connect to `/ws` and never send anything. Every frame is either
//! the full balance array or an error object:
//!
//! ```javascript
//! // Browser
//! const ws = new WebSocket('ws://localhost:8000/ws');
//!
//! ws.onmessage = (event) => {
//!   const balances = JSON.parse(event.data);
//!   console.log('Received:', balances);
//! };
//! ```

mod handler;
mod hub;
mod messages;

pub use handler::websocket_handler;
pub use hub::{ConnectionHub, ConnectionId, HubConfig, HubError, Snapshot};
pub use messages::ServerMessage;
