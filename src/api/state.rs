//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;
use std::time::Instant;

use crate::upstream::FeedStatus;
use crate::websocket::{ConnectionHub, HubConfig};

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Fan-out hub for dashboard connections
    pub hub: Arc<ConnectionHub>,
    /// Upstream exchange stream status
    pub feed: Arc<FeedStatus>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create state around an existing hub and feed status
    pub fn new(hub: Arc<ConnectionHub>, feed: Arc<FeedStatus>) -> Self {
        Self {
            hub,
            feed,
            start_time: Instant::now(),
        }
    }

    /// Create state with a fresh hub using the given configuration
    pub fn with_hub_config(hub_config: HubConfig) -> Self {
        Self::new(
            Arc::new(ConnectionHub::new(hub_config)),
            Arc::new(FeedStatus::new()),
        )
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
