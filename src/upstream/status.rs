//! Upstream connection status shared with the HTTP health routes

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::RwLock;

/// Live state of the upstream stream
#[derive(Debug, Default)]
pub struct FeedStatus {
    connected: AtomicBool,
    connects: AtomicU64,
    refresh_failures: AtomicU64,
    last_event: RwLock<Option<DateTime<Utc>>>,
}

/// Point-in-time copy of [`FeedStatus`]
#[derive(Debug, Clone, Serialize)]
pub struct FeedStatusReport {
    pub connected: bool,
    pub connects: u64,
    pub refresh_failures: u64,
    pub last_event: Option<DateTime<Utc>>,
}

impl FeedStatus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_connected(&self, connected: bool) {
        let was = self.connected.swap(connected, Ordering::SeqCst);
        if connected && !was {
            self.connects.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    pub fn record_event(&self) {
        if let Ok(mut last) = self.last_event.write() {
            *last = Some(Utc::now());
        }
    }

    pub fn record_failure(&self) {
        self.refresh_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn report(&self) -> FeedStatusReport {
        FeedStatusReport {
            connected: self.is_connected(),
            connects: self.connects.load(Ordering::Relaxed),
            refresh_failures: self.refresh_failures.load(Ordering::Relaxed),
            last_event: self.last_event.read().ok().and_then(|l| *l),
        }
    }
}
