//! Data Transfer Objects
//!
//! Response types for the HTTP endpoints.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::balance::Balance;
use crate::upstream::FeedStatusReport;

/// GET /api/v1/balances
#[derive(Debug, Serialize)]
pub struct BalancesResponse {
    pub balances: Vec<Balance>,
    /// When the snapshot was published; absent before the first refresh
    pub updated_at: Option<DateTime<Utc>>,
}

/// GET /health
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// "healthy" or "degraded"
    pub status: String,
    pub upstream: FeedStatusReport,
    pub clients: usize,
    pub uptime_seconds: u64,
    pub version: String,
}
