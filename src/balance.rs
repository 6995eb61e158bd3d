//! Balance Types
//!
//! The record pushed to dashboards: one asset's free and locked amounts,
//! already valued in the quote asset.

use serde::{Deserialize, Serialize};

/// A single asset balance as broadcast on the feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    pub asset: String,
    pub free: f64,
    pub locked: f64,
}

impl Balance {
    pub fn new(asset: impl Into<String>, free: f64, locked: f64) -> Self {
        Self {
            asset: asset.into(),
            free,
            locked,
        }
    }

    /// Free plus locked
    pub fn total(&self) -> f64 {
        self.free + self.locked
    }
}

/// Format an amount for display with four decimal places
pub fn format_amount(value: f64) -> String {
    format!("{:.4}", value)
}
