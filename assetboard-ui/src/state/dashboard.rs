//! Dashboard State
//!
//! Reactive state for the overview page using Leptos signals.

use chrono::NaiveDate;
use leptos::*;

use super::balances::{parse_frame, Balance, FrameError};

/// State owned by the mounted dashboard page
#[derive(Clone, Copy)]
pub struct DashboardState {
    /// Balances from the most recent accepted frame
    pub balances: RwSignal<Vec<Balance>>,
    /// Range picked in the header (display only)
    pub date_range: RwSignal<DateRange>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            balances: create_rw_signal(Vec::new()),
            date_range: create_rw_signal(DateRange::default()),
        }
    }

    /// Replace the whole balance set
    pub fn replace_balances(&self, balances: Vec<Balance>) {
        self.balances.set(balances);
    }

    /// Decode a frame and replace the balances with it.
    ///
    /// A frame that fails to decode leaves the current balances in place.
    pub fn ingest_frame(&self, text: &str) -> Result<usize, FrameError> {
        let balances = parse_frame(text)?;
        let count = balances.len();
        self.replace_balances(balances);
        Ok(count)
    }
}

/// Provide dashboard state to the page's component tree
pub fn provide_dashboard_state() -> DashboardState {
    let state = DashboardState::new();
    provide_context(state);
    state
}

/// Date range for the header picker
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// Parse an `<input type="date">` value; empty clears the bound
    pub fn parse_input(value: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
    }

    pub fn with_start(&self, start: Option<NaiveDate>) -> Self {
        Self {
            start,
            end: self.end,
        }
    }

    pub fn with_end(&self, end: Option<NaiveDate>) -> Self {
        Self {
            start: self.start,
            end,
        }
    }

    /// Text shown on the picker button
    pub fn label(&self) -> String {
        match (self.start, self.end) {
            (Some(start), Some(end)) => format!(
                "{} - {}",
                start.format("%b %d, %Y"),
                end.format("%b %d, %Y")
            ),
            (Some(start), None) => start.format("%b %d, %Y").to_string(),
            _ => "Pick a date".to_string(),
        }
    }
}
