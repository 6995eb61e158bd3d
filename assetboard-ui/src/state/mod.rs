//! State Management
//!
//! Balance model, dashboard view state and the live feed connection.

pub mod balances;
pub mod dashboard;
pub mod feed;

pub use balances::{format_amount, Balance};
pub use dashboard::{provide_dashboard_state, DashboardState, DateRange};
pub use feed::open_balance_feed;
