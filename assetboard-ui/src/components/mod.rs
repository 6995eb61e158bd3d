//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod balance_table;
pub mod card;
pub mod date_range_picker;
pub mod sidebar;
pub mod summary_card;
pub mod tabs;

pub use balance_table::BalanceTable;
pub use card::{Card, CardHeader};
pub use date_range_picker::DateRangePicker;
pub use sidebar::AppSidebar;
pub use summary_card::{SummaryCard, SummaryMetric};
pub use tabs::{TabTrigger, TabsList};
