//! Navigation Data
//!
//! Static tables behind the sidebar.

pub mod sidebar_items;

pub use sidebar_items::{NavGroup, NavMainItem, NavSubItem, SIDEBAR_ITEMS};
