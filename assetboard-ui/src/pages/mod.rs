//! Pages
//!
//! Top-level page components for each route.

pub mod dashboard;
pub mod not_found;

pub use dashboard::Dashboard;
pub use not_found::NotFound;
