//! API Routes
//!
//! Route handlers organized by functionality.

pub mod balances;
pub mod health;
