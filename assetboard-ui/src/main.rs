//! Assetboard Dashboard
//!
//! Admin dashboard for live exchange balances built with Leptos (WASM).
//!
//! # Features
//!
//! - Collapsible sidebar shell with teams, navigation and projects
//! - Overview page with summary cards
//! - Asset balance table fed by the relay's WebSocket feed
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Balances arrive over a single WebSocket opened while the
//! dashboard page is mounted.

use leptos::*;

mod app;
mod components;
mod config;
mod navigation;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
