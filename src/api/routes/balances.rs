//! Balance Routes
//!
//! - GET /api/v1/balances - Latest published snapshot

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::BalancesResponse;
use crate::api::state::AppState;

/// GET /api/v1/balances
///
/// Returns an empty list until the first refresh has been published.
pub async fn latest_balances(State(state): State<Arc<AppState>>) -> Json<BalancesResponse> {
    let response = match state.hub.latest().await {
        Some(snapshot) => BalancesResponse {
            balances: snapshot.balances,
            updated_at: Some(snapshot.updated_at),
        },
        None => BalancesResponse {
            balances: Vec::new(),
            updated_at: None,
        },
    };

    Json(response)
}
