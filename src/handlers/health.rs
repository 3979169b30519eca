use crate::core::state::AppState;
use crate::utils::time::current_timestamp;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Serialize, serde::Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub users: usize,
    pub complaints: usize,
    pub timestamp: i64,
}

/// Health check handler
///
/// GET /health
pub async fn health_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let (users, complaints) = {
        let tables = state.store.lock();
        (tables.user_count(), tables.complaint_count())
    };

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".to_string(),
            users,
            complaints,
            timestamp: current_timestamp(),
        }),
    )
}
