use crate::core::error::ApiError;
use crate::core::state::AppState;
use crate::models::request::ComplaintIdRequest;
use crate::utils::json::{decode, json_response};
use axum::{body::Bytes, extract::State, http::StatusCode, response::Response};
use std::sync::Arc;
use tracing::{instrument, warn};

/// Return the canonical record for a complaint ID
///
/// POST /viewComplaint  {"id": "..."}
#[instrument(skip_all)]
pub async fn view_complaint_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let tables = state.store.lock();

    let request: ComplaintIdRequest = decode(&body)?;

    let complaint = tables.view_complaint(&request.id).map_err(|e| {
        warn!(complaint_id = %request.id, error = %e, "Complaint lookup failed");
        e
    })?;

    json_response(StatusCode::OK, complaint)
}
