use crate::core::error::ApiError;
use crate::core::state::AppState;
use crate::models::complaint::NewComplaint;
use crate::models::request::SecretCodeRequest;
use crate::models::user::NewUser;
use crate::utils::json::{decode, json_response};
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Return the stored user record for a secret code
///
/// POST /login  {"secretCode": "..."}
#[instrument(skip_all)]
pub async fn login_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let tables = state.store.lock();

    let request: SecretCodeRequest = decode(&body)?;

    let user = tables.login(&request.secret_code).map_err(|e| {
        warn!("Login with unknown secret code");
        e
    })?;

    info!(user_id = %user.id, "User logged in");

    json_response(StatusCode::OK, user)
}

/// Register a new user
///
/// POST /register  {"secretCode": "...", "name": "...", "email": "..."}
#[instrument(skip_all)]
pub async fn register_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let mut tables = state.store.lock();

    let new_user: NewUser = decode(&body)?;

    let user = tables.register(new_user).map_err(|e| {
        warn!("Registration with a secret code already in use");
        e
    })?;

    info!(user_id = %user.id, "User registered");

    json_response(StatusCode::OK, user)
}

/// Submit a complaint on behalf of the user owning `secretCode`
///
/// POST /submitComplaint  {"title": "...", "summary": "...", "severity": 3, "secretCode": "..."}
#[instrument(skip_all)]
pub async fn submit_complaint_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let mut tables = state.store.lock();

    let new_complaint: NewComplaint = decode(&body)?;
    let severity = new_complaint.severity;

    let complaint_id = tables.submit_complaint(new_complaint).map_err(|e| {
        warn!("Complaint submitted for unknown secret code");
        e
    })?;

    info!(complaint_id = %complaint_id, severity, "Complaint submitted");

    Ok(StatusCode::CREATED.into_response())
}

/// List the complaints embedded in a user's record
///
/// POST /getAllComplaintsForUser  {"secretCode": "..."}
#[instrument(skip_all)]
pub async fn user_complaints_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let tables = state.store.lock();

    let request: SecretCodeRequest = decode(&body)?;

    let complaints = tables.complaints_for_user(&request.secret_code)?;

    json_response(StatusCode::OK, complaints)
}
