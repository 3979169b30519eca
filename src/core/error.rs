// Centralized error handling for the complaint desk

use crate::models::request::ErrorResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;
use tracing::error;

/// Errors raised by store operations and the admin check
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Secret code already in use")]
    DuplicateSecretCode,

    #[error("User not found")]
    UserNotFound,

    #[error("Complaint not found")]
    ComplaintNotFound,

    #[error("Unauthorized")]
    Unauthorized,
}

/// Errors returned by request handlers
#[derive(Error, Debug)]
pub enum ApiError {
    /// Malformed request body; carries the decoder's message
    #[error("{0}")]
    Decode(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Decode(_) => StatusCode::BAD_REQUEST,
            ApiError::Store(StoreError::DuplicateSecretCode) => StatusCode::BAD_REQUEST,
            ApiError::Store(StoreError::UserNotFound | StoreError::ComplaintNotFound) => {
                StatusCode::NOT_FOUND
            }
            ApiError::Store(StoreError::Unauthorized) => StatusCode::UNAUTHORIZED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(e) = &self {
            error!(error = %e, "Request failed with internal error");
        }

        (
            self.status(),
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
