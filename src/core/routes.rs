// HTTP routes configuration

use crate::core::state::AppState;
use crate::handlers::{admin, complaints, fallback, health, users};
use axum::{
    routing::{any, get},
    Router,
};
use std::sync::Arc;

/// Endpoint paths are part of the wire contract. They accept any method.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // User endpoints
        .route("/login", any(users::login_handler))
        .route("/register", any(users::register_handler))
        .route("/submitComplaint", any(users::submit_complaint_handler))
        .route("/getAllComplaintsForUser", any(users::user_complaints_handler))
        .route("/viewComplaint", any(complaints::view_complaint_handler))

        // Admin endpoints (require the admin secret code in the body)
        .route("/getAllComplaintsForAdmin", any(admin::admin_complaints_handler))
        .route("/resolveComplaint", any(admin::resolve_complaint_handler))

        .route("/health", get(health::health_handler))

        // 404 fallback for all unmatched routes
        .fallback(fallback::fallback_handler)

        .with_state(state)
}
