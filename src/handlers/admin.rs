use crate::core::error::ApiError;
use crate::core::state::AppState;
use crate::models::request::{ComplaintIdRequest, SecretCodeRequest};
use crate::utils::json::{decode, json_response};
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// List every complaint across all users
///
/// POST /getAllComplaintsForAdmin  {"secretCode": "<admin token>"}
#[instrument(skip_all)]
pub async fn admin_complaints_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let tables = state.store.lock();

    let request: SecretCodeRequest = decode(&body)?;

    let grant = state.admin.authorize(&request.secret_code).map_err(|e| {
        warn!("Unauthorized complaint listing attempt");
        e
    })?;

    let complaints = tables.all_complaints(&grant);

    json_response(StatusCode::OK, &complaints)
}

/// Mark a complaint resolved
///
/// POST /resolveComplaint  {"id": "...", "secretCode": "<admin token>"}
///
/// The complaint ID and the admin code are decoded one after the other from
/// the same body.
#[instrument(skip_all)]
pub async fn resolve_complaint_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let mut tables = state.store.lock();

    let target: ComplaintIdRequest = decode(&body)?;
    let credentials: SecretCodeRequest = decode(&body)?;

    let grant = state.admin.authorize(&credentials.secret_code).map_err(|e| {
        warn!(complaint_id = %target.id, "Unauthorized resolve attempt");
        e
    })?;

    tables.resolve_complaint(&grant, &target.id).map_err(|e| {
        warn!(complaint_id = %target.id, "Resolve of unknown complaint");
        e
    })?;

    info!(complaint_id = %target.id, "Complaint resolved");

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::AuthConfig;
    use crate::core::state::test_support::{body_bytes, body_json, create_test_config, create_test_state};
    use crate::models::complaint::NewComplaint;
    use crate::models::user::NewUser;
    use serde_json::json;

    fn seed(state: &AppState, users: &[&str], complaints: &[(&str, &str)]) {
        let mut tables = state.store.lock();
        for code in users {
            tables
                .register(NewUser {
                    secret_code: code.to_string(),
                    name: format!("user-{}", code),
                    email: format!("{}@example.com", code),
                })
                .unwrap();
        }
        for (code, title) in complaints {
            tables
                .submit_complaint(NewComplaint {
                    title: title.to_string(),
                    summary: String::new(),
                    severity: 3,
                    secret_code: code.to_string(),
                })
                .unwrap();
        }
    }

    fn resolve_body(id: &str, secret_code: &str) -> Bytes {
        Bytes::from(json!({ "id": id, "secretCode": secret_code }).to_string())
    }

    #[tokio::test]
    async fn test_admin_listing_returns_all_complaints() {
        let state = create_test_state();
        seed(&state, &["c1", "c2"], &[("c1", "a"), ("c2", "b"), ("c1", "c")]);

        let body = Bytes::from_static(br#"{"secretCode":"admin"}"#);
        let response = admin_complaints_handler(State(state), body).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let listing = body_json(response).await;
        let mut titles: Vec<String> = listing
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["title"].as_str().unwrap().to_string())
            .collect();
        titles.sort();

        assert_eq!(titles, vec!["a", "b", "c"]);
        // Owner codes never leave the server through the listing
        assert!(listing.as_array().unwrap().iter().all(|c| c.get("secretCode").is_none()));
    }

    #[tokio::test]
    async fn test_admin_listing_empty_store() {
        let state = create_test_state();

        let body = Bytes::from_static(br#"{"secretCode":"admin"}"#);
        let response = admin_complaints_handler(State(state), body).await.unwrap();
        assert_eq!(body_json(response).await, json!([]));
    }

    #[tokio::test]
    async fn test_admin_listing_unauthorized() {
        let state = create_test_state();
        seed(&state, &["c1"], &[("c1", "a")]);

        let body = Bytes::from_static(br#"{"secretCode":"c1"}"#);
        let err = admin_complaints_handler(State(state), body).await.unwrap_err();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_json(response).await, json!({ "error": "Unauthorized" }));
    }

    #[tokio::test]
    async fn test_admin_listing_missing_code_unauthorized() {
        let state = create_test_state();

        let err = admin_complaints_handler(State(state), Bytes::from_static(b"{}"))
            .await
            .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_admin_listing_uses_configured_token() {
        let mut config = create_test_config();
        config.auth = AuthConfig {
            admin_token: "desk-admin".to_string(),
        };
        let state = Arc::new(AppState::new(config));

        let err = admin_complaints_handler(
            State(state.clone()),
            Bytes::from_static(br#"{"secretCode":"admin"}"#),
        )
        .await
        .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::UNAUTHORIZED);

        let response = admin_complaints_handler(
            State(state),
            Bytes::from_static(br#"{"secretCode":"desk-admin"}"#),
        )
        .await
        .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_resolve_complaint_success() {
        let state = create_test_state();
        seed(&state, &["c1"], &[("c1", "Noise")]);

        let response = resolve_complaint_handler(State(state.clone()), resolve_body("1", "admin"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert!(body_bytes(response).await.is_empty());

        let tables = state.store.lock();
        assert!(tables.view_complaint("1").unwrap().resolved);
        // The copy in the user record keeps its submission-time state
        assert!(!tables.complaints_for_user("c1").unwrap()[0].resolved);
    }

    #[tokio::test]
    async fn test_resolve_complaint_unauthorized() {
        let state = create_test_state();
        seed(&state, &["c1"], &[("c1", "Noise")]);

        let err = resolve_complaint_handler(State(state.clone()), resolve_body("1", "c1"))
            .await
            .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::UNAUTHORIZED);

        assert!(!state.store.lock().view_complaint("1").unwrap().resolved);
    }

    #[tokio::test]
    async fn test_resolve_checks_authorization_before_lookup() {
        let state = create_test_state();

        let err = resolve_complaint_handler(State(state), resolve_body("404", "guest"))
            .await
            .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_resolve_complaint_not_found() {
        let state = create_test_state();

        let err = resolve_complaint_handler(State(state), resolve_body("404", "admin"))
            .await
            .unwrap_err();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Complaint not found" })
        );
    }

    #[tokio::test]
    async fn test_resolve_complaint_malformed_body() {
        let state = create_test_state();

        let err = resolve_complaint_handler(State(state), Bytes::from_static(b"{\"id\": 1"))
            .await
            .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
