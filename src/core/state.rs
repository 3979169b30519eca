// Application state (AppState)

use crate::core::config::Config;
use crate::stores::complaint_store::ComplaintStore;
use crate::utils::auth::AdminAuthority;
use std::sync::Arc;

/// Shared application state
///
/// Handed to every request handler through axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    /// Users and complaints behind one lock
    pub store: Arc<ComplaintStore>,

    /// Admin token check
    pub admin: Arc<AdminAuthority>,

    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let admin = Arc::new(AdminAuthority::new(config.auth.admin_token.clone()));

        Self {
            store: Arc::new(ComplaintStore::new()),
            admin,
            config: Arc::new(config),
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::core::config::{AuthConfig, LoggingConfig, ServerConfig};
    use axum::body::Body;
    use axum::response::Response;
    use http_body_util::BodyExt;

    pub fn create_test_config() -> Config {
        Config {
            server: ServerConfig {
                port: Some(8080),
                unix_socket: None,
                num_threads: 2,
            },
            logging: LoggingConfig::default(),
            auth: AuthConfig {
                admin_token: "admin".to_string(),
            },
        }
    }

    pub fn create_test_state() -> Arc<AppState> {
        Arc::new(AppState::new(create_test_config()))
    }

    /// Collect a response body into raw bytes
    pub async fn body_bytes(response: Response) -> Vec<u8> {
        let (_, body) = response.into_parts();
        Body::new(body).collect().await.unwrap().to_bytes().to_vec()
    }

    pub async fn body_json(response: Response) -> serde_json::Value {
        serde_json::from_slice(&body_bytes(response).await).unwrap()
    }
}
