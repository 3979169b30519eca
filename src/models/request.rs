use crate::utils::json::WireFields;
use serde::{Deserialize, Serialize};

/// Body carrying only a secret code (`login`, complaint listings, and the
/// admin half of `resolveComplaint`).
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SecretCodeRequest {
    pub secret_code: String,
}

impl WireFields for SecretCodeRequest {
    const FIELDS: &'static [&'static str] = &["secretCode"];
}

/// Body carrying only a complaint ID.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ComplaintIdRequest {
    pub id: String,
}

impl WireFields for ComplaintIdRequest {
    const FIELDS: &'static [&'static str] = &["id"];
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
