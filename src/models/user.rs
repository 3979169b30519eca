use crate::models::complaint::Complaint;
use crate::utils::json::WireFields;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Generated on registration
    pub id: String,
    /// Unique lookup key and the user's only credential
    pub secret_code: String,
    pub name: String,
    pub email: String,
    /// Copies of submitted complaints, taken at submission time
    pub complaints: Vec<Complaint>,
}

/// Body of a `register` request. `id` and `complaints` sent by the client
/// are ignored.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewUser {
    pub secret_code: String,
    pub name: String,
    pub email: String,
}

impl WireFields for NewUser {
    const FIELDS: &'static [&'static str] = &["secretCode", "name", "email"];
}

impl User {
    pub fn new(id: String, new_user: NewUser) -> Self {
        Self {
            id,
            secret_code: new_user.secret_code,
            name: new_user.name,
            email: new_user.email,
            complaints: Vec::new(),
        }
    }
}
