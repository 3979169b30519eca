use crate::utils::json::WireFields;
use serde::{Deserialize, Serialize};

/// A complaint as held in the canonical table and, as a snapshot copy,
/// inside its owner's user record.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Complaint {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub severity: i64,
    pub resolved: bool,
    /// Owner's secret code. Never written back out, since it doubles as the
    /// owner's credential.
    #[serde(skip)]
    pub secret_code: String,
}

/// Body of a `submitComplaint` request.
///
/// Any `id` or `resolved` sent by the client is ignored; both are assigned
/// by the store.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct NewComplaint {
    pub title: String,
    pub summary: String,
    pub severity: i64,
    #[serde(rename = "secretCode")]
    pub secret_code: String,
}

impl WireFields for NewComplaint {
    const FIELDS: &'static [&'static str] = &["title", "summary", "severity", "secretCode"];
}
