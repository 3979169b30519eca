use crate::core::error::ApiError;
use anyhow::Context;
use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

/// Request bodies declare the wire names of their fields so incoming keys
/// can be matched to them without regard to case.
pub trait WireFields {
    const FIELDS: &'static [&'static str];
}

/// Decode the first JSON value in `body` into a request type.
///
/// Object keys match fields case-insensitively and a repeated key keeps its
/// last value. Unknown keys and `null` values are dropped, so the field keeps
/// its default, and a `null` body decodes to all defaults. Anything after the
/// first value is not read. An empty body is reported as `EOF`.
pub fn decode<T: DeserializeOwned + WireFields>(body: &[u8]) -> Result<T, ApiError> {
    let mut values = serde_json::Deserializer::from_slice(body).into_iter::<Value>();

    let fields = match values.next() {
        Some(Ok(Value::Object(map))) => canonicalize(map, T::FIELDS),
        Some(Ok(Value::Null)) => Map::new(),
        Some(Ok(other)) => {
            return Err(ApiError::Decode(format!(
                "invalid type: {}, expected a JSON object",
                kind(&other)
            )))
        }
        Some(Err(e)) => return Err(ApiError::Decode(e.to_string())),
        None => return Err(ApiError::Decode("EOF".to_string())),
    };

    serde_json::from_value(Value::Object(fields)).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Rename keys to their declared spelling, in document order.
fn canonicalize(map: Map<String, Value>, fields: &[&str]) -> Map<String, Value> {
    let mut canonical = Map::new();

    for (key, value) in map {
        if value.is_null() {
            continue;
        }

        if let Some(field) = fields.iter().find(|field| field.eq_ignore_ascii_case(&key)) {
            canonical.insert((*field).to_string(), value);
        }
    }

    canonical
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Encode `value` as a JSON response with the given status.
pub fn json_response<T: Serialize + ?Sized>(
    status: StatusCode,
    value: &T,
) -> Result<Response, ApiError> {
    let body = serde_json::to_vec(value).context("Failed to encode response body")?;

    Ok((status, [(header::CONTENT_TYPE, "application/json")], body).into_response())
}
