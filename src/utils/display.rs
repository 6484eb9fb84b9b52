/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use serde::Serialize;
use serde_json::Value;

/// Formats a response body for logging
///
/// Bodies that parse as JSON are pretty-printed; anything else (plain text,
/// HTML error pages, truncated payloads) is returned unchanged. Parse errors
/// never escape this function.
#[must_use]
pub fn try_pretty(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(value) => pretty_json(&value),
        Err(_) => body.to_string(),
    }
}

/// Pretty-prints any serializable value, falling back to an empty object
/// marker when serialization fails
#[must_use]
pub fn pretty_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| String::from("{}"))
}

/// Converts a response body into a JSON value
///
/// Non-JSON bodies become a JSON string holding the raw text.
#[must_use]
pub fn body_to_value(body: &str) -> Value {
    serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()))
}
