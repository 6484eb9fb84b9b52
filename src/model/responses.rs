/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Answer of `POST /order`
///
/// Only `success` is interpreted; every other field is kept untouched in
/// `details` so it can be logged.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct OrderResponse {
    /// Whether the server accepted the order
    pub success: bool,
    /// Remaining fields of the response
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl OrderResponse {
    /// Looks up one of the pass-through fields
    #[must_use]
    pub fn detail(&self, key: &str) -> Option<&Value> {
        self.details.get(key)
    }
}
