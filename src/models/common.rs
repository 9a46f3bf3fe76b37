//! Payload and query types shared by every endpoint.

use serde_json::{Map, Value};

/// A request body: field name to arbitrary JSON value.
///
/// Freshdesk validates payloads server-side; the client sends them as given.
pub type Payload = Map<String, Value>;

/// URL query parameters: parameter name to arbitrary JSON value.
pub type Query = Map<String, Value>;

/// Flattens query parameters into `key=value` pairs.
///
/// Strings are sent without JSON quoting, arrays repeat the key once per
/// element, objects are sent as JSON text and nulls are dropped.
pub fn query_pairs(query: &Query) -> Vec<(String, String)> {
    let mut pairs = Vec::with_capacity(query.len());
    for (key, value) in query {
        match value {
            Value::Array(items) => {
                for item in items {
                    if let Some(text) = scalar_text(item) {
                        pairs.push((key.clone(), text));
                    }
                }
            }
            other => {
                if let Some(text) = scalar_text(other) {
                    pairs.push((key.clone(), text));
                }
            }
        }
    }
    pairs
}

/// Renders a JSON value as the plain text sent in forms and query strings.
pub(crate) fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
