//! List decoding for webhook responses
//!
//! Automation workflows are edited by hand and do not agree on a shape:
//! some return a bare array, others wrap it in `data`, `items`, or a key named
//! after the resource.

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WireError {
    #[error("expected a list in response, got {0}")]
    NotAList(&'static str),

    #[error("invalid item in response: {0}")]
    InvalidItem(String),
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

/// Decode a list from a bare array or an object wrapping one under
/// `resource`, `data` or `items` (in that order).
pub fn decode_list<T: DeserializeOwned>(value: Value, resource: &str) -> Result<Vec<T>, WireError> {
    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => {
            let key = [resource, "data", "items"]
                .into_iter()
                .find(|k| matches!(map.get(*k), Some(Value::Array(_))));
            match key.and_then(|k| map.remove(k)) {
                Some(Value::Array(items)) => items,
                _ => return Err(WireError::NotAList("object")),
            }
        }
        other => return Err(WireError::NotAList(kind(&other))),
    };

    items
        .into_iter()
        .map(|item| {
            serde_json::from_value(item).map_err(|e| WireError::InvalidItem(e.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bare_array() {
        let out: Vec<u32> = decode_list(json!([1, 2, 3]), "offers").unwrap();
        assert_eq!(out, vec![1, 2, 3]);
    }

    #[test]
    fn resource_key_preferred_over_data() {
        let out: Vec<u32> = decode_list(json!({"offers": [1], "data": [2]}), "offers").unwrap();
        assert_eq!(out, vec![1]);
    }

    #[test]
    fn items_wrapper() {
        let out: Vec<u32> = decode_list(json!({"items": [7]}), "packages").unwrap();
        assert_eq!(out, vec![7]);
    }

    #[test]
    fn object_without_list_is_rejected() {
        let err = decode_list::<u32>(json!({"data": {"a": 1}}), "offers").unwrap_err();
        assert_eq!(err, WireError::NotAList("object"));
    }

    #[test]
    fn scalar_is_rejected() {
        let err = decode_list::<u32>(json!("ok"), "offers").unwrap_err();
        assert_eq!(err, WireError::NotAList("string"));
    }

    #[test]
    fn bad_item_fails_whole_list() {
        let err = decode_list::<u32>(json!([1, "two"]), "offers").unwrap_err();
        assert!(matches!(err, WireError::InvalidItem(_)));
    }
}
