//! Serde helpers for inputs decoded from a query string.
//!
//! The query-string codec turns `nameContains=2024` into a number and
//! `nameContains=true` into a boolean, so free-text fields accept any scalar.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserializes an optional free-text field from any JSON scalar.
pub fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        Some(other) => {
            return Err(serde::de::Error::custom(format!(
                "expected a scalar, got {}",
                other
            )))
        }
    })
}

/// Deserializes a list of free-text values; a lone scalar becomes a one-item list.
pub fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    fn scalar(value: Value) -> Option<String> {
        match value {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.into_iter().filter_map(scalar).collect(),
        Some(other) => scalar(other).into_iter().collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default, rename_all = "camelCase")]
    struct Filters {
        #[serde(deserialize_with = "opt_string")]
        name_contains: Option<String>,
        #[serde(deserialize_with = "string_list")]
        tags: Vec<String>,
    }

    #[test]
    fn test_numeric_text_is_kept_as_string() {
        let filters: Filters = serde_json::from_value(json!({ "nameContains": 2024 })).unwrap();
        assert_eq!(filters.name_contains.as_deref(), Some("2024"));
    }

    #[test]
    fn test_single_value_becomes_list() {
        let filters: Filters = serde_json::from_value(json!({ "tags": "aws" })).unwrap();
        assert_eq!(filters.tags, vec!["aws".to_string()]);

        let filters: Filters = serde_json::from_value(json!({ "tags": ["aws", 1] })).unwrap();
        assert_eq!(filters.tags, vec!["aws".to_string(), "1".to_string()]);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let filters: Filters = serde_json::from_value(json!({})).unwrap();
        assert!(filters.name_contains.is_none());
        assert!(filters.tags.is_empty());
    }
}
