//! Character records and the view models derived from them

pub mod character;
pub mod spell;
pub mod summary;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// `{ "value": "..." }` wrapper used for free text fields
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TextValue {
    #[serde(default, deserialize_with = "null_as_default")]
    pub value: String,
}

/// `{ "value": [...] }` wrapper used for trait lists
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TraitSet {
    #[serde(default, deserialize_with = "null_as_default")]
    pub value: Vec<String>,
}

/// `{ "value": <any> }` wrapper for fields whose JSON type varies between exports
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LooseValue {
    #[serde(default)]
    pub value: Value,
}

/// Lenient field reader: an explicit `null` gives the default value.
///
/// `#[serde(default)]` only covers a missing key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Render a loosely typed scalar for display.
///
/// `null` yields `None`, strings are kept verbatim and every other value is
/// printed as its JSON text.
pub fn display_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Like [`display_value`] with a fallback for `null`
pub fn display_or(value: &Value, default: &str) -> String {
    display_value(value).unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_value_variants() {
        assert_eq!(display_value(&Value::Null), None);
        assert_eq!(display_value(&json!("L")), Some("L".to_string()));
        assert_eq!(display_value(&json!(3)), Some("3".to_string()));
        assert_eq!(display_or(&Value::Null, "0"), "0");
    }
}
