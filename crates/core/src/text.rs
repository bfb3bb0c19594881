//! String-or-Structured Values
//!
//! The backend occasionally returns a nested object where a plain string is
//! expected for fields like an algorithm's `howItWorks` or an API
//! scaffold's `overview`. Rather than scattering type checks through
//! the renderers, the union is modeled explicitly with a single rendering
//! rule: strings pass through verbatim, anything structured is dumped as
//! pretty-printed JSON.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A response field that may arrive as plain text or as structured JSON.
///
/// Variant order matters for untagged deserialization: strings bind to
/// `Text`, JSON `null` binds to `Empty`, and everything else (objects,
/// arrays, numbers) falls through to `Structured`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum StringOrStructured {
    /// Plain text, rendered verbatim.
    Text(String),
    /// Missing or null field.
    #[default]
    Empty,
    /// Any non-string JSON value, rendered as a pretty JSON dump.
    Structured(Value),
}

impl StringOrStructured {
    /// Creates a text value.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// The display form: text verbatim, structured values as pretty JSON,
    /// empty as an empty string.
    pub fn display_text(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Empty => String::new(),
            Self::Structured(value) => serde_json::to_string_pretty(value).unwrap_or_default(),
        }
    }

    /// Whether there is nothing to display.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.is_empty(),
            Self::Empty => true,
            Self::Structured(value) => value.is_null(),
        }
    }
}

impl From<&str> for StringOrStructured {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for StringOrStructured {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_string() {
        let value: StringOrStructured = serde_json::from_str(r#""step by step""#).unwrap();
        assert_eq!(value, StringOrStructured::text("step by step"));
        assert_eq!(value.display_text(), "step by step");
    }

    #[test]
    fn test_deserialize_object() {
        let value: StringOrStructured =
            serde_json::from_str(r#"{"steps": ["partition", "recurse"]}"#).unwrap();
        assert!(matches!(value, StringOrStructured::Structured(_)));
        let text = value.display_text();
        assert!(text.contains("partition"));
        assert!(text.starts_with('{'));
    }

    #[test]
    fn test_deserialize_null() {
        let value: StringOrStructured = serde_json::from_str("null").unwrap();
        assert_eq!(value, StringOrStructured::Empty);
        assert_eq!(value.display_text(), "");
        assert!(value.is_empty());
    }

    #[test]
    fn test_deserialize_array() {
        let value: StringOrStructured = serde_json::from_str(r#"[1, 2, 3]"#).unwrap();
        assert!(matches!(value, StringOrStructured::Structured(_)));
        assert!(!value.is_empty());
    }

    #[test]
    fn test_missing_field_defaults_to_empty() {
        #[derive(Deserialize)]
        struct Holder {
            #[serde(default)]
            field: StringOrStructured,
        }

        let holder: Holder = serde_json::from_str("{}").unwrap();
        assert_eq!(holder.field, StringOrStructured::Empty);
    }

    #[test]
    fn test_pretty_dump_is_stable() {
        let value = StringOrStructured::Structured(json!({"a": 1}));
        assert_eq!(value.display_text(), "{\n  \"a\": 1\n}");
    }

    #[test]
    fn test_serialize_text_as_plain_string() {
        let value = StringOrStructured::text("plain");
        assert_eq!(serde_json::to_string(&value).unwrap(), r#""plain""#);
    }
}
