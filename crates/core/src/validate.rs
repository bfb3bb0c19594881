//! Form Validation Primitives
//!
//! Every tool request carries a small local rule set (required field,
//! minimum length) that blocks a submission before any network round trip.
//! Failures are collected as a field-name → message map so an embedding UI
//! can render each message next to its input.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::error::CoreError;

/// Field-name → human-readable message map produced by request validation.
///
/// Field names use the wire spelling (camelCase) so they line up with the
/// serialized request fields. Iteration order is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    /// Creates an empty error map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message for a field, replacing any earlier one.
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    /// The message recorded for a field, if any.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Whether no field has a message (submission may proceed).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fields with messages.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over `(field, message)` pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `Ok(())` when empty, otherwise `Err(self)`.
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "{}", joined)
    }
}

impl From<FieldErrors> for CoreError {
    fn from(errors: FieldErrors) -> Self {
        CoreError::validation(errors.to_string())
    }
}

/// Applies the required/minimum-length rule pair for a free-text field.
///
/// The value is trimmed first; an empty value records `required_msg`, a
/// non-empty value shorter than `min_len` characters records
/// `too_short_msg`. At most one message is recorded per call.
pub fn required_with_min(
    errors: &mut FieldErrors,
    field: &str,
    value: &str,
    min_len: usize,
    required_msg: &str,
    too_short_msg: &str,
) {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.insert(field, required_msg);
    } else if trimmed.chars().count() < min_len {
        errors.insert(field, too_short_msg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_value_records_required_message() {
        let mut errors = FieldErrors::new();
        required_with_min(
            &mut errors,
            "description",
            "   ",
            10,
            "Description is required",
            "Description must be at least 10 characters",
        );
        assert_eq!(errors.get("description"), Some("Description is required"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_short_value_records_length_message() {
        let mut errors = FieldErrors::new();
        required_with_min(
            &mut errors,
            "description",
            "too short",
            10,
            "Description is required",
            "Description must be at least 10 characters",
        );
        assert_eq!(
            errors.get("description"),
            Some("Description must be at least 10 characters")
        );
    }

    #[test]
    fn test_valid_value_records_nothing() {
        let mut errors = FieldErrors::new();
        required_with_min(
            &mut errors,
            "description",
            "a dashboard for tracking plants",
            10,
            "Description is required",
            "Description must be at least 10 characters",
        );
        assert!(errors.is_empty());
        assert!(errors.into_result().is_ok());
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let mut errors = FieldErrors::new();
        // Eleven characters, thirteen bytes.
        required_with_min(&mut errors, "name", "héllo wörld", 10, "required", "short");
        assert!(errors.is_empty());
    }

    #[test]
    fn test_surrounding_whitespace_does_not_count() {
        let mut errors = FieldErrors::new();
        required_with_min(&mut errors, "name", "  abcdef   ", 10, "required", "short");
        assert_eq!(errors.get("name"), Some("short"));
    }

    #[test]
    fn test_display_joins_fields_in_order() {
        let mut errors = FieldErrors::new();
        errors.insert("b", "second");
        errors.insert("a", "first");
        assert_eq!(errors.to_string(), "a: first; b: second");
    }

    #[test]
    fn test_into_result_err_carries_map() {
        let mut errors = FieldErrors::new();
        errors.insert("code", "Code is required");
        let err = errors.into_result().unwrap_err();
        assert_eq!(err.get("code"), Some("Code is required"));
    }

    #[test]
    fn test_conversion_to_core_error() {
        let mut errors = FieldErrors::new();
        errors.insert("domain", "Domain is required");
        let core: CoreError = errors.into();
        assert_eq!(
            core.to_string(),
            "Validation error: domain: Domain is required"
        );
    }
}
