//! Presence checks for request fields.
//!
//! Request bodies carry optional string fields. A field counts as missing
//! when it is absent, `null`, or the empty string.

use crate::error::CoreError;

/// Return the value of a required field, or a validation error carrying
/// `message` when it is missing.
pub fn require(value: Option<String>, message: &str) -> Result<String, CoreError> {
    non_empty(value).ok_or_else(|| CoreError::Validation(message.to_string()))
}

/// Drop an empty value, leaving only fields that count as present.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Unwrap an optional field, substituting the empty string.
pub fn or_empty(value: Option<String>) -> String {
    value.unwrap_or_default()
}
