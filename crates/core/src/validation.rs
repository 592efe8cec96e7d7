//! Field-level payload validation.
//!
//! Checks run before any store interaction; failures carry the field name
//! so clients can attach messages to the right input.

use serde::Serialize;

/// A single failed field check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Validate a bookmark create/update payload.
///
/// Both `title` and `url` are required; whitespace-only values count as
/// empty. Returns one [`FieldError`] per failing field, empty when valid.
pub fn validate_bookmark_payload(title: &str, url: &str) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if title.trim().is_empty() {
        errors.push(FieldError {
            field: "title",
            message: "Title is required",
        });
    }
    if url.trim().is_empty() {
        errors.push(FieldError {
            field: "url",
            message: "URL is required",
        });
    }
    errors
}
