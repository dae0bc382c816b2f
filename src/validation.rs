//! Contact form field rules.
//!
//! A field is checked against at most two rules, both evaluated:
//!
//! - **required**: the trimmed value must not be empty
//! - **email** (`type="email"` only): a non-empty value must look like
//!   `local@domain.tld`
//!
//! Any other input type is never rejected beyond the required check.

use regex::Regex;
use std::sync::LazyLock;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// What the form knows about one control at validation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldInput<'a> {
    pub required: bool,
    /// Lower-cased input type (`"text"`, `"email"`, `"textarea"`, ...).
    pub kind: &'a str,
    pub value: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Missing,
    InvalidEmail,
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL.is_match(value)
}

/// First failing rule for a field, if any.
pub fn check_field(field: FieldInput<'_>) -> Option<FieldError> {
    if field.required && field.value.trim().is_empty() {
        return Some(FieldError::Missing);
    }
    if field.kind == "email" && !field.value.is_empty() && !is_valid_email(field.value) {
        return Some(FieldError::InvalidEmail);
    }
    None
}
