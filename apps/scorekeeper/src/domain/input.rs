//! Validated parsing of raw numeric input (form fields, query strings).
//!
//! Values are parsed strictly: no truncation of `"2.5"`, no silent defaults
//! for `"abc"` or `"NaN"`. Range checks stay with the component that owns
//! the range.

use crate::errors::domain::DomainError;

/// Parse a whole number submitted as text.
pub fn parse_count(field: &'static str, raw: &str) -> Result<i32, DomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DomainError::invalid_input(format!("{field} is required")));
    }
    trimmed.parse::<i32>().map_err(|_| {
        DomainError::invalid_input(format!("{field} must be a whole number, got '{trimmed}'"))
    })
}

/// Like [`parse_count`], but a missing or blank value means 0.
pub fn parse_optional_count(field: &'static str, raw: Option<&str>) -> Result<i32, DomainError> {
    match raw {
        Some(value) if !value.trim().is_empty() => parse_count(field, value),
        _ => Ok(0),
    }
}
