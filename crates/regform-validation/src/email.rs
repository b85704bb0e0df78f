//! Email validation functions

use once_cell::sync::Lazy;
use regex::Regex;

use crate::string::require;
use crate::RuleResult;

static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));

/// Validates the `local@domain.tld` shape
///
/// Only the shape is checked: one `@`, no whitespace, and a dot somewhere
/// after the `@` with text on both sides of it.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

pub fn validate_email(value: &str) -> RuleResult {
    require("Email", value)?;

    if is_valid_email(value.trim()) {
        Ok(())
    } else {
        Err("Invalid email format.".to_string())
    }
}
