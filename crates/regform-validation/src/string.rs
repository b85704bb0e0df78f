//! Required checks and text-shape rules (names, usernames, fixed choices)

use once_cell::sync::Lazy;
use regex::Regex;

use crate::RuleResult;

static PERSON_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z\s]{2,50}$").expect("person name pattern"));

static USERNAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_-]{3,30}$").expect("username pattern"));

/// True when the value is empty after trimming
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Fails with "`<label>` is required." when the value is blank
pub fn require(label: &str, value: &str) -> RuleResult {
    if is_blank(value) {
        Err(format!("{} is required.", label))
    } else {
        Ok(())
    }
}

/// First/last name: 2-50 ASCII letters or whitespace, checked on the trimmed value
pub fn validate_person_name(label: &str, value: &str) -> RuleResult {
    require(label, value)?;

    if PERSON_NAME.is_match(value.trim()) {
        Ok(())
    } else {
        Err(format!(
            "{} must be 2-50 characters long and contain only letters.",
            label
        ))
    }
}

pub fn validate_username(value: &str) -> RuleResult {
    require("Username", value)?;

    if USERNAME.is_match(value.trim()) {
        Ok(())
    } else {
        Err("Username must be 3-30 characters long and alphanumeric, with _ or -.".to_string())
    }
}

/// Value restricted to a fixed list of choices
pub fn is_one_of(value: &str, allowed: &[&str]) -> bool {
    allowed.contains(&value)
}

/// Required selection that must also be one of `allowed`
pub fn validate_choice(label: &str, value: &str, allowed: &[&str], invalid: &str) -> RuleResult {
    require(label, value)?;

    if is_one_of(value.trim(), allowed) {
        Ok(())
    } else {
        Err(invalid.to_string())
    }
}
