//! Phone, PAN and Aadhar number rules

use once_cell::sync::Lazy;
use regex::Regex;

use crate::string::require;
use crate::RuleResult;

static PAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]$").expect("PAN pattern"));

static AADHAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}\s?[0-9]{4}\s?[0-9]{4}$").expect("Aadhar pattern"));

pub const PHONE_MIN_DIGITS: usize = 7;
pub const PHONE_MAX_DIGITS: usize = 15;

pub fn is_valid_phone_number(value: &str) -> bool {
    (PHONE_MIN_DIGITS..=PHONE_MAX_DIGITS).contains(&value.len())
        && value.bytes().all(|b| b.is_ascii_digit())
}

pub fn validate_phone_number(value: &str) -> RuleResult {
    require("Phone Number", value)?;

    if is_valid_phone_number(value.trim()) {
        Ok(())
    } else {
        Err("Invalid phone number format (7-15 digits).".to_string())
    }
}

/// PAN shape, case-insensitive: the value is uppercased before matching
pub fn is_valid_pan(value: &str) -> bool {
    PAN.is_match(&value.trim().to_uppercase())
}

pub fn validate_pan(value: &str) -> RuleResult {
    require("PAN Number", value)?;

    if is_valid_pan(value) {
        Ok(())
    } else {
        Err("Invalid PAN Number format (e.g., ABCDE1234F).".to_string())
    }
}

/// Twelve digits, optionally grouped in fours by single whitespace
pub fn is_valid_aadhar(value: &str) -> bool {
    AADHAR.is_match(value.trim())
}

pub fn validate_aadhar(value: &str) -> RuleResult {
    require("Aadhar Number", value)?;

    if is_valid_aadhar(value) {
        Ok(())
    } else {
        Err("Invalid Aadhar Number format (12 digits, e.g., 1234 5678 9012).".to_string())
    }
}
