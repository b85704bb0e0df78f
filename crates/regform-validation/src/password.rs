//! Password validation functions

use crate::string::{is_blank, require};
use crate::RuleResult;

pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Characters that satisfy the special-character requirement
pub const PASSWORD_SPECIALS: &[char] = &['!', '@', '#', '$', '%', '^', '&', '*'];

/// Validates password strength
///
/// Checks run in a fixed order and only the first failure is reported:
/// required, length, lowercase, uppercase, digit, special character.
/// The length check counts UTF-16 code units of the untrimmed value, the
/// way a browser measures `input.value.length`.
pub fn validate_password(password: &str) -> RuleResult {
    require("Password", password)?;

    if password.encode_utf16().count() < MIN_PASSWORD_LENGTH {
        return Err("Password must be at least 8 characters long.".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err("Password must contain at least one lowercase letter.".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err("Password must contain at least one uppercase letter.".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err("Password must contain at least one number.".to_string());
    }
    if !password.chars().any(|c| PASSWORD_SPECIALS.contains(&c)) {
        return Err(
            "Password must contain at least one special character (!@#$%^&*).".to_string(),
        );
    }

    Ok(())
}

/// Confirmation must be present and equal to the password, byte for byte
pub fn validate_password_confirmation(password: &str, confirmation: &str) -> RuleResult {
    if is_blank(confirmation) {
        return Err("Confirm Password is required.".to_string());
    }
    if confirmation != password {
        return Err("Passwords do not match.".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "Password is required.")]
    #[case("        ", "Password is required.")]
    #[case("short", "Password must be at least 8 characters long.")]
    #[case("ABCDEFG1!", "Password must contain at least one lowercase letter.")]
    #[case("abcdefg1!", "Password must contain at least one uppercase letter.")]
    #[case("Abcdefgh!", "Password must contain at least one number.")]
    #[case("Abcdefg12", "Password must contain at least one special character (!@#$%^&*).")]
    #[case("Abcdefg1?", "Password must contain at least one special character (!@#$%^&*).")]
    fn test_password_first_failure(#[case] password: &str, #[case] message: &str) {
        assert_eq!(validate_password(password), Err(message.to_string()));
    }

    #[test]
    fn test_length_counts_utf16_units() {
        // each emoji is a surrogate pair: 4 + 2 * 2 = 8 units, 6 chars
        assert!(validate_password("Ab1!\u{1F600}\u{1F600}").is_ok());
        assert_eq!(
            validate_password("Ab1!\u{e9}\u{e9}"),
            Err("Password must be at least 8 characters long.".to_string())
        );
    }

    #[test]
    fn test_strong_passwords() {
        assert!(validate_password("Abcdef1!").is_ok());
        assert!(validate_password("Secure^Pass9").is_ok());
    }

    #[test]
    fn test_confirmation() {
        assert!(validate_password_confirmation("Abcdef1!", "Abcdef1!").is_ok());
        assert_eq!(
            validate_password_confirmation("Abcdef1!", "Abcdef1?"),
            Err("Passwords do not match.".to_string())
        );
        assert_eq!(
            validate_password_confirmation("Abcdef1!", " "),
            Err("Confirm Password is required.".to_string())
        );
        // no trimming on comparison
        assert!(validate_password_confirmation("Abcdef1!", "Abcdef1! ").is_err());
    }
}
