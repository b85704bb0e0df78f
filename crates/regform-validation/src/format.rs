//! Input formatters applied while the user types

/// Longest formatted Aadhar value: 12 digits plus two separators
pub const AADHAR_MAX_LEN: usize = 14;
pub const PAN_MAX_LEN: usize = 10;

/// Keeps digits only and groups them in fours separated by a single space
///
/// The result is cut to 14 characters, so it never holds more than 12 digits.
/// Formatting an already formatted value returns it unchanged.
pub fn format_aadhar(input: &str) -> String {
    let mut out = String::with_capacity(AADHAR_MAX_LEN);
    for (i, digit) in input.chars().filter(|c| c.is_ascii_digit()).enumerate() {
        if i > 0 && i % 4 == 0 {
            out.push(' ');
        }
        out.push(digit);
        if out.len() >= AADHAR_MAX_LEN {
            break;
        }
    }
    out
}

/// Caps PAN input at its fixed length, as the input's `maxlength` would
pub fn limit_pan(input: &str) -> String {
    input.chars().take(PAN_MAX_LEN).collect()
}

/// Canonical PAN form: trimmed and uppercased
pub fn normalize_pan(input: &str) -> String {
    input.trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_aadhar_groups_digits() {
        assert_eq!(format_aadhar("123456789012"), "1234 5678 9012");
        assert_eq!(format_aadhar("12345"), "1234 5");
        assert_eq!(format_aadhar("1234"), "1234");
        assert_eq!(format_aadhar(""), "");
    }

    #[test]
    fn test_format_aadhar_strips_non_digits() {
        assert_eq!(format_aadhar("12-34 ab5678/9012"), "1234 5678 9012");
    }

    #[test]
    fn test_format_aadhar_truncates() {
        let formatted = format_aadhar("1234567890123456");
        assert_eq!(formatted, "1234 5678 9012");
        assert_eq!(formatted.len(), AADHAR_MAX_LEN);
    }

    #[test]
    fn test_format_aadhar_idempotent() {
        for input in ["", "1", "1234", "12345", "1234 5678 9", "123456789012999", "a1b2c3"] {
            let once = format_aadhar(input);
            assert_eq!(format_aadhar(&once), once);
            assert!(once.len() <= AADHAR_MAX_LEN);
            assert!(once.chars().filter(|c| c.is_ascii_digit()).count() <= 12);
        }
    }

    #[test]
    fn test_pan_helpers() {
        assert_eq!(limit_pan("abcde1234fXYZ"), "abcde1234f");
        assert_eq!(normalize_pan(" abcde1234f "), "ABCDE1234F");
    }
}
