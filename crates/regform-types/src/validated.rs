//! Validated newtypes for a submitted registration
//!
//! Each type runs the same rule the live validator uses, so a value that
//! passed the form can always be converted.

use nutype::nutype;
use regform_validation as rules;
use std::fmt;

fn is_person_name(s: &str) -> bool {
    rules::validate_person_name("Name", s).is_ok()
}

fn is_username(s: &str) -> bool {
    rules::validate_username(s).is_ok()
}

fn is_strong_password(s: &str) -> bool {
    rules::validate_password(s).is_ok()
}

/// First or last name (2-50 letters or spaces), trimmed
#[nutype(
    sanitize(trim),
    validate(predicate = is_person_name),
    derive(Debug, Clone, PartialEq, Eq, AsRef, Deref, Display, Serialize, Deserialize)
)]
pub struct PersonName(String);

/// Username (3-30 characters, ASCII alphanumeric + underscore/dash), trimmed
#[nutype(
    sanitize(trim),
    validate(predicate = is_username),
    derive(Debug, Clone, PartialEq, Eq, Hash, AsRef, Deref, Display, Serialize, Deserialize)
)]
pub struct Username(String);

#[nutype(
    sanitize(trim),
    validate(predicate = rules::is_valid_email),
    derive(Debug, Clone, PartialEq, Eq, Hash, AsRef, Deref, Display, Serialize, Deserialize)
)]
pub struct EmailAddress(String);

/// Password meeting the strength rules
///
/// No `Display` or `Serialize`; `Debug` is masked below.
#[nutype(
    validate(predicate = is_strong_password),
    derive(Clone, PartialEq, Eq, AsRef)
)]
pub struct Password(String);

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(********)")
    }
}

/// Local phone number: 7-15 digits, no country code
#[nutype(
    sanitize(trim),
    validate(predicate = rules::is_valid_phone_number),
    derive(Debug, Clone, PartialEq, Eq, AsRef, Deref, Display, Serialize, Deserialize)
)]
pub struct PhoneNumber(String);

/// PAN, stored uppercased
#[nutype(
    sanitize(with = |s: String| rules::normalize_pan(&s)),
    validate(predicate = rules::is_valid_pan),
    derive(Debug, Clone, PartialEq, Eq, Hash, AsRef, Deref, Display, Serialize, Deserialize)
)]
pub struct PanNumber(String);

/// Aadhar, stored in its grouped `#### #### ####` form
#[nutype(
    sanitize(with = |s: String| rules::format_aadhar(&s)),
    validate(predicate = rules::is_valid_aadhar),
    derive(Debug, Clone, PartialEq, Eq, Hash, AsRef, Deref, Display, Serialize, Deserialize)
)]
pub struct AadharNumber(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pan_is_uppercased() {
        let pan = PanNumber::try_new("abcde1234f".to_string()).unwrap();
        assert_eq!(pan.as_ref(), "ABCDE1234F");
        assert!(PanNumber::try_new("abc".to_string()).is_err());
    }

    #[test]
    fn test_aadhar_is_grouped() {
        let aadhar = AadharNumber::try_new("123456789012".to_string()).unwrap();
        assert_eq!(aadhar.to_string(), "1234 5678 9012");
        assert!(AadharNumber::try_new("12345".to_string()).is_err());
    }

    #[test]
    fn test_names_are_trimmed() {
        let name = PersonName::try_new("  Jo ".to_string()).unwrap();
        assert_eq!(name.as_ref(), "Jo");
        assert!(PersonName::try_new("J".to_string()).is_err());
        assert!(Username::try_new(" jdoe_1 ".to_string()).is_ok());
    }

    #[test]
    fn test_password_debug_is_masked() {
        let password = Password::try_new("Abcdef1!".to_string()).unwrap();
        assert_eq!(format!("{:?}", password), "Password(********)");
        assert!(Password::try_new("short".to_string()).is_err());
    }

    #[test]
    fn test_email_and_phone() {
        assert!(EmailAddress::try_new(" jo@x.com ".to_string()).is_ok());
        assert!(EmailAddress::try_new("jo@x".to_string()).is_err());
        assert!(PhoneNumber::try_new("9876543210".to_string()).is_ok());
        assert!(PhoneNumber::try_new("98765".to_string()).is_err());
    }
}
