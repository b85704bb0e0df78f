use serde::{Deserialize, Serialize};
use std::fmt;

/// One named, independently validated piece of the registration record
///
/// Variants are declared in record order; `Ord` follows that order, so maps
/// keyed by `Field` iterate the way the form is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    Username,
    Email,
    Password,
    ConfirmPassword,
    PhoneCountryCode,
    PhoneNumber,
    Country,
    City,
    PanNumber,
    AadharNumber,
}

impl Field {
    pub const ALL: [Field; 12] = [
        Field::FirstName,
        Field::LastName,
        Field::Username,
        Field::Email,
        Field::Password,
        Field::ConfirmPassword,
        Field::PhoneCountryCode,
        Field::PhoneNumber,
        Field::Country,
        Field::City,
        Field::PanNumber,
        Field::AadharNumber,
    ];

    /// Name used for the input's `name`/`id` attribute and the persisted JSON key
    pub fn name(self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Username => "username",
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
            Field::PhoneCountryCode => "phoneCountryCode",
            Field::PhoneNumber => "phoneNumber",
            Field::Country => "country",
            Field::City => "city",
            Field::PanNumber => "panNumber",
            Field::AadharNumber => "aadharNumber",
        }
    }

    /// Human label shown next to the input and in the summary
    pub fn label(self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::Username => "Username",
            Field::Email => "E-mail",
            Field::Password => "Password",
            Field::ConfirmPassword => "Confirm Password",
            Field::PhoneCountryCode => "Phone Country Code",
            Field::PhoneNumber => "Phone Number",
            Field::Country => "Country",
            Field::City => "City",
            Field::PanNumber => "PAN Number",
            Field::AadharNumber => "Aadhar Number",
        }
    }

    pub fn from_name(name: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|f| f.name() == name)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_roundtrip() {
        for field in Field::ALL {
            assert_eq!(Field::from_name(field.name()), Some(field));
        }
        assert_eq!(Field::from_name("middleName"), None);
    }

    #[test]
    fn test_serde_name_matches_attribute_name() {
        for field in Field::ALL {
            let json = serde_json::to_string(&field).unwrap();
            assert_eq!(json, format!("\"{}\"", field.name()));
        }
    }

    #[test]
    fn test_order_follows_record() {
        let mut sorted = Field::ALL;
        sorted.sort();
        assert_eq!(sorted, Field::ALL);
        assert!(Field::FirstName < Field::AadharNumber);
    }
}
