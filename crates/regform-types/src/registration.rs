use thiserror::Error;

use crate::field::Field;
use crate::form_data::FormData;
use crate::reference::{find_country, find_phone_code, Country, PhoneCode};
use crate::validated::*;

/// Value shown in place of a secret
pub const PASSWORD_MASK: &str = "********";

/// Value shown for an empty field in the summary
pub const EMPTY_VALUE: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("field `{0}` does not satisfy its rules")]
    Invalid(Field),

    #[error("password confirmation does not match")]
    PasswordMismatch,

    #[error("unknown phone country code `{0}`")]
    UnknownPhoneCode(String),

    #[error("unknown country `{0}`")]
    UnknownCountry(String),

    #[error("city `{city}` is not in {country}")]
    CityNotInCountry { country: &'static str, city: String },
}

/// A complete, valid registration
#[derive(Debug, Clone, PartialEq)]
pub struct Registration {
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub username: Username,
    pub email: EmailAddress,
    pub password: Password,
    pub phone_code: &'static PhoneCode,
    pub phone_number: PhoneNumber,
    pub country: &'static Country,
    pub city: &'static str,
    pub pan_number: PanNumber,
    pub aadhar_number: AadharNumber,
}

impl Registration {
    /// Converts a form record; the first field that fails its rule is reported
    pub fn from_form(data: &FormData) -> Result<Self, RegistrationError> {
        let first_name = PersonName::try_new(data.first_name.clone())
            .map_err(|_| RegistrationError::Invalid(Field::FirstName))?;
        let last_name = PersonName::try_new(data.last_name.clone())
            .map_err(|_| RegistrationError::Invalid(Field::LastName))?;
        let username = Username::try_new(data.username.clone())
            .map_err(|_| RegistrationError::Invalid(Field::Username))?;
        let email = EmailAddress::try_new(data.email.clone())
            .map_err(|_| RegistrationError::Invalid(Field::Email))?;
        let password = Password::try_new(data.password.clone())
            .map_err(|_| RegistrationError::Invalid(Field::Password))?;
        if data.confirm_password != data.password {
            return Err(RegistrationError::PasswordMismatch);
        }

        let phone_code = find_phone_code(data.phone_country_code.trim())
            .ok_or_else(|| RegistrationError::UnknownPhoneCode(data.phone_country_code.clone()))?;
        let phone_number = PhoneNumber::try_new(data.phone_number.clone())
            .map_err(|_| RegistrationError::Invalid(Field::PhoneNumber))?;

        let country = find_country(data.country.trim())
            .ok_or_else(|| RegistrationError::UnknownCountry(data.country.clone()))?;
        let city = country
            .cities
            .iter()
            .copied()
            .find(|c| *c == data.city.trim())
            .ok_or_else(|| RegistrationError::CityNotInCountry {
                country: country.name,
                city: data.city.clone(),
            })?;

        let pan_number = PanNumber::try_new(data.pan_number.clone())
            .map_err(|_| RegistrationError::Invalid(Field::PanNumber))?;
        let aadhar_number = AadharNumber::try_new(data.aadhar_number.clone())
            .map_err(|_| RegistrationError::Invalid(Field::AadharNumber))?;

        Ok(Self {
            first_name,
            last_name,
            username,
            email,
            password,
            phone_code,
            phone_number,
            country,
            city,
            pan_number,
            aadhar_number,
        })
    }

    /// Read-only summary rows in record order
    ///
    /// `password` is masked and `confirmPassword` is left out.
    pub fn summary(&self) -> Vec<(Field, String)> {
        Field::ALL
            .into_iter()
            .filter_map(|field| {
                let value = match field {
                    Field::FirstName => self.first_name.to_string(),
                    Field::LastName => self.last_name.to_string(),
                    Field::Username => self.username.to_string(),
                    Field::Email => self.email.to_string(),
                    Field::Password => PASSWORD_MASK.to_string(),
                    Field::ConfirmPassword => return None,
                    Field::PhoneCountryCode => self.phone_code.code.to_string(),
                    Field::PhoneNumber => self.phone_number.to_string(),
                    Field::Country => self.country.name.to_string(),
                    Field::City => self.city.to_string(),
                    Field::PanNumber => self.pan_number.to_string(),
                    Field::AadharNumber => self.aadhar_number.to_string(),
                };
                Some((field, display_value(&value)))
            })
            .collect()
    }
}

/// Summary text for a raw value: empty strings read as "N/A"
pub fn display_value(value: &str) -> String {
    if value.is_empty() {
        EMPTY_VALUE.to_string()
    } else {
        value.to_string()
    }
}
