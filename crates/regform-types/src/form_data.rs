use serde::{Deserialize, Serialize};

use crate::field::Field;

pub const DEFAULT_PHONE_COUNTRY_CODE: &str = "+91";

/// In-progress registration input
///
/// Serialized with camelCase keys; this is the persisted layout. Keys missing
/// from a stored snapshot fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormData {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub phone_country_code: String,
    pub phone_number: String,
    pub country: String,
    pub city: String,
    pub pan_number: String,
    pub aadhar_number: String,
}

impl Default for FormData {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            username: String::new(),
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            phone_country_code: DEFAULT_PHONE_COUNTRY_CODE.to_string(),
            phone_number: String::new(),
            country: String::new(),
            city: String::new(),
            pan_number: String::new(),
            aadhar_number: String::new(),
        }
    }
}

impl FormData {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Username => &self.username,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
            Field::PhoneCountryCode => &self.phone_country_code,
            Field::PhoneNumber => &self.phone_number,
            Field::Country => &self.country,
            Field::City => &self.city,
            Field::PanNumber => &self.pan_number,
            Field::AadharNumber => &self.aadhar_number,
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Username => &mut self.username,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::ConfirmPassword => &mut self.confirm_password,
            Field::PhoneCountryCode => &mut self.phone_country_code,
            Field::PhoneNumber => &mut self.phone_number,
            Field::Country => &mut self.country,
            Field::City => &mut self.city,
            Field::PanNumber => &mut self.pan_number,
            Field::AadharNumber => &mut self.aadhar_number,
        }
    }

    /// Replaces one field's value, returning whether it changed
    pub fn set(&mut self, field: Field, value: impl Into<String>) -> bool {
        let value = value.into();
        let slot = self.slot(field);
        if *slot == value {
            return false;
        }
        *slot = value;
        true
    }

    /// Fields with their current values, in record order
    pub fn entries(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        Field::ALL.into_iter().map(move |field| (field, self.get(field)))
    }

    /// True when every field is non-empty after trimming
    pub fn all_filled(&self) -> bool {
        self.entries().all(|(_, value)| !value.trim().is_empty())
    }
}
