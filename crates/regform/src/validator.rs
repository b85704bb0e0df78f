// File: src/validator.rs
// Purpose: Whole-record validation producing the field -> message mapping

use regform_types::reference::{country_names, phone_code_values};
use regform_types::{Field, FormData};
use regform_validation::{self as rules, RuleResult};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::resolver::cities_for;

/// Field name -> first failing message, for every field that is currently invalid
///
/// Serializes as a plain JSON object keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(|s| s.as_str())
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }
}

/// Runs every field's rule against the record
///
/// Fields are checked independently; each failing field gets exactly one
/// entry carrying its first failing message.
pub fn validate(data: &FormData) -> FieldErrors {
    let errors = Field::ALL
        .into_iter()
        .filter_map(|field| check_field(field, data).err().map(|message| (field, message)))
        .collect();
    FieldErrors(errors)
}

/// Rule for a single field; some rules read other fields (confirmation, city)
pub fn check_field(field: Field, data: &FormData) -> RuleResult {
    match field {
        Field::FirstName => rules::validate_person_name("First Name", &data.first_name),
        Field::LastName => rules::validate_person_name("Last Name", &data.last_name),
        Field::Username => rules::validate_username(&data.username),
        Field::Email => rules::validate_email(&data.email),
        Field::Password => rules::validate_password(&data.password),
        Field::ConfirmPassword => {
            rules::validate_password_confirmation(&data.password, &data.confirm_password)
        }
        Field::PhoneCountryCode => rules::validate_choice(
            "Phone Country Code",
            &data.phone_country_code,
            &phone_code_values(),
            "Please select a valid country code.",
        ),
        Field::PhoneNumber => rules::validate_phone_number(&data.phone_number),
        Field::Country => rules::validate_choice(
            "Country",
            &data.country,
            &country_names(),
            "Please select a valid country.",
        ),
        Field::City => {
            rules::require("City", &data.city)?;
            if rules::is_one_of(data.city.trim(), cities_for(&data.country)) {
                Ok(())
            } else {
                Err("Please select a valid city.".to_string())
            }
        }
        Field::PanNumber => rules::validate_pan(&data.pan_number),
        Field::AadharNumber => rules::validate_aadhar(&data.aadhar_number),
    }
}

/// Submission gate: no errors and every field filled in
pub fn can_submit(data: &FormData, errors: &FieldErrors) -> bool {
    errors.is_empty() && data.all_filled()
}
