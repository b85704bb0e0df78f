//! End-to-end behavior of the registration form
//!
//! Covers the validator properties, the country/city dependency, the Aadhar
//! formatter, persistence round trips and the submit/summary flow.

use pretty_assertions::assert_eq;
use regform::persistence::{self, MemoryStorage, DEFAULT_STORAGE_KEY};
use regform::types::COUNTRIES;
use regform::view;
use regform::{
    format_aadhar, validate, Field, FormConfig, FormController, FormData, FormEvent, View,
};
use rstest::rstest;

fn complete() -> FormData {
    FormData {
        first_name: "Jo".into(),
        last_name: "Doe".into(),
        username: "jdoe_1".into(),
        email: "jo@x.com".into(),
        password: "Abcdef1!".into(),
        confirm_password: "Abcdef1!".into(),
        phone_country_code: "+91".into(),
        phone_number: "9876543210".into(),
        country: "India".into(),
        city: "Delhi".into(),
        pan_number: "abcde1234f".into(),
        aadhar_number: "123456789012".into(),
    }
}

fn type_into(form: &mut FormController<MemoryStorage>, data: &FormData) {
    for (field, value) in data.entries() {
        form.update(FormEvent::Input {
            field,
            value: value.to_string(),
        });
    }
}

#[test]
fn test_validate_is_deterministic() {
    let samples = [FormData::default(), complete(), FormData {
        password: "short".into(),
        ..complete()
    }];
    for data in &samples {
        let before = data.clone();
        assert_eq!(validate(data), validate(data));
        assert_eq!(data, &before);
    }
}

#[rstest]
#[case(Field::FirstName, "First Name is required.")]
#[case(Field::LastName, "Last Name is required.")]
#[case(Field::Username, "Username is required.")]
#[case(Field::Email, "Email is required.")]
#[case(Field::Password, "Password is required.")]
#[case(Field::ConfirmPassword, "Confirm Password is required.")]
#[case(Field::PhoneCountryCode, "Phone Country Code is required.")]
#[case(Field::PhoneNumber, "Phone Number is required.")]
#[case(Field::Country, "Country is required.")]
#[case(Field::City, "City is required.")]
#[case(Field::PanNumber, "PAN Number is required.")]
#[case(Field::AadharNumber, "Aadhar Number is required.")]
fn test_blank_field_reports_required(#[case] field: Field, #[case] message: &str) {
    for blank in ["", "   ", "\t"] {
        let mut data = complete();
        data.set(field, blank);
        assert_eq!(validate(&data).get(field), Some(message));

        let mut empty = FormData::default();
        empty.set(field, blank);
        assert_eq!(validate(&empty).get(field), Some(message));
    }
}

#[test]
fn test_blank_password_reports_both_required() {
    let data = FormData {
        password: String::new(),
        confirm_password: String::new(),
        ..complete()
    };
    let errors = validate(&data);
    assert_eq!(errors.get(Field::Password), Some("Password is required."));
    assert_eq!(errors.get(Field::ConfirmPassword), Some("Confirm Password is required."));
}

#[rstest]
#[case("Abcdef1!", "Abcdef1?")]
#[case("Abcdef1!", "abcdef1!")]
#[case("short", "shorter")]
#[case("Abcdef1!", " Abcdef1!")]
fn test_mismatched_confirmation(#[case] password: &str, #[case] confirmation: &str) {
    let data = FormData {
        password: password.into(),
        confirm_password: confirmation.into(),
        ..complete()
    };
    assert_eq!(validate(&data).get(Field::ConfirmPassword), Some("Passwords do not match."));
}

#[test]
fn test_matching_confirmation_clears_error() {
    let errors = validate(&complete());
    assert!(!errors.contains(Field::ConfirmPassword));
    assert!(!errors.contains(Field::Password));
}

#[test]
fn test_error_keys_are_exactly_failing_fields() {
    let data = FormData {
        email: "jo@".into(),
        phone_number: "12".into(),
        ..complete()
    };
    let errors = validate(&data);
    let fields: Vec<Field> = errors.fields().collect();
    assert_eq!(fields, vec![Field::Email, Field::PhoneNumber]);
}

#[test]
fn test_allowed_cities_follow_country() {
    for country in COUNTRIES {
        let mut form = FormController::load(MemoryStorage::new(), &FormConfig::default());
        form.update(FormEvent::Input {
            field: Field::Country,
            value: country.name.into(),
        });
        assert_eq!(form.state().available_cities(), country.cities);

        for city in country.cities {
            form.update(FormEvent::Input {
                field: Field::City,
                value: city.to_string(),
            });
            assert_eq!(form.state().data().city, *city);
        }

        for other in COUNTRIES.iter().filter(|c| c.name != country.name) {
            form.update(FormEvent::Input {
                field: Field::City,
                value: other.cities[0].to_string(),
            });
            assert_eq!(form.state().data().city, "");
        }
    }
}

#[test]
fn test_switching_country_clears_city() {
    let mut form = FormController::load(MemoryStorage::new(), &FormConfig::default());
    type_into(&mut form, &complete());
    assert_eq!(form.state().data().city, "Delhi");

    form.update(FormEvent::Input {
        field: Field::Country,
        value: "USA".into(),
    });
    assert_eq!(form.state().data().city, "");
    assert_eq!(form.state().visible_error(Field::City), Some("City is required."));
    assert!(!form.state().can_submit());
}

#[test]
fn test_aadhar_formatting_is_stable() {
    let inputs = [
        "",
        "9",
        "1234",
        "12345678",
        "123456789012",
        "1234 5678 9012",
        "1234-5678-9012-3456",
        "x1y2z3 4 5 6 7 8 9 0 1 2 3",
    ];
    for input in inputs {
        let once = format_aadhar(input);
        assert_eq!(format_aadhar(&once), once, "input {:?}", input);
        assert!(once.chars().count() <= 14);
        assert!(once.chars().filter(|c| c.is_ascii_digit()).count() <= 12);
    }
}

#[test]
fn test_complete_registration_submits() {
    let mut form = FormController::load(MemoryStorage::new(), &FormConfig::default());
    type_into(&mut form, &complete());

    assert!(form.state().errors().is_empty());
    assert!(form.state().can_submit());
    assert_eq!(form.state().data().aadhar_number, "1234 5678 9012");

    let outcome = form.update(FormEvent::Submit);
    assert!(outcome.view_changed);
    assert!(!outcome.blocked);

    let View::Submitted(registration) = form.state().view() else {
        panic!("expected the summary view");
    };
    let summary = registration.summary();
    let value_of = |field: Field| {
        summary
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, v)| v.as_str())
    };
    assert_eq!(value_of(Field::PanNumber), Some("ABCDE1234F"));
    assert_eq!(value_of(Field::Password), Some("********"));
    assert_eq!(value_of(Field::ConfirmPassword), None);
    assert_eq!(value_of(Field::FirstName), Some("Jo"));

    let html = view::app(form.state()).into_string();
    assert!(html.contains("Submission Successful!"));
    assert!(html.contains("ABCDE1234F"));
    assert!(html.contains("********"));
    assert!(!html.contains("Abcdef1!"));
    assert!(!html.contains("Confirm Password"));
}

#[test]
fn test_short_password_blocks_submit() {
    let mut form = FormController::load(MemoryStorage::new(), &FormConfig::default());
    type_into(
        &mut form,
        &FormData {
            password: "short".into(),
            confirm_password: "short".into(),
            ..complete()
        },
    );

    assert_eq!(
        form.state().errors().get(Field::Password),
        Some("Password must be at least 8 characters long.")
    );
    assert!(!form.state().can_submit());

    let outcome = form.update(FormEvent::Submit);
    assert!(outcome.blocked);
    assert_eq!(form.state().view(), &View::Editing);
}

#[test]
fn test_go_back_keeps_data() {
    let mut form = FormController::load(MemoryStorage::new(), &FormConfig::default());
    type_into(&mut form, &complete());
    form.update(FormEvent::Submit);
    assert!(form.state().is_submitted());

    // editing is frozen while the summary shows
    form.update(FormEvent::Input {
        field: Field::FirstName,
        value: "Changed".into(),
    });
    assert_eq!(form.state().data().first_name, "Jo");

    let outcome = form.update(FormEvent::GoBack);
    assert!(outcome.view_changed);
    assert!(!form.state().is_submitted());
    assert_eq!(form.state().data().username, "jdoe_1");
    assert_eq!(
        persistence::load(form.storage(), DEFAULT_STORAGE_KEY).username,
        "jdoe_1"
    );
}

#[test]
fn test_progress_survives_reload() {
    let mut first = FormController::load(MemoryStorage::new(), &FormConfig::default());
    first.update(FormEvent::Input {
        field: Field::Email,
        value: "jo@x.com".into(),
    });
    first.update(FormEvent::Input {
        field: Field::Country,
        value: "UK".into(),
    });

    let storage = first.storage().clone();
    let second = FormController::load(storage, &FormConfig::default());
    assert_eq!(second.state().data().email, "jo@x.com");
    assert_eq!(second.state().data().country, "UK");
    assert_eq!(second.state().visible_error(Field::Email), None);
}

#[test]
fn test_corrupt_storage_starts_fresh() {
    let storage = MemoryStorage::with_item(DEFAULT_STORAGE_KEY, "{oops");
    let form = FormController::load(storage, &FormConfig::default());
    assert_eq!(form.state().data(), &FormData::default());
}

#[test]
fn test_custom_storage_key() {
    let config = FormConfig {
        storage_key: "signup".into(),
        ..FormConfig::default()
    };
    let mut form = FormController::load(MemoryStorage::new(), &config);
    form.update(FormEvent::Input {
        field: Field::Username,
        value: "jdoe".into(),
    });
    assert!(form.storage().get("signup").is_some());
    assert!(form.storage().get(DEFAULT_STORAGE_KEY).is_none());
}
