//! Maud views for the form and the post-submit summary
//!
//! The same markup is produced server-side for the first paint and
//! client-side when the view switches. Class and id helpers are public so the
//! DOM binding patches elements exactly the way a full render would draw them.

use maud::{html, Markup, PreEscaped, DOCTYPE};
use regform_types::{Field, Registration, COUNTRIES, PHONE_CODES};
use regform_validation::{AADHAR_MAX_LEN, PAN_MAX_LEN};

use crate::config::FormConfig;
use crate::controller::{FormState, View};

pub const APP_ROOT_ID: &str = "app";
pub const FORM_ID: &str = "registration-form";
pub const SUBMIT_ID: &str = "submit-button";

pub const ACTION_TOGGLE_PASSWORD: &str = "toggle-password";
pub const ACTION_TOGGLE_CONFIRM_PASSWORD: &str = "toggle-confirm-password";
pub const ACTION_GO_BACK: &str = "go-back";
pub const ACTION_RESET: &str = "reset";

pub const ERROR_CLASSES: &[&str] = &["border-red-500", "focus:ring-red-500"];
pub const OK_CLASSES: &[&str] = &["border-gray-300"];
pub const CITY_DISABLED_CLASSES: &[&str] = &["opacity-60", "cursor-not-allowed"];

const INPUT_BASE: &str = "w-full p-3 border rounded-lg shadow-sm transition-all duration-200 \
    focus:outline-none focus:ring-2 focus:ring-blue-400 focus:border-transparent";
const SECRET_BASE: &str = "w-full p-3 border rounded-lg shadow-sm transition-all duration-200 \
    focus:outline-none focus:ring-2 focus:ring-blue-400 focus:border-transparent pr-10";
const PHONE_BASE: &str = "flex-1 p-3 border rounded-r-lg shadow-sm transition-all duration-200 \
    focus:outline-none focus:ring-2 focus:ring-blue-400 focus:border-transparent";
const SELECT_BASE: &str = "w-full p-3 border rounded-lg shadow-sm transition-all duration-200 bg-white \
    focus:outline-none focus:ring-2 focus:ring-blue-400 focus:border-transparent";
const LABEL_CLASS: &str = "block text-sm font-medium text-gray-700 mb-1";
const BACKDROP: &str = "min-h-screen bg-gradient-to-br from-blue-700 via-purple-700 to-pink-700 \
    flex items-center justify-center p-4";

const BOOTSTRAP: &str = r#"import init, { mount } from "/pkg/regform_wasm.js";
await init();
mount("app");"#;

/// Full HTML document; form settings travel to the browser as data attributes
pub fn page(state: &FormState, config: &FormConfig) -> Markup {
    let gate_errors = if config.gate_errors_on_touch { "true" } else { "false" };
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "Register with Us" }
                script src="https://cdn.tailwindcss.com" {}
            }
            body class="font-sans" {
                div id=(APP_ROOT_ID)
                    data-storage-key=(config.storage_key)
                    data-gate-errors=(gate_errors) {
                    (app(state))
                }
                script type="module" { (PreEscaped(BOOTSTRAP)) }
            }
        }
    }
}

/// Contents of the app root for the current view
pub fn app(state: &FormState) -> Markup {
    match state.view() {
        View::Editing => form_view(state),
        View::Submitted(registration) => summary_view(registration),
    }
}

pub fn input_class(base: &str, has_error: bool) -> String {
    let state = if has_error { ERROR_CLASSES } else { OK_CLASSES };
    format!("{} {}", base, state.join(" "))
}

pub fn error_id(field: Field) -> String {
    format!("{}-error", field.name())
}

pub fn submit_class(enabled: bool) -> &'static str {
    if enabled {
        "w-full py-3 px-6 rounded-lg text-white font-bold transition-all duration-300 shadow-lg \
         hover:shadow-xl focus:outline-none focus:ring-2 focus:ring-blue-500 focus:ring-offset-2 \
         transform bg-gradient-to-r from-blue-600 to-indigo-600 hover:from-blue-700 \
         hover:to-indigo-700 active:scale-95"
    } else {
        "w-full py-3 px-6 rounded-lg text-white font-bold transition-all duration-300 shadow-lg \
         hover:shadow-xl focus:outline-none focus:ring-2 focus:ring-blue-500 focus:ring-offset-2 \
         transform bg-gray-400 cursor-not-allowed"
    }
}

pub fn toggle_label(field: Field, visible: bool) -> &'static str {
    match (field, visible) {
        (Field::ConfirmPassword, true) => "Hide confirm password",
        (Field::ConfirmPassword, false) => "Show confirm password",
        (_, true) => "Hide password",
        (_, false) => "Show password",
    }
}

pub fn eye_icon(visible: bool) -> Markup {
    html! {
        svg xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24"
            stroke-width="1.5" stroke="currentColor" class="w-5 h-5" {
            @if visible {
                path stroke-linecap="round" stroke-linejoin="round"
                    d="M3.988 5.897L5.8 7.7M11.999 15.76c-3.149 0-5.7-2.551-5.7-5.7s2.551-5.7 5.7-5.7 5.7 2.551 5.7 5.7-2.551 5.7-5.7 5.7ZM12 18.25V21M4.75 4.75l-1.5 1.5M18.25 18.25l1.5 1.5M21 12H18.25M4.75 12H1.5M12 1.75V4.5" {}
            } @else {
                path stroke-linecap="round" stroke-linejoin="round"
                    d="M2.036 12.322a1.012 1.012 0 010-.639C3.423 7.51 7.36 4.5 12 4.5c4.638 0 8.573 3.007 9.963 7.178.07.207.07.431 0 .639C20.577 16.49 16.64 19.5 12 19.5c-4.638 0-8.573-3.007-9.963-7.178z" {}
                path stroke-linecap="round" stroke-linejoin="round" d="M15 12a3 3 0 11-6 0 3 3 0 016 0z" {}
            }
        }
    }
}

/// `<option>` list for the city select, blank choice first
pub fn city_options(state: &FormState) -> Markup {
    let current = state.data().city.as_str();
    html! {
        option value="" { "Select a city" }
        @for city in state.available_cities() {
            option value=(city) selected[*city == current] { (city) }
        }
    }
}

fn field_label(field: Field, hint: Option<&str>) -> Markup {
    html! {
        label for=(field.name()) class=(LABEL_CLASS) {
            (field.label())
            @if let Some(hint) = hint {
                span class="text-gray-500 text-xs ml-2" { (hint) }
            }
        }
    }
}

fn error_slot(state: &FormState, field: Field) -> Markup {
    let message = state.visible_error(field);
    html! {
        p id=(error_id(field)) class="mt-1 text-sm text-red-600" hidden[message.is_none()] {
            @if let Some(message) = message { (message) }
        }
    }
}

fn text_input(
    state: &FormState,
    field: Field,
    input_type: &str,
    placeholder: &str,
    maxlength: Option<usize>,
) -> Markup {
    html! {
        input type=(input_type) id=(field.name()) name=(field.name())
            value=(state.data().get(field))
            class=(input_class(INPUT_BASE, state.visible_error(field).is_some()))
            placeholder=(placeholder)
            maxlength=[maxlength];
    }
}

fn secret_input(state: &FormState, field: Field, visible: bool, placeholder: &str) -> Markup {
    let action = if field == Field::ConfirmPassword {
        ACTION_TOGGLE_CONFIRM_PASSWORD
    } else {
        ACTION_TOGGLE_PASSWORD
    };
    let input_type = if visible { "text" } else { "password" };
    html! {
        div class="relative" {
            input type=(input_type)
                id=(field.name()) name=(field.name())
                value=(state.data().get(field))
                class=(input_class(SECRET_BASE, state.visible_error(field).is_some()))
                placeholder=(placeholder);
            button type="button" data-action=(action) data-target=(field.name())
                class="absolute inset-y-0 right-0 pr-3 flex items-center text-sm leading-5 text-gray-500 hover:text-gray-700 transition-colors duration-200"
                aria-label=(toggle_label(field, visible)) {
                (eye_icon(visible))
            }
        }
    }
}

pub fn form_view(state: &FormState) -> Markup {
    let data = state.data();
    let no_country = data.country.is_empty();
    let mut city_class = input_class(SELECT_BASE, state.visible_error(Field::City).is_some());
    if no_country {
        city_class = format!("{} {}", city_class, CITY_DISABLED_CLASSES.join(" "));
    }

    html! {
        div class=(format!("{} font-sans", BACKDROP)) {
            div class="bg-white p-6 sm:p-8 rounded-xl shadow-2xl w-full max-w-4xl transform transition-all duration-300 hover:scale-[1.01] border border-gray-200" {
                h2 class="text-3xl font-extrabold text-gray-900 mb-8 text-center" { "Register with Us" }

                form id=(FORM_ID) class="space-y-6" novalidate {
                    div class="grid grid-cols-1 md:grid-cols-2 gap-6" {
                        div {
                            (field_label(Field::FirstName, None))
                            (text_input(state, Field::FirstName, "text", "Enter your first name", None))
                            (error_slot(state, Field::FirstName))
                        }
                        div {
                            (field_label(Field::LastName, None))
                            (text_input(state, Field::LastName, "text", "Enter your last name", None))
                            (error_slot(state, Field::LastName))
                        }
                    }

                    div class="grid grid-cols-1 md:grid-cols-2 gap-6" {
                        div {
                            (field_label(Field::Username, Some("(3-30 alphanumeric characters, with _ or -)")))
                            (text_input(state, Field::Username, "text", "Choose a username", None))
                            (error_slot(state, Field::Username))
                        }
                        div {
                            (field_label(Field::Email, Some("(e.g., your@example.com)")))
                            (text_input(state, Field::Email, "email", "Enter your email address", None))
                            (error_slot(state, Field::Email))
                        }
                    }

                    div {
                        (field_label(Field::Password, Some("(Min 8 chars, incl. uppercase, lowercase, number, special char)")))
                        (secret_input(state, Field::Password, state.show_password(), "Create a strong password"))
                        (error_slot(state, Field::Password))
                    }
                    div {
                        (field_label(Field::ConfirmPassword, None))
                        (secret_input(state, Field::ConfirmPassword, state.show_confirm_password(), "Re-enter your password"))
                        (error_slot(state, Field::ConfirmPassword))
                    }

                    div {
                        (field_label(Field::PhoneNumber, None))
                        div class="flex rounded-lg shadow-sm" {
                            select id=(Field::PhoneCountryCode.name()) name=(Field::PhoneCountryCode.name())
                                aria-label=(Field::PhoneCountryCode.label())
                                class="p-3 border border-gray-300 rounded-l-lg bg-gray-50 focus:outline-none focus:ring-2 focus:ring-blue-400 focus:border-transparent transition-all duration-200" {
                                @for code in PHONE_CODES {
                                    option value=(code.code) selected[code.code == data.phone_country_code] {
                                        (code.display())
                                    }
                                }
                            }
                            input type="tel" id=(Field::PhoneNumber.name()) name=(Field::PhoneNumber.name())
                                value=(data.phone_number)
                                class=(input_class(PHONE_BASE, state.visible_error(Field::PhoneNumber).is_some()))
                                placeholder="e.g., 9876543210";
                        }
                        (error_slot(state, Field::PhoneCountryCode))
                        (error_slot(state, Field::PhoneNumber))
                    }

                    div class="grid grid-cols-1 md:grid-cols-2 gap-6" {
                        div {
                            (field_label(Field::Country, None))
                            select id=(Field::Country.name()) name=(Field::Country.name())
                                class=(input_class(SELECT_BASE, state.visible_error(Field::Country).is_some())) {
                                option value="" { "Select a country" }
                                @for country in COUNTRIES {
                                    option value=(country.name) selected[country.name == data.country] {
                                        (country.name)
                                    }
                                }
                            }
                            (error_slot(state, Field::Country))
                        }
                        div {
                            (field_label(Field::City, None))
                            select id=(Field::City.name()) name=(Field::City.name())
                                disabled[no_country] class=(city_class) {
                                (city_options(state))
                            }
                            (error_slot(state, Field::City))
                        }
                    }

                    div {
                        (field_label(Field::PanNumber, None))
                        (text_input(state, Field::PanNumber, "text", "e.g., ABCDE1234F", Some(PAN_MAX_LEN)))
                        (error_slot(state, Field::PanNumber))
                    }
                    div {
                        (field_label(Field::AadharNumber, None))
                        (text_input(state, Field::AadharNumber, "text", "e.g., 1234 5678 9012", Some(AADHAR_MAX_LEN)))
                        (error_slot(state, Field::AadharNumber))
                    }

                    button type="submit" id=(SUBMIT_ID) disabled[!state.submit_enabled()]
                        class=(submit_class(state.submit_enabled())) {
                        "Submit"
                    }
                    button type="button" data-action=(ACTION_RESET)
                        class="w-full text-sm text-gray-500 hover:text-gray-700 underline" {
                        "Clear Form"
                    }
                }
            }
        }
    }
}

pub fn summary_view(registration: &Registration) -> Markup {
    html! {
        div class=(BACKDROP) {
            div class="bg-white p-8 sm:p-10 rounded-xl shadow-2xl w-full max-w-2xl transform transition-all duration-300 hover:scale-105 border border-gray-200" {
                h2 class="text-3xl font-extrabold text-gray-900 mb-6 text-center" {
                    span role="img" aria-label="success" { "✅" }
                    " Submission Successful!"
                }
                p class="text-lg text-gray-700 mb-8 text-center" {
                    "Thank you for registering. Here are your details:"
                }
                div class="space-y-4" {
                    @for (field, value) in registration.summary() {
                        div class="flex items-center bg-gray-50 p-3 rounded-lg shadow-md" data-field=(field.name()) {
                            strong class="text-gray-800 w-1/3 min-w-[120px]" { (field.label()) ":" }
                            span class="text-gray-600 flex-1 break-words" { (value) }
                        }
                    }
                }
                button type="button" data-action=(ACTION_GO_BACK)
                    class="mt-10 w-full bg-gradient-to-r from-blue-600 to-indigo-600 hover:from-blue-700 hover:to-indigo-700 text-white font-bold py-3 px-6 rounded-lg transition-all duration-300 shadow-lg hover:shadow-xl focus:outline-none focus:ring-2 focus:ring-blue-500 focus:ring-offset-2" {
                    "Go Back to Form"
                }
            }
        }
    }
}
