//! Form controller: the single owner of form state
//!
//! Every user interaction becomes a [`FormEvent`] passed to
//! [`FormController::update`]. After each committed change the controller
//! resolves the city, persists the record and recomputes the error mapping,
//! in that order. Persistence failures are logged and never stop the rest.

use regform_types::{Field, FormData, Registration};
use regform_validation::{format_aadhar, limit_pan};
use std::collections::BTreeSet;
use tracing::{debug, info, warn};

use crate::config::FormConfig;
use crate::persistence::{self, Storage};
use crate::resolver;
use crate::validator::{self, FieldErrors};
use crate::view;

/// Which screen is showing
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Editing,
    Submitted(Registration),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// New raw value typed or selected into a field
    Input { field: Field, value: String },
    /// Focus left a field
    Blur(Field),
    TogglePasswordVisibility,
    ToggleConfirmPasswordVisibility,
    Submit,
    /// Leave the summary; the record is kept
    GoBack,
    /// Restore defaults and forget which fields were touched
    Reset,
}

impl FormEvent {
    /// Event for a `data-action` button in the rendered views
    pub fn from_action(action: &str) -> Option<Self> {
        match action {
            view::ACTION_TOGGLE_PASSWORD => Some(FormEvent::TogglePasswordVisibility),
            view::ACTION_TOGGLE_CONFIRM_PASSWORD => Some(FormEvent::ToggleConfirmPasswordVisibility),
            view::ACTION_GO_BACK => Some(FormEvent::GoBack),
            view::ACTION_RESET => Some(FormEvent::Reset),
            _ => None,
        }
    }
}

/// What an update changed, so a DOM binding can patch only that
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Fields whose stored value differs from what the user just typed,
    /// or that changed without being typed into (city cleared, reset)
    pub rewritten: Vec<Field>,
    /// The selectable city list changed
    pub cities_changed: bool,
    /// Switched between the form and the summary
    pub view_changed: bool,
    /// A submit attempt was refused
    pub blocked: bool,
}

/// Full form state; `errors` is always `validate(&data)`
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    data: FormData,
    errors: FieldErrors,
    touched: BTreeSet<Field>,
    view: View,
    show_password: bool,
    show_confirm_password: bool,
    gate_errors_on_touch: bool,
}

impl FormState {
    pub fn new(mut data: FormData, gate_errors_on_touch: bool) -> Self {
        resolver::resolve(&mut data);
        let errors = validator::validate(&data);
        Self {
            data,
            errors,
            touched: BTreeSet::new(),
            view: View::Editing,
            show_password: false,
            show_confirm_password: false,
            gate_errors_on_touch,
        }
    }

    pub fn data(&self) -> &FormData {
        &self.data
    }

    /// Every current error, touched or not
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self.view, View::Submitted(_))
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    /// Error to display for a field
    ///
    /// With touch gating on, errors stay hidden until the field has been
    /// typed into, left, or covered by a submit attempt.
    pub fn visible_error(&self, field: Field) -> Option<&str> {
        if self.gate_errors_on_touch && !self.is_touched(field) {
            return None;
        }
        self.errors.get(field)
    }

    pub fn available_cities(&self) -> &'static [&'static str] {
        resolver::cities_for(&self.data.country)
    }

    pub fn can_submit(&self) -> bool {
        validator::can_submit(&self.data, &self.errors)
    }

    /// Whether the submit button accepts clicks
    ///
    /// With touch gating on, the button stays live while any error is still
    /// hidden; the submit attempt then reveals those errors and is blocked.
    pub fn submit_enabled(&self) -> bool {
        self.can_submit()
            || (self.gate_errors_on_touch && self.errors.fields().any(|f| !self.is_touched(f)))
    }

    pub fn show_password(&self) -> bool {
        self.show_password
    }

    pub fn show_confirm_password(&self) -> bool {
        self.show_confirm_password
    }

    fn revalidate(&mut self) {
        self.errors = validator::validate(&self.data);
    }
}

pub struct FormController<S: Storage> {
    state: FormState,
    storage: S,
    storage_key: String,
}

impl<S: Storage> FormController<S> {
    /// Restores the saved record (or defaults) and validates it
    pub fn load(storage: S, config: &FormConfig) -> Self {
        let data = persistence::load(&storage, &config.storage_key);
        debug!(backend = storage.name(), key = %config.storage_key, "form state loaded");
        Self {
            state: FormState::new(data, config.gate_errors_on_touch),
            storage,
            storage_key: config.storage_key.clone(),
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn update(&mut self, event: FormEvent) -> Outcome {
        let mut outcome = Outcome::default();

        if self.state.is_submitted() && !matches!(event, FormEvent::GoBack | FormEvent::Reset) {
            debug!(?event, "ignoring event while the summary is showing");
            return outcome;
        }

        match event {
            FormEvent::Input { field, value } => self.input(field, value, &mut outcome),
            FormEvent::Blur(field) => {
                self.state.touched.insert(field);
                self.state.revalidate();
            }
            FormEvent::TogglePasswordVisibility => {
                self.state.show_password = !self.state.show_password;
            }
            FormEvent::ToggleConfirmPasswordVisibility => {
                self.state.show_confirm_password = !self.state.show_confirm_password;
            }
            FormEvent::Submit => self.submit(&mut outcome),
            FormEvent::GoBack => {
                if self.state.is_submitted() {
                    self.state.view = View::Editing;
                    outcome.view_changed = true;
                }
            }
            FormEvent::Reset => self.reset(&mut outcome),
        }

        outcome
    }

    fn input(&mut self, field: Field, raw: String, outcome: &mut Outcome) {
        let value = match field {
            Field::AadharNumber => format_aadhar(&raw),
            Field::PanNumber => limit_pan(&raw),
            _ => raw.clone(),
        };
        if value != raw {
            outcome.rewritten.push(field);
        }

        self.state.touched.insert(field);
        if !self.state.data.set(field, value) {
            return;
        }

        if field == Field::Country {
            outcome.cities_changed = true;
        }
        if resolver::resolve(&mut self.state.data) {
            outcome.rewritten.push(Field::City);
        }

        self.persist();
        self.state.revalidate();
    }

    fn submit(&mut self, outcome: &mut Outcome) {
        self.state.touched.extend(Field::ALL);
        self.state.revalidate();

        if !self.state.can_submit() {
            debug!(errors = self.state.errors.len(), "submit blocked by validation errors");
            outcome.blocked = true;
            return;
        }

        match Registration::from_form(&self.state.data) {
            Ok(registration) => {
                info!(username = %registration.username, "registration submitted");
                self.state.view = View::Submitted(registration);
                outcome.view_changed = true;
            }
            Err(e) => {
                warn!(error = %e, "validated form did not convert to a registration");
                outcome.blocked = true;
            }
        }
    }

    fn reset(&mut self, outcome: &mut Outcome) {
        self.state.data = FormData::default();
        self.state.touched.clear();
        self.state.show_password = false;
        self.state.show_confirm_password = false;
        if self.state.is_submitted() {
            self.state.view = View::Editing;
            outcome.view_changed = true;
        }
        outcome.rewritten.extend(Field::ALL);
        outcome.cities_changed = true;

        self.persist();
        self.state.revalidate();
    }

    fn persist(&mut self) {
        if let Err(e) = persistence::save(&mut self.storage, &self.storage_key, &self.state.data) {
            warn!(backend = self.storage.name(), error = %e, "failed to persist form data");
        }
    }
}
