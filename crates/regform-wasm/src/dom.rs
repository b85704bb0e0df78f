// File: src/dom.rs
// Purpose: Bind the form controller to the page with delegated event listeners

use regform::view::{self, CITY_DISABLED_CLASSES, ERROR_CLASSES, OK_CLASSES, SUBMIT_ID};
use regform::{Field, FormConfig, FormController, FormEvent, FormState, Outcome, DEFAULT_STORAGE_KEY};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, Element, Event, HtmlInputElement, HtmlSelectElement};

use crate::storage::LocalStorage;

/// Events listened for on the root; the root survives view switches
const EVENTS: &[&str] = &["input", "change", "focusout", "click", "submit"];

struct App {
    controller: RefCell<FormController<LocalStorage>>,
    root: Element,
}

pub fn mount(root_id: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document available"))?;
    let root = document
        .get_element_by_id(root_id)
        .ok_or_else(|| JsValue::from_str(&format!("element #{} not found", root_id)))?;

    attach(root).map(|_| ())
}

/// Load the controller for `root`, repaint it and start listening
fn attach(root: Element) -> Result<Rc<App>, JsValue> {
    let config = form_config(
        root.get_attribute("data-storage-key"),
        root.get_attribute("data-gate-errors"),
    );
    let controller = FormController::load(LocalStorage::open(), &config);

    let app = Rc::new(App {
        controller: RefCell::new(controller),
        root,
    });

    // The server paints defaults; repaint with whatever was restored
    app.render();

    for event_type in EVENTS {
        listen(&app, event_type)?;
    }
    Ok(app)
}

/// Form settings from the root element's data attributes
pub fn form_config(storage_key: Option<String>, gate_errors: Option<String>) -> FormConfig {
    FormConfig {
        storage_key: storage_key
            .filter(|k| !k.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_STORAGE_KEY.to_string()),
        gate_errors_on_touch: gate_errors.map_or(true, |v| v != "false"),
    }
}

fn listen(app: &Rc<App>, event_type: &str) -> Result<(), JsValue> {
    let handler = Rc::clone(app);
    let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| handler.handle(event));
    app.root
        .add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    // Listeners live as long as the page
    closure.forget();
    Ok(())
}

impl App {
    fn handle(&self, event: Event) {
        let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };

        let form_event = match event.type_().as_str() {
            "input" | "change" => field_of(&target).map(|field| FormEvent::Input {
                field,
                value: value_of(&target),
            }),
            "focusout" => field_of(&target).map(FormEvent::Blur),
            "click" => target
                .closest("[data-action]")
                .ok()
                .flatten()
                .and_then(|el| el.get_attribute("data-action"))
                .and_then(|action| FormEvent::from_action(&action)),
            "submit" => {
                event.prevent_default();
                Some(FormEvent::Submit)
            }
            _ => None,
        };
        let Some(form_event) = form_event else {
            return;
        };

        // Re-entrant events (focus loss while the root is replaced) are dropped
        let outcome = match self.controller.try_borrow_mut() {
            Ok(mut controller) => controller.update(form_event),
            Err(_) => return,
        };
        self.sync(&outcome);
    }

    fn render(&self) {
        let controller = self.controller.borrow();
        self.root
            .set_inner_html(&view::app(controller.state()).into_string());
    }

    /// Patch the form in place so focus and caret position survive typing
    fn sync(&self, outcome: &Outcome) {
        if outcome.view_changed {
            self.render();
            return;
        }

        let controller = self.controller.borrow();
        let state = controller.state();
        if state.is_submitted() {
            return;
        }

        for field in &outcome.rewritten {
            self.set_value(*field, state.data().get(*field));
        }
        if outcome.cities_changed {
            self.sync_cities(state);
        }
        for field in Field::ALL {
            self.sync_error(field, state.visible_error(field));
        }
        self.sync_secret(Field::Password, state.show_password());
        self.sync_secret(Field::ConfirmPassword, state.show_confirm_password());
        self.sync_submit(state.submit_enabled());
    }

    fn element(&self, id: &str) -> Option<Element> {
        self.root.query_selector(&format!("#{}", id)).ok().flatten()
    }

    fn set_value(&self, field: Field, value: &str) {
        let Some(el) = self.element(field.name()) else {
            return;
        };
        if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            if input.value() != value {
                input.set_value(value);
            }
        } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
            select.set_value(value);
        }
    }

    fn sync_cities(&self, state: &FormState) {
        let Some(el) = self.element(Field::City.name()) else {
            return;
        };
        el.set_inner_html(&view::city_options(state).into_string());

        let no_country = state.data().country.is_empty();
        if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
            select.set_disabled(no_country);
            select.set_value(&state.data().city);
        }
        toggle_classes(&el, CITY_DISABLED_CLASSES, no_country);
    }

    fn sync_error(&self, field: Field, message: Option<&str>) {
        if let Some(slot) = self.element(&view::error_id(field)) {
            slot.set_text_content(message);
            let result = match message {
                Some(_) => slot.remove_attribute("hidden"),
                None => slot.set_attribute("hidden", ""),
            };
            report(result);
        }

        // The dialing-code select keeps its neutral border
        if field == Field::PhoneCountryCode {
            return;
        }
        if let Some(input) = self.element(field.name()) {
            toggle_classes(&input, ERROR_CLASSES, message.is_some());
            toggle_classes(&input, OK_CLASSES, message.is_none());
        }
    }

    fn sync_secret(&self, field: Field, visible: bool) {
        if let Some(input) = self.element(field.name()) {
            let input_type = if visible { "text" } else { "password" };
            if input.get_attribute("type").as_deref() != Some(input_type) {
                report(input.set_attribute("type", input_type));
            }
        }

        let selector = format!("[data-target=\"{}\"]", field.name());
        if let Ok(Some(button)) = self.root.query_selector(&selector) {
            let label = view::toggle_label(field, visible);
            if button.get_attribute("aria-label").as_deref() != Some(label) {
                report(button.set_attribute("aria-label", label));
                button.set_inner_html(&view::eye_icon(visible).into_string());
            }
        }
    }

    fn sync_submit(&self, enabled: bool) {
        if let Some(button) = self.element(SUBMIT_ID) {
            button.set_class_name(view::submit_class(enabled));
            let result = if enabled {
                button.remove_attribute("disabled")
            } else {
                button.set_attribute("disabled", "")
            };
            report(result);
        }
    }
}

fn field_of(target: &Element) -> Option<Field> {
    target
        .get_attribute("name")
        .and_then(|name| Field::from_name(&name))
}

fn value_of(target: &Element) -> String {
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(select) = target.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else {
        String::new()
    }
}

fn toggle_classes(el: &Element, classes: &[&str], on: bool) {
    let list = el.class_list();
    for class in classes {
        let result = if on { list.add_1(class) } else { list.remove_1(class) };
        report(result);
    }
}

fn report(result: Result<(), JsValue>) {
    if let Err(e) = result {
        console::warn_2(&"[regform] DOM update failed:".into(), &e);
    }
}
