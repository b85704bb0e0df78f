//! regform WASM
//!
//! Browser entry points: `mount` wires the form controller to the page, and
//! the helpers expose the validator and formatter to plain JavaScript.

use regform::{format_aadhar, validate, FormData};
use serde::Serialize;
use wasm_bindgen::prelude::*;

mod dom;
mod storage;

pub use dom::form_config;
pub use storage::LocalStorage;

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Mount the registration form onto the element with id `root_id`
///
/// The element's `data-storage-key` and `data-gate-errors` attributes select
/// the storage key and whether errors wait for a field to be touched.
#[wasm_bindgen]
pub fn mount(root_id: &str) -> Result<(), JsValue> {
    dom::mount(root_id)
}

/// Validate a form record given as a plain object
///
/// # Returns
/// Object mapping field name to message, for invalid fields only
///
/// # Example (JavaScript)
/// ```javascript
/// const errors = validateForm({ firstName: 'Jo', email: 'jo@' });
/// // errors.email === 'Invalid email format.'
/// ```
#[wasm_bindgen(js_name = validateForm)]
pub fn validate_form(data: JsValue) -> Result<JsValue, JsValue> {
    let data: FormData = serde_wasm_bindgen::from_value(data)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse form data: {}", e)))?;

    let errors = validate(&data);
    Ok(errors.serialize(&serde_wasm_bindgen::Serializer::json_compatible())?)
}

/// Group an Aadhar number in fours, keeping at most 12 digits
#[wasm_bindgen(js_name = formatAadhar)]
pub fn format_aadhar_js(value: &str) -> String {
    format_aadhar(value)
}
