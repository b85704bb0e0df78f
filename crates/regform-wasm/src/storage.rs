//! `localStorage` backend for the persistence adapter

use regform::{PersistenceError, Storage};
use wasm_bindgen::JsValue;
use web_sys::console;

/// Browser `localStorage`
///
/// Private browsing modes or disabled storage leave `inner` empty; reads
/// then fail (and the form starts from defaults) and writes are dropped.
pub struct LocalStorage {
    inner: Option<web_sys::Storage>,
}

impl LocalStorage {
    pub fn open() -> Self {
        let inner = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if inner.is_none() {
            console::warn_1(&"[regform] localStorage unavailable, progress will not be saved".into());
        }
        Self { inner }
    }

    fn storage(&self) -> Result<&web_sys::Storage, PersistenceError> {
        self.inner
            .as_ref()
            .ok_or_else(|| PersistenceError::Unavailable("localStorage".to_string()))
    }
}

impl Storage for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| PersistenceError::Unavailable(describe(&e)))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        self.storage()?.set_item(key, value).map_err(|e| {
            let reason = describe(&e);
            console::warn_1(&format!("[regform] could not save form data: {}", reason).into());
            PersistenceError::Write(reason)
        })
    }

    fn name(&self) -> &'static str {
        "localStorage"
    }
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
