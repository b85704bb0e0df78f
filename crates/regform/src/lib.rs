// regform - registration form core
// State, validation, persistence and maud views shared by the browser
// bindings and the development server

pub mod config;
pub mod controller;
pub mod persistence;
pub mod resolver;
pub mod validator;
pub mod view;

pub use config::{Config, FormConfig, ServerConfig};
pub use controller::{FormController, FormEvent, FormState, Outcome, View};
pub use persistence::{MemoryStorage, PersistenceError, Storage, DEFAULT_STORAGE_KEY};
pub use validator::{can_submit, validate, FieldErrors};

// Re-export the record types so downstream crates need a single dependency
pub use regform_types::{self as types, Field, FormData, Registration};
pub use regform_validation::{self as rules, format_aadhar};

// Re-export Maud for the page shell
pub use maud::{Markup, PreEscaped, DOCTYPE};
