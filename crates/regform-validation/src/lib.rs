//! regform validation core
//!
//! Pure per-field rules shared by the form validator, the validated newtypes
//! and the WASM bindings. Every rule takes the raw input and returns the first
//! failing message, so callers can build an error mapping without knowing the
//! order of the checks.

pub mod email;
pub mod format;
pub mod identity;
pub mod password;
pub mod string;

pub use email::*;
pub use format::*;
pub use identity::*;
pub use password::*;
pub use string::*;

/// Outcome of a single field rule: `Err` carries the user-facing message.
pub type RuleResult = Result<(), String>;
