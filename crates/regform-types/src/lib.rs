//! Registration form types
//!
//! - [`FormData`]: the raw, in-progress record exactly as the user typed it
//!   and as it is persisted between visits.
//! - [`Field`]: names and labels of the record's fields.
//! - [`reference`]: compiled-in countries, cities and dialing codes.
//! - [`Registration`]: the strongly typed record a successful submit produces.
//!   Each text field is a `nutype` newtype, so holding a `Registration` means
//!   every rule has already passed.

pub mod field;
pub mod form_data;
pub mod reference;
pub mod registration;
pub mod validated;

pub use field::Field;
pub use form_data::FormData;
pub use reference::{Country, PhoneCode, COUNTRIES, PHONE_CODES};
pub use registration::{Registration, RegistrationError};
pub use validated::*;
