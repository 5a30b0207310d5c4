//! Calculator input - text parsing and validation

mod form;
mod validation;

pub use form::{parse_field, InputForm, RawInputs, DEFAULT_BALANCE_FACTOR};
pub use validation::{validate, CompleteInputs, Validation};
