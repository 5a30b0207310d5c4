//! Calculation errors

use crate::types::InputField;
use thiserror::Error;

/// Error produced by an engine computation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("Please fill in all required fields: {}", join_fields(.fields))]
    MissingRequiredField { fields: Vec<InputField> },
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("{field} is not a finite number")]
    NonFiniteValue { field: InputField },
    #[error("Unknown upgrade book: {0}")]
    UnknownBook(String),
}

fn join_fields(fields: &[InputField]) -> String {
    fields
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(", ")
}
