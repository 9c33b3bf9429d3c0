use thiserror::Error;

use crate::input::InputField;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    /// One or more fields are unset. Not fatal: the user is still typing.
    #[error("Please fill in all the inputs (missing: {})", join_fields(.0))]
    Missing(Vec<InputField>),

    /// Fields are present but outside their domain.
    #[error(
        "Inputs must be positive numbers. TOA and GM/Week must be greater than 0 ({})",
        join_values(.0)
    )]
    OutOfRange(Vec<(InputField, f64)>),
}

impl InputError {
    /// Whether the current render should be reported as an error rather than a warning.
    pub fn is_fatal(&self) -> bool {
        matches!(self, InputError::OutOfRange(_))
    }

    pub fn fields(&self) -> Vec<InputField> {
        match self {
            InputError::Missing(fields) => fields.clone(),
            InputError::OutOfRange(values) => values.iter().map(|(field, _)| *field).collect(),
        }
    }
}

fn join_fields(fields: &[InputField]) -> String {
    fields
        .iter()
        .map(|field| field.label())
        .collect::<Vec<&str>>()
        .join(", ")
}

fn join_values(values: &[(InputField, f64)]) -> String {
    values
        .iter()
        .map(|(field, value)| format!("{field} = {value}"))
        .collect::<Vec<String>>()
        .join(", ")
}
