//! Codec error kinds.

use thiserror::Error;

use super::value::FieldType;

/// Errors raised while decoding, building, or resolving navigation arguments.
///
/// Only the first violation (in schema order) is ever reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgsError {
    /// A required field is absent from the container and has no default.
    #[error("Required argument \"{0}\" is missing and does not have a default value")]
    MissingRequiredField(String),
    /// A non-nullable field received a null value.
    #[error("Argument \"{0}\" is marked as non-null but was passed a null value")]
    NullForNonNullable(String),
    /// A stored value does not match the field's declared type.
    #[error("Argument \"{field}\" expects {expected} but the container holds {found}")]
    TypeMismatch {
        /// Field name.
        field: String,
        /// Declared type.
        expected: FieldType,
        /// Type name of the value actually found.
        found: String,
    },
    /// A builder was asked to set a field the schema does not declare.
    #[error("Argument \"{0}\" is not declared by this schema")]
    UnknownField(String),
    /// A schema violates the default-value invariant.
    #[error("Invalid schema: {0}")]
    InvalidSchema(String),
    /// A direction name is not present in the resource namespace.
    #[error("Action \"{0}\" is not defined in the resource namespace")]
    UnknownAction(String),
}
