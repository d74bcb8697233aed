//! Error types for field descriptors.

use modelmeta_types::FieldId;
use thiserror::Error;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, FieldError>;

#[derive(Debug, Error)]
pub enum FieldError {
    /// A value's runtime type does not match the field's kind or data type.
    #[error("field '{field}' expects a {expected} value, got {actual}")]
    ValueKindMismatch {
        field: FieldId,
        expected: String,
        actual: String,
    },

    /// A leaf-only operation was attempted on a dependent-object field.
    #[error("field '{field}' is a dependent object group and does not support {operation}")]
    CompoundFieldMisuse {
        field: FieldId,
        operation: &'static str,
    },

    #[error("invalid field record: {0}")]
    InvalidRecord(String),

    #[error(transparent)]
    Types(#[from] modelmeta_types::Error),
}
