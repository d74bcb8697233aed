//! Error types for the metadata registry.

use modelmeta_fields::FieldError;
use modelmeta_types::FieldId;
use thiserror::Error;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, RegistryError>;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("model type '{model_type}' has no facet satisfying '{capability}'")]
    CapabilityNotFound {
        model_type: &'static str,
        capability: &'static str,
    },

    #[error("no metadata descriptor registered for model type '{model_type}'")]
    MissingDescriptor { model_type: &'static str },

    #[error(
        "model type '{model_type}' is already described by '{existing}', cannot register '{conflicting}'"
    )]
    ConflictingDescriptor {
        model_type: &'static str,
        existing: &'static str,
        conflicting: &'static str,
    },

    #[error("type code {type_code} is used by both '{first}' and '{second}'")]
    DuplicateTypeCode {
        type_code: i64,
        first: &'static str,
        second: &'static str,
    },

    #[error("model type '{model_type}' declares field '{field}' more than once")]
    DuplicateField {
        model_type: &'static str,
        field: FieldId,
    },

    #[error("model type '{model_type}' has no field '{field}'")]
    UnknownField {
        model_type: &'static str,
        field: FieldId,
    },

    #[error("facet declarations of '{model_type}' form a cycle")]
    FacetCycle { model_type: &'static str },

    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Field(#[from] FieldError),
}
