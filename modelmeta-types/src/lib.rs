//! Core identifier types for modelmeta.
//!
//! This crate defines the small, dependency-light value types every other
//! modelmeta crate builds on:
//! - Field identifiers ([`FieldId`]) and their search-index twin ([`IndexableFieldId`])
//! - Runtime type identity ([`TypeRef`]) used to type-check field values
//! - Localized text ([`LocalizedText`], [`Language`]) for field names and descriptions
//! - The [`ModelObjectId`] trait and [`model_object_id!`] macro for typed OIDs
//!
//! Field kinds, descriptors and registries live in `modelmeta-fields` and
//! `modelmeta-registry`, not here.

mod ids;
mod oid;
mod text;
mod type_ref;

pub use ids::{FieldId, IndexableFieldId};
pub use oid::ModelObjectId;
pub use text::{Language, LocalizedText};
pub use type_ref::TypeRef;

#[doc(hidden)]
pub mod __private {
    pub use serde;
    pub use uuid;
}

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid field id: {0:?}")]
    InvalidFieldId(String),

    #[error("invalid language code: {0:?}")]
    InvalidLanguage(String),

    #[error("invalid UUID: {0}")]
    InvalidUuid(#[from] uuid::Error),
}
