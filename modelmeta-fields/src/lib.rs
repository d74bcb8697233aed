//! Field descriptors for modelmeta.
//!
//! Defines how a single field of a model object type is described:
//! - [`FieldKind`] — the closed set of field kinds and their payloads
//! - [`FieldValue`] — runtime values checked against a descriptor with `accepts`
//! - [`SearchIndexingConfig`] — stored / indexed / tokenized / boost policy
//! - [`FieldMetaData`] — the immutable descriptor itself
//! - [`FieldMetaDataBuilder`] — a staged builder that only offers the indexing
//!   transitions legal for the selected kind
//! - [`FieldRecord`] — the serializable form handed to marshallers
//!
//! Per-type catalogues, facets and the registry live in `modelmeta-registry`.

pub mod builder;
mod error;
mod field;
mod indexing;
mod kind;
mod record;
mod value;

pub use builder::FieldMetaDataBuilder;
pub use error::{FieldError, Result};
pub use field::FieldMetaData;
pub use indexing::SearchIndexingConfig;
pub use kind::{
    DependentObjects, FieldKind, IndexingFamily, KindTag, PolymorphicType, SummaryTypeRef,
};
pub use record::FieldRecord;
pub use value::{
    EnumType, EnumValue, FieldValue, ModelPath, OidValue, PathValue, RangeValue, SummaryType,
    SummaryValue,
};
