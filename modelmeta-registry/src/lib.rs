//! Model object type metadata for modelmeta.
//!
//! Composes per-type field catalogues and shares them process-wide:
//! - [`MetadataDescriptor`] / [`TypeDescriptor`] — what an entity-type module declares
//! - [`DescriptorTable`] — the explicit registration table from model type to descriptor
//! - [`ModelObjectTypeMetadata`] — a type's fields (common fields included) and facet closure
//! - [`MetadataRegistry`] — concurrent cache with lazy `create_for` and namespace bootstrap
//! - [`RegistryConfig`] — bootstrap settings loaded from TOML
//!
//! Metadata objects are immutable once published and are shared as `Arc`s.

pub mod common;
mod config;
mod descriptor;
mod error;
mod metadata;
mod registry;

pub use config::RegistryConfig;
pub use descriptor::{
    DescriptorEntry, DescriptorTable, MetadataDescriptor, TypeDescriptor, Versionable, Versioning,
};
pub use error::{RegistryError, Result};
pub use metadata::{ModelObjectTypeMetadata, TypeMetadataRecord};
pub use registry::{FacetMetadataFactory, MetadataRegistry};
