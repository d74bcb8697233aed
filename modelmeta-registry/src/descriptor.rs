//! Declarations supplied by entity-type modules.
//!
//! Each model object type is associated with exactly one descriptor type
//! implementing [`MetadataDescriptor`]. Descriptors are collected in a
//! [`DescriptorTable`] at startup; nothing is discovered by scanning.

use crate::error::{RegistryError, Result};
use modelmeta_fields::FieldMetaData;
use modelmeta_types::TypeRef;
use std::collections::HashMap;
use tracing::debug;

/// Metadata capability of versionable types, usable with
/// [`ModelObjectTypeMetadata::as_facet`](crate::ModelObjectTypeMetadata::as_facet).
#[derive(Debug)]
pub struct Versionable;

/// OID types of a versionable model object type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Versioning {
    /// Identifies the object across all of its versions.
    pub version_independent_oid: TypeRef,
    /// Identifies one version of the object.
    pub version_oid: TypeRef,
}

/// Declares the metadata of one model object type.
///
/// `describe` may run more than once for the same type when lazy
/// construction races, so it must be free of side effects.
pub trait MetadataDescriptor: 'static {
    /// The model object type this descriptor describes.
    type ModelObject: ?Sized + 'static;

    /// Namespace bootstrapped together, e.g. `"crm"`.
    const NAMESPACE: &'static str;

    fn describe() -> TypeDescriptor;
}

/// What a descriptor declares about its model object type.
#[derive(Debug, Clone)]
pub struct TypeDescriptor {
    type_code: i64,
    oid_type: TypeRef,
    versioning: Option<Versioning>,
    facets: Vec<TypeRef>,
    capabilities: Vec<TypeRef>,
    fields: Vec<FieldMetaData>,
}

impl TypeDescriptor {
    #[must_use]
    pub fn new(type_code: i64, oid_type: TypeRef) -> Self {
        Self {
            type_code,
            oid_type,
            versioning: None,
            facets: Vec::new(),
            capabilities: Vec::new(),
            fields: Vec::new(),
        }
    }

    /// Marks the type versionable with the given OID types.
    #[must_use]
    pub fn versionable(mut self, version_independent_oid: TypeRef, version_oid: TypeRef) -> Self {
        self.versioning = Some(Versioning {
            version_independent_oid,
            version_oid,
        });
        self
    }

    /// Adds a facet: another model type whose metadata this type composes.
    #[must_use]
    pub fn with_facet(mut self, facet: TypeRef) -> Self {
        if !self.facets.contains(&facet) {
            self.facets.push(facet);
        }
        self
    }

    /// Adds a capability the model type itself declares.
    #[must_use]
    pub fn with_capability(mut self, capability: TypeRef) -> Self {
        if !self.capabilities.contains(&capability) {
            self.capabilities.push(capability);
        }
        self
    }

    #[must_use]
    pub fn with_field(mut self, field: FieldMetaData) -> Self {
        self.fields.push(field);
        self
    }

    #[must_use]
    pub fn with_fields(mut self, fields: impl IntoIterator<Item = FieldMetaData>) -> Self {
        self.fields.extend(fields);
        self
    }

    #[must_use]
    pub const fn type_code(&self) -> i64 {
        self.type_code
    }

    #[must_use]
    pub const fn oid_type(&self) -> TypeRef {
        self.oid_type
    }

    #[must_use]
    pub const fn versioning(&self) -> Option<Versioning> {
        self.versioning
    }

    #[must_use]
    pub fn facets(&self) -> &[TypeRef] {
        &self.facets
    }

    #[must_use]
    pub fn capabilities(&self) -> &[TypeRef] {
        &self.capabilities
    }

    #[must_use]
    pub fn fields(&self) -> &[FieldMetaData] {
        &self.fields
    }

    pub(crate) fn into_fields(self) -> Vec<FieldMetaData> {
        self.fields
    }
}

/// One row of the registration table.
#[derive(Debug, Clone, Copy)]
pub struct DescriptorEntry {
    pub model_type: TypeRef,
    pub descriptor_type: TypeRef,
    pub namespace: &'static str,
    pub describe: fn() -> TypeDescriptor,
}

impl DescriptorEntry {
    #[must_use]
    pub fn of<D: MetadataDescriptor>() -> Self {
        Self {
            model_type: TypeRef::of::<D::ModelObject>(),
            descriptor_type: TypeRef::of::<D>(),
            namespace: D::NAMESPACE,
            describe: D::describe,
        }
    }
}

/// Registration table mapping model types to their descriptors.
#[derive(Debug, Default)]
pub struct DescriptorTable {
    entries: HashMap<TypeRef, DescriptorEntry>,
    order: Vec<TypeRef>,
}

impl DescriptorTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers descriptor `D` for its model object type.
    pub fn register<D: MetadataDescriptor>(&mut self) -> Result<()> {
        self.register_entry(DescriptorEntry::of::<D>())
    }

    /// Registers an entry. Re-registering the same descriptor is a no-op; a
    /// different descriptor for an already registered type is rejected.
    pub fn register_entry(&mut self, entry: DescriptorEntry) -> Result<()> {
        if let Some(existing) = self.entries.get(&entry.model_type) {
            if existing.descriptor_type == entry.descriptor_type {
                debug!(
                    model_type = entry.model_type.name(),
                    "descriptor already registered"
                );
                return Ok(());
            }
            return Err(RegistryError::ConflictingDescriptor {
                model_type: entry.model_type.name(),
                existing: existing.descriptor_type.name(),
                conflicting: entry.descriptor_type.name(),
            });
        }
        debug!(
            model_type = entry.model_type.name(),
            namespace = entry.namespace,
            "registered metadata descriptor"
        );
        self.order.push(entry.model_type);
        self.entries.insert(entry.model_type, entry);
        Ok(())
    }

    #[must_use]
    pub fn get(&self, model_type: TypeRef) -> Option<&DescriptorEntry> {
        self.entries.get(&model_type)
    }

    #[must_use]
    pub fn contains(&self, model_type: TypeRef) -> bool {
        self.entries.contains_key(&model_type)
    }

    /// Entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &DescriptorEntry> {
        self.order.iter().filter_map(|t| self.entries.get(t))
    }

    /// Entries of one namespace, in registration order.
    pub fn in_namespace<'a>(
        &'a self,
        namespace: &'a str,
    ) -> impl Iterator<Item = &'a DescriptorEntry> + 'a {
        self.iter().filter(move |e| e.namespace == namespace)
    }

    /// Distinct namespaces in first-registration order.
    #[must_use]
    pub fn namespaces(&self) -> Vec<&'static str> {
        let mut namespaces: Vec<&'static str> = Vec::new();
        for entry in self.iter() {
            if !namespaces.contains(&entry.namespace) {
                namespaces.push(entry.namespace);
            }
        }
        namespaces
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
