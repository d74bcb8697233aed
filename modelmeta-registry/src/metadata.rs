use crate::common;
use crate::descriptor::{DescriptorEntry, TypeDescriptor, Versionable, Versioning};
use crate::error::{RegistryError, Result};
use modelmeta_fields::{FieldMetaData, FieldRecord, FieldValue};
use modelmeta_types::{FieldId, TypeRef};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::{Arc, OnceLock};

/// Field catalogue and facet closure of one model object type.
///
/// Built once by the [`MetadataRegistry`](crate::MetadataRegistry) and never
/// mutated afterwards. The facet closure always includes the metadata
/// itself; [`facets`](Self::facets) yields it first.
pub struct ModelObjectTypeMetadata {
    model_type: TypeRef,
    descriptor_type: TypeRef,
    namespace: &'static str,
    type_code: i64,
    oid_type: TypeRef,
    versioning: Option<Versioning>,
    capabilities: Vec<TypeRef>,
    fields_by_id: BTreeMap<FieldId, FieldMetaData>,
    /// Transitive facets, excluding this type.
    facets: Vec<Arc<ModelObjectTypeMetadata>>,
    facet_type_codes: OnceLock<BTreeSet<i64>>,
    facet_types: OnceLock<Vec<TypeRef>>,
}

impl ModelObjectTypeMetadata {
    /// Injects the common fields (and version fields for versionable types)
    /// ahead of the declared ones. Any id defined twice is rejected.
    pub(crate) fn new(
        entry: &DescriptorEntry,
        descriptor: TypeDescriptor,
        facets: Vec<Arc<ModelObjectTypeMetadata>>,
    ) -> Result<Self> {
        let type_code = descriptor.type_code();
        let oid_type = descriptor.oid_type();
        let versioning = descriptor.versioning();
        let capabilities = descriptor.capabilities().to_vec();

        let mut fields = common::common_fields(oid_type);
        if let Some(versioning) = versioning {
            fields.extend(common::version_fields(versioning));
        }
        fields.extend(descriptor.into_fields());

        let mut fields_by_id = BTreeMap::new();
        for field in fields {
            if fields_by_id.contains_key(field.id()) {
                return Err(RegistryError::DuplicateField {
                    model_type: entry.model_type.name(),
                    field: field.id().clone(),
                });
            }
            fields_by_id.insert(field.id().clone(), field);
        }

        Ok(Self {
            model_type: entry.model_type,
            descriptor_type: entry.descriptor_type,
            namespace: entry.namespace,
            type_code,
            oid_type,
            versioning,
            capabilities,
            fields_by_id,
            facets,
            facet_type_codes: OnceLock::new(),
            facet_types: OnceLock::new(),
        })
    }

    #[must_use]
    pub const fn model_type(&self) -> TypeRef {
        self.model_type
    }

    #[must_use]
    pub const fn descriptor_type(&self) -> TypeRef {
        self.descriptor_type
    }

    #[must_use]
    pub const fn namespace(&self) -> &'static str {
        self.namespace
    }

    #[must_use]
    pub const fn type_code(&self) -> i64 {
        self.type_code
    }

    #[must_use]
    pub const fn oid_type(&self) -> TypeRef {
        self.oid_type
    }

    /// Version OID types, for versionable types only.
    #[must_use]
    pub const fn versioning(&self) -> Option<Versioning> {
        self.versioning
    }

    #[must_use]
    pub const fn is_versionable(&self) -> bool {
        self.versioning.is_some()
    }

    /// Capabilities the model type declares itself.
    #[must_use]
    pub fn capabilities(&self) -> &[TypeRef] {
        &self.capabilities
    }

    // ── Fields ───────────────────────────────────────────────────

    /// Looks `id` up on this type, then on each facet in closure order.
    #[must_use]
    pub fn field_metadata_for(&self, id: &FieldId) -> Option<&FieldMetaData> {
        self.fields_by_id
            .get(id)
            .or_else(|| self.facets.iter().find_map(|f| f.fields_by_id.get(id)))
    }

    /// Fields of this type only, common fields included, ordered by id.
    pub fn own_fields(&self) -> impl Iterator<Item = &FieldMetaData> {
        self.fields_by_id.values()
    }

    /// Every field reachable through the facet closure, ordered by id. Where
    /// two members define the same id, this type's definition wins, then the
    /// earliest facet's.
    #[must_use]
    pub fn all_fields(&self) -> Vec<&FieldMetaData> {
        let mut merged: BTreeMap<&FieldId, &FieldMetaData> = BTreeMap::new();
        for member in self.facets() {
            for (id, field) in &member.fields_by_id {
                merged.entry(id).or_insert(field);
            }
        }
        merged.into_values().collect()
    }

    #[must_use]
    pub fn field_ids(&self) -> Vec<&FieldId> {
        self.all_fields().into_iter().map(FieldMetaData::id).collect()
    }

    /// Checks `value` against the field `id` resolves to.
    pub fn validate(&self, id: &FieldId, value: &FieldValue) -> Result<()> {
        let field = self
            .field_metadata_for(id)
            .ok_or_else(|| RegistryError::UnknownField {
                model_type: self.model_type.name(),
                field: id.clone(),
            })?;
        field.validate(value)?;
        Ok(())
    }

    // ── Facets ───────────────────────────────────────────────────

    /// The facet closure: this metadata first, then every facet.
    pub fn facets(&self) -> impl Iterator<Item = &ModelObjectTypeMetadata> {
        std::iter::once(self).chain(self.facets.iter().map(Arc::as_ref))
    }

    /// Shared facet metadata, excluding this type.
    #[must_use]
    pub fn facet_metadata(&self) -> &[Arc<ModelObjectTypeMetadata>] {
        &self.facets
    }

    #[must_use]
    pub fn contains_facet(&self, other: &ModelObjectTypeMetadata) -> bool {
        self.facets().any(|m| m.model_type == other.model_type)
    }

    /// Type codes of every member of the facet closure.
    pub fn facet_type_codes(&self) -> &BTreeSet<i64> {
        self.facet_type_codes
            .get_or_init(|| self.facets().map(|m| m.type_code).collect())
    }

    /// Model types of every member of the facet closure, this type first.
    pub fn facet_types(&self) -> &[TypeRef] {
        self.facet_types
            .get_or_init(|| self.facets().map(|m| m.model_type).collect())
    }

    // ── Capabilities ─────────────────────────────────────────────

    /// Member of the facet closure that satisfies `capability`, searching
    /// this type first.
    ///
    /// A member satisfies a capability named by its model type or its
    /// descriptor type; versionable members also satisfy [`Versionable`].
    pub fn as_facet(&self, capability: TypeRef) -> Result<&ModelObjectTypeMetadata> {
        self.facets()
            .find(|m| m.satisfies(capability))
            .ok_or(RegistryError::CapabilityNotFound {
                model_type: self.model_type.name(),
                capability: capability.name(),
            })
    }

    #[must_use]
    pub fn is(&self, capability: TypeRef) -> bool {
        self.facets().any(|m| m.satisfies(capability))
    }

    /// Whether the model type, or the model type of any facet, is or declares
    /// `capability`.
    #[must_use]
    pub fn has_facet(&self, capability: TypeRef) -> bool {
        self.facets()
            .any(|m| m.model_type == capability || m.capabilities.contains(&capability))
    }

    fn satisfies(&self, capability: TypeRef) -> bool {
        self.model_type == capability
            || self.descriptor_type == capability
            || (self.versioning.is_some() && capability.is::<Versionable>())
    }

    /// Serializable summary of the type and its full field set.
    #[must_use]
    pub fn describe(&self) -> TypeMetadataRecord {
        TypeMetadataRecord {
            model_type: self.model_type.name().to_string(),
            namespace: self.namespace.to_string(),
            type_code: self.type_code,
            versionable: self.is_versionable(),
            facet_type_codes: self.facet_type_codes().iter().copied().collect(),
            fields: self
                .all_fields()
                .into_iter()
                .map(FieldMetaData::to_record)
                .collect(),
        }
    }
}

/// Two metadata objects are equal when they describe the same type with the
/// same fields and the same facet closure.
impl PartialEq for ModelObjectTypeMetadata {
    fn eq(&self, other: &Self) -> bool {
        self.model_type == other.model_type
            && self.descriptor_type == other.descriptor_type
            && self.type_code == other.type_code
            && self.oid_type == other.oid_type
            && self.versioning == other.versioning
            && self.capabilities == other.capabilities
            && self.fields_by_id == other.fields_by_id
            && self.facets.len() == other.facets.len()
            && self
                .facets
                .iter()
                .zip(&other.facets)
                .all(|(a, b)| a.model_type == b.model_type)
    }
}

impl fmt::Debug for ModelObjectTypeMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelObjectTypeMetadata")
            .field("model_type", &self.model_type)
            .field("type_code", &self.type_code)
            .field("fields", &self.fields_by_id.len())
            .field(
                "facets",
                &self.facets.iter().map(|m| m.model_type).collect::<Vec<_>>(),
            )
            .finish_non_exhaustive()
    }
}

/// Serialized form of a [`ModelObjectTypeMetadata`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeMetadataRecord {
    pub model_type: String,
    pub namespace: String,
    pub type_code: i64,
    #[serde(default)]
    pub versionable: bool,
    pub facet_type_codes: Vec<i64>,
    pub fields: Vec<FieldRecord>,
}

impl TypeMetadataRecord {
    #[must_use]
    pub fn field(&self, id: &FieldId) -> Option<&FieldRecord> {
        self.fields.iter().find(|f| &f.id == id)
    }

    /// Runs [`FieldRecord::check_indexing`] over every field.
    pub fn check_indexing(&self) -> Result<()> {
        self.fields.iter().try_for_each(FieldRecord::check_indexing)?;
        Ok(())
    }
}
