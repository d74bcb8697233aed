//! Process-wide metadata cache.
//!
//! The registry is owned by the application's composition root and shared by
//! reference. Metadata is constructed lazily on the first `create_for` miss or
//! eagerly per namespace with [`MetadataRegistry::bootstrap`]. Construction
//! runs outside any cache lock; when two callers race on the same type, the
//! first insert wins and both receive that instance. Type codes are claimed
//! in the same step, so two types sharing a code are never both cached.

use crate::config::RegistryConfig;
use crate::descriptor::DescriptorTable;
use crate::error::{RegistryError, Result};
use crate::metadata::ModelObjectTypeMetadata;
use dashmap::DashMap;
use modelmeta_types::TypeRef;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

/// Resolves the facet closure of a model type.
pub trait FacetMetadataFactory {
    /// Metadata of `model_type` followed by the metadata of all its facets.
    fn facet_types_metadata_for(
        &self,
        model_type: TypeRef,
    ) -> Result<Vec<Arc<ModelObjectTypeMetadata>>>;
}

pub struct MetadataRegistry {
    table: DescriptorTable,
    cache: DashMap<TypeRef, Arc<ModelObjectTypeMetadata>>,
    /// Owner of each type code, claimed at publish time. Only consulted for
    /// duplicate detection.
    type_codes: DashMap<i64, TypeRef>,
    config: RegistryConfig,
}

impl MetadataRegistry {
    /// Creates an empty registry over `table` with default settings.
    #[must_use]
    pub fn new(table: DescriptorTable) -> Self {
        Self {
            table,
            cache: DashMap::new(),
            type_codes: DashMap::new(),
            config: RegistryConfig::default(),
        }
    }

    /// Creates a registry and bootstraps every namespace listed in
    /// `config.eager_namespaces`.
    pub fn with_config(table: DescriptorTable, config: RegistryConfig) -> Result<Self> {
        let registry = Self {
            table,
            cache: DashMap::new(),
            type_codes: DashMap::new(),
            config,
        };
        for namespace in &registry.config.eager_namespaces {
            registry.bootstrap(namespace)?;
        }
        Ok(registry)
    }

    #[must_use]
    pub fn table(&self) -> &DescriptorTable {
        &self.table
    }

    #[must_use]
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Returns the metadata of `model_type`, constructing and caching it on
    /// first use.
    pub fn create_for(&self, model_type: TypeRef) -> Result<Arc<ModelObjectTypeMetadata>> {
        self.resolve(model_type, &mut Vec::new())
    }

    /// Typed form of [`create_for`](Self::create_for).
    pub fn create_for_type<T: ?Sized + 'static>(&self) -> Result<Arc<ModelObjectTypeMetadata>> {
        self.create_for(TypeRef::of::<T>())
    }

    /// Finds already constructed metadata by type code.
    ///
    /// Scans the cache and returns the first match; only types that were
    /// bootstrapped or created before are found.
    #[must_use]
    pub fn create_for_type_code(&self, type_code: i64) -> Option<Arc<ModelObjectTypeMetadata>> {
        self.cache
            .iter()
            .find(|entry| entry.value().type_code() == type_code)
            .map(|entry| Arc::clone(entry.value()))
    }

    /// Cached metadata of `model_type`, without constructing it.
    #[must_use]
    pub fn get(&self, model_type: TypeRef) -> Option<Arc<ModelObjectTypeMetadata>> {
        self.cache.get(&model_type).map(|entry| Arc::clone(entry.value()))
    }

    /// Constructs the metadata of every type registered under `namespace`.
    ///
    /// Returns the number of types in the namespace. With
    /// `reject_duplicate_type_codes` set, type codes are checked against each
    /// other and against the cache before anything is constructed.
    pub fn bootstrap(&self, namespace: &str) -> Result<usize> {
        let entries: Vec<_> = self.table.in_namespace(namespace).copied().collect();

        if self.config.reject_duplicate_type_codes {
            let mut owners: HashMap<i64, TypeRef> = HashMap::new();
            for entry in &entries {
                let type_code = (entry.describe)().type_code();
                if let Some(first) = owners.insert(type_code, entry.model_type) {
                    return Err(RegistryError::DuplicateTypeCode {
                        type_code,
                        first: first.name(),
                        second: entry.model_type.name(),
                    });
                }
                self.check_type_code(type_code, entry.model_type)?;
            }
        }

        for entry in &entries {
            self.create_for(entry.model_type)?;
        }
        info!(namespace, types = entries.len(), "Bootstrapped metadata namespace");
        Ok(entries.len())
    }

    /// Bootstraps every registered namespace, returning the total type count.
    pub fn bootstrap_all(&self) -> Result<usize> {
        let mut total = 0;
        for namespace in self.table.namespaces() {
            total += self.bootstrap(namespace)?;
        }
        Ok(total)
    }

    /// Number of cached metadata objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Cached metadata of the types registered under `namespace`, in
    /// registration order.
    #[must_use]
    pub fn types_in_namespace(&self, namespace: &str) -> Vec<Arc<ModelObjectTypeMetadata>> {
        self.table
            .in_namespace(namespace)
            .filter_map(|entry| self.get(entry.model_type))
            .collect()
    }

    /// `path` holds the types whose construction is in progress, outermost first.
    fn resolve(
        &self,
        model_type: TypeRef,
        path: &mut Vec<TypeRef>,
    ) -> Result<Arc<ModelObjectTypeMetadata>> {
        if let Some(cached) = self.get(model_type) {
            return Ok(cached);
        }
        if path.contains(&model_type) {
            return Err(RegistryError::FacetCycle {
                model_type: model_type.name(),
            });
        }

        let entry = *self
            .table
            .get(model_type)
            .ok_or(RegistryError::MissingDescriptor {
                model_type: model_type.name(),
            })?;
        let descriptor = (entry.describe)();
        if self.config.reject_duplicate_type_codes {
            self.check_type_code(descriptor.type_code(), model_type)?;
        }

        path.push(model_type);
        let mut facets: Vec<Arc<ModelObjectTypeMetadata>> = Vec::new();
        for &facet_type in descriptor.facets() {
            let facet = self.resolve(facet_type, path)?;
            let transitive = facet.facet_metadata().to_vec();
            for member in std::iter::once(facet).chain(transitive) {
                if member.model_type() != model_type
                    && !facets.iter().any(|f| f.model_type() == member.model_type())
                {
                    facets.push(member);
                }
            }
        }
        path.pop();

        debug!(
            model_type = model_type.name(),
            facets = facets.len(),
            "Constructing model object type metadata"
        );
        let metadata = Arc::new(ModelObjectTypeMetadata::new(&entry, descriptor, facets)?);
        self.publish(metadata)
    }

    /// Claims the type code of `metadata`, then inserts it unless another
    /// caller got there first; returns the instance that ends up cached.
    fn publish(
        &self,
        metadata: Arc<ModelObjectTypeMetadata>,
    ) -> Result<Arc<ModelObjectTypeMetadata>> {
        let model_type = metadata.model_type();
        self.claim_type_code(metadata.type_code(), model_type)?;
        let winner = Arc::clone(
            self.cache
                .entry(model_type)
                .or_insert_with(|| Arc::clone(&metadata))
                .value(),
        );
        if !Arc::ptr_eq(&winner, &metadata) {
            debug!(
                model_type = model_type.name(),
                "Lost metadata construction race, using cached instance"
            );
        }
        Ok(winner)
    }

    /// Records `model_type` as the owner of `type_code` unless another type
    /// holds it already. The entry lock makes the check and the insert one step.
    fn claim_type_code(&self, type_code: i64, model_type: TypeRef) -> Result<()> {
        let owner = *self
            .type_codes
            .entry(type_code)
            .or_insert(model_type)
            .value();
        if owner == model_type || !self.config.reject_duplicate_type_codes {
            return Ok(());
        }
        debug!(
            type_code,
            owner = owner.name(),
            model_type = model_type.name(),
            "Type code already claimed"
        );
        Err(RegistryError::DuplicateTypeCode {
            type_code,
            first: owner.name(),
            second: model_type.name(),
        })
    }

    /// Early check against codes already claimed; [`claim_type_code`](Self::claim_type_code)
    /// is the authoritative one.
    fn check_type_code(&self, type_code: i64, model_type: TypeRef) -> Result<()> {
        match self.type_codes.get(&type_code).map(|entry| *entry.value()) {
            Some(first) if first != model_type => Err(RegistryError::DuplicateTypeCode {
                type_code,
                first: first.name(),
                second: model_type.name(),
            }),
            _ => Ok(()),
        }
    }
}

impl FacetMetadataFactory for MetadataRegistry {
    fn facet_types_metadata_for(
        &self,
        model_type: TypeRef,
    ) -> Result<Vec<Arc<ModelObjectTypeMetadata>>> {
        let metadata = self.create_for(model_type)?;
        Ok(std::iter::once(Arc::clone(&metadata))
            .chain(metadata.facet_metadata().iter().cloned())
            .collect())
    }
}
