use crate::builder::{FieldMetaDataBuilder, NameStage};
use crate::error::{FieldError, Result};
use crate::indexing::SearchIndexingConfig;
use crate::kind::FieldKind;
use crate::record::FieldRecord;
use crate::value::FieldValue;
use modelmeta_types::{FieldId, IndexableFieldId, LocalizedText, TypeRef};

/// Immutable descriptor of one field of a model object type.
///
/// Built exclusively through [`FieldMetaDataBuilder`]; the data type is
/// derived from the kind, so the two can never disagree.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldMetaData {
    id: FieldId,
    name: LocalizedText,
    description: Option<LocalizedText>,
    indexing: SearchIndexingConfig,
    kind: FieldKind,
}

impl FieldMetaData {
    /// Starts building a descriptor for `id`.
    pub fn for_id(id: FieldId) -> NameStage {
        FieldMetaDataBuilder::for_id(id)
    }

    pub(crate) fn from_parts(
        id: FieldId,
        name: LocalizedText,
        description: Option<LocalizedText>,
        kind: FieldKind,
        indexing: SearchIndexingConfig,
    ) -> Self {
        Self {
            id,
            name,
            description,
            indexing,
            kind,
        }
    }

    #[must_use]
    pub fn id(&self) -> &FieldId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &LocalizedText {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> Option<&LocalizedText> {
        self.description.as_ref()
    }

    #[must_use]
    pub fn indexing(&self) -> &SearchIndexingConfig {
        &self.indexing
    }

    #[must_use]
    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    #[must_use]
    pub fn data_type(&self) -> TypeRef {
        self.kind.data_type()
    }

    /// For polymorphic fields, the data type used when `subtype` is in play.
    /// Every other kind answers its own data type.
    #[must_use]
    pub fn data_type_for(&self, subtype: TypeRef) -> TypeRef {
        match &self.kind {
            FieldKind::Polymorphic(poly) => poly.data_type_for(subtype),
            kind => kind.data_type(),
        }
    }

    #[must_use]
    pub const fn is_language_dependent(&self) -> bool {
        self.kind.is_language_dependent()
    }

    #[must_use]
    pub const fn has_multiple_dimensions(&self) -> bool {
        self.kind.has_multiple_dimensions()
    }

    #[must_use]
    pub const fn has_multiple_values(&self) -> bool {
        self.kind.has_multiple_values()
    }

    /// Returns whether `value` may be stored in this field.
    ///
    /// Fails with [`FieldError::CompoundFieldMisuse`] on dependent-object fields.
    pub fn accepts(&self, value: &FieldValue) -> Result<bool> {
        self.kind
            .accepts_leaf(value)
            .ok_or_else(|| self.compound_misuse("value acceptance"))
    }

    /// Like [`accepts`](Self::accepts), but a rejected value is an error.
    pub fn validate(&self, value: &FieldValue) -> Result<()> {
        if self.accepts(value)? {
            Ok(())
        } else {
            Err(FieldError::ValueKindMismatch {
                field: self.id.clone(),
                expected: format!("{} ({})", self.kind.name(), self.data_type()),
                actual: value.type_ref().name().to_string(),
            })
        }
    }

    /// Id under which the search engine indexes this field.
    ///
    /// Fails with [`FieldError::CompoundFieldMisuse`] on dependent-object fields.
    pub fn indexable_field_id(&self) -> Result<IndexableFieldId> {
        if self.kind.is_compound() {
            return Err(self.compound_misuse("indexable field ids"));
        }
        Ok(self.id.to_indexable())
    }

    /// Child fields of a dependent object group.
    pub fn children(&self) -> Option<impl Iterator<Item = &FieldMetaData>> {
        match &self.kind {
            FieldKind::DependentObjectGroup(group) => Some(group.fields.values()),
            _ => None,
        }
    }

    #[must_use]
    pub fn child(&self, id: &FieldId) -> Option<&FieldMetaData> {
        match &self.kind {
            FieldKind::DependentObjectGroup(group) => group.fields.get(id),
            _ => None,
        }
    }

    #[must_use]
    pub fn to_record(&self) -> FieldRecord {
        FieldRecord::from(self)
    }

    fn compound_misuse(&self, operation: &'static str) -> FieldError {
        FieldError::CompoundFieldMisuse {
            field: self.id.clone(),
            operation,
        }
    }
}
