//! Serializable form of a field descriptor.
//!
//! Marshallers persist or transmit schema definitions through
//! [`FieldRecord`]; the descriptor types themselves stay serde-free because
//! runtime type identity cannot be deserialized.

use crate::error::{FieldError, Result};
use crate::field::FieldMetaData;
use crate::indexing::SearchIndexingConfig;
use crate::kind::{IndexingFamily, KindTag};
use modelmeta_types::{FieldId, LocalizedText};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldRecord {
    pub id: FieldId,
    pub name: LocalizedText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<LocalizedText>,
    pub indexing: SearchIndexingConfig,
    pub kind: String,
    pub data_type: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<FieldRecord>,
}

impl FieldRecord {
    /// Indexing family of the recorded kind.
    pub fn indexing_family(&self) -> Result<IndexingFamily> {
        KindTag::from_name(&self.kind)
            .map(KindTag::indexing_family)
            .ok_or_else(|| {
                FieldError::InvalidRecord(format!(
                    "field '{}' has unknown kind '{}'",
                    self.id, self.kind
                ))
            })
    }

    /// Rejects records whose indexing config no builder path could produce
    /// for the recorded kind, and children on non-compound fields.
    pub fn check_indexing(&self) -> Result<()> {
        let family = self.indexing_family()?;
        if !family.permits(&self.indexing) {
            return Err(FieldError::InvalidRecord(format!(
                "field '{}' of kind '{}' cannot have indexing {:?}",
                self.id, self.kind, self.indexing
            )));
        }
        if family != IndexingFamily::Compound && !self.children.is_empty() {
            return Err(FieldError::InvalidRecord(format!(
                "field '{}' of kind '{}' cannot have child fields",
                self.id, self.kind
            )));
        }
        self.children.iter().try_for_each(Self::check_indexing)
    }
}

impl From<&FieldMetaData> for FieldRecord {
    fn from(field: &FieldMetaData) -> Self {
        Self {
            id: field.id().clone(),
            name: field.name().clone(),
            description: field.description().cloned(),
            indexing: *field.indexing(),
            kind: field.kind().name().to_string(),
            data_type: field.data_type().name().to_string(),
            children: field
                .children()
                .map(|children| children.map(Self::from).collect())
                .unwrap_or_default(),
        }
    }
}
