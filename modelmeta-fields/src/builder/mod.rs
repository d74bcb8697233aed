//! Staged construction of [`FieldMetaData`].
//!
//! Each stage is its own type and only exposes the steps that are legal next:
//!
//! 1. [`FieldMetaDataBuilder::for_id`]
//! 2. [`NameStage::with_name`]
//! 3. [`DescriptionStage::with_description`] or [`DescriptionStage::with_no_description`]
//! 4. one `for_*_field` method on [`KindStage`]
//! 5. `search_engine()`, whose shape depends on the kind's [`IndexingFamily`]
//!
//! ```
//! use modelmeta_fields::FieldMetaData;
//! use modelmeta_types::{FieldId, LocalizedText};
//!
//! let title = FieldMetaData::for_id(FieldId::from_static("crm.title"))
//!     .with_name(LocalizedText::en("Title"))
//!     .with_no_description()
//!     .for_string_field()
//!     .search_engine()
//!     .stored()
//!     .indexed()
//!     .tokenized()
//!     .with_boosting(2.0);
//!
//! assert!(title.indexing().tokenized);
//! ```
//!
//! Transitions a kind does not support do not exist. A boolean field cannot
//! be tokenized:
//!
//! ```compile_fail
//! use modelmeta_fields::FieldMetaData;
//! use modelmeta_types::{FieldId, LocalizedText};
//!
//! FieldMetaData::for_id(FieldId::from_static("crm.active"))
//!     .with_name(LocalizedText::en("Active"))
//!     .with_no_description()
//!     .for_boolean_field()
//!     .search_engine()
//!     .stored()
//!     .indexed()
//!     .tokenized();
//! ```
//!
//! An OID field is always stored, so there is no storage choice to make:
//!
//! ```compile_fail
//! use modelmeta_fields::FieldMetaData;
//! use modelmeta_types::{FieldId, LocalizedText, TypeRef};
//!
//! FieldMetaData::for_id(FieldId::from_static("crm.owner"))
//!     .with_name(LocalizedText::en("Owner"))
//!     .with_no_description()
//!     .for_oid_field(TypeRef::of::<u128>())
//!     .search_engine()
//!     .not_stored();
//! ```
//!
//! An always-tokenized field cannot opt out of tokenization once indexed:
//!
//! ```compile_fail
//! use modelmeta_fields::FieldMetaData;
//! use modelmeta_types::{FieldId, LocalizedText};
//!
//! FieldMetaData::for_id(FieldId::from_static("crm.label"))
//!     .with_name(LocalizedText::en("Label"))
//!     .with_no_description()
//!     .for_localized_text_set_field()
//!     .search_engine()
//!     .stored()
//!     .indexed()
//!     .not_tokenized();
//! ```
//!
//! Boosting only applies to indexed fields:
//!
//! ```compile_fail
//! use modelmeta_fields::FieldMetaData;
//! use modelmeta_types::{FieldId, LocalizedText};
//!
//! FieldMetaData::for_id(FieldId::from_static("crm.age"))
//!     .with_name(LocalizedText::en("Age"))
//!     .with_no_description()
//!     .for_integer_field()
//!     .search_engine()
//!     .stored()
//!     .not_indexed()
//!     .with_default_boosting();
//! ```
//!
//! [`IndexingFamily`]: crate::IndexingFamily

mod search;

pub use search::{BoostStage, CompoundStoredChoice, IndexedChoice, StoredChoice, TokenizeChoice};

use crate::field::FieldMetaData;
use crate::indexing::SearchIndexingConfig;
use crate::kind::{DependentObjects, FieldKind, PolymorphicType, SummaryTypeRef};
use modelmeta_types::{FieldId, LocalizedText, TypeRef};
use std::marker::PhantomData;

/// Everything chosen before the indexing stage.
#[derive(Debug)]
pub struct Draft {
    id: FieldId,
    name: LocalizedText,
    description: Option<LocalizedText>,
    kind: FieldKind,
}

impl Draft {
    fn finish(self, indexing: SearchIndexingConfig) -> FieldMetaData {
        FieldMetaData::from_parts(self.id, self.name, self.description, self.kind, indexing)
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Marker for an indexing family; decides what `search_engine()` returns.
pub trait SearchEngineFamily: sealed::Sealed {
    type Entry;

    #[doc(hidden)]
    fn enter(draft: Draft) -> Self::Entry;
}

/// Stored, indexed and tokenized are free choices.
#[derive(Debug)]
pub enum General {}

/// Indexed fields are never tokenized.
#[derive(Debug)]
pub enum NotTokenizable {}

/// Indexed fields are always tokenized.
#[derive(Debug)]
pub enum AlwaysTokenized {}

/// Always stored; indexed fields are never tokenized.
#[derive(Debug)]
pub enum AlwaysStored {}

/// Never indexed.
#[derive(Debug)]
pub enum Compound {}

impl sealed::Sealed for General {}
impl sealed::Sealed for NotTokenizable {}
impl sealed::Sealed for AlwaysTokenized {}
impl sealed::Sealed for AlwaysStored {}
impl sealed::Sealed for Compound {}

impl SearchEngineFamily for General {
    type Entry = StoredChoice<General>;

    fn enter(draft: Draft) -> Self::Entry {
        StoredChoice::new(draft)
    }
}

impl SearchEngineFamily for NotTokenizable {
    type Entry = StoredChoice<NotTokenizable>;

    fn enter(draft: Draft) -> Self::Entry {
        StoredChoice::new(draft)
    }
}

impl SearchEngineFamily for AlwaysTokenized {
    type Entry = StoredChoice<AlwaysTokenized>;

    fn enter(draft: Draft) -> Self::Entry {
        StoredChoice::new(draft)
    }
}

impl SearchEngineFamily for AlwaysStored {
    type Entry = IndexedChoice<AlwaysStored>;

    fn enter(draft: Draft) -> Self::Entry {
        IndexedChoice::new(draft, true)
    }
}

impl SearchEngineFamily for Compound {
    type Entry = CompoundStoredChoice;

    fn enter(draft: Draft) -> Self::Entry {
        CompoundStoredChoice::new(draft)
    }
}

/// Entry point of the staged builder.
#[derive(Debug)]
pub struct FieldMetaDataBuilder;

impl FieldMetaDataBuilder {
    pub fn for_id(id: FieldId) -> NameStage {
        NameStage { id }
    }
}

#[derive(Debug)]
pub struct NameStage {
    id: FieldId,
}

impl NameStage {
    pub fn with_name(self, name: LocalizedText) -> DescriptionStage {
        DescriptionStage { id: self.id, name }
    }
}

#[derive(Debug)]
pub struct DescriptionStage {
    id: FieldId,
    name: LocalizedText,
}

impl DescriptionStage {
    pub fn with_description(self, description: LocalizedText) -> KindStage {
        KindStage {
            id: self.id,
            name: self.name,
            description: Some(description),
        }
    }

    pub fn with_no_description(self) -> KindStage {
        KindStage {
            id: self.id,
            name: self.name,
            description: None,
        }
    }
}

/// Kind selection: one method per field kind.
#[derive(Debug)]
pub struct KindStage {
    id: FieldId,
    name: LocalizedText,
    description: Option<LocalizedText>,
}

impl KindStage {
    fn draft(self, kind: FieldKind) -> Draft {
        Draft {
            id: self.id,
            name: self.name,
            description: self.description,
            kind,
        }
    }

    fn select<F: SearchEngineFamily>(self, kind: FieldKind) -> KindSelected<F> {
        KindSelected {
            draft: self.draft(kind),
            _family: PhantomData,
        }
    }

    pub fn for_string_field(self) -> KindSelected<General> {
        self.select(FieldKind::String)
    }

    pub fn for_integer_field(self) -> KindSelected<NotTokenizable> {
        self.select(FieldKind::Integer)
    }

    pub fn for_long_field(self) -> KindSelected<NotTokenizable> {
        self.select(FieldKind::Long)
    }

    pub fn for_float_field(self) -> KindSelected<NotTokenizable> {
        self.select(FieldKind::Float)
    }

    pub fn for_double_field(self) -> KindSelected<NotTokenizable> {
        self.select(FieldKind::Double)
    }

    pub fn for_boolean_field(self) -> KindSelected<NotTokenizable> {
        self.select(FieldKind::Boolean)
    }

    pub fn for_date_field(self) -> KindSelected<NotTokenizable> {
        self.select(FieldKind::Date)
    }

    pub fn for_oid_field(self, oid_type: TypeRef) -> KindSelected<AlwaysStored> {
        self.select(FieldKind::Oid { oid_type })
    }

    pub fn for_path_field(self, path_type: TypeRef) -> KindSelected<NotTokenizable> {
        self.select(FieldKind::Path { path_type })
    }

    pub fn for_url_field(self) -> KindSelected<NotTokenizable> {
        self.select(FieldKind::Url)
    }

    pub fn for_type_reference_field(self) -> KindSelected<AlwaysTokenized> {
        self.select(FieldKind::TypeReference)
    }

    pub fn for_enum_field(self, enum_type: TypeRef) -> KindSelected<NotTokenizable> {
        self.select(FieldKind::Enum { enum_type })
    }

    pub fn for_language_field(self) -> KindSelected<NotTokenizable> {
        self.select(FieldKind::Language)
    }

    pub fn for_localized_text_set_field(self) -> KindSelected<AlwaysTokenized> {
        self.select(FieldKind::LocalizedTextSet)
    }

    pub fn for_summary_field(self, summary: SummaryTypeRef) -> KindSelected<AlwaysTokenized> {
        self.select(FieldKind::Summary(summary))
    }

    pub fn for_collection_field(self, component: TypeRef) -> KindSelected<General> {
        self.select(FieldKind::Collection { component })
    }

    pub fn for_map_field(self, key: TypeRef, value: TypeRef) -> KindSelected<General> {
        self.select(FieldKind::Map { key, value })
    }

    pub fn for_range_field(self, bound: TypeRef) -> KindSelected<NotTokenizable> {
        self.select(FieldKind::Range { bound })
    }

    pub fn for_polymorphic_field(self, base: TypeRef) -> PolymorphicSelected {
        PolymorphicSelected {
            id: self.id,
            name: self.name,
            description: self.description,
            poly: PolymorphicType::new(base),
        }
    }

    /// Compound field whose value is itself a set of child fields.
    pub fn for_dependant_object(
        self,
        object_type: TypeRef,
        fields: impl IntoIterator<Item = FieldMetaData>,
    ) -> KindSelected<Compound> {
        let fields = fields
            .into_iter()
            .map(|field| (field.id().clone(), field))
            .collect();
        self.select(FieldKind::DependentObjectGroup(DependentObjects {
            object_type,
            fields,
        }))
    }
}

/// A kind has been chosen; continue with [`search_engine`](Self::search_engine).
#[derive(Debug)]
pub struct KindSelected<F> {
    draft: Draft,
    _family: PhantomData<F>,
}

impl<F: SearchEngineFamily> KindSelected<F> {
    pub fn search_engine(self) -> F::Entry {
        F::enter(self.draft)
    }
}

/// Polymorphic kind: register subtype data types, then continue with
/// [`search_engine`](Self::search_engine).
#[derive(Debug)]
pub struct PolymorphicSelected {
    id: FieldId,
    name: LocalizedText,
    description: Option<LocalizedText>,
    poly: PolymorphicType,
}

impl PolymorphicSelected {
    pub fn for_model_object_type(self, subtype: TypeRef) -> SubtypeSelected {
        SubtypeSelected {
            selected: self,
            subtype,
        }
    }

    pub fn search_engine(self) -> StoredChoice<General> {
        StoredChoice::new(Draft {
            id: self.id,
            name: self.name,
            description: self.description,
            kind: FieldKind::Polymorphic(self.poly),
        })
    }
}

#[derive(Debug)]
pub struct SubtypeSelected {
    selected: PolymorphicSelected,
    subtype: TypeRef,
}

impl SubtypeSelected {
    /// Uses `data_type` whenever the field refers to the selected subtype.
    pub fn uses(mut self, data_type: TypeRef) -> PolymorphicSelected {
        self.selected.poly.insert(self.subtype, data_type);
        self.selected
    }
}
