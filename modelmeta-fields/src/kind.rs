//! The closed catalogue of field kinds.

use crate::field::FieldMetaData;
use crate::value::{FieldValue, SummaryType};
use chrono::{DateTime, Utc};
use modelmeta_types::{FieldId, Language, LocalizedText, TypeRef};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use url::Url;

/// Which indexing transitions the builder offers for a kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexingFamily {
    /// Always stored; indexing is optional and never tokenized.
    AlwaysStored,
    /// Stored, indexed and tokenized are all free choices.
    General,
    /// Tokenization is never applied.
    NotTokenizable,
    /// Tokenization is applied whenever the field is indexed.
    AlwaysTokenized,
    /// Compound fields are never indexed.
    Compound,
}

impl IndexingFamily {
    /// Returns true if `config` could have been produced by the builder for
    /// a kind of this family.
    #[must_use]
    pub fn permits(self, config: &crate::SearchIndexingConfig) -> bool {
        let boost_ok = config.indexed || !config.is_boosted();
        let tokenized_ok = match self {
            Self::General => config.indexed || !config.tokenized,
            Self::AlwaysTokenized => config.tokenized == config.indexed,
            Self::AlwaysStored | Self::NotTokenizable | Self::Compound => !config.tokenized,
        };
        let stored_ok = !matches!(self, Self::AlwaysStored) || config.stored;
        let indexed_ok = !matches!(self, Self::Compound) || !config.indexed;
        boost_ok && tokenized_ok && stored_ok && indexed_ok
    }
}

/// A summary type together with its language-dependence flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SummaryTypeRef {
    pub summary_type: TypeRef,
    pub language_dependent: bool,
}

impl SummaryTypeRef {
    #[must_use]
    pub fn of<S: SummaryType>() -> Self {
        Self {
            summary_type: TypeRef::of::<S>(),
            language_dependent: S::LANGUAGE_DEPENDENT,
        }
    }
}

/// Base type of a polymorphic field and the data type used for each
/// concrete model object subtype.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolymorphicType {
    pub base: TypeRef,
    subtypes: Vec<(TypeRef, TypeRef)>,
}

impl PolymorphicType {
    #[must_use]
    pub fn new(base: TypeRef) -> Self {
        Self {
            base,
            subtypes: Vec::new(),
        }
    }

    /// Registers the data type used for `subtype`, replacing an earlier entry.
    pub(crate) fn insert(&mut self, subtype: TypeRef, data_type: TypeRef) {
        match self.subtypes.iter_mut().find(|(s, _)| *s == subtype) {
            Some(entry) => entry.1 = data_type,
            None => self.subtypes.push((subtype, data_type)),
        }
    }

    /// Data type used when `subtype` is in play, or the base type.
    #[must_use]
    pub fn data_type_for(&self, subtype: TypeRef) -> TypeRef {
        self.subtypes
            .iter()
            .find(|(s, _)| *s == subtype)
            .map_or(self.base, |(_, d)| *d)
    }

    /// Registered `(subtype, data type)` pairs in registration order.
    pub fn subtypes(&self) -> impl Iterator<Item = (TypeRef, TypeRef)> + '_ {
        self.subtypes.iter().copied()
    }

    fn admits(&self, value_type: TypeRef) -> bool {
        value_type == self.base || self.subtypes.iter().any(|(_, d)| *d == value_type)
    }
}

/// The object type and child fields of a dependent object group.
#[derive(Debug, Clone, PartialEq)]
pub struct DependentObjects {
    pub object_type: TypeRef,
    pub fields: BTreeMap<FieldId, FieldMetaData>,
}

/// Kind of a field, with the payload each kind needs.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    String,
    Integer,
    Long,
    Float,
    Double,
    Boolean,
    Date,
    Oid { oid_type: TypeRef },
    Path { path_type: TypeRef },
    Url,
    /// Reference to a runtime type by name.
    TypeReference,
    Enum { enum_type: TypeRef },
    Language,
    LocalizedTextSet,
    Summary(SummaryTypeRef),
    Collection { component: TypeRef },
    Map { key: TypeRef, value: TypeRef },
    Range { bound: TypeRef },
    Polymorphic(PolymorphicType),
    DependentObjectGroup(DependentObjects),
}

/// Payload-free discriminant of a [`FieldKind`]. Owns the stable name and
/// the indexing family of each kind, so records that only carry the name
/// resolve to the same family as the live kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KindTag {
    String,
    Integer,
    Long,
    Float,
    Double,
    Boolean,
    Date,
    Oid,
    Path,
    Url,
    TypeReference,
    Enum,
    Language,
    LocalizedTextSet,
    Summary,
    Collection,
    Map,
    Range,
    Polymorphic,
    DependentObjectGroup,
}

impl KindTag {
    pub const ALL: [Self; 20] = [
        Self::String,
        Self::Integer,
        Self::Long,
        Self::Float,
        Self::Double,
        Self::Boolean,
        Self::Date,
        Self::Oid,
        Self::Path,
        Self::Url,
        Self::TypeReference,
        Self::Enum,
        Self::Language,
        Self::LocalizedTextSet,
        Self::Summary,
        Self::Collection,
        Self::Map,
        Self::Range,
        Self::Polymorphic,
        Self::DependentObjectGroup,
    ];

    /// Stable lowercase name of the kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
            Self::Boolean => "boolean",
            Self::Date => "date",
            Self::Oid => "oid",
            Self::Path => "path",
            Self::Url => "url",
            Self::TypeReference => "type_reference",
            Self::Enum => "enum",
            Self::Language => "language",
            Self::LocalizedTextSet => "localized_text_set",
            Self::Summary => "summary",
            Self::Collection => "collection",
            Self::Map => "map",
            Self::Range => "range",
            Self::Polymorphic => "polymorphic",
            Self::DependentObjectGroup => "dependent_object_group",
        }
    }

    #[must_use]
    pub const fn indexing_family(self) -> IndexingFamily {
        match self {
            Self::Oid => IndexingFamily::AlwaysStored,
            Self::String | Self::Collection | Self::Map | Self::Polymorphic => {
                IndexingFamily::General
            }
            Self::Integer
            | Self::Long
            | Self::Float
            | Self::Double
            | Self::Boolean
            | Self::Date
            | Self::Enum
            | Self::Language
            | Self::Path
            | Self::Url
            | Self::Range => IndexingFamily::NotTokenizable,
            Self::TypeReference | Self::Summary | Self::LocalizedTextSet => {
                IndexingFamily::AlwaysTokenized
            }
            Self::DependentObjectGroup => IndexingFamily::Compound,
        }
    }

    /// Looks a kind up by its [`name`](Self::name).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tag| tag.name() == name)
    }
}

impl FieldKind {
    #[must_use]
    pub const fn tag(&self) -> KindTag {
        match self {
            Self::String => KindTag::String,
            Self::Integer => KindTag::Integer,
            Self::Long => KindTag::Long,
            Self::Float => KindTag::Float,
            Self::Double => KindTag::Double,
            Self::Boolean => KindTag::Boolean,
            Self::Date => KindTag::Date,
            Self::Oid { .. } => KindTag::Oid,
            Self::Path { .. } => KindTag::Path,
            Self::Url => KindTag::Url,
            Self::TypeReference => KindTag::TypeReference,
            Self::Enum { .. } => KindTag::Enum,
            Self::Language => KindTag::Language,
            Self::LocalizedTextSet => KindTag::LocalizedTextSet,
            Self::Summary(_) => KindTag::Summary,
            Self::Collection { .. } => KindTag::Collection,
            Self::Map { .. } => KindTag::Map,
            Self::Range { .. } => KindTag::Range,
            Self::Polymorphic(_) => KindTag::Polymorphic,
            Self::DependentObjectGroup(_) => KindTag::DependentObjectGroup,
        }
    }

    /// Stable lowercase name of the kind.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.tag().name()
    }

    #[must_use]
    pub const fn indexing_family(&self) -> IndexingFamily {
        self.tag().indexing_family()
    }

    /// The data type a descriptor of this kind records.
    #[must_use]
    pub fn data_type(&self) -> TypeRef {
        match self {
            Self::String => TypeRef::of::<String>(),
            Self::Integer => TypeRef::of::<i32>(),
            Self::Long => TypeRef::of::<i64>(),
            Self::Float => TypeRef::of::<f32>(),
            Self::Double => TypeRef::of::<f64>(),
            Self::Boolean => TypeRef::of::<bool>(),
            Self::Date => TypeRef::of::<DateTime<Utc>>(),
            Self::Oid { oid_type } => *oid_type,
            Self::Path { path_type } => *path_type,
            Self::Url => TypeRef::of::<Url>(),
            Self::TypeReference => TypeRef::of::<TypeRef>(),
            Self::Enum { enum_type } => *enum_type,
            Self::Language => TypeRef::of::<Language>(),
            Self::LocalizedTextSet => TypeRef::of::<LocalizedText>(),
            Self::Summary(summary) => summary.summary_type,
            Self::Collection { component } => *component,
            Self::Map { value, .. } => *value,
            Self::Range { bound } => *bound,
            Self::Polymorphic(poly) => poly.base,
            Self::DependentObjectGroup(group) => group.object_type,
        }
    }

    #[must_use]
    pub const fn is_compound(&self) -> bool {
        matches!(self, Self::DependentObjectGroup(_))
    }

    /// Localized text sets always are; summaries are when their payload type says so.
    #[must_use]
    pub const fn is_language_dependent(&self) -> bool {
        match self {
            Self::LocalizedTextSet => true,
            Self::Summary(summary) => summary.language_dependent,
            _ => false,
        }
    }

    #[must_use]
    pub const fn has_multiple_dimensions(&self) -> bool {
        matches!(self, Self::Map { .. }) || self.is_language_dependent()
    }

    #[must_use]
    pub const fn has_multiple_values(&self) -> bool {
        matches!(self, Self::Collection { .. } | Self::Summary(_))
    }

    /// Leaf acceptance check. Returns `None` for compound kinds, which have
    /// no value of their own.
    pub(crate) fn accepts_leaf(&self, value: &FieldValue) -> Option<bool> {
        let accepted = match (self, value) {
            // Anything with a canonical text form can be stored as a string.
            (
                Self::String,
                FieldValue::String(_)
                | FieldValue::Oid(_)
                | FieldValue::Path(_)
                | FieldValue::Enum(_)
                | FieldValue::Url(_)
                | FieldValue::Language(_)
                | FieldValue::TypeReference(_),
            )
            | (Self::Integer, FieldValue::Integer(_))
            | (Self::Long, FieldValue::Long(_))
            | (Self::Float, FieldValue::Float(_))
            | (Self::Double, FieldValue::Double(_))
            | (Self::Boolean, FieldValue::Boolean(_))
            | (Self::Date, FieldValue::Date(_))
            | (Self::Url, FieldValue::Url(_))
            | (Self::TypeReference, FieldValue::TypeReference(_))
            | (Self::Language, FieldValue::Language(_))
            | (Self::LocalizedTextSet, FieldValue::LocalizedTextSet(_)) => true,
            (Self::Oid { oid_type }, FieldValue::Oid(v)) => v.oid_type == *oid_type,
            (Self::Path { path_type }, FieldValue::Path(v)) => v.path_type == *path_type,
            (Self::Enum { enum_type }, FieldValue::Enum(v)) => v.enum_type == *enum_type,
            (Self::Summary(summary), FieldValue::Summary(v)) => {
                v.summary_type == summary.summary_type
            }
            (Self::Collection { component }, FieldValue::Collection(items)) => {
                items.iter().all(|item| item.type_ref() == *component)
            }
            (Self::Map { key, value }, FieldValue::Map(entries)) => entries
                .iter()
                .all(|(k, v)| k.type_ref() == *key && v.type_ref() == *value),
            (Self::Range { bound }, FieldValue::Range(range)) => {
                range.lower.type_ref() == *bound && range.upper.type_ref() == *bound
            }
            (Self::Polymorphic(poly), value) => poly.admits(value.type_ref()),
            (Self::DependentObjectGroup(_), _) => return None,
            _ => false,
        };
        Some(accepted)
    }
}
