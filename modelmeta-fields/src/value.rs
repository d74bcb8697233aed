//! Runtime field values.
//!
//! A [`FieldValue`] is what callers hand to [`FieldMetaData::accepts`]
//! before storing or indexing it. Values whose kind admits many concrete
//! types (OIDs, enums, paths, summaries) carry the [`TypeRef`] of their
//! concrete type, so a descriptor can tell a `UserId` from a `GroupId`.
//!
//! [`FieldMetaData::accepts`]: crate::FieldMetaData::accepts

use chrono::{DateTime, Utc};
use modelmeta_types::{Language, LocalizedText, ModelObjectId, TypeRef};
use std::fmt;
use url::Url;
use uuid::Uuid;

/// An enum type whose values can be stored in an enum field.
pub trait EnumType: Copy + 'static {
    /// Stable name of the variant, as stored and indexed.
    fn variant_name(&self) -> &'static str;
}

/// A summary payload type.
pub trait SummaryType: 'static {
    /// Whether summaries of this type are kept per language.
    const LANGUAGE_DEPENDENT: bool;
}

/// A hierarchical path type, e.g. a folder or category path.
pub trait ModelPath: 'static {
    fn to_path_string(&self) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OidValue {
    pub oid_type: TypeRef,
    pub id: Uuid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnumValue {
    pub enum_type: TypeRef,
    pub variant: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathValue {
    pub path_type: TypeRef,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryValue {
    pub summary_type: TypeRef,
    pub entries: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RangeValue {
    pub lower: FieldValue,
    pub upper: FieldValue,
}

/// A value offered to a field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    String(String),
    Integer(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Boolean(bool),
    Date(DateTime<Utc>),
    Oid(OidValue),
    Path(PathValue),
    Url(Url),
    TypeReference(TypeRef),
    Enum(EnumValue),
    Language(Language),
    LocalizedTextSet(LocalizedText),
    Summary(SummaryValue),
    Collection(Vec<FieldValue>),
    Map(Vec<(FieldValue, FieldValue)>),
    Range(Box<RangeValue>),
}

impl FieldValue {
    /// Renders any displayable value into a string value.
    pub fn rendered(value: &impl fmt::Display) -> Self {
        Self::String(value.to_string())
    }

    pub fn oid<I: ModelObjectId>(id: I) -> Self {
        Self::Oid(OidValue {
            oid_type: TypeRef::of::<I>(),
            id: id.as_uuid(),
        })
    }

    pub fn enumeration<E: EnumType>(value: E) -> Self {
        Self::Enum(EnumValue {
            enum_type: TypeRef::of::<E>(),
            variant: value.variant_name(),
        })
    }

    pub fn path<P: ModelPath>(path: &P) -> Self {
        Self::Path(PathValue {
            path_type: TypeRef::of::<P>(),
            path: path.to_path_string(),
        })
    }

    pub fn summary<S: SummaryType>(entries: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::Summary(SummaryValue {
            summary_type: TypeRef::of::<S>(),
            entries: entries.into_iter().map(Into::into).collect(),
        })
    }

    pub fn collection(items: impl IntoIterator<Item = FieldValue>) -> Self {
        Self::Collection(items.into_iter().collect())
    }

    pub fn map(entries: impl IntoIterator<Item = (FieldValue, FieldValue)>) -> Self {
        Self::Map(entries.into_iter().collect())
    }

    pub fn range(lower: impl Into<FieldValue>, upper: impl Into<FieldValue>) -> Self {
        Self::Range(Box::new(RangeValue {
            lower: lower.into(),
            upper: upper.into(),
        }))
    }

    /// Returns the concrete runtime type of this value.
    #[must_use]
    pub fn type_ref(&self) -> TypeRef {
        match self {
            Self::String(_) => TypeRef::of::<String>(),
            Self::Integer(_) => TypeRef::of::<i32>(),
            Self::Long(_) => TypeRef::of::<i64>(),
            Self::Float(_) => TypeRef::of::<f32>(),
            Self::Double(_) => TypeRef::of::<f64>(),
            Self::Boolean(_) => TypeRef::of::<bool>(),
            Self::Date(_) => TypeRef::of::<DateTime<Utc>>(),
            Self::Oid(v) => v.oid_type,
            Self::Path(v) => v.path_type,
            Self::Url(_) => TypeRef::of::<Url>(),
            Self::TypeReference(_) => TypeRef::of::<TypeRef>(),
            Self::Enum(v) => v.enum_type,
            Self::Language(_) => TypeRef::of::<Language>(),
            Self::LocalizedTextSet(_) => TypeRef::of::<LocalizedText>(),
            Self::Summary(v) => v.summary_type,
            Self::Collection(_) => TypeRef::of::<Vec<FieldValue>>(),
            Self::Map(_) => TypeRef::of::<Vec<(FieldValue, FieldValue)>>(),
            Self::Range(_) => TypeRef::of::<RangeValue>(),
        }
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<i32> for FieldValue {
    fn from(v: i32) -> Self {
        Self::Integer(v)
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        Self::Long(v)
    }
}

impl From<f32> for FieldValue {
    fn from(v: f32) -> Self {
        Self::Float(v)
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        Self::Double(v)
    }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(v: DateTime<Utc>) -> Self {
        Self::Date(v)
    }
}

impl From<Url> for FieldValue {
    fn from(v: Url) -> Self {
        Self::Url(v)
    }
}

impl From<TypeRef> for FieldValue {
    fn from(v: TypeRef) -> Self {
        Self::TypeReference(v)
    }
}

impl From<Language> for FieldValue {
    fn from(v: Language) -> Self {
        Self::Language(v)
    }
}

impl From<LocalizedText> for FieldValue {
    fn from(v: LocalizedText) -> Self {
        Self::LocalizedTextSet(v)
    }
}
