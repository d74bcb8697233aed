//! Field identifier types.
//!
//! A field id is conventionally `<namespace>.<segment>[.<segment>...]`, e.g.
//! `modelobject.createDate` or `crm.contact.email`. The search-indexing side
//! addresses the same field through an [`IndexableFieldId`]; the two convert
//! into each other without loss.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

const SEPARATOR: char = '.';

fn is_segment_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

fn is_well_formed(id: &str) -> bool {
    let mut segments = 0usize;
    for segment in id.split(SEPARATOR) {
        if segment.is_empty() || !segment.chars().all(is_segment_char) {
            return false;
        }
        segments += 1;
    }
    segments >= 2
}

/// Identifier of a field within a model object type's field catalogue.
///
/// Equality and hashing are by value. Well-known ids can be declared as
/// constants with [`FieldId::from_static`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldId(Cow<'static, str>);

impl FieldId {
    /// Creates a field id from a static string without validation.
    #[must_use]
    pub const fn from_static(id: &'static str) -> Self {
        Self(Cow::Borrowed(id))
    }

    /// Creates a field id without validation.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(Cow::Owned(id.into()))
    }

    /// Parses a field id, requiring the `<namespace>.<segment>` shape.
    pub fn parse(s: &str) -> Result<Self> {
        if is_well_formed(s) {
            Ok(Self::new(s))
        } else {
            Err(Error::InvalidFieldId(s.to_string()))
        }
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the id has a namespace and at least one further segment.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        is_well_formed(&self.0)
    }

    /// Returns the leading namespace segment.
    #[must_use]
    pub fn namespace(&self) -> &str {
        self.0.split(SEPARATOR).next().unwrap_or_default()
    }

    /// Iterates over all segments, namespace included.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(SEPARATOR)
    }

    /// Returns a new id with `segment` appended.
    #[must_use]
    pub fn child(&self, segment: &str) -> Self {
        Self::new(format!("{}{SEPARATOR}{segment}", self.0))
    }

    /// Converts to the identifier used by the search-indexing boundary.
    #[must_use]
    pub fn to_indexable(&self) -> IndexableFieldId {
        IndexableFieldId(self.0.clone())
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for FieldId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl AsRef<str> for FieldId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<IndexableFieldId> for FieldId {
    fn from(id: IndexableFieldId) -> Self {
        Self(id.0)
    }
}

/// Identifier under which the search engine indexes a leaf field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IndexableFieldId(Cow<'static, str>);

impl IndexableFieldId {
    /// Creates an indexable id without validation.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(Cow::Owned(id.into()))
    }

    /// Parses an indexable id, requiring the same shape as a [`FieldId`].
    pub fn parse(s: &str) -> Result<Self> {
        if is_well_formed(s) {
            Ok(Self::new(s))
        } else {
            Err(Error::InvalidFieldId(s.to_string()))
        }
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts back to the field id this index entry was derived from.
    #[must_use]
    pub fn to_field_id(&self) -> FieldId {
        FieldId(self.0.clone())
    }
}

impl fmt::Display for IndexableFieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for IndexableFieldId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<FieldId> for IndexableFieldId {
    fn from(id: FieldId) -> Self {
        Self(id.0)
    }
}

impl From<&FieldId> for IndexableFieldId {
    fn from(id: &FieldId) -> Self {
        id.to_indexable()
    }
}
