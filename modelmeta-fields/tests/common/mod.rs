//! Shared fixtures for field descriptor tests.

#![allow(dead_code)]

use modelmeta_fields::{EnumType, FieldMetaData, ModelPath, SummaryType, builder::KindStage};
use modelmeta_types::{FieldId, LocalizedText};

modelmeta_types::model_object_id! {
    pub struct UserId;
}

modelmeta_types::model_object_id! {
    pub struct GroupId;
}

/// Model object types referenced by polymorphic fields.
pub struct User;
pub struct Group;
pub struct Principal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    Low,
    High,
}

impl EnumType for Priority {
    fn variant_name(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Open,
}

impl EnumType for Status {
    fn variant_name(&self) -> &'static str {
        "open"
    }
}

pub struct Headline;

impl SummaryType for Headline {
    const LANGUAGE_DEPENDENT: bool = true;
}

pub struct TagCloud;

impl SummaryType for TagCloud {
    const LANGUAGE_DEPENDENT: bool = false;
}

pub struct FolderPath(pub Vec<&'static str>);

impl ModelPath for FolderPath {
    fn to_path_string(&self) -> String {
        format!("/{}", self.0.join("/"))
    }
}

pub struct CategoryPath(pub &'static str);

impl ModelPath for CategoryPath {
    fn to_path_string(&self) -> String {
        self.0.to_string()
    }
}

/// Builder positioned at the kind-selection stage.
pub fn field(id: &'static str) -> KindStage {
    FieldMetaData::for_id(FieldId::from_static(id))
        .with_name(LocalizedText::en(id))
        .with_no_description()
}
