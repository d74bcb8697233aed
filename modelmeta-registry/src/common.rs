//! Fields injected into every model object type.
//!
//! The ids are fixed and shared across all types so that search and
//! persistence code can address e.g. the create date of any object without
//! knowing its type.

use crate::descriptor::Versioning;
use modelmeta_fields::FieldMetaData;
use modelmeta_types::{FieldId, LocalizedText, TypeRef};

pub const DOCUMENT_ID: FieldId = FieldId::from_static("modelobject.documentId");
pub const TYPE_NAME: FieldId = FieldId::from_static("modelobject.typeName");
pub const TYPE_CODE: FieldId = FieldId::from_static("modelobject.typeCode");
pub const FACET_TYPE_CODES: FieldId = FieldId::from_static("modelobject.facetTypeCodes");
pub const OID: FieldId = FieldId::from_static("modelobject.oid");
pub const ID: FieldId = FieldId::from_static("modelobject.id");
pub const ENTITY_VERSION: FieldId = FieldId::from_static("modelobject.entityVersion");
pub const CREATE_DATE: FieldId = FieldId::from_static("modelobject.createDate");
pub const CREATOR: FieldId = FieldId::from_static("modelobject.creator");
pub const LAST_UPDATE_DATE: FieldId = FieldId::from_static("modelobject.lastUpdateDate");
pub const LAST_UPDATOR: FieldId = FieldId::from_static("modelobject.lastUpdator");

/// Injected only into versionable types.
pub const VERSION_INDEPENDENT_OID: FieldId =
    FieldId::from_static("modelobject.versionIndependentOid");
pub const VERSION_OID: FieldId = FieldId::from_static("modelobject.versionOid");

/// Number of fields returned by [`common_fields`].
pub const COMMON_FIELD_COUNT: usize = 11;

/// Number of fields returned by [`version_fields`].
pub const VERSION_FIELD_COUNT: usize = 2;

/// The eleven fields every model object type carries. `oid_type` is the
/// type's primary identifier type.
#[must_use]
pub fn common_fields(oid_type: TypeRef) -> Vec<FieldMetaData> {
    vec![
        FieldMetaData::for_id(DOCUMENT_ID)
            .with_name(LocalizedText::en("Document id"))
            .with_no_description()
            .for_string_field()
            .search_engine()
            .stored()
            .indexed()
            .not_tokenized()
            .with_default_boosting(),
        FieldMetaData::for_id(TYPE_NAME)
            .with_name(LocalizedText::en("Type name"))
            .with_no_description()
            .for_type_reference_field()
            .search_engine()
            .stored()
            .not_indexed(),
        FieldMetaData::for_id(TYPE_CODE)
            .with_name(LocalizedText::en("Type code"))
            .with_no_description()
            .for_long_field()
            .search_engine()
            .stored()
            .indexed()
            .with_default_boosting(),
        FieldMetaData::for_id(FACET_TYPE_CODES)
            .with_name(LocalizedText::en("Facet type codes"))
            .with_description(LocalizedText::en(
                "Type codes of every facet the object implements",
            ))
            .for_collection_field(TypeRef::of::<i64>())
            .search_engine()
            .stored()
            .indexed()
            .not_tokenized()
            .with_default_boosting(),
        FieldMetaData::for_id(OID)
            .with_name(LocalizedText::en("OID"))
            .with_no_description()
            .for_oid_field(oid_type)
            .search_engine()
            .not_indexed(),
        FieldMetaData::for_id(ID)
            .with_name(LocalizedText::en("Id"))
            .with_no_description()
            .for_long_field()
            .search_engine()
            .stored()
            .indexed()
            .with_default_boosting(),
        FieldMetaData::for_id(ENTITY_VERSION)
            .with_name(LocalizedText::en("Entity version"))
            .with_description(LocalizedText::en("Optimistic locking counter"))
            .for_long_field()
            .search_engine()
            .stored()
            .not_indexed(),
        FieldMetaData::for_id(CREATE_DATE)
            .with_name(LocalizedText::en("Create date"))
            .with_no_description()
            .for_date_field()
            .search_engine()
            .stored()
            .indexed()
            .with_default_boosting(),
        // OID kinds are always stored, so principal references are indexed
        // in their rendered form.
        FieldMetaData::for_id(CREATOR)
            .with_name(LocalizedText::en("Creator"))
            .with_no_description()
            .for_string_field()
            .search_engine()
            .not_stored()
            .indexed()
            .not_tokenized()
            .with_default_boosting(),
        FieldMetaData::for_id(LAST_UPDATE_DATE)
            .with_name(LocalizedText::en("Last update date"))
            .with_no_description()
            .for_date_field()
            .search_engine()
            .stored()
            .indexed()
            .with_default_boosting(),
        FieldMetaData::for_id(LAST_UPDATOR)
            .with_name(LocalizedText::en("Last updator"))
            .with_no_description()
            .for_string_field()
            .search_engine()
            .not_stored()
            .indexed()
            .not_tokenized()
            .with_default_boosting(),
    ]
}

/// The two identity fields of a versionable type.
#[must_use]
pub fn version_fields(versioning: Versioning) -> Vec<FieldMetaData> {
    vec![
        FieldMetaData::for_id(VERSION_INDEPENDENT_OID)
            .with_name(LocalizedText::en("Version independent OID"))
            .with_no_description()
            .for_oid_field(versioning.version_independent_oid)
            .search_engine()
            .not_indexed(),
        FieldMetaData::for_id(VERSION_OID)
            .with_name(LocalizedText::en("Version OID"))
            .with_no_description()
            .for_oid_field(versioning.version_oid)
            .search_engine()
            .not_indexed(),
    ]
}

/// Whether `id` is one of the injected field ids.
#[must_use]
pub fn is_common_field(id: &FieldId) -> bool {
    [
        DOCUMENT_ID,
        TYPE_NAME,
        TYPE_CODE,
        FACET_TYPE_CODES,
        OID,
        ID,
        ENTITY_VERSION,
        CREATE_DATE,
        CREATOR,
        LAST_UPDATE_DATE,
        LAST_UPDATOR,
        VERSION_INDEPENDENT_OID,
        VERSION_OID,
    ]
    .iter()
    .any(|common| common == id)
}
