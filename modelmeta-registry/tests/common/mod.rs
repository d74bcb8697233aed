//! Shared fixtures: a small `crm` domain with facets, plus broken
//! descriptor sets for the failure paths.

#![allow(dead_code)]

use modelmeta_fields::FieldMetaData;
use modelmeta_registry::{
    DescriptorTable, MetadataDescriptor, MetadataRegistry, TypeDescriptor, common,
};
use modelmeta_types::{FieldId, LocalizedText, TypeRef};

modelmeta_types::model_object_id! {
    pub struct ContactId;
}

modelmeta_types::model_object_id! {
    pub struct CompanyId;
}

modelmeta_types::model_object_id! {
    pub struct DocumentId;
}

modelmeta_types::model_object_id! {
    pub struct DocumentVersionId;
}

modelmeta_types::model_object_id! {
    pub struct FacetId;
}

// ── Model types ──────────────────────────────────────────────────

pub struct Contact;
pub struct Company;
pub struct Document;
pub struct Auditable;
pub struct Taggable;

/// Capability declared by `Contact` without metadata of its own.
pub struct Searchable;

pub const CONTACT_CODE: i64 = 100;
pub const COMPANY_CODE: i64 = 101;
pub const DOCUMENT_CODE: i64 = 102;
pub const AUDITABLE_CODE: i64 = 900;
pub const TAGGABLE_CODE: i64 = 901;

pub const CONTACT_NAME: FieldId = FieldId::from_static("crm.contact.name");
pub const CONTACT_EMAIL: FieldId = FieldId::from_static("crm.contact.email");
pub const COMPANY_NAME: FieldId = FieldId::from_static("crm.company.name");
pub const DOCUMENT_TITLE: FieldId = FieldId::from_static("crm.document.title");
pub const REVIEWED_BY: FieldId = FieldId::from_static("audit.reviewedBy");
pub const TAG_LABELS: FieldId = FieldId::from_static("tags.labels");

fn text_field(id: FieldId) -> FieldMetaData {
    let name = LocalizedText::en(id.as_str().to_string());
    FieldMetaData::for_id(id)
        .with_name(name)
        .with_no_description()
        .for_string_field()
        .search_engine()
        .stored()
        .indexed()
        .tokenized()
        .with_default_boosting()
}

// ── Descriptors ──────────────────────────────────────────────────

pub struct ContactMetadata;

impl MetadataDescriptor for ContactMetadata {
    type ModelObject = Contact;
    const NAMESPACE: &'static str = "crm";

    fn describe() -> TypeDescriptor {
        TypeDescriptor::new(CONTACT_CODE, TypeRef::of::<ContactId>())
            .with_facet(TypeRef::of::<Taggable>())
            .with_facet(TypeRef::of::<Auditable>())
            .with_capability(TypeRef::of::<Searchable>())
            .with_field(text_field(CONTACT_NAME))
            .with_field(
                FieldMetaData::for_id(CONTACT_EMAIL)
                    .with_name(LocalizedText::en("E-mail"))
                    .with_description(LocalizedText::en("Primary e-mail address"))
                    .for_string_field()
                    .search_engine()
                    .stored()
                    .indexed()
                    .not_tokenized()
                    .with_boosting(2.0),
            )
    }
}

pub struct CompanyMetadata;

impl MetadataDescriptor for CompanyMetadata {
    type ModelObject = Company;
    const NAMESPACE: &'static str = "crm";

    fn describe() -> TypeDescriptor {
        TypeDescriptor::new(COMPANY_CODE, TypeRef::of::<CompanyId>())
            .with_facet(TypeRef::of::<Taggable>())
            .with_field(text_field(COMPANY_NAME))
    }
}

pub struct DocumentMetadata;

impl MetadataDescriptor for DocumentMetadata {
    type ModelObject = Document;
    const NAMESPACE: &'static str = "crm";

    fn describe() -> TypeDescriptor {
        TypeDescriptor::new(DOCUMENT_CODE, TypeRef::of::<DocumentId>())
            .versionable(
                TypeRef::of::<DocumentId>(),
                TypeRef::of::<DocumentVersionId>(),
            )
            .with_field(text_field(DOCUMENT_TITLE))
    }
}

pub struct AuditableMetadata;

impl MetadataDescriptor for AuditableMetadata {
    type ModelObject = Auditable;
    const NAMESPACE: &'static str = "facets";

    fn describe() -> TypeDescriptor {
        TypeDescriptor::new(AUDITABLE_CODE, TypeRef::of::<FacetId>()).with_field(
            FieldMetaData::for_id(REVIEWED_BY)
                .with_name(LocalizedText::en("Reviewed by"))
                .with_no_description()
                .for_oid_field(TypeRef::of::<ContactId>())
                .search_engine()
                .indexed()
                .with_default_boosting(),
        )
    }
}

/// Taggable objects are auditable too.
pub struct TaggableMetadata;

impl MetadataDescriptor for TaggableMetadata {
    type ModelObject = Taggable;
    const NAMESPACE: &'static str = "facets";

    fn describe() -> TypeDescriptor {
        TypeDescriptor::new(TAGGABLE_CODE, TypeRef::of::<FacetId>())
            .with_facet(TypeRef::of::<Auditable>())
            .with_field(
                FieldMetaData::for_id(TAG_LABELS)
                    .with_name(LocalizedText::en("Labels"))
                    .with_no_description()
                    .for_collection_field(TypeRef::of::<String>())
                    .search_engine()
                    .stored()
                    .indexed()
                    .tokenized()
                    .with_default_boosting(),
            )
    }
}

// ── Broken descriptors ───────────────────────────────────────────

/// Second descriptor for `Contact`.
pub struct RivalContactMetadata;

impl MetadataDescriptor for RivalContactMetadata {
    type ModelObject = Contact;
    const NAMESPACE: &'static str = "crm";

    fn describe() -> TypeDescriptor {
        TypeDescriptor::new(CONTACT_CODE, TypeRef::of::<ContactId>())
    }
}

pub struct Invoice;
pub struct Receipt;

pub struct InvoiceMetadata;

impl MetadataDescriptor for InvoiceMetadata {
    type ModelObject = Invoice;
    const NAMESPACE: &'static str = "billing";

    fn describe() -> TypeDescriptor {
        TypeDescriptor::new(500, TypeRef::of::<FacetId>())
    }
}

/// Reuses the invoice type code.
pub struct ReceiptMetadata;

impl MetadataDescriptor for ReceiptMetadata {
    type ModelObject = Receipt;
    const NAMESPACE: &'static str = "billing";

    fn describe() -> TypeDescriptor {
        TypeDescriptor::new(500, TypeRef::of::<FacetId>())
    }
}

pub struct Left;
pub struct Right;

pub struct LeftMetadata;

impl MetadataDescriptor for LeftMetadata {
    type ModelObject = Left;
    const NAMESPACE: &'static str = "cyclic";

    fn describe() -> TypeDescriptor {
        TypeDescriptor::new(700, TypeRef::of::<FacetId>()).with_facet(TypeRef::of::<Right>())
    }
}

pub struct RightMetadata;

impl MetadataDescriptor for RightMetadata {
    type ModelObject = Right;
    const NAMESPACE: &'static str = "cyclic";

    fn describe() -> TypeDescriptor {
        TypeDescriptor::new(701, TypeRef::of::<FacetId>()).with_facet(TypeRef::of::<Left>())
    }
}

pub struct Shadow;

/// Redefines a common field.
pub struct ShadowMetadata;

impl MetadataDescriptor for ShadowMetadata {
    type ModelObject = Shadow;
    const NAMESPACE: &'static str = "broken";

    fn describe() -> TypeDescriptor {
        TypeDescriptor::new(800, TypeRef::of::<FacetId>()).with_field(text_field(common::CREATOR))
    }
}

/// Model type referenced as a facet but never registered.
pub struct Unregistered;

pub struct OrphanFacetHolder;

pub struct OrphanFacetHolderMetadata;

impl MetadataDescriptor for OrphanFacetHolderMetadata {
    type ModelObject = OrphanFacetHolder;
    const NAMESPACE: &'static str = "broken";

    fn describe() -> TypeDescriptor {
        TypeDescriptor::new(801, TypeRef::of::<FacetId>())
            .with_facet(TypeRef::of::<Unregistered>())
    }
}

// ── Helpers ──────────────────────────────────────────────────────

/// The `crm` and `facets` namespaces.
pub fn crm_table() -> DescriptorTable {
    let mut table = DescriptorTable::new();
    table.register::<ContactMetadata>().unwrap();
    table.register::<CompanyMetadata>().unwrap();
    table.register::<DocumentMetadata>().unwrap();
    table.register::<AuditableMetadata>().unwrap();
    table.register::<TaggableMetadata>().unwrap();
    table
}

pub fn crm_registry() -> MetadataRegistry {
    init_tracing();
    MetadataRegistry::new(crm_table())
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
