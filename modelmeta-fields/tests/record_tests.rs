mod common;

use common::*;
use modelmeta_fields::{FieldError, FieldRecord, IndexingFamily, SearchIndexingConfig};
use modelmeta_types::{FieldId, LocalizedText, TypeRef};
use pretty_assertions::assert_eq;
use serde_json::json;

fn title_record() -> FieldRecord {
    field("crm.title")
        .for_string_field()
        .search_engine()
        .stored()
        .indexed()
        .tokenized()
        .with_boosting(2.0)
        .to_record()
}

// ── Serialization boundary ───────────────────────────────────────

#[test]
fn record_serializes_all_attributes() {
    let value = serde_json::to_value(title_record()).unwrap();
    assert_eq!(
        value,
        json!({
            "id": "crm.title",
            "name": { "en": "crm.title" },
            "indexing": { "stored": true, "boost": 2.0, "indexed": true, "tokenized": true },
            "kind": "string",
            "data_type": "alloc::string::String",
        })
    );
}

#[test]
fn record_includes_description_when_present() {
    let record = modelmeta_fields::FieldMetaData::for_id(FieldId::from_static("crm.note"))
        .with_name(LocalizedText::en("Note"))
        .with_description(LocalizedText::en("Free text"))
        .for_string_field()
        .search_engine()
        .not_stored()
        .not_indexed()
        .to_record();
    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(value["description"], json!({ "en": "Free text" }));
}

#[test]
fn record_json_roundtrip() {
    let record = title_record();
    let json = serde_json::to_string(&record).unwrap();
    let parsed: FieldRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, record);
}

#[test]
fn record_indexing_defaults_when_omitted() {
    let parsed: FieldRecord = serde_json::from_value(json!({
        "id": "crm.code",
        "name": { "en": "Code" },
        "indexing": { "stored": false },
        "kind": "string",
        "data_type": "alloc::string::String",
    }))
    .unwrap();
    assert_eq!(parsed.indexing, SearchIndexingConfig::new(false));
}

#[test]
fn dependent_object_record_nests_children() {
    struct Address;
    let street = field("crm.address.street")
        .for_string_field()
        .search_engine()
        .stored()
        .indexed()
        .tokenized()
        .with_default_boosting();
    let record = field("crm.address")
        .for_dependant_object(TypeRef::of::<Address>(), [street])
        .search_engine()
        .stored()
        .to_record();

    assert_eq!(record.kind, "dependent_object_group");
    assert_eq!(record.children.len(), 1);
    assert_eq!(record.children[0].id, FieldId::from_static("crm.address.street"));
    assert!(record.check_indexing().is_ok());
}

// ── check_indexing ───────────────────────────────────────────────

#[test]
fn built_records_always_pass_check() {
    let records = [
        title_record(),
        field("t.oid")
            .for_oid_field(TypeRef::of::<UserId>())
            .search_engine()
            .not_indexed()
            .to_record(),
        field("t.bool")
            .for_boolean_field()
            .search_engine()
            .not_stored()
            .indexed()
            .with_boosting(3.0)
            .to_record(),
        field("t.type")
            .for_type_reference_field()
            .search_engine()
            .stored()
            .indexed()
            .with_default_boosting()
            .to_record(),
    ];
    for record in records {
        assert!(record.check_indexing().is_ok(), "{} failed", record.id);
    }
}

#[test]
fn check_rejects_tokenized_boolean() {
    let mut record = field("t.bool")
        .for_boolean_field()
        .search_engine()
        .stored()
        .indexed()
        .with_default_boosting()
        .to_record();
    record.indexing.tokenized = true;

    let err = record.check_indexing().unwrap_err();
    assert!(matches!(err, FieldError::InvalidRecord(_)));
}

#[test]
fn check_rejects_unstored_oid() {
    let mut record = field("t.oid")
        .for_oid_field(TypeRef::of::<UserId>())
        .search_engine()
        .not_indexed()
        .to_record();
    record.indexing.stored = false;
    assert!(record.check_indexing().is_err());
}

#[test]
fn check_rejects_untokenized_indexed_summary() {
    let mut record = field("t.type")
        .for_type_reference_field()
        .search_engine()
        .stored()
        .indexed()
        .with_default_boosting()
        .to_record();
    record.indexing.tokenized = false;
    assert!(record.check_indexing().is_err());
}

#[test]
fn check_rejects_boost_on_unindexed_field() {
    let mut record = field("t.code")
        .for_string_field()
        .search_engine()
        .stored()
        .not_indexed()
        .to_record();
    record.indexing.boost = 4.0;
    assert!(record.check_indexing().is_err());
}

#[test]
fn check_rejects_children_on_leaf() {
    let mut record = title_record();
    record.children.push(title_record());
    assert!(record.check_indexing().is_err());
}

#[test]
fn check_rejects_unknown_kind() {
    let mut record = title_record();
    record.kind = "blob".to_string();
    let err = record.indexing_family().unwrap_err();
    assert!(err.to_string().contains("unknown kind 'blob'"));
}

#[test]
fn indexing_family_from_record() {
    assert_eq!(title_record().indexing_family().unwrap(), IndexingFamily::General);
}
