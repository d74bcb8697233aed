use modelmeta_types::{FieldId, IndexableFieldId, ModelObjectId, TypeRef};
use std::collections::HashSet;
use std::str::FromStr;

modelmeta_types::model_object_id! {
    pub struct ContactId;
}

modelmeta_types::model_object_id! {
    pub struct AccountId;
}

// ── FieldId ───────────────────────────────────────────────────────

#[test]
fn field_id_parse_accepts_namespaced_ids() {
    let id = FieldId::parse("crm.contact.email").unwrap();
    assert_eq!(id.as_str(), "crm.contact.email");
    assert_eq!(id.namespace(), "crm");
    assert_eq!(id.segments().collect::<Vec<_>>(), ["crm", "contact", "email"]);
}

#[test]
fn field_id_parse_rejects_single_segment() {
    assert!(FieldId::parse("email").is_err());
}

#[test]
fn field_id_parse_rejects_empty_segments() {
    assert!(FieldId::parse("crm..email").is_err());
    assert!(FieldId::parse(".email").is_err());
    assert!(FieldId::parse("crm.").is_err());
    assert!(FieldId::parse("").is_err());
}

#[test]
fn field_id_parse_rejects_whitespace() {
    assert!(FieldId::parse("crm.first name").is_err());
}

#[test]
fn field_id_from_str() {
    let id = FieldId::from_str("crm.name").unwrap();
    assert_eq!(id, FieldId::new("crm.name"));
}

#[test]
fn field_id_static_equals_owned() {
    const NAME: FieldId = FieldId::from_static("crm.name");
    let owned = FieldId::new(String::from("crm.name"));
    assert_eq!(NAME, owned);

    let mut set = HashSet::new();
    set.insert(NAME);
    set.insert(owned);
    assert_eq!(set.len(), 1);
}

#[test]
fn field_id_child_appends_segment() {
    let address = FieldId::from_static("crm.address");
    let street = address.child("street");
    assert_eq!(street.as_str(), "crm.address.street");
    assert!(street.is_well_formed());
}

#[test]
fn field_id_display() {
    let id = FieldId::from_static("modelobject.createDate");
    assert_eq!(id.to_string(), "modelobject.createDate");
}

#[test]
fn field_id_serializes_as_plain_string() {
    let id = FieldId::from_static("crm.name");
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, "\"crm.name\"");
    let parsed: FieldId = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, id);
}

// ── IndexableFieldId ──────────────────────────────────────────────

#[test]
fn indexable_id_round_trips_through_field_id() {
    let id = FieldId::from_static("crm.contact.email");
    let indexable = id.to_indexable();
    assert_eq!(indexable.as_str(), "crm.contact.email");
    assert_eq!(indexable.to_field_id(), id);
}

#[test]
fn indexable_id_from_conversions() {
    let id = FieldId::from_static("crm.name");
    let by_ref = IndexableFieldId::from(&id);
    let by_value = IndexableFieldId::from(id.clone());
    assert_eq!(by_ref, by_value);
    assert_eq!(FieldId::from(by_value), id);
}

#[test]
fn indexable_id_parse_invalid() {
    assert!(IndexableFieldId::parse("name").is_err());
}

// ── TypeRef ───────────────────────────────────────────────────────

#[test]
fn type_ref_equality_is_by_type() {
    assert_eq!(TypeRef::of::<String>(), TypeRef::of::<String>());
    assert_ne!(TypeRef::of::<String>(), TypeRef::of::<i64>());
    assert_ne!(TypeRef::of::<ContactId>(), TypeRef::of::<AccountId>());
}

#[test]
fn type_ref_is() {
    let r = TypeRef::of::<ContactId>();
    assert!(r.is::<ContactId>());
    assert!(!r.is::<AccountId>());
}

#[test]
fn type_ref_short_name_strips_path() {
    assert_eq!(TypeRef::of::<ContactId>().short_name(), "ContactId");
    assert_eq!(TypeRef::of::<i64>().short_name(), "i64");
    assert_eq!(TypeRef::of::<Vec<String>>().short_name(), "Vec<alloc::string::String>");
}

#[test]
fn type_ref_serializes_as_name() {
    let json = serde_json::to_string(&TypeRef::of::<String>()).unwrap();
    assert_eq!(json, "\"alloc::string::String\"");
}

// ── model_object_id! ──────────────────────────────────────────────

#[test]
fn oid_new_is_unique() {
    assert_ne!(ContactId::new(), ContactId::new());
}

#[test]
fn oid_from_uuid_roundtrip() {
    let uuid = uuid::Uuid::now_v7();
    let id = ContactId::from_uuid(uuid);
    assert_eq!(id.as_uuid(), uuid);
}

#[test]
fn oid_display_and_parse() {
    let id = ContactId::new();
    let parsed = ContactId::parse(&id.to_string()).unwrap();
    assert_eq!(id, parsed);
}

#[test]
fn oid_parse_invalid() {
    assert!(ContactId::parse("not-a-uuid").is_err());
    assert!(ContactId::from_str("garbage").is_err());
}

#[test]
fn oid_serialization_roundtrip() {
    let id = AccountId::new();
    let json = serde_json::to_string(&id).unwrap();
    let parsed: AccountId = serde_json::from_str(&json).unwrap();
    assert_eq!(id, parsed);
}

#[test]
fn oid_debug_contains_type_name() {
    let debug = format!("{:?}", AccountId::new());
    assert!(debug.contains("AccountId"));
}
