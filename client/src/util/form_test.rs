use super::*;
use serde_json::json;

#[test]
fn fields_to_json_maps_unique_names_to_strings() {
    let value = fields_to_json([("username", "alice"), ("password", "s3cret")]);
    assert_eq!(value, json!({ "username": "alice", "password": "s3cret" }));
}

#[test]
fn fields_to_json_collects_repeated_names_in_order() {
    let value = fields_to_json([("scope", "read"), ("client_id", "c1"), ("scope", "write"), ("scope", "admin")]);
    assert_eq!(value, json!({ "scope": ["read", "write", "admin"], "client_id": "c1" }));
}

#[test]
fn fields_to_json_skips_unnamed_fields() {
    let value = fields_to_json([("", "orphan"), ("state", "xyz")]);
    assert_eq!(value, json!({ "state": "xyz" }));
}

#[test]
fn fields_to_json_of_nothing_is_empty_object() {
    let value = fields_to_json(Vec::<(String, String)>::new());
    assert_eq!(value, json!({}));
}

#[test]
fn has_class_matches_whole_tokens_only() {
    assert!(has_class("form oauth2Form wide", "oauth2Form"));
    assert!(!has_class("oauth2FormLegacy", "oauth2Form"));
    assert!(!has_class("", "oauth2Form"));
}
