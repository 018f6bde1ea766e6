use linkdeck_types::{EntryId, USER_PREFIX};
use std::collections::HashSet;
use std::str::FromStr;

// ── Parsing ───────────────────────────────────────────────────────

#[test]
fn plain_string_is_builtin() {
    let id = EntryId::parse("7");
    assert_eq!(id, EntryId::BuiltIn("7".into()));
    assert!(id.is_builtin());
    assert!(!id.is_user_added());
}

#[test]
fn prefixed_string_is_user_added() {
    let id = EntryId::parse("custom-1766140532857");
    assert_eq!(id, EntryId::UserAdded("1766140532857".into()));
    assert!(id.is_user_added());
}

#[test]
fn prefix_only_in_the_middle_is_builtin() {
    let id = EntryId::parse("not-custom-1");
    assert!(id.is_builtin());
    assert_eq!(id.key(), "not-custom-1");
}

#[test]
fn from_str_never_fails() {
    let id = EntryId::from_str("").unwrap();
    assert_eq!(id, EntryId::BuiltIn(String::new()));
}

// ── Display ───────────────────────────────────────────────────────

#[test]
fn display_restores_prefix() {
    assert_eq!(EntryId::UserAdded("42".into()).to_string(), "custom-42");
    assert_eq!(EntryId::BuiltIn("42".into()).to_string(), "42");
}

#[test]
fn display_then_parse_is_identity() {
    for raw in ["1", "custom-1", "custom-custom-2", "lovart"] {
        assert_eq!(EntryId::parse(raw).to_string(), raw);
    }
}

// ── Generation ────────────────────────────────────────────────────

#[test]
fn generated_ids_are_user_added() {
    let id = EntryId::generate();
    assert!(id.is_user_added());
    assert!(id.to_string().starts_with(USER_PREFIX));
}

#[test]
fn generated_ids_are_unique() {
    let ids: HashSet<EntryId> = (0..1000).map(|_| EntryId::generate()).collect();
    assert_eq!(ids.len(), 1000);
}

#[test]
fn generated_ids_sort_by_creation() {
    let a = EntryId::generate();
    let b = EntryId::generate();
    assert!(a.key() < b.key());
}

// ── Overrides & export form ───────────────────────────────────────

#[test]
fn override_of_builtin_carries_prefix_and_key() {
    let id = EntryId::parse("3");
    let ov = id.override_id();
    assert_eq!(ov.to_string(), "custom-3");
    assert!(ov.is_user_added());
}

#[test]
fn override_of_user_added_is_itself() {
    let id = EntryId::parse("custom-9");
    assert_eq!(id.override_id(), id);
}

#[test]
fn to_plain_strips_prefix() {
    assert_eq!(EntryId::parse("custom-9").to_plain().to_string(), "9");
    assert_eq!(EntryId::parse("9").to_plain().to_string(), "9");
}

// ── Serde ─────────────────────────────────────────────────────────

#[test]
fn serializes_as_plain_string() {
    let json = serde_json::to_string(&EntryId::parse("custom-5")).unwrap();
    assert_eq!(json, r#""custom-5""#);
}

#[test]
fn deserializes_from_string() {
    let id: EntryId = serde_json::from_str(r#""custom-5""#).unwrap();
    assert_eq!(id, EntryId::UserAdded("5".into()));
    let id: EntryId = serde_json::from_str(r#""5""#).unwrap();
    assert_eq!(id, EntryId::BuiltIn("5".into()));
}

#[test]
fn rejects_non_string_json() {
    assert!(serde_json::from_str::<EntryId>("5").is_err());
}
