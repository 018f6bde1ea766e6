use linkdeck_types::{
    parse_tags, Category, Entry, EntryDraft, EntryId, Error, DEFAULT_ICON, DESCRIPTION_PLACEHOLDER,
};
use pretty_assertions::assert_eq;
use serde_json::json;

fn chatgpt() -> Entry {
    Entry {
        id: EntryId::parse("2"),
        title: "ChatGPT".into(),
        description: "OpenAI 开发的对话式 AI".into(),
        url: "https://chat.openai.com/".into(),
        category: Category::Ai,
        icon: "💬".into(),
        tags: vec!["GPT-4".into(), "Chat".into()],
        featured: Some(true),
    }
}

// ── Serde ─────────────────────────────────────────────────────────

#[test]
fn deserializes_catalog_json() {
    let value = json!({
        "id": "2",
        "title": "ChatGPT",
        "description": "OpenAI 开发的对话式 AI",
        "url": "https://chat.openai.com/",
        "category": "AI",
        "icon": "💬",
        "tags": ["GPT-4", "Chat"],
        "featured": true
    });
    let entry: Entry = serde_json::from_value(value).unwrap();
    assert_eq!(entry, chatgpt());
}

#[test]
fn missing_optional_fields_default() {
    let value = json!({
        "id": "custom-1",
        "title": "Raycast",
        "url": "https://raycast.com",
        "category": "Tool"
    });
    let entry: Entry = serde_json::from_value(value).unwrap();
    assert_eq!(entry.description, "");
    assert!(entry.tags.is_empty());
    assert_eq!(entry.featured, None);
    assert!(!entry.is_featured());
}

#[test]
fn absent_featured_is_not_serialized() {
    let mut entry = chatgpt();
    entry.featured = None;
    let value = serde_json::to_value(&entry).unwrap();
    assert!(value.get("featured").is_none());
}

#[test]
fn missing_title_is_rejected() {
    let value = json!({"id": "1", "url": "https://x", "category": "AI"});
    assert!(serde_json::from_value::<Entry>(value).is_err());
}

// ── Display helpers ───────────────────────────────────────────────

#[test]
fn empty_description_shows_placeholder() {
    let mut entry = chatgpt();
    entry.description = "   ".into();
    assert_eq!(entry.display_description(), DESCRIPTION_PLACEHOLDER);
}

#[test]
fn description_shown_when_present() {
    assert_eq!(chatgpt().display_description(), "OpenAI 开发的对话式 AI");
}

// ── Drafts ────────────────────────────────────────────────────────

#[test]
fn draft_defaults() {
    let draft = EntryDraft::new("Raycast", "https://raycast.com", Category::Tool);
    assert_eq!(draft.icon, DEFAULT_ICON);
    assert_eq!(draft.description, "");
    assert!(draft.tags.is_empty());
    assert_eq!(draft.featured, None);
}

#[test]
fn draft_validation_rejects_blank_title() {
    let draft = EntryDraft::new("  ", "https://raycast.com", Category::Tool);
    let err = draft.validate().unwrap_err();
    assert!(matches!(err, Error::Validation { field: "title", .. }));
}

#[test]
fn draft_validation_rejects_blank_url() {
    let draft = EntryDraft::new("Raycast", "", Category::Tool);
    let err = draft.validate().unwrap_err();
    assert!(matches!(err, Error::Validation { field: "url", .. }));
    assert_eq!(err.to_string(), "invalid url: must not be empty");
}

#[test]
fn draft_round_trips_through_entry() {
    let draft = EntryDraft::new("Raycast", "https://raycast.com", Category::Tool)
        .with_description("launcher")
        .with_icon("⚡")
        .with_tags(["效率", " MacOS "])
        .with_featured(true);
    let entry = Entry::from_draft(EntryId::parse("custom-1"), draft.clone());
    assert_eq!(entry.tags, vec!["效率", "MacOS"]);
    assert_eq!(entry.to_draft().title, draft.title);
    assert_eq!(entry.to_draft(), EntryDraft { tags: vec!["效率".into(), "MacOS".into()], ..draft });
}

#[test]
fn entry_validation_matches_draft() {
    let mut entry = chatgpt();
    assert!(entry.validate().is_ok());
    entry.url = String::new();
    assert!(entry.validate().is_err());
}

// ── Tag parsing ───────────────────────────────────────────────────

#[test]
fn tags_split_on_both_comma_kinds() {
    assert_eq!(parse_tags("AI, 写作，效率"), vec!["AI", "写作", "效率"]);
}

#[test]
fn tags_drop_empty_parts() {
    assert_eq!(parse_tags(" , a,,b ,，"), vec!["a", "b"]);
    assert!(parse_tags("").is_empty());
}

#[test]
fn tags_keep_order() {
    assert_eq!(parse_tags("z,a,m"), vec!["z", "a", "m"]);
}
