//! Shared fixtures for catalog tests.

#![allow(dead_code)]

use linkdeck_catalog::{Catalog, ShadowPolicy};
use linkdeck_store::{KeyValueStore, MemoryStore, ResourceStore, DEFAULT_STORAGE_KEY};
use linkdeck_types::{Category, Entry, EntryDraft, EntryId};

pub fn entry(id: &str, title: &str, category: Category, tags: &[&str]) -> Entry {
    Entry {
        id: EntryId::parse(id),
        title: title.to_string(),
        description: String::new(),
        url: format!("https://example.com/{}", title.to_lowercase()),
        category,
        icon: "🔗".to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        featured: None,
    }
}

pub fn gemini() -> Entry {
    Entry {
        description: "Google 最强大的多模态 AI 模型".to_string(),
        featured: Some(true),
        ..entry("1", "Gemini", Category::Ai, &["LLM"])
    }
}

pub fn chatgpt() -> Entry {
    Entry {
        description: "OpenAI 开发的对话式 AI".to_string(),
        ..entry("2", "ChatGPT", Category::Ai, &["GPT-4", "Chat"])
    }
}

pub fn figma() -> Entry {
    Entry {
        description: "协作式界面设计工具".to_string(),
        ..entry("5", "Figma", Category::Design, &["UI/UX", "协作"])
    }
}

pub fn builtins() -> Vec<Entry> {
    vec![gemini(), chatgpt(), figma()]
}

pub fn raycast_draft() -> EntryDraft {
    EntryDraft::new("Raycast", "https://raycast.com", Category::Tool).with_tags(["效率"])
}

pub fn ids(entries: &[Entry]) -> Vec<String> {
    entries.iter().map(|e| e.id.to_string()).collect()
}

pub fn ids_of(entries: &[&Entry]) -> Vec<String> {
    entries.iter().map(|e| e.id.to_string()).collect()
}

/// A catalog over an in-memory store, plus a handle on the backing store.
pub fn open(builtins: Vec<Entry>, stored: Option<&str>) -> (Catalog, MemoryStore) {
    open_with_policy(builtins, stored, ShadowPolicy::KeepBoth)
}

pub fn open_with_policy(
    builtins: Vec<Entry>,
    stored: Option<&str>,
    policy: ShadowPolicy,
) -> (Catalog, MemoryStore) {
    let backing = match stored {
        Some(payload) => MemoryStore::with_slot(DEFAULT_STORAGE_KEY, payload),
        None => MemoryStore::new(),
    };
    let catalog = Catalog::open_with_policy(builtins, ResourceStore::new(backing.clone()), policy);
    (catalog, backing)
}

pub fn stored_raw(backing: &MemoryStore) -> Option<String> {
    backing.get(DEFAULT_STORAGE_KEY).unwrap()
}

pub fn stored(backing: &MemoryStore) -> Vec<Entry> {
    stored_raw(backing)
        .map(|raw| serde_json::from_str(&raw).unwrap())
        .unwrap_or_default()
}
