mod common;

use common::{builtins, chatgpt, ids_of, open};
use linkdeck_catalog::ViewState;
use linkdeck_types::{Category, CategoryFilter, EntryId};
use pretty_assertions::assert_eq;

#[test]
fn default_view_shows_everything() {
    let (catalog, _) = open(builtins(), None);
    let view = ViewState::new();
    assert_eq!(view.visible(&catalog).len(), catalog.len());
}

#[test]
fn view_applies_selector_and_query() {
    let (catalog, _) = open(builtins(), None);
    let view = ViewState::new()
        .with_selector(CategoryFilter::Only(Category::Ai))
        .with_query("GPT");
    assert_eq!(view.visible(&catalog), vec![&chatgpt()]);
}

#[test]
fn view_follows_catalog_changes() {
    let (mut catalog, _) = open(builtins(), None);
    let view = ViewState::new().with_query("raycast");
    assert!(view.visible(&catalog).is_empty());

    let added = catalog.add(common::raycast_draft()).unwrap();

    assert_eq!(ids_of(&view.visible(&catalog)), vec![added.id.to_string()]);
}

#[test]
fn reset_clears_selector_and_query() {
    let mut view = ViewState::new()
        .with_selector(CategoryFilter::Only(Category::Blog))
        .with_query("nothing matches");
    view.reset();
    assert_eq!(view.selector, CategoryFilter::All);
    assert!(view.query.is_empty());
}

#[test]
fn edit_target_lifecycle() {
    let (catalog, _) = open(builtins(), None);
    let mut view = ViewState::new();
    let id = EntryId::parse("2");

    let entry = view.begin_edit(&catalog, &id).unwrap();
    assert_eq!(entry, chatgpt());
    assert_eq!(view.editing(), Some(&id));

    assert_eq!(view.finish_edit(), Some(id));
    assert_eq!(view.editing(), None);
}

#[test]
fn begin_edit_unknown_id_leaves_state() {
    let (catalog, _) = open(builtins(), None);
    let mut view = ViewState::new();
    assert!(view.begin_edit(&catalog, &EntryId::parse("nope")).is_none());
    assert_eq!(view.editing(), None);
}
