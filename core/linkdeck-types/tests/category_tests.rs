use linkdeck_types::{Category, CategoryFilter, Error};

#[test]
fn serializes_with_original_names() {
    assert_eq!(serde_json::to_string(&Category::Ai).unwrap(), r#""AI""#);
    assert_eq!(serde_json::to_string(&Category::Tool).unwrap(), r#""Tool""#);
}

#[test]
fn deserialize_is_exact() {
    let c: Category = serde_json::from_str(r#""Design""#).unwrap();
    assert_eq!(c, Category::Design);
    assert!(serde_json::from_str::<Category>(r#""Music""#).is_err());
}

#[test]
fn parse_is_case_insensitive() {
    assert_eq!("ai".parse::<Category>().unwrap(), Category::Ai);
    assert_eq!(" BLOG ".parse::<Category>().unwrap(), Category::Blog);
}

#[test]
fn parse_unknown_category_fails() {
    let err = "Music".parse::<Category>().unwrap_err();
    assert!(matches!(err, Error::UnknownCategory(ref s) if s == "Music"));
    assert!(err.to_string().contains("unknown category"));
}

#[test]
fn all_lists_every_category_once() {
    assert_eq!(Category::ALL.len(), 4);
    for c in Category::ALL {
        assert_eq!(c.as_str().parse::<Category>().unwrap(), c);
        assert!(!c.label().is_empty());
        assert!(!c.icon().is_empty());
    }
}

// ── CategoryFilter ────────────────────────────────────────────────

#[test]
fn filter_all_admits_everything() {
    for c in Category::ALL {
        assert!(CategoryFilter::All.admits(c));
    }
}

#[test]
fn filter_only_admits_one() {
    let f = CategoryFilter::Only(Category::Ai);
    assert!(f.admits(Category::Ai));
    assert!(!f.admits(Category::Design));
}

#[test]
fn filter_parses_all_and_categories() {
    assert_eq!("All".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
    assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
    assert_eq!(
        "tool".parse::<CategoryFilter>().unwrap(),
        CategoryFilter::Only(Category::Tool)
    );
    assert!("everything".parse::<CategoryFilter>().is_err());
}

#[test]
fn filter_default_is_all() {
    assert_eq!(CategoryFilter::default(), CategoryFilter::All);
}

#[test]
fn filter_display() {
    assert_eq!(CategoryFilter::All.to_string(), "All");
    assert_eq!(CategoryFilter::from(Category::Blog).to_string(), "Blog");
}
