use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;
use vitrine::styling::scan::{ContentScan, filter_used};
use vitrine::styling::tokens::{ColorRole, DesignTokens, TokenValue};
use vitrine::styling::utilities::generate;

struct TempTree {
    root: PathBuf,
}

impl TempTree {
    fn new(name: &str) -> Self {
        let root = std::env::temp_dir().join(format!("vitrine-{name}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&root);
        fs::create_dir_all(root.join("src/views")).expect("create temp tree");
        Self { root }
    }
}

impl Drop for TempTree {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.root);
    }
}

#[test]
fn test_collects_classes_from_matching_files() {
    let tree = TempTree::new("collect");
    fs::write(
        tree.root.join("src/views/home.rs"),
        r#"div().class("bg-primary p-13").child(span().class("text-muted"))"#,
    )
    .expect("write source");
    fs::write(tree.root.join("src/notes.txt"), r#".class("bg-ignored")"#).expect("write note");

    let scan = ContentScan::new().glob("src/**/*.rs");
    let classes = scan.referenced_classes(&tree.root).expect("scan");

    assert!(classes.contains("bg-primary"));
    assert!(classes.contains("p-13"));
    assert!(classes.contains("text-muted"));
    assert!(!classes.contains("bg-ignored"));
}

#[test]
fn test_bad_glob_is_reported() {
    let tree = TempTree::new("badglob");
    let scan = ContentScan::new().glob("src/{unclosed");
    assert!(scan.referenced_classes(&tree.root).is_err());
}

#[test]
fn test_filter_drops_unreferenced_utilities() {
    let tokens = DesignTokens::new()
        .color(ColorRole::new("primary", TokenValue::var("--color-primary")))
        .spacing("13", TokenValue::literal("3.25rem"));

    let mut used = BTreeSet::new();
    used.insert("bg-primary".to_string());

    let kept = filter_used(generate(&tokens), &used);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].class(), "bg-primary");
}
