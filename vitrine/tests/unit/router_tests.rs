use vitrine::framework::router::RouteTableBuilder;

fn table() -> vitrine::framework::router::RouteTable<&'static str> {
    RouteTableBuilder::new()
        .route("/", "home")
        .route("/catalog", "catalog")
        .route("/cart", "cart")
        .fallback("not-found")
}

#[test]
fn test_resolves_declared_paths() {
    let table = table();
    assert_eq!(*table.resolve("/"), "home");
    assert_eq!(*table.resolve("/catalog"), "catalog");
    assert_eq!(*table.resolve("/cart"), "cart");
}

#[test]
fn test_unknown_path_resolves_to_fallback() {
    let table = table();
    assert_eq!(*table.resolve("/unknown-xyz"), "not-found");
    assert_eq!(*table.resolve(""), "not-found");
}

#[test]
fn test_trailing_slash_is_insignificant() {
    let table = table();
    assert_eq!(*table.resolve("/catalog/"), "catalog");
    assert_eq!(*table.resolve("/"), "home");
}

#[test]
fn test_first_match_wins() {
    // Declaration order decides; the later entry is unreachable only if it
    // duplicates an earlier path, which the builder rejects.
    let table = RouteTableBuilder::new()
        .route("/a", 1)
        .route("/b", 2)
        .fallback(0);
    assert_eq!(*table.resolve("/a"), 1);
    assert_eq!(*table.resolve("/b"), 2);
}

#[test]
#[should_panic(expected = "duplicate route path")]
fn test_duplicate_path_is_rejected() {
    let _ = RouteTableBuilder::new()
        .route("/catalog", "first")
        .route("/catalog", "second")
        .fallback("not-found");
}

#[test]
#[should_panic(expected = "duplicate route path")]
fn test_duplicate_after_normalization_is_rejected() {
    let _ = RouteTableBuilder::new()
        .route("/catalog", "first")
        .route("/catalog/", "second")
        .fallback("not-found");
}

#[test]
fn test_entries_preserve_declaration_order() {
    let table = table();
    let paths: Vec<&str> = table.entries().map(|(path, _)| path).collect();
    assert_eq!(paths, vec!["/", "/catalog", "/cart"]);
    assert_eq!(table.len(), 3);
    assert_eq!(*table.fallback_view(), "not-found");
}
