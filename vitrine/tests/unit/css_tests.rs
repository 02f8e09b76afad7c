use vitrine::styling::css::CssRule;

#[test]
fn test_render_flat_rule() {
    let css = CssRule::new(".bg-card")
        .property("background-color", "var(--color-card)")
        .render();
    assert_eq!(css, ".bg-card {\n    background-color: var(--color-card);\n}\n");
}

#[test]
fn test_render_nested_rule() {
    let css = CssRule::new("select")
        .property("cursor", "pointer")
        .child(CssRule::new("&:focus").property("border-color", "var(--color-ring)"))
        .render();
    assert!(css.starts_with("select {\n    cursor: pointer;\n"));
    assert!(css.contains("    &:focus {\n        border-color: var(--color-ring);\n    }\n"));
}

#[test]
fn test_walk_properties_visits_children() {
    let rule = CssRule::new("a")
        .property("color", "red")
        .child(CssRule::new("b").property("margin", "0"));

    let mut seen = Vec::new();
    rule.walk_properties(&mut |name, value| seen.push(format!("{name}:{value}")));
    assert_eq!(seen, vec!["color:red", "margin:0"]);
}
