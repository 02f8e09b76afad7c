use vitrine::styling::css::CssRule;
use vitrine::styling::tokens::{ColorRole, DesignTokens, Keyframes, TokenValue};

#[test]
fn test_token_value_css() {
    assert_eq!(TokenValue::var("--color-primary").css(), "var(--color-primary)");
    assert_eq!(TokenValue::literal("1.25rem").css(), "1.25rem");
}

#[test]
fn test_color_role_foreground_pair() {
    let role = ColorRole::new("primary", TokenValue::var("--color-primary"))
        .with_foreground(TokenValue::var("--color-primary-foreground"));
    assert_eq!(role.name(), "primary");
    assert_eq!(role.base().css(), "var(--color-primary)");
    assert_eq!(
        role.foreground().map(TokenValue::css),
        Some("var(--color-primary-foreground)".to_string())
    );
}

#[test]
fn test_single_valued_role_has_no_foreground() {
    let role = ColorRole::new("border", TokenValue::var("--color-border"));
    assert!(role.foreground().is_none());
}

#[test]
fn test_keyframes_rule() {
    let keyframes = Keyframes::new("fade-in", "fade-in 0.4s ease-out both")
        .frame(CssRule::new("from").property("opacity", "0"))
        .frame(CssRule::new("to").property("opacity", "1"));

    let css = keyframes.rule().render();
    assert!(css.starts_with("@keyframes fade-in {\n"));
    assert!(css.contains("opacity: 0;"));
    assert!(css.contains("opacity: 1;"));
}

#[test]
fn test_registry_accumulates_categories() {
    let tokens = DesignTokens::new()
        .color(ColorRole::new("background", TokenValue::var("--color-background")))
        .spacing("13", TokenValue::literal("3.25rem"))
        .z_layer("modal", TokenValue::literal("100"));

    assert_eq!(tokens.colors().len(), 1);
    assert_eq!(tokens.spacing_scale().len(), 1);
    assert_eq!(tokens.z_layers().len(), 1);
    assert!(tokens.shadows().is_empty());
}
