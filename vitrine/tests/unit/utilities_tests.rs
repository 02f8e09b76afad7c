use vitrine::styling::StyleError;
use vitrine::styling::css::CssRule;
use vitrine::styling::tokens::{ColorRole, DesignTokens, Keyframes, TokenValue};
use vitrine::styling::utilities::{
    check_rules, check_utilities, generate, stylesheet, var_references,
};

fn tokens() -> DesignTokens {
    DesignTokens::new()
        .color(
            ColorRole::new("primary", TokenValue::var("--color-primary"))
                .with_foreground(TokenValue::var("--color-primary-foreground")),
        )
        .color(ColorRole::new("border", TokenValue::var("--color-border")))
        .spacing("13", TokenValue::literal("3.25rem"))
        .shadow("soft", TokenValue::var("--shadow-soft"))
        .keyframes(
            Keyframes::new("fade-in", "fade-in 0.4s ease-out both")
                .frame(CssRule::new("from").property("opacity", "0"))
                .frame(CssRule::new("to").property("opacity", "1")),
        )
}

#[test]
fn test_generates_color_utilities() {
    let classes: Vec<String> = generate(&tokens())
        .iter()
        .map(|utility| utility.class().to_string())
        .collect();

    assert!(classes.contains(&"bg-primary".to_string()));
    assert!(classes.contains(&"text-primary".to_string()));
    assert!(classes.contains(&"text-primary-foreground".to_string()));
    assert!(classes.contains(&"border-border".to_string()));
    // Single-valued roles get no foreground pair.
    assert!(!classes.contains(&"text-border-foreground".to_string()));
}

#[test]
fn test_generates_scale_utilities() {
    let utilities = generate(&tokens());
    let padding = utilities
        .iter()
        .find(|utility| utility.class() == "p-13")
        .expect("spacing utility");
    assert!(padding.rule().render().contains("padding: 3.25rem;"));
}

#[test]
fn test_animate_utility_carries_keyframes() {
    let utilities = generate(&tokens());
    let animate = utilities
        .iter()
        .find(|utility| utility.class() == "animate-fade-in")
        .expect("animate utility");
    let support = animate.support().expect("keyframes support rule");
    assert_eq!(support.selector(), "@keyframes fade-in");
}

#[test]
fn test_stylesheet_dedupes_support_rules() {
    let utilities = generate(&tokens());
    let css = stylesheet(&utilities);
    assert_eq!(css.matches("@keyframes fade-in").count(), 1);
    assert!(css.contains(".bg-primary"));
}

#[test]
fn test_var_references() {
    assert_eq!(var_references("var(--color-primary)"), vec!["--color-primary"]);
    assert_eq!(
        var_references("0 0 0 3px var(--color-ring, #fff)"),
        vec!["--color-ring"]
    );
    assert!(var_references("1.25rem").is_empty());
}

fn theme(vars: &[&str]) -> (String, Vec<CssRule>) {
    let mut rule = CssRule::new(":root[data-theme=\"test\"]");
    for name in vars {
        rule = rule.property(name, "#000");
    }
    ("test".to_string(), vec![rule])
}

#[test]
fn test_check_passes_when_variables_resolve() {
    let themes = vec![theme(&[
        "--color-primary",
        "--color-primary-foreground",
        "--color-border",
        "--shadow-soft",
    ])];
    assert!(check_utilities(&generate(&tokens()), &themes).is_ok());
}

#[test]
fn test_check_reports_orphan_variable() {
    let themes = vec![theme(&["--color-primary", "--color-primary-foreground"])];
    let err = check_utilities(&generate(&tokens()), &themes).unwrap_err();
    match err {
        StyleError::OrphanVariable { variable, theme, .. } => {
            assert_eq!(variable, "--color-border");
            assert_eq!(theme, "test");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_check_rules_covers_shared_styles() {
    let rules = vec![CssRule::new(".app").property("background-color", "var(--color-background)")];
    let err = check_rules(&rules, &[theme(&["--color-primary"])]).unwrap_err();
    assert!(matches!(err, StyleError::OrphanVariable { .. }));
}
