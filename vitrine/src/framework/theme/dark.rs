use super::ThemeSpec;
use crate::styling::css::CssRule;

pub struct DarkTheme;

impl ThemeSpec for DarkTheme {
    fn variables() -> Vec<CssRule> {
        vec![
            CssRule::new(":root[data-theme=\"dark\"]")
                .property("--color-background", "#161412")
                .property("--color-foreground", "#ece7e1")
                .property("--color-border", "#35302b")
                .property("--color-input", "#221f1c")
                .property("--color-ring", "#c98a4b")
                .property("--color-primary", "#c98a4b")
                .property("--color-primary-foreground", "#1c140c")
                .property("--color-secondary", "#2b2723")
                .property("--color-secondary-foreground", "#d9d2c8")
                .property("--color-destructive", "#b54533")
                .property("--color-destructive-foreground", "#f7ece9")
                .property("--color-muted", "#242019")
                .property("--color-muted-foreground", "#a39a8d")
                .property("--color-accent", "#7b8f6f")
                .property("--color-accent-foreground", "#141711")
                .property("--color-popover", "#1d1a17")
                .property("--color-popover-foreground", "#ece7e1")
                .property("--color-card", "#1d1a17")
                .property("--color-card-foreground", "#ece7e1")
                .property("--color-success", "#6f9e70")
                .property("--color-success-foreground", "#10170f")
                .property("--color-warning", "#d9a441")
                .property("--color-warning-foreground", "#1d1609")
                .property("--color-error", "#c4564a")
                .property("--color-error-foreground", "#f8ecea")
                .property("--shadow-subtle", "0 1px 2px rgba(0, 0, 0, 0.35)")
                .property("--shadow-soft", "0 2px 8px rgba(0, 0, 0, 0.4)")
                .property("--shadow-medium", "0 6px 18px rgba(0, 0, 0, 0.45)")
                .property("--shadow-large", "0 16px 40px rgba(0, 0, 0, 0.55)")
                .property("--shadow-focus", "0 0 0 3px rgba(201, 138, 75, 0.35)"),
        ]
    }
}
