use super::ThemeSpec;
use crate::styling::css::CssRule;

pub struct LightTheme;

impl ThemeSpec for LightTheme {
    fn variables() -> Vec<CssRule> {
        vec![
            CssRule::new(":root[data-theme=\"light\"]")
                .property("--color-background", "#faf8f5")
                .property("--color-foreground", "#2b2520")
                .property("--color-border", "#e3ddd4")
                .property("--color-input", "#f1ece5")
                .property("--color-ring", "#b06f33")
                .property("--color-primary", "#b06f33")
                .property("--color-primary-foreground", "#fdf9f4")
                .property("--color-secondary", "#ece5da")
                .property("--color-secondary-foreground", "#4a4138")
                .property("--color-destructive", "#a93b2a")
                .property("--color-destructive-foreground", "#fdf5f3")
                .property("--color-muted", "#f0eae2")
                .property("--color-muted-foreground", "#77695c")
                .property("--color-accent", "#68815c")
                .property("--color-accent-foreground", "#f6f9f3")
                .property("--color-popover", "#ffffff")
                .property("--color-popover-foreground", "#2b2520")
                .property("--color-card", "#ffffff")
                .property("--color-card-foreground", "#2b2520")
                .property("--color-success", "#3f7d44")
                .property("--color-success-foreground", "#f2f8f2")
                .property("--color-warning", "#9a6b14")
                .property("--color-warning-foreground", "#fdf8ee")
                .property("--color-error", "#9d3528")
                .property("--color-error-foreground", "#fcf2f0")
                .property("--shadow-subtle", "0 1px 2px rgba(43, 37, 32, 0.06)")
                .property("--shadow-soft", "0 2px 8px rgba(43, 37, 32, 0.08)")
                .property("--shadow-medium", "0 6px 18px rgba(43, 37, 32, 0.1)")
                .property("--shadow-large", "0 16px 40px rgba(43, 37, 32, 0.14)")
                .property("--shadow-focus", "0 0 0 3px rgba(176, 111, 51, 0.25)"),
        ]
    }
}
