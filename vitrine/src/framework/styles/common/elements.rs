use crate::styling::css::CssRule;

pub fn elements() -> Vec<CssRule> {
    vec![select(), button_link(), fallback()]
}

fn select() -> CssRule {
    CssRule::new("select")
        .property("background-color", "var(--color-input)")
        .property("border", "0.1rem solid var(--color-border)")
        .property("border-radius", "0.3rem")
        .property("font-size", "1rem")
        .property("padding", "0.5rem 1rem")
        .property("cursor", "pointer")
        .property("outline", "none")
        .property("transition", "border-color 0.5s ease")
        .child(
            CssRule::new("&:focus")
                .property("border-color", "var(--color-ring)")
                .property("box-shadow", "var(--shadow-focus)"),
        )
}

fn button_link() -> CssRule {
    CssRule::new("a.button")
        .property("display", "inline-block")
        .property("background-color", "var(--color-primary)")
        .property("color", "var(--color-primary-foreground)")
        .property("border-radius", "0.3rem")
        .property("padding", "0.5rem 1rem")
        .property("text-decoration", "none")
        .child(CssRule::new("&:hover").property("box-shadow", "var(--shadow-soft)"))
}

fn fallback() -> CssRule {
    CssRule::new(".render-fallback")
        .property("background-color", "var(--color-card)")
        .property("border", "0.1rem solid var(--color-error)")
        .property("border-radius", "0.5rem")
        .property("box-shadow", "var(--shadow-medium)")
        .property("margin", "2rem auto")
        .property("max-width", "28rem")
        .property("padding", "2rem")
        .property("text-align", "center")
}
