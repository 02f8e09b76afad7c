use crate::styling::css::CssRule;

pub fn layout() -> Vec<CssRule> {
    vec![header(), content(), footer()]
        .into_iter()
        .flatten()
        .collect()
}

fn header() -> Vec<CssRule> {
    vec![
        CssRule::new("header")
            .property("background-color", "var(--color-card)")
            .property("border-bottom", "0.1rem solid var(--color-border)")
            .property("height", "4rem")
            .property("display", "flex")
            .property("flex", "0 0 auto")
            .property("justify-content", "space-between")
            .property("align-items", "center")
            .property("padding", "0 1rem")
            .child(
                CssRule::new(".left-panel")
                    .property("display", "flex")
                    .property("justify-content", "center")
                    .property("align-items", "center")
                    .property("gap", "1rem")
                    .child(
                        CssRule::new("nav")
                            .property("padding", "0.5rem")
                            .property("border-radius", "0.25rem")
                            .property("border", "0.1rem solid var(--color-border)")
                            .property("color", "var(--color-muted-foreground)")
                            .property("background-color", "var(--color-card)")
                            .property("cursor", "pointer")
                            .property(
                                "transition",
                                "color 0.3s ease, border-color 0.3s ease, background-color 0.3s ease",
                            )
                            .child(
                                CssRule::new("i")
                                    .property("color", "unset")
                                    .property("font-size", "1.6rem"),
                            )
                            .child(
                                CssRule::new("&:hover")
                                    .property("color", "var(--color-foreground)")
                                    .property("border-color", "var(--color-ring)")
                                    .property("background-color", "var(--color-muted)"),
                            ),
                    ),
            ),
    ]
}

fn content() -> Vec<CssRule> {
    vec![
        CssRule::new("content")
            .property("flex", "1 1 auto")
            .property("overflow-x", "hidden")
            .property("overflow-y", "auto"),
        CssRule::new(".content-inner")
            .property("max-width", "72rem")
            .property("margin", "0 auto")
            .property("padding", "1.5rem"),
    ]
}

fn footer() -> Vec<CssRule> {
    vec![
        CssRule::new("footer")
            .property("background-color", "var(--color-card)")
            .property("border-top", "0.1rem solid var(--color-border)")
            .property("height", "3rem")
            .property("display", "flex")
            .property("flex", "0 0 auto")
            .property("justify-content", "center")
            .property("align-items", "center"),
    ]
}
