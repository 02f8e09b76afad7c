use crate::styling::css::CssRule;

pub fn modal() -> Vec<CssRule> {
    vec![
        CssRule::new(".modal-overlay")
            .property("position", "fixed")
            .property("inset", "0")
            .property("background-color", "rgba(0, 0, 0, 0.5)")
            .property("opacity", "0")
            .property("pointer-events", "none")
            .property("transition", "opacity 0.3s ease")
            .child(
                CssRule::new("&.show")
                    .property("opacity", "1")
                    .property("pointer-events", "auto"),
            ),
        CssRule::new(".modal-side")
            .property("position", "fixed")
            .property("top", "0")
            .property("left", "-20rem")
            .property("height", "100vh")
            .property("width", "20rem")
            .property("background-color", "var(--color-popover)")
            .property("border-right", "0.1rem solid var(--color-border)")
            .property("box-shadow", "var(--shadow-large)")
            .property("transition", "left 0.3s ease")
            .child(CssRule::new("&.show").property("left", "0")),
        CssRule::new(".modal-content")
            .property("display", "flex")
            .property("flex-direction", "column")
            .property("gap", "0.5rem")
            .property("padding", "1.5rem"),
    ]
}
