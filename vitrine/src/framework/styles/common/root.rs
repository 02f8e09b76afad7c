use crate::styling::css::CssRule;

pub fn root() -> Vec<CssRule> {
    vec![
        CssRule::new("html,\nbody")
            .property("height", "100%")
            .property("margin", "0")
            .property("padding", "0"),
        CssRule::new(".app")
            .property("overflow", "hidden")
            .property("height", "100vh")
            .property("width", "100vw")
            .property("min-width", "100vw")
            .property("display", "flex")
            .property("flex-direction", "column")
            .property("background-color", "var(--color-background)"),
        CssRule::new("*")
            .property("font-family", "'Inter', 'Roboto', sans-serif")
            .property("box-sizing", "border-box")
            .property("color", "var(--color-foreground)"),
        CssRule::new("*")
            .child(
                CssRule::new("&::-webkit-scrollbar")
                    .property("width", "0.7rem")
                    .property("height", "0.7rem"),
            )
            .child(
                CssRule::new("&::-webkit-scrollbar-track")
                    .property("background", "var(--color-muted)"),
            )
            .child(
                CssRule::new("&::-webkit-scrollbar-thumb")
                    .property("background-color", "var(--color-border)")
                    .property("border-radius", "0.3rem"),
            )
            .child(
                CssRule::new("&::-webkit-scrollbar-thumb:hover")
                    .property("background-color", "var(--color-muted-foreground)"),
            ),
    ]
}
