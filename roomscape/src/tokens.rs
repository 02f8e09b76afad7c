use vitrine::styling::css::CssRule;
use vitrine::styling::scan::ContentScan;
use vitrine::styling::tokens::{ColorRole, DesignTokens, Keyframes, TokenValue};

fn color_pair(name: &str) -> ColorRole {
    ColorRole::new(name, TokenValue::var(&format!("--color-{name}")))
        .with_foreground(TokenValue::var(&format!("--color-{name}-foreground")))
}

fn color_single(name: &str) -> ColorRole {
    ColorRole::new(name, TokenValue::var(&format!("--color-{name}")))
}

/// The Roomscape design-token set. Color and shadow values are
/// indirections into the theme variables; scales are literals. Declared
/// once, immutable at runtime.
pub fn design_tokens() -> DesignTokens {
    DesignTokens::new()
        .color(color_single("border"))
        .color(color_single("input"))
        .color(color_single("ring"))
        .color(color_single("background"))
        .color(color_single("foreground"))
        .color(color_pair("primary"))
        .color(color_pair("secondary"))
        .color(color_pair("destructive"))
        .color(color_pair("muted"))
        .color(color_pair("accent"))
        .color(color_pair("popover"))
        .color(color_pair("card"))
        .color(color_pair("success"))
        .color(color_pair("warning"))
        .color(color_pair("error"))
        .spacing("13", TokenValue::literal("3.25rem"))
        .spacing("15", TokenValue::literal("3.75rem"))
        .spacing("18", TokenValue::literal("4.5rem"))
        .spacing("22", TokenValue::literal("5.5rem"))
        .spacing("26", TokenValue::literal("6.5rem"))
        .font_size("caption", TokenValue::literal("0.8125rem"))
        .font_size("body", TokenValue::literal("1rem"))
        .font_size("title", TokenValue::literal("1.375rem"))
        .font_size("headline", TokenValue::literal("1.875rem"))
        .font_size("display", TokenValue::literal("2.75rem"))
        .letter_spacing("tight", TokenValue::literal("-0.02em"))
        .letter_spacing("normal", TokenValue::literal("0"))
        .letter_spacing("wide", TokenValue::literal("0.05em"))
        .line_height("snug", TokenValue::literal("1.25"))
        .line_height("normal", TokenValue::literal("1.5"))
        .line_height("relaxed", TokenValue::literal("1.75"))
        .shadow("subtle", TokenValue::var("--shadow-subtle"))
        .shadow("soft", TokenValue::var("--shadow-soft"))
        .shadow("medium", TokenValue::var("--shadow-medium"))
        .shadow("large", TokenValue::var("--shadow-large"))
        .shadow("focus", TokenValue::var("--shadow-focus"))
        .keyframes(
            Keyframes::new("fade-in", "fade-in 0.4s ease-out both")
                .frame(CssRule::new("from").property("opacity", "0"))
                .frame(CssRule::new("to").property("opacity", "1")),
        )
        .keyframes(
            Keyframes::new("slide-up", "slide-up 0.5s cubic-bezier(0.25, 0.46, 0.45, 0.94) both")
                .frame(
                    CssRule::new("from")
                        .property("opacity", "0")
                        .property("transform", "translateY(1.5rem)"),
                )
                .frame(
                    CssRule::new("to")
                        .property("opacity", "1")
                        .property("transform", "translateY(0)"),
                ),
        )
        .keyframes(
            Keyframes::new("scale-in", "scale-in 0.3s cubic-bezier(0.34, 1.56, 0.64, 1) both")
                .frame(CssRule::new("from").property("transform", "scale(0.92)"))
                .frame(CssRule::new("to").property("transform", "scale(1)")),
        )
        .keyframes(
            Keyframes::new("float", "float 5s ease-in-out infinite")
                .frame(CssRule::new("0%, 100%").property("transform", "translateY(0)"))
                .frame(CssRule::new("50%").property("transform", "translateY(-0.5rem)")),
        )
        .easing("spring", TokenValue::literal("cubic-bezier(0.34, 1.56, 0.64, 1)"))
        .easing("glide", TokenValue::literal("cubic-bezier(0.25, 0.46, 0.45, 0.94)"))
        .duration("fast", TokenValue::literal("150ms"))
        .duration("normal", TokenValue::literal("300ms"))
        .duration("slow", TokenValue::literal("500ms"))
        .aspect_ratio("square", TokenValue::literal("1 / 1"))
        .aspect_ratio("portrait", TokenValue::literal("3 / 4"))
        .aspect_ratio("landscape", TokenValue::literal("4 / 3"))
        .aspect_ratio("showcase", TokenValue::literal("16 / 9"))
        .z_layer("header", TokenValue::literal("40"))
        .z_layer("overlay", TokenValue::literal("90"))
        .z_layer("modal", TokenValue::literal("100"))
        .z_layer("toast", TokenValue::literal("110"))
        .grid_template("catalog", TokenValue::literal("repeat(auto-fill, minmax(16rem, 1fr))"))
        .grid_template("showcase", TokenValue::literal("repeat(auto-fit, minmax(20rem, 1fr))"))
}

/// File globs scanned for class usage when emitting the stylesheet.
/// Everything that renders markup lives under these paths.
pub fn content_scan() -> ContentScan {
    ContentScan::new()
        .glob("roomscape/src/**/*.rs")
        .glob("vitrine/src/framework/**/*.rs")
}
