use vitrine::{Element, button, div, h2, p, section, span};

pub fn render() -> anyhow::Result<Element> {
    Ok(section()
        .class("animate-fade-in")
        .child(
            div()
                .class("p-13")
                .child(h2().class("text-headline tracking-tight").text("AR Camera Portal"))
                .child(
                    p().class("text-body leading-relaxed text-muted-foreground")
                        .text(
                            "Open the portal and the catalog steps into your room. \
                             Furniture is anchored to your floor at true scale.",
                        ),
                ),
        )
        .child(
            div()
                .class("bg-muted aspect-showcase shadow-medium animate-scale-in")
                .id("camera-viewport")
                .child(
                    span()
                        .class("text-caption text-muted-foreground")
                        .text("Camera preview appears here once access is granted."),
                ),
        )
        .child(
            div()
                .class("p-13")
                .child(
                    button()
                        .class("bg-primary text-primary-foreground shadow-focus")
                        .text("Start camera"),
                )
                .child(
                    p().class("text-caption text-muted-foreground")
                        .text("Works best in a well-lit room with a clear floor area."),
                ),
        ))
}
