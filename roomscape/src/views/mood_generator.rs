use vitrine::{Element, div, h2, input, label, p, section};

pub fn render() -> anyhow::Result<Element> {
    Ok(section()
        .class("animate-fade-in")
        .child(
            div()
                .class("p-13")
                .child(h2().class("text-headline tracking-tight").text("AI Design Studio"))
                .child(
                    p().class("text-body leading-relaxed text-muted-foreground")
                        .text(
                            "Tell the studio how the room should feel and it assembles \
                             a palette, materials, and matching pieces.",
                        ),
                ),
        )
        .child(
            div()
                .class("bg-card shadow-soft p-13")
                .child(label().class("text-caption text-muted-foreground").text("Mood"))
                .child(
                    input()
                        .class("bg-input text-foreground")
                        .attr("type", "text")
                        .attr("placeholder", "calm sunday morning, warm wood, soft light"),
                ),
        )
        .child(
            div()
                .class("grid-showcase gap-13")
                .child(swatch("Terracotta", div().class("bg-primary aspect-landscape")))
                .child(swatch("Sage", div().class("bg-accent aspect-landscape")))
                .child(swatch("Linen", div().class("bg-secondary aspect-landscape"))),
        ))
}

fn swatch(name: &str, tone: Element) -> Element {
    div()
        .class("bg-card shadow-subtle animate-slide-up")
        .child(tone)
        .child(
            div()
                .class("p-13")
                .child(div().class("text-title text-card-foreground").text(name)),
        )
}
