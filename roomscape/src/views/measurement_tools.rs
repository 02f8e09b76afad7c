use vitrine::{Element, div, h2, h3, p, section};

pub fn render() -> anyhow::Result<Element> {
    Ok(section()
        .class("animate-fade-in")
        .child(
            div()
                .class("p-13")
                .child(
                    h2().class("text-headline tracking-tight")
                        .text("Measurement & Planning"),
                )
                .child(
                    p().class("text-body leading-relaxed text-muted-foreground")
                        .text(
                            "Trace a wall with the camera and get dimensions you can \
                             plan against. Clearances are checked as you place pieces.",
                        ),
                ),
        )
        .child(
            div()
                .class("grid-showcase gap-13")
                .child(tool_card(
                    "Tape measure",
                    "Point, tap both ends, read the distance.",
                ))
                .child(tool_card(
                    "Floor plan",
                    "Walk the room once to capture its outline.",
                ))
                .child(tool_card(
                    "Fit check",
                    "Flags doorways and walkways a piece would block.",
                )),
        ))
}

fn tool_card(title: &str, description: &str) -> Element {
    div()
        .class("bg-card shadow-subtle animate-slide-up p-13")
        .child(h3().class("text-title text-card-foreground").text(title))
        .child(
            p().class("text-caption leading-normal text-muted-foreground")
            .text(description),
        )
}
