use vitrine::{Element, a, div, h2, p, section, span};

pub fn render() -> anyhow::Result<Element> {
    Ok(section()
        .class("animate-fade-in")
        .child(
            div()
                .class("p-13")
                .child(h2().class("text-headline tracking-tight").text("My Spaces"))
                .child(
                    p().class("text-body leading-relaxed text-muted-foreground")
                        .text(
                            "Every room you have scanned stays here as a project: its \
                             plan, its palette, and the pieces you placed.",
                        ),
                ),
        )
        .child(
            div()
                .class("grid-catalog gap-13")
                .child(project_card("Living room", "4 pieces placed", "Updated yesterday"))
                .child(project_card("Bedroom", "2 pieces placed", "Updated last week"))
                .child(project_card("Studio", "Empty plan", "Created today")),
        ))
}

fn project_card(name: &str, summary: &str, updated: &str) -> Element {
    a().href("/my-spaces-project-management")
        .class("bg-card shadow-subtle animate-slide-up")
        .child(div().class("bg-muted aspect-landscape"))
        .child(
            div()
                .class("p-13")
                .child(div().class("text-title text-card-foreground").text(name))
                .child(span().class("text-caption text-muted-foreground").text(summary))
                .child(div().class("text-caption text-muted-foreground").text(updated)),
        )
}
