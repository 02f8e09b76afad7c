use vitrine::{Element, div, h2, li, p, section, span, ul};

pub fn render() -> anyhow::Result<Element> {
    Ok(section()
        .class("animate-fade-in")
        .child(
            div()
                .class("p-13")
                .child(h2().class("text-headline tracking-tight").text("Spatial Cart"))
                .child(
                    p().class("text-body leading-relaxed text-muted-foreground")
                        .text(
                            "Items you add are kept in the arrangement you gave them, \
                             so checkout matches the room you composed.",
                        ),
                ),
        )
        .child(
            ul().class("bg-card shadow-soft p-13")
                .child(cart_line("Alva three-seater sofa", "1", "$1,290"))
                .child(cart_line("Loom oak side table", "2", "$240"))
                .child(cart_line("Duna floor lamp", "1", "$180")),
        )
        .child(
            div()
                .class("p-13")
                .child(
                    span()
                        .class("text-title text-foreground")
                        .text("Total: $1,950"),
                )
                .child(
                    p().class("text-caption text-muted-foreground")
                        .text("Placement is saved with the order for delivery day."),
                ),
        ))
}

fn cart_line(name: &str, quantity: &str, price: &str) -> Element {
    li().class("text-body leading-normal text-card-foreground")
        .child(span().text(name))
        .child(span().class("text-caption text-muted-foreground").text(&format!(" × {quantity}")))
        .child(span().class("text-caption text-success").text(&format!(" {price}")))
}
