use vitrine::{Element, div, h2, p, section, span};

pub fn render() -> anyhow::Result<Element> {
    Ok(section()
        .class("animate-fade-in")
        .child(
            div()
                .class("p-13")
                .child(h2().class("text-headline tracking-tight").text("Furniture Universe"))
                .child(
                    p().class("text-body leading-relaxed text-muted-foreground")
                        .text(
                            "The full catalog, every piece scanned in 3D and ready to \
                             drop into your room.",
                        ),
                ),
        )
        .child(
            div()
                .class("grid-catalog gap-13")
                .child(piece("Alva sofa", "Sofas", "$1,290"))
                .child(piece("Loom side table", "Tables", "$120"))
                .child(piece("Duna floor lamp", "Lighting", "$180"))
                .child(piece("Fjell bookshelf", "Storage", "$460"))
                .child(piece("Nook armchair", "Chairs", "$540"))
                .child(piece("Strand rug", "Textiles", "$320")),
        ))
}

fn piece(name: &str, category: &str, price: &str) -> Element {
    div()
        .class("bg-card shadow-subtle animate-scale-in")
        .child(div().class("bg-muted aspect-square"))
        .child(
            div()
                .class("p-13")
                .child(span().class("text-caption tracking-wide text-muted-foreground").text(category))
                .child(div().class("text-title text-card-foreground").text(name))
                .child(span().class("text-body text-primary").text(price)),
        )
}
