use vitrine::{Element, a, div, h2, p, section};

pub fn render() -> anyhow::Result<Element> {
    Ok(section()
        .class("animate-fade-in")
        .child(
            div()
                .class("bg-card shadow-medium p-15")
                .child(h2().class("text-headline tracking-tight").text("Page not found"))
                .child(
                    p().class("text-body leading-relaxed text-muted-foreground")
                        .text("Nothing lives at this address. The rooms you know are still here."),
                )
                .child(a().href("/").class("button").text("Back to home")),
        ))
}
