use crate::routes::View;
use strum::IntoEnumIterator;
use vitrine::{Element, a, div, h1, p, section};

pub fn render() -> anyhow::Result<Element> {
    let mut cards = div().class("grid-showcase gap-13");
    for view in View::iter() {
        if view == View::Home || view == View::NotFound {
            continue;
        }
        if let Some(path) = view.path() {
            cards = cards.child(experience_card(path, view.title(), tagline(view)));
        }
    }

    Ok(section()
        .class("animate-fade-in")
        .child(
            div()
                .class("p-15")
                .child(
                    h1().class("text-display tracking-tight text-foreground")
                        .text("See it in your space before you buy it"),
                )
                .child(
                    p().class("text-body leading-relaxed text-muted-foreground")
                        .text(
                            "Point your camera at a room and Roomscape places furniture \
                             at true scale, measures what fits, and keeps every project \
                             in one place.",
                        ),
                ),
        )
        .child(cards))
}

fn experience_card(href: &str, title: &str, description: &str) -> Element {
    a().href(href)
        .class("bg-card border-border shadow-soft animate-slide-up")
        .child(
            div()
                .class("p-13")
                .child(div().class("text-title text-card-foreground").text(title))
                .child(
                    div()
                        .class("text-caption leading-normal text-muted-foreground")
                        .text(description),
                ),
        )
}

fn tagline(view: View) -> &'static str {
    match view {
        View::MoodGenerator => "Describe a mood and get a curated room palette.",
        View::SpatialCart => "Your cart, arranged in the room it is meant for.",
        View::CameraPortal => "Step through the lens into a furnished version of your room.",
        View::MeasurementTools => "Measure walls and floors straight from the camera.",
        View::MySpaces => "Every room you have scanned, saved as a project.",
        View::Catalog => "Browse the full furniture universe in 3D.",
        _ => "",
    }
}
