use crate::{Element, div, h2, p};

/// Runs a fallible view render inside the containment boundary. A failed
/// render is logged and replaced with the generic fallback so the rest of
/// the application keeps working.
pub fn contain(render: impl FnOnce() -> anyhow::Result<Element>) -> Element {
    match render() {
        Ok(element) => element,
        Err(err) => {
            tracing::error!("view render failed: {err:#}");
            fallback()
        }
    }
}

pub fn fallback() -> Element {
    div()
        .class("render-fallback")
        .child(h2().text("Something went wrong"))
        .child(p().text("This page failed to load. The rest of the app is still available."))
        .child(a_home())
}

fn a_home() -> Element {
    crate::a().href("/").class("button").text("Back to home")
}
