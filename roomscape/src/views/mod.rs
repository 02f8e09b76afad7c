use crate::routes::View;
use vitrine::Element;

mod camera_portal;
mod catalog;
mod home;
mod measurement_tools;
mod mood_generator;
mod my_spaces;
mod not_found;
mod spatial_cart;

/// Renders the content of a view. Callers wrap this in the shell's
/// containment boundary; a failing render never escapes past it.
pub fn render(view: View) -> anyhow::Result<Element> {
    match view {
        View::Home => home::render(),
        View::MoodGenerator => mood_generator::render(),
        View::SpatialCart => spatial_cart::render(),
        View::CameraPortal => camera_portal::render(),
        View::MeasurementTools => measurement_tools::render(),
        View::MySpaces => my_spaces::render(),
        View::Catalog => catalog::render(),
        View::NotFound => not_found::render(),
    }
}
