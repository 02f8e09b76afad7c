use crate::dom::{on_dom_ready, set_select_value, toggle_modal, update_from_select};
use crate::{Element, Theme, div, i, label, nav, option, script, select};
use strum::IntoEnumIterator;

fn toggle_nav() -> String {
    toggle_modal("modal-overlay", "modal-side", "show")
}

pub fn nav_button() -> Element {
    nav()
        .on_click(&toggle_nav())
        .child(i().class("fas").class("fa-grip"))
}

/// The slide-out settings panel: theme selection.
#[derive(Clone, Debug, Default)]
pub struct NavPanelBuilder {
    pub default_theme: Option<Theme>,
    pub supported_themes: Option<Vec<Theme>>,
}

impl NavPanelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn default_theme(mut self, default_theme: Theme) -> Self {
        self.default_theme = Some(default_theme);
        self
    }

    pub fn supported_themes(mut self, supported_themes: Vec<Theme>) -> Self {
        self.supported_themes = Some(supported_themes);
        self
    }

    pub fn build(self) -> Element {
        let on_load = on_dom_ready(&set_select_value("theme-select", "getTheme"));

        div()
            .child(div().class("modal-overlay").on_click(&toggle_nav()))
            .child(
                div().class("modal-side").child(
                    div()
                        .class("modal-content")
                        .child(label().text("Theme"))
                        .child(self.select_theme()),
                ),
            )
            .child(script(on_load).raw().defer())
    }

    fn select_theme(&self) -> Element {
        let themes = self
            .supported_themes
            .clone()
            .unwrap_or_else(|| Theme::iter().collect::<Vec<_>>());
        let default_theme = self.default_theme.unwrap_or(Theme::Dark).to_string();

        let mut element = select()
            .id("theme-select")
            .attr("value", &default_theme)
            .on_change(&update_from_select("theme-select", "updateTheme"));

        for theme in themes {
            let theme = theme.to_string();
            element = element.child(option().attr("value", &theme).text(&theme));
        }

        element
    }
}
