use crate::styles::common::{elements, layout, modal, root};
use crate::styling::css::CssRule;
use strum_macros::{Display, EnumIter, EnumString};

pub mod dark;
pub mod light;

/// A theme supplies the concrete CSS custom properties that design tokens
/// reference by indirection.
pub trait ThemeSpec {
    fn variables() -> Vec<CssRule>;

    fn render() -> String {
        Self::variables()
            .into_iter()
            .map(|rule| rule.render())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumIter, EnumString, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn stylesheet(self) -> String {
        match self {
            Theme::Light => light::LightTheme::render(),
            Theme::Dark => dark::DarkTheme::render(),
        }
    }

    pub fn variable_rules(self) -> Vec<CssRule> {
        match self {
            Theme::Light => light::LightTheme::variables(),
            Theme::Dark => dark::DarkTheme::variables(),
        }
    }
}

/// The base stylesheet shared by every theme.
pub fn theme_shared() -> String {
    shared_rules()
        .into_iter()
        .map(|rule| rule.render())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn shared_rules() -> Vec<CssRule> {
    vec![root(), layout(), elements(), modal()]
        .into_iter()
        .flatten()
        .collect()
}
