use crate::Theme;
use strum::IntoEnumIterator;

pub fn theme_js(default_theme: &str) -> String {
    let themes = Theme::iter().collect::<Vec<_>>();
    theme_js_with_options(default_theme, &themes)
}

/// Client-side theme switching. Every theme stylesheet is loaded up front
/// and scoped by `:root[data-theme=…]`; switching sets the attribute on the
/// document element and persists the choice in a cookie.
pub fn theme_js_with_options(default_theme: &str, supported_themes: &[Theme]) -> String {
    let themes = supported_themes
        .iter()
        .map(|theme| format!("\"{theme}\""))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        r#"// ---- Theme Configuration ----
const DEFAULT_THEME = "{default_theme}";
const THEME_COOKIE = "roomscape-theme";
const THEMES = [{themes}];

// ---- Cookie Utilities ----

function getCookie(name) {{
    const value = `; ${{document.cookie}}`;
    const parts = value.split(`; ${{name}}=`);
    if (parts.length === 2) {{
        return parts.pop().split(";").shift();
    }}
    return null;
}}

function setCookie(name, value, days = 365) {{
    const expires = new Date();
    expires.setTime(expires.getTime() + (days * 24 * 60 * 60 * 1000));
    document.cookie = `${{name}}=${{value}}; expires=${{expires.toUTCString()}}; path=/`;
}}

// ---- Theme Logic ----

function getTheme() {{
    let theme = getCookie(THEME_COOKIE);
    if (!theme || !THEMES.includes(theme)) {{
        theme = DEFAULT_THEME;
        setCookie(THEME_COOKIE, theme);
    }}
    return theme;
}}

function applyTheme(theme) {{
    if (THEMES.includes(theme)) {{
        document.documentElement.dataset.theme = theme;
    }}
}}

function updateTheme(newTheme) {{
    if (!THEMES.includes(newTheme)) return;
    setCookie(THEME_COOKIE, newTheme);
    applyTheme(newTheme);
    window.dispatchEvent(new Event("themeChanged"));
}}

// ---- On Page Load ----

document.addEventListener("DOMContentLoaded", () => {{
    applyTheme(getTheme());
}});
"#
    )
    .trim()
    .to_string()
}
