use crate::js::scroll::scroll_js;
use crate::js::theme::theme_js_with_options;
use crate::styling::scan::{ContentScan, filter_used};
use crate::styling::tokens::DesignTokens;
use crate::styling::utilities::{generate, stylesheet};
use crate::{
    Element, FooterBuilder, HeaderBuilder, Link, NavPanelBuilder, PageBuilder, Script, Theme,
    boundary, div, theme_shared,
};
use std::path::Path;
use strum::IntoEnumIterator;

const FONTAWESOME_CSS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.7.2/css/all.min.css";

/// Assembles a full page around the chrome shared by every view.
#[derive(Clone, Debug)]
pub struct AppBuilder {
    title: String,
    default_theme: Theme,
    links: Vec<Link>,
    scripts: Vec<Script>,
    supported_themes: Vec<Theme>,
    header: Option<Element>,
    content: Option<Element>,
    footer: Option<Element>,
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self {
            title: String::new(),
            default_theme: Theme::Dark,
            links: Vec::new(),
            scripts: Vec::new(),
            supported_themes: Theme::iter().collect(),
            header: None,
            content: None,
            footer: None,
        }
    }
}

impl AppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, value: impl Into<String>) -> Self {
        self.title = value.into();
        self
    }

    pub fn default_theme(mut self, value: Theme) -> Self {
        self.default_theme = value;
        self
    }

    pub fn links(mut self, value: Vec<Link>) -> Self {
        self.links = value;
        self
    }

    pub fn scripts(mut self, value: Vec<Script>) -> Self {
        self.scripts = value;
        self
    }

    pub fn supported_themes(mut self, value: Vec<Theme>) -> Self {
        self.supported_themes = value;
        self
    }

    pub fn header(mut self, value: Element) -> Self {
        self.header = Some(value);
        self
    }

    pub fn page_content(mut self, value: Element) -> Self {
        self.content = Some(value);
        self
    }

    pub fn footer(mut self, value: Element) -> Self {
        self.footer = Some(value);
        self
    }

    pub fn build(self) -> String {
        let mut links = vec![
            Link::new("stylesheet", FONTAWESOME_CSS),
            Link::new("stylesheet", "/assets/css/style.css"),
        ];
        self.supported_themes.iter().for_each(|theme| {
            links.push(Link::new(
                "stylesheet",
                &format!("/assets/css/themes/{theme}.css"),
            ))
        });
        links.extend(self.links);

        let mut scripts = vec![
            Script::new("/assets/js/theme.js"),
            Script::new("/assets/js/scroll.js"),
        ];
        scripts.extend(self.scripts);

        let app = div()
            .class("app")
            .child_opt(self.header)
            .child(
                crate::content()
                    .child(div().class("content-inner").child_opt(self.content)),
            )
            .child_opt(self.footer);

        PageBuilder::new()
            .title(self.title)
            .html_attr("data-theme", &self.default_theme.to_string())
            .links(links)
            .scripts(scripts)
            .content(app)
            .build()
    }
}

/// Writes the generated assets: the shared stylesheet with the utility
/// classes referenced under `content_root`, one stylesheet per supported
/// theme, and the client-side glue scripts.
pub fn create_asset_files(
    dist: &Path,
    content_root: &Path,
    tokens: &DesignTokens,
    scan: &ContentScan,
    default_theme: Theme,
    supported_themes: &[Theme],
) -> anyhow::Result<()> {
    let used = scan.referenced_classes(content_root)?;
    let utilities = filter_used(generate(tokens), &used);

    let css_dir = dist.join("assets/css");
    std::fs::create_dir_all(css_dir.join("themes"))?;

    let mut style = theme_shared();
    style.push('\n');
    style.push_str(&stylesheet(&utilities));
    std::fs::write(css_dir.join("style.css"), style)?;

    for theme in supported_themes {
        std::fs::write(
            css_dir.join(format!("themes/{theme}.css")),
            theme.stylesheet(),
        )?;
    }

    let js_dir = dist.join("assets/js");
    std::fs::create_dir_all(&js_dir)?;
    std::fs::write(
        js_dir.join("theme.js"),
        theme_js_with_options(&default_theme.to_string(), supported_themes),
    )?;
    std::fs::write(js_dir.join("scroll.js"), scroll_js())?;

    Ok(())
}

#[derive(Clone, Debug)]
pub struct AppShellBuilder {
    title: String,
    default_theme: Theme,
    header_label: String,
    footer_label: String,
    with_nav: bool,
    header: Option<Element>,
    footer: Option<Element>,
    links: Vec<Link>,
    scripts: Vec<Script>,
    supported_themes: Option<Vec<Theme>>,
}

impl Default for AppShellBuilder {
    fn default() -> Self {
        Self {
            title: "Vitrine".to_string(),
            default_theme: Theme::Dark,
            header_label: String::new(),
            footer_label: String::new(),
            with_nav: true,
            header: None,
            footer: None,
            links: Vec::new(),
            scripts: Vec::new(),
            supported_themes: None,
        }
    }
}

impl AppShellBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, value: impl Into<String>) -> Self {
        self.title = value.into();
        self
    }

    pub fn default_theme(mut self, value: Theme) -> Self {
        self.default_theme = value;
        self
    }

    pub fn header_label(mut self, value: impl Into<String>) -> Self {
        self.header_label = value.into();
        self
    }

    pub fn footer_label(mut self, value: impl Into<String>) -> Self {
        self.footer_label = value.into();
        self
    }

    pub fn with_nav(mut self, value: bool) -> Self {
        self.with_nav = value;
        self
    }

    pub fn header(mut self, value: Element) -> Self {
        self.header = Some(value);
        self
    }

    pub fn footer(mut self, value: Element) -> Self {
        self.footer = Some(value);
        self
    }

    pub fn links(mut self, value: Vec<Link>) -> Self {
        self.links = value;
        self
    }

    pub fn scripts(mut self, value: Vec<Script>) -> Self {
        self.scripts = value;
        self
    }

    pub fn supported_themes(mut self, value: Vec<Theme>) -> Self {
        self.supported_themes = Some(value);
        self
    }

    pub fn build(self) -> AppShell {
        let mut supported_themes = self
            .supported_themes
            .unwrap_or_else(|| Theme::iter().collect::<Vec<_>>());
        if supported_themes.is_empty() {
            supported_themes = Theme::iter().collect::<Vec<_>>();
        }
        let default_theme = if supported_themes.contains(&self.default_theme) {
            self.default_theme
        } else {
            supported_themes[0]
        };

        let header = self.header.unwrap_or_else(|| {
            let nav_panel = NavPanelBuilder::new()
                .default_theme(default_theme)
                .supported_themes(supported_themes.clone())
                .build();
            let mut builder = HeaderBuilder::new().label(self.header_label);
            if self.with_nav {
                builder = builder.with_nav(nav_panel);
            }
            builder.build()
        });

        let footer = self
            .footer
            .unwrap_or_else(|| FooterBuilder::new().label(self.footer_label).build());

        let base = AppBuilder::new()
            .title(self.title)
            .default_theme(default_theme)
            .links(self.links)
            .scripts(self.scripts)
            .supported_themes(supported_themes.clone())
            .header(header)
            .footer(footer);

        AppShell {
            base,
            default_theme,
            supported_themes,
        }
    }
}

/// The built shell. Pages share its chrome; rendering goes through the
/// containment boundary via [`AppShell::guarded_page`].
#[derive(Clone, Debug)]
pub struct AppShell {
    base: AppBuilder,
    default_theme: Theme,
    supported_themes: Vec<Theme>,
}

impl AppShell {
    pub fn page(&self, content: Element) -> String {
        self.base.clone().page_content(content).build()
    }

    pub fn guarded_page(&self, render: impl FnOnce() -> anyhow::Result<Element>) -> String {
        self.page(boundary::contain(render))
    }

    pub fn default_theme(&self) -> Theme {
        self.default_theme
    }

    pub fn supported_themes(&self) -> &[Theme] {
        &self.supported_themes
    }
}
