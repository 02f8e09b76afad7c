pub use crate::framework::{
    AppBuilder, AppShell, AppShellBuilder, FooterBuilder, HeaderBuilder, NavPanelBuilder, Theme,
    ThemeSpec, boundary, create_asset_files,
    router::{RouteTable, RouteTableBuilder},
    theme_shared,
};
pub use crate::html::{
    Element, Link, PageBuilder, Script, a, button, content, div, element, footer, h1, h2, h3,
    header, i, input, label, li, nav, option, p, script, section, select, span, style, ul,
};
pub use crate::styling::{
    StyleError,
    css::CssRule,
    scan::ContentScan,
    tokens::{ColorRole, DesignTokens, Keyframes, TokenValue},
    utilities::{Utility, generate, stylesheet},
};
