use roomscape::config::RoomscapeConfig;
use vitrine::Theme;

#[test]
fn test_default_config() {
    let config = RoomscapeConfig::default();
    assert_eq!(config.server.addr, "127.0.0.1:3000");
    assert_eq!(config.theme.default, "dark");
    assert_eq!(config.content.dist, "dist");
    assert!(!config.content.globs.is_empty());
}

#[test]
fn test_parse_config() {
    let toml_str = r#"
[server]
addr = "0.0.0.0:8080"

[theme]
default = "light"

[content]
root = "."
dist = "out"
globs = ["roomscape/src/**/*.rs"]
    "#;
    let config: RoomscapeConfig = toml::from_str(toml_str).unwrap();
    assert_eq!(config.server.addr, "0.0.0.0:8080");
    assert_eq!(config.default_theme(), Theme::Light);
    assert_eq!(config.content.dist, "out");
    assert_eq!(config.content.globs.len(), 1);
}

#[test]
fn test_unknown_theme_falls_back_to_dark() {
    let config: RoomscapeConfig = toml::from_str("[theme]\ndefault = \"sepia\"\n").unwrap();
    assert_eq!(config.default_theme(), Theme::Dark);
}

#[test]
fn test_partial_config_keeps_defaults() {
    let config: RoomscapeConfig = toml::from_str("[server]\naddr = \"127.0.0.1:4000\"\n").unwrap();
    assert_eq!(config.server.addr, "127.0.0.1:4000");
    assert_eq!(config.theme.default, "dark");
}
