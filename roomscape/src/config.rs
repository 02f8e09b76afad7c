use anyhow::Result;
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use vitrine::Theme;
use vitrine::styling::scan::ContentScan;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RoomscapeConfig {
    pub server: ServerConfig,
    pub theme: ThemeConfig,
    pub content: ContentConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: "127.0.0.1:3000".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub default: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            default: "dark".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    pub root: String,
    pub dist: String,
    pub globs: Vec<String>,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            root: ".".to_string(),
            dist: "dist".to_string(),
            globs: crate::tokens::content_scan().patterns().to_vec(),
        }
    }
}

impl RoomscapeConfig {
    /// Reads the TOML config, falling back to defaults when the file is
    /// absent, then applies environment overrides.
    pub fn load(path: &Path) -> Result<Self> {
        let mut config = match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content)?,
            Err(_) => Self::default(),
        };
        config.apply_env_overrides();
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if envmnt::exists("ROOMSCAPE_ADDR") {
            self.server.addr = envmnt::get_or("ROOMSCAPE_ADDR", &self.server.addr);
        }
        if envmnt::exists("ROOMSCAPE_THEME") {
            self.theme.default = envmnt::get_or("ROOMSCAPE_THEME", &self.theme.default);
        }
    }

    /// An unknown theme name falls back to the dark default.
    pub fn default_theme(&self) -> Theme {
        Theme::from_str(&self.theme.default).unwrap_or_else(|_| {
            tracing::warn!("unknown theme `{}`, using dark", self.theme.default);
            Theme::Dark
        })
    }

    pub fn scan(&self) -> ContentScan {
        ContentScan::new().globs(self.content.globs.iter().cloned())
    }
}
