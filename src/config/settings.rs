//! Application configuration
//!
//! Read from `~/.tidings/config.toml` (all keys optional, merged over
//! defaults). Writes go through `toml_edit` so hand-written content and
//! comments in the file survive a theme change.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use toml_edit::{DocumentMut, Item, Table};

use crate::share::Theme;
use crate::util::paths::config_path;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Theme seeded at startup, before any shared link is applied
    pub theme: Theme,
    /// Base URL the share link is composed against
    pub base_url: String,
    /// Number of snowflakes in the falling-snow field
    pub snowflakes: usize,
    /// Particles per confetti burst
    pub confetti_particles: usize,
    /// Soft message length for the character counter (display only)
    pub message_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            base_url: "https://tidings.example/card".to_string(),
            snowflakes: 130,
            confetti_particles: 180,
            message_limit: 140,
        }
    }
}

/// TOML representation of the `[theme]` section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlThemeConfig {
    /// "light" or "dark"; anything else is ignored with a warning
    pub name: Option<String>,
}

/// TOML representation of the `[share]` section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlShareConfig {
    pub base_url: Option<String>,
}

/// TOML representation of the `[fx]` section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlFxConfig {
    pub snowflakes: Option<usize>,
    pub confetti_particles: Option<usize>,
}

/// TOML representation of the config file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub theme: Option<TomlThemeConfig>,
    pub share: Option<TomlShareConfig>,
    pub fx: Option<TomlFxConfig>,
}

impl Config {
    /// Load the config file, merging any present keys over defaults.
    /// A missing file is the normal first-run case; an unparseable file is
    /// logged and ignored.
    pub fn load() -> Self {
        Self::load_from(&config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(_) => return Self::default(),
        };

        match toml::from_str::<TomlConfig>(&contents) {
            Ok(parsed) => Self::from_toml(parsed),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Ignoring unparseable config");
                Self::default()
            }
        }
    }

    fn from_toml(parsed: TomlConfig) -> Self {
        let mut config = Self::default();

        if let Some(theme) = parsed.theme.and_then(|t| t.name) {
            match theme.parse() {
                Ok(theme) => config.theme = theme,
                Err(()) => {
                    tracing::warn!(theme = %theme, "Unknown theme name in config, keeping default")
                }
            }
        }
        if let Some(base_url) = parsed.share.and_then(|s| s.base_url) {
            config.base_url = base_url;
        }
        if let Some(fx) = parsed.fx {
            if let Some(snowflakes) = fx.snowflakes {
                config.snowflakes = snowflakes;
            }
            if let Some(confetti) = fx.confetti_particles {
                config.confetti_particles = confetti;
            }
        }

        config
    }
}

/// Save the selected theme to the config file.
///
/// Updates only `[theme] name`, preserving all other content.
pub fn save_theme_config(theme: Theme) -> std::io::Result<()> {
    save_theme_to(&config_path(), theme)
}

pub fn save_theme_to(path: &Path, theme: Theme) -> std::io::Result<()> {
    // Read existing config or start with empty document
    let contents = if path.exists() {
        fs::read_to_string(path)?
    } else {
        String::new()
    };

    let mut doc: DocumentMut = contents
        .parse()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

    if !doc.contains_key("theme") {
        doc["theme"] = Item::Table(Table::new());
    }
    doc["theme"]["name"] = toml_edit::value(theme.as_str());

    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, doc.to_string())?;

    Ok(())
}
