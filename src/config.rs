//! Configuration loader plus strongly typed settings structures.
//!
//! Deserializes the config.toml we ship (embedded at compile time) or a
//! user-provided override, and exposes validation used by the
//! `validate-config` subcommand. Every field is defaulted so an empty
//! file is valid.

use crate::theme::parse_color;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

// Embed the default configuration file at compile time
const DEFAULT_CONFIG: &str = include_str!("../defaults/config.toml");

/// Top-level configuration object
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub colors: ColorConfig,
}

/// UI behavior settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event poll timeout in milliseconds (frame rate cap)
    #[serde(default = "default_poll_ms")]
    pub poll_ms: u64,
    /// Whether to capture mouse events
    #[serde(default = "default_mouse_enabled")]
    pub mouse_enabled: bool,
}

fn default_poll_ms() -> u64 {
    16 // ~60 FPS
}

fn default_mouse_enabled() -> bool {
    true
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            poll_ms: default_poll_ms(),
            mouse_enabled: default_mouse_enabled(),
        }
    }
}

/// Hex color strings for each UI slot; resolved by [`crate::theme::Theme`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorConfig {
    #[serde(default = "default_button_color")]
    pub button: String,
    #[serde(default = "default_button_border_color")]
    pub button_border: String,
    #[serde(default = "default_heading_color")]
    pub heading: String,
    #[serde(default = "default_link_color")]
    pub link: String,
    /// "-" means transparent (terminal default)
    #[serde(default = "default_background_color")]
    pub background: String,
}

fn default_button_color() -> String {
    "#e0e0e0".to_string()
}

fn default_button_border_color() -> String {
    "#60b4bf".to_string()
}

fn default_heading_color() -> String {
    "#a2e57b".to_string()
}

fn default_link_color() -> String {
    "#477ab3".to_string()
}

fn default_background_color() -> String {
    "-".to_string()
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            button: default_button_color(),
            button_border: default_button_border_color(),
            heading: default_heading_color(),
            link: default_link_color(),
            background: default_background_color(),
        }
    }
}

impl Config {
    /// Load configuration from the default location, falling back to the
    /// embedded default if no user config exists.
    pub fn load() -> Result<Self> {
        let path = Self::config_dir()?.join("config.toml");
        if path.exists() {
            Self::load_from_path(&path)
        } else {
            toml::from_str(DEFAULT_CONFIG).context("Embedded default config is invalid")
        }
    }

    /// Load configuration from an explicit path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file {:?}", path))
    }

    /// Get the base press-me directory (~/.press-me/)
    /// Can be overridden with the PRESS_ME_DIR environment variable
    fn config_dir() -> Result<PathBuf> {
        if let Ok(custom_dir) = std::env::var("PRESS_ME_DIR") {
            return Ok(PathBuf::from(custom_dir));
        }

        let home = dirs::home_dir().context("Could not find home directory")?;
        Ok(home.join(".press-me"))
    }

    /// Check the loaded values and collect human-readable problems.
    /// Empty result means the config is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.ui.poll_ms == 0 {
            errors.push("ui.poll_ms must be greater than zero".to_string());
        }

        for (name, value) in [
            ("colors.button", &self.colors.button),
            ("colors.button_border", &self.colors.button_border),
            ("colors.heading", &self.colors.heading),
            ("colors.link", &self.colors.link),
        ] {
            if parse_color(value).is_none() {
                errors.push(format!("{} is not a valid hex color: {:?}", name, value));
            }
        }

        let bg = &self.colors.background;
        if bg != "-" && !bg.is_empty() && parse_color(bg).is_none() {
            errors.push(format!(
                "colors.background must be a hex color or \"-\": {:?}",
                bg
            ));
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_default_parses() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).expect("default config must parse");
        assert_eq!(config.ui.poll_ms, 16);
        assert!(config.ui.mouse_enabled);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_empty_toml_yields_defaults() {
        let config: Config = toml::from_str("").expect("empty config must parse");
        assert_eq!(config.ui.poll_ms, 16);
        assert_eq!(config.colors.link, "#477ab3");
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config: Config = toml::from_str("[ui]\npoll_ms = 33\n").unwrap();
        assert_eq!(config.ui.poll_ms, 33);
        assert!(config.ui.mouse_enabled);
        assert_eq!(config.colors.heading, "#a2e57b");
    }

    #[test]
    fn test_validate_rejects_zero_poll() {
        let mut config = Config::default();
        config.ui.poll_ms = 0;
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("poll_ms"));
    }

    #[test]
    fn test_validate_rejects_bad_colors() {
        let mut config = Config::default();
        config.colors.heading = "chartreuse".to_string();
        config.colors.background = "#zzz".to_string();
        let errors = config.validate();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_validate_accepts_transparent_background() {
        let config = Config::default();
        assert_eq!(config.colors.background, "-");
        assert!(config.validate().is_empty());
    }
}
