//! Configuration management for student-form
//!
//! Only presentation and logging settings live here. Form data is never
//! written to disk, and the subject catalog is fixed in code.
//!
//! Config file location: ~/.config/student-form/config.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const APP_DIR: &str = "student-form";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme: ThemeName,

    /// tracing filter directive, e.g. "info" or "student_form=debug"
    pub log_level: String,
    pub log_to_file: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemeName::Gruvbox,
            log_level: "info".to_string(),
            log_to_file: false,
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join(APP_DIR);
        Ok(config_dir.join("config.toml"))
    }

    /// Where the log file goes when `log_to_file` is on
    pub fn log_path() -> Result<PathBuf> {
        let data_dir = dirs::data_dir()
            .context("Could not determine data directory")?
            .join(APP_DIR);
        Ok(data_dir.join("student-form.log"))
    }

    /// Load config from file, or create default if not exists
    pub fn load() -> Result<Self> {
        let path = Self::path()?;

        if !path.exists() {
            let config = Config::default();
            config.save()?;
            return Ok(config);
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        Self::parse(&content).with_context(|| format!("Failed to parse config from {:?}", path))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            fs::set_permissions(&path, perms)?;
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Gruvbox,
    Nord,
    Catppuccin,
    Dracula,
    Transparent,
}

impl ThemeName {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeName::Gruvbox => "Gruvbox",
            ThemeName::Nord => "Nord",
            ThemeName::Catppuccin => "Catppuccin",
            ThemeName::Dracula => "Dracula",
            ThemeName::Transparent => "Transparent",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            ThemeName::Gruvbox => ThemeName::Nord,
            ThemeName::Nord => ThemeName::Catppuccin,
            ThemeName::Catppuccin => ThemeName::Dracula,
            ThemeName::Dracula => ThemeName::Transparent,
            ThemeName::Transparent => ThemeName::Gruvbox,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.theme, ThemeName::Gruvbox);
        assert_eq!(config.log_level, "info");
        assert!(!config.log_to_file);
    }

    #[test]
    fn test_theme_cycle() {
        assert_eq!(ThemeName::Gruvbox.next(), ThemeName::Nord);
        let mut t = ThemeName::Gruvbox;
        for _ in 0..5 {
            t = t.next();
        }
        assert_eq!(t, ThemeName::Gruvbox);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config = Config::parse("theme = \"dracula\"\n").unwrap();
        assert_eq!(config.theme, ThemeName::Dracula);
        assert_eq!(config.log_level, "info");
        assert!(!config.log_to_file);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = Config {
            theme: ThemeName::Nord,
            log_level: "student_form=debug".to_string(),
            log_to_file: true,
        };
        let text = toml::to_string_pretty(&config).unwrap();
        assert_eq!(Config::parse(&text).unwrap(), config);
    }

    #[test]
    fn test_unknown_theme_is_rejected() {
        assert!(Config::parse("theme = \"solarized\"\n").is_err());
    }
}
