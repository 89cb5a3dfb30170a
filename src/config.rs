//! Configuration management
//!
//! Colours and render preferences, read from a TOML config file.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::color_space::Rgb;
use crate::residues::ResiduePalette;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub palette: ResiduePalette,
    pub highlight: HighlightColors,
    pub render: RenderPreferences,
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path must exist. Otherwise the per-user config file is
    /// used when present, and the built-in defaults when not.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Config::default()),
        }
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;
        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Render the configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Get the per-user configuration file path
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("org", "seqcolor", "seqcolor")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

/// Colours used when a highlight range is requested
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightColors {
    pub inside: Rgb,
    pub outside: Rgb,
}

impl Default for HighlightColors {
    fn default() -> Self {
        Self {
            inside: Rgb::new(0x4C, 0xC8, 0xD9),
            outside: Rgb::new(0x33, 0x2D, 0x28),
        }
    }
}

/// Image rendering preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderPreferences {
    /// Glyph size in points
    pub font_size: f32,
    pub number_color: Rgb,
    /// Used when the image is not saved with transparency
    pub background: Rgb,
    /// Space kept around the content after cropping, in pixels
    pub padding: u32,
    /// TrueType/OpenType font; the built-in bitmap font when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<PathBuf>,
}

impl Default for RenderPreferences {
    fn default() -> Self {
        Self {
            font_size: 40.0,
            number_color: Rgb::new(0x26, 0x26, 0x26),
            background: Rgb::new(0xFF, 0xFF, 0xFF),
            padding: 10,
            font: None,
        }
    }
}
