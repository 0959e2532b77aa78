//! Persisted display preferences.
//!
//! The CLI keeps one small preference file next to the session store:
//! read once at startup, written only by `gantry config`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Color output preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Respect the terminal's capabilities.
    #[default]
    Auto,
    /// Force colored output.
    Always,
    /// Disable colored output.
    Never,
}

/// CLI preferences persisted across runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    /// Color output mode.
    #[serde(default)]
    pub color: ColorMode,
}

impl Preferences {
    fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "gantry").map(|dirs| dirs.config_dir().join("prefs.json"))
    }

    /// Load preferences from a file, defaulting when it does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let json = fs::read_to_string(path).context("Failed to read preferences")?;
        serde_json::from_str(&json).context("Invalid preferences file")
    }

    /// Write preferences to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).context("Failed to create config directory")?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).context("Failed to write preferences")
    }

    /// Load preferences from the platform config directory.
    pub fn load_default() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    /// Save preferences to the platform config directory.
    pub fn save_default(&self) -> Result<()> {
        let path = Self::default_path().context("Could not determine config directory")?;
        self.save(&path)
    }
}

/// Apply the stored color preference before any output happens.
///
/// Preferences are cosmetic; a missing or unreadable file falls back to
/// auto detection.
pub fn apply_color_preference() {
    match Preferences::load_default() {
        Ok(prefs) => match prefs.color {
            ColorMode::Auto => {}
            ColorMode::Always => colored::control::set_override(true),
            ColorMode::Never => colored::control::set_override(false),
        },
        Err(err) => tracing::debug!(error = %err, "Ignoring unreadable preferences"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = Preferences::load(&dir.path().join("prefs.json")).unwrap();
        assert_eq!(prefs.color, ColorMode::Auto);
    }

    #[test]
    fn save_and_reload_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        let prefs = Preferences {
            color: ColorMode::Never,
        };
        prefs.save(&path).unwrap();

        let reloaded = Preferences::load(&path).unwrap();
        assert_eq!(reloaded, prefs);
    }
}
