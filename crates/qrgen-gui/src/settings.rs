//! Application settings.
//!
//! Settings are read once at startup from `settings.toml` in the user's config
//! directory. The application never writes the file. A missing file means
//! defaults; an unreadable or malformed one is reported and then replaced by
//! defaults.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::logging::LogFormat;

/// Why the settings file could not be used.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Read(#[from] std::io::Error),

    #[error("malformed settings file: {0}")]
    Parse(#[from] toml::de::Error),
}

// =============================================================================
// ROOT SETTINGS
// =============================================================================

/// Application settings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// General application settings.
    pub general: GeneralSettings,

    /// Display settings.
    pub display: DisplaySettings,

    /// Logging settings.
    pub logging: LoggingSettings,
}

impl Settings {
    /// Read settings from a specific path.
    ///
    /// A missing file is not an error and yields defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read_from(path: &Path) -> Result<Self, SettingsError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::parse(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(SettingsError::Read(e)),
        }
    }

    /// Parse TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is malformed.
    pub fn parse(content: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(content)?)
    }

    /// Get the default config file path.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "QrGen", "QR Code Generator")
            .map(|dirs| dirs.config_dir().join("settings.toml"))
            .unwrap_or_else(|| PathBuf::from("settings.toml"))
    }
}

// =============================================================================
// SECTIONS
// =============================================================================

/// General settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Initial input text, restored by Clear.
    pub placeholder: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            placeholder: qrgen_core::DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

/// Display settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Edge length of the preview image, in pixels.
    pub preview_size: u32,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self { preview_size: 300 }
    }
}

impl DisplaySettings {
    /// Preview size clamped to something drawable.
    pub fn preview_size(&self) -> u32 {
        self.preview_size.clamp(64, 1024)
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// One of `error`, `warn`, `info`, `debug`, `trace`.
    pub level: String,
    /// Output format.
    pub format: LogFormat,
    /// Append logs to this file instead of stderr.
    pub file: Option<PathBuf>,
    /// Colored output (ignored when logging to a file).
    pub ansi: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
            file: None,
            ansi: true,
        }
    }
}
