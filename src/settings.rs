//! Application settings
//!
//! Read-only preferences loaded once at startup. The mockup never writes
//! them back.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Narrowest sidebar the layout supports
pub const MIN_SIDEBAR_WIDTH: f32 = 180.0;
/// Widest sidebar the layout supports
pub const MAX_SIDEBAR_WIDTH: f32 = 360.0;

/// Application settings
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    /// Display and interface settings
    pub display: DisplaySettings,
    /// Initial window geometry
    pub window: WindowSettings,
}

/// Display-related settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Use the dark palette
    pub dark_mode: bool,
    /// Interface language code ("en" or "zh")
    pub language: String,
    /// Fade hover highlights in and out
    pub animations: bool,
}

/// Window geometry
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub width: f32,
    pub height: f32,
    /// Fixed width of the left column
    pub sidebar_width: f32,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            language: "en".to_string(),
            animations: true,
        }
    }
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
            sidebar_width: 240.0,
        }
    }
}

impl WindowSettings {
    /// Sidebar width limited to what the layout supports
    pub fn clamped_sidebar_width(&self) -> f32 {
        if self.sidebar_width.is_finite() {
            self.sidebar_width
                .clamp(MIN_SIDEBAR_WIDTH, MAX_SIDEBAR_WIDTH)
        } else {
            WindowSettings::default().sidebar_width
        }
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "music-app", "MusicApp")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = Self::file_path() else {
            tracing::warn!("Could not determine config directory, using default settings");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!("No settings file at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::load_from_file(&path) {
            Ok(settings) => {
                tracing::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                tracing::warn!("Ignoring settings file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        Self::from_json(&content)
    }

    /// Parse settings from a JSON document
    pub fn from_json(content: &str) -> Result<Self, SettingsError> {
        serde_json::from_str(content).map_err(|e| SettingsError::Parse(e.to_string()))
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let settings = Settings::from_json("{}").unwrap();
        assert_eq!(settings, Settings::default());
        assert!(!settings.display.dark_mode);
        assert_eq!(settings.display.language, "en");
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let settings =
            Settings::from_json(r#"{ "display": { "dark_mode": true }, "window": { "width": 1600 } }"#)
                .unwrap();
        assert!(settings.display.dark_mode);
        assert!(settings.display.animations);
        assert_eq!(settings.window.width, 1600.0);
        assert_eq!(settings.window.height, 800.0);
    }

    #[test]
    fn malformed_document_is_a_parse_error() {
        let err = Settings::from_json("{ display: ").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
        assert!(err.to_string().starts_with("Parse error"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Settings::load_from_file(Path::new("/nonexistent/music-app/settings.json"))
            .unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
    }

    #[test]
    fn sidebar_width_is_clamped() {
        let mut window = WindowSettings::default();
        assert_eq!(window.clamped_sidebar_width(), 240.0);

        window.sidebar_width = 20.0;
        assert_eq!(window.clamped_sidebar_width(), MIN_SIDEBAR_WIDTH);

        window.sidebar_width = 2000.0;
        assert_eq!(window.clamped_sidebar_width(), MAX_SIDEBAR_WIDTH);

        window.sidebar_width = f32::NAN;
        assert_eq!(window.clamped_sidebar_width(), 240.0);
    }
}
