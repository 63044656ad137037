//! Preview settings persistence
//!
//! Handles saving and loading the ripple preview's preferences.

use std::path::{Path, PathBuf};
use std::time::Duration;

use iced::Color;
use serde::{Deserialize, Serialize};

use crate::ui::animation::{ConfigError, RippleConfig};
use crate::ui::animation::config::{DEFAULT_RIPPLE_COUNT, DEFAULT_TICK_INTERVAL};
use crate::ui::primitives::RippleStyle;
use crate::ui::theme;
use crate::utils::format_hex_color;

/// Preview settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Ripple appearance and cadence
    #[serde(default)]
    pub ripple: RippleSettings,
    /// Display and interface settings
    #[serde(default)]
    pub display: DisplaySettings,
}

/// Ripple settings as stored on disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RippleSettings {
    pub style: RippleStyle,
    pub ripple_count: usize,
    /// Tint as `#rrggbb` or `#rrggbbaa`
    pub tint: String,
    /// Time between steps in milliseconds
    pub interval_ms: u64,
    /// Whether the ripple animates on launch
    #[serde(default = "default_true")]
    pub animate: bool,
    /// Fade circles in between steps
    #[serde(default = "default_true")]
    pub smooth_transitions: bool,
}

fn default_true() -> bool {
    true
}

impl Default for RippleSettings {
    fn default() -> Self {
        Self {
            style: RippleStyle::default(),
            ripple_count: DEFAULT_RIPPLE_COUNT,
            tint: format_hex_color(theme::DEFAULT_TINT),
            interval_ms: DEFAULT_TICK_INTERVAL.as_millis() as u64,
            animate: true,
            smooth_transitions: true,
        }
    }
}

/// Display-related settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Dark mode enabled
    pub dark_mode: bool,
    /// Power saving mode - disables reveal transitions
    #[serde(default)]
    pub power_saving_mode: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            dark_mode: true,
            power_saving_mode: false,
        }
    }
}

impl RippleSettings {
    /// Build a validated config; an unreadable tint falls back to the default
    pub fn to_config(&self) -> Result<RippleConfig, ConfigError> {
        let tint = self.tint.parse::<Color>().unwrap_or_else(|_| {
            tracing::warn!("Invalid ripple tint {:?}, using default", self.tint);
            theme::DEFAULT_TINT
        });

        RippleConfig::new()
            .style(self.style)
            .ripple_count(self.ripple_count)
            .tint(tint)
            .tick_interval(Duration::from_millis(self.interval_ms))
            .smooth_transitions(self.smooth_transitions)
            .validate()
    }

    /// Copy the persisted parts of `config` back into settings
    pub fn apply(&mut self, config: &RippleConfig) {
        self.style = config.style;
        self.ripple_count = config.ripple_count;
        self.tint = format_hex_color(config.tint);
        self.interval_ms = config.tick_interval.as_millis() as u64;
        self.smooth_transitions = config.smooth_transitions;
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "ripple", "Ripple")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if not found
    pub fn load() -> Self {
        Self::file_path()
            .and_then(|path| match Self::load_from_file(&path) {
                Ok(settings) => Some(settings),
                Err(e) => {
                    tracing::debug!("Using default settings ({:?}): {}", path, e);
                    None
                }
            })
            .unwrap_or_default()
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        Ok(())
    }

    /// Ripple config for these settings, falling back to defaults when invalid
    ///
    /// Power saving turns reveal transitions off.
    pub fn ripple_config(&self) -> RippleConfig {
        let config = self.ripple.to_config().unwrap_or_else(|e| {
            tracing::warn!("Invalid ripple settings, using defaults: {}", e);
            RippleConfig::default()
        });

        if self.display.power_saving_mode {
            config.smooth_transitions(false)
        } else {
            config
        }
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

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("ripple-settings-{}-{}", std::process::id(), name))
            .join("settings.json")
    }

    #[test]
    fn test_defaults_match_ripple_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.ripple.tint, "#000000");
        assert_eq!(settings.ripple.interval_ms, 130);
        assert_eq!(settings.ripple_config(), RippleConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let path = temp_path("save");
        let mut settings = Settings::default();
        settings.ripple.style = RippleStyle::Outlined;
        settings.ripple.ripple_count = 3;
        settings.display.dark_mode = false;

        settings.save_to_file(&path).unwrap();
        let loaded = Settings::load_from_file(&path).unwrap();
        assert_eq!(loaded, settings);

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{ "display": { "dark_mode": false } }"#).unwrap();
        assert_eq!(settings.ripple, RippleSettings::default());
        assert!(!settings.display.dark_mode);
        assert!(!settings.display.power_saving_mode);
    }

    #[test]
    fn test_style_is_snake_case() {
        let json = serde_json::to_string(&RippleStyle::Outlined).unwrap();
        assert_eq!(json, r#""outlined""#);
    }

    #[test]
    fn test_load_missing_file_errors() {
        let result = Settings::load_from_file(Path::new("/nonexistent/ripple/settings.json"));
        assert!(matches!(result, Err(SettingsError::Io(_))));
    }

    #[test]
    fn test_parse_error() {
        let path = temp_path("garbage");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(
            Settings::load_from_file(&path),
            Err(SettingsError::Parse(_))
        ));
        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_invalid_ripple_settings_fall_back() {
        let mut settings = Settings::default();
        settings.ripple.ripple_count = 0;
        assert!(settings.ripple.to_config().is_err());
        assert_eq!(settings.ripple_config(), RippleConfig::default());

        settings.ripple.ripple_count = 4;
        settings.ripple.interval_ms = 0;
        assert_eq!(settings.ripple_config(), RippleConfig::default());
    }

    #[test]
    fn test_bad_tint_falls_back_to_default() {
        let mut settings = RippleSettings::default();
        settings.tint = "pink".to_string();
        let config = settings.to_config().unwrap();
        assert_eq!(config.tint, theme::DEFAULT_TINT);
    }

    #[test]
    fn test_power_saving_disables_transitions() {
        let mut settings = Settings::default();
        settings.display.power_saving_mode = true;
        assert!(!settings.ripple_config().smooth_transitions);
    }

    #[test]
    fn test_apply_round_trips_config() {
        let config = RippleConfig::new()
            .style(RippleStyle::Outlined)
            .ripple_count(7)
            .tint(iced::Color::from_rgb8(0xff, 0x14, 0x93))
            .tick_interval(Duration::from_millis(250));
        let mut settings = RippleSettings::default();
        settings.apply(&config);
        assert_eq!(settings.tint, "#ff1493");

        let restored = settings.to_config().unwrap();
        assert_eq!(format_hex_color(restored.tint), "#ff1493");
        assert_eq!(restored.tint(config.tint), config);
    }

    #[test]
    fn test_tint_parsing() {
        let mut settings = RippleSettings::default();
        settings.tint = "#ffffff".to_string();
        assert_eq!(settings.to_config().unwrap().tint, Color::WHITE);

        settings.tint = "#00000080".to_string();
        let tint = settings.to_config().unwrap().tint;
        assert!((tint.a - 128.0 / 255.0).abs() < 1e-3);

        settings.tint = "#gggggg".to_string();
        assert_eq!(settings.to_config().unwrap().tint, theme::DEFAULT_TINT);
    }

    #[test]
    fn test_oversized_ripple_count_falls_back() {
        let settings: Settings =
            serde_json::from_str(r##"{ "ripple": { "style": "solid", "ripple_count": 100000000, "tint": "#000000", "interval_ms": 130 } }"##)
                .unwrap();
        assert!(matches!(
            settings.ripple.to_config(),
            Err(ConfigError::RippleCount(100000000))
        ));
        assert_eq!(settings.ripple_config().ripple_count, 5);
    }
}
