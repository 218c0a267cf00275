//! Viewer configuration (window, rendering, input). Loaded from config.ron
//! at startup.

use serde::{Deserialize, Serialize};

/// Persistent viewer settings. Loaded from `config.ron` in the current
/// directory; missing or invalid files fall back to defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// Window width in logical pixels.
    #[serde(default = "default_window_width")]
    pub window_width: u32,
    /// Window height in logical pixels.
    #[serde(default = "default_window_height")]
    pub window_height: u32,
    /// Enable vsync (recommended to avoid tearing).
    #[serde(default = "default_true")]
    pub vsync: bool,
    /// Start in fullscreen.
    #[serde(default)]
    pub fullscreen: bool,
    /// Pointer drag sensitivity multiplier (1.0 = default).
    #[serde(default = "default_sensitivity")]
    pub sensitivity: f32,
    /// Background star count for the star-field sections.
    #[serde(default = "default_star_count")]
    pub star_count: u32,
}

fn default_window_width() -> u32 {
    1280
}
fn default_window_height() -> u32 {
    720
}
fn default_true() -> bool {
    true
}
fn default_sensitivity() -> f32 {
    1.0
}
fn default_star_count() -> u32 {
    1000
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            window_width: default_window_width(),
            window_height: default_window_height(),
            vsync: default_true(),
            fullscreen: false,
            sensitivity: default_sensitivity(),
            star_count: default_star_count(),
        }
    }
}

impl ViewerConfig {
    /// Load config from `config.ron`. Missing or invalid files yield the
    /// defaults.
    pub fn load() -> Self {
        let path = config_path();
        if let Ok(data) = std::fs::read_to_string(&path) {
            match ron::from_str(&data) {
                Ok(c) => return c,
                Err(e) => log::warn!("Invalid config at {:?}: {}, using defaults", path, e),
            }
        }
        Self::default()
    }

    /// Save current config to `config.ron`. Logs on error.
    pub fn save(&self) {
        let path = config_path();
        if let Ok(s) = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default()) {
            if let Err(e) = std::fs::write(&path, s) {
                log::warn!("Could not write config to {:?}: {}", path, e);
            }
        }
    }
}

fn config_path() -> std::path::PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| std::path::PathBuf::from("."))
        .join("config.ron")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_round_trip_through_ron() {
        let config = ViewerConfig::default();
        let text = ron::ser::to_string(&config).unwrap();
        let back: ViewerConfig = ron::from_str(&text).unwrap();
        assert_eq!(back.window_width, config.window_width);
        assert_eq!(back.star_count, config.star_count);
    }

    #[test]
    fn partial_config_fills_in_defaults() {
        let parsed: ViewerConfig = ron::from_str("(window_width: 1920)").unwrap();
        assert_eq!(parsed.window_width, 1920);
        assert_eq!(parsed.window_height, default_window_height());
        assert!(parsed.vsync);
    }
}
