//! Persistent settings for game initialization
//!
//! Saves and loads user preferences (viewport size, keeper seed, event
//! logging) to/from an init_settings.json file in the config directory.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Path to the settings file
pub const SETTINGS_FILE: &str = "config/init_settings.json";

/// Persistent settings that survive between sessions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitSettings {
    /// Viewport preset index (see VIEWPORT_PRESETS)
    pub viewport_index: usize,
    /// Fixed keeper RNG seed; None seeds from entropy
    pub keeper_seed: Option<u64>,
    /// Write .evlog files under logs/
    pub log_events: bool,
}

impl Default for InitSettings {
    fn default() -> Self {
        Self {
            viewport_index: 0, // 720p default
            keeper_seed: None, // Entropy-seeded keeper
            log_events: false,
        }
    }
}

impl InitSettings {
    /// Load settings from file, or return defaults if file doesn't exist
    pub fn load() -> Self {
        let path = Path::new(SETTINGS_FILE);
        if !path.exists() {
            info!("No init_settings.json found, using defaults");
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(settings) => {
                    info!("Loaded settings from {}", SETTINGS_FILE);
                    settings
                }
                Err(e) => {
                    warn!("Failed to parse init_settings.json: {}, using defaults", e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read init_settings.json: {}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Save settings to file
    pub fn save(&self) -> Result<(), std::io::Error> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        if let Some(parent) = Path::new(SETTINGS_FILE).parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(SETTINGS_FILE, json)?;
        info!("Saved settings to {}", SETTINGS_FILE);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_quiet() {
        let settings = InitSettings::default();
        assert_eq!(settings.viewport_index, 0);
        assert!(settings.keeper_seed.is_none());
        assert!(!settings.log_events);
    }

    #[test]
    fn test_settings_json_roundtrip() {
        let settings = InitSettings {
            viewport_index: 2,
            keeper_seed: Some(1234),
            log_events: true,
        };
        let json = serde_json::to_string(&settings).expect("settings serialize");
        let parsed: InitSettings = serde_json::from_str(&json).expect("settings parse");
        assert_eq!(parsed.viewport_index, 2);
        assert_eq!(parsed.keeper_seed, Some(1234));
        assert!(parsed.log_events);
    }
}
