//! User settings persistence - save/load config to JSON file.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::DEFAULT_PLAYER;

/// Persisted user settings. Saved to `Documents\CommanderPanel\settings.json`.
#[derive(Resource, Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UserSettings {
    /// Player whose commanders are listed.
    #[serde(default = "default_player")]
    pub player: u8,
    // Object row click
    #[serde(default = "default_true")]
    pub jump_to_selected: bool,
    // Row labels
    #[serde(default = "default_true")]
    pub show_group_size: bool,
    #[serde(default = "default_true")]
    pub show_experience: bool,
    #[serde(default = "default_true")]
    pub show_factory_numbers: bool,
    // Startup
    #[serde(default)]
    pub open_on_start: bool,
}

fn default_true() -> bool { true }
fn default_player() -> u8 { DEFAULT_PLAYER }

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            player: DEFAULT_PLAYER,
            jump_to_selected: true,
            show_group_size: true,
            show_experience: true,
            show_factory_numbers: true,
            open_on_start: false,
        }
    }
}

fn settings_path() -> Option<PathBuf> {
    let home = std::env::var("USERPROFILE")
        .or_else(|_| std::env::var("HOME"))
        .ok()?;
    let dir = PathBuf::from(home).join("Documents").join("CommanderPanel");
    std::fs::create_dir_all(&dir).ok()?;
    Some(dir.join("settings.json"))
}

/// Parse settings, falling back to defaults for missing fields or bad JSON.
pub fn parse_settings(json: &str) -> UserSettings {
    match serde_json::from_str(json) {
        Ok(settings) => settings,
        Err(e) => {
            warn!("Ignoring malformed settings: {}", e);
            UserSettings::default()
        }
    }
}

pub fn save_settings(settings: &UserSettings) {
    let Some(path) = settings_path() else { return };
    match serde_json::to_string_pretty(settings) {
        Ok(json) => {
            if let Err(e) = std::fs::write(&path, json) {
                warn!("Failed to save settings: {}", e);
            }
        }
        Err(e) => warn!("Failed to serialize settings: {}", e),
    }
}

pub fn load_settings() -> UserSettings {
    let Some(path) = settings_path() else { return UserSettings::default() };
    match std::fs::read_to_string(&path) {
        Ok(json) => parse_settings(&json),
        Err(_) => UserSettings::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let settings = parse_settings(r#"{ "player": 3, "jump_to_selected": false }"#);
        assert_eq!(settings.player, 3);
        assert!(!settings.jump_to_selected);
        assert!(settings.show_group_size);
        assert!(settings.show_factory_numbers);
        assert!(!settings.open_on_start);
    }

    #[test]
    fn malformed_json_falls_back() {
        assert_eq!(parse_settings("{ not json"), UserSettings::default());
    }

    #[test]
    fn saved_form_reads_back() {
        let settings = UserSettings { player: 2, show_experience: false, ..Default::default() };
        let json = serde_json::to_string_pretty(&settings).unwrap();
        assert_eq!(parse_settings(&json), settings);
    }
}
