//! Race tuning settings
//!
//! Loaded from a JSON file on native builds. Missing fields fall back to
//! their defaults, so a settings file only needs the values it changes.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Settings load/save failure
#[derive(Debug)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::Parse(msg) => write!(f, "Settings parse error: {}", msg),
        }
    }
}

impl std::error::Error for SettingsError {}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Parse(e.to_string())
    }
}

/// Race tuning values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RaceSettings {
    // === Progression ===
    /// Distance under which a waypoint counts as reached
    pub waypoint_radius: f32,

    // === Steering ===
    /// Taper radius for racers following the path
    pub path_slowing_radius: f32,
    /// Taper radius for standalone arrive behaviors
    pub arrive_slowing_radius: f32,
    pub racer_max_speed: f32,
    /// Max speed jitter per racer, as a fraction of `racer_max_speed`
    pub racer_speed_jitter: f32,

    // === Player ===
    pub player_max_speed: f32,
    pub player_acceleration: f32,
    /// Per-frame velocity multiplier (0.0 - 1.0)
    pub player_friction: f32,

    /// RNG seed for the race grid
    pub seed: u64,
}

impl Default for RaceSettings {
    fn default() -> Self {
        Self {
            waypoint_radius: WAYPOINT_RADIUS,

            path_slowing_radius: PATH_SLOWING_RADIUS,
            arrive_slowing_radius: ARRIVE_SLOWING_RADIUS,
            racer_max_speed: RACER_MAX_SPEED,
            racer_speed_jitter: 0.0,

            player_max_speed: PLAYER_MAX_SPEED,
            player_acceleration: PLAYER_ACCELERATION,
            player_friction: PLAYER_FRICTION,

            seed: 0,
        }
    }
}

impl RaceSettings {
    pub fn from_json_str(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_string(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json_str(&json)?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults on any failure
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("{}; using default settings", e);
                Self::default()
            }
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        std::fs::write(path.as_ref(), self.to_json_string()?)?;
        log::info!("Settings saved to {}", path.as_ref().display());
        Ok(())
    }

    /// Clamp values the simulation cannot use
    pub fn validated(mut self) -> Self {
        self.waypoint_radius = self.waypoint_radius.max(0.0);
        self.path_slowing_radius = self.path_slowing_radius.max(0.0);
        self.arrive_slowing_radius = self.arrive_slowing_radius.max(0.0);
        self.racer_max_speed = self.racer_max_speed.max(0.0);
        self.racer_speed_jitter = self.racer_speed_jitter.clamp(0.0, 1.0);
        self.player_max_speed = self.player_max_speed.max(0.0);
        self.player_acceleration = self.player_acceleration.max(0.0);
        self.player_friction = self.player_friction.clamp(0.0, 1.0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings =
            RaceSettings::from_json_str(r#"{ "racer_max_speed": 180.0, "seed": 7 }"#).unwrap();
        assert_eq!(settings.racer_max_speed, 180.0);
        assert_eq!(settings.seed, 7);
        assert_eq!(settings.waypoint_radius, 50.0);
        assert_eq!(settings.player_friction, 0.98);
    }

    #[test]
    fn test_bad_json_is_a_parse_error() {
        let err = RaceSettings::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_validated_clamps() {
        let settings = RaceSettings {
            waypoint_radius: -5.0,
            player_friction: 1.5,
            racer_speed_jitter: -0.2,
            ..Default::default()
        }
        .validated();
        assert_eq!(settings.waypoint_radius, 0.0);
        assert_eq!(settings.player_friction, 1.0);
        assert_eq!(settings.racer_speed_jitter, 0.0);
        assert_eq!(settings.racer_max_speed, RACER_MAX_SPEED);
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir()
            .join(format!("slipstream_settings_{}.json", std::process::id()));
        let settings = RaceSettings {
            seed: 42,
            racer_speed_jitter: 0.1,
            ..Default::default()
        };
        settings.save(&path).unwrap();
        let loaded = RaceSettings::load(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let path = std::env::temp_dir().join("slipstream_settings_does_not_exist.json");
        assert!(matches!(RaceSettings::load(&path), Err(SettingsError::Io(_))));
        assert_eq!(RaceSettings::load_or_default(Some(&path)), RaceSettings::default());
        assert_eq!(RaceSettings::load_or_default(None), RaceSettings::default());
    }
}
