//! Game configuration resource.
//!
//! Manages tuning values loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [world]
//! tile_size = 16
//!
//! [player]
//! walk_speed = 90
//! caught_duration = 1.5
//!
//! [sight]
//! sample_density = 0.01
//! step_density = 0.25
//!
//! [debug]
//! hitboxes = false
//! ```

use bevy_ecs::prelude::Resource;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::components::sightcone::SightTuning;

const DEFAULT_TILE_SIZE: f32 = 16.0;
const DEFAULT_WALK_SPEED: f32 = 90.0;
const DEFAULT_CAUGHT_DURATION: f32 = 1.5;
const DEFAULT_SIGHT_SAMPLE_DENSITY: f32 = 0.01;
const DEFAULT_SIGHT_STEP_DENSITY: f32 = 0.25;
const DEFAULT_DEBUG_HITBOXES: bool = false;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
///
/// The sight densities govern the dominant per-frame cost of vision-capable
/// enemies, so they are deliberately file-tunable rather than baked in.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Side length of a collision tile in world units.
    pub tile_size: f32,
    /// Player walk speed in world units per second.
    pub walk_speed: f32,
    /// Seconds between being caught and the scene reset.
    pub caught_duration: f32,
    /// Angular samples per (world unit x degree) of cone.
    pub sight_sample_density: f32,
    /// Ray steps per world unit of cone radius.
    pub sight_step_density: f32,
    /// Draw collider outlines and sight polygons.
    pub debug_hitboxes: bool,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            tile_size: DEFAULT_TILE_SIZE,
            walk_speed: DEFAULT_WALK_SPEED,
            caught_duration: DEFAULT_CAUGHT_DURATION,
            sight_sample_density: DEFAULT_SIGHT_SAMPLE_DENSITY,
            sight_step_density: DEFAULT_SIGHT_STEP_DENSITY,
            debug_hitboxes: DEFAULT_DEBUG_HITBOXES,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// The cone compilation densities as a [`SightTuning`].
    pub fn sight_tuning(&self) -> SightTuning {
        SightTuning {
            sample_density: self.sight_sample_density,
            step_density: self.sight_step_density,
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        if let Some(tile_size) = config.getfloat("world", "tile_size").ok().flatten() {
            self.tile_size = tile_size as f32;
        }
        if let Some(speed) = config.getfloat("player", "walk_speed").ok().flatten() {
            self.walk_speed = speed as f32;
        }
        if let Some(duration) = config.getfloat("player", "caught_duration").ok().flatten() {
            self.caught_duration = duration as f32;
        }
        if let Some(density) = config.getfloat("sight", "sample_density").ok().flatten() {
            self.sight_sample_density = density as f32;
        }
        if let Some(density) = config.getfloat("sight", "step_density").ok().flatten() {
            self.sight_step_density = density as f32;
        }
        if let Some(hitboxes) = config.getbool("debug", "hitboxes").ok().flatten() {
            self.debug_hitboxes = hitboxes;
        }

        info!(
            "Loaded config: tile={}, walk={}, caught={}s, sight=({}, {}), debug={}",
            self.tile_size,
            self.walk_speed,
            self.caught_duration,
            self.sight_sample_density,
            self.sight_step_density,
            self.debug_hitboxes
        );

        Ok(())
    }

    /// Save configuration to the INI file. Creates the file if needed.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set("world", "tile_size", Some(self.tile_size.to_string()));
        config.set("player", "walk_speed", Some(self.walk_speed.to_string()));
        config.set(
            "player",
            "caught_duration",
            Some(self.caught_duration.to_string()),
        );
        config.set(
            "sight",
            "sample_density",
            Some(self.sight_sample_density.to_string()),
        );
        config.set(
            "sight",
            "step_density",
            Some(self.sight_step_density.to_string()),
        );
        config.set("debug", "hitboxes", Some(self.debug_hitboxes.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_sane() {
        let config = GameConfig::new();
        assert_eq!(config.tile_size, 16.0);
        assert!(config.walk_speed > 0.0);
        assert!(config.caught_duration > 0.0);
        let tuning = config.sight_tuning();
        assert!(tuning.sample_density > 0.0);
        assert!(tuning.step_density > 0.0);
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let mut config = GameConfig::with_path("/nonexistent/config.ini");
        assert!(config.load_from_file().is_err());
        // defaults survive the failed load
        assert_eq!(config.walk_speed, DEFAULT_WALK_SPEED);
    }
}
