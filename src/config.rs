//! Game tuning
//!
//! Every field has a default, so a JSON file only needs the values it changes.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Errors raised while loading or validating a [`GameConfig`]
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Ship handling constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    /// Thrust added per frame along the heading
    pub speed: f32,
    /// Velocity multiplier per frame while not thrusting
    pub friction: f32,
    /// Degrees turned per frame
    pub rotation_step: f32,
    pub bullet_speed: f32,
    /// Bounding box edge
    pub size: f32,
    /// Distance from center to where bullets leave the ship
    pub gun_offset: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            speed: PLAYER_SPEED,
            friction: PLAYER_FRICTION,
            rotation_step: PLAYER_ROTATION_STEP,
            bullet_speed: BULLET_SPEED,
            size: PLAYER_SIZE,
            gun_offset: PLAYER_GUN_OFFSET,
        }
    }
}

/// Construction parameters for a game session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// RNG seed; the same seed and inputs replay the same game
    pub seed: u64,
    pub asteroid_count: u32,
    /// Exclusive upper bound of random speed per axis
    pub asteroid_max_speed: f32,
    /// Box edge indexed by power
    pub asteroid_sizes: [f32; 5],
    pub initial_power_min: u32,
    pub initial_power_max: u32,
    pub bullet_size: f32,
    pub player: PlayerTuning,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            asteroid_count: ASTEROID_COUNT,
            asteroid_max_speed: ASTEROID_MAX_SPEED,
            asteroid_sizes: ASTEROID_SIZES,
            initial_power_min: ASTEROID_POWER_MIN,
            initial_power_max: ASTEROID_POWER_MAX,
            bullet_size: BULLET_SIZE,
            player: PlayerTuning::default(),
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.asteroid_sizes.iter().any(|s| !(*s > 0.0)) {
            return Err(ConfigError::Invalid(
                "asteroid sizes must be positive".into(),
            ));
        }
        if !(self.asteroid_max_speed >= 0.0) {
            return Err(ConfigError::Invalid(
                "asteroid_max_speed must not be negative".into(),
            ));
        }
        if self.initial_power_min == 0 || self.initial_power_min > self.initial_power_max {
            return Err(ConfigError::Invalid(format!(
                "initial power range {}..={} is empty or starts at zero",
                self.initial_power_min, self.initial_power_max
            )));
        }
        if self.initial_power_max as usize >= self.asteroid_sizes.len() {
            return Err(ConfigError::Invalid(format!(
                "initial_power_max {} has no entry in asteroid_sizes",
                self.initial_power_max
            )));
        }
        if !(self.bullet_size > 0.0) || !(self.player.size > 0.0) {
            return Err(ConfigError::Invalid(
                "bullet and ship sizes must be positive".into(),
            ));
        }
        if !(self.player.friction > 0.0 && self.player.friction <= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "player friction {} must be in (0, 1]",
                self.player.friction
            )));
        }
        Ok(())
    }

    /// Box edge for an asteroid of the given power (clamped to the table)
    pub fn asteroid_size(&self, power: u32) -> f32 {
        let last = self.asteroid_sizes.len() - 1;
        self.asteroid_sizes[(power as usize).min(last)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.asteroid_sizes, [15.0, 20.0, 28.0, 36.0, 44.0]);
        assert_eq!(config.player.friction, 0.98);
        assert_eq!(config.player.rotation_step, 5.0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config =
            GameConfig::from_json(r#"{ "asteroid_count": 5, "player": { "speed": 0.5 } }"#)
                .unwrap();
        assert_eq!(config.asteroid_count, 5);
        assert_eq!(config.player.speed, 0.5);
        assert_eq!(config.player.bullet_speed, BULLET_SPEED);
        assert_eq!(config.asteroid_max_speed, ASTEROID_MAX_SPEED);
    }

    #[test]
    fn test_parse_error() {
        let err = GameConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_invalid_power_range() {
        let err = GameConfig::from_json(r#"{ "initial_power_max": 7 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = GameConfig::from_json(r#"{ "initial_power_min": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_invalid_friction() {
        let err = GameConfig::from_json(r#"{ "player": { "friction": 1.5 } }"#).unwrap_err();
        assert!(err.to_string().contains("friction"));
    }

    #[test]
    fn test_missing_file() {
        let err = GameConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_asteroid_size_lookup_clamps() {
        let config = GameConfig::default();
        assert_eq!(config.asteroid_size(0), 15.0);
        assert_eq!(config.asteroid_size(2), 28.0);
        assert_eq!(config.asteroid_size(4), 44.0);
        assert_eq!(config.asteroid_size(9), 44.0);
    }
}
