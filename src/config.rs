//! Tunable constants of a session.
//!
//! Every field defaults to the stock game; a JSON file may override any subset.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const VIEWPORT_WIDTH: f64 = 480.0;
pub const VIEWPORT_HEIGHT: f64 = 320.0;

pub const ACTOR_X: f64 = 60.0;
pub const ACTOR_WIDTH: f64 = 30.0;
pub const ACTOR_HEIGHT: f64 = 30.0;

pub const OBSTACLE_WIDTH: f64 = 40.0;
pub const GAP_HEIGHT: f64 = 150.0;

/// Obstacle drift in pixels per frame at session start.
pub const INITIAL_SPEED: f64 = 2.5;
/// Frames between spawns at session start.
pub const INITIAL_SPAWN_INTERVAL: u32 = 140;
pub const SPAWN_INTERVAL_FLOOR: u32 = 60;

/// A ramp step is applied every time the score reaches a multiple of this.
pub const SCORE_MILESTONE: u32 = 5;
pub const SPEED_INCREMENT: f64 = 0.3;
pub const SPAWN_INTERVAL_DECREMENT: u32 = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} must be positive")]
    NotPositive { field: &'static str },
    #[error("{field} must not be negative")]
    Negative { field: &'static str },
    #[error("spawn interval floor {floor} is above the initial interval {initial}")]
    FloorAboveInitial { floor: u32, initial: u32 },
    #[error("gap height {gap} must exceed actor height {actor} and fit in viewport height {viewport}")]
    GapOutOfRange { gap: f64, actor: f64, viewport: f64 },
    #[error("actor does not fit inside the viewport")]
    ActorOutsideViewport,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub actor_x: f64,
    pub actor_width: f64,
    pub actor_height: f64,
    pub obstacle_width: f64,
    pub gap_height: f64,
    pub initial_speed: f64,
    pub initial_spawn_interval: u32,
    pub spawn_interval_floor: u32,
    pub score_milestone: u32,
    pub speed_increment: f64,
    pub spawn_interval_decrement: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,
            actor_x: ACTOR_X,
            actor_width: ACTOR_WIDTH,
            actor_height: ACTOR_HEIGHT,
            obstacle_width: OBSTACLE_WIDTH,
            gap_height: GAP_HEIGHT,
            initial_speed: INITIAL_SPEED,
            initial_spawn_interval: INITIAL_SPAWN_INTERVAL,
            spawn_interval_floor: SPAWN_INTERVAL_FLOOR,
            score_milestone: SCORE_MILESTONE,
            speed_increment: SPEED_INCREMENT,
            spawn_interval_decrement: SPAWN_INTERVAL_DECREMENT,
        }
    }
}

impl GameConfig {
    /// Read a JSON config. Fields absent from the file keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("viewport_width", self.viewport_width),
            ("viewport_height", self.viewport_height),
            ("actor_width", self.actor_width),
            ("actor_height", self.actor_height),
            ("obstacle_width", self.obstacle_width),
            ("initial_speed", self.initial_speed),
        ];
        for (field, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::NotPositive { field });
            }
        }
        if self.speed_increment.is_nan() || self.speed_increment < 0.0 {
            return Err(ConfigError::Negative {
                field: "speed_increment",
            });
        }
        if self.score_milestone == 0 {
            return Err(ConfigError::NotPositive {
                field: "score_milestone",
            });
        }
        if self.spawn_interval_floor > self.initial_spawn_interval {
            return Err(ConfigError::FloorAboveInitial {
                floor: self.spawn_interval_floor,
                initial: self.initial_spawn_interval,
            });
        }
        if self.gap_height <= self.actor_height || self.gap_height > self.viewport_height {
            return Err(ConfigError::GapOutOfRange {
                gap: self.gap_height,
                actor: self.actor_height,
                viewport: self.viewport_height,
            });
        }
        if self.actor_x < 0.0
            || self.actor_x + self.actor_width > self.viewport_width
            || self.actor_height > self.viewport_height
        {
            return Err(ConfigError::ActorOutsideViewport);
        }
        Ok(())
    }

    /// Height of the solid part of an obstacle.
    pub fn obstacle_height(&self) -> f64 {
        self.viewport_height - self.gap_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_floor_above_initial_interval() {
        let config = GameConfig {
            spawn_interval_floor: 200,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::FloorAboveInitial { floor: 200, initial: 140 })
        ));
    }

    #[test]
    fn rejects_nan_speed() {
        let config = GameConfig {
            initial_speed: f64::NAN,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPositive { field: "initial_speed" })
        ));
    }

    #[test]
    fn rejects_gap_shorter_than_actor() {
        let config = GameConfig {
            gap_height: 20.0,
            ..GameConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::GapOutOfRange { .. })));
    }

    #[test]
    fn rejects_actor_past_right_edge() {
        let config = GameConfig {
            actor_x: 470.0,
            ..GameConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::ActorOutsideViewport)));
    }

    #[test]
    fn rejects_negative_speed_increment() {
        let config = GameConfig {
            speed_increment: -0.3,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Negative { field: "speed_increment" })
        ));
    }

    #[test]
    fn zero_speed_increment_is_allowed() {
        let config = GameConfig {
            speed_increment: 0.0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_zero_milestone() {
        let config = GameConfig {
            score_milestone: 0,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPositive { field: "score_milestone" })
        ));
    }

    #[test]
    fn rejects_gap_taller_than_viewport() {
        let config = GameConfig {
            gap_height: 400.0,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::GapOutOfRange { viewport, .. }) if viewport == VIEWPORT_HEIGHT
        ));
    }

    fn temp_config(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "gravity_flip_{}_{}.json",
            name,
            std::process::id()
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn load_reads_json_file() {
        let path = temp_config("load", r#"{ "initial_spawn_interval": 90, "gap_height": 120 }"#);
        let config = GameConfig::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.initial_spawn_interval, 90);
        assert_eq!(config.gap_height, 120.0);
        assert_eq!(config.initial_speed, INITIAL_SPEED);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("gravity_flip_does_not_exist.json");
        assert!(matches!(GameConfig::load(&path), Err(ConfigError::Io(_))));
    }

    #[test]
    fn load_malformed_file_is_parse_error() {
        let path = temp_config("malformed", r#"{ "initial_speed": "fast" "#);
        let result = GameConfig::load(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: GameConfig =
            serde_json::from_str(r#"{ "initial_speed": 4.0, "viewport_width": 640 }"#).unwrap();
        assert_eq!(config.initial_speed, 4.0);
        assert_eq!(config.viewport_width, 640.0);
        assert_eq!(config.initial_spawn_interval, INITIAL_SPAWN_INTERVAL);
        assert_eq!(config.obstacle_width, OBSTACLE_WIDTH);
    }

    #[test]
    fn obstacle_height_is_viewport_minus_gap() {
        assert_eq!(GameConfig::default().obstacle_height(), 170.0);
    }
}
