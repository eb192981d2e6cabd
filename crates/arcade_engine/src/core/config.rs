//! Configuration system
//!
//! All tunable constants live here: frame rate, arena dimensions, movement
//! speeds, and the winning score. Everything is fixed at construction time;
//! nothing is renegotiated while the loop is running. Configs are plain
//! serde structs with sensible defaults and can be loaded from RON or TOML
//! files.

use serde::{Deserialize, Serialize};

/// Configuration trait for loadable/savable config structs
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from a RON or TOML file, picked by extension
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to a RON or TOML file, picked by extension
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Fixed-timestep loop configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoopConfig {
    /// Logic ticks per second
    pub fps: u32,

    /// Maximum catch-up ticks executed per frame after a stall
    pub max_catchup_ticks: u32,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            fps: 60,
            max_catchup_ticks: 5,
        }
    }
}

impl Config for LoopConfig {}

/// Playfield dimensions in pixels
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ArenaConfig {
    /// Arena width
    pub width: f32,

    /// Arena height
    pub height: f32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 480.0,
        }
    }
}

impl Config for ArenaConfig {}

/// Pong match rules and speed constants
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PongRules {
    /// Horizontal/vertical ball speed in pixels per tick
    pub ball_speed: f32,

    /// Paddle speed in pixels per tick
    pub paddle_speed: f32,

    /// Score that ends the match, for either side
    pub max_score: u32,
}

impl Default for PongRules {
    fn default() -> Self {
        Self {
            ball_speed: 5.0,
            paddle_speed: 5.0,
            max_score: 5,
        }
    }
}

impl Config for PongRules {}
