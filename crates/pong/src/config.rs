//! Game configuration

use arcade_engine::prelude::{ArenaConfig, Config, LoopConfig, PongRules};
use serde::{Deserialize, Serialize};

/// Complete Pong demo configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameConfig {
    /// Fixed-timestep loop settings
    pub timing: LoopConfig,

    /// Playfield dimensions
    pub arena: ArenaConfig,

    /// Match rules and speeds
    pub rules: PongRules,

    /// Demo-only settings
    pub demo: DemoConfig,
}

impl Config for GameConfig {}

/// Settings for the headless demo driver
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Frame budget before the demo gives up on the match
    pub max_frames: u32,

    /// RNG seed for serve directions
    pub seed: u64,

    /// Speed handicap applied to the opponent paddle (0.0 to 1.0)
    pub opponent_handicap: f32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            max_frames: 20_000,
            seed: 0xCAFE,
            opponent_handicap: 0.4,
        }
    }
}
