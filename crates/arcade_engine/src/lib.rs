//! # Arcade Engine
//!
//! A lightweight entity-component game toolkit built around a
//! fixed-timestep scheduler.
//!
//! ## Features
//!
//! - **Entity registry**: insertion-ordered entities with typed component
//!   slots (position, velocity, body, score, and game-defined roles)
//! - **Fixed-timestep loop**: accumulator-driven ticks with a catch-up
//!   cap, batching input polling, systems, and per-entity subscribers
//! - **Queries**: pure filters over the live registry by component type
//! - **AABB collision**: strict overlap tests, occupancy-checked grid
//!   movement, and a complete Pong-style bounce/scoring system
//! - **Headless**: rendering, audio playback, and input devices are
//!   external collaborators behind small traits
//!
//! ## Quick Start
//!
//! ```rust
//! use arcade_engine::prelude::*;
//!
//! let config = LoopConfig::default();
//! let mut engine = Engine::new(&config, Box::new(ScriptedInput::new()))?;
//!
//! let ball = engine.world_mut().spawn();
//! engine.world_mut().attach(ball, Position::new(100.0, 100.0));
//! engine.world_mut().attach(ball, Velocity::new(2.0, 1.0));
//! engine.game_loop_mut().add_system(VelocitySystem);
//!
//! engine.frame(0.0);
//! engine.frame(1000.0 / 60.0);
//! # Ok::<(), arcade_engine::EngineError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod core;

pub mod audio;
pub mod ecs;
pub mod foundation;
pub mod input;
pub mod physics;

mod engine;

pub use ecs::{Entity, GameLoop, Query, System, World};
pub use engine::{Engine, EngineError};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        audio::{AudioSink, NullAudio, SoundEffect},
        core::config::{ArenaConfig, Config, ConfigError, LoopConfig, PongRules},
        ecs::components::{Ball, Body, Mover, Paddle, PaddleSide, Position, Score, Velocity},
        ecs::systems::{try_move, CooldownSystem, Direction, PongSystem, VelocitySystem},
        ecs::{Entity, GameLoop, Query, System, World},
        foundation::{
            math::{Vec2, Vec3},
            time::FrameClock,
        },
        input::{InputSignal, InputSnapshot, InputSource, KeyboardState, ScriptedInput},
        Engine, EngineError,
    };
}
