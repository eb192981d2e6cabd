//! Core engine implementation

use crate::core::config::LoopConfig;
use crate::ecs::{GameLoop, World};
use crate::input::InputSource;
use thiserror::Error;

/// Main engine struct
///
/// Bundles one world with one fixed-timestep loop, the common wiring for
/// hosts and demos. The pieces stay individually constructible for tests
/// that want a bare [`World`] or [`GameLoop`].
pub struct Engine {
    world: World,
    game_loop: GameLoop,
}

impl Engine {
    /// Create an engine from a loop config and an input source
    pub fn new(config: &LoopConfig, input: Box<dyn InputSource>) -> Result<Self, EngineError> {
        log::info!(
            "initializing engine: {} fps, catch-up cap {}",
            config.fps,
            config.max_catchup_ticks
        );
        Ok(Self {
            world: World::new(),
            game_loop: GameLoop::new(config, input)?,
        })
    }

    /// Get the ECS world
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get mutable access to the ECS world
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Get the game loop
    pub fn game_loop(&self) -> &GameLoop {
        &self.game_loop
    }

    /// Get mutable access to the game loop
    pub fn game_loop_mut(&mut self) -> &mut GameLoop {
        &mut self.game_loop
    }

    /// Process one frame callback at timestamp `now_ms`
    ///
    /// Returns the number of logic ticks executed.
    pub fn frame(&mut self, now_ms: f64) -> u32 {
        self.game_loop.frame(&mut self.world, now_ms)
    }
}

/// Engine errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Construction-time configuration error
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::components::Position;
    use crate::input::ScriptedInput;

    #[test]
    fn test_engine_drives_world() {
        let config = LoopConfig {
            fps: 50,
            max_catchup_ticks: 5,
        };
        let mut engine = Engine::new(&config, Box::new(ScriptedInput::new())).unwrap();

        let e = engine.world_mut().spawn();
        engine.world_mut().attach(e, Position::new(1.0, 1.0));
        engine
            .game_loop_mut()
            .subscribe(e, |world, entity, _input, _dt| {
                world.update::<Position>(entity, |p| p.x += 1.0);
            });

        engine.frame(0.0);
        engine.frame(40.0); // two ticks
        assert_eq!(
            engine.world().get::<Position>(e),
            Some(&Position::new(3.0, 1.0))
        );
    }

    #[test]
    fn test_invalid_fps_is_rejected() {
        let config = LoopConfig {
            fps: 0,
            max_catchup_ticks: 5,
        };
        assert!(Engine::new(&config, Box::new(ScriptedInput::new())).is_err());
    }
}
