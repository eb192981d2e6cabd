//! Engine-provided systems

pub mod movement;
pub mod pong;

pub use movement::{try_move, CooldownSystem, Direction, VelocitySystem};
pub use pong::{GameOverHook, PongSystem};
