//! Engine-provided components
//!
//! The common slots every demo game reaches for: spatial state, bounding
//! bodies, scores, and the gameplay role markers used by the shipped
//! systems.

use crate::foundation::math::Vec3;

/// World-space position
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    /// X coordinate (left edge for entities with a body)
    pub x: f32,

    /// Y coordinate (top edge for entities with a body)
    pub y: f32,

    /// Z coordinate (draw layer; unused by collision)
    pub z: f32,
}

impl Position {
    /// Create a position on the default layer
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y, z: 0.0 }
    }

    /// This position as a math vector
    pub fn vector(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Offset by a vector
    pub fn translated(&self, offset: Vec3) -> Self {
        Self {
            x: self.x + offset.x,
            y: self.y + offset.y,
            z: self.z + offset.z,
        }
    }
}

/// Per-tick velocity
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Velocity {
    /// X displacement per tick
    pub dx: f32,

    /// Y displacement per tick
    pub dy: f32,

    /// Z displacement per tick
    pub dz: f32,
}

impl Velocity {
    /// Create a planar velocity
    pub fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy, dz: 0.0 }
    }
}

/// Axis-aligned bounding body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    /// Width in pixels
    pub width: f32,

    /// Height in pixels
    pub height: f32,

    /// Whether this body blocks movement
    pub solid: bool,
}

impl Body {
    /// Create a solid body
    pub fn solid(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            solid: true,
        }
    }

    /// Create a non-blocking body (overlap is allowed)
    pub fn passable(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            solid: false,
        }
    }
}

impl Default for Body {
    fn default() -> Self {
        Self::solid(1.0, 1.0)
    }
}

/// Score counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    /// Current score
    pub value: u32,
}

impl Score {
    /// Add a point
    pub fn increment(&mut self) {
        self.value += 1;
    }
}

/// Role marker: the ball in a Pong-style game
#[derive(Debug, Clone, Copy, Default)]
pub struct Ball;

/// Which side of the arena a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddleSide {
    /// Left side, controlled by the player
    Player,

    /// Right side, controlled by the opponent
    Opponent,
}

/// Role marker: a paddle and the side it defends
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    /// Side of the arena this paddle defends
    pub side: PaddleSide,
}

impl Paddle {
    /// The player's paddle (left side)
    pub fn player() -> Self {
        Self {
            side: PaddleSide::Player,
        }
    }

    /// The opponent's paddle (right side)
    pub fn opponent() -> Self {
        Self {
            side: PaddleSide::Opponent,
        }
    }
}

/// Debounced step movement
///
/// Grid movers step a fixed distance per accepted move and then refuse
/// further moves until the cooldown drains.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mover {
    /// Distance of one step in pixels
    pub step: f32,

    /// Cooldown re-armed after each accepted move, in milliseconds
    pub cooldown_ms: f32,

    /// Cooldown remaining; moves are refused while positive
    pub remaining_ms: f32,
}

impl Mover {
    /// Create a mover that can step immediately
    pub fn new(step: f32, cooldown_ms: f32) -> Self {
        Self {
            step,
            cooldown_ms,
            remaining_ms: 0.0,
        }
    }

    /// Whether the cooldown has drained
    pub fn ready(&self) -> bool {
        self.remaining_ms <= 0.0
    }
}
