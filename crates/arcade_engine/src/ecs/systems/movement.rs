//! Movement and occupancy resolution
//!
//! [`try_move`] is the grid/pixel step used by Sokoban-style movers: a
//! candidate position is computed one step along the requested axis, and
//! the move commits only if the candidate's bounding box overlaps no other
//! solid body. The scan is a linear pass over every registered entity with
//! a position and a body, which is a deliberate choice at the entity
//! counts this toolkit targets (tens, not thousands); a spatial grid could
//! replace it without changing the contract.

use crate::ecs::components::{Body, Mover, Position, Velocity};
use crate::ecs::{Entity, Query, System, World};
use crate::input::InputSnapshot;
use crate::physics::Aabb;

/// Cardinal movement directions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Negative Y
    Up,
    /// Positive Y
    Down,
    /// Negative X
    Left,
    /// Positive X
    Right,
}

impl Direction {
    /// Unit offset for this direction, scaled by `step`
    fn offset(self, step: f32) -> (f32, f32) {
        match self {
            Self::Up => (0.0, -step),
            Self::Down => (0.0, step),
            Self::Left => (-step, 0.0),
            Self::Right => (step, 0.0),
        }
    }
}

/// Attempt to step an entity one `Mover.step` along a direction
///
/// Returns `true` and commits the new position when the move is accepted.
/// The move is refused (position untouched, `false` returned) when:
///
/// - the entity lacks `Position`, `Body`, or `Mover`,
/// - the mover's cooldown has not drained yet, or
/// - the candidate box overlaps any other entity's solid body at its
///   current (pre-move) position.
///
/// Overlap with non-solid bodies does not block. An accepted move re-arms
/// the cooldown; [`CooldownSystem`] drains it each tick.
pub fn try_move(world: &mut World, entity: Entity, direction: Direction) -> bool {
    let (Some(mover), Some(position), Some(body)) = (
        world.get::<Mover>(entity).copied(),
        world.get::<Position>(entity).copied(),
        world.get::<Body>(entity).copied(),
    ) else {
        return false;
    };

    if !mover.ready() {
        return false;
    }

    let (dx, dy) = direction.offset(mover.step);
    let next = Position {
        x: position.x + dx,
        y: position.y + dy,
        z: position.z,
    };
    let candidate = Aabb::from_parts(&next, &body);

    let occupants = Query::new().with::<Position>().with::<Body>().run(world);
    for other in occupants {
        if other == entity {
            continue;
        }
        // The query guarantees both slots; the else arm is unreachable.
        let (Some(other_pos), Some(other_body)) = (
            world.get::<Position>(other).copied(),
            world.get::<Body>(other).copied(),
        ) else {
            continue;
        };
        if !other_body.solid {
            continue;
        }
        if candidate.overlaps(&Aabb::from_parts(&other_pos, &other_body)) {
            log::debug!("{entity} move {direction:?} blocked by {other}");
            return false;
        }
    }

    world.set(entity, next);
    world.update::<Mover>(entity, |m| m.remaining_ms = m.cooldown_ms);
    true
}

/// Drains movement cooldowns by one tick's worth of time
#[derive(Debug, Default)]
pub struct CooldownSystem;

impl System for CooldownSystem {
    fn run(&mut self, world: &mut World, _input: &InputSnapshot, frame_ms: f32) {
        for entity in Query::new().with::<Mover>().run(world) {
            world.update::<Mover>(entity, |m| {
                m.remaining_ms = (m.remaining_ms - frame_ms).max(0.0);
            });
        }
    }

    fn name(&self) -> &str {
        "cooldown"
    }
}

/// Integrates `Position += Velocity` once per tick
#[derive(Debug, Default)]
pub struct VelocitySystem;

impl System for VelocitySystem {
    fn run(&mut self, world: &mut World, _input: &InputSnapshot, _frame_ms: f32) {
        for entity in Query::new().with::<Position>().with::<Velocity>().run(world) {
            let Some(velocity) = world.get::<Velocity>(entity).copied() else {
                continue;
            };
            world.update::<Position>(entity, |p| {
                p.x += velocity.dx;
                p.y += velocity.dy;
                p.z += velocity.dz;
            });
        }
    }

    fn name(&self) -> &str {
        "velocity"
    }
}
