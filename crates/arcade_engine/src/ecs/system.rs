//! System trait and implementations

use super::World;
use crate::input::InputSnapshot;

/// System trait for processing entities and components
///
/// A system is one piece of per-tick game logic. It must be stateless
/// between ticks apart from long-lived accumulators it closes over, must
/// never block, and may only assume it runs after systems registered
/// before it.
pub trait System {
    /// Run the system for one logic tick
    ///
    /// `frame_ms` is the fixed tick duration in milliseconds.
    fn run(&mut self, world: &mut World, input: &InputSnapshot, frame_ms: f32);

    /// System name for diagnostics
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
