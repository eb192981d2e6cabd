//! Query system for component access
//!
//! A query is a pure filter over the live registry: build one from the
//! required component types, then run it against a world. Results are
//! recomputed on every run (membership changes as entities spawn and
//! despawn) and come back in spawn order, which is also the tie-break
//! whenever a system takes "the first match".

use super::{Component, Entity, World};
use std::any::TypeId;

/// Query for entities holding all of a set of component types
#[derive(Debug, Clone, Default)]
pub struct Query {
    required: Vec<TypeId>,
}

impl Query {
    /// Create a query with no requirements (matches every entity)
    pub fn new() -> Self {
        Self::default()
    }

    /// Require a component type
    pub fn with<T: Component>(mut self) -> Self {
        self.required.push(TypeId::of::<T>());
        self
    }

    /// Entities holding all required components, in spawn order
    pub fn run(&self, world: &World) -> Vec<Entity> {
        world
            .entities()
            .filter(|e| self.matches(world, *e))
            .collect()
    }

    /// The first matching entity, if any
    pub fn first(&self, world: &World) -> Option<Entity> {
        world.entities().find(|e| self.matches(world, *e))
    }

    fn matches(&self, world: &World, entity: Entity) -> bool {
        self.required
            .iter()
            .all(|type_id| world.has_type(entity, *type_id))
    }
}
