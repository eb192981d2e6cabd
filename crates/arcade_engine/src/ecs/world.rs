//! ECS World implementation
//!
//! The world is the entity registry plus every entity's component slots.
//! It is an owned value, not a process global: tests and multi-instance
//! hosts construct as many isolated worlds as they need and inject them
//! into the scheduler.

use super::{Component, Entity};
use std::any::{Any, TypeId};
use std::collections::HashMap;

/// Per-entity table of component slots, keyed by component type
#[derive(Default)]
struct ComponentTable {
    slots: HashMap<TypeId, Box<dyn Any>>,
}

/// ECS World containing all entities and components
///
/// Entities iterate in spawn order; systems that pick "the first match"
/// get the oldest registered entity. All registration changes are visible
/// to the very next query, with no buffering.
#[derive(Default)]
pub struct World {
    next_entity_id: u32,
    order: Vec<Entity>,
    tables: HashMap<Entity, ComponentTable>,
}

impl World {
    /// Create a new empty world
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new entity with no components
    pub fn spawn(&mut self) -> Entity {
        let entity = Entity::new(self.next_entity_id);
        self.next_entity_id += 1;
        self.order.push(entity);
        self.tables.insert(entity, ComponentTable::default());
        log::debug!("spawned {entity}");
        entity
    }

    /// Remove an entity and all of its components
    ///
    /// No-op (returning `false`) when the entity is already gone, so scene
    /// teardown can despawn unconditionally.
    pub fn despawn(&mut self, entity: Entity) -> bool {
        if self.tables.remove(&entity).is_some() {
            self.order.retain(|e| *e != entity);
            log::debug!("despawned {entity}");
            true
        } else {
            false
        }
    }

    /// Check whether an entity is registered
    pub fn contains(&self, entity: Entity) -> bool {
        self.tables.contains_key(&entity)
    }

    /// Number of live entities
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the world has no entities
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate over all entities in spawn order
    pub fn entities(&self) -> impl Iterator<Item = Entity> + '_ {
        self.order.iter().copied()
    }

    /// Attach a component, replacing any previous value of the same type
    ///
    /// Last registration wins; the slot's value type is fixed by `T` for
    /// its lifetime.
    pub fn attach<T: Component>(&mut self, entity: Entity, component: T) {
        match self.tables.get_mut(&entity) {
            Some(table) => {
                table.slots.insert(TypeId::of::<T>(), Box::new(component));
            }
            None => {
                log::warn!(
                    "attach {} on missing {entity}; component dropped",
                    std::any::type_name::<T>()
                );
            }
        }
    }

    /// Detach and return a component slot
    pub fn detach<T: Component>(&mut self, entity: Entity) -> Option<T> {
        let table = self.tables.get_mut(&entity)?;
        table
            .slots
            .remove(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast::<T>().ok())
            .map(|boxed| *boxed)
    }

    /// Check whether an entity has a component without logging
    pub fn has<T: Component>(&self, entity: Entity) -> bool {
        self.tables
            .get(&entity)
            .is_some_and(|table| table.slots.contains_key(&TypeId::of::<T>()))
    }

    /// Check whether an entity has a component by type id
    pub(crate) fn has_type(&self, entity: Entity, type_id: TypeId) -> bool {
        self.tables
            .get(&entity)
            .is_some_and(|table| table.slots.contains_key(&type_id))
    }

    /// Read a component slot
    ///
    /// Reading a slot the entity never registered is not an error: it
    /// returns `None` and logs a warning, and the tick carries on.
    pub fn get<T: Component>(&self, entity: Entity) -> Option<&T> {
        let Some(table) = self.tables.get(&entity) else {
            log::warn!("read {} on missing {entity}", std::any::type_name::<T>());
            return None;
        };
        let slot = table.slots.get(&TypeId::of::<T>());
        if slot.is_none() {
            log::warn!(
                "{entity} has no {} slot",
                std::any::type_name::<T>()
            );
        }
        slot.and_then(|boxed| boxed.downcast_ref::<T>())
    }

    /// Read a component slot mutably
    pub fn get_mut<T: Component>(&mut self, entity: Entity) -> Option<&mut T> {
        let Some(table) = self.tables.get_mut(&entity) else {
            log::warn!("read {} on missing {entity}", std::any::type_name::<T>());
            return None;
        };
        let slot = table.slots.get_mut(&TypeId::of::<T>());
        if slot.is_none() {
            log::warn!(
                "{entity} has no {} slot",
                std::any::type_name::<T>()
            );
        }
        slot.and_then(|boxed| boxed.downcast_mut::<T>())
    }

    /// Replace a slot's value wholesale
    ///
    /// Returns `false` (without creating the slot) when the entity or the
    /// slot is absent; use [`World::attach`] to create slots.
    pub fn set<T: Component>(&mut self, entity: Entity, value: T) -> bool {
        match self.get_mut::<T>(entity) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Apply a functional update to a slot
    ///
    /// The closure runs only if the slot exists; returns whether it ran.
    pub fn update<T: Component>(&mut self, entity: Entity, f: impl FnOnce(&mut T)) -> bool {
        match self.get_mut::<T>(entity) {
            Some(slot) => {
                f(slot);
                true
            }
            None => false,
        }
    }
}
