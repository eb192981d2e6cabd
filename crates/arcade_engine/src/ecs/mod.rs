//! Entity-Component-System implementation
//!
//! A deliberately small ECS: an insertion-ordered entity registry with
//! typed component slots, pure queries, and a fixed-timestep scheduler.
//! There are no archetypes and no query planner; the target is tens of
//! entities driven inside a frame budget.

pub mod component;
pub mod components;
pub mod entity;
pub mod query;
pub mod scheduler;
pub mod system;
pub mod systems;
pub mod world;

pub use component::Component;
pub use entity::Entity;
pub use query::Query;
pub use scheduler::{GameLoop, SubscriberId};
pub use system::System;
pub use world::World;
