//! Component trait and implementations

/// Marker trait for components
///
/// A component is one named slot of entity state. The Rust type is the
/// slot's name: an entity holds at most one value per component type, and
/// attaching again replaces the previous value (last registration wins).
pub trait Component: 'static {}

// Engine-provided components
impl Component for crate::ecs::components::Position {}
impl Component for crate::ecs::components::Velocity {}
impl Component for crate::ecs::components::Body {}
impl Component for crate::ecs::components::Score {}
impl Component for crate::ecs::components::Ball {}
impl Component for crate::ecs::components::Paddle {}
impl Component for crate::ecs::components::Mover {}
