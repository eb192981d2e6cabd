//! Math types and helpers
//!
//! Thin aliases over nalgebra so game code does not depend on the math
//! backend directly.

/// 2D vector type
pub type Vec2 = nalgebra::Vector2<f32>;

/// 3D vector type
pub type Vec3 = nalgebra::Vector3<f32>;

/// Linear interpolation between two values
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Clamp a value to a range
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}
