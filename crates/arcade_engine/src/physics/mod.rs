//! Spatial overlap primitives

pub mod aabb;

pub use aabb::Aabb;
