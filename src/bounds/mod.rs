//! Axis-aligned bounds of rings and point sets.

mod aabb;

pub use aabb::Aabb2;
