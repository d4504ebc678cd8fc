//! Bounding volumes and collision tests

mod aabb;
mod obb;

pub use aabb::BoundingBox;
pub use obb::{COLLISION_EPSILON, OrientedBoundingBox};
