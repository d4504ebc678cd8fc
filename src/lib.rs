//! Core utilities for a 3D game engine
//!
//! This crate provides:
//! - Sparse growable component storage (`Bag`)
//! - Read-only live views over shared sequences (`ImmutableArray`)
//! - Axis-aligned and oriented bounding boxes with containment and
//!   intersection tests

pub mod bounds;
pub mod collections;

// Re-exports for convenience
pub use glam;

/// Prelude module for common imports
pub mod prelude {
    pub use crate::bounds::{BoundingBox, COLLISION_EPSILON, OrientedBoundingBox};
    pub use crate::collections::{Bag, ImmutableArray};
    pub use glam::{Mat4, Quat, Vec3};
}
