//! Axis-aligned bounding boxes

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box defined by min and max corners.
///
/// The constructor normalizes the corners componentwise, so `min <= max`
/// holds on every axis. Zero-volume boxes are valid; a box whose corners
/// coincide behaves as a single point.
///
/// Containment is inclusive on both the min and max sides: a point exactly
/// on any face, edge, or corner counts as contained.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Minimum corner
    pub min: Vec3,
    /// Maximum corner
    pub max: Vec3,
}

impl BoundingBox {
    /// Create a bounding box from two corners.
    ///
    /// The corners are normalized componentwise, so the arguments may be
    /// any two opposite corners.
    #[must_use]
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Create an inverted box that contains nothing.
    ///
    /// The empty box is the identity for [`extend`](Self::extend): extending
    /// it with a set of points produces the tight box over those points.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            min: Vec3::INFINITY,
            max: Vec3::NEG_INFINITY,
        }
    }

    /// Check that `min <= max` on every axis.
    ///
    /// False only for boxes built via [`empty`](Self::empty) that were never
    /// extended. Zero-volume boxes are valid.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y && self.min.z <= self.max.z
    }

    /// Grow the box to cover `point`.
    pub fn extend(&mut self, point: Vec3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// Grow the box to cover `other`.
    pub fn extend_box(&mut self, other: &Self) {
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
    }

    /// Get the center point.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Get the edge lengths along each axis.
    #[must_use]
    pub fn dimensions(&self) -> Vec3 {
        self.max - self.min
    }

    /// Get the eight corners.
    #[must_use]
    pub fn corners(&self) -> [Vec3; 8] {
        let (min, max) = (self.min, self.max);
        [
            Vec3::new(min.x, min.y, min.z),
            Vec3::new(max.x, min.y, min.z),
            Vec3::new(min.x, max.y, min.z),
            Vec3::new(max.x, max.y, min.z),
            Vec3::new(min.x, min.y, max.z),
            Vec3::new(max.x, min.y, max.z),
            Vec3::new(min.x, max.y, max.z),
            Vec3::new(max.x, max.y, max.z),
        ]
    }

    /// Check if a point is inside the box (boundary inclusive).
    #[must_use]
    pub fn contains_point(&self, point: Vec3) -> bool {
        self.min.x <= point.x
            && point.x <= self.max.x
            && self.min.y <= point.y
            && point.y <= self.max.y
            && self.min.z <= point.z
            && point.z <= self.max.z
    }

    /// Check if `other` lies entirely inside the box.
    ///
    /// A box contains itself. A box sharing only a corner is not contained,
    /// since its far corner lies outside.
    #[must_use]
    pub fn contains_box(&self, other: &Self) -> bool {
        self.contains_point(other.min) && self.contains_point(other.max)
    }

    /// Check if the box overlaps `other`.
    ///
    /// Boxes sharing only a face, edge, or corner count as intersecting.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }
}
