//! Oriented bounding boxes

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use super::BoundingBox;

/// Tolerance for the separating-axis projection comparisons.
///
/// Matches the platform's float rounding unit, so two boxes whose projected
/// intervals are separated by a single rounding step are classified as
/// disjoint instead of intersecting on accumulated arithmetic noise.
pub const COLLISION_EPSILON: f32 = f32::EPSILON;

/// An oriented bounding box: an axis-aligned box plus a rigid transform.
///
/// The inner [`BoundingBox`] lives in the box's local frame; `transform`
/// carries it into world space with a rotation and translation. Built from
/// a plain box, the transform is identity and the tests reduce to the
/// axis-aligned ones.
///
/// The transform is assumed rigid (no scale or shear); queries map points
/// into the local frame through its inverse.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrientedBoundingBox {
    /// Extents in the box's local frame
    pub bounds: BoundingBox,
    /// Rigid transform from local to world space
    pub transform: Mat4,
}

impl OrientedBoundingBox {
    /// Create an oriented box over `bounds` with an identity transform.
    #[must_use]
    pub fn new(bounds: BoundingBox) -> Self {
        Self {
            bounds,
            transform: Mat4::IDENTITY,
        }
    }

    /// Create an oriented box over `bounds` with the given rigid transform.
    #[must_use]
    pub fn with_transform(bounds: BoundingBox, transform: Mat4) -> Self {
        Self { bounds, transform }
    }

    /// Get the center in world space.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        self.transform.transform_point3(self.bounds.center())
    }

    /// Get the half extents along the local axes.
    #[must_use]
    pub fn half_extents(&self) -> Vec3 {
        self.bounds.dimensions() * 0.5
    }

    /// Get the local axes in world space.
    #[must_use]
    pub fn axes(&self) -> [Vec3; 3] {
        [
            self.transform.x_axis.truncate(),
            self.transform.y_axis.truncate(),
            self.transform.z_axis.truncate(),
        ]
    }

    /// Get the eight corners in world space.
    #[must_use]
    pub fn corners(&self) -> [Vec3; 8] {
        self.bounds
            .corners()
            .map(|corner| self.transform.transform_point3(corner))
    }

    /// Check if a world-space point is inside the box (boundary inclusive).
    #[must_use]
    pub fn contains_point(&self, point: Vec3) -> bool {
        let local = self.transform.inverse().transform_point3(point);
        self.bounds.contains_point(local)
    }

    /// Check if `other` lies entirely inside the box.
    ///
    /// All eight of `other`'s world-space corners are mapped into this
    /// box's local frame and tested against the inner bounds.
    #[must_use]
    pub fn contains_obb(&self, other: &Self) -> bool {
        let world_to_local = self.transform.inverse();
        other
            .corners()
            .iter()
            .all(|&corner| self.bounds.contains_point(world_to_local.transform_point3(corner)))
    }

    /// Check if the box overlaps `other`.
    ///
    /// Separating-axis test over the 15 candidate axes: the three face
    /// normals of each box plus the nine edge cross products. Near-zero
    /// cross products from parallel edge pairs are skipped. Projection
    /// comparisons are tolerant of one rounding unit ([`COLLISION_EPSILON`]),
    /// so boxes a single rounding step apart are reported disjoint.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        let a_axes = self.axes();
        let b_axes = other.axes();
        let a_half = self.half_extents();
        let b_half = other.half_extents();
        let delta = other.center() - self.center();

        let mut candidates = [Vec3::ZERO; 15];
        candidates[..3].copy_from_slice(&a_axes);
        candidates[3..6].copy_from_slice(&b_axes);
        let mut n = 6;
        for a in a_axes {
            for b in b_axes {
                candidates[n] = a.cross(b);
                n += 1;
            }
        }

        for axis in candidates {
            // Parallel edge pairs yield a degenerate axis
            if axis.length_squared() <= COLLISION_EPSILON {
                continue;
            }
            let distance = delta.dot(axis).abs();
            let reach = projected_radius(axis, &a_axes, a_half)
                + projected_radius(axis, &b_axes, b_half);
            if distance + COLLISION_EPSILON >= reach {
                return false;
            }
        }
        true
    }
}

impl From<BoundingBox> for OrientedBoundingBox {
    fn from(bounds: BoundingBox) -> Self {
        Self::new(bounds)
    }
}

/// Half width of a box's projection onto `axis`, given its world-space
/// axes and local half extents.
fn projected_radius(axis: Vec3, axes: &[Vec3; 3], half: Vec3) -> f32 {
    half.x * axes[0].dot(axis).abs()
        + half.y * axes[1].dot(axis).abs()
        + half.z * axes[2].dot(axis).abs()
}
