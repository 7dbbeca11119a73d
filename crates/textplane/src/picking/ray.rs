//! Ray primitive and plane-hit records for picking

use crate::foundation::math::{Vec2, Vec3};

/// A world-space ray for picking
///
/// Ephemeral: constructed per pick query, never stored between events.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// The origin point of the ray in world space
    pub origin: Vec3,
    /// The direction of the ray (unit length)
    pub direction: Vec3,
}

impl Ray {
    /// Creates a new ray with the given origin and direction
    ///
    /// The direction is normalized on construction.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Get a point along the ray at distance t
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Result of a ray-quad intersection test against a text plane
#[derive(Debug, Clone, Copy)]
pub struct PlaneHit {
    /// The point of intersection in world space
    pub point: Vec3,
    /// The hit mapped into the plane's nominal pixel space, where word
    /// bounding boxes live
    pub uv: Vec2,
    /// Distance from the ray origin to the hit point
    pub distance: f32,
}
