//! Scene context: a camera and an ordered list of text planes
//!
//! The scene is an explicit context object owned by the caller and passed
//! into the picking coordinator. There is no ambient or module-level scene
//! state anywhere in the crate.

mod plane;

pub use plane::{PlaneVertex, TextPlane, UNIT_QUAD};

use crate::render::Camera;

/// Everything the picking pipeline operates on
///
/// Plane order is significant: the coordinator iterates planes in list
/// order, which makes tie-breaks between equally distant hits
/// deterministic. The list may grow during scene construction, but must
/// not change length while a picking pass is running (the pass borrows the
/// scene for its full duration, so the borrow checker enforces this).
#[derive(Debug, Clone)]
pub struct Scene {
    /// The active camera
    pub camera: Camera,
    planes: Vec<TextPlane>,
}

impl Scene {
    /// Create an empty scene viewed through `camera`
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            planes: Vec::new(),
        }
    }

    /// Append a plane and return its index
    pub fn add_plane(&mut self, plane: TextPlane) -> usize {
        self.planes.push(plane);
        self.planes.len() - 1
    }

    /// Planes in scene order
    pub fn planes(&self) -> &[TextPlane] {
        &self.planes
    }

    /// Mutable access to the planes, without changing the list length
    pub fn planes_mut(&mut self) -> &mut [TextPlane] {
        &mut self.planes
    }

    /// The plane at `index`, if present
    pub fn plane(&self, index: usize) -> Option<&TextPlane> {
        self.planes.get(index)
    }

    /// Number of planes in the scene
    pub fn plane_count(&self) -> usize {
        self.planes.len()
    }

    /// Whether the scene holds no planes
    pub fn is_empty(&self) -> bool {
        self.planes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec3;

    #[test]
    fn test_add_plane_returns_stable_indices() {
        let mut scene = Scene::new(Camera::default());
        let a = scene.add_plane(TextPlane::new(Vec3::zeros(), Vec3::zeros()));
        let b = scene.add_plane(TextPlane::new(Vec3::new(1.0, 0.0, 0.0), Vec3::zeros()));

        assert_eq!(a, 0);
        assert_eq!(b, 1);
        assert_eq!(scene.plane_count(), 2);
        assert_eq!(scene.plane(1).unwrap().position, Vec3::new(1.0, 0.0, 0.0));
        assert!(scene.plane(2).is_none());
    }
}
