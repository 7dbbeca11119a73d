//! Textured text plane: transform, quad geometry, ray intersection,
//! highlight state
//!
//! A plane is a unit quad in its local XY plane, corners at (±1, ±1, 0),
//! carrying a word-wrapped text texture. Picking intersects a world-space
//! ray with the quad and maps the hit back into the texture's pixel space
//! for word lookup.

use crate::foundation::math::{Mat4, Mat4Ext, Vec2, Vec3, Vec4};
use crate::picking::{PlaneHit, Ray};
use crate::text::{LayoutEngine, TextLayout};

/// Half-extent of the local quad: corners sit at (±1, ±1, 0)
const QUAD_HALF_EXTENT: f32 = 1.0;

/// Below this |ray · normal| the ray counts as parallel to the plane.
/// Exactly-grazing rays are treated as misses: stability over completeness
/// near-tangent.
const PARALLEL_EPSILON: f32 = 1e-6;

/// Numerical sanity bound on the local-space z of a hit that the planar
/// math already placed on the plane
const LOCAL_Z_TOLERANCE: f32 = 0.01;

/// One vertex of the plane quad, position plus texture coordinate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneVertex {
    /// Local-space position
    pub position: [f32; 3],
    /// Texture coordinate, (0,0) at the (-1,-1) corner
    pub uv: [f32; 2],
}

/// Triangle-list geometry of the unit quad (two triangles, six vertices),
/// for upload by the rendering collaborator
pub const UNIT_QUAD: [PlaneVertex; 6] = [
    PlaneVertex { position: [-1.0, -1.0, 0.0], uv: [0.0, 0.0] },
    PlaneVertex { position: [1.0, -1.0, 0.0], uv: [1.0, 0.0] },
    PlaneVertex { position: [-1.0, 1.0, 0.0], uv: [0.0, 1.0] },
    PlaneVertex { position: [1.0, -1.0, 0.0], uv: [1.0, 0.0] },
    PlaneVertex { position: [1.0, 1.0, 0.0], uv: [1.0, 1.0] },
    PlaneVertex { position: [-1.0, 1.0, 0.0], uv: [0.0, 1.0] },
];

/// A positioned, rotated text plane in the scene
///
/// Geometry and words are immutable once the text is attached; only the
/// highlighted word index mutates afterwards, on every resolved pick.
#[derive(Debug, Clone)]
pub struct TextPlane {
    /// World-space position
    pub position: Vec3,
    /// Euler rotation in radians; the model matrix applies local X first,
    /// then Y, then Z (R = Rz · Ry · Rx)
    pub rotation: Vec3,
    layout: Option<TextLayout>,
    highlighted: Option<usize>,
}

impl TextPlane {
    /// Fixed texture width of every plane, in pixels; height follows from
    /// the layout
    pub const TEXTURE_WIDTH: u32 = 256;

    /// Create a plane with no text yet
    ///
    /// The plane can be placed and rendered as a blank quad, but it is not
    /// pick-eligible until [`TextPlane::set_text`] attaches a layout. This
    /// lets scene construction populate planes as their text arrives.
    pub fn new(position: Vec3, rotation: Vec3) -> Self {
        Self {
            position,
            rotation,
            layout: None,
            highlighted: None,
        }
    }

    /// Create a plane and lay out its text immediately
    pub fn with_text(
        position: Vec3,
        rotation: Vec3,
        text: &str,
        engine: &dyn LayoutEngine,
    ) -> Self {
        let mut plane = Self::new(position, rotation);
        plane.set_text(text, engine);
        plane
    }

    /// Attach word-wrapped text to this plane
    ///
    /// Replaces any previous layout and clears the highlight.
    pub fn set_text(&mut self, text: &str, engine: &dyn LayoutEngine) {
        let layout = engine.layout(text, Self::TEXTURE_WIDTH);
        log::debug!(
            "plane text laid out: {} words, {}x{} px",
            layout.len(),
            layout.width(),
            layout.height()
        );
        self.layout = Some(layout);
        self.highlighted = None;
    }

    /// The laid-out words of this plane, if text has been attached
    pub fn layout(&self) -> Option<&TextLayout> {
        self.layout.as_ref()
    }

    /// Whether this plane is ready to participate in picking
    pub fn is_ready(&self) -> bool {
        self.layout.is_some()
    }

    /// Currently highlighted word index, if any
    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// Set or clear the highlighted word
    ///
    /// Returns `true` when the stored index actually changed; callers
    /// forward a change into exactly one texture-regeneration signal.
    /// Setting the index already in place is a no-op.
    pub fn set_highlight(&mut self, index: Option<usize>) -> bool {
        if let (Some(i), Some(layout)) = (index, self.layout.as_ref()) {
            debug_assert!(i < layout.len(), "highlight index out of range");
        }
        if self.highlighted == index {
            return false;
        }
        self.highlighted = index;
        true
    }

    /// Compose the model matrix: translation times R = Rz · Ry · Rx
    ///
    /// Recomputed on demand since position and rotation may change.
    pub fn model_matrix(&self) -> Mat4 {
        let rotation = Mat4::rotation_z(self.rotation.z)
            * Mat4::rotation_y(self.rotation.y)
            * Mat4::rotation_x(self.rotation.x);
        Mat4::new_translation(&self.position) * rotation
    }

    /// Intersect a world-space ray with this plane's quad
    ///
    /// Returns the world hit point, the hit mapped into the plane's pixel
    /// space, and the ray parameter `t`, or `None` when the ray misses:
    /// parallel (or exactly grazing) rays, intersections behind the ray
    /// origin, and hits outside the quad's `[-1, 1]²` extent all miss.
    /// Planes without text are not pick-eligible and always miss.
    pub fn intersect_ray(&self, ray: &Ray) -> Option<PlaneHit> {
        let layout = self.layout.as_ref()?;

        let model = self.model_matrix();
        let Some(inv_model) = model.try_inverse() else {
            log::warn!("plane model matrix is singular; treating as a miss");
            return None;
        };

        let plane_pos = Vec3::new(model[(0, 3)], model[(1, 3)], model[(2, 3)]);

        // Local normal (0,0,1) through the inverse-transpose, which stays
        // correct under non-uniform scale
        let normal_h = inv_model.transpose() * Vec4::new(0.0, 0.0, 1.0, 0.0);
        let world_normal = Vec3::new(normal_h.x, normal_h.y, normal_h.z).normalize();

        let denom = ray.direction.dot(&world_normal);
        if denom.abs() < PARALLEL_EPSILON {
            return None;
        }

        let t = (plane_pos - ray.origin).dot(&world_normal) / denom;
        if t < 0.0 {
            return None;
        }

        let point = ray.point_at(t);
        let local_h = inv_model * Vec4::new(point.x, point.y, point.z, 1.0);
        let local = Vec3::new(local_h.x, local_h.y, local_h.z);

        if local.z.abs() >= LOCAL_Z_TOLERANCE {
            log::warn!(
                "plane hit failed the local-z sanity check (z = {:.4}); treating as a miss",
                local.z
            );
            return None;
        }
        if local.x.abs() > QUAD_HALF_EXTENT || local.y.abs() > QUAD_HALF_EXTENT {
            return None;
        }

        // Local [-1, 1]² to normalized UV to nominal pixels
        let u = (local.x + 1.0) * 0.5 * Self::TEXTURE_WIDTH as f32;
        let v = (local.y + 1.0) * 0.5 * layout.height() as f32;

        Some(PlaneHit {
            point,
            uv: Vec2::new(u, v),
            distance: t,
        })
    }
}
