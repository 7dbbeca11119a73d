//! 3D perspective camera and screen-ray generation
//!
//! The camera holds view parameters and derives its matrices on demand.
//! Its central job here is [`Camera::screen_to_world_ray`]: turning a 2D
//! cursor position in normalized device coordinates into a world-space ray
//! for picking.
//!
//! # Coordinate System
//! Right-handed, Y-up world and view space. The projection maps view-space
//! z in `[-near, -far]` to clip-space `[-1, 1]` (see
//! [`Mat4Ext::perspective`]).

use crate::foundation::math::{Mat4, Mat4Ext, Vec3, Vec4};
use crate::picking::Ray;
use thiserror::Error;

/// Threshold below which the up vector counts as parallel to the view
/// direction.
const DEGENERATE_CROSS_EPSILON: f32 = 1e-6;

/// Errors raised by camera matrix and ray construction
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraError {
    /// The up vector is parallel to the view direction, or the view
    /// direction is zero; no valid view basis exists.
    #[error("degenerate camera orientation: up vector parallel to view direction")]
    DegenerateOrientation,

    /// A camera matrix could not be inverted for ray generation.
    #[error("singular {0} matrix: cannot be inverted for ray generation")]
    SingularMatrix(&'static str),
}

/// 3D perspective camera
///
/// Constructed once per scene; mutated when the viewport resizes (aspect
/// ratio) or the viewpoint moves. Matrices are recomputed on demand and
/// never cached, so setter calls are cheap.
///
/// # Invariants
/// `near > 0`, `near < far`, and `up` must not be parallel to
/// `target - position`. The orientation invariant is checked (not assumed)
/// by [`Camera::view_matrix`].
#[derive(Debug, Clone)]
pub struct Camera {
    /// Camera position in world space
    pub position: Vec3,

    /// Point the camera is looking at in world space
    pub target: Vec3,

    /// Up vector for camera orientation (typically [0, 1, 0])
    pub up: Vec3,

    /// Field of view angle in radians
    pub fov: f32,

    /// Aspect ratio (width / height)
    pub aspect: f32,

    /// Distance to near clipping plane
    pub near: f32,

    /// Distance to far clipping plane
    pub far: f32,
}

impl Camera {
    /// Create a perspective camera at `position` looking at the origin
    ///
    /// # Arguments
    /// * `position` - Camera position in world space
    /// * `fov` - Vertical field of view in radians
    /// * `aspect` - Viewport aspect ratio (width / height)
    /// * `near` - Near clipping plane distance (must be > 0)
    /// * `far` - Far clipping plane distance (must be > near)
    pub fn perspective(position: Vec3, fov: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            position,
            target: Vec3::zeros(),
            up: Vec3::new(0.0, 1.0, 0.0),
            fov,
            aspect,
            near,
            far,
        }
    }

    /// Update camera position in world space
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        log::trace!("Camera position updated to: {:?}", position);
    }

    /// Update camera target (look-at point)
    pub fn set_target(&mut self, target: Vec3) {
        self.target = target;
        log::trace!("Camera target updated to: {:?}", target);
    }

    /// Point the camera at `target` with the given up vector
    pub fn look_at(&mut self, target: Vec3, up: Vec3) {
        self.target = target;
        self.up = up;
        log::trace!("Camera look_at updated - target: {:?}, up: {:?}", target, up);
    }

    /// Update the aspect ratio after a viewport resize
    pub fn set_aspect_ratio(&mut self, aspect: f32) {
        if (self.aspect - aspect).abs() > 0.01 {
            log::debug!("Camera aspect ratio changed: {:.3} -> {:.3}", self.aspect, aspect);
        }
        self.aspect = aspect;
    }

    /// Generate the perspective projection matrix
    ///
    /// Pure function of camera state; no side effects.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective(self.fov, self.aspect, self.near, self.far)
    }

    /// Generate the world-to-camera view matrix
    ///
    /// # Errors
    /// Returns [`CameraError::DegenerateOrientation`] when the up vector is
    /// parallel to the view direction or the view direction is zero. A
    /// degenerate basis is surfaced rather than silently replaced by
    /// identity.
    pub fn view_matrix(&self) -> Result<Mat4, CameraError> {
        let forward = self.target - self.position;
        if forward.magnitude_squared() < DEGENERATE_CROSS_EPSILON {
            return Err(CameraError::DegenerateOrientation);
        }
        if forward.normalize().cross(&self.up).magnitude_squared() < DEGENERATE_CROSS_EPSILON {
            return Err(CameraError::DegenerateOrientation);
        }

        Ok(Mat4::look_at(self.position, self.target, self.up))
    }

    /// Convert a cursor position in NDC to a world-space ray
    ///
    /// # Arguments
    /// * `ndc_x` - Cursor X in `[-1, 1]`, left to right
    /// * `ndc_y` - Cursor Y in `[-1, 1]`, bottom to top
    ///
    /// # Algorithm
    /// 1. Build the clip-space point at the near plane (`z = -1, w = 1`).
    /// 2. Multiply by the inverse projection matrix.
    /// 3. Perform the perspective divide. The divide is mandatory: without
    ///    it the view-space point is off by a factor of `w` and the ray
    ///    direction bends toward the frustum center.
    /// 4. Multiply by the inverse view matrix.
    /// 5. Direction = normalize(world point - camera position), origin =
    ///    camera position.
    ///
    /// The returned direction has unit length within 1e-5.
    ///
    /// # Errors
    /// [`CameraError::SingularMatrix`] if the projection or view matrix is
    /// not invertible, [`CameraError::DegenerateOrientation`] from the view
    /// basis. Neither should occur under valid camera invariants, but both
    /// are checked rather than assumed.
    pub fn screen_to_world_ray(&self, ndc_x: f32, ndc_y: f32) -> Result<Ray, CameraError> {
        let inv_projection = self
            .projection_matrix()
            .try_inverse()
            .ok_or(CameraError::SingularMatrix("projection"))?;
        let inv_view = self
            .view_matrix()?
            .try_inverse()
            .ok_or(CameraError::SingularMatrix("view"))?;

        // Clip-space point on the near plane under the [-1, 1] depth
        // convention.
        let clip = Vec4::new(ndc_x, ndc_y, -1.0, 1.0);

        let eye_h = inv_projection * clip;
        let eye = Vec4::new(
            eye_h.x / eye_h.w,
            eye_h.y / eye_h.w,
            eye_h.z / eye_h.w,
            1.0,
        );

        let world_h = inv_view * eye;
        let world = Vec3::new(world_h.x, world_h.y, world_h.z);

        let direction = (world - self.position).normalize();
        Ok(Ray::new(self.position, direction))
    }
}

impl Default for Camera {
    /// A 45-degree, widescreen camera a few units back on +Z, looking at
    /// the origin.
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 4.0),
            target: Vec3::zeros(),
            up: Vec3::new(0.0, 1.0, 0.0),
            fov: std::f32::consts::FRAC_PI_4,
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 100.0,
        }
    }
}
