//! Math utilities and types
//!
//! Provides fundamental math types for the 3D text-plane scene. All types
//! have value semantics: every operation returns a fresh matrix or vector,
//! and no internal buffers are ever shared or reused between calls.

pub use nalgebra::{Matrix3, Matrix4, Unit, Vector2, Vector3, Vector4};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// 3x3 matrix type
pub type Mat3 = Matrix3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// 3D point type
pub type Point3 = nalgebra::Point3<f32>;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// 2 * Pi
    pub const TAU: f32 = 2.0 * PI;

    /// Pi / 2
    pub const HALF_PI: f32 = PI * 0.5;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;

    /// Radians to degrees conversion factor
    pub const RAD_TO_DEG: f32 = 180.0 / PI;
}

/// Math utility functions
pub mod utils {
    use super::constants;

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }

    /// Convert radians to degrees
    pub fn rad_to_deg(radians: f32) -> f32 {
        radians * constants::RAD_TO_DEG
    }
}

/// Extension trait for Mat4 with graphics-oriented constructors
pub trait Mat4Ext {
    /// Create a rotation matrix around the X axis
    fn rotation_x(angle: f32) -> Mat4;

    /// Create a rotation matrix around the Y axis
    fn rotation_y(angle: f32) -> Mat4;

    /// Create a rotation matrix around the Z axis
    fn rotation_z(angle: f32) -> Mat4;

    /// Create a right-handed perspective projection matrix
    ///
    /// Depth convention: view-space z in `[-near, -far]` maps to clip-space
    /// `[-1, 1]` (GL-style). The ray unprojection in
    /// [`crate::render::Camera`] builds its near-plane clip point with
    /// `z = -1` and depends on this convention.
    fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4;

    /// Create a right-handed look-at view matrix
    ///
    /// The caller is responsible for rejecting degenerate inputs (`eye ==
    /// target`, or `up` parallel to the view direction); with such inputs
    /// the result contains non-finite or zero rows.
    fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4;
}

impl Mat4Ext for Mat4 {
    fn rotation_x(angle: f32) -> Mat4 {
        Mat4::from_axis_angle(&Vec3::x_axis(), angle)
    }

    fn rotation_y(angle: f32) -> Mat4 {
        Mat4::from_axis_angle(&Vec3::y_axis(), angle)
    }

    fn rotation_z(angle: f32) -> Mat4 {
        Mat4::from_axis_angle(&Vec3::z_axis(), angle)
    }

    #[rustfmt::skip]
    fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
        let f = 1.0 / (fov_y * 0.5).tan();

        // Standard right-handed GL projection:
        // [ f/a  0   0                      0                    ]
        // [ 0    f   0                      0                    ]
        // [ 0    0   (far+near)/(near-far)  2*far*near/(near-far)]
        // [ 0    0   -1                     0                    ]
        Mat4::new(
            f / aspect, 0.0, 0.0,                         0.0,
            0.0,        f,   0.0,                         0.0,
            0.0,        0.0, (far + near) / (near - far), (2.0 * far * near) / (near - far),
            0.0,        0.0, -1.0,                        0.0,
        )
    }

    #[rustfmt::skip]
    fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
        let forward = (target - eye).normalize();
        let right = forward.cross(&up).normalize();
        let camera_up = right.cross(&forward);

        Mat4::new(
            right.x,     right.y,     right.z,     -right.dot(&eye),
            camera_up.x, camera_up.y, camera_up.z, -camera_up.dot(&eye),
            -forward.x,  -forward.y,  -forward.z,  forward.dot(&eye),
            0.0,         0.0,         0.0,         1.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn test_rotation_z_quarter_turn() {
        let m = Mat4::rotation_z(constants::HALF_PI);
        let rotated = m.transform_vector(&Vec3::new(1.0, 0.0, 0.0));

        // X axis rotated 90 degrees around Z lands on Y
        assert_relative_eq!(rotated, Vec3::new(0.0, 1.0, 0.0), epsilon = EPSILON);
    }

    #[test]
    fn test_perspective_depth_range() {
        let proj = Mat4::perspective(constants::PI / 4.0, 16.0 / 9.0, 0.1, 100.0);

        // A point on the near plane (view-space z = -near) maps to ndc z = -1
        let near_point = proj * Vec4::new(0.0, 0.0, -0.1, 1.0);
        assert_relative_eq!(near_point.z / near_point.w, -1.0, epsilon = 1e-4);

        // A point on the far plane maps to ndc z = +1
        let far_point = proj * Vec4::new(0.0, 0.0, -100.0, 1.0);
        assert_relative_eq!(far_point.z / far_point.w, 1.0, epsilon = 1e-4);
    }

    #[test]
    fn test_look_at_from_positive_z() {
        let view = Mat4::look_at(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::zeros(),
            Vec3::new(0.0, 1.0, 0.0),
        );

        // The eye maps to the view-space origin
        let eye_in_view = view.transform_point(&Point3::new(0.0, 0.0, 5.0));
        assert_relative_eq!(eye_in_view, Point3::origin(), epsilon = EPSILON);

        // The target sits straight ahead, 5 units down -Z in view space
        let target_in_view = view.transform_point(&Point3::origin());
        assert_relative_eq!(target_in_view, Point3::new(0.0, 0.0, -5.0), epsilon = EPSILON);
    }

    #[test]
    fn test_degree_radian_round_trip() {
        assert_relative_eq!(utils::deg_to_rad(180.0), constants::PI, epsilon = EPSILON);
        assert_relative_eq!(utils::rad_to_deg(constants::PI), 180.0, epsilon = 1e-4);
    }
}
