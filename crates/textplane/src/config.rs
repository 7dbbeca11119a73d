//! Scene configuration
//!
//! Serde-backed description of a scene (surface, camera, planes) that can
//! be loaded from TOML or RON files and turned into a live [`Scene`].

use crate::foundation::math::{utils, Vec3};
use crate::render::Camera;
use crate::scene::{Scene, TextPlane};
use crate::text::LayoutEngine;
use serde::{Deserialize, Serialize};

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),
}

/// Render surface dimensions in pixels
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SurfaceConfig {
    /// Surface width in pixels
    pub width: u32,
    /// Surface height in pixels
    pub height: u32,
}

impl SurfaceConfig {
    /// Aspect ratio (width / height)
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

/// Camera parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Camera position in world space
    pub position: [f32; 3],
    /// Look-at target in world space
    pub target: [f32; 3],
    /// Up vector
    pub up: [f32; 3],
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    /// Near clipping plane distance
    pub near: f32,
    /// Far clipping plane distance
    pub far: f32,
}

impl CameraConfig {
    /// Build a [`Camera`] for a surface with the given aspect ratio
    pub fn to_camera(&self, aspect: f32) -> Camera {
        let mut camera = Camera::perspective(
            Vec3::from(self.position),
            utils::deg_to_rad(self.fov_degrees),
            aspect,
            self.near,
            self.far,
        );
        camera.look_at(Vec3::from(self.target), Vec3::from(self.up));
        camera
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 0.0],
            target: [0.0, 0.0, -1.0],
            up: [0.0, 1.0, 0.0],
            fov_degrees: 45.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

/// One text plane: placement plus content
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaneConfig {
    /// World-space position
    pub position: [f32; 3],
    /// Euler rotation in radians (applied X, then Y, then Z)
    pub rotation: [f32; 3],
    /// Text to lay out on the plane
    pub text: String,
}

/// A complete scene description
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Render surface dimensions
    #[serde(default)]
    pub surface: SurfaceConfig,
    /// Camera parameters
    #[serde(default)]
    pub camera: CameraConfig,
    /// Text planes in scene order
    #[serde(default)]
    pub planes: Vec<PlaneConfig>,
}

impl SceneConfig {
    /// Load a scene configuration from a TOML or RON file
    ///
    /// The format is chosen by file extension.
    pub fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;

        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save this configuration to a TOML or RON file
    pub fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Build a live scene, laying out every plane's text with `engine`
    pub fn to_scene(&self, engine: &dyn LayoutEngine) -> Scene {
        let mut scene = Scene::new(self.camera.to_camera(self.surface.aspect()));
        for plane in &self.planes {
            scene.add_plane(TextPlane::with_text(
                Vec3::from(plane.position),
                Vec3::from(plane.rotation),
                &plane.text,
                engine,
            ));
        }
        scene
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::MonospaceLayout;
    use approx::assert_relative_eq;

    #[test]
    fn test_toml_round_trip() {
        let config = SceneConfig {
            surface: SurfaceConfig {
                width: 800,
                height: 600,
            },
            camera: CameraConfig::default(),
            planes: vec![PlaneConfig {
                position: [0.5, -1.0, -6.0],
                rotation: [0.0, 0.7, 0.0],
                text: "hello there".into(),
            }],
        };

        let encoded = toml::to_string_pretty(&config).unwrap();
        let decoded: SceneConfig = toml::from_str(&encoded).unwrap();

        assert_eq!(decoded.surface.width, 800);
        assert_eq!(decoded.planes.len(), 1);
        assert_eq!(decoded.planes[0].text, "hello there");
        assert_relative_eq!(decoded.planes[0].rotation[1], 0.7, epsilon = 1e-6);
    }

    #[test]
    fn test_missing_sections_fall_back_to_defaults() {
        let decoded: SceneConfig = toml::from_str("").unwrap();

        assert_eq!(decoded.surface.width, 1280);
        assert_relative_eq!(decoded.camera.fov_degrees, 45.0, epsilon = 1e-6);
        assert!(decoded.planes.is_empty());
    }

    #[test]
    fn test_to_scene_builds_ready_planes() {
        let config = SceneConfig {
            planes: vec![
                PlaneConfig {
                    position: [0.0, 0.0, -6.0],
                    rotation: [0.0; 3],
                    text: "lorem ipsum".into(),
                },
                PlaneConfig {
                    position: [1.0, 0.0, -8.0],
                    rotation: [0.0; 3],
                    text: "dolor sit amet".into(),
                },
            ],
            ..Default::default()
        };

        let scene = config.to_scene(&MonospaceLayout::default());

        assert_eq!(scene.plane_count(), 2);
        assert!(scene.planes().iter().all(TextPlane::is_ready));
        assert_eq!(scene.plane(1).unwrap().layout().unwrap().len(), 3);
        assert_relative_eq!(scene.camera.aspect, 1280.0 / 720.0, epsilon = 1e-6);
    }
}
