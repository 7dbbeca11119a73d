//! # textplane
//!
//! A 3D scene of textured, word-wrapped text planes with interactive
//! word-level picking via mouse ray casting.
//!
//! ## Features
//!
//! - **Camera math**: perspective projection, look-at view, NDC-to-world
//!   ray generation with checked matrix inversion
//! - **Plane quads**: Euler-rotated unit quads with analytic ray
//!   intersection and hit-to-texture-space mapping
//! - **Word picking**: per-pointer-move resolution of the single word
//!   under the cursor across the whole scene
//! - **Deterministic layout**: monospace word wrapping in the exact pixel
//!   space the picking math lands in
//!
//! Window management, GPU programs, texture rasterization and text
//! sourcing stay outside the crate, behind the
//! [`render::RenderBackend`] and [`text::LayoutEngine`] seams.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use textplane::prelude::*;
//!
//! struct NoopBackend;
//!
//! impl RenderBackend for NoopBackend {
//!     fn regenerate_plane_texture(&mut self, _plane: usize, _word: Option<usize>) {}
//!     fn request_redraw(&mut self) {}
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let camera = Camera::perspective(Vec3::zeros(), 0.8, 16.0 / 9.0, 0.1, 100.0);
//!     let mut scene = Scene::new(camera);
//!     scene.add_plane(TextPlane::with_text(
//!         Vec3::new(0.0, 0.0, -6.0),
//!         Vec3::zeros(),
//!         "lorem ipsum dolor sit amet",
//!         &MonospaceLayout::default(),
//!     ));
//!
//!     let mut coordinator = PickingCoordinator::new(1280, 720);
//!     let mut backend = NoopBackend;
//!     if let Some(hit) = coordinator.pointer_moved(&mut scene, &mut backend, 640.0, 360.0)? {
//!         println!("hovering word {} of plane {}", hit.word_index, hit.plane_index);
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod foundation;
pub mod input;
pub mod picking;
pub mod render;
pub mod scene;
pub mod text;

/// Common imports for crate users
pub mod prelude {
    pub use crate::{
        config::{CameraConfig, PlaneConfig, SceneConfig, SurfaceConfig},
        foundation::math::{Mat4, Mat4Ext, Vec2, Vec3, Vec4},
        input::PointerState,
        picking::{PickError, PickingCoordinator, Ray, WordHit},
        render::{Camera, CameraError, RenderBackend},
        scene::{Scene, TextPlane},
        text::{LayoutEngine, MonospaceLayout, TextLayout, WordBox},
    };
}
