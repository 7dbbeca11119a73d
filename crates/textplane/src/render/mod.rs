//! Rendering-facing types
//!
//! The actual rendering plumbing (window, GPU programs, buffer upload, text
//! rasterization) lives outside this crate behind the [`RenderBackend`]
//! trait. The library only decides *what* must be repainted; the backend
//! decides *how*.

mod camera;

pub use camera::{Camera, CameraError};

/// Seam to the external rendering collaborator
///
/// Implementations repaint the scene and regenerate plane textures. Both
/// calls are synchronous; a regenerated texture must reflect the new
/// highlight state on the very next frame.
pub trait RenderBackend {
    /// Regenerate the texture of one plane after its highlight changed
    ///
    /// `highlighted` is the new highlighted word index for that plane, or
    /// `None` when the highlight was cleared. Invoked exactly once per
    /// actual state change; repeated identical highlights produce no call.
    fn regenerate_plane_texture(&mut self, plane_index: usize, highlighted: Option<usize>);

    /// Repaint all planes using their current highlight state
    fn request_redraw(&mut self);
}
