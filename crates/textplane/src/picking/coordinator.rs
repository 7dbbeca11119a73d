//! Picking coordinator: from pointer event to highlight state
//!
//! One coordinator drives the whole scene. Each pointer-move runs a single
//! synchronous pass: build the camera ray, test every plane, resolve the
//! winning word, update per-plane highlight state, request a repaint. The
//! pass is stateless between events except for each plane's highlight.

use crate::foundation::math::Vec3;
use crate::input::PointerState;
use crate::render::{CameraError, RenderBackend};
use crate::scene::Scene;
use thiserror::Error;

/// Errors that abort a picking pass
///
/// Geometric misses are not errors; only numerical failures that would
/// otherwise produce a garbage ray surface here. A failed pass leaves all
/// highlight state untouched.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickError {
    /// The camera could not produce a valid ray for this frame
    #[error(transparent)]
    Camera(#[from] CameraError),
}

/// The resolved word under the cursor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WordHit {
    /// Index of the plane in scene order
    pub plane_index: usize,
    /// Index of the word within that plane's layout
    pub word_index: usize,
    /// World-space hit point
    pub point: Vec3,
    /// Distance from the ray origin to the hit point
    pub distance: f32,
}

/// Per-pass candidate: a plane whose quad was hit with the hit point
/// inside one of its word boxes. Rebuilt from scratch each pointer event.
#[derive(Debug, Clone, Copy)]
struct HitCandidate {
    plane_index: usize,
    word_index: usize,
    point: Vec3,
    distance: f32,
}

/// Drives picking for one scene
///
/// Owns the pointer state (position plus surface size); the scene and the
/// render backend are borrowed per call, so the caller keeps ownership of
/// both.
#[derive(Debug, Clone)]
pub struct PickingCoordinator {
    pointer: PointerState,
}

impl PickingCoordinator {
    /// Create a coordinator for a surface of the given pixel size
    pub fn new(surface_width: u32, surface_height: u32) -> Self {
        Self {
            pointer: PointerState::new(surface_width, surface_height),
        }
    }

    /// Current pointer state
    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    /// Update the tracked surface size after a resize event
    ///
    /// The camera's aspect ratio is scene state; update it separately via
    /// [`crate::render::Camera::set_aspect_ratio`].
    pub fn handle_resize(&mut self, width: u32, height: u32) {
        self.pointer.update_surface_size(width, height);
    }

    /// Process a pointer-move event at device-pixel position `(x, y)`
    ///
    /// Runs the full picking pass and returns the word now under the
    /// cursor, if any. After the pass at most one word across the entire
    /// scene is highlighted, every plane that lost its highlight has been
    /// cleared, each actual highlight change has produced exactly one
    /// texture-regeneration signal, and a redraw has been requested
    /// unconditionally.
    ///
    /// # Errors
    /// Propagates camera failures ([`PickError::Camera`]); the frame's
    /// pick is abandoned and no highlight changes.
    pub fn pointer_moved(
        &mut self,
        scene: &mut Scene,
        backend: &mut dyn RenderBackend,
        x: f64,
        y: f64,
    ) -> Result<Option<WordHit>, PickError> {
        self.pointer.update_position(x, y);
        self.pick(scene, backend)
    }

    /// Run a picking pass at the current pointer position
    pub fn pick(
        &self,
        scene: &mut Scene,
        backend: &mut dyn RenderBackend,
    ) -> Result<Option<WordHit>, PickError> {
        if scene.is_empty() {
            log::warn!("picking pass over an empty scene; nothing to hit");
            backend.request_redraw();
            return Ok(None);
        }

        let (ndc_x, ndc_y) = self.pointer.to_ndc();
        let ray = scene.camera.screen_to_world_ray(ndc_x, ndc_y)?;

        // Gather every plane whose quad is hit with the hit point inside a
        // word box. Planes without text yet are skipped (not pick-eligible).
        let mut candidates: Vec<HitCandidate> = Vec::new();
        for (plane_index, plane) in scene.planes().iter().enumerate() {
            let Some(hit) = plane.intersect_ray(&ray) else {
                continue;
            };
            let Some(layout) = plane.layout() else {
                continue;
            };
            // First containing box wins when boxes overlap
            if let Some(word_index) = layout.word_at(hit.uv.x, hit.uv.y) {
                candidates.push(HitCandidate {
                    plane_index,
                    word_index,
                    point: hit.point,
                    distance: hit.distance,
                });
            }
        }

        // Nearest hit wins. The metric is the distance from the WORLD
        // ORIGIN to the hit point, not from the camera; strict `<` keeps
        // the first candidate in scene order on exact ties.
        let mut winner: Option<HitCandidate> = None;
        let mut winner_metric = f32::MAX;
        for candidate in &candidates {
            let metric = candidate.point.magnitude();
            if metric < winner_metric {
                winner_metric = metric;
                winner = Some(*candidate);
            }
        }

        // Apply highlight state to every plane: the winner gets its word,
        // everyone else (missed planes, word-gap hits, losing candidates)
        // is cleared. Only actual changes emit a regeneration signal.
        for (plane_index, plane) in scene.planes_mut().iter_mut().enumerate() {
            let target = match winner {
                Some(w) if w.plane_index == plane_index => Some(w.word_index),
                _ => None,
            };
            if plane.set_highlight(target) {
                log::trace!("plane {} highlight -> {:?}", plane_index, target);
                backend.regenerate_plane_texture(plane_index, target);
            }
        }

        backend.request_redraw();

        Ok(winner.map(|w| WordHit {
            plane_index: w.plane_index,
            word_index: w.word_index,
            point: w.point,
            distance: w.distance,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Camera;
    use crate::scene::TextPlane;
    use crate::text::{TextLayout, WordBox};

    /// Backend double that records every signal it receives
    #[derive(Debug, Default)]
    struct RecordingBackend {
        regenerated: Vec<(usize, Option<usize>)>,
        redraws: usize,
    }

    impl RenderBackend for RecordingBackend {
        fn regenerate_plane_texture(&mut self, plane_index: usize, highlighted: Option<usize>) {
            self.regenerated.push((plane_index, highlighted));
        }

        fn request_redraw(&mut self) {
            self.redraws += 1;
        }
    }

    /// A layout whose single word box spans the whole texture, so any quad
    /// hit is a word hit
    fn full_cover_layout() -> TextLayout {
        TextLayout::new(
            vec!["cover".into()],
            vec![WordBox {
                x: 0.0,
                y: 0.0,
                width: 256.0,
                height: 128.0,
            }],
            256,
            128,
        )
    }

    struct FixedLayout(TextLayout);

    impl crate::text::LayoutEngine for FixedLayout {
        fn layout(&self, _text: &str, _max_width: u32) -> TextLayout {
            self.0.clone()
        }
    }

    fn covered_plane(position: Vec3) -> TextPlane {
        TextPlane::with_text(
            position,
            Vec3::zeros(),
            "cover",
            &FixedLayout(full_cover_layout()),
        )
    }

    /// Camera at the origin looking down -Z through an 800x600 surface
    fn scene_with_planes(planes: Vec<TextPlane>) -> Scene {
        let mut camera = Camera::perspective(
            Vec3::zeros(),
            std::f32::consts::FRAC_PI_4,
            800.0 / 600.0,
            0.1,
            100.0,
        );
        camera.set_target(Vec3::new(0.0, 0.0, -1.0));
        let mut scene = Scene::new(camera);
        for plane in planes {
            scene.add_plane(plane);
        }
        scene
    }

    #[test]
    fn test_nearest_of_two_overlapping_planes_wins() {
        let mut scene = scene_with_planes(vec![
            covered_plane(Vec3::new(0.0, 0.0, -10.0)),
            covered_plane(Vec3::new(0.0, 0.0, -5.0)),
        ]);
        // Pretend the farther plane was highlighted by an earlier pass
        scene.planes_mut()[0].set_highlight(Some(0));

        let mut coordinator = PickingCoordinator::new(800, 600);
        let mut backend = RecordingBackend::default();

        // Surface center: the ray goes straight down -Z through both quads
        let hit = coordinator
            .pointer_moved(&mut scene, &mut backend, 400.0, 300.0)
            .unwrap()
            .expect("center ray must land on a word");

        assert_eq!(hit.plane_index, 1);
        assert_eq!(hit.word_index, 0);

        // Winner highlighted, loser explicitly cleared
        assert_eq!(scene.plane(1).unwrap().highlighted(), Some(0));
        assert_eq!(scene.plane(0).unwrap().highlighted(), None);
        assert!(backend.regenerated.contains(&(0, None)));
        assert!(backend.regenerated.contains(&(1, Some(0))));
        assert_eq!(backend.redraws, 1);
    }

    #[test]
    fn test_nearest_hit_is_measured_from_world_origin_not_camera() {
        // Camera sits at z = +20. Plane A at z = +10 is 10 from the camera
        // and 10 from the origin; plane B at z = +16 is only 4 from the
        // camera but 16 from the origin. The defined metric measures from
        // the world origin, so A wins. A camera-distance metric would pick
        // B instead; if that metric is ever adopted, this test is the one
        // that flips.
        let mut camera = Camera::perspective(
            Vec3::new(0.0, 0.0, 20.0),
            std::f32::consts::FRAC_PI_4,
            800.0 / 600.0,
            0.1,
            100.0,
        );
        camera.set_target(Vec3::new(0.0, 0.0, 0.0));
        let mut scene = Scene::new(camera);
        scene.add_plane(covered_plane(Vec3::new(0.0, 0.0, 10.0)));
        scene.add_plane(covered_plane(Vec3::new(0.0, 0.0, 16.0)));

        let mut coordinator = PickingCoordinator::new(800, 600);
        let mut backend = RecordingBackend::default();

        let hit = coordinator
            .pointer_moved(&mut scene, &mut backend, 400.0, 300.0)
            .unwrap()
            .expect("center ray must land on a word");

        assert_eq!(hit.plane_index, 0);
        assert_eq!(scene.plane(0).unwrap().highlighted(), Some(0));
        assert_eq!(scene.plane(1).unwrap().highlighted(), None);
    }

    #[test]
    fn test_word_gap_hit_clears_highlight_and_yields_nothing() {
        // Single word box tucked into the top-right corner; the quad
        // center is a gap
        let layout = TextLayout::new(
            vec!["corner".into()],
            vec![WordBox {
                x: 200.0,
                y: 100.0,
                width: 56.0,
                height: 28.0,
            }],
            256,
            128,
        );
        let mut scene = scene_with_planes(vec![TextPlane::with_text(
            Vec3::new(0.0, 0.0, -5.0),
            Vec3::zeros(),
            "corner",
            &FixedLayout(layout),
        )]);
        scene.planes_mut()[0].set_highlight(Some(0));

        let mut coordinator = PickingCoordinator::new(800, 600);
        let mut backend = RecordingBackend::default();

        let hit = coordinator
            .pointer_moved(&mut scene, &mut backend, 400.0, 300.0)
            .unwrap();

        assert!(hit.is_none());
        assert_eq!(scene.plane(0).unwrap().highlighted(), None);
        assert_eq!(backend.regenerated, vec![(0, None)]);
        assert_eq!(backend.redraws, 1);
    }

    #[test]
    fn test_unchanged_highlight_regenerates_exactly_once() {
        let mut scene = scene_with_planes(vec![covered_plane(Vec3::new(0.0, 0.0, -5.0))]);
        let mut coordinator = PickingCoordinator::new(800, 600);
        let mut backend = RecordingBackend::default();

        coordinator
            .pointer_moved(&mut scene, &mut backend, 400.0, 300.0)
            .unwrap();
        coordinator
            .pointer_moved(&mut scene, &mut backend, 401.0, 300.0)
            .unwrap();

        // Two passes over the same word: one regeneration, two redraws
        assert_eq!(backend.regenerated, vec![(0, Some(0))]);
        assert_eq!(backend.redraws, 2);
    }

    #[test]
    fn test_empty_scene_is_a_no_op_with_redraw() {
        let mut scene = scene_with_planes(Vec::new());
        let mut coordinator = PickingCoordinator::new(800, 600);
        let mut backend = RecordingBackend::default();

        let hit = coordinator
            .pointer_moved(&mut scene, &mut backend, 400.0, 300.0)
            .unwrap();

        assert!(hit.is_none());
        assert!(backend.regenerated.is_empty());
        assert_eq!(backend.redraws, 1);
    }

    #[test]
    fn test_text_less_plane_is_skipped_not_hit() {
        // A blank plane sits in front of a ready one; the ready plane
        // still wins because the blank one is not pick-eligible
        let mut scene = scene_with_planes(vec![
            TextPlane::new(Vec3::new(0.0, 0.0, -3.0), Vec3::zeros()),
            covered_plane(Vec3::new(0.0, 0.0, -5.0)),
        ]);

        let mut coordinator = PickingCoordinator::new(800, 600);
        let mut backend = RecordingBackend::default();

        let hit = coordinator
            .pointer_moved(&mut scene, &mut backend, 400.0, 300.0)
            .unwrap()
            .expect("ready plane must be picked through the blank one");

        assert_eq!(hit.plane_index, 1);
    }

    #[test]
    fn test_degenerate_camera_aborts_the_pass() {
        let mut scene = scene_with_planes(vec![covered_plane(Vec3::new(0.0, 0.0, -5.0))]);
        scene.camera.look_at(Vec3::new(0.0, 0.0, -1.0), Vec3::new(0.0, 0.0, 1.0));

        let mut coordinator = PickingCoordinator::new(800, 600);
        let mut backend = RecordingBackend::default();

        let result = coordinator.pointer_moved(&mut scene, &mut backend, 400.0, 300.0);

        assert_eq!(
            result,
            Err(PickError::Camera(CameraError::DegenerateOrientation))
        );
        // The failed pass left highlight state untouched
        assert!(backend.regenerated.is_empty());
    }

    #[test]
    fn test_hit_reports_distance_from_the_camera_ray() {
        let mut scene = scene_with_planes(vec![covered_plane(Vec3::new(0.0, 0.0, -5.0))]);
        let mut coordinator = PickingCoordinator::new(800, 600);
        let mut backend = RecordingBackend::default();

        let hit = coordinator
            .pointer_moved(&mut scene, &mut backend, 400.0, 300.0)
            .unwrap()
            .unwrap();

        assert!((hit.distance - 5.0).abs() < 1e-4);
        assert!((hit.point - Vec3::new(0.0, 0.0, -5.0)).magnitude() < 1e-4);
    }
}
