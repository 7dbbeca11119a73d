//! Text gallery demo
//!
//! Builds a scene of text planes floating in space, either from a config
//! file or scattered randomly inside the camera frustum, then sweeps a
//! simulated pointer across the surface and reports which words the
//! picking pipeline resolves. Runs headless: the render backend here only
//! logs the signals a real renderer would act on.

use std::error::Error;

use rand::Rng;
use textplane::prelude::*;

const PLANE_TEXT: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, \
    sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. \
    Ut enim ad minim veniam, quis nostrud exercitation ullamco";

/// Depth at which scattered planes are placed
const SCATTER_DEPTH: f32 = -6.0;

/// Number of planes in the default scattered scene
const SCATTER_COUNT: usize = 5;

/// Render backend stand-in that logs every signal instead of painting
#[derive(Debug, Default)]
struct LoggingBackend {
    regenerations: usize,
    redraws: usize,
}

impl RenderBackend for LoggingBackend {
    fn regenerate_plane_texture(&mut self, plane_index: usize, highlighted: Option<usize>) {
        self.regenerations += 1;
        match highlighted {
            Some(word) => log::info!("regenerate plane {} texture, word {} highlighted", plane_index, word),
            None => log::info!("regenerate plane {} texture, highlight cleared", plane_index),
        }
    }

    fn request_redraw(&mut self) {
        self.redraws += 1;
        log::debug!("redraw requested");
    }
}

struct GalleryApp {
    scene: Scene,
    coordinator: PickingCoordinator,
    backend: LoggingBackend,
}

impl GalleryApp {
    /// Build the scene described by a config file
    fn from_config(config: &SceneConfig) -> Self {
        log::info!("Building scene from config: {} planes", config.planes.len());
        let scene = config.to_scene(&MonospaceLayout::default());
        Self {
            scene,
            coordinator: PickingCoordinator::new(config.surface.width, config.surface.height),
            backend: LoggingBackend::default(),
        }
    }

    /// Scatter planes randomly inside the camera frustum at a fixed depth
    ///
    /// The scatter keeps each plane center at least one quad half-extent
    /// inside the frustum cross-section at that depth, so every plane is
    /// at least partially on screen.
    fn scattered(surface: SurfaceConfig) -> Self {
        log::info!("Scattering {} planes at depth {}", SCATTER_COUNT, SCATTER_DEPTH);

        let camera_config = CameraConfig::default();
        let mut scene = Scene::new(camera_config.to_camera(surface.aspect()));

        let fov = scene.camera.fov;
        let half_height = (fov * 0.5).tan() * SCATTER_DEPTH.abs();
        let half_width = half_height * surface.aspect();

        let engine = MonospaceLayout::default();
        let mut rng = rand::thread_rng();
        for _ in 0..SCATTER_COUNT {
            let position = Vec3::new(
                rng.gen_range(-1.0f32..1.0) * (half_width - 1.0),
                rng.gen_range(-1.0f32..1.0) * (half_height - 1.0),
                SCATTER_DEPTH,
            );
            let rotation = Vec3::new(
                rng.gen_range(0.0..std::f32::consts::TAU),
                rng.gen_range(0.0..std::f32::consts::TAU),
                rng.gen_range(0.0..std::f32::consts::TAU),
            );
            let index = scene.add_plane(TextPlane::with_text(
                position,
                rotation,
                PLANE_TEXT,
                &engine,
            ));
            log::debug!("plane {} at {:?}, rotation {:?}", index, position, rotation);
        }

        Self {
            scene,
            coordinator: PickingCoordinator::new(surface.width, surface.height),
            backend: LoggingBackend::default(),
        }
    }

    /// Sweep a simulated pointer over a grid of surface positions
    fn sweep(&mut self) -> Result<(), PickError> {
        let width = f64::from(self.coordinator.pointer().surface_width);
        let height = f64::from(self.coordinator.pointer().surface_height);

        const STEPS: u32 = 16;
        let mut words_hit = 0usize;

        for row in 0..=STEPS {
            for col in 0..=STEPS {
                let x = width * f64::from(col) / f64::from(STEPS);
                let y = height * f64::from(row) / f64::from(STEPS);

                let hit = self
                    .coordinator
                    .pointer_moved(&mut self.scene, &mut self.backend, x, y)?;

                if let Some(hit) = hit {
                    words_hit += 1;
                    let word = self
                        .scene
                        .plane(hit.plane_index)
                        .and_then(TextPlane::layout)
                        .map(|layout| layout.words()[hit.word_index].clone())
                        .unwrap_or_default();
                    log::info!(
                        "pointer ({:.0}, {:.0}) hovers \"{}\" (plane {}, word {}, {:.2} units away)",
                        x,
                        y,
                        word,
                        hit.plane_index,
                        hit.word_index,
                        hit.distance
                    );
                }
            }
        }

        log::info!(
            "sweep complete: {} pointer positions, {} word hits, {} texture regenerations, {} redraws",
            (STEPS + 1) * (STEPS + 1),
            words_hit,
            self.backend.regenerations,
            self.backend.redraws
        );
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    textplane::foundation::logging::init_with_default("info");

    let mut app = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading scene config from {}", path);
            let config = SceneConfig::load_from_file(&path)?;
            GalleryApp::from_config(&config)
        }
        None => GalleryApp::scattered(SurfaceConfig::default()),
    };

    app.sweep()?;
    Ok(())
}
