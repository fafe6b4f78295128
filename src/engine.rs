//! Per-frame orchestration.
//!
//! The [`Engine`] owns the scene, the viewport and the renderer. Every frame
//! it clips each scene segment against the viewport with the active
//! algorithm, then draws the triangles and whatever segments survived.

use std::path::Path;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::clipper::{ClipAlgorithm, ClipperDispatcher, LineClipper};
use crate::colors;
use crate::config::Config;
use crate::error::Result;
use crate::render::{LineDrawer, Renderer};
use crate::scene::Scene;
use crate::segment::Segment;
use crate::viewport::Viewport;

const GRID_SPACING: i32 = 50;

pub struct Engine {
    renderer: Renderer,
    clipper: ClipperDispatcher,
    viewport: Viewport,
    scene: Scene,
    rng: StdRng,
    visible: Vec<Segment>,
    pub draw_grid: bool,
}

impl Engine {
    /// Builds an engine with a freshly generated scene.
    pub fn new(config: &Config) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let scene = Scene::generate(
            &mut rng,
            &config.viewport,
            config.line_count,
            config.triangles,
        );
        info!(
            "scene: {} segments, {} triangles, clipping with {}",
            scene.segments.len(),
            scene.triangles.len(),
            config.algorithm
        );
        Self::with_scene(config, scene, rng)
    }

    /// Builds an engine around an existing scene.
    pub fn with_scene(config: &Config, scene: Scene, rng: StdRng) -> Self {
        let mut renderer = Renderer::new(config.width, config.height);
        renderer.set_line_drawer(config.line_drawer);
        Self {
            renderer,
            clipper: ClipperDispatcher::new(config.algorithm),
            viewport: config.viewport,
            scene,
            rng,
            visible: Vec::new(),
            draw_grid: config.draw_grid,
        }
    }

    pub fn set_algorithm(&mut self, algorithm: ClipAlgorithm) {
        self.clipper.set_algorithm(algorithm);
    }

    pub fn algorithm(&self) -> ClipAlgorithm {
        self.clipper.algorithm()
    }

    /// Switches to the other clipping algorithm and returns it.
    pub fn toggle_algorithm(&mut self) -> ClipAlgorithm {
        let next = self.algorithm().toggled();
        self.set_algorithm(next);
        info!("clipping with {next}");
        next
    }

    pub fn line_drawer(&self) -> LineDrawer {
        self.renderer.line_drawer()
    }

    /// Switches to the other line drawer and returns it.
    pub fn toggle_line_drawer(&mut self) -> LineDrawer {
        let next = self.line_drawer().toggled();
        self.renderer.set_line_drawer(next);
        info!("drawing lines with {next}");
        next
    }

    /// New random segments, same count and border.
    pub fn regenerate(&mut self) {
        self.scene.regenerate(&mut self.rng, &self.viewport);
        info!("regenerated {} segments", self.scene.segments.len());
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.renderer.resize(width, height);
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Segments that survived the last [`Engine::update`].
    pub fn visible_segments(&self) -> &[Segment] {
        &self.visible
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Returns the rendered frame as bytes (ARGB8888 format)
    pub fn frame_buffer(&self) -> &[u8] {
        self.renderer.as_bytes()
    }

    /// Clip every scene segment against the viewport.
    pub fn update(&mut self) {
        let clipper = &self.clipper;
        let viewport = &self.viewport;
        self.visible.clear();
        self.visible.extend(
            self.scene
                .segments
                .iter()
                .filter_map(|segment| clipper.clip(segment, viewport)),
        );
        debug!(
            "{}: {}/{} segments visible",
            clipper.algorithm(),
            self.visible.len(),
            self.scene.segments.len()
        );
    }

    /// Render the current frame
    pub fn render(&mut self) {
        self.renderer.clear(colors::BACKGROUND);

        if self.draw_grid {
            self.renderer.draw_grid(GRID_SPACING, colors::GRID);
        }

        for triangle in &self.scene.triangles {
            self.renderer.fill_triangle(triangle);
        }

        for segment in &self.visible {
            self.renderer.draw_segment(segment);
        }
    }

    /// Write the last rendered frame to an image file.
    pub fn save_snapshot<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        self.renderer.save(path)?;
        info!("saved snapshot to {}", path.display());
        Ok(())
    }
}
