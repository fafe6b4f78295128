//! Runtime configuration for the viewer.

use crate::clipper::ClipAlgorithm;
use crate::error::{Error, Result};
use crate::render::LineDrawer;
use crate::viewport::Viewport;

pub const WINDOW_WIDTH: u32 = 800;
pub const WINDOW_HEIGHT: u32 = 600;
pub const DEFAULT_LINE_COUNT: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub width: u32,
    pub height: u32,
    pub viewport: Viewport,
    pub algorithm: ClipAlgorithm,
    pub line_drawer: LineDrawer,
    /// Number of random segments in the scene.
    pub line_count: usize,
    /// Seed for the scene generator. `None` picks one from the OS.
    pub seed: Option<u64>,
    pub triangles: bool,
    pub draw_grid: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            viewport: Viewport::default(),
            algorithm: ClipAlgorithm::default(),
            line_drawer: LineDrawer::default(),
            line_count: DEFAULT_LINE_COUNT,
            seed: None,
            triangles: true,
            draw_grid: false,
        }
    }
}

impl Config {
    /// Checks the values that come from the command line.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidWindowSize {
                width: self.width,
                height: self.height,
            });
        }
        let vp = self.viewport;
        Viewport::try_new(vp.x_min, vp.x_max, vp.y_min, vp.y_max)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn zero_sized_window_is_rejected() {
        let config = Config {
            width: 0,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidWindowSize { width: 0, .. })
        ));
    }

    #[test]
    fn far_outside_viewport_is_accepted() {
        let config = Config {
            viewport: Viewport::new(-1e12, 1e12, -1e12, 1e12),
            ..Config::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn inverted_viewport_is_rejected() {
        let mut config = Config::default();
        config.viewport.x_min = 1.0;
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidViewport { .. })
        ));
    }
}
