//! Low-level rendering primitives.
//!
//! Provides the [`Renderer`] struct which owns the color buffer and draws
//! segments and triangles given in normalized device coordinates.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use image::RgbaImage;

use super::framebuffer::FrameBuffer;
use super::rasterizer::{EdgeFunctionRasterizer, ScreenTriangle};
use crate::clipper::parametric;
use crate::colors;
use crate::error::{Error, Result};
use crate::math::vec2::Vec2;
use crate::segment::Segment;
use crate::triangle::Triangle;
use crate::viewport::Viewport;

/// Map a point from NDC (`[-1, 1]`, y up) to screen pixels (y down).
#[inline]
pub fn ndc_to_screen(p: Vec2, width: u32, height: u32) -> Vec2 {
    Vec2::new(
        (p.x + 1.0) * 0.5 * width as f64,
        (1.0 - p.y) * 0.5 * height as f64,
    )
}

/// Line rasterization algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineDrawer {
    /// Integer error-term stepping.
    #[default]
    Bresenham,
    /// Digital differential analyzer: fixed float increments, rounded.
    Dda,
}

impl LineDrawer {
    /// The other line drawer.
    pub fn toggled(self) -> Self {
        match self {
            LineDrawer::Bresenham => LineDrawer::Dda,
            LineDrawer::Dda => LineDrawer::Bresenham,
        }
    }
}

impl fmt::Display for LineDrawer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineDrawer::Bresenham => write!(f, "bresenham"),
            LineDrawer::Dda => write!(f, "dda"),
        }
    }
}

impl FromStr for LineDrawer {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bresenham" => Ok(LineDrawer::Bresenham),
            "dda" => Ok(LineDrawer::Dda),
            _ => Err(Error::UnknownLineDrawer(s.to_string())),
        }
    }
}

pub struct Renderer {
    color_buffer: Vec<u32>,
    rasterizer: EdgeFunctionRasterizer,
    line_drawer: LineDrawer,
    width: u32,
    height: u32,
}

impl Renderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            color_buffer: vec![colors::BACKGROUND; (width * height) as usize],
            rasterizer: EdgeFunctionRasterizer::new(),
            line_drawer: LineDrawer::default(),
            width,
            height,
        }
    }

    pub fn set_line_drawer(&mut self, line_drawer: LineDrawer) {
        self.line_drawer = line_drawer;
    }

    pub fn line_drawer(&self) -> LineDrawer {
        self.line_drawer
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.color_buffer = vec![colors::BACKGROUND; (width * height) as usize];
        self.width = width;
        self.height = height;
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn clear(&mut self, color: u32) {
        self.color_buffer.fill(color);
    }

    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        self.as_framebuffer().set_pixel(x, y, color);
    }

    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u32> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(self.color_buffer[(y as u32 * self.width + x as u32) as usize])
        } else {
            None
        }
    }

    pub fn draw_grid(&mut self, spacing: i32, color: u32) {
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                if x % spacing == 0 || y % spacing == 0 {
                    self.set_pixel(x, y, color);
                }
            }
        }
    }

    /// Draw a segment given in NDC with the active [`LineDrawer`].
    ///
    /// The segment is first clipped to the framebuffer in screen space, so
    /// the pixel coordinates handed to the line drawer always fit in `i32`
    /// however far outside NDC the input reaches.
    pub fn draw_segment(&mut self, segment: &Segment) {
        let (width, height) = (self.width, self.height);
        let screen = Segment::new(
            ndc_to_screen(segment.p1, width, height),
            ndc_to_screen(segment.p2, width, height),
            segment.color,
        );
        let bounds = Viewport::new(0.0, width as f64, 0.0, height as f64);
        let Some(visible) = parametric::clip(&screen, &bounds) else {
            return;
        };

        let (x0, y0) = (visible.p1.x.floor() as i32, visible.p1.y.floor() as i32);
        let (x1, y1) = (visible.p2.x.floor() as i32, visible.p2.y.floor() as i32);
        let color = segment.color.to_argb();
        match self.line_drawer {
            LineDrawer::Bresenham => self.draw_line_bresenham(x0, y0, x1, y1, color),
            LineDrawer::Dda => self.draw_line_dda(x0, y0, x1, y1, color),
        }
    }

    /// Fill a triangle given in NDC with interpolated vertex colors.
    pub fn fill_triangle(&mut self, triangle: &Triangle) {
        let (width, height) = (self.width, self.height);
        let screen = ScreenTriangle {
            points: triangle.points.map(|p| {
                let s = ndc_to_screen(p, width, height);
                (s.x as f32, s.y as f32)
            }),
            vertex_colors: triangle.vertex_colors,
        };
        let rasterizer = self.rasterizer;
        rasterizer.fill_triangle(&screen, &mut self.as_framebuffer());
    }

    /// Draws a line between two pixels using Bresenham's line algorithm.
    ///
    /// For each step along the major axis an error term decides whether to
    /// also step along the minor axis. Both endpoints are drawn.
    pub fn draw_line_bresenham(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();

        let x_incr_direction = if x0 < x1 { 1 } else { -1 };
        let y_incr_direction = if y0 < y1 { 1 } else { -1 };

        // Positive error favors x movement, negative favors y
        let mut err = dx - dy;

        let mut x = x0;
        let mut y = y0;

        loop {
            self.set_pixel(x, y, color);

            if x == x1 && y == y1 {
                break;
            }

            let e2 = 2 * err;
            if e2 > -dy {
                err -= dy;
                x += x_incr_direction;
            }
            if e2 < dx {
                err += dx;
                y += y_incr_direction;
            }
        }
    }

    /// Draws a line between two pixels with a digital differential analyzer.
    ///
    /// Steps once per pixel along the longer axis, advancing both
    /// coordinates by a fixed float increment and rounding. Both endpoints
    /// are drawn.
    pub fn draw_line_dda(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
        let dx = x1 - x0;
        let dy = y1 - y0;

        let side_length = dx.abs().max(dy.abs());
        if side_length == 0 {
            self.set_pixel(x0, y0, color);
            return;
        }

        let x_increment = dx as f32 / side_length as f32;
        let y_increment = dy as f32 / side_length as f32;
        let mut current_x = x0 as f32;
        let mut current_y = y0 as f32;

        for _ in 0..=side_length {
            self.set_pixel(current_x.round() as i32, current_y.round() as i32, color);
            current_x += x_increment;
            current_y += y_increment;
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        // SAFETY: u32 has no padding and a stricter alignment than u8; the
        // byte slice covers exactly the memory of color_buffer.
        unsafe {
            std::slice::from_raw_parts(
                self.color_buffer.as_ptr() as *const u8,
                self.color_buffer.len() * 4,
            )
        }
    }

    /// Get a mutable FrameBuffer view into the color buffer.
    pub fn as_framebuffer(&mut self) -> FrameBuffer<'_> {
        FrameBuffer::new(&mut self.color_buffer, self.width, self.height)
    }

    /// Copy the color buffer into an RGBA image.
    pub fn to_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width, self.height, |x, y| {
            let argb = self.color_buffer[(y * self.width + x) as usize];
            let [a, r, g, b] = argb.to_be_bytes();
            image::Rgba([r, g, b, a])
        })
    }

    /// Write the current frame to `path`, format chosen by extension.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.to_image().save(path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::Color;
    use approx::assert_relative_eq;

    #[test]
    fn ndc_corners_map_to_screen_corners() {
        assert_relative_eq!(ndc_to_screen(Vec2::new(-1.0, 1.0), 800, 600), Vec2::ZERO);
        assert_relative_eq!(
            ndc_to_screen(Vec2::new(1.0, -1.0), 800, 600),
            Vec2::new(800.0, 600.0)
        );
        assert_relative_eq!(
            ndc_to_screen(Vec2::new(0.5, 0.5), 800, 600),
            Vec2::new(600.0, 150.0)
        );
    }

    #[test]
    fn bresenham_draws_both_endpoints() {
        let mut r = Renderer::new(10, 10);
        r.draw_line_bresenham(1, 8, 7, 2, 0xFFFFFFFF);
        assert_eq!(r.get_pixel(1, 8), Some(0xFFFFFFFF));
        assert_eq!(r.get_pixel(7, 2), Some(0xFFFFFFFF));
        assert_eq!(r.get_pixel(4, 5), Some(0xFFFFFFFF));
    }

    #[test]
    fn single_pixel_line() {
        let mut r = Renderer::new(4, 4);
        r.draw_line_bresenham(2, 2, 2, 2, 0xFF00FF00);
        assert_eq!(r.get_pixel(2, 2), Some(0xFF00FF00));
    }

    #[test]
    fn draw_segment_uses_segment_color() {
        let mut r = Renderer::new(100, 100);
        let s = Segment::new(Vec2::new(-0.5, 0.0), Vec2::new(0.5, 0.0), Color::RED);
        r.draw_segment(&s);
        assert_eq!(r.get_pixel(50, 50), Some(0xFFFF0000));
        assert_eq!(r.get_pixel(10, 50), Some(colors::BACKGROUND));
    }

    #[test]
    fn huge_segment_is_clipped_to_the_framebuffer() {
        for drawer in [LineDrawer::Bresenham, LineDrawer::Dda] {
            let mut r = Renderer::new(100, 100);
            r.set_line_drawer(drawer);
            let s = Segment::new(Vec2::new(-1e12, 0.0), Vec2::new(1e12, 0.0), Color::BLUE);
            r.draw_segment(&s);
            assert_eq!(r.get_pixel(0, 50), Some(0xFF0000FF), "{drawer}");
            assert_eq!(r.get_pixel(50, 50), Some(0xFF0000FF), "{drawer}");
            assert_eq!(r.get_pixel(99, 50), Some(0xFF0000FF), "{drawer}");
            assert_eq!(r.get_pixel(50, 49), Some(colors::BACKGROUND), "{drawer}");
        }
    }

    #[test]
    fn segment_entirely_off_screen_draws_nothing() {
        let mut r = Renderer::new(16, 16);
        let far = Segment::new(Vec2::new(1e12, 1e12), Vec2::new(2e12, -1e12), Color::WHITE);
        r.draw_segment(&far);
        assert!(r.as_bytes().chunks(4).all(|px| px == colors::BACKGROUND.to_ne_bytes()));
    }

    #[test]
    fn dda_draws_both_endpoints() {
        let mut r = Renderer::new(10, 10);
        r.draw_line_dda(1, 8, 7, 2, 0xFFFFFFFF);
        assert_eq!(r.get_pixel(1, 8), Some(0xFFFFFFFF));
        assert_eq!(r.get_pixel(7, 2), Some(0xFFFFFFFF));
        assert_eq!(r.get_pixel(4, 5), Some(0xFFFFFFFF));

        r.draw_line_dda(3, 3, 3, 3, 0xFF00FF00);
        assert_eq!(r.get_pixel(3, 3), Some(0xFF00FF00));
    }

    #[test]
    fn dda_matches_bresenham_on_axis_and_diagonal_lines() {
        let lines = [(0, 4, 9, 4), (4, 9, 4, 0), (0, 0, 9, 9), (9, 0, 0, 9)];
        for (x0, y0, x1, y1) in lines {
            let mut bresenham = Renderer::new(10, 10);
            let mut dda = Renderer::new(10, 10);
            bresenham.draw_line_bresenham(x0, y0, x1, y1, 0xFFFFFFFF);
            dda.draw_line_dda(x0, y0, x1, y1, 0xFFFFFFFF);
            assert_eq!(bresenham.as_bytes(), dda.as_bytes(), "({x0},{y0})-({x1},{y1})");
        }
    }

    #[test]
    fn line_drawer_names_round_trip() {
        for drawer in [LineDrawer::Bresenham, LineDrawer::Dda] {
            assert_eq!(drawer.to_string().parse::<LineDrawer>().unwrap(), drawer);
            assert_eq!(drawer.toggled().toggled(), drawer);
        }
        assert!(matches!("wu".parse::<LineDrawer>(), Err(Error::UnknownLineDrawer(_))));
    }

    #[test]
    fn image_conversion_reorders_channels() {
        let mut r = Renderer::new(2, 1);
        r.set_pixel(1, 0, 0xFF112233);
        let img = r.to_image();
        assert_eq!(img.get_pixel(1, 0).0, [0x11, 0x22, 0x33, 0xFF]);
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 0xFF]);
    }

    #[test]
    fn resize_reallocates_the_buffer() {
        let mut r = Renderer::new(4, 4);
        r.resize(8, 2);
        assert_eq!(r.as_bytes().len(), 8 * 2 * 4);
        assert_eq!(r.get_pixel(7, 1), Some(colors::BACKGROUND));
    }
}
