//! Edge function-based triangle rasterization.
//!
//! For an edge from point A to point B, the edge function at point P is:
//!
//! ```text
//! E(P) = (P.x - A.x) * (B.y - A.y) - (P.y - A.y) * (B.x - A.x)
//! ```
//!
//! A pixel center is inside the triangle when all three edge functions have
//! the same sign as the triangle's signed area. Normalized by that area they
//! are the barycentric weights used to blend the vertex colors.

use super::framebuffer::FrameBuffer;
use crate::colors::{self, Color};

/// A triangle in screen space (pixels, y down).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenTriangle {
    pub points: [(f32, f32); 3],
    pub vertex_colors: [Color; 3],
}

/// Triangle rasterizer using the edge function algorithm.
#[derive(Clone, Copy, Debug, Default)]
pub struct EdgeFunctionRasterizer;

impl EdgeFunctionRasterizer {
    pub fn new() -> Self {
        EdgeFunctionRasterizer
    }

    #[inline]
    fn edge_function(a: (f32, f32), b: (f32, f32), p: (f32, f32)) -> f32 {
        (p.0 - a.0) * (b.1 - a.1) - (p.1 - a.1) * (b.0 - a.0)
    }

    /// Fill a triangle, interpolating the vertex colors across it.
    pub fn fill_triangle(&self, triangle: &ScreenTriangle, buffer: &mut FrameBuffer) {
        let [v0, v1, v2] = triangle.points;

        // Bounding box, clipped to the framebuffer
        let min_x = (v0.0.min(v1.0).min(v2.0).floor() as i32).max(0);
        let max_x = (v0.0.max(v1.0).max(v2.0).ceil() as i32).min(buffer.width() as i32 - 1);
        let min_y = (v0.1.min(v1.1).min(v2.1).floor() as i32).max(0);
        let max_y = (v0.1.max(v1.1).max(v2.1).ceil() as i32).min(buffer.height() as i32 - 1);

        let area = Self::edge_function(v0, v1, v2);
        if area.abs() < f32::EPSILON {
            return; // Degenerate triangle
        }
        let inv_area = 1.0 / area;

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                // Sample at pixel center
                let p = (x as f32 + 0.5, y as f32 + 0.5);

                let w0 = Self::edge_function(v1, v2, p);
                let w1 = Self::edge_function(v2, v0, p);
                let w2 = Self::edge_function(v0, v1, p);

                // Handles both CW and CCW winding
                let inside = if area > 0.0 {
                    w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0
                } else {
                    w0 <= 0.0 && w1 <= 0.0 && w2 <= 0.0
                };

                if inside {
                    let lambda = [w0 * inv_area, w1 * inv_area, w2 * inv_area];
                    let color = colors::blend_barycentric(triangle.vertex_colors, lambda);
                    buffer.set_pixel(x, y, color.to_argb());
                }
            }
        }
    }
}
