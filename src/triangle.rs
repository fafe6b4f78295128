use crate::colors::Color;
use crate::math::vec2::Vec2;

// A filled triangle in normalized coordinates with one color per vertex.
// Triangles are drawn as-is; only line segments go through the clipper.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub points: [Vec2; 3],
    pub vertex_colors: [Color; 3],
}

impl Triangle {
    pub const fn new(points: [Vec2; 3], vertex_colors: [Color; 3]) -> Self {
        Self {
            points,
            vertex_colors,
        }
    }

    /// A triangle shaded red, green and blue at its three corners.
    pub const fn rgb(a: Vec2, b: Vec2, c: Vec2) -> Self {
        Self::new([a, b, c], [Color::RED, Color::GREEN, Color::BLUE])
    }
}
