use approx::{AbsDiffEq, RelativeEq};

use crate::colors::Color;
use crate::math::vec2::Vec2;

/// A point in normalized coordinates.
pub type Point = Vec2;

/// A colored line segment from `p1` to `p2`.
///
/// The endpoints may coincide. Clipping never mutates a segment; it returns
/// a new one carrying the same color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub p1: Point,
    pub p2: Point,
    pub color: Color,
}

impl Segment {
    pub const fn new(p1: Point, p2: Point, color: Color) -> Self {
        Self { p1, p2, color }
    }

    /// A new segment with the same color and different endpoints.
    #[inline]
    pub fn with_endpoints(&self, p1: Point, p2: Point) -> Self {
        Self::new(p1, p2, self.color)
    }

    pub fn delta(&self) -> Vec2 {
        self.p2 - self.p1
    }
}

// Endpoints compare within tolerance, the color compares exactly.
impl AbsDiffEq for Segment {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.color == other.color
            && self.p1.abs_diff_eq(&other.p1, epsilon)
            && self.p2.abs_diff_eq(&other.p2, epsilon)
    }
}

impl RelativeEq for Segment {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.color == other.color
            && self.p1.relative_eq(&other.p1, epsilon, max_relative)
            && self.p2.relative_eq(&other.p2, epsilon, max_relative)
    }
}
