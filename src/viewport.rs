//! The axis-aligned clip rectangle.

use crate::colors::Color;
use crate::error::{Error, Result};
use crate::segment::{Point, Segment};

/// Axis-aligned rectangle `[x_min, x_max] x [y_min, y_max]`.
///
/// The clippers take the rectangle by reference on every call and keep no
/// copy of it. They assume `x_min <= x_max` and `y_min <= y_max` without
/// checking; an inverted rectangle gives unspecified results. Use
/// [`Viewport::try_new`] wherever bounds come from the outside.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Viewport {
    /// Creates a viewport without validating the bounds.
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        debug_assert!(x_min <= x_max && y_min <= y_max, "inverted viewport");
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Creates a viewport, rejecting inverted or non-finite bounds.
    pub fn try_new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<Self> {
        let finite = [x_min, x_max, y_min, y_max].iter().all(|v| v.is_finite());
        if !finite || x_min > x_max || y_min > y_max {
            return Err(Error::InvalidViewport {
                x_min,
                x_max,
                y_min,
                y_max,
            });
        }
        Ok(Self::new(x_min, x_max, y_min, y_max))
    }

    /// Boundary-inclusive containment test.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x_min && p.x <= self.x_max && p.y >= self.y_min && p.y <= self.y_max
    }

    /// The nearest point inside the viewport.
    #[inline]
    pub fn clamp(&self, p: Point) -> Point {
        Point::new(
            p.x.clamp(self.x_min, self.x_max),
            p.y.clamp(self.y_min, self.y_max),
        )
    }

    /// The four border edges: top, bottom, left, right.
    pub fn outline(&self, color: Color) -> [Segment; 4] {
        let top_left = Point::new(self.x_min, self.y_max);
        let top_right = Point::new(self.x_max, self.y_max);
        let bottom_left = Point::new(self.x_min, self.y_min);
        let bottom_right = Point::new(self.x_max, self.y_min);
        [
            Segment::new(top_left, top_right, color),
            Segment::new(bottom_left, bottom_right, color),
            Segment::new(top_left, bottom_left, color),
            Segment::new(top_right, bottom_right, color),
        ]
    }
}

impl Default for Viewport {
    /// The centered half-size window, `[-0.5, 0.5]` on both axes.
    fn default() -> Self {
        Self::new(-0.5, 0.5, -0.5, 0.5)
    }
}
