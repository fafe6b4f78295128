//! Cohen-Sutherland line clipping.
//!
//! Each endpoint is classified against the four half-planes of the viewport
//! with a 4-bit region code:
//!
//! ```text
//!        |        |
//!  1001  |  1000  | 1010
//!        |        |
//! -------+--------+-------- y_max
//!        |        |
//!  0001  |  0000  | 0010
//!        |        |
//! -------+--------+-------- y_min
//!        |        |
//!  0101  |  0100  | 0110
//!        |        |
//!      x_min    x_max
//! ```
//!
//! A segment whose endpoints are both `0000` is trivially accepted. If the
//! codes share a bit, both endpoints lie beyond the same boundary and the
//! segment is trivially rejected. Otherwise an outside endpoint is moved onto
//! one of the boundaries it violates and the test repeats.

use std::ops::BitOr;

use log::warn;

use super::{touch_tolerance, LineClipper};
use crate::segment::{Point, Segment};
use crate::viewport::Viewport;

/// Upper bound on endpoint moves. Each move puts one coordinate exactly on
/// a boundary, so a well-behaved clip needs at most four per endpoint.
const MAX_ITERATIONS: usize = 8;

/// Order in which a violated boundary is resolved.
const BOUNDARY_PRIORITY: [Boundary; 4] = [
    Boundary::Top,
    Boundary::Bottom,
    Boundary::Right,
    Boundary::Left,
];

/// Which half-planes of the viewport a point lies outside of.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct RegionCode(u8);

impl RegionCode {
    pub const INSIDE: Self = Self(0);
    pub const LEFT: Self = Self(1);
    pub const RIGHT: Self = Self(2);
    pub const BOTTOM: Self = Self(4);
    pub const TOP: Self = Self(8);

    /// Classifies `p`. Points on the boundary count as inside.
    #[inline]
    pub fn of(p: Point, viewport: &Viewport) -> Self {
        let mut code = Self::INSIDE;
        if p.x < viewport.x_min {
            code = code | Self::LEFT;
        }
        if p.x > viewport.x_max {
            code = code | Self::RIGHT;
        }
        if p.y < viewport.y_min {
            code = code | Self::BOTTOM;
        }
        if p.y > viewport.y_max {
            code = code | Self::TOP;
        }
        code
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn is_inside(self) -> bool {
        self.0 == 0
    }

    /// True if every flag in `other` is set in `self`.
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// True if both codes exclude a common half-plane.
    pub fn shares_side_with(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }
}

impl BitOr for RegionCode {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Boundary {
    Top,
    Bottom,
    Right,
    Left,
}

impl Boundary {
    fn flag(self) -> RegionCode {
        match self {
            Boundary::Top => RegionCode::TOP,
            Boundary::Bottom => RegionCode::BOTTOM,
            Boundary::Right => RegionCode::RIGHT,
            Boundary::Left => RegionCode::LEFT,
        }
    }

    /// First boundary `code` violates, in [`BOUNDARY_PRIORITY`] order.
    fn first_violated(code: RegionCode) -> Option<Self> {
        BOUNDARY_PRIORITY
            .into_iter()
            .find(|boundary| code.contains(boundary.flag()))
    }

    /// Where the line through `a` and `b` crosses this boundary.
    ///
    /// Only called when exactly one of `a`, `b` violates the boundary, so
    /// the two points differ along its axis and the divisor is non-zero.
    fn intersect(self, a: Point, b: Point, viewport: &Viewport) -> Point {
        let (dx, dy) = (b.x - a.x, b.y - a.y);
        match self {
            Boundary::Top | Boundary::Bottom => {
                debug_assert!(dy != 0.0, "horizontal segment crossing {self:?}");
                let y = if self == Boundary::Top {
                    viewport.y_max
                } else {
                    viewport.y_min
                };
                Point::new(a.x + dx * (y - a.y) / dy, y)
            }
            Boundary::Right | Boundary::Left => {
                debug_assert!(dx != 0.0, "vertical segment crossing {self:?}");
                let x = if self == Boundary::Right {
                    viewport.x_max
                } else {
                    viewport.x_min
                };
                Point::new(x, a.y + dy * (x - a.x) / dx)
            }
        }
    }
}

/// Pulls a coordinate within `tolerance` of a viewport edge onto that edge,
/// so a crossing that rounds just past a corner still lands on it.
fn snap_to_edges(p: Point, viewport: &Viewport, tolerance: f64) -> Point {
    let snap = |v: f64, lo: f64, hi: f64| {
        if (v - lo).abs() <= tolerance {
            lo
        } else if (v - hi).abs() <= tolerance {
            hi
        } else {
            v
        }
    };
    Point::new(
        snap(p.x, viewport.x_min, viewport.x_max),
        snap(p.y, viewport.y_min, viewport.y_max),
    )
}

/// Clips `segment` to `viewport` with the Cohen-Sutherland algorithm.
///
/// Returns `None` when no part of the segment is visible. When both
/// endpoints are outside, the first endpoint is moved first.
pub fn clip(segment: &Segment, viewport: &Viewport) -> Option<Segment> {
    clip_with_limit(segment, viewport, MAX_ITERATIONS)
}

/// The clip loop, giving up after `max_iterations` endpoint moves. Past the
/// limit both endpoints are clamped into the viewport and returned.
fn clip_with_limit(
    segment: &Segment,
    viewport: &Viewport,
    max_iterations: usize,
) -> Option<Segment> {
    let tolerance = touch_tolerance(segment, viewport);
    let (mut p1, mut p2) = (segment.p1, segment.p2);
    let mut code1 = RegionCode::of(p1, viewport);
    let mut code2 = RegionCode::of(p2, viewport);
    let mut iterations = 0;

    loop {
        if code1.is_inside() && code2.is_inside() {
            return Some(segment.with_endpoints(p1, p2));
        }
        if code1.shares_side_with(code2) {
            return None;
        }
        if iterations == max_iterations {
            warn!(
                "cohen-sutherland gave up after {max_iterations} moves on {:?}; clamping",
                segment
            );
            return Some(segment.with_endpoints(viewport.clamp(p1), viewport.clamp(p2)));
        }
        iterations += 1;

        let move_first = !code1.is_inside();
        let outcode = if move_first { code1 } else { code2 };
        // outcode is non-zero here, so some boundary is always violated
        let boundary = Boundary::first_violated(outcode)?;
        let crossing = snap_to_edges(boundary.intersect(p1, p2, viewport), viewport, tolerance);

        if move_first {
            p1 = crossing;
            code1 = RegionCode::of(p1, viewport);
        } else {
            p2 = crossing;
            code2 = RegionCode::of(p2, viewport);
        }
    }
}

/// [`LineClipper`] backed by [`clip`].
#[derive(Clone, Copy, Debug, Default)]
pub struct CohenSutherlandClipper;

impl CohenSutherlandClipper {
    pub fn new() -> Self {
        CohenSutherlandClipper
    }
}

impl LineClipper for CohenSutherlandClipper {
    #[inline]
    fn clip(&self, segment: &Segment, viewport: &Viewport) -> Option<Segment> {
        clip(segment, viewport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::Color;
    use approx::assert_relative_eq;

    fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment {
        Segment::new(Point::new(x1, y1), Point::new(x2, y2), Color::WHITE)
    }

    #[test]
    fn region_codes_match_bit_layout() {
        let vp = Viewport::default();
        assert_eq!(RegionCode::of(Point::new(-1.0, 0.0), &vp).bits(), 1);
        assert_eq!(RegionCode::of(Point::new(1.0, 0.0), &vp).bits(), 2);
        assert_eq!(RegionCode::of(Point::new(0.0, -1.0), &vp).bits(), 4);
        assert_eq!(RegionCode::of(Point::new(0.0, 1.0), &vp).bits(), 8);
        assert_eq!(RegionCode::of(Point::new(1.0, 1.0), &vp).bits(), 10);
        assert_eq!(RegionCode::of(Point::new(-1.0, -1.0), &vp).bits(), 5);
    }

    #[test]
    fn boundary_points_are_inside() {
        let vp = Viewport::default();
        for p in [
            Point::new(-0.5, 0.0),
            Point::new(0.5, 0.5),
            Point::new(0.0, -0.5),
        ] {
            assert!(RegionCode::of(p, &vp).is_inside());
        }
    }

    #[test]
    fn priority_resolves_top_before_right() {
        let corner = RegionCode::TOP | RegionCode::RIGHT;
        assert_eq!(Boundary::first_violated(corner), Some(Boundary::Top));
        let low_left = RegionCode::BOTTOM | RegionCode::LEFT;
        assert_eq!(Boundary::first_violated(low_left), Some(Boundary::Bottom));
        assert_eq!(Boundary::first_violated(RegionCode::INSIDE), None);
    }

    #[test]
    fn horizontal_segment_through_viewport() {
        let vp = Viewport::default();
        let clipped = clip(&seg(-1.0, 0.0, 1.0, 0.0), &vp).unwrap();
        assert_relative_eq!(clipped, seg(-0.5, 0.0, 0.5, 0.0), epsilon = 1e-9);
    }

    #[test]
    fn axis_parallel_segments_never_divide_by_zero() {
        let vp = Viewport::default();
        // vertical, crossing top and bottom
        let v = clip(&seg(0.1, -2.0, 0.1, 2.0), &vp).unwrap();
        assert_relative_eq!(v, seg(0.1, -0.5, 0.1, 0.5), epsilon = 1e-9);
        // horizontal, entirely above
        assert_eq!(clip(&seg(-2.0, 0.75, 2.0, 0.75), &vp), None);
        // vertical, entirely right
        assert_eq!(clip(&seg(0.75, -2.0, 0.75, 2.0), &vp), None);
    }

    #[test]
    fn diagonal_through_two_corners() {
        let vp = Viewport::default();
        let clipped = clip(&seg(-2.0, -2.0, 2.0, 2.0), &vp).unwrap();
        assert_relative_eq!(clipped, seg(-0.5, -0.5, 0.5, 0.5), epsilon = 1e-9);
    }

    #[test]
    fn outside_across_a_corner_is_rejected_after_moves() {
        // Both endpoints outside on different sides, line misses the box.
        let vp = Viewport::default();
        assert_eq!(clip(&seg(-1.0, 0.4, -0.4, 1.0), &vp), None);
    }

    #[test]
    fn move_limit_clamps_the_remaining_endpoint() {
        let vp = Viewport::default();
        let s = seg(-2.0, -2.0, 2.0, 1.0);
        // One move puts p1 on the bottom edge; p2 is still outside and gets clamped.
        let clipped = clip_with_limit(&s, &vp, 1).unwrap();
        assert_eq!(clipped.p1, Point::new(0.0, -0.5));
        assert_eq!(clipped.p2, Point::new(0.5, 0.5));
        assert!(vp.contains(clipped.p1) && vp.contains(clipped.p2));
        assert_eq!(clipped.color, s.color);

        // With no moves allowed both ends are clamped as they are.
        let clamped = clip_with_limit(&s, &vp, 0).unwrap();
        assert_eq!(clamped.p1, Point::new(-0.5, -0.5));
        assert_eq!(clamped.p2, Point::new(0.5, 0.5));
    }

    #[test]
    fn full_limit_never_reaches_the_clamp_on_corner_lines() {
        let vp = Viewport::new(-0.3, 0.7, -0.1, 0.9);
        let s = seg(-1.2986412269456071, 0.9737105552370763, 3.6979618404184107, 0.7894341671443856);
        assert_eq!(clip_with_limit(&s, &vp, MAX_ITERATIONS), clip(&s, &vp));
        let corner = clip(&s, &vp).unwrap();
        assert_eq!(corner.p1, Point::new(0.7, 0.9));
        assert_eq!(corner.p2, Point::new(0.7, 0.9));
    }

    #[test]
    fn crossings_near_a_corner_snap_onto_it() {
        let vp = Viewport::default();
        let snapped = snap_to_edges(Point::new(0.5 + 1e-15, 0.5), &vp, 1e-12);
        assert_eq!(snapped, Point::new(0.5, 0.5));
        let untouched = Point::new(0.25, 0.5);
        assert_eq!(snap_to_edges(untouched, &vp, 1e-12), untouched);
    }

    #[test]
    fn clipper_struct_matches_free_function() {
        let vp = Viewport::new(-1.0, 0.0, -1.0, 0.0);
        let s = seg(-2.0, -0.5, 2.0, -0.5);
        assert_eq!(CohenSutherlandClipper::new().clip(&s, &vp), clip(&s, &vp));
    }
}
