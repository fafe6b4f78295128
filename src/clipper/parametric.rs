//! Liang-Barsky parametric line clipping.
//!
//! The segment is written as `P(t) = p1 + t * (p2 - p1)` for `t` in `[0, 1]`.
//! Every viewport edge gives one inequality `p * t <= q`:
//!
//! ```text
//! edge     p     q
//! left    -dx    x1 - x_min
//! right    dx    x_max - x1
//! bottom  -dy    y1 - y_min
//! top      dy    y_max - y1
//! ```
//!
//! With `p < 0` the line enters the half-plane at `t = q / p`, with `p > 0`
//! it leaves there. `p == 0` means the segment runs parallel to that edge and
//! is either wholly inside it (`q >= 0`) or wholly outside. The visible part
//! is whatever remains of `[0, 1]` after all four constraints.

use super::{touch_tolerance, LineClipper};
use crate::segment::Segment;
use crate::viewport::Viewport;

/// Clips `segment` to `viewport` with the Liang-Barsky algorithm.
///
/// Always evaluates the constraints in left, right, bottom, top order and
/// stops at the first edge the segment runs parallel to and outside of.
pub fn clip(segment: &Segment, viewport: &Viewport) -> Option<Segment> {
    let start = segment.p1;
    let delta = segment.delta();

    let p = [-delta.x, delta.x, -delta.y, delta.y];
    let q = [
        start.x - viewport.x_min,
        viewport.x_max - start.x,
        start.y - viewport.y_min,
        viewport.y_max - start.y,
    ];

    let mut t_enter = 0.0_f64;
    let mut t_exit = 1.0_f64;

    for (&p_i, &q_i) in p.iter().zip(q.iter()) {
        if p_i == 0.0 {
            if q_i < 0.0 {
                return None;
            }
            continue;
        }
        let t = q_i / p_i;
        if p_i < 0.0 {
            t_enter = t_enter.max(t);
        } else {
            t_exit = t_exit.min(t);
        }
    }

    if t_enter > t_exit {
        // Entry and exit on two different edges, a hair apart: the line
        // passes through a corner. Anything wider, or bounded by the
        // segment's own ends, misses the viewport.
        let from_edges = t_enter > 0.0 && t_exit < 1.0;
        let gap = (t_enter - t_exit) * delta.x.abs().min(delta.y.abs());
        if !from_edges || gap > touch_tolerance(segment, viewport) {
            return None;
        }
        let corner = viewport.clamp(start.lerp(segment.p2, 0.5 * (t_enter + t_exit)));
        return Some(segment.with_endpoints(corner, corner));
    }

    // An untouched end keeps its exact input coordinates.
    let p1 = if t_enter == 0.0 { segment.p1 } else { start.lerp(segment.p2, t_enter) };
    let p2 = if t_exit == 1.0 { segment.p2 } else { start.lerp(segment.p2, t_exit) };
    Some(segment.with_endpoints(p1, p2))
}

/// [`LineClipper`] backed by [`clip`].
#[derive(Clone, Copy, Debug, Default)]
pub struct LiangBarskyClipper;

impl LiangBarskyClipper {
    pub fn new() -> Self {
        LiangBarskyClipper
    }
}

impl LineClipper for LiangBarskyClipper {
    #[inline]
    fn clip(&self, segment: &Segment, viewport: &Viewport) -> Option<Segment> {
        clip(segment, viewport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::Color;
    use crate::segment::Point;
    use approx::assert_relative_eq;

    fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment {
        Segment::new(Point::new(x1, y1), Point::new(x2, y2), Color::GREEN)
    }

    #[test]
    fn horizontal_segment_through_viewport() {
        let vp = Viewport::default();
        let clipped = clip(&seg(-1.0, 0.0, 1.0, 0.0), &vp).unwrap();
        assert_relative_eq!(clipped, seg(-0.5, 0.0, 0.5, 0.0), epsilon = 1e-9);
    }

    #[test]
    fn reversed_direction_keeps_endpoint_order() {
        let vp = Viewport::default();
        let clipped = clip(&seg(1.0, 0.0, -1.0, 0.0), &vp).unwrap();
        assert_relative_eq!(clipped, seg(0.5, 0.0, -0.5, 0.0), epsilon = 1e-9);
    }

    #[test]
    fn parallel_and_outside_rejects_immediately() {
        let vp = Viewport::default();
        assert_eq!(clip(&seg(-0.75, -2.0, -0.75, 2.0), &vp), None);
        assert_eq!(clip(&seg(-2.0, -0.6, 2.0, -0.6), &vp), None);
    }

    #[test]
    fn parallel_on_the_boundary_is_kept() {
        let vp = Viewport::default();
        let clipped = clip(&seg(-2.0, 0.5, 2.0, 0.5), &vp).unwrap();
        assert_relative_eq!(clipped, seg(-0.5, 0.5, 0.5, 0.5), epsilon = 1e-9);
    }

    #[test]
    fn empty_interval_rejects() {
        // Line misses the top-left corner: enters y after it leaves x.
        let vp = Viewport::default();
        assert_eq!(clip(&seg(-1.0, 0.4, -0.4, 1.0), &vp), None);
    }

    #[test]
    fn zero_length_point_inside_and_outside() {
        let vp = Viewport::default();
        let inside = seg(0.2, 0.2, 0.2, 0.2);
        assert_eq!(clip(&inside, &vp), Some(inside));
        assert_eq!(clip(&seg(0.9, 0.2, 0.9, 0.2), &vp), None);
    }
}
