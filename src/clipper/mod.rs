//! Line segment clipping against an axis-aligned viewport.
//!
//! Two interchangeable algorithms are provided:
//!
//! - [`region_code`]: Cohen-Sutherland. Classifies endpoints with region
//!   codes and iteratively moves outside endpoints onto the boundary.
//!
//! - [`parametric`]: Liang-Barsky. Narrows the parameter interval `[0, 1]`
//!   against the four edges in a fixed number of steps. Preferred when
//!   clipping many segments.
//!
//! Both are pure functions of the segment and the viewport and agree on
//! every input up to floating-point rounding. Select one at runtime with
//! [`ClipAlgorithm`], either per call through [`clip_segment`] or through a
//! [`ClipperDispatcher`].

pub mod parametric;
pub mod region_code;

pub use parametric::LiangBarskyClipper;
pub use region_code::{CohenSutherlandClipper, RegionCode};

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::segment::Segment;
use crate::viewport::Viewport;

/// Relative distance under which a segment that only grazes the viewport
/// still counts as touching it.
const TOUCH_EPSILON: f64 = 1e-13;

/// Absolute touch tolerance for one clip, scaled by the largest coordinate
/// involved so rounding at a corner cannot split the two algorithms' verdicts.
pub(crate) fn touch_tolerance(segment: &Segment, viewport: &Viewport) -> f64 {
    [
        segment.p1.x,
        segment.p1.y,
        segment.p2.x,
        segment.p2.y,
        viewport.x_min,
        viewport.x_max,
        viewport.y_min,
        viewport.y_max,
    ]
    .iter()
    .fold(1.0_f64, |magnitude, v| magnitude.max(v.abs()))
        * TOUCH_EPSILON
}

/// Trait for segment clipping algorithms.
///
/// Implementors return the visible part of `segment` as a new segment with
/// the same color, or `None` if nothing of it lies inside `viewport`.
pub trait LineClipper {
    fn clip(&self, segment: &Segment, viewport: &Viewport) -> Option<Segment>;
}

/// Available clipping algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClipAlgorithm {
    /// Region-code clipping.
    #[default]
    CohenSutherland,
    /// Parametric-interval clipping.
    LiangBarsky,
}

impl ClipAlgorithm {
    /// The other algorithm.
    pub fn toggled(self) -> Self {
        match self {
            ClipAlgorithm::CohenSutherland => ClipAlgorithm::LiangBarsky,
            ClipAlgorithm::LiangBarsky => ClipAlgorithm::CohenSutherland,
        }
    }
}

impl fmt::Display for ClipAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipAlgorithm::CohenSutherland => write!(f, "cohen-sutherland"),
            ClipAlgorithm::LiangBarsky => write!(f, "liang-barsky"),
        }
    }
}

impl FromStr for ClipAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cohen-sutherland" | "cohen_sutherland" | "cs" => Ok(ClipAlgorithm::CohenSutherland),
            "liang-barsky" | "liang_barsky" | "lb" => Ok(ClipAlgorithm::LiangBarsky),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Clips one segment with the chosen algorithm.
#[inline]
pub fn clip_segment(
    segment: &Segment,
    viewport: &Viewport,
    algorithm: ClipAlgorithm,
) -> Option<Segment> {
    match algorithm {
        ClipAlgorithm::CohenSutherland => region_code::clip(segment, viewport),
        ClipAlgorithm::LiangBarsky => parametric::clip(segment, viewport),
    }
}

/// Clips every segment, keeping the visible ones in input order.
pub fn clip_segments(
    segments: &[Segment],
    viewport: &Viewport,
    algorithm: ClipAlgorithm,
) -> Vec<Segment> {
    segments
        .iter()
        .filter_map(|segment| clip_segment(segment, viewport, algorithm))
        .collect()
}

/// Holds the active algorithm so callers can switch it at runtime.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClipperDispatcher {
    active: ClipAlgorithm,
}

impl ClipperDispatcher {
    pub fn new(algorithm: ClipAlgorithm) -> Self {
        Self { active: algorithm }
    }

    pub fn set_algorithm(&mut self, algorithm: ClipAlgorithm) {
        self.active = algorithm;
    }

    pub fn algorithm(&self) -> ClipAlgorithm {
        self.active
    }
}

impl LineClipper for ClipperDispatcher {
    #[inline]
    fn clip(&self, segment: &Segment, viewport: &Viewport) -> Option<Segment> {
        clip_segment(segment, viewport, self.active)
    }
}
