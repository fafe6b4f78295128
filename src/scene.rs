//! The geometry drawn each frame.
//!
//! A scene owns its unclipped segments and triangles. The engine clips a
//! fresh copy of every segment each frame, so the scene itself never changes
//! until it is regenerated.

use rand::Rng;

use crate::colors::Color;
use crate::math::vec2::Vec2;
use crate::segment::{Point, Segment};
use crate::triangle::Triangle;
use crate::viewport::Viewport;

/// Color of the viewport border segments.
pub const OUTLINE_COLOR: Color = Color::BLUE;

/// The two corner triangles of the demo scene.
pub const DEMO_TRIANGLES: [Triangle; 2] = [
    Triangle::rgb(
        Vec2::new(-0.5, -0.5),
        Vec2::new(0.0, -0.5),
        Vec2::new(-0.5, 0.0),
    ),
    Triangle::rgb(Vec2::new(0.5, 0.5), Vec2::new(0.0, 0.5), Vec2::new(0.5, 0.0)),
];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub segments: Vec<Segment>,
    pub triangles: Vec<Triangle>,
}

impl Scene {
    pub fn new(segments: Vec<Segment>, triangles: Vec<Triangle>) -> Self {
        Self {
            segments,
            triangles,
        }
    }

    /// The viewport border followed by `line_count` random segments.
    ///
    /// Random endpoints are uniform in `[-1, 1]` on both axes, so many of
    /// them land outside the viewport.
    pub fn generate<R: Rng + ?Sized>(
        rng: &mut R,
        viewport: &Viewport,
        line_count: usize,
        with_triangles: bool,
    ) -> Self {
        let mut segments = Vec::with_capacity(4 + line_count);
        segments.extend(viewport.outline(OUTLINE_COLOR));
        segments.extend((0..line_count).map(|_| random_segment(rng)));

        let triangles = if with_triangles {
            DEMO_TRIANGLES.to_vec()
        } else {
            Vec::new()
        };

        Self::new(segments, triangles)
    }

    /// Replaces the random segments, keeping the border.
    pub fn regenerate<R: Rng + ?Sized>(&mut self, rng: &mut R, viewport: &Viewport) {
        let line_count = self.segments.len().saturating_sub(4);
        self.segments.clear();
        self.segments.extend(viewport.outline(OUTLINE_COLOR));
        self.segments.extend((0..line_count).map(|_| random_segment(rng)));
    }
}

fn random_point<R: Rng + ?Sized>(rng: &mut R) -> Point {
    Point::new(rng.gen_range(-1.0..=1.0), rng.gen_range(-1.0..=1.0))
}

fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Color {
    Color::new(rng.gen(), rng.gen(), rng.gen())
}

fn random_segment<R: Rng + ?Sized>(rng: &mut R) -> Segment {
    let p1 = random_point(rng);
    let p2 = random_point(rng);
    Segment::new(p1, p2, random_color(rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn border_comes_first() {
        let vp = Viewport::default();
        let scene = Scene::generate(&mut StdRng::seed_from_u64(1), &vp, 3, true);
        assert_eq!(scene.segments.len(), 7);
        assert_eq!(scene.segments[..4], vp.outline(OUTLINE_COLOR));
        assert_eq!(scene.triangles, DEMO_TRIANGLES.to_vec());
    }

    #[test]
    fn same_seed_same_scene() {
        let vp = Viewport::default();
        let a = Scene::generate(&mut StdRng::seed_from_u64(99), &vp, 10, false);
        let b = Scene::generate(&mut StdRng::seed_from_u64(99), &vp, 10, false);
        assert_eq!(a, b);
        assert!(a.triangles.is_empty());
    }

    #[test]
    fn random_segments_stay_in_ndc() {
        let vp = Viewport::default();
        let scene = Scene::generate(&mut StdRng::seed_from_u64(3), &vp, 100, false);
        let ndc = Viewport::new(-1.0, 1.0, -1.0, 1.0);
        for s in &scene.segments[4..] {
            assert!(ndc.contains(s.p1) && ndc.contains(s.p2));
            for c in [s.color.r, s.color.g, s.color.b] {
                assert!((0.0..1.0).contains(&c));
            }
        }
    }

    #[test]
    fn regenerate_keeps_count_and_border() {
        let vp = Viewport::default();
        let mut rng = StdRng::seed_from_u64(5);
        let mut scene = Scene::generate(&mut rng, &vp, 6, true);
        let before = scene.clone();
        scene.regenerate(&mut rng, &vp);
        assert_eq!(scene.segments.len(), before.segments.len());
        assert_eq!(scene.segments[..4], before.segments[..4]);
        assert_ne!(scene.segments[4..], before.segments[4..]);
        assert_eq!(scene.triangles, before.triangles);
    }
}
