//! 2D line segment clipping with a software-rendered viewer.
//!
//! The core of this crate is [`clipper`]: two interchangeable algorithms
//! (Cohen-Sutherland and Liang-Barsky) that cut a [`Segment`] down to the
//! part visible inside an axis-aligned [`Viewport`], or reject it. Clipping
//! is pure and stateless, so it can be called from any thread.
//!
//! Around it sits a small CPU renderer that draws a random scene of
//! clipped segments and shaded triangles, and an SDL2 window to show it.
//!
//! # Quick Start
//!
//! ```
//! use clipsy::prelude::*;
//!
//! let viewport = Viewport::new(-0.5, 0.5, -0.5, 0.5);
//! let line = Segment::new(Vec2::new(-1.0, 0.0), Vec2::new(1.0, 0.0), Color::RED);
//!
//! let visible = clip_segment(&line, &viewport, ClipAlgorithm::LiangBarsky).unwrap();
//! assert_eq!(visible.p1, Vec2::new(-0.5, 0.0));
//! assert_eq!(visible.p2, Vec2::new(0.5, 0.0));
//! ```

// Public API - exposed to library consumers
pub mod clipper;
pub mod colors;
pub mod config;
pub mod engine;
pub mod error;
pub mod math;
pub mod render;
pub mod scene;
pub mod segment;
pub mod triangle;
pub mod viewport;
pub mod window;

// Re-export commonly needed types at crate root for convenience
pub use clipper::{clip_segment, clip_segments, ClipAlgorithm, LineClipper};
pub use colors::Color;
pub use config::Config;
pub use engine::Engine;
pub use error::{Error, Result};
pub use segment::{Point, Segment};
pub use viewport::Viewport;

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use clipsy::prelude::*;
/// ```
pub mod prelude {
    // Clipping
    pub use crate::clipper::{
        clip_segment, clip_segments, ClipAlgorithm, ClipperDispatcher, CohenSutherlandClipper,
        LiangBarskyClipper, LineClipper,
    };

    // Geometry
    pub use crate::colors::Color;
    pub use crate::math::vec2::Vec2;
    pub use crate::segment::{Point, Segment};
    pub use crate::triangle::Triangle;
    pub use crate::viewport::Viewport;

    // Viewer
    pub use crate::config::Config;
    pub use crate::engine::Engine;
    pub use crate::render::LineDrawer;
    pub use crate::scene::Scene;
    pub use crate::window::{FrameLimiter, Window, WindowEvent};
}
