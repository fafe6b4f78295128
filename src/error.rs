//! Error type for the layers around the clipping core.
//!
//! Clipping itself cannot fail: a segment is either clipped or rejected.
//! Everything that talks to SDL, writes images or validates user input
//! reports through [`Error`].

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// SDL reports its failures as plain strings.
    #[error("SDL error: {0}")]
    Sdl(String),

    #[error("failed to write snapshot: {0}")]
    Image(#[from] image::ImageError),

    #[error("invalid viewport: x in [{x_min}, {x_max}], y in [{y_min}, {y_max}]")]
    InvalidViewport {
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
    },

    #[error("unknown clipping algorithm `{0}` (expected cohen-sutherland or liang-barsky)")]
    UnknownAlgorithm(String),

    #[error("unknown line drawer `{0}` (expected bresenham or dda)")]
    UnknownLineDrawer(String),

    #[error("window size must be non-zero, got {width}x{height}")]
    InvalidWindowSize { width: u32, height: u32 },
}

impl Error {
    pub(crate) fn sdl(err: impl ToString) -> Self {
        Error::Sdl(err.to_string())
    }
}
