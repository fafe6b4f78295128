//! CPU rendering of the scene into an ARGB8888 color buffer.
//!
//! Coordinates arrive in NDC; [`ndc_to_screen`] maps them to pixels.
//! Segments are clipped to the viewport by the engine and again to the
//! framebuffer before rasterizing. Triangles are filled as they are.

mod framebuffer;
mod rasterizer;
mod renderer;

pub use framebuffer::FrameBuffer;
pub use rasterizer::{EdgeFunctionRasterizer, ScreenTriangle};
pub use renderer::{ndc_to_screen, LineDrawer, Renderer};
