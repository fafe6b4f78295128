//! Colors and ARGB8888 packing.
//!
//! Scene geometry carries [`Color`] as three unclamped `f32` channels. Only
//! the renderer packs them into the `u32` ARGB8888 pixels it writes.

// Packed ARGB8888 colors used by the renderer
pub const BACKGROUND: u32 = 0xFF000000;
pub const GRID: u32 = 0xFF1A1A1A;

/// An RGB color with unconstrained channel values.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);
    pub const RED: Self = Self::new(1.0, 0.0, 0.0);
    pub const GREEN: Self = Self::new(0.0, 1.0, 0.0);
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Pack into an opaque ARGB8888 pixel, clamping each channel to [0, 1].
    #[inline]
    pub fn to_argb(self) -> u32 {
        pack_color(self.r, self.g, self.b, 1.0)
    }
}

/// Pack normalized channels into ARGB8888.
#[inline]
pub fn pack_color(r: f32, g: f32, b: f32, a: f32) -> u32 {
    let to_byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u32;
    (to_byte(a) << 24) | (to_byte(r) << 16) | (to_byte(g) << 8) | to_byte(b)
}

/// Blend three colors with barycentric weights.
#[inline]
pub fn blend_barycentric(colors: [Color; 3], lambda: [f32; 3]) -> Color {
    Color::new(
        colors[0].r * lambda[0] + colors[1].r * lambda[1] + colors[2].r * lambda[2],
        colors[0].g * lambda[0] + colors[1].g * lambda[1] + colors[2].g * lambda[2],
        colors[0].b * lambda[0] + colors[1].b * lambda[1] + colors[2].b * lambda[2],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_primaries() {
        assert_eq!(Color::RED.to_argb(), 0xFFFF0000);
        assert_eq!(Color::GREEN.to_argb(), 0xFF00FF00);
        assert_eq!(Color::BLUE.to_argb(), 0xFF0000FF);
    }

    #[test]
    fn packing_clamps_out_of_range_channels() {
        assert_eq!(Color::new(2.0, -1.0, 0.0).to_argb(), 0xFFFF0000);
    }

    #[test]
    fn pack_color_orders_alpha_first() {
        assert_eq!(pack_color(0.2, 0.4, 0.6, 0.0), 0x00336699);
    }

    #[test]
    fn barycentric_blend_at_vertex_is_vertex_color() {
        let colors = [Color::RED, Color::GREEN, Color::BLUE];
        assert_eq!(blend_barycentric(colors, [0.0, 1.0, 0.0]), Color::GREEN);
    }
}
