use super::{GradientBuffer, Pixel, Size};
use crate::core::round_to_u8;
use crate::Float;

/// A checkerboard of square tiles in two tones, the conventional backdrop for
/// translucent colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Checkerboard {
    light: Pixel,
    dark: Pixel,
    tile_size: u32,
}

impl Checkerboard {
    /// The default tile size.
    pub const TILE_SIZE: u32 = 8;

    /// Create a new checkerboard with the given gray levels and tile size. A
    /// tile size of zero is treated as one.
    pub const fn new(light: u8, dark: u8, tile_size: u32) -> Self {
        Self {
            light: [light, light, light, 255],
            dark: [dark, dark, dark, 255],
            tile_size: if tile_size == 0 { 1 } else { tile_size },
        }
    }

    /// Get the tone of the top-left tile.
    pub const fn light(&self) -> Pixel {
        self.light
    }

    /// Get the other tone.
    pub const fn dark(&self) -> Pixel {
        self.dark
    }

    /// Get the tile size.
    pub const fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Get the same checkerboard with the two tones swapped.
    #[must_use]
    pub const fn swapped(&self) -> Self {
        Self {
            light: self.dark,
            dark: self.light,
            tile_size: self.tile_size,
        }
    }

    /// Render the checkerboard at the given size.
    pub fn render(&self, size: Size) -> GradientBuffer {
        let s = self.tile_size;
        GradientBuffer::from_fn(size, |x, y| {
            if (x / s + y / s) % 2 == 0 {
                self.light
            } else {
                self.dark
            }
        })
    }
}

impl Default for Checkerboard {
    fn default() -> Self {
        Self::new(154, 100, Self::TILE_SIZE)
    }
}

// ====================================================================================================================

/// Composite the foreground pixel over the background pixel.
///
/// This function implements Porter-Duff source-over on non-premultiplied
/// pixels. For an opaque background, it reduces to `fg·a + bg·(1−a)` per
/// channel.
pub fn composite(bg: Pixel, fg: Pixel) -> Pixel {
    let fa = fg[3] as Float / 255.0;
    let ba = bg[3] as Float / 255.0;
    let alpha = ba.mul_add(1.0 - fa, fa);
    if alpha <= 0.0 {
        return [0, 0, 0, 0];
    }

    let channel = |index: usize| {
        let c = (fg[index] as Float).mul_add(fa, bg[index] as Float * ba * (1.0 - fa));
        round_to_u8(c / alpha)
    };

    [channel(0), channel(1), channel(2), round_to_u8(alpha * 255.0)]
}

/// Composite the uniform foreground color over every pixel of the base image.
pub fn overlay(base: &GradientBuffer, fg: Pixel) -> GradientBuffer {
    base.map(|bg| composite(*bg, fg))
}

// ====================================================================================================================
