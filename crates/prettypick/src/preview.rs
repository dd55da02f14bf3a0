//! The before/after swatches.

use crate::raster::{overlay, Checkerboard, GradientBuffer, Size};
use crate::Color;

/// The compositor for the current and original color swatches.
///
/// In alpha mode, both swatches show their color over a checkerboard. The
/// original swatch uses the checkerboard with swapped tones, so that the two
/// swatches remain distinguishable even for fully transparent colors.
/// Otherwise, both swatches are solid fills.
#[derive(Debug)]
pub struct Preview {
    size: Size,
    alpha_mode: bool,
    current_backdrop: Option<GradientBuffer>,
    current: GradientBuffer,
    original: GradientBuffer,
}

impl Preview {
    /// The default swatch size.
    pub const SIZE: Size = Size::new(42, 32);

    /// Create a new preview with both swatches showing the original color.
    pub fn new(
        size: Size,
        checkerboard: &Checkerboard,
        alpha_mode: bool,
        original: &Color,
    ) -> Self {
        let (current_backdrop, original_backdrop) = if alpha_mode {
            (
                Some(checkerboard.render(size)),
                Some(checkerboard.swapped().render(size)),
            )
        } else {
            (None, None)
        };

        let current = swatch(size, current_backdrop.as_ref(), original);
        let original = swatch(size, original_backdrop.as_ref(), original);

        Self {
            size,
            alpha_mode,
            current_backdrop,
            current,
            original,
        }
    }

    /// Get the swatch size.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Determine whether the swatches show alpha.
    pub fn is_alpha_mode(&self) -> bool {
        self.alpha_mode
    }

    /// Get the swatch for the current color.
    pub fn current(&self) -> &GradientBuffer {
        &self.current
    }

    /// Get the swatch for the original color.
    pub fn original(&self) -> &GradientBuffer {
        &self.original
    }

    /// Re-render the current swatch for the color.
    pub fn render(&mut self, color: &Color) {
        log::trace!("rasterize preview for {}", color);
        self.current = swatch(self.size, self.current_backdrop.as_ref(), color);
    }

    /// Combine the original swatch on the left with the current swatch on the
    /// right.
    pub fn before_after(&self) -> GradientBuffer {
        self.original.beside(&self.current)
    }
}

fn swatch(size: Size, backdrop: Option<&GradientBuffer>, color: &Color) -> GradientBuffer {
    backdrop.map_or_else(
        || {
            let [r, g, b] = *color.rgb().as_ref();
            GradientBuffer::filled(size, [r, g, b, 255])
        },
        |backdrop| overlay(backdrop, color.to_rgba()),
    )
}

// ====================================================================================================================
