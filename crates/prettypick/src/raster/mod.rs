//! Rasterization of the picker's gradients, swatches, and cursors.
//!
//! All images are [`GradientBuffer`]s of RGBA pixels. Buffers are never
//! patched in place: whenever a governing parameter changes, the
//! [`Rasterizer`] renders a complete new buffer and then replaces the old one.

mod checker;
mod cursor;
mod gradient;

pub use checker::{composite, overlay, Checkerboard};
pub use cursor::{CursorLine, Orientation};
pub use gradient::{alpha_bar, hue_bar, sv_square};

pub(crate) use cursor::{alpha_cursor_color, BAR_CURSOR, SQUARE_CURSOR};

use crate::Rgb;

/// An RGBA pixel.
pub type Pixel = [u8; 4];

/// The size of a widget or buffer in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Get the number of pixels.
    pub const fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

// ====================================================================================================================

/// A rectangular image of RGBA pixels, stored row by row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GradientBuffer {
    size: Size,
    pixels: Vec<Pixel>,
}

impl GradientBuffer {
    /// Create a new buffer by invoking the function for every pixel's column
    /// and row.
    pub fn from_fn<F>(size: Size, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> Pixel,
    {
        let mut pixels = Vec::with_capacity(size.area());
        for y in 0..size.height {
            for x in 0..size.width {
                pixels.push(f(x, y));
            }
        }
        Self { size, pixels }
    }

    /// Create a new buffer from a single row, repeated for every row.
    pub fn from_row(row: &[Pixel], height: u32) -> Self {
        let size = Size::new(row.len() as u32, height);
        let mut pixels = Vec::with_capacity(size.area());
        for _ in 0..height {
            pixels.extend_from_slice(row);
        }
        Self { size, pixels }
    }

    /// Create a new buffer filled with the same pixel.
    pub fn filled(size: Size, pixel: Pixel) -> Self {
        Self {
            size,
            pixels: vec![pixel; size.area()],
        }
    }

    /// Get the size.
    pub const fn size(&self) -> Size {
        self.size
    }

    /// Get the width.
    pub const fn width(&self) -> u32 {
        self.size.width
    }

    /// Get the height.
    pub const fn height(&self) -> u32 {
        self.size.height
    }

    /// Determine whether this buffer has no pixels.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Get the pixel at the given column and row.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Pixel> {
        if x < self.size.width && y < self.size.height {
            self.pixels
                .get(y as usize * self.size.width as usize + x as usize)
                .copied()
        } else {
            None
        }
    }

    /// Get all pixels, row by row.
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Iterate over the rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Pixel]> {
        // chunks() panics on zero.
        self.pixels.chunks(self.size.width.max(1) as usize)
    }

    /// Get the pixels as a flat byte vector, as expected by most image APIs.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flatten().copied().collect()
    }

    /// Create a new buffer by mapping every pixel with the function.
    #[must_use]
    pub fn map<F>(&self, f: F) -> Self
    where
        F: FnMut(&Pixel) -> Pixel,
    {
        Self {
            size: self.size,
            pixels: self.pixels.iter().map(f).collect(),
        }
    }

    /// Place the other buffer to the right of this one. Rows missing from the
    /// shorter buffer are transparent.
    #[must_use]
    pub fn beside(&self, other: &GradientBuffer) -> Self {
        let size = Size::new(
            self.width() + other.width(),
            self.height().max(other.height()),
        );
        Self::from_fn(size, |x, y| {
            let pixel = if x < self.width() {
                self.pixel(x, y)
            } else {
                other.pixel(x - self.width(), y)
            };
            pixel.unwrap_or([0, 0, 0, 0])
        })
    }
}

// ====================================================================================================================

/// The three gradients a picker displays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Gradient {
    /// The horizontal hue bar.
    HueBar,
    /// The saturation/value square for the current hue.
    Square,
    /// The horizontal alpha bar for the current color.
    AlphaBar,
}

/// The owner of the gradient buffers.
///
/// The rasterizer remembers the parameters each buffer was rendered with and
/// re-renders a buffer only when they change. Its update methods report
/// whether they did.
#[derive(Debug)]
pub struct Rasterizer {
    hue_bar: GradientBuffer,
    square: GradientBuffer,
    square_hue: u16,
    alpha_bar: Option<GradientBuffer>,
    alpha_size: Size,
    alpha_rgb: Rgb,
    checkerboard: Checkerboard,
}

impl Rasterizer {
    /// Create a new rasterizer and render all buffers. Without alpha size,
    /// there is no alpha bar.
    pub fn new(
        hue_bar_size: Size,
        square_size: Size,
        alpha_bar_size: Option<Size>,
        checkerboard: Checkerboard,
        hue: u16,
        rgb: Rgb,
    ) -> Self {
        Self {
            hue_bar: hue_bar(hue_bar_size),
            square: sv_square(hue, square_size),
            square_hue: hue,
            alpha_bar: alpha_bar_size.map(|size| alpha_bar(rgb, size, &checkerboard)),
            alpha_size: alpha_bar_size.unwrap_or_default(),
            alpha_rgb: rgb,
            checkerboard,
        }
    }

    /// Get the hue bar.
    pub fn hue_bar(&self) -> &GradientBuffer {
        &self.hue_bar
    }

    /// Get the saturation/value square.
    pub fn square(&self) -> &GradientBuffer {
        &self.square
    }

    /// Get the alpha bar, if the picker has an alpha channel.
    pub fn alpha_bar(&self) -> Option<&GradientBuffer> {
        self.alpha_bar.as_ref()
    }

    /// Get the buffer for the gradient.
    pub fn get(&self, gradient: Gradient) -> Option<&GradientBuffer> {
        match gradient {
            Gradient::HueBar => Some(&self.hue_bar),
            Gradient::Square => Some(&self.square),
            Gradient::AlphaBar => self.alpha_bar.as_ref(),
        }
    }

    /// Get the size of the gradient's widget.
    pub fn size(&self, gradient: Gradient) -> Size {
        match gradient {
            Gradient::HueBar => self.hue_bar.size(),
            Gradient::Square => self.square.size(),
            Gradient::AlphaBar => self.alpha_size,
        }
    }

    /// Get the hue of the saturation/value square.
    pub fn square_hue(&self) -> u16 {
        self.square_hue
    }

    /// Re-render the square if the hue changed.
    pub fn set_hue(&mut self, hue: u16) -> bool {
        if hue == self.square_hue {
            return false;
        }

        log::trace!("rasterize square for hue {}", hue);
        self.square = sv_square(hue, self.square.size());
        self.square_hue = hue;
        true
    }

    /// Re-render the alpha bar if the color changed.
    pub fn set_rgb(&mut self, rgb: Rgb) -> bool {
        if rgb == self.alpha_rgb {
            return false;
        }

        self.alpha_rgb = rgb;
        if self.alpha_bar.is_none() {
            return false;
        }

        log::trace!("rasterize alpha bar for {}", rgb);
        self.alpha_bar = Some(alpha_bar(rgb, self.alpha_size, &self.checkerboard));
        true
    }

    /// Re-render the gradient for a new widget size. This method returns
    /// `false` if the size did not change or there is no such gradient.
    pub fn resize(&mut self, gradient: Gradient, size: Size) -> bool {
        if self.size(gradient) == size {
            return false;
        }

        log::trace!("rasterize {:?} at {}x{}", gradient, size.width, size.height);
        match gradient {
            Gradient::HueBar => self.hue_bar = hue_bar(size),
            Gradient::Square => self.square = sv_square(self.square_hue, size),
            Gradient::AlphaBar => {
                if self.alpha_bar.is_none() {
                    return false;
                }
                self.alpha_size = size;
                self.alpha_bar = Some(alpha_bar(self.alpha_rgb, size, &self.checkerboard));
            }
        }
        true
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{Checkerboard, Gradient, GradientBuffer, Rasterizer, Size};
    use crate::Rgb;

    #[test]
    fn test_buffer() {
        let buffer = GradientBuffer::from_fn(Size::new(3, 2), |x, y| [x as u8, y as u8, 0, 255]);
        assert_eq!(buffer.pixel(2, 1), Some([2, 1, 0, 255]));
        assert_eq!(buffer.pixel(3, 0), None);
        assert_eq!(buffer.rows().count(), 2);
        assert_eq!(buffer.to_rgba_bytes().len(), 24);

        let row = [[1, 2, 3, 4], [5, 6, 7, 8]];
        let striped = GradientBuffer::from_row(&row, 3);
        assert_eq!(striped.size(), Size::new(2, 3));
        assert_eq!(striped.pixel(1, 2), Some([5, 6, 7, 8]));

        let both = buffer.beside(&striped);
        assert_eq!(both.size(), Size::new(5, 3));
        assert_eq!(both.pixel(0, 2), Some([0, 0, 0, 0]));
        assert_eq!(both.pixel(4, 2), Some([5, 6, 7, 8]));

        let empty = GradientBuffer::filled(Size::new(0, 7), [0; 4]);
        assert!(empty.is_empty());
        assert_eq!(empty.rows().count(), 0);
    }

    #[test]
    fn test_rasterizer() {
        let mut raster = Rasterizer::new(
            Size::new(6, 2),
            Size::new(5, 5),
            Some(Size::new(5, 1)),
            Checkerboard::default(),
            0,
            Rgb::new(255, 0, 0),
        );

        assert!(!raster.set_hue(0));
        assert!(raster.set_hue(120));
        assert_eq!(raster.square().pixel(4, 0), Some([0, 255, 0, 255]));

        assert!(!raster.set_rgb(Rgb::new(255, 0, 0)));
        assert!(raster.set_rgb(Rgb::new(0, 0, 255)));
        assert_eq!(
            raster.alpha_bar().and_then(|bar| bar.pixel(4, 0)),
            Some([0, 0, 255, 255])
        );

        assert!(raster.resize(Gradient::Square, Size::new(7, 3)));
        assert!(!raster.resize(Gradient::Square, Size::new(7, 3)));
        assert_eq!(raster.size(Gradient::Square), Size::new(7, 3));
        assert_eq!(raster.get(Gradient::Square).map(GradientBuffer::width), Some(7));

        let mut opaque = Rasterizer::new(
            Size::new(6, 2),
            Size::new(5, 5),
            None,
            Checkerboard::default(),
            0,
            Rgb::new(255, 0, 0),
        );
        assert!(opaque.alpha_bar().is_none());
        assert!(!opaque.set_rgb(Rgb::new(1, 2, 3)));
        assert!(!opaque.resize(Gradient::AlphaBar, Size::new(9, 9)));
    }
}
