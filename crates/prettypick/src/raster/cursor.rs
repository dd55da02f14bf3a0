use super::GradientBuffer;
use crate::core::round2;
use crate::{Float, Hsv, Rgb};

/// The cursor color for the saturation/value square.
pub(crate) const SQUARE_CURSOR: Rgb = Rgb::new(194, 194, 194);

/// The cursor color for the hue bar and, for light colors, the alpha bar.
pub(crate) const BAR_CURSOR: Rgb = Rgb::new(0, 0, 0);

/// The cursor color for the alpha bar and dark colors.
const LIGHT_CURSOR: Rgb = Rgb::new(204, 204, 204);

/// Pick the alpha bar's cursor color so that it stands out from the color.
pub(crate) fn alpha_cursor_color(hsv: &Hsv) -> Rgb {
    if hsv.value() < 50 {
        LIGHT_CURSOR
    } else {
        BAR_CURSOR
    }
}

/// The direction of a cursor line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// A line spanning all rows at a given column.
    Vertical,
    /// A line spanning all columns at a given row.
    Horizontal,
}

/// A cursor line across a gradient.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorLine {
    pub orientation: Orientation,
    /// The pixel offset of the line's center.
    pub position: Float,
    pub thickness: u32,
    pub color: Rgb,
}

impl CursorLine {
    /// Create a new vertical line.
    pub const fn vertical(position: Float, thickness: u32, color: Rgb) -> Self {
        Self {
            orientation: Orientation::Vertical,
            position,
            thickness,
            color,
        }
    }

    /// Create a new horizontal line.
    pub const fn horizontal(position: Float, thickness: u32, color: Rgb) -> Self {
        Self {
            orientation: Orientation::Horizontal,
            position,
            thickness,
            color,
        }
    }

    /// Get the range of columns or rows covered by this line, clipped to the
    /// extent.
    pub fn span(&self, extent: u32) -> core::ops::Range<u32> {
        let start = round2(self.position - self.thickness as Float / 2.0) as i64;
        let end = start + self.thickness as i64;
        let clip = |n: i64| n.clamp(0, extent as i64) as u32;
        clip(start)..clip(end)
    }

    /// Draw this line onto a copy of the buffer.
    pub fn draw(&self, buffer: &GradientBuffer) -> GradientBuffer {
        let [r, g, b] = *self.color.as_ref();
        let pixel = [r, g, b, 255];

        let span = match self.orientation {
            Orientation::Vertical => self.span(buffer.width()),
            Orientation::Horizontal => self.span(buffer.height()),
        };

        GradientBuffer::from_fn(buffer.size(), |x, y| {
            let index = match self.orientation {
                Orientation::Vertical => x,
                Orientation::Horizontal => y,
            };

            if span.contains(&index) {
                pixel
            } else {
                buffer.pixel(x, y).unwrap_or(pixel)
            }
        })
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{alpha_cursor_color, CursorLine, BAR_CURSOR, LIGHT_CURSOR};
    use crate::raster::{GradientBuffer, Size};
    use crate::{Hsv, Rgb};

    #[test]
    fn test_span() {
        let white = Rgb::new(255, 255, 255);
        assert_eq!(CursorLine::vertical(2.0, 1, white).span(5), 2..3);
        assert_eq!(CursorLine::vertical(2.0, 2, white).span(5), 1..3);
        assert_eq!(CursorLine::vertical(0.0, 2, white).span(5), 0..1);
        assert_eq!(CursorLine::vertical(4.0, 2, white).span(5), 3..5);
        assert_eq!(CursorLine::vertical(4.6, 1, white).span(5), 4..5);
        assert_eq!(CursorLine::vertical(7.0, 1, white).span(5), 5..5);
    }

    #[test]
    fn test_draw() {
        let buffer = GradientBuffer::filled(Size::new(4, 3), [9, 9, 9, 255]);
        let red = Rgb::new(255, 0, 0);

        let vertical = CursorLine::vertical(1.0, 1, red).draw(&buffer);
        assert_eq!(vertical.pixel(1, 0), Some([255, 0, 0, 255]));
        assert_eq!(vertical.pixel(1, 2), Some([255, 0, 0, 255]));
        assert_eq!(vertical.pixel(0, 2), Some([9, 9, 9, 255]));
        assert_eq!(vertical.pixel(2, 1), Some([9, 9, 9, 255]));

        let horizontal = CursorLine::horizontal(2.0, 2, red).draw(&buffer);
        assert_eq!(horizontal.pixel(3, 0), Some([9, 9, 9, 255]));
        assert_eq!(horizontal.pixel(3, 1), Some([255, 0, 0, 255]));
        assert_eq!(horizontal.pixel(0, 2), Some([255, 0, 0, 255]));

        // The original buffer is unchanged.
        assert_eq!(buffer.pixel(1, 0), Some([9, 9, 9, 255]));
    }

    #[test]
    fn test_alpha_cursor_color() {
        assert_eq!(alpha_cursor_color(&Hsv::new(0, 100, 49)), LIGHT_CURSOR);
        assert_eq!(alpha_cursor_color(&Hsv::new(0, 100, 50)), BAR_CURSOR);
    }
}
