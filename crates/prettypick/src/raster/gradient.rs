use super::{Checkerboard, GradientBuffer, Pixel, Size};
use crate::core::{full_color, round2, round_to_u8};
use crate::{Float, Rgb};

/// Compute the fraction `index / (extent - 1)`, which is 0 for extents of zero
/// or one pixels.
#[inline]
fn fraction(index: u32, extent: u32) -> Float {
    if extent <= 1 {
        0.0
    } else {
        index as Float / (extent - 1) as Float
    }
}

/// Render the hue bar.
///
/// Column `i` has the fully saturated, full value color for hue `360·i/width`.
/// Hence the bar starts with red but stops one column short of red again.
pub fn hue_bar(size: Size) -> GradientBuffer {
    let row = (0..size.width)
        .map(|i| {
            let hue = i as Float / size.width as Float * 360.0;
            let [r, g, b] = *full_color(hue).as_ref();
            [r, g, b, 255]
        })
        .collect::<Vec<Pixel>>();

    GradientBuffer::from_row(&row, size.height)
}

/// Render the saturation/value square for the given hue.
///
/// The top row blends black into the pure hue, the bottom row black into
/// white. In other words, saturation decreases from top to bottom and value
/// increases from left to right.
pub fn sv_square(hue: u16, size: Size) -> GradientBuffer {
    let pure = full_color(hue as Float);
    let pure = [
        pure.red() as Float,
        pure.green() as Float,
        pure.blue() as Float,
    ];

    let rows = (0..size.height)
        .map(|i| {
            let fi = fraction(i, size.height);
            pure.map(|c| fi.mul_add(255.0 - c, c))
        })
        .collect::<Vec<_>>();

    GradientBuffer::from_fn(size, |j, i| {
        let fj = fraction(j, size.width);
        let [r, g, b] = rows[i as usize].map(|c| round_to_u8(fj * c));
        [r, g, b, 255]
    })
}

/// Render the alpha bar for the given color.
///
/// Column `i` has opacity `255·i/(width-1)` and is composited over the
/// checkerboard. So the first column shows just the checkerboard and the last
/// column just the color.
pub fn alpha_bar(rgb: Rgb, size: Size, checkerboard: &Checkerboard) -> GradientBuffer {
    let background = checkerboard.render(size);
    let [r, g, b] = *rgb.as_ref();

    GradientBuffer::from_fn(size, |x, y| {
        let alpha = round2(255.0 * fraction(x, size.width)) as u8;
        let bg = background
            .pixel(x, y)
            .unwrap_or_else(|| checkerboard.light());
        super::composite(bg, [r, g, b, alpha])
    })
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{alpha_bar, hue_bar, sv_square};
    use crate::raster::{Checkerboard, Size};
    use crate::Rgb;

    #[test]
    fn test_hue_bar() {
        let bar = hue_bar(Size::new(6, 3));
        let expected = [
            [255, 0, 0, 255],
            [255, 255, 0, 255],
            [0, 255, 0, 255],
            [0, 255, 255, 255],
            [0, 0, 255, 255],
            [255, 0, 255, 255],
        ];

        for row in bar.rows() {
            assert_eq!(row, &expected);
        }
    }

    #[test]
    fn test_sv_square() {
        let square = sv_square(120, Size::new(5, 5));
        let expected: [[[u8; 3]; 5]; 5] = [
            [[0, 0, 0], [0, 64, 0], [0, 128, 0], [0, 191, 0], [0, 255, 0]],
            [[0, 0, 0], [16, 64, 16], [32, 128, 32], [48, 191, 48], [64, 255, 64]],
            [[0, 0, 0], [32, 64, 32], [64, 128, 64], [96, 191, 96], [128, 255, 128]],
            [[0, 0, 0], [48, 64, 48], [96, 128, 96], [143, 191, 143], [191, 255, 191]],
            [[0, 0, 0], [64, 64, 64], [128, 128, 128], [191, 191, 191], [255, 255, 255]],
        ];

        for (y, row) in expected.iter().enumerate() {
            for (x, &[r, g, b]) in row.iter().enumerate() {
                assert_eq!(
                    square.pixel(x as u32, y as u32),
                    Some([r, g, b, 255]),
                    "pixel ({}, {})",
                    x,
                    y
                );
            }
        }

        let red = sv_square(0, Size::new(5, 5));
        assert_eq!(red.pixel(2, 2), Some([128, 64, 64, 255]));

        // Degenerate sizes do not panic.
        assert!(sv_square(0, Size::new(0, 0)).is_empty());
        assert_eq!(sv_square(0, Size::new(1, 1)).pixel(0, 0), Some([0, 0, 0, 255]));
    }

    #[test]
    fn test_alpha_bar() {
        let checkerboard = Checkerboard::default();
        let bar = alpha_bar(Rgb::new(255, 0, 0), Size::new(5, 1), &checkerboard);

        assert_eq!(bar.pixel(0, 0), Some([154, 154, 154, 255]));
        assert_eq!(bar.pixel(4, 0), Some([255, 0, 0, 255]));

        // The middle column has opacity 128.
        let [r, g, b, a] = bar.pixel(2, 0).unwrap_or_default();
        assert_eq!(a, 255);
        assert!(r > 154 && g < 154 && g == b);
    }
}
