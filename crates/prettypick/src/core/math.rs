use crate::error::ColorError;
use crate::{Float, Hsv, Rgb};

/// Round half up to the nearest integer.
///
/// All fractional color math in this crate rounds with this function. For
/// non-negative numbers, it differs from [`Float::round`] only in name, but
/// it differs from round-half-to-even for every `n + 0.5` with even `n`.
#[inline]
pub fn round2(x: Float) -> Float {
    (x + 0.5).floor()
}

/// Round half up and convert to a byte, saturating at both ends.
#[inline]
pub(crate) fn round_to_u8(x: Float) -> u8 {
    round2(x).clamp(0.0, 255.0) as u8
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert unit-range RGB coordinates to unit-range HSV coordinates.
fn unit_rgb_to_hsv(r: Float, g: Float, b: Float) -> [Float; 3] {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    if max == min {
        return [0.0, 0.0, max];
    }

    let range = max - min;
    let s = range / max;
    let rc = (max - r) / range;
    let gc = (max - g) / range;
    let bc = (max - b) / range;

    let h = if r == max {
        bc - gc
    } else if g == max {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };

    [(h / 6.0).rem_euclid(1.0), s, max]
}

/// Convert unit-range HSV coordinates to unit-range RGB coordinates.
// Rounding of the results must match the unfused formulas.
#[allow(clippy::suboptimal_flops)]
fn unit_hsv_to_rgb(h: Float, s: Float, v: Float) -> [Float; 3] {
    if s == 0.0 {
        return [v, v, v];
    }

    let sector = (h * 6.0).trunc();
    let f = h * 6.0 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match (sector as i64).rem_euclid(6) {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        _ => [v, p, q],
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert the RGB color to HSV.
///
/// Hue is scaled to degrees, saturation and value to percent, and all three
/// are rounded with [`round2`]. Since hue rounds up, colors just shy of red
/// have hue 360 and not 0.
pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let [r, g, b] = *rgb.as_ref();
    let [h, s, v] = unit_rgb_to_hsv(r as Float / 255.0, g as Float / 255.0, b as Float / 255.0);
    Hsv::new(
        round2(h * 360.0) as u16,
        round2(s * 100.0) as u8,
        round2(v * 100.0) as u8,
    )
}

/// Convert HSV coordinates with fractional hue to RGB.
pub(crate) fn hsv_to_rgb_with(hue: Float, saturation: Float, value: Float) -> Rgb {
    let [r, g, b] = unit_hsv_to_rgb(hue / 360.0, saturation / 100.0, value / 100.0);
    Rgb::new(
        round_to_u8(r * 255.0),
        round_to_u8(g * 255.0),
        round_to_u8(b * 255.0),
    )
}

/// Convert the HSV color to RGB.
pub fn hsv_to_rgb(hsv: Hsv) -> Rgb {
    hsv_to_rgb_with(
        hsv.hue() as Float,
        hsv.saturation() as Float,
        hsv.value() as Float,
    )
}

/// Compute the hue of the RGB color from its position on the chromaticity
/// circle.
///
/// Unlike [`rgb_to_hsv`], which uses the hexagonal HSV model, this function
/// measures the angle of `(2r − g − b, √3·(g − b))`. For chromatic colors, the
/// two hues differ by at most 2°. For achromatic colors, this function returns
/// 0, as does [`rgb_to_hsv`].
pub fn hue_from_rgb(rgb: Rgb) -> u16 {
    let [r, g, b] = *rgb.as_ref();
    let (r, g, b) = (r as Float, g as Float, b as Float);
    let x = r.mul_add(2.0, -g - b);
    let y = (3.0 as Float).sqrt() * (g - b);
    let degrees = y.atan2(x).to_degrees();
    (round2(degrees + 360.0) as u16) % 360
}

/// Compute the fully saturated, full value color for fractional hue.
#[inline]
pub(crate) fn full_color(hue: Float) -> Rgb {
    hsv_to_rgb_with(hue, 100.0, 100.0)
}

/// Compute the fully saturated, full value color for the given hue.
///
/// This function fails with [`ColorError::OutOfRange`] if the hue is not
/// between 0 and 360 degrees.
pub fn hue_to_full_color(hue: Float) -> Result<Rgb, ColorError> {
    if !(0.0..=360.0).contains(&hue) {
        return Err(ColorError::OutOfRange(hue));
    }
    Ok(full_color(hue))
}

// ====================================================================================================================
