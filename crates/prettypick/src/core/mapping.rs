use super::math::round2;
use crate::Float;

/// Clamp the pixel offset to `0..=extent-1`.
///
/// Extents of zero or one pixels admit offset zero only.
pub fn clamp_offset(offset: Float, extent: u32) -> Float {
    if extent <= 1 || offset.is_nan() {
        return 0.0;
    }
    offset.clamp(0.0, (extent - 1) as Float)
}

/// Map the pixel offset along an axis of the given extent to a value in
/// `0..=max`.
///
/// The first pixel maps to 0 and the last pixel to `max`. Offsets beyond
/// either end are clamped first. Since a widget that has not been sized yet
/// has no meaningful axis, an extent of zero or one always yields 0.
pub fn position_to_value(offset: Float, extent: u32, max: u16) -> u16 {
    if extent <= 1 {
        return 0;
    }

    let offset = clamp_offset(offset, extent);
    let value = round2(max as Float * offset / (extent - 1) as Float);
    value.clamp(0.0, max as Float) as u16
}

/// Map the value in `0..=max` to a pixel offset along an axis of the given
/// extent.
///
/// This is the inverse of [`position_to_value`]. The result is not rounded,
/// since it denotes where to draw a cursor. An extent of zero or one, or a
/// maximum of zero, always yields offset 0.
pub fn value_to_position(value: u16, extent: u32, max: u16) -> Float {
    if extent <= 1 || max == 0 {
        return 0.0;
    }

    let value = value.min(max);
    value as Float / max as Float * (extent - 1) as Float
}
