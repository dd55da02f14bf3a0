//! Utility module with prettypick's errors.

use crate::Float;
use thiserror::Error;

/// An erroneous color or color operation.
///
/// Only the pure conversion functions and picker construction report errors.
/// Edits made through a [`Picker`](crate::Picker) never fail; out-of-range
/// input is clamped and malformed input is reverted instead.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ColorError {
    /// A hexadecimal color that is not `#` followed by exactly six or eight
    /// hexadecimal digits. For example, `#FFFFF` is missing a digit, whereas
    /// `#FFFFFG` has the correct length but an unsuitable character.
    #[error("hexadecimal color should be `#` followed by 6 or 8 hex digits, not {0:?}")]
    InvalidFormat(String),

    /// A request to format a number of color components other than three or
    /// four as hexadecimal color.
    #[error("hexadecimal color should have 3 or 4 components, not {0}")]
    InvalidArity(usize),

    /// A hue outside `0..=360` degrees.
    #[error("hue should be between 0 and 360, not {0}")]
    OutOfRange(Float),

    /// A color name the name table does not know.
    #[error("color name {0:?} is unknown")]
    UnknownName(String),
}
