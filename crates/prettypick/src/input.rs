//! The initial or programmatically picked color.

use crate::core::hex_to_rgb;
use crate::error::ColorError;
use crate::names::ColorNames;
use crate::{Color, Rgb};

/// A color as provided by a host, before it has been adjusted to the picker's
/// alpha mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorInput {
    /// An RGB triple.
    Rgb(Rgb),
    /// An RGBA quadruple.
    Rgba([u8; 4]),
    /// A hashed hexadecimal string with six or eight digits.
    Hex(String),
    /// A color name.
    Name(String),
}

impl ColorInput {
    /// Resolve this input to a color in the given alpha mode.
    ///
    /// Without alpha mode, the fourth component of RGBA quadruples and 8-digit
    /// hexadecimal strings is dropped. In alpha mode, inputs without alpha are
    /// fully opaque. Malformed hexadecimal strings fail with
    /// [`ColorError::InvalidFormat`] and unknown names with
    /// [`ColorError::UnknownName`].
    pub fn resolve(&self, alpha_mode: bool, names: &dyn ColorNames) -> Result<Color, ColorError> {
        let color = match *self {
            Self::Rgb(rgb) => Color::from(rgb),
            Self::Rgba([r, g, b, a]) => Color::translucent(r, g, b, a),
            Self::Hex(ref hex) => hex_to_rgb(hex)?,
            Self::Name(ref name) => names
                .lookup(name)
                .map(Color::from)
                .ok_or_else(|| ColorError::UnknownName(name.clone()))?,
        };

        Ok(color.in_alpha_mode(alpha_mode))
    }

    /// Determine whether this input carries its own alpha channel.
    pub fn has_alpha(&self) -> bool {
        match *self {
            Self::Rgba(_) => true,
            Self::Hex(ref hex) => hex.len() == 9,
            _ => false,
        }
    }
}

impl From<Rgb> for ColorInput {
    fn from(value: Rgb) -> Self {
        Self::Rgb(value)
    }
}

impl From<[u8; 3]> for ColorInput {
    fn from(value: [u8; 3]) -> Self {
        Self::Rgb(Rgb::from(value))
    }
}

impl From<[u8; 4]> for ColorInput {
    fn from(value: [u8; 4]) -> Self {
        Self::Rgba(value)
    }
}

impl From<Color> for ColorInput {
    fn from(value: Color) -> Self {
        if value.has_alpha() {
            Self::Rgba(value.to_rgba())
        } else {
            Self::Rgb(value.rgb())
        }
    }
}

impl From<&str> for ColorInput {
    /// Treat strings starting with `#` as hexadecimal and all others as names.
    fn from(value: &str) -> Self {
        if value.starts_with('#') {
            Self::Hex(value.to_owned())
        } else {
            Self::Name(value.to_owned())
        }
    }
}
