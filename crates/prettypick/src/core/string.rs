use crate::error::ColorError;
use crate::{Color, Rgb};

/// Format three or four color components as uppercase hashed hexadecimal.
///
/// This function fails with [`ColorError::InvalidArity`] for any other number
/// of components.
pub fn rgb_to_hex(components: &[u8]) -> Result<String, ColorError> {
    if components.len() != 3 && components.len() != 4 {
        return Err(ColorError::InvalidArity(components.len()));
    }

    let mut result = String::with_capacity(1 + 2 * components.len());
    result.push('#');
    for component in components {
        result.push_str(&format!("{:02X}", component));
    }
    Ok(result)
}

/// Parse a color in hashed hexadecimal format.
///
/// The string must be `#` followed by exactly six or eight hexadecimal digits
/// of either case. Six digits produce a color without, eight digits a color
/// with alpha channel. Anything else fails with [`ColorError::InvalidFormat`].
pub fn hex_to_rgb(s: &str) -> Result<Color, ColorError> {
    let invalid = || ColorError::InvalidFormat(s.to_owned());

    let digits = s.strip_prefix('#').ok_or_else(invalid)?;
    if digits.len() != 6 && digits.len() != 8 {
        return Err(invalid());
    } else if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        // u8::from_str_radix() would also accept a leading plus sign.
        return Err(invalid());
    }

    fn parse_coordinate(digits: &str, index: usize) -> Result<u8, ()> {
        let t = digits.get(2 * index..2 * index + 2).ok_or(())?;
        u8::from_str_radix(t, 16).map_err(|_| ())
    }

    let parse = |index| parse_coordinate(digits, index).map_err(|_| invalid());
    let rgb = Rgb::new(parse(0)?, parse(1)?, parse(2)?);
    let alpha = if digits.len() == 8 {
        Some(parse(3)?)
    } else {
        None
    };

    Ok(Color::new(rgb, alpha))
}

// ====================================================================================================================
