//! The color representations kept in sync by the picker.

/// A 24-bit RGB color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb([u8; 3]);

impl Rgb {
    /// Create a new RGB color from its coordinates.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Get the red coordinate.
    pub const fn red(&self) -> u8 {
        self.0[0]
    }

    /// Get the green coordinate.
    pub const fn green(&self) -> u8 {
        self.0[1]
    }

    /// Get the blue coordinate.
    pub const fn blue(&self) -> u8 {
        self.0[2]
    }

    /// Determine whether all coordinates are equal, i.e., this color is black,
    /// white, or a shade of gray.
    pub const fn is_gray(&self) -> bool {
        self.0[0] == self.0[1] && self.0[1] == self.0[2]
    }

    /// Determine whether this color is black.
    pub const fn is_black(&self) -> bool {
        self.0[0] == 0 && self.is_gray()
    }

    /// Get the largest per-coordinate distance to the other color.
    pub fn max_distance(&self, other: &Rgb) -> u8 {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| a.abs_diff(*b))
            .max()
            .unwrap_or(0)
    }
}

impl AsRef<[u8; 3]> for Rgb {
    fn as_ref(&self) -> &[u8; 3] {
        &self.0
    }
}

impl core::ops::Index<usize> for Rgb {
    type Output = u8;

    /// Access the coordinate with the given index.
    ///
    /// # Panics
    ///
    /// This method panics if `2 < index`.
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(value: [u8; 3]) -> Self {
        Self(value)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(value: Rgb) -> Self {
        value.0
    }
}

impl core::fmt::Display for Rgb {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let [r, g, b] = self.0;
        f.write_fmt(format_args!("#{:02X}{:02X}{:02X}", r, g, b))
    }
}

// ====================================================================================================================

/// A color in integral HSV coordinates.
///
/// Hue is measured in degrees `0..=360`, saturation and value in percent
/// `0..=100`. The constructor clamps all three, so an `Hsv` never holds an
/// out-of-range coordinate. Note that 0 and 360 degrees denote the same hue.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Hsv {
    hue: u16,
    saturation: u8,
    value: u8,
}

impl Hsv {
    /// The largest hue.
    pub const MAX_HUE: u16 = 360;
    /// The largest saturation or value.
    pub const MAX_PERCENT: u8 = 100;

    /// Create a new HSV color, clamping each coordinate to its range.
    pub fn new(hue: u16, saturation: u8, value: u8) -> Self {
        Self {
            hue: hue.min(Self::MAX_HUE),
            saturation: saturation.min(Self::MAX_PERCENT),
            value: value.min(Self::MAX_PERCENT),
        }
    }

    /// Get the hue in degrees.
    pub const fn hue(&self) -> u16 {
        self.hue
    }

    /// Get the saturation in percent.
    pub const fn saturation(&self) -> u8 {
        self.saturation
    }

    /// Get the value in percent.
    pub const fn value(&self) -> u8 {
        self.value
    }

    /// Replace the hue.
    #[must_use]
    pub fn with_hue(&self, hue: u16) -> Self {
        Self::new(hue, self.saturation, self.value)
    }

    /// Replace the saturation.
    #[must_use]
    pub fn with_saturation(&self, saturation: u8) -> Self {
        Self::new(self.hue, saturation, self.value)
    }

    /// Replace the value.
    #[must_use]
    pub fn with_value(&self, value: u8) -> Self {
        Self::new(self.hue, self.saturation, value)
    }
}

impl core::fmt::Display for Hsv {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_fmt(format_args!(
            "hsv({}, {}%, {}%)",
            self.hue, self.saturation, self.value
        ))
    }
}

// ====================================================================================================================

/// A picked color, that is, an RGB color with optional alpha.
///
/// Whether the alpha channel is present depends on the picker's configuration
/// and is a mode of its own, not a synonym for full opacity. Still,
/// [`Color::opacity`] reports a missing alpha as 255, which is how colors
/// without alpha are composited.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    rgb: Rgb,
    alpha: Option<u8>,
}

impl Color {
    /// Create a new color from RGB and optional alpha.
    pub const fn new(rgb: Rgb, alpha: Option<u8>) -> Self {
        Self { rgb, alpha }
    }

    /// Create a new color without alpha channel.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(Rgb::new(r, g, b), None)
    }

    /// Create a new color with alpha channel.
    pub const fn translucent(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(Rgb::new(r, g, b), Some(a))
    }

    /// Get the RGB coordinates.
    pub const fn rgb(&self) -> Rgb {
        self.rgb
    }

    /// Get the alpha channel, if any.
    pub const fn alpha(&self) -> Option<u8> {
        self.alpha
    }

    /// Determine whether this color has an alpha channel.
    pub const fn has_alpha(&self) -> bool {
        self.alpha.is_some()
    }

    /// Get the opacity, which is 255 for colors without alpha channel.
    pub fn opacity(&self) -> u8 {
        self.alpha.unwrap_or(u8::MAX)
    }

    /// Get the components, three without and four with alpha channel.
    pub fn components(&self) -> Vec<u8> {
        let mut components = self.rgb.0.to_vec();
        components.extend(self.alpha);
        components
    }

    /// Get the color as RGBA pixel.
    pub fn to_rgba(&self) -> [u8; 4] {
        let [r, g, b] = self.rgb.0;
        [r, g, b, self.opacity()]
    }

    /// Replace the RGB coordinates, keeping the alpha channel.
    #[must_use]
    pub const fn with_rgb(&self, rgb: Rgb) -> Self {
        Self::new(rgb, self.alpha)
    }

    /// Replace the alpha channel's value. This method does not add an alpha
    /// channel to colors without one.
    #[must_use]
    pub fn with_opacity(&self, alpha: u8) -> Self {
        Self::new(self.rgb, self.alpha.map(|_| alpha))
    }

    /// Force the alpha mode, adding full opacity or dropping the channel.
    #[must_use]
    pub fn in_alpha_mode(&self, alpha_mode: bool) -> Self {
        match (alpha_mode, self.alpha) {
            (true, None) => Self::new(self.rgb, Some(u8::MAX)),
            (false, Some(_)) => Self::new(self.rgb, None),
            _ => *self,
        }
    }

    /// Format this color as uppercase hexadecimal string.
    ///
    /// The result has seven characters without and nine characters with alpha
    /// channel.
    pub fn to_hex(&self) -> String {
        self.to_string()
    }
}

impl From<Rgb> for Color {
    fn from(value: Rgb) -> Self {
        Self::new(value, None)
    }
}

impl core::fmt::Display for Color {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.rgb, f)?;
        if let Some(a) = self.alpha {
            f.write_fmt(format_args!("{:02X}", a))?;
        }
        Ok(())
    }
}
