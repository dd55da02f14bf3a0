/// A color channel with its own numeric field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
    Hue,
    Saturation,
    Value,
    Alpha,
}

impl Channel {
    /// All channels in display order.
    pub const ALL: [Channel; 7] = [
        Self::Red,
        Self::Green,
        Self::Blue,
        Self::Hue,
        Self::Saturation,
        Self::Value,
        Self::Alpha,
    ];

    /// Get the channel's maximum value.
    pub const fn max(&self) -> u16 {
        match *self {
            Self::Hue => 360,
            Self::Saturation | Self::Value => 100,
            _ => 255,
        }
    }

    /// Determine whether this channel is one of red, green, or blue.
    pub const fn is_rgb(&self) -> bool {
        matches!(*self, Self::Red | Self::Green | Self::Blue)
    }

    /// Determine whether this channel is one of hue, saturation, or value.
    pub const fn is_hsv(&self) -> bool {
        matches!(*self, Self::Hue | Self::Saturation | Self::Value)
    }

    pub(crate) const fn index(&self) -> usize {
        *self as usize
    }

    /// Get a human-readable name.
    pub const fn name(&self) -> &'static str {
        match *self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Hue => "hue",
            Self::Saturation => "saturation",
            Self::Value => "value",
            Self::Alpha => "alpha",
        }
    }
}

impl core::fmt::Display for Channel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

// ====================================================================================================================

/// A numeric field, i.e., a spinner's value and text.
///
/// The value is clamped to `0..=max` at all times. After every update, the
/// text is the value's decimal representation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NumericField {
    value: u16,
    max: u16,
    text: String,
}

impl NumericField {
    /// Create a new field.
    pub fn new(value: u16, max: u16) -> Self {
        let value = value.min(max);
        Self {
            value,
            max,
            text: value.to_string(),
        }
    }

    /// Get the value.
    pub fn value(&self) -> u16 {
        self.value
    }

    /// Get the maximum value.
    pub fn max(&self) -> u16 {
        self.max
    }

    /// Get the text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Parse the raw text into a valid value.
    ///
    /// If the raw text equals the committed text, this method returns `None`.
    /// Otherwise, it parses the trimmed text as an integer and clamps it to
    /// `0..=max`. Integers too large for 64 bits clamp by their sign, whereas
    /// text that is not an integer yields zero.
    pub fn parse(&self, raw: &str) -> Option<u16> {
        if raw == self.text {
            return None;
        }

        let text = raw.trim();
        let value = match text.parse::<i64>() {
            Ok(n) => n.clamp(0, i64::from(self.max)) as u16,
            Err(_) if is_integer(text) && !text.starts_with('-') => self.max,
            Err(_) => 0,
        };
        Some(value)
    }

    /// Update the value and rewrite the text. This method returns `true` if
    /// either changed.
    pub(crate) fn set(&mut self, value: u16) -> bool {
        let value = value.min(self.max);
        if value == self.value && self.text == value.to_string() {
            return false;
        }

        self.value = value;
        self.text = value.to_string();
        true
    }
}

/// Determine whether the text is an optional sign followed by decimal digits.
fn is_integer(text: &str) -> bool {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
