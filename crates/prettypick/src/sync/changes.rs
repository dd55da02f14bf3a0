use bitflags::bitflags;

use super::Channel;

bitflags! {
    /// The representations changed by an edit.
    ///
    /// Every picker mutator returns the set of fields and buffers whose
    /// observable state changed, so that the host redisplays exactly those.
    ///
    /// ```
    /// use prettypick::Changes;
    ///
    /// let changes = Changes::HUE | Changes::SQUARE;
    /// assert!(changes.intersects(Changes::BUFFERS));
    /// assert!(!changes.contains(Changes::HEX));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Changes: u16 {
        const RED = 1 << 0;
        const GREEN = 1 << 1;
        const BLUE = 1 << 2;
        const HUE = 1 << 3;
        const SATURATION = 1 << 4;
        const VALUE = 1 << 5;
        const ALPHA = 1 << 6;
        /// The hexadecimal text.
        const HEX = 1 << 7;
        const HUE_BAR = 1 << 8;
        const SQUARE = 1 << 9;
        const ALPHA_BAR = 1 << 10;
        /// The current color's swatch.
        const PREVIEW = 1 << 11;
        /// One or more cursor positions.
        const CURSORS = 1 << 12;

        /// All numeric fields.
        const FIELDS = Self::RED.bits() | Self::GREEN.bits() | Self::BLUE.bits()
            | Self::HUE.bits() | Self::SATURATION.bits() | Self::VALUE.bits()
            | Self::ALPHA.bits();
        /// All gradient buffers.
        const BUFFERS = Self::HUE_BAR.bits() | Self::SQUARE.bits() | Self::ALPHA_BAR.bits();
    }
}

impl Changes {
    /// Get the flag for the channel's numeric field.
    pub const fn channel(channel: Channel) -> Self {
        match channel {
            Channel::Red => Self::RED,
            Channel::Green => Self::GREEN,
            Channel::Blue => Self::BLUE,
            Channel::Hue => Self::HUE,
            Channel::Saturation => Self::SATURATION,
            Channel::Value => Self::VALUE,
            Channel::Alpha => Self::ALPHA,
        }
    }
}
