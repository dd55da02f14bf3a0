//! Helper module with the options for color pickers.
//!
//! This module provides the options for a picker session and the
//! corresponding builder.
//!
//!
//! # Example
//!
//! ```
//! # use prettypick::opt::Options;
//! # use prettypick::raster::Size;
//! let options = Options::builder()
//!     .alpha(true)
//!     .square(Size::new(256, 256))
//!     .build();
//!
//! assert!(options.alpha());
//! assert_eq!(options.square().width, 256);
//! ```

use crate::preview::Preview;
use crate::raster::{Checkerboard, Size};

#[derive(Clone, Debug)]
struct OptionData {
    alpha: bool,
    hue_bar: Size,
    square: Size,
    alpha_bar: Size,
    preview: Size,
    tile_size: u32,
    light: u8,
    dark: u8,
}

impl OptionData {
    pub const fn new() -> Self {
        Self {
            alpha: false,
            hue_bar: Size::new(200, 11),
            square: Size::new(200, 200),
            alpha_bar: Size::new(200, 11),
            preview: Preview::SIZE,
            tile_size: Checkerboard::TILE_SIZE,
            light: 154,
            dark: 100,
        }
    }
}

/// A builder of options objects.
#[derive(Debug)]
pub struct OptionBuilder(OptionData);

impl OptionBuilder {
    /// Enable or disable the alpha channel.
    pub fn alpha(&mut self, alpha: bool) -> &mut Self {
        self.0.alpha = alpha;
        self
    }

    /// Set the size of the hue bar.
    pub fn hue_bar(&mut self, size: Size) -> &mut Self {
        self.0.hue_bar = size;
        self
    }

    /// Set the size of the saturation/value square.
    pub fn square(&mut self, size: Size) -> &mut Self {
        self.0.square = size;
        self
    }

    /// Set the size of the alpha bar. It only matters with alpha enabled.
    pub fn alpha_bar(&mut self, size: Size) -> &mut Self {
        self.0.alpha_bar = size;
        self
    }

    /// Set the size of each preview swatch.
    pub fn preview(&mut self, size: Size) -> &mut Self {
        self.0.preview = size;
        self
    }

    /// Set the checkerboard's tile size in pixels. Zero is treated as one.
    pub fn tile_size(&mut self, size: u32) -> &mut Self {
        self.0.tile_size = size.max(1);
        self
    }

    /// Set the checkerboard's gray levels.
    pub fn tones(&mut self, light: u8, dark: u8) -> &mut Self {
        self.0.light = light;
        self.0.dark = dark;
        self
    }

    /// Instantiate the options.
    pub fn build(&self) -> Options {
        Options(self.0.clone())
    }
}

/// An options object.
#[derive(Clone, Debug)]
pub struct Options(OptionData);

impl Default for Options {
    fn default() -> Self {
        Options(OptionData::new())
    }
}

impl Options {
    /// Create a new builder with the default option values.
    pub fn builder() -> OptionBuilder {
        OptionBuilder(OptionData::new())
    }

    /// Instantiate the default options but with the alpha channel enabled.
    pub fn with_alpha() -> Options {
        Self::builder().alpha(true).build()
    }

    /// Determine whether the alpha channel is enabled.
    pub fn alpha(&self) -> bool {
        self.0.alpha
    }

    /// Get the size of the hue bar.
    pub fn hue_bar(&self) -> Size {
        self.0.hue_bar
    }

    /// Get the size of the saturation/value square.
    pub fn square(&self) -> Size {
        self.0.square
    }

    /// Get the size of the alpha bar.
    pub fn alpha_bar(&self) -> Size {
        self.0.alpha_bar
    }

    /// Get the size of each preview swatch.
    pub fn preview(&self) -> Size {
        self.0.preview
    }

    /// Get the checkerboard's tile size.
    pub fn tile_size(&self) -> u32 {
        self.0.tile_size
    }

    /// Get the checkerboard.
    pub fn checkerboard(&self) -> Checkerboard {
        Checkerboard::new(self.0.light, self.0.dark, self.0.tile_size)
    }
}
