//! # Pretty 🎨 Pick
//!
//! Prettypick is the toolkit-independent engine behind an interactive color
//! picker. It lets users explore RGB colors through a hue bar, a
//! saturation/value square, and an optional alpha bar, while keeping the
//! numeric RGB, HSV, and alpha fields, the hexadecimal text, the cursor
//! positions, and the rendered gradients in lockstep.
//!
//! Prettypick does not open windows or handle events. A host toolkit forwards
//! user edits to a [`Picker`], redisplays the representations named by the
//! returned [`Changes`], and blits the picker's RGBA pixel buffers.
//!
//!
//! ## 1. Overview
//!
//! Prettypick's main abstractions are:
//!
//!   * [`Rgb`], [`Hsv`], and [`Color`] are the **color types**. Colors
//!     combine RGB coordinates with an optional alpha channel, whose presence
//!     depends on the picker's configuration.
//!   * The [`convert`] module provides **exact conversions** between RGB, HSV,
//!     and hashed hexadecimal strings, all rounding half up.
//!   * The [`mapping`] module provides the **mapping between pixel offsets and
//!     coordinates** along a gradient's axis.
//!   * The [`raster`] module **renders the gradients** and the checkerboard
//!     backdrop for translucent colors. Its [`Rasterizer`](raster::Rasterizer)
//!     owns the buffers and re-renders them only when necessary.
//!   * [`Picker`] is the **synchronization controller**. It owns the canonical
//!     color and, after each edit, recomputes every other representation.
//!   * [`opt::Options`] configures a picker, [`ColorInput`] describes its
//!     initial color, and [`names::ColorNames`] resolves color names.
//!
//!
//! ## 2. Example
//!
//! ```
//! # use prettypick::error::ColorError;
//! # fn main() -> Result<(), ColorError> {
//! use prettypick::{opt::Options, Changes, Channel, Hsv, Picker, Rgb};
//!
//! let mut picker = Picker::new("sky blue", Options::default())?;
//! assert_eq!(picker.hsv(), Hsv::new(197, 43, 92));
//!
//! // Out-of-range input is clamped and the field's text rewritten.
//! let changes = picker.edit_channel(Channel::Hue, "390");
//! assert!(changes.contains(Changes::HUE | Changes::SQUARE));
//! assert_eq!(picker.text(Channel::Hue), "360");
//!
//! // Dragging the square's cursor to the top-right corner yields the pure hue.
//! picker.drag_square(199.0, 0.0);
//! assert_eq!(picker.rgb(), Rgb::new(255, 0, 0));
//!
//! let selection = picker.commit().map(|s| s.hex().to_owned());
//! assert_eq!(selection.as_deref(), Some("#FF0000"));
//! # Ok(())
//! # }
//! ```
//!
//!
//! ## 3. Optional Features
//!
//! Prettypick supports one feature flag:
//!
//!   - **`f64`** selects the eponymous type as floating point type [`Float`]
//!     instead of `f32`. This feature is enabled by default.
//!
//! Prettypick logs through the [log](https://crates.io/crates/log) facade.
//! Accepted edits are logged at debug level and buffer re-renders at trace
//! level. Hosts pick the logger.
//!

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

mod color;
mod core;
pub mod error;
mod input;
pub mod names;
pub mod opt;
pub mod preview;
pub mod raster;
mod sync;

pub mod convert {
    //! Conversions between RGB, HSV, and hashed hexadecimal strings.
    pub use crate::core::{
        hex_to_rgb, hsv_to_rgb, hue_from_rgb, hue_to_full_color, rgb_to_hex, rgb_to_hsv, round2,
    };
}

pub mod mapping {
    //! The mapping between pixel offsets and coordinates.
    pub use crate::core::{clamp_offset, position_to_value, value_to_position};
}

pub use color::{Color, Hsv, Rgb};
pub use error::ColorError;
pub use input::ColorInput;
pub use raster::{Gradient, Size};
pub use sync::{Changes, Channel, Cursors, NumericField, Picker, Selection};
