mod mapping;
mod math;
mod string;

// mapping
pub use mapping::{clamp_offset, position_to_value, value_to_position};

// math
pub(crate) use math::{full_color, round_to_u8};
pub use math::{hsv_to_rgb, hue_from_rgb, hue_to_full_color, rgb_to_hsv, round2};

// string
pub use string::{hex_to_rgb, rgb_to_hex};
