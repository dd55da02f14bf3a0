//! Color names.
//!
//! A picker resolves color names through the [`ColorNames`] trait, so that
//! hosts can plug in the naming scheme of their windowing system. The default
//! [`X11Colors`] covers a selection of the X11 color names, including all
//! names in the default [`PALETTE`].

use crate::Rgb;

/// A table of color names.
pub trait ColorNames {
    /// Look up the color for the name. Implementations should ignore case and
    /// spaces, so that `"sky blue"` and `"SkyBlue"` resolve to the same color.
    fn lookup(&self, name: &str) -> Option<Rgb>;
}

/// The names of the picker's default palette, in display order.
pub const PALETTE: [&str; 18] = [
    "red",
    "dark red",
    "orange",
    "yellow",
    "green",
    "lightgreen",
    "blue",
    "royal blue",
    "sky blue",
    "purple",
    "magenta",
    "pink",
    "black",
    "white",
    "gray",
    "saddle brown",
    "lightgray",
    "wheat",
];

macro_rules! named {
    ($name:literal, $r:literal, $g:literal, $b:literal) => {
        ($name, Rgb::new($r, $g, $b))
    };
}

/// X11 colors, keyed by lowercase name without spaces.
const X11_COLORS: [(&str, Rgb); 37] = [
    named!("black", 0x00, 0x00, 0x00),
    named!("blue", 0x00, 0x00, 0xff),
    named!("brown", 0xa5, 0x2a, 0x2a),
    named!("coral", 0xff, 0x7f, 0x50),
    named!("cyan", 0x00, 0xff, 0xff),
    named!("darkblue", 0x00, 0x00, 0x8b),
    named!("darkgreen", 0x00, 0x64, 0x00),
    named!("darkred", 0x8b, 0x00, 0x00),
    named!("gold", 0xff, 0xd7, 0x00),
    named!("gray", 0xbe, 0xbe, 0xbe),
    named!("green", 0x00, 0xff, 0x00),
    named!("grey", 0xbe, 0xbe, 0xbe),
    named!("khaki", 0xf0, 0xe6, 0x8c),
    named!("lightgray", 0xd3, 0xd3, 0xd3),
    named!("lightgreen", 0x90, 0xee, 0x90),
    named!("lightgrey", 0xd3, 0xd3, 0xd3),
    named!("magenta", 0xff, 0x00, 0xff),
    named!("maroon", 0xb0, 0x30, 0x60),
    named!("navy", 0x00, 0x00, 0x80),
    named!("orange", 0xff, 0xa5, 0x00),
    named!("orangered", 0xff, 0x45, 0x00),
    named!("pink", 0xff, 0xc0, 0xcb),
    named!("purple", 0xa0, 0x20, 0xf0),
    named!("red", 0xff, 0x00, 0x00),
    named!("royalblue", 0x41, 0x69, 0xe1),
    named!("saddlebrown", 0x8b, 0x45, 0x13),
    named!("salmon", 0xfa, 0x80, 0x72),
    named!("skyblue", 0x87, 0xce, 0xeb),
    named!("tomato", 0xff, 0x63, 0x47),
    named!("turquoise", 0x40, 0xe0, 0xd0),
    named!("violet", 0xee, 0x82, 0xee),
    named!("wheat", 0xf5, 0xde, 0xb3),
    named!("white", 0xff, 0xff, 0xff),
    named!("yellow", 0xff, 0xff, 0x00),
    named!("darkgray", 0xa9, 0xa9, 0xa9),
    named!("darkgrey", 0xa9, 0xa9, 0xa9),
    named!("orchid", 0xda, 0x70, 0xd6),
];

/// Normalize a color name by dropping whitespace and lowercasing.
pub fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// The default color names.
#[derive(Clone, Copy, Debug, Default)]
pub struct X11Colors;

impl ColorNames for X11Colors {
    fn lookup(&self, name: &str) -> Option<Rgb> {
        let key = normalize(name);
        X11_COLORS
            .iter()
            .find(|&&(candidate, _)| candidate == key)
            .map(|&(_, rgb)| rgb)
    }
}

impl<F> ColorNames for F
where
    F: Fn(&str) -> Option<Rgb>,
{
    fn lookup(&self, name: &str) -> Option<Rgb> {
        self(name)
    }
}
