//! The synchronization controller.
//!
//! A [`Picker`] owns the canonical color and keeps all of its representations
//! in agreement: the seven numeric fields, the hexadecimal text, the cursor
//! positions, the gradient buffers, and the preview. Hosts forward every user
//! edit to exactly one mutator, which processes the edit in three phases:
//!
//!  1. It parses and clamps the raw input, rewriting out-of-range or malformed
//!     text.
//!  2. It computes the complete new state from the edited representation and
//!     the cached other representations.
//!  3. It writes the new state back to all representations and re-renders
//!     those buffers whose governing parameter changed.
//!
//! Since the last phase never calls a mutator, there are no feedback loops.
//! Every mutator returns the [`Changes`] the host needs to redisplay.

mod changes;
mod field;

pub use changes::Changes;
pub use field::{Channel, NumericField};

use crate::core::{
    clamp_offset, hex_to_rgb, hsv_to_rgb, position_to_value, rgb_to_hsv, value_to_position,
};
use crate::error::ColorError;
use crate::input::ColorInput;
use crate::names::{ColorNames, X11Colors};
use crate::opt::Options;
use crate::preview::Preview;
use crate::raster::{
    alpha_cursor_color, CursorLine, Gradient, GradientBuffer, Rasterizer, Size, BAR_CURSOR,
    SQUARE_CURSOR,
};
use crate::{Color, Float, Hsv, Rgb};

/// The cursor positions as pixel offsets.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Cursors {
    /// The hue bar's cursor column.
    pub hue: Float,
    /// The square's cursor column, which determines the value.
    pub value: Float,
    /// The square's cursor row, which determines the saturation.
    pub saturation: Float,
    /// The alpha bar's cursor column.
    pub alpha: Float,
}

/// The confirmed result of a picker session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    color: Color,
    hsv: Hsv,
    hex: String,
}

impl Selection {
    /// Get the color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Get the RGB coordinates.
    pub fn rgb(&self) -> Rgb {
        self.color.rgb()
    }

    /// Get the components, three without and four with alpha.
    pub fn components(&self) -> Vec<u8> {
        self.color.components()
    }

    /// Get the HSV coordinates.
    pub fn hsv(&self) -> Hsv {
        self.hsv
    }

    /// Get the hexadecimal string.
    pub fn hex(&self) -> &str {
        &self.hex
    }
}

/// The representation that is ground truth for the canonical color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Anchor {
    Rgb,
    Hsv,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Outcome {
    Pending,
    Confirmed(Selection),
    Cancelled,
}

/// Derive the HSV coordinates for an RGB-grounded edit.
///
/// Black has no defined hue or saturation and grays have no defined hue. For
/// those colors, the previous coordinates carry over, so that a round trip
/// through black or gray does not reset the square or hue bar. Dark or pale
/// colors whose coordinates merely round to zero keep their own hue and
/// saturation.
fn derive_hsv(rgb: Rgb, previous: &Hsv) -> Hsv {
    let hsv = rgb_to_hsv(rgb);
    if rgb.is_black() {
        Hsv::new(previous.hue(), previous.saturation(), 0)
    } else if rgb.is_gray() {
        Hsv::new(previous.hue(), 0, hsv.value())
    } else {
        hsv
    }
}

/// Flip a row offset so that the top row has the largest value.
fn flip(offset: Float, extent: u32) -> Float {
    if extent <= 1 {
        0.0
    } else {
        (extent - 1) as Float - offset
    }
}

/// Determine whether the cursor offset maps to the value.
fn agrees(offset: Float, extent: u32, max: u16, value: u16) -> bool {
    extent <= 1 || position_to_value(offset, extent, max) == value
}

// ====================================================================================================================

/// An interactive color picker.
pub struct Picker {
    options: Options,
    names: Box<dyn ColorNames + Send>,
    original: Color,
    color: Color,
    hsv: Hsv,
    fields: [NumericField; 7],
    hex: String,
    cursors: Cursors,
    rasterizer: Rasterizer,
    preview: Preview,
    anchor: Anchor,
    outcome: Outcome,
}

impl core::fmt::Debug for Picker {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Picker")
            .field("options", &self.options)
            .field("original", &self.original)
            .field("color", &self.color)
            .field("hsv", &self.hsv)
            .field("hex", &self.hex)
            .field("cursors", &self.cursors)
            .field("outcome", &self.outcome)
            .finish_non_exhaustive()
    }
}

impl Picker {
    /// Create a new picker for the initial color, resolving color names with
    /// the X11 color names.
    pub fn new<I>(initial: I, options: Options) -> Result<Self, ColorError>
    where
        I: Into<ColorInput>,
    {
        Self::with_names(initial, options, X11Colors)
    }

    /// Create a new picker for the initial color, resolving color names with
    /// the given table.
    pub fn with_names<I, N>(initial: I, options: Options, names: N) -> Result<Self, ColorError>
    where
        I: Into<ColorInput>,
        N: ColorNames + Send + 'static,
    {
        let alpha_mode = options.alpha();
        let color = initial.into().resolve(alpha_mode, &names)?;
        let hsv = rgb_to_hsv(color.rgb());
        let checkerboard = options.checkerboard();

        let rasterizer = Rasterizer::new(
            options.hue_bar(),
            options.square(),
            alpha_mode.then(|| options.alpha_bar()),
            checkerboard,
            hsv.hue(),
            color.rgb(),
        );
        let preview = Preview::new(options.preview(), &checkerboard, alpha_mode, &color);

        let [r, g, b] = *color.rgb().as_ref();
        let fields = [
            NumericField::new(r as u16, 255),
            NumericField::new(g as u16, 255),
            NumericField::new(b as u16, 255),
            NumericField::new(hsv.hue(), 360),
            NumericField::new(hsv.saturation() as u16, 100),
            NumericField::new(hsv.value() as u16, 100),
            NumericField::new(color.opacity() as u16, 255),
        ];

        let mut picker = Self {
            options,
            names: Box::new(names),
            original: color,
            color,
            hsv,
            fields,
            hex: color.to_hex(),
            cursors: Cursors::default(),
            rasterizer,
            preview,
            anchor: Anchor::Rgb,
            outcome: Outcome::Pending,
        };
        picker.cursors = picker.place_cursors(&hsv, &color);

        log::debug!("open picker for {} ({})", color, hsv);
        Ok(picker)
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Get the options.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Determine whether the picker has an alpha channel.
    pub fn is_alpha_mode(&self) -> bool {
        self.options.alpha()
    }

    /// Get the current color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Get the color the picker was opened with.
    pub fn original(&self) -> Color {
        self.original
    }

    /// Get the current RGB coordinates.
    pub fn rgb(&self) -> Rgb {
        self.color.rgb()
    }

    /// Get the current HSV coordinates.
    pub fn hsv(&self) -> Hsv {
        self.hsv
    }

    /// Get the current alpha, if the picker has an alpha channel.
    pub fn alpha(&self) -> Option<u8> {
        self.color.alpha()
    }

    /// Get the current hexadecimal text.
    pub fn hex(&self) -> &str {
        &self.hex
    }

    /// Get the channel's numeric field.
    pub fn field(&self, channel: Channel) -> &NumericField {
        &self.fields[channel.index()]
    }

    /// Get the channel's value.
    pub fn value(&self, channel: Channel) -> u16 {
        self.field(channel).value()
    }

    /// Get the channel's text.
    pub fn text(&self, channel: Channel) -> &str {
        self.field(channel).text()
    }

    /// Get the cursor positions.
    pub fn cursors(&self) -> Cursors {
        self.cursors
    }

    /// Get the hue bar.
    pub fn hue_bar(&self) -> &GradientBuffer {
        self.rasterizer.hue_bar()
    }

    /// Get the saturation/value square.
    pub fn square(&self) -> &GradientBuffer {
        self.rasterizer.square()
    }

    /// Get the alpha bar, if the picker has an alpha channel.
    pub fn alpha_bar(&self) -> Option<&GradientBuffer> {
        self.rasterizer.alpha_bar()
    }

    /// Get the gradient's buffer.
    pub fn gradient(&self, gradient: Gradient) -> Option<&GradientBuffer> {
        self.rasterizer.get(gradient)
    }

    /// Get the preview.
    pub fn preview(&self) -> &Preview {
        &self.preview
    }

    /// Get the cursor lines for the gradient.
    pub fn cursor_lines(&self, gradient: Gradient) -> Vec<CursorLine> {
        let c = &self.cursors;
        match gradient {
            Gradient::HueBar => vec![CursorLine::vertical(c.hue, 2, BAR_CURSOR)],
            Gradient::Square => vec![
                CursorLine::vertical(c.value, 1, SQUARE_CURSOR),
                CursorLine::horizontal(c.saturation, 1, SQUARE_CURSOR),
            ],
            Gradient::AlphaBar if self.is_alpha_mode() => vec![CursorLine::vertical(
                c.alpha,
                2,
                alpha_cursor_color(&self.hsv),
            )],
            Gradient::AlphaBar => Vec::new(),
        }
    }

    /// Render the gradient with its cursor lines drawn on top.
    pub fn render(&self, gradient: Gradient) -> Option<GradientBuffer> {
        let buffer = self.rasterizer.get(gradient)?;
        let lines = self.cursor_lines(gradient);
        let mut lines = lines.iter();
        let first = lines.next().map_or_else(|| buffer.clone(), |l| l.draw(buffer));
        Some(lines.fold(first, |image, line| line.draw(&image)))
    }

    /// Determine whether the session is still going.
    pub fn is_active(&self) -> bool {
        self.outcome == Outcome::Pending
    }

    /// Get the confirmed selection, if any.
    pub fn selection(&self) -> Option<&Selection> {
        match self.outcome {
            Outcome::Confirmed(ref selection) => Some(selection),
            _ => None,
        }
    }

    /// Consume the picker and return the confirmed selection, if any.
    pub fn into_selection(self) -> Option<Selection> {
        match self.outcome {
            Outcome::Confirmed(selection) => Some(selection),
            _ => None,
        }
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Edit a numeric field.
    ///
    /// Editing red, green, or blue makes RGB the ground truth. Editing hue,
    /// saturation, or value recombines the new coordinate with the other two
    /// cached coordinates and makes HSV the ground truth. Alpha edits are
    /// ignored unless the picker has an alpha channel.
    pub fn edit_channel(&mut self, channel: Channel, raw: &str) -> Changes {
        if !self.accepts_edits("edit", channel.name()) {
            return Changes::empty();
        } else if channel == Channel::Alpha && !self.is_alpha_mode() {
            return Changes::empty();
        }

        let Some(value) = self.field(channel).parse(raw) else {
            return Changes::empty();
        };
        log::debug!("edit {} with {:?} -> {}", channel, raw, value);

        let (color, hsv, anchor) = if channel.is_rgb() {
            let mut rgb = *self.color.rgb().as_ref();
            rgb[channel.index()] = value as u8;
            let rgb = Rgb::from(rgb);
            (self.color.with_rgb(rgb), derive_hsv(rgb, &self.hsv), Anchor::Rgb)
        } else if channel.is_hsv() {
            let hsv = match channel {
                Channel::Hue => self.hsv.with_hue(value),
                Channel::Saturation => self.hsv.with_saturation(value as u8),
                _ => self.hsv.with_value(value as u8),
            };
            (self.color.with_rgb(hsv_to_rgb(hsv)), hsv, Anchor::Hsv)
        } else {
            (self.color.with_opacity(value as u8), self.hsv, self.anchor)
        };

        let cursors = self.follow_cursors(&hsv, &color);
        let mut changes = self.apply(color, hsv, cursors, anchor);
        if self.text(channel) != raw {
            changes |= Changes::channel(channel);
        }
        changes
    }

    /// Edit the hexadecimal text.
    ///
    /// Six digits in alpha mode yield full opacity, whereas eight digits
    /// without alpha mode are truncated to six. Malformed text does not change
    /// the color but reverts the text to the canonical hexadecimal string.
    pub fn edit_hex(&mut self, raw: &str) -> Changes {
        if !self.accepts_edits("edit", "hex") || raw == self.hex {
            return Changes::empty();
        }

        let parsed = match hex_to_rgb(raw) {
            Ok(parsed) => parsed,
            Err(error) => {
                log::debug!("revert hex {:?}: {}", raw, error);
                return Changes::HEX;
            }
        };
        log::debug!("edit hex with {:?}", raw);

        let color = parsed.in_alpha_mode(self.is_alpha_mode());
        let hsv = derive_hsv(color.rgb(), &self.hsv);
        let cursors = self.follow_cursors(&hsv, &color);
        let mut changes = self.apply(color, hsv, cursors, Anchor::Rgb);
        if self.hex != raw {
            changes |= Changes::HEX;
        }
        changes
    }

    /// Drag the hue bar's cursor to the column.
    pub fn drag_hue_bar(&mut self, x: Float) -> Changes {
        if !self.accepts_edits("drag", "hue bar") {
            return Changes::empty();
        }

        let width = self.rasterizer.size(Gradient::HueBar).width;
        let x = clamp_offset(x, width);
        if x == self.cursors.hue {
            return Changes::empty();
        }

        let hsv = self.hsv.with_hue(position_to_value(x, width, 360));
        log::debug!("drag hue bar to {} -> {}", x, hsv.hue());

        let color = self.color.with_rgb(hsv_to_rgb(hsv));
        let cursors = Cursors {
            hue: x,
            ..self.cursors
        };
        self.apply(color, hsv, cursors, Anchor::Hsv)
    }

    /// Drag the square's cursor to the column and row.
    pub fn drag_square(&mut self, x: Float, y: Float) -> Changes {
        if !self.accepts_edits("drag", "square") {
            return Changes::empty();
        }

        let Size { width, height } = self.rasterizer.size(Gradient::Square);
        let x = clamp_offset(x, width);
        let y = clamp_offset(y, height);
        if x == self.cursors.value && y == self.cursors.saturation {
            return Changes::empty();
        }

        let hsv = self
            .hsv
            .with_saturation(position_to_value(flip(y, height), height, 100) as u8)
            .with_value(position_to_value(x, width, 100) as u8);
        log::debug!("drag square to ({}, {}) -> {}", x, y, hsv);

        let color = self.color.with_rgb(hsv_to_rgb(hsv));
        let cursors = Cursors {
            value: x,
            saturation: y,
            ..self.cursors
        };
        self.apply(color, hsv, cursors, Anchor::Hsv)
    }

    /// Drag the alpha bar's cursor to the column. Without alpha channel, this
    /// method does nothing.
    pub fn drag_alpha_bar(&mut self, x: Float) -> Changes {
        if !self.accepts_edits("drag", "alpha bar") || !self.is_alpha_mode() {
            return Changes::empty();
        }

        let width = self.rasterizer.size(Gradient::AlphaBar).width;
        let x = clamp_offset(x, width);
        if x == self.cursors.alpha {
            return Changes::empty();
        }

        let alpha = position_to_value(x, width, 255) as u8;
        log::debug!("drag alpha bar to {} -> {}", x, alpha);

        let color = self.color.with_opacity(alpha);
        let cursors = Cursors {
            alpha: x,
            ..self.cursors
        };
        self.apply(color, self.hsv, cursors, self.anchor)
    }

    /// Pick a color programmatically, e.g., from a palette swatch.
    ///
    /// Inputs without alpha keep the current alpha. Malformed hexadecimal
    /// strings and unknown names are errors.
    pub fn pick<I>(&mut self, input: I) -> Result<Changes, ColorError>
    where
        I: Into<ColorInput>,
    {
        if !self.accepts_edits("pick", "color") {
            return Ok(Changes::empty());
        }

        let input = input.into();
        let color = input.resolve(self.is_alpha_mode(), self.names.as_ref())?;
        let color = if input.has_alpha() {
            color
        } else {
            color.with_opacity(self.color.opacity())
        };
        log::debug!("pick {:?} -> {}", input, color);

        let hsv = derive_hsv(color.rgb(), &self.hsv);
        let cursors = self.follow_cursors(&hsv, &color);
        Ok(self.apply(color, hsv, cursors, Anchor::Rgb))
    }

    /// Restore the color the picker was opened with.
    pub fn reset(&mut self) -> Changes {
        if !self.accepts_edits("reset", "color") {
            return Changes::empty();
        }

        log::debug!("reset to {}", self.original);
        let color = self.original;
        let hsv = derive_hsv(color.rgb(), &self.hsv);
        let cursors = self.follow_cursors(&hsv, &color);
        self.apply(color, hsv, cursors, Anchor::Rgb)
    }

    /// Resize the gradient's widget.
    ///
    /// This method re-renders the gradient and re-places all cursors. It
    /// accepts new sizes even after the session ended, since hosts may keep
    /// displaying the picker.
    pub fn resize(&mut self, gradient: Gradient, size: Size) -> Changes {
        if !self.rasterizer.resize(gradient, size) {
            return Changes::empty();
        }

        let mut changes = match gradient {
            Gradient::HueBar => Changes::HUE_BAR,
            Gradient::Square => Changes::SQUARE,
            Gradient::AlphaBar => Changes::ALPHA_BAR,
        };

        let cursors = self.place_cursors(&self.hsv, &self.color);
        if cursors != self.cursors {
            self.cursors = cursors;
            changes |= Changes::CURSORS;
        }
        changes
    }

    /// Confirm the current color and end the session.
    pub fn commit(&mut self) -> Option<&Selection> {
        if self.is_active() {
            let selection = Selection {
                color: self.color,
                hsv: self.hsv,
                hex: self.hex.clone(),
            };
            log::debug!("commit {} ({})", selection.hex, selection.hsv);
            self.outcome = Outcome::Confirmed(selection);
        } else {
            log::warn!("picker session has already ended");
        }
        self.selection()
    }

    /// End the session without result.
    pub fn cancel(&mut self) {
        if self.is_active() {
            log::debug!("cancel picker");
            self.outcome = Outcome::Cancelled;
        } else {
            log::warn!("picker session has already ended");
        }
    }

    // ----------------------------------------------------------------------------------------------------------------

    fn accepts_edits(&self, verb: &str, what: &str) -> bool {
        if !self.is_active() {
            log::warn!("ignore {} of {} after picker session has ended", verb, what);
            return false;
        }
        true
    }

    /// Compute the cursor positions for the coordinates.
    fn place_cursors(&self, hsv: &Hsv, color: &Color) -> Cursors {
        let hue_bar = self.rasterizer.size(Gradient::HueBar);
        let square = self.rasterizer.size(Gradient::Square);
        let alpha_bar = self.rasterizer.size(Gradient::AlphaBar);

        Cursors {
            hue: value_to_position(hsv.hue(), hue_bar.width, 360),
            value: value_to_position(hsv.value() as u16, square.width, 100),
            saturation: flip(
                value_to_position(hsv.saturation() as u16, square.height, 100),
                square.height,
            ),
            alpha: if self.is_alpha_mode() {
                value_to_position(color.opacity() as u16, alpha_bar.width, 255)
            } else {
                0.0
            },
        }
    }

    /// Compute the cursor positions for the coordinates, leaving cursors in
    /// place whose offsets still map to their values.
    fn follow_cursors(&self, hsv: &Hsv, color: &Color) -> Cursors {
        let placed = self.place_cursors(hsv, color);
        let current = &self.cursors;
        let hue_bar = self.rasterizer.size(Gradient::HueBar);
        let square = self.rasterizer.size(Gradient::Square);
        let alpha_bar = self.rasterizer.size(Gradient::AlphaBar);

        let pick = |keep: bool, current: Float, placed: Float| if keep { current } else { placed };
        Cursors {
            hue: pick(
                agrees(current.hue, hue_bar.width, 360, hsv.hue()),
                current.hue,
                placed.hue,
            ),
            value: pick(
                agrees(current.value, square.width, 100, hsv.value() as u16),
                current.value,
                placed.value,
            ),
            saturation: pick(
                agrees(
                    flip(current.saturation, square.height),
                    square.height,
                    100,
                    hsv.saturation() as u16,
                ),
                current.saturation,
                placed.saturation,
            ),
            alpha: pick(
                agrees(current.alpha, alpha_bar.width, 255, color.opacity() as u16),
                current.alpha,
                placed.alpha,
            ),
        }
    }

    /// Write the fully computed new state back to every representation.
    fn apply(&mut self, color: Color, hsv: Hsv, cursors: Cursors, anchor: Anchor) -> Changes {
        let mut changes = Changes::empty();
        let [r, g, b] = *color.rgb().as_ref();
        let values = [
            r as u16,
            g as u16,
            b as u16,
            hsv.hue(),
            hsv.saturation() as u16,
            hsv.value() as u16,
            color.opacity() as u16,
        ];

        for (channel, value) in Channel::ALL.into_iter().zip(values) {
            if self.fields[channel.index()].set(value) {
                changes |= Changes::channel(channel);
            }
        }

        let hex = color.to_hex();
        if hex != self.hex {
            self.hex = hex;
            changes |= Changes::HEX;
        }

        if cursors != self.cursors {
            self.cursors = cursors;
            changes |= Changes::CURSORS;
        }

        if self.rasterizer.set_hue(hsv.hue()) {
            changes |= Changes::SQUARE;
        }
        if self.rasterizer.set_rgb(color.rgb()) {
            changes |= Changes::ALPHA_BAR;
        }
        if color != self.color {
            self.preview.render(&color);
            changes |= Changes::PREVIEW;
        }

        self.color = color;
        self.hsv = hsv;
        self.anchor = anchor;

        debug_assert!(self.is_synchronized(), "picker out of sync: {:?}", self);
        changes
    }

    /// Determine whether all representations agree with the canonical color.
    pub fn is_synchronized(&self) -> bool {
        let rgb = self.color.rgb();
        let hsv = &self.hsv;

        let anchored = match self.anchor {
            Anchor::Hsv => hsv_to_rgb(*hsv) == rgb,
            Anchor::Rgb if rgb.is_black() => hsv.value() == 0,
            Anchor::Rgb if rgb.is_gray() => {
                hsv.saturation() == 0 && hsv.value() == rgb_to_hsv(rgb).value()
            }
            Anchor::Rgb => *hsv == rgb_to_hsv(rgb),
        };

        let [r, g, b] = *rgb.as_ref();
        let values = [
            r as u16,
            g as u16,
            b as u16,
            hsv.hue(),
            hsv.saturation() as u16,
            hsv.value() as u16,
            self.color.opacity() as u16,
        ];
        let fields = Channel::ALL.into_iter().zip(values).all(|(channel, value)| {
            let field = self.field(channel);
            field.value() == value && field.text() == value.to_string()
        });

        let alpha_mode = self.is_alpha_mode();
        let hex = self.hex == self.color.to_hex()
            && self.hex.len() == if alpha_mode { 9 } else { 7 }
            && self.color.has_alpha() == alpha_mode;

        let c = &self.cursors;
        let hue_bar = self.rasterizer.size(Gradient::HueBar);
        let square = self.rasterizer.size(Gradient::Square);
        let alpha_bar = self.rasterizer.size(Gradient::AlphaBar);
        let cursors = agrees(c.hue, hue_bar.width, 360, hsv.hue())
            && agrees(c.value, square.width, 100, hsv.value() as u16)
            && agrees(
                flip(c.saturation, square.height),
                square.height,
                100,
                hsv.saturation() as u16,
            )
            && (!alpha_mode
                || agrees(c.alpha, alpha_bar.width, 255, self.color.opacity() as u16));

        let buffers = self.rasterizer.square_hue() == hsv.hue();

        anchored && fields && hex && cursors && buffers
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::{Changes, Channel, Picker, Selection};
    use crate::error::ColorError;
    use crate::opt::Options;
    use crate::raster::{Gradient, Size};
    use crate::{Color, Hsv, Rgb};

    #[test]
    fn test_clamped_hue() -> Result<(), ColorError> {
        let mut picker = Picker::new(Rgb::new(255, 0, 0), Options::default())?;

        let changes = picker.edit_channel(Channel::Hue, "390");
        assert_eq!(picker.value(Channel::Hue), 360);
        assert_eq!(picker.text(Channel::Hue), "360");
        assert!(changes.contains(Changes::HUE));
        assert_eq!(picker.rgb(), Rgb::new(255, 0, 0));
        assert!(picker.is_synchronized());

        for channel in [Channel::Hue, Channel::Saturation, Channel::Value] {
            picker.edit_channel(channel, "50");
            assert_eq!(picker.value(channel), 50);
            assert_eq!(picker.text(channel), "50");
        }
        assert_eq!(picker.hsv(), Hsv::new(50, 50, 50));
        assert_eq!(picker.rgb(), Rgb::new(128, 117, 64));

        picker.edit_channel(Channel::Red, "abc");
        assert_eq!(picker.value(Channel::Red), 0);
        assert_eq!(picker.text(Channel::Red), "0");
        assert!(picker.is_synchronized());
        Ok(())
    }

    #[test]
    fn test_huge_hue() -> Result<(), ColorError> {
        let mut picker = Picker::new(Rgb::new(0, 255, 0), Options::default())?;

        let changes = picker.edit_channel(Channel::Hue, "99999999999999999999");
        assert_eq!(picker.value(Channel::Hue), 360);
        assert_eq!(picker.text(Channel::Hue), "360");
        assert!(changes.contains(Changes::HUE | Changes::SQUARE));
        assert_eq!(picker.rgb(), Rgb::new(255, 0, 0));

        picker.edit_channel(Channel::Hue, "-99999999999999999999");
        assert_eq!(picker.text(Channel::Hue), "0");
        assert!(picker.is_synchronized());
        Ok(())
    }

    #[test]
    fn test_repeated_edit() -> Result<(), ColorError> {
        let mut picker = Picker::new("#336699", Options::default())?;

        let changes = picker.edit_channel(Channel::Green, "200");
        assert!(changes.contains(Changes::GREEN | Changes::HEX | Changes::PREVIEW));
        assert!(!changes.contains(Changes::ALPHA));
        assert_eq!(picker.edit_channel(Channel::Green, "200"), Changes::empty());

        picker.drag_square(50.0, 20.0);
        assert_eq!(picker.drag_square(50.0, 20.0), Changes::empty());
        picker.drag_hue_bar(120.0);
        assert_eq!(picker.drag_hue_bar(120.0), Changes::empty());

        let hex = picker.hex().to_owned();
        assert_eq!(picker.edit_hex(&hex), Changes::empty());
        Ok(())
    }

    #[test]
    fn test_hsv_edits_recombine() -> Result<(), ColorError> {
        let mut picker = Picker::new(Rgb::new(64, 128, 64), Options::default())?;
        assert_eq!(picker.hsv(), Hsv::new(120, 50, 50));

        let changes = picker.edit_channel(Channel::Saturation, "100");
        assert_eq!(picker.hsv(), Hsv::new(120, 100, 50));
        assert_eq!(picker.rgb(), Rgb::new(0, 128, 0));
        assert!(changes.contains(Changes::RED | Changes::BLUE | Changes::CURSORS));
        assert!(!changes.contains(Changes::SQUARE));

        let changes = picker.edit_channel(Channel::Hue, "0");
        assert_eq!(picker.rgb(), Rgb::new(128, 0, 0));
        assert!(changes.contains(Changes::SQUARE));
        Ok(())
    }

    #[test]
    fn test_achromatic_carry_over() -> Result<(), ColorError> {
        let mut picker = Picker::new(Rgb::new(64, 128, 64), Options::default())?;

        picker.edit_hex("#808080");
        assert_eq!(picker.hsv(), Hsv::new(120, 0, 50));
        picker.edit_hex("#000000");
        assert_eq!(picker.hsv(), Hsv::new(120, 0, 0));
        picker.edit_channel(Channel::Value, "100");
        assert_eq!(picker.rgb(), Rgb::new(255, 255, 255));
        picker.edit_channel(Channel::Saturation, "100");
        assert_eq!(picker.rgb(), Rgb::new(0, 255, 0));
        Ok(())
    }

    #[test]
    fn test_dark_chromatic_color() -> Result<(), ColorError> {
        let mut picker = Picker::new(Rgb::new(128, 128, 128), Options::default())?;

        // The value rounds to zero, but the color still has hue and saturation.
        picker.edit_hex("#010000");
        assert_eq!(picker.hsv(), Hsv::new(0, 100, 0));
        assert!(picker.is_synchronized());

        picker.edit_channel(Channel::Value, "50");
        assert_eq!(picker.rgb(), Rgb::new(128, 0, 0));
        assert_eq!(picker.hsv(), Hsv::new(0, 100, 50));

        // A pale color whose saturation rounds to zero keeps its hue, too.
        picker.edit_hex("#FFFEFE");
        assert_eq!(picker.hsv(), Hsv::new(0, 0, 100));
        picker.edit_hex("#FEFFFE");
        assert_eq!(picker.hsv(), Hsv::new(120, 0, 100));
        assert!(picker.is_synchronized());
        Ok(())
    }

    #[test]
    fn test_hex_edits() -> Result<(), ColorError> {
        let mut picker = Picker::new("red", Options::default())?;

        let changes = picker.edit_hex("#00ff00");
        assert_eq!(picker.rgb(), Rgb::new(0, 255, 0));
        assert_eq!(picker.hex(), "#00FF00");
        assert!(changes.contains(Changes::HEX | Changes::SQUARE | Changes::GREEN));

        // Without alpha channel, eight digits are truncated.
        picker.edit_hex("#0000FF80");
        assert_eq!(picker.color(), Color::opaque(0, 0, 255));
        assert_eq!(picker.hex(), "#0000FF");

        // Malformed text reverts.
        assert_eq!(picker.edit_hex("#0000F"), Changes::HEX);
        assert_eq!(picker.hex(), "#0000FF");
        assert_eq!(picker.color(), Color::opaque(0, 0, 255));
        Ok(())
    }

    #[test]
    fn test_drags() -> Result<(), ColorError> {
        let options = Options::builder()
            .alpha(true)
            .hue_bar(Size::new(361, 4))
            .square(Size::new(101, 101))
            .alpha_bar(Size::new(256, 4))
            .build();
        let mut picker = Picker::new(Rgb::new(255, 0, 0), options)?;
        assert_eq!(picker.alpha(), Some(255));
        assert_eq!(picker.cursors().saturation, 0.0);
        assert_eq!(picker.cursors().value, 100.0);

        let changes = picker.drag_hue_bar(240.0);
        assert_eq!(picker.rgb(), Rgb::new(0, 0, 255));
        assert!(changes.contains(Changes::SQUARE | Changes::ALPHA_BAR | Changes::CURSORS));

        picker.drag_square(100.0, 100.0);
        assert_eq!(picker.hsv(), Hsv::new(240, 0, 100));
        assert_eq!(picker.rgb(), Rgb::new(255, 255, 255));

        picker.drag_square(50.0, -30.0);
        assert_eq!(picker.hsv(), Hsv::new(240, 100, 50));
        assert_eq!(picker.cursors().saturation, 0.0);

        let changes = picker.drag_alpha_bar(100.0);
        assert_eq!(picker.alpha(), Some(100));
        assert_eq!(picker.hex(), "#00008064");
        assert!(changes.contains(Changes::ALPHA | Changes::HEX | Changes::PREVIEW));
        assert!(!changes.contains(Changes::ALPHA_BAR));
        assert!(picker.is_synchronized());
        Ok(())
    }

    #[test]
    fn test_alpha_disabled() -> Result<(), ColorError> {
        let mut picker = Picker::new([255_u8, 0, 0, 100], Options::default())?;
        assert_eq!(picker.alpha(), None);
        assert!(picker.alpha_bar().is_none());
        assert_eq!(picker.drag_alpha_bar(20.0), Changes::empty());
        assert_eq!(picker.edit_channel(Channel::Alpha, "20"), Changes::empty());
        assert!(picker.cursor_lines(Gradient::AlphaBar).is_empty());
        Ok(())
    }

    #[test]
    fn test_pick_and_reset() -> Result<(), ColorError> {
        let mut picker = Picker::new([255_u8, 0, 0, 100], Options::with_alpha())?;

        picker.pick("sky blue")?;
        assert_eq!(picker.color(), Color::translucent(135, 206, 235, 100));
        picker.pick([1_u8, 2, 3, 4])?;
        assert_eq!(picker.alpha(), Some(4));
        assert_eq!(
            picker.pick("no such color"),
            Err(ColorError::UnknownName("no such color".to_owned()))
        );
        assert_eq!(picker.color(), Color::translucent(1, 2, 3, 4));

        let changes = picker.reset();
        assert_eq!(picker.color(), Color::translucent(255, 0, 0, 100));
        assert!(changes.contains(Changes::PREVIEW | Changes::HEX));
        Ok(())
    }

    #[test]
    fn test_custom_names() -> Result<(), ColorError> {
        let names = |name: &str| (name == "brand").then_some(Rgb::new(0x12, 0x34, 0x56));
        let picker = Picker::with_names("brand", Options::default(), names)?;
        assert_eq!(picker.hex(), "#123456");
        assert!(Picker::with_names("red", Options::default(), names).is_err());
        Ok(())
    }

    #[test]
    fn test_resize() -> Result<(), ColorError> {
        let mut picker = Picker::new(Rgb::new(0, 255, 0), Options::default())?;
        assert!((picker.cursors().hue - 199.0 / 3.0).abs() < 1e-9);

        let changes = picker.resize(Gradient::HueBar, Size::new(361, 11));
        assert_eq!(changes, Changes::HUE_BAR | Changes::CURSORS);
        assert!((picker.cursors().hue - 120.0).abs() < 1e-9);
        assert_eq!(picker.hue_bar().width(), 361);

        assert_eq!(picker.resize(Gradient::HueBar, Size::new(361, 11)), Changes::empty());
        assert_eq!(picker.resize(Gradient::AlphaBar, Size::new(9, 9)), Changes::empty());

        let changes = picker.resize(Gradient::Square, Size::new(0, 0));
        assert!(changes.contains(Changes::SQUARE));
        assert!(picker.square().is_empty());
        assert!(picker.is_synchronized());
        Ok(())
    }

    #[test]
    fn test_render() -> Result<(), ColorError> {
        let options = Options::builder().square(Size::new(5, 5)).build();
        let picker = Picker::new(Rgb::new(0, 255, 0), options)?;
        let image = picker.render(Gradient::Square).expect("square exists");

        // The cursor sits at the top-right corner.
        assert_eq!(image.pixel(4, 4), Some([194, 194, 194, 255]));
        assert_eq!(image.pixel(0, 0), Some([194, 194, 194, 255]));
        assert_eq!(image.pixel(0, 4), Some([0, 0, 0, 255]));
        Ok(())
    }

    #[test]
    fn test_commit() -> Result<(), ColorError> {
        let mut picker = Picker::new(Rgb::new(255, 0, 0), Options::default())?;
        let selection = picker.commit().cloned().expect("picker is active");
        assert_eq!(selection.components(), vec![255, 0, 0]);
        assert_eq!(selection.hsv(), Hsv::new(0, 100, 100));
        assert_eq!(selection.hex(), "#FF0000");

        // Further edits are ignored.
        assert_eq!(picker.edit_channel(Channel::Red, "0"), Changes::empty());
        assert_eq!(picker.into_selection().as_ref().map(Selection::rgb), Some(Rgb::new(255, 0, 0)));

        let mut picker = Picker::new([255_u8, 0, 0, 100], Options::with_alpha())?;
        let selection = picker.commit().expect("picker is active");
        assert_eq!(selection.components(), vec![255, 0, 0, 100]);
        assert_eq!(selection.hsv(), Hsv::new(0, 100, 100));
        assert_eq!(selection.hex(), "#FF000064");
        Ok(())
    }

    #[test]
    fn test_cancel() -> Result<(), ColorError> {
        let mut picker = Picker::new("#FF0000", Options::default())?;
        picker.edit_channel(Channel::Blue, "255");
        picker.cancel();
        assert!(!picker.is_active());
        assert_eq!(picker.drag_hue_bar(10.0), Changes::empty());
        assert_eq!(picker.pick("blue")?, Changes::empty());
        assert!(picker.commit().is_none());
        assert!(picker.into_selection().is_none());
        Ok(())
    }

    #[test]
    fn test_send() {
        fn is_send<T: Send>() {}
        is_send::<Picker>();
        is_send::<Selection>();
        is_send::<Changes>();
    }

    #[test]
    fn test_random_edits() -> Result<(), ColorError> {
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for alpha in [false, true] {
            let options = Options::builder()
                .alpha(alpha)
                .hue_bar(Size::new(150, 8))
                .square(Size::new(97, 64))
                .alpha_bar(Size::new(120, 8))
                .build();
            let mut picker = Picker::new("wheat", options)?;

            for _ in 0..2_000 {
                match rng.random_range(0..8) {
                    0 | 1 => {
                        let channel = Channel::ALL[rng.random_range(0..7)];
                        let raw = if rng.random_bool(0.1) {
                            "oops".to_owned()
                        } else {
                            rng.random_range(-20..400).to_string()
                        };
                        picker.edit_channel(channel, &raw);
                    }
                    2 => {
                        let [r, g, b, a]: [u8; 4] = rng.random();
                        let raw = if rng.random_bool(0.5) {
                            format!("#{:02x}{:02x}{:02x}", r, g, b)
                        } else {
                            format!("#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
                        };
                        picker.edit_hex(&raw);
                    }
                    3 => {
                        picker.drag_hue_bar(rng.random_range(-20.0..170.0));
                    }
                    4 => {
                        let x = rng.random_range(-20.0..120.0);
                        let y = rng.random_range(-20.0..90.0);
                        picker.drag_square(x, y);
                    }
                    5 => {
                        picker.drag_alpha_bar(rng.random_range(-20.0..140.0));
                    }
                    6 => {
                        let rgb = Rgb::new(rng.random(), rng.random(), rng.random());
                        picker.pick(rgb)?;
                    }
                    _ => {
                        if rng.random_bool(0.1) {
                            picker.reset();
                        } else {
                            let size = Size::new(rng.random_range(0..300), rng.random_range(0..50));
                            picker.resize(Gradient::Square, size);
                        }
                    }
                }

                assert!(picker.is_synchronized(), "{:?}", picker);
            }
        }
        Ok(())
    }
}
