// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Colors and the brush type handed to Parley.

use core::fmt;

pub use peniko::Color;

/// Default foreground color: opaque black.
pub const DARK_TEXT: Color = Color::from_rgba8(0, 0, 0, 255);

/// Fully transparent.
pub const CLEAR: Color = Color::from_rgba8(0, 0, 0, 0);

/// Brush carried by every Parley style run.
///
/// Parley requires brushes to implement `Default`, which [`Color`] does not.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorBrush {
    /// The paint color.
    pub color: Color,
}

impl ColorBrush {
    /// Creates a brush painting with `color`.
    pub const fn new(color: Color) -> Self {
        Self { color }
    }
}

impl Default for ColorBrush {
    fn default() -> Self {
        Self { color: DARK_TEXT }
    }
}

impl From<Color> for ColorBrush {
    fn from(color: Color) -> Self {
        Self { color }
    }
}

/// Error returned by [`parse_hex`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseColorError {
    input: String,
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid color {:?}: expected #rrggbb or #rrggbbaa",
            self.input
        )
    }
}

impl core::error::Error for ParseColorError {}

/// Parses `#rrggbb` or `#rrggbbaa` (the leading `#` is optional).
pub fn parse_hex(input: &str) -> Result<Color, ParseColorError> {
    let err = || ParseColorError {
        input: input.to_owned(),
    };
    let digits = input.trim().trim_start_matches('#');
    if !digits.is_ascii() || !matches!(digits.len(), 6 | 8) {
        return Err(err());
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| err());
    let r = channel(0)?;
    let g = channel(2)?;
    let b = channel(4)?;
    let a = if digits.len() == 8 { channel(6)? } else { 255 };
    Ok(Color::from_rgba8(r, g, b, a))
}

/// Returns the color as unpremultiplied 8-bit channels.
pub(crate) fn to_rgba8(color: Color) -> [u8; 4] {
    let rgba = color.to_rgba8();
    [rgba.r, rgba.g, rgba.b, rgba.a]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_opaque_and_translucent_hex() {
        assert_eq!(parse_hex("#ff8000").unwrap(), Color::from_rgba8(255, 128, 0, 255));
        assert_eq!(parse_hex("00000080").unwrap(), Color::from_rgba8(0, 0, 0, 128));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert!(parse_hex("#fff").is_err(), "short form is not accepted");
        assert!(parse_hex("#gg0000").is_err(), "non hex digits");
        assert!(parse_hex("#ff00ééé").is_err(), "non ascii input");
    }

    #[test]
    fn default_brush_is_dark_text() {
        assert_eq!(ColorBrush::default().color, DARK_TEXT);
        assert_eq!(to_rgba8(CLEAR)[3], 0);
    }
}
