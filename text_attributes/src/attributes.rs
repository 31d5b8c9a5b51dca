// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Character level formatting.

use crate::attribute_map::{AttributeKey, AttributeMap, AttributeValue};
use crate::color::{Color, CLEAR, DARK_TEXT};
use crate::font::FontCatalog;
use crate::geometry::Size;
use crate::paragraph::ParagraphStyle;

/// Family used when none is chosen: a Japanese capable sans serif.
pub const DEFAULT_FONT_FAMILY: &str = "Noto Sans CJK JP";

/// Point size used when none is chosen.
pub const DEFAULT_FONT_SIZE: f32 = 15.0;

/// Language tag attached when [`StringAttributes::japanese_font_fallback`] is set.
pub const JAPANESE_LANGUAGE: &str = "ja";

bitflags::bitflags! {
    /// Style of an underline or strikethrough line. Empty means no line.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct UnderlineStyle: u32 {
        /// A single thin line.
        const SINGLE = 0x01;
        /// A single thick line.
        const THICK = 0x02;
        /// Two thin lines.
        const DOUBLE = 0x09;
        /// Dotted.
        const PATTERN_DOT = 0x0100;
        /// Dashed.
        const PATTERN_DASH = 0x0200;
        /// Alternating dashes and dots.
        const PATTERN_DASH_DOT = 0x0300;
        /// Alternating dashes and pairs of dots.
        const PATTERN_DASH_DOT_DOT = 0x0400;
        /// Only under words, not under whitespace.
        const BY_WORD = 0x8000;
    }
}

/// A drop shadow.
#[derive(Clone, Debug, PartialEq)]
pub struct Shadow {
    /// Shadow color.
    pub color: Color,
    /// Offset of the shadow from the glyphs; positive height moves it down.
    pub offset: Size,
    /// Blur radius in points.
    pub blur_radius: f32,
}

/// Editable character formatting for a whole string.
///
/// Build one per render request, adjust the public fields, then lower it with
/// [`attribute_map`](Self::attribute_map).
#[derive(Clone, Debug, PartialEq)]
pub struct StringAttributes {
    /// Requested family; unknown names fall back to the system font.
    pub font_family_name: String,
    /// Point size.
    pub font_size: f32,

    /// Glyph color.
    pub text_color: Color,
    /// Color painted behind the glyphs.
    pub background_color: Color,

    /// Shadow color; no shadow when `None`.
    pub shadow_color: Option<Color>,
    /// Shadow offset.
    pub shadow_offset: Size,
    /// Shadow blur radius.
    pub shadow_blur_radius: f32,

    /// Outline color; the text color when `None`.
    pub stroke_color: Option<Color>,
    /// Outline width in percent of the font size; `0.0` disables the outline.
    pub stroke_width: f32,

    /// Standard ligatures.
    pub ligature: bool,
    /// Glyphs raised by this many points.
    pub baseline_offset: f32,
    /// Extra advance after each character.
    pub kern: f32,
    /// Skew applied to glyphs; `0.0` is upright.
    pub obliqueness: f32,
    /// Natural log of the horizontal expansion; `0.0` is no expansion.
    pub expansion: f32,

    /// Strikethrough color; no strikethrough when `None`.
    pub strikethrough_color: Option<Color>,
    /// Strikethrough style.
    pub strikethrough_style: UnderlineStyle,

    /// Underline color; no underline when `None`.
    pub underline_color: Option<Color>,
    /// Underline style.
    pub underline_style: UnderlineStyle,

    /// Paragraph formatting, owned by value.
    pub paragraph_style: ParagraphStyle,

    /// Hint the font fallback to prefer Japanese glyph variants for Han characters.
    pub japanese_font_fallback: bool,
}

impl Default for StringAttributes {
    fn default() -> Self {
        Self {
            font_family_name: DEFAULT_FONT_FAMILY.to_owned(),
            font_size: DEFAULT_FONT_SIZE,
            text_color: DARK_TEXT,
            background_color: CLEAR,
            shadow_color: None,
            shadow_offset: Size::ZERO,
            shadow_blur_radius: 0.0,
            stroke_color: None,
            stroke_width: 0.0,
            ligature: true,
            baseline_offset: 0.0,
            kern: 0.0,
            obliqueness: 0.0,
            expansion: 0.0,
            strikethrough_color: None,
            strikethrough_style: UnderlineStyle::empty(),
            underline_color: None,
            underline_style: UnderlineStyle::empty(),
            paragraph_style: ParagraphStyle::default(),
            japanese_font_fallback: true,
        }
    }
}

impl StringAttributes {
    /// Creates attributes with every field at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lowers these attributes to an [`AttributeMap`].
    ///
    /// The font is resolved against `fonts`; an unavailable family silently becomes the system
    /// font at the same size. Optional styling without a color is omitted.
    ///
    /// Strikethrough and underline are only emitted while `stroke_width` is non-zero. This
    /// coupling looks accidental but is kept as is until its intent is known.
    pub fn attribute_map(&self, fonts: &mut dyn FontCatalog) -> AttributeMap {
        let mut map = AttributeMap::default();
        let font = fonts.resolve_font(&self.font_family_name, self.font_size);
        map.insert(AttributeKey::Font, AttributeValue::Font(font));
        map.insert(
            AttributeKey::ForegroundColor,
            AttributeValue::Color(self.text_color),
        );
        map.insert(
            AttributeKey::BackgroundColor,
            AttributeValue::Color(self.background_color),
        );
        map.insert(
            AttributeKey::Ligature,
            AttributeValue::Integer(i32::from(self.ligature)),
        );
        map.insert(
            AttributeKey::BaselineOffset,
            AttributeValue::Number(self.baseline_offset),
        );
        map.insert(AttributeKey::Kern, AttributeValue::Number(self.kern));
        map.insert(
            AttributeKey::Obliqueness,
            AttributeValue::Number(self.obliqueness),
        );
        map.insert(
            AttributeKey::Expansion,
            AttributeValue::Number(self.expansion),
        );
        map.insert(
            AttributeKey::ParagraphStyle,
            AttributeValue::Paragraph(self.paragraph_style.to_native()),
        );

        if let Some(color) = self.shadow_color {
            map.insert(
                AttributeKey::Shadow,
                AttributeValue::Shadow(Shadow {
                    color,
                    offset: self.shadow_offset,
                    blur_radius: self.shadow_blur_radius,
                }),
            );
        }

        if self.stroke_width != 0.0 {
            map.insert(
                AttributeKey::StrokeWidth,
                AttributeValue::Number(self.stroke_width),
            );
            if let Some(color) = self.stroke_color {
                map.insert(AttributeKey::StrokeColor, AttributeValue::Color(color));
            }
            if let Some(color) = self.strikethrough_color {
                map.insert(
                    AttributeKey::StrikethroughColor,
                    AttributeValue::Color(color),
                );
                map.insert(
                    AttributeKey::StrikethroughStyle,
                    AttributeValue::Underline(self.strikethrough_style),
                );
            }
            if let Some(color) = self.underline_color {
                map.insert(AttributeKey::UnderlineColor, AttributeValue::Color(color));
                map.insert(
                    AttributeKey::UnderlineStyle,
                    AttributeValue::Underline(self.underline_style),
                );
            }
        }

        if self.japanese_font_fallback {
            map.insert(
                AttributeKey::Language,
                AttributeValue::Language(JAPANESE_LANGUAGE.to_owned()),
            );
        }
        map
    }
}

#[cfg(test)]
mod tests;
