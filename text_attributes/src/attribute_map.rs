// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The lowered key/value form of [`StringAttributes`](crate::StringAttributes).

use std::collections::BTreeMap;

use crate::attributes::{Shadow, UnderlineStyle};
use crate::color::Color;
use crate::font::ResolvedFont;
use crate::paragraph::NativeParagraphStyle;

/// Keys of an [`AttributeMap`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AttributeKey {
    /// [`AttributeValue::Font`].
    Font,
    /// [`AttributeValue::Color`] of the glyphs.
    ForegroundColor,
    /// [`AttributeValue::Color`] painted behind the glyphs.
    BackgroundColor,
    /// [`AttributeValue::Integer`]: `1` enables standard ligatures, `0` disables them.
    Ligature,
    /// [`AttributeValue::Number`]: glyphs raised by this many points.
    BaselineOffset,
    /// [`AttributeValue::Number`]: extra advance after each character.
    Kern,
    /// [`AttributeValue::Number`]: skew factor applied to glyphs.
    Obliqueness,
    /// [`AttributeValue::Number`]: natural log of the horizontal expansion factor.
    Expansion,
    /// [`AttributeValue::Paragraph`].
    ParagraphStyle,
    /// [`AttributeValue::Shadow`].
    Shadow,
    /// [`AttributeValue::Number`]: outline width in percent of the font size. Positive values
    /// stroke without filling, negative values stroke and fill.
    StrokeWidth,
    /// [`AttributeValue::Color`] of the outline.
    StrokeColor,
    /// [`AttributeValue::Color`] of the strikethrough line.
    StrikethroughColor,
    /// [`AttributeValue::Underline`] style of the strikethrough line.
    StrikethroughStyle,
    /// [`AttributeValue::Color`] of the underline.
    UnderlineColor,
    /// [`AttributeValue::Underline`] style of the underline.
    UnderlineStyle,
    /// [`AttributeValue::Language`]: BCP 47 hint for glyph selection.
    Language,
}

/// Values of an [`AttributeMap`].
#[derive(Clone, Debug, PartialEq)]
pub enum AttributeValue {
    /// A resolved font.
    Font(ResolvedFont),
    /// A color.
    Color(Color),
    /// An integer flag or count.
    Integer(i32),
    /// A scalar in points or as a factor, depending on the key.
    Number(f32),
    /// Paragraph formatting.
    Paragraph(NativeParagraphStyle),
    /// A drop shadow.
    Shadow(Shadow),
    /// Line decoration style.
    Underline(UnderlineStyle),
    /// Language tag.
    Language(String),
}

/// Immutable mapping from [`AttributeKey`] to [`AttributeValue`].
///
/// Built by [`StringAttributes::attribute_map`](crate::StringAttributes::attribute_map).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AttributeMap {
    entries: BTreeMap<AttributeKey, AttributeValue>,
}

impl AttributeMap {
    pub(crate) fn insert(&mut self, key: AttributeKey, value: AttributeValue) {
        self.entries.insert(key, value);
    }

    /// Returns the value stored for `key`.
    pub fn get(&self, key: AttributeKey) -> Option<&AttributeValue> {
        self.entries.get(&key)
    }

    /// Returns `true` if `key` is present.
    pub fn contains(&self, key: AttributeKey) -> bool {
        self.entries.contains_key(&key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = AttributeKey> + '_ {
        self.entries.keys().copied()
    }

    /// Entries in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (AttributeKey, &AttributeValue)> + '_ {
        self.entries.iter().map(|(key, value)| (*key, value))
    }

    /// The font, if present.
    pub fn font(&self) -> Option<&ResolvedFont> {
        match self.get(AttributeKey::Font)? {
            AttributeValue::Font(font) => Some(font),
            _ => None,
        }
    }

    /// The color stored for `key`, if it holds one.
    pub fn color(&self, key: AttributeKey) -> Option<Color> {
        match self.get(key)? {
            AttributeValue::Color(color) => Some(*color),
            _ => None,
        }
    }

    /// The number stored for `key`, if it holds one.
    pub fn number(&self, key: AttributeKey) -> Option<f32> {
        match self.get(key)? {
            AttributeValue::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// The integer stored for `key`, if it holds one.
    pub fn integer(&self, key: AttributeKey) -> Option<i32> {
        match self.get(key)? {
            AttributeValue::Integer(value) => Some(*value),
            _ => None,
        }
    }

    /// The paragraph style, if present.
    pub fn paragraph_style(&self) -> Option<&NativeParagraphStyle> {
        match self.get(AttributeKey::ParagraphStyle)? {
            AttributeValue::Paragraph(style) => Some(style),
            _ => None,
        }
    }

    /// The shadow, if present.
    pub fn shadow(&self) -> Option<&Shadow> {
        match self.get(AttributeKey::Shadow)? {
            AttributeValue::Shadow(shadow) => Some(shadow),
            _ => None,
        }
    }

    /// The decoration style stored for `key`, if it holds one.
    pub fn underline_style(&self, key: AttributeKey) -> Option<UnderlineStyle> {
        match self.get(key)? {
            AttributeValue::Underline(style) => Some(*style),
            _ => None,
        }
    }

    /// The language hint, if present.
    pub fn language(&self) -> Option<&str> {
        match self.get(AttributeKey::Language)? {
            AttributeValue::Language(tag) => Some(tag),
            _ => None,
        }
    }
}
