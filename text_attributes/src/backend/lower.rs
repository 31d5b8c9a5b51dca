// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lowering of an [`AttributeMap`] onto Parley style properties.

use std::borrow::Cow;

use parley::layout::Alignment;
use parley::style::{
    FontFamily, FontSettings, FontStack, GenericFamily, LineHeight, StyleProperty,
    WordBreakStrength,
};
use parley::{InlineBox, RangedBuilder};

use crate::attribute_map::{AttributeKey, AttributeMap};
use crate::attributes::{Shadow, UnderlineStyle, DEFAULT_FONT_SIZE};
use crate::color::{Color, ColorBrush, CLEAR, DARK_TEXT};
use crate::font::FontSource;
use crate::paragraph::{LineBreakMode, NativeParagraphStyle, TextAlignment, WritingDirection};

/// Natural line height of a font, as a factor of its size, when no metrics are at hand.
pub(crate) const NATURAL_LINE_HEIGHT: f32 = 1.2;

const LIGATURES_OFF: &str = "\"liga\" 0, \"clig\" 0";

/// A line decoration that survived lowering.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct Decoration {
    pub(crate) brush: ColorBrush,
    pub(crate) style: UnderlineStyle,
}

impl Decoration {
    fn from_map(map: &AttributeMap, color: AttributeKey, style: AttributeKey) -> Option<Self> {
        let color = map.color(color)?;
        let style = map.underline_style(style).unwrap_or_default();
        (!style.is_empty()).then_some(Self {
            brush: ColorBrush::new(color),
            style,
        })
    }

    /// Thickness factor over the font's nominal decoration size.
    pub(crate) fn size_factor(&self) -> f32 {
        if self.style.contains(UnderlineStyle::THICK) {
            2.0
        } else {
            1.0
        }
    }

    pub(crate) fn is_double(&self) -> bool {
        self.style.contains(UnderlineStyle::DOUBLE)
    }
}

/// Everything the layout and paint passes need, read once from an [`AttributeMap`].
#[derive(Clone, Debug)]
pub(crate) struct LoweredStyle {
    pub(crate) font: FontSource,
    pub(crate) font_size: f32,
    pub(crate) foreground: ColorBrush,
    pub(crate) background: Color,
    pub(crate) ligatures: bool,
    pub(crate) baseline_offset: f32,
    pub(crate) kern: f32,
    pub(crate) obliqueness: f32,
    pub(crate) expansion: f32,
    pub(crate) paragraph: NativeParagraphStyle,
    pub(crate) shadow: Option<Shadow>,
    pub(crate) stroke_width: f32,
    pub(crate) stroke_color: Option<Color>,
    pub(crate) strikethrough: Option<Decoration>,
    pub(crate) underline: Option<Decoration>,
    pub(crate) locale: Option<String>,
}

impl LoweredStyle {
    pub(crate) fn from_map(map: &AttributeMap) -> Self {
        let (font, font_size) = match map.font() {
            Some(font) => (font.source().clone(), font.size()),
            None => (FontSource::SystemDefault, DEFAULT_FONT_SIZE),
        };
        let number = |key| map.number(key).unwrap_or(0.0);
        Self {
            font,
            font_size,
            foreground: ColorBrush::new(
                map.color(AttributeKey::ForegroundColor).unwrap_or(DARK_TEXT),
            ),
            background: map.color(AttributeKey::BackgroundColor).unwrap_or(CLEAR),
            ligatures: map.integer(AttributeKey::Ligature).unwrap_or(1) != 0,
            baseline_offset: number(AttributeKey::BaselineOffset),
            kern: number(AttributeKey::Kern),
            obliqueness: number(AttributeKey::Obliqueness),
            expansion: number(AttributeKey::Expansion),
            paragraph: map.paragraph_style().cloned().unwrap_or_default(),
            shadow: map.shadow().cloned(),
            stroke_width: number(AttributeKey::StrokeWidth),
            stroke_color: map.color(AttributeKey::StrokeColor),
            strikethrough: Decoration::from_map(
                map,
                AttributeKey::StrikethroughColor,
                AttributeKey::StrikethroughStyle,
            ),
            underline: Decoration::from_map(
                map,
                AttributeKey::UnderlineColor,
                AttributeKey::UnderlineStyle,
            ),
            locale: map.language().map(str::to_owned),
        }
    }

    /// Horizontal scale applied to glyphs and advances.
    pub(crate) fn expansion_factor(&self) -> f32 {
        self.expansion.exp()
    }

    pub(crate) fn alignment(&self) -> Alignment {
        alignment(
            self.paragraph.alignment(),
            self.paragraph.base_writing_direction(),
        )
    }

    pub(crate) fn line_height(&self) -> LineHeight {
        line_height(&self.paragraph, self.font_size)
    }

    /// Width of the inline box that pushes the first line past the head indent, in layout units
    /// before expansion.
    pub(crate) fn first_line_box_width(&self) -> f32 {
        let indent =
            (self.paragraph.first_line_head_indent() - self.paragraph.head_indent()).max(0.0);
        indent / self.expansion_factor()
    }

    /// The paragraph wide default properties, in push order.
    pub(crate) fn default_properties(&self) -> Vec<StyleProperty<'_, ColorBrush>> {
        let stack = match &self.font {
            FontSource::Named(name) => {
                FontStack::Single(FontFamily::Named(Cow::Borrowed(name.as_str())))
            }
            FontSource::SystemDefault => FontStack::from(GenericFamily::SystemUi),
        };
        let mut properties = vec![
            StyleProperty::FontStack(stack),
            StyleProperty::FontSize(self.font_size),
            StyleProperty::Brush(self.foreground),
            StyleProperty::LetterSpacing(self.kern),
            StyleProperty::LineHeight(self.line_height()),
        ];
        if !self.ligatures {
            properties.push(StyleProperty::FontFeatures(FontSettings::from(LIGATURES_OFF)));
        }
        if self.paragraph.line_break_mode() == LineBreakMode::ByCharWrapping {
            properties.push(StyleProperty::WordBreak(WordBreakStrength::BreakAll));
        }
        if let Some(locale) = &self.locale {
            properties.push(StyleProperty::Locale(Some(locale.as_str())));
        }
        if let Some(decoration) = &self.underline {
            properties.push(StyleProperty::Underline(true));
            properties.push(StyleProperty::UnderlineBrush(Some(decoration.brush)));
        }
        if let Some(decoration) = &self.strikethrough {
            properties.push(StyleProperty::Strikethrough(true));
            properties.push(StyleProperty::StrikethroughBrush(Some(decoration.brush)));
        }
        properties
    }

    /// Pushes the paragraph wide defaults and the first-line indent onto `builder`.
    pub(crate) fn push_defaults(&self, builder: &mut RangedBuilder<'_, ColorBrush>) {
        for property in self.default_properties() {
            builder.push_default(property);
        }
        let width = self.first_line_box_width();
        if width > 0.0 {
            builder.push_inline_box(InlineBox {
                id: 0,
                index: 0,
                width,
                height: 0.0,
            });
        }
    }
}

/// Resolves alignment against an explicit base direction.
///
/// Leading, trailing and natural alignment follow the detected direction of the content unless
/// the paragraph pins a direction.
pub(crate) fn alignment(alignment: TextAlignment, direction: WritingDirection) -> Alignment {
    match (alignment, direction) {
        (TextAlignment::Center, _) => Alignment::Center,
        (TextAlignment::Justified, _) => Alignment::Justify,
        (TextAlignment::Leading | TextAlignment::Natural, WritingDirection::Natural) => {
            Alignment::Start
        }
        (TextAlignment::Trailing, WritingDirection::Natural) => Alignment::End,
        (
            TextAlignment::Leading | TextAlignment::Natural,
            WritingDirection::LeftToRight,
        )
        | (TextAlignment::Trailing, WritingDirection::RightToLeft) => Alignment::Left,
        (
            TextAlignment::Leading | TextAlignment::Natural,
            WritingDirection::RightToLeft,
        )
        | (TextAlignment::Trailing, WritingDirection::LeftToRight) => Alignment::Right,
    }
}

/// Resolves the line height of a paragraph set in `font_size`.
///
/// Without bounds or spacing the multiple applies to the font's own metrics. Otherwise the line
/// height becomes absolute: the estimated natural height is clamped to the bounds (zero meaning
/// unbounded) and the line spacing is added.
pub(crate) fn line_height(style: &NativeParagraphStyle, font_size: f32) -> LineHeight {
    let multiple = if style.line_height_multiple() > 0.0 {
        style.line_height_multiple()
    } else {
        1.0
    };
    let minimum = style.minimum_line_height();
    let maximum = style.maximum_line_height();
    let spacing = style.line_spacing();
    if minimum == 0.0 && maximum == 0.0 && spacing == 0.0 {
        return LineHeight::MetricsRelative(multiple);
    }
    let mut height = font_size * NATURAL_LINE_HEIGHT * multiple;
    if minimum > 0.0 {
        height = height.max(minimum);
    }
    if maximum > 0.0 {
        height = height.min(maximum);
    }
    LineHeight::Absolute((height + spacing).max(0.0))
}

/// Horizontal geometry of the lines of a paragraph.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct LineGeometry {
    /// Offset of every line from the leading margin, in layout units before expansion.
    pub(crate) head: f32,
    /// Width lines are broken at, before expansion; `None` is unconstrained.
    pub(crate) wrap_width: Option<f32>,
    /// Whether lines are broken at all.
    pub(crate) wraps: bool,
}

impl LineGeometry {
    pub(crate) fn new(style: &NativeParagraphStyle, max_width: Option<f32>, expansion: f32) -> Self {
        let head = style.head_indent();
        let tail = style.tail_indent();
        let available = if tail > 0.0 {
            Some(max_width.map_or(tail, |width| tail.min(width)))
        } else {
            max_width.map(|width| width + tail)
        };
        Self {
            head: head / expansion,
            wrap_width: available.map(|width| ((width - head) / expansion).max(0.0)),
            wraps: style.line_break_mode().wraps(),
        }
    }

    /// The width handed to Parley's line breaker.
    pub(crate) fn break_width(&self) -> Option<f32> {
        if self.wraps {
            self.wrap_width
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paragraph::ParagraphStyle;

    #[test]
    fn plain_line_height_is_metrics_relative() {
        let style = ParagraphStyle::default().to_native();
        assert_eq!(line_height(&style, 20.0), LineHeight::MetricsRelative(1.0));
        let style = ParagraphStyle {
            line_height_multiple: 1.5,
            ..ParagraphStyle::default()
        }
        .to_native();
        assert_eq!(line_height(&style, 20.0), LineHeight::MetricsRelative(1.5));
    }

    #[test]
    fn bounds_clamp_estimated_height() {
        let style = ParagraphStyle {
            minimum_line_height: 40.0,
            ..ParagraphStyle::default()
        }
        .to_native();
        assert_eq!(line_height(&style, 10.0), LineHeight::Absolute(40.0));

        let style = ParagraphStyle {
            maximum_line_height: 10.0,
            line_spacing: 4.0,
            ..ParagraphStyle::default()
        }
        .to_native();
        assert_eq!(line_height(&style, 20.0), LineHeight::Absolute(14.0));
    }

    #[test]
    fn negative_spacing_never_yields_negative_height() {
        let style = ParagraphStyle {
            line_spacing: -100.0,
            ..ParagraphStyle::default()
        }
        .to_native();
        assert_eq!(line_height(&style, 10.0), LineHeight::Absolute(0.0));
    }

    #[test]
    fn alignment_resolves_against_explicit_direction() {
        use TextAlignment::{Justified, Leading, Natural, Trailing};
        use WritingDirection::{LeftToRight, RightToLeft};

        let cases = [
            (Natural, WritingDirection::Natural, Alignment::Start),
            (Leading, WritingDirection::Natural, Alignment::Start),
            (Trailing, WritingDirection::Natural, Alignment::End),
            (Natural, LeftToRight, Alignment::Left),
            (Leading, LeftToRight, Alignment::Left),
            (Trailing, LeftToRight, Alignment::Right),
            (Natural, RightToLeft, Alignment::Right),
            (Leading, RightToLeft, Alignment::Right),
            (Trailing, RightToLeft, Alignment::Left),
            (Justified, RightToLeft, Alignment::Justify),
            (TextAlignment::Center, RightToLeft, Alignment::Center),
        ];
        for (text_alignment, direction, expected) in cases {
            assert_eq!(
                alignment(text_alignment, direction),
                expected,
                "{text_alignment:?} in {direction:?}"
            );
        }
    }

    #[test]
    fn indents_narrow_the_wrap_width() {
        let style = ParagraphStyle {
            head_indent: 10.0,
            tail_indent: -20.0,
            ..ParagraphStyle::default()
        }
        .to_native();
        let geometry = LineGeometry::new(&style, Some(200.0), 1.0);
        assert_eq!(geometry.head, 10.0);
        assert_eq!(geometry.wrap_width, Some(170.0));
        assert_eq!(geometry.break_width(), Some(170.0));
    }

    #[test]
    fn positive_tail_indent_is_a_line_length() {
        let style = ParagraphStyle {
            head_indent: 10.0,
            tail_indent: 120.0,
            ..ParagraphStyle::default()
        }
        .to_native();
        assert_eq!(LineGeometry::new(&style, None, 1.0).wrap_width, Some(110.0));
        assert_eq!(
            LineGeometry::new(&style, Some(80.0), 1.0).wrap_width,
            Some(70.0)
        );
    }

    #[test]
    fn clipping_modes_do_not_break() {
        let style = ParagraphStyle {
            line_break_mode: LineBreakMode::ByTruncatingTail,
            ..ParagraphStyle::default()
        }
        .to_native();
        let geometry = LineGeometry::new(&style, Some(100.0), 1.0);
        assert_eq!(geometry.wrap_width, Some(100.0));
        assert_eq!(geometry.break_width(), None);
    }

    #[test]
    fn expansion_shrinks_the_unexpanded_wrap_width() {
        let style = ParagraphStyle::default().to_native();
        let geometry = LineGeometry::new(&style, Some(100.0), 2.0);
        assert_eq!(geometry.wrap_width, Some(50.0));
    }

    #[test]
    fn decorations_need_a_non_empty_style() {
        use crate::attributes::StringAttributes;
        use crate::testing::FakeCatalog;

        let attributes = StringAttributes {
            stroke_width: 1.0,
            underline_color: Some(DARK_TEXT),
            strikethrough_color: Some(DARK_TEXT),
            strikethrough_style: UnderlineStyle::THICK,
            ..StringAttributes::default()
        };
        let lowered =
            LoweredStyle::from_map(&attributes.attribute_map(&mut FakeCatalog::latin_and_cjk()));
        assert!(lowered.underline.is_none());
        let strike = lowered.strikethrough.unwrap();
        assert_eq!(strike.size_factor(), 2.0);
        assert!(!strike.is_double());
    }

    fn lowered(attributes: crate::attributes::StringAttributes) -> LoweredStyle {
        let map = attributes.attribute_map(&mut crate::testing::FakeCatalog::latin_and_cjk());
        LoweredStyle::from_map(&map)
    }

    #[test]
    fn disabled_ligatures_lower_to_feature_settings() {
        use crate::attributes::StringAttributes;

        let ligatures_off = |style: &LoweredStyle| {
            style.default_properties().iter().any(|property| {
                matches!(
                    property,
                    StyleProperty::FontFeatures(FontSettings::Source(source))
                        if source == LIGATURES_OFF
                )
            })
        };
        let on = lowered(StringAttributes::default());
        let off = lowered(StringAttributes {
            ligature: false,
            ..StringAttributes::default()
        });
        assert!(on.ligatures);
        assert!(!ligatures_off(&on));
        assert!(!off.ligatures);
        assert!(ligatures_off(&off));
    }

    #[test]
    fn surviving_decorations_become_properties() {
        use crate::attributes::StringAttributes;

        let style = lowered(StringAttributes {
            stroke_width: -1.0,
            underline_color: Some(DARK_TEXT),
            underline_style: UnderlineStyle::SINGLE,
            ..StringAttributes::default()
        });
        let properties = style.default_properties();
        assert!(properties.contains(&StyleProperty::Underline(true)));
        assert!(!properties.contains(&StyleProperty::Strikethrough(true)));
    }

    #[test]
    fn first_line_box_ignores_expansion() {
        use crate::attributes::StringAttributes;

        let mut attributes = StringAttributes {
            expansion: 2.0_f32.ln(),
            ..StringAttributes::default()
        };
        attributes.paragraph_style.first_line_head_indent = 30.0;
        attributes.paragraph_style.head_indent = 10.0;
        let style = lowered(attributes);
        assert!((style.first_line_box_width() - 10.0).abs() < 1e-4);
        assert!((style.first_line_box_width() * style.expansion_factor() - 20.0).abs() < 1e-4);
    }
}
