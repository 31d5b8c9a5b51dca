// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paragraph level formatting.
//!
//! [`ParagraphStyle`] is the editable value; [`NativeParagraphStyle`] is the frozen snapshot that
//! travels inside an [`AttributeMap`](crate::AttributeMap) and is read by the layout backend.
//!
//! Every numeric field defaults to `0.0`, meaning "no effect". Values are never validated:
//! negative numbers are carried through unchanged and it is up to the backend to interpret them.

/// Horizontal alignment of the lines in a paragraph.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAlignment {
    /// Flush to the edge where lines start.
    Leading,
    /// Centered.
    Center,
    /// Flush to the edge where lines end.
    Trailing,
    /// Stretched to both edges, except for the last line.
    Justified,
    /// Leading edge of the paragraph's writing direction; an explicit base direction pins it to a
    /// physical side.
    #[default]
    Natural,
}

impl TextAlignment {
    /// Returns the alignment for a raw index, or `None` if it is out of range.
    ///
    /// Raw values are `Leading = 0`, `Center = 1`, `Trailing = 2`, `Justified = 3`,
    /// `Natural = 4`.
    pub fn from_raw(raw: u8) -> Option<Self> {
        Some(match raw {
            0 => Self::Leading,
            1 => Self::Center,
            2 => Self::Trailing,
            3 => Self::Justified,
            4 => Self::Natural,
            _ => return None,
        })
    }

    /// The raw index of this alignment.
    pub fn raw(self) -> u8 {
        match self {
            Self::Leading => 0,
            Self::Center => 1,
            Self::Trailing => 2,
            Self::Justified => 3,
            Self::Natural => 4,
        }
    }
}

/// What happens to lines that do not fit the available width.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum LineBreakMode {
    /// Wrap at word boundaries.
    #[default]
    ByWordWrapping,
    /// Wrap at any character.
    ByCharWrapping,
    /// Do not wrap; overflow is clipped.
    ByClipping,
    /// Do not wrap; the head of the line is elided.
    ByTruncatingHead,
    /// Do not wrap; the tail of the line is elided.
    ByTruncatingTail,
    /// Do not wrap; the middle of the line is elided.
    ByTruncatingMiddle,
}

impl LineBreakMode {
    /// Returns the mode for a raw index (`0..=5` in declaration order).
    pub fn from_raw(raw: u8) -> Option<Self> {
        Some(match raw {
            0 => Self::ByWordWrapping,
            1 => Self::ByCharWrapping,
            2 => Self::ByClipping,
            3 => Self::ByTruncatingHead,
            4 => Self::ByTruncatingTail,
            5 => Self::ByTruncatingMiddle,
            _ => return None,
        })
    }

    /// The raw index of this mode.
    pub fn raw(self) -> u8 {
        match self {
            Self::ByWordWrapping => 0,
            Self::ByCharWrapping => 1,
            Self::ByClipping => 2,
            Self::ByTruncatingHead => 3,
            Self::ByTruncatingTail => 4,
            Self::ByTruncatingMiddle => 5,
        }
    }

    /// Returns `true` if lines are broken to fit the available width.
    pub fn wraps(self) -> bool {
        matches!(self, Self::ByWordWrapping | Self::ByCharWrapping)
    }
}

/// Base writing direction of a paragraph.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum WritingDirection {
    /// Determined from the content.
    #[default]
    Natural,
    /// Left to right.
    LeftToRight,
    /// Right to left.
    RightToLeft,
}

impl WritingDirection {
    /// Returns the direction for a raw value: `-1` natural, `0` left to right, `1` right to left.
    pub fn from_raw(raw: i8) -> Option<Self> {
        Some(match raw {
            -1 => Self::Natural,
            0 => Self::LeftToRight,
            1 => Self::RightToLeft,
            _ => return None,
        })
    }

    /// The raw value of this direction.
    pub fn raw(self) -> i8 {
        match self {
            Self::Natural => -1,
            Self::LeftToRight => 0,
            Self::RightToLeft => 1,
        }
    }
}

/// Editable paragraph formatting.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParagraphStyle {
    /// Horizontal alignment.
    pub text_alignment: TextAlignment,
    /// Indent of the first line, from the leading margin.
    pub first_line_head_indent: f32,
    /// Indent of lines other than the first, from the leading margin.
    pub head_indent: f32,
    /// Positive: line length from the leading margin. Zero or negative: inset from the trailing
    /// margin.
    pub tail_indent: f32,
    /// Wrapping behavior.
    pub line_break_mode: LineBreakMode,
    /// Multiplier of the natural line height; `0.0` leaves it untouched.
    pub line_height_multiple: f32,
    /// Upper bound of the line height; `0.0` is unconstrained.
    pub maximum_line_height: f32,
    /// Lower bound of the line height; `0.0` is unconstrained.
    pub minimum_line_height: f32,
    /// Extra space between lines.
    pub line_spacing: f32,
    /// Space after each paragraph.
    pub paragraph_spacing: f32,
    /// Space before each paragraph.
    pub paragraph_spacing_before: f32,
    /// Base writing direction.
    pub base_writing_direction: WritingDirection,
}

impl ParagraphStyle {
    /// Creates a style with every field at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Freezes this style into its native form.
    ///
    /// Every field is transcribed as is; nothing is clamped or validated.
    pub fn to_native(&self) -> NativeParagraphStyle {
        NativeParagraphStyle {
            alignment: self.text_alignment,
            first_line_head_indent: self.first_line_head_indent,
            head_indent: self.head_indent,
            tail_indent: self.tail_indent,
            line_break_mode: self.line_break_mode,
            line_height_multiple: self.line_height_multiple,
            maximum_line_height: self.maximum_line_height,
            minimum_line_height: self.minimum_line_height,
            line_spacing: self.line_spacing,
            paragraph_spacing: self.paragraph_spacing,
            paragraph_spacing_before: self.paragraph_spacing_before,
            base_writing_direction: self.base_writing_direction,
        }
    }
}

/// Immutable paragraph style as consumed by the layout backend.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NativeParagraphStyle {
    alignment: TextAlignment,
    first_line_head_indent: f32,
    head_indent: f32,
    tail_indent: f32,
    line_break_mode: LineBreakMode,
    line_height_multiple: f32,
    maximum_line_height: f32,
    minimum_line_height: f32,
    line_spacing: f32,
    paragraph_spacing: f32,
    paragraph_spacing_before: f32,
    base_writing_direction: WritingDirection,
}

impl NativeParagraphStyle {
    /// Horizontal alignment.
    pub fn alignment(&self) -> TextAlignment {
        self.alignment
    }

    /// First line indent.
    pub fn first_line_head_indent(&self) -> f32 {
        self.first_line_head_indent
    }

    /// Indent of the remaining lines.
    pub fn head_indent(&self) -> f32 {
        self.head_indent
    }

    /// Tail indent, see [`ParagraphStyle::tail_indent`].
    pub fn tail_indent(&self) -> f32 {
        self.tail_indent
    }

    /// Wrapping behavior.
    pub fn line_break_mode(&self) -> LineBreakMode {
        self.line_break_mode
    }

    /// Line height multiplier.
    pub fn line_height_multiple(&self) -> f32 {
        self.line_height_multiple
    }

    /// Maximum line height.
    pub fn maximum_line_height(&self) -> f32 {
        self.maximum_line_height
    }

    /// Minimum line height.
    pub fn minimum_line_height(&self) -> f32 {
        self.minimum_line_height
    }

    /// Extra space between lines.
    pub fn line_spacing(&self) -> f32 {
        self.line_spacing
    }

    /// Space after each paragraph.
    pub fn paragraph_spacing(&self) -> f32 {
        self.paragraph_spacing
    }

    /// Space before each paragraph.
    pub fn paragraph_spacing_before(&self) -> f32 {
        self.paragraph_spacing_before
    }

    /// Base writing direction.
    pub fn base_writing_direction(&self) -> WritingDirection {
        self.base_writing_direction
    }

    /// Reads every field back into an editable style.
    pub fn to_style(&self) -> ParagraphStyle {
        ParagraphStyle {
            text_alignment: self.alignment,
            first_line_head_indent: self.first_line_head_indent,
            head_indent: self.head_indent,
            tail_indent: self.tail_indent,
            line_break_mode: self.line_break_mode,
            line_height_multiple: self.line_height_multiple,
            maximum_line_height: self.maximum_line_height,
            minimum_line_height: self.minimum_line_height,
            line_spacing: self.line_spacing,
            paragraph_spacing: self.paragraph_spacing,
            paragraph_spacing_before: self.paragraph_spacing_before,
            base_writing_direction: self.base_writing_direction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tuned() -> ParagraphStyle {
        ParagraphStyle {
            text_alignment: TextAlignment::Justified,
            first_line_head_indent: 12.0,
            head_indent: 4.0,
            tail_indent: -8.0,
            line_break_mode: LineBreakMode::ByTruncatingMiddle,
            line_height_multiple: 1.5,
            maximum_line_height: 40.0,
            minimum_line_height: 18.0,
            line_spacing: -3.0,
            paragraph_spacing: 6.0,
            paragraph_spacing_before: 2.5,
            base_writing_direction: WritingDirection::RightToLeft,
        }
    }

    #[test]
    fn native_reads_back_every_field() {
        let style = tuned();
        let native = style.to_native();
        assert_eq!(native.alignment(), style.text_alignment);
        assert_eq!(native.first_line_head_indent(), style.first_line_head_indent);
        assert_eq!(native.head_indent(), style.head_indent);
        assert_eq!(native.tail_indent(), style.tail_indent);
        assert_eq!(native.line_break_mode(), style.line_break_mode);
        assert_eq!(native.line_height_multiple(), style.line_height_multiple);
        assert_eq!(native.maximum_line_height(), style.maximum_line_height);
        assert_eq!(native.minimum_line_height(), style.minimum_line_height);
        assert_eq!(native.line_spacing(), style.line_spacing);
        assert_eq!(native.paragraph_spacing(), style.paragraph_spacing);
        assert_eq!(
            native.paragraph_spacing_before(),
            style.paragraph_spacing_before
        );
        assert_eq!(native.base_writing_direction(), style.base_writing_direction);
        assert_eq!(native.to_style(), style);
    }

    #[test]
    fn defaults_have_no_effect() {
        let native = ParagraphStyle::new().to_native();
        assert_eq!(native.alignment(), TextAlignment::Natural);
        assert_eq!(native.line_break_mode(), LineBreakMode::ByWordWrapping);
        assert_eq!(native.base_writing_direction(), WritingDirection::Natural);
        assert_eq!(native.line_height_multiple(), 0.0);
        assert_eq!(native.maximum_line_height(), 0.0);
        assert_eq!(native.minimum_line_height(), 0.0);
    }

    #[test]
    fn raw_values_round_trip_and_reject_unknown() {
        for raw in 0..=4 {
            assert_eq!(TextAlignment::from_raw(raw).map(TextAlignment::raw), Some(raw));
        }
        for raw in 0..=5 {
            assert_eq!(LineBreakMode::from_raw(raw).map(LineBreakMode::raw), Some(raw));
        }
        for raw in -1..=1 {
            assert_eq!(
                WritingDirection::from_raw(raw).map(WritingDirection::raw),
                Some(raw)
            );
        }
        assert_eq!(TextAlignment::from_raw(5), None);
        assert_eq!(LineBreakMode::from_raw(6), None);
        assert_eq!(WritingDirection::from_raw(2), None);
    }

    #[test]
    fn only_wrapping_modes_wrap() {
        assert!(LineBreakMode::ByWordWrapping.wraps());
        assert!(LineBreakMode::ByCharWrapping.wraps());
        assert!(!LineBreakMode::ByClipping.wraps());
        assert!(!LineBreakMode::ByTruncatingTail.wraps());
    }
}
