// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paragraph stacking.
//!
//! Parley lays out one block of text at a time and has no notion of paragraph spacing, so the
//! text is split at hard line breaks and each paragraph gets its own [`Layout`].

use parley::layout::{AlignmentOptions, Layout, PositionedLayoutItem};
use parley::{FontContext, LayoutContext};

use crate::backend::lower::{LineGeometry, LoweredStyle};
use crate::color::ColorBrush;
use crate::geometry::Size;

/// One laid out paragraph and its vertical position in the block.
pub(crate) struct PlacedParagraph {
    pub(crate) layout: Layout<ColorBrush>,
    /// Top edge, in layout units.
    pub(crate) top: f32,
}

/// A laid out text, in unexpanded layout units.
pub(crate) struct TextBlock {
    pub(crate) paragraphs: Vec<PlacedParagraph>,
    /// Offset of every line from the left edge.
    pub(crate) head: f32,
    /// Extent of the content, before expansion.
    pub(crate) content: Size,
    /// Width of the box lines are aligned and clipped in, if constrained.
    pub(crate) clip_width: Option<f32>,
    pub(crate) line_count: usize,
    /// Leading of the font of the last glyph run, for when the attributed font cannot be read.
    pub(crate) leading: f32,
}

impl TextBlock {
    pub(crate) fn build(
        font_cx: &mut FontContext,
        layout_cx: &mut LayoutContext<ColorBrush>,
        text: &str,
        style: &LoweredStyle,
        max_width: Option<f32>,
        quantize: bool,
    ) -> Self {
        let expansion = style.expansion_factor();
        let geometry = LineGeometry::new(&style.paragraph, max_width, expansion);
        let alignment = style.alignment();
        let spacing_after = style.paragraph.paragraph_spacing();
        let spacing_before = style.paragraph.paragraph_spacing_before();

        let mut paragraphs = Vec::new();
        let mut top = 0.0_f32;
        let mut width = 0.0_f32;
        let mut line_count = 0;
        let mut leading = 0.0;
        for (index, source) in text.split('\n').enumerate() {
            if index > 0 {
                top += spacing_after + spacing_before;
            }
            // An empty paragraph still occupies one line.
            let source = if source.is_empty() { " " } else { source };
            let mut builder = layout_cx.ranged_builder(font_cx, source, 1.0, quantize);
            style.push_defaults(&mut builder);
            let mut layout = builder.build(source);
            layout.break_all_lines(geometry.break_width());
            layout.align(geometry.wrap_width, alignment, AlignmentOptions::default());

            let paragraph_width = layout.width();
            width = width.max(match geometry.wrap_width {
                Some(wrap) if !geometry.wraps => paragraph_width.min(wrap),
                _ => paragraph_width,
            });
            line_count += layout.len();
            if let Some(last) = last_run_leading(&layout) {
                leading = last;
            }
            log::trace!(
                "paragraph {index}: {} lines, {paragraph_width}x{}",
                layout.len(),
                layout.height()
            );
            let height = layout.height();
            paragraphs.push(PlacedParagraph { layout, top });
            top += height;
        }

        Self {
            paragraphs,
            head: geometry.head,
            content: Size::new(geometry.head + width, top.max(0.0)),
            clip_width: geometry.wrap_width,
            line_count,
            leading,
        }
    }
}

fn last_run_leading(layout: &Layout<ColorBrush>) -> Option<f32> {
    let line = layout.lines().last()?;
    line.items()
        .filter_map(|item| match item {
            PositionedLayoutItem::GlyphRun(run) => Some(run.run().metrics().leading),
            PositionedLayoutItem::InlineBox(_) => None,
        })
        .last()
}
