// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Painting a [`TextBlock`] into a Tiny-Skia pixmap.
//!
//! Glyph outlines come from Skrifa and are drawn through [`GlyphPen`], which maps font units
//! into layout units and applies the obliqueness skew. Expansion and display scale are folded
//! into the pixmap transform.

use parley::layout::{Decoration as RunDecoration, GlyphRun, PositionedLayoutItem};
use skrifa::instance::{LocationRef, NormalizedCoord, Size as FontSize};
use skrifa::outline::{DrawSettings, OutlinePen};
use skrifa::raw::FontRef;
use skrifa::{GlyphId, MetadataProvider};
use tiny_skia::{
    Color as SkiaColor, FillRule, Paint, PathBuilder, Pixmap, PixmapPaint, Rect, Stroke,
    Transform,
};

use crate::backend::block::TextBlock;
use crate::backend::lower::{Decoration, LoweredStyle};
use crate::color::{to_rgba8, Color, ColorBrush};
use crate::geometry::Size;

/// Paints `block` into a transparent pixmap covering `size` layout units at `scale`.
///
/// `top_inset` is the distance from the top of the image to the first line box.
pub(crate) fn paint(
    block: &TextBlock,
    style: &LoweredStyle,
    size: Size,
    top_inset: f32,
    scale: f32,
) -> Option<Pixmap> {
    if size.is_empty() {
        return None;
    }
    let mut pixmap = Pixmap::new(pixel_extent(size.width, scale), pixel_extent(size.height, scale))?;
    let origin = Transform::from_scale(scale * style.expansion_factor(), scale)
        .pre_translate(block.head, top_inset + style.baseline_offset.max(0.0));

    let painter = Painter {
        block,
        style,
        transform: origin,
        color_override: None,
    };
    painter.fill_backgrounds(&mut pixmap);

    if let Some(shadow) = &style.shadow {
        if let Some(mut layer) = Pixmap::new(pixmap.width(), pixmap.height()) {
            let shadow_painter = Painter {
                transform: origin
                    .post_translate(shadow.offset.width * scale, shadow.offset.height * scale),
                color_override: Some(shadow.color),
                ..painter
            };
            shadow_painter.draw(&mut layer);
            box_blur(&mut layer, shadow.blur_radius * scale / 2.0);
            pixmap.draw_pixmap(
                0,
                0,
                layer.as_ref(),
                &PixmapPaint::default(),
                Transform::identity(),
                None,
            );
        }
    }

    painter.draw(&mut pixmap);
    Some(pixmap)
}

/// Vertical reach of the clip rectangle, past any realistic text height.
const CLIP_REACH: f32 = 1.0e6;

#[expect(
    clippy::cast_possible_truncation,
    reason = "Image extents are small positive values."
)]
fn pixel_extent(length: f32, scale: f32) -> u32 {
    (length * scale).ceil().max(0.0) as u32
}

fn to_tiny_skia(color: Color) -> SkiaColor {
    let [r, g, b, a] = to_rgba8(color);
    SkiaColor::from_rgba8(r, g, b, a)
}

#[derive(Copy, Clone)]
struct Painter<'a> {
    block: &'a TextBlock,
    style: &'a LoweredStyle,
    transform: Transform,
    /// Replaces every color, for the shadow layer.
    color_override: Option<Color>,
}

impl Painter<'_> {
    fn paint(&self, color: Color) -> Paint<'static> {
        let mut paint = Paint::default();
        paint.set_color(to_tiny_skia(self.color_override.unwrap_or(color)));
        paint.anti_alias = true;
        paint
    }

    fn clip(&self) -> Option<Rect> {
        let width = self.block.clip_width?;
        Rect::from_xywh(0.0, -CLIP_REACH, width, 2.0 * CLIP_REACH)
    }

    fn fill_backgrounds(&self, pixmap: &mut Pixmap) {
        if to_rgba8(self.style.background)[3] == 0 {
            return;
        }
        let paint = self.paint(self.style.background);
        for paragraph in &self.block.paragraphs {
            let transform = self.transform.pre_translate(0.0, paragraph.top);
            for line in paragraph.layout.lines() {
                let metrics = line.metrics();
                for item in line.items() {
                    let PositionedLayoutItem::GlyphRun(glyph_run) = item else {
                        continue;
                    };
                    let mut width = glyph_run.advance();
                    if let Some(clip) = self.block.clip_width {
                        width = width.min(clip - glyph_run.offset());
                    }
                    let rect = Rect::from_xywh(
                        glyph_run.offset(),
                        metrics.baseline - metrics.ascent,
                        width,
                        metrics.ascent + metrics.descent,
                    );
                    if let Some(rect) = rect {
                        pixmap.fill_rect(rect, &paint, transform, None);
                    }
                }
            }
        }
    }

    fn draw(&self, pixmap: &mut Pixmap) {
        for paragraph in &self.block.paragraphs {
            let transform = self
                .transform
                .pre_translate(0.0, paragraph.top - self.style.baseline_offset);
            for line in paragraph.layout.lines() {
                for item in line.items() {
                    // The first line indent box carries nothing to draw.
                    if let PositionedLayoutItem::GlyphRun(glyph_run) = item {
                        self.draw_glyph_run(pixmap, &glyph_run, transform);
                        self.draw_decorations(pixmap, &glyph_run, transform);
                    }
                }
            }
        }
    }

    fn draw_glyph_run(
        &self,
        pixmap: &mut Pixmap,
        glyph_run: &GlyphRun<'_, ColorBrush>,
        transform: Transform,
    ) {
        let mut run_x = glyph_run.offset();
        let run_y = glyph_run.baseline();
        let color = glyph_run.style().brush.color;

        let run = glyph_run.run();
        let font = run.font();
        let font_size = run.font_size();
        let normalized_coords = run
            .normalized_coords()
            .iter()
            .map(|coord| NormalizedCoord::from_bits(*coord))
            .collect::<Vec<_>>();

        let Ok(font_ref) = FontRef::from_index(font.data.as_ref(), font.index) else {
            log::warn!("unreadable font data, skipping a glyph run");
            return;
        };
        let outlines = font_ref.outline_glyphs();
        let location = LocationRef::new(&normalized_coords);

        let fill = self.paint(color);
        let outline = self.paint(self.style.stroke_color.unwrap_or(color));
        let stroke = Stroke {
            width: self.style.stroke_width.abs() / 100.0 * font_size,
            ..Stroke::default()
        };
        let clip_mask = self.clip_mask(pixmap, transform);

        for glyph in glyph_run.glyphs() {
            let glyph_x = run_x + glyph.x;
            let glyph_y = run_y - glyph.y;
            run_x += glyph.advance;

            let Some(glyph_outline) = outlines.get(GlyphId::from(glyph.id)) else {
                log::warn!("no outline for glyph {}", glyph.id);
                continue;
            };
            let mut pen = GlyphPen::new(glyph_x, glyph_y, self.style.obliqueness);
            let settings = DrawSettings::unhinted(FontSize::new(font_size), location);
            if glyph_outline.draw(settings, &mut pen).is_err() {
                log::warn!("failed to draw outline of glyph {}", glyph.id);
                continue;
            }
            let Some(path) = pen.finish() else {
                continue;
            };
            if self.style.stroke_width <= 0.0 {
                pixmap.fill_path(
                    &path,
                    &fill,
                    FillRule::Winding,
                    transform,
                    clip_mask.as_ref(),
                );
            }
            if self.style.stroke_width != 0.0 {
                pixmap.stroke_path(&path, &outline, &stroke, transform, clip_mask.as_ref());
            }
        }
    }

    fn draw_decorations(
        &self,
        pixmap: &mut Pixmap,
        glyph_run: &GlyphRun<'_, ColorBrush>,
        transform: Transform,
    ) {
        let style = glyph_run.style();
        let metrics = glyph_run.run().metrics();
        if let (Some(decoration), Some(lowered)) = (&style.underline, &self.style.underline) {
            let offset = decoration.offset.unwrap_or(metrics.underline_offset);
            let size = decoration.size.unwrap_or(metrics.underline_size);
            self.draw_decoration(pixmap, glyph_run, decoration, lowered, offset, size, transform);
        }
        if let (Some(decoration), Some(lowered)) = (&style.strikethrough, &self.style.strikethrough)
        {
            let offset = decoration.offset.unwrap_or(metrics.strikethrough_offset);
            let size = decoration.size.unwrap_or(metrics.strikethrough_size);
            self.draw_decoration(pixmap, glyph_run, decoration, lowered, offset, size, transform);
        }
    }

    fn draw_decoration(
        &self,
        pixmap: &mut Pixmap,
        glyph_run: &GlyphRun<'_, ColorBrush>,
        decoration: &RunDecoration<ColorBrush>,
        lowered: &Decoration,
        offset: f32,
        size: f32,
        transform: Transform,
    ) {
        let paint = self.paint(decoration.brush.color);
        let size = size * lowered.size_factor();
        let x = glyph_run.offset();
        let mut width = glyph_run.advance();
        if let Some(clip) = self.block.clip_width {
            width = width.min(clip - x);
        }
        let y = glyph_run.baseline() - offset;
        let mut lines = vec![y];
        if lowered.is_double() {
            lines.push(y + size * 2.0);
        }
        for y in lines {
            if let Some(rect) = Rect::from_xywh(x, y, width, size) {
                pixmap.fill_rect(rect, &paint, transform, None);
            }
        }
    }

    /// A mask hiding everything past the clip width of non-wrapping lines.
    fn clip_mask(&self, pixmap: &Pixmap, transform: Transform) -> Option<tiny_skia::Mask> {
        let rect = self.clip()?;
        let mut mask = tiny_skia::Mask::new(pixmap.width(), pixmap.height())?;
        let path = PathBuilder::from_rect(rect);
        mask.fill_path(&path, FillRule::Winding, false, transform);
        Some(mask)
    }
}

/// Collects a glyph outline as a Tiny-Skia path in layout units.
struct GlyphPen {
    x: f32,
    y: f32,
    skew: f32,
    open_path: PathBuilder,
}

impl GlyphPen {
    fn new(x: f32, y: f32, skew: f32) -> Self {
        Self {
            x,
            y,
            skew,
            open_path: PathBuilder::new(),
        }
    }

    fn map(&self, x: f32, y: f32) -> (f32, f32) {
        (self.x + x + y * self.skew, self.y - y)
    }

    fn finish(self) -> Option<tiny_skia::Path> {
        self.open_path.finish()
    }
}

impl OutlinePen for GlyphPen {
    fn move_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.map(x, y);
        self.open_path.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.map(x, y);
        self.open_path.line_to(x, y);
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        let (cx0, cy0) = self.map(cx0, cy0);
        let (x, y) = self.map(x, y);
        self.open_path.quad_to(cx0, cy0, x, y);
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        let (cx0, cy0) = self.map(cx0, cy0);
        let (cx1, cy1) = self.map(cx1, cy1);
        let (x, y) = self.map(x, y);
        self.open_path.cubic_to(cx0, cy0, cx1, cy1, x, y);
    }

    fn close(&mut self) {
        self.open_path.close();
    }
}

/// Approximates a Gaussian blur of standard deviation `sigma` with three box blur passes.
#[expect(
    clippy::cast_possible_truncation,
    reason = "Blur radii are small positive values."
)]
pub(crate) fn box_blur(pixmap: &mut Pixmap, sigma: f32) {
    let radius = sigma.round().max(0.0) as usize;
    if radius == 0 {
        return;
    }
    let width = pixmap.width() as usize;
    let height = pixmap.height() as usize;
    let data = pixmap.data_mut();
    let mut scratch = vec![0_u8; data.len()];
    for _ in 0..3 {
        blur_pass(data, &mut scratch, width, height, radius, true);
        blur_pass(&scratch, data, width, height, radius, false);
    }
}

/// One box blur along rows (`horizontal`) or columns, from `src` into `dst`.
///
/// Premultiplied channels stay consistent because every channel is averaged with the same weights.
#[expect(
    clippy::cast_possible_truncation,
    reason = "Averages of bytes fit in a byte."
)]
fn blur_pass(
    src: &[u8],
    dst: &mut [u8],
    width: usize,
    height: usize,
    radius: usize,
    horizontal: bool,
) {
    let (lines, length) = if horizontal {
        (height, width)
    } else {
        (width, height)
    };
    let index = |line: usize, pos: usize| {
        if horizontal {
            (line * width + pos) * 4
        } else {
            (pos * width + line) * 4
        }
    };
    let window = (2 * radius + 1) as u32;
    for line in 0..lines {
        let mut sums = [0_u32; 4];
        // Pixels outside the image count as transparent.
        for pos in 0..=radius.min(length.saturating_sub(1)) {
            let i = index(line, pos);
            for (sum, value) in sums.iter_mut().zip(&src[i..i + 4]) {
                *sum += u32::from(*value);
            }
        }
        for pos in 0..length {
            let i = index(line, pos);
            for (channel, sum) in sums.iter().enumerate() {
                dst[i + channel] = (sum / window) as u8;
            }
            if pos + radius + 1 < length {
                let j = index(line, pos + radius + 1);
                for (sum, value) in sums.iter_mut().zip(&src[j..j + 4]) {
                    *sum += u32::from(*value);
                }
            }
            if pos >= radius {
                let j = index(line, pos - radius);
                for (sum, value) in sums.iter_mut().zip(&src[j..j + 4]) {
                    *sum -= u32::from(*value);
                }
            }
        }
    }
}
