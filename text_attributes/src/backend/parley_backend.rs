// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use parley::fontique::{
    Attributes, Blob, Collection, GenericFamily, QueryFamily, QueryStatus, SourceCache,
};
use parley::{FontContext, LayoutContext};
use skrifa::instance::{LocationRef, Size as FontSize};
use skrifa::string::StringId;
use skrifa::{FontRef, MetadataProvider};

use crate::attribute_map::AttributeMap;
use crate::backend::block::TextBlock;
use crate::backend::lower::LoweredStyle;
use crate::backend::paint::paint;
use crate::backend::{TextBackend, TextMetrics};
use crate::color::ColorBrush;
use crate::font::{FontCatalog, FontMetrics, FontSource, ResolvedFont};
use crate::geometry::Size;
use crate::image::RasterImage;

/// A [`TextBackend`] laying out with Parley and painting with Tiny-Skia.
///
/// The font and layout contexts are caches; keep one backend around and reuse it.
pub struct ParleyBackend {
    font_cx: FontContext,
    layout_cx: LayoutContext<ColorBrush>,
    scale: f32,
    quantize: bool,
}

impl core::fmt::Debug for ParleyBackend {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ParleyBackend")
            .field("scale", &self.scale)
            .field("quantize", &self.quantize)
            .finish_non_exhaustive()
    }
}

impl Default for ParleyBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ParleyBackend {
    /// A backend over the fonts installed on the system.
    pub fn new() -> Self {
        Self::from_font_context(FontContext::new())
    }

    /// A backend over an explicit font collection.
    pub fn with_collection(collection: Collection) -> Self {
        Self::from_font_context(FontContext {
            collection,
            source_cache: SourceCache::default(),
        })
    }

    fn from_font_context(font_cx: FontContext) -> Self {
        Self {
            font_cx,
            layout_cx: LayoutContext::new(),
            scale: 1.0,
            quantize: true,
        }
    }

    /// Pixels per layout unit of rasterized images.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Sets the pixels per layout unit of rasterized images. Measurements are unaffected.
    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
    }

    /// Sets whether glyph positions are rounded to whole pixels.
    pub fn set_quantize(&mut self, quantize: bool) {
        self.quantize = quantize;
    }

    fn layout(
        &mut self,
        text: &str,
        attributes: &AttributeMap,
        max_width: Option<f32>,
    ) -> Option<(LoweredStyle, TextBlock, TextMetrics)> {
        if text.is_empty() {
            return None;
        }
        let style = LoweredStyle::from_map(attributes);
        let block = TextBlock::build(
            &mut self.font_cx,
            &mut self.layout_cx,
            text,
            &style,
            max_width,
            self.quantize,
        );
        let font = attributes
            .font()
            .cloned()
            .unwrap_or_else(|| ResolvedFont::system_default(style.font_size));
        let leading = self
            .font_metrics(&font)
            .map_or(block.leading, |metrics| metrics.leading);
        let metrics = TextMetrics {
            size: Size::new(
                block.content.width * style.expansion_factor(),
                block.content.height + style.baseline_offset.abs(),
            ),
            line_count: block.line_count,
            leading,
        };
        log::debug!(
            "measured {} chars in {} lines: {}x{}",
            text.chars().count(),
            metrics.line_count,
            metrics.size.width,
            metrics.size.height
        );
        Some((style, block, metrics))
    }

    /// Data and collection index of the face `font` selects: the pinned face, or else the first
    /// match of a family query.
    fn load(&mut self, font: &ResolvedFont) -> Option<(Blob<u8>, u32)> {
        let FontContext {
            collection,
            source_cache,
        } = &mut self.font_cx;
        if let (FontSource::Named(name), Some(face)) = (font.source(), font.face_index()) {
            let family = collection.family_by_name(name)?;
            let info = family.fonts().get(face)?;
            return Some((info.load(Some(source_cache))?, info.index()));
        }
        let mut query = collection.query(source_cache);
        query.set_families([match font.source() {
            FontSource::Named(name) => QueryFamily::Named(name.as_str()),
            FontSource::SystemDefault => QueryFamily::Generic(GenericFamily::SystemUi),
        }]);
        query.set_attributes(Attributes::default());
        let mut found = None;
        query.matches_with(|candidate| {
            found = Some((candidate.blob.clone(), candidate.index));
            QueryStatus::Stop
        });
        found
    }

    /// Runs `f` on the face `font` selects.
    fn with_font<R>(&mut self, font: &ResolvedFont, f: impl FnOnce(&FontRef<'_>) -> R) -> Option<R> {
        let (blob, index) = self.load(font)?;
        let font_ref = FontRef::from_index(blob.as_ref(), index).ok()?;
        Some(f(&font_ref))
    }
}

impl FontCatalog for ParleyBackend {
    fn family_names(&mut self) -> Vec<String> {
        let mut names = self
            .font_cx
            .collection
            .family_names()
            .map(str::to_owned)
            .collect::<Vec<_>>();
        names.sort();
        names.dedup();
        names
    }

    fn contains_family(&mut self, name: &str) -> bool {
        self.font_cx.collection.family_id(name).is_some()
    }

    fn face_count(&mut self, family: &str) -> usize {
        self.font_cx
            .collection
            .family_by_name(family)
            .map_or(0, |family| family.fonts().len())
    }

    fn face_name(&mut self, font: &ResolvedFont) -> Option<String> {
        self.with_font(font, |font_ref| {
            font_ref
                .localized_strings(StringId::POSTSCRIPT_NAME)
                .english_or_first()
                .map(|name| name.to_string())
        })
        .flatten()
    }

    fn has_glyph(&mut self, font: &ResolvedFont, ch: char) -> bool {
        self.with_font(font, |font_ref| font_ref.charmap().map(ch).is_some())
            .unwrap_or(false)
    }

    fn font_metrics(&mut self, font: &ResolvedFont) -> Option<FontMetrics> {
        let size = font.size();
        self.with_font(font, |font_ref| {
            let metrics = font_ref.metrics(FontSize::new(size), LocationRef::default());
            FontMetrics {
                point_size: size,
                ascender: metrics.ascent,
                descender: metrics.descent,
                leading: metrics.leading,
                cap_height: metrics.cap_height,
                x_height: metrics.x_height,
            }
        })
    }
}

impl TextBackend for ParleyBackend {
    fn measure(
        &mut self,
        text: &str,
        attributes: &AttributeMap,
        max_width: Option<f32>,
    ) -> TextMetrics {
        self.layout(text, attributes, max_width)
            .map_or(TextMetrics::ZERO, |(_, _, metrics)| metrics)
    }

    fn rasterize(
        &mut self,
        text: &str,
        attributes: &AttributeMap,
        max_width: Option<f32>,
    ) -> Option<RasterImage> {
        let (style, block, metrics) = self.layout(text, attributes, max_width)?;
        let size = metrics.fitting_size(max_width);
        let pixmap = paint(&block, &style, size, metrics.leading / 2.0, self.scale)?;
        Some(RasterImage::new(pixmap, self.scale))
    }
}
