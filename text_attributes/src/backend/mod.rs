// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text backends: measuring and rasterizing text styled by an [`AttributeMap`].
//!
//! [`TextBackend`] is the platform seam. Everything above it works on value types; everything
//! below it knows about fonts and pixels. [`ParleyBackend`] is the implementation shipped with
//! this crate.

mod block;
mod lower;
mod paint;
mod parley_backend;

pub use self::parley_backend::ParleyBackend;

use crate::attribute_map::AttributeMap;
use crate::font::FontCatalog;
use crate::geometry::Size;
use crate::image::RasterImage;

/// The result of measuring a text.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct TextMetrics {
    /// Extent of the laid out lines, in layout units.
    pub size: Size,
    /// Number of lines after wrapping, across all paragraphs.
    pub line_count: usize,
    /// Leading of the font used for the last line.
    pub leading: f32,
}

impl TextMetrics {
    /// Metrics of an empty text.
    pub const ZERO: Self = Self {
        size: Size::ZERO,
        line_count: 0,
        leading: 0.0,
    };

    /// Size of a view fitting this text.
    ///
    /// Half the leading is added above and below the lines. A positive `max_width` fixes the
    /// width.
    pub fn fitting_size(&self, max_width: Option<f32>) -> Size {
        if self.line_count == 0 {
            return Size::ZERO;
        }
        let width = match max_width {
            Some(width) if width > 0.0 => width,
            _ => self.size.width,
        };
        Size::new(width, self.size.height + self.leading)
    }
}

/// Lays out, measures and paints text.
pub trait TextBackend: FontCatalog {
    /// Measures `text` styled by `attributes`.
    ///
    /// Without `max_width` lines only break at hard line breaks. Empty text measures
    /// [`TextMetrics::ZERO`].
    fn measure(
        &mut self,
        text: &str,
        attributes: &AttributeMap,
        max_width: Option<f32>,
    ) -> TextMetrics;

    /// Paints `text` into a transparent image of its [fitting size](TextMetrics::fitting_size).
    ///
    /// Returns `None` for empty text.
    fn rasterize(
        &mut self,
        text: &str,
        attributes: &AttributeMap,
        max_width: Option<f32>,
    ) -> Option<RasterImage>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_fits_in_nothing() {
        assert_eq!(TextMetrics::ZERO.fitting_size(Some(120.0)), Size::ZERO);
        assert_eq!(TextMetrics::default(), TextMetrics::ZERO);
    }

    #[test]
    fn fitting_size_adds_leading_and_fixes_width() {
        let metrics = TextMetrics {
            size: Size::new(80.0, 40.0),
            line_count: 2,
            leading: 6.0,
        };
        assert_eq!(metrics.fitting_size(None), Size::new(80.0, 46.0));
        assert_eq!(metrics.fitting_size(Some(0.0)), Size::new(80.0, 46.0));
        assert_eq!(metrics.fitting_size(Some(300.0)), Size::new(300.0, 46.0));
    }
}
