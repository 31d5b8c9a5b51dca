// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Offscreen rendering of plain text with a [`StringAttributes`].

use crate::attributes::StringAttributes;
use crate::backend::TextBackend;
use crate::geometry::{Rect, Size};
use crate::image::RasterImage;

/// A render request: text, attributes and an optional fitting width.
///
/// Nothing is cached. Each query maps the attributes again and lays the text out from scratch.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlainTextRenderer {
    /// The text to render; `None` renders nothing.
    pub text: Option<String>,
    /// Styling applied to the whole text.
    pub attributes: StringAttributes,
    /// Width to wrap and fit in; zero or negative leaves lines unconstrained.
    pub width: f32,
}

impl PlainTextRenderer {
    /// An empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// A request for `text` with default attributes.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Replaces the attributes.
    pub fn with_attributes(mut self, attributes: StringAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Sets the fitting width.
    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    fn max_width(&self) -> Option<f32> {
        (self.width > 0.0).then_some(self.width)
    }

    /// Bounds of the laid out text, at the origin.
    pub fn bounding_rect(&self, backend: &mut impl TextBackend) -> Rect {
        let Some(text) = self.text.as_deref() else {
            return Rect::ZERO;
        };
        let map = self.attributes.attribute_map(backend);
        Rect::from_size(backend.measure(text, &map, self.max_width()).size)
    }

    /// Size of a view fitting the text, including its vertical inset.
    pub fn fitting_size(&self, backend: &mut impl TextBackend) -> Size {
        let Some(text) = self.text.as_deref() else {
            return Size::ZERO;
        };
        let map = self.attributes.attribute_map(backend);
        let max_width = self.max_width();
        backend.measure(text, &map, max_width).fitting_size(max_width)
    }

    /// The text painted on a transparent background, or `None` if there is no text.
    pub fn image(&self, backend: &mut impl TextBackend) -> Option<RasterImage> {
        let text = self.text.as_deref()?;
        let map = self.attributes.attribute_map(backend);
        backend.rasterize(text, &map, self.max_width())
    }
}
