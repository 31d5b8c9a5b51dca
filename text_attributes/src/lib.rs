// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text Attributes is a small rich-text styling layer on top of Parley.
//!
//! A [`StringAttributes`] value describes character level formatting (font, colors, shadow,
//! stroke, decorations, spacing) and embeds a [`ParagraphStyle`]. Lowering it with
//! [`StringAttributes::attribute_map`] gives an [`AttributeMap`] that a [`TextBackend`] measures
//! and rasterizes. [`PlainTextRenderer`] bundles the three steps for a single text.
//!
//! ```no_run
//! use text_attributes::{ParleyBackend, PlainTextRenderer, StringAttributes};
//!
//! let mut backend = ParleyBackend::new();
//! let renderer = PlainTextRenderer::with_text("Sample テキスト")
//!     .with_attributes(StringAttributes {
//!         font_size: 24.0,
//!         ..StringAttributes::default()
//!     })
//!     .with_width(300.0);
//! println!("{:?}", renderer.fitting_size(&mut backend));
//! if let Some(image) = renderer.image(&mut backend) {
//!     image.save_png("sample.png").unwrap();
//! }
//! ```
//!
//! Fonts are resolved leniently: an unknown family is not an error, it becomes the system font
//! at the requested size.
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]

mod attribute_map;
mod attributes;
mod backend;
mod color;
mod error;
mod font;
mod geometry;
mod image;
mod paragraph;
mod renderer;

#[cfg(test)]
mod testing;

pub use crate::attribute_map::{AttributeKey, AttributeMap, AttributeValue};
pub use crate::attributes::{
    Shadow, StringAttributes, UnderlineStyle, DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE,
    JAPANESE_LANGUAGE,
};
pub use crate::backend::{ParleyBackend, TextBackend, TextMetrics};
pub use crate::color::{parse_hex, Color, ColorBrush, ParseColorError, CLEAR, DARK_TEXT};
pub use crate::error::{Error, ErrorKind};
pub use crate::font::{
    has_japanese_glyph, FontCatalog, FontMetrics, FontSource, JapaneseSampleProbe,
    ResolvedFont, ScriptCoverage, JAPANESE_SAMPLE,
};
pub use crate::geometry::{Rect, Size};
pub use crate::image::RasterImage;
pub use crate::paragraph::{
    LineBreakMode, NativeParagraphStyle, ParagraphStyle, TextAlignment, WritingDirection,
};
pub use crate::renderer::PlainTextRenderer;
