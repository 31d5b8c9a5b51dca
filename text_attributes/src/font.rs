// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Font catalog access: resolution with fallback, glyph coverage and metrics.

/// Where a resolved font comes from.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontSource {
    /// A family present in the catalog.
    Named(String),
    /// The platform's default user interface family.
    SystemDefault,
}

/// A font family and point size, after checking the family against a catalog.
///
/// A font may also pin one face of its family; otherwise the family's default face is used.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedFont {
    source: FontSource,
    face: Option<usize>,
    size: f32,
}

impl ResolvedFont {
    /// A font from a named family known to exist.
    pub fn named(family: impl Into<String>, size: f32) -> Self {
        Self {
            source: FontSource::Named(family.into()),
            face: None,
            size,
        }
    }

    /// The face at `index` in a named family, in catalog order.
    pub fn face(family: impl Into<String>, index: usize, size: f32) -> Self {
        Self {
            source: FontSource::Named(family.into()),
            face: Some(index),
            size,
        }
    }

    /// The platform default font at `size`.
    pub fn system_default(size: f32) -> Self {
        Self {
            source: FontSource::SystemDefault,
            face: None,
            size,
        }
    }

    /// Index of the pinned face within the family, if any.
    pub fn face_index(&self) -> Option<usize> {
        self.face
    }

    /// Where this font comes from.
    pub fn source(&self) -> &FontSource {
        &self.source
    }

    /// The family name, or `None` for the system default font.
    pub fn family_name(&self) -> Option<&str> {
        match &self.source {
            FontSource::Named(name) => Some(name),
            FontSource::SystemDefault => None,
        }
    }

    /// Returns `true` if the requested family was unavailable or not given.
    pub fn is_system_default(&self) -> bool {
        self.source == FontSource::SystemDefault
    }

    /// Point size.
    pub fn size(&self) -> f32 {
        self.size
    }
}

/// Vertical metrics of a font at a given size.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FontMetrics {
    /// Point size the metrics were scaled to.
    pub point_size: f32,
    /// Distance from the baseline to the top of the tallest glyphs (positive).
    pub ascender: f32,
    /// Distance from the baseline to the bottom of the lowest glyphs (negative).
    pub descender: f32,
    /// Recommended extra gap between lines.
    pub leading: f32,
    /// Height of capital letters, when the font declares it.
    pub cap_height: Option<f32>,
    /// Height of lowercase letters, when the font declares it.
    pub x_height: Option<f32>,
}

impl FontMetrics {
    /// `ascender + |descender| + leading`.
    pub fn line_height(&self) -> f32 {
        self.ascender + self.descender.abs() + self.leading
    }
}

/// Access to the fonts installed in a text backend.
pub trait FontCatalog {
    /// Names of every family in the catalog, sorted.
    fn family_names(&mut self) -> Vec<String>;

    /// Returns `true` if `name` is a family of this catalog.
    fn contains_family(&mut self, name: &str) -> bool;

    /// Number of faces (weights, styles) in `family`; zero if it is unknown.
    fn face_count(&mut self, family: &str) -> usize;

    /// Every face of `family` at `size`, in catalog order.
    fn faces(&mut self, family: &str, size: f32) -> Vec<ResolvedFont> {
        (0..self.face_count(family))
            .map(|index| ResolvedFont::face(family, index, size))
            .collect()
    }

    /// The PostScript name of `font`, or `None` if it has none or cannot be read.
    fn face_name(&mut self, font: &ResolvedFont) -> Option<String>;

    /// Returns `true` if the character map of `font` contains `ch`.
    fn has_glyph(&mut self, font: &ResolvedFont, ch: char) -> bool;

    /// Returns `true` if the character map of `font` contains any character of `text`.
    fn has_any_glyph(&mut self, font: &ResolvedFont, text: &str) -> bool {
        text.chars().any(|ch| self.has_glyph(font, ch))
    }

    /// Metrics of `font` scaled to its size, or `None` if its data cannot be read.
    fn font_metrics(&mut self, font: &ResolvedFont) -> Option<FontMetrics>;

    /// Resolves `name` at `size`.
    ///
    /// An empty or unknown name is not an error: it resolves to the system default font at the
    /// same size.
    fn resolve_font(&mut self, name: &str, size: f32) -> ResolvedFont {
        if !name.is_empty() && self.contains_family(name) {
            ResolvedFont::named(name, size)
        } else {
            log::debug!("font family {name:?} unavailable, using the system default");
            ResolvedFont::system_default(size)
        }
    }
}

/// Decides whether a font is suitable for some script.
pub trait ScriptCoverage {
    /// Returns `true` if `font` is considered to support the script.
    fn supports(&self, fonts: &mut dyn FontCatalog, font: &ResolvedFont) -> bool;
}

/// Sentence probed by [`JapaneseSampleProbe`].
pub const JAPANESE_SAMPLE: &str =
    "あいうえお日本語が含まれているかどうかチェックします。確認です。";

/// Approximate Japanese support check.
///
/// A font passes if it maps any character of [`JAPANESE_SAMPLE`]. This is a heuristic, not a
/// coverage test: a Chinese font mapping the kanji passes, and so would a font carrying only the
/// ideographic full stop.
#[derive(Copy, Clone, Debug, Default)]
pub struct JapaneseSampleProbe;

impl ScriptCoverage for JapaneseSampleProbe {
    fn supports(&self, fonts: &mut dyn FontCatalog, font: &ResolvedFont) -> bool {
        fonts.has_any_glyph(font, JAPANESE_SAMPLE)
    }
}

/// Returns `true` if `font` seems to carry Japanese glyphs, see [`JapaneseSampleProbe`].
pub fn has_japanese_glyph(fonts: &mut dyn FontCatalog, font: &ResolvedFont) -> bool {
    JapaneseSampleProbe.supports(fonts, font)
}
