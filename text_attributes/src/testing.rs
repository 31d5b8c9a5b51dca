// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Test helpers.

use crate::backend::ParleyBackend;
use crate::font::{FontCatalog, FontMetrics, ResolvedFont};

/// A system backend, or `None` when the machine has no fonts to lay out with.
pub(crate) fn system_backend() -> Option<ParleyBackend> {
    let mut backend = ParleyBackend::new();
    let default = ResolvedFont::system_default(15.0);
    if backend.has_glyph(&default, 'A') {
        Some(backend)
    } else {
        log::warn!("no usable system font, skipping");
        None
    }
}

/// Character coverage of one fake face.
type Coverage = fn(char) -> bool;

/// In-memory catalog whose faces cover fixed character ranges.
pub(crate) struct FakeCatalog {
    families: Vec<(&'static str, Vec<Coverage>)>,
}

fn covers_latin(ch: char) -> bool {
    ch.is_ascii()
}

fn covers_cjk(ch: char) -> bool {
    ch.is_ascii() || matches!(ch as u32, 0x3000..=0x30FF | 0x4E00..=0x9FFF | 0xFF00..=0xFFEF)
}

impl FakeCatalog {
    pub(crate) const LATIN: &'static str = "Test Latin";
    pub(crate) const CJK: &'static str = "Test CJK";

    /// A Latin family with one face, and a CJK family whose second face is Latin only.
    pub(crate) fn latin_and_cjk() -> Self {
        Self {
            families: vec![
                (Self::LATIN, vec![covers_latin]),
                (Self::CJK, vec![covers_cjk, covers_latin]),
            ],
        }
    }

    fn faces_of(&self, name: &str) -> Option<&[Coverage]> {
        self.families
            .iter()
            .find(|(family, _)| *family == name)
            .map(|(_, faces)| faces.as_slice())
    }

    fn coverage(&self, font: &ResolvedFont) -> Coverage {
        font.family_name()
            .and_then(|name| self.faces_of(name))
            .and_then(|faces| faces.get(font.face_index().unwrap_or(0)))
            .copied()
            .unwrap_or(covers_latin)
    }
}

impl FontCatalog for FakeCatalog {
    fn family_names(&mut self) -> Vec<String> {
        let mut names: Vec<String> = self
            .families
            .iter()
            .map(|(name, _)| (*name).to_owned())
            .collect();
        names.sort();
        names
    }

    fn contains_family(&mut self, name: &str) -> bool {
        self.families.iter().any(|(family, _)| *family == name)
    }

    fn face_count(&mut self, family: &str) -> usize {
        self.faces_of(family).map_or(0, <[Coverage]>::len)
    }

    fn face_name(&mut self, font: &ResolvedFont) -> Option<String> {
        let family: String = font.family_name()?.split_whitespace().collect();
        Some(format!("{family}-{}", font.face_index().unwrap_or(0)))
    }

    fn has_glyph(&mut self, font: &ResolvedFont, ch: char) -> bool {
        self.coverage(font)(ch)
    }

    fn font_metrics(&mut self, font: &ResolvedFont) -> Option<FontMetrics> {
        let size = font.size();
        Some(FontMetrics {
            point_size: size,
            ascender: size * 0.8,
            descender: -size * 0.2,
            leading: 0.0,
            cap_height: Some(size * 0.7),
            x_height: Some(size * 0.5),
        })
    }
}
