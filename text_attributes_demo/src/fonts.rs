// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::error::Error;
use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use text_attributes::{
    has_japanese_glyph, FontCatalog, FontMetrics, ParagraphStyle, ParleyBackend,
    PlainTextRenderer, ResolvedFont, StringAttributes,
};

const SAMPLE_TEXT: &str = "Sample Plain Text. Apple gjpqy\n\
                           サンプルの平文のテキストです。\n\
                           Sample で English と日本語を混ぜた行です。\n\
                           中華 Check 「底辺直卿蝕薩化」 gjpqy";

/// Size the Japanese coverage of each face is checked at.
const PROBE_SIZE: f32 = 12.0;

#[derive(Args, Debug)]
#[command(allow_negative_numbers = true)]
pub(crate) struct FontsArgs {
    /// List every family, not only those with Japanese glyphs.
    #[arg(long)]
    all: bool,
    /// Disables the Japanese language hint on the sample.
    #[arg(long)]
    no_fallback: bool,
    #[arg(long, default_value_t = 18.0)]
    font_size: f32,
    /// Width the sample is fitted in.
    #[arg(long, default_value_t = 300.0)]
    width: f32,
    /// Applied only when positive.
    #[arg(long, default_value_t = 0.0)]
    line_spacing: f32,
    /// Applied only when positive.
    #[arg(long, default_value_t = 0.0)]
    min_line_height: f32,
    /// Applied only when positive.
    #[arg(long, default_value_t = 0.0)]
    max_line_height: f32,
    /// Writes one preview PNG per listed family into this directory.
    #[arg(long)]
    preview_dir: Option<PathBuf>,
}

impl FontsArgs {
    fn attributes(&self, family: &str) -> StringAttributes {
        let positive = |value: f32| value.max(0.0);
        StringAttributes {
            font_family_name: family.to_owned(),
            font_size: self.font_size,
            japanese_font_fallback: !self.no_fallback,
            paragraph_style: ParagraphStyle {
                line_spacing: positive(self.line_spacing),
                minimum_line_height: positive(self.min_line_height),
                maximum_line_height: positive(self.max_line_height),
                ..ParagraphStyle::default()
            },
            ..StringAttributes::default()
        }
    }
}

/// One face of a family, checked once.
struct FaceEntry {
    index: usize,
    name: String,
    japanese: bool,
}

struct FamilyEntry {
    name: String,
    faces: Vec<FaceEntry>,
}

impl FamilyEntry {
    /// Faces shown with the current filter.
    fn listed(&self, all: bool) -> impl Iterator<Item = &FaceEntry> {
        self.faces.iter().filter(move |face| all || face.japanese)
    }
}

fn survey(backend: &mut ParleyBackend) -> Vec<FamilyEntry> {
    backend
        .family_names()
        .into_iter()
        .map(|name| {
            let faces = backend
                .faces(&name, PROBE_SIZE)
                .iter()
                .enumerate()
                .map(|(index, font)| FaceEntry {
                    index,
                    name: backend
                        .face_name(font)
                        .unwrap_or_else(|| format!("{name} #{index}")),
                    japanese: has_japanese_glyph(backend, font),
                })
                .collect();
            FamilyEntry { name, faces }
        })
        .collect()
}

/// `family: N, total: M, jp: K`, where the totals count faces.
fn header(entries: &[FamilyEntry]) -> String {
    let total: usize = entries.iter().map(|entry| entry.faces.len()).sum();
    let japanese: usize = entries.iter().map(|entry| entry.listed(false).count()).sum();
    format!(
        "family: {}, total: {total}, jp: {japanese}",
        entries.len()
    )
}

fn describe(metrics: &FontMetrics) -> String {
    let optional = |value: Option<f32>| value.map_or_else(|| "-".to_owned(), |v| format!("{v:.2}"));
    format!(
        "pointSize: {:.1}, ascender: {:.2}, descender: {:.2}, leading: {:.2}, capHeight: {}, \
         xHeight: {}, lineHeight: {:.2}",
        metrics.point_size,
        metrics.ascender,
        metrics.descender,
        metrics.leading,
        optional(metrics.cap_height),
        optional(metrics.x_height),
        metrics.line_height()
    )
}

fn preview_file_name(family: &str) -> String {
    let stem: String = family
        .chars()
        .map(|ch| if ch.is_alphanumeric() { ch } else { '_' })
        .collect();
    format!("{stem}.png")
}

pub(crate) fn run(args: &FontsArgs) -> Result<(), Box<dyn Error>> {
    let mut backend = ParleyBackend::new();
    let entries = survey(&mut backend);
    let mut out = std::io::stdout().lock();
    writeln!(out, "{}", header(&entries))?;

    if let Some(dir) = &args.preview_dir {
        std::fs::create_dir_all(dir)?;
    }

    for entry in &entries {
        let listed: Vec<&FaceEntry> = entry.listed(args.all).collect();
        if listed.is_empty() {
            continue;
        }
        writeln!(
            out,
            "familyName: {:?}, count: {}, jp: {}",
            entry.name,
            entry.faces.len(),
            entry.listed(false).count()
        )?;
        for face in listed {
            writeln!(out, "  fontName: {}", face.name)?;
            let font = ResolvedFont::face(&entry.name, face.index, args.font_size);
            if let Some(metrics) = backend.font_metrics(&font) {
                writeln!(out, "    {}", describe(&metrics))?;
            }
        }
        let renderer = PlainTextRenderer::with_text(SAMPLE_TEXT)
            .with_attributes(args.attributes(&entry.name))
            .with_width(args.width);
        let fitting = renderer.fitting_size(&mut backend);
        writeln!(out, "  fitting: {:.1}x{:.1}", fitting.width, fitting.height)?;

        if let Some(dir) = &args.preview_dir {
            if let Some(image) = renderer.image(&mut backend) {
                image.save_png(dir.join(preview_file_name(&entry.name)))?;
            }
        }
    }
    Ok(())
}
