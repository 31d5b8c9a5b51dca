// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use text_attributes::{
    parse_hex, Color, LineBreakMode, ParagraphStyle, ParleyBackend, PlainTextRenderer, Size,
    StringAttributes, TextAlignment, UnderlineStyle, WritingDirection, CLEAR, DARK_TEXT,
    DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE,
};

const SAMPLE_TEXT: &str =
    "1. jgpq 試験 Sample jgpq\n2. サンプル Sample jgpq Return\n3. jgpq てすと 試験 test";

const SHADOW_OFFSET: Size = Size::new(1.0, 1.0);
const SHADOW_BLUR_RADIUS: f32 = 2.0;

#[derive(Args, Debug)]
#[command(allow_negative_numbers = true)]
pub(crate) struct RenderArgs {
    /// Text to render; `\n` starts a new paragraph.
    #[arg(long)]
    text: Option<String>,
    /// Output PNG file.
    #[arg(long, short, default_value = "render.png")]
    output: PathBuf,
    /// Wrap width; zero or less leaves lines unconstrained.
    #[arg(long, default_value_t = 0.0)]
    width: f32,
    /// Pixels per layout unit.
    #[arg(long, default_value_t = 2.0)]
    scale: f32,

    /// Font family; empty selects the system font.
    #[arg(long, default_value = DEFAULT_FONT_FAMILY)]
    font: String,
    #[arg(long, default_value_t = DEFAULT_FONT_SIZE)]
    font_size: f32,
    /// Text color as `#rrggbb[aa]`.
    #[arg(long, value_parser = parse_hex)]
    text_color: Option<Color>,
    #[arg(long, value_parser = parse_hex)]
    background_color: Option<Color>,
    /// Enables a shadow offset by (1, 1) with a blur radius of 2.
    #[arg(long, value_parser = parse_hex)]
    shadow_color: Option<Color>,
    #[arg(long, value_parser = parse_hex)]
    stroke_color: Option<Color>,
    /// Percentage of the font size; negative also fills the glyphs.
    #[arg(long, default_value_t = 0.0)]
    stroke_width: f32,
    #[arg(long, value_parser = parse_hex)]
    strikethrough_color: Option<Color>,
    /// Raw underline style bits, e.g. 1 for single, 9 for double.
    #[arg(long, default_value_t = 0)]
    strikethrough_style: u32,
    #[arg(long, value_parser = parse_hex)]
    underline_color: Option<Color>,
    #[arg(long, default_value_t = 0)]
    underline_style: u32,
    #[arg(long)]
    no_ligature: bool,
    #[arg(long, default_value_t = 0.0)]
    baseline_offset: f32,
    #[arg(long, default_value_t = 0.0)]
    kern: f32,
    #[arg(long, default_value_t = 0.0)]
    obliqueness: f32,
    #[arg(long, default_value_t = 0.0)]
    expansion: f32,
    /// Disables the Japanese language hint.
    #[arg(long)]
    no_japanese_fallback: bool,

    /// 0 leading, 1 center, 2 trailing, 3 justified, 4 natural.
    #[arg(long, value_parser = parse_alignment, default_value = "4")]
    alignment: TextAlignment,
    #[arg(long, default_value_t = 0.0)]
    first_line_head_indent: f32,
    #[arg(long, default_value_t = 0.0)]
    head_indent: f32,
    #[arg(long, default_value_t = 0.0)]
    tail_indent: f32,
    /// 0 word wrapping, 1 char wrapping, 2 clipping, 3..=5 truncating head, tail, middle.
    #[arg(long, value_parser = parse_line_break_mode, default_value = "0")]
    line_break_mode: LineBreakMode,
    #[arg(long, default_value_t = 0.0)]
    line_height_multiple: f32,
    #[arg(long, default_value_t = 0.0)]
    max_line_height: f32,
    #[arg(long, default_value_t = 0.0)]
    min_line_height: f32,
    #[arg(long, default_value_t = 0.0)]
    line_spacing: f32,
    #[arg(long, default_value_t = 0.0)]
    paragraph_spacing: f32,
    #[arg(long, default_value_t = 0.0)]
    paragraph_spacing_before: f32,
    /// -1 natural, 0 left to right, 1 right to left.
    #[arg(long, value_parser = parse_writing_direction, default_value = "-1")]
    writing_direction: WritingDirection,
}

fn parse_alignment(raw: &str) -> Result<TextAlignment, String> {
    raw.parse()
        .ok()
        .and_then(TextAlignment::from_raw)
        .ok_or_else(|| format!("expected 0..=4, got {raw:?}"))
}

fn parse_line_break_mode(raw: &str) -> Result<LineBreakMode, String> {
    raw.parse()
        .ok()
        .and_then(LineBreakMode::from_raw)
        .ok_or_else(|| format!("expected 0..=5, got {raw:?}"))
}

fn parse_writing_direction(raw: &str) -> Result<WritingDirection, String> {
    raw.parse()
        .ok()
        .and_then(WritingDirection::from_raw)
        .ok_or_else(|| format!("expected -1, 0 or 1, got {raw:?}"))
}

impl RenderArgs {
    fn sample_text(&self) -> String {
        match self.text.as_deref() {
            Some(text) if !text.is_empty() => text.replace("\\n", "\n"),
            _ => SAMPLE_TEXT.to_owned(),
        }
    }

    fn attributes(&self) -> StringAttributes {
        StringAttributes {
            font_family_name: self.font.clone(),
            font_size: self.font_size.round(),
            text_color: self.text_color.unwrap_or(DARK_TEXT),
            background_color: self.background_color.unwrap_or(CLEAR),
            shadow_color: self.shadow_color,
            shadow_offset: SHADOW_OFFSET,
            shadow_blur_radius: SHADOW_BLUR_RADIUS,
            stroke_color: self.stroke_color,
            stroke_width: self.stroke_width,
            ligature: !self.no_ligature,
            baseline_offset: self.baseline_offset,
            kern: self.kern,
            obliqueness: self.obliqueness,
            expansion: self.expansion,
            strikethrough_color: self.strikethrough_color,
            strikethrough_style: UnderlineStyle::from_bits_truncate(self.strikethrough_style),
            underline_color: self.underline_color,
            underline_style: UnderlineStyle::from_bits_truncate(self.underline_style),
            paragraph_style: ParagraphStyle {
                text_alignment: self.alignment,
                first_line_head_indent: self.first_line_head_indent,
                head_indent: self.head_indent,
                tail_indent: self.tail_indent,
                line_break_mode: self.line_break_mode,
                line_height_multiple: self.line_height_multiple,
                maximum_line_height: self.max_line_height,
                minimum_line_height: self.min_line_height,
                line_spacing: self.line_spacing,
                paragraph_spacing: self.paragraph_spacing,
                paragraph_spacing_before: self.paragraph_spacing_before,
                base_writing_direction: self.writing_direction,
            },
            japanese_font_fallback: !self.no_japanese_fallback,
        }
    }
}

pub(crate) fn run(args: &RenderArgs) -> Result<(), Box<dyn Error>> {
    let mut backend = ParleyBackend::new();
    backend.set_scale(args.scale);

    let renderer = PlainTextRenderer::with_text(args.sample_text())
        .with_attributes(args.attributes())
        .with_width(args.width);
    let rect = renderer.bounding_rect(&mut backend);
    let fitting = renderer.fitting_size(&mut backend);
    log::info!(
        "bounding rect: {}x{}, fitting size: {}x{}",
        rect.width,
        rect.height,
        fitting.width,
        fitting.height
    );

    match renderer.image(&mut backend) {
        Some(image) => image.save_png(&args.output)?,
        None => log::warn!("nothing to render"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser, Debug)]
    struct Harness {
        #[command(flatten)]
        args: RenderArgs,
    }

    fn parse(argv: &[&str]) -> RenderArgs {
        let argv = std::iter::once("render").chain(argv.iter().copied());
        Harness::try_parse_from(argv).unwrap().args
    }

    #[test]
    fn defaults_match_the_renderer_screen() {
        let args = parse(&[]);
        assert_eq!(args.sample_text(), SAMPLE_TEXT);
        let attributes = args.attributes();
        assert_eq!(attributes.font_family_name, DEFAULT_FONT_FAMILY);
        assert_eq!(attributes.shadow_color, None);
        assert_eq!(attributes.shadow_offset, SHADOW_OFFSET);
        assert_eq!(attributes.shadow_blur_radius, SHADOW_BLUR_RADIUS);
        assert!(attributes.ligature);
        assert!(attributes.japanese_font_fallback);
        assert_eq!(attributes.paragraph_style, ParagraphStyle::default());
    }

    #[test]
    fn flags_reach_the_attributes() {
        let args = parse(&[
            "--text",
            "one\\ntwo",
            "--font-size",
            "20.4",
            "--stroke-width",
            "-3",
            "--underline-color",
            "#0000ff",
            "--underline-style",
            "9",
            "--alignment",
            "1",
            "--writing-direction",
            "1",
            "--no-ligature",
        ]);
        assert_eq!(args.sample_text(), "one\ntwo");
        let attributes = args.attributes();
        assert_eq!(attributes.font_size, 20.0);
        assert_eq!(attributes.stroke_width, -3.0);
        assert_eq!(
            attributes.underline_color,
            Some(Color::from_rgba8(0, 0, 255, 255))
        );
        assert_eq!(attributes.underline_style, UnderlineStyle::DOUBLE);
        assert_eq!(
            attributes.paragraph_style.text_alignment,
            TextAlignment::Center
        );
        assert_eq!(
            attributes.paragraph_style.base_writing_direction,
            WritingDirection::RightToLeft
        );
        assert!(!attributes.ligature);
    }

    #[test]
    fn raw_values_are_validated() {
        for (flag, value) in [
            ("--alignment", "7"),
            ("--alignment", "left"),
            ("--line-break-mode", "6"),
            ("--writing-direction", "2"),
        ] {
            let argv = ["render", flag, value];
            assert!(Harness::try_parse_from(argv).is_err(), "{flag} {value}");
        }
        let argv = ["render", "--text-color", "red"];
        assert!(Harness::try_parse_from(argv).is_err());
    }
}
