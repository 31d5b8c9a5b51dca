// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use super::*;
use crate::paragraph::{LineBreakMode, TextAlignment};
use crate::testing::FakeCatalog;

const RED: Color = Color::from_rgba8(255, 0, 0, 255);
const BLUE: Color = Color::from_rgba8(0, 0, 255, 255);

fn decorated() -> StringAttributes {
    StringAttributes {
        strikethrough_color: Some(RED),
        strikethrough_style: UnderlineStyle::SINGLE,
        underline_color: Some(BLUE),
        underline_style: UnderlineStyle::DOUBLE,
        stroke_color: Some(RED),
        ..StringAttributes::default()
    }
}

#[test]
fn always_present_keys() {
    let map = StringAttributes::default().attribute_map(&mut FakeCatalog::latin_and_cjk());
    for key in [
        AttributeKey::Font,
        AttributeKey::ForegroundColor,
        AttributeKey::BackgroundColor,
        AttributeKey::Ligature,
        AttributeKey::BaselineOffset,
        AttributeKey::Kern,
        AttributeKey::Obliqueness,
        AttributeKey::Expansion,
        AttributeKey::ParagraphStyle,
    ] {
        assert!(map.contains(key), "{key:?} missing");
    }
    assert_eq!(map.color(AttributeKey::ForegroundColor), Some(DARK_TEXT));
    assert_eq!(map.color(AttributeKey::BackgroundColor), Some(CLEAR));
    assert_eq!(map.integer(AttributeKey::Ligature), Some(1));
    assert_eq!(map.number(AttributeKey::Kern), Some(0.0));
}

#[test]
fn ligature_is_stored_as_integer() {
    let attributes = StringAttributes {
        ligature: false,
        ..StringAttributes::default()
    };
    let map = attributes.attribute_map(&mut FakeCatalog::latin_and_cjk());
    assert_eq!(map.integer(AttributeKey::Ligature), Some(0));
}

#[test]
fn zero_stroke_width_drops_decorations_even_with_colors() {
    let map = decorated().attribute_map(&mut FakeCatalog::latin_and_cjk());
    for key in [
        AttributeKey::StrokeWidth,
        AttributeKey::StrokeColor,
        AttributeKey::StrikethroughColor,
        AttributeKey::StrikethroughStyle,
        AttributeKey::UnderlineColor,
        AttributeKey::UnderlineStyle,
    ] {
        assert!(!map.contains(key), "{key:?} should be gated by stroke width");
    }
}

#[test]
fn non_zero_stroke_width_emits_colored_decorations() {
    let attributes = StringAttributes {
        stroke_width: -3.0,
        ..decorated()
    };
    let map = attributes.attribute_map(&mut FakeCatalog::latin_and_cjk());
    assert_eq!(map.number(AttributeKey::StrokeWidth), Some(-3.0));
    assert_eq!(map.color(AttributeKey::StrokeColor), Some(RED));
    assert_eq!(map.color(AttributeKey::StrikethroughColor), Some(RED));
    assert_eq!(
        map.underline_style(AttributeKey::StrikethroughStyle),
        Some(UnderlineStyle::SINGLE)
    );
    assert_eq!(map.color(AttributeKey::UnderlineColor), Some(BLUE));
    assert_eq!(
        map.underline_style(AttributeKey::UnderlineStyle),
        Some(UnderlineStyle::DOUBLE)
    );
}

#[test]
fn decorations_without_colors_are_omitted() {
    let attributes = StringAttributes {
        stroke_width: 2.0,
        strikethrough_style: UnderlineStyle::THICK,
        underline_style: UnderlineStyle::SINGLE,
        ..StringAttributes::default()
    };
    let map = attributes.attribute_map(&mut FakeCatalog::latin_and_cjk());
    assert!(map.contains(AttributeKey::StrokeWidth));
    assert!(!map.contains(AttributeKey::StrokeColor));
    assert!(!map.contains(AttributeKey::StrikethroughStyle));
    assert!(!map.contains(AttributeKey::UnderlineStyle));
}

#[test]
fn shadow_requires_a_color() {
    let mut attributes = StringAttributes {
        shadow_offset: Size::new(1.0, 1.0),
        shadow_blur_radius: 2.0,
        ..StringAttributes::default()
    };
    let map = attributes.attribute_map(&mut FakeCatalog::latin_and_cjk());
    assert!(!map.contains(AttributeKey::Shadow));

    attributes.shadow_color = Some(BLUE);
    let map = attributes.attribute_map(&mut FakeCatalog::latin_and_cjk());
    assert_eq!(
        map.shadow(),
        Some(&Shadow {
            color: BLUE,
            offset: Size::new(1.0, 1.0),
            blur_radius: 2.0,
        })
    );
}

#[test]
fn japanese_fallback_attaches_language_hint() {
    let mut attributes = StringAttributes::default();
    let map = attributes.attribute_map(&mut FakeCatalog::latin_and_cjk());
    assert_eq!(map.language(), Some(JAPANESE_LANGUAGE));

    attributes.japanese_font_fallback = false;
    let map = attributes.attribute_map(&mut FakeCatalog::latin_and_cjk());
    assert_eq!(map.language(), None);
}

#[test]
fn unknown_font_degrades_to_system_font() {
    let attributes = StringAttributes {
        font_family_name: "Missing Family".to_owned(),
        font_size: 27.0,
        ..StringAttributes::default()
    };
    let map = attributes.attribute_map(&mut FakeCatalog::latin_and_cjk());
    let font = map.font().unwrap();
    assert!(font.is_system_default());
    assert_eq!(font.size(), 27.0);
}

#[test]
fn known_font_is_kept() {
    let attributes = StringAttributes {
        font_family_name: FakeCatalog::CJK.to_owned(),
        ..StringAttributes::default()
    };
    let map = attributes.attribute_map(&mut FakeCatalog::latin_and_cjk());
    assert_eq!(map.font().unwrap().family_name(), Some(FakeCatalog::CJK));
    assert_eq!(map.font().unwrap().size(), DEFAULT_FONT_SIZE);
}

#[test]
fn paragraph_style_is_embedded_by_value() {
    let mut attributes = StringAttributes::default();
    attributes.paragraph_style.text_alignment = TextAlignment::Center;
    attributes.paragraph_style.line_break_mode = LineBreakMode::ByCharWrapping;
    attributes.paragraph_style.head_indent = -4.0;
    let map = attributes.attribute_map(&mut FakeCatalog::latin_and_cjk());

    attributes.paragraph_style.text_alignment = TextAlignment::Trailing;
    let native = map.paragraph_style().unwrap();
    assert_eq!(native.alignment(), TextAlignment::Center);
    assert_eq!(native.line_break_mode(), LineBreakMode::ByCharWrapping);
    assert_eq!(native.head_indent(), -4.0);
}

#[test]
fn equal_attributes_give_equal_maps() {
    let a = decorated();
    let b = a.clone();
    assert_eq!(a, b);
    let mut fonts = FakeCatalog::latin_and_cjk();
    assert_eq!(a.attribute_map(&mut fonts), b.attribute_map(&mut fonts));
}
