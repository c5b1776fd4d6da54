//! Integration tests for fos-text
//!
//! Logical strings in, display strings out.

use fos_text::arabic::{LengthPolicy, ShapingError, ShapingOptions};
use fos_text::bidi::{Level, ParagraphDirection};
use fos_text::*;

fn plain() -> TextConfig {
    TextConfig {
        shaping: None,
        ..Default::default()
    }
}

// ============================================================================
// REORDERING
// ============================================================================

#[test]
fn test_ltr_with_hebrew() {
    assert_eq!(
        display_text("abc \u{05D0}\u{05D1}", &plain()).unwrap(),
        "abc \u{05D1}\u{05D0}"
    );
}

#[test]
fn test_numbers_keep_order_in_rtl() {
    assert_eq!(
        display_text("\u{05D0} 123", &plain()).unwrap(),
        "123 \u{05D0}"
    );
}

#[test]
fn test_forced_direction() {
    let config = TextConfig {
        direction: ParagraphDirection::Rtl,
        ..plain()
    };
    let paragraphs = display_paragraphs("ab \u{05D0}", &config).unwrap();
    assert_eq!(paragraphs[0].base_level, Level::RTL);
    assert_eq!(paragraphs[0].text, "\u{05D0} ab");
}

#[test]
fn test_paragraphs_resolved_separately() {
    let paragraphs = display_paragraphs("\u{05D0}\u{05D1}\nabc", &plain()).unwrap();
    assert_eq!(paragraphs.len(), 2);
    assert_eq!(paragraphs[0].text, "\u{05D1}\u{05D0}\n");
    assert_eq!(paragraphs[0].base_level, Level::RTL);
    assert_eq!(paragraphs[1].text, "abc");
    assert_eq!(paragraphs[1].base_level, Level::LTR);

    assert_eq!(
        display_text("a\r\nb", &plain()).unwrap(),
        "a\r\nb"
    );
}

#[test]
fn test_empty_text() {
    assert!(display_paragraphs("", &plain()).unwrap().is_empty());
    assert_eq!(display_text("", &plain()).unwrap(), "");
}

// ============================================================================
// CONTROLS AND MIRRORING
// ============================================================================

#[test]
fn test_isolate_controls() {
    let text = "a\u{2067}\u{05D0}\u{05D1}\u{2069}b";
    assert_eq!(display_text(text, &plain()).unwrap(), "a\u{05D1}\u{05D0}b");

    let keep = TextConfig {
        strip_controls: false,
        ..plain()
    };
    assert_eq!(
        display_text(text, &keep).unwrap(),
        "a\u{2067}\u{05D1}\u{05D0}\u{2069}b"
    );
}

#[test]
fn test_brackets_mirrored() {
    let text = "\u{05D0}(\u{05D1})";
    assert_eq!(display_text(text, &plain()).unwrap(), "(\u{05D1})\u{05D0}");

    let unmirrored = TextConfig {
        mirror: false,
        ..plain()
    };
    assert_eq!(display_text(text, &unmirrored).unwrap(), ")\u{05D1}(\u{05D0}");
}

// ============================================================================
// SHAPING
// ============================================================================

#[test]
fn test_shaped_arabic_word() {
    // Seen, lam, alef, meem
    let display = display_text("\u{0633}\u{0644}\u{0627}\u{0645}", &TextConfig::default()).unwrap();
    assert_eq!(display, "\u{FEE1}\u{FEFC}\u{FEB3}");
}

#[test]
fn test_fixed_length_shaping() {
    let config = TextConfig {
        shaping: Some(ShapingOptions {
            length: LengthPolicy::FixedSpacesNear,
            ..Default::default()
        }),
        ..Default::default()
    };
    let paragraphs = display_paragraphs("\u{0644}\u{0627} ", &config).unwrap();
    assert_eq!(paragraphs[0].base_level, Level::RTL);
    assert_eq!(paragraphs[0].text, "  \u{FEFB}");

    assert!(matches!(
        display_text("\u{0644}\u{0627}", &config),
        Err(TextError::Shaping(ShapingError::NoSpaceForExpansion { .. }))
    ));
}

#[test]
fn test_invalid_shaping_options() {
    let config = TextConfig {
        shaping: Some(ShapingOptions {
            letters: fos_text::arabic::LetterShaping::None,
            seen: fos_text::arabic::SeenExpansion::TwoCellNear,
            ..Default::default()
        }),
        ..Default::default()
    };
    assert!(matches!(
        display_text("abc", &config),
        Err(TextError::Shaping(_))
    ));
}
