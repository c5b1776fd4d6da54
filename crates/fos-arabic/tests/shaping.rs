//! Integration tests for fos-arabic
//!
//! Shapes and de-shapes whole strings through the public API.

use fos_arabic::*;

fn units(text: &str) -> Vec<u16> {
    text.encode_utf16().collect()
}

fn shaper(options: ShapingOptions) -> ArabicShaper {
    ArabicShaper::new(options).unwrap()
}

fn with_length(letters: LetterShaping, length: LengthPolicy) -> ArabicShaper {
    shaper(ShapingOptions {
        letters,
        length,
        ..Default::default()
    })
}

const LAM_ALEF: &str = "\u{0644}\u{0627}";

// ============================================================================
// LETTERS
// ============================================================================

#[test]
fn test_word_forms() {
    // Beh, seen, meem: initial, medial, final
    let shaped = ArabicShaper::default()
        .shape_to_vec(&units("\u{0628}\u{0633}\u{0645}"))
        .unwrap();
    assert_eq!(shaped, vec![0xFE91, 0xFEB4, 0xFEE2]);
}

#[test]
fn test_words_separated_by_space() {
    let shaped = ArabicShaper::default()
        .shape_to_vec(&units("\u{0628}\u{0628} \u{0628}"))
        .unwrap();
    assert_eq!(shaped, vec![0xFE91, 0xFE90, 0x0020, 0xFE8F]);
}

#[test]
fn test_latin_untouched() {
    let shaper = ArabicShaper::default();
    assert_eq!(shaper.shape_str("abc 123").unwrap(), "abc 123");
    assert_eq!(shaper.shape_str("").unwrap(), "");
}

#[test]
fn test_presentation_forms_are_reshaped() {
    // Two isolated beh forms join when shaped again
    let shaped = ArabicShaper::default()
        .shape_to_vec(&[0xFE8F, 0xFE8F])
        .unwrap();
    assert_eq!(shaped, vec![0xFE91, 0xFE90]);
}

#[test]
fn test_extended_letters() {
    // Peh peh
    let shaped = ArabicShaper::default()
        .shape_to_vec(&units("\u{067E}\u{067E}"))
        .unwrap();
    assert_eq!(shaped, vec![0xFB58, 0xFB57]);
}

#[test]
fn test_tatweel_keeps_joining() {
    let shaped = ArabicShaper::default()
        .shape_to_vec(&units("\u{0628}\u{0640}"))
        .unwrap();
    assert_eq!(shaped, vec![0xFE91, 0x0640]);
}

#[test]
fn test_visual_input() {
    // Visual order holds the alef left of the lam
    let visual = shaper(ShapingOptions {
        direction: TextDirection::VisualLtr,
        length: LengthPolicy::FixedSpacesNear,
        ..Default::default()
    });
    assert_eq!(
        visual.shape_to_vec(&[0x0020, 0x0627, 0x0644]).unwrap(),
        vec![0x0020, 0x0020, 0xFEFB]
    );
}

// ============================================================================
// LAM-ALEF
// ============================================================================

#[test]
fn test_lam_alef_grow_shrink() {
    let shaper = ArabicShaper::default();
    assert_eq!(shaper.shape_to_vec(&units(LAM_ALEF)).unwrap(), vec![0xFEFB]);
    assert_eq!(shaper.required_len(&units(LAM_ALEF)).unwrap(), 1);

    // Final form after a joining letter
    assert_eq!(
        shaper
            .shape_to_vec(&units("\u{0641}\u{0644}\u{0627}"))
            .unwrap(),
        vec![0xFED3, 0xFEFC]
    );
}

#[test]
fn test_lam_alef_fixed_spaces() {
    let near = with_length(LetterShaping::Shape, LengthPolicy::FixedSpacesNear);
    assert_eq!(
        near.shape_to_vec(&units("\u{0644}\u{0627} ")).unwrap(),
        vec![0xFEFB, 0x0020, 0x0020]
    );
    // A space logically before the lam also serves
    assert_eq!(
        near.shape_to_vec(&units(" \u{0644}\u{0627}")).unwrap(),
        vec![0x0020, 0xFEFB, 0x0020]
    );

    let at_end = with_length(LetterShaping::Shape, LengthPolicy::FixedSpacesAtEnd);
    assert_eq!(
        at_end.shape_to_vec(&units("\u{0644}\u{0627}\u{0628}")).unwrap(),
        vec![0xFEFB, 0xFE8F, 0x0020]
    );

    let at_beginning = with_length(LetterShaping::Shape, LengthPolicy::FixedSpacesAtBeginning);
    assert_eq!(
        at_beginning.shape_to_vec(&units(LAM_ALEF)).unwrap(),
        vec![0x0020, 0xFEFB]
    );
}

#[test]
fn test_lam_alef_round_trip() {
    let shape = with_length(LetterShaping::Shape, LengthPolicy::FixedSpacesNear);
    let unshape = with_length(LetterShaping::Unshape, LengthPolicy::FixedSpacesNear);

    let source = units("\u{0628}\u{0644}\u{0627} \u{0628}");
    let shaped = shape.shape_to_vec(&source).unwrap();
    assert_eq!(shaped.len(), source.len());
    assert_eq!(unshape.shape_to_vec(&shaped).unwrap(), source);
}

#[test]
fn test_lam_alef_near_without_space() {
    let near = with_length(LetterShaping::Shape, LengthPolicy::FixedSpacesNear);
    assert_eq!(
        near.shape_to_vec(&units(LAM_ALEF)).unwrap_err(),
        ShapingError::NoSpaceForExpansion {
            policy: LengthPolicy::FixedSpacesNear,
            required: 1,
            available: 0,
        }
    );
    assert!(near.required_len(&units(LAM_ALEF)).is_err());

    // Two ligatures cannot share the one space between them
    let mut dest = [0u16; 8];
    assert_eq!(
        near.shape(&units("\u{0644}\u{0627} \u{0644}\u{0627}"), &mut dest)
            .unwrap_err(),
        ShapingError::NoSpaceForExpansion {
            policy: LengthPolicy::FixedSpacesNear,
            required: 2,
            available: 1,
        }
    );
    assert_eq!(dest, [0u16; 8]);
}

#[test]
fn test_unshape_without_space() {
    let near = with_length(LetterShaping::Unshape, LengthPolicy::FixedSpacesNear);
    let err = near.shape_to_vec(&[0xFEFB]).unwrap_err();
    assert_eq!(
        err,
        ShapingError::NoSpaceForExpansion {
            policy: LengthPolicy::FixedSpacesNear,
            required: 1,
            available: 0,
        }
    );

    let auto = with_length(LetterShaping::Unshape, LengthPolicy::FixedSpacesAuto);
    assert!(matches!(
        auto.shape_to_vec(&[0xFEFB]),
        Err(ShapingError::NoSpaceForExpansion { .. })
    ));
}

// ============================================================================
// UNSHAPING
// ============================================================================

#[test]
fn test_unshape_grow() {
    let unshape = with_length(LetterShaping::Unshape, LengthPolicy::GrowShrink);
    assert_eq!(
        unshape.shape_to_vec(&[0xFED3, 0xFEFC]).unwrap(),
        units("\u{0641}\u{0644}\u{0627}")
    );
    assert_eq!(unshape.shape_str("\u{FE91}\u{FE90}").unwrap(), "\u{0628}\u{0628}");
}

#[test]
fn test_unshape_at_end() {
    let unshape = with_length(LetterShaping::Unshape, LengthPolicy::FixedSpacesAtEnd);
    assert_eq!(
        unshape.shape_to_vec(&[0xFEFB, 0xFE8F, 0x0020]).unwrap(),
        units("\u{0644}\u{0627}\u{0628}")
    );
}

// ============================================================================
// TASHKEEL
// ============================================================================

#[test]
fn test_tashkeel_policies() {
    let text = units("\u{0628}\u{064E}\u{0628}");
    let with_tashkeel = |letters, tashkeel| {
        shaper(ShapingOptions {
            letters,
            tashkeel,
            ..Default::default()
        })
        .shape_to_vec(&text)
        .unwrap()
    };

    assert_eq!(
        with_tashkeel(LetterShaping::Shape, TashkeelPolicy::Keep),
        vec![0xFE91, 0xFE77, 0xFE90]
    );
    assert_eq!(
        with_tashkeel(LetterShaping::ShapeTashkeelIsolated, TashkeelPolicy::Keep),
        vec![0xFE91, 0xFE76, 0xFE90]
    );
    assert_eq!(
        with_tashkeel(LetterShaping::Shape, TashkeelPolicy::ReplaceByTatweel),
        vec![0xFE91, 0x0640, 0xFE90]
    );
    assert_eq!(
        with_tashkeel(LetterShaping::Shape, TashkeelPolicy::Resize),
        vec![0xFE91, 0xFE90]
    );
    assert_eq!(
        with_tashkeel(LetterShaping::Shape, TashkeelPolicy::AtEnd),
        vec![0xFE91, 0xFE90, 0x0020]
    );
    assert_eq!(
        with_tashkeel(LetterShaping::Shape, TashkeelPolicy::AtBeginning),
        vec![0x0020, 0xFE91, 0xFE90]
    );
}

#[test]
fn test_shadda_survives_removal() {
    let resize = shaper(ShapingOptions {
        tashkeel: TashkeelPolicy::Resize,
        ..Default::default()
    });
    assert_eq!(
        resize.shape_to_vec(&units("\u{0628}\u{0651}\u{0628}")).unwrap(),
        vec![0xFE91, 0xFE7D, 0xFE90]
    );
}

// ============================================================================
// TAILS
// ============================================================================

#[test]
fn test_seen_tail_round_trip() {
    let options = ShapingOptions {
        seen: SeenExpansion::TwoCellNear,
        ..Default::default()
    };
    let shaped = shaper(options).shape_to_vec(&units("\u{0633} ")).unwrap();
    assert_eq!(shaped, vec![0xFEB1, 0x200B]);

    let unshape = shaper(ShapingOptions {
        letters: LetterShaping::Unshape,
        ..options
    });
    assert_eq!(unshape.shape_to_vec(&shaped).unwrap(), units("\u{0633} "));
}

#[test]
fn test_yeh_hamza_round_trip() {
    let options = ShapingOptions {
        yeh_hamza: YehHamzaExpansion::TwoCellNear,
        ..Default::default()
    };
    let shaped = shaper(options).shape_to_vec(&units("\u{0626} ")).unwrap();
    assert_eq!(shaped, vec![0xFEEF, 0xFE80]);

    let unshape = shaper(ShapingOptions {
        letters: LetterShaping::Unshape,
        ..options
    });
    assert_eq!(unshape.shape_to_vec(&shaped).unwrap(), units("\u{0626} "));
}

// ============================================================================
// DIGITS
// ============================================================================

#[test]
fn test_digit_substitution() {
    let digits = |digits, digit_type| {
        shaper(ShapingOptions {
            letters: LetterShaping::None,
            digits,
            digit_type,
            ..Default::default()
        })
    };

    assert_eq!(
        digits(DigitShaping::EnToAn, DigitType::ArabicIndic)
            .shape_to_vec(&units("0123456789"))
            .unwrap(),
        (0x0660..=0x0669).collect::<Vec<u16>>()
    );
    assert_eq!(
        digits(DigitShaping::EnToAn, DigitType::ExtendedArabicIndic)
            .shape_to_vec(&units("0123456789"))
            .unwrap(),
        (0x06F0..=0x06F9).collect::<Vec<u16>>()
    );
    assert_eq!(
        digits(DigitShaping::AnToEn, DigitType::ArabicIndic)
            .shape_str("\u{0664}\u{0662}")
            .unwrap(),
        "42"
    );
}

#[test]
fn test_contextual_digits() {
    let contextual = |digits| {
        shaper(ShapingOptions {
            letters: LetterShaping::None,
            digits,
            ..Default::default()
        })
    };

    assert_eq!(
        contextual(DigitShaping::EnToAnInitLr)
            .shape_str("a 1 \u{0628} 2")
            .unwrap(),
        "a 1 \u{0628} \u{0662}"
    );
    assert_eq!(
        contextual(DigitShaping::EnToAnInitAl)
            .shape_str("1 a 2")
            .unwrap(),
        "\u{0661} a 2"
    );
}

// ============================================================================
// OPTIONS
// ============================================================================

#[test]
fn test_bitmask_options() {
    assert!(matches!(
        ShapingOptions::from_bits(0xA0),
        Err(ShapingError::InvalidOptions(_))
    ));
    // Replace by tatweel with unshape
    assert!(ShapingOptions::from_bits(0x10 | 0x000C_0000).is_err());

    let options = ShapingOptions::from_bits(0x08 | 0x20).unwrap();
    let shaper = ArabicShaper::new(options).unwrap();
    assert_eq!(shaper.shape_str("\u{0628}1").unwrap(), "\u{FE8F}\u{0661}");
}

// ============================================================================
// BUFFERS
// ============================================================================

#[test]
fn test_preflight_and_small_buffer() {
    let near = with_length(LetterShaping::Shape, LengthPolicy::FixedSpacesNear);
    let source = units("\u{0644}\u{0627} ");

    assert_eq!(near.shape(&source, &mut []).unwrap(), 3);

    let mut small = [0u16; 2];
    assert_eq!(
        near.shape(&source, &mut small).unwrap_err(),
        ShapingError::BufferTooSmall {
            required: 3,
            available: 2
        }
    );

    let mut dest = [0u16; 4];
    assert_eq!(near.shape(&source, &mut dest).unwrap(), 3);
    assert_eq!(dest, [0xFEFB, 0x0020, 0x0020, 0]);
}

#[test]
fn test_shape_range() {
    let shaper = ArabicShaper::default();
    let source = units("a\u{0628}\u{0628}b");
    let mut dest = [0u16; 4];

    assert_eq!(shaper.shape_range(&source, 1..3, &mut dest, 2..4).unwrap(), 2);
    assert_eq!(dest, [0, 0, 0xFE91, 0xFE90]);

    assert_eq!(
        shaper
            .shape_range(&source, 0..5, &mut dest, 0..4)
            .unwrap_err(),
        ShapingError::InvalidRange {
            what: "source",
            start: 0,
            end: 5,
            len: 4
        }
    );
}

#[test]
fn test_in_place() {
    let mut buffer = units(LAM_ALEF);
    assert_eq!(
        ArabicShaper::default().shape_in_place(&mut buffer),
        Err(ShapingError::InPlaceResize)
    );

    let digits = shaper(ShapingOptions {
        letters: LetterShaping::None,
        digits: DigitShaping::EnToAn,
        ..Default::default()
    });
    let mut buffer = units("12");
    assert_eq!(digits.shape_in_place(&mut buffer).unwrap(), 2);
    assert_eq!(buffer, vec![0x0661, 0x0662]);
}
