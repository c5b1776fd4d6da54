//! Shaping configuration

use serde::{Deserialize, Serialize};

use crate::{Result, ShapingError};

/// Where lam-alef spaces are taken from or given back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LengthPolicy {
    /// Output length changes with ligatures
    #[default]
    GrowShrink,
    /// Length kept; the space next to each ligature is used
    FixedSpacesNear,
    /// Length kept; spaces collected at the end of the text
    FixedSpacesAtEnd,
    /// Length kept; spaces collected at the beginning of the text
    FixedSpacesAtBeginning,
    /// Length kept; end, then beginning, then near
    FixedSpacesAuto,
}

/// Order of the text in the buffers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextDirection {
    /// Logical (memory) order
    #[default]
    Logical,
    /// Visual order, left to right
    VisualLtr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LetterShaping {
    /// Letters left alone
    None,
    /// Select presentation forms, tashkeel shaped in context
    #[default]
    Shape,
    /// Select presentation forms, tashkeel always isolated
    ShapeTashkeelIsolated,
    /// Presentation forms back to base letters
    Unshape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DigitShaping {
    #[default]
    None,
    /// European digits to Arabic-Indic
    EnToAn,
    /// Arabic-Indic digits to European
    AnToEn,
    /// European digits to Arabic-Indic after an Arabic letter, LTR context
    /// before the first strong character
    EnToAnInitLr,
    /// Same, but Arabic context before the first strong character
    EnToAnInitAl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DigitType {
    /// U+0660..U+0669
    #[default]
    ArabicIndic,
    /// U+06F0..U+06F9
    ExtendedArabicIndic,
}

/// Treatment of tashkeel (diacritics) while shaping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TashkeelPolicy {
    #[default]
    Keep,
    /// Removed, spaces collected at the beginning
    AtBeginning,
    /// Removed, spaces collected at the end
    AtEnd,
    /// Removed, text shrinks
    Resize,
    /// Connected tashkeel becomes tatweel, isolated tashkeel a space
    ReplaceByTatweel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SeenExpansion {
    #[default]
    Off,
    /// Seen-family letters use the following space for their tail
    TwoCellNear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum YehHamzaExpansion {
    #[default]
    Off,
    /// Yeh-hamza splits into yeh and hamza using the following space
    TwoCellNear,
}

/// What "beginning" and "end" refer to for fixed-length spaces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpaceReference {
    /// Relative to the text direction
    #[default]
    Direction,
    /// Relative to the buffer start and end
    TextBeginEnd,
}

/// Glyph used for the seen-family tail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TailGlyph {
    /// U+200B
    #[default]
    ZeroWidthSpace,
    /// U+FE73
    NewUnicode,
}

impl TailGlyph {
    pub fn code_unit(self) -> u16 {
        match self {
            TailGlyph::ZeroWidthSpace => 0x200B,
            TailGlyph::NewUnicode => 0xFE73,
        }
    }
}

/// Arabic shaping options
///
/// Each axis is independent; [`ShapingOptions::validate`] rejects the
/// combinations that make no sense together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapingOptions {
    pub length: LengthPolicy,
    pub direction: TextDirection,
    pub letters: LetterShaping,
    pub digits: DigitShaping,
    pub digit_type: DigitType,
    pub tashkeel: TashkeelPolicy,
    pub seen: SeenExpansion,
    pub yeh_hamza: YehHamzaExpansion,
    pub space_reference: SpaceReference,
    pub tail: TailGlyph,
}

// Classic bitmask layout
const LENGTH_MASK: u32 = 0x0001_0003;
const DIRECTION_VISUAL_LTR: u32 = 0x4;
const LETTERS_MASK: u32 = 0x18;
const DIGITS_MASK: u32 = 0xE0;
const DIGIT_TYPE_MASK: u32 = 0x300;
const TASHKEEL_MASK: u32 = 0x000E_0000;
const SEEN_MASK: u32 = 0x0070_0000;
const YEH_HAMZA_MASK: u32 = 0x0380_0000;
const SPACES_TEXT_BEGIN_END: u32 = 0x0400_0000;
const TAIL_NEW_UNICODE: u32 = 0x0800_0000;

const KNOWN_BITS: u32 = LENGTH_MASK
    | DIRECTION_VISUAL_LTR
    | LETTERS_MASK
    | DIGITS_MASK
    | DIGIT_TYPE_MASK
    | TASHKEEL_MASK
    | SEEN_MASK
    | YEH_HAMZA_MASK
    | SPACES_TEXT_BEGIN_END
    | TAIL_NEW_UNICODE;

fn invalid(axis: &str, value: u32) -> ShapingError {
    ShapingError::InvalidOptions(format!("invalid {axis} value {value:#x}"))
}

impl ShapingOptions {
    /// Decode the classic bitmask encoding.
    ///
    /// Every axis must hold one of its defined values and no bit outside
    /// the known masks may be set. The decoded options are validated.
    pub fn from_bits(bits: u32) -> Result<Self> {
        if bits & !KNOWN_BITS != 0 {
            return Err(invalid("option bits", bits & !KNOWN_BITS));
        }

        let length = match bits & LENGTH_MASK {
            0 => LengthPolicy::GrowShrink,
            1 => LengthPolicy::FixedSpacesNear,
            2 => LengthPolicy::FixedSpacesAtEnd,
            3 => LengthPolicy::FixedSpacesAtBeginning,
            0x0001_0000 => LengthPolicy::FixedSpacesAuto,
            other => return Err(invalid("length", other)),
        };
        let direction = if bits & DIRECTION_VISUAL_LTR != 0 {
            TextDirection::VisualLtr
        } else {
            TextDirection::Logical
        };
        let letters = match bits & LETTERS_MASK {
            0 => LetterShaping::None,
            0x08 => LetterShaping::Shape,
            0x10 => LetterShaping::Unshape,
            _ => LetterShaping::ShapeTashkeelIsolated,
        };
        let digits = match bits & DIGITS_MASK {
            0 => DigitShaping::None,
            0x20 => DigitShaping::EnToAn,
            0x40 => DigitShaping::AnToEn,
            0x60 => DigitShaping::EnToAnInitLr,
            0x80 => DigitShaping::EnToAnInitAl,
            other => return Err(invalid("digits", other)),
        };
        let digit_type = match bits & DIGIT_TYPE_MASK {
            0 => DigitType::ArabicIndic,
            0x100 => DigitType::ExtendedArabicIndic,
            other => return Err(invalid("digit type", other)),
        };
        let tashkeel = match bits & TASHKEEL_MASK {
            0 => TashkeelPolicy::Keep,
            0x0004_0000 => TashkeelPolicy::AtBeginning,
            0x0006_0000 => TashkeelPolicy::AtEnd,
            0x0008_0000 => TashkeelPolicy::Resize,
            0x000C_0000 => TashkeelPolicy::ReplaceByTatweel,
            other => return Err(invalid("tashkeel", other)),
        };
        let seen = match bits & SEEN_MASK {
            0 => SeenExpansion::Off,
            0x0020_0000 => SeenExpansion::TwoCellNear,
            other => return Err(invalid("seen", other)),
        };
        let yeh_hamza = match bits & YEH_HAMZA_MASK {
            0 => YehHamzaExpansion::Off,
            0x0100_0000 => YehHamzaExpansion::TwoCellNear,
            other => return Err(invalid("yeh hamza", other)),
        };
        let space_reference = if bits & SPACES_TEXT_BEGIN_END != 0 {
            SpaceReference::TextBeginEnd
        } else {
            SpaceReference::Direction
        };
        let tail = if bits & TAIL_NEW_UNICODE != 0 {
            TailGlyph::NewUnicode
        } else {
            TailGlyph::ZeroWidthSpace
        };

        let options = Self {
            length,
            direction,
            letters,
            digits,
            digit_type,
            tashkeel,
            seen,
            yeh_hamza,
            space_reference,
            tail,
        };
        options.validate()?;
        Ok(options)
    }

    /// Reject combinations of axes that conflict.
    pub fn validate(&self) -> Result<()> {
        let shapes_letters = matches!(
            self.letters,
            LetterShaping::Shape | LetterShaping::ShapeTashkeelIsolated
        );
        if !shapes_letters && self.tashkeel != TashkeelPolicy::Keep {
            return Err(ShapingError::InvalidOptions(
                "tashkeel removal and replacement need letter shaping".into(),
            ));
        }
        if self.letters == LetterShaping::None
            && (self.seen != SeenExpansion::Off || self.yeh_hamza != YehHamzaExpansion::Off)
        {
            return Err(ShapingError::InvalidOptions(
                "seen and yeh-hamza expansion need letter shaping".into(),
            ));
        }
        Ok(())
    }

    /// Whether shaping with these options can change the text length.
    pub fn may_resize(&self) -> bool {
        self.letters != LetterShaping::None
            && (self.length == LengthPolicy::GrowShrink || self.tashkeel == TashkeelPolicy::Resize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = ShapingOptions::default();
        assert_eq!(options.letters, LetterShaping::Shape);
        assert_eq!(options.length, LengthPolicy::GrowShrink);
        assert_eq!(options.direction, TextDirection::Logical);
        assert_eq!(options.digits, DigitShaping::None);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_from_bits() {
        let options = ShapingOptions::from_bits(0x08 | 0x20 | 0x100 | 0x1).unwrap();
        assert_eq!(options.letters, LetterShaping::Shape);
        assert_eq!(options.digits, DigitShaping::EnToAn);
        assert_eq!(options.digit_type, DigitType::ExtendedArabicIndic);
        assert_eq!(options.length, LengthPolicy::FixedSpacesNear);

        let options = ShapingOptions::from_bits(0x0001_0000 | 0x4 | 0x18).unwrap();
        assert_eq!(options.length, LengthPolicy::FixedSpacesAuto);
        assert_eq!(options.direction, TextDirection::VisualLtr);
        assert_eq!(options.letters, LetterShaping::ShapeTashkeelIsolated);

        let options = ShapingOptions::from_bits(0).unwrap();
        assert_eq!(options.letters, LetterShaping::None);
    }

    #[test]
    fn test_from_bits_rejects_reserved_values() {
        for bits in [0xA0, 0xC0, 0xE0, 0x200, 0x0002_0000, 0x0001_0001, 0x0010_0000] {
            assert!(
                matches!(
                    ShapingOptions::from_bits(bits | 0x08),
                    Err(ShapingError::InvalidOptions(_))
                ),
                "{bits:#x}"
            );
        }
        assert!(ShapingOptions::from_bits(0x1000_0000).is_err());
    }

    #[test]
    fn test_cross_axis_validation() {
        // Unshape + replace by tatweel
        assert!(ShapingOptions::from_bits(0x10 | 0x000C_0000).is_err());

        let options = ShapingOptions {
            letters: LetterShaping::None,
            seen: SeenExpansion::TwoCellNear,
            ..Default::default()
        };
        assert!(options.validate().is_err());
        // Removing marks without shaping letters would silently do nothing
        for tashkeel in [
            TashkeelPolicy::AtBeginning,
            TashkeelPolicy::AtEnd,
            TashkeelPolicy::Resize,
            TashkeelPolicy::ReplaceByTatweel,
        ] {
            let options = ShapingOptions {
                letters: LetterShaping::None,
                tashkeel,
                ..Default::default()
            };
            assert!(
                matches!(options.validate(), Err(ShapingError::InvalidOptions(_))),
                "{tashkeel:?}"
            );
        }
        // Marks at the beginning, with and without letter shaping
        assert!(ShapingOptions::from_bits(0x08 | 0x0004_0000).is_ok());
        assert!(ShapingOptions::from_bits(0x0004_0000).is_err());
    }

    #[test]
    fn test_may_resize() {
        assert!(ShapingOptions::default().may_resize());
        let options = ShapingOptions {
            length: LengthPolicy::FixedSpacesNear,
            ..Default::default()
        };
        assert!(!options.may_resize());
        let options = ShapingOptions {
            length: LengthPolicy::FixedSpacesNear,
            tashkeel: TashkeelPolicy::Resize,
            ..Default::default()
        };
        assert!(options.may_resize());
        let options = ShapingOptions {
            letters: LetterShaping::None,
            ..Default::default()
        };
        assert!(!options.may_resize());
    }

    #[test]
    fn test_deserialize_partial() {
        let options: ShapingOptions =
            serde_json::from_str(r#"{"length": "fixed-spaces-near", "digits": "en-to-an"}"#)
                .unwrap();
        assert_eq!(options.length, LengthPolicy::FixedSpacesNear);
        assert_eq!(options.digits, DigitShaping::EnToAn);
        assert_eq!(options.letters, LetterShaping::Shape);
    }
}
