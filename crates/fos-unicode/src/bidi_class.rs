//! Bidirectional character types (UAX #9, Table 4)

use std::cmp::Ordering;

use crate::tables::BIDI_CLASS_TABLE;
use crate::UnicodeError;

/// Bidirectional character type
///
/// The discriminants are stable and used by the raw (`u8`) entry points of
/// the bidi engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum BidiClass {
    /// Left-to-Right
    L = 0,
    /// Left-to-Right Embedding
    LRE = 1,
    /// Left-to-Right Override
    LRO = 2,
    /// Right-to-Left
    R = 3,
    /// Arabic Letter
    AL = 4,
    /// Right-to-Left Embedding
    RLE = 5,
    /// Right-to-Left Override
    RLO = 6,
    /// Pop Directional Format
    PDF = 7,
    /// European Number
    EN = 8,
    /// European Number Separator
    ES = 9,
    /// European Number Terminator
    ET = 10,
    /// Arabic Number
    AN = 11,
    /// Common Number Separator
    CS = 12,
    /// Nonspacing Mark
    NSM = 13,
    /// Boundary Neutral
    BN = 14,
    /// Paragraph Separator
    B = 15,
    /// Segment Separator
    S = 16,
    /// Whitespace
    WS = 17,
    /// Other Neutrals
    ON = 18,
    /// Left-to-Right Isolate
    LRI = 19,
    /// Right-to-Left Isolate
    RLI = 20,
    /// First Strong Isolate
    FSI = 21,
    /// Pop Directional Isolate
    PDI = 22,
}

impl BidiClass {
    /// All classes in discriminant order.
    pub const ALL: [BidiClass; 23] = [
        BidiClass::L,
        BidiClass::LRE,
        BidiClass::LRO,
        BidiClass::R,
        BidiClass::AL,
        BidiClass::RLE,
        BidiClass::RLO,
        BidiClass::PDF,
        BidiClass::EN,
        BidiClass::ES,
        BidiClass::ET,
        BidiClass::AN,
        BidiClass::CS,
        BidiClass::NSM,
        BidiClass::BN,
        BidiClass::B,
        BidiClass::S,
        BidiClass::WS,
        BidiClass::ON,
        BidiClass::LRI,
        BidiClass::RLI,
        BidiClass::FSI,
        BidiClass::PDI,
    ];

    /// Get bidi class for a character
    pub fn of(c: char) -> Self {
        bidi_class(c as u32)
    }

    /// Check if this is a strong type
    pub fn is_strong(self) -> bool {
        matches!(self, BidiClass::L | BidiClass::R | BidiClass::AL)
    }

    /// Check if this is an isolate initiator (LRI, RLI, FSI)
    pub fn is_isolate_initiator(self) -> bool {
        matches!(self, BidiClass::LRI | BidiClass::RLI | BidiClass::FSI)
    }

    /// Check if this is an isolate initiator or PDI
    pub fn is_isolate_control(self) -> bool {
        self.is_isolate_initiator() || self == BidiClass::PDI
    }

    /// Check if this is an embedding or override initiator (LRE, RLE, LRO, RLO)
    pub fn is_embedding_initiator(self) -> bool {
        matches!(
            self,
            BidiClass::LRE | BidiClass::RLE | BidiClass::LRO | BidiClass::RLO
        )
    }

    /// Check if this is an explicit formatting character
    pub fn is_explicit(self) -> bool {
        self.is_embedding_initiator() || self.is_isolate_control() || self == BidiClass::PDF
    }

    /// Characters ignored by the rules following X9.
    ///
    /// They keep their position in the text but take no part in level runs.
    pub fn is_removed_by_x9(self) -> bool {
        self.is_embedding_initiator() || matches!(self, BidiClass::PDF | BidiClass::BN)
    }

    /// Neutral or isolate formatting type, as grouped by rules N1 and N2.
    pub fn is_neutral_or_isolate(self) -> bool {
        matches!(self, BidiClass::B | BidiClass::S | BidiClass::WS | BidiClass::ON)
            || self.is_isolate_control()
    }

    /// Whitespace in the sense of rule L1: WS, isolate controls and
    /// everything removed by X9.
    pub fn is_whitespace_for_l1(self) -> bool {
        self == BidiClass::WS || self.is_isolate_control() || self.is_removed_by_x9()
    }

    /// Check if RTL type
    pub fn is_rtl(self) -> bool {
        matches!(
            self,
            BidiClass::R | BidiClass::AL | BidiClass::RLE | BidiClass::RLO | BidiClass::RLI
        )
    }
}

impl TryFrom<u8> for BidiClass {
    type Error = UnicodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        BidiClass::ALL
            .get(value as usize)
            .copied()
            .ok_or(UnicodeError::InvalidBidiClass(value))
    }
}

/// Look up the bidi class of a code point.
///
/// The table covers U+0000..=U+10FFFF; values past the code space are `L`.
pub fn bidi_class(code_point: u32) -> BidiClass {
    let found = BIDI_CLASS_TABLE.binary_search_by(|&(from, to, _)| {
        if code_point < from {
            Ordering::Greater
        } else if code_point > to {
            Ordering::Less
        } else {
            Ordering::Equal
        }
    });

    match found {
        Ok(index) => BIDI_CLASS_TABLE[index].2,
        Err(_) => BidiClass::L,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bidi_class_latin() {
        assert_eq!(BidiClass::of('A'), BidiClass::L);
        assert_eq!(BidiClass::of('z'), BidiClass::L);
        assert_eq!(BidiClass::of('5'), BidiClass::EN);
    }

    #[test]
    fn test_bidi_class_arabic() {
        assert_eq!(BidiClass::of('ا'), BidiClass::AL);
        assert_eq!(BidiClass::of('ب'), BidiClass::AL);
        assert_eq!(BidiClass::of('\u{0660}'), BidiClass::AN);
        assert_eq!(BidiClass::of('\u{064E}'), BidiClass::NSM);
    }

    #[test]
    fn test_bidi_class_hebrew() {
        assert_eq!(BidiClass::of('א'), BidiClass::R);
        assert_eq!(BidiClass::of('ב'), BidiClass::R);
    }

    #[test]
    fn test_bidi_class_formatting() {
        assert_eq!(bidi_class(0x202A), BidiClass::LRE);
        assert_eq!(bidi_class(0x202B), BidiClass::RLE);
        assert_eq!(bidi_class(0x202C), BidiClass::PDF);
        assert_eq!(bidi_class(0x202D), BidiClass::LRO);
        assert_eq!(bidi_class(0x202E), BidiClass::RLO);
        assert_eq!(bidi_class(0x2066), BidiClass::LRI);
        assert_eq!(bidi_class(0x2067), BidiClass::RLI);
        assert_eq!(bidi_class(0x2068), BidiClass::FSI);
        assert_eq!(bidi_class(0x2069), BidiClass::PDI);
    }

    #[test]
    fn test_bidi_class_separators() {
        assert_eq!(bidi_class(0x000A), BidiClass::B);
        assert_eq!(bidi_class(0x000D), BidiClass::B);
        assert_eq!(bidi_class(0x0009), BidiClass::S);
        assert_eq!(bidi_class(0x0020), BidiClass::WS);
        assert_eq!(bidi_class(0x002C), BidiClass::CS);
        assert_eq!(bidi_class(0x002B), BidiClass::ES);
        assert_eq!(bidi_class(0x0025), BidiClass::ET);
    }

    #[test]
    fn test_unassigned_defaults() {
        // Unassigned Hebrew block code point defaults to R
        assert_eq!(bidi_class(0x05FF), BidiClass::R);
        // Last code point is covered
        assert_eq!(bidi_class(0x10FFFF), BidiClass::BN);
    }

    #[test]
    fn test_table_is_sorted_and_gapless() {
        let mut expected = 0;
        for &(from, to, _) in BIDI_CLASS_TABLE {
            assert_eq!(from, expected);
            assert!(to >= from);
            expected = to + 1;
        }
        assert_eq!(expected, 0x110000);
    }

    #[test]
    fn test_try_from_u8() {
        for (value, class) in BidiClass::ALL.iter().enumerate() {
            assert_eq!(BidiClass::try_from(value as u8), Ok(*class));
            assert_eq!(*class as u8, value as u8);
        }
        assert_eq!(
            BidiClass::try_from(23),
            Err(UnicodeError::InvalidBidiClass(23))
        );
    }

    #[test]
    fn test_removed_by_x9() {
        assert!(BidiClass::BN.is_removed_by_x9());
        assert!(BidiClass::PDF.is_removed_by_x9());
        assert!(!BidiClass::PDI.is_removed_by_x9());
        assert!(!BidiClass::LRI.is_removed_by_x9());
    }
}
