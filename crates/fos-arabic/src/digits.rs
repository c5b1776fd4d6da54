//! European and Arabic-Indic digit substitution

use fos_unicode::{bidi_class, BidiClass};

use crate::options::{DigitShaping, DigitType};

fn digit_zero(digit_type: DigitType) -> u16 {
    match digit_type {
        DigitType::ArabicIndic => 0x0660,
        DigitType::ExtendedArabicIndic => 0x06F0,
    }
}

fn is_european_digit(unit: u16) -> bool {
    (0x0030..=0x0039).contains(&unit)
}

/// Substitute digits in a visual-order buffer.
///
/// The contextual modes read the buffer from its highest index down and
/// convert European digits only while the closest preceding strong
/// character is an Arabic letter.
pub(crate) fn shape_digits(units: &mut [u16], digits: DigitShaping, digit_type: DigitType) {
    let zero = digit_zero(digit_type);

    match digits {
        DigitShaping::None => {}
        DigitShaping::EnToAn => {
            for unit in units.iter_mut().filter(|u| is_european_digit(**u)) {
                *unit = zero + (*unit - 0x0030);
            }
        }
        DigitShaping::AnToEn => {
            for unit in units.iter_mut().filter(|u| (zero..zero + 10).contains(&**u)) {
                *unit = 0x0030 + (*unit - zero);
            }
        }
        DigitShaping::EnToAnInitLr | DigitShaping::EnToAnInitAl => {
            let mut arabic = digits == DigitShaping::EnToAnInitAl;
            for unit in units.iter_mut().rev() {
                match bidi_class(u32::from(*unit)) {
                    BidiClass::L | BidiClass::R => arabic = false,
                    BidiClass::AL => arabic = true,
                    BidiClass::EN if arabic && is_european_digit(*unit) => {
                        *unit = zero + (*unit - 0x0030);
                    }
                    _ => {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shaped(text: &str, digits: DigitShaping, digit_type: DigitType) -> Vec<u16> {
        let mut units: Vec<u16> = text.encode_utf16().collect();
        shape_digits(&mut units, digits, digit_type);
        units
    }

    #[test]
    fn test_european_to_arabic() {
        assert_eq!(
            shaped("a09", DigitShaping::EnToAn, DigitType::ArabicIndic),
            vec![0x61, 0x0660, 0x0669]
        );
        assert_eq!(
            shaped("5", DigitShaping::EnToAn, DigitType::ExtendedArabicIndic),
            vec![0x06F5]
        );
    }

    #[test]
    fn test_arabic_to_european() {
        assert_eq!(
            shaped("\u{0661}\u{06F2}", DigitShaping::AnToEn, DigitType::ArabicIndic),
            vec![0x31, 0x06F2]
        );
        assert_eq!(
            shaped("\u{06F2}", DigitShaping::AnToEn, DigitType::ExtendedArabicIndic),
            vec![0x32]
        );
    }

    #[test]
    fn test_contextual() {
        // Highest index first: "2 <beh> 1 a" read backwards is "a 1 <beh> 2"
        let visual = "2 \u{0628} 1 a";
        assert_eq!(
            shaped(visual, DigitShaping::EnToAnInitLr, DigitType::ArabicIndic),
            "\u{0662} \u{0628} 1 a".encode_utf16().collect::<Vec<_>>()
        );

        assert_eq!(
            shaped("2 a 1", DigitShaping::EnToAnInitAl, DigitType::ArabicIndic),
            "2 a \u{0661}".encode_utf16().collect::<Vec<_>>()
        );
        assert_eq!(
            shaped("1", DigitShaping::EnToAnInitLr, DigitType::ArabicIndic),
            vec![0x31]
        );
    }
}
