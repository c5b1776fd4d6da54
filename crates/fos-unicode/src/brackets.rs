//! Paired bracket properties (BidiBrackets.txt)

use crate::tables::BRACKET_TABLE;
use crate::UnicodeError;

/// Bidi paired bracket type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum BracketType {
    /// Not a paired bracket
    #[default]
    None = 0,
    /// Opening paired bracket
    Open = 1,
    /// Closing paired bracket
    Close = 2,
}

impl TryFrom<u8> for BracketType {
    type Error = UnicodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(BracketType::None),
            1 => Ok(BracketType::Open),
            2 => Ok(BracketType::Close),
            _ => Err(UnicodeError::InvalidBracketType(value)),
        }
    }
}

fn lookup(code_point: u32) -> Option<(u32, BracketType)> {
    BRACKET_TABLE
        .binary_search_by_key(&code_point, |&(cp, _, _)| cp)
        .ok()
        .map(|index| (BRACKET_TABLE[index].1, BRACKET_TABLE[index].2))
}

/// Fold the two bracket pairs that have canonical decompositions onto
/// their decomposed counterparts.
fn canonical(code_point: u32) -> u32 {
    match code_point {
        0x2329 => 0x3008,
        0x232A => 0x3009,
        cp => cp,
    }
}

/// Get the paired bracket type of a code point
pub fn bracket_type(code_point: u32) -> BracketType {
    lookup(code_point).map_or(BracketType::None, |(_, kind)| kind)
}

/// Get the other member of a bracket pair
pub fn paired_bracket(code_point: u32) -> Option<u32> {
    lookup(code_point).map(|(pair, _)| pair)
}

/// Get the bracket equivalence value used for BD16 matching.
///
/// Both members of a pair (and canonically equivalent pairs) share one
/// value: the canonical opening bracket. Non-brackets map to 0.
pub fn paired_bracket_value(code_point: u32) -> u32 {
    match lookup(code_point) {
        Some((_, BracketType::Open)) => canonical(code_point),
        Some((pair, BracketType::Close)) => canonical(pair),
        _ => 0,
    }
}

/// Mirror a character for RTL display
///
/// Paired brackets mirror to their partner; a handful of common
/// non-bracket mirrored punctuation is handled as well.
pub fn mirror(code_point: u32) -> Option<u32> {
    if let Some(pair) = paired_bracket(code_point) {
        return Some(pair);
    }
    let mirrored = match code_point {
        0x003C => 0x003E, // <
        0x003E => 0x003C, // >
        0x00AB => 0x00BB, // «
        0x00BB => 0x00AB, // »
        0x2039 => 0x203A, // ‹
        0x203A => 0x2039, // ›
        0x2264 => 0x2265, // ≤
        0x2265 => 0x2264, // ≥
        _ => return None,
    };
    Some(mirrored)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_brackets() {
        assert_eq!(bracket_type('(' as u32), BracketType::Open);
        assert_eq!(bracket_type(')' as u32), BracketType::Close);
        assert_eq!(bracket_type('[' as u32), BracketType::Open);
        assert_eq!(bracket_type('}' as u32), BracketType::Close);
        assert_eq!(bracket_type('a' as u32), BracketType::None);
    }

    #[test]
    fn test_pair_values_match() {
        assert_eq!(paired_bracket_value('(' as u32), '(' as u32);
        assert_eq!(paired_bracket_value(')' as u32), '(' as u32);
        assert_ne!(
            paired_bracket_value('[' as u32),
            paired_bracket_value(')' as u32)
        );
        assert_eq!(paired_bracket_value('x' as u32), 0);
    }

    #[test]
    fn test_canonical_equivalents() {
        assert_eq!(paired_bracket_value(0x2329), paired_bracket_value(0x3008));
        assert_eq!(paired_bracket_value(0x232A), paired_bracket_value(0x3009));
        assert_eq!(paired_bracket_value(0x232A), paired_bracket_value(0x3008));
    }

    #[test]
    fn test_mirror() {
        assert_eq!(mirror('(' as u32), Some(')' as u32));
        assert_eq!(mirror(')' as u32), Some('(' as u32));
        assert_eq!(mirror('<' as u32), Some('>' as u32));
        assert_eq!(mirror('A' as u32), None);
    }

    #[test]
    fn test_table_sorted() {
        assert!(BRACKET_TABLE.windows(2).all(|w| w[0].0 < w[1].0));
    }
}
