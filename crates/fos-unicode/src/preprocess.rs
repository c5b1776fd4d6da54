//! UTF-16 preprocessing into parallel classification arrays

use std::ops::Range;

use crate::{bidi_class, bracket_type, paired_bracket_value, BidiClass, BracketType};

const CR: u32 = 0x000D;
const LF: u32 = 0x000A;

/// Decode UTF-16 code units into scalar code points.
///
/// Well-formed surrogate pairs are combined. An unpaired surrogate is kept
/// as its own code point so that indices stay aligned with the input.
pub fn decode_utf16(units: &[u16]) -> Vec<u32> {
    let mut code_points = Vec::with_capacity(units.len());
    for decoded in char::decode_utf16(units.iter().copied()) {
        match decoded {
            Ok(c) => code_points.push(c as u32),
            Err(err) => code_points.push(err.unpaired_surrogate() as u32),
        }
    }
    code_points
}

/// Text classified for the bidi engine
///
/// All vectors are indexed by code point position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedText {
    pub code_points: Vec<u32>,
    pub classes: Vec<BidiClass>,
    pub bracket_types: Vec<BracketType>,
    pub bracket_values: Vec<u32>,
    /// Offsets just after each hard line break, terminated by the length
    pub line_breaks: Vec<usize>,
}

impl ClassifiedText {
    /// Classify UTF-16 text
    pub fn from_utf16(units: &[u16]) -> Self {
        Self::from_code_points(decode_utf16(units))
    }

    /// Classify a string
    pub fn from_text(text: &str) -> Self {
        Self::from_code_points(text.chars().map(|c| c as u32).collect())
    }

    /// Classify already decoded code points
    pub fn from_code_points(code_points: Vec<u32>) -> Self {
        let classes = code_points.iter().map(|&cp| bidi_class(cp)).collect();
        let bracket_types = code_points.iter().map(|&cp| bracket_type(cp)).collect();
        let bracket_values = code_points
            .iter()
            .map(|&cp| paired_bracket_value(cp))
            .collect();
        let line_breaks = line_breaks(&code_points);

        Self {
            code_points,
            classes,
            bracket_types,
            bracket_values,
            line_breaks,
        }
    }

    pub fn len(&self) -> usize {
        self.code_points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.code_points.is_empty()
    }

    /// Split into paragraphs.
    ///
    /// Each range ends just after its paragraph separator (class B), except
    /// possibly the last one, so a CR LF pair yields a paragraph holding
    /// only the LF. Empty text yields no paragraphs.
    pub fn paragraphs(&self) -> Vec<Range<usize>> {
        let mut paragraphs = Vec::new();
        let mut start = 0;
        for (i, &class) in self.classes.iter().enumerate() {
            if class == BidiClass::B {
                paragraphs.push(start..i + 1);
                start = i + 1;
            }
        }
        if start < self.len() {
            paragraphs.push(start..self.len());
        }
        paragraphs
    }
}

fn line_breaks(code_points: &[u32]) -> Vec<usize> {
    let mut breaks = Vec::new();
    for (i, &cp) in code_points.iter().enumerate() {
        let after_cr_lf = cp == CR && code_points.get(i + 1) == Some(&LF);
        if (cp == LF || cp == CR) && !after_cr_lf {
            breaks.push(i + 1);
        }
    }
    if breaks.last() != Some(&code_points.len()) {
        breaks.push(code_points.len());
    }
    breaks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_surrogate_pair() {
        // U+1F600 followed by 'a'
        let units = [0xD83D, 0xDE00, 0x0061];
        assert_eq!(decode_utf16(&units), vec![0x1F600, 0x61]);
    }

    #[test]
    fn test_decode_lone_surrogate() {
        let units = [0x0061, 0xD800, 0x0062, 0xDC00];
        assert_eq!(decode_utf16(&units), vec![0x61, 0xD800, 0x62, 0xDC00]);
    }

    #[test]
    fn test_classify_parallel_arrays() {
        let text = ClassifiedText::from_text("a(ب)");
        assert_eq!(text.len(), 4);
        assert_eq!(
            text.classes,
            vec![BidiClass::L, BidiClass::ON, BidiClass::AL, BidiClass::ON]
        );
        assert_eq!(text.bracket_types[1], BracketType::Open);
        assert_eq!(text.bracket_types[3], BracketType::Close);
        assert_eq!(text.bracket_values[1], text.bracket_values[3]);
        assert_eq!(text.line_breaks, vec![4]);
    }

    #[test]
    fn test_line_breaks() {
        let text = ClassifiedText::from_text("ab\ncd\r\nef\rg");
        assert_eq!(text.line_breaks, vec![3, 7, 10, 11]);

        let text = ClassifiedText::from_text("ab\n");
        assert_eq!(text.line_breaks, vec![3]);

        let text = ClassifiedText::from_text("");
        assert_eq!(text.line_breaks, vec![0]);
    }

    #[test]
    fn test_paragraphs() {
        let text = ClassifiedText::from_text("ab\r\ncd\u{2029}e");
        assert_eq!(text.paragraphs(), vec![0..3, 3..4, 4..7, 7..8]);

        let text = ClassifiedText::from_text("ab\n");
        assert_eq!(text.paragraphs(), vec![0..3]);

        assert!(ClassifiedText::default().paragraphs().is_empty());
    }
}
