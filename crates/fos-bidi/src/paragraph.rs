//! Resolved bidi paragraph

use fos_unicode::ClassifiedText;

use crate::brackets::{resolve_paired_brackets, BracketInput};
use crate::explicit::{explicit_levels, first_strong_level, IsolatePairs};
use crate::implicit::{resolve_implicit_levels, resolve_neutral_types, resolve_weak_types};
use crate::line::{line_levels, multiline_reordering, validate_line_breaks, visual_runs};
use crate::sequence::isolating_run_sequences;
use crate::{BidiClass, BidiError, BidiRun, BracketType, Level, ParagraphDirection, Result};

/// Bidi paragraph information
///
/// Holds the paragraph-wide levels resolved by rules P2 through I2. The
/// line-based rules run on demand for caller-supplied line breaks.
#[derive(Debug, Clone)]
pub struct BidiParagraph {
    /// Original bidi classes
    initial_classes: Vec<BidiClass>,
    /// Base paragraph level
    base_level: Level,
    /// Resolved embedding levels per character, before L1
    levels: Vec<Level>,
}

impl BidiParagraph {
    /// Resolve a paragraph.
    ///
    /// A paragraph separator (B) may only appear as the last class, and the
    /// bracket arrays must be as long as `classes`.
    pub fn new(
        classes: &[BidiClass],
        bracket_types: &[BracketType],
        bracket_values: &[u32],
        direction: ParagraphDirection,
    ) -> Result<Self> {
        validate(classes, bracket_types, bracket_values)?;

        let isolates = IsolatePairs::new(classes);
        let base_level = match direction {
            ParagraphDirection::Ltr => Level::LTR,
            ParagraphDirection::Rtl => Level::RTL,
            ParagraphDirection::Auto => {
                first_strong_level(classes, &isolates, 0..classes.len()).unwrap_or(Level::LTR)
            }
        };
        tracing::debug!(
            "Resolving bidi paragraph: {} characters, base level {}",
            classes.len(),
            base_level.0
        );

        let mut types = classes.to_vec();
        let mut levels = explicit_levels(&mut types, &isolates, base_level);

        let sequences = isolating_run_sequences(classes, &levels, &isolates, base_level);
        for sequence in &sequences {
            let mut sequence_types: Vec<BidiClass> =
                sequence.indices.iter().map(|&i| types[i]).collect();

            resolve_weak_types(&mut sequence_types, sequence.sos, sequence.eos);

            let input = BracketInput {
                indices: &sequence.indices,
                initial_classes: classes,
                bracket_types,
                bracket_values,
                sos: sequence.sos,
                level: sequence.level,
            };
            resolve_paired_brackets(&input, &mut sequence_types);

            resolve_neutral_types(
                &mut sequence_types,
                sequence.sos,
                sequence.eos,
                sequence.level,
            );
            let sequence_levels = resolve_implicit_levels(&sequence_types, sequence.level);

            for (position, &i) in sequence.indices.iter().enumerate() {
                types[i] = sequence_types[position];
                levels[i] = sequence_levels[position];
            }
        }

        // Characters removed by X9 take the level of the preceding character
        for i in 0..levels.len() {
            if classes[i].is_removed_by_x9() {
                levels[i] = if i == 0 { base_level } else { levels[i - 1] };
            }
        }

        Ok(Self {
            initial_classes: classes.to_vec(),
            base_level,
            levels,
        })
    }

    /// Resolve a paragraph from raw numeric classification.
    ///
    /// `classes` use the [`BidiClass`] discriminants, `bracket_types` are
    /// 0 (none), 1 (open) or 2 (close), and `paragraph_level` is 0, 1 or
    /// -1 for auto-detection.
    pub fn from_raw(
        classes: &[u8],
        bracket_types: &[u8],
        bracket_values: &[u32],
        paragraph_level: i8,
    ) -> Result<Self> {
        let direction = ParagraphDirection::try_from(paragraph_level)?;
        let classes = classes
            .iter()
            .enumerate()
            .map(|(index, &value)| {
                BidiClass::try_from(value).map_err(|_| BidiError::InvalidClass { index, value })
            })
            .collect::<Result<Vec<_>>>()?;
        let bracket_types = bracket_types
            .iter()
            .enumerate()
            .map(|(index, &value)| {
                BracketType::try_from(value)
                    .map_err(|_| BidiError::InvalidBracketType { index, value })
            })
            .collect::<Result<Vec<_>>>()?;

        Self::new(&classes, &bracket_types, bracket_values, direction)
    }

    /// Resolve one paragraph of preprocessed text
    pub fn from_text(text: &ClassifiedText, direction: ParagraphDirection) -> Result<Self> {
        Self::new(
            &text.classes,
            &text.bracket_types,
            &text.bracket_values,
            direction,
        )
    }

    /// Resolved paragraph level
    pub fn base_level(&self) -> Level {
        self.base_level
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Paragraph-wide levels before line-based adjustment
    pub fn resolved_levels(&self) -> &[Level] {
        &self.levels
    }

    /// L1: levels for the given line breaks.
    pub fn levels(&self, line_breaks: &[usize]) -> Result<Vec<Level>> {
        validate_line_breaks(line_breaks, self.len())?;
        Ok(line_levels(
            &self.initial_classes,
            &self.levels,
            self.base_level,
            line_breaks,
        ))
    }

    /// L2: visual-to-logical index permutation, computed per line.
    pub fn reordering(&self, line_breaks: &[usize]) -> Result<Vec<usize>> {
        let levels = self.levels(line_breaks)?;
        Ok(multiline_reordering(&levels, line_breaks))
    }

    /// Level runs of each line, lines in order and runs in visual order.
    pub fn visual_runs(&self, line_breaks: &[usize]) -> Result<Vec<BidiRun>> {
        let levels = self.levels(line_breaks)?;
        let mut runs = Vec::new();
        let mut start = 0;
        for &end in line_breaks {
            runs.extend(visual_runs(&levels, start, end));
            start = end;
        }
        Ok(runs)
    }
}

fn validate(
    classes: &[BidiClass],
    bracket_types: &[BracketType],
    bracket_values: &[u32],
) -> Result<()> {
    if bracket_types.len() != classes.len() {
        return Err(BidiError::LengthMismatch {
            what: "bracket types",
            expected: classes.len(),
            found: bracket_types.len(),
        });
    }
    if bracket_values.len() != classes.len() {
        return Err(BidiError::LengthMismatch {
            what: "bracket values",
            expected: classes.len(),
            found: bracket_values.len(),
        });
    }
    let last = classes.len().saturating_sub(1);
    if let Some(index) = classes[..last].iter().position(|&class| class == BidiClass::B) {
        return Err(BidiError::ParagraphSeparatorNotLast { index });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paragraph(text: &str, direction: ParagraphDirection) -> BidiParagraph {
        BidiParagraph::from_text(&ClassifiedText::from_text(text), direction).unwrap()
    }

    #[test]
    fn test_base_level_detection() {
        assert_eq!(
            paragraph("abc \u{05D3}\u{05D2}\u{05D4}", ParagraphDirection::Auto).base_level(),
            Level(0)
        );
        assert_eq!(
            paragraph("\u{05D3}\u{05D2}\u{05D4} abc", ParagraphDirection::Auto).base_level(),
            Level(1)
        );
        assert_eq!(
            paragraph("123", ParagraphDirection::Auto).base_level(),
            Level(0)
        );
        assert_eq!(
            paragraph("abc", ParagraphDirection::Rtl).base_level(),
            Level(1)
        );
    }

    #[test]
    fn test_removed_characters_take_previous_level() {
        let para = paragraph("a\u{202B}b\u{202C}c", ParagraphDirection::Ltr);
        assert_eq!(
            para.resolved_levels(),
            &[Level(0), Level(0), Level(2), Level(2), Level(0)]
        );
    }

    #[test]
    fn test_first_removed_character_takes_paragraph_level() {
        let para = paragraph("\u{202E}abc\u{202C}", ParagraphDirection::Ltr);
        assert_eq!(para.resolved_levels()[0], Level(0));
        assert_eq!(
            para.levels(&[5]).unwrap(),
            vec![Level(0), Level(1), Level(1), Level(1), Level(0)]
        );
        assert_eq!(para.reordering(&[5]).unwrap(), vec![0, 3, 2, 1, 4]);
    }

    #[test]
    fn test_validation() {
        let err = BidiParagraph::new(
            &[BidiClass::B, BidiClass::L],
            &[BracketType::None; 2],
            &[0; 2],
            ParagraphDirection::Auto,
        )
        .unwrap_err();
        assert_eq!(err, BidiError::ParagraphSeparatorNotLast { index: 0 });

        let err = BidiParagraph::new(
            &[BidiClass::L],
            &[],
            &[0],
            ParagraphDirection::Auto,
        )
        .unwrap_err();
        assert!(matches!(err, BidiError::LengthMismatch { .. }));

        assert!(BidiParagraph::new(
            &[BidiClass::L, BidiClass::B],
            &[BracketType::None; 2],
            &[0; 2],
            ParagraphDirection::Auto,
        )
        .is_ok());
    }

    #[test]
    fn test_empty_paragraph() {
        let para = paragraph("", ParagraphDirection::Auto);
        assert!(para.is_empty());
        assert!(para.levels(&[]).unwrap().is_empty());
        assert!(para.reordering(&[0]).unwrap().is_empty());
    }
}
