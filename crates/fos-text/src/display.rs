//! Logical text to display order

use std::ops::Range;

use fos_arabic::{ArabicShaper, ShapingOptions, TextDirection};
use fos_bidi::{BidiParagraph, Level};
use fos_unicode::{mirror, BidiClass, ClassifiedText};

use crate::{Result, TextConfig};

/// One paragraph in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayParagraph {
    /// Visual-order text, followed by the paragraph separator if any
    pub text: String,
    /// Resolved paragraph level
    pub base_level: Level,
}

/// Prepare every paragraph of `text` for left-to-right drawing.
///
/// Each paragraph is shaped in logical order, then resolved and reordered
/// as a single line.
pub fn display_paragraphs(text: &str, config: &TextConfig) -> Result<Vec<DisplayParagraph>> {
    // Shaping always sees logical text here
    let shaper = config
        .shaping
        .map(|options| {
            ArabicShaper::new(ShapingOptions {
                direction: TextDirection::Logical,
                ..options
            })
        })
        .transpose()?;

    let classified = ClassifiedText::from_text(text);
    let paragraphs = classified.paragraphs();
    tracing::debug!("Preparing {} paragraphs for display", paragraphs.len());

    paragraphs
        .into_iter()
        .map(|range| -> Result<DisplayParagraph> {
            let (content, separator) = split_separator(&classified, range);
            let logical: String = classified.code_points[content]
                .iter()
                .filter_map(|&cp| char::from_u32(cp))
                .collect();

            let shaped = match &shaper {
                Some(shaper) => shaper.shape_str(&logical)?,
                None => logical,
            };

            let mut paragraph = reorder(&shaped, config)?;
            if let Some(separator) = separator {
                paragraph.text.push(separator);
            }
            Ok(paragraph)
        })
        .collect()
}

/// Display order of a whole text, paragraphs concatenated.
pub fn display_text(text: &str, config: &TextConfig) -> Result<String> {
    Ok(display_paragraphs(text, config)?
        .into_iter()
        .map(|paragraph| paragraph.text)
        .collect())
}

/// Content range and trailing paragraph separator of a paragraph
fn split_separator(text: &ClassifiedText, range: Range<usize>) -> (Range<usize>, Option<char>) {
    match range.clone().last() {
        Some(last) if text.classes[last] == BidiClass::B => (
            range.start..last,
            char::from_u32(text.code_points[last]),
        ),
        _ => (range, None),
    }
}

fn is_stripped(class: BidiClass) -> bool {
    class.is_removed_by_x9() || class.is_isolate_control()
}

fn reorder(logical: &str, config: &TextConfig) -> Result<DisplayParagraph> {
    let classified = ClassifiedText::from_text(logical);
    let paragraph = BidiParagraph::from_text(&classified, config.direction)?;

    let line = [classified.len()];
    let levels = paragraph.levels(&line)?;
    let order = paragraph.reordering(&line)?;

    let text = order
        .into_iter()
        .filter(|&i| !(config.strip_controls && is_stripped(classified.classes[i])))
        .map(|i| {
            let cp = classified.code_points[i];
            let cp = if config.mirror && levels[i].is_rtl() {
                mirror(cp).unwrap_or(cp)
            } else {
                cp
            };
            char::from_u32(cp).unwrap_or(char::REPLACEMENT_CHARACTER)
        })
        .collect();

    Ok(DisplayParagraph {
        text,
        base_level: paragraph.base_level(),
    })
}
