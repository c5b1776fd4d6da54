//! Arabic shaper
//!
//! Runs letter shaping or de-shaping, space handling and digit
//! substitution over UTF-16 text.

use std::ops::Range;

use crate::digits::shape_digits;
use crate::letters::{normalize, replace_tashkeel_by_tatweel, shape_letters, Cell, TashkeelMode};
use crate::options::{LetterShaping, ShapingOptions, TashkeelPolicy, TextDirection};
use crate::spaces::{collapse_tails, expand_lam_alef, expand_tails, place_generated_spaces};
use crate::{Result, ShapingError};

/// Arabic shaper with validated options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArabicShaper {
    options: ShapingOptions,
}

impl ArabicShaper {
    /// Create a shaper, rejecting conflicting options.
    pub fn new(options: ShapingOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &ShapingOptions {
        &self.options
    }

    /// Output length for `source`, in UTF-16 code units
    pub fn required_len(&self, source: &[u16]) -> Result<usize> {
        Ok(self.transform(source)?.len())
    }

    /// Shape `source` into `dest`, returning the number of units written.
    ///
    /// An empty `dest` only measures: the required length is returned and
    /// nothing is written.
    pub fn shape(&self, source: &[u16], dest: &mut [u16]) -> Result<usize> {
        let output = self.transform(source)?;
        if dest.is_empty() {
            return Ok(output.len());
        }
        if dest.len() < output.len() {
            return Err(ShapingError::BufferTooSmall {
                required: output.len(),
                available: dest.len(),
            });
        }
        dest[..output.len()].copy_from_slice(&output);
        Ok(output.len())
    }

    /// Shape a sub-range of `source` into a sub-range of `dest`.
    pub fn shape_range(
        &self,
        source: &[u16],
        range: Range<usize>,
        dest: &mut [u16],
        dest_range: Range<usize>,
    ) -> Result<usize> {
        check_range("source", &range, source.len())?;
        check_range("destination", &dest_range, dest.len())?;
        self.shape(&source[range], &mut dest[dest_range])
    }

    /// Shape a buffer in place; only allowed when the length cannot change.
    pub fn shape_in_place(&self, buffer: &mut [u16]) -> Result<usize> {
        if self.options.may_resize() {
            return Err(ShapingError::InPlaceResize);
        }
        let output = self.transform(buffer)?;
        if output.len() != buffer.len() {
            return Err(ShapingError::InPlaceResize);
        }
        buffer.copy_from_slice(&output);
        Ok(output.len())
    }

    /// Shape into a new buffer
    pub fn shape_to_vec(&self, source: &[u16]) -> Result<Vec<u16>> {
        self.transform(source)
    }

    /// Shape a string. Unpaired surrogates never arise from `&str` input.
    pub fn shape_str(&self, text: &str) -> Result<String> {
        let source: Vec<u16> = text.encode_utf16().collect();
        Ok(String::from_utf16_lossy(&self.transform(&source)?))
    }

    fn transform(&self, source: &[u16]) -> Result<Vec<u16>> {
        let options = &self.options;
        let logical = options.direction == TextDirection::Logical;

        // Work in visual order
        let mut units = source.to_vec();
        if logical {
            units.reverse();
        }

        match options.letters {
            LetterShaping::None => {}
            LetterShaping::Shape | LetterShaping::ShapeTashkeelIsolated => {
                normalize(&mut units);
                let mut cells: Vec<Cell> = units.iter().map(|&unit| Cell::Char(unit)).collect();
                let ligatures = shape_letters(&mut cells, self.tashkeel_mode());
                tracing::trace!("{} lam-alef ligatures formed", ligatures);

                units = place_generated_spaces(&cells, options)?;
                expand_tails(&mut units, options);
                if options.tashkeel == TashkeelPolicy::ReplaceByTatweel {
                    replace_tashkeel_by_tatweel(&mut units);
                }
            }
            LetterShaping::Unshape => {
                collapse_tails(&mut units, options);
                normalize(&mut units);
                units = expand_lam_alef(units, options)?;
            }
        }

        shape_digits(&mut units, options.digits, options.digit_type);

        if logical {
            units.reverse();
        }
        tracing::debug!("Shaped {} units into {}", source.len(), units.len());
        Ok(units)
    }

    fn tashkeel_mode(&self) -> TashkeelMode {
        match self.options.tashkeel {
            TashkeelPolicy::AtBeginning | TashkeelPolicy::AtEnd | TashkeelPolicy::Resize => {
                TashkeelMode::Remove
            }
            TashkeelPolicy::Keep | TashkeelPolicy::ReplaceByTatweel => {
                if self.options.letters == LetterShaping::ShapeTashkeelIsolated {
                    TashkeelMode::Isolated
                } else {
                    TashkeelMode::Contextual
                }
            }
        }
    }
}

fn check_range(what: &'static str, range: &Range<usize>, len: usize) -> Result<()> {
    if range.start > range.end || range.end > len {
        return Err(ShapingError::InvalidRange {
            what,
            start: range.start,
            end: range.end,
            len,
        });
    }
    Ok(())
}
