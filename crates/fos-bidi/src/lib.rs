//! fOS Bidi - Unicode Bidirectional Algorithm (UAX #9)
//!
//! This crate resolves embedding levels and visual order for one paragraph
//! of classified text:
//! - Paragraph level detection (P2/P3)
//! - Explicit embeddings, overrides and isolates (X1-X10)
//! - Weak, neutral and implicit resolution (W1-W7, N1-N2, I1-I2)
//! - Paired bracket resolution (BD16, N0)
//! - Line-based level reset and reordering (L1, L2)
//!
//! Input is the per-character classification produced by `fos-unicode`.

pub mod brackets;
mod explicit;
mod implicit;
mod level;
mod line;
mod paragraph;
mod sequence;

pub use fos_unicode::{BidiClass, BracketType};
pub use level::{Level, ParagraphDirection};
pub use line::{compute_reordering, inverse_reordering, BidiRun};
pub use paragraph::BidiParagraph;

/// Bidi input validation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BidiError {
    #[error("Invalid bidi class value {value} at index {index}")]
    InvalidClass { index: usize, value: u8 },

    #[error("Invalid bracket type value {value} at index {index}")]
    InvalidBracketType { index: usize, value: u8 },

    #[error("Paragraph separator at index {index} is not the last character")]
    ParagraphSeparatorNotLast { index: usize },

    #[error("Length mismatch for {what}: expected {expected}, found {found}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("Invalid paragraph level: {0}")]
    InvalidParagraphLevel(i8),

    #[error("Invalid line breaks: {0}")]
    InvalidLineBreaks(String),
}

pub type Result<T> = std::result::Result<T, BidiError>;
