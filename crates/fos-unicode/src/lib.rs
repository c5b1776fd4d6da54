//! fOS Unicode - Character classification for text layout
//!
//! This crate provides the read-only per-codepoint data consumed by the
//! bidi and Arabic shaping engines:
//! - Bidi class lookup (UAX #9 categories)
//! - Paired bracket type and equivalence value (BD14-BD16)
//! - Bracket mirroring for right-to-left runs
//! - UTF-16 preprocessing into parallel classification arrays
//!
//! All tables are immutable statics and safe to share between threads.

mod bidi_class;
mod brackets;
mod preprocess;
mod tables;

pub use bidi_class::{bidi_class, BidiClass};
pub use brackets::{bracket_type, mirror, paired_bracket, paired_bracket_value, BracketType};
pub use preprocess::{decode_utf16, ClassifiedText};

/// Classification error types
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UnicodeError {
    #[error("Invalid bidi class value: {0}")]
    InvalidBidiClass(u8),

    #[error("Invalid bracket type value: {0}")]
    InvalidBracketType(u8),
}

pub type Result<T> = std::result::Result<T, UnicodeError>;
