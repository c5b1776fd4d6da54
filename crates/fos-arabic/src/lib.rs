//! fOS Arabic - Arabic shaping on UTF-16 text
//!
//! This crate converts Arabic text between base letters and the Unicode
//! presentation forms (FB50-FBFF, FE70-FEFF):
//! - Contextual letter shaping with lam-alef ligatures
//! - De-shaping back to base letters
//! - Tashkeel (diacritic) handling
//! - Seen tail and yeh-hamza two-cell expansion
//! - European and Arabic-Indic digit substitution
//!
//! # Example
//!
//! ```
//! use fos_arabic::{ArabicShaper, ShapingOptions};
//!
//! let shaper = ArabicShaper::new(ShapingOptions::default()).unwrap();
//! assert_eq!(shaper.shape_str("\u{0644}\u{0627}").unwrap(), "\u{FEFB}");
//! ```

mod digits;
mod letters;
mod options;
mod shaper;
mod spaces;
mod tables;

pub use options::{
    DigitShaping, DigitType, LengthPolicy, LetterShaping, SeenExpansion, ShapingOptions,
    SpaceReference, TailGlyph, TashkeelPolicy, TextDirection, YehHamzaExpansion,
};
pub use shaper::ArabicShaper;
pub use tables::{joining_type, JoiningType};

/// Arabic shaping errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapingError {
    #[error("Invalid shaping options: {0}")]
    InvalidOptions(String),

    #[error("Invalid {what} range {start}..{end} for length {len}")]
    InvalidRange {
        what: &'static str,
        start: usize,
        end: usize,
        len: usize,
    },

    #[error("In-place shaping cannot change the text length")]
    InPlaceResize,

    #[error("Destination too small: {required} units required, {available} available")]
    BufferTooSmall { required: usize, available: usize },

    #[error("No room to expand lam-alef ({policy:?}): {required} spaces required, {available} available")]
    NoSpaceForExpansion {
        policy: LengthPolicy,
        required: usize,
        available: usize,
    },
}

pub type Result<T> = std::result::Result<T, ShapingError>;
