//! fOS Text - Display text preparation
//!
//! This crate turns logical text into the string a renderer draws left
//! to right:
//! - Paragraph splitting
//! - Arabic shaping (fos-arabic)
//! - Bidi resolution and reordering (fos-bidi)
//! - Mirroring of brackets in right-to-left runs
//!
//! # Example
//!
//! ```
//! use fos_text::{display_text, TextConfig};
//!
//! let visual = display_text("abc \u{05D0}\u{05D1}", &TextConfig::default()).unwrap();
//! assert_eq!(visual, "abc \u{05D1}\u{05D0}");
//! ```

mod config;
mod display;

pub use config::TextConfig;
pub use display::{display_paragraphs, display_text, DisplayParagraph};

// Re-export sub-crates for advanced usage
pub use fos_arabic as arabic;
pub use fos_bidi as bidi;
pub use fos_unicode as unicode;

/// Text preparation error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TextError {
    #[error("Bidi resolution failed: {0}")]
    Bidi(#[from] fos_bidi::BidiError),

    #[error("Shaping failed: {0}")]
    Shaping(#[from] fos_arabic::ShapingError),
}

pub type Result<T> = std::result::Result<T, TextError>;
