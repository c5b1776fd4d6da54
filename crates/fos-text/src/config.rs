//! Display configuration

use fos_arabic::ShapingOptions;
use fos_bidi::ParagraphDirection;
use serde::{Deserialize, Serialize};

/// Display text options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Paragraph direction, or detection from the first strong character
    pub direction: ParagraphDirection,

    /// Arabic shaping applied before reordering; `None` leaves letters alone
    pub shaping: Option<ShapingOptions>,

    /// Drop bidi formatting characters from the output
    pub strip_controls: bool,

    /// Replace mirrored characters at right-to-left levels
    pub mirror: bool,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            direction: ParagraphDirection::Auto,
            shaping: Some(ShapingOptions::default()),
            strip_controls: true,
            mirror: true,
        }
    }
}
