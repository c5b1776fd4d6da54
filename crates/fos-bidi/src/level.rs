//! Embedding levels and paragraph direction

use serde::{Deserialize, Serialize};

use crate::{BidiClass, BidiError};

/// Embedding level (0-125 explicit, even=LTR, odd=RTL)
///
/// Implicit resolution may raise a level one past [`Level::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Level(pub u8);

impl Level {
    /// Maximum explicit embedding level
    pub const MAX: u8 = 125;

    /// LTR level 0
    pub const LTR: Level = Level(0);

    /// RTL level 1
    pub const RTL: Level = Level(1);

    /// Create new level
    pub fn new(level: u8) -> Option<Self> {
        if level <= Self::MAX {
            Some(Level(level))
        } else {
            None
        }
    }

    /// Check if LTR
    pub fn is_ltr(self) -> bool {
        self.0 % 2 == 0
    }

    /// Check if RTL
    pub fn is_rtl(self) -> bool {
        self.0 % 2 == 1
    }

    /// Least greater even level, if within the explicit range
    pub fn next_ltr(self) -> Option<Self> {
        self.0.checked_add(2).and_then(|n| Self::new(n & !1))
    }

    /// Least greater odd level, if within the explicit range
    pub fn next_rtl(self) -> Option<Self> {
        self.0.checked_add(1).and_then(|n| Self::new(n | 1))
    }

    /// Strong type matching the direction of this level
    pub fn direction(self) -> BidiClass {
        if self.is_rtl() {
            BidiClass::R
        } else {
            BidiClass::L
        }
    }

    pub(crate) fn raise(self, by: u8) -> Self {
        Level(self.0.saturating_add(by))
    }
}

/// Requested paragraph direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParagraphDirection {
    /// Paragraph level 0
    Ltr,
    /// Paragraph level 1
    Rtl,
    /// Detect from the first strong character (rules P2/P3)
    #[default]
    Auto,
}

impl TryFrom<i8> for ParagraphDirection {
    type Error = BidiError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ParagraphDirection::Ltr),
            1 => Ok(ParagraphDirection::Rtl),
            -1 => Ok(ParagraphDirection::Auto),
            _ => Err(BidiError::InvalidParagraphLevel(value)),
        }
    }
}
