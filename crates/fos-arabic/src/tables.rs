//! Arabic joining data and presentation form tables

/// Arabic joining type (from Unicode data)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JoiningType {
    /// Right joining (connects to the preceding letter only)
    Right,
    /// Left joining (connects to the following letter only)
    Left,
    /// Dual joining (connects both sides)
    Dual,
    /// Causing (tatweel, ZWJ): joins both sides, never changes shape
    Causing,
    #[default]
    NonJoining,
    /// Transparent (marks, don't affect joining)
    Transparent,
}

/// Joining type of a UTF-16 code unit
pub fn joining_type(unit: u16) -> JoiningType {
    match unit {
        // Right-joining: alef variants, teh marbuta, dal to zain, waw, yeh barree
        0x0622..=0x0625
        | 0x0627
        | 0x0629
        | 0x062F..=0x0632
        | 0x0648
        | 0x0671..=0x0673
        | 0x0675..=0x0677
        | 0x0688..=0x0699
        | 0x06C0
        | 0x06C3..=0x06CB
        | 0x06CD
        | 0x06CF
        | 0x06D2..=0x06D3
        | 0x06D5
        | 0x06EE..=0x06EF
        | 0x0759..=0x075B
        | 0x076B..=0x076C
        | 0x0771
        | 0x0773..=0x0774
        | 0x0778..=0x0779 => JoiningType::Right,

        // Dual-joining: yeh with hamza, beh, teh to khah, seen to ghain, feh to yeh
        0x0626
        | 0x0628
        | 0x062A..=0x062E
        | 0x0633..=0x063F
        | 0x0641..=0x0647
        | 0x0649..=0x064A
        | 0x066E..=0x066F
        | 0x0678..=0x0687
        | 0x069A..=0x06BF
        | 0x06C1..=0x06C2
        | 0x06CC
        | 0x06CE
        | 0x06D0..=0x06D1
        | 0x06FA..=0x06FC
        | 0x06FF
        | 0x0750..=0x077F
        | 0x08A0..=0x08C7 => JoiningType::Dual,

        // Combining marks, superscript alef and variation selectors
        0x0610..=0x061A
        | 0x064B..=0x065F
        | 0x0670
        | 0x06D6..=0x06DC
        | 0x06DF..=0x06E4
        | 0x06E7..=0x06E8
        | 0x06EA..=0x06ED
        | 0x08D3..=0x08E1
        | 0x08E3..=0x08FF
        | 0xFE00..=0xFE0F => JoiningType::Transparent,

        // Tatweel and zero-width joiner
        0x0640 | 0x200D => JoiningType::Causing,

        _ => JoiningType::NonJoining,
    }
}

/// Positional form, as an offset from the isolated presentation form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PositionalForm {
    Isolated = 0,
    Final = 1,
    Initial = 2,
    Medial = 3,
}

pub(crate) const SPACE: u16 = 0x0020;
pub(crate) const LAM: u16 = 0x0644;
pub(crate) const SHADDA: u16 = 0x0651;
pub(crate) const TATWEEL: u16 = 0x0640;
pub(crate) const HAMZA_ISOLATED: u16 = 0xFE80;

// Link flags. "Right" is towards the preceding letter in reading order.
const JOINS_RIGHT: u8 = 1;
const JOINS_LEFT: u8 = 2;
const TRANSPARENT: u8 = 4;
const LAM_TYPE: u8 = 8;
const ALEF_TYPE: u8 = 16;

/// Joining behaviour of one cell during shaping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct Link {
    flags: u8,
    /// Isolated presentation form; the other forms follow it
    pub forms: Option<u16>,
}

impl Link {
    pub const NONE: Link = Link {
        flags: 0,
        forms: None,
    };

    pub const TRANSPARENT: Link = Link {
        flags: TRANSPARENT,
        forms: None,
    };

    pub fn joins_right(self) -> bool {
        self.flags & JOINS_RIGHT != 0
    }

    pub fn joins_left(self) -> bool {
        self.flags & JOINS_LEFT != 0
    }

    pub fn is_transparent(self) -> bool {
        self.flags & TRANSPARENT != 0
    }

    pub fn is_lam(self) -> bool {
        self.flags & LAM_TYPE != 0
    }

    pub fn is_alef(self) -> bool {
        self.flags & ALEF_TYPE != 0
    }
}

/// Positional form by the joining bits of (next, last, current)
///
/// Each index is `JOINS_RIGHT | JOINS_LEFT` of that cell. A cell joins the
/// previous letter when it joins right and the previous joins left, and
/// the next letter when it joins left and the next joins right.
const FORM_TABLE: [[[PositionalForm; 4]; 4]; 4] = {
    use PositionalForm::{Final as F, Initial as N, Isolated as I, Medial as M};
    [
        [
            [I, I, I, I],
            [I, I, I, I],
            [I, F, I, F],
            [I, F, I, F],
        ],
        [
            [I, I, N, N],
            [I, I, N, N],
            [I, F, N, M],
            [I, F, N, M],
        ],
        [
            [I, I, I, I],
            [I, I, I, I],
            [I, F, I, F],
            [I, F, I, F],
        ],
        [
            [I, I, N, N],
            [I, I, N, N],
            [I, F, N, M],
            [I, F, N, M],
        ],
    ]
};

/// Select the positional form of `curr` from its neighbours.
///
/// `last` is the preceding non-transparent cell and `next` the following
/// one.
pub(crate) fn positional_form(next: Link, last: Link, curr: Link) -> PositionalForm {
    let joining = |link: Link| usize::from(link.flags & (JOINS_RIGHT | JOINS_LEFT));
    FORM_TABLE[joining(next)][joining(last)][joining(curr)]
}

/// Base letter, isolated form and form count in the FE70 block
const LETTER_FORMS: &[(u16, u16, u8)] = &[
    (0x0622, 0xFE81, 2), // Alef with madda
    (0x0623, 0xFE83, 2),
    (0x0624, 0xFE85, 2),
    (0x0625, 0xFE87, 2),
    (0x0626, 0xFE89, 4), // Yeh with hamza
    (0x0627, 0xFE8D, 2), // Alef
    (0x0628, 0xFE8F, 4), // Beh
    (0x0629, 0xFE93, 2),
    (0x062A, 0xFE95, 4),
    (0x062B, 0xFE99, 4),
    (0x062C, 0xFE9D, 4),
    (0x062D, 0xFEA1, 4),
    (0x062E, 0xFEA5, 4),
    (0x062F, 0xFEA9, 2),
    (0x0630, 0xFEAB, 2),
    (0x0631, 0xFEAD, 2),
    (0x0632, 0xFEAF, 2),
    (0x0633, 0xFEB1, 4), // Seen
    (0x0634, 0xFEB5, 4),
    (0x0635, 0xFEB9, 4),
    (0x0636, 0xFEBD, 4),
    (0x0637, 0xFEC1, 4),
    (0x0638, 0xFEC5, 4),
    (0x0639, 0xFEC9, 4),
    (0x063A, 0xFECD, 4),
    (0x0641, 0xFED1, 4), // Feh
    (0x0642, 0xFED5, 4),
    (0x0643, 0xFED9, 4),
    (0x0644, 0xFEDD, 4), // Lam
    (0x0645, 0xFEE1, 4),
    (0x0646, 0xFEE5, 4),
    (0x0647, 0xFEE9, 4),
    (0x0648, 0xFEED, 2), // Waw
    (0x0649, 0xFEEF, 2), // Alef maksura
    (0x064A, 0xFEF1, 4), // Yeh
];

/// First and last presentation form, and base letter, in the FB50 block
const EXTENDED_FORMS: &[(u16, u16, u16)] = &[
    (0xFB50, 0xFB51, 0x0671), // Alef wasla
    (0xFB52, 0xFB55, 0x067B),
    (0xFB56, 0xFB59, 0x067E), // Peh
    (0xFB5A, 0xFB5D, 0x0680),
    (0xFB5E, 0xFB61, 0x067A),
    (0xFB62, 0xFB65, 0x067F),
    (0xFB66, 0xFB69, 0x0679),
    (0xFB6A, 0xFB6D, 0x06A4),
    (0xFB6E, 0xFB71, 0x06A6),
    (0xFB72, 0xFB75, 0x0684),
    (0xFB76, 0xFB79, 0x0683),
    (0xFB7A, 0xFB7D, 0x0686), // Tcheh
    (0xFB7E, 0xFB81, 0x0687),
    (0xFB82, 0xFB83, 0x068D),
    (0xFB84, 0xFB85, 0x068C),
    (0xFB86, 0xFB87, 0x068E),
    (0xFB88, 0xFB89, 0x0688),
    (0xFB8A, 0xFB8B, 0x0698), // Jeh
    (0xFB8C, 0xFB8D, 0x0691),
    (0xFB8E, 0xFB91, 0x06A9), // Keheh
    (0xFB92, 0xFB95, 0x06AF), // Gaf
    (0xFB96, 0xFB99, 0x06B3),
    (0xFB9A, 0xFB9D, 0x06B1),
    (0xFB9E, 0xFB9F, 0x06BA),
    (0xFBA0, 0xFBA3, 0x06BB),
    (0xFBA4, 0xFBA5, 0x06C0),
    (0xFBA6, 0xFBA9, 0x06C1),
    (0xFBAA, 0xFBAD, 0x06BE),
    (0xFBAE, 0xFBAF, 0x06D2),
    (0xFBB0, 0xFBB1, 0x06D3),
    (0xFBD3, 0xFBD6, 0x06AD),
    (0xFBD7, 0xFBD8, 0x06C7),
    (0xFBD9, 0xFBDA, 0x06C6),
    (0xFBDB, 0xFBDC, 0x06C8),
    (0xFBDE, 0xFBDF, 0x06CB),
    (0xFBE0, 0xFBE1, 0x06C5),
    (0xFBE2, 0xFBE3, 0x06C9),
    (0xFBE4, 0xFBE7, 0x06D0),
    (0xFBE8, 0xFBE9, 0x0649),
    (0xFBFC, 0xFBFF, 0x06CC), // Farsi yeh
];

fn letter_forms(base: u16) -> Option<(u16, u8)> {
    LETTER_FORMS
        .binary_search_by_key(&base, |&(letter, _, _)| letter)
        .ok()
        .map(|index| (LETTER_FORMS[index].1, LETTER_FORMS[index].2))
}

fn extended_forms(base: u16) -> Option<(u16, u16)> {
    EXTENDED_FORMS
        .iter()
        .find(|&&(_, _, letter)| letter == base)
        .map(|&(first, last, _)| (first, last - first + 1))
}

pub(crate) fn is_tashkeel(unit: u16) -> bool {
    (0x064B..=0x0652).contains(&unit)
}

/// Presentation form of a tashkeel mark, isolated or on tatweel
pub(crate) fn tashkeel_form(unit: u16, medial: bool) -> u16 {
    0xFE70 + (unit - 0x064B) * 2 + u16::from(medial)
}

/// Lam-alef ligature (isolated form) for an alef
pub(crate) fn lam_alef_ligature(alef: u16) -> Option<u16> {
    match alef {
        0x0622 => Some(0xFEF5),
        0x0623 => Some(0xFEF7),
        0x0625 => Some(0xFEF9),
        0x0627 => Some(0xFEFB),
        _ => None,
    }
}

/// Alef contained in a lam-alef ligature, either form
pub(crate) fn lam_alef_alef(unit: u16) -> Option<u16> {
    match unit {
        0xFEF5 | 0xFEF6 => Some(0x0622),
        0xFEF7 | 0xFEF8 => Some(0x0623),
        0xFEF9 | 0xFEFA => Some(0x0625),
        0xFEFB | 0xFEFC => Some(0x0627),
        _ => None,
    }
}

/// Isolated and final forms of the seen family, which carry a tail
pub(crate) fn is_seen_tail_form(unit: u16) -> bool {
    matches!(
        unit,
        0xFEB1 | 0xFEB2 | 0xFEB5 | 0xFEB6 | 0xFEB9 | 0xFEBA | 0xFEBD | 0xFEBE
    )
}

/// Joining behaviour of a code unit
pub(crate) fn link(unit: u16) -> Link {
    match unit {
        // Hamza has a single, isolated form
        0x0621 => Link {
            flags: 0,
            forms: Some(HAMZA_ISOLATED),
        },
        0xFE73 | 0xFE75 => Link::NONE,
        0xFE70..=0xFE7F => Link::TRANSPARENT,
        0xFEF5..=0xFEFC => Link {
            flags: JOINS_RIGHT,
            forms: Some(unit - ((unit - 0xFEF5) & 1)),
        },
        _ => {
            if let Some((first, count)) = letter_forms(unit) {
                let mut flags = if count == 4 {
                    JOINS_RIGHT | JOINS_LEFT
                } else {
                    JOINS_RIGHT
                };
                if unit == LAM {
                    flags |= LAM_TYPE;
                }
                if lam_alef_ligature(unit).is_some() {
                    flags |= ALEF_TYPE;
                }
                return Link {
                    flags,
                    forms: Some(first),
                };
            }

            let flags = match joining_type(unit) {
                JoiningType::Dual | JoiningType::Causing => JOINS_RIGHT | JOINS_LEFT,
                JoiningType::Right => JOINS_RIGHT,
                JoiningType::Left => JOINS_LEFT,
                JoiningType::Transparent => TRANSPARENT,
                JoiningType::NonJoining => 0,
            };
            // Extended letters are shaped only when every form exists
            let expected = match flags & (JOINS_RIGHT | JOINS_LEFT) {
                3 => 4,
                JOINS_RIGHT => 2,
                _ => 0,
            };
            let forms = extended_forms(unit)
                .filter(|&(_, count)| count == expected)
                .map(|(first, _)| first);
            Link { flags, forms }
        }
    }
}

/// Map a presentation form back to its base character.
///
/// Lam-alef ligatures are kept as their isolated ligature, and the tail
/// glyph U+FE73 is left alone.
pub(crate) fn base_form(unit: u16) -> u16 {
    match unit {
        0xFE73 | 0xFE75 => unit,
        0xFE70..=0xFE7F => 0x064B + (unit - 0xFE70) / 2,
        HAMZA_ISOLATED => 0x0621,
        0xFE81..=0xFEF4 => LETTER_FORMS
            .iter()
            .find(|&&(_, first, count)| (first..first + u16::from(count)).contains(&unit))
            .map_or(unit, |&(base, _, _)| base),
        0xFEF5..=0xFEFC => unit - ((unit - 0xFEF5) & 1),
        0xFB50..=0xFBFF => EXTENDED_FORMS
            .iter()
            .find(|&&(first, last, _)| (first..=last).contains(&unit))
            .map_or(unit, |&(_, _, base)| base),
        _ => unit,
    }
}
