//! Letter shaping over a visual-order buffer
//!
//! The buffer is walked from the highest index down, which is reading
//! order for right-to-left text.

use crate::tables::{
    base_form, is_tashkeel, lam_alef_ligature, link, positional_form, tashkeel_form, Link,
    SHADDA, SPACE, TATWEEL,
};

/// One position of the working buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Cell {
    Char(u16),
    /// Left behind by an alef merged into a lam-alef ligature
    LamAlefSpace,
    /// Left behind by a removed tashkeel mark
    TashkeelSpace,
}

impl Cell {
    fn link(self) -> Link {
        match self {
            Cell::Char(unit) => link(unit),
            Cell::LamAlefSpace => Link::NONE,
            Cell::TashkeelSpace => Link::TRANSPARENT,
        }
    }
}

/// Treatment of tashkeel marks inside the letter pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TashkeelMode {
    /// On tatweel when joined on both sides
    Contextual,
    Isolated,
    /// Replaced by a generated space; shadda is kept on tatweel
    Remove,
}

/// Replace presentation forms by their base characters.
pub(crate) fn normalize(units: &mut [u16]) {
    for unit in units.iter_mut() {
        *unit = base_form(*unit);
    }
}

/// Select presentation forms and build lam-alef ligatures.
///
/// Returns the number of ligatures formed.
pub(crate) fn shape_letters(cells: &mut [Cell], mode: TashkeelMode) -> usize {
    let mut ligatures = 0;
    let mut prev = Link::NONE;
    let mut last = Link::NONE;
    let mut last_pos = 0;

    let mut i = cells.len();
    while i > 0 {
        i -= 1;
        let mut curr = cells[i].link();

        if curr.forms.is_some() || curr.is_transparent() {
            let next = cells[..i]
                .iter()
                .rev()
                .map(|cell| cell.link())
                .find(|l| !l.is_transparent())
                .unwrap_or(Link::NONE);

            if curr.is_alef() && last.is_lam() {
                if let Cell::Char(alef) = cells[i] {
                    if let Some(ligature) = lam_alef_ligature(alef) {
                        cells[i] = Cell::LamAlefSpace;
                        cells[last_pos] = Cell::Char(ligature);
                        i = last_pos;
                        last = prev;
                        curr = link(ligature);
                        ligatures += 1;
                    }
                }
            }

            if let Cell::Char(unit) = cells[i] {
                if is_tashkeel(unit) {
                    cells[i] = shape_tashkeel(unit, next, last, mode);
                } else if let Some(isolated) = curr.forms {
                    cells[i] = Cell::Char(isolated + positional_form(next, last, curr) as u16);
                }
            }
        }

        if !curr.is_transparent() {
            prev = last;
            last = curr;
            last_pos = i;
        }
    }

    ligatures
}

fn shape_tashkeel(unit: u16, next: Link, last: Link, mode: TashkeelMode) -> Cell {
    let medial = match mode {
        TashkeelMode::Contextual => {
            last.joins_left()
                && next.joins_right()
                && unit != 0x064C
                && unit != 0x064D
                // Between lam and alef the mark sits on the ligature
                && !(next.is_alef() && last.is_lam())
        }
        TashkeelMode::Isolated => false,
        TashkeelMode::Remove if unit == SHADDA => true,
        TashkeelMode::Remove => return Cell::TashkeelSpace,
    };
    Cell::Char(tashkeel_form(unit, medial))
}

/// Joined tashkeel becomes tatweel and isolated tashkeel a space.
///
/// Shadda keeps its own forms.
pub(crate) fn replace_tashkeel_by_tatweel(units: &mut [u16]) {
    for unit in units.iter_mut() {
        match *unit {
            0xFE71 | 0xFE77 | 0xFE79 | 0xFE7B | 0xFE7F => *unit = TATWEEL,
            0xFE70 | 0xFE72 | 0xFE74 | 0xFE76 | 0xFE78 | 0xFE7A | 0xFE7E => *unit = SPACE,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape(visual: &[u16], mode: TashkeelMode) -> Vec<Cell> {
        let mut cells: Vec<Cell> = visual.iter().map(|&u| Cell::Char(u)).collect();
        shape_letters(&mut cells, mode);
        cells
    }

    fn chars(units: &[u16]) -> Vec<Cell> {
        units.iter().map(|&u| Cell::Char(u)).collect()
    }

    #[test]
    fn test_two_beh() {
        // Visual order: second letter on the left
        assert_eq!(
            shape(&[0x0628, 0x0628], TashkeelMode::Contextual),
            chars(&[0xFE90, 0xFE91])
        );
    }

    #[test]
    fn test_medial_and_isolated() {
        // Meem, seen, beh in visual order
        assert_eq!(
            shape(&[0x0645, 0x0633, 0x0628], TashkeelMode::Contextual),
            chars(&[0xFEE2, 0xFEB4, 0xFE91])
        );
        assert_eq!(shape(&[0x0628], TashkeelMode::Contextual), chars(&[0xFE8F]));
    }

    #[test]
    fn test_space_breaks_joining() {
        assert_eq!(
            shape(&[0x0628, SPACE, 0x0628], TashkeelMode::Contextual),
            chars(&[0xFE8F, SPACE, 0xFE8F])
        );
    }

    #[test]
    fn test_right_joining_breaks_after() {
        // Beh, alef, beh: alef does not join to the following beh
        assert_eq!(
            shape(&[0x0628, 0x0627, 0x0628], TashkeelMode::Contextual),
            chars(&[0xFE8F, 0xFE8E, 0xFE91])
        );
    }

    #[test]
    fn test_lam_alef() {
        let mut cells = chars(&[0x0627, 0x0644]);
        assert_eq!(shape_letters(&mut cells, TashkeelMode::Contextual), 1);
        assert_eq!(cells, vec![Cell::LamAlefSpace, Cell::Char(0xFEFB)]);

        // Joined to a preceding feh
        assert_eq!(
            shape(&[0x0627, 0x0644, 0x0641], TashkeelMode::Contextual),
            vec![Cell::LamAlefSpace, Cell::Char(0xFEFC), Cell::Char(0xFED3)]
        );
    }

    #[test]
    fn test_tashkeel_modes() {
        let visual = [0x0628, 0x064E, 0x0628];
        assert_eq!(
            shape(&visual, TashkeelMode::Contextual),
            chars(&[0xFE90, 0xFE77, 0xFE91])
        );
        assert_eq!(
            shape(&visual, TashkeelMode::Isolated),
            chars(&[0xFE90, 0xFE76, 0xFE91])
        );
        assert_eq!(
            shape(&visual, TashkeelMode::Remove),
            vec![Cell::Char(0xFE90), Cell::TashkeelSpace, Cell::Char(0xFE91)]
        );
        assert_eq!(
            shape(&[0x0628, SHADDA, 0x0628], TashkeelMode::Remove),
            chars(&[0xFE90, 0xFE7D, 0xFE91])
        );
    }

    #[test]
    fn test_dammatan_stays_isolated() {
        assert_eq!(
            shape(&[0x0628, 0x064C, 0x0628], TashkeelMode::Contextual),
            chars(&[0xFE90, 0xFE72, 0xFE91])
        );
    }

    #[test]
    fn test_tashkeel_between_lam_and_alef() {
        assert_eq!(
            shape(&[0x0627, 0x064E, 0x0644], TashkeelMode::Contextual),
            vec![Cell::LamAlefSpace, Cell::Char(0xFE76), Cell::Char(0xFEFB)]
        );
    }

    #[test]
    fn test_tatweel_joins() {
        assert_eq!(
            shape(&[TATWEEL, 0x0628], TashkeelMode::Contextual),
            chars(&[TATWEEL, 0xFE91])
        );
    }

    #[test]
    fn test_normalize_and_replace() {
        let mut units = [0xFE91, 0xFE77, 0xFEFC, 0x0041];
        normalize(&mut units);
        assert_eq!(units, [0x0628, 0x064E, 0xFEFB, 0x0041]);

        let mut units = [0xFE77, 0xFE76, 0xFE7D, 0xFE91];
        replace_tashkeel_by_tatweel(&mut units);
        assert_eq!(units, [TATWEEL, SPACE, 0xFE7D, 0xFE91]);
    }
}
