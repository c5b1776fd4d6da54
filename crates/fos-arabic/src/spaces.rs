//! Spaces consumed or produced by ligatures, tails and removed marks
//!
//! All functions work on visual-order buffers. "Near" always means the
//! cell at the next lower index, i.e. logically after.

use crate::letters::Cell;
use crate::options::{
    LengthPolicy, SeenExpansion, ShapingOptions, SpaceReference, TashkeelPolicy, TextDirection,
    YehHamzaExpansion,
};
use crate::tables::{is_seen_tail_form, lam_alef_alef, HAMZA_ISOLATED, LAM, SPACE};
use crate::{Result, ShapingError};

/// End of the visual buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Site {
    Low,
    High,
}

/// (beginning, end) of the text as buffer ends
fn sites(options: &ShapingOptions) -> (Site, Site) {
    let begin_is_high = options.direction == TextDirection::Logical
        || options.space_reference == SpaceReference::Direction;
    if begin_is_high {
        (Site::High, Site::Low)
    } else {
        (Site::Low, Site::High)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placement {
    Remove,
    InPlace,
    At(Site),
}

fn placement(cell: Cell, options: &ShapingOptions) -> Placement {
    let (begin, end) = sites(options);
    match cell {
        Cell::Char(_) => Placement::InPlace,
        Cell::LamAlefSpace => match options.length {
            LengthPolicy::GrowShrink => Placement::Remove,
            LengthPolicy::FixedSpacesNear => Placement::InPlace,
            LengthPolicy::FixedSpacesAtEnd | LengthPolicy::FixedSpacesAuto => Placement::At(end),
            LengthPolicy::FixedSpacesAtBeginning => Placement::At(begin),
        },
        Cell::TashkeelSpace => match options.tashkeel {
            TashkeelPolicy::AtBeginning => Placement::At(begin),
            TashkeelPolicy::AtEnd => Placement::At(end),
            _ => Placement::Remove,
        },
    }
}

/// Resolve generated spaces into the final code units.
///
/// Under the near policy the cell freed by each lam-alef ligature becomes a
/// space, and every ligature must also border a space of its own in the
/// text; otherwise nothing is produced.
pub(crate) fn place_generated_spaces(
    cells: &[Cell],
    options: &ShapingOptions,
) -> Result<Vec<u16>> {
    if options.length == LengthPolicy::FixedSpacesNear {
        let (required, available) = near_room(cells);
        if available < required {
            tracing::debug!(
                "{} of {} lam-alef ligatures have no space nearby",
                required - available,
                required
            );
            return Err(ShapingError::NoSpaceForExpansion {
                policy: options.length,
                required,
                available,
            });
        }
    }

    let mut low = 0;
    let mut high = 0;
    let mut kept = Vec::with_capacity(cells.len());

    for &cell in cells {
        match (cell, placement(cell, options)) {
            (Cell::Char(unit), _) => kept.push(unit),
            (_, Placement::InPlace) => kept.push(SPACE),
            (_, Placement::Remove) => {}
            (_, Placement::At(Site::Low)) => low += 1,
            (_, Placement::At(Site::High)) => high += 1,
        }
    }

    let mut units = vec![SPACE; low];
    units.extend(kept);
    units.resize(units.len() + high, SPACE);
    Ok(units)
}

/// (ligatures, ligatures bordering an unclaimed space)
///
/// The space logically after the alef is tried first, then the one
/// logically before the lam. A space serves one ligature only.
fn near_room(cells: &[Cell]) -> (usize, usize) {
    let mut claimed = vec![false; cells.len()];
    let mut required = 0;
    let mut available = 0;

    for (i, cell) in cells.iter().enumerate() {
        if *cell != Cell::LamAlefSpace {
            continue;
        }
        required += 1;

        let before_lam = cells[i + 1..]
            .iter()
            .position(|c| matches!(c, Cell::Char(u) if lam_alef_alef(*u).is_some()))
            .map(|offset| i + offset + 2);
        let free = [i.checked_sub(1), before_lam]
            .into_iter()
            .flatten()
            .find(|&j| j < cells.len() && !claimed[j] && cells[j] == Cell::Char(SPACE));

        if let Some(j) = free {
            claimed[j] = true;
            available += 1;
        }
    }

    (required, available)
}

/// Seen tails and yeh-hamza take the space that follows them.
pub(crate) fn expand_tails(units: &mut [u16], options: &ShapingOptions) {
    let seen = options.seen != SeenExpansion::Off;
    let yeh_hamza = options.yeh_hamza != YehHamzaExpansion::Off;

    for i in 1..units.len() {
        if units[i - 1] != SPACE {
            continue;
        }
        match units[i] {
            unit if seen && is_seen_tail_form(unit) => {
                units[i - 1] = options.tail.code_unit();
            }
            // Isolated and final yeh with hamza above
            0xFE89 | 0xFE8A if yeh_hamza => {
                units[i] += 0xFEEF - 0xFE89;
                units[i - 1] = HAMZA_ISOLATED;
            }
            _ => {}
        }
    }
}

/// Give back the spaces taken by [`expand_tails`].
pub(crate) fn collapse_tails(units: &mut [u16], options: &ShapingOptions) {
    let seen = options.seen != SeenExpansion::Off;
    let yeh_hamza = options.yeh_hamza != YehHamzaExpansion::Off;

    for i in 0..units.len().saturating_sub(1) {
        let next = units[i + 1];
        match units[i] {
            0x0621 | HAMZA_ISOLATED
                if yeh_hamza && matches!(next, 0x0649 | 0xFEEF | 0xFEF0) =>
            {
                units[i] = SPACE;
                units[i + 1] = 0x0626;
            }
            0xFE73 | 0x200B if seen && is_seen_tail_form(next) => units[i] = SPACE,
            _ => {}
        }
    }
}

/// Split lam-alef ligatures into lam and alef, finding room as the length
/// policy says.
pub(crate) fn expand_lam_alef(units: Vec<u16>, options: &ShapingOptions) -> Result<Vec<u16>> {
    let required = units.iter().filter(|&&u| lam_alef_alef(u).is_some()).count();
    if required == 0 {
        return Ok(units);
    }

    let (begin, end) = sites(options);
    let attempt = match options.length {
        LengthPolicy::GrowShrink => Ok(grow(&units)),
        LengthPolicy::FixedSpacesNear => near(units),
        LengthPolicy::FixedSpacesAtEnd => at_site(&units, end, required),
        LengthPolicy::FixedSpacesAtBeginning => at_site(&units, begin, required),
        LengthPolicy::FixedSpacesAuto => {
            let order = match options.space_reference {
                SpaceReference::Direction => [end, begin],
                SpaceReference::TextBeginEnd => [begin, end],
            };
            at_site(&units, order[0], required)
                .or_else(|_| at_site(&units, order[1], required))
                .or_else(|_| near(units.clone()))
        }
    };

    attempt.map_err(|available| {
        tracing::debug!(
            "No room for {} lam-alef expansions ({} available)",
            required,
            available
        );
        ShapingError::NoSpaceForExpansion {
            policy: options.length,
            required,
            available,
        }
    })
}

/// Each ligature becomes alef (lower index) followed by lam.
fn grow(units: &[u16]) -> Vec<u16> {
    let mut expanded = Vec::with_capacity(units.len() + units.len() / 2);
    for &unit in units {
        match lam_alef_alef(unit) {
            Some(alef) => expanded.extend([alef, LAM]),
            None => expanded.push(unit),
        }
    }
    expanded
}

/// Every ligature needs a space directly after it, or nothing changes.
fn near(mut units: Vec<u16>) -> std::result::Result<Vec<u16>, usize> {
    let ligatures: Vec<usize> = (0..units.len())
        .filter(|&i| lam_alef_alef(units[i]).is_some())
        .collect();
    let available = ligatures
        .iter()
        .filter(|&&i| i > 0 && units[i - 1] == SPACE)
        .count();
    if available < ligatures.len() {
        return Err(available);
    }

    for i in ligatures {
        if let Some(alef) = lam_alef_alef(units[i]) {
            units[i - 1] = alef;
            units[i] = LAM;
        }
    }
    Ok(units)
}

/// Take spaces from one end of the buffer, then expand in place.
fn at_site(units: &[u16], site: Site, required: usize) -> std::result::Result<Vec<u16>, usize> {
    let available = match site {
        Site::Low => units.iter().take_while(|&&u| u == SPACE).count(),
        Site::High => units.iter().rev().take_while(|&&u| u == SPACE).count(),
    };
    if available < required {
        return Err(available);
    }

    let remaining = match site {
        Site::Low => &units[required..],
        Site::High => &units[..units.len() - required],
    };
    Ok(grow(remaining))
}
