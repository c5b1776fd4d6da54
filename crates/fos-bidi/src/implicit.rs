//! Weak types (W1-W7), neutral types (N1-N2) and implicit levels (I1-I2)
//!
//! All functions operate on the resolved types of one isolating run
//! sequence, indexed by position within the sequence.

use crate::{BidiClass, Level};

/// W1-W7
pub(crate) fn resolve_weak_types(types: &mut [BidiClass], sos: BidiClass, eos: BidiClass) {
    let len = types.len();

    // W1: NSM takes the type of the previous character
    let mut preceding = sos;
    for class in types.iter_mut() {
        if *class == BidiClass::NSM {
            *class = preceding;
        } else if class.is_isolate_control() {
            preceding = BidiClass::ON;
        } else {
            preceding = *class;
        }
    }

    // W2: EN after AL becomes AN
    let mut last_strong = sos;
    for class in types.iter_mut() {
        match *class {
            BidiClass::L | BidiClass::R | BidiClass::AL => last_strong = *class,
            BidiClass::EN if last_strong == BidiClass::AL => *class = BidiClass::AN,
            _ => {}
        }
    }

    // W3: AL becomes R
    for class in types.iter_mut() {
        if *class == BidiClass::AL {
            *class = BidiClass::R;
        }
    }

    // W4: single separator between two numbers of the same kind
    for i in 1..len.saturating_sub(1) {
        let prev = types[i - 1];
        let next = types[i + 1];
        match types[i] {
            BidiClass::ES if prev == BidiClass::EN && next == BidiClass::EN => {
                types[i] = BidiClass::EN;
            }
            BidiClass::CS
                if prev == next && matches!(prev, BidiClass::EN | BidiClass::AN) =>
            {
                types[i] = prev;
            }
            _ => {}
        }
    }

    // W5: terminators adjacent to EN become EN
    let mut i = 0;
    while i < len {
        if types[i] != BidiClass::ET {
            i += 1;
            continue;
        }
        let start = i;
        while i < len && types[i] == BidiClass::ET {
            i += 1;
        }
        let before = if start == 0 { sos } else { types[start - 1] };
        let after = if i == len { eos } else { types[i] };
        if before == BidiClass::EN || after == BidiClass::EN {
            types[start..i].fill(BidiClass::EN);
        }
    }

    // W6: remaining separators and terminators become ON
    for class in types.iter_mut() {
        if matches!(*class, BidiClass::ES | BidiClass::ET | BidiClass::CS) {
            *class = BidiClass::ON;
        }
    }

    // W7: EN after L becomes L
    let mut last_strong = sos;
    for class in types.iter_mut() {
        match *class {
            BidiClass::L | BidiClass::R => last_strong = *class,
            BidiClass::EN if last_strong == BidiClass::L => *class = BidiClass::L,
            _ => {}
        }
    }
}

/// Direction of a character bounding a neutral run
fn boundary_direction(class: BidiClass) -> BidiClass {
    match class {
        BidiClass::EN | BidiClass::AN => BidiClass::R,
        other => other,
    }
}

/// N1-N2
pub(crate) fn resolve_neutral_types(
    types: &mut [BidiClass],
    sos: BidiClass,
    eos: BidiClass,
    level: Level,
) {
    let len = types.len();
    let mut i = 0;
    while i < len {
        if !types[i].is_neutral_or_isolate() {
            i += 1;
            continue;
        }
        let start = i;
        while i < len && types[i].is_neutral_or_isolate() {
            i += 1;
        }

        let leading = if start == 0 {
            sos
        } else {
            boundary_direction(types[start - 1])
        };
        let trailing = if i == len {
            eos
        } else {
            boundary_direction(types[i])
        };

        let resolved = if leading == trailing {
            leading
        } else {
            level.direction()
        };
        types[start..i].fill(resolved);
    }
}

/// I1-I2
pub(crate) fn resolve_implicit_levels(types: &[BidiClass], level: Level) -> Vec<Level> {
    types
        .iter()
        .map(|&class| {
            if level.is_ltr() {
                match class {
                    BidiClass::R => level.raise(1),
                    BidiClass::AN | BidiClass::EN => level.raise(2),
                    _ => level,
                }
            } else {
                match class {
                    BidiClass::L | BidiClass::EN | BidiClass::AN => level.raise(1),
                    _ => level,
                }
            }
        })
        .collect()
}
