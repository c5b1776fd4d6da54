//! Paired bracket algorithm (BD16) and rule N0
//!
//! Works on one isolating run sequence at a time. Positions in a
//! [`BracketPair`] are offsets into the sequence, not paragraph indices.

use crate::{BidiClass, BracketType, Level};

/// Maximum number of pending opening brackets (BD16)
pub const MAX_PAIRING_DEPTH: usize = 63;

/// A matched opening/closing bracket pair within a run sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct BracketPair {
    pub opener: usize,
    pub closer: usize,
}

/// Per-sequence input to bracket resolution
#[derive(Debug, Clone, Copy)]
pub struct BracketInput<'a> {
    /// Paragraph indices of the sequence, in order
    pub indices: &'a [usize],
    /// Paragraph-wide initial classes
    pub initial_classes: &'a [BidiClass],
    /// Paragraph-wide bracket types
    pub bracket_types: &'a [BracketType],
    /// Paragraph-wide bracket values
    pub bracket_values: &'a [u32],
    pub sos: BidiClass,
    pub level: Level,
}

/// BD16: locate bracket pairs, sorted by opener position.
///
/// `types` are the sequence's current resolved types; only characters
/// still typed ON take part.
pub fn locate_brackets(input: &BracketInput<'_>, types: &[BidiClass]) -> Vec<BracketPair> {
    let mut openers: Vec<usize> = Vec::new();
    let mut pairs = Vec::new();

    for (position, &index) in input.indices.iter().enumerate() {
        if types[position] != BidiClass::ON {
            continue;
        }
        match input.bracket_types[index] {
            BracketType::Open => {
                if openers.len() == MAX_PAIRING_DEPTH {
                    tracing::warn!(
                        "bracket stack overflow at index {}, pairing stopped",
                        index
                    );
                    break;
                }
                openers.push(position);
            }
            BracketType::Close => {
                let value = input.bracket_values[index];
                let found = openers
                    .iter()
                    .rposition(|&opener| input.bracket_values[input.indices[opener]] == value);
                if let Some(slot) = found {
                    pairs.push(BracketPair {
                        opener: openers[slot],
                        closer: position,
                    });
                    openers.truncate(slot);
                }
            }
            BracketType::None => {}
        }
    }

    pairs.sort_unstable();
    pairs
}

/// Strong direction as seen by N0: numbers count as R.
fn strong_for_n0(class: BidiClass) -> Option<BidiClass> {
    match class {
        BidiClass::L => Some(BidiClass::L),
        BidiClass::R | BidiClass::AL | BidiClass::EN | BidiClass::AN => Some(BidiClass::R),
        _ => None,
    }
}

/// Strong direction inside the pair: the embedding direction if present,
/// otherwise the opposite one if present.
fn classify_pair_content(
    pair: BracketPair,
    types: &[BidiClass],
    embedding: BidiClass,
) -> Option<BidiClass> {
    let mut opposite = None;
    for &class in &types[pair.opener + 1..pair.closer] {
        match strong_for_n0(class) {
            Some(dir) if dir == embedding => return Some(dir),
            Some(dir) => opposite = Some(dir),
            None => {}
        }
    }
    opposite
}

fn class_before_pair(pair: BracketPair, types: &[BidiClass], sos: BidiClass) -> BidiClass {
    types[..pair.opener]
        .iter()
        .rev()
        .find_map(|&class| strong_for_n0(class))
        .unwrap_or(sos)
}

fn set_brackets_to_type(
    input: &BracketInput<'_>,
    pair: BracketPair,
    types: &mut [BidiClass],
    dir: BidiClass,
) {
    types[pair.opener] = dir;
    types[pair.closer] = dir;

    // Marks following a bracket follow its new type
    for position in [pair.opener, pair.closer] {
        for next in position + 1..types.len() {
            if input.initial_classes[input.indices[next]] != BidiClass::NSM {
                break;
            }
            types[next] = dir;
        }
    }
}

/// N0: resolve the types of paired brackets in place.
pub fn resolve_paired_brackets(input: &BracketInput<'_>, types: &mut [BidiClass]) {
    let embedding = input.level.direction();

    for pair in locate_brackets(input, types) {
        let Some(mut dir) = classify_pair_content(pair, types, embedding) else {
            // No strong content: left to N1/N2
            continue;
        };
        if dir != embedding && class_before_pair(pair, types, input.sos) != dir {
            dir = embedding;
        }
        set_brackets_to_type(input, pair, types, dir);
    }
}
