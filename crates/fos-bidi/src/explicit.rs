//! Matching isolates (BD9), paragraph level (P2/P3) and explicit levels (X1-X8)

use std::ops::Range;

use crate::{BidiClass, Level};

/// Isolate initiator / PDI pairing for a paragraph
#[derive(Debug, Clone)]
pub(crate) struct IsolatePairs {
    /// Matching PDI of each isolate initiator
    pub matching_pdi: Vec<Option<usize>>,
    /// Matching isolate initiator of each PDI
    pub matching_initiator: Vec<Option<usize>>,
}

impl IsolatePairs {
    /// BD9: pair every isolate initiator with its PDI.
    pub fn new(classes: &[BidiClass]) -> Self {
        let mut matching_pdi = vec![None; classes.len()];
        let mut matching_initiator = vec![None; classes.len()];
        let mut open: Vec<usize> = Vec::new();

        for (i, &class) in classes.iter().enumerate() {
            match class {
                BidiClass::LRI | BidiClass::RLI | BidiClass::FSI => open.push(i),
                BidiClass::PDI => {
                    if let Some(initiator) = open.pop() {
                        matching_pdi[initiator] = Some(i);
                        matching_initiator[i] = Some(initiator);
                    }
                }
                BidiClass::B => open.clear(),
                _ => {}
            }
        }

        Self {
            matching_pdi,
            matching_initiator,
        }
    }

    /// End of the span isolated by the initiator at `index`
    pub fn isolate_end(&self, index: usize, len: usize) -> usize {
        self.matching_pdi[index].unwrap_or(len)
    }
}

/// P2/P3: level implied by the first strong character in `range`,
/// skipping isolated spans.
pub(crate) fn first_strong_level(
    classes: &[BidiClass],
    isolates: &IsolatePairs,
    range: Range<usize>,
) -> Option<Level> {
    let mut i = range.start;
    while i < range.end {
        match classes[i] {
            BidiClass::L => return Some(Level::LTR),
            BidiClass::R | BidiClass::AL => return Some(Level::RTL),
            BidiClass::LRI | BidiClass::RLI | BidiClass::FSI => {
                i = isolates.isolate_end(i, classes.len());
            }
            BidiClass::B => break,
            _ => {}
        }
        i += 1;
    }
    None
}

#[derive(Debug, Clone, Copy)]
struct Status {
    level: Level,
    /// Forced strong type under a directional override
    override_class: Option<BidiClass>,
    isolate: bool,
}

/// X1-X8: assign explicit levels.
///
/// `types` holds the initial classes on entry; characters under an active
/// override have their type replaced by L or R.
pub(crate) fn explicit_levels(
    types: &mut [BidiClass],
    isolates: &IsolatePairs,
    paragraph_level: Level,
) -> Vec<Level> {
    let len = types.len();
    let mut levels = vec![paragraph_level; len];

    // Max depth + 2 entries: the paragraph entry plus one per level
    let mut stack: Vec<Status> = Vec::with_capacity(Level::MAX as usize + 2);
    stack.push(Status {
        level: paragraph_level,
        override_class: None,
        isolate: false,
    });

    let mut overflow_isolates = 0usize;
    let mut overflow_embeddings = 0usize;
    let mut valid_isolates = 0usize;

    for i in 0..len {
        let class = types[i];
        let Some(&top) = stack.last() else {
            unreachable!("directional status stack lost its paragraph entry");
        };

        match class {
            BidiClass::RLE
            | BidiClass::LRE
            | BidiClass::RLO
            | BidiClass::LRO
            | BidiClass::RLI
            | BidiClass::LRI
            | BidiClass::FSI => {
                let isolate = class.is_isolate_initiator();
                let rtl = match class {
                    BidiClass::RLE | BidiClass::RLO | BidiClass::RLI => true,
                    BidiClass::FSI => {
                        let end = isolates.isolate_end(i, len);
                        first_strong_level(types, isolates, i + 1..end) == Some(Level::RTL)
                    }
                    _ => false,
                };

                if isolate {
                    levels[i] = top.level;
                    if let Some(forced) = top.override_class {
                        types[i] = forced;
                    }
                }

                let next = if rtl {
                    top.level.next_rtl()
                } else {
                    top.level.next_ltr()
                };

                match next {
                    Some(level) if overflow_isolates == 0 && overflow_embeddings == 0 => {
                        if isolate {
                            valid_isolates += 1;
                        }
                        let override_class = match class {
                            BidiClass::LRO => Some(BidiClass::L),
                            BidiClass::RLO => Some(BidiClass::R),
                            _ => None,
                        };
                        stack.push(Status {
                            level,
                            override_class,
                            isolate,
                        });
                        if !isolate {
                            levels[i] = level;
                        }
                    }
                    _ => {
                        if isolate {
                            overflow_isolates += 1;
                        } else if overflow_isolates == 0 {
                            overflow_embeddings += 1;
                        }
                        if !isolate {
                            levels[i] = top.level;
                        }
                    }
                }
            }

            BidiClass::PDI => {
                if overflow_isolates > 0 {
                    overflow_isolates -= 1;
                } else if valid_isolates > 0 {
                    overflow_embeddings = 0;
                    while stack.last().is_some_and(|status| !status.isolate) {
                        stack.pop();
                    }
                    stack.pop();
                    valid_isolates -= 1;
                }
                if let Some(&status) = stack.last() {
                    levels[i] = status.level;
                    if let Some(forced) = status.override_class {
                        types[i] = forced;
                    }
                }
            }

            BidiClass::PDF => {
                levels[i] = top.level;
                if overflow_isolates > 0 {
                    // Inside an overflowed isolate: nothing to pop
                } else if overflow_embeddings > 0 {
                    overflow_embeddings -= 1;
                } else if !top.isolate && stack.len() >= 2 {
                    stack.pop();
                }
            }

            BidiClass::B => {
                // Only ever the last character of a paragraph
                stack.truncate(1);
                overflow_isolates = 0;
                overflow_embeddings = 0;
                valid_isolates = 0;
                levels[i] = paragraph_level;
            }

            _ => {
                levels[i] = top.level;
                if let Some(forced) = top.override_class {
                    types[i] = forced;
                }
            }
        }
    }

    levels
}
