//! Line-based resolution: whitespace reset (L1) and reordering (L2)

use crate::{BidiClass, BidiError, Level, Result};

/// Bidi run (contiguous sequence at same level)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BidiRun {
    /// Start index in text
    pub start: usize,
    /// End index in text (exclusive)
    pub end: usize,
    /// Embedding level
    pub level: Level,
}

impl BidiRun {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Check caller-supplied line breaks against a text length.
pub(crate) fn validate_line_breaks(line_breaks: &[usize], len: usize) -> Result<()> {
    if len == 0 && (line_breaks.is_empty() || line_breaks == [0]) {
        return Ok(());
    }

    let mut previous = 0;
    for &offset in line_breaks {
        if offset <= previous {
            return Err(BidiError::InvalidLineBreaks(format!(
                "offset {offset} does not follow {previous}"
            )));
        }
        previous = offset;
    }
    if previous != len {
        return Err(BidiError::InvalidLineBreaks(format!(
            "last offset {previous} is not the text length {len}"
        )));
    }
    Ok(())
}

fn reset_whitespace_before(
    initial: &[BidiClass],
    levels: &mut [Level],
    range: std::ops::Range<usize>,
    paragraph_level: Level,
) {
    for j in range.rev() {
        if !initial[j].is_whitespace_for_l1() {
            break;
        }
        levels[j] = paragraph_level;
    }
}

/// L1: reset separators and trailing whitespace to the paragraph level.
///
/// `line_breaks` must already be validated.
pub(crate) fn line_levels(
    initial: &[BidiClass],
    resolved: &[Level],
    paragraph_level: Level,
    line_breaks: &[usize],
) -> Vec<Level> {
    let mut levels = resolved.to_vec();

    for (i, &class) in initial.iter().enumerate() {
        if matches!(class, BidiClass::B | BidiClass::S) {
            levels[i] = paragraph_level;
            reset_whitespace_before(initial, &mut levels, 0..i, paragraph_level);
        }
    }

    let mut start = 0;
    for &end in line_breaks {
        reset_whitespace_before(initial, &mut levels, start..end, paragraph_level);
        start = end;
    }

    levels
}

/// L2: visual-to-logical permutation for a single line of levels.
///
/// Entry `i` of the result is the logical index displayed at visual
/// position `i`.
pub fn compute_reordering(levels: &[Level]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..levels.len()).collect();

    let Some(highest) = levels.iter().map(|level| level.0).max() else {
        return order;
    };
    let Some(lowest_odd) = levels
        .iter()
        .map(|level| level.0)
        .filter(|level| level % 2 == 1)
        .min()
    else {
        return order;
    };

    for threshold in (lowest_odd..=highest).rev() {
        let mut i = 0;
        while i < levels.len() {
            if levels[i].0 < threshold {
                i += 1;
                continue;
            }
            let start = i;
            while i < levels.len() && levels[i].0 >= threshold {
                i += 1;
            }
            order[start..i].reverse();
        }
    }

    order
}

/// Invert a reordering: logical-to-visual from visual-to-logical (or back).
pub fn inverse_reordering(order: &[usize]) -> Vec<usize> {
    let mut inverse = vec![0; order.len()];
    for (position, &index) in order.iter().enumerate() {
        inverse[index] = position;
    }
    inverse
}

/// L2 applied per line of already line-adjusted levels.
pub(crate) fn multiline_reordering(levels: &[Level], line_breaks: &[usize]) -> Vec<usize> {
    let mut order = Vec::with_capacity(levels.len());
    let mut start = 0;
    for &end in line_breaks {
        order.extend(
            compute_reordering(&levels[start..end])
                .into_iter()
                .map(|index| index + start),
        );
        start = end;
    }
    order
}

/// Runs of one line in visual order.
pub(crate) fn visual_runs(levels: &[Level], start: usize, end: usize) -> Vec<BidiRun> {
    let mut runs = Vec::new();
    let mut run_start = start;
    for i in start + 1..end {
        if levels[i] != levels[run_start] {
            runs.push(BidiRun {
                start: run_start,
                end: i,
                level: levels[run_start],
            });
            run_start = i;
        }
    }
    if run_start < end {
        runs.push(BidiRun {
            start: run_start,
            end,
            level: levels[run_start],
        });
    }

    let highest = runs.iter().map(|run| run.level.0).max().unwrap_or(0);
    let lowest_odd = runs
        .iter()
        .map(|run| run.level.0)
        .filter(|level| level % 2 == 1)
        .min()
        .unwrap_or(highest + 1);

    // Reverse runs at each level
    for threshold in (lowest_odd..=highest).rev() {
        let mut i = 0;
        while i < runs.len() {
            if runs[i].level.0 >= threshold {
                let first = i;
                while i < runs.len() && runs[i].level.0 >= threshold {
                    i += 1;
                }
                runs[first..i].reverse();
            }
            i += 1;
        }
    }

    runs
}
