//! Level runs and isolating run sequences (BD13, X9, X10)

use crate::explicit::IsolatePairs;
use crate::{BidiClass, Level};

/// One isolating run sequence, ready for weak/neutral/implicit resolution
#[derive(Debug, Clone)]
pub(crate) struct IsolatingRunSequence {
    /// Paragraph indices in logical order, X9-removed characters excluded
    pub indices: Vec<usize>,
    pub level: Level,
    /// Start-of-sequence type (L or R)
    pub sos: BidiClass,
    /// End-of-sequence type (L or R)
    pub eos: BidiClass,
}

/// X9: maximal runs of equal level, skipping removed characters.
fn level_runs(initial: &[BidiClass], levels: &[Level]) -> Vec<Vec<usize>> {
    let mut runs: Vec<Vec<usize>> = Vec::new();
    let mut current: Vec<usize> = Vec::new();
    let mut current_level = None;

    for (i, &class) in initial.iter().enumerate() {
        if class.is_removed_by_x9() {
            continue;
        }
        if current_level != Some(levels[i]) && !current.is_empty() {
            runs.push(std::mem::take(&mut current));
        }
        current_level = Some(levels[i]);
        current.push(i);
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

/// BD13/X10: chain level runs through matching isolates and compute the
/// sos/eos of each resulting sequence.
pub(crate) fn isolating_run_sequences(
    initial: &[BidiClass],
    levels: &[Level],
    isolates: &IsolatePairs,
    paragraph_level: Level,
) -> Vec<IsolatingRunSequence> {
    let runs = level_runs(initial, levels);

    let mut run_for_char = vec![0usize; initial.len()];
    for (run_index, run) in runs.iter().enumerate() {
        for &i in run {
            run_for_char[i] = run_index;
        }
    }

    let mut sequences = Vec::new();
    for run in &runs {
        let first = run[0];
        if initial[first] == BidiClass::PDI && isolates.matching_initiator[first].is_some() {
            // Continuation of a sequence started at its initiator
            continue;
        }

        let mut indices = run.clone();
        loop {
            let last = indices[indices.len() - 1];
            if !initial[last].is_isolate_initiator() {
                break;
            }
            match isolates.matching_pdi[last] {
                Some(pdi) => indices.extend_from_slice(&runs[run_for_char[pdi]]),
                None => break,
            }
        }

        sequences.push(IsolatingRunSequence::new(
            indices,
            initial,
            levels,
            paragraph_level,
        ));
    }

    tracing::trace!(
        "{} level runs, {} isolating run sequences",
        runs.len(),
        sequences.len()
    );
    sequences
}

impl IsolatingRunSequence {
    fn new(
        indices: Vec<usize>,
        initial: &[BidiClass],
        levels: &[Level],
        paragraph_level: Level,
    ) -> Self {
        let first = indices[0];
        let last = indices[indices.len() - 1];
        let level = levels[first];

        let preceding = (0..first)
            .rev()
            .find(|&i| !initial[i].is_removed_by_x9())
            .map_or(paragraph_level, |i| levels[i]);

        let following = if initial[last].is_isolate_initiator() {
            paragraph_level
        } else {
            (last + 1..initial.len())
                .find(|&i| !initial[i].is_removed_by_x9())
                .map_or(paragraph_level, |i| levels[i])
        };

        Self {
            indices,
            level,
            sos: level.max(preceding).direction(),
            eos: level.max(following).direction(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::explicit::explicit_levels;
    use BidiClass::*;

    fn sequences(classes: &[BidiClass], paragraph_level: Level) -> Vec<IsolatingRunSequence> {
        let mut types = classes.to_vec();
        let isolates = IsolatePairs::new(classes);
        let levels = explicit_levels(&mut types, &isolates, paragraph_level);
        isolating_run_sequences(classes, &levels, &isolates, paragraph_level)
    }

    #[test]
    fn test_single_run() {
        let seqs = sequences(&[L, WS, L], Level::LTR);
        assert_eq!(seqs.len(), 1);
        assert_eq!(seqs[0].indices, vec![0, 1, 2]);
        assert_eq!(seqs[0].sos, L);
        assert_eq!(seqs[0].eos, L);
    }

    #[test]
    fn test_isolate_chains_runs() {
        // text1 RLI text2 PDI text3
        let seqs = sequences(&[L, RLI, R, PDI, L], Level::LTR);
        assert_eq!(seqs.len(), 2);
        assert_eq!(seqs[0].indices, vec![0, 1, 3, 4]);
        assert_eq!(seqs[1].indices, vec![2]);
        assert_eq!(seqs[1].level, Level(1));
        assert_eq!(seqs[1].sos, R);
        assert_eq!(seqs[1].eos, R);
    }

    #[test]
    fn test_removed_characters_skipped() {
        let seqs = sequences(&[L, RLE, R, PDF, L], Level::LTR);
        assert_eq!(seqs.len(), 3);
        assert_eq!(seqs[0].indices, vec![0]);
        assert_eq!(seqs[1].indices, vec![2]);
        assert_eq!(seqs[2].indices, vec![4]);
        assert_eq!(seqs[0].eos, R);
        assert_eq!(seqs[2].sos, R);
    }

    #[test]
    fn test_unmatched_initiator_uses_paragraph_level() {
        let seqs = sequences(&[R, LRI, L], Level::RTL);
        // R and LRI share level 1; L sits at level 2
        assert_eq!(seqs[0].indices, vec![0, 1]);
        assert_eq!(seqs[0].eos, R);
        assert_eq!(seqs[1].indices, vec![2]);
        assert_eq!(seqs[1].sos, L);
        assert_eq!(seqs[1].eos, L);
    }
}
