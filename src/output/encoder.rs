//! Run-length encoding of window labels into time intervals.

use crate::constants::WINDOW_MILLIS;
use crate::output::Annotation;

/// Compress a per-window label sequence into maximal runs of positive
/// windows, expressed as millisecond intervals.
///
/// Label `i` covers wall-clock seconds `[i, i+1)`. A maximal run of `d`
/// consecutive positives starting at window `s` yields exactly one
/// annotation `(s * 1000, (s + d) * 1000 - 1)`; a run still open at the end
/// of the sequence is flushed the same way. Output order mirrors window
/// order, so start times are strictly increasing with no sorting step.
pub fn encode_intervals(labels: &[bool]) -> Vec<Annotation> {
    let mut annotations = Vec::new();
    let mut run_start: Option<usize> = None;

    for (i, &positive) in labels.iter().enumerate() {
        match (run_start, positive) {
            (None, true) => run_start = Some(i),
            (Some(start), false) => {
                annotations.push(run_annotation(start, i - start));
                run_start = None;
            }
            _ => {}
        }
    }

    // Run extending through the final window.
    if let Some(start) = run_start {
        annotations.push(run_annotation(start, labels.len() - start));
    }

    annotations
}

fn run_annotation(start: usize, duration: usize) -> Annotation {
    let start = start as u64;
    let duration = duration as u64;
    Annotation::new(
        start * WINDOW_MILLIS,
        (start + duration) * WINDOW_MILLIS - 1,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intervals(labels: &[bool]) -> Vec<(u64, u64)> {
        encode_intervals(labels)
            .into_iter()
            .map(|a| (a.start_ms, a.end_ms))
            .collect()
    }

    #[test]
    fn test_interior_runs() {
        let labels = [false, false, true, true, true, false, true, false, false];
        assert_eq!(intervals(&labels), vec![(2000, 4999), (6000, 6999)]);
    }

    #[test]
    fn test_trailing_run_is_flushed() {
        assert_eq!(intervals(&[true, true, true]), vec![(0, 2999)]);
    }

    #[test]
    fn test_no_positives_yields_no_annotations() {
        assert!(intervals(&[false, false, false]).is_empty());
    }

    #[test]
    fn test_alternating_singles() {
        let labels = [true, false, true, false, true];
        assert_eq!(
            intervals(&labels),
            vec![(0, 999), (2000, 2999), (4000, 4999)]
        );
    }

    #[test]
    fn test_empty_sequence() {
        assert!(intervals(&[]).is_empty());
    }

    #[test]
    fn test_single_positive_window() {
        assert_eq!(intervals(&[true]), vec![(0, 999)]);
    }

    #[test]
    fn test_lone_gap_splits_runs() {
        let labels = [true, true, false, true, true];
        assert_eq!(intervals(&labels), vec![(0, 1999), (3000, 4999)]);
    }

    /// Expand annotations back into a label sequence of length `n`.
    fn decode(annotations: &[Annotation], n: usize) -> Vec<bool> {
        let mut labels = vec![false; n];
        for a in annotations {
            let start = (a.start_ms / 1000) as usize;
            let end = ((a.end_ms + 1) / 1000) as usize;
            for label in &mut labels[start..end] {
                *label = true;
            }
        }
        labels
    }

    #[test]
    fn test_round_trip_all_sequences_up_to_ten_windows() {
        for n in 0..=10usize {
            for bits in 0..(1u32 << n) {
                let labels: Vec<bool> = (0..n).map(|i| bits & (1 << i) != 0).collect();
                let annotations = encode_intervals(&labels);

                // Strictly increasing, non-overlapping.
                for pair in annotations.windows(2) {
                    assert!(pair[0].end_ms < pair[1].start_ms);
                }

                assert_eq!(decode(&annotations, n), labels, "n={n} bits={bits:b}");
            }
        }
    }
}
