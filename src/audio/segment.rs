//! Strict segmentation of a waveform into one-second analysis windows.

use crate::error::{Error, Result};

/// Partition a waveform into consecutive, non-overlapping windows of
/// `window_samples` samples each.
///
/// Window `i` covers wall-clock seconds `[i, i+1)` at the fixed sample rate.
/// The windows partition the waveform exactly: a length that is not a whole
/// multiple of `window_samples` is rejected up front rather than surfacing
/// later as a shape mismatch.
pub fn segment_windows(samples: &[f32], window_samples: usize) -> Result<Vec<&[f32]>> {
    if window_samples == 0 || samples.len() % window_samples != 0 {
        return Err(Error::Segmentation {
            samples: samples.len(),
            window_samples,
        });
    }

    Ok(samples.chunks_exact(window_samples).collect())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::constants::WINDOW_SAMPLES;

    #[test]
    fn test_exact_multiple_partitions_cleanly() {
        #[allow(clippy::cast_precision_loss)]
        let samples: Vec<f32> = (0..3 * WINDOW_SAMPLES).map(|i| i as f32).collect();
        let windows = segment_windows(&samples, WINDOW_SAMPLES).unwrap();

        assert_eq!(windows.len(), 3);
        for window in &windows {
            assert_eq!(window.len(), WINDOW_SAMPLES);
        }

        // Concatenating the windows in order reconstructs the waveform.
        let rebuilt: Vec<f32> = windows.into_iter().flatten().copied().collect();
        assert_eq!(rebuilt, samples);
    }

    #[test]
    fn test_misaligned_length_is_rejected() {
        let samples = vec![0.0f32; WINDOW_SAMPLES + 1];
        let result = segment_windows(&samples, WINDOW_SAMPLES);
        assert!(matches!(
            result,
            Err(Error::Segmentation {
                samples: s,
                window_samples: WINDOW_SAMPLES,
            }) if s == WINDOW_SAMPLES + 1
        ));
    }

    #[test]
    fn test_one_sample_short_is_rejected() {
        let samples = vec![0.0f32; 2 * WINDOW_SAMPLES - 1];
        assert!(segment_windows(&samples, WINDOW_SAMPLES).is_err());
    }

    #[test]
    fn test_empty_waveform_yields_no_windows() {
        let windows = segment_windows(&[], WINDOW_SAMPLES).unwrap();
        assert!(windows.is_empty());
    }

    #[test]
    fn test_zero_window_length_is_rejected() {
        let samples = vec![0.0f32; 16];
        assert!(segment_windows(&samples, 0).is_err());
    }
}
