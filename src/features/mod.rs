//! Per-window acoustic feature extraction.
//!
//! Every one-second window is reduced to a fixed 30-slot vector:
//!
//! | Slots  | Contents                                         |
//! |--------|--------------------------------------------------|
//! | 0–12   | mean of cepstral coefficients 0–12 across frames |
//! | 13–25  | standard deviation of the same coefficients      |
//! | 26, 27 | zero-crossing rate mean / standard deviation     |
//! | 28, 29 | spectral centroid mean / standard deviation      |
//!
//! This slot order is what the pretrained scaler and SVM were fit against.
//! Reordering it does not fail loudly, it just ruins classification, so the
//! layout is fixed here and nowhere else.

mod mel;
mod spectrum;

use crate::constants::SAMPLE_RATE;
use crate::constants::features::{FEATURE_DIM, HOP_LENGTH, N_FFT, N_MELS, N_MFCC};
use mel::MelCepstrum;
use spectrum::Stft;

/// Fixed-length acoustic descriptor of one analysis window.
pub type FeatureVector = [f32; FEATURE_DIM];

/// Extracts the 30-slot feature vector from one-second windows.
///
/// Construction precomputes the FFT plan, mel filterbank, and DCT basis;
/// everything afterwards is read-only, so extracting a batch of windows
/// behaves identically to extracting each window on its own.
pub struct FeatureExtractor {
    stft: Stft,
    cepstrum: MelCepstrum,
}

impl Default for FeatureExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FeatureExtractor {
    /// Build an extractor with the fixed analysis parameters.
    pub fn new() -> Self {
        Self {
            stft: Stft::new(N_FFT),
            cepstrum: MelCepstrum::new(SAMPLE_RATE, N_FFT, N_MELS),
        }
    }

    /// Extract the feature vector of a single window.
    pub fn extract(&self, window: &[f32]) -> FeatureVector {
        let spectra = self.stft.magnitudes(window, HOP_LENGTH);
        let n_frames = spectra.len();

        let mut mfcc_frames: Vec<[f32; N_MFCC]> = Vec::with_capacity(n_frames);
        let mut centroids: Vec<f32> = Vec::with_capacity(n_frames);
        let mut power = vec![0.0f32; self.stft.n_bins()];

        for magnitudes in &spectra {
            for (p, m) in power.iter_mut().zip(magnitudes) {
                *p = m * m;
            }
            mfcc_frames.push(self.cepstrum.coefficients(&power));
            centroids.push(spectral_centroid(magnitudes));
        }

        let zcr_frames = zero_crossing_rates(window, N_FFT, HOP_LENGTH, n_frames);

        let mut features = [0.0f32; FEATURE_DIM];
        for c in 0..N_MFCC {
            let (mean, std) = mean_std(mfcc_frames.iter().map(|frame| frame[c]));
            features[c] = mean;
            features[N_MFCC + c] = std;
        }
        let (zcr_mean, zcr_std) = mean_std(zcr_frames.iter().copied());
        features[2 * N_MFCC] = zcr_mean;
        features[2 * N_MFCC + 1] = zcr_std;
        let (sc_mean, sc_std) = mean_std(centroids.iter().copied());
        features[2 * N_MFCC + 2] = sc_mean;
        features[2 * N_MFCC + 3] = sc_std;

        features
    }

    /// Extract feature vectors for a sequence of windows, in window order.
    pub fn extract_batch(&self, windows: &[&[f32]]) -> Vec<FeatureVector> {
        windows.iter().map(|w| self.extract(w)).collect()
    }
}

/// Magnitude-weighted mean frequency of one spectral frame, in Hz.
///
/// Silent frames (no spectral mass) report 0 Hz.
fn spectral_centroid(magnitudes: &[f32]) -> f32 {
    let total: f32 = magnitudes.iter().sum();
    if total <= f32::EPSILON {
        return 0.0;
    }

    #[allow(clippy::cast_precision_loss)]
    let bin_width = SAMPLE_RATE as f32 / N_FFT as f32;
    #[allow(clippy::cast_precision_loss)]
    let weighted: f32 = magnitudes
        .iter()
        .enumerate()
        .map(|(k, m)| k as f32 * bin_width * m)
        .sum();

    weighted / total
}

/// Zero-crossing rate per centered frame.
///
/// Frames mirror the spectral framing (length `frame_len`, hop `hop`,
/// centered) but pad the edges with zeros rather than reflection. The rate
/// of a frame is its sign-change count divided by the frame length.
fn zero_crossing_rates(samples: &[f32], frame_len: usize, hop: usize, n_frames: usize) -> Vec<f32> {
    let half = (frame_len / 2) as isize;
    let len = samples.len() as isize;

    let at = |idx: isize| -> f32 {
        if idx < 0 || idx >= len {
            0.0
        } else {
            #[allow(clippy::cast_sign_loss)]
            samples[idx as usize]
        }
    };

    (0..n_frames)
        .map(|t| {
            let start = (t * hop) as isize - half;
            let crossings = (start..start + frame_len as isize - 1)
                .filter(|&i| (at(i) >= 0.0) != (at(i + 1) >= 0.0))
                .count();
            #[allow(clippy::cast_precision_loss)]
            let rate = crossings as f32 / frame_len as f32;
            rate
        })
        .collect()
}

/// Arithmetic mean and population standard deviation.
fn mean_std(values: impl Iterator<Item = f32> + Clone) -> (f32, f32) {
    let count = values.clone().count();
    if count == 0 {
        return (0.0, 0.0);
    }

    #[allow(clippy::cast_precision_loss)]
    let n = count as f64;
    let mean = values.clone().map(f64::from).sum::<f64>() / n;
    let variance = values
        .map(|v| {
            let d = f64::from(v) - mean;
            d * d
        })
        .sum::<f64>()
        / n;

    #[allow(clippy::cast_possible_truncation)]
    (mean as f32, variance.sqrt() as f32)
}
