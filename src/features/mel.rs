//! Mel filterbank and cepstral coefficients.
//!
//! The filterbank uses the HTK mel scale (`2595 * log10(1 + f / 700)`) with
//! triangular bands spanning 0 Hz to the Nyquist frequency. Mel band power
//! is converted to decibels and projected through an orthonormal DCT-II to
//! produce the cepstral coefficients.

use crate::constants::features::{N_MFCC, POWER_FLOOR};

/// Precomputed mel filterbank and DCT basis for cepstrum extraction.
pub struct MelCepstrum {
    /// `n_mels` rows of `n_bins` filter weights.
    filterbank: Vec<Vec<f32>>,
    /// `N_MFCC` rows of `n_mels` DCT-II basis values.
    dct: Vec<Vec<f32>>,
}

impl MelCepstrum {
    /// Build the filterbank and DCT basis for the given layout.
    pub fn new(sample_rate: u32, n_fft: usize, n_mels: usize) -> Self {
        Self {
            filterbank: mel_filterbank(sample_rate, n_fft, n_mels),
            dct: dct_basis(N_MFCC, n_mels),
        }
    }

    /// Cepstral coefficients of one power-spectrum frame.
    pub fn coefficients(&self, power: &[f32]) -> [f32; N_MFCC] {
        // Mel band energies in dB.
        let band_db: Vec<f32> = self
            .filterbank
            .iter()
            .map(|band| {
                let energy: f32 = band.iter().zip(power).map(|(w, p)| w * p).sum();
                10.0 * energy.max(POWER_FLOOR).log10()
            })
            .collect();

        let mut coeffs = [0.0f32; N_MFCC];
        for (coeff, basis) in coeffs.iter_mut().zip(&self.dct) {
            *coeff = basis.iter().zip(&band_db).map(|(b, e)| b * e).sum();
        }
        coeffs
    }
}

/// Convert frequency in Hz to HTK mels.
fn hz_to_mel(hz: f32) -> f32 {
    2595.0 * (1.0 + hz / 700.0).log10()
}

/// Convert HTK mels to frequency in Hz.
fn mel_to_hz(mel: f32) -> f32 {
    700.0 * (10.0f32.powf(mel / 2595.0) - 1.0)
}

/// Build `n_mels` triangular filters over `n_fft / 2 + 1` FFT bins.
fn mel_filterbank(sample_rate: u32, n_fft: usize, n_mels: usize) -> Vec<Vec<f32>> {
    let n_bins = n_fft / 2 + 1;
    let nyquist = sample_rate as f32 / 2.0;
    let max_mel = hz_to_mel(nyquist);

    // n_mels + 2 band edges, evenly spaced on the mel scale.
    #[allow(clippy::cast_precision_loss)]
    let edges_hz: Vec<f32> = (0..n_mels + 2)
        .map(|i| mel_to_hz(max_mel * i as f32 / (n_mels + 1) as f32))
        .collect();

    #[allow(clippy::cast_precision_loss)]
    let bin_hz: Vec<f32> = (0..n_bins)
        .map(|k| k as f32 * sample_rate as f32 / n_fft as f32)
        .collect();

    (0..n_mels)
        .map(|m| {
            let (lower, center, upper) = (edges_hz[m], edges_hz[m + 1], edges_hz[m + 2]);
            bin_hz
                .iter()
                .map(|&f| {
                    let rising = (f - lower) / (center - lower);
                    let falling = (upper - f) / (upper - center);
                    rising.min(falling).max(0.0)
                })
                .collect()
        })
        .collect()
}

/// Orthonormal DCT-II basis: `n_rows` rows over `n` points.
fn dct_basis(n_rows: usize, n: usize) -> Vec<Vec<f32>> {
    #[allow(clippy::cast_precision_loss)]
    let n_f = n as f32;
    (0..n_rows)
        .map(|k| {
            let norm = if k == 0 {
                (1.0 / n_f).sqrt()
            } else {
                (2.0 / n_f).sqrt()
            };
            #[allow(clippy::cast_precision_loss)]
            (0..n)
                .map(|i| {
                    let angle = std::f32::consts::PI * (i as f32 + 0.5) * k as f32 / n_f;
                    norm * angle.cos()
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::cast_precision_loss)]
mod tests {
    use super::*;

    #[test]
    fn test_mel_scale_round_trip() {
        for hz in [0.0, 440.0, 1000.0, 8000.0, 24_000.0] {
            let back = mel_to_hz(hz_to_mel(hz));
            assert!((back - hz).abs() < 0.5, "{hz} Hz round-tripped to {back}");
        }
    }

    #[test]
    fn test_filterbank_shape_and_coverage() {
        let fb = mel_filterbank(48_000, 2048, 128);
        assert_eq!(fb.len(), 128);
        for band in &fb {
            assert_eq!(band.len(), 1025);
        }
        // Every band should have some nonzero weight.
        for (m, band) in fb.iter().enumerate() {
            let total: f32 = band.iter().sum();
            assert!(total > 0.0, "band {m} has no weight");
        }
    }

    #[test]
    fn test_dct_rows_are_orthonormal() {
        let basis = dct_basis(13, 128);
        for (i, row_i) in basis.iter().enumerate() {
            for (j, row_j) in basis.iter().enumerate() {
                let dot: f32 = row_i.iter().zip(row_j).map(|(a, b)| a * b).sum();
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((dot - expected).abs() < 1e-4, "rows {i},{j}: dot {dot}");
            }
        }
    }

    #[test]
    fn test_silence_has_flat_cepstrum_tail() {
        let cepstrum = MelCepstrum::new(48_000, 2048, 128);
        let power = vec![0.0f32; 1025];
        let coeffs = cepstrum.coefficients(&power);
        // All bands sit at the dB floor, so only coefficient 0 is nonzero.
        assert!(coeffs[0] < 0.0);
        for (k, c) in coeffs.iter().enumerate().skip(1) {
            assert!(c.abs() < 1e-3, "coefficient {k} was {c}");
        }
    }
}
