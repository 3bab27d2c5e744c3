//! Short-time Fourier transform on rustfft.

use rustfft::num_complex::Complex;
use rustfft::{Fft, FftPlanner};
use std::sync::Arc;

/// Precomputed STFT plan: FFT of a fixed frame length plus a periodic Hann
/// window. Immutable after construction, so one instance can serve any
/// number of analysis windows without cross-window state.
pub struct Stft {
    fft: Arc<dyn Fft<f32>>,
    window: Vec<f32>,
    n_fft: usize,
}

impl Stft {
    /// Plan an STFT with the given frame length.
    pub fn new(n_fft: usize) -> Self {
        let fft = FftPlanner::new().plan_fft_forward(n_fft);

        // Periodic Hann window.
        #[allow(clippy::cast_precision_loss)]
        let window = (0..n_fft)
            .map(|n| {
                let phase = std::f32::consts::TAU * n as f32 / n_fft as f32;
                0.5 - 0.5 * phase.cos()
            })
            .collect();

        Self { fft, window, n_fft }
    }

    /// Number of non-redundant frequency bins per frame.
    pub fn n_bins(&self) -> usize {
        self.n_fft / 2 + 1
    }

    /// Number of centered frames produced for a signal of `len` samples
    /// at hop `hop`.
    pub fn frame_count(len: usize, hop: usize) -> usize {
        1 + len / hop
    }

    /// Compute magnitude spectra of centered, reflect-padded frames.
    ///
    /// Returns one row of `n_bins()` magnitudes per frame. Frame `t` is
    /// centered on sample `t * hop`; samples beyond either edge are mirrored.
    pub fn magnitudes(&self, samples: &[f32], hop: usize) -> Vec<Vec<f32>> {
        let n_frames = Self::frame_count(samples.len(), hop);
        let half = (self.n_fft / 2) as isize;
        let mut buf = vec![Complex::new(0.0f32, 0.0); self.n_fft];
        let mut frames = Vec::with_capacity(n_frames);

        for t in 0..n_frames {
            let center = (t * hop) as isize;
            for (i, slot) in buf.iter_mut().enumerate() {
                let idx = center - half + i as isize;
                *slot = Complex::new(sample_reflected(samples, idx) * self.window[i], 0.0);
            }

            self.fft.process(&mut buf);
            frames.push(buf[..self.n_bins()].iter().map(|c| c.norm()).collect());
        }

        frames
    }
}

/// Read `samples[idx]` with reflection (without edge repetition) at both
/// boundaries, matching centered-frame padding.
fn sample_reflected(samples: &[f32], idx: isize) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    let len = samples.len() as isize;
    if len == 1 {
        return samples[0];
    }

    let period = 2 * (len - 1);
    let mut i = idx.rem_euclid(period);
    if i >= len {
        i = period - i;
    }
    #[allow(clippy::cast_sign_loss)]
    samples[i as usize]
}
