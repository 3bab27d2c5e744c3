//! Application-wide constants.
//!
//! The extraction parameters here are part of the classifier contract: the
//! pretrained scaler and SVM were fit against feature vectors produced with
//! exactly these values. Changing any of them silently degrades
//! classification without raising an error.

/// Application name used for config directories and user-facing messages.
pub const APP_NAME: &str = "songscribe";

/// Sample rate every waveform is decoded/resampled to, in Hz.
pub const SAMPLE_RATE: u32 = 48_000;

/// Analysis window length in samples (exactly one second at 48 kHz).
pub const WINDOW_SAMPLES: usize = 48_000;

/// Duration of one analysis window in milliseconds.
pub const WINDOW_MILLIS: u64 = 1_000;

/// Extension of annotation output files.
pub const ANNOTATION_EXTENSION: &str = "txt";

/// Extensions tried, in order, when an input name is given without one.
pub const INPUT_EXTENSIONS: &[&str] = &["WAV", "wav"];

/// Short-time feature extraction parameters.
pub mod features {
    /// FFT frame length in samples.
    pub const N_FFT: usize = 2_048;

    /// Hop between consecutive analysis frames in samples.
    pub const HOP_LENGTH: usize = 512;

    /// Number of triangular mel filterbank bands.
    pub const N_MELS: usize = 128;

    /// Number of cepstral coefficients kept per frame.
    pub const N_MFCC: usize = 13;

    /// Total feature vector length: 13 MFCC means, 13 MFCC standard
    /// deviations, ZCR mean/std, spectral centroid mean/std.
    pub const FEATURE_DIM: usize = 2 * N_MFCC + 4;

    /// Power floor applied before converting to decibels.
    pub const POWER_FLOOR: f32 = 1e-10;
}

/// Model artifact locations.
pub mod model {
    /// Default model directory, relative to the working directory.
    pub const DEFAULT_DIR: &str = "model";

    /// Feature scaler artifact filename.
    pub const SCALER_FILE: &str = "scaler.json";

    /// SVM classifier artifact filename.
    pub const SVM_FILE: &str = "svm.json";
}
