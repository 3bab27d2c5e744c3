//! Error types for songscribe.

/// Result type alias for songscribe operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for songscribe.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration directory could not be determined.
    #[error("could not determine configuration directory for this platform")]
    ConfigDirNotFound,

    /// Failed to read configuration file.
    #[error("failed to read config file '{path}'")]
    ConfigRead {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}'")]
    ConfigParse {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },

    /// Failed to write configuration file.
    #[error("failed to write config file '{path}'")]
    ConfigWrite {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize configuration.
    #[error("failed to serialize config")]
    ConfigSerialize {
        /// Underlying serialization error.
        #[source]
        source: toml::ser::Error,
    },

    /// No input files were given on the command line.
    #[error("no input files specified")]
    NoInputFiles,

    /// Input file could not be resolved under the read directory.
    #[error("input '{name}' not found under '{read_dir}'")]
    InputNotFound {
        /// Name as given on the command line.
        name: String,
        /// Read directory that was searched.
        read_dir: std::path::PathBuf,
    },

    /// Failed to open audio file.
    #[error("failed to open audio file '{path}'")]
    AudioOpen {
        /// Path to the audio file.
        path: std::path::PathBuf,
        /// Underlying error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Failed to decode audio.
    #[error("failed to decode audio from '{path}'")]
    AudioDecode {
        /// Path to the audio file.
        path: std::path::PathBuf,
        /// Underlying error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// No audio tracks found.
    #[error("no audio tracks found in '{path}'")]
    NoAudioTracks {
        /// Path to the audio file.
        path: std::path::PathBuf,
    },

    /// Failed to resample audio.
    #[error("failed to resample audio: {reason}")]
    Resample {
        /// Description of the resampling failure.
        reason: String,
    },

    /// Waveform length does not divide into whole analysis windows.
    #[error(
        "waveform length of {samples} samples is not a multiple of the \
         {window_samples}-sample analysis window"
    )]
    Segmentation {
        /// Total sample count of the waveform.
        samples: usize,
        /// Window length in samples.
        window_samples: usize,
    },

    /// Failed to read a model artifact file.
    #[error("failed to read model artifact '{path}'")]
    ModelRead {
        /// Path to the artifact file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a model artifact file.
    #[error("failed to parse model artifact '{path}'")]
    ModelParse {
        /// Path to the artifact file.
        path: std::path::PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// Model artifact does not match the expected feature layout.
    #[error("model artifact '{path}' is invalid: {message}")]
    ModelShape {
        /// Path to the artifact file.
        path: std::path::PathBuf,
        /// Description of the mismatch.
        message: String,
    },

    /// Failed to create output directory.
    #[error("failed to create output directory '{path}'")]
    OutputDirCreate {
        /// Path to the output directory.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write an annotation file.
    #[error("failed to write annotation file '{path}'")]
    AnnotationWrite {
        /// Path to the annotation file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
