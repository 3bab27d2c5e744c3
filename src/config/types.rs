//! Configuration type definitions.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default settings.
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Default directory settings, each overridable on the command line.
///
/// None of these affect algorithmic behavior: sample rate, window length,
/// and the feature layout are fixed constants.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Directory audio files are read from (default: current directory).
    pub read_dir: Option<PathBuf>,

    /// Directory annotation files are written to (default: current directory).
    pub write_dir: Option<PathBuf>,

    /// Directory containing the scaler and SVM artifacts (default: `model/`).
    pub model_dir: Option<PathBuf>,
}
