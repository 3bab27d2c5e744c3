//! Serialized model artifacts.
//!
//! The scaler and SVM are trained elsewhere and shipped as two JSON files in
//! the model directory. Both are validated against the 30-slot feature
//! layout at load time; a mismatch here would otherwise only show up as
//! silently wrong predictions.

use crate::constants::features::FEATURE_DIM;
use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Standard feature scaling parameters: `(x - mean) / scale` per slot.
#[derive(Debug, Clone, Deserialize)]
pub struct ScalerArtifact {
    /// Per-slot mean of the training features.
    pub mean: Vec<f32>,
    /// Per-slot scale (standard deviation) of the training features.
    pub scale: Vec<f32>,
}

/// Pretrained support vector machine decision function.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kernel", rename_all = "lowercase")]
pub enum SvmArtifact {
    /// Linear kernel: `w . x + b`.
    Linear {
        /// Weight vector, one value per feature slot.
        weights: Vec<f32>,
        /// Bias term.
        intercept: f32,
    },
    /// RBF kernel: `sum_i a_i * exp(-gamma * |sv_i - x|^2) + b`.
    Rbf {
        /// Kernel width.
        gamma: f32,
        /// Support vectors, each one feature vector long.
        support_vectors: Vec<Vec<f32>>,
        /// Signed dual coefficients, one per support vector.
        dual_coef: Vec<f32>,
        /// Bias term.
        intercept: f32,
    },
}

/// Load and validate the scaler artifact.
pub fn load_scaler(path: &Path) -> Result<ScalerArtifact> {
    let scaler: ScalerArtifact = read_artifact(path)?;

    if scaler.mean.len() != FEATURE_DIM || scaler.scale.len() != FEATURE_DIM {
        return Err(Error::ModelShape {
            path: path.to_path_buf(),
            message: format!(
                "scaler covers {} mean / {} scale slots, expected {FEATURE_DIM}",
                scaler.mean.len(),
                scaler.scale.len()
            ),
        });
    }
    if scaler.scale.iter().any(|&s| s == 0.0 || !s.is_finite()) {
        return Err(Error::ModelShape {
            path: path.to_path_buf(),
            message: "scaler contains a zero or non-finite scale value".to_string(),
        });
    }

    Ok(scaler)
}

/// Load and validate the SVM artifact.
pub fn load_svm(path: &Path) -> Result<SvmArtifact> {
    let svm: SvmArtifact = read_artifact(path)?;

    match &svm {
        SvmArtifact::Linear { weights, .. } => {
            if weights.len() != FEATURE_DIM {
                return Err(Error::ModelShape {
                    path: path.to_path_buf(),
                    message: format!(
                        "linear SVM has {} weights, expected {FEATURE_DIM}",
                        weights.len()
                    ),
                });
            }
        }
        SvmArtifact::Rbf {
            support_vectors,
            dual_coef,
            ..
        } => {
            if support_vectors.len() != dual_coef.len() {
                return Err(Error::ModelShape {
                    path: path.to_path_buf(),
                    message: format!(
                        "RBF SVM has {} support vectors but {} dual coefficients",
                        support_vectors.len(),
                        dual_coef.len()
                    ),
                });
            }
            if let Some(sv) = support_vectors.iter().find(|sv| sv.len() != FEATURE_DIM) {
                return Err(Error::ModelShape {
                    path: path.to_path_buf(),
                    message: format!(
                        "support vector has {} slots, expected {FEATURE_DIM}",
                        sv.len()
                    ),
                });
            }
        }
    }

    Ok(svm)
}

fn read_artifact<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let contents = std::fs::read_to_string(path).map_err(|e| Error::ModelRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_json::from_str(&contents).map_err(|e| Error::ModelParse {
        path: path.to_path_buf(),
        source: e,
    })
}
