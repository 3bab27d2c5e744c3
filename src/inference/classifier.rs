//! Per-window birdsong classification.

use crate::constants::model::{SCALER_FILE, SVM_FILE};
use crate::error::Result;
use crate::features::FeatureVector;
use crate::inference::artifacts::{ScalerArtifact, SvmArtifact, load_scaler, load_svm};
use std::path::Path;
use tracing::debug;

/// Pretrained feature scaler plus SVM, loaded once per run and shared
/// read-only across all files.
pub struct SongClassifier {
    scaler: ScalerArtifact,
    svm: SvmArtifact,
}

impl SongClassifier {
    /// Load both artifacts from the model directory.
    ///
    /// Missing or corrupt artifacts are fatal for the whole run: every file
    /// depends on the same model.
    pub fn load(model_dir: &Path) -> Result<Self> {
        let scaler = load_scaler(&model_dir.join(SCALER_FILE))?;
        let svm = load_svm(&model_dir.join(SVM_FILE))?;

        debug!(
            "Loaded model from '{}' ({} kernel)",
            model_dir.display(),
            match svm {
                SvmArtifact::Linear { .. } => "linear",
                SvmArtifact::Rbf { .. } => "rbf",
            }
        );

        Ok(Self { scaler, svm })
    }

    /// Build a classifier from already-loaded artifacts.
    pub fn from_artifacts(scaler: ScalerArtifact, svm: SvmArtifact) -> Self {
        Self { scaler, svm }
    }

    /// Classify a feature matrix into one boolean label per window, in
    /// window order. A `true` label marks a window containing birdsong.
    pub fn predict(&self, features: &[FeatureVector]) -> Vec<bool> {
        features
            .iter()
            .map(|vector| {
                let scaled = self.transform(vector);
                self.decision(&scaled) > 0.0
            })
            .collect()
    }

    /// Apply the training-time standard scaling to one vector.
    fn transform(&self, vector: &FeatureVector) -> FeatureVector {
        let mut scaled = *vector;
        for ((value, mean), scale) in scaled
            .iter_mut()
            .zip(&self.scaler.mean)
            .zip(&self.scaler.scale)
        {
            *value = (*value - mean) / scale;
        }
        scaled
    }

    /// SVM decision function over a scaled vector.
    fn decision(&self, scaled: &FeatureVector) -> f32 {
        match &self.svm {
            SvmArtifact::Linear { weights, intercept } => {
                let dot: f32 = weights.iter().zip(scaled).map(|(w, x)| w * x).sum();
                dot + intercept
            }
            SvmArtifact::Rbf {
                gamma,
                support_vectors,
                dual_coef,
                intercept,
            } => {
                let kernel_sum: f32 = support_vectors
                    .iter()
                    .zip(dual_coef)
                    .map(|(sv, coef)| {
                        let sq_dist: f32 = sv
                            .iter()
                            .zip(scaled)
                            .map(|(a, b)| {
                                let d = a - b;
                                d * d
                            })
                            .sum();
                        coef * (-gamma * sq_dist).exp()
                    })
                    .sum();
                kernel_sum + intercept
            }
        }
    }
}
