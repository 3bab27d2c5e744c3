//! Pretrained scaler and SVM classifier.

mod artifacts;
mod classifier;

pub use artifacts::{ScalerArtifact, SvmArtifact, load_scaler, load_svm};
pub use classifier::SongClassifier;
