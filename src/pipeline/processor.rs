//! Single file processing pipeline.

use crate::audio::{decode_audio_file, resample, segment_windows};
use crate::constants::{SAMPLE_RATE, WINDOW_SAMPLES};
use crate::error::{Error, Result};
use crate::features::FeatureExtractor;
use crate::inference::SongClassifier;
use crate::output::{AnnotationWriter, encode_intervals};
use crate::pipeline::annotation_path_for;
use std::path::Path;
use tracing::{debug, info};

/// Result of processing a single file.
#[derive(Debug)]
pub struct ProcessResult {
    /// Number of one-second windows analyzed.
    pub windows: usize,
    /// Number of annotations written.
    pub annotations: usize,
    /// Processing duration in seconds.
    pub duration_secs: f64,
}

/// Process one audio file and write its annotation file.
///
/// Stages run strictly in order: decode, resample to 48 kHz, segment into
/// one-second windows, extract features, classify, encode intervals, write.
/// Any error is fatal for this file only; the caller decides whether the
/// batch continues.
pub fn process_file(
    input_path: &Path,
    write_dir: &Path,
    extractor: &FeatureExtractor,
    classifier: &SongClassifier,
) -> Result<ProcessResult> {
    use crate::output::progress;
    use std::time::Instant;

    let start_time = Instant::now();

    info!("Processing: {}", input_path.display());

    let decoded = decode_audio_file(input_path)?;
    info!(
        "Decoded {} of audio ({:.1}s at {} Hz)",
        progress::format_duration(decoded.duration_secs()),
        decoded.duration_secs(),
        decoded.sample_rate
    );

    let samples = if decoded.sample_rate == SAMPLE_RATE {
        decoded.samples
    } else {
        debug!(
            "Resampling from {} Hz to {} Hz...",
            decoded.sample_rate, SAMPLE_RATE
        );
        resample(decoded.samples, decoded.sample_rate, SAMPLE_RATE)?
    };

    let windows = segment_windows(&samples, WINDOW_SAMPLES)?;
    debug!("Segmented into {} one-second windows", windows.len());

    let features = extractor.extract_batch(&windows);
    debug!("Extracted {} feature vectors", features.len());

    let labels = classifier.predict(&features);
    debug!(
        "Classified {} windows, {} positive",
        labels.len(),
        labels.iter().filter(|&&l| l).count()
    );

    let annotations = encode_intervals(&labels);

    std::fs::create_dir_all(write_dir).map_err(|e| Error::OutputDirCreate {
        path: write_dir.to_path_buf(),
        source: e,
    })?;

    let output_path = annotation_path_for(input_path, write_dir);
    let mut writer = AnnotationWriter::create(&output_path)?;
    for annotation in &annotations {
        writer.write_annotation(annotation)?;
    }
    writer.finalize()?;

    let duration_secs = start_time.elapsed().as_secs_f64();
    info!(
        "Wrote {} annotation(s) to {} ({:.2}s)",
        annotations.len(),
        output_path.display(),
        duration_secs
    );

    Ok(ProcessResult {
        windows: windows.len(),
        annotations: annotations.len(),
        duration_secs,
    })
}
