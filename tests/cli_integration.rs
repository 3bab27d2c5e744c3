//! End-to-end CLI tests driving the binary against generated WAV fixtures
//! and synthetic model artifacts.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

const SAMPLE_RATE: u32 = 48_000;
const FEATURE_DIM: usize = 30;

/// Write a mono 16-bit WAV of `samples` zero samples at 48 kHz.
fn write_silent_wav(path: &Path, samples: u32) {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec).unwrap();
    for _ in 0..samples {
        writer.write_sample(0i16).unwrap();
    }
    writer.finalize().unwrap();
}

/// Write scaler + linear SVM artifacts that ignore the features entirely:
/// every window is labeled by the sign of `intercept`.
fn write_constant_model(model_dir: &Path, intercept: f32) {
    std::fs::create_dir_all(model_dir).unwrap();

    let zeros: Vec<f32> = vec![0.0; FEATURE_DIM];
    let ones: Vec<f32> = vec![1.0; FEATURE_DIM];

    let scaler = serde_json::json!({ "mean": zeros, "scale": ones });
    std::fs::write(
        model_dir.join("scaler.json"),
        serde_json::to_string(&scaler).unwrap(),
    )
    .unwrap();

    let svm = serde_json::json!({
        "kernel": "linear",
        "weights": vec![0.0f32; FEATURE_DIM],
        "intercept": intercept,
    });
    std::fs::write(
        model_dir.join("svm.json"),
        serde_json::to_string(&svm).unwrap(),
    )
    .unwrap();
}

#[test]
fn test_no_inputs_fails() {
    let mut cmd = cargo_bin_cmd!("songscribe");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("no input files"));
}

#[test]
fn test_missing_model_aborts_run() {
    let dir = TempDir::new().unwrap();
    write_silent_wav(&dir.path().join("site_a.WAV"), SAMPLE_RATE);

    let mut cmd = cargo_bin_cmd!("songscribe");
    cmd.arg("-r")
        .arg(dir.path())
        .arg("-w")
        .arg(dir.path())
        .arg("-m")
        .arg(dir.path().join("no_such_model"))
        .arg("site_a");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("model artifact"));
}

#[test]
fn test_no_positive_windows_yields_empty_file() {
    let dir = TempDir::new().unwrap();
    let model_dir = dir.path().join("model");
    write_constant_model(&model_dir, -1.0);
    write_silent_wav(&dir.path().join("quiet_site.wav"), 2 * SAMPLE_RATE);

    let out_dir = dir.path().join("labels");
    let mut cmd = cargo_bin_cmd!("songscribe");
    cmd.arg("-r")
        .arg(dir.path())
        .arg("-w")
        .arg(&out_dir)
        .arg("-m")
        .arg(&model_dir)
        .arg("-q")
        .arg("quiet_site.wav");
    cmd.assert().success();

    let contents = std::fs::read_to_string(out_dir.join("quiet_site.txt")).unwrap();
    assert!(contents.is_empty());
}

#[test]
fn test_all_positive_windows_yield_single_run() {
    let dir = TempDir::new().unwrap();
    let model_dir = dir.path().join("model");
    write_constant_model(&model_dir, 1.0);
    write_silent_wav(&dir.path().join("busy_site.wav"), 3 * SAMPLE_RATE);

    let out_dir = dir.path().join("labels");
    let mut cmd = cargo_bin_cmd!("songscribe");
    cmd.arg("-r")
        .arg(dir.path())
        .arg("-w")
        .arg(&out_dir)
        .arg("-m")
        .arg(&model_dir)
        .arg("-q")
        .arg("busy_site.wav");
    cmd.assert().success();

    let contents = std::fs::read_to_string(out_dir.join("busy_site.txt")).unwrap();
    assert_eq!(contents, "0 2999\n");
}

#[test]
fn test_extension_optional_input_resolution() {
    let dir = TempDir::new().unwrap();
    let model_dir = dir.path().join("model");
    write_constant_model(&model_dir, 1.0);
    write_silent_wav(&dir.path().join("dawn_chorus.WAV"), SAMPLE_RATE);

    let out_dir = dir.path().join("labels");
    let mut cmd = cargo_bin_cmd!("songscribe");
    cmd.arg("-r")
        .arg(dir.path())
        .arg("-w")
        .arg(&out_dir)
        .arg("-m")
        .arg(&model_dir)
        .arg("-q")
        .arg("dawn_chorus");
    cmd.assert().success();

    let contents = std::fs::read_to_string(out_dir.join("dawn_chorus.txt")).unwrap();
    assert_eq!(contents, "0 999\n");
}

#[test]
fn test_misaligned_length_fails_fast() {
    let dir = TempDir::new().unwrap();
    let model_dir = dir.path().join("model");
    write_constant_model(&model_dir, 1.0);
    // One and a half seconds: not a whole number of windows.
    write_silent_wav(&dir.path().join("truncated.wav"), SAMPLE_RATE * 3 / 2);

    let mut cmd = cargo_bin_cmd!("songscribe");
    cmd.arg("-r")
        .arg(dir.path())
        .arg("-w")
        .arg(dir.path())
        .arg("-m")
        .arg(&model_dir)
        .arg("-q")
        .arg("--fail-fast")
        .arg("truncated.wav");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("not a multiple"));
}

#[test]
fn test_batch_continues_past_per_file_errors() {
    let dir = TempDir::new().unwrap();
    let model_dir = dir.path().join("model");
    write_constant_model(&model_dir, 1.0);
    write_silent_wav(&dir.path().join("good.wav"), SAMPLE_RATE);

    let out_dir = dir.path().join("labels");
    let mut cmd = cargo_bin_cmd!("songscribe");
    cmd.arg("-r")
        .arg(dir.path())
        .arg("-w")
        .arg(&out_dir)
        .arg("-m")
        .arg(&model_dir)
        .arg("missing.wav")
        .arg("good.wav");

    // Per-file errors are reported but do not abort the batch.
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Failed to process"));

    let contents = std::fs::read_to_string(out_dir.join("good.txt")).unwrap();
    assert_eq!(contents, "0 999\n");
}

#[test]
fn test_config_path_subcommand() {
    let mut cmd = cargo_bin_cmd!("songscribe");
    cmd.arg("config").arg("path");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}
