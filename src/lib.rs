//! Songscribe - birdsong annotation CLI tool.
//!
//! Splits field recordings into one-second windows, classifies each window
//! with a pretrained scaler + SVM, and writes millisecond-resolution
//! annotation files for manual review.

#![warn(missing_docs)]

pub mod audio;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod features;
pub mod inference;
pub mod output;
pub mod pipeline;

use clap::Parser;
use cli::{AnnotateArgs, Cli, Command, ConfigAction};
use config::{Config, load_default_config};
use constants::model::DEFAULT_DIR;
use features::FeatureExtractor;
use inference::SongClassifier;
use pipeline::{process_file, resolve_input};
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

pub use error::{Error, Result};

/// Main entry point for the songscribe CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.annotate.verbose, cli.annotate.quiet);

    let config = load_default_config()?;

    if let Some(command) = cli.command {
        return handle_command(command, &config);
    }

    if cli.inputs.is_empty() {
        return Err(Error::NoInputFiles);
    }

    annotate_files(&cli.inputs, &cli.annotate, &config)
}

/// Annotate the given input files with the resolved options.
fn annotate_files(inputs: &[PathBuf], args: &AnnotateArgs, config: &Config) -> Result<()> {
    use crate::output::progress;
    use std::time::Instant;

    let total_start = Instant::now();

    let read_dir = resolve_dir(args.read_dir.as_deref(), config.defaults.read_dir.as_deref());
    let write_dir = resolve_dir(
        args.write_dir.as_deref(),
        config.defaults.write_dir.as_deref(),
    );
    let model_dir = args
        .model_dir
        .clone()
        .or_else(|| config.defaults.model_dir.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DIR));

    // Model artifacts are loaded once and shared read-only across all
    // files; a load failure aborts the whole run.
    info!("Loading model artifacts from: {}", model_dir.display());
    let classifier = SongClassifier::load(&model_dir)?;
    let extractor = FeatureExtractor::new();

    info!("Annotating {} file(s)", inputs.len());

    let progress_enabled = !args.quiet && !args.no_progress;
    let file_progress = progress::create_file_progress(inputs.len(), progress_enabled);

    let mut processed = 0;
    let mut errors = 0;
    let mut total_windows = 0;
    let mut total_annotations = 0;

    for input in inputs {
        let result = resolve_input(input, &read_dir)
            .and_then(|path| process_file(&path, &write_dir, &extractor, &classifier));

        match result {
            Ok(outcome) => {
                processed += 1;
                total_windows += outcome.windows;
                total_annotations += outcome.annotations;
            }
            Err(e) => {
                error!("Failed to process {}: {}", input.display(), e);
                errors += 1;
                if args.fail_fast {
                    progress::finish_progress(file_progress, "Failed");
                    return Err(e);
                }
            }
        }
        progress::inc_progress(file_progress.as_ref());
    }

    progress::finish_progress(file_progress, "Complete");

    let total_duration = total_start.elapsed().as_secs_f64();
    info!(
        "Complete: {} processed, {} errors, {} annotation(s) over {} window(s) in {:.2}s",
        processed, errors, total_annotations, total_windows, total_duration
    );

    if errors > 0 {
        warn!("{} file(s) had errors", errors);
    }

    Ok(())
}

/// Pick the first configured directory, falling back to the current one.
fn resolve_dir(from_args: Option<&Path>, from_config: Option<&Path>) -> PathBuf {
    from_args
        .or(from_config)
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
}

fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter_str = if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

#[allow(clippy::print_stdout)]
fn handle_command(command: Command, config: &Config) -> Result<()> {
    match command {
        Command::Config { action } => match action {
            ConfigAction::Init => {
                let path = config::config_file_path()?;
                if path.exists() {
                    println!("Configuration file already exists: {}", path.display());
                } else {
                    let saved_path = config::save_default_config(&Config::default())?;
                    println!("Created configuration file: {}", saved_path.display());
                }
                Ok(())
            }
            ConfigAction::Show => {
                println!("{config:#?}");
                Ok(())
            }
            ConfigAction::Path => {
                let path = config::config_file_path()?;
                println!("{}", path.display());
                Ok(())
            }
        },
    }
}
