//! CLI argument definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Annotate birdsong in field audio recordings.
#[derive(Debug, Parser)]
#[command(name = "songscribe")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Audio files to annotate, by name; extensions are optional for WAV
    /// files under the read directory.
    pub inputs: Vec<PathBuf>,

    /// Common options for annotation.
    #[command(flatten)]
    pub annotate: AnnotateArgs,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    Config {
        /// Configuration action to perform.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommand actions.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ConfigAction {
    /// Create default configuration file.
    Init,
    /// Display current configuration.
    Show,
    /// Print configuration file path.
    Path,
}

/// Arguments for the annotate command.
#[derive(Debug, Args)]
pub struct AnnotateArgs {
    /// Directory containing the audio files (default: current directory).
    #[arg(short = 'r', long, env = "SONGSCRIBE_READ_DIR")]
    pub read_dir: Option<PathBuf>,

    /// Directory to place annotation files in (default: current directory).
    #[arg(short = 'w', long, env = "SONGSCRIBE_WRITE_DIR")]
    pub write_dir: Option<PathBuf>,

    /// Directory containing the scaler and SVM artifacts (default: model/).
    #[arg(short = 'm', long, env = "SONGSCRIBE_MODEL_DIR")]
    pub model_dir: Option<PathBuf>,

    /// Stop on first error instead of continuing with remaining files.
    #[arg(long)]
    pub fail_fast: bool,

    /// Suppress progress output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable the progress bar without reducing log output.
    #[arg(long)]
    pub no_progress: bool,

    /// Increase verbosity (-v: debug, -vv: trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_simple() {
        let cli = Cli::try_parse_from(["songscribe", "site_a"]).unwrap();
        assert_eq!(cli.inputs, vec![PathBuf::from("site_a")]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_parse_with_options() {
        let cli = Cli::try_parse_from([
            "songscribe",
            "-r",
            "/recordings",
            "-w",
            "/labels",
            "-v",
            "site_a",
            "site_b",
        ])
        .unwrap();
        assert_eq!(cli.annotate.read_dir, Some(PathBuf::from("/recordings")));
        assert_eq!(cli.annotate.write_dir, Some(PathBuf::from("/labels")));
        assert_eq!(cli.annotate.verbose, 1);
        assert_eq!(cli.inputs.len(), 2);
    }

    #[test]
    fn test_cli_parse_config_subcommand() {
        let cli = Cli::try_parse_from(["songscribe", "config", "show"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Config {
                action: ConfigAction::Show
            })
        ));
    }

    #[test]
    fn test_cli_verbose_count() {
        let cli = Cli::try_parse_from(["songscribe", "-vv", "site_a"]).unwrap();
        assert_eq!(cli.annotate.verbose, 2);
    }
}
