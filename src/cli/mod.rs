//! CLI argument parsing.

mod args;

pub use args::{AnnotateArgs, Cli, Command, ConfigAction};
