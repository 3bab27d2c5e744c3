//! Processing pipeline components.

mod coordinator;
mod processor;

pub use coordinator::{annotation_path_for, resolve_input};
pub use processor::{ProcessResult, process_file};
