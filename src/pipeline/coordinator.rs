//! Input resolution and output path construction.

use crate::constants::{ANNOTATION_EXTENSION, INPUT_EXTENSIONS};
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Resolve an input name to an audio file under the read directory.
///
/// Names may be given with or without an extension; extension-less names are
/// tried with each candidate extension in order.
pub fn resolve_input(name: &Path, read_dir: &Path) -> Result<PathBuf> {
    let direct = read_dir.join(name);
    if direct.is_file() {
        return Ok(direct);
    }

    if name.extension().is_none() {
        for ext in INPUT_EXTENSIONS {
            let candidate = direct.with_extension(ext);
            if candidate.is_file() {
                return Ok(candidate);
            }
        }
    }

    Err(Error::InputNotFound {
        name: name.display().to_string(),
        read_dir: read_dir.to_path_buf(),
    })
}

/// Annotation file path for an input: `<write_dir>/<stem>.txt`.
pub fn annotation_path_for(input: &Path, write_dir: &Path) -> PathBuf {
    let stem = input.file_stem().map_or_else(
        || std::borrow::Cow::Borrowed("output"),
        |s| s.to_string_lossy(),
    );
    write_dir.join(format!("{stem}.{ANNOTATION_EXTENSION}"))
}
