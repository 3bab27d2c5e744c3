//! Plain-text annotation file writer.

use crate::error::{Error, Result};
use crate::output::Annotation;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Writes annotations as plain-text lines: `"<start_ms> <end_ms>\n"`.
///
/// No header, no trailing metadata. A file with zero positive windows still
/// produces an (empty) output file.
pub struct AnnotationWriter {
    writer: BufWriter<File>,
    path: PathBuf,
}

impl AnnotationWriter {
    /// Create the output file, truncating any previous contents.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|e| Error::AnnotationWrite {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(Self {
            writer: BufWriter::new(file),
            path: path.to_path_buf(),
        })
    }

    /// Write one annotation line.
    pub fn write_annotation(&mut self, annotation: &Annotation) -> Result<()> {
        writeln!(self.writer, "{} {}", annotation.start_ms, annotation.end_ms).map_err(|e| {
            Error::AnnotationWrite {
                path: self.path.clone(),
                source: e,
            }
        })
    }

    /// Flush buffered output.
    pub fn finalize(&mut self) -> Result<()> {
        self.writer.flush().map_err(|e| Error::AnnotationWrite {
            path: self.path.clone(),
            source: e,
        })
    }
}
