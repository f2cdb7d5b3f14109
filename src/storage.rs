//! File I/O for the input-loading and file-output stages.
//!
//! Output writes are atomic: data is written to a temporary file in the
//! destination directory and persisted over the target path, so the
//! destination either receives the complete result or is left untouched.

use crate::error::{PipelineError, Result};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tempfile::Builder;

/// Reads the entire contents of the input file as raw bytes.
///
/// Any failure to open or read the file maps to `InputNotFound` for that
/// path; the pipeline makes at most one read attempt.
pub fn read_input(path: &Path) -> Result<Vec<u8>> {
    let mut data = Vec::new();
    File::open(path)
        .and_then(|mut file| file.read_to_end(&mut data))
        .map_err(|_| PipelineError::InputNotFound {
            path: path.to_path_buf(),
        })?;
    Ok(data)
}

/// Writes result bytes to the output file atomically.
///
/// # Errors
///
/// Returns `OutputWriteFailed` if the destination has no parent directory,
/// the temporary file cannot be created or written, or the rename into
/// place fails.
pub fn write_output(path: &Path, data: &[u8]) -> Result<()> {
    let write_failed = |detail: String| PipelineError::OutputWriteFailed {
        path: path.to_path_buf(),
        detail,
    };

    let output_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut temp_file = Builder::new()
        .prefix("cryptflow")
        .suffix(".tmp")
        .tempfile_in(output_dir)
        .map_err(|e| write_failed(e.to_string()))?;

    temp_file
        .as_file_mut()
        .write_all(data)
        .map_err(|e| write_failed(e.to_string()))?;

    temp_file
        .persist(path)
        .map_err(|e| write_failed(e.to_string()))?;
    Ok(())
}
