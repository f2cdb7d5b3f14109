//! Error types for the cryption pipeline.
//!
//! Every stage failure is fatal to the current request: the chain halts at
//! the first error and the runner surfaces it to the caller untouched.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for all pipeline operations.
///
/// Each variant maps to the stage that raises it; no stage downstream of a
/// failure ever runs.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Key byte-length is not in the cipher's accepted set.
    #[error("invalid key length: got {got} bytes, expected one of {allowed:?}")]
    InvalidKeyLength {
        /// Length of the key that was supplied.
        got: usize,
        /// Key lengths the cipher accepts, in ascending order.
        allowed: Vec<usize>,
    },

    /// Declared input file does not exist or could not be opened.
    #[error("input file not found or unreadable: {}", .path.display())]
    InputNotFound {
        /// The path that failed to open.
        path: PathBuf,
    },

    /// The underlying cipher rejected the key/data combination.
    #[error("cipher failure: {detail}")]
    CipherFailure {
        /// Description from the cipher adapter.
        detail: String,
    },

    /// The destination file could not be written.
    #[error("failed to write output file {}: {detail}", .path.display())]
    OutputWriteFailed {
        /// The destination path.
        path: PathBuf,
        /// Description of the underlying I/O failure.
        detail: String,
    },

    /// I/O error outside the file-bound stages (stdout delivery).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Results using PipelineError.
pub type Result<T> = std::result::Result<T, PipelineError>;
