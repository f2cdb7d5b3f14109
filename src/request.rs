//! The request record that flows through the pipeline.
//!
//! A `Request` is built fully populated except for its result, passed by
//! mutable reference through one chain traversal, and discarded afterwards.
//! Exactly one data source (inline bytes or an input path) is set at
//! construction; the input-loading stage overwrites the payload with the
//! file's bytes before the cryption stage runs.

use std::path::PathBuf;
use zeroize::Zeroizing;

/// Direction of the cryption operation. Set once at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Turn plaintext into ciphertext.
    Encrypt,
    /// Turn ciphertext back into plaintext.
    Decrypt,
}

/// Destination for the cryption result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputSink {
    /// Write result bytes to standard output and terminate the chain.
    Print,
    /// Write result bytes to the given file path.
    File(PathBuf),
}

/// One unit of cryption work.
///
/// Key bytes are held in zeroizing memory and cleared when the request is
/// dropped.
#[derive(Debug)]
pub struct Request {
    mode: Mode,
    key: Zeroizing<Vec<u8>>,
    /// Effective payload. Holds the inline bytes, or is overwritten by the
    /// input-loading stage when `input_path` is set.
    data: Vec<u8>,
    input_path: Option<PathBuf>,
    sink: OutputSink,
    result: Option<Vec<u8>>,
}

impl Request {
    /// Creates a request whose payload is supplied directly.
    pub fn inline(mode: Mode, key: Vec<u8>, data: Vec<u8>, sink: OutputSink) -> Self {
        Self {
            mode,
            key: Zeroizing::new(key),
            data,
            input_path: None,
            sink,
            result: None,
        }
    }

    /// Creates a request whose payload is read from a file by the pipeline.
    pub fn from_file(mode: Mode, key: Vec<u8>, path: PathBuf, sink: OutputSink) -> Self {
        Self {
            mode,
            key: Zeroizing::new(key),
            data: Vec::new(),
            input_path: Some(path),
            sink,
            result: None,
        }
    }

    /// The cryption direction.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Key bytes as supplied by the caller.
    pub fn key(&self) -> &[u8] {
        &self.key
    }

    /// The effective payload bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// The input file path, if the payload comes from disk.
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.input_path.as_ref()
    }

    /// Where the result goes.
    pub fn sink(&self) -> &OutputSink {
        &self.sink
    }

    /// The cryption output, once the cryption stage has run.
    pub fn result(&self) -> Option<&[u8]> {
        self.result.as_deref()
    }

    /// Result bytes for the delivery stages; empty until the cryption stage
    /// has populated the result.
    pub(crate) fn result_bytes(&self) -> &[u8] {
        self.result.as_deref().unwrap_or_default()
    }

    /// Replaces the payload with bytes loaded from the input file.
    pub(crate) fn set_data(&mut self, data: Vec<u8>) {
        self.data = data;
    }

    /// Stores the cryption output. Called exactly once per traversal.
    pub(crate) fn set_result(&mut self, result: Vec<u8>) {
        self.result = Some(result);
    }
}
