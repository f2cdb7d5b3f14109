//! The five stage implementations.
//!
//! Order is fixed by the chain builder: key validation, input loading, one
//! cryption variant, delivery dispatch, file output. Key validation runs
//! before any file is opened or any cipher call is made, so a bad key never
//! causes wasted I/O.

use super::{Flow, Stage};
use crate::cipher::Cipher;
use crate::error::{PipelineError, Result};
use crate::request::{OutputSink, Request};
use crate::storage;
use std::io::Write;
use std::sync::Arc;

/// Checks the key's byte-length against the cipher's accepted set.
pub struct ValidateKey {
    allowed: Vec<usize>,
}

impl ValidateKey {
    /// Captures the accepted lengths from the cipher at chain-build time.
    pub fn new(cipher: &dyn Cipher) -> Self {
        Self {
            allowed: cipher.valid_key_lengths().to_vec(),
        }
    }
}

impl Stage for ValidateKey {
    fn name(&self) -> &'static str {
        "validate-key"
    }

    fn handle(&self, request: &mut Request) -> Result<Flow> {
        let got = request.key().len();
        if self.allowed.contains(&got) {
            Ok(Flow::Continue)
        } else {
            Err(PipelineError::InvalidKeyLength {
                got,
                allowed: self.allowed.clone(),
            })
        }
    }
}

/// Loads the payload from the input file, if one was declared.
///
/// Pass-through when the request carries inline data.
pub struct LoadInput;

impl Stage for LoadInput {
    fn name(&self) -> &'static str {
        "load-input"
    }

    fn handle(&self, request: &mut Request) -> Result<Flow> {
        if let Some(path) = request.input_path().cloned() {
            let data = storage::read_input(&path)?;
            request.set_data(data);
        }
        Ok(Flow::Continue)
    }
}

/// Encrypts the payload. Built only into encryption chains.
pub struct Encrypt {
    cipher: Arc<dyn Cipher>,
}

impl Encrypt {
    pub fn new(cipher: Arc<dyn Cipher>) -> Self {
        Self { cipher }
    }
}

impl Stage for Encrypt {
    fn name(&self) -> &'static str {
        "encrypt"
    }

    fn handle(&self, request: &mut Request) -> Result<Flow> {
        let result = self.cipher.encrypt(request.key(), request.data())?;
        request.set_result(result);
        Ok(Flow::Continue)
    }
}

/// Decrypts the payload. Built only into decryption chains.
pub struct Decrypt {
    cipher: Arc<dyn Cipher>,
}

impl Decrypt {
    pub fn new(cipher: Arc<dyn Cipher>) -> Self {
        Self { cipher }
    }
}

impl Stage for Decrypt {
    fn name(&self) -> &'static str {
        "decrypt"
    }

    fn handle(&self, request: &mut Request) -> Result<Flow> {
        let result = self.cipher.decrypt(request.key(), request.data())?;
        request.set_result(result);
        Ok(Flow::Continue)
    }
}

/// Dispatches on the output sink.
///
/// `Print` writes the result bytes to standard output and terminates the
/// chain; a file sink forwards to the terminal write stage.
pub struct Deliver;

impl Stage for Deliver {
    fn name(&self) -> &'static str {
        "deliver"
    }

    fn handle(&self, request: &mut Request) -> Result<Flow> {
        match request.sink() {
            OutputSink::Print => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(request.result_bytes())?;
                stdout.flush()?;
                Ok(Flow::Done)
            }
            OutputSink::File(_) => Ok(Flow::Continue),
        }
    }
}

/// Terminal stage: writes the result bytes to the sink path atomically.
pub struct WriteFile;

impl Stage for WriteFile {
    fn name(&self) -> &'static str {
        "write-file"
    }

    fn handle(&self, request: &mut Request) -> Result<Flow> {
        let path = match request.sink() {
            OutputSink::File(path) => path.clone(),
            // The deliver stage terminates print requests before this stage.
            OutputSink::Print => {
                return Err(PipelineError::OutputWriteFailed {
                    path: std::path::PathBuf::new(),
                    detail: "no output path for a print request".to_string(),
                })
            }
        };

        storage::write_output(&path, request.result_bytes())?;
        Ok(Flow::Done)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher::DesCipher;
    use crate::request::Mode;
    use std::path::PathBuf;

    fn des() -> Arc<dyn Cipher> {
        Arc::new(DesCipher::new())
    }

    fn inline_request(key: &[u8], sink: OutputSink) -> Request {
        Request::inline(Mode::Encrypt, key.to_vec(), b"HELLO".to_vec(), sink)
    }

    #[test]
    fn test_validate_key_accepts_all_declared_lengths() {
        let stage = ValidateKey::new(&DesCipher::new());
        for len in [8, 16, 24] {
            let mut request = inline_request(&vec![0u8; len], OutputSink::Print);
            assert_eq!(stage.handle(&mut request).unwrap(), Flow::Continue);
        }
    }

    #[test]
    fn test_validate_key_rejects_odd_length() {
        let stage = ValidateKey::new(&DesCipher::new());
        let mut request = inline_request(b"1234567", OutputSink::Print);
        let err = stage.handle(&mut request).unwrap_err();
        match err {
            PipelineError::InvalidKeyLength { got, allowed } => {
                assert_eq!(got, 7);
                assert_eq!(allowed, vec![8, 16, 24]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_input_is_noop_for_inline_data() {
        let stage = LoadInput;
        let mut request = inline_request(b"A1B2C3D4", OutputSink::Print);
        stage.handle(&mut request).unwrap();
        assert_eq!(request.data(), b"HELLO");
    }

    #[test]
    fn test_load_input_reads_file_bytes() {
        let temp_dir = tempfile::tempdir().unwrap();
        let input = temp_dir.path().join("input.bin");
        std::fs::write(&input, b"file payload").unwrap();

        let stage = LoadInput;
        let mut request = Request::from_file(
            Mode::Encrypt,
            b"A1B2C3D4".to_vec(),
            input,
            OutputSink::Print,
        );
        stage.handle(&mut request).unwrap();
        assert_eq!(request.data(), b"file payload");
    }

    #[test]
    fn test_load_input_missing_file() {
        let stage = LoadInput;
        let mut request = Request::from_file(
            Mode::Encrypt,
            b"A1B2C3D4".to_vec(),
            PathBuf::from("/no/such/input.bin"),
            OutputSink::Print,
        );
        let err = stage.handle(&mut request).unwrap_err();
        assert!(matches!(err, PipelineError::InputNotFound { .. }));
    }

    #[test]
    fn test_encrypt_populates_result() {
        let stage = Encrypt::new(des());
        let mut request = inline_request(b"A1B2C3D4", OutputSink::Print);
        assert_eq!(stage.handle(&mut request).unwrap(), Flow::Continue);
        let result = request.result().unwrap();
        assert!(!result.is_empty());
        assert_ne!(result, b"HELLO");
    }

    #[test]
    fn test_decrypt_reverses_encrypt() {
        let cipher = des();
        let ciphertext = cipher.encrypt(b"A1B2C3D4", b"HELLO").unwrap();

        let stage = Decrypt::new(Arc::clone(&cipher));
        let mut request = Request::inline(
            Mode::Decrypt,
            b"A1B2C3D4".to_vec(),
            ciphertext,
            OutputSink::Print,
        );
        stage.handle(&mut request).unwrap();
        assert_eq!(request.result().unwrap(), b"HELLO");
    }

    #[test]
    fn test_deliver_short_circuits_print() {
        let stage = Deliver;
        let mut request = inline_request(b"A1B2C3D4", OutputSink::Print);
        request.set_result(Vec::new());
        assert_eq!(stage.handle(&mut request).unwrap(), Flow::Done);
    }

    #[test]
    fn test_deliver_forwards_file_sink() {
        let stage = Deliver;
        let mut request =
            inline_request(b"A1B2C3D4", OutputSink::File(PathBuf::from("out.bin")));
        request.set_result(b"ct".to_vec());
        assert_eq!(stage.handle(&mut request).unwrap(), Flow::Continue);
    }

    #[test]
    fn test_write_file_exact_bytes() {
        let temp_dir = tempfile::tempdir().unwrap();
        let target = temp_dir.path().join("out.bin");

        let stage = WriteFile;
        let mut request = inline_request(b"A1B2C3D4", OutputSink::File(target.clone()));
        request.set_result(b"exact result bytes".to_vec());
        assert_eq!(stage.handle(&mut request).unwrap(), Flow::Done);

        assert_eq!(std::fs::read(&target).unwrap(), b"exact result bytes");
    }

    #[test]
    fn test_write_file_bad_directory() {
        let stage = WriteFile;
        let mut request = inline_request(
            b"A1B2C3D4",
            OutputSink::File(PathBuf::from("/no/such/dir/out.bin")),
        );
        request.set_result(b"ct".to_vec());
        let err = stage.handle(&mut request).unwrap_err();
        assert!(matches!(err, PipelineError::OutputWriteFailed { .. }));
    }
}
