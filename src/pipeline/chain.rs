//! Chain construction and traversal.
//!
//! The chain is a fixed ordered sequence of boxed stages driven by an
//! explicit loop, not a web of runtime-mutable next-pointers. One chain
//! shape exists per mode; the only difference between them is which
//! cryption variant sits in the middle. Encryption and decryption chains
//! are built independently so mode dispatch can never run a request down
//! the wrong chain.

use super::stages::{Decrypt, Deliver, Encrypt, LoadInput, ValidateKey, WriteFile};
use super::{Flow, Stage};
use crate::cipher::Cipher;
use crate::error::Result;
use crate::request::{Mode, Request};
use std::sync::Arc;

/// The fixed ordered stage sequence for one mode.
///
/// Chains hold no per-request state: building one is cheap, and every
/// pipeline run constructs its own, so no state leaks across requests.
pub struct Chain {
    stages: Vec<Box<dyn Stage>>,
}

impl Chain {
    /// Builds the chain for the given mode.
    ///
    /// Order: key validation, input loading, the mode's cryption variant,
    /// delivery dispatch, file output.
    pub fn for_mode(mode: Mode, cipher: Arc<dyn Cipher>) -> Self {
        let crypt: Box<dyn Stage> = match mode {
            Mode::Encrypt => Box::new(Encrypt::new(Arc::clone(&cipher))),
            Mode::Decrypt => Box::new(Decrypt::new(Arc::clone(&cipher))),
        };

        Self {
            stages: vec![
                Box::new(ValidateKey::new(cipher.as_ref())),
                Box::new(LoadInput),
                crypt,
                Box::new(Deliver),
                Box::new(WriteFile),
            ],
        }
    }

    /// Drives the request through the stages in order.
    ///
    /// Stops at the first stage that reports `Flow::Done` or fails. The
    /// first error is returned untouched and no later stage runs.
    pub fn run(&self, request: &mut Request) -> Result<()> {
        for stage in &self.stages {
            match stage.handle(request)? {
                Flow::Continue => {}
                Flow::Done => return Ok(()),
            }
        }
        Ok(())
    }

    /// Stage names in traversal order.
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|stage| stage.name()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher::DesCipher;
    use crate::request::OutputSink;

    fn des() -> Arc<dyn Cipher> {
        Arc::new(DesCipher::new())
    }

    #[test]
    fn test_encrypt_chain_shape() {
        let chain = Chain::for_mode(Mode::Encrypt, des());
        assert_eq!(
            chain.stage_names(),
            vec!["validate-key", "load-input", "encrypt", "deliver", "write-file"]
        );
    }

    #[test]
    fn test_decrypt_chain_shape() {
        let chain = Chain::for_mode(Mode::Decrypt, des());
        assert_eq!(
            chain.stage_names(),
            vec!["validate-key", "load-input", "decrypt", "deliver", "write-file"]
        );
    }

    #[test]
    fn test_chains_are_independent() {
        let cipher = des();
        let first = Chain::for_mode(Mode::Encrypt, Arc::clone(&cipher));
        let second = Chain::for_mode(Mode::Encrypt, cipher);

        let mut request_a = Request::inline(
            Mode::Encrypt,
            b"A1B2C3D4".to_vec(),
            b"first".to_vec(),
            OutputSink::Print,
        );
        first.run(&mut request_a).unwrap();

        // Running the first chain leaves the second unaffected.
        let mut request_b = Request::inline(
            Mode::Encrypt,
            b"A1B2C3D4".to_vec(),
            b"second".to_vec(),
            OutputSink::Print,
        );
        second.run(&mut request_b).unwrap();

        assert_ne!(request_a.result().unwrap(), request_b.result().unwrap());
    }

    #[test]
    fn test_halt_on_error_skips_cryption() {
        let chain = Chain::for_mode(Mode::Encrypt, des());
        let mut request = Request::inline(
            Mode::Encrypt,
            b"bad".to_vec(),
            b"data".to_vec(),
            OutputSink::Print,
        );
        assert!(chain.run(&mut request).is_err());
        assert!(request.result().is_none());
    }
}
