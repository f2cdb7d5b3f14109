//! The cryption pipeline: stage trait, chain, and runner.
//!
//! A request traverses a fixed linear sequence of stages. Each stage either
//! forwards the request (`Flow::Continue`), terminates the chain successfully
//! (`Flow::Done`, the print short-circuit), or fails with a typed error that
//! halts the chain immediately. There is no branching topology, no retry,
//! and no stage is ever revisited.

pub mod chain;
pub mod stages;

use crate::cipher::Cipher;
use crate::error::Result;
use crate::request::Request;
use std::sync::Arc;

pub use chain::Chain;

/// Outcome of a stage that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Forward the request to the next stage.
    Continue,
    /// The chain is complete; no further stage runs.
    Done,
}

/// One link in the chain.
///
/// Stages hold only their own configuration and a shared cipher handle;
/// all per-request state lives on the `Request` itself, so a stage may be
/// driven over any number of requests without cross-contamination.
pub trait Stage {
    /// Stable name for diagnostics and chain-shape assertions.
    fn name(&self) -> &'static str;

    /// Validates or transforms the request.
    fn handle(&self, request: &mut Request) -> Result<Flow>;
}

/// Drives cryption requests through mode-specific chains.
///
/// A fresh chain is constructed for every run, so concurrent invocations
/// from separate threads are safe as long as each uses its own `Request`;
/// the cipher itself is shared immutably.
pub struct Pipeline {
    cipher: Arc<dyn Cipher>,
}

impl Pipeline {
    /// Creates a pipeline over the given cipher capability.
    pub fn new(cipher: Arc<dyn Cipher>) -> Self {
        Self { cipher }
    }

    /// Creates a pipeline over the default DES-family cipher.
    pub fn with_des() -> Self {
        Self::new(Arc::new(crate::cipher::DesCipher::new()))
    }

    /// Runs one request to completion.
    ///
    /// Builds the chain for the request's mode and drives the request
    /// through it. The first stage failure is returned untouched; no
    /// downstream stage runs after a failure.
    pub fn run(&self, request: &mut Request) -> Result<()> {
        let chain = Chain::for_mode(request.mode(), Arc::clone(&self.cipher));
        chain.run(request)
    }
}
