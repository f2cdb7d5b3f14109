//! Cryptflow - a chained cryption request pipeline
//!
//! This library turns a single cryption request (encrypt or decrypt data
//! from a string or a file with a symmetric key) into a validated, executed,
//! and delivered result. A request flows through a fixed linear chain of
//! single-responsibility stages; each stage may reject it with a typed error
//! or enrich it and forward it.
//!
//! # Features
//!
//! - **Fixed linear chain**: key validation, input loading, cryption,
//!   delivery dispatch, file output - in that order, always
//! - **Early-exit failure**: the first stage error halts the chain with no
//!   downstream side effects
//! - **Pluggable cipher**: the DES family ships by default (key length
//!   selects DES, 3DES-EDE2, or 3DES-EDE3); any [`Cipher`] can be injected
//! - **Atomic output**: file delivery writes through a temporary file, so
//!   the destination receives the full result or is left untouched
//! - **Key hygiene**: request key material is zeroized on drop
//!
//! # Example
//!
//! ```no_run
//! use cryptflow::{Mode, OutputSink, Pipeline, Request};
//! use std::path::PathBuf;
//!
//! let pipeline = Pipeline::with_des();
//! let mut request = Request::inline(
//!     Mode::Encrypt,
//!     b"A1B2C3D4".to_vec(),
//!     b"HELLO".to_vec(),
//!     OutputSink::File(PathBuf::from("hello.enc")),
//! );
//! pipeline.run(&mut request).unwrap();
//! ```

pub mod cipher;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod request;
pub mod storage;

// Re-export commonly used types
pub use cipher::{Cipher, DesCipher};
pub use error::{PipelineError, Result};
pub use pipeline::{Chain, Flow, Pipeline, Stage};
pub use request::{Mode, OutputSink, Request};
