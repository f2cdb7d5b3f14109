//! The symmetric cipher capability consumed by the pipeline.
//!
//! The pipeline treats the cipher as an opaque collaborator: given a
//! validated key and a byte buffer it produces ciphertext or plaintext, and
//! it declares which key lengths it accepts. Implementations are pluggable,
//! which the tests use to inject instrumented spies.

pub mod des;

use crate::error::Result;

pub use des::DesCipher;

/// Trait for symmetric block encryption and decryption.
///
/// Implementors must be safe to share across threads; the pipeline holds
/// the cipher behind an `Arc` and never mutates it.
pub trait Cipher: Send + Sync {
    /// Encrypt plaintext with the given key.
    ///
    /// The key's length has already been checked against
    /// [`valid_key_lengths`](Cipher::valid_key_lengths) by the time the
    /// pipeline calls this.
    fn encrypt(&self, key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>>;

    /// Decrypt ciphertext with the given key.
    ///
    /// Fails with `CipherFailure` if the ciphertext is malformed for the
    /// algorithm (wrong block alignment, corrupt padding).
    fn decrypt(&self, key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>>;

    /// Key byte-lengths this cipher accepts, in ascending order.
    fn valid_key_lengths(&self) -> &[usize];
}
