//! Configuration constants for the DES cipher family.
//!
//! The set of accepted key lengths is a plain configuration value owned by
//! the cipher adapter; the validation stage queries it through the `Cipher`
//! trait rather than consulting any global state.

/// Single-DES key length in bytes.
pub const DES_KEY_LEN: usize = 8;

/// Two-key triple-DES (EDE2) key length in bytes.
pub const TDES_EDE2_KEY_LEN: usize = 16;

/// Three-key triple-DES (EDE3) key length in bytes.
pub const TDES_EDE3_KEY_LEN: usize = 24;

/// DES block size in bytes; ciphertext is always a whole number of blocks.
pub const DES_BLOCK_LEN: usize = 8;

/// Key lengths accepted by the DES cipher family, in ascending order.
pub const DES_KEY_LENGTHS: &[usize] = &[DES_KEY_LEN, TDES_EDE2_KEY_LEN, TDES_EDE3_KEY_LEN];
