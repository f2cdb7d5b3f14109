//! DES-family cipher adapter.
//!
//! Wraps the RustCrypto DES primitives in ECB mode with PKCS#7 padding.
//! The key length selects the algorithm: 8 bytes is single DES, 16 bytes is
//! two-key triple DES (EDE2), 24 bytes is three-key triple DES (EDE3).

use super::Cipher;
use crate::config::{DES_BLOCK_LEN, DES_KEY_LEN, DES_KEY_LENGTHS, TDES_EDE2_KEY_LEN, TDES_EDE3_KEY_LEN};
use crate::error::{PipelineError, Result};
use des::{Des, TdesEde2, TdesEde3};
use ecb::cipher::block_padding::Pkcs7;
use ecb::cipher::{BlockCipher, BlockDecryptMut, BlockEncryptMut, KeyInit};

/// DES / triple-DES cipher in ECB mode with PKCS#7 padding.
#[derive(Debug, Clone, Copy, Default)]
pub struct DesCipher;

impl DesCipher {
    /// Creates a new DES-family cipher.
    pub fn new() -> Self {
        Self
    }
}

fn cipher_failure(detail: impl Into<String>) -> PipelineError {
    PipelineError::CipherFailure {
        detail: detail.into(),
    }
}

fn encrypt_blocks<C>(key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>>
where
    C: BlockCipher + BlockEncryptMut + KeyInit,
{
    let encryptor =
        ecb::Encryptor::<C>::new_from_slice(key).map_err(|e| cipher_failure(e.to_string()))?;
    Ok(encryptor.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
}

fn decrypt_blocks<C>(key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>>
where
    C: BlockCipher + BlockDecryptMut + KeyInit,
{
    let decryptor =
        ecb::Decryptor::<C>::new_from_slice(key).map_err(|e| cipher_failure(e.to_string()))?;
    decryptor
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| cipher_failure("ciphertext has invalid PKCS#7 padding"))
}

impl Cipher for DesCipher {
    fn encrypt(&self, key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
        match key.len() {
            DES_KEY_LEN => encrypt_blocks::<Des>(key, plaintext),
            TDES_EDE2_KEY_LEN => encrypt_blocks::<TdesEde2>(key, plaintext),
            TDES_EDE3_KEY_LEN => encrypt_blocks::<TdesEde3>(key, plaintext),
            other => Err(cipher_failure(format!("unsupported key length {other}"))),
        }
    }

    fn decrypt(&self, key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
        if ciphertext.is_empty() || ciphertext.len() % DES_BLOCK_LEN != 0 {
            return Err(cipher_failure(format!(
                "ciphertext length {} is not a positive multiple of the {}-byte block size",
                ciphertext.len(),
                DES_BLOCK_LEN
            )));
        }

        match key.len() {
            DES_KEY_LEN => decrypt_blocks::<Des>(key, ciphertext),
            TDES_EDE2_KEY_LEN => decrypt_blocks::<TdesEde2>(key, ciphertext),
            TDES_EDE3_KEY_LEN => decrypt_blocks::<TdesEde3>(key, ciphertext),
            other => Err(cipher_failure(format!("unsupported key length {other}"))),
        }
    }

    fn valid_key_lengths(&self) -> &[usize] {
        DES_KEY_LENGTHS
    }
}
