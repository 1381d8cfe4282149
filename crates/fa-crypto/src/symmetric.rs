//! # Symmetric Encryption
//!
//! Provides the ticket cipher for each registered decryption algorithm.
//!
//! ## Output Layout
//!
//! `nonce (12 bytes) || AES-GCM ciphertext || GCM tag (16 bytes)`
//!
//! The nonce travels with the ciphertext so decryption needs nothing but
//! the key.
//!
//! ## Security Properties
//!
//! - **AES-GCM**: fresh random 96-bit nonce per encryption
//! - Key size (128/192/256) follows the decoded key material

use crate::{CryptoError, DecryptionAlgorithm};
use aes_gcm::aead::consts::U12;
use aes_gcm::aead::{Aead, AeadCore, KeyInit};
use aes_gcm::aes::Aes192;
use aes_gcm::{Aes128Gcm, Aes256Gcm, AesGcm};
use rand::RngCore;
use zeroize::{Zeroize, ZeroizeOnDrop};

type Aes192Gcm = AesGcm<Aes192, U12>;

/// Nonce size prepended to every ciphertext.
pub const NONCE_SIZE: usize = 12;

/// Secret cipher key, cleared on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey(Vec<u8>);

impl SecretKey {
    /// Create from bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Decode from a hex string.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::InvalidKey` for empty or non-hex input.
    pub fn from_hex(hex_key: &str) -> Result<Self, CryptoError> {
        let trimmed = hex_key.trim();
        if trimmed.is_empty() {
            return Err(CryptoError::InvalidKey("key material is empty".into()));
        }
        hex::decode(trimmed)
            .map(Self)
            .map_err(|e| CryptoError::InvalidKey(e.to_string()))
    }

    /// Generate a random key of `len` bytes.
    pub fn generate(len: usize) -> Self {
        let mut bytes = vec![0u8; len];
        rand::thread_rng().fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Get inner bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Key length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the key holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecretKey([REDACTED; {}])", self.0.len())
    }
}

/// Check that `key` fits `algorithm`.
///
/// # Errors
///
/// Returns `CryptoError::InvalidKeyLength` if the size is not accepted.
pub fn validate_key(algorithm: DecryptionAlgorithm, key: &SecretKey) -> Result<(), CryptoError> {
    let accepted = algorithm.key_lengths();
    if accepted.contains(&key.len()) {
        Ok(())
    } else {
        Err(CryptoError::InvalidKeyLength {
            expected: accepted,
            actual: key.len(),
        })
    }
}

/// Encrypt `plaintext` under `algorithm`.
///
/// Returns `nonce || ciphertext`.
///
/// # Errors
///
/// Returns `CryptoError::InvalidKeyLength` for a key of the wrong size and
/// `CryptoError::EncryptionFailed` if the cipher rejects the input.
pub fn encrypt(
    algorithm: DecryptionAlgorithm,
    key: &SecretKey,
    plaintext: &[u8],
) -> Result<Vec<u8>, CryptoError> {
    validate_key(algorithm, key)?;

    match algorithm {
        DecryptionAlgorithm::Aes => match key.len() {
            16 => seal::<Aes128Gcm>(key.as_bytes(), plaintext),
            24 => seal::<Aes192Gcm>(key.as_bytes(), plaintext),
            _ => seal::<Aes256Gcm>(key.as_bytes(), plaintext),
        },
    }
}

/// Decrypt `nonce || ciphertext` produced by [`encrypt`].
///
/// # Errors
///
/// Returns `CryptoError::DecryptionFailed` if the input is too short or the
/// cipher rejects it.
pub fn decrypt(
    algorithm: DecryptionAlgorithm,
    key: &SecretKey,
    data: &[u8],
) -> Result<Vec<u8>, CryptoError> {
    validate_key(algorithm, key)?;

    match algorithm {
        DecryptionAlgorithm::Aes => match key.len() {
            16 => open::<Aes128Gcm>(key.as_bytes(), data),
            24 => open::<Aes192Gcm>(key.as_bytes(), data),
            _ => open::<Aes256Gcm>(key.as_bytes(), data),
        },
    }
}

fn seal<C>(key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>, CryptoError>
where
    C: Aead + AeadCore<NonceSize = U12> + KeyInit,
{
    let cipher = C::new_from_slice(key).map_err(|e| CryptoError::EncryptionFailed(e.to_string()))?;

    let mut nonce = [0u8; NONCE_SIZE];
    rand::thread_rng().fill_bytes(&mut nonce);

    let ciphertext = cipher
        .encrypt(aes_gcm::Nonce::<U12>::from_slice(&nonce), plaintext)
        .map_err(|e| CryptoError::EncryptionFailed(e.to_string()))?;

    let mut out = Vec::with_capacity(NONCE_SIZE + ciphertext.len());
    out.extend_from_slice(&nonce);
    out.extend_from_slice(&ciphertext);
    Ok(out)
}

fn open<C>(key: &[u8], data: &[u8]) -> Result<Vec<u8>, CryptoError>
where
    C: Aead + AeadCore<NonceSize = U12> + KeyInit,
{
    if data.len() < NONCE_SIZE {
        return Err(CryptoError::DecryptionFailed(format!(
            "ciphertext shorter than {NONCE_SIZE}-byte nonce"
        )));
    }
    let (nonce, ciphertext) = data.split_at(NONCE_SIZE);

    let cipher = C::new_from_slice(key).map_err(|e| CryptoError::DecryptionFailed(e.to_string()))?;

    cipher
        .decrypt(aes_gcm::Nonce::<U12>::from_slice(nonce), ciphertext)
        .map_err(|e| CryptoError::DecryptionFailed(e.to_string()))
}
