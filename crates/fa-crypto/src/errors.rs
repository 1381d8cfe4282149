//! Crypto error types.

use thiserror::Error;

/// Cryptographic operation errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CryptoError {
    /// Algorithm identifier outside the registry
    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Key material could not be decoded
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Key material has the wrong size for the algorithm
    #[error("Invalid key length: expected one of {expected:?}, got {actual}")]
    InvalidKeyLength {
        /// Accepted key lengths in bytes
        expected: &'static [usize],
        /// Actual key length in bytes
        actual: usize,
    },

    /// Requested random key length is zero or odd
    #[error("Invalid random key length: {0} (must be even and positive)")]
    InvalidRandomKeyLength(usize),

    /// Encryption failed
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    /// Decryption failed
    #[error("Decryption failed: {0}")]
    DecryptionFailed(String),
}
