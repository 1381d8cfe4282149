//! # Algorithm Registry
//!
//! Closed sets of the validation (keyed-hash) and decryption (cipher)
//! algorithms a machine key may name.
//!
//! Lookup by name is case-insensitive. Anything outside these sets is an
//! `UnsupportedAlgorithm` error, never a silent default.

use crate::CryptoError;
use std::fmt;
use std::str::FromStr;

/// Keyed-hash algorithm used to produce the integrity tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValidationAlgorithm {
    /// HMAC-MD5 (16 bytes)
    Md5,
    /// HMAC-MD4 (16 bytes)
    Md4,
    /// HMAC-SM3 (32 bytes)
    Sm3,
    /// HMAC-SHA1 (20 bytes)
    Sha1,
    /// HMAC-SHA224 (28 bytes)
    Sha224,
    /// HMAC-SHA256 (32 bytes)
    Sha256,
    /// HMAC-SHA384 (48 bytes)
    Sha384,
    /// HMAC-SHA512 (64 bytes)
    Sha512,
    /// HMAC-SHA512/224 (28 bytes)
    Sha512_224,
    /// HMAC-SHA512/256 (32 bytes)
    Sha512_256,
    /// HMAC-SHA3-224 (28 bytes)
    Sha3_224,
    /// HMAC-SHA3-256 (32 bytes)
    Sha3_256,
    /// HMAC-SHA3-384 (48 bytes)
    Sha3_384,
    /// HMAC-SHA3-512 (64 bytes)
    Sha3_512,
}

impl ValidationAlgorithm {
    /// Every registered validation algorithm.
    pub const ALL: [ValidationAlgorithm; 14] = [
        Self::Md5,
        Self::Md4,
        Self::Sm3,
        Self::Sha1,
        Self::Sha224,
        Self::Sha256,
        Self::Sha384,
        Self::Sha512,
        Self::Sha512_224,
        Self::Sha512_256,
        Self::Sha3_224,
        Self::Sha3_256,
        Self::Sha3_384,
        Self::Sha3_512,
    ];

    /// Canonical lowercase identifier.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Md5 => "md5",
            Self::Md4 => "md4",
            Self::Sm3 => "sm3",
            Self::Sha1 => "sha1",
            Self::Sha224 => "sha224",
            Self::Sha256 => "sha256",
            Self::Sha384 => "sha384",
            Self::Sha512 => "sha512",
            Self::Sha512_224 => "sha512-224",
            Self::Sha512_256 => "sha512-256",
            Self::Sha3_224 => "sha3-224",
            Self::Sha3_256 => "sha3-256",
            Self::Sha3_384 => "sha3-384",
            Self::Sha3_512 => "sha3-512",
        }
    }

    /// Digest size in bytes. This is also the length of the appended tag.
    pub fn digest_length(&self) -> usize {
        match self {
            Self::Md5 | Self::Md4 => 16,
            Self::Sha1 => 20,
            Self::Sha224 | Self::Sha512_224 | Self::Sha3_224 => 28,
            Self::Sha256 | Self::Sha512_256 | Self::Sha3_256 | Self::Sm3 => 32,
            Self::Sha384 | Self::Sha3_384 => 48,
            Self::Sha512 | Self::Sha3_512 => 64,
        }
    }
}

impl FromStr for ValidationAlgorithm {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|alg| alg.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CryptoError::UnsupportedAlgorithm(s.to_string()))
    }
}

impl fmt::Display for ValidationAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Cipher used to keep the serialized ticket confidential.
///
/// New ciphers (DES, 3DES) are added as variants here; call sites match on
/// the enum and need no other change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DecryptionAlgorithm {
    /// AES-GCM, key size picked from the key material (128/192/256 bits)
    Aes,
}

impl DecryptionAlgorithm {
    /// Every registered decryption algorithm.
    pub const ALL: [DecryptionAlgorithm; 1] = [Self::Aes];

    /// Canonical lowercase identifier.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Aes => "aes",
        }
    }

    /// Accepted key sizes in bytes.
    pub fn key_lengths(&self) -> &'static [usize] {
        match self {
            Self::Aes => &[16, 24, 32],
        }
    }
}

impl FromStr for DecryptionAlgorithm {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|alg| alg.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CryptoError::UnsupportedAlgorithm(s.to_string()))
    }
}

impl fmt::Display for DecryptionAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Digest length in bytes for a validation algorithm named by string.
///
/// # Errors
///
/// Returns `CryptoError::UnsupportedAlgorithm` for names outside the registry.
pub fn digest_length(algorithm: &str) -> Result<usize, CryptoError> {
    Ok(algorithm.parse::<ValidationAlgorithm>()?.digest_length())
}
