//! # Machine Key Entity
//!
//! Algorithm choices and key material that protect a ticket.
//!
//! Both algorithm identifiers are checked against the registry when the key
//! is built, never on first use.

use super::errors::TicketError;
use fa_crypto::symmetric::validate_key;
use fa_crypto::{generate_random_key, DecryptionAlgorithm, SecretKey, ValidationAlgorithm};
use std::fmt;

/// Hex length of generated validation keys (64 bytes).
pub const GENERATED_VALIDATION_KEY_HEX_LEN: usize = 128;

/// Hex length of generated decryption keys (32 bytes, AES-256).
pub const GENERATED_DECRYPTION_KEY_HEX_LEN: usize = 64;

/// Machine key.
#[derive(Clone)]
pub struct MachineKey {
    decryption: DecryptionAlgorithm,
    decryption_key: SecretKey,
    validation: ValidationAlgorithm,
    validation_key: SecretKey,
}

impl MachineKey {
    /// Build from the four configuration strings.
    ///
    /// # Errors
    ///
    /// - `UnsupportedAlgorithm` if either algorithm is outside the registry
    /// - `InvalidKey` if key material is empty, not hex, or the wrong size
    pub fn new(
        decryption: &str,
        decryption_key: &str,
        validation: &str,
        validation_key: &str,
    ) -> Result<Self, TicketError> {
        let decryption: DecryptionAlgorithm = decryption.parse()?;
        let validation: ValidationAlgorithm = validation.parse()?;

        Self::from_parts(
            decryption,
            SecretKey::from_hex(decryption_key)?,
            validation,
            SecretKey::from_hex(validation_key)?,
        )
    }

    /// Build from already decoded parts.
    ///
    /// # Errors
    ///
    /// Returns `InvalidKey` if the decryption key does not fit its cipher or
    /// the validation key is empty.
    pub fn from_parts(
        decryption: DecryptionAlgorithm,
        decryption_key: SecretKey,
        validation: ValidationAlgorithm,
        validation_key: SecretKey,
    ) -> Result<Self, TicketError> {
        validate_key(decryption, &decryption_key)?;
        if validation_key.is_empty() {
            return Err(TicketError::InvalidKey("validation key is empty".into()));
        }

        Ok(Self {
            decryption,
            decryption_key,
            validation,
            validation_key,
        })
    }

    /// Provision a machine key with fresh random key material.
    ///
    /// # Errors
    ///
    /// Propagates key generation failures.
    pub fn generate(
        decryption: DecryptionAlgorithm,
        validation: ValidationAlgorithm,
    ) -> Result<Self, TicketError> {
        let decryption_key = generate_random_key(GENERATED_DECRYPTION_KEY_HEX_LEN)?;
        let validation_key = generate_random_key(GENERATED_VALIDATION_KEY_HEX_LEN)?;

        Self::from_parts(
            decryption,
            SecretKey::from_hex(&decryption_key)?,
            validation,
            SecretKey::from_hex(&validation_key)?,
        )
    }

    /// Cipher algorithm.
    pub fn decryption(&self) -> DecryptionAlgorithm {
        self.decryption
    }

    /// Cipher key material.
    pub fn decryption_key(&self) -> &SecretKey {
        &self.decryption_key
    }

    /// Keyed-hash algorithm.
    pub fn validation(&self) -> ValidationAlgorithm {
        self.validation
    }

    /// Keyed-hash key material.
    pub fn validation_key(&self) -> &SecretKey {
        &self.validation_key
    }

    /// Tag length in bytes for the validation algorithm.
    pub fn validation_key_length(&self) -> usize {
        self.validation.digest_length()
    }

    /// Reject key material that is all zeros.
    ///
    /// # Errors
    ///
    /// Returns `InvalidKey` naming the offending key.
    pub fn validate_for_production(&self) -> Result<(), TicketError> {
        if self.decryption_key.as_bytes().iter().all(|&b| b == 0) {
            return Err(TicketError::InvalidKey(
                "decryption key is all zeros".into(),
            ));
        }
        if self.validation_key.as_bytes().iter().all(|&b| b == 0) {
            return Err(TicketError::InvalidKey(
                "validation key is all zeros".into(),
            ));
        }
        Ok(())
    }
}

impl fmt::Debug for MachineKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MachineKey")
            .field("decryption", &self.decryption)
            .field("decryption_key", &"[REDACTED]")
            .field("validation", &self.validation)
            .field("validation_key", &"[REDACTED]")
            .field("validation_key_length", &self.validation_key_length())
            .finish()
    }
}
