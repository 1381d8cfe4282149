//! # Protection Pipeline
//!
//! Encrypt-then-MAC over a serialized ticket.
//!
//! ```text
//! protected = ciphertext || HMAC(validation_key, ciphertext)
//! ciphertext = nonce || AES-GCM(decryption_key, serialized ticket)
//! ```
//!
//! The tag length is fixed by the machine key's validation algorithm.
//! `decrypt` checks the tag in constant time before the cipher ever sees the
//! ciphertext, so forged tokens are rejected without a cipher operation.

use super::codec::SerializedTicket;
use super::errors::TicketError;
use super::machine_key::MachineKey;
use fa_crypto::{hmac, verify};

/// Encrypt and sign a serialized ticket.
///
/// # Errors
///
/// Returns `Crypto` if the cipher fails.
pub fn encrypt(serialized: &SerializedTicket, key: &MachineKey) -> Result<Vec<u8>, TicketError> {
    let mut protected = fa_crypto::encrypt(
        key.decryption(),
        key.decryption_key(),
        serialized.as_bytes(),
    )?;

    let tag = hmac(&protected, key.validation(), key.validation_key().as_bytes());
    protected.extend_from_slice(&tag);

    Ok(protected)
}

/// Verify and decrypt a protected ticket, returning the serialized bytes.
///
/// # Errors
///
/// - `TruncatedInput` if `buffer` is shorter than the tag
/// - `IntegrityViolation` if the tag does not match
/// - `Crypto` if the cipher rejects an authentic ciphertext (wrong
///   decryption key)
pub fn decrypt(buffer: &[u8], key: &MachineKey) -> Result<Vec<u8>, TicketError> {
    let tag_len = key.validation_key_length();
    if buffer.len() < tag_len {
        return Err(TicketError::TruncatedInput {
            minimum: tag_len,
            actual: buffer.len(),
        });
    }

    let (ciphertext, tag) = buffer.split_at(buffer.len() - tag_len);
    let expected = hmac(ciphertext, key.validation(), key.validation_key().as_bytes());

    if !verify(&expected, tag) {
        return Err(TicketError::IntegrityViolation);
    }

    Ok(fa_crypto::decrypt(
        key.decryption(),
        key.decryption_key(),
        ciphertext,
    )?)
}
