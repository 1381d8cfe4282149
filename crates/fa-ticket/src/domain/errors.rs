//! # Ticket Errors
//!
//! Error types for ticket construction, encoding, and protection.
//!
//! Callers can tell bad input (`FieldTooLong`, `UnsupportedAlgorithm`,
//! `InvalidKey`, `MissingAttribute`), bad format (`MalformedTicket`,
//! `TruncatedInput`), and tampered data (`IntegrityViolation`) apart.

use fa_crypto::CryptoError;
use thiserror::Error;

/// Errors that can occur while handling forms-authentication tickets.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TicketError {
    /// Validation or decryption identifier is not in the registry
    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Key material is not usable for its algorithm
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// A text field does not fit its one-byte length prefix
    #[error("Field '{field}' is too long: {bytes} bytes encoded, at most {max} allowed")]
    FieldTooLong {
        /// Ticket field name
        field: &'static str,
        /// Encoded size in bytes
        bytes: usize,
        /// Largest encodable size in bytes
        max: usize,
    },

    /// Wire data does not follow the ticket layout
    #[error("Malformed ticket: {0}")]
    MalformedTicket(String),

    /// Protected buffer is shorter than the integrity tag
    #[error("Truncated input: need at least {minimum} bytes, got {actual}")]
    TruncatedInput {
        /// Tag length for the machine key's validation algorithm
        minimum: usize,
        /// Actual buffer length
        actual: usize,
    },

    /// Integrity tag does not match
    #[error("Integrity violation: ticket tag does not match")]
    IntegrityViolation,

    /// Ticket decoded correctly but is past its expiration
    #[error("Ticket expired at {expiration} ms")]
    TicketExpired {
        /// Expiration in milliseconds since the Unix epoch
        expiration: i64,
    },

    /// A machine-key attribute is absent from configuration
    #[error("Missing machine key attribute: {0}")]
    MissingAttribute(&'static str),

    /// Configuration could not be read
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Argument outside the range the ticket format can represent
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Cipher failure after the integrity check passed
    #[error("Crypto error: {0}")]
    Crypto(CryptoError),
}

impl From<CryptoError> for TicketError {
    fn from(err: CryptoError) -> Self {
        match err {
            CryptoError::UnsupportedAlgorithm(name) => Self::UnsupportedAlgorithm(name),
            CryptoError::InvalidKey(reason) => Self::InvalidKey(reason),
            CryptoError::InvalidKeyLength { .. } => Self::InvalidKey(err.to_string()),
            other => Self::Crypto(other),
        }
    }
}
