//! # FA Crypto - Ticket Protection Primitives
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `algorithms` | Registry | Validation / decryption algorithm identifiers |
//! | `keyed_hash` | HMAC (MD4/MD5/SHA-1/SHA-2/SHA-3/SM3) | Integrity tags |
//! | `symmetric` | AES-GCM (128/192/256) | Ticket confidentiality |
//!
//! ## Security Properties
//!
//! - **Closed registry**: unknown algorithm names fail at parse time
//! - **Constant-time compare**: tag checks do not leak mismatch position
//! - **Key hygiene**: cipher keys are zeroized on drop

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algorithms;
pub mod errors;
pub mod keyed_hash;
pub mod symmetric;

#[cfg(test)]
mod proptests;

// Re-exports
pub use algorithms::{digest_length, DecryptionAlgorithm, ValidationAlgorithm};
pub use errors::CryptoError;
pub use keyed_hash::{generate_random_key, hmac, verify};
pub use symmetric::{decrypt, encrypt, SecretKey, NONCE_SIZE};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
