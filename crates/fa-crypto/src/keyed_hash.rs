//! # Keyed-Hash Engine
//!
//! HMAC over every registered validation algorithm, constant-time tag
//! comparison, and random hex key generation.
//!
//! ## Security Properties
//!
//! - HMAC accepts keys of any length, so `hmac` never fails on key size
//! - `verify` runs in time independent of where (or whether) inputs differ
//! - Random keys come from the thread-local CSPRNG

use crate::{CryptoError, ValidationAlgorithm};
use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use rand::RngCore;
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

/// Compute the keyed hash of `data` under `key`.
///
/// The output length always equals `algorithm.digest_length()`.
pub fn hmac(data: &[u8], algorithm: ValidationAlgorithm, key: &[u8]) -> Vec<u8> {
    use ValidationAlgorithm as V;

    match algorithm {
        V::Md5 => compute::<Hmac<md5::Md5>>(key, data),
        V::Md4 => compute::<Hmac<md4::Md4>>(key, data),
        V::Sm3 => compute::<Hmac<sm3::Sm3>>(key, data),
        V::Sha1 => compute::<Hmac<sha1::Sha1>>(key, data),
        V::Sha224 => compute::<Hmac<sha2::Sha224>>(key, data),
        V::Sha256 => compute::<Hmac<sha2::Sha256>>(key, data),
        V::Sha384 => compute::<Hmac<sha2::Sha384>>(key, data),
        V::Sha512 => compute::<Hmac<sha2::Sha512>>(key, data),
        V::Sha512_224 => compute::<Hmac<sha2::Sha512_224>>(key, data),
        V::Sha512_256 => compute::<Hmac<sha2::Sha512_256>>(key, data),
        V::Sha3_224 => compute::<Hmac<sha3::Sha3_224>>(key, data),
        V::Sha3_256 => compute::<Hmac<sha3::Sha3_256>>(key, data),
        V::Sha3_384 => compute::<Hmac<sha3::Sha3_384>>(key, data),
        V::Sha3_512 => compute::<Hmac<sha3::Sha3_512>>(key, data),
    }
}

fn compute<M: Mac + KeyInit>(key: &[u8], data: &[u8]) -> Vec<u8> {
    // HMAC accepts any key length. An empty tag never verifies.
    let mut mac = match <M as KeyInit>::new_from_slice(key) {
        Ok(mac) => mac,
        Err(_) => return Vec::new(),
    };
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}

/// Constant-time equality of two byte sequences.
///
/// Both inputs are padded to the longer length with different fill bytes, so
/// a length mismatch still walks the whole buffer and then compares unequal.
pub fn verify(a: &[u8], b: &[u8]) -> bool {
    let max_len = std::cmp::max(a.len(), b.len());

    let mut a_padded = vec![0u8; max_len];
    let mut b_padded = vec![0xFFu8; max_len];

    a_padded[..a.len()].copy_from_slice(a);
    b_padded[..b.len()].copy_from_slice(b);

    let lengths_equal = a.len().ct_eq(&b.len());
    let contents_equal = a_padded.ct_eq(&b_padded);

    let equal: bool = (lengths_equal & contents_equal).into();

    a_padded.zeroize();
    b_padded.zeroize();
    equal
}

/// Generate a random key rendered as `length` lowercase hex characters.
///
/// # Errors
///
/// Returns `CryptoError::InvalidRandomKeyLength` if `length` is zero or odd.
pub fn generate_random_key(length: usize) -> Result<String, CryptoError> {
    if length == 0 || length % 2 != 0 {
        return Err(CryptoError::InvalidRandomKeyLength(length));
    }

    let mut bytes = vec![0u8; length / 2];
    rand::thread_rng().fill_bytes(&mut bytes);
    let key = hex::encode(&bytes);
    bytes.zeroize();

    Ok(key)
}
