//! Fuzz target for verify-then-decrypt.
//!
//! Forged buffers must be rejected before the cipher runs; no input may
//! panic.

#![no_main]

use fa_ticket::{decrypt, MachineKey, TicketError};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, arbitrary::Arbitrary)]
struct FuzzInput {
    /// Candidate protected ticket
    buffer: Vec<u8>,
    /// Selects the validation algorithm
    algorithm: u8,
}

const ALGORITHMS: [&str; 4] = ["md5", "sha1", "sha256", "sha512"];

fuzz_target!(|input: FuzzInput| {
    let validation = ALGORITHMS[usize::from(input.algorithm) % ALGORITHMS.len()];
    let key = MachineKey::new(
        "aes",
        "00112233445566778899AABBCCDDEEFF",
        validation,
        "0F1E2D3C4B5A6978",
    )
    .expect("fixed key is valid");

    match decrypt(&input.buffer, &key) {
        Err(TicketError::TruncatedInput { .. }) | Err(TicketError::IntegrityViolation) => {}
        other => panic!("forged buffer accepted or misclassified: {other:?}"),
    }
});
