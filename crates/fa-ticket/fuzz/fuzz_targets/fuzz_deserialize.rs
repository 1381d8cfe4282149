//! Fuzz target for the ticket decoder.
//!
//! ## Running
//!
//! ```bash
//! cd crates/fa-ticket
//! cargo +nightly fuzz run fuzz_deserialize
//! ```

#![no_main]

use fa_ticket::{deserialize, serialize};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Must never panic, whatever the bytes
    if let Ok(ticket) = deserialize(data) {
        // Accepted tickets survive another encode/decode cycle
        if let Ok(reencoded) = serialize(&ticket) {
            assert_eq!(deserialize(reencoded.as_bytes()).ok(), Some(ticket));
        }
    }
});
