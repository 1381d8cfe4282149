//! Property-based tests for the tick converter, codec, and protection
//! pipeline.

use proptest::prelude::*;

use crate::domain::tick::EPOCH_TICKS;
use crate::{decrypt, deserialize, encrypt, from_ticks, serialize, to_ticks, MachineKey, Ticket, TicketError};

/// Unix milliseconds from 0001-01-01 to 9999-12-31.
const MIN_MILLIS: i64 = -EPOCH_TICKS / 10_000;
const MAX_MILLIS: i64 = 253_402_300_799_999;

fn field() -> impl Strategy<Value = String> {
    prop::collection::vec(any::<char>(), 0..40)
        .prop_map(|chars| chars.into_iter().collect::<String>())
        .prop_filter("fits one length byte", |s| s.encode_utf16().count() <= 127)
}

fn ticket() -> impl Strategy<Value = Ticket> {
    (
        any::<u8>(),
        MIN_MILLIS..=MAX_MILLIS,
        MIN_MILLIS..=MAX_MILLIS,
        any::<bool>(),
        field(),
        field(),
        field(),
    )
        .prop_map(|(version, issue, expiration, persistent, name, user_data, path)| {
            Ticket::builder(name, expiration)
                .version(version)
                .issue_date(issue)
                .persistent(persistent)
                .user_data(user_data)
                .cookie_path(path)
                .build()
        })
}

fn machine_key() -> MachineKey {
    MachineKey::new(
        "aes",
        "000102030405060708090A0B0C0D0E0F",
        "sha256",
        "F0E1D2C3B4A5968778695A4B3C2D1E0F",
    )
    .unwrap()
}

proptest! {
    /// Tick conversion is a bijection on the millisecond domain.
    #[test]
    fn tick_roundtrip(millis in MIN_MILLIS..=MAX_MILLIS) {
        prop_assert_eq!(from_ticks(to_ticks(millis)), millis);
    }

    /// Serialize then deserialize reproduces every field.
    #[test]
    fn codec_roundtrip(ticket in ticket()) {
        let serialized = serialize(&ticket).unwrap();
        prop_assert_eq!(deserialize(serialized.as_bytes()).unwrap(), ticket);
    }

    /// Arbitrary bytes never panic the decoder.
    #[test]
    fn deserialize_arbitrary_bytes(bytes in prop::collection::vec(any::<u8>(), 0..128)) {
        let _ = deserialize(&bytes);
    }

    /// Any single bit flip in a protected ticket is an integrity violation.
    #[test]
    fn tamper_detected(ticket in ticket(), index in any::<prop::sample::Index>(), bit in 0u8..8) {
        let key = machine_key();
        let mut protected = encrypt(&serialize(&ticket).unwrap(), &key).unwrap();

        let i = index.index(protected.len());
        protected[i] ^= 1 << bit;

        prop_assert_eq!(decrypt(&protected, &key), Err(TicketError::IntegrityViolation));
    }
}
