//! # Wire Format Tests
//!
//! Marker enforcement, field limits and registry consistency.

#[cfg(test)]
mod tests {
    use fa_crypto::{digest_length, hmac, ValidationAlgorithm};
    use fa_ticket::{
        deserialize, from_ticks, serialize, to_ticks, Ticket, TicketError, MAX_FIELD_CHARS,
    };

    const T: i64 = 1_700_000_000_000;

    fn serialized() -> Vec<u8> {
        let ticket = Ticket::builder("bob", T + 60_000)
            .issue_date(T)
            .user_data("x")
            .cookie_path("/")
            .build();
        serialize(&ticket).unwrap().into_bytes()
    }

    #[test]
    fn test_marker_positions() {
        let bytes = serialized();
        assert_eq!(bytes[0], 1);
        assert_eq!(bytes[10], 254);
        assert_eq!(bytes[bytes.len() - 1], 255);
    }

    #[test]
    fn test_corrupted_markers_rejected() {
        let bytes = serialized();
        for offset in [0, 10, bytes.len() - 1] {
            let mut corrupted = bytes.clone();
            corrupted[offset] ^= 0x01;
            assert!(
                matches!(deserialize(&corrupted), Err(TicketError::MalformedTicket(_))),
                "offset {offset}"
            );
        }
    }

    #[test]
    fn test_truncation_and_trailing_bytes_rejected() {
        let bytes = serialized();
        for len in 0..bytes.len() {
            assert!(deserialize(&bytes[..len]).is_err(), "len {len}");
        }

        let mut trailing = bytes.clone();
        trailing.push(0);
        assert!(matches!(
            deserialize(&trailing),
            Err(TicketError::MalformedTicket(_))
        ));
    }

    #[test]
    fn test_timestamps_are_ticks() {
        let bytes = serialized();
        let issue = u64::from_le_bytes(bytes[2..10].try_into().unwrap());
        let expire = i64::from_le_bytes(bytes[11..19].try_into().unwrap());

        assert_eq!(issue as i64, to_ticks(T));
        assert_eq!(from_ticks(expire), T + 60_000);
        assert_eq!(to_ticks(0), 621_355_968_000_000_000);
    }

    #[test]
    fn test_field_limit_at_boundary() {
        let at_limit = "a".repeat(MAX_FIELD_CHARS);
        let ticket = Ticket::builder(at_limit.as_str(), T).issue_date(T).build();
        assert_eq!(deserialize(serialize(&ticket).unwrap().as_bytes()).unwrap(), ticket);

        let over = "a".repeat(MAX_FIELD_CHARS + 1);
        let ticket = Ticket::builder("bob", T)
            .issue_date(T)
            .cookie_path(over)
            .build();
        assert_eq!(
            serialize(&ticket).unwrap_err(),
            TicketError::FieldTooLong {
                field: "cookiePath",
                bytes: 256,
                max: 255
            }
        );
    }

    #[test]
    fn test_digest_length_matches_hmac_output() {
        for alg in ValidationAlgorithm::ALL {
            let tag = hmac(b"payload", alg, b"key");
            assert_eq!(tag.len(), digest_length(alg.name()).unwrap(), "{alg}");
            assert_eq!(tag.len(), alg.digest_length(), "{alg}");
        }
    }

    #[test]
    fn test_digest_length_is_case_insensitive() {
        assert_eq!(digest_length("SHA512-256").unwrap(), 32);
        assert_eq!(digest_length("Sha3-384").unwrap(), 48);
        assert!(digest_length("sha3").is_err());
    }
}
