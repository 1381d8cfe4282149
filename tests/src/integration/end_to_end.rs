//! # End-to-End Ticket Flow
//!
//! Build → serialize → protect → transport → verify → decrypt → deserialize.

#[cfg(test)]
mod tests {
    use fa_crypto::{hmac, ValidationAlgorithm};
    use fa_ticket::domain::tick::now_millis;
    use fa_ticket::{
        decrypt, deserialize, encrypt, serialize, FixedTimeSource, FormsAuthApi,
        FormsAuthService, MachineKey, Ticket, TicketConfig, TicketError,
    };

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    const T: i64 = 1_700_000_000_000;
    const HOUR: i64 = 3_600_000;
    const DECRYPTION_KEY: &str = "9F2B5C7E1A3D4F608192A3B4C5D6E7F8091A2B3C4D5E6F708192A3B4C5D6E7F8";

    fn machine_key(validation_key: &str) -> MachineKey {
        MachineKey::new("AES", DECRYPTION_KEY, "sha256", validation_key).unwrap()
    }

    fn alice() -> Ticket {
        Ticket::builder("alice", T + HOUR)
            .issue_date(T)
            .persistent(true)
            .user_data("")
            .cookie_path("/")
            .build()
    }

    // =============================================================================
    // SERIALIZE / EXPIRY
    // =============================================================================

    #[test]
    fn test_alice_roundtrip_and_expiry() {
        let ticket = alice();
        let restored = deserialize(serialize(&ticket).unwrap().as_bytes()).unwrap();

        assert_eq!(restored, ticket);
        assert!(!restored.expired_at(T));
        assert!(!restored.expired_at(T + HOUR));
        assert!(restored.expired_at(T + HOUR + 1));
    }

    #[test]
    fn test_fresh_ticket_not_expired_on_system_clock() {
        let ticket = Ticket::new("alice", now_millis() + HOUR, true, "", "/");
        assert!(!ticket.expired());

        let stale = Ticket::new("alice", now_millis() - 1, true, "", "/");
        assert!(stale.expired());
    }

    // =============================================================================
    // PROTECTION
    // =============================================================================

    #[test]
    fn test_encrypt_decrypt_returns_identical_bytes() {
        let key = machine_key("0A1B2C3D4E5F");
        let serialized = serialize(&alice()).unwrap();

        let protected = encrypt(&serialized, &key).unwrap();
        assert_eq!(decrypt(&protected, &key).unwrap(), serialized.as_bytes());
    }

    #[test]
    fn test_different_validation_key_is_integrity_violation() {
        let serialized = serialize(&alice()).unwrap();
        let protected = encrypt(&serialized, &machine_key("0A1B2C3D4E5F")).unwrap();

        assert_eq!(
            decrypt(&protected, &machine_key("0A1B2C3D4E60")).unwrap_err(),
            TicketError::IntegrityViolation
        );
    }

    #[test]
    fn test_ciphertext_hides_plaintext() {
        let key = machine_key("0A1B2C3D4E5F");
        let ticket = Ticket::builder("alice-in-plain-sight", T + HOUR)
            .issue_date(T)
            .build();
        let serialized = serialize(&ticket).unwrap();
        let protected = encrypt(&serialized, &key).unwrap();

        let needle: Vec<u8> = "alice".encode_utf16().flat_map(u16::to_le_bytes).collect();
        assert!(!protected.windows(needle.len()).any(|w| w == needle));
    }

    #[test]
    fn test_tag_is_hmac_over_ciphertext() {
        let key = machine_key("0A1B2C3D4E5F");
        let protected = encrypt(&serialize(&alice()).unwrap(), &key).unwrap();

        let (ciphertext, tag) = protected.split_at(protected.len() - 32);
        assert_eq!(
            tag,
            hmac(
                ciphertext,
                ValidationAlgorithm::Sha256,
                &hex::decode("0A1B2C3D4E5F").unwrap()
            )
        );
    }

    #[test]
    fn test_encryption_is_randomized() {
        let key = machine_key("0A1B2C3D4E5F");
        let serialized = serialize(&alice()).unwrap();

        let a = encrypt(&serialized, &key).unwrap();
        let b = encrypt(&serialized, &key).unwrap();
        assert_ne!(a, b);
        assert_eq!(decrypt(&a, &key).unwrap(), decrypt(&b, &key).unwrap());
    }

    // =============================================================================
    // SERVICE FACADE
    // =============================================================================

    #[test]
    fn test_service_issue_protect_unprotect_valid() {
        let key = machine_key("0A1B2C3D4E5F");
        let issuer = FormsAuthService::new(FixedTimeSource(T), TicketConfig::default()).unwrap();

        let ticket = issuer.issue_ticket("alice", "roles=admin").unwrap();
        assert_eq!(ticket.expiration(), T + 30 * 60_000);

        let protected = issuer.protect(&ticket, &key).unwrap();
        assert_eq!(issuer.unprotect_valid(&protected, &key).unwrap(), ticket);

        let verifier =
            FormsAuthService::new(FixedTimeSource(T + HOUR), TicketConfig::default()).unwrap();
        assert_eq!(verifier.unprotect(&protected, &key).unwrap(), ticket);
        assert!(matches!(
            verifier.unprotect_valid(&protected, &key),
            Err(TicketError::TicketExpired { .. })
        ));
    }

    #[test]
    fn test_unicode_fields_survive_protection() {
        let key = machine_key("0A1B2C3D4E5F");
        let service = FormsAuthService::new(FixedTimeSource(T), TicketConfig::default()).unwrap();

        let ticket = service
            .create_ticket("Zoë 😀", T + HOUR, false, "ключ=значение", "/über")
            .unwrap();
        let protected = service.protect(&ticket, &key).unwrap();
        assert_eq!(service.unprotect(&protected, &key).unwrap(), ticket);
    }
}
