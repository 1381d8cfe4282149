//! Property-based tests for the keyed-hash engine and cipher.

use proptest::prelude::*;

use crate::{decrypt, encrypt, hmac, verify, DecryptionAlgorithm, SecretKey, ValidationAlgorithm};

fn validation_algorithm() -> impl Strategy<Value = ValidationAlgorithm> {
    prop::sample::select(ValidationAlgorithm::ALL.to_vec())
}

proptest! {
    /// A sequence always verifies against itself.
    #[test]
    fn verify_is_reflexive(x in prop::collection::vec(any::<u8>(), 0..128)) {
        prop_assert!(verify(&x, &x));
    }

    /// Distinct sequences, including ones of different length, never verify.
    #[test]
    fn verify_rejects_distinct(
        x in prop::collection::vec(any::<u8>(), 0..64),
        y in prop::collection::vec(any::<u8>(), 0..64),
    ) {
        prop_assume!(x != y);
        prop_assert!(!verify(&x, &y));
    }

    /// Tag length always equals the registered digest length.
    #[test]
    fn hmac_length_matches_registry(
        alg in validation_algorithm(),
        data in prop::collection::vec(any::<u8>(), 0..256),
        key in prop::collection::vec(any::<u8>(), 0..200),
    ) {
        prop_assert_eq!(hmac(&data, alg, &key).len(), alg.digest_length());
    }

    /// Encryption followed by decryption returns the original plaintext.
    #[test]
    fn encrypt_decrypt_roundtrip(
        plaintext in prop::collection::vec(any::<u8>(), 0..512),
        key_len in prop::sample::select(vec![16usize, 24, 32]),
    ) {
        let key = SecretKey::generate(key_len);
        let ciphertext = encrypt(DecryptionAlgorithm::Aes, &key, &plaintext).unwrap();
        let decrypted = decrypt(DecryptionAlgorithm::Aes, &key, &ciphertext).unwrap();
        prop_assert_eq!(plaintext, decrypted);
    }
}
