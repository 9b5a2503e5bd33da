//! End-to-end forgeries against a secret-prefix MAC oracle

use lenext_core::forgery::{forge, forge_with_oracle, glue_padding};
use lenext_core::{Error, InputFormatError};
use lenext_test_utils::{ForgeryScenario, ForgeryScenarioBuilder, KeyedMacOracle};
use proptest::prelude::*;

#[test]
fn test_classic_forgery_verifies() {
    let scenario = ForgeryScenario::classic();

    let forgery = forge(
        &scenario.mac,
        scenario.secret_len(),
        &scenario.message,
        &scenario.extension,
    )
    .unwrap();

    assert!(
        scenario
            .oracle
            .verify(&forgery.message, &forgery.digest_hex()),
        "forged MAC rejected for {:?}",
        String::from_utf8_lossy(&forgery.message)
    );
}

#[test]
fn test_forgery_embeds_admin_flag() {
    let scenario = ForgeryScenarioBuilder::new()
        .with_secret(b"forwards")
        .with_message(
            b"comment1=cooking%20MCs;userdata=foo;comment2=%20like%20a%20pound%20of%20bacon",
        )
        .with_extension(b";admin=true;")
        .build();

    let forgery = forge(
        &scenario.mac,
        scenario.secret_len(),
        &scenario.message,
        &scenario.extension,
    )
    .unwrap();

    assert!(
        forgery
            .message
            .split(|&b| b == b';')
            .any(|field| field == b"admin=true")
    );
    assert!(
        scenario
            .oracle
            .verify(&forgery.message, &forgery.digest_hex())
    );
}

#[test]
fn test_off_by_one_secret_length_is_rejected() {
    let scenario = ForgeryScenario::classic();

    for secret_len in [scenario.secret_len() - 1, scenario.secret_len() + 1] {
        let forgery = forge(
            &scenario.mac,
            secret_len,
            &scenario.message,
            &scenario.extension,
        )
        .unwrap();

        assert!(
            !scenario
                .oracle
                .verify(&forgery.message, &forgery.digest_hex()),
            "forgery unexpectedly verified with secret length {secret_len}"
        );
    }
}

#[test]
fn test_forgery_can_be_extended_again() {
    // A forged MAC is itself a valid MAC, so it can be extended further.
    let scenario = ForgeryScenario::classic();
    let secret_len = scenario.secret_len();

    let first = forge(&scenario.mac, secret_len, &scenario.message, b";role=user").unwrap();
    let second = forge(
        &first.digest_hex(),
        secret_len,
        &first.message,
        b";role=admin",
    )
    .unwrap();

    assert!(second.message.starts_with(&first.message));
    assert!(
        scenario
            .oracle
            .verify(&second.message, &second.digest_hex())
    );
}

#[test]
fn test_guessing_secret_length_with_oracle() {
    let scenario = ForgeryScenarioBuilder::new().with_secret_len(23).build();

    let (secret_len, forgery) = forge_with_oracle(
        &scenario.mac,
        0..64,
        &scenario.message,
        &scenario.extension,
        |forgery| {
            scenario
                .oracle
                .verify(&forgery.message, &forgery.digest_hex())
        },
    )
    .unwrap()
    .expect("some candidate length should verify");

    assert_eq!(secret_len, 23);
    assert_eq!(scenario.oracle.verification_count(), 24);
    assert!(forgery.message.ends_with(&scenario.extension));
}

#[test]
fn test_uppercase_digest_is_accepted() {
    let scenario = ForgeryScenario::classic();
    let upper = forge(
        &scenario.mac.to_uppercase(),
        scenario.secret_len(),
        &scenario.message,
        &scenario.extension,
    )
    .unwrap();
    let lower = forge(
        &scenario.mac,
        scenario.secret_len(),
        &scenario.message,
        &scenario.extension,
    )
    .unwrap();

    assert_eq!(upper, lower);
}

#[test]
fn test_malformed_digest_is_rejected_before_forging() {
    let oracle = KeyedMacOracle::new(b"mysecretkey");
    let mac = oracle.sign(b"my message");

    let err = forge(&mac[..31], 11, b"my message", b"x").unwrap_err();
    assert_eq!(
        err,
        Error::InputFormat(InputFormatError::InvalidDigestLength { length: 31 })
    );

    let mut bad = mac.clone();
    bad.replace_range(5..6, "#");
    let err = forge(&bad, 11, b"my message", b"x").unwrap_err();
    assert!(matches!(
        err,
        Error::InputFormat(InputFormatError::InvalidHexDigit {
            position: 5,
            character: '#'
        })
    ));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_forgery_verifies_for_any_secret(
        secret in proptest::collection::vec(any::<u8>(), 0..48),
        message in proptest::collection::vec(any::<u8>(), 0..150),
        extension in proptest::collection::vec(any::<u8>(), 0..150),
    ) {
        let oracle = KeyedMacOracle::new(&secret);
        let mac = oracle.sign(&message);

        let forgery = forge(&mac, secret.len(), &message, &extension).unwrap();

        prop_assert!(forgery.message.starts_with(&message));
        prop_assert!(forgery.message.ends_with(&extension));
        prop_assert!(oracle.verify(&forgery.message, &forgery.digest_hex()));
    }

    #[test]
    fn test_glue_aligns_to_block_boundary(original_len in 0usize..500, secret_len in 0usize..100) {
        let glue = glue_padding(original_len, secret_len);
        prop_assert_eq!((original_len + secret_len + glue.len()) % 64, 0);
        prop_assert!((9..=72).contains(&glue.len()));
        prop_assert_eq!(glue[0], 0x80);
    }
}
