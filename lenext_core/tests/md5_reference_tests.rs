//! Cross-check the from-scratch MD5 against the RustCrypto implementation

use lenext_core::hashing::{
    BLOCK_SIZE, Digest, State, compress_blocks, hash, pad, pad_and_append_length,
};
use md5::{Digest as Md5Digest, Md5};
use proptest::prelude::*;

fn reference(data: &[u8]) -> String {
    format!("{:x}", Md5::digest(data))
}

#[test]
fn test_matches_reference_around_block_boundaries() {
    // Lengths where the marker, the trailer, or both spill into a new block
    for len in [0, 1, 55, 56, 57, 63, 64, 65, 119, 120, 121, 127, 128, 129, 1000] {
        let data: Vec<u8> = (0..len).map(|i| (i * 7 + 3) as u8).collect();
        assert_eq!(hash(&data), reference(&data), "mismatch at length {len}");
    }
}

#[test]
fn test_known_answer_vectors() {
    assert_eq!(hash(b""), "d41d8cd98f00b204e9800998ecf8427e");
    assert_eq!(hash(b"abc"), "900150983cd24fb0d6963f7d28e17f72");

    let mut extended = b"abc".to_vec();
    extended.resize(65, b'a');
    assert_eq!(hash(&extended), "38f66d46c1806a90c9adea77c0315530");
}

#[test]
fn test_resuming_from_digest_equals_hashing_longer_message() {
    // The property the forgery relies on: the digest of a block-aligned
    // padded message is exactly the state to continue from.
    let first = pad_and_append_length(b"prefix");
    let state = Digest::from_hex(&hash(b"prefix")).unwrap().state();

    let tail = b"suffix";
    let total_len = (first.len() + tail.len()) as u64;
    let mut continuation = pad(tail);
    continuation.extend_from_slice(&(total_len * 8).to_le_bytes());

    let resumed = Digest::from(compress_blocks(state, &continuation));

    let mut full = first.clone();
    full.extend_from_slice(tail);
    assert_eq!(resumed.to_hex(), reference(&full));
    assert_eq!(first.len() % BLOCK_SIZE, 0);
}

#[test]
fn test_initial_state_is_not_a_digest_of_anything_short() {
    let initial = Digest::from(State::INITIAL).to_hex();
    assert_eq!(initial, "0123456789abcdeffedcba9876543210");
    assert_ne!(hash(b""), initial);
}

proptest! {
    #[test]
    fn test_matches_reference(data in proptest::collection::vec(any::<u8>(), 0..512)) {
        prop_assert_eq!(hash(&data), reference(&data));
    }

    #[test]
    fn test_hash_determinism(data: Vec<u8>) {
        let first = hash(&data);
        let second = hash(&data);

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.len(), 32);
        prop_assert!(first.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}
