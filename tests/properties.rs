//! Property-based tests for the ChaCha20 core.

use proptest::prelude::*;

use chacha_trace::cipher::chacha20::{
    ChaCha20, TRACE_LEN, block_transform, build_state, quarter_round, serialize_le, xor_stream,
};
use chacha_trace::primitives::rotl32;

proptest! {
    /// XOR with the same keystream twice is the identity
    #[test]
    fn xor_stream_involution(
        (data, keystream) in (1usize..=64).prop_flat_map(|len| (
            prop::collection::vec(any::<u8>(), len),
            prop::collection::vec(any::<u8>(), len),
        ))
    ) {
        let once = xor_stream(&data, &keystream).unwrap();
        let twice = xor_stream(&once, &keystream).unwrap();

        prop_assert_eq!(once.len(), data.len());
        prop_assert_eq!(twice, data);
    }

    /// Same key, nonce and counter always give the same block and trace
    #[test]
    fn transform_deterministic(
        key in prop::array::uniform32(any::<u8>()),
        nonce in prop::array::uniform12(any::<u8>()),
        counter in any::<u32>(),
    ) {
        let state = build_state(&key, counter, &nonce).unwrap();

        let (a, trace_a) = block_transform(&state, true);
        let (b, trace_b) = block_transform(&state, true);

        prop_assert_eq!(a, b);
        prop_assert_eq!(trace_a, trace_b);
    }

    /// The final trace step always carries the returned output
    #[test]
    fn trace_ends_with_output(
        key in prop::array::uniform32(any::<u8>()),
        nonce in prop::array::uniform12(any::<u8>()),
        counter in any::<u32>(),
    ) {
        let state = build_state(&key, counter, &nonce).unwrap();
        let (output, trace) = block_transform(&state, true);

        prop_assert_eq!(trace.len(), TRACE_LEN);
        prop_assert_eq!(trace.steps()[TRACE_LEN - 1].after, Some(output));
        prop_assert_eq!(trace.steps()[TRACE_LEN - 1].before, Some(state));
    }

    /// Keystream from the wrapper matches the core for every counter
    #[test]
    fn wrapper_matches_core(
        key in prop::array::uniform32(any::<u8>()),
        nonce in prop::array::uniform12(any::<u8>()),
        counter in any::<u32>(),
    ) {
        let cipher = ChaCha20::from_parts(key, nonce);
        let state = build_state(&key, counter, &nonce).unwrap();

        prop_assert_eq!(
            cipher.keystream_block(counter),
            serialize_le(&block_transform(&state, false).0)
        );
    }

    /// Multi-block decrypt(encrypt(m)) == m
    #[test]
    fn apply_keystream_roundtrip(
        key in prop::array::uniform32(any::<u8>()),
        nonce in prop::array::uniform12(any::<u8>()),
        counter in 0u32..1_000_000,
        data in prop::collection::vec(any::<u8>(), 0..512),
    ) {
        let cipher = ChaCha20::from_parts(key, nonce);

        let ciphertext = cipher.apply_keystream(counter, &data).unwrap();
        let plaintext = cipher.apply_keystream(counter, &ciphertext).unwrap();

        prop_assert_eq!(ciphertext.len(), data.len());
        prop_assert_eq!(plaintext, data);
    }

    /// Quarter round is a permutation step: never maps two inputs to the
    /// same output when only `a` differs
    #[test]
    fn quarter_round_injective_in_a(
        a1 in any::<u32>(),
        a2 in any::<u32>(),
        b in any::<u32>(),
        c in any::<u32>(),
        d in any::<u32>(),
    ) {
        prop_assume!(a1 != a2);
        prop_assert_ne!(quarter_round(a1, b, c, d), quarter_round(a2, b, c, d));
    }

    /// Rotating left by n then by 32 - n is the identity
    #[test]
    fn rotl32_full_turn(a in any::<u32>(), n in 1u32..32) {
        prop_assert_eq!(rotl32(rotl32(a, n), 32 - n), a);
    }
}
