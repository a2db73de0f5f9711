//! Keystream serialization and XOR.

use crate::error::{Error, Result};

use super::state::State;

/// Size of one serialized keystream block in bytes.
pub const BLOCK_LEN: usize = 64;

/// Serializes a block as 64 little-endian bytes.
///
/// Word `i` maps to bytes `4i..4i + 4`, least-significant byte first.
pub fn serialize_le(block: &State) -> [u8; BLOCK_LEN] {
    let mut out = [0u8; BLOCK_LEN];

    out.chunks_exact_mut(4)
        .zip(block.words())
        .for_each(|(chunk, word)| chunk.copy_from_slice(&word.to_le_bytes()));

    out
}

/// XORs `data` with `keystream`.
///
/// The output has the same length as `data`, and byte `i` is
/// `data[i] ^ keystream[i]`. Encryption and decryption are the same
/// operation.
///
/// The keystream is never wrapped: reusing keystream bytes would leak the
/// XOR of two plaintexts. Payloads longer than one block must be split by
/// the caller, each chunk with its own counter value (see
/// [`ChaCha20::apply_keystream`](super::ChaCha20::apply_keystream)).
///
/// # Errors
/// - [`Error::InvalidKeystreamLength`] if `keystream` is empty
/// - [`Error::KeystreamTooShort`] if `data` is longer than `keystream`
pub fn xor_stream(data: &[u8], keystream: &[u8]) -> Result<Vec<u8>> {
    if keystream.is_empty() {
        return Err(Error::InvalidKeystreamLength);
    }

    if data.len() > keystream.len() {
        return Err(Error::KeystreamTooShort {
            needed: data.len(),
            available: keystream.len(),
        });
    }

    Ok(data
        .iter()
        .zip(keystream)
        .map(|(d, k)| d ^ k)
        .collect())
}
