//! Multi-block ChaCha20 encryption.
//!
//! The block core only ever produces 64 bytes of keystream. [`ChaCha20`]
//! covers longer payloads by deriving one block per 64-byte chunk,
//! incrementing the counter between chunks.

use std::fmt;

use tracing::debug;

use super::block::block;
use super::keystream::{BLOCK_LEN, xor_stream};
use super::state::{KEY_LEN, NONCE_LEN, State, key_array, nonce_array};
use crate::error::{Error, Result};

/// A ChaCha20 stream cipher bound to one key and nonce.
///
/// The key and nonce are validated once at construction. The counter is
/// passed per call; the caller must never reuse a `(counter, nonce)` pair
/// under the same key.
#[derive(Clone)]
pub struct ChaCha20 {
    /// Secret key (256-bit)
    key: [u8; KEY_LEN],

    /// Nonce (96-bit)
    nonce: [u8; NONCE_LEN],
}

impl ChaCha20 {
    /// Creates a cipher from raw key and nonce bytes.
    ///
    /// # Errors
    /// - [`Error::InvalidKeyLength`] if `key` is not 32 bytes
    /// - [`Error::InvalidNonceLength`] if `nonce` is not 12 bytes
    pub fn new(key: &[u8], nonce: &[u8]) -> Result<Self> {
        Ok(Self::from_parts(*key_array(key)?, *nonce_array(nonce)?))
    }

    /// Creates a cipher from fixed-size key and nonce.
    pub const fn from_parts(key: [u8; KEY_LEN], nonce: [u8; NONCE_LEN]) -> Self {
        Self { key, nonce }
    }

    /// Returns the nonce.
    pub const fn nonce(&self) -> &[u8; NONCE_LEN] {
        &self.nonce
    }

    /// Returns the initial state for block `counter`.
    pub fn state(&self, counter: u32) -> State {
        State::from_parts(&self.key, counter, &self.nonce)
    }

    /// Returns the 64-byte keystream block for `counter`.
    pub fn keystream_block(&self, counter: u32) -> [u8; BLOCK_LEN] {
        block(&self.key, counter, &self.nonce)
    }

    /// Encrypts or decrypts `data` starting at block `counter`.
    ///
    /// Chunk `k` of 64 bytes is XORed with the keystream of block
    /// `counter + k`. An empty input yields an empty output.
    ///
    /// # Errors
    /// [`Error::CounterOverflow`] if the last block's counter would exceed
    /// `u32::MAX`. The counter is never wrapped, since that would reuse
    /// keystream.
    pub fn apply_keystream(&self, counter: u32, data: &[u8]) -> Result<Vec<u8>> {
        let blocks = data.len().div_ceil(BLOCK_LEN);

        let last = u32::try_from(blocks.saturating_sub(1))
            .ok()
            .and_then(|extra| counter.checked_add(extra))
            .ok_or(Error::CounterOverflow { counter, blocks })?;

        debug!(counter, last, blocks, "applying chacha20 keystream");

        let mut out = Vec::with_capacity(data.len());

        for (chunk, block_counter) in data.chunks(BLOCK_LEN).zip(counter..=last) {
            let keystream = self.keystream_block(block_counter);
            out.extend(xor_stream(chunk, &keystream[..chunk.len()])?);
        }

        Ok(out)
    }
}

impl fmt::Debug for ChaCha20 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChaCha20")
            .field("key", &"<redacted>")
            .field("nonce", &hex::encode(self.nonce))
            .finish()
    }
}
