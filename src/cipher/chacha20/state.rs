//! ChaCha20 state construction.
//!
//! The ChaCha20 input block is a 4×4 matrix of little-endian 32-bit words:
//!
//! ```text
//! cccccccc  cccccccc  cccccccc  cccccccc
//! kkkkkkkk  kkkkkkkk  kkkkkkkk  kkkkkkkk
//! kkkkkkkk  kkkkkkkk  kkkkkkkk  kkkkkkkk
//! bbbbbbbb  nnnnnnnn  nnnnnnnn  nnnnnnnn
//! ```
//!
//! where `c` is the fixed constant, `k` the 256-bit key, `b` the block
//! counter and `n` the 96-bit nonce (RFC 7539, section 2.3).

use std::fmt;
use std::ops::Index;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{Error, Result};

/// Key length in bytes.
pub const KEY_LEN: usize = 32;

/// Nonce length in bytes (IETF variant).
pub const NONCE_LEN: usize = 12;

/// Number of 32-bit words in the state.
pub const STATE_WORDS: usize = 16;

/// ChaCha20 constant words.
///
/// These values correspond to the ASCII string `"expand 32-byte k"` read as
/// four little-endian `u32` words. They are public, fixed, and non-secret.
pub const CHACHA20_CONSTANTS: [u32; 4] = [
    0x6170_7865, // "expa"
    0x3320_646e, // "nd 3"
    0x7962_2d32, // "2-by"
    0x6b20_6574, // "te k"
];

/// A 16-word ChaCha20 state.
///
/// Used both for the cipher input (constants, key, counter, nonce) and for
/// the output of the block transform, which is keystream material of the
/// same shape.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct State(pub [u32; STATE_WORDS]);

impl State {
    /// Builds the initial state from fixed-size key and nonce.
    ///
    /// This constructor cannot fail: the lengths are carried by the types.
    /// Use [`build_state`] when the inputs are unchecked slices.
    pub fn from_parts(key: &[u8; KEY_LEN], counter: u32, nonce: &[u8; NONCE_LEN]) -> Self {
        let mut words = [0u32; STATE_WORDS];

        words[0..4].copy_from_slice(&CHACHA20_CONSTANTS);

        words[4..12]
            .iter_mut()
            .zip(key.chunks_exact(4))
            .for_each(|(w, k)| *w = u32::from_le_bytes([k[0], k[1], k[2], k[3]]));

        words[12] = counter;

        words[13..16]
            .iter_mut()
            .zip(nonce.chunks_exact(4))
            .for_each(|(w, n)| *w = u32::from_le_bytes([n[0], n[1], n[2], n[3]]));

        Self(words)
    }

    /// Returns the underlying words.
    pub const fn words(&self) -> &[u32; STATE_WORDS] {
        &self.0
    }

    /// Returns the block counter word.
    pub const fn counter(&self) -> u32 {
        self.0[12]
    }

    /// Formats every word as `0x`-prefixed, zero-padded hex.
    pub fn to_hex_words(&self) -> [String; STATE_WORDS] {
        self.0.map(|w| format!("{w:#010x}"))
    }
}

impl From<[u32; STATE_WORDS]> for State {
    fn from(words: [u32; STATE_WORDS]) -> Self {
        Self(words)
    }
}

impl From<State> for [u32; STATE_WORDS] {
    fn from(state: State) -> Self {
        state.0
    }
}

impl Index<usize> for State {
    type Output = u32;

    fn index(&self, index: usize) -> &u32 {
        &self.0[index]
    }
}

/// A word that debug-prints as zero-padded hex.
struct HexWord(u32);

impl fmt::Debug for HexWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.0.iter().map(|&w| HexWord(w)))
            .finish()
    }
}

/// Renders the state as a 4×4 matrix of hex words.
impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.0.chunks_exact(4).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "{:08x} {:08x} {:08x} {:08x}",
                row[0], row[1], row[2], row[3]
            )?;
        }
        Ok(())
    }
}

/// Checks that `key` is exactly [`KEY_LEN`] bytes.
pub(crate) fn key_array(key: &[u8]) -> Result<&[u8; KEY_LEN]> {
    key.try_into().map_err(|_| Error::InvalidKeyLength {
        expected: KEY_LEN,
        actual: key.len(),
    })
}

/// Checks that `nonce` is exactly [`NONCE_LEN`] bytes.
pub(crate) fn nonce_array(nonce: &[u8]) -> Result<&[u8; NONCE_LEN]> {
    nonce.try_into().map_err(|_| Error::InvalidNonceLength {
        expected: NONCE_LEN,
        actual: nonce.len(),
    })
}

/// Assembles the 16-word initial state.
///
/// # Errors
/// - [`Error::InvalidKeyLength`] if `key` is not 32 bytes (checked first)
/// - [`Error::InvalidNonceLength`] if `nonce` is not 12 bytes
pub fn build_state(key: &[u8], counter: u32, nonce: &[u8]) -> Result<State> {
    let key = key_array(key)?;
    let nonce = nonce_array(nonce)?;

    trace!(counter, "building chacha20 state");

    Ok(State::from_parts(key, counter, nonce))
}
