//! Error types.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Input validation errors.
///
/// Every variant is raised at an API boundary before any cipher work is
/// done. The block transform itself cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Key is not 32 bytes.
    #[error("invalid key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength {
        /// Expected length
        expected: usize,
        /// Actual length
        actual: usize,
    },

    /// Nonce is not 12 bytes.
    #[error("invalid nonce length: expected {expected} bytes, got {actual}")]
    InvalidNonceLength {
        /// Expected length
        expected: usize,
        /// Actual length
        actual: usize,
    },

    /// Keystream passed to `xor_stream` is empty.
    #[error("invalid keystream length: keystream must not be empty")]
    InvalidKeystreamLength,

    /// Data is longer than the keystream it is XORed with.
    #[error("keystream too short: need {needed} bytes, have {available}")]
    KeystreamTooShort {
        /// Bytes of data to cover
        needed: usize,
        /// Bytes of keystream supplied
        available: usize,
    },

    /// The block counter would wrap past `u32::MAX`.
    #[error("block counter overflow: {blocks} blocks starting at counter {counter}")]
    CounterOverflow {
        /// Initial counter
        counter: u32,
        /// Number of blocks requested
        blocks: usize,
    },
}
