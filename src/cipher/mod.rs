//! Stream ciphers exposed by the crate.
//!
//! Currently includes ChaCha20 with a pure-Rust implementation.

pub mod chacha20;

/// Re-export of the ChaCha20 entry points.
pub use chacha20::{ChaCha20, block_transform, build_state, serialize_le, xor_stream};
