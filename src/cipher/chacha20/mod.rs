//! ChaCha20 stream cipher (RFC 7539 / RFC 8439).
//!
//! This module provides a dependency-light implementation of the ChaCha20
//! block function together with an optional step-by-step trace of its
//! internal state.
//!
//! The pipeline is strictly one-way:
//!
//! 1. [`build_state`] assembles the 16-word input from key, counter, nonce
//! 2. [`block_transform`] runs 20 rounds and the feed-forward addition
//! 3. [`serialize_le`] turns the output words into 64 keystream bytes
//! 4. [`xor_stream`] combines keystream with plaintext or ciphertext
//!
//! [`ChaCha20`] wraps these steps for payloads longer than one block.
//!
//! This module **does not** implement authenticated encryption. Reusing a
//! `(key, nonce, counter)` tuple is catastrophic for security and must be
//! prevented by the caller.

mod block;
mod keystream;
mod round;
mod state;
mod stream;
mod trace;

pub use block::{block, block_transform};
pub use keystream::{BLOCK_LEN, serialize_le, xor_stream};
pub use round::{
    COLUMN_ROUNDS, DIAGONAL_ROUNDS, DOUBLE_ROUNDS, apply_quarter_round, quarter_round,
};
pub use state::{CHACHA20_CONSTANTS, KEY_LEN, NONCE_LEN, STATE_WORDS, State, build_state};
pub use stream::ChaCha20;
pub use trace::{StepKind, TRACE_LEN, Trace, TraceStep};
