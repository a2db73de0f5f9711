//! ChaCha20 with step-by-step state tracing
//!
//! This crate implements the ChaCha20 block function as specified in
//! RFC 7539, with an opt-in trace of every intermediate state for
//! visualization and debugging tools.
//!
//! The focus is on **clarity, predictability, and auditability**. Every
//! stage of the cipher is a small pure function over fixed-size values:
//! nothing is shared between calls, so independent inputs may be processed
//! from any number of threads without locking.
//!
//! # Module overview
//!
//! - `primitives`  
//!   32-bit word arithmetic (`add32`, `xor32`, `rotl32`) in terms of which
//!   the cipher is written.
//!
//! - `cipher`  
//!   The ChaCha20 state builder, quarter round, block transform, keystream
//!   serialization, and a thin multi-block wrapper.
//!
//! - `error`  
//!   Input validation errors raised at the API boundary.
//!
//! # Example
//!
//! ```
//! use chacha_trace::cipher::chacha20::{block_transform, build_state, serialize_le, xor_stream};
//!
//! let state = build_state(&[0u8; 32], 0, &[0u8; 12])?;
//! let (output, trace) = block_transform(&state, true);
//! assert_eq!(trace.len(), 172);
//!
//! let keystream = serialize_le(&output);
//! let ciphertext = xor_stream(b"Hello ChaCha20!", &keystream[..15])?;
//! assert_eq!(xor_stream(&ciphertext, &keystream[..15])?, b"Hello ChaCha20!");
//! # Ok::<(), chacha_trace::Error>(())
//! ```
//!
//! # Non-goals
//!
//! No authentication tag, key exchange, or key derivation. This crate is a
//! teaching and inspection tool around one primitive, not a replacement for
//! an audited AEAD library.

pub mod cipher;
pub mod error;
pub mod primitives;

pub use error::{Error, Result};
