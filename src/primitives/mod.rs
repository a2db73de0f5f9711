//! Primitive operations
//!
//! This module defines the low-level word operations that the cipher code
//! is written in terms of.
//!
//! Primitives are simple, dependency-free building blocks with well-defined
//! semantics over fixed-width unsigned integers. They never fail and never
//! allocate.
//!
//! Current primitives include:
//! - `add32`: addition modulo 2³²
//! - `xor32`: bitwise exclusive or
//! - `rotl32`: left rotation

mod word;

pub use word::{add32, rotl32, xor32};
