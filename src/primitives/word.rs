//! 32-bit word arithmetic.
//!
//! ChaCha20 is an ARX construction: every operation on the state is an
//! addition modulo 2³², an XOR, or a fixed left rotation. These helpers
//! name those three operations so the round code reads like RFC 7539.
//!
//! All functions are total over `u32`; wraparound is defined behavior.

/// Adds two words modulo 2³².
#[inline(always)]
pub const fn add32(a: u32, b: u32) -> u32 {
    a.wrapping_add(b)
}

/// Bitwise XOR of two words.
#[inline(always)]
pub const fn xor32(a: u32, b: u32) -> u32 {
    a ^ b
}

/// Rotates a word left by `n` bits.
///
/// Equivalent to `(a << n) | (a >> (32 - n))` with a logical right shift.
/// `n` is taken modulo 32, so a rotation by 0 returns `a` unchanged.
#[inline(always)]
pub const fn rotl32(a: u32, n: u32) -> u32 {
    a.rotate_left(n)
}
