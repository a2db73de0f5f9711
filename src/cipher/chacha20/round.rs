//! ChaCha20 quarter round and round schedule.

use crate::primitives::{add32, rotl32, xor32};

/// Word indices mixed by the four column quarter rounds, in order.
pub const COLUMN_ROUNDS: [[usize; 4]; 4] = [
    [0, 4, 8, 12],
    [1, 5, 9, 13],
    [2, 6, 10, 14],
    [3, 7, 11, 15],
];

/// Word indices mixed by the four diagonal quarter rounds, in order.
pub const DIAGONAL_ROUNDS: [[usize; 4]; 4] = [
    [0, 5, 10, 15],
    [1, 6, 11, 12],
    [2, 7, 8, 13],
    [3, 4, 9, 14],
];

/// Number of double rounds (column + diagonal) in ChaCha20.
pub const DOUBLE_ROUNDS: usize = 10;

/// Performs one ChaCha20 quarter round.
///
/// A quarter round mixes four 32-bit words using addition modulo 2³², XOR,
/// and left rotations by 16, 12, 8 and 7 bits. Each line depends on the
/// result of the previous one.
///
/// The function is branchless and runs in constant time.
#[inline(always)]
pub const fn quarter_round(a: u32, b: u32, c: u32, d: u32) -> (u32, u32, u32, u32) {
    let a = add32(a, b);
    let d = rotl32(xor32(d, a), 16);

    let c = add32(c, d);
    let b = rotl32(xor32(b, c), 12);

    let a = add32(a, b);
    let d = rotl32(xor32(d, a), 8);

    let c = add32(c, d);
    let b = rotl32(xor32(b, c), 7);

    (a, b, c, d)
}

/// Applies a quarter round to four words of `state` in place.
#[inline(always)]
pub fn apply_quarter_round(state: &mut [u32; 16], [a, b, c, d]: [usize; 4]) {
    let (na, nb, nc, nd) = quarter_round(state[a], state[b], state[c], state[d]);

    state[a] = na;
    state[b] = nb;
    state[c] = nc;
    state[d] = nd;
}
