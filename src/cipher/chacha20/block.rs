//! ChaCha20 block transform.
//!
//! Turns a 16-word input state into 16 words of keystream by applying the
//! 20-round permutation to a working copy and adding the original state
//! back in (feed-forward). Without the feed-forward the permutation could be
//! run backwards; with it the output cannot be inverted without the key.
//!
//! The transform can optionally record every intermediate state in a
//! [`Trace`]. Recording never feeds back into the arithmetic.

use tracing::debug;

use super::keystream::serialize_le;
use super::round::{COLUMN_ROUNDS, DIAGONAL_ROUNDS, DOUBLE_ROUNDS, apply_quarter_round};
use super::state::{KEY_LEN, NONCE_LEN, State};
use super::trace::{TRACE_LEN, Trace, TraceStep};
use crate::primitives::add32;

/// Applies one phase (column or diagonal) of quarter rounds.
#[inline(always)]
fn phase(
    working: &mut [u32; 16],
    groups: &[[usize; 4]; 4],
    name: &str,
    trace: &mut Option<Trace>,
) {
    for &indices in groups {
        if let Some(trace) = trace.as_mut() {
            trace.push(TraceStep::quarter(name, indices, &State(*working)));
        }

        apply_quarter_round(working, indices);

        if let Some(trace) = trace.as_mut() {
            trace.push(TraceStep::after_quarter(indices, &State(*working)));
        }
    }
}

/// Transforms one ChaCha20 state into one block of keystream words.
///
/// The input is copied; the caller's state is never modified. When
/// `emit_trace` is `true` the returned [`Trace`] holds exactly
/// [`TRACE_LEN`] steps, the last of which carries the output as its
/// `after` snapshot. Otherwise the trace is empty.
///
/// Output and trace are fully determined by `state`.
pub fn block_transform(state: &State, emit_trace: bool) -> (State, Trace) {
    let original = *state;
    let mut working = original.0;

    let mut trace = emit_trace.then(|| Trace::with_capacity(TRACE_LEN));

    if let Some(trace) = trace.as_mut() {
        debug!(counter = original.counter(), "tracing chacha20 block");
        trace.push(TraceStep::initial(&original));
    }

    for round in 1..=DOUBLE_ROUNDS {
        phase(&mut working, &COLUMN_ROUNDS, "column", &mut trace);
        phase(&mut working, &DIAGONAL_ROUNDS, "diagonal", &mut trace);

        if let Some(trace) = trace.as_mut() {
            trace.push(TraceStep::round(round, &State(working)));
        }
    }

    // Feed-forward
    let mut output = [0u32; 16];
    output
        .iter_mut()
        .zip(working.iter().zip(&original.0))
        .for_each(|(o, (w, s))| *o = add32(*w, *s));
    let output = State(output);

    if let Some(trace) = trace.as_mut() {
        trace.push(TraceStep::finalize(&original, &output));
    }

    (output, trace.unwrap_or_default())
}

/// Returns the 64 keystream bytes for one `(key, counter, nonce)` triple.
///
/// Shorthand for [`build_state`](super::build_state), an untraced
/// [`block_transform`] and [`serialize_le`], for callers whose key and nonce
/// lengths are already fixed by their types.
///
/// The bytes are keystream, not ciphertext: XOR them with the payload, and
/// never derive two payloads from the same triple.
pub fn block(key: &[u8; KEY_LEN], counter: u32, nonce: &[u8; NONCE_LEN]) -> [u8; 64] {
    let state = State::from_parts(key, counter, nonce);
    let (output, _) = block_transform(&state, false);

    serialize_le(&output)
}
