//! Block transform traces.
//!
//! A [`Trace`] is an ordered, append-only record of every intermediate state
//! produced while transforming one block. It is purely observational: the
//! block output is identical whether or not a trace is captured.
//!
//! Traces are meant for visualization and debugging. Capturing one costs 172
//! full-state snapshots per block, so hot paths should leave it disabled.

use std::fmt;
use std::slice;

use serde::{Deserialize, Serialize};

use super::round::DOUBLE_ROUNDS;
use super::state::State;

/// Number of steps in a full trace:
/// initial state, 10 × (8 quarter + 8 state + 1 round), final.
pub const TRACE_LEN: usize = 1 + DOUBLE_ROUNDS * (8 * 2 + 1) + 1;

/// Kind of a trace step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    /// A snapshot of the working state.
    State,
    /// A quarter round is about to be applied.
    Quarter,
    /// A double round has completed.
    Round,
    /// The original state was added to the working state.
    Final,
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::State => "state",
            Self::Quarter => "quarter",
            Self::Round => "round",
            Self::Final => "final",
        })
    }
}

/// One recorded step of a block transform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceStep {
    /// What happened at this step.
    pub kind: StepKind,
    /// Human-readable label.
    pub description: String,
    /// Word indices touched by the step, if any.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub indices: Option<[usize; 4]>,
    /// Snapshot taken before the step.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub before: Option<State>,
    /// Snapshot taken after the step.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub after: Option<State>,
}

impl TraceStep {
    pub(crate) fn initial(state: &State) -> Self {
        Self {
            kind: StepKind::State,
            description: "initial state".to_owned(),
            indices: None,
            before: Some(*state),
            after: None,
        }
    }

    pub(crate) fn quarter(phase: &str, indices: [usize; 4], before: &State) -> Self {
        let [a, b, c, d] = indices;

        Self {
            kind: StepKind::Quarter,
            description: format!("quarter round ({phase}) indices {a},{b},{c},{d}"),
            indices: Some(indices),
            before: Some(*before),
            after: None,
        }
    }

    pub(crate) fn after_quarter(indices: [usize; 4], after: &State) -> Self {
        Self {
            kind: StepKind::State,
            description: "after quarter round".to_owned(),
            indices: Some(indices),
            before: None,
            after: Some(*after),
        }
    }

    pub(crate) fn round(number: usize, after: &State) -> Self {
        Self {
            kind: StepKind::Round,
            description: format!("double round {number} complete"),
            indices: None,
            before: None,
            after: Some(*after),
        }
    }

    pub(crate) fn finalize(original: &State, output: &State) -> Self {
        Self {
            kind: StepKind::Final,
            description: "add original state to working state".to_owned(),
            indices: None,
            before: Some(*original),
            after: Some(*output),
        }
    }
}

impl fmt::Display for TraceStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.description)?;

        if let Some(before) = &self.before {
            write!(f, "\n  before:\n{}", indent(before))?;
        }
        if let Some(after) = &self.after {
            write!(f, "\n  after:\n{}", indent(after))?;
        }

        Ok(())
    }
}

fn indent(state: &State) -> String {
    state
        .to_string()
        .lines()
        .map(|line| format!("    {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Ordered record of the steps of one block transform.
///
/// Empty when tracing was not requested.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trace {
    steps: Vec<TraceStep>,
}

impl Trace {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            steps: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, step: TraceStep) {
        self.steps.push(step);
    }

    /// Recorded steps, in order.
    pub fn steps(&self) -> &[TraceStep] {
        &self.steps
    }

    /// Number of recorded steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Iterates over the recorded steps.
    pub fn iter(&self) -> slice::Iter<'_, TraceStep> {
        self.steps.iter()
    }

    /// Consumes the trace, returning its steps.
    pub fn into_steps(self) -> Vec<TraceStep> {
        self.steps
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a TraceStep;
    type IntoIter = slice::Iter<'a, TraceStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

impl IntoIterator for Trace {
    type Item = TraceStep;
    type IntoIter = std::vec::IntoIter<TraceStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}
