//! Passive builder that accumulates steps and seals them into a run.

use crate::step::{AlgorithmRun, Snapshot, Step, StepKind};

/// Records the step sequence of one algorithm execution.
///
/// Used internally by the algorithm implementations: [`record`] appends one
/// step, [`finish`] seals the sequence into an immutable [`AlgorithmRun`].
/// There are no side effects beyond sequence growth. Passing inconsistent
/// arguments (more than three subjects) is a contract violation, not a
/// runtime condition.
///
/// [`record`]: StepRecorder::record
/// [`finish`]: StepRecorder::finish
#[derive(Debug)]
pub struct StepRecorder {
    input: Snapshot,
    steps: Vec<Step>,
}

impl StepRecorder {
    /// Start recording from the given seed state.
    pub fn new(input: Snapshot) -> Self {
        Self {
            input,
            steps: Vec::new(),
        }
    }

    /// Append one step.
    pub fn record(
        &mut self,
        kind: StepKind,
        subjects: Vec<i64>,
        snapshot: Snapshot,
        label: impl Into<String>,
    ) {
        debug_assert!(subjects.len() <= 3, "a step touches at most 3 subjects");
        self.steps.push(Step {
            kind,
            subjects,
            snapshot,
            label: label.into(),
        });
    }

    /// Number of steps recorded so far.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True when nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Seal the sequence into an immutable run.
    pub fn finish(self) -> AlgorithmRun {
        AlgorithmRun::new(self.input, self.steps)
    }
}
