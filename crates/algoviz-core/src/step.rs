//! The step model: atomic events recorded during an algorithm's execution.

/// What happened in one atomic event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StepKind {
    /// Two elements were compared
    Compare,
    /// Two elements exchanged positions
    Swap,
    /// A node or position was examined during traversal
    Visit,
    /// An element was chosen as the partition pivot
    SetPivot,
    /// A subtree was rotated to restore balance
    Rotate,
    /// An element entered the back of a queue
    Enqueue,
    /// An element left the front of a queue
    Dequeue,
    /// An element was added to a structure
    Insert,
    /// An element was removed from a structure
    Delete,
    /// A search target was located
    Found,
    /// A search target is absent, or the structure was empty
    NotFound,
    /// An index reached its final sorted position
    MarkSorted,
}

/// One node of a tree snapshot.
///
/// Trees are captured as an arena: `left`/`right` are indices into the
/// snapshot's node vector. `height` is maintained by AVL trees (leaf = 1)
/// and left at 0 by trees that do not track it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TreeNode {
    pub value: i64,
    pub left: Option<usize>,
    pub right: Option<usize>,
    pub height: u32,
}

/// The full observable state after applying an event.
///
/// Snapshots are complete copies rather than diffs - inputs are tiny
/// (at most [`crate::MAX_INPUT_LEN`] elements), so replaying to any index
/// is a plain lookup.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type"))]
pub enum Snapshot {
    /// An array mid-sort. `sorted` holds the indices already in final
    /// position, in ascending order.
    Array {
        values: Vec<i64>,
        sorted: Vec<usize>,
    },

    /// A binary tree as an arena of nodes with index links.
    Tree {
        nodes: Vec<TreeNode>,
        root: Option<usize>,
    },

    /// Dijkstra's working tables. A distance of `None` is the explicit
    /// "no path" sentinel.
    Graph {
        distances: Vec<Option<u64>>,
        previous: Vec<Option<usize>>,
        visited: Vec<bool>,
    },

    /// A chained hash table: ordered key/value pairs per bucket.
    Buckets {
        buckets: Vec<Vec<(String, String)>>,
    },

    /// A linear structure (stack bottom-to-top, queue front-to-back,
    /// linked list head-to-tail).
    Items { values: Vec<i64> },
}

/// An immutable record of one atomic event.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step {
    /// What happened.
    pub kind: StepKind,
    /// The indices/keys/node ids the event touched (0 to 3 entries).
    pub subjects: Vec<i64>,
    /// Full observable state after the event.
    pub snapshot: Snapshot,
    /// Human-readable description for the status line.
    pub label: String,
}

/// The complete, precomputed step sequence for one operation on one input.
///
/// Sealed by [`crate::StepRecorder::finish`]; never mutated afterwards.
/// Replaced wholesale when the user changes the input or restarts.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlgorithmRun {
    input: Snapshot,
    steps: Vec<Step>,
    is_complete: bool,
}

impl AlgorithmRun {
    pub(crate) fn new(input: Snapshot, steps: Vec<Step>) -> Self {
        Self {
            input,
            steps,
            is_complete: true,
        }
    }

    /// The seed state the operation started from.
    pub fn input(&self) -> &Snapshot {
        &self.input
    }

    /// All recorded steps, in execution order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Number of recorded steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True when the operation produced no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// True once the run has been sealed.
    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    /// The state after the final step (the input state for an empty run).
    pub fn final_snapshot(&self) -> &Snapshot {
        self.steps.last().map(|s| &s.snapshot).unwrap_or(&self.input)
    }

    /// The state after applying the first `index` steps.
    ///
    /// `index` is clamped to the number of steps; `snapshot_at(0)` is the
    /// input state.
    pub fn snapshot_at(&self, index: usize) -> &Snapshot {
        if index == 0 {
            &self.input
        } else {
            let index = index.min(self.steps.len());
            &self.steps[index - 1].snapshot
        }
    }
}
