//! AlgoViz Algorithm Core
//!
//! Pure, step-recorded implementations of the classic data structures and
//! algorithms taught in an introductory course: sorting (bubble, quick,
//! merge, heap), binary search trees, AVL trees, Dijkstra's shortest path,
//! a chained hash table, and the linear structures (stack, queue, linked
//! list).
//!
//! # Execution Model
//!
//! Nothing here renders or animates. Every operation runs eagerly to
//! completion and records a [`Step`] for each atomic event a textbook
//! implementation would perform - every comparison, swap, visit, and
//! rotation, in the order it happens. The sealed [`AlgorithmRun`] is
//! immutable; a playback layer paces revelation of its steps and a renderer
//! maps each [`Snapshot`] to pixels.
//!
//! Step sequences are deterministic and total: replaying a run from start
//! to its final index always reaches the terminal state a reference
//! implementation of the same algorithm would produce.
//!
//! # Input Handling
//!
//! Raw user text enters through the [`input`] module and is validated
//! before any run is created. Malformed input is an [`InputError`]; a
//! search miss or pop-on-empty is an ordinary [`StepKind::NotFound`] step,
//! never an error. No operation can fail once its run has started.

mod avl;
mod bst;
mod error;
mod graph;
mod hash;
mod linear;
mod recorder;
mod sort;
mod step;

pub mod input;

pub use avl::Avl;
pub use bst::Bst;
pub use error::{InputError, Result};
pub use graph::{shortest_path, Edge, Graph};
pub use hash::HashTable;
pub use linear::{LinkedList, Queue, Stack};
pub use recorder::StepRecorder;
pub use sort::{bubble_sort, heap_sort, merge_sort, quick_sort};
pub use step::{AlgorithmRun, Snapshot, Step, StepKind, TreeNode};

/// Maximum number of elements accepted in a user-supplied array.
pub const MAX_INPUT_LEN: usize = 20;

/// Number of buckets in a default hash table.
pub const DEFAULT_BUCKET_COUNT: usize = 8;

/// Length of a generated random array.
pub const RANDOM_ARRAY_LEN: usize = 8;

// A generated array must always be a valid user input.
const _: () = assert!(RANDOM_ARRAY_LEN <= MAX_INPUT_LEN);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_arrays_fit_input_limit() {
        assert!(RANDOM_ARRAY_LEN <= MAX_INPUT_LEN);
    }

    #[test]
    fn sort_and_structures_share_the_step_model() {
        let run = bubble_sort(&[3, 1, 2]);
        assert!(run.is_complete());

        let mut bst = Bst::new();
        let run = bst.insert(5);
        assert!(run.is_complete());
    }
}
