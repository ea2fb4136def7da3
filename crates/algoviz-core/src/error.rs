//! Input validation errors.
//!
//! These surface synchronously, before a run is created. Logical "not
//! found" outcomes (search miss, pop on empty) are ordinary steps, never
//! errors, and nothing can fail once a run has started.

use thiserror::Error;

/// Result type for operations that validate user input.
pub type Result<T> = std::result::Result<T, InputError>;

/// Rejection of malformed user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// Empty input where a value was required
    #[error("input is empty")]
    Empty,

    /// A token that does not parse as an integer
    #[error("not a number: {0:?}")]
    InvalidNumber(String),

    /// More elements than the visualizer can animate
    #[error("too many elements: {0} (limit is {1})")]
    TooManyElements(usize, usize),

    /// A position past the end of the structure
    #[error("position {0} is out of range for length {1}")]
    PositionOutOfRange(usize, usize),

    /// An empty hash table key
    #[error("key must not be empty")]
    EmptyKey,

    /// A start node that is not in the graph
    #[error("start node {0} is not in the graph ({1} nodes)")]
    UnknownStartNode(usize, usize),
}
