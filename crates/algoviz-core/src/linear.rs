//! Step-recorded linear structures: stack, queue, and linked list.
//!
//! Each mutating or inspecting operation records exactly one step. Taking
//! from an empty structure is an ordinary [`StepKind::NotFound`] step, not
//! an error; the only error here is a linked-list insert position past the
//! end of the list.

use std::collections::VecDeque;

use crate::error::{InputError, Result};
use crate::recorder::StepRecorder;
use crate::step::{AlgorithmRun, Snapshot, StepKind};

const SAMPLE_VALUES: [i64; 5] = [10, 20, 30, 40, 50];

fn items(values: Vec<i64>) -> Snapshot {
    Snapshot::Items { values }
}

fn sample_run(snapshot: Snapshot, label: &str) -> AlgorithmRun {
    let mut rec = StepRecorder::new(items(Vec::new()));
    rec.record(StepKind::Insert, Vec::new(), snapshot, label);
    rec.finish()
}

/// A LIFO stack, stored bottom-to-top.
#[derive(Debug, Clone, Default)]
pub struct Stack {
    values: Vec<i64>,
}

impl Stack {
    pub fn new() -> Self {
        Self::default()
    }

    /// The sample stack from the course material.
    pub fn sample() -> (Self, AlgorithmRun) {
        let stack = Self {
            values: SAMPLE_VALUES.to_vec(),
        };
        let run = sample_run(stack.snapshot(), "Sample stack created");
        (stack, run)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn snapshot(&self) -> Snapshot {
        items(self.values.clone())
    }

    /// Push a value onto the top.
    pub fn push(&mut self, value: i64) -> AlgorithmRun {
        let mut rec = StepRecorder::new(self.snapshot());
        self.values.push(value);
        rec.record(
            StepKind::Insert,
            vec![value],
            self.snapshot(),
            format!("Pushed {value} onto the stack"),
        );
        rec.finish()
    }

    /// Pop the top value. An empty stack records `NotFound`.
    pub fn pop(&mut self) -> AlgorithmRun {
        let mut rec = StepRecorder::new(self.snapshot());
        match self.values.pop() {
            Some(value) => rec.record(
                StepKind::Delete,
                vec![value],
                self.snapshot(),
                format!("Popped {value} from the stack"),
            ),
            None => rec.record(
                StepKind::NotFound,
                Vec::new(),
                self.snapshot(),
                "The stack is empty",
            ),
        }
        rec.finish()
    }

    /// Look at the top value without removing it.
    pub fn peek(&self) -> AlgorithmRun {
        let mut rec = StepRecorder::new(self.snapshot());
        match self.values.last() {
            Some(&value) => rec.record(
                StepKind::Found,
                vec![value],
                self.snapshot(),
                format!("Top of the stack is {value}"),
            ),
            None => rec.record(
                StepKind::NotFound,
                Vec::new(),
                self.snapshot(),
                "The stack is empty",
            ),
        }
        rec.finish()
    }

    /// Remove every value.
    pub fn clear(&mut self) -> AlgorithmRun {
        let mut rec = StepRecorder::new(self.snapshot());
        self.values.clear();
        rec.record(
            StepKind::Delete,
            Vec::new(),
            self.snapshot(),
            "Stack cleared",
        );
        rec.finish()
    }
}

/// A FIFO queue, stored front-to-back.
#[derive(Debug, Clone, Default)]
pub struct Queue {
    values: VecDeque<i64>,
}

impl Queue {
    pub fn new() -> Self {
        Self::default()
    }

    /// The sample queue from the course material.
    pub fn sample() -> (Self, AlgorithmRun) {
        let queue = Self {
            values: SAMPLE_VALUES.into(),
        };
        let run = sample_run(queue.snapshot(), "Sample queue created");
        (queue, run)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn snapshot(&self) -> Snapshot {
        items(self.values.iter().copied().collect())
    }

    /// Add a value at the back.
    pub fn enqueue(&mut self, value: i64) -> AlgorithmRun {
        let mut rec = StepRecorder::new(self.snapshot());
        self.values.push_back(value);
        rec.record(
            StepKind::Enqueue,
            vec![value],
            self.snapshot(),
            format!("Enqueued {value}"),
        );
        rec.finish()
    }

    /// Remove the front value. An empty queue records `NotFound`.
    pub fn dequeue(&mut self) -> AlgorithmRun {
        let mut rec = StepRecorder::new(self.snapshot());
        match self.values.pop_front() {
            Some(value) => rec.record(
                StepKind::Dequeue,
                vec![value],
                self.snapshot(),
                format!("Dequeued {value}"),
            ),
            None => rec.record(
                StepKind::NotFound,
                Vec::new(),
                self.snapshot(),
                "The queue is empty",
            ),
        }
        rec.finish()
    }

    /// Look at the front value without removing it.
    pub fn front(&self) -> AlgorithmRun {
        let mut rec = StepRecorder::new(self.snapshot());
        match self.values.front() {
            Some(&value) => rec.record(
                StepKind::Found,
                vec![value],
                self.snapshot(),
                format!("Front of the queue is {value}"),
            ),
            None => rec.record(
                StepKind::NotFound,
                Vec::new(),
                self.snapshot(),
                "The queue is empty",
            ),
        }
        rec.finish()
    }

    /// Remove every value.
    pub fn clear(&mut self) -> AlgorithmRun {
        let mut rec = StepRecorder::new(self.snapshot());
        self.values.clear();
        rec.record(
            StepKind::Delete,
            Vec::new(),
            self.snapshot(),
            "Queue cleared",
        );
        rec.finish()
    }
}

/// A singly linked list, stored head-to-tail.
///
/// Backed by a `Vec`, which models the same head-to-tail ordering the
/// pointer version would show; positions are 0-based from the head.
#[derive(Debug, Clone, Default)]
pub struct LinkedList {
    values: Vec<i64>,
}

impl LinkedList {
    pub fn new() -> Self {
        Self::default()
    }

    /// The sample list from the course material.
    pub fn sample() -> (Self, AlgorithmRun) {
        let list = Self {
            values: SAMPLE_VALUES.to_vec(),
        };
        let run = sample_run(list.snapshot(), "Sample list created");
        (list, run)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn snapshot(&self) -> Snapshot {
        items(self.values.clone())
    }

    /// Insert a value at the head.
    pub fn insert_head(&mut self, value: i64) -> AlgorithmRun {
        let mut rec = StepRecorder::new(self.snapshot());
        self.values.insert(0, value);
        rec.record(
            StepKind::Insert,
            vec![value],
            self.snapshot(),
            format!("Inserted {value} at the head"),
        );
        rec.finish()
    }

    /// Insert a value at the tail.
    pub fn insert_tail(&mut self, value: i64) -> AlgorithmRun {
        let mut rec = StepRecorder::new(self.snapshot());
        self.values.push(value);
        rec.record(
            StepKind::Insert,
            vec![value],
            self.snapshot(),
            format!("Inserted {value} at the tail"),
        );
        rec.finish()
    }

    /// Insert a value at a 0-based position.
    ///
    /// `position == len` appends; anything past that is rejected before a
    /// run is created.
    pub fn insert_at(&mut self, position: usize, value: i64) -> Result<AlgorithmRun> {
        if position > self.values.len() {
            return Err(InputError::PositionOutOfRange(position, self.values.len()));
        }
        let mut rec = StepRecorder::new(self.snapshot());
        self.values.insert(position, value);
        rec.record(
            StepKind::Insert,
            vec![value, position as i64],
            self.snapshot(),
            format!("Inserted {value} at position {position}"),
        );
        Ok(rec.finish())
    }

    /// Remove the first node holding `value`, visiting each node on the
    /// way. An absent value ends in a `NotFound` step.
    pub fn delete(&mut self, value: i64) -> AlgorithmRun {
        let mut rec = StepRecorder::new(self.snapshot());
        for position in 0..self.values.len() {
            let node_value = self.values[position];
            rec.record(
                StepKind::Visit,
                vec![node_value],
                self.snapshot(),
                format!("Visiting node {node_value}"),
            );
            if node_value == value {
                self.values.remove(position);
                rec.record(
                    StepKind::Delete,
                    vec![value],
                    self.snapshot(),
                    format!("Deleted {value} at position {position}"),
                );
                return rec.finish();
            }
        }
        rec.record(
            StepKind::NotFound,
            vec![value],
            self.snapshot(),
            format!("Value {value} is not in the list"),
        );
        rec.finish()
    }

    /// Walk from the head looking for `value`.
    pub fn search(&self, value: i64) -> AlgorithmRun {
        let mut rec = StepRecorder::new(self.snapshot());
        for (position, &node_value) in self.values.iter().enumerate() {
            rec.record(
                StepKind::Visit,
                vec![node_value],
                self.snapshot(),
                format!("Visiting node {node_value}"),
            );
            if node_value == value {
                rec.record(
                    StepKind::Found,
                    vec![value, position as i64],
                    self.snapshot(),
                    format!("Found {value} at position {position}"),
                );
                return rec.finish();
            }
        }
        rec.record(
            StepKind::NotFound,
            vec![value],
            self.snapshot(),
            format!("Value {value} is not in the list"),
        );
        rec.finish()
    }

    /// Remove every node.
    pub fn clear(&mut self) -> AlgorithmRun {
        let mut rec = StepRecorder::new(self.snapshot());
        self.values.clear();
        rec.record(
            StepKind::Delete,
            Vec::new(),
            self.snapshot(),
            "List cleared",
        );
        rec.finish()
    }
}
