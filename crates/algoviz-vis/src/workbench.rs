//! The workbench: every structure the UI can operate on, plus the
//! operation dispatcher that turns a frontend request into a sealed run.

use algoviz_core::{
    bubble_sort, heap_sort, input, merge_sort, quick_sort, AlgorithmRun, Avl, Bst, Graph,
    HashTable, InputError, LinkedList, Queue, Stack,
};
use serde::{Deserialize, Serialize};

/// Which sorting algorithm to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortAlgorithm {
    Bubble,
    Quick,
    Merge,
    Heap,
}

impl SortAlgorithm {
    fn run(self, values: &[i64]) -> AlgorithmRun {
        match self {
            SortAlgorithm::Bubble => bubble_sort(values),
            SortAlgorithm::Quick => quick_sort(values),
            SortAlgorithm::Merge => merge_sort(values),
            SortAlgorithm::Heap => heap_sort(values),
        }
    }
}

/// One operation requested by the frontend.
///
/// Numeric fields arrive as the raw strings the user typed; validation
/// happens in [`algoviz_core::input`] before any structure is touched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    Sort { algorithm: SortAlgorithm, values: String },
    SortRandom { algorithm: SortAlgorithm },

    BstInsert { value: String },
    BstSearch { value: String },
    BstSample,
    BstClear,

    AvlInsert { value: String },
    AvlSearch { value: String },
    AvlSample,
    AvlClear,

    Dijkstra { start: String },

    HashInsert { key: String, value: String },
    HashSearch { key: String },
    HashDelete { key: String },
    HashSample,
    HashClear,

    StackPush { value: String },
    StackPop,
    StackPeek,
    StackSample,
    StackClear,

    QueueEnqueue { value: String },
    QueueDequeue,
    QueueFront,
    QueueSample,
    QueueClear,

    ListInsertHead { value: String },
    ListInsertTail { value: String },
    ListInsertAt { position: String, value: String },
    ListDelete { value: String },
    ListSearch { value: String },
    ListSample,
    ListClear,
}

/// The long-lived structures behind the UI panels.
///
/// Sorting is stateless (each request carries its own array); everything
/// else mutates a structure held here so consecutive operations build on
/// each other.
pub struct Workbench {
    bst: Bst,
    avl: Avl,
    graph: Graph,
    hash: HashTable,
    stack: Stack,
    queue: Queue,
    list: LinkedList,
}

impl Default for Workbench {
    fn default() -> Self {
        Self::new()
    }
}

impl Workbench {
    pub fn new() -> Self {
        Self {
            bst: Bst::new(),
            avl: Avl::new(),
            graph: Graph::demo(),
            hash: HashTable::new(),
            stack: Stack::new(),
            queue: Queue::new(),
            list: LinkedList::new(),
        }
    }

    /// The graph Dijkstra runs against.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Validate the request, apply it, and return the sealed run.
    ///
    /// Invalid input fails here with an [`InputError`] and leaves every
    /// structure untouched.
    pub fn apply(&mut self, op: Operation) -> Result<AlgorithmRun, InputError> {
        match op {
            Operation::Sort { algorithm, values } => {
                let values = input::parse_array(&values)?;
                Ok(algorithm.run(&values))
            }
            Operation::SortRandom { algorithm } => {
                let values = input::random_array(&mut rand::thread_rng());
                Ok(algorithm.run(&values))
            }

            Operation::BstInsert { value } => Ok(self.bst.insert(input::parse_value(&value)?)),
            Operation::BstSearch { value } => Ok(self.bst.search(input::parse_value(&value)?)),
            Operation::BstSample => {
                let (tree, run) = Bst::sample();
                self.bst = tree;
                Ok(run)
            }
            Operation::BstClear => Ok(self.bst.clear()),

            Operation::AvlInsert { value } => Ok(self.avl.insert(input::parse_value(&value)?)),
            Operation::AvlSearch { value } => Ok(self.avl.search(input::parse_value(&value)?)),
            Operation::AvlSample => {
                let (tree, run) = Avl::sample();
                self.avl = tree;
                Ok(run)
            }
            Operation::AvlClear => Ok(self.avl.clear()),

            Operation::Dijkstra { start } => self.graph.dijkstra(input::parse_index(&start)?),

            Operation::HashInsert { key, value } => {
                let key = input::parse_key(&key)?;
                Ok(self.hash.insert(&key, value.trim()))
            }
            Operation::HashSearch { key } => Ok(self.hash.search(&input::parse_key(&key)?)),
            Operation::HashDelete { key } => Ok(self.hash.delete(&input::parse_key(&key)?)),
            Operation::HashSample => {
                let (table, run) = HashTable::sample();
                self.hash = table;
                Ok(run)
            }
            Operation::HashClear => Ok(self.hash.clear()),

            Operation::StackPush { value } => Ok(self.stack.push(input::parse_value(&value)?)),
            Operation::StackPop => Ok(self.stack.pop()),
            Operation::StackPeek => Ok(self.stack.peek()),
            Operation::StackSample => {
                let (stack, run) = Stack::sample();
                self.stack = stack;
                Ok(run)
            }
            Operation::StackClear => Ok(self.stack.clear()),

            Operation::QueueEnqueue { value } => {
                Ok(self.queue.enqueue(input::parse_value(&value)?))
            }
            Operation::QueueDequeue => Ok(self.queue.dequeue()),
            Operation::QueueFront => Ok(self.queue.front()),
            Operation::QueueSample => {
                let (queue, run) = Queue::sample();
                self.queue = queue;
                Ok(run)
            }
            Operation::QueueClear => Ok(self.queue.clear()),

            Operation::ListInsertHead { value } => {
                Ok(self.list.insert_head(input::parse_value(&value)?))
            }
            Operation::ListInsertTail { value } => {
                Ok(self.list.insert_tail(input::parse_value(&value)?))
            }
            Operation::ListInsertAt { position, value } => {
                let position = input::parse_index(&position)?;
                let value = input::parse_value(&value)?;
                self.list.insert_at(position, value)
            }
            Operation::ListDelete { value } => Ok(self.list.delete(input::parse_value(&value)?)),
            Operation::ListSearch { value } => Ok(self.list.search(input::parse_value(&value)?)),
            Operation::ListSample => {
                let (list, run) = LinkedList::sample();
                self.list = list;
                Ok(run)
            }
            Operation::ListClear => Ok(self.list.clear()),
        }
    }
}
