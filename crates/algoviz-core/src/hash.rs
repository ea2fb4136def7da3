//! Chained hash table with step-recorded operations.

use crate::recorder::StepRecorder;
use crate::step::{AlgorithmRun, Snapshot, StepKind};
use crate::DEFAULT_BUCKET_COUNT;

/// A string-keyed hash table with separate chaining.
///
/// The hash function is the running sum of character code points modulo
/// the bucket count; the resulting bucket placement is part of the
/// observable behavior (`"car"` hashes to bucket `(99 + 97 + 114) % 8 = 2`
/// in a default table).
#[derive(Debug, Clone)]
pub struct HashTable {
    buckets: Vec<Vec<(String, String)>>,
}

impl Default for HashTable {
    fn default() -> Self {
        Self::new()
    }
}

impl HashTable {
    /// Create a table with [`DEFAULT_BUCKET_COUNT`] buckets.
    pub fn new() -> Self {
        Self::with_buckets(DEFAULT_BUCKET_COUNT)
    }

    /// Create a table with a custom bucket count.
    pub fn with_buckets(count: usize) -> Self {
        debug_assert!(count > 0, "a hash table needs at least one bucket");
        Self {
            buckets: vec![Vec::new(); count],
        }
    }

    /// The sample table from the course material.
    pub fn sample() -> (Self, AlgorithmRun) {
        let mut table = Self::new();
        for (key, value) in [
            ("apple", "fruit"),
            ("car", "vehicle"),
            ("book", "object"),
            ("sun", "star"),
            ("water", "liquid"),
        ] {
            table.insert(key, value);
        }
        let mut rec = StepRecorder::new(Snapshot::Buckets {
            buckets: vec![Vec::new(); DEFAULT_BUCKET_COUNT],
        });
        rec.record(
            StepKind::Insert,
            Vec::new(),
            table.snapshot(),
            "Sample hash table created",
        );
        (table, rec.finish())
    }

    /// Number of buckets.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Total number of stored entries.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    /// True when no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Entries per bucket.
    pub fn load_factor(&self) -> f64 {
        self.len() as f64 / self.buckets.len() as f64
    }

    /// Sum of character code points modulo the bucket count.
    pub fn hash(&self, key: &str) -> usize {
        let mut h = 0usize;
        for c in key.chars() {
            h = (h + c as usize) % self.buckets.len();
        }
        h
    }

    /// Full observable state of the table.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::Buckets {
            buckets: self.buckets.clone(),
        }
    }

    /// Insert or update a key. One `Insert` step naming the target bucket.
    pub fn insert(&mut self, key: &str, value: &str) -> AlgorithmRun {
        let mut rec = StepRecorder::new(self.snapshot());
        let slot = self.hash(key);

        let bucket = &mut self.buckets[slot];
        let label = match bucket.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => {
                entry.1 = value.to_string();
                format!("Updated key {key:?} with value {value:?} at slot {slot}")
            }
            None => {
                bucket.push((key.to_string(), value.to_string()));
                format!("Inserted key {key:?} with value {value:?} at slot {slot}")
            }
        };
        rec.record(StepKind::Insert, vec![slot as i64], self.snapshot(), label);
        rec.finish()
    }

    /// Look a key up. One `Found` or `NotFound` step.
    pub fn search(&self, key: &str) -> AlgorithmRun {
        let mut rec = StepRecorder::new(self.snapshot());
        let slot = self.hash(key);

        match self.buckets[slot].iter().find(|(k, _)| k == key) {
            Some((_, value)) => rec.record(
                StepKind::Found,
                vec![slot as i64],
                self.snapshot(),
                format!("Found key {key:?} with value {value:?} at slot {slot}"),
            ),
            None => rec.record(
                StepKind::NotFound,
                vec![slot as i64],
                self.snapshot(),
                format!("Key {key:?} not found"),
            ),
        }
        rec.finish()
    }

    /// Remove a key. A missing key is a `NotFound` step, not an error.
    pub fn delete(&mut self, key: &str) -> AlgorithmRun {
        let mut rec = StepRecorder::new(self.snapshot());
        let slot = self.hash(key);

        let bucket = &mut self.buckets[slot];
        match bucket.iter().position(|(k, _)| k == key) {
            Some(idx) => {
                bucket.remove(idx);
                rec.record(
                    StepKind::Delete,
                    vec![slot as i64],
                    self.snapshot(),
                    format!("Deleted key {key:?} from slot {slot}"),
                );
            }
            None => rec.record(
                StepKind::NotFound,
                vec![slot as i64],
                self.snapshot(),
                format!("Key {key:?} not found"),
            ),
        }
        rec.finish()
    }

    /// Remove every entry.
    pub fn clear(&mut self) -> AlgorithmRun {
        let mut rec = StepRecorder::new(self.snapshot());
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        rec.record(
            StepKind::Delete,
            Vec::new(),
            self.snapshot(),
            "Hash table cleared",
        );
        rec.finish()
    }
}
