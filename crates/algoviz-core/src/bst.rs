//! Binary search tree with step-recorded operations.

use crate::recorder::StepRecorder;
use crate::step::{AlgorithmRun, Snapshot, StepKind, TreeNode};

/// A binary search tree over distinct integer values.
///
/// Nodes live in an arena; removal only happens via [`clear`], so indices
/// stay stable across inserts and searches.
///
/// [`clear`]: Bst::clear
#[derive(Debug, Clone, Default)]
pub struct Bst {
    nodes: Vec<TreeNode>,
    root: Option<usize>,
}

impl Bst {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// The sample tree from the course material: 50, 30, 70, 20, 40, 60, 80.
    pub fn sample() -> (Self, AlgorithmRun) {
        let mut tree = Self::new();
        for value in [50, 30, 70, 20, 40, 60, 80] {
            tree.insert(value);
        }
        let mut rec = StepRecorder::new(Snapshot::Tree {
            nodes: Vec::new(),
            root: None,
        });
        rec.record(
            StepKind::Insert,
            Vec::new(),
            tree.snapshot(),
            "Sample tree created",
        );
        (tree, rec.finish())
    }

    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Full observable state of the tree.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::Tree {
            nodes: self.nodes.clone(),
            root: self.root,
        }
    }

    /// Insert a value using standard recursive placement.
    ///
    /// Records a `Visit` per node on the descent path and an `Insert` at
    /// the placement point. A duplicate is rejected: the run ends in a
    /// `Found` step and the tree is unchanged.
    pub fn insert(&mut self, value: i64) -> AlgorithmRun {
        let mut rec = StepRecorder::new(self.snapshot());

        let mut parent: Option<(usize, bool)> = None;
        let mut cursor = self.root;
        while let Some(idx) = cursor {
            let node_value = self.nodes[idx].value;
            rec.record(
                StepKind::Visit,
                vec![node_value],
                self.snapshot(),
                format!("Visiting node {node_value}"),
            );
            if value == node_value {
                rec.record(
                    StepKind::Found,
                    vec![value],
                    self.snapshot(),
                    format!("Value {value} is already in the tree"),
                );
                return rec.finish();
            }
            let go_left = value < node_value;
            parent = Some((idx, go_left));
            cursor = if go_left {
                self.nodes[idx].left
            } else {
                self.nodes[idx].right
            };
        }

        let new_idx = self.nodes.len();
        self.nodes.push(TreeNode {
            value,
            left: None,
            right: None,
            height: 0,
        });
        match parent {
            None => self.root = Some(new_idx),
            Some((idx, true)) => self.nodes[idx].left = Some(new_idx),
            Some((idx, false)) => self.nodes[idx].right = Some(new_idx),
        }
        rec.record(
            StepKind::Insert,
            vec![value],
            self.snapshot(),
            format!("Inserted {value}"),
        );
        rec.finish()
    }

    /// Search for a value, recording the full root-to-target (or
    /// root-to-null) path.
    pub fn search(&self, value: i64) -> AlgorithmRun {
        let mut rec = StepRecorder::new(self.snapshot());

        let mut cursor = self.root;
        while let Some(idx) = cursor {
            let node_value = self.nodes[idx].value;
            rec.record(
                StepKind::Visit,
                vec![node_value],
                self.snapshot(),
                format!("Visiting node {node_value}"),
            );
            if value == node_value {
                rec.record(
                    StepKind::Found,
                    vec![value],
                    self.snapshot(),
                    format!("Found {value}"),
                );
                return rec.finish();
            }
            cursor = if value < node_value {
                self.nodes[idx].left
            } else {
                self.nodes[idx].right
            };
        }

        rec.record(
            StepKind::NotFound,
            vec![value],
            self.snapshot(),
            format!("Value {value} is not in the tree"),
        );
        rec.finish()
    }

    /// Remove every node.
    pub fn clear(&mut self) -> AlgorithmRun {
        let mut rec = StepRecorder::new(self.snapshot());
        self.nodes.clear();
        self.root = None;
        rec.record(
            StepKind::Delete,
            Vec::new(),
            self.snapshot(),
            "Tree cleared",
        );
        rec.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visit_path(run: &AlgorithmRun) -> Vec<i64> {
        run.steps()
            .iter()
            .filter(|s| s.kind == StepKind::Visit)
            .map(|s| s.subjects[0])
            .collect()
    }

    #[test]
    fn search_path_matches_the_descent() {
        let (tree, _) = Bst::sample();

        let run = tree.search(40);
        assert_eq!(visit_path(&run), vec![50, 30, 40]);
        assert_eq!(run.steps().last().map(|s| s.kind), Some(StepKind::Found));

        let run = tree.search(80);
        assert_eq!(visit_path(&run), vec![50, 70, 80]);
    }

    #[test]
    fn every_inserted_value_is_found() {
        let values = [50, 30, 70, 20, 40, 60, 80];
        let mut tree = Bst::new();
        for v in values {
            tree.insert(v);
        }
        for v in values {
            let run = tree.search(v);
            assert_eq!(run.steps().last().map(|s| s.kind), Some(StepKind::Found));
        }
    }

    #[test]
    fn absent_values_end_in_not_found() {
        let (tree, _) = Bst::sample();
        let run = tree.search(65);
        assert_eq!(visit_path(&run), vec![50, 70, 60]);
        assert_eq!(
            run.steps().last().map(|s| s.kind),
            Some(StepKind::NotFound)
        );
    }

    #[test]
    fn search_on_empty_tree_is_not_found() {
        let tree = Bst::new();
        let run = tree.search(1);
        assert_eq!(run.len(), 1);
        assert_eq!(run.steps()[0].kind, StepKind::NotFound);
    }

    #[test]
    fn duplicates_are_rejected_without_mutation() {
        let mut tree = Bst::new();
        tree.insert(10);
        tree.insert(5);

        let run = tree.insert(5);
        assert_eq!(tree.len(), 2);
        assert_eq!(run.steps().last().map(|s| s.kind), Some(StepKind::Found));
    }

    #[test]
    fn insert_records_path_then_placement() {
        let mut tree = Bst::new();
        tree.insert(50);
        tree.insert(30);
        let run = tree.insert(40);

        assert_eq!(visit_path(&run), vec![50, 30]);
        let last = run.steps().last().unwrap();
        assert_eq!(last.kind, StepKind::Insert);
        assert_eq!(last.subjects, vec![40]);
    }

    #[test]
    fn clear_empties_the_tree() {
        let (mut tree, _) = Bst::sample();
        let run = tree.clear();
        assert!(tree.is_empty());
        assert_eq!(run.len(), 1);
        assert_eq!(run.steps()[0].kind, StepKind::Delete);
        assert_eq!(
            run.final_snapshot(),
            &Snapshot::Tree {
                nodes: Vec::new(),
                root: None
            }
        );
    }
}
