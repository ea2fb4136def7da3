//! Self-balancing AVL tree with step-recorded operations.

use crate::recorder::StepRecorder;
use crate::step::{AlgorithmRun, Snapshot, StepKind, TreeNode};

/// An AVL tree over distinct integer values.
///
/// Heights are stored per node (leaf = 1) and the balance factor
/// `height(left) - height(right)` is kept in {-1, 0, 1} by LL/RR/LR/RL
/// rotations after every insertion. Each primitive rotation is recorded as
/// its own `Rotate` step, so a double rotation yields two steps.
#[derive(Debug, Clone, Default)]
pub struct Avl {
    nodes: Vec<TreeNode>,
    root: Option<usize>,
}

impl Avl {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// The sample tree from the course material: 10, 20, 30, 40, 50, 25.
    pub fn sample() -> (Self, AlgorithmRun) {
        let mut tree = Self::new();
        for value in [10, 20, 30, 40, 50, 25] {
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
            "Sample AVL tree created",
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

    /// Values in ascending (in-order) sequence.
    pub fn in_order(&self) -> Vec<i64> {
        let mut out = Vec::with_capacity(self.nodes.len());
        self.collect_in_order(self.root, &mut out);
        out
    }

    fn collect_in_order(&self, node: Option<usize>, out: &mut Vec<i64>) {
        if let Some(idx) = node {
            self.collect_in_order(self.nodes[idx].left, out);
            out.push(self.nodes[idx].value);
            self.collect_in_order(self.nodes[idx].right, out);
        }
    }

    /// True when every node's balance factor is in {-1, 0, 1}.
    pub fn is_balanced(&self) -> bool {
        (0..self.nodes.len()).all(|idx| self.balance(idx).abs() <= 1)
    }

    fn height(&self, node: Option<usize>) -> u32 {
        node.map(|idx| self.nodes[idx].height).unwrap_or(0)
    }

    fn balance(&self, idx: usize) -> i32 {
        self.height(self.nodes[idx].left) as i32 - self.height(self.nodes[idx].right) as i32
    }

    fn update_height(&mut self, idx: usize) {
        let h = 1 + self
            .height(self.nodes[idx].left)
            .max(self.height(self.nodes[idx].right));
        self.nodes[idx].height = h;
    }

    /// Insert a value, restoring balance with the minimal rotation(s).
    ///
    /// Records a `Visit` per node on the descent path, an `Insert` at the
    /// placement point, then one `Rotate` step per primitive rotation
    /// performed on the way back up. Duplicates are rejected with a
    /// terminal `Found` step.
    pub fn insert(&mut self, value: i64) -> AlgorithmRun {
        let mut rec = StepRecorder::new(self.snapshot());

        // Descent: record the path and find the attachment point.
        let mut path: Vec<usize> = Vec::new();
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
            path.push(idx);
            cursor = if value < node_value {
                self.nodes[idx].left
            } else {
                self.nodes[idx].right
            };
        }

        // Attach the new leaf.
        let new_idx = self.nodes.len();
        self.nodes.push(TreeNode {
            value,
            left: None,
            right: None,
            height: 1,
        });
        match path.last() {
            None => self.root = Some(new_idx),
            Some(&parent) => {
                if value < self.nodes[parent].value {
                    self.nodes[parent].left = Some(new_idx);
                } else {
                    self.nodes[parent].right = Some(new_idx);
                }
            }
        }
        rec.record(
            StepKind::Insert,
            vec![value],
            self.snapshot(),
            format!("Inserted {value}"),
        );

        // Walk back up, updating heights and rebalancing. Parent links are
        // repaired before each Rotate step is recorded, so every snapshot
        // shows a consistent tree.
        while let Some(idx) = path.pop() {
            self.update_height(idx);
            let balance = self.balance(idx);

            if balance > 1 {
                let left = self.nodes[idx].left.expect("left-heavy node has a left child");
                if value > self.nodes[left].value {
                    // Left-Right: first rotate the left child left.
                    let left_value = self.nodes[left].value;
                    let new_left = self.rotate_left(left);
                    self.nodes[idx].left = Some(new_left);
                    self.record_rotation(&mut rec, "Left", left_value, new_left);
                }
                let pivot_value = self.nodes[idx].value;
                let subroot = self.rotate_right(idx);
                self.relink(path.last().copied(), idx, subroot);
                self.record_rotation(&mut rec, "Right", pivot_value, subroot);
            } else if balance < -1 {
                let right = self
                    .nodes[idx]
                    .right
                    .expect("right-heavy node has a right child");
                if value < self.nodes[right].value {
                    // Right-Left: first rotate the right child right.
                    let right_value = self.nodes[right].value;
                    let new_right = self.rotate_right(right);
                    self.nodes[idx].right = Some(new_right);
                    self.record_rotation(&mut rec, "Right", right_value, new_right);
                }
                let pivot_value = self.nodes[idx].value;
                let subroot = self.rotate_left(idx);
                self.relink(path.last().copied(), idx, subroot);
                self.record_rotation(&mut rec, "Left", pivot_value, subroot);
            }
        }

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

    /// Point whatever referenced `old` (parent link or root) at `new`.
    fn relink(&mut self, parent: Option<usize>, old: usize, new: usize) {
        match parent {
            None => self.root = Some(new),
            Some(p) => {
                if self.nodes[p].left == Some(old) {
                    self.nodes[p].left = Some(new);
                } else {
                    self.nodes[p].right = Some(new);
                }
            }
        }
    }

    fn record_rotation(
        &self,
        rec: &mut StepRecorder,
        direction: &str,
        pivot_value: i64,
        new_subroot: usize,
    ) {
        let subroot_value = self.nodes[new_subroot].value;
        rec.record(
            StepKind::Rotate,
            vec![pivot_value, subroot_value],
            self.snapshot(),
            format!("{direction} rotation around node {pivot_value}"),
        );
    }

    /// Right rotation: the left child becomes the subtree root.
    fn rotate_right(&mut self, y: usize) -> usize {
        let x = self.nodes[y].left.expect("right rotation requires a left child");
        let t2 = self.nodes[x].right;
        self.nodes[x].right = Some(y);
        self.nodes[y].left = t2;
        self.update_height(y);
        self.update_height(x);
        x
    }

    /// Left rotation: the right child becomes the subtree root.
    fn rotate_left(&mut self, x: usize) -> usize {
        let y = self.nodes[x].right.expect("left rotation requires a right child");
        let t2 = self.nodes[y].left;
        self.nodes[y].left = Some(x);
        self.nodes[x].right = t2;
        self.update_height(x);
        self.update_height(y);
        y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rotations(run: &AlgorithmRun) -> Vec<String> {
        run.steps()
            .iter()
            .filter(|s| s.kind == StepKind::Rotate)
            .map(|s| s.label.clone())
            .collect()
    }

    fn root_value(tree: &Avl) -> Option<i64> {
        tree.root.map(|idx| tree.nodes[idx].value)
    }

    #[test]
    fn ascending_inserts_trigger_a_left_rotation() {
        let mut tree = Avl::new();
        tree.insert(10);
        tree.insert(20);
        let run = tree.insert(30);

        assert_eq!(rotations(&run), vec!["Left rotation around node 10"]);
        assert_eq!(root_value(&tree), Some(20));
        assert_eq!(tree.in_order(), vec![10, 20, 30]);
        assert!(tree.is_balanced());
    }

    #[test]
    fn descending_inserts_trigger_a_right_rotation() {
        let mut tree = Avl::new();
        tree.insert(30);
        tree.insert(20);
        let run = tree.insert(10);

        assert_eq!(rotations(&run), vec!["Right rotation around node 30"]);
        assert_eq!(root_value(&tree), Some(20));
        assert!(tree.is_balanced());
    }

    #[test]
    fn left_right_case_performs_two_rotations() {
        let mut tree = Avl::new();
        tree.insert(30);
        tree.insert(10);
        let run = tree.insert(20);

        assert_eq!(
            rotations(&run),
            vec![
                "Left rotation around node 10",
                "Right rotation around node 30"
            ]
        );
        assert_eq!(root_value(&tree), Some(20));
        assert!(tree.is_balanced());
    }

    #[test]
    fn right_left_case_performs_two_rotations() {
        let mut tree = Avl::new();
        tree.insert(10);
        tree.insert(30);
        let run = tree.insert(20);

        assert_eq!(
            rotations(&run),
            vec![
                "Right rotation around node 30",
                "Left rotation around node 10"
            ]
        );
        assert_eq!(root_value(&tree), Some(20));
        assert!(tree.is_balanced());
    }

    #[test]
    fn balance_holds_after_every_insert() {
        let values = [41, 20, 65, 11, 29, 50, 91, 32, 72, 99, 1, 2, 3, 4, 5];
        let mut tree = Avl::new();
        let mut inserted = Vec::new();
        for v in values {
            tree.insert(v);
            inserted.push(v);
            inserted.sort_unstable();
            assert!(tree.is_balanced(), "unbalanced after inserting {v}");
            assert_eq!(tree.in_order(), inserted, "order broken after {v}");
        }
    }

    #[test]
    fn sample_tree_is_the_textbook_result() {
        let (tree, run) = Avl::sample();
        assert_eq!(tree.len(), 6);
        assert!(tree.is_balanced());
        assert_eq!(root_value(&tree), Some(30));
        assert_eq!(tree.in_order(), vec![10, 20, 25, 30, 40, 50]);
        assert_eq!(run.len(), 1);
    }

    #[test]
    fn duplicates_are_rejected() {
        let mut tree = Avl::new();
        tree.insert(7);
        let run = tree.insert(7);
        assert_eq!(tree.len(), 1);
        assert_eq!(run.steps().last().map(|s| s.kind), Some(StepKind::Found));
    }

    #[test]
    fn search_records_the_descent_path() {
        let (tree, _) = Avl::sample();
        let run = tree.search(25);
        let path: Vec<i64> = run
            .steps()
            .iter()
            .filter(|s| s.kind == StepKind::Visit)
            .map(|s| s.subjects[0])
            .collect();
        assert_eq!(path, vec![30, 20, 25]);
        assert_eq!(run.steps().last().map(|s| s.kind), Some(StepKind::Found));

        let run = tree.search(26);
        assert_eq!(
            run.steps().last().map(|s| s.kind),
            Some(StepKind::NotFound)
        );
    }

    #[test]
    fn rotation_steps_show_consistent_trees() {
        let mut tree = Avl::new();
        tree.insert(10);
        tree.insert(20);
        let run = tree.insert(30);

        let rotate = run
            .steps()
            .iter()
            .find(|s| s.kind == StepKind::Rotate)
            .unwrap();
        let Snapshot::Tree { nodes, root } = &rotate.snapshot else {
            unreachable!()
        };
        // The rotated subtree is reachable from the snapshot's root.
        let root = root.unwrap();
        assert_eq!(nodes[root].value, 20);
        assert_eq!(nodes[nodes[root].left.unwrap()].value, 10);
        assert_eq!(nodes[nodes[root].right.unwrap()].value, 30);
    }
}
