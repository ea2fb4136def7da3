//! Step generators for the sorting algorithms.
//!
//! Each function runs a textbook implementation to completion, recording
//! every pairwise comparison and every swap/move in the exact order it
//! happens. Comparisons are strict: equal elements are never swapped, so
//! the recorded sequences are stable with respect to duplicates.
//!
//! The terminal state of every run is one [`StepKind::MarkSorted`] per
//! index and a final snapshot equal to the input sorted ascending.

use std::collections::BTreeSet;

use crate::recorder::StepRecorder;
use crate::step::{AlgorithmRun, Snapshot, StepKind};

/// Working state shared by the sort implementations: the array being
/// sorted, the set of indices already in final position, and the recorder.
struct SortRun {
    values: Vec<i64>,
    sorted: BTreeSet<usize>,
    rec: StepRecorder,
}

impl SortRun {
    fn new(input: &[i64]) -> Self {
        let seed = Snapshot::Array {
            values: input.to_vec(),
            sorted: Vec::new(),
        };
        Self {
            values: input.to_vec(),
            sorted: BTreeSet::new(),
            rec: StepRecorder::new(seed),
        }
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot::Array {
            values: self.values.clone(),
            sorted: self.sorted.iter().copied().collect(),
        }
    }

    fn compare(&mut self, i: usize, j: usize) {
        let snap = self.snapshot();
        self.rec.record(
            StepKind::Compare,
            vec![i as i64, j as i64],
            snap,
            format!("Comparing elements at positions {i} and {j}"),
        );
    }

    /// Swap two positions. Callers only swap when the values strictly
    /// differ, which keeps equal elements in their original order.
    fn swap(&mut self, i: usize, j: usize) {
        self.values.swap(i, j);
        let snap = self.snapshot();
        self.rec.record(
            StepKind::Swap,
            vec![i as i64, j as i64],
            snap,
            format!("Swapping positions {i} and {j}"),
        );
    }

    fn set_pivot(&mut self, i: usize) {
        let snap = self.snapshot();
        self.rec.record(
            StepKind::SetPivot,
            vec![i as i64],
            snap,
            format!("Pivot {} at position {i}", self.values[i]),
        );
    }

    /// Overwrite one position during a merge.
    fn place(&mut self, i: usize, value: i64) {
        self.values[i] = value;
        let snap = self.snapshot();
        self.rec.record(
            StepKind::Insert,
            vec![i as i64],
            snap,
            format!("Placing {value} at position {i}"),
        );
    }

    fn mark_sorted(&mut self, i: usize) {
        self.sorted.insert(i);
        let snap = self.snapshot();
        self.rec.record(
            StepKind::MarkSorted,
            vec![i as i64],
            snap,
            format!("Position {i} is in its final place"),
        );
    }

    fn finish(self) -> AlgorithmRun {
        self.rec.finish()
    }
}

/// Bubble sort: adjacent compare-and-swap passes, largest element bubbling
/// to the end of each pass.
pub fn bubble_sort(input: &[i64]) -> AlgorithmRun {
    let mut run = SortRun::new(input);
    let n = run.values.len();

    for i in 0..n {
        for j in 0..n - 1 - i {
            run.compare(j, j + 1);
            if run.values[j] > run.values[j + 1] {
                run.swap(j, j + 1);
            }
        }
        run.mark_sorted(n - 1 - i);
    }
    run.finish()
}

/// Quick sort with Lomuto partitioning and last-element pivot.
pub fn quick_sort(input: &[i64]) -> AlgorithmRun {
    let mut run = SortRun::new(input);
    let n = run.values.len();
    if n > 0 {
        quick_sort_range(&mut run, 0, n - 1);
    }
    run.finish()
}

fn quick_sort_range(run: &mut SortRun, lo: usize, hi: usize) {
    if lo == hi {
        run.mark_sorted(lo);
        return;
    }

    run.set_pivot(hi);
    let pivot = run.values[hi];
    let mut boundary = lo;
    for j in lo..hi {
        run.compare(j, hi);
        if run.values[j] < pivot {
            if boundary != j {
                run.swap(boundary, j);
            }
            boundary += 1;
        }
    }
    // Equal values need no exchange to put the pivot in position.
    if run.values[boundary] != pivot {
        run.swap(boundary, hi);
    }
    run.mark_sorted(boundary);

    if boundary > lo {
        quick_sort_range(run, lo, boundary - 1);
    }
    if boundary < hi {
        quick_sort_range(run, boundary + 1, hi);
    }
}

/// Merge sort: recursive halving, then stable merges back into place.
pub fn merge_sort(input: &[i64]) -> AlgorithmRun {
    let mut run = SortRun::new(input);
    let n = run.values.len();
    if n > 0 {
        merge_sort_range(&mut run, 0, n);
    }
    for i in 0..n {
        run.mark_sorted(i);
    }
    run.finish()
}

/// Sort the half-open range `[lo, hi)`.
fn merge_sort_range(run: &mut SortRun, lo: usize, hi: usize) {
    if hi - lo <= 1 {
        return;
    }
    let mid = lo + (hi - lo) / 2;
    merge_sort_range(run, lo, mid);
    merge_sort_range(run, mid, hi);

    let left = run.values[lo..mid].to_vec();
    let right = run.values[mid..hi].to_vec();
    let (mut i, mut j, mut k) = (0, 0, lo);

    while i < left.len() && j < right.len() {
        run.compare(lo + i, mid + j);
        // Ties take from the left half, keeping the merge stable.
        if left[i] <= right[j] {
            run.place(k, left[i]);
            i += 1;
        } else {
            run.place(k, right[j]);
            j += 1;
        }
        k += 1;
    }
    while i < left.len() {
        run.place(k, left[i]);
        i += 1;
        k += 1;
    }
    while j < right.len() {
        run.place(k, right[j]);
        j += 1;
        k += 1;
    }
}

/// Heap sort: bottom-up max-heap construction, then repeated extraction of
/// the maximum to the end of the shrinking heap.
pub fn heap_sort(input: &[i64]) -> AlgorithmRun {
    let mut run = SortRun::new(input);
    let n = run.values.len();
    if n == 0 {
        return run.finish();
    }

    for start in (0..n / 2).rev() {
        sift_down(&mut run, start, n);
    }
    for end in (1..n).rev() {
        // The root is the heap maximum; equal values need no exchange.
        if run.values[0] != run.values[end] {
            run.swap(0, end);
        }
        run.mark_sorted(end);
        sift_down(&mut run, 0, end);
    }
    run.mark_sorted(0);
    run.finish()
}

/// Restore the max-heap property for the heap prefix `[0, end)` starting
/// from `root`.
fn sift_down(run: &mut SortRun, mut root: usize, end: usize) {
    loop {
        let child = 2 * root + 1;
        if child >= end {
            return;
        }

        let mut largest = root;
        run.compare(largest, child);
        if run.values[child] > run.values[largest] {
            largest = child;
        }
        if child + 1 < end {
            run.compare(largest, child + 1);
            if run.values[child + 1] > run.values[largest] {
                largest = child + 1;
            }
        }
        if largest == root {
            return;
        }
        run.swap(root, largest);
        root = largest;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::Step;
    use proptest::prelude::*;

    type SortFn = fn(&[i64]) -> AlgorithmRun;

    const SORTS: [(&str, SortFn); 4] = [
        ("bubble", bubble_sort),
        ("quick", quick_sort),
        ("merge", merge_sort),
        ("heap", heap_sort),
    ];

    fn final_values(run: &AlgorithmRun) -> Vec<i64> {
        match run.final_snapshot() {
            Snapshot::Array { values, .. } => values.clone(),
            other => panic!("sort produced a non-array snapshot: {other:?}"),
        }
    }

    fn mark_sorted_count(run: &AlgorithmRun) -> usize {
        run.steps()
            .iter()
            .filter(|s| s.kind == StepKind::MarkSorted)
            .count()
    }

    /// A swap step's snapshot holds the values after the exchange, so the
    /// two subject positions still hold the pair that was swapped.
    fn swapped_equal_values(step: &Step) -> bool {
        if step.kind != StepKind::Swap {
            return false;
        }
        let Snapshot::Array { values, .. } = &step.snapshot else {
            return false;
        };
        let (i, j) = (step.subjects[0] as usize, step.subjects[1] as usize);
        values[i] == values[j]
    }

    fn assert_sorts(input: &[i64]) {
        let mut expected = input.to_vec();
        expected.sort();

        for (name, sort) in SORTS {
            let run = sort(input);
            assert!(run.is_complete());
            assert_eq!(final_values(&run), expected, "{name} sort of {input:?}");
            assert_eq!(
                mark_sorted_count(&run),
                input.len(),
                "{name} sort of {input:?} must mark every index"
            );
            assert!(
                !run.steps().iter().any(swapped_equal_values),
                "{name} sort of {input:?} swapped equal elements"
            );
        }
    }

    #[test]
    fn sorts_the_classic_demo_array() {
        assert_sorts(&[64, 34, 25, 12, 22, 11, 90]);
    }

    #[test]
    fn sorts_edge_case_inputs() {
        assert_sorts(&[]);
        assert_sorts(&[5]);
        assert_sorts(&[7, 7, 7, 7]);
        assert_sorts(&[1, 2, 3, 4, 5]);
        assert_sorts(&[5, 4, 3, 2, 1]);
        assert_sorts(&[2, 1, 2, 1, 2]);
        assert_sorts(&[-3, 0, -3, 10]);
    }

    #[test]
    fn bubble_records_every_adjacent_comparison() {
        let run = bubble_sort(&[3, 2, 1]);
        let compares: Vec<Vec<i64>> = run
            .steps()
            .iter()
            .filter(|s| s.kind == StepKind::Compare)
            .map(|s| s.subjects.clone())
            .collect();
        // Pass 1: (0,1), (1,2); pass 2: (0,1).
        assert_eq!(
            compares,
            vec![vec![0, 1], vec![1, 2], vec![0, 1]]
        );
    }

    #[test]
    fn quick_sets_a_pivot_per_partition() {
        let run = quick_sort(&[3, 1, 4, 1, 5, 9, 2, 6]);
        assert!(run
            .steps()
            .iter()
            .any(|s| s.kind == StepKind::SetPivot));
    }

    #[test]
    fn merge_places_instead_of_swapping() {
        let run = merge_sort(&[4, 2, 7, 1]);
        assert!(run.steps().iter().any(|s| s.kind == StepKind::Insert));
        assert!(!run.steps().iter().any(|s| s.kind == StepKind::Swap));
    }

    #[test]
    fn runs_are_deterministic() {
        let input = [9, 4, 6, 2, 8];
        for (_, sort) in SORTS {
            assert_eq!(sort(&input), sort(&input));
        }
    }

    #[test]
    fn sorted_indices_accumulate_monotonically() {
        let run = heap_sort(&[5, 3, 8, 1]);
        let mut last_len = 0;
        for step in run.steps() {
            let Snapshot::Array { sorted, .. } = &step.snapshot else {
                unreachable!()
            };
            assert!(sorted.len() >= last_len);
            last_len = sorted.len();
        }
        assert_eq!(last_len, 4);
    }

    proptest! {
        #[test]
        fn all_sorts_agree_with_the_reference(
            input in prop::collection::vec(-100i64..100, 0..20)
        ) {
            let mut expected = input.clone();
            expected.sort();

            for (name, sort) in SORTS {
                let run = sort(&input);
                prop_assert_eq!(
                    final_values(&run), expected.clone(), "{} sort", name
                );
                prop_assert_eq!(mark_sorted_count(&run), input.len());
                prop_assert!(!run.steps().iter().any(swapped_equal_values));
            }
        }
    }
}
