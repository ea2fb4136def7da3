//! Weighted undirected graphs and step-recorded Dijkstra shortest paths.

use crate::error::{InputError, Result};
use crate::recorder::StepRecorder;
use crate::step::{AlgorithmRun, Snapshot, StepKind};

/// An undirected edge with a non-negative weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    pub weight: u64,
}

/// A small weighted undirected graph with nodes `0..node_count`.
#[derive(Debug, Clone)]
pub struct Graph {
    node_count: usize,
    edges: Vec<Edge>,
}

impl Graph {
    /// Create a graph. Edge endpoints must name existing nodes.
    pub fn new(node_count: usize, edges: Vec<Edge>) -> Self {
        debug_assert!(
            edges.iter().all(|e| e.from < node_count && e.to < node_count),
            "edge endpoints must be < node_count"
        );
        Self { node_count, edges }
    }

    /// The 4-node demo graph from the course material.
    pub fn demo() -> Self {
        Self::new(
            4,
            vec![
                Edge { from: 0, to: 1, weight: 4 },
                Edge { from: 0, to: 2, weight: 2 },
                Edge { from: 1, to: 2, weight: 1 },
                Edge { from: 1, to: 3, weight: 5 },
                Edge { from: 2, to: 3, weight: 3 },
            ],
        )
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// All edges.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    fn snapshot(
        distances: &[Option<u64>],
        previous: &[Option<usize>],
        visited: &[bool],
    ) -> Snapshot {
        Snapshot::Graph {
            distances: distances.to_vec(),
            previous: previous.to_vec(),
            visited: visited.to_vec(),
        }
    }

    /// Run Dijkstra's algorithm from `start`.
    ///
    /// Each round selects the unvisited node of minimum tentative distance
    /// (ties broken by lowest node id), records a `Visit` step, then
    /// records a `Compare` step for every successful edge relaxation. A
    /// node that stays at distance `None` is unreachable; that is the
    /// expected sentinel, never an error.
    pub fn dijkstra(&self, start: usize) -> Result<AlgorithmRun> {
        if start >= self.node_count {
            return Err(InputError::UnknownStartNode(start, self.node_count));
        }

        let n = self.node_count;
        let mut distances: Vec<Option<u64>> = vec![None; n];
        let mut previous: Vec<Option<usize>> = vec![None; n];
        let mut visited = vec![false; n];
        distances[start] = Some(0);

        let mut rec = StepRecorder::new(Self::snapshot(&distances, &previous, &visited));

        // Selecting the minimum over (distance, id) pairs breaks distance
        // ties toward the lowest node id.
        while let Some((dist, node)) = (0..n)
            .filter(|&i| !visited[i])
            .filter_map(|i| distances[i].map(|d| (d, i)))
            .min()
        {
            visited[node] = true;
            rec.record(
                StepKind::Visit,
                vec![node as i64],
                Self::snapshot(&distances, &previous, &visited),
                format!("Visiting node {node} (distance {dist})"),
            );

            for edge in &self.edges {
                let neighbor = if edge.from == node {
                    edge.to
                } else if edge.to == node {
                    edge.from
                } else {
                    continue;
                };
                if visited[neighbor] {
                    continue;
                }
                let candidate = dist + edge.weight;
                if distances[neighbor].map_or(true, |d| candidate < d) {
                    distances[neighbor] = Some(candidate);
                    previous[neighbor] = Some(node);
                    rec.record(
                        StepKind::Compare,
                        vec![node as i64, neighbor as i64],
                        Self::snapshot(&distances, &previous, &visited),
                        format!("Relaxed edge {node} \u{2192} {neighbor}: node {neighbor} now at distance {candidate}"),
                    );
                }
            }
        }

        Ok(rec.finish())
    }
}

/// Reconstruct the path from `start` to `target` out of a final `previous`
/// array. Returns `None` when `target` was never reached.
pub fn shortest_path(
    previous: &[Option<usize>],
    start: usize,
    target: usize,
) -> Option<Vec<usize>> {
    let mut path = vec![target];
    let mut cursor = target;
    while cursor != start {
        cursor = previous.get(cursor).copied().flatten()?;
        path.push(cursor);
    }
    path.reverse();
    Some(path)
}
