use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::graph::{Graph, NodeIndex};

/// Result of a single-source Dijkstra run.
///
/// Holds the settled distance and the predecessor of every node reachable
/// from `source`.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    source: NodeIndex,
    distances: Vec<Option<f64>>,
    parents: Vec<Option<NodeIndex>>,
}

impl ShortestPaths {
    /// Shortest distance from the source, or `None` when unreachable.
    pub fn distance(&self, target: NodeIndex) -> Option<f64> {
        self.distances.get(target.0).copied().flatten()
    }

    /// Node sequence from the source to `target`, both ends included.
    pub fn path_to(&self, target: NodeIndex) -> Option<Vec<NodeIndex>> {
        self.distance(target)?;
        Some(reconstruct_path(&self.parents, self.source, target))
    }
}

/// Run Dijkstra's algorithm from `source` over the whole graph.
///
/// Relaxation only accepts strictly shorter distances and equal-cost heap
/// entries pop in push order, so among several equally short paths the one
/// discovered first is kept.
pub fn shortest_paths_from(graph: &Graph, source: NodeIndex) -> ShortestPaths {
    let count = graph.len();
    let mut settled: Vec<Option<f64>> = vec![None; count];
    let mut tentative: Vec<Option<f64>> = vec![None; count];
    let mut parents: Vec<Option<NodeIndex>> = vec![None; count];
    let mut queue = BinaryHeap::new();
    let mut sequence = 0u64;

    tentative[source.0] = Some(0.0);
    queue.push(QueueEntry::new(source, 0.0, sequence));

    while let Some(entry) = queue.pop() {
        if settled[entry.node.0].is_some() {
            continue;
        }
        let current_distance = entry.cost.0;
        settled[entry.node.0] = Some(current_distance);

        for edge in graph.neighbours(entry.node) {
            let next = edge.target;
            if settled[next.0].is_some() {
                continue;
            }

            let next_cost = current_distance + edge.weight;
            let improves = match tentative[next.0] {
                Some(known) => next_cost < known,
                None => true,
            };
            if improves {
                tentative[next.0] = Some(next_cost);
                parents[next.0] = Some(entry.node);
                sequence += 1;
                queue.push(QueueEntry::new(next, next_cost, sequence));
            }
        }
    }

    ShortestPaths {
        source,
        distances: settled,
        parents,
    }
}

/// Enumerate every simple path from `source` to `target`.
///
/// Depth-first with backtracking; neighbours are explored in adjacency order
/// and a path never continues through `target`. Returns nothing when
/// `source == target`.
pub fn simple_paths(graph: &Graph, source: NodeIndex, target: NodeIndex) -> Vec<Vec<NodeIndex>> {
    let mut found = Vec::new();
    if source == target {
        return found;
    }

    let mut on_path = vec![false; graph.len()];
    let mut path = vec![source];
    // Each frame remembers which neighbour of the node on top of `path` to try next.
    let mut cursors = vec![0usize];
    on_path[source.0] = true;

    while let Some(&cursor) = cursors.last() {
        let current = *path.last().unwrap_or(&source);
        let neighbours = graph.neighbours(current);

        let Some(edge) = neighbours.get(cursor) else {
            cursors.pop();
            if let Some(done) = path.pop() {
                on_path[done.0] = false;
            }
            continue;
        };
        if let Some(next) = cursors.last_mut() {
            *next += 1;
        }

        let child = edge.target;
        if on_path[child.0] {
            continue;
        }
        if child == target {
            let mut complete = path.clone();
            complete.push(child);
            found.push(complete);
            continue;
        }

        on_path[child.0] = true;
        path.push(child);
        cursors.push(0);
    }

    found
}

fn reconstruct_path(
    parents: &[Option<NodeIndex>],
    start: NodeIndex,
    goal: NodeIndex,
) -> Vec<NodeIndex> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(node) = current {
        path.push(node);
        if node == start {
            break;
        }
        current = parents.get(node.0).copied().flatten();
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: NodeIndex,
    cost: FloatOrd,
    sequence: u64,
}

impl QueueEntry {
    fn new(node: NodeIndex, cost: f64, sequence: u64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
            sequence,
        }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by (cost, push order).
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
