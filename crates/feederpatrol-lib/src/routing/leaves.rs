use serde::Serialize;
use tracing::debug;

use crate::graph::{Graph, NodeIndex};
use crate::path::simple_paths;

/// Simple path together with its cumulative edge weight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightedPath {
    pub nodes: Vec<NodeIndex>,
    pub weight: f64,
}

impl WeightedPath {
    pub fn contains(&self, node: NodeIndex) -> bool {
        self.nodes.contains(&node)
    }
}

/// Enumerate every simple path from `start` to every leaf of the graph.
///
/// Leaves are visited in input order and each leaf's paths in depth-first
/// order, which fixes the enumeration order the worst-path tie-break relies
/// on. Unreachable leaves contribute nothing.
pub fn enumerate_leaf_paths(graph: &Graph, start: NodeIndex) -> Vec<WeightedPath> {
    if graph.neighbours(start).is_empty() {
        return Vec::new();
    }

    let leaves = graph.leaves();
    let mut all_paths = Vec::new();
    for leaf in leaves {
        let paths = simple_paths(graph, start, leaf);
        if paths.is_empty() {
            debug!(leaf = graph.node_id(leaf), "no path to leaf; skipping");
            continue;
        }
        all_paths.extend(paths.into_iter().map(|nodes| {
            let weight = path_weight(graph, &nodes);
            WeightedPath { nodes, weight }
        }));
    }
    all_paths
}

/// Leaves other than `start` that no enumerated path ends at.
pub(crate) fn unreachable_leaves(
    graph: &Graph,
    start: NodeIndex,
    paths: &[WeightedPath],
) -> Vec<NodeIndex> {
    graph
        .leaves()
        .into_iter()
        .filter(|&leaf| leaf != start)
        .filter(|leaf| !paths.iter().any(|path| path.nodes.last() == Some(leaf)))
        .collect()
}

/// Pick the heaviest path; the earliest one wins ties.
pub fn select_worst_path(paths: &[WeightedPath]) -> Option<&WeightedPath> {
    paths.iter().fold(None, |worst: Option<&WeightedPath>, path| match worst {
        Some(current) if path.weight <= current.weight => Some(current),
        _ => Some(path),
    })
}

fn path_weight(graph: &Graph, nodes: &[NodeIndex]) -> f64 {
    nodes
        .windows(2)
        .filter_map(|pair| graph.edge_weight(pair[0], pair[1]))
        .sum()
}
