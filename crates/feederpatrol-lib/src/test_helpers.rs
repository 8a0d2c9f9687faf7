// Test-only helpers for `feederpatrol-lib` unit tests
#![allow(dead_code)]
use crate::graph::{Graph, NodeIndex, Position};

/// Build a graph from `(a, b, weight)` triples, inserting nodes in first-seen order.
pub fn graph_from_edges(edges: &[(&str, &str, f64)]) -> Graph {
    let mut builder = Graph::builder();
    for (a, b, weight) in edges {
        builder.add_edge(a, b, *weight);
    }
    builder.build()
}

/// Star graph centred on `"c"` with one leaf per weight, named `l0`, `l1`, ...
pub fn star(weights: &[f64]) -> Graph {
    let mut builder = Graph::builder();
    builder.add_node("c", Some(Position::new(0.0, 0.0)));
    for (i, weight) in weights.iter().enumerate() {
        let leaf = format!("l{i}");
        builder.add_node(&leaf, Some(Position::new(*weight, i as f64)));
        builder.add_edge("c", &leaf, *weight);
    }
    builder.build()
}

/// Straight chain `n0 - n1 - ... - n{len}` where every edge weighs `weight`.
pub fn chain(len: usize, weight: f64) -> Graph {
    let mut builder = Graph::builder();
    for i in 0..=len {
        builder.add_node(&format!("n{i}"), Some(Position::new(i as f64 * weight, 0.0)));
    }
    for i in 0..len {
        builder.add_edge(&format!("n{i}"), &format!("n{}", i + 1), weight);
    }
    builder.build()
}

/// Resolve a list of identifiers to indices, panicking on unknown ids.
pub fn indices(graph: &Graph, ids: &[&str]) -> Vec<NodeIndex> {
    ids.iter()
        .map(|id| graph.index_of(id).expect("node exists"))
        .collect()
}
