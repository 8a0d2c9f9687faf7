use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;

/// Arena index of a node inside a [`Graph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct NodeIndex(pub usize);

impl fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Normalized planar coordinates in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Node within the feeder graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: String,
    pub position: Option<Position>,
}

/// Undirected edge as seen from one endpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub target: NodeIndex,
    pub weight: f64,
}

/// Weighted undirected graph used by the planners.
///
/// Nodes and adjacency lists keep first-insertion order. Every traversal in
/// the crate walks them in that order, so identical input tables always
/// produce identical plans.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Arc<Vec<Node>>,
    index: Arc<HashMap<String, NodeIndex>>,
    adjacency: Arc<Vec<Vec<Edge>>>,
}

impl Graph {
    /// Start building a graph.
    pub fn builder() -> GraphBuilder {
        GraphBuilder::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Resolve a node identifier to its arena index.
    pub fn index_of(&self, id: &str) -> Option<NodeIndex> {
        self.index.get(id).copied()
    }

    pub fn node_id(&self, node: NodeIndex) -> &str {
        &self.nodes[node.0].id
    }

    pub fn position(&self, node: NodeIndex) -> Option<Position> {
        self.nodes[node.0].position
    }

    /// Iterate node indices in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        (0..self.nodes.len()).map(NodeIndex)
    }

    /// Return the neighbours for a given node.
    pub fn neighbours(&self, node: NodeIndex) -> &[Edge] {
        self.adjacency
            .get(node.0)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn degree(&self, node: NodeIndex) -> usize {
        self.neighbours(node).len()
    }

    /// Weight of the edge between `a` and `b`, if they are adjacent.
    pub fn edge_weight(&self, a: NodeIndex, b: NodeIndex) -> Option<f64> {
        self.neighbours(a)
            .iter()
            .find(|edge| edge.target == b)
            .map(|edge| edge.weight)
    }

    /// Nodes with exactly one incident edge, in insertion order.
    pub fn leaves(&self) -> Vec<NodeIndex> {
        self.nodes().filter(|&node| self.degree(node) == 1).collect()
    }

    /// Map a sequence of indices back to their identifiers.
    pub fn ids(&self, nodes: &[NodeIndex]) -> Vec<&str> {
        nodes.iter().map(|&node| self.node_id(node)).collect()
    }
}

/// Incremental constructor for [`Graph`].
#[derive(Debug, Default)]
pub struct GraphBuilder {
    nodes: Vec<Node>,
    index: HashMap<String, NodeIndex>,
    adjacency: Vec<Vec<Edge>>,
}

impl GraphBuilder {
    /// Insert a node, or update the position of an existing one.
    ///
    /// Updating never moves the node within the insertion order.
    pub fn add_node(&mut self, id: &str, position: Option<Position>) -> NodeIndex {
        let node = self.intern(id);
        if position.is_some() {
            self.nodes[node.0].position = position;
        }
        node
    }

    /// Insert an undirected edge, creating missing endpoints.
    ///
    /// Re-inserting an existing edge overwrites its weight in place. Self
    /// loops and negative or non-finite weights are ignored.
    pub fn add_edge(&mut self, a: &str, b: &str, weight: f64) -> bool {
        if a == b || !weight.is_finite() || weight < 0.0 {
            return false;
        }
        let a = self.intern(a);
        let b = self.intern(b);
        self.upsert(a, b, weight);
        self.upsert(b, a, weight);
        true
    }

    pub fn build(self) -> Graph {
        Graph {
            nodes: Arc::new(self.nodes),
            index: Arc::new(self.index),
            adjacency: Arc::new(self.adjacency),
        }
    }

    fn intern(&mut self, id: &str) -> NodeIndex {
        if let Some(&existing) = self.index.get(id) {
            return existing;
        }
        let node = NodeIndex(self.nodes.len());
        self.nodes.push(Node {
            id: id.to_string(),
            position: None,
        });
        self.adjacency.push(Vec::new());
        self.index.insert(id.to_string(), node);
        node
    }

    fn upsert(&mut self, from: NodeIndex, to: NodeIndex, weight: f64) {
        let edges = &mut self.adjacency[from.0];
        if let Some(existing) = edges.iter_mut().find(|edge| edge.target == to) {
            existing.weight = weight;
        } else {
            edges.push(Edge { target: to, weight });
        }
    }
}
