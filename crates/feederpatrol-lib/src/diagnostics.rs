//! Recoverable anomalies collected while loading and planning.
//!
//! Nothing in here aborts a run. Each diagnostic is logged when it is
//! recorded and kept on the result so callers can tell a complete plan from
//! a usable partial one.

use std::fmt;

use serde::Serialize;
use tracing::warn;

/// A single recoverable anomaly.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// Row skipped entirely (for example a blank identifier).
    MalformedRow { row: u64, reason: String },
    /// Coordinates could not be parsed; the node is kept without a position.
    MalformedCoordinates { row: u64, node: String, raw: String },
    /// Neither the structured nor the fallback parser understood the cell.
    MalformedEdgeWeights { row: u64, node: String, raw: String },
    /// An edge was dropped (self loop, negative or non-finite weight).
    InvalidEdge {
        row: u64,
        from: String,
        to: String,
        reason: String,
    },
    /// The requested start node does not exist and another one was used.
    StartNodeSubstituted { requested: String, used: String },
    /// The start node has no incident edges.
    StartNodeIsolated { node: String },
    /// No start-to-leaf path exists, so there is no worst path to avoid.
    NoLeafPaths { start: String },
    /// Leaves with no simple path from the start node; they cannot hold the worst path.
    UnreachableLeaves { start: String, leaves: Vec<String> },
    /// The coverage walk stopped early; these nodes were never reached.
    UnreachableNodes { from: String, nodes: Vec<String> },
    /// A node in the exported sequence has no coordinates.
    MissingCoordinates { node: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MalformedRow { row, reason } => {
                write!(f, "row {row} skipped: {reason}")
            }
            Diagnostic::MalformedCoordinates { row, node, raw } => write!(
                f,
                "row {row}: node {node} has unparsable coordinates '{raw}'"
            ),
            Diagnostic::MalformedEdgeWeights { row, node, raw } => write!(
                f,
                "row {row}: edge distances for node {node} could not be parsed ('{raw}'); treating as empty"
            ),
            Diagnostic::InvalidEdge {
                row,
                from,
                to,
                reason,
            } => write!(f, "row {row}: dropped edge {from} -> {to}: {reason}"),
            Diagnostic::StartNodeSubstituted { requested, used } => write!(
                f,
                "starting node '{requested}' not found in the graph; using first available node '{used}'"
            ),
            Diagnostic::StartNodeIsolated { node } => {
                write!(f, "starting node '{node}' has no connections")
            }
            Diagnostic::NoLeafPaths { start } => {
                write!(f, "no paths from {start} to leaf nodes found")
            }
            Diagnostic::UnreachableLeaves { start, leaves } => write!(
                f,
                "no path from {start} to {} leaf nodes; skipped: {}",
                leaves.len(),
                leaves.join(", ")
            ),
            Diagnostic::UnreachableNodes { from, nodes } => write!(
                f,
                "cannot reach any remaining nodes from {from}; {} unreached: {}",
                nodes.len(),
                nodes.join(", ")
            ),
            Diagnostic::MissingCoordinates { node } => {
                write!(f, "node {node} has no coordinates; exporting empty cells")
            }
        }
    }
}

/// Ordered collection of diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic and emit it as a warning.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        warn!("{diagnostic}");
        self.0.push(diagnostic);
    }

    /// Append already-logged diagnostics from another collection.
    pub fn extend(&mut self, other: Diagnostics) {
        self.0.extend(other.0);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}
