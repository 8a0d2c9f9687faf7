//! Coverage planning for the drone fleet.
//!
//! This module provides:
//! - [`enumerate_leaf_paths`] / [`select_worst_path`] - the heaviest
//!   start-to-leaf branch the route should avoid re-walking
//! - [`build_coverage_route`] - greedy walk over every reachable node
//! - [`partition_route`] - contiguous, distance-balanced drone segments
//! - [`plan_coverage`] - runs the whole pipeline for a [`PlannerConfig`]
//!
//! # Example
//!
//! ```ignore
//! use feederpatrol_lib::{load_graph, plan_coverage, PlannerConfig};
//!
//! let loaded = load_graph("Generated_Files/mv_nodes_info.csv".as_ref())?;
//! let plan = plan_coverage(&loaded.graph, &PlannerConfig::default())?;
//! println!("{} waypoints, {} hand-offs", plan.route.steps.len(), plan.fleet.handoff_count());
//! ```

mod coverage;
mod fleet;
mod leaves;

pub use coverage::{build_coverage_route, CoverageRoute};
pub use fleet::{partition_route, FleetAssignment, FleetStep};
pub use leaves::{enumerate_leaf_paths, select_worst_path, WeightedPath};

use serde::Serialize;
use tracing::info;

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::error::{Error, Result};
use crate::graph::{Graph, NodeIndex};

/// Start node used when the caller does not name one.
pub const DEFAULT_START_NODE: &str = "21";
/// Fleet size used when the caller does not name one.
pub const DEFAULT_DRONE_COUNT: usize = 5;

/// Inputs of a planning run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerConfig {
    pub start_node: String,
    pub drone_count: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            start_node: DEFAULT_START_NODE.to_string(),
            drone_count: DEFAULT_DRONE_COUNT,
        }
    }
}

impl PlannerConfig {
    pub fn new(start_node: impl Into<String>, drone_count: usize) -> Self {
        Self {
            start_node: start_node.into(),
            drone_count,
        }
    }
}

/// Whether a plan covers every node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanStatus {
    Complete,
    /// The coverage walk stopped early; the route is usable but not exhaustive.
    Partial,
}

/// Everything a planning run produced.
#[derive(Debug, Clone)]
pub struct CoveragePlan {
    pub start: NodeIndex,
    pub worst_path: Option<WeightedPath>,
    pub route: CoverageRoute,
    pub fleet: FleetAssignment,
    pub diagnostics: Diagnostics,
}

impl CoveragePlan {
    pub fn status(&self) -> PlanStatus {
        if self.route.is_complete() {
            PlanStatus::Complete
        } else {
            PlanStatus::Partial
        }
    }

    pub fn is_on_worst_path(&self, node: NodeIndex) -> bool {
        self.worst_path
            .as_ref()
            .is_some_and(|worst| worst.contains(node))
    }
}

/// Resolve the configured start node, substituting the first node in input
/// order when it does not exist.
pub fn resolve_start(
    graph: &Graph,
    requested: &str,
    diagnostics: &mut Diagnostics,
) -> Result<NodeIndex> {
    if let Some(node) = graph.index_of(requested) {
        return Ok(node);
    }
    let fallback = graph.nodes().next().ok_or(Error::EmptyGraph)?;
    diagnostics.push(Diagnostic::StartNodeSubstituted {
        requested: requested.to_string(),
        used: graph.node_id(fallback).to_string(),
    });
    Ok(fallback)
}

/// Plan a coverage route over `graph` and split it across the fleet.
///
/// Only an empty graph is an error. Missing start nodes, missing leaf paths
/// and unreachable nodes are recorded on [`CoveragePlan::diagnostics`].
pub fn plan_coverage(graph: &Graph, config: &PlannerConfig) -> Result<CoveragePlan> {
    let mut diagnostics = Diagnostics::new();
    let start = resolve_start(graph, &config.start_node, &mut diagnostics)?;
    let start_id = graph.node_id(start).to_string();

    if graph.degree(start) == 0 && graph.len() > 1 {
        diagnostics.push(Diagnostic::StartNodeIsolated {
            node: start_id.clone(),
        });
    }

    info!(start = %start_id, "finding all paths to leaf nodes");
    let leaf_paths = enumerate_leaf_paths(graph, start);
    if graph.degree(start) > 0 {
        let missing = leaves::unreachable_leaves(graph, start, &leaf_paths);
        if !missing.is_empty() {
            diagnostics.push(Diagnostic::UnreachableLeaves {
                start: start_id.clone(),
                leaves: graph.ids(&missing).into_iter().map(str::to_string).collect(),
            });
        }
    }
    let worst_path = select_worst_path(&leaf_paths).cloned();
    match &worst_path {
        Some(worst) => info!(
            weight = worst.weight,
            path = %graph.ids(&worst.nodes).join(" -> "),
            "selected worst path"
        ),
        None => diagnostics.push(Diagnostic::NoLeafPaths {
            start: start_id.clone(),
        }),
    }

    let route = build_coverage_route(graph, start, worst_path.as_ref());
    if !route.is_complete() {
        let last = route.steps.last().copied().unwrap_or(start);
        diagnostics.push(Diagnostic::UnreachableNodes {
            from: graph.node_id(last).to_string(),
            nodes: graph
                .ids(&route.unreached)
                .into_iter()
                .map(str::to_string)
                .collect(),
        });
    }

    let fleet = partition_route(graph, &route, config.drone_count);
    info!(
        hops = route.hop_count(),
        total_weight = route.total_weight,
        handoffs = fleet.handoff_count(),
        "coverage plan ready"
    );

    Ok(CoveragePlan {
        start,
        worst_path,
        route,
        fleet,
        diagnostics,
    })
}
