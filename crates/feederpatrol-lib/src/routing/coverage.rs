use serde::Serialize;
use tracing::debug;

use crate::graph::{Graph, NodeIndex};
use crate::path::shortest_paths_from;

use super::leaves::WeightedPath;

/// Walk that visits every node reachable from its first step.
///
/// Consecutive steps are always adjacent in the graph. Nodes may repeat.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverageRoute {
    pub steps: Vec<NodeIndex>,
    pub total_weight: f64,
    /// Nodes still unvisited when the walk had to stop.
    pub unreached: Vec<NodeIndex>,
}

impl CoverageRoute {
    pub fn is_complete(&self) -> bool {
        self.unreached.is_empty()
    }

    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Best next target found during one outer iteration.
struct Candidate {
    target: NodeIndex,
    overlap: usize,
    length: f64,
    path: Vec<NodeIndex>,
}

impl Candidate {
    fn beats(&self, other: &Candidate) -> bool {
        (self.overlap, self.length) < (other.overlap, other.length)
    }
}

/// Greedily grow a walk from `start` until every node has been visited.
///
/// Each iteration computes shortest paths from the current position to all
/// unvisited nodes and moves to the one whose path touches the fewest
/// worst-path nodes, then the shortest. Ties go to the earliest node in
/// input order. When nothing remaining is reachable the walk stops and the
/// leftovers end up in [`CoverageRoute::unreached`].
pub fn build_coverage_route(
    graph: &Graph,
    start: NodeIndex,
    worst: Option<&WeightedPath>,
) -> CoverageRoute {
    let mut on_worst = vec![false; graph.len()];
    if let Some(worst) = worst {
        for node in &worst.nodes {
            on_worst[node.0] = true;
        }
    }

    let mut visited = vec![false; graph.len()];
    visited[start.0] = true;
    let mut remaining = graph.len().saturating_sub(1);

    let mut steps = vec![start];
    let mut total_weight = 0.0;
    let mut current = start;

    while remaining > 0 {
        let paths = shortest_paths_from(graph, current);

        let mut best: Option<Candidate> = None;
        for target in graph.nodes().filter(|node| !visited[node.0]) {
            let (Some(length), Some(path)) = (paths.distance(target), paths.path_to(target))
            else {
                continue;
            };
            let overlap = path.iter().filter(|node| on_worst[node.0]).count();
            let candidate = Candidate {
                target,
                overlap,
                length,
                path,
            };
            let better = match &best {
                Some(incumbent) => candidate.beats(incumbent),
                None => true,
            };
            if better {
                best = Some(candidate);
            }
        }

        let Some(best) = best else {
            debug!(from = graph.node_id(current), remaining, "coverage walk stalled");
            break;
        };

        for &node in &best.path[1..] {
            if !visited[node.0] {
                visited[node.0] = true;
                remaining -= 1;
            }
        }
        steps.extend_from_slice(&best.path[1..]);
        total_weight += best.length;
        current = best.target;
    }

    let unreached = graph.nodes().filter(|node| !visited[node.0]).collect();

    CoverageRoute {
        steps,
        total_weight,
        unreached,
    }
}
