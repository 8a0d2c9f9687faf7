use serde::Serialize;
use tracing::debug;

use crate::graph::{Graph, NodeIndex};

use super::coverage::CoverageRoute;

/// Drone assignment for every position of a coverage route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FleetAssignment {
    pub drone_count: usize,
    /// Drone flying out of each route position; parallel to the route steps.
    pub drone_ids: Vec<usize>,
    /// Route positions `i` where `drone_ids[i - 1] != drone_ids[i]`.
    pub boundaries: Vec<usize>,
    /// Distance flown by each drone. Edge `i -> i + 1` belongs to `drone_ids[i]`.
    pub drone_distances: Vec<f64>,
}

/// One entry of the hand-off expanded sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FleetStep {
    /// Position in the coverage route this entry refers to.
    pub position: usize,
    pub node: NodeIndex,
    pub drone: usize,
    /// `true` for the duplicated waypoint closing a departing drone's segment.
    pub handoff: bool,
}

impl FleetAssignment {
    pub fn handoff_count(&self) -> usize {
        self.boundaries.len()
    }

    /// Route expanded with the shared hand-off waypoints.
    ///
    /// Wherever the drone changes between positions `i` and `i + 1`, node
    /// `i + 1` is emitted once more under the departing drone right after
    /// position `i`, so consecutive segments share exactly one waypoint.
    pub fn handoff_sequence(&self, steps: &[NodeIndex]) -> Vec<FleetStep> {
        let mut sequence = Vec::with_capacity(steps.len() + self.boundaries.len());
        for (position, (&node, &drone)) in steps.iter().zip(&self.drone_ids).enumerate() {
            sequence.push(FleetStep {
                position,
                node,
                drone,
                handoff: false,
            });
            if let (Some(&next_node), Some(&next_drone)) =
                (steps.get(position + 1), self.drone_ids.get(position + 1))
            {
                if next_drone != drone {
                    sequence.push(FleetStep {
                        position: position + 1,
                        node: next_node,
                        drone,
                        handoff: true,
                    });
                }
            }
        }
        sequence
    }

    /// Waypoints flown by each drone, hand-off points included.
    pub fn segments(&self, steps: &[NodeIndex]) -> Vec<Vec<NodeIndex>> {
        let mut segments = vec![Vec::new(); self.drone_count];
        for step in self.handoff_sequence(steps) {
            segments[step.drone].push(step.node);
        }
        segments
    }
}

/// Split a coverage route into contiguous, distance-balanced drone segments.
///
/// Walks the route once, handing over to the next drone as soon as the
/// accumulated distance would pass that drone's share of the total. The
/// drone index never exceeds `drone_count - 1`; zero drones behaves like one.
pub fn partition_route(
    graph: &Graph,
    route: &CoverageRoute,
    drone_count: usize,
) -> FleetAssignment {
    let drone_count = drone_count.max(1);
    let steps = &route.steps;
    let mut drone_distances = vec![0.0; drone_count];

    if drone_count == 1 {
        drone_distances[0] = leg_weights(graph, steps).sum();
        return FleetAssignment {
            drone_count,
            drone_ids: vec![0; steps.len()],
            boundaries: Vec::new(),
            drone_distances,
        };
    }

    let target = route.total_weight / drone_count as f64;
    let mut drone_ids = Vec::with_capacity(steps.len());
    let mut boundaries = Vec::new();
    let mut accumulated = 0.0;
    let mut current_drone = 0usize;

    for (position, weight) in leg_weights(graph, steps).enumerate() {
        if accumulated + weight > target * (current_drone + 1) as f64 {
            let next_drone = (current_drone + 1).min(drone_count - 1);
            if next_drone != current_drone {
                // Advancing on the first leg leaves the previous drone nothing to hand over.
                if position > 0 {
                    debug!(position, drone = next_drone, accumulated, "drone hand-off");
                    boundaries.push(position);
                }
                current_drone = next_drone;
            }
        }
        drone_ids.push(current_drone);
        drone_distances[current_drone] += weight;
        accumulated += weight;
    }
    if !steps.is_empty() {
        drone_ids.push(current_drone);
    }

    FleetAssignment {
        drone_count,
        drone_ids,
        boundaries,
        drone_distances,
    }
}

fn leg_weights<'a>(graph: &'a Graph, steps: &'a [NodeIndex]) -> impl Iterator<Item = f64> + 'a {
    steps
        .windows(2)
        .map(move |pair| graph.edge_weight(pair[0], pair[1]).unwrap_or(0.0))
}
