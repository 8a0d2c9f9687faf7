mod common;

use feederpatrol_lib::{
    plan_coverage, CoveragePlan, Diagnostic, Graph, PlanStatus, PlannerConfig,
};

use common::load_fixture;

fn plan_fixture(config: &PlannerConfig) -> (Graph, CoveragePlan) {
    let loaded = load_fixture("feeder_nodes.csv");
    let plan = plan_coverage(&loaded.graph, config).expect("fixture plans");
    (loaded.graph, plan)
}

#[test]
fn worst_path_follows_heaviest_branch() {
    let (graph, plan) = plan_fixture(&PlannerConfig::default());

    let worst = plan.worst_path.as_ref().expect("fixture has leaves");
    assert_eq!(graph.ids(&worst.nodes), vec!["21", "30", "31", "32", "33"]);
    assert_eq!(worst.weight, 630.0);
}

#[test]
fn route_covers_every_node_and_leaves_worst_branch_for_last() {
    let (graph, plan) = plan_fixture(&PlannerConfig::default());

    assert_eq!(plan.status(), PlanStatus::Complete);
    assert!(plan.diagnostics.is_empty(), "{:?}", plan.diagnostics);
    assert_eq!(
        graph.ids(&plan.route.steps),
        vec![
            "21", "22", "25", "22", "23", "24", "23", "22", "21", "20", "19", "20", "21", "30",
            "31", "32", "33"
        ]
    );
    assert_eq!(plan.route.total_weight, 1810.0);
    for node in graph.nodes() {
        assert!(plan.route.steps.contains(&node), "{} not visited", graph.node_id(node));
    }
    for pair in plan.route.steps.windows(2) {
        assert!(graph.edge_weight(pair[0], pair[1]).is_some());
    }
}

#[test]
fn five_drones_share_the_route() {
    let (_, plan) = plan_fixture(&PlannerConfig::new("21", 5));
    let fleet = &plan.fleet;

    assert_eq!(fleet.boundaries, vec![4, 8, 11, 14]);
    assert_eq!(
        fleet.drone_ids,
        vec![0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4]
    );
    assert_eq!(fleet.drone_distances, vec![290.0, 430.0, 310.0, 410.0, 370.0]);
    let sum: f64 = fleet.drone_distances.iter().sum();
    assert_eq!(sum, plan.route.total_weight);
    assert!(fleet.drone_ids.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[test]
fn one_drone_flies_the_whole_route() {
    let (_, plan) = plan_fixture(&PlannerConfig::new("21", 1));

    assert!(plan.fleet.drone_ids.iter().all(|&d| d == 0));
    assert!(plan.fleet.boundaries.is_empty());
    assert_eq!(plan.fleet.drone_distances, vec![plan.route.total_weight]);
}

#[test]
fn consecutive_segments_share_their_handoff_waypoint() {
    let (_, plan) = plan_fixture(&PlannerConfig::default());

    let segments = plan.fleet.segments(&plan.route.steps);
    assert_eq!(segments.len(), 5);
    for pair in segments.windows(2) {
        assert_eq!(pair[0].last(), pair[1].first());
    }
}

#[test]
fn repeated_runs_are_identical() {
    let (_, first) = plan_fixture(&PlannerConfig::default());
    let (_, second) = plan_fixture(&PlannerConfig::default());

    assert_eq!(first.route, second.route);
    assert_eq!(first.fleet, second.fleet);
}

#[test]
fn unknown_start_node_falls_back_to_first_row() {
    let (graph, plan) = plan_fixture(&PlannerConfig::new("999", 5));

    assert_eq!(graph.node_id(plan.start), "21");
    assert!(matches!(
        plan.diagnostics.iter().next(),
        Some(Diagnostic::StartNodeSubstituted { requested, used }) if requested == "999" && used == "21"
    ));
    assert_eq!(plan.status(), PlanStatus::Complete);
}

#[test]
fn disconnected_network_produces_partial_plan() {
    let loaded = load_fixture("disconnected_nodes.csv");
    let graph = &loaded.graph;
    let plan = plan_coverage(graph, &PlannerConfig::new("1", 2)).expect("partial plan");

    assert_eq!(plan.status(), PlanStatus::Partial);
    assert_eq!(graph.ids(&plan.route.steps), vec!["1", "2", "3"]);
    assert_eq!(graph.ids(&plan.route.unreached), vec!["90", "91"]);
    assert_eq!(plan.route.total_weight, 75.0);
    assert!(plan.diagnostics.iter().any(|d| matches!(
        d,
        Diagnostic::UnreachableLeaves { leaves, .. } if leaves == &["90", "91"]
    )));
    assert!(plan.diagnostics.iter().any(|d| matches!(
        d,
        Diagnostic::UnreachableNodes { from, nodes } if from == "3" && nodes == &["90", "91"]
    )));
}
