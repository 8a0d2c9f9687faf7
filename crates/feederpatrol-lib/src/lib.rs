//! Feeder patrol library entry points.
//!
//! This crate loads a medium-voltage network node table into an in-memory
//! weighted graph, plans a single coverage walk over it that steers away from
//! the heaviest leaf branch, and splits that walk across a drone fleet with
//! shared hand-off waypoints. Higher-level consumers (the CLI, benchmarks)
//! should only depend on the functions exported here instead of
//! reimplementing behavior.
//!

#![deny(warnings)]

pub mod diagnostics;
pub mod error;
pub mod graph;
pub mod output;
pub mod path;
pub mod routing;
pub mod table;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use diagnostics::{Diagnostic, Diagnostics};
pub use error::{Error, Result};
pub use graph::{Edge, Graph, GraphBuilder, Node, NodeIndex, Position};
pub use output::{
    export_rows, write_assignment_csv, ExportRow, PlanSummary, StepSummary, WorstPathSummary,
    EXPORT_HEADER,
};
pub use path::{shortest_paths_from, simple_paths, ShortestPaths};
pub use routing::{
    build_coverage_route, enumerate_leaf_paths, partition_route, plan_coverage, resolve_start,
    select_worst_path, CoveragePlan, CoverageRoute, FleetAssignment, FleetStep, PlanStatus,
    PlannerConfig, WeightedPath, DEFAULT_DRONE_COUNT, DEFAULT_START_NODE,
};
pub use table::{load_graph, load_graph_from_reader, LoadedGraph};
