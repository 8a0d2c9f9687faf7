use std::collections::HashSet;
use std::fs;
use std::path::Path;

use csv::WriterBuilder;
use serde::Serialize;
use tempfile::NamedTempFile;
use tracing::info;

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::routing::{CoveragePlan, PlanStatus};

/// Header of the exported assignment table.
pub const EXPORT_HEADER: [&str; 4] = ["NodeID", "X", "Y", "drone_id"];

/// Heaviest start-to-leaf path, by node identifier.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WorstPathSummary {
    pub nodes: Vec<String>,
    pub weight: f64,
}

/// One line of the hand-off expanded route.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StepSummary {
    /// 1-based line number in the expanded sequence.
    pub index: usize,
    pub node: String,
    pub drone: usize,
    pub on_worst_path: bool,
    pub handoff: bool,
}

/// Structured representation of a plan that consumers can serialise or render.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PlanSummary {
    pub status: PlanStatus,
    pub start: String,
    pub drone_count: usize,
    pub total_distance: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worst_path: Option<WorstPathSummary>,
    pub steps: Vec<StepSummary>,
    pub drone_distances: Vec<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unreached: Vec<String>,
    pub diagnostics: Diagnostics,
}

impl PlanSummary {
    /// Convert a [`CoveragePlan`] into a summary with resolved node identifiers.
    pub fn from_plan(graph: &Graph, plan: &CoveragePlan) -> Self {
        let worst_path = plan.worst_path.as_ref().map(|worst| WorstPathSummary {
            nodes: to_owned_ids(graph.ids(&worst.nodes)),
            weight: worst.weight,
        });

        let steps = plan
            .fleet
            .handoff_sequence(&plan.route.steps)
            .into_iter()
            .enumerate()
            .map(|(line, step)| StepSummary {
                index: line + 1,
                node: graph.node_id(step.node).to_string(),
                drone: step.drone,
                on_worst_path: plan.is_on_worst_path(step.node),
                handoff: step.handoff,
            })
            .collect();

        Self {
            status: plan.status(),
            start: graph.node_id(plan.start).to_string(),
            drone_count: plan.fleet.drone_count,
            total_distance: plan.route.total_weight,
            worst_path,
            steps,
            drone_distances: plan.fleet.drone_distances.clone(),
            unreached: to_owned_ids(graph.ids(&plan.route.unreached)),
            diagnostics: plan.diagnostics.clone(),
        }
    }
}

/// Row of the exported assignment table.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ExportRow {
    pub node_id: String,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub drone_id: usize,
}

/// Build the export table: one row per route position plus one duplicated
/// row per hand-off under the departing drone.
///
/// Nodes without coordinates are exported with empty cells and reported once.
pub fn export_rows(
    graph: &Graph,
    plan: &CoveragePlan,
    diagnostics: &mut Diagnostics,
) -> Vec<ExportRow> {
    let mut reported = HashSet::new();
    plan.fleet
        .handoff_sequence(&plan.route.steps)
        .into_iter()
        .map(|step| {
            let position = graph.position(step.node);
            if position.is_none() && reported.insert(step.node) {
                diagnostics.push(Diagnostic::MissingCoordinates {
                    node: graph.node_id(step.node).to_string(),
                });
            }
            ExportRow {
                node_id: graph.node_id(step.node).to_string(),
                x: position.map(|p| p.x),
                y: position.map(|p| p.y),
                drone_id: step.drone,
            }
        })
        .collect()
}

/// Write the assignment table to `destination`.
///
/// Rows go to a temporary file next to the destination which is then moved
/// into place, so readers never observe a partially written table.
pub fn write_assignment_csv(destination: &Path, rows: &[ExportRow]) -> Result<()> {
    let parent = match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let mut tmp = NamedTempFile::new_in(parent)?;
    {
        let mut writer = WriterBuilder::new().from_writer(tmp.as_file_mut());
        writer.write_record(EXPORT_HEADER)?;
        for row in rows {
            writer.write_record([
                row.node_id.clone(),
                format_coordinate(row.x),
                format_coordinate(row.y),
                row.drone_id.to_string(),
            ])?;
        }
        writer.flush()?;
    }
    tmp.persist(destination).map_err(|err| Error::Persist {
        path: destination.to_path_buf(),
        source: err.error,
    })?;

    info!(path = %destination.display(), rows = rows.len(), "path saved to CSV");
    Ok(())
}

fn format_coordinate(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn to_owned_ids(ids: Vec<&str>) -> Vec<String> {
    ids.into_iter().map(str::to_string).collect()
}
