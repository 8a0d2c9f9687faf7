//! Rendering of plan summaries for the terminal.

use std::fmt::Write as _;

use clap::ValueEnum;
use feederpatrol_lib::{PlanStatus, PlanSummary};

use crate::terminal::ColorPalette;

/// Output format for the plan summary on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable listing.
    #[default]
    Text,
    /// Pretty-printed JSON summary.
    Json,
}

/// Render a plan summary as the human-readable console listing.
///
/// Worst-path nodes carry a `* ` marker and hand-off waypoints are suffixed
/// with `[Overlap]`.
pub fn render_text(summary: &PlanSummary, palette: &ColorPalette) -> String {
    let p = palette;
    let mut out = String::new();

    match &summary.worst_path {
        Some(worst) => {
            let _ = writeln!(
                out,
                "{}Worst path (weight {}):{}",
                p.heading, worst.weight, p.reset
            );
            let _ = writeln!(out, "{}{}{}", p.worst, worst.nodes.join(" -> "), p.reset);
        }
        None => {
            let _ = writeln!(out, "No paths to leaf nodes found.");
        }
    }

    let _ = writeln!(out, "\n{}Smart path sequence:{}", p.heading, p.reset);
    for step in &summary.steps {
        let node = if step.on_worst_path {
            format!("{}* {}{}", p.worst, step.node, p.reset)
        } else {
            step.node.clone()
        };
        let overlap = if step.handoff {
            format!(" {}[Overlap]{}", p.handoff, p.reset)
        } else {
            String::new()
        };
        let _ = writeln!(
            out,
            "{}{}.{} {} {}(Drone {}){}{}",
            p.muted, step.index, p.reset, node, p.muted, step.drone, p.reset, overlap
        );
    }

    let _ = writeln!(out, "\n{}Distances per drone:{}", p.heading, p.reset);
    for (drone, distance) in summary.drone_distances.iter().enumerate() {
        let _ = writeln!(out, "Drone {drone}: {distance} meters");
    }

    let _ = writeln!(
        out,
        "\n{}Total path distance: {} meters{}",
        p.heading, summary.total_distance, p.reset
    );
    let _ = writeln!(out, "{}", status_line(summary, p));
    out
}

/// Render a plan summary as pretty-printed JSON.
pub fn render_json(summary: &PlanSummary) -> serde_json::Result<String> {
    serde_json::to_string_pretty(summary)
}

fn status_line(summary: &PlanSummary, p: &ColorPalette) -> String {
    let handoffs = summary.steps.iter().filter(|s| s.handoff).count();
    match summary.status {
        PlanStatus::Complete => format!(
            "{}Status: complete{} ({} waypoints, {} hand-offs)",
            p.complete,
            p.reset,
            summary.steps.len(),
            handoffs
        ),
        PlanStatus::Partial => format!(
            "{}Status: partial{} ({} unreached: {})",
            p.partial,
            p.reset,
            summary.unreached.len(),
            summary.unreached.join(", ")
        ),
    }
}
