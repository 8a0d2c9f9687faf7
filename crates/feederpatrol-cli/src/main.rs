use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use feederpatrol_cli::output::{render_json, render_text, OutputFormat};
use feederpatrol_cli::terminal::{supports_color, ColorPalette};
use feederpatrol_lib::{
    export_rows, load_graph, plan_coverage, write_assignment_csv, PlanSummary, PlannerConfig,
    DEFAULT_DRONE_COUNT, DEFAULT_START_NODE,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Drone coverage planning for medium-voltage feeders")]
struct Cli {
    /// Disable ANSI colors in terminal output.
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Plan a coverage route over the node table and split it across the fleet.
    Plan(PlanArgs),
}

#[derive(clap::Args, Debug)]
struct PlanArgs {
    /// Node table with connections and edge distances.
    #[arg(long, default_value = "Generated_Files/mv_nodes_info.csv")]
    input: PathBuf,
    /// Destination of the per-waypoint drone assignment table.
    #[arg(long, default_value = "Generated_Files/drone_path.csv")]
    output_csv: PathBuf,
    /// Node identifier the fleet launches from.
    #[arg(long, default_value = DEFAULT_START_NODE)]
    start_node: String,
    /// Number of drones sharing the route.
    #[arg(long, default_value_t = DEFAULT_DRONE_COUNT)]
    num_drones: usize,
    /// Format of the summary printed to stdout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let use_color = !cli.no_color && supports_color();
    init_tracing(use_color);

    match cli.command {
        Command::Plan(args) => handle_plan(&args, use_color),
    }
}

fn handle_plan(args: &PlanArgs, use_color: bool) -> Result<()> {
    info!(path = %args.input.display(), "loading node table");
    let loaded = load_graph(&args.input)
        .with_context(|| format!("failed to load node table from {}", args.input.display()))?;

    let config = PlannerConfig::new(args.start_node.clone(), args.num_drones);
    let plan = plan_coverage(&loaded.graph, &config).context("failed to plan coverage route")?;

    let mut diagnostics = loaded.diagnostics;
    diagnostics.extend(plan.diagnostics.clone());
    let rows = export_rows(&loaded.graph, &plan, &mut diagnostics);
    write_assignment_csv(&args.output_csv, &rows).with_context(|| {
        format!(
            "failed to write drone assignment to {}",
            args.output_csv.display()
        )
    })?;

    let mut summary = PlanSummary::from_plan(&loaded.graph, &plan);
    summary.diagnostics = diagnostics;

    match args.format {
        OutputFormat::Text => {
            let palette = if use_color {
                ColorPalette::colored()
            } else {
                ColorPalette::plain()
            };
            print!("{}", render_text(&summary, &palette));
            println!("Path saved to CSV in {}", args.output_csv.display());
        }
        OutputFormat::Json => {
            let json = render_json(&summary).context("failed to serialise plan summary")?;
            println!("{json}");
        }
    }

    Ok(())
}

fn init_tracing(ansi: bool) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
