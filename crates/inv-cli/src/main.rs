//! invstat CLI

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use inv_table::{inventory, Frame, UploadStore};

mod report;

#[derive(Parser)]
#[command(name = "invstat")]
#[command(about = "invstat - inventory analytics from CSV uploads")]
#[command(version)]
struct Cli {
    /// Log verbosity level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: tracing::Level,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Preview the first rows of an inventory table
    Preview {
        /// Input inventory table (CSV)
        #[arg(short, long)]
        input: PathBuf,

        /// Number of rows to preview
        #[arg(long, default_value = "10")]
        rows: usize,

        /// Output file for results (pretty JSON). Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Summary statistics for every numeric column
    Describe {
        /// Input inventory table (CSV)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file for results (pretty JSON). Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Distinct locations, in first-seen order
    Locations {
        /// Input inventory table (CSV)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file for results (pretty JSON). Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Filter the table to one location
    Filter {
        /// Input inventory table (CSV)
        #[arg(short, long)]
        input: PathBuf,

        /// Location to filter to
        #[arg(short, long)]
        location: String,

        /// Output file for results (pretty JSON). Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Per-category sum of Count over the whole table
    Aggregate {
        /// Input inventory table (CSV)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file for results (pretty JSON). Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Total Count and Value for one location's view
    Insights {
        /// Input inventory table (CSV)
        #[arg(short, long)]
        input: PathBuf,

        /// Location to filter to
        #[arg(short, long)]
        location: String,

        /// Output file for results (pretty JSON). Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Chart artifacts (JSON chart descriptions)
    Viz {
        #[command(subcommand)]
        command: VizCommands,
    },

    /// Save a CSV into the uploads directory, then parse it
    Ingest {
        /// Input inventory table (CSV)
        #[arg(short, long)]
        input: PathBuf,

        /// Uploads directory (created if absent)
        #[arg(long, default_value = "uploads")]
        uploads_dir: PathBuf,

        /// Output file for results (pretty JSON). Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write a full render-cycle bundle to a directory
    Report {
        /// Input inventory table (CSV)
        #[arg(short, long)]
        input: PathBuf,

        /// Location to filter to. Defaults to the first listed location.
        #[arg(short, long)]
        location: Option<String>,

        /// Bundle directory (must be empty or absent)
        #[arg(long)]
        output_dir: PathBuf,
    },

    /// Print version
    Version,
}

#[derive(Subcommand)]
enum VizCommands {
    /// Bar chart of Item x Count for one location
    Bar {
        /// Input inventory table (CSV)
        #[arg(short, long)]
        input: PathBuf,

        /// Location to filter to
        #[arg(short, long)]
        location: String,

        /// Output file for results (pretty JSON). Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Pie chart of category share over the whole table
    Pie {
        /// Input inventory table (CSV)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file for results (pretty JSON). Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Scatter of Value x Count for one location, colored by category
    Scatter {
        /// Input inventory table (CSV)
        #[arg(short, long)]
        input: PathBuf,

        /// Location to filter to
        #[arg(short, long)]
        location: String,

        /// Output file for results (pretty JSON). Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Annotated heatmap of the numeric-column correlation matrix
    Heatmap {
        /// Input inventory table (CSV)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file for results (pretty JSON). Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt().with_max_level(cli.log_level).with_target(false).init();

    match cli.command {
        Commands::Preview { input, rows, output } => cmd_preview(&input, rows, output.as_ref()),
        Commands::Describe { input, output } => cmd_describe(&input, output.as_ref()),
        Commands::Locations { input, output } => cmd_locations(&input, output.as_ref()),
        Commands::Filter { input, location, output } => {
            cmd_filter(&input, &location, output.as_ref())
        }
        Commands::Aggregate { input, output } => cmd_aggregate(&input, output.as_ref()),
        Commands::Insights { input, location, output } => {
            cmd_insights(&input, &location, output.as_ref())
        }
        Commands::Viz { command } => match command {
            VizCommands::Bar { input, location, output } => {
                cmd_viz_bar(&input, &location, output.as_ref())
            }
            VizCommands::Pie { input, output } => cmd_viz_pie(&input, output.as_ref()),
            VizCommands::Scatter { input, location, output } => {
                cmd_viz_scatter(&input, &location, output.as_ref())
            }
            VizCommands::Heatmap { input, output } => cmd_viz_heatmap(&input, output.as_ref()),
        },
        Commands::Ingest { input, uploads_dir, output } => {
            cmd_ingest(&input, &uploads_dir, output.as_ref())
        }
        Commands::Report { input, location, output_dir } => {
            report::cmd_report(&input, location.as_deref(), &output_dir)
        }
        Commands::Version => {
            println!("invstat {}", inv_core::VERSION);
            Ok(())
        }
    }
}

fn cmd_preview(input: &PathBuf, rows: usize, output: Option<&PathBuf>) -> Result<()> {
    let frame = load_frame(input)?;
    let output_json = serde_json::json!({
        "n_rows": frame.n_rows(),
        "n_cols": frame.n_cols(),
        "preview": frame.head(rows),
    });
    write_json(output, output_json)
}

fn cmd_describe(input: &PathBuf, output: Option<&PathBuf>) -> Result<()> {
    let frame = load_frame(input)?;
    let summaries = inv_stats::describe(&frame);
    tracing::info!(columns = summaries.len(), "describe complete");
    write_json(output, serde_json::to_value(summaries)?)
}

fn cmd_locations(input: &PathBuf, output: Option<&PathBuf>) -> Result<()> {
    let frame = load_frame(input)?;
    let locations = inventory::list_locations(&frame)?;
    write_json(output, serde_json::json!({ "locations": locations }))
}

fn cmd_filter(input: &PathBuf, location: &str, output: Option<&PathBuf>) -> Result<()> {
    let frame = load_frame(input)?;
    let view = inventory::filter_by_location(&frame, location)?;
    let output_json = serde_json::json!({
        "location": location,
        "n_rows": view.n_rows(),
        "filtered": view,
    });
    write_json(output, output_json)
}

fn cmd_aggregate(input: &PathBuf, output: Option<&PathBuf>) -> Result<()> {
    let frame = load_frame(input)?;
    let aggregate = inventory::aggregate_by_category(&frame)?;
    write_json(output, serde_json::to_value(aggregate)?)
}

fn cmd_insights(input: &PathBuf, location: &str, output: Option<&PathBuf>) -> Result<()> {
    let frame = load_frame(input)?;
    let view = inventory::filter_by_location(&frame, location)?;
    let insights = inventory::insights(&view, location)?;
    tracing::info!(
        total_count = insights.total_count,
        total_value = insights.total_value,
        "insights complete"
    );
    write_json(output, serde_json::to_value(insights)?)
}

fn cmd_viz_bar(input: &PathBuf, location: &str, output: Option<&PathBuf>) -> Result<()> {
    let frame = load_frame(input)?;
    let view = inventory::filter_by_location(&frame, location)?;
    let artifact = inv_viz::bar_artifact(&view)?;
    write_json(output, serde_json::to_value(artifact)?)
}

fn cmd_viz_pie(input: &PathBuf, output: Option<&PathBuf>) -> Result<()> {
    let frame = load_frame(input)?;
    let aggregate = inventory::aggregate_by_category(&frame)?;
    let artifact = inv_viz::pie_artifact(&aggregate);
    write_json(output, serde_json::to_value(artifact)?)
}

fn cmd_viz_scatter(input: &PathBuf, location: &str, output: Option<&PathBuf>) -> Result<()> {
    let frame = load_frame(input)?;
    let view = inventory::filter_by_location(&frame, location)?;
    let artifact = inv_viz::scatter_artifact(&view)?;
    write_json(output, serde_json::to_value(artifact)?)
}

fn cmd_viz_heatmap(input: &PathBuf, output: Option<&PathBuf>) -> Result<()> {
    let frame = load_frame(input)?;
    let corr = inv_stats::correlation_matrix(&frame);
    let artifact = inv_viz::heatmap_artifact(&corr)?;
    write_json(output, serde_json::to_value(artifact)?)
}

fn cmd_ingest(input: &PathBuf, uploads_dir: &PathBuf, output: Option<&PathBuf>) -> Result<()> {
    let filename = input
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| anyhow::anyhow!("input path has no usable filename: {}", input.display()))?;

    let bytes = std::fs::read(input)?;
    let sha256 = report::sha256_hex(&bytes);

    let store = UploadStore::new(uploads_dir)?;
    let (path, frame) = store.ingest(filename, &bytes)?;
    tracing::info!(path = %path.display(), sha256 = %sha256, "upload ingested");

    let output_json = serde_json::json!({
        "saved_path": path.display().to_string(),
        "sha256": sha256,
        "n_rows": frame.n_rows(),
        "n_cols": frame.n_cols(),
    });
    write_json(output, output_json)
}

fn load_frame(input: &PathBuf) -> Result<Frame> {
    tracing::info!(path = %input.display(), "loading inventory table");
    let bytes = std::fs::read(input)?;
    let frame = inv_table::parse_csv(&bytes)?;
    tracing::info!(rows = frame.n_rows(), columns = frame.n_cols(), "table loaded");
    Ok(frame)
}

fn write_json(output: Option<&PathBuf>, value: serde_json::Value) -> Result<()> {
    if let Some(path) = output {
        std::fs::write(path, serde_json::to_string_pretty(&value)?)?;
    } else {
        println!("{}", serde_json::to_string_pretty(&value)?);
    }
    Ok(())
}
