//! Command implementations.
//!
//! `run` and `analyze` share one pipeline: parse each capture, drop runs
//! with no responsive hops (with a warning), consolidate, then write the
//! report and optional chart.

pub mod analyze;
pub mod run;
pub mod utils;

pub use analyze::{execute_analyze, validate_analyze_args, AnalyzeArgs};
pub use run::{execute_run, validate_run_args, RunArgs};
pub use utils::{display_schema, display_version, validate_report_file};

use crate::aggregator::combine_runs;
use crate::graph::{render_chart, ChartConfig};
use crate::output::{write_chart, write_report};
use crate::parser::schema::ConsolidatedHop;
use crate::parser::{parse_run, HopStatistics};
use crate::runner::Capture;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::path::PathBuf;

/// Output settings shared by the run and analyze commands
#[derive(Debug, Clone)]
pub struct ReportArgs {
    /// Output path for the JSON report
    pub output_json: PathBuf,

    /// Output path for the SVG chart (optional)
    pub output_graph: Option<PathBuf>,

    /// Chart configuration
    pub chart_config: Option<ChartConfig>,

    /// Print a text summary to stdout
    pub print_summary: bool,
}

impl Default for ReportArgs {
    fn default() -> Self {
        Self {
            output_json: PathBuf::from("trstats.json"),
            output_graph: None,
            chart_config: None,
            print_summary: false,
        }
    }
}

/// Parse captures and consolidate them into one hop table
///
/// **Private to commands** - shared pipeline stage
///
/// Empty runs are excluded with a warning rather than failing the whole
/// invocation; only zero usable runs is fatal.
pub(crate) fn consolidate_captures(captures: &[Capture]) -> Result<Vec<ConsolidatedHop>> {
    let mut runs: Vec<Vec<HopStatistics>> = Vec::with_capacity(captures.len());

    for capture in captures {
        match parse_run(&capture.text) {
            Ok(statistics) => {
                debug!("{}: {} responsive hops", capture.label, statistics.len());
                runs.push(statistics);
            }
            Err(error) => {
                warn!("{}: {}, excluding from aggregation", capture.label, error);
            }
        }
    }

    combine_runs(&runs).context("no usable data across all runs")
}

/// Write the report, the optional chart, and the optional summary
///
/// **Private to commands** - shared pipeline stage
pub(crate) fn write_outputs(hops: &[ConsolidatedHop], report: &ReportArgs) -> Result<()> {
    write_report(hops, &report.output_json).context("failed to write report JSON")?;
    info!("report written to {}", report.output_json.display());

    if let Some(graph_path) = &report.output_graph {
        let svg = render_chart(hops, report.chart_config.as_ref())
            .context("failed to render latency chart")?;
        write_chart(&svg, graph_path).context("failed to write chart SVG")?;
        info!("chart written to {}", graph_path.display());
    }

    if report.print_summary {
        print_summary(hops);
    }

    Ok(())
}

/// Print a fixed-width latency table to stdout
///
/// **Private to commands** - used when --summary is set
fn print_summary(hops: &[ConsolidatedHop]) {
    println!("\n{}", "=".repeat(78));
    println!("LATENCY SUMMARY (ms)");
    println!("{}", "=".repeat(78));
    println!(
        "{:>4}  {:>9}  {:>9}  {:>9}  {:>9}  host",
        "hop", "min", "avg", "med", "max"
    );
    for hop in hops {
        let host = hop
            .hosts
            .first()
            .map(|responder| format!("{} {}", responder.address(), responder.name()))
            .unwrap_or_default();
        println!(
            "{:>4}  {:>9.3}  {:>9.3}  {:>9.3}  {:>9.3}  {}",
            hop.hop, hop.min, hop.avg, hop.med, hop.max, host
        );
    }
    println!("{}", "=".repeat(78));
}
