//! trstats CLI
//!
//! Measures network path latency by running traceroute repeatedly and
//! consolidating the per-hop statistics into a JSON report and SVG chart.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;
use std::time::Duration;

use trstats::commands::{
    display_schema, display_version, execute_analyze, execute_run, validate_analyze_args,
    validate_report_file, validate_run_args, AnalyzeArgs, ReportArgs, RunArgs,
};
use trstats::graph::ChartConfig;

/// trstats - multi-run traceroute latency statistics
#[derive(Parser, Debug)]
#[command(name = "trstats")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run traceroute N times and compute consolidated statistics
    Run {
        /// Target domain name or IP address
        #[arg(short, long)]
        target: String,

        /// Number of traceroute runs
        #[arg(short = 'n', long, default_value = "1")]
        runs: u32,

        /// Seconds to wait between two consecutive runs
        #[arg(short = 'd', long, default_value = "0")]
        delay: u64,

        /// Traceroute hop limit (-m)
        #[arg(short = 'm', long, default_value = "30")]
        max_hops: u32,

        /// Output path for the JSON report
        #[arg(short, long, default_value = "trstats.json")]
        output: PathBuf,

        /// Output path for the SVG latency chart (optional)
        #[arg(short, long)]
        graph: Option<PathBuf>,

        /// Chart title
        #[arg(long)]
        title: Option<String>,

        /// Chart width in pixels
        #[arg(long, default_value = "960")]
        width: usize,

        /// Chart height in pixels
        #[arg(long, default_value = "480")]
        height: usize,

        /// Print a text summary to stdout
        #[arg(long)]
        summary: bool,

        /// Save raw traceroute output to this directory, one file per run
        #[arg(long)]
        save_raw: Option<PathBuf>,
    },

    /// Compute statistics from pre-captured *.out files in a directory
    Analyze {
        /// Directory holding one traceroute output file per run
        #[arg(long)]
        dir: PathBuf,

        /// Output path for the JSON report
        #[arg(short, long, default_value = "trstats.json")]
        output: PathBuf,

        /// Output path for the SVG latency chart (optional)
        #[arg(short, long)]
        graph: Option<PathBuf>,

        /// Chart title
        #[arg(long)]
        title: Option<String>,

        /// Chart width in pixels
        #[arg(long, default_value = "960")]
        width: usize,

        /// Chart height in pixels
        #[arg(long, default_value = "480")]
        height: usize,

        /// Print a text summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Validate a report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display report schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Run {
            target,
            runs,
            delay,
            max_hops,
            output,
            graph,
            title,
            width,
            height,
            summary,
            save_raw,
        } => {
            let report = report_args(output, graph, title, width, height, summary);
            let args = RunArgs {
                target,
                num_runs: runs,
                run_delay: Duration::from_secs(delay),
                max_hops,
                save_raw,
                report,
            };

            validate_run_args(&args)?;
            execute_run(args)?;
        }

        Commands::Analyze {
            dir,
            output,
            graph,
            title,
            width,
            height,
            summary,
        } => {
            let report = report_args(output, graph, title, width, height, summary);
            let args = AnalyzeArgs {
                directory: dir,
                report,
            };

            validate_analyze_args(&args)?;
            execute_analyze(args)?;
        }

        Commands::Validate { file } => {
            validate_report_file(file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}

/// Assemble shared output settings from CLI flags
fn report_args(
    output: PathBuf,
    graph: Option<PathBuf>,
    title: Option<String>,
    width: usize,
    height: usize,
    summary: bool,
) -> ReportArgs {
    let chart_config = graph.is_some().then(|| {
        let mut config = ChartConfig::new().with_size(width, height);
        if let Some(title) = title {
            config = config.with_title(title);
        }
        config
    });

    ReportArgs {
        output_json: output,
        output_graph: graph,
        chart_config,
        print_summary: summary,
    }
}
