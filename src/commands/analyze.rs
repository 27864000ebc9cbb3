//! Analyze command implementation.
//!
//! Computes statistics over pre-captured traceroute output files instead of
//! launching traceroute. Each `*.out` file in the directory counts as one
//! run; files are processed in sorted filename order.

use super::{consolidate_captures, write_outputs, ReportArgs};
use crate::runner::load_captures;
use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the analyze command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct AnalyzeArgs {
    /// Directory holding one *.out file per run
    pub directory: PathBuf,

    /// Report and chart output settings
    pub report: ReportArgs,
}

/// Validate analyze arguments
///
/// **Public** - called before execute_analyze for early failure
pub fn validate_analyze_args(args: &AnalyzeArgs) -> Result<()> {
    if args.directory.as_os_str().is_empty() {
        anyhow::bail!("capture directory cannot be empty");
    }

    if args.report.output_json.as_os_str().is_empty() {
        anyhow::bail!("output path cannot be empty");
    }

    Ok(())
}

/// Execute the analyze command
///
/// **Public** - main entry point called from main.rs
pub fn execute_analyze(args: AnalyzeArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("step 1/3: loading captures from {}...", args.directory.display());
    let captures = load_captures(&args.directory).context("failed to load capture files")?;

    info!("step 2/3: parsing and consolidating {} run(s)...", captures.len());
    let hops = consolidate_captures(&captures)?;
    info!("consolidated {} hops", hops.len());

    info!("step 3/3: writing outputs...");
    write_outputs(&hops, &args.report)?;

    info!("completed in {:.2}s", start_time.elapsed().as_secs_f64());
    Ok(())
}
