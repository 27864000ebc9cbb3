//! Run command implementation.
//!
//! The run command:
//! 1. Launches traceroute N times against the target
//! 2. Parses each captured run and consolidates the statistics
//! 3. Writes the JSON report and optional SVG chart

use super::{consolidate_captures, write_outputs, ReportArgs};
use crate::runner::{capture_runs, RunPlan};
use crate::utils::config::{DEFAULT_MAX_HOPS, DEFAULT_NUM_RUNS, DEFAULT_RUN_DELAY, MAX_HOP_LIMIT};
use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Arguments for the run command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct RunArgs {
    /// Target domain name or IP address
    pub target: String,

    /// Number of traceroute runs
    pub num_runs: u32,

    /// Delay between two consecutive runs
    pub run_delay: Duration,

    /// Traceroute hop limit (-m)
    pub max_hops: u32,

    /// Directory to save raw captures into (optional)
    pub save_raw: Option<PathBuf>,

    /// Report and chart output settings
    pub report: ReportArgs,
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            target: String::new(),
            num_runs: DEFAULT_NUM_RUNS,
            run_delay: DEFAULT_RUN_DELAY,
            max_hops: DEFAULT_MAX_HOPS,
            save_raw: None,
            report: ReportArgs::default(),
        }
    }
}

/// Validate run arguments
///
/// **Public** - called before execute_run for early failure
pub fn validate_run_args(args: &RunArgs) -> Result<()> {
    if args.target.trim().is_empty() {
        anyhow::bail!("target cannot be empty");
    }

    if args.target.chars().any(char::is_whitespace) {
        anyhow::bail!("target cannot contain whitespace");
    }

    if args.num_runs == 0 {
        anyhow::bail!("number of runs must be greater than 0");
    }

    if args.max_hops == 0 || args.max_hops > MAX_HOP_LIMIT {
        anyhow::bail!("max hops must be between 1 and {}", MAX_HOP_LIMIT);
    }

    if args.report.output_json.as_os_str().is_empty() {
        anyhow::bail!("output path cannot be empty");
    }

    Ok(())
}

/// Execute the run command
///
/// **Public** - main entry point called from main.rs
pub fn execute_run(args: RunArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("starting {} traceroute run(s) to {}", args.num_runs, args.target);

    info!("step 1/3: capturing traceroute output...");
    let plan = RunPlan {
        target: args.target.clone(),
        num_runs: args.num_runs,
        delay: args.run_delay,
        max_hops: args.max_hops,
        save_raw: args.save_raw.clone(),
    };
    let captures = capture_runs(&plan).context("failed to capture traceroute runs")?;

    info!("step 2/3: parsing and consolidating {} run(s)...", captures.len());
    let hops = consolidate_captures(&captures)?;
    info!("consolidated {} hops", hops.len());

    info!("step 3/3: writing outputs...");
    write_outputs(&hops, &args.report)?;

    info!("completed in {:.2}s", start_time.elapsed().as_secs_f64());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_args() -> RunArgs {
        RunArgs {
            target: "example.com".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_args_valid() {
        assert!(validate_run_args(&valid_args()).is_ok());
    }

    #[test]
    fn test_validate_args_empty_target() {
        let args = RunArgs::default();
        assert!(validate_run_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_target_with_whitespace() {
        let args = RunArgs {
            target: "example com".to_string(),
            ..Default::default()
        };
        assert!(validate_run_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_zero_runs() {
        let args = RunArgs {
            num_runs: 0,
            ..valid_args()
        };
        assert!(validate_run_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_max_hops_out_of_range() {
        let args = RunArgs {
            max_hops: 0,
            ..valid_args()
        };
        assert!(validate_run_args(&args).is_err());

        let args = RunArgs {
            max_hops: 300,
            ..valid_args()
        };
        assert!(validate_run_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_empty_output() {
        let mut args = valid_args();
        args.report.output_json = PathBuf::new();
        assert!(validate_run_args(&args).is_err());
    }
}
