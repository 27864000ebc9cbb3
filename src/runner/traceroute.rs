//! Launches the system traceroute binary and captures its output.
//!
//! The runner is deliberately dumb: it hands back verbatim stdout per run
//! and leaves all interpretation to the parser. A non-zero exit status is
//! logged but not fatal; traceroute often exits non-zero after printing a
//! perfectly usable partial trace.

use super::Capture;
use crate::utils::config::TRACEROUTE_BIN;
use crate::utils::error::TraceError;
use chrono::Local;
use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Duration;

/// Plan for a batch of live traceroute runs
#[derive(Debug, Clone)]
pub struct RunPlan {
    /// Target domain name or IP address
    pub target: String,

    /// Number of runs to execute
    pub num_runs: u32,

    /// Delay between two consecutive runs
    pub delay: Duration,

    /// Hop limit passed as traceroute -m
    pub max_hops: u32,

    /// Directory to save raw captures into (optional)
    pub save_raw: Option<PathBuf>,
}

/// Execute the planned runs sequentially
///
/// **Public** - called by the run command
///
/// # Returns
/// One [`Capture`] per run, in execution order, labeled `run 1..N`.
///
/// # Errors
/// * `TraceError::Launch` - the traceroute binary could not be started
/// * `TraceError::Io` - saving a raw capture failed
pub fn capture_runs(plan: &RunPlan) -> Result<Vec<Capture>, TraceError> {
    let mut captures = Vec::with_capacity(plan.num_runs as usize);
    let batch_stamp = Local::now().format("%Y%m%d-%H%M%S").to_string();

    for run_index in 1..=plan.num_runs {
        info!("traceroute run {}/{} to {}", run_index, plan.num_runs, plan.target);

        let text = run_traceroute(&plan.target, plan.max_hops)?;
        debug!("run {} captured {} bytes", run_index, text.len());

        if let Some(directory) = &plan.save_raw {
            save_raw_capture(directory, &batch_stamp, run_index, &text)?;
        }

        captures.push(Capture {
            label: format!("run {}", run_index),
            text,
        });

        if run_index < plan.num_runs && !plan.delay.is_zero() {
            debug!("sleeping {:?} before next run", plan.delay);
            std::thread::sleep(plan.delay);
        }
    }

    Ok(captures)
}

/// Launch one traceroute process and collect stdout
///
/// **Private** - internal helper for capture_runs
fn run_traceroute(target: &str, max_hops: u32) -> Result<String, TraceError> {
    let output = Command::new(TRACEROUTE_BIN)
        .arg("-m")
        .arg(max_hops.to_string())
        .arg(target)
        .output()
        .map_err(|source| TraceError::Launch {
            binary: TRACEROUTE_BIN.to_string(),
            source,
        })?;

    if !output.status.success() {
        warn!(
            "{} exited with {}: {}",
            TRACEROUTE_BIN,
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Save one raw capture to `<dir>/trstats-<stamp>-runN.out`
///
/// **Private** - internal helper for capture_runs
fn save_raw_capture(
    directory: &Path,
    batch_stamp: &str,
    run_index: u32,
    text: &str,
) -> Result<(), TraceError> {
    std::fs::create_dir_all(directory)?;
    let path = directory.join(format!("trstats-{}-run{}.out", batch_stamp, run_index));
    std::fs::write(&path, text)?;
    info!("raw capture saved to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_raw_capture_names_files_by_run() {
        let temp_dir = tempfile::tempdir().unwrap();
        save_raw_capture(temp_dir.path(), "20240101-120000", 2, "1 * * *\n").unwrap();

        let path = temp_dir.path().join("trstats-20240101-120000-run2.out");
        assert!(path.exists());
        assert_eq!(std::fs::read_to_string(path).unwrap(), "1 * * *\n");
    }
}
