//! Configuration and constants for the CLI.

use std::time::Duration;

/// Current report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Traceroute binary launched by the `run` command
pub const TRACEROUTE_BIN: &str = "traceroute";

/// Default number of traceroute runs
pub const DEFAULT_NUM_RUNS: u32 = 1;

/// Default delay between consecutive runs
pub const DEFAULT_RUN_DELAY: Duration = Duration::from_secs(0);

/// Default traceroute hop limit (-m)
pub const DEFAULT_MAX_HOPS: u32 = 30;

/// Hop limit ceiling (traceroute rejects TTLs above 255)
pub const MAX_HOP_LIMIT: u32 = 255;

/// File extension recognized for pre-captured traceroute output
pub const CAPTURE_EXTENSION: &str = "out";

/// Decimal places kept when rounding mean latencies
pub const AVG_DECIMALS: u32 = 3;

// Default chart geometry (pixels)
pub const DEFAULT_CHART_WIDTH: usize = 960;
pub const DEFAULT_CHART_HEIGHT: usize = 480;
