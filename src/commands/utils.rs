//! Small read-only commands: validate, schema, version.

use crate::output::read_report;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::Result;
use std::path::PathBuf;

/// Validate a report JSON file and print its shape
pub fn validate_report_file(file_path: PathBuf) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let hops = read_report(&file_path)?;

    println!("✓ Valid report JSON");
    println!("  Hops: {}", hops.len());
    if let (Some(first), Some(last)) = (hops.first(), hops.last()) {
        println!("  Hop range: {}..{}", first.hop, last.hop);
    }

    let ordered = hops.windows(2).all(|pair| pair[0].hop < pair[1].hop);
    println!(
        "  Hop ordering: {}",
        if ordered { "ascending, no duplicates" } else { "INVALID" }
    );

    Ok(())
}

/// Display report schema information
pub fn display_schema(show_details: bool) {
    println!("trstats Report Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("The report is a JSON array of per-hop records:");
        println!("  hop: number       - Hop number (distance from source)");
        println!("  min: number       - Global minimum latency across runs (ms)");
        println!("  max: number       - Global maximum latency across runs (ms)");
        println!("  avg: number       - Mean of per-run averages, 3 decimals (ms)");
        println!("  med: number       - Median of per-run medians (ms)");
        println!("  hosts: array      - Responder pairs [address, \"(name)\"]");
        println!("                      from the first run reporting the hop");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("trstats v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Multi-run traceroute latency statistics and visualization.");
}
