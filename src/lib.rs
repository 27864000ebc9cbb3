//! trstats
//!
//! Multi-run traceroute latency statistics and visualization.
//!
//! Repeatedly invokes the system traceroute utility (or reads pre-captured
//! output files), turns the noisy per-hop text into per-run latency
//! statistics, consolidates them across runs, and emits a JSON report plus
//! an SVG latency chart.
//!
//! This crate provides the implementation for the `trstats` CLI tool.

pub mod aggregator;
pub mod commands;
pub mod graph;
pub mod output;
pub mod parser;
pub mod runner;
pub mod utils;
