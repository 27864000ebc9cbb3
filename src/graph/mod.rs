//! Latency chart generation for the consolidated hop table.

pub mod generator;

pub use generator::{render_chart, ChartConfig};
