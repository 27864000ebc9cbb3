//! Report and chart file output.

pub mod json;
pub mod svg;

pub use json::{read_report, write_report};
pub use svg::write_chart;
