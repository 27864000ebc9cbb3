//! Traceroute output parsing.
//!
//! `hop_line` tokenizes one physical line; `trace_run` folds lines into
//! per-hop statistics for one complete run; `schema` defines the records
//! shared with the aggregator and the report output.

pub mod hop_line;
pub mod schema;
pub mod trace_run;

pub use hop_line::{parse_line, LineFragment};
pub use schema::{ConsolidatedHop, HopStatistics, Responder};
pub use trace_run::parse_run;
