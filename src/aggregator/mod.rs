//! Multi-run aggregation of per-hop latency statistics.

pub mod consolidate;

pub use consolidate::combine_runs;
