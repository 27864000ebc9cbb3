//! Output JSON schema definitions for latency statistics.
//!
//! This module defines the records we write to report files.
//! The report document is a JSON array of [`ConsolidatedHop`] values.

use serde::{Deserialize, Serialize};

/// The host that answered probes at a hop: (numeric address, symbolic name).
///
/// Serialized as a two-element array `["10.0.0.1", "(host1)"]`; the name
/// keeps its parenthesized form from the raw traceroute output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Responder(pub String, pub String);

impl Responder {
    pub fn new(address: impl Into<String>, name: impl Into<String>) -> Self {
        Self(address.into(), name.into())
    }

    pub fn address(&self) -> &str {
        &self.0
    }

    pub fn name(&self) -> &str {
        &self.1
    }
}

/// Per-run latency statistics for one hop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HopStatistics {
    /// Hop number (distance in network steps from the source)
    pub hop: u32,

    /// Fastest probe in this run (ms)
    pub min: f64,

    /// Slowest probe in this run (ms)
    pub max: f64,

    /// Mean latency, rounded to 3 decimals (ms)
    pub avg: f64,

    /// Median latency (ms)
    pub med: f64,

    /// Hosts that answered at this hop during this run
    pub hosts: Vec<Responder>,
}

/// Aggregate statistics for one hop across all runs
///
/// `min`/`max` are global extrema, `avg` is the mean of per-run averages,
/// `med` the median of per-run medians, and `hosts` comes from the first
/// run (by input order) that reported the hop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsolidatedHop {
    pub hop: u32,
    pub min: f64,
    pub max: f64,
    pub avg: f64,
    pub med: f64,
    pub hosts: Vec<Responder>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_responder_serializes_as_pair() {
        let responder = Responder::new("10.0.0.1", "(host1)");
        let json = serde_json::to_string(&responder).unwrap();
        assert_eq!(json, r#"["10.0.0.1","(host1)"]"#);
    }

    #[test]
    fn test_consolidated_hop_field_order() {
        let hop = ConsolidatedHop {
            hop: 1,
            min: 1.111,
            max: 3.333,
            avg: 2.222,
            med: 2.222,
            hosts: vec![Responder::new("10.0.0.1", "(host1)")],
        };
        let json = serde_json::to_string(&hop).unwrap();
        assert_eq!(
            json,
            r#"{"hop":1,"min":1.111,"max":3.333,"avg":2.222,"med":2.222,"hosts":[["10.0.0.1","(host1)"]]}"#
        );
    }
}
