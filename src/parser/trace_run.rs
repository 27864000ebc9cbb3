//! Run parser: folds line fragments into per-hop statistics for one run.
//!
//! The accumulator is an ordered map keyed by hop number, so the output is
//! ascending by hop without a separate sort step.

use super::hop_line::parse_line;
use super::schema::{HopStatistics, Responder};
use crate::utils::error::ParseError;
use crate::utils::stats::{mean, median, round_avg};
use log::debug;
use std::collections::BTreeMap;

/// Per-hop accumulator for one run
#[derive(Debug, Clone, Default)]
struct HopAccumulator {
    hosts: Vec<Responder>,
    delays: Vec<f64>,
}

/// Parse the complete output of one traceroute run
///
/// **Public** - main entry point for per-run parsing
///
/// # Arguments
/// * `text` - Verbatim captured output of one run
///
/// # Returns
/// Per-hop statistics, ascending by hop number, one entry per hop that
/// received at least one answered probe.
///
/// # Errors
/// * `ParseError::EmptyRun` - the run produced zero responsive hops
pub fn parse_run(text: &str) -> Result<Vec<HopStatistics>, ParseError> {
    let mut hops: BTreeMap<u32, HopAccumulator> = BTreeMap::new();
    let mut current_hop: Option<u32> = None;

    for line in text.lines() {
        // Header line ("traceroute to example.com (93.184.216.34), ...")
        // carries a parenthesized address we must not mistake for a hop.
        if line.trim_start().to_ascii_lowercase().starts_with("traceroute") {
            continue;
        }

        let fragment = parse_line(line);

        if let Some(hop) = fragment.hop {
            current_hop = Some(hop);
        }

        // Probe results before any hop number have nothing to attach to.
        let Some(hop) = current_hop else {
            if !fragment.responders.is_empty() || !fragment.latencies.is_empty() {
                debug!("dropping fragment with no current hop: {:?}", line);
            }
            continue;
        };

        if fragment.responders.is_empty() && fragment.latencies.is_empty() {
            continue;
        }

        let accumulator = hops.entry(hop).or_default();
        for responder in fragment.responders {
            if !accumulator.hosts.contains(&responder) {
                accumulator.hosts.push(responder);
            }
        }
        accumulator.delays.extend(fragment.latencies);
    }

    let statistics: Vec<HopStatistics> = hops
        .into_iter()
        .filter(|(_, accumulator)| !accumulator.delays.is_empty())
        .map(|(hop, accumulator)| hop_statistics(hop, accumulator))
        .collect();

    if statistics.is_empty() {
        return Err(ParseError::EmptyRun);
    }

    debug!("parsed {} responsive hops", statistics.len());
    Ok(statistics)
}

/// Derive statistics from a non-empty delay list
///
/// **Private** - internal helper for parse_run
fn hop_statistics(hop: u32, accumulator: HopAccumulator) -> HopStatistics {
    let delays = &accumulator.delays;
    HopStatistics {
        hop,
        min: delays.iter().copied().fold(f64::INFINITY, f64::min),
        max: delays.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        avg: round_avg(mean(delays)),
        med: median(delays),
        hosts: accumulator.hosts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_single_hop_run() {
        let stats = parse_run("1  host1 (10.0.0.1)  1.111 ms  2.222 ms  3.333 ms").unwrap();
        assert_eq!(
            stats,
            vec![HopStatistics {
                hop: 1,
                min: 1.111,
                max: 3.333,
                avg: 2.222,
                med: 2.222,
                hosts: vec![Responder::new("10.0.0.1", "(host1)")],
            }]
        );
    }

    #[test]
    fn test_header_line_skipped() {
        let text = "traceroute to example.com (93.184.216.34), 30 hops max, 60 byte packets\n\
                    1  gw (192.168.1.1)  0.5 ms  0.6 ms  0.7 ms\n";
        let stats = parse_run(text).unwrap();
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].hop, 1);
    }

    #[test]
    fn test_continuation_lines_accumulate() {
        let text = "3  first (10.0.0.3)  5.0 ms\n\
                    \t second (10.0.0.4)  7.0 ms  9.0 ms\n";
        let stats = parse_run(text).unwrap();
        assert_eq!(stats.len(), 1);
        let hop = &stats[0];
        assert_eq!(hop.hop, 3);
        assert_eq!(hop.min, 5.0);
        assert_eq!(hop.max, 9.0);
        assert_eq!(hop.avg, 7.0);
        assert_eq!(hop.med, 7.0);
        assert_eq!(
            hop.hosts,
            vec![
                Responder::new("10.0.0.3", "(first)"),
                Responder::new("10.0.0.4", "(second)"),
            ]
        );
    }

    #[test]
    fn test_unresponsive_hop_omitted() {
        let text = "1  gw (192.168.1.1)  0.5 ms  0.6 ms  0.7 ms\n\
                    2  * * *\n\
                    3  isp (10.1.1.1)  8.0 ms  9.0 ms  10.0 ms\n";
        let stats = parse_run(text).unwrap();
        let hops: Vec<u32> = stats.iter().map(|s| s.hop).collect();
        assert_eq!(hops, vec![1, 3]);
    }

    #[test]
    fn test_all_placeholder_run_is_empty() {
        let text = "1 * * *\n2 * * *\n3 * * *\n";
        assert!(matches!(parse_run(text), Err(ParseError::EmptyRun)));
    }

    #[test]
    fn test_blank_run_is_empty() {
        assert!(matches!(parse_run(""), Err(ParseError::EmptyRun)));
    }

    #[test]
    fn test_responder_without_latency_not_emitted() {
        // A hop where the host line parsed but every probe timed out.
        let text = "1 gw (192.168.1.1) * * *\n\
                    2 isp (10.1.1.1) 3.0 ms 4.0 ms 5.0 ms\n";
        let stats = parse_run(text).unwrap();
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].hop, 2);
    }

    #[test]
    fn test_even_probe_count_median() {
        let text = "1 gw (192.168.1.1) 1.0 ms 2.0 ms 3.0 ms 10.0 ms\n";
        let stats = parse_run(text).unwrap();
        assert_eq!(stats[0].med, 2.5);
        assert_eq!(stats[0].avg, 4.0);
    }

    #[test]
    fn test_statistics_invariants() {
        let text = "1 a (10.0.0.1) 4.1 ms 1.7 ms 9.3 ms\n\
                    2 b (10.0.0.2) 12.0 ms 11.5 ms 13.2 ms\n";
        for hop in parse_run(text).unwrap() {
            assert!(hop.min <= hop.med && hop.med <= hop.max);
            assert!(hop.min <= hop.avg && hop.avg <= hop.max);
        }
    }
}
