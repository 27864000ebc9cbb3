//! Multi-run consolidation of per-hop statistics.
//!
//! Each run's summary is treated as one representative sample: the global
//! average is the mean of per-run averages and the global median the median
//! of per-run medians, rather than pooling every raw probe. This keeps runs
//! with different probe counts weighted equally.

use crate::parser::schema::{ConsolidatedHop, HopStatistics, Responder};
use crate::utils::error::AggregateError;
use crate::utils::stats::{mean, median, round_avg};
use log::debug;
use std::collections::BTreeMap;

/// Per-hop collection of one statistic per run that reported the hop
#[derive(Debug, Default)]
struct HopGroup {
    mins: Vec<f64>,
    maxs: Vec<f64>,
    avgs: Vec<f64>,
    meds: Vec<f64>,
    /// Responder list of the first run (input order) reporting this hop
    hosts: Vec<Responder>,
}

/// Consolidate per-run statistics into one table
///
/// **Public** - main entry point for aggregation
///
/// # Arguments
/// * `runs` - One statistics sequence per run, in run order. Run order is
///   significant: the first run reporting a hop supplies its `hosts`.
///
/// # Returns
/// One [`ConsolidatedHop`] per hop number seen in at least one run,
/// ascending by hop number. A hop missing from some runs simply contributes
/// fewer samples; a hop present in a single run passes through unchanged.
///
/// # Errors
/// * `AggregateError::NoData` - zero runs, or every run was empty
pub fn combine_runs(runs: &[Vec<HopStatistics>]) -> Result<Vec<ConsolidatedHop>, AggregateError> {
    let mut groups: BTreeMap<u32, HopGroup> = BTreeMap::new();

    for run in runs {
        for statistics in run {
            let group = groups.entry(statistics.hop).or_default();
            if group.hosts.is_empty() {
                group.hosts = statistics.hosts.clone();
            }
            group.mins.push(statistics.min);
            group.maxs.push(statistics.max);
            group.avgs.push(statistics.avg);
            group.meds.push(statistics.med);
        }
    }

    if groups.is_empty() {
        return Err(AggregateError::NoData);
    }

    debug!("consolidating {} hops from {} runs", groups.len(), runs.len());

    Ok(groups
        .into_iter()
        .map(|(hop, group)| ConsolidatedHop {
            hop,
            min: group.mins.iter().copied().fold(f64::INFINITY, f64::min),
            max: group.maxs.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            avg: round_avg(mean(&group.avgs)),
            med: median(&group.meds),
            hosts: group.hosts,
        })
        .collect())
}
