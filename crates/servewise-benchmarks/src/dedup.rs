use std::cmp::Ordering;
use std::collections::BTreeMap;

use servewise_core::{BenchmarkRow, ConfigKey, Percentile};

/// Keep the highest-QPS row per (model, hardware, hardware count)
///
/// Ties on requests per second go to the lower end-to-end latency at
/// `percentile`. Output is ordered by configuration key.
pub fn select_max_throughput<I>(rows: I, percentile: Percentile) -> Vec<BenchmarkRow>
where
    I: IntoIterator<Item = BenchmarkRow>,
{
    let mut best: BTreeMap<ConfigKey, BenchmarkRow> = BTreeMap::new();

    for row in rows {
        let key = row.config_key();
        match best.get(&key) {
            Some(current) if !outranks(&row, current, percentile) => {}
            _ => {
                best.insert(key, row);
            }
        }
    }

    best.into_values().collect()
}

fn outranks(candidate: &BenchmarkRow, current: &BenchmarkRow, percentile: Percentile) -> bool {
    match candidate
        .requests_per_second
        .partial_cmp(&current.requests_per_second)
        .unwrap_or(Ordering::Equal)
    {
        Ordering::Greater => true,
        Ordering::Less => false,
        Ordering::Equal => candidate.e2e.at(percentile) < current.e2e.at(percentile),
    }
}
