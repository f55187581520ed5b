use rayon::prelude::*;
use tracing::debug;

use crate::common::{parse_items, parse_lines};

type Report = Vec<i64>;

fn is_safe(levels: &[i64]) -> bool {
    let deltas: Vec<i64> = levels.windows(2).map(|pair| pair[1] - pair[0]).collect();

    deltas.iter().all(|delta| (1..=3).contains(delta))
        || deltas.iter().all(|delta| (-3..=-1).contains(delta))
}

fn is_safe_with_dampener(levels: &[i64]) -> bool {
    is_safe(levels)
        || (0..levels.len()).any(|skipped| {
            let dampened: Vec<i64> = levels
                .iter()
                .enumerate()
                .filter(|&(index, _)| index != skipped)
                .map(|(_, &level)| level)
                .collect();

            is_safe(&dampened)
        })
}

fn read_reports(input: &str) -> anyhow::Result<Vec<Report>> {
    let reports = parse_lines(input, parse_items::<i64, Report>)?;
    debug!(reports = reports.len(), "read reports");
    Ok(reports)
}

fn count_safe(input: &str, check: impl Fn(&[i64]) -> bool + Sync) -> anyhow::Result<u64> {
    let reports = read_reports(input)?;

    Ok(reports.par_iter().filter(|report| check(report.as_slice())).count() as u64)
}

pub fn part1(input: &str) -> anyhow::Result<u64> {
    count_safe(input, is_safe)
}

pub fn part2(input: &str) -> anyhow::Result<u64> {
    count_safe(input, is_safe_with_dampener)
}
