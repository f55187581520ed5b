use std::collections::HashMap;

use gridly::direction::EACH_DIRECTION;
use gridly::prelude::*;
use gridly_grids::VecGrid;
use tracing::debug;

use crate::common::ParseError;
use crate::grid::{cells, parse_grid};

/// `None` marks impassable ground.
type TopoMap = VecGrid<Option<u8>>;

fn read_map(input: &str) -> Result<TopoMap, ParseError> {
    parse_grid(input, |_, c| match c {
        '.' => Ok(None),
        c => c
            .to_digit(10)
            .map(|height| Some(height as u8))
            .ok_or(ParseError::UnexpectedChar(c)),
    })
}

/// Climb from `trailhead` one height at a time. The result maps each
/// reachable summit to the number of distinct trails that end there.
fn summits(map: &TopoMap, trailhead: Location) -> HashMap<Location, u64> {
    let mut trails = HashMap::new();
    trails.insert(trailhead, 1);

    for height in 1..=9 {
        let mut next = HashMap::new();

        for (&location, &count) in &trails {
            for &direction in EACH_DIRECTION.iter() {
                let step = location.step(direction);
                if map.get(step).ok() == Some(&Some(height)) {
                    *next.entry(step).or_insert(0) += count;
                }
            }
        }

        trails = next;
    }

    trails
}

fn survey(input: &str, rate: impl Fn(&HashMap<Location, u64>) -> u64) -> anyhow::Result<u64> {
    let map = read_map(input)?;

    let trailheads: Vec<Location> = cells(&map)
        .filter(|&(_, &height)| height == Some(0))
        .map(|(location, _)| location)
        .collect();

    debug!(trailheads = trailheads.len(), "surveyed map");

    Ok(trailheads
        .into_iter()
        .map(|trailhead| rate(&summits(&map, trailhead)))
        .sum())
}

pub fn part1(input: &str) -> anyhow::Result<u64> {
    survey(input, |summits| summits.len() as u64)
}

pub fn part2(input: &str) -> anyhow::Result<u64> {
    survey(input, |summits| summits.values().sum())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
89010123
78121874
87430965
96549874
45678903
32019012
01329801
10456732
";

    #[test]
    fn example() {
        assert_eq!(part1(EXAMPLE).unwrap(), 36);
        assert_eq!(part2(EXAMPLE).unwrap(), 81);
    }

    #[test]
    fn every_trailhead_is_scored() {
        let map = read_map(EXAMPLE).unwrap();
        let scores: Vec<usize> = cells(&map)
            .filter(|&(_, &height)| height == Some(0))
            .map(|(trailhead, _)| summits(&map, trailhead).len())
            .collect();

        assert_eq!(scores, [5, 6, 5, 3, 1, 3, 5, 3, 5]);
    }

    #[test]
    fn single_trail() {
        let map = "\
0123
1234
8765
9876
";
        assert_eq!(part1(map).unwrap(), 1);
    }

    #[test]
    fn impassable_ground() {
        let map = "\
...0...
...1...
...2...
6543456
7.....7
8.....8
9.....9
";
        assert_eq!(part1(map).unwrap(), 2);
        assert_eq!(part2(map).unwrap(), 2);
    }

    #[test]
    fn branching_trails_are_rated_separately() {
        let map = "\
.....0.
..4321.
..5..2.
..6543.
..7..4.
..8765.
..9....
";
        assert_eq!(part1(map).unwrap(), 1);
        assert_eq!(part2(map).unwrap(), 3);
    }

    #[test]
    fn unexpected_characters() {
        assert!(part1("01x\n").is_err());
    }
}
