use std::collections::{HashMap, HashSet};

use gridly::prelude::*;
use tracing::debug;

use crate::grid::{cells, parse_grid, span};

pub fn part1(input: &str) -> anyhow::Result<u64> {
    let city = parse_grid(input, |_, c| Ok(c))?;

    let mut antennas: HashMap<char, Vec<Location>> = HashMap::new();
    for (location, &frequency) in cells(&city).filter(|&(_, &c)| c != '.') {
        antennas.entry(frequency).or_default().push(location);
    }

    debug!(frequencies = antennas.len(), "found antennas");

    let mut antinodes = HashSet::new();
    for locations in antennas.values() {
        for (index, &a) in locations.iter().enumerate() {
            for &b in &locations[index + 1..] {
                antinodes.extend(
                    [a + span(b, a), b + span(a, b)]
                        .into_iter()
                        .filter(|&antinode| city.get(antinode).is_ok()),
                );
            }
        }
    }

    Ok(antinodes.len() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
............
........0...
.....0......
.......0....
....0.......
......A.....
............
............
........A...
.........A..
............
............
";

    #[test]
    fn example() {
        assert_eq!(part1(EXAMPLE).unwrap(), 14);
    }

    #[test]
    fn single_pair() {
        let city = "\
..........
..........
..........
....a.....
..........
.....a....
..........
..........
..........
..........
";
        assert_eq!(part1(city).unwrap(), 2);
    }

    #[test]
    fn antinodes_off_the_map_are_dropped() {
        assert_eq!(part1("a.a\n").unwrap(), 0);
        assert_eq!(part1("aa..\n").unwrap(), 1);
    }

    #[test]
    fn frequencies_do_not_mix() {
        assert_eq!(part1("..a.b....\n").unwrap(), 0);
        assert_eq!(part1("...ab....\n").unwrap(), 0);
    }
}
