use std::collections::HashSet;

use anyhow::bail;
use gridly::prelude::*;
use gridly::direction::Direction;
use gridly_grids::VecGrid;
use joinery::prelude::*;
use tracing::{debug, trace};

use crate::common::ParseError;
use crate::grid::{locations, parse_grid};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Open,
    Obstacle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Guard {
    location: Location,
    facing: Direction,
}

struct Lab {
    floor: VecGrid<Cell>,
    guard: Guard,
}

impl Lab {
    fn parse(input: &str) -> Result<Self, ParseError> {
        let mut guard = None;

        let floor = parse_grid(input, |location, c| {
            let facing = match c {
                '.' => return Ok(Cell::Open),
                '#' => return Ok(Cell::Obstacle),
                '^' => Direction::Up,
                'v' => Direction::Down,
                '<' => Direction::Left,
                '>' => Direction::Right,
                c => return Err(ParseError::UnexpectedChar(c)),
            };

            match guard.replace(Guard { location, facing }) {
                None => Ok(Cell::Open),
                Some(_) => Err(ParseError::Duplicate("guard")),
            }
        })?;

        let guard = guard.ok_or(ParseError::Missing("guard"))?;
        debug!(dimensions = ?floor.dimensions(), ?guard, "mapped lab");

        Ok(Lab { floor, guard })
    }

    /// Every location the guard stands on before walking out of the lab.
    fn patrol(&self) -> anyhow::Result<HashSet<Location>> {
        let mut guard = self.guard;
        let mut visited = HashSet::new();
        let mut seen = HashSet::new();

        loop {
            visited.insert(guard.location);

            if !seen.insert(guard) {
                bail!("guard is stuck in a loop at {:?}", guard.location);
            }

            let ahead = guard.location.step(guard.facing);
            match self.floor.get(ahead) {
                Err(_) => break,
                Ok(Cell::Obstacle) => guard.facing = guard.facing.clockwise(),
                Ok(Cell::Open) => guard.location = ahead,
            }
        }

        trace!("patrol:\n{}", self.render(&visited));
        Ok(visited)
    }

    fn render(&self, visited: &HashSet<Location>) -> impl std::fmt::Display {
        let mut rows: Vec<String> = Vec::new();

        for location in locations(&self.floor) {
            if location.column.0 == 0 {
                rows.push(String::new());
            }

            let mark = match self.floor.get(location) {
                Ok(Cell::Obstacle) => '#',
                _ if visited.contains(&location) => 'X',
                _ => '.',
            };

            if let Some(row) = rows.last_mut() {
                row.push(mark);
            }
        }

        rows.join_with('\n')
    }
}

pub fn part1(input: &str) -> anyhow::Result<u64> {
    let lab = Lab::parse(input)?;

    Ok(lab.patrol()?.len() as u64)
}
