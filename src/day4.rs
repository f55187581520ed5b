use std::iter;

use gridly::prelude::*;
use gridly::vector::TOUCHING_ADJACENCIES;
use gridly_grids::VecGrid;
use tracing::debug;

use crate::common::ParseError;
use crate::grid::{cells, parse_grid};

type Puzzle = VecGrid<char>;

fn read_puzzle(input: &str) -> Result<Puzzle, ParseError> {
    let puzzle = parse_grid(input, |_, c| Ok(c))?;
    debug!(dimensions = ?puzzle.dimensions(), "read word search");
    Ok(puzzle)
}

fn spells(puzzle: &Puzzle, start: Location, direction: Vector, word: &str) -> bool {
    let path = iter::successors(Some(start), |&location| Some(location + direction));

    word.chars()
        .zip(path)
        .all(|(c, location)| puzzle.get(location).ok() == Some(&c))
}

fn is_mas(puzzle: &Puzzle, a: Location, b: Location) -> bool {
    matches!(
        (puzzle.get(a).ok(), puzzle.get(b).ok()),
        (Some('M'), Some('S')) | (Some('S'), Some('M'))
    )
}

pub fn part1(input: &str) -> anyhow::Result<u64> {
    let puzzle = read_puzzle(input)?;

    Ok(cells(&puzzle)
        .filter(|&(_, &c)| c == 'X')
        .map(|(location, _)| {
            TOUCHING_ADJACENCIES
                .iter()
                .filter(|&&direction| spells(&puzzle, location, direction, "XMAS"))
                .count() as u64
        })
        .sum())
}

pub fn part2(input: &str) -> anyhow::Result<u64> {
    let puzzle = read_puzzle(input)?;
    let up_left = Vector::new(Rows(-1), Columns(-1));
    let up_right = Vector::new(Rows(-1), Columns(1));
    let down_left = Vector::new(Rows(1), Columns(-1));
    let down_right = Vector::new(Rows(1), Columns(1));

    Ok(cells(&puzzle)
        .filter(|&(_, &c)| c == 'A')
        .filter(|&(location, _)| {
            is_mas(&puzzle, location + up_left, location + down_right)
                && is_mas(&puzzle, location + up_right, location + down_left)
        })
        .count() as u64)
}
