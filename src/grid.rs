//! Character maps read into gridly grids.

use gridly::prelude::*;
use gridly_grids::VecGrid;

use crate::common::ParseError;

/// Build a grid from the non-blank lines of `input`, one cell per
/// character. Every row must be the same width.
pub fn parse_grid<T>(
    input: &str,
    mut cell: impl FnMut(Location, char) -> Result<T, ParseError>,
) -> Result<VecGrid<T>, ParseError> {
    let mut cells = Vec::new();
    let mut columns = None;
    let mut rows = 0;

    for (row, line) in input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .enumerate()
    {
        let start = cells.len();
        for (column, c) in line.chars().enumerate() {
            let location = Location::new(Row(row as isize), Column(column as isize));
            cells.push(cell(location, c)?);
        }

        let width = cells.len() - start;
        match columns {
            None => columns = Some(width),
            Some(expected) if expected != width => {
                return Err(ParseError::RaggedGrid {
                    row,
                    expected,
                    found: width,
                })
            }
            Some(_) => {}
        }

        rows += 1;
    }

    let dimensions = Vector::new(Rows(rows as isize), Columns(columns.unwrap_or(0) as isize));
    VecGrid::new_row_major(dimensions, cells).ok_or(ParseError::Missing("grid cells"))
}

/// Every location of `grid`, in row-major order.
pub fn locations<T>(grid: &VecGrid<T>) -> impl Iterator<Item = Location> {
    let dimensions = grid.dimensions();
    let rows = dimensions.rows.0;
    let columns = dimensions.columns.0;

    (0..rows).flat_map(move |row| {
        (0..columns).map(move |column| Location::new(Row(row), Column(column)))
    })
}

pub fn cells<T>(grid: &VecGrid<T>) -> impl Iterator<Item = (Location, &T)> + '_ {
    locations(grid).filter_map(move |location| {
        grid.get(location).ok().map(|cell| (location, cell))
    })
}

/// The vector that carries `from` onto `to`.
pub fn span(from: Location, to: Location) -> Vector {
    Vector::new(
        Rows(to.row.0 - from.row.0),
        Columns(to.column.0 - from.column.0),
    )
}
