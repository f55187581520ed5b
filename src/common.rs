use std::io::{self, Read};
use std::num::ParseIntError;
use std::str::FromStr;
use std::time::{Duration, Instant};

use anyhow::Context;
use regex::Captures;
use thiserror::Error;

/// Everything that can go wrong while reading a puzzle input.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid integer {field:?}")]
    Int {
        field: String,
        #[source]
        source: ParseIntError,
    },

    #[error("{0:?} is not a string of decimal digits")]
    Digits(String),

    #[error("regex group {0} didn't match anything")]
    MissingGroup(usize),

    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unexpected character {0:?}")]
    UnexpectedChar(char),

    #[error("missing {0}")]
    Missing(&'static str),

    #[error("more than one {0}")]
    Duplicate(&'static str),
}

#[inline(always)]
pub fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let result = f();
    let end = Instant::now();
    (result, end - start)
}

pub trait ReadString: Read {
    fn read_string(&mut self) -> io::Result<String> {
        let mut data = String::new();
        self.read_to_string(&mut data).map(|_| data)
    }
}

impl<T: Read> ReadString for T {}

pub trait RegexExtractor<'t> {
    fn field(&self, index: usize) -> Result<&'t str, ParseError>;

    fn parse<T: FromStr<Err = ParseIntError>>(&self, index: usize) -> Result<T, ParseError>;
}

impl<'t> RegexExtractor<'t> for Captures<'t> {
    #[inline]
    fn field(&self, index: usize) -> Result<&'t str, ParseError> {
        self.get(index)
            .map(|group| group.as_str())
            .ok_or(ParseError::MissingGroup(index))
    }

    #[inline]
    fn parse<T: FromStr<Err = ParseIntError>>(&self, index: usize) -> Result<T, ParseError> {
        parse_int(self.field(index)?)
    }
}

#[inline]
pub fn parse_int<T: FromStr<Err = ParseIntError>>(field: &str) -> Result<T, ParseError> {
    field.parse().map_err(|source| ParseError::Int {
        field: field.to_owned(),
        source,
    })
}

/// Parse every whitespace-separated integer in `input`.
pub fn parse_items<T, C>(input: &str) -> Result<C, ParseError>
where
    T: FromStr<Err = ParseIntError>,
    C: FromIterator<T>,
{
    input.split_whitespace().map(parse_int).collect()
}

/// Parse the line at `index`, tagging a failure with its line number.
pub fn parse_line<T>(
    index: usize,
    line: &str,
    parse: impl FnOnce(&str) -> Result<T, ParseError>,
) -> anyhow::Result<T> {
    parse(line).with_context(|| format!("line {}: {:?}", index + 1, line))
}

/// Parse each non-blank line of `input`, tagging failures with the line
/// number they came from.
pub fn parse_lines<T>(
    input: &str,
    mut parse: impl FnMut(&str) -> Result<T, ParseError>,
) -> anyhow::Result<Vec<T>> {
    input
        .lines()
        .map(str::trim)
        .enumerate()
        .filter(|(_, line)| !line.is_empty())
        .map(|(index, line)| parse_line(index, line, &mut parse))
        .collect()
}
