//! Plutonian pebbles.
//!
//! Every blink, each stone is rewritten into one or two stones. The number of
//! stones grows exponentially, but the number of distinct `(stone, blinks
//! remaining)` pairs stays small, so counting goes through [`BlinkCache`]
//! instead of materializing the row.

use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};
use std::iter::{self, Chain, Once};
use std::option;
use std::str::FromStr;

use anyhow::Context;
use num_bigint::BigUint;
use tracing::debug;

use crate::common::ParseError;

pub const PART1_BLINKS: usize = 25;
pub const PART2_BLINKS: usize = 75;

/// An engraved stone. Any non-negative integer is a valid engraving.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Stone(BigUint);

impl Stone {
    #[inline]
    pub fn new(value: u64) -> Self {
        Stone(BigUint::from(value))
    }

    #[inline]
    fn digits(&self) -> usize {
        self.0.to_str_radix(10).len()
    }

    pub fn blink(&self) -> Successors {
        if self.0.bits() == 0 {
            return Successors::one(Stone::new(1));
        }

        let digits = self.digits();
        if digits % 2 == 0 {
            let half = BigUint::from(10u32).pow((digits / 2) as u32);
            Successors::two(Stone(&self.0 / &half), Stone(&self.0 % &half))
        } else {
            Successors::one(Stone(&self.0 * BigUint::from(2024u32)))
        }
    }
}

impl FromStr for Stone {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::Digits(s.to_owned()));
        }

        BigUint::parse_bytes(s.as_bytes(), 10)
            .map(Stone)
            .ok_or_else(|| ParseError::Digits(s.to_owned()))
    }
}

impl Display for Stone {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The stones a single stone turns into after one blink, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Successors {
    first: Stone,
    second: Option<Stone>,
}

impl Successors {
    #[inline]
    fn one(stone: Stone) -> Self {
        Successors {
            first: stone,
            second: None,
        }
    }

    #[inline]
    fn two(left: Stone, right: Stone) -> Self {
        Successors {
            first: left,
            second: Some(right),
        }
    }
}

impl IntoIterator for Successors {
    type Item = Stone;
    type IntoIter = Chain<Once<Stone>, option::IntoIter<Stone>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        iter::once(self.first).chain(self.second)
    }
}

/// Memoized stone counts, keyed by stone and blinks remaining. Entries are
/// pure functions of their key, so they are never invalidated.
#[derive(Debug, Default, Clone)]
pub struct BlinkCache {
    counts: HashMap<(Stone, usize), u64>,
}

impl BlinkCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of stones `stone` becomes after `blinks` blinks.
    pub fn count_after(&mut self, stone: &Stone, blinks: usize) -> u64 {
        if blinks == 0 {
            return 1;
        }

        let key = (stone.clone(), blinks);
        if let Some(&count) = self.counts.get(&key) {
            return count;
        }

        let count: u64 = stone
            .blink()
            .into_iter()
            .map(|next| self.count_after(&next, blinks - 1))
            .sum();

        self.counts.insert(key, count);
        count
    }

    pub fn count_all(&mut self, stones: &[Stone], blinks: usize) -> u64 {
        stones
            .iter()
            .map(|stone| self.count_after(stone, blinks))
            .sum()
    }
}

pub fn parse_stones(input: &str) -> Result<Vec<Stone>, ParseError> {
    input.split_whitespace().map(str::parse).collect()
}

fn count_stones(input: &str, blinks: usize) -> anyhow::Result<u64> {
    let stones = parse_stones(input).context("Failed to parse stones")?;

    let mut cache = BlinkCache::new();
    let count = cache.count_all(&stones, blinks);

    debug!(stones = stones.len(), blinks, cached = cache.len(), "counted stones");
    Ok(count)
}

pub fn part1(input: &str) -> anyhow::Result<u64> {
    count_stones(input, PART1_BLINKS)
}

pub fn part2(input: &str) -> anyhow::Result<u64> {
    count_stones(input, PART2_BLINKS)
}
