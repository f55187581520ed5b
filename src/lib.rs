pub mod common;
pub mod grid;
pub mod logging;

pub mod day1;
pub mod day10;
pub mod day11;
pub mod day2;
pub mod day3;
pub mod day4;
pub mod day5;
pub mod day6;
pub mod day7;
pub mod day8;
pub mod day9;

pub type Part = fn(&str) -> anyhow::Result<u64>;

#[derive(Clone, Copy)]
pub struct Solution {
    pub part1: Part,
    pub part2: Option<Part>,
}

impl Solution {
    fn one(part1: Part) -> Self {
        Solution { part1, part2: None }
    }

    fn both(part1: Part, part2: Part) -> Self {
        Solution {
            part1,
            part2: Some(part2),
        }
    }
}

pub const DAYS: u8 = 11;

pub fn solution(day: u8) -> Option<Solution> {
    Some(match day {
        1 => Solution::one(day1::part1),
        2 => Solution::both(day2::part1, day2::part2),
        3 => Solution::both(day3::part1, day3::part2),
        4 => Solution::both(day4::part1, day4::part2),
        5 => Solution::both(day5::part1, day5::part2),
        6 => Solution::one(day6::part1),
        7 => Solution::both(day7::part1, day7::part2),
        8 => Solution::one(day8::part1),
        9 => Solution::one(day9::part1),
        10 => Solution::both(day10::part1, day10::part2),
        11 => Solution::both(day11::part1, day11::part2),
        _ => return None,
    })
}
