use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::common::{ParseError, RegexExtractor};

lazy_static! {
    static ref INSTRUCTION: Regex =
        Regex::new(r"do\(\)|don't\(\)|mul\((\d{1,3}),(\d{1,3})\)").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Instruction {
    Do,
    Dont,
    Mul(u64, u64),
}

use Instruction::*;

// Line breaks are not part of the program
fn instructions(input: &str) -> Result<Vec<Instruction>, ParseError> {
    let memory: String = input.lines().collect();

    let instructions = INSTRUCTION
        .captures_iter(&memory)
        .map(|caps| -> Result<Instruction, ParseError> {
            match &caps[0] {
                "do()" => Ok(Do),
                "don't()" => Ok(Dont),
                _ => Ok(Mul(caps.parse(1)?, caps.parse(2)?)),
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(instructions = instructions.len(), "scanned memory");
    Ok(instructions)
}

pub fn part1(input: &str) -> anyhow::Result<u64> {
    Ok(instructions(input)?
        .into_iter()
        .map(|instruction| match instruction {
            Mul(a, b) => a * b,
            Do | Dont => 0,
        })
        .sum())
}

pub fn part2(input: &str) -> anyhow::Result<u64> {
    let mut enabled = true;

    Ok(instructions(input)?
        .into_iter()
        .map(|instruction| match instruction {
            Do => {
                enabled = true;
                0
            }
            Dont => {
                enabled = false;
                0
            }
            Mul(a, b) if enabled => a * b,
            Mul(..) => 0,
        })
        .sum())
}
