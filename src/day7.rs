use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use joinery::prelude::*;
use lazy_format::lazy_format;
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::common::{parse_int, parse_items, parse_lines, ParseError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Multiply,
    Concatenate,
}

use Operator::*;

impl Operator {
    /// `None` when the result doesn't fit; no target is that large.
    #[inline]
    fn apply(self, lhs: u64, rhs: u64) -> Option<u64> {
        match self {
            Add => lhs.checked_add(rhs),
            Multiply => lhs.checked_mul(rhs),
            Concatenate => {
                let digits = rhs.checked_ilog10().unwrap_or(0) + 1;
                lhs.checked_mul(10u64.checked_pow(digits)?)?.checked_add(rhs)
            }
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Add => "+".fmt(f),
            Multiply => "*".fmt(f),
            Concatenate => "||".fmt(f),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equation {
    target: u64,
    operands: Vec<u64>,
}

impl FromStr for Equation {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        let (target, operands) = s.split_once(':').ok_or(ParseError::Missing("':' after target"))?;
        let operands: Vec<u64> = parse_items::<u64, _>(operands)?;

        if operands.is_empty() {
            return Err(ParseError::Missing("operands"));
        }

        Ok(Equation {
            target: parse_int(target.trim())?,
            operands,
        })
    }
}

impl Equation {
    /// Find operators, evaluated left to right, that make the operands
    /// produce the target.
    ///
    /// Running values only ever grow, so any that pass the target are
    /// dropped as soon as they appear.
    pub fn solve(&self, operators: &[Operator]) -> Option<Vec<Operator>> {
        let target = self.target;
        let (&first, rest) = self.operands.split_first()?;

        let mut running: HashMap<u64, Vec<Operator>> = HashMap::new();
        running.insert(first, Vec::new());

        for &operand in rest {
            running = running
                .into_iter()
                .flat_map(|(value, used)| {
                    operators.iter().filter_map(move |&operator| {
                        let next = operator.apply(value, operand).filter(|&next| next <= target)?;
                        let mut used = used.clone();
                        used.push(operator);
                        Some((next, used))
                    })
                })
                .collect();
        }

        running.remove(&target)
    }
}

fn calibrate(input: &str, operators: &[Operator]) -> anyhow::Result<u64> {
    let equations: Vec<Equation> = parse_lines(input, str::parse::<Equation>)?;
    debug!(equations = equations.len(), "read calibration equations");

    Ok(equations
        .par_iter()
        .filter_map(|equation| {
            let used = equation.solve(operators)?;

            let steps: Vec<_> = used
                .iter()
                .zip(&equation.operands[1..])
                .map(|(operator, operand)| lazy_format!("{} {}", operator, operand))
                .collect();
            trace!(
                "{} = {} {}",
                equation.target,
                equation.operands[0],
                steps.join_with(' ')
            );

            Some(equation.target)
        })
        .sum())
}

pub fn part1(input: &str) -> anyhow::Result<u64> {
    calibrate(input, &[Add, Multiply])
}

pub fn part2(input: &str) -> anyhow::Result<u64> {
    calibrate(input, &[Add, Multiply, Concatenate])
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
190: 10 19
3267: 81 40 27
83: 17 5
156: 15 6
7290: 6 8 6 15
161011: 16 10 13
192: 17 8 14
21037: 9 7 18 13
292: 11 6 16 20
";

    fn equation(s: &str) -> Equation {
        s.parse().unwrap()
    }

    #[test]
    fn example() {
        assert_eq!(part1(EXAMPLE).unwrap(), 3749);
        assert_eq!(part2(EXAMPLE).unwrap(), 11387);
    }

    #[test]
    fn solutions_name_their_operators() {
        assert_eq!(equation("190: 10 19").solve(&[Add, Multiply]), Some(vec![Multiply]));
        assert_eq!(
            equation("292: 11 6 16 20").solve(&[Add, Multiply]),
            Some(vec![Add, Multiply, Add])
        );
        assert_eq!(
            equation("7290: 6 8 6 15").solve(&[Add, Multiply, Concatenate]),
            Some(vec![Multiply, Concatenate, Multiply])
        );
        assert_eq!(equation("83: 17 5").solve(&[Add, Multiply, Concatenate]), None);
    }

    #[test]
    fn single_operand() {
        assert_eq!(equation("5: 5").solve(&[Add]), Some(vec![]));
        assert_eq!(equation("5: 4").solve(&[Add]), None);
    }

    #[test]
    fn concatenation() {
        assert_eq!(Concatenate.apply(12, 345), Some(12345));
        assert_eq!(Concatenate.apply(1, 0), Some(10));
        assert_eq!(Concatenate.apply(u64::MAX, 1), None);
    }

    #[test]
    fn malformed_equations() {
        assert!(part1("190 10 19\n").is_err());
        assert!(part1("190:\n").is_err());
        assert!(part1("x: 1 2\n").is_err());
    }
}
