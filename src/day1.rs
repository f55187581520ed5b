use tracing::debug;

use crate::common::{parse_int, parse_lines, ParseError};

fn parse_pair(line: &str) -> Result<(u64, u64), ParseError> {
    let fields: Vec<&str> = line.split_whitespace().collect();

    match fields.as_slice() {
        [left, right] => Ok((parse_int(left)?, parse_int(right)?)),
        _ => Err(ParseError::FieldCount {
            expected: 2,
            found: fields.len(),
        }),
    }
}

pub fn part1(input: &str) -> anyhow::Result<u64> {
    let (mut left, mut right): (Vec<u64>, Vec<u64>) =
        parse_lines(input, parse_pair)?.into_iter().unzip();

    debug!(locations = left.len(), "read location lists");

    left.sort_unstable();
    right.sort_unstable();

    Ok(left
        .iter()
        .zip(&right)
        .map(|(&a, &b)| a.abs_diff(b))
        .sum())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
3   4
4   3
2   5
1   3
3   9
3   3
";

    #[test]
    fn example() {
        assert_eq!(part1(EXAMPLE).unwrap(), 11);
    }

    #[test]
    fn lines_need_two_columns() {
        let err = part1("1   2\n3\n").unwrap_err();
        let root = err.downcast_ref::<ParseError>().unwrap();

        assert!(matches!(
            root,
            ParseError::FieldCount {
                expected: 2,
                found: 1
            }
        ));
    }
}
