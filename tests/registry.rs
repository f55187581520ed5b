use advent2024::{solution, DAYS};

fn solve(day: u8, input: &str) -> (u64, Option<u64>) {
    let solution = solution(day).unwrap_or_else(|| panic!("day {} is missing", day));

    let part1 = (solution.part1)(input).unwrap();
    let part2 = solution.part2.map(|part2| part2(input).unwrap());

    (part1, part2)
}

#[test]
fn every_day_is_registered() {
    for day in 1..=DAYS {
        assert!(solution(day).is_some(), "day {}", day);
    }

    assert!(solution(0).is_none());
    assert!(solution(DAYS + 1).is_none());
}

#[test]
fn stones() {
    assert_eq!(solve(11, "125 17"), (55312, Some(65_601_038_650_482)));
}

#[test]
fn stones_of_any_width() {
    let (part1, part2) = solve(11, "123456789012345678901234567890 0");

    assert!(part1 > 0);
    assert!(part2.unwrap() > part1);
}

#[test]
fn single_part_days() {
    assert_eq!(solve(1, "3   4\n4   3\n2   5\n1   3\n3   9\n3   3\n"), (11, None));
    assert_eq!(solve(9, "2333133121414131402"), (1928, None));
}

#[test]
fn two_part_days() {
    assert_eq!(
        solve(3, "xmul(2,4)&mul[3,7]!^don't()_mul(5,5)+mul(32,64](mul(11,8)undo()?mul(8,5))"),
        (161, Some(48))
    );
    assert_eq!(solve(7, "190: 10 19\n3267: 81 40 27\n83: 17 5\n"), (3457, Some(3457)));
}

#[test]
fn malformed_input_is_an_error() {
    let stones = solution(11).unwrap();
    let err = (stones.part2.unwrap())("1 2 x").unwrap_err();

    assert!(format!("{:#}", err).contains("\"x\""));
}
