use std::cmp::Reverse;
use std::collections::HashSet;
use std::str::FromStr;

use anyhow::bail;
use tracing::debug;

use crate::common::{parse_int, parse_line, ParseError};

type Page = u32;
type Update = Vec<Page>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Rule {
    before: Page,
    after: Page,
}

impl FromStr for Rule {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Rule, ParseError> {
        let (before, after) = s.split_once('|').ok_or(ParseError::Missing("'|' in rule"))?;

        Ok(Rule {
            before: parse_int(before.trim())?,
            after: parse_int(after.trim())?,
        })
    }
}

impl Rule {
    fn applies_to(&self, update: &[Page]) -> bool {
        update.contains(&self.before) && update.contains(&self.after)
    }

    fn satisfied_by(&self, update: &[Page]) -> bool {
        let position = |page| update.iter().position(|&p| p == page);

        match (position(self.before), position(self.after)) {
            (Some(before), Some(after)) => before < after,
            _ => true,
        }
    }
}

#[derive(Debug, Clone, Default)]
struct Manual {
    rules: Vec<Rule>,
    updates: Vec<Update>,
}

impl Manual {
    fn parse(input: &str) -> anyhow::Result<Self> {
        let mut manual = Manual::default();
        let mut lines = input.lines().map(str::trim).enumerate();

        for (index, line) in lines.by_ref() {
            match line {
                "" if manual.rules.is_empty() => continue,
                "" => break,
                line => {
                    let rule = parse_line(index, line, str::parse::<Rule>)?;
                    manual.rules.push(rule);
                }
            }
        }

        for (index, line) in lines.filter(|(_, line)| !line.is_empty()) {
            let update = parse_line(index, line, |line| {
                line.split(',')
                    .map(|page| parse_int(page.trim()))
                    .collect::<Result<Update, _>>()
            })?;

            manual.updates.push(update);
        }

        debug!(
            rules = manual.rules.len(),
            updates = manual.updates.len(),
            "read safety manual"
        );
        Ok(manual)
    }

    fn is_ordered(&self, update: &[Page]) -> bool {
        self.rules.iter().all(|rule| rule.satisfied_by(update))
    }

    /// Put the pages with the most pages that must follow them first.
    fn reorder(&self, update: &[Page]) -> Update {
        let mut pages = update.to_vec();

        pages.sort_by_cached_key(|&page| {
            let followers: HashSet<Page> = self
                .rules
                .iter()
                .filter(|rule| rule.before == page && rule.applies_to(update))
                .map(|rule| rule.after)
                .collect();

            Reverse(followers.len())
        });

        pages
    }
}

fn middle_page(update: &[Page]) -> anyhow::Result<u64> {
    if update.len() % 2 == 0 {
        bail!("update {:?} has no middle page", update);
    }

    Ok(update[update.len() / 2] as u64)
}

pub fn part1(input: &str) -> anyhow::Result<u64> {
    let manual = Manual::parse(input)?;

    manual
        .updates
        .iter()
        .filter(|update| manual.is_ordered(update))
        .map(|update| middle_page(update))
        .sum()
}

pub fn part2(input: &str) -> anyhow::Result<u64> {
    let manual = Manual::parse(input)?;

    manual
        .updates
        .iter()
        .filter(|update| !manual.is_ordered(update))
        .map(|update| middle_page(&manual.reorder(update)))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
47|53
97|13
97|61
97|47
75|29
61|13
75|53
29|13
97|29
53|29
61|53
97|53
61|29
47|13
75|47
97|75
47|61
75|61
47|29
75|13
53|13

75,47,61,53,29
97,61,53,29,13
75,29,13
75,97,47,61,53
61,13,29
97,13,75,29,47
";

    #[test]
    fn example() {
        assert_eq!(part1(EXAMPLE).unwrap(), 143);
        assert_eq!(part2(EXAMPLE).unwrap(), 123);
    }

    #[test]
    fn reordering() {
        let manual = Manual::parse(EXAMPLE).unwrap();

        assert_eq!(manual.reorder(&[75, 97, 47, 61, 53]), [97, 75, 47, 61, 53]);
        assert_eq!(manual.reorder(&[61, 13, 29]), [61, 29, 13]);
        assert_eq!(manual.reorder(&[97, 13, 75, 29, 47]), [97, 75, 47, 29, 13]);
    }

    #[test]
    fn rules_only_apply_when_both_pages_are_present() {
        let rule: Rule = "1|2".parse().unwrap();

        assert!(rule.satisfied_by(&[2, 3]));
        assert!(!rule.applies_to(&[2, 3]));
        assert!(!rule.satisfied_by(&[2, 1]));
    }

    #[test]
    fn malformed_rule() {
        let err = part1("1|2\n3-4\n\n1,2,3\n").unwrap_err();
        assert!(format!("{:#}", err).starts_with("line 2"));
    }

    #[test]
    fn malformed_update() {
        let err = part1("1|2\n\n1,2,3\n1,x,3\n").unwrap_err();
        assert!(format!("{:#}", err).starts_with("line 4: \"1,x,3\""));
    }

    #[test]
    fn even_updates_have_no_middle() {
        assert!(part1("1|2\n\n1,2\n").is_err());
    }
}
