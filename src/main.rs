use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::exit;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use advent2024::common::{timed, ReadString};
use advent2024::{logging, solution, DAYS};

#[derive(Parser)]
#[command(name = "advent2024", version, about = "Advent of Code 2024 puzzle solutions")]
struct Cli {
    /// Day to solve.
    #[arg(value_parser = clap::value_parser!(u8).range(1..=DAYS as i64))]
    day: u8,

    /// Puzzle input. Read from stdin when omitted.
    input: Option<PathBuf>,
}

fn main() {
    logging::init();

    if let Err(err) = run() {
        eprintln!("{:#}", err);
        exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let day = cli.day;

    let (result, total_duration) = timed(|| -> Result<()> {
        let solution = solution(day).with_context(|| format!("No solution for day {}", day))?;

        let input = match &cli.input {
            Some(path) => fs::read_to_string(path)
                .with_context(|| format!("Error reading input from {}", path.display()))?,
            None => io::stdin().read_string().context("Error reading input")?,
        };

        let (answer, duration) = timed(|| (solution.part1)(&input));
        println!("{}", answer.context("Part 1 failed")?);
        info!(?duration, "part 1");

        if let Some(part2) = solution.part2 {
            let (answer, duration) = timed(|| part2(&input));
            println!("{}", answer.context("Part 2 failed")?);
            info!(?duration, "part 2");
        }

        Ok(())
    });

    info!(?total_duration, day, "done");
    result
}
