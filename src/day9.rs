use std::iter;

use tracing::debug;

use crate::common::ParseError;

type FileId = u64;

/// Expand the dense disk map into one entry per block; `None` is free space.
fn blocks(disk_map: &str) -> Result<Vec<Option<FileId>>, ParseError> {
    let mut blocks = Vec::new();

    for (index, c) in disk_map.chars().filter(|c| !c.is_whitespace()).enumerate() {
        let length = c.to_digit(10).ok_or(ParseError::UnexpectedChar(c))?;
        let block = if index % 2 == 0 {
            Some(index as FileId / 2)
        } else {
            None
        };

        blocks.extend(iter::repeat(block).take(length as usize));
    }

    Ok(blocks)
}

/// Move file blocks, last first, into the leftmost free block until there
/// are no gaps between files.
fn compact(blocks: &mut [Option<FileId>]) {
    let mut free = 0;
    let mut end = blocks.len();

    loop {
        while free < end && blocks[free].is_some() {
            free += 1;
        }
        while end > free && blocks[end - 1].is_none() {
            end -= 1;
        }
        if free >= end {
            break;
        }

        blocks.swap(free, end - 1);
    }
}

fn checksum(blocks: &[Option<FileId>]) -> u64 {
    blocks
        .iter()
        .enumerate()
        .filter_map(|(position, block)| block.map(|id| position as u64 * id))
        .sum()
}

pub fn part1(input: &str) -> anyhow::Result<u64> {
    let mut disk = blocks(input)?;
    debug!(blocks = disk.len(), "expanded disk map");

    compact(&mut disk);
    Ok(checksum(&disk))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(blocks: &[Option<FileId>]) -> String {
        blocks
            .iter()
            .map(|block| match block {
                Some(id) => std::char::from_digit(*id as u32, 10).unwrap(),
                None => '.',
            })
            .collect()
    }

    #[test]
    fn example() {
        assert_eq!(part1("2333133121414131402\n").unwrap(), 1928);
    }

    #[test]
    fn compaction_moves_one_block_at_a_time() {
        let mut disk = blocks("12345").unwrap();
        assert_eq!(layout(&disk), "0..111....22222");

        compact(&mut disk);
        assert_eq!(layout(&disk), "022111222......");
        assert_eq!(checksum(&disk), 60);
    }

    #[test]
    fn already_compact() {
        let mut disk = blocks("90").unwrap();
        compact(&mut disk);

        assert_eq!(checksum(&disk), 0);
        assert_eq!(part1("1").unwrap(), 0);
        assert_eq!(part1("").unwrap(), 0);
    }

    #[test]
    fn digits_only() {
        assert!(part1("12a4").is_err());
    }
}
