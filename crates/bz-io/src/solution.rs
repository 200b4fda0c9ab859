use std::io::BufRead;

use bz_core::BlockId;

use crate::blocks::tokenize;
use crate::error::IoError;

/// Which of the two solution file shapes a reader holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolutionKind {
    /// One block id per line.
    Upit,
    /// `block period destination value` per line.
    CpitOrPcpsp,
}

#[derive(Debug, Clone, Default)]
pub struct SelectedBlocks {
    pub blocks: Vec<BlockId>,
}

const SELECTION_THRESHOLD: f64 = 1e-6;

/// Parse a solution file, returning the set of blocks it marks selected.
pub fn parse_solution(reader: impl BufRead, kind: SolutionKind) -> Result<SelectedBlocks, IoError> {
    let mut blocks = Vec::new();
    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('%') {
            continue;
        }
        let mut tokens = tokenize(&line);
        let id: u32 = tokens
            .next()
            .ok_or_else(|| IoError::parse(lineno + 1, "missing block id"))?
            .parse()
            .map_err(|_| IoError::parse(lineno + 1, "block id is not an integer"))?;

        let selected = match kind {
            SolutionKind::Upit => true,
            SolutionKind::CpitOrPcpsp => {
                // period, destination, value
                let _period = tokens.next();
                let _destination = tokens.next();
                let value: f64 = tokens
                    .next()
                    .ok_or_else(|| IoError::parse(lineno + 1, "missing value column"))?
                    .parse()
                    .map_err(|_| IoError::parse(lineno + 1, "value is not a number"))?;
                value > SELECTION_THRESHOLD
            }
        };

        if selected {
            blocks.push(BlockId::new(id));
        }
    }
    blocks.sort_unstable();
    blocks.dedup();
    Ok(SelectedBlocks { blocks })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn upit_style_selects_every_listed_block() {
        let input = "0\n1\n2\n";
        let selected = parse_solution(Cursor::new(input), SolutionKind::Upit).unwrap();
        assert_eq!(selected.blocks, vec![BlockId::new(0), BlockId::new(1), BlockId::new(2)]);
    }

    #[test]
    fn cpit_style_filters_by_value_threshold() {
        let input = "0 1 1 1.0\n1 1 1 0.0\n2 2 1 0.5\n";
        let selected = parse_solution(Cursor::new(input), SolutionKind::CpitOrPcpsp).unwrap();
        assert_eq!(selected.blocks, vec![BlockId::new(0), BlockId::new(2)]);
    }

    #[test]
    fn cpit_style_deduplicates_blocks_across_periods() {
        let input = "0 1 1 1.0\n0 2 1 1.0\n";
        let selected = parse_solution(Cursor::new(input), SolutionKind::CpitOrPcpsp).unwrap();
        assert_eq!(selected.blocks, vec![BlockId::new(0)]);
    }
}
