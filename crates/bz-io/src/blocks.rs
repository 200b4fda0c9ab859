use std::io::BufRead;

use crate::error::IoError;

/// One parsed line of a `.blocks` file: coordinates plus arbitrary trailing
/// attributes (tonnage, grade, etc.) the pricing core never looks at.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockRecord {
    pub id: u32,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub attrs: Vec<f64>,
}

#[derive(Debug, Clone, Default)]
pub struct BlockFile {
    pub blocks: Vec<BlockRecord>,
}

/// Tokenize a `.blocks`/`.prec` line: whitespace-separated, with `:` treated
/// as whitespace too (some MineLib variants use colon-delimited columns).
pub(crate) fn tokenize(line: &str) -> impl Iterator<Item = &str> {
    line.split(|c: char| c.is_whitespace() || c == ':')
        .filter(|tok| !tok.is_empty())
}

fn is_comment_or_blank(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with('%')
}

/// Parse a `.blocks` file: one block per non-comment line, `id x y z attr...`.
pub fn parse_blocks(reader: impl BufRead) -> Result<BlockFile, IoError> {
    let mut blocks = Vec::new();
    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        if is_comment_or_blank(&line) {
            continue;
        }
        let mut tokens = tokenize(&line);
        let id: u32 = tokens
            .next()
            .ok_or_else(|| IoError::parse(lineno + 1, "missing block id"))?
            .parse()
            .map_err(|_| IoError::parse(lineno + 1, "block id is not an integer"))?;
        let mut coord = || -> Result<f64, IoError> {
            tokens
                .next()
                .ok_or_else(|| IoError::parse(lineno + 1, "missing coordinate"))?
                .parse()
                .map_err(|_| IoError::parse(lineno + 1, "coordinate is not a number"))
        };
        let x = coord()?;
        let y = coord()?;
        let z = coord()?;
        let mut attrs = Vec::new();
        for tok in tokens {
            let value: f64 = tok
                .parse()
                .map_err(|_| IoError::parse(lineno + 1, "attribute is not a number"))?;
            attrs.push(value);
        }
        blocks.push(BlockRecord { id, x, y, z, attrs });
    }
    Ok(BlockFile { blocks })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parses_blocks_and_skips_comments() {
        let input = "% header\n0 1.0 2.0 3.0 0.5\n1 4.0 5.0 6.0 0.25 10\n";
        let file = parse_blocks(Cursor::new(input)).unwrap();
        assert_eq!(file.blocks.len(), 2);
        assert_eq!(file.blocks[0].id, 0);
        assert_eq!(file.blocks[1].attrs, vec![0.25, 10.0]);
    }

    #[test]
    fn rejects_missing_coordinates() {
        let input = "0 1.0\n";
        let err = parse_blocks(Cursor::new(input)).unwrap_err();
        assert!(matches!(err, IoError::Parse { .. }));
    }
}
