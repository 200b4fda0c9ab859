use std::io::BufRead;

use bz_core::{BlockId, PrecedenceDag};

use crate::blocks::tokenize;
use crate::error::IoError;

/// Parse a `.prec` file: one line per block, `id n_preds p1 p2 … pn`.
///
/// The number of lines determines the block count. Unlike the core's
/// `PrecedenceDag::from_edges`, acyclicity is checked immediately — a
/// malformed "precedence" file accidentally describing a cycle is the most
/// likely source of a cyclic graph reaching the pipeline in practice, so
/// this boundary is where the one-time check belongs.
pub fn parse_precedence(reader: impl BufRead) -> Result<PrecedenceDag, IoError> {
    let mut edges = Vec::new();
    let mut max_id = 0u32;
    let mut n_lines = 0usize;

    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('%') {
            continue;
        }
        n_lines += 1;
        let mut tokens = tokenize(&line);
        let id: u32 = tokens
            .next()
            .ok_or_else(|| IoError::parse(lineno + 1, "missing block id"))?
            .parse()
            .map_err(|_| IoError::parse(lineno + 1, "block id is not an integer"))?;
        let n_preds: usize = tokens
            .next()
            .ok_or_else(|| IoError::parse(lineno + 1, "missing predecessor count"))?
            .parse()
            .map_err(|_| IoError::parse(lineno + 1, "predecessor count is not an integer"))?;
        max_id = max_id.max(id);
        for _ in 0..n_preds {
            let pred: u32 = tokens
                .next()
                .ok_or_else(|| IoError::parse(lineno + 1, "fewer predecessors than declared"))?
                .parse()
                .map_err(|_| IoError::parse(lineno + 1, "predecessor id is not an integer"))?;
            max_id = max_id.max(pred);
            edges.push((BlockId::new(pred), BlockId::new(id)));
        }
    }

    let n_blocks = n_lines.max(max_id as usize + 1);
    let dag = PrecedenceDag::from_edges(n_blocks, edges).map_err(IoError::Model)?;
    dag.verify_acyclic().map_err(IoError::Model)?;
    Ok(dag)
}
