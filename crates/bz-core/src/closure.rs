use crate::ids::{BlockId, ColumnId};
use serde::Serialize;

/// A precedence-feasible closure, stored as a master-problem column.
///
/// Member blocks are kept sorted to give [`Closure::blocks`] a deterministic
/// order regardless of how the pricer or seeder discovered them.
#[derive(Debug, Clone, Serialize)]
pub struct Closure {
    pub id: ColumnId,
    blocks: Vec<BlockId>,
    pub profit: f64,
    pub label: String,
}

impl Closure {
    pub fn new(id: ColumnId, mut blocks: Vec<BlockId>, profit: f64, label: impl Into<String>) -> Self {
        blocks.sort_unstable();
        blocks.dedup();
        Self {
            id,
            blocks,
            profit,
            label: label.into(),
        }
    }

    /// The empty closure: always feasible, always zero profit.
    pub fn empty(id: ColumnId) -> Self {
        Self::new(id, Vec::new(), 0.0, "empty")
    }

    pub fn blocks(&self) -> &[BlockId] {
        &self.blocks
    }

    pub fn contains(&self, block: BlockId) -> bool {
        self.blocks.binary_search(&block).is_ok()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
