use crate::ids::BlockId;

/// Dense profit vector, indexed by [`BlockId`].
///
/// Negative profits are permitted (stripping cost). Blocks with no explicit
/// entry default to `0.0`.
#[derive(Debug, Clone, Default)]
pub struct ProfitMap {
    values: Vec<f64>,
}

impl ProfitMap {
    /// Build a profit map for `n_blocks` blocks, all defaulted to zero profit.
    pub fn zeros(n_blocks: usize) -> Self {
        Self {
            values: vec![0.0; n_blocks],
        }
    }

    /// Build a profit map from a dense vector, indexed by block id.
    pub fn from_vec(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn n_blocks(&self) -> usize {
        self.values.len()
    }

    /// Profit for `block`, or `0.0` if `block` is out of range.
    pub fn get(&self, block: BlockId) -> f64 {
        self.values.get(block.index()).copied().unwrap_or(0.0)
    }

    pub fn set(&mut self, block: BlockId, profit: f64) {
        let idx = block.index();
        if idx >= self.values.len() {
            self.values.resize(idx + 1, 0.0);
        }
        self.values[idx] = profit;
    }

    pub fn iter(&self) -> impl Iterator<Item = (BlockId, f64)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(i, &p)| (BlockId::new(i as u32), p))
    }

    /// Validate that every stored profit is finite (no NaN/Inf stripping costs).
    pub fn validate(&self) -> Result<(), crate::error::BzError> {
        for (block, profit) in self.iter() {
            if !profit.is_finite() {
                return Err(crate::error::BzError::InvalidInput(format!(
                    "profit for block {block} is not finite: {profit}"
                )));
            }
        }
        Ok(())
    }
}
