use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use bz_core::{BlockId, ColumnId};
use bz_lp::{ConstraintSense, LpBackend, LpProblem};

use crate::error::MasterError;

/// A single restricted-master column: a closure, its profit, and a label for
/// diagnostics (e.g. "root-seed", "iter-14").
#[derive(Debug, Clone)]
pub struct Column {
    pub id: ColumnId,
    pub blocks: Vec<BlockId>,
    pub profit: f64,
    pub label: String,
}

/// Result of solving the restricted master LP: the objective, the
/// convexity dual `z`, one packing dual per covered block, and the current
/// activity `lambda` of every column.
#[derive(Debug, Clone)]
pub struct MasterSolution {
    pub objective: f64,
    pub z: f64,
    pub block_duals: HashMap<BlockId, f64>,
    pub lambda: HashMap<ColumnId, f64>,
}

impl MasterSolution {
    /// Dense dual vector indexed like `ProfitMap`/`PricingInput::duals`,
    /// defaulting to 0 for blocks not yet covered by any column.
    pub fn dense_duals(&self, n_blocks: usize) -> Vec<f64> {
        let mut duals = vec![0.0; n_blocks];
        for (&block, &dual) in &self.block_duals {
            if block.index() < n_blocks {
                duals[block.index()] = dual;
            }
        }
        duals
    }
}

/// The restricted master problem: convexity equality over all columns plus
/// one packing inequality per block any column touches.
///
/// Every `solve` rebuilds the LP from scratch rather than editing a
/// persistent backend session — LP backends differ in whether in-place
/// coefficient edits keep dual extraction valid, and column counts here grow
/// slowly enough that rebuilding is cheap relative to the pricing step.
pub struct Master {
    backend: Arc<dyn LpBackend>,
    columns: Vec<Column>,
    next_id: u64,
    constraint_version: u64,
}

impl Master {
    pub fn new(backend: Arc<dyn LpBackend>) -> Self {
        Self {
            backend,
            columns: Vec::new(),
            next_id: 0,
            constraint_version: 0,
        }
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn constraint_version(&self) -> u64 {
        self.constraint_version
    }

    /// Insert a new closure as a column, returning its fresh id. `blocks` is
    /// sorted on insertion so packing-row membership can use binary search.
    pub fn add_column(&mut self, mut blocks: Vec<BlockId>, profit: f64, label: impl Into<String>) -> ColumnId {
        blocks.sort_unstable();
        blocks.dedup();
        let id = ColumnId::new(self.next_id);
        self.next_id += 1;
        self.columns.push(Column {
            id,
            blocks,
            profit,
            label: label.into(),
        });
        self.constraint_version += 1;
        id
    }

    fn covered_blocks(&self) -> BTreeSet<BlockId> {
        self.columns
            .iter()
            .flat_map(|c| c.blocks.iter().copied())
            .collect()
    }

    fn build_problem(&self) -> (LpProblem, Vec<BlockId>) {
        let n = self.columns.len();
        let mut problem = LpProblem::new(n);
        for (i, column) in self.columns.iter().enumerate() {
            problem.set_obj_coef(i, column.profit);
        }

        let convexity_coeffs: Vec<(usize, f64)> = (0..n).map(|i| (i, 1.0)).collect();
        problem.add_constraint(convexity_coeffs, ConstraintSense::Eq, 1.0);

        let block_rows: Vec<BlockId> = self.covered_blocks().into_iter().collect();
        for &block in &block_rows {
            let coeffs: Vec<(usize, f64)> = self
                .columns
                .iter()
                .enumerate()
                .filter(|(_, c)| c.blocks.binary_search(&block).is_ok())
                .map(|(i, _)| (i, 1.0))
                .collect();
            problem.add_constraint(coeffs, ConstraintSense::Le, 1.0);
        }

        (problem, block_rows)
    }

    /// Solve the current LP. Returns a zero-objective, dual-free solution if
    /// no columns have been added yet.
    pub fn solve(&self) -> Result<MasterSolution, MasterError> {
        if self.columns.is_empty() {
            return Ok(MasterSolution {
                objective: 0.0,
                z: 0.0,
                block_duals: HashMap::new(),
                lambda: HashMap::new(),
            });
        }

        let (problem, block_rows) = self.build_problem();
        let solution = self.backend.solve(&problem)?;

        let z = solution.dual[0];
        let mut block_duals = HashMap::with_capacity(block_rows.len());
        for (i, &block) in block_rows.iter().enumerate() {
            block_duals.insert(block, solution.dual[i + 1]);
        }

        let mut lambda = HashMap::with_capacity(self.columns.len());
        for (i, column) in self.columns.iter().enumerate() {
            lambda.insert(column.id, solution.primal[i]);
        }

        Ok(MasterSolution {
            objective: solution.objective,
            z,
            block_duals,
            lambda,
        })
    }

    /// Solve, rank columns by `(lambda desc, profit desc)`, and keep only
    /// the top `keep_top_k` — plus whichever column was added first, since
    /// it is the controller's initial seed and dropping it could leave the
    /// LP without a feasible starting point.
    pub fn prune(&mut self, keep_top_k: usize) -> Result<(), MasterError> {
        if self.columns.len() <= keep_top_k {
            return Ok(());
        }
        let solution = self.solve()?;

        let mut ranked: Vec<usize> = (0..self.columns.len()).collect();
        ranked.sort_by(|&a, &b| {
            let la = solution.lambda.get(&self.columns[a].id).copied().unwrap_or(0.0);
            let lb = solution.lambda.get(&self.columns[b].id).copied().unwrap_or(0.0);
            lb.partial_cmp(&la)
                .unwrap()
                .then(self.columns[b].profit.partial_cmp(&self.columns[a].profit).unwrap())
        });

        let mut keep: BTreeSet<usize> = ranked.into_iter().take(keep_top_k).collect();
        if !self.columns.is_empty() {
            keep.insert(0);
        }

        let kept_columns: Vec<Column> = self
            .columns
            .iter()
            .enumerate()
            .filter(|(i, _)| keep.contains(i))
            .map(|(_, c)| c.clone())
            .collect();
        self.columns = kept_columns;
        self.constraint_version += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bz_lp::SimplexBackend;

    fn master() -> Master {
        Master::new(Arc::new(SimplexBackend))
    }

    #[test]
    fn empty_master_solves_to_zero() {
        let m = master();
        let solution = m.solve().unwrap();
        assert_eq!(solution.objective, 0.0);
        assert!(solution.block_duals.is_empty());
    }

    #[test]
    fn single_column_takes_the_whole_convexity_weight() {
        let mut m = master();
        m.add_column(vec![BlockId::new(0)], 10.0, "seed");
        let solution = m.solve().unwrap();
        assert!((solution.objective - 10.0).abs() < 1e-6);
    }

    #[test]
    fn packing_constraint_limits_overlapping_columns() {
        let mut m = master();
        let a = m.add_column(vec![BlockId::new(0)], 5.0, "a");
        let b = m.add_column(vec![BlockId::new(0), BlockId::new(1)], 8.0, "b");
        let solution = m.solve().unwrap();
        // The convexity constraint alone already forces sum(lambda) = 1, so
        // the higher-profit column should dominate the LP.
        assert!((solution.objective - 8.0).abs() < 1e-6);
        assert!(solution.lambda.get(&b).copied().unwrap_or(0.0) > 0.0);
        let _ = a;
    }

    #[test]
    fn two_overlapping_patterns_pick_the_higher_profit_one() {
        // Patterns A (profit 100) and B (profit 60), both covering block 0:
        // convexity forces lambda_A + lambda_B = 1, so the LP optimum takes
        // lambda_A = 1, lambda_B = 0, objective = 100.
        let mut m = master();
        let a = m.add_column(vec![BlockId::new(0)], 100.0, "a");
        let b = m.add_column(vec![BlockId::new(0)], 60.0, "b");
        let solution = m.solve().unwrap();
        assert!((solution.objective - 100.0).abs() < 1e-6);
        assert!((solution.lambda.get(&a).copied().unwrap_or(0.0) - 1.0).abs() < 1e-6);
        assert!(solution.lambda.get(&b).copied().unwrap_or(0.0).abs() < 1e-6);
    }

    #[test]
    fn prune_keeps_first_column_as_a_feasible_seed() {
        let mut m = master();
        let seed = m.add_column(vec![], 0.0, "empty-seed");
        for i in 0..5 {
            m.add_column(vec![BlockId::new(i)], i as f64, format!("col-{i}"));
        }
        m.prune(1).unwrap();
        assert!(m.columns().iter().any(|c| c.id == seed));
    }

    #[test]
    fn column_ids_strictly_increase_and_are_never_reused_after_pruning() {
        let mut m = master();
        let ids: Vec<ColumnId> = (0..5)
            .map(|i| m.add_column(vec![BlockId::new(i)], i as f64, format!("col-{i}")))
            .collect();
        for pair in ids.windows(2) {
            assert!(pair[0].value() < pair[1].value());
        }
        m.prune(2).unwrap();
        let surviving: Vec<ColumnId> = m.columns().iter().map(|c| c.id).collect();
        let next = m.add_column(vec![BlockId::new(9)], 1.0, "fresh");
        assert!(!surviving.contains(&next));
        assert!(ids.iter().all(|id| id.value() < next.value()));
    }
}
