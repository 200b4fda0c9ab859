use bz_core::{BlockId, PrecedenceDag, ProfitMap};
use bz_master::Master;

use crate::config::SeedMode;

/// Insert the initial seed columns into `master` according to `mode`.
pub fn seed_master(master: &mut Master, dag: &PrecedenceDag, profits: &ProfitMap, mode: &SeedMode) {
    match mode {
        SeedMode::Roots => {
            for root in dag.roots() {
                master.add_column(vec![root], profits.get(root), format!("root-{root}"));
            }
        }
        SeedMode::TopK(k) => {
            for block in top_k_blocks(dag, profits, *k) {
                master.add_column(vec![block], profits.get(block), format!("topk-{block}"));
            }
        }
        SeedMode::MinimalUpClosure(k) => {
            for block in top_k_blocks(dag, profits, *k) {
                let closure = dag.up_closure(block);
                let profit: f64 = closure.iter().map(|&b| profits.get(b)).sum();
                master.add_column(closure, profit, format!("upclosure-{block}"));
            }
        }
    }
}

fn top_k_blocks(dag: &PrecedenceDag, profits: &ProfitMap, k: usize) -> Vec<BlockId> {
    let mut blocks: Vec<BlockId> = dag.blocks().collect();
    blocks.sort_by(|&a, &b| {
        profits
            .get(b)
            .partial_cmp(&profits.get(a))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    blocks.truncate(k);
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use bz_lp::SimplexBackend;
    use std::sync::Arc;

    fn dag() -> PrecedenceDag {
        PrecedenceDag::from_edges(
            3,
            [(BlockId::new(0), BlockId::new(1)), (BlockId::new(1), BlockId::new(2))],
        )
        .unwrap()
    }

    #[test]
    fn roots_seed_emits_one_column_per_root() {
        let dag = dag();
        let mut profits = ProfitMap::zeros(3);
        profits.set(BlockId::new(0), 1.0);
        let mut master = Master::new(Arc::new(SimplexBackend));
        seed_master(&mut master, &dag, &profits, &SeedMode::Roots);
        assert_eq!(master.n_columns(), 1);
    }

    #[test]
    fn minimal_up_closure_seed_is_precedence_feasible() {
        let dag = dag();
        let mut profits = ProfitMap::zeros(3);
        profits.set(BlockId::new(2), 5.0);
        let mut master = Master::new(Arc::new(SimplexBackend));
        seed_master(&mut master, &dag, &profits, &SeedMode::MinimalUpClosure(1));
        assert_eq!(master.n_columns(), 1);
        let column = &master.columns()[0];
        assert!(dag.is_closure(&column.blocks));
        assert_eq!(column.blocks.len(), 3);
    }
}
