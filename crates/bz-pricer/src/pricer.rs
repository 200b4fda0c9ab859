use bz_core::{BlockId, PrecedenceDag, ProfitMap};
use bz_mincut::{cap_inf, min_cut, FlowGraph, PricingAlgo};

use crate::error::PricingError;

/// Everything the pricer needs for one call: the duals coming out of the
/// current master solve, which algorithm to price with, and read-only
/// borrows of the instance data.
pub struct PricingInput<'a> {
    pub dag: &'a PrecedenceDag,
    pub profits: &'a ProfitMap,
    /// Dual price per block, dense and indexed like `ProfitMap`; a block
    /// with no packing constraint yet (not covered by any column) has dual 0.
    pub duals: &'a [f64],
    /// Convexity dual from the master's last solve.
    pub z: f64,
    pub algo: PricingAlgo,
}

/// Result of one pricing call.
#[derive(Debug, Clone)]
pub struct PricingResult {
    pub reduced_cost: f64,
    pub selected_blocks: Vec<BlockId>,
    pub total_weight: f64,
}

fn dual_for(duals: &[f64], block: BlockId) -> f64 {
    duals.get(block.index()).copied().unwrap_or(0.0)
}

/// Solve the max-weight-closure pricing subproblem.
///
/// Builds a cut graph over `{s, t} ∪ blocks`: an `s -> b` edge of capacity
/// `w_b` for non-negative weights, a `b -> t` edge of capacity `-w_b` for
/// negative ones, and a `v -> u` edge of capacity `CAP_INF` for every
/// precedence edge `u -> v`, forcing any finite min cut to keep `u` on the
/// source side whenever `v` is. The source side of the resulting min cut,
/// minus `s` and `t`, is the priced closure.
pub fn price(input: PricingInput<'_>) -> Result<PricingResult, PricingError> {
    let n_blocks = input.dag.n_blocks();
    let s = n_blocks;
    let t = n_blocks + 1;

    let weights: Vec<f64> = input
        .dag
        .blocks()
        .map(|b| input.profits.get(b) - dual_for(input.duals, b))
        .collect();

    let positive_weight_sum: f64 = weights.iter().filter(|&&w| w > 0.0).sum();
    let cap = cap_inf(positive_weight_sum);

    let mut graph = FlowGraph::new(n_blocks + 2);
    for (idx, &w) in weights.iter().enumerate() {
        if w >= 0.0 {
            graph.add_edge(s, idx, w);
        } else {
            graph.add_edge(idx, t, -w);
        }
    }
    for u in input.dag.blocks() {
        for &v in input.dag.successors(u) {
            graph.add_edge(v.index(), u.index(), cap);
        }
    }

    let cut = min_cut(&mut graph, s, t, input.algo)?;

    let total_weight = positive_weight_sum - cut.value;
    let selected_blocks: Vec<BlockId> = (0..n_blocks)
        .filter(|&idx| cut.contains(idx))
        .map(|idx| BlockId::new(idx as u32))
        .collect();

    Ok(PricingResult {
        reduced_cost: input.z - total_weight,
        selected_blocks,
        total_weight,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bz_core::ProfitMap;

    fn chain_dag() -> PrecedenceDag {
        // 0 -> 1 -> 2, a simple chain so selecting block 2 forces 0 and 1.
        PrecedenceDag::from_edges(3, vec![(BlockId::new(0), BlockId::new(1)), (BlockId::new(1), BlockId::new(2))]).unwrap()
    }

    #[test]
    fn single_positive_node_is_selected() {
        let dag = PrecedenceDag::from_edges(1, vec![]).unwrap();
        let mut profits = ProfitMap::zeros(1);
        profits.set(BlockId::new(0), 10.0);
        let duals = vec![2.0];

        let result = price(PricingInput {
            dag: &dag,
            profits: &profits,
            duals: &duals,
            z: 0.0,
            algo: PricingAlgo::MinCut,
        })
        .unwrap();

        assert!((result.total_weight - 8.0).abs() < 1e-9);
        assert!((result.reduced_cost - (-8.0)).abs() < 1e-9);
        assert_eq!(result.selected_blocks, vec![BlockId::new(0)]);
    }

    #[test]
    fn single_negative_node_selects_nothing() {
        let dag = PrecedenceDag::from_edges(1, vec![]).unwrap();
        let mut profits = ProfitMap::zeros(1);
        profits.set(BlockId::new(0), 1.0);
        let duals = vec![5.0];

        let result = price(PricingInput {
            dag: &dag,
            profits: &profits,
            duals: &duals,
            z: 0.0,
            algo: PricingAlgo::MinCut,
        })
        .unwrap();

        assert_eq!(result.total_weight, 0.0);
        assert_eq!(result.reduced_cost, 0.0);
        assert!(result.selected_blocks.is_empty());
    }

    #[test]
    fn chain_closure_is_selected_whole_with_zero_duals() {
        let dag = chain_dag();
        let mut profits = ProfitMap::zeros(3);
        profits.set(BlockId::new(0), 5.0);
        profits.set(BlockId::new(1), 6.0);
        profits.set(BlockId::new(2), 7.0);
        let duals = vec![0.0; 3];

        let result = price(PricingInput {
            dag: &dag,
            profits: &profits,
            duals: &duals,
            z: 0.0,
            algo: PricingAlgo::MinCut,
        })
        .unwrap();

        assert!((result.total_weight - 18.0).abs() < 1e-9);
        assert!((result.reduced_cost - (-18.0)).abs() < 1e-9);
        assert_eq!(
            result.selected_blocks,
            vec![BlockId::new(0), BlockId::new(1), BlockId::new(2)]
        );
    }

    #[test]
    fn selects_whole_chain_when_top_block_is_profitable_enough() {
        let dag = chain_dag();
        let mut profits = ProfitMap::zeros(3);
        profits.set(BlockId::new(0), -1.0);
        profits.set(BlockId::new(1), -1.0);
        profits.set(BlockId::new(2), 10.0);
        let duals = vec![0.0; 3];

        let result = price(PricingInput {
            dag: &dag,
            profits: &profits,
            duals: &duals,
            z: 0.0,
            algo: PricingAlgo::EdmondsKarp,
        })
        .unwrap();

        assert!((result.total_weight - 8.0).abs() < 1e-9);
        assert_eq!(
            result.selected_blocks,
            vec![BlockId::new(0), BlockId::new(1), BlockId::new(2)]
        );
        assert!(result.reduced_cost < 0.0);
    }

    #[test]
    fn all_nonpositive_weights_select_nothing() {
        let dag = chain_dag();
        let profits = ProfitMap::zeros(3);
        let duals = vec![1.0, 1.0, 1.0];

        let result = price(PricingInput {
            dag: &dag,
            profits: &profits,
            duals: &duals,
            z: 2.5,
            algo: PricingAlgo::MinCut,
        })
        .unwrap();

        assert!(result.selected_blocks.is_empty());
        assert_eq!(result.total_weight, 0.0);
        assert!((result.reduced_cost - 2.5).abs() < 1e-9);
    }

    #[test]
    fn repeated_pricing_with_identical_duals_is_idempotent() {
        let dag = chain_dag();
        let mut profits = ProfitMap::zeros(3);
        profits.set(BlockId::new(0), -1.0);
        profits.set(BlockId::new(1), 2.0);
        profits.set(BlockId::new(2), 10.0);
        let duals = vec![0.5, 0.5, 0.5];

        let run = || {
            price(PricingInput {
                dag: &dag,
                profits: &profits,
                duals: &duals,
                z: 1.0,
                algo: PricingAlgo::MinCut,
            })
            .unwrap()
        };

        let first = run();
        let second = run();
        assert_eq!(first.selected_blocks, second.selected_blocks);
        assert_eq!(first.total_weight, second.total_weight);
        assert_eq!(first.reduced_cost, second.reduced_cost);
    }

    #[test]
    fn isolated_profitable_block_is_selected_alone() {
        let dag = PrecedenceDag::from_edges(2, vec![]).unwrap();
        let mut profits = ProfitMap::zeros(2);
        profits.set(BlockId::new(0), 5.0);
        profits.set(BlockId::new(1), -3.0);
        let duals = vec![0.0, 0.0];

        let result = price(PricingInput {
            dag: &dag,
            profits: &profits,
            duals: &duals,
            z: 0.0,
            algo: PricingAlgo::EdmondsKarp,
        })
        .unwrap();

        assert_eq!(result.selected_blocks, vec![BlockId::new(0)]);
        assert!((result.total_weight - 5.0).abs() < 1e-9);
    }
}
