use crate::edmonds_karp;
use crate::graph::FlowGraph;
use crate::push_relabel;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Selects which max-flow algorithm backs [`min_cut`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PricingAlgo {
    /// Fast mode: FIFO preflow push-relabel.
    MinCut,
    /// Accurate mode: shortest-augmenting-path Edmonds–Karp, whose canonical
    /// residual graph more often tightens the LP bound on degenerate cuts.
    EdmondsKarp,
}

impl Default for PricingAlgo {
    fn default() -> Self {
        PricingAlgo::MinCut
    }
}

#[derive(Debug, Error)]
pub enum MinCutError {
    #[error("source and sink must be distinct nodes, both got {0}")]
    SourceEqualsSink(usize),
    #[error("node index {index} is out of range for a graph of {n_nodes} nodes")]
    NodeOutOfRange { index: usize, n_nodes: usize },
}

/// Result of a minimum s-t cut: the cut value and the source-reachable side
/// of the residual graph after a maximum flow has been computed.
#[derive(Debug, Clone)]
pub struct CutResult {
    pub value: f64,
    /// `source_side[v]` is true iff `v` is reachable from `s` over edges
    /// with strictly positive residual capacity once the flow is maximum.
    pub source_side: Vec<bool>,
}

impl CutResult {
    pub fn contains(&self, node: usize) -> bool {
        self.source_side.get(node).copied().unwrap_or(false)
    }
}

/// Compute a minimum s-t cut of `graph` using the selected algorithm.
///
/// Mutates `graph` in place (it becomes the residual graph of the computed
/// maximum flow); callers that need the original capacities again should
/// reconstruct the graph rather than reuse it.
pub fn min_cut(
    graph: &mut FlowGraph,
    s: usize,
    t: usize,
    algo: PricingAlgo,
) -> Result<CutResult, MinCutError> {
    if s == t {
        return Err(MinCutError::SourceEqualsSink(s));
    }
    let n = graph.n_nodes();
    if s >= n {
        return Err(MinCutError::NodeOutOfRange { index: s, n_nodes: n });
    }
    if t >= n {
        return Err(MinCutError::NodeOutOfRange { index: t, n_nodes: n });
    }

    let value = match algo {
        PricingAlgo::MinCut => push_relabel::max_flow(graph, s, t),
        PricingAlgo::EdmondsKarp => edmonds_karp::max_flow(graph, s, t),
    };

    let source_side = graph.reachable_from(s);
    Ok(CutResult { value, source_side })
}

/// A finite sentinel that behaves as infinite capacity for any min cut built
/// from edges whose finite capacities sum to at most `positive_weight_sum`.
/// Computed per call (never a global constant) so it stays proportionate to
/// the instance and never overflows into a non-finite intermediate value.
pub fn cap_inf(positive_weight_sum: f64) -> f64 {
    1.0 + positive_weight_sum
}
