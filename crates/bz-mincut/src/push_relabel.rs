use crate::graph::FlowGraph;
use std::collections::VecDeque;

/// Highest-label-ish FIFO preflow push-relabel max-flow.
///
/// This is the "fast" mode: a generic (non-gap-heuristic) push-relabel
/// implementation, O(V^2 E) worst case, which is more than adequate for the
/// column counts a BZ pricing call produces. Active nodes are discharged in
/// FIFO order and, within a discharge, admissible edges are tried in fixed
/// adjacency order — so two runs on the same graph construction always push
/// flow in the same sequence.
///
/// Mutates `graph` in place, leaving it at the residual graph of a maximum
/// flow; callers recover the min cut with [`FlowGraph::reachable_from`].
pub fn max_flow(graph: &mut FlowGraph, s: usize, t: usize) -> f64 {
    let n = graph.n_nodes();
    let mut height = vec![0u32; n];
    let mut excess = vec![0.0f64; n];
    height[s] = n as u32;

    // Saturate every edge leaving the source.
    let source_edges: Vec<usize> = graph.neighbors(s).to_vec();
    for edge_idx in source_edges {
        let cap = graph.residual(edge_idx);
        if cap == 0.0 {
            continue;
        }
        let v = graph.edge_to(edge_idx);
        graph.push_flow(edge_idx, cap);
        excess[v] += cap;
        excess[s] -= cap;
    }

    let mut active: VecDeque<usize> = (0..n)
        .filter(|&v| v != s && v != t && excess[v] > 0.0)
        .collect();

    while let Some(u) = active.pop_front() {
        discharge(graph, u, s, t, &mut height, &mut excess, &mut active);
    }

    excess[t]
}

#[allow(clippy::too_many_arguments)]
fn discharge(
    graph: &mut FlowGraph,
    u: usize,
    s: usize,
    t: usize,
    height: &mut [u32],
    excess: &mut [f64],
    active: &mut VecDeque<usize>,
) {
    while excess[u] > 0.0 {
        let neighbors = graph.neighbors(u).to_vec();
        let mut pushed = false;
        for edge_idx in neighbors {
            if excess[u] == 0.0 {
                break;
            }
            let residual = graph.residual(edge_idx);
            if residual == 0.0 {
                continue;
            }
            let v = graph.edge_to(edge_idx);
            if height[u] != height[v] + 1 {
                continue;
            }
            let amount = excess[u].min(residual);
            graph.push_flow(edge_idx, amount);
            excess[u] -= amount;
            excess[v] += amount;
            pushed = true;
            if v != s && v != t && excess[v] == amount {
                active.push_back(v);
            }
        }
        if !pushed {
            relabel(graph, u, height);
            if height[u] as usize >= 2 * graph.n_nodes() {
                // No admissible path remains; excess cannot drain further.
                break;
            }
        }
    }
}

fn relabel(graph: &FlowGraph, u: usize, height: &mut [u32]) {
    let mut min_height = u32::MAX;
    for &edge_idx in graph.neighbors(u) {
        if graph.residual(edge_idx) == 0.0 {
            continue;
        }
        let v = graph.edge_to(edge_idx);
        min_height = min_height.min(height[v]);
    }
    if min_height != u32::MAX {
        height[u] = min_height + 1;
    } else {
        height[u] += 1;
    }
}
