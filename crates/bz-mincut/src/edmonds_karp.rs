use crate::graph::FlowGraph;
use std::collections::VecDeque;

/// Shortest-augmenting-path max-flow (Edmonds–Karp). Slower than push-relabel
/// but its residual graph, being built from a canonical BFS-shortest-path
/// order, yields a closure that more often tightens the LP bound on
/// degenerate inputs (see `bz-mincut`'s module docs).
///
/// Mutates `graph` in place, leaving it at the residual graph of the max
/// flow; the source-reachable side of that residual graph is the min cut.
pub fn max_flow(graph: &mut FlowGraph, s: usize, t: usize) -> f64 {
    let mut total = 0.0;
    loop {
        let Some((path, bottleneck)) = find_augmenting_path(graph, s, t) else {
            break;
        };
        for edge_idx in path {
            graph.push_flow(edge_idx, bottleneck);
        }
        total += bottleneck;
    }
    total
}

/// BFS for a shortest s-to-t path over edges with positive residual
/// capacity; neighbours are visited in fixed adjacency (insertion) order, so
/// the path found is deterministic for a given graph construction.
fn find_augmenting_path(graph: &FlowGraph, s: usize, t: usize) -> Option<(Vec<usize>, f64)> {
    let n = graph.n_nodes();
    let mut visited = vec![false; n];
    let mut via_edge: Vec<Option<usize>> = vec![None; n];
    let mut queue = VecDeque::new();
    visited[s] = true;
    queue.push_back(s);

    while let Some(u) = queue.pop_front() {
        if u == t {
            break;
        }
        for &edge_idx in graph.neighbors(u) {
            if graph.residual(edge_idx) == 0.0 {
                continue;
            }
            let v = graph.edge_to(edge_idx);
            if !visited[v] {
                visited[v] = true;
                via_edge[v] = Some(edge_idx);
                queue.push_back(v);
            }
        }
    }

    if !visited[t] {
        return None;
    }

    let mut path = Vec::new();
    let mut bottleneck = f64::INFINITY;
    let mut cur = t;
    while cur != s {
        let edge_idx = via_edge[cur].expect("path reconstruction reached an unvisited node");
        bottleneck = bottleneck.min(graph.residual(edge_idx));
        path.push(edge_idx);
        // The edge's reverse partner points back at its source.
        cur = graph.edge_to(edge_idx ^ 1);
    }
    path.reverse();
    Some((path, bottleneck))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_max_flow_on_simple_graph() {
        let mut g = FlowGraph::new(4);
        g.add_edge(0, 1, 3.0);
        g.add_edge(0, 2, 2.0);
        g.add_edge(1, 3, 2.0);
        g.add_edge(2, 3, 3.0);
        g.add_edge(1, 2, 1.0);
        let flow = max_flow(&mut g, 0, 3);
        assert!((flow - 5.0).abs() < 1e-9);
    }

    #[test]
    fn returns_zero_when_disconnected() {
        let mut g = FlowGraph::new(3);
        g.add_edge(0, 1, 5.0);
        let flow = max_flow(&mut g, 0, 2);
        assert_eq!(flow, 0.0);
    }
}
