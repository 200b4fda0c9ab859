use crate::error::{BzError, BzResult};
use crate::ids::BlockId;

/// Immutable precedence DAG over dense block ids.
///
/// An edge `u -> v` means "u is a predecessor of v" (u must be extracted
/// before v). Both the successor and predecessor adjacency are stored as CSR
/// (offsets + neighbour list) so that either direction is a contiguous slice
/// lookup, matching how the rest of the core represents graphs without
/// pulling in a general-purpose graph crate.
#[derive(Debug, Clone)]
pub struct PrecedenceDag {
    n_blocks: usize,
    succ_offsets: Vec<u32>,
    succ_neighbors: Vec<BlockId>,
    pred_offsets: Vec<u32>,
    pred_neighbors: Vec<BlockId>,
}

impl PrecedenceDag {
    /// Build a DAG over `n_blocks` dense blocks from an edge iterator.
    ///
    /// Edges are `(u, v)` pairs meaning `u` precedes `v`. Acyclicity is an
    /// invariant the rest of the core assumes but does not re-check; call
    /// [`PrecedenceDag::verify_acyclic`] up front if the input is untrusted.
    pub fn from_edges(
        n_blocks: usize,
        edges: impl IntoIterator<Item = (BlockId, BlockId)>,
    ) -> BzResult<Self> {
        let mut succ: Vec<Vec<BlockId>> = vec![Vec::new(); n_blocks];
        let mut pred: Vec<Vec<BlockId>> = vec![Vec::new(); n_blocks];

        for (u, v) in edges {
            if u.index() >= n_blocks || v.index() >= n_blocks {
                return Err(BzError::InvalidInput(format!(
                    "edge ({u}, {v}) references a block outside [0, {n_blocks})"
                )));
            }
            succ[u.index()].push(v);
            pred[v.index()].push(u);
        }

        Ok(Self::from_adjacency(n_blocks, succ, pred))
    }

    fn from_adjacency(
        n_blocks: usize,
        succ: Vec<Vec<BlockId>>,
        pred: Vec<Vec<BlockId>>,
    ) -> Self {
        let (succ_offsets, succ_neighbors) = compress(&succ);
        let (pred_offsets, pred_neighbors) = compress(&pred);
        Self {
            n_blocks,
            succ_offsets,
            succ_neighbors,
            pred_offsets,
            pred_neighbors,
        }
    }

    pub fn n_blocks(&self) -> usize {
        self.n_blocks
    }

    pub fn blocks(&self) -> impl Iterator<Item = BlockId> {
        (0..self.n_blocks as u32).map(BlockId::new)
    }

    /// Direct predecessors of `block`, as a contiguous slice.
    pub fn predecessors(&self, block: BlockId) -> &[BlockId] {
        slice_for(&self.pred_offsets, &self.pred_neighbors, block)
    }

    /// Direct successors of `block`, as a contiguous slice.
    pub fn successors(&self, block: BlockId) -> &[BlockId] {
        slice_for(&self.succ_offsets, &self.succ_neighbors, block)
    }

    /// Blocks with no predecessors — the natural seed set for `SeedMode::Roots`.
    pub fn roots(&self) -> impl Iterator<Item = BlockId> + '_ {
        self.blocks().filter(|&b| self.predecessors(b).is_empty())
    }

    /// Total number of precedence edges.
    pub fn edge_count(&self) -> usize {
        self.succ_neighbors.len()
    }

    /// The minimal closure containing `block`: `block` plus all of its
    /// (transitive) ancestors. Used by `SeedMode::MinimalUpClosure`.
    pub fn up_closure(&self, block: BlockId) -> Vec<BlockId> {
        let mut visited = vec![false; self.n_blocks];
        let mut stack = vec![block];
        let mut closure = Vec::new();
        visited[block.index()] = true;
        while let Some(b) = stack.pop() {
            closure.push(b);
            for &p in self.predecessors(b) {
                if !visited[p.index()] {
                    visited[p.index()] = true;
                    stack.push(p);
                }
            }
        }
        closure.sort_unstable();
        closure
    }

    /// Verify that the graph is acyclic via Kahn's algorithm (topological
    /// sort by repeatedly removing zero-indegree nodes). Not called
    /// automatically by the pricer or controller — only by callers (or
    /// `bz-io`'s precedence parser) that want the check once, up front.
    pub fn verify_acyclic(&self) -> BzResult<()> {
        let mut indegree: Vec<u32> = (0..self.n_blocks)
            .map(|i| self.predecessors(BlockId::new(i as u32)).len() as u32)
            .collect();
        let mut queue: std::collections::VecDeque<BlockId> = indegree
            .iter()
            .enumerate()
            .filter(|(_, &d)| d == 0)
            .map(|(i, _)| BlockId::new(i as u32))
            .collect();

        let mut visited = 0usize;
        while let Some(b) = queue.pop_front() {
            visited += 1;
            for &s in self.successors(b) {
                indegree[s.index()] -= 1;
                if indegree[s.index()] == 0 {
                    queue.push_back(s);
                }
            }
        }

        if visited != self.n_blocks {
            return Err(BzError::InvalidInput(
                "precedence graph contains a cycle".to_string(),
            ));
        }
        Ok(())
    }

    /// True iff `blocks` is closed under the predecessor relation: every
    /// predecessor of every member is itself a member.
    pub fn is_closure(&self, blocks: &[BlockId]) -> bool {
        let member: std::collections::HashSet<BlockId> = blocks.iter().copied().collect();
        blocks
            .iter()
            .all(|&b| self.predecessors(b).iter().all(|p| member.contains(p)))
    }
}

fn compress(adjacency: &[Vec<BlockId>]) -> (Vec<u32>, Vec<BlockId>) {
    let mut offsets = Vec::with_capacity(adjacency.len() + 1);
    let mut neighbors = Vec::new();
    offsets.push(0u32);
    for list in adjacency {
        neighbors.extend_from_slice(list);
        offsets.push(neighbors.len() as u32);
    }
    (offsets, neighbors)
}

fn slice_for<'a>(offsets: &[u32], neighbors: &'a [BlockId], block: BlockId) -> &'a [BlockId] {
    let i = block.index();
    if i + 1 >= offsets.len() {
        return &[];
    }
    let start = offsets[i] as usize;
    let end = offsets[i + 1] as usize;
    &neighbors[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(v: u32) -> BlockId {
        BlockId::new(v)
    }

    #[test]
    fn chain_predecessors_and_successors() {
        let dag = PrecedenceDag::from_edges(3, [(id(0), id(1)), (id(1), id(2))]).unwrap();
        assert_eq!(dag.predecessors(id(0)), &[]);
        assert_eq!(dag.predecessors(id(1)), &[id(0)]);
        assert_eq!(dag.predecessors(id(2)), &[id(1)]);
        assert_eq!(dag.successors(id(0)), &[id(1)]);
        assert_eq!(dag.successors(id(2)), &[]);
    }

    #[test]
    fn roots_are_blocks_without_predecessors() {
        let dag = PrecedenceDag::from_edges(3, [(id(0), id(2)), (id(1), id(2))]).unwrap();
        let mut roots: Vec<_> = dag.roots().collect();
        roots.sort();
        assert_eq!(roots, vec![id(0), id(1)]);
    }

    #[test]
    fn rejects_out_of_range_edges() {
        let err = PrecedenceDag::from_edges(2, [(id(0), id(5))]).unwrap_err();
        assert!(matches!(err, BzError::InvalidInput(_)));
    }

    #[test]
    fn verify_acyclic_accepts_dag() {
        let dag = PrecedenceDag::from_edges(3, [(id(0), id(1)), (id(1), id(2))]).unwrap();
        assert!(dag.verify_acyclic().is_ok());
    }

    #[test]
    fn verify_acyclic_rejects_cycle() {
        let dag =
            PrecedenceDag::from_edges(3, [(id(0), id(1)), (id(1), id(2)), (id(2), id(0))])
                .unwrap();
        assert!(dag.verify_acyclic().is_err());
    }

    #[test]
    fn up_closure_includes_all_ancestors() {
        let dag = PrecedenceDag::from_edges(4, [(id(0), id(1)), (id(1), id(2)), (id(0), id(2))])
            .unwrap();
        let mut closure = dag.up_closure(id(2));
        closure.sort();
        assert_eq!(closure, vec![id(0), id(1), id(2)]);
    }

    #[test]
    fn is_closure_detects_missing_predecessor() {
        let dag = PrecedenceDag::from_edges(3, [(id(0), id(1)), (id(1), id(2))]).unwrap();
        assert!(!dag.is_closure(&[id(2)]));
        assert!(dag.is_closure(&[id(0), id(1), id(2)]));
        assert!(dag.is_closure(&[]));
    }
}
