//! Minimum s-t cut / maximum flow engine backing the BZ pricing subproblem.
//!
//! Exposes a capacitated [`FlowGraph`] with mutable residual capacities and
//! two interchangeable max-flow algorithms ([`push_relabel`] and
//! [`edmonds_karp`]) selected through [`PricingAlgo`]. [`min_cut`] runs
//! either one and recovers the source side of the cut by BFS over the
//! residual graph, never by re-deriving it from the flow values directly.
//!
//! This crate knows nothing about blocks, profits, or precedence — it is a
//! generic min-cut engine. `bz-pricer` is the layer that builds the
//! cut-graph from a precedence DAG and a reduced-cost weighting.

mod cut;
mod edmonds_karp;
mod graph;
mod push_relabel;

pub use cut::{cap_inf, min_cut, CutResult, MinCutError, PricingAlgo};
pub use graph::FlowGraph;
