//! Linear programming layer for the restricted master problem.
//!
//! `bz-master` builds an [`LpProblem`] fresh on every solve (convexity
//! equality plus one packing row per covered block) and hands it to an
//! [`LpBackend`] selected through [`LpSolverKind`]. The only backend that
//! actually solves anything is [`SimplexBackend`]; `good_lp`'s bundled
//! Clarabel solver was rejected for this role because it does not expose
//! dual variables, which the pricing subproblem needs every iteration.

mod backend;
mod error;
mod problem;
mod registry;

pub use backend::{LpBackend, LpSolution, SimplexBackend, UnsupportedBackend};
pub use error::SolverError;
pub use problem::{Constraint, ConstraintSense, LpProblem};
pub use registry::LpSolverKind;
