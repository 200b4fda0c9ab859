//! Restricted master problem for BZ column generation: a convexity equality
//! over all closures plus one packing inequality per covered block, solved
//! through an `bz-lp` backend.

mod error;
mod master;

pub use error::MasterError;
pub use master::{Column, Master, MasterSolution};
