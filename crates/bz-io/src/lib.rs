//! Collaborator I/O: MineLib-style text format parsers and run-result/
//! heartbeat writers.
//!
//! Kept firmly on the read/adapt side of the boundary — this crate never
//! calls into `bz-pricer` or `bz-master`, only produces/consumes the plain
//! types `bz-core` and `bz-controller` already expose.

mod blocks;
mod error;
mod heartbeat;
mod optimization;
mod precedence;
mod result;
mod solution;

pub use blocks::{parse_blocks, BlockFile, BlockRecord};
pub use error::IoError;
pub use heartbeat::{write_heartbeat, HeartbeatEntry};
pub use optimization::{parse_objective, OptimizationHeader};
pub use precedence::parse_precedence;
pub use result::write_run_result;
pub use solution::{parse_solution, SelectedBlocks, SolutionKind};
