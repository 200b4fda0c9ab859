//! Column-generation controller: seeds the restricted master problem, then
//! alternates master solves and pricing calls until reduced cost stops
//! improving, a limit is hit, or the caller cancels.
//!
//! The controller is single-threaded and synchronous by design — it owns
//! its `Master` exclusively for the run's duration. Running several
//! independent controllers concurrently (over disjoint DAG/profit/master
//! instances) is a caller concern, handled at the `bz-cli` layer if at all,
//! never inside this crate.

mod config;
mod controller;
mod seed;
mod types;

pub use config::{Config, SeedMode};
pub use controller::Controller;
pub use types::{Diag, Entry, RunResult, RunStatus};
