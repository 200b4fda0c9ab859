use bz_lp::SolverError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MasterError {
    #[error("restricted master LP solve failed: {0}")]
    Solver(#[from] SolverError),
}
