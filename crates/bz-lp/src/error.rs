use thiserror::Error;

#[derive(Debug, Error)]
pub enum SolverError {
    #[error("linear program is infeasible")]
    Infeasible,
    #[error("linear program is unbounded")]
    Unbounded,
    #[error("solver backend '{0}' is not available in this build")]
    UnsupportedBackend(String),
    #[error("numerical failure in LP solve: {0}")]
    Numerical(String),
}
