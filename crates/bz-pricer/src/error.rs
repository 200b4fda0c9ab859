use bz_mincut::MinCutError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PricingError {
    #[error("failed to build cut graph: {0}")]
    CutGraph(#[from] MinCutError),
}
