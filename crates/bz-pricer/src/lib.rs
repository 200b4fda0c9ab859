//! Pricing subproblem: builds a cut-graph from the current duals and a
//! precedence DAG, solves it with `bz-mincut`, and extracts a candidate
//! closure plus its reduced cost for the column-generation controller.

mod error;
mod pricer;

pub use error::PricingError;
pub use pricer::{price, PricingInput, PricingResult};
