use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::time::Duration;

use bz_mincut::PricingAlgo;
use serde::{Deserialize, Serialize};

/// How the controller populates the master problem before the first solve.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SeedMode {
    /// One singleton column per DAG root. Always precedence-feasible.
    Roots,
    /// One singleton column per one of the `k` highest-profit blocks.
    /// Feasible only because the convexity constraint tolerates a fractional
    /// combination with the (implicit, zero-profit) empty pattern; a
    /// deliberate warm start that trades transient LP non-tightness for
    /// strong initial duals.
    TopK(usize),
    /// One column per one of the `k` highest-profit blocks, but using each
    /// block's minimal up-closure (itself plus every ancestor) instead of a
    /// bare singleton — strictly feasible, at the cost of larger seed
    /// columns than `TopK`.
    MinimalUpClosure(usize),
}

/// Run parameters for one column-generation call. Serializable so `bz-cli`
/// can load it from a TOML file; the cancellation flag is supplied
/// separately to [`crate::Controller::run`] since `Arc<AtomicBool>` has no
/// sensible textual representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Reduced-cost tolerance: a pricing call with `reduced_cost >= -eps`
    /// is treated as non-improving and triggers convergence.
    pub eps: f64,
    pub max_iters: u32,
    pub max_columns: Option<u32>,
    pub pricing_algo: PricingAlgo,
    pub seed: SeedMode,
    pub time_budget: Option<Duration>,
    #[serde(skip)]
    pub cancel: Option<Arc<AtomicBool>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            eps: 1e-6,
            max_iters: 1000,
            max_columns: None,
            pricing_algo: PricingAlgo::MinCut,
            seed: SeedMode::Roots,
            time_budget: None,
            cancel: None,
        }
    }
}
