use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(author, version, about = "Bienstock-Zuckerberg column generation over a MineLib-style pit instance", long_about = None)]
pub struct Cli {
    /// Set the logging level
    #[arg(long, default_value = "info")]
    pub log_level: tracing::Level,

    /// `.prec` precedence file: one line per block, `id n_preds p1 p2 ... pn`
    #[arg(long)]
    pub precedence: PathBuf,

    /// `.upit`/`.cpit`/`.pcpsp`-style file whose OBJECTIVE_FUNCTION section
    /// gives each block's economic value
    #[arg(long)]
    pub objective: PathBuf,

    /// Optional TOML file overriding run parameters (eps, max_iters, seed, ...)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Where to write the final result document
    #[arg(long, default_value = "bz-result.json")]
    pub output: PathBuf,

    /// Optional path refreshed with a small JSON snapshot after every iteration
    #[arg(long)]
    pub heartbeat: Option<PathBuf>,

    /// Which pricing algorithm prices the max-weight-closure subproblem
    #[arg(long, value_enum, default_value_t = PricingAlgoArg::MinCut)]
    pub pricing_algo: PricingAlgoArg,

    /// LP backend used to solve the restricted master
    #[arg(long, default_value = "simplex")]
    pub lp_backend: String,

    /// How the master problem is seeded before the first solve
    #[arg(long, value_enum, default_value_t = SeedModeArg::Roots)]
    pub seed_mode: SeedModeArg,

    /// `k` parameter for `top-k` / `minimal-up-closure` seed modes
    #[arg(long, default_value_t = 10)]
    pub seed_k: usize,

    /// Reduced-cost convergence tolerance
    #[arg(long, default_value_t = 1e-6)]
    pub eps: f64,

    /// Maximum number of column-generation iterations
    #[arg(long, default_value_t = 1000)]
    pub max_iters: u32,

    /// Stop once this many columns have been generated
    #[arg(long)]
    pub max_columns: Option<u32>,

    /// Wall-clock time budget in seconds
    #[arg(long)]
    pub time_budget_secs: Option<u64>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PricingAlgoArg {
    MinCut,
    EdmondsKarp,
}

impl From<PricingAlgoArg> for bz_mincut::PricingAlgo {
    fn from(value: PricingAlgoArg) -> Self {
        match value {
            PricingAlgoArg::MinCut => bz_mincut::PricingAlgo::MinCut,
            PricingAlgoArg::EdmondsKarp => bz_mincut::PricingAlgo::EdmondsKarp,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedModeArg {
    Roots,
    TopK,
    MinimalUpClosure,
}
