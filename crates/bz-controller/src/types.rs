use bz_core::{BlockId, Closure};
use serde::Serialize;

/// Outcome of one completed run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum RunStatus {
    /// Reduced cost reached `>= -eps`: no improving column remains.
    Converged,
    /// `max_iters` was reached before convergence.
    MaxIters,
    /// `max_columns` was reached before convergence.
    MaxColumnsReached,
    /// The caller's cancellation flag was observed set.
    Cancelled,
    /// A fatal error terminated the run early; message is the display form
    /// of the underlying `BzError`.
    Error(String),
}

/// One iteration's worth of history.
#[derive(Debug, Clone, Serialize)]
pub struct Entry {
    pub iter: u32,
    pub objective: f64,
    pub n_columns: usize,
    pub reduced_cost: f64,
    pub total_weight: f64,
    pub selected_blocks: Vec<BlockId>,
    pub convexity_dual: f64,
    pub dual_norm: f64,
    /// `Σ π_b + max(z, total_weight)` — a diagnostic upper-bound estimate,
    /// never used as a termination certificate (see module docs).
    pub ub: f64,
    pub rel_gap: f64,
}

/// Running best-of diagnostics, finalised when the controller terminates.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Diag {
    pub best_rel_gap: f64,
    pub best_objective: f64,
    pub last_ub: f64,
}

/// Full result of a column-generation run.
#[derive(Debug, Clone, Serialize)]
pub struct RunResult {
    pub status: RunStatus,
    pub iterations: u32,
    pub objective: f64,
    pub time_seconds: f64,
    pub history: Vec<Entry>,
    pub diagnostics: Diag,
    pub columns: Vec<Closure>,
    /// Final LP activity of each entry in `columns`, same order/length —
    /// kept as a parallel vector rather than a `ColumnId`-keyed map since
    /// `serde_json` requires string map keys and `ColumnId` is numeric.
    pub final_lambda: Vec<f64>,
}
