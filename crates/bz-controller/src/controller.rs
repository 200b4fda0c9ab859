use std::sync::atomic::Ordering;
use std::time::Instant;

use bz_core::{BzError, PrecedenceDag, ProfitMap};
use bz_lp::LpBackend;
use bz_master::Master;
use bz_pricer::{price, PricingInput};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::seed::seed_master;
use crate::types::{Diag, Entry, RunResult, RunStatus};

/// Drives the BZ column-generation loop: seed, then repeatedly solve the
/// master, price an improving column, record history, and either stop or
/// insert the priced column and continue.
pub struct Controller {
    master: Master,
}

impl Controller {
    pub fn new(backend: Arc<dyn LpBackend>) -> Self {
        Self {
            master: Master::new(backend),
        }
    }

    /// Run column generation to completion (or to a stopping condition).
    ///
    /// `callback`, if given, is invoked with every recorded [`Entry`] as it
    /// is produced; a callback failure is logged via `tracing::warn!` and
    /// never aborts the run (`CallbackError` in the error-handling design is
    /// non-fatal by construction).
    pub fn run(
        &mut self,
        dag: &PrecedenceDag,
        profits: &ProfitMap,
        config: &Config,
        mut callback: Option<&mut dyn FnMut(&Entry) -> Result<(), String>>,
    ) -> Result<RunResult, BzError> {
        profits.validate()?;

        seed_master(&mut self.master, dag, profits, &config.seed);

        let started = Instant::now();
        let mut history = Vec::new();
        let mut diagnostics = Diag::default();
        let mut status = RunStatus::MaxIters;
        let mut last_objective = 0.0;

        let mut iter = 0u32;
        while iter < config.max_iters {
            let solution = self
                .master
                .solve()
                .map_err(|e| BzError::Solver(e.to_string()))?;
            last_objective = solution.objective;

            let duals = solution.dense_duals(dag.n_blocks());
            let pricing = price(PricingInput {
                dag,
                profits,
                duals: &duals,
                z: solution.z,
                algo: config.pricing_algo,
            })
            .map_err(|e| BzError::Pricing(e.to_string()))?;

            let dual_norm = duals.iter().map(|d| d * d).sum::<f64>().sqrt();
            let ub = duals.iter().sum::<f64>() + solution.z.max(pricing.total_weight);
            let rel_gap = (ub - solution.objective) / ub.max(1.0);

            let entry = Entry {
                iter,
                objective: solution.objective,
                n_columns: self.master.n_columns(),
                reduced_cost: pricing.reduced_cost,
                total_weight: pricing.total_weight,
                selected_blocks: pricing.selected_blocks.clone(),
                convexity_dual: solution.z,
                dual_norm,
                ub,
                rel_gap,
            };

            debug!(
                iter,
                objective = entry.objective,
                n_columns = entry.n_columns,
                reduced_cost = entry.reduced_cost,
                "column generation iteration"
            );

            if rel_gap < diagnostics.best_rel_gap || history.is_empty() {
                diagnostics.best_rel_gap = rel_gap;
            }
            if entry.objective > diagnostics.best_objective {
                diagnostics.best_objective = entry.objective;
            }
            diagnostics.last_ub = ub;

            history.push(entry.clone());

            if let Some(cb) = callback.as_deref_mut() {
                if let Err(message) = cb(&entry) {
                    warn!(iter, message, "iteration callback failed, continuing");
                }
            }

            if let Some(cancel) = &config.cancel {
                if cancel.load(Ordering::SeqCst) {
                    status = RunStatus::Cancelled;
                    break;
                }
            }
            if let Some(budget) = config.time_budget {
                if started.elapsed() >= budget {
                    status = RunStatus::Cancelled;
                    break;
                }
            }

            if pricing.reduced_cost >= -config.eps {
                status = RunStatus::Converged;
                break;
            }

            if let Some(max_columns) = config.max_columns {
                if self.master.n_columns() as u32 >= max_columns {
                    status = RunStatus::MaxColumnsReached;
                    break;
                }
            }

            // `pricing.total_weight` is the dual-adjusted value used to decide
            // whether to add a column; the master's objective coefficient must
            // be the column's raw profit, Σ profit_b over its blocks.
            let profit: f64 = pricing
                .selected_blocks
                .iter()
                .map(|&b| profits.get(b))
                .sum();
            self.master.add_column(
                pricing.selected_blocks,
                profit,
                format!("iter-{iter}"),
            );
            iter += 1;
        }

        let final_solve = self.master.solve().map_err(|e| BzError::Solver(e.to_string()))?;
        info!(
            iterations = history.len(),
            objective = final_solve.objective,
            status = ?status,
            "column generation finished"
        );

        let columns: Vec<bz_core::Closure> = self
            .master
            .columns()
            .iter()
            .map(|c| bz_core::Closure::new(c.id, c.blocks.clone(), c.profit, c.label.clone()))
            .collect();
        let final_lambda = columns
            .iter()
            .map(|c| final_solve.lambda.get(&c.id).copied().unwrap_or(0.0))
            .collect();

        Ok(RunResult {
            status,
            iterations: history.len() as u32,
            objective: final_solve.objective.max(last_objective),
            time_seconds: started.elapsed().as_secs_f64(),
            history,
            diagnostics,
            columns,
            final_lambda,
        })
    }
}
