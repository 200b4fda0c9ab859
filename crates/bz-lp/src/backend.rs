use crate::error::SolverError;
use crate::problem::{ConstraintSense, LpProblem};

/// Solution of an [`LpProblem`]: primal values and, critically for column
/// generation, the dual (shadow price) of every constraint row.
#[derive(Debug, Clone)]
pub struct LpSolution {
    pub objective: f64,
    pub primal: Vec<f64>,
    pub dual: Vec<f64>,
}

/// Trait for solving a dense/sparse linear program and returning its duals.
///
/// Mirrors `gat-core`'s `LinearSystemBackend` (solve a system, return the
/// answer) one layer up: here the "system" is an LP and the answer includes
/// shadow prices, because the pricing subproblem needs them to build its
/// reduced-cost weights. `good_lp`'s bundled Clarabel backend does not
/// expose duals, which is why this crate carries its own solver rather than
/// wrapping that crate.
pub trait LpBackend: Send + Sync {
    fn solve(&self, problem: &LpProblem) -> Result<LpSolution, SolverError>;
}

/// A backend name known to the registry but not actually implemented in this
/// build (e.g. a commercial solver that would need an external library).
/// Parses successfully so configuration files naming it get a clear
/// "unsupported" error instead of an "unknown solver" one.
#[derive(Debug, Clone)]
pub struct UnsupportedBackend {
    pub name: &'static str,
}

impl LpBackend for UnsupportedBackend {
    fn solve(&self, _problem: &LpProblem) -> Result<LpSolution, SolverError> {
        Err(SolverError::UnsupportedBackend(self.name.to_string()))
    }
}

const EPS: f64 = 1e-9;

/// Dense two-phase primal simplex.
///
/// `Le`/`Ge` rows get a slack/surplus column that survives into phase 2
/// (never re-entering the basis, but carried through every pivot). `Eq` rows
/// get none — only their phase-1 artificial — since a zero-cost slack on an
/// equality row would let phase 2 relax it to `<=`. Every aux/artificial
/// column's cost is always zero, so the final tableau under that column is
/// the row's shadow price up to a sign that depends on whether the column's
/// original coefficient was +1 or -1 — see `compute_duals`.
///
/// Pivoting uses Bland's rule (lowest index among eligible entering/leaving
/// columns) rather than the steepest-improvement rule: it is slower per
/// problem but guarantees termination without degeneracy bookkeeping, and
/// master-problem LPs here are small enough that the difference is noise.
#[derive(Debug, Clone, Default)]
pub struct SimplexBackend;

struct AuxColumn {
    index: usize,
    sign: f64,
}

impl LpBackend for SimplexBackend {
    fn solve(&self, problem: &LpProblem) -> Result<LpSolution, SolverError> {
        let n_vars = problem.n_vars();
        let n_rows = problem.n_constraints();
        if n_rows == 0 {
            let primal = vec![0.0; n_vars];
            return Ok(LpSolution {
                objective: 0.0,
                primal,
                dual: Vec::new(),
            });
        }

        // Column layout: [structural vars][per-row aux slot, unused for `Eq` rows].
        let n_aux = n_rows;
        let n_cols = n_vars + n_aux;
        let mut tableau = vec![vec![0.0f64; n_cols + 1]; n_rows];
        let mut aux_cols = Vec::with_capacity(n_rows);
        let mut basis = vec![0usize; n_rows];
        let mut artificial_rows = Vec::new();

        for (i, constraint) in problem.constraints().iter().enumerate() {
            let mut rhs = constraint.rhs;
            let mut sense = constraint.sense;
            let mut flip = 1.0;
            if rhs < 0.0 {
                rhs = -rhs;
                flip = -1.0;
                sense = match sense {
                    ConstraintSense::Le => ConstraintSense::Ge,
                    ConstraintSense::Ge => ConstraintSense::Le,
                    ConstraintSense::Eq => ConstraintSense::Eq,
                };
            }
            for &(var, coef) in &constraint.coeffs {
                tableau[i][var] = flip * coef;
            }
            tableau[i][n_cols] = rhs;

            let aux_index = n_vars + i;
            match sense {
                ConstraintSense::Le => {
                    tableau[i][aux_index] = 1.0;
                    aux_cols.push(AuxColumn {
                        index: aux_index,
                        sign: 1.0,
                    });
                    basis[i] = aux_index;
                }
                ConstraintSense::Ge => {
                    // Surplus column carries the row's dual; a *second*,
                    // phase-1-only artificial seeds the basis alongside it.
                    tableau[i][aux_index] = -1.0;
                    aux_cols.push(AuxColumn {
                        index: aux_index,
                        sign: -1.0,
                    });
                    let art_index = n_cols + artificial_rows.len();
                    artificial_rows.push((i, art_index));
                    basis[i] = art_index;
                }
                ConstraintSense::Eq => {
                    // No slack/surplus column: giving an equality row one
                    // would let it relax to `<=`, since the slack is free to
                    // sit positive in phase 2 at zero cost. Seed the basis
                    // with only the phase-1 artificial, and read the row's
                    // dual from that column instead — it started as the same
                    // identity column a slack would have, so the shadow-price
                    // identity `compute_duals` relies on still holds.
                    let art_index = n_cols + artificial_rows.len();
                    artificial_rows.push((i, art_index));
                    aux_cols.push(AuxColumn {
                        index: art_index,
                        sign: 1.0,
                    });
                    basis[i] = art_index;
                }
            }
        }

        if artificial_rows.is_empty() {
            run_phase(&mut tableau, &mut basis, problem.objective(), n_vars + n_aux, false)?;
        } else {
            // Extend every row with the extra artificial columns used only
            // in phase 1 bookkeeping (kept as plain f64 columns appended to
            // the working matrix, distinct from the slack/surplus aux set).
            let n_art = artificial_rows.len();
            for row in tableau.iter_mut() {
                let rhs = row.pop().unwrap();
                row.resize(n_cols + n_art, 0.0);
                row.push(rhs);
            }
            for &(row, art_index) in &artificial_rows {
                tableau[row][art_index] = 1.0;
            }

            let mut phase1_obj = vec![0.0; n_cols + n_art];
            for &(_, art_index) in &artificial_rows {
                phase1_obj[art_index] = -1.0; // minimize sum of artificials == maximize -sum
            }
            run_phase(&mut tableau, &mut basis, &phase1_obj, n_cols + n_art, true)?;

            let phase1_value: f64 = artificial_rows
                .iter()
                .map(|&(row, _)| {
                    if basis[row] >= n_cols {
                        tableau[row][tableau[row].len() - 1]
                    } else {
                        0.0
                    }
                })
                .sum();
            if phase1_value.abs() > 1e-6 {
                return Err(SolverError::Infeasible);
            }

            // Phase 2: forbid artificial columns from re-entering by masking
            // them out of the objective coefficients passed to run_phase.
            let mut phase2_obj = vec![0.0; n_cols + n_art];
            phase2_obj[..n_vars].copy_from_slice(problem.objective());
            run_phase(&mut tableau, &mut basis, &phase2_obj, n_cols, false)?;
        }

        let rhs_col = tableau[0].len() - 1;
        let mut primal = vec![0.0; n_vars];
        for (row, &basic_var) in basis.iter().enumerate() {
            if basic_var < n_vars {
                primal[basic_var] = tableau[row][rhs_col];
            }
        }

        let objective: f64 = primal
            .iter()
            .zip(problem.objective())
            .map(|(x, c)| x * c)
            .sum();

        let dual = compute_duals(&tableau, &basis, problem.objective(), n_vars, &aux_cols);

        Ok(LpSolution {
            objective,
            primal,
            dual,
        })
    }
}

/// Run simplex pivots (Bland's rule) against `tableau`/`basis` until no
/// entering column with positive reduced cost remains under `objective`
/// (restricted to the first `active_cols` columns), or unboundedness is
/// detected. `phase1` only changes the error story: an unbounded phase-1
/// objective is nonsensical and treated as a numerical failure instead.
fn run_phase(
    tableau: &mut [Vec<f64>],
    basis: &mut [usize],
    objective: &[f64],
    active_cols: usize,
    phase1: bool,
) -> Result<(), SolverError> {
    let n_rows = tableau.len();
    let rhs_col = tableau[0].len() - 1;

    loop {
        // Reduced cost of column j: c_j - c_B^T B^{-1} A_j, computed directly
        // from the current tableau (whose columns already are B^{-1} A).
        let mut reduced = vec![0.0f64; active_cols];
        for j in 0..active_cols {
            let mut z = 0.0;
            for (row, &basic_var) in basis.iter().enumerate() {
                let c_b = objective.get(basic_var).copied().unwrap_or(0.0);
                z += c_b * tableau[row][j];
            }
            reduced[j] = objective.get(j).copied().unwrap_or(0.0) - z;
        }

        let entering = (0..active_cols).find(|&j| reduced[j] > EPS);
        let Some(entering) = entering else {
            return Ok(());
        };

        let mut leaving_row = None;
        let mut best_ratio = f64::INFINITY;
        for row in 0..n_rows {
            let coef = tableau[row][entering];
            if coef > EPS {
                let ratio = tableau[row][rhs_col] / coef;
                if ratio < best_ratio - EPS
                    || (ratio < best_ratio + EPS
                        && leaving_row.map(|r| basis[r] > basis[row]).unwrap_or(false))
                {
                    best_ratio = ratio;
                    leaving_row = Some(row);
                }
            }
        }

        let Some(leaving_row) = leaving_row else {
            if phase1 {
                return Err(SolverError::Numerical(
                    "phase-1 objective is unbounded".to_string(),
                ));
            }
            return Err(SolverError::Unbounded);
        };

        pivot(tableau, leaving_row, entering);
        basis[leaving_row] = entering;
    }
}

fn pivot(tableau: &mut [Vec<f64>], row: usize, col: usize) {
    let n_cols = tableau[row].len();
    let pivot_val = tableau[row][col];
    for c in 0..n_cols {
        tableau[row][c] /= pivot_val;
    }
    for r in 0..tableau.len() {
        if r == row {
            continue;
        }
        let factor = tableau[r][col];
        if factor == 0.0 {
            continue;
        }
        for c in 0..n_cols {
            tableau[r][c] -= factor * tableau[row][c];
        }
    }
}

/// Recover constraint shadow prices from the final tableau.
///
/// Every aux column started as `sign_i * e_i` for its row and carries zero
/// objective cost, so after elimination its column equals `sign_i * B^{-1}
/// e_i`. Its reduced cost is therefore `r_j = c_j - z_j = -z_j = -sign_i *
/// y_i`, where `y = c_B^T B^{-1}` is exactly the dual vector of the original
/// LP. Solving for `y_i` gives `y_i = -sign_i * r_j`: for an `Le` row (slack,
/// sign +1) this is just the negated reduced cost of its slack column; a
/// non-binding row leaves its slack basic with `r_j = 0`, i.e. `y_i = 0`.
fn compute_duals(
    tableau: &[Vec<f64>],
    basis: &[usize],
    objective: &[f64],
    n_vars: usize,
    aux_cols: &[AuxColumn],
) -> Vec<f64> {
    let cost_of = |var: usize| -> f64 {
        if var < n_vars {
            objective[var]
        } else {
            0.0
        }
    };
    aux_cols
        .iter()
        .map(|aux| {
            let z: f64 = basis
                .iter()
                .enumerate()
                .map(|(row, &basic_var)| cost_of(basic_var) * tableau[row][aux.index])
                .sum();
            let reduced_cost = 0.0 - z;
            -aux.sign * reduced_cost
        })
        .collect()
}
