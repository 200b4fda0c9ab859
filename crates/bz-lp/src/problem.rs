/// How a constraint row relates its linear combination to its right-hand side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintSense {
    Le,
    Eq,
    Ge,
}

/// A single linear constraint, stored sparsely since the master problem's
/// packing rows each touch only the columns whose closure covers that block.
#[derive(Debug, Clone)]
pub struct Constraint {
    pub coeffs: Vec<(usize, f64)>,
    pub sense: ConstraintSense,
    pub rhs: f64,
}

/// A linear program in "maximize c^T x subject to A x {<=,=,>=} b, x >= 0"
/// form, built fresh by the caller for every solve. `bz-master` rebuilds one
/// of these each time a column is added rather than mutating a persistent
/// backend session, so this type only needs to support the builder calls
/// used while assembling a problem, not incremental re-solves.
#[derive(Debug, Clone, Default)]
pub struct LpProblem {
    objective: Vec<f64>,
    constraints: Vec<Constraint>,
}

impl LpProblem {
    pub fn new(n_vars: usize) -> Self {
        Self {
            objective: vec![0.0; n_vars],
            constraints: Vec::new(),
        }
    }

    pub fn n_vars(&self) -> usize {
        self.objective.len()
    }

    pub fn n_constraints(&self) -> usize {
        self.constraints.len()
    }

    pub fn objective(&self) -> &[f64] {
        &self.objective
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Append a new variable with the given objective coefficient, returning
    /// its index. Existing constraints implicitly carry a zero coefficient
    /// for it until a constraint is added or edited to reference it.
    pub fn add_var(&mut self, obj_coef: f64) -> usize {
        self.objective.push(obj_coef);
        self.objective.len() - 1
    }

    pub fn set_obj_coef(&mut self, var: usize, coef: f64) {
        self.objective[var] = coef;
    }

    pub fn add_constraint(
        &mut self,
        coeffs: Vec<(usize, f64)>,
        sense: ConstraintSense,
        rhs: f64,
    ) -> usize {
        self.constraints.push(Constraint { coeffs, sense, rhs });
        self.constraints.len() - 1
    }

    pub fn modify_rhs(&mut self, constraint: usize, rhs: f64) {
        self.constraints[constraint].rhs = rhs;
    }
}
