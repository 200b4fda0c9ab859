use once_cell::sync::Lazy;
use std::{
    collections::HashMap,
    fmt,
    str::FromStr,
    sync::{Arc, RwLock},
};

use crate::backend::{LpBackend, SimplexBackend, UnsupportedBackend};

type BackendConstructor = fn() -> Arc<dyn LpBackend>;

struct BackendEntry {
    canonical: &'static str,
    constructor: BackendConstructor,
}

struct BackendRegistry {
    entries: HashMap<String, BackendEntry>,
}

impl BackendRegistry {
    fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    fn register(&mut self, name: &'static str, constructor: BackendConstructor) -> bool {
        self.entries
            .insert(
                normalize(name),
                BackendEntry {
                    canonical: name,
                    constructor,
                },
            )
            .is_none()
    }

    fn entry_for(&self, name: &str) -> Option<&BackendEntry> {
        self.entries.get(&normalize(name))
    }

    fn available(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> =
            self.entries.values().map(|entry| entry.canonical).collect();
        names.sort_unstable();
        names
    }
}

static GLOBAL_LP_REGISTRY: Lazy<RwLock<BackendRegistry>> = Lazy::new(|| {
    let mut registry = BackendRegistry::new();
    registry.register("simplex", || Arc::new(SimplexBackend));
    registry.register("cbc", || {
        Arc::new(UnsupportedBackend { name: "cbc" })
    });
    registry.register("cplex", || {
        Arc::new(UnsupportedBackend { name: "cplex" })
    });
    RwLock::new(registry)
});

fn normalize(name: &str) -> String {
    let lower = name.to_ascii_lowercase();
    match lower.as_str() {
        "default" => "simplex".to_string(),
        other => other.to_string(),
    }
}

/// Data-driven LP backend identifier, parsed from config/CLI input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LpSolverKind(&'static str);

impl LpSolverKind {
    pub fn as_str(&self) -> &'static str {
        self.0
    }

    pub fn available() -> Vec<&'static str> {
        GLOBAL_LP_REGISTRY
            .read()
            .expect("LP backend registry lock poisoned")
            .available()
    }

    pub fn build(&self) -> Arc<dyn LpBackend> {
        let registry = GLOBAL_LP_REGISTRY
            .read()
            .expect("LP backend registry lock poisoned");
        (registry
            .entry_for(self.0)
            .expect("LP backend constructor missing for registered kind")
            .constructor)()
    }
}

impl Default for LpSolverKind {
    fn default() -> Self {
        LpSolverKind("simplex")
    }
}

impl fmt::Display for LpSolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl FromStr for LpSolverKind {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let registry = GLOBAL_LP_REGISTRY
            .read()
            .expect("LP backend registry lock poisoned");
        match registry.entry_for(input) {
            Some(entry) => Ok(LpSolverKind(entry.canonical)),
            None => Err(format!(
                "unknown LP backend '{}'; supported values: {}",
                input,
                registry.available().join(", ")
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::LpProblem;

    #[test]
    fn default_is_simplex() {
        assert_eq!(LpSolverKind::default().as_str(), "simplex");
    }

    #[test]
    fn simplex_solves_through_the_registry() {
        let kind: LpSolverKind = "simplex".parse().unwrap();
        let backend = kind.build();
        let problem = LpProblem::new(1);
        assert!(backend.solve(&problem).is_ok());
    }

    #[test]
    fn reserved_backend_names_parse_but_report_unsupported() {
        let kind: LpSolverKind = "cbc".parse().unwrap();
        let backend = kind.build();
        let err = backend.solve(&LpProblem::new(1)).unwrap_err();
        assert!(err.to_string().contains("cbc"));
    }

    #[test]
    fn unknown_backend_name_lists_available() {
        let err = "gurobi".parse::<LpSolverKind>().unwrap_err();
        assert!(err.contains("simplex"));
    }
}
