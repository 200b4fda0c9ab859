use std::io;
use std::path::Path;

use bz_controller::RunResult;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct PatternJson {
    pattern_id: u64,
    lambda: f64,
    n_blocks: usize,
    blocks: String,
    profit: f64,
}

#[derive(Debug, Serialize)]
struct ResultDocument<'a> {
    status: &'a bz_controller::RunStatus,
    objective: f64,
    iterations: u32,
    history: &'a [bz_controller::Entry],
    patterns: Vec<PatternJson>,
}

/// Write a [`RunResult`] as JSON: run status, objective, iteration history,
/// and the final columns with their LP activity.
pub fn write_run_result(path: impl AsRef<Path>, result: &RunResult) -> io::Result<()> {
    let patterns = result
        .columns
        .iter()
        .zip(result.final_lambda.iter())
        .map(|(column, &lambda)| PatternJson {
            pattern_id: column.id.value(),
            lambda,
            n_blocks: column.blocks().len(),
            blocks: column
                .blocks()
                .iter()
                .map(|b| b.to_string())
                .collect::<Vec<_>>()
                .join(";"),
            profit: column.profit,
        })
        .collect();

    let document = ResultDocument {
        status: &result.status,
        objective: result.objective,
        iterations: result.iterations,
        history: &result.history,
        patterns,
    };

    let json = serde_json::to_string_pretty(&document)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    std::fs::write(path, json)
}
