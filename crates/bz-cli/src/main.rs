use std::fs::File;
use std::io::BufReader;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

use bz_cli::cli::{Cli, SeedModeArg};
use bz_controller::{Config, Controller, SeedMode};
use bz_io::{parse_objective, parse_precedence};
use bz_lp::LpSolverKind;

fn build_config(cli: &Cli) -> Result<Config> {
    if let Some(path) = &cli.config {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config: Config = toml::from_str(&text)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        return Ok(config);
    }

    let seed = match cli.seed_mode {
        SeedModeArg::Roots => SeedMode::Roots,
        SeedModeArg::TopK => SeedMode::TopK(cli.seed_k),
        SeedModeArg::MinimalUpClosure => SeedMode::MinimalUpClosure(cli.seed_k),
    };

    Ok(Config {
        eps: cli.eps,
        max_iters: cli.max_iters,
        max_columns: cli.max_columns,
        pricing_algo: cli.pricing_algo.into(),
        seed,
        time_budget: cli.time_budget_secs.map(Duration::from_secs),
        cancel: None,
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("installing the tracing subscriber")?;

    let precedence_file = File::open(&cli.precedence)
        .with_context(|| format!("opening precedence file {}", cli.precedence.display()))?;
    let dag = parse_precedence(BufReader::new(precedence_file))
        .with_context(|| format!("parsing precedence file {}", cli.precedence.display()))?;

    let objective_file = File::open(&cli.objective)
        .with_context(|| format!("opening objective file {}", cli.objective.display()))?;
    let profits = parse_objective(BufReader::new(objective_file))
        .with_context(|| format!("parsing objective file {}", cli.objective.display()))?;

    let config = build_config(&cli)?;

    let lp_backend: LpSolverKind = cli
        .lp_backend
        .parse()
        .map_err(|message: String| anyhow::anyhow!(message))?;
    let backend = lp_backend.build();

    info!(
        n_blocks = dag.n_blocks(),
        lp_backend = lp_backend.as_str(),
        "starting column generation"
    );

    let heartbeat_path = cli.heartbeat.clone();
    let mut callback = heartbeat_path.map(|path| {
        let cb: Box<dyn FnMut(&bz_controller::Entry) -> Result<(), String>> =
            Box::new(move |entry: &bz_controller::Entry| {
                let heartbeat = bz_io::HeartbeatEntry {
                    iter: entry.iter,
                    objective: entry.objective,
                    n_columns: entry.n_columns,
                    reduced_cost: entry.reduced_cost,
                    total_weight: entry.total_weight,
                };
                bz_io::write_heartbeat(&path, &heartbeat).map_err(|e| e.to_string())
            });
        cb
    });

    let mut controller = Controller::new(backend);
    let result = controller
        .run(&dag, &profits, &config, callback.as_deref_mut())
        .map_err(|e| anyhow::anyhow!(e.to_string()))?;

    info!(
        status = ?result.status,
        objective = result.objective,
        iterations = result.iterations,
        "column generation finished"
    );

    bz_io::write_run_result(&cli.output, &result)
        .with_context(|| format!("writing result to {}", cli.output.display()))?;

    println!(
        "status={:?} objective={:.6} iterations={} -> {}",
        result.status,
        result.objective,
        result.iterations,
        cli.output.display()
    );

    Ok(())
}
