//! Production plan entry point: CLI wiring and config loading.

use anyhow::{Context, bail};
use clap::Parser;

use production_plan::cli::{Args, Command, PlanArgs, RequestSource};
use production_plan::config::ServiceConfig;
use production_plan::dispatch::{self, PlanSummary};
use production_plan::io::export::export_csv;
use production_plan::scenario;
use production_plan::telemetry::init_tracing;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ServiceConfig::from_toml_file(path)?,
        None => ServiceConfig::default(),
    };
    if let Command::Serve(serve) = &args.command {
        serve.apply(&mut config.server);
    }

    let errors = config.validate();
    if !errors.is_empty() {
        let joined = errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n");
        bail!("{joined}");
    }

    init_tracing(&config.logging);

    match args.command {
        Command::Plan(plan) => run_plan(&plan),
        Command::Serve(_) => run_server(&config),
    }
}

fn run_plan(args: &PlanArgs) -> anyhow::Result<()> {
    let request = match args.source() {
        RequestSource::File(path) => scenario::from_json_file(&path)?,
        RequestSource::Preset(name) => scenario::from_preset(&name)?,
    };

    let plan = dispatch::production_plan(&request)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        for entry in &plan {
            println!("{entry}");
        }
        println!("\n{}", PlanSummary::new(request.load, &plan));
    }

    if let Some(path) = &args.plan_out {
        export_csv(&plan, path)
            .with_context(|| format!("failed to write CSV to {}", path.display()))?;
        tracing::info!(path = %path.display(), "plan written");
    }

    Ok(())
}

#[cfg(feature = "api")]
fn run_server(config: &ServiceConfig) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Runtime::new().context("failed to create tokio runtime")?;
    runtime
        .block_on(production_plan::api::serve(&config.server))
        .context("API server failed")
}

#[cfg(not(feature = "api"))]
fn run_server(_config: &ServiceConfig) -> anyhow::Result<()> {
    bail!("this build has no HTTP API; rebuild with the `api` feature")
}
