/*!
 * MLQ Scheduler - Command Line Entry Point
 *
 * Loads a workload file, runs the multilevel queue simulation and reports:
 * - the per-slice execution trace
 * - per-process WT/CT/RT/TAT sorted by completion time
 * - averages, also written to a results file
 */

use clap::Parser;
use miette::Result;
use std::path::PathBuf;
use tracing::info;

use mlq_scheduler::io::{default_output_path, render_table, render_trace};
use mlq_scheduler::{
    init_tracing_with, load_workload, write_results, MlqError, MlqScheduler, SchedulerConfig,
};

/// Multilevel Queue scheduling simulator (RR-3 / RR-5 / FCFS)
#[derive(Debug, Parser)]
#[command(name = "mlq", version, about)]
struct Cli {
    /// Workload file with `name;burst_time;arrival_time;queue_id;priority` records
    input: PathBuf,

    /// Results file (default: <input>_output.txt)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON scheduler configuration (default: built-in levels plus MLQ_Q*_QUANTUM overrides)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the full report as JSON instead of the tables
    #[arg(long)]
    json: bool,

    /// Do not print the trace and tables
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    init_tracing_with("warn");
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => SchedulerConfig::from_file(path)?,
        None => SchedulerConfig::from_env()?,
    };

    let specs = load_workload(&cli.input)?;
    info!(processes = specs.len(), input = %cli.input.display(), "Workload ready");

    let report = MlqScheduler::with_config(specs, &config)?.run()?;

    if cli.json {
        let json = serde_json::to_string_pretty(&report).map_err(|e| MlqError::Io(e.to_string()))?;
        println!("{}", json);
    } else if !cli.quiet {
        println!("{}", render_trace(&report.trace));
        println!("{}", render_table(&report));
    }

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&cli.input));
    write_results(&output, &report)?;

    if !cli.quiet && !cli.json {
        println!("Results written to {}", output.display());
    }
    Ok(())
}
