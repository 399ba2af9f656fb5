mod logging;

use std::io::{BufWriter, Write};
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use eccgen_core::Dataset;
use eccgen_eval::{EvalError, check_integrity, evaluate_export, get_summary, render_report};
use eccgen_generate::{FixedClock, GenerateOptions, GenerationEngine, GenerationError};
use logging::{LogFormat, init_logging};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
enum CliError {
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("evaluation error: {0}")]
    Eval(#[from] EvalError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("logging error: {0}")]
    Logging(String),
    #[error("integrity check failed with {0} issue(s)")]
    Integrity(usize),
}

#[derive(Parser, Debug)]
#[command(name = "eccgen", version, about = "Synthetic ERP reference data generator")]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,
    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct GlobalArgs {
    /// TOML file with generation options.
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Seed for reproducible output.
    #[arg(long, global = true)]
    seed: Option<u64>,
    /// Pin "today" (YYYY-MM-DD) for status classification.
    #[arg(long, global = true, value_name = "DATE")]
    today: Option<NaiveDate>,
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print materials as NDJSON.
    Materials,
    /// Print vendors as NDJSON.
    Vendors,
    /// Print purchase orders as NDJSON.
    Orders,
    /// Print the simulated transaction log as NDJSON.
    Transactions {
        #[arg(long)]
        count: Option<usize>,
    },
    /// Print counts per entity, material type and order status.
    Summary {
        /// Render markdown instead of JSON.
        #[arg(long, default_value_t = false)]
        markdown: bool,
    },
    /// Generate a dataset and verify its invariants.
    Check,
    /// Write CSV tables, summary and report into a run directory.
    Export {
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print the JSON Schema of the dataset contract.
    JsonSchema,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_logging(cli.global.log_format).map_err(CliError::Logging)?;

    let engine = build_engine(&cli.global, &cli.command)?;
    run(&engine, cli.command)
}

fn build_engine(global: &GlobalArgs, command: &Command) -> Result<GenerationEngine, CliError> {
    let mut options = match &global.config {
        Some(path) => GenerateOptions::from_toml_file(path)?,
        None => GenerateOptions::default(),
    };
    if let Some(seed) = global.seed {
        options.seed = Some(seed);
    }
    if let Command::Export { out: Some(out) } = command {
        options.out_dir = out.clone();
    }

    let engine = GenerationEngine::new(options)?;
    Ok(match global.today {
        Some(today) => engine.with_clock(FixedClock::at_date(today)),
        None => engine,
    })
}

fn run(engine: &GenerationEngine, command: Command) -> Result<(), CliError> {
    let (seed, mut rng) = engine.rng();
    tracing::debug!(seed, "rng seeded");

    match command {
        Command::Materials => write_ndjson(&engine.generate_materials(&mut rng)?),
        Command::Vendors => write_ndjson(&engine.generate_vendors()?),
        Command::Orders => {
            let dataset = engine.generate_dataset(&mut rng)?;
            write_ndjson(&dataset.purchase_orders)
        }
        Command::Transactions { count } => {
            let materials = engine.generate_materials(&mut rng)?;
            let count = count.unwrap_or(engine.options().transaction_count as usize);
            write_ndjson(&engine.generate_transactions(&materials, count, &mut rng)?)
        }
        Command::Summary { markdown } => {
            let summary = get_summary(engine)?;
            if markdown {
                println!("{}", render_report(&summary, None));
                Ok(())
            } else {
                write_pretty(&summary)
            }
        }
        Command::Check => {
            let dataset = engine.generate_dataset(&mut rng)?;
            let report = check_integrity(&dataset, engine.options());
            write_pretty(&report)?;
            if report.is_ok() {
                Ok(())
            } else {
                Err(CliError::Integrity(report.issues.len()))
            }
        }
        Command::Export { .. } => {
            let export = engine.export()?;
            let evaluation = evaluate_export(engine, &export)?;
            println!("run_dir={}", export.run_dir.display());
            println!("report={}", evaluation.report_path.display());
            Ok(())
        }
        Command::JsonSchema => write_pretty(&schemars::schema_for!(Dataset)),
    }
}

fn write_ndjson<T: Serialize>(rows: &[T]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for row in rows {
        serde_json::to_writer(&mut out, row)?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}

fn write_pretty<T: Serialize>(value: &T) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    serde_json::to_writer_pretty(&mut out, value)?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}
