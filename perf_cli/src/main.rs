use clap::{Parser, Subcommand};
use perf_core::{filter, load_log, trace_access, Config, Formula, Log, Result, Trace};
use serde_json::Value;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "perfutils")]
#[command(about = "Strength estimation and training log search", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Override config file location
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate the load liftable for a target rep count, given a known 1RM
    Load {
        /// Target repetitions
        #[arg(long)]
        reps: f64,

        /// Known one-rep max
        #[arg(long)]
        max: f64,

        /// Formula variant (brzycki, epley, mcglothin, lombardi, mayhew,
        /// oconner, wathan)
        #[arg(long)]
        formula: Option<String>,
    },

    /// Estimate one-rep max from an observed set
    Max {
        /// Repetitions performed
        #[arg(long)]
        reps: f64,

        /// Load used for the set
        #[arg(long)]
        load: f64,

        /// Formula variant
        #[arg(long)]
        formula: Option<String>,
    },

    /// Estimate repetitions achievable at an intensity fraction of 1RM
    Reps {
        /// Intensity in (0, 1]
        #[arg(long)]
        intensity: f64,

        /// Formula variant
        #[arg(long)]
        formula: Option<String>,
    },

    /// Search the training log for items with a matching field
    Search {
        /// Log file (defaults to the configured path)
        #[arg(long)]
        log: Option<PathBuf>,

        /// Field to match on
        #[arg(long, default_value = "item_id")]
        field: String,

        /// Value to match; parsed as JSON when possible, else compared
        /// as a string
        #[arg(long)]
        value: String,
    },
}

fn main() -> Result<()> {
    perf_core::logging::init();

    let cli = Cli::parse();

    let config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Commands::Load { reps, max, formula } => cmd_load(reps, max, formula, &config),
        Commands::Max { reps, load, formula } => cmd_max(reps, load, formula, &config),
        Commands::Reps { intensity, formula } => cmd_reps(intensity, formula, &config),
        Commands::Search { log, field, value } => {
            let log_path = log.unwrap_or_else(|| config.log.path.clone());
            cmd_search(&log_path, &field, &value)
        }
    }
}

/// Resolve the formula from the flag if given, else the configured default
fn pick_formula(flag: Option<&str>, config: &Config) -> Result<Formula> {
    flag.unwrap_or(&config.estimate.formula).parse()
}

fn cmd_load(reps: f64, max: f64, formula: Option<String>, config: &Config) -> Result<()> {
    let formula = pick_formula(formula.as_deref(), config)?;
    println!("{}", formula.load(reps, max));
    Ok(())
}

fn cmd_max(reps: f64, load: f64, formula: Option<String>, config: &Config) -> Result<()> {
    let formula = pick_formula(formula.as_deref(), config)?;
    println!("{}", formula.max(reps, load));
    Ok(())
}

fn cmd_reps(intensity: f64, formula: Option<String>, config: &Config) -> Result<()> {
    let formula = pick_formula(formula.as_deref(), config)?;
    println!("{}", formula.reps(intensity));
    Ok(())
}

fn cmd_search(log_path: &Path, field: &str, value: &str) -> Result<()> {
    let log: Log = load_log(log_path)?;

    // A bare number or quoted string on the command line is valid JSON;
    // anything else is matched as a plain string.
    let target: Value =
        serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    tracing::debug!("Searching {:?} for {} == {}", log_path, field, target);

    for trace in filter(|item| item.field(field) == Some(&target), &log) {
        let item = trace_access(&log, &trace)?;
        println!("{}  {}", format_trace(&trace), item.timestamp()?);
    }

    Ok(())
}

/// Render a trace as dot-separated child indices
fn format_trace(trace: &Trace) -> String {
    trace
        .iter()
        .map(|index| index.to_string())
        .collect::<Vec<_>>()
        .join(".")
}
