use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use dupescan::{detect, ConfigOverrides, DetectConfig, Strategy};
use tracing_subscriber::EnvFilter;

/// Find near-duplicate messages between two corpora with planted ground truth.
#[derive(Debug, Parser)]
#[command(name = "dupescan", version, about)]
struct Cli {
    /// YAML configuration file
    #[arg(short, long, default_value = "dupescan.yaml")]
    config: PathBuf,

    /// Strategy to run (repeatable): exact, word_overlap, fingerprint, cosine
    #[arg(short, long = "strategy")]
    strategies: Vec<Strategy>,

    /// Fingerprint trials
    #[arg(short, long)]
    trials: Option<usize>,

    /// Seed for fingerprint anchors
    #[arg(long)]
    seed: Option<u64>,

    /// Run the comparator loops on the rayon pool
    #[arg(long)]
    parallel: bool,

    /// Print the full report as JSON on stdout
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = ConfigOverrides {
        strategies: cli.strategies,
        fingerprint_trials: cli.trials,
        seed: cli.seed,
        use_parallel: cli.parallel.then_some(true),
    };
    let cfg = DetectConfig::load_with(&cli.config, &overrides)
        .with_context(|| format!("loading {}", cli.config.display()))?;

    init_tracing(&cfg);

    let report = detect(&cfg)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{} ({} messages) vs {} ({} messages), {} planted pairs, seed {}",
        report.left,
        report.left_messages,
        report.right,
        report.right_messages,
        report.expected_pairs,
        report.seed
    );
    for strategy in &report.strategies {
        println!("{}", strategy.summary_line());
    }
    Ok(())
}

fn init_tracing(cfg: &DetectConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.log_level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    if cfg.log_json {
        builder.json().init();
    } else {
        builder.init();
    }
}
