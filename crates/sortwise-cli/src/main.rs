use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use sortwise_core::app::{DemoConfig, RunReport, run_demo};
use sortwise_core::ports::{SystemClock, UlidGenerator};

/// ランダムな日付列を生成し、Policy が選んだ戦略でソートするデモ
#[derive(Debug, Parser)]
#[command(name = "sortwise", version)]
struct Args {
    /// JSON config file (missing fields take their defaults)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of sequences to sort
    #[arg(long)]
    iterations: Option<usize>,

    /// Sequences longer than this are merge sorted
    #[arg(long)]
    threshold: Option<usize>,

    /// Seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Print reports as JSON instead of log lines
    #[arg(long)]
    json: bool,
}

/// ログは stderr へ（stdout は `--json` の出力専用）
fn init_logging() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false).compact())
        .try_init()?;

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let args = Args::parse();
    init_logging()?;

    // (A) 設定: ファイル → CLI フラグの順に上書き
    let mut config = match &args.config {
        Some(path) => DemoConfig::load(path)?,
        None => DemoConfig::default(),
    };
    if let Some(iterations) = args.iterations {
        config.iterations = iterations;
    }
    if let Some(threshold) = args.threshold {
        config.threshold = threshold;
    }

    // (B) 日付の供給元と RunId 生成器
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut source = config.date_source(rng)?;
    let ids = UlidGenerator::new(SystemClock);

    // (C) Context + Policy でソート
    let reports = run_demo(&config, &mut source, &ids)?;

    // (D) 結果の出力
    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            print_report(report);
        }
    }
    Ok(())
}

fn print_report(report: &RunReport<DateTime<Utc>>) {
    info!(run_id = %report.run_id, algorithm = %report.algorithm, "unsorted: {:?}", dates(&report.unsorted));
    info!(run_id = %report.run_id, algorithm = %report.algorithm, "sorted:   {:?}", dates(&report.sorted));
}

fn dates(values: &[DateTime<Utc>]) -> Vec<String> {
    values.iter().map(|d| d.format("%Y-%m-%d %H:%M:%S").to_string()).collect()
}
