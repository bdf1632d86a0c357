// File: crates/chartgen/src/main.rs
// Summary: Refresh runner; reads measurement records and re-renders the metric charts on a fixed cadence.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use config::{Config, Environment, File};
use tracing::{error, info, warn};

use netchart_core::{CsvSource, CycleReport, DirectorySink, GeneratorConfig, RecordSource};

#[derive(Parser, Debug)]
#[command(name = "chartgen")]
#[command(about = "Render network-quality metrics (latency, jitter, loss, bandwidth) to SVG charts")]
struct Args {
    /// Optional TOML config file; CHARTGEN_* environment variables override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// CSV file with node_id,timestamp,latency,jitter,packet_loss,bandwidth rows
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Directory receiving one <metric>.svg per metric
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Seconds between rendering cycles
    #[arg(long)]
    interval: Option<u64>,

    /// Render a single cycle and exit
    #[arg(long)]
    once: bool,
}

fn main() -> Result<()> {
    let _ = netchart_core::telemetry::init_default_tracing();
    let args = Args::parse();
    let cfg = load_config(&args)?;

    info!(
        input = %cfg.input.display(),
        output = %cfg.output_dir.display(),
        interval_secs = cfg.interval_secs,
        "chart generator started"
    );

    let cycle = cfg.render_cycle();
    let mut source = CsvSource::new(&cfg.input, cfg.max_records);
    let mut sink = DirectorySink::new(&cfg.output_dir);
    let interval = Duration::from_secs(cfg.interval_secs);

    loop {
        let started = Instant::now();
        match source.fetch() {
            Ok(records) => {
                let report = cycle.run(records, &mut sink);
                notify(cfg.notify_file.as_deref(), &report);
            }
            // retried on the next tick
            Err(e) => error!(error = %e, "fetching records failed"),
        }

        if args.once {
            return Ok(());
        }
        std::thread::sleep(interval.saturating_sub(started.elapsed()));
    }
}

/// Defaults, then the config file, then CHARTGEN_* env vars, then CLI flags.
fn load_config(args: &Args) -> Result<GeneratorConfig> {
    let mut builder = Config::builder();
    if let Some(path) = &args.config {
        builder = builder.add_source(File::from(path.as_path()));
    }
    let mut cfg: GeneratorConfig = builder
        .add_source(
            Environment::with_prefix("CHARTGEN")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()
        .context("reading configuration")?
        .try_deserialize()
        .context("parsing configuration")?;

    if let Some(input) = &args.input {
        cfg.input = input.clone();
    }
    if let Some(output) = &args.output {
        cfg.output_dir = output.clone();
    }
    if let Some(interval) = args.interval {
        cfg.interval_secs = interval;
    }
    cfg.validate().context("validating configuration")
}

/// Tell downstream consumers a new generation is available.
fn notify(stamp: Option<&Path>, report: &CycleReport) {
    if !report.any_written() {
        return;
    }
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    info!(written = report.written.len(), ts = now, "charts updated");
    if let Some(path) = stamp {
        if let Err(e) = std::fs::write(path, now.to_string()) {
            warn!(path = %path.display(), error = %e, "could not write update stamp");
        }
    }
}
