use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use clap::Parser;
use std::fs;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

use milestones::birth::parse_birth;
use milestones::config::{Cli, Config, OutputFormat};
use milestones::elapsed::age_breakdown;
use milestones::render::Report;
use milestones::svg::{self, Theme};
use milestones::MilestoneEngine;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::from_cli(cli)?;
    let birth = parse_birth(&config.birth, &Local::now())?;
    let engine = MilestoneEngine::new().with_order(config.order);

    match config.refresh {
        Some(period) => watch(&engine, &config, &birth, period).await,
        None => emit(&evaluate(&engine, &config, &birth)?, &config),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Logs go to stderr so the report on stdout stays pipeable.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// One full recomputation against the current wall clock.
fn evaluate(
    engine: &MilestoneEngine,
    config: &Config,
    birth: &DateTime<Local>,
) -> Result<Report<Local>> {
    let now = Local::now();
    let records = engine.compute(birth, &now, &config.selections)?;
    let age = age_breakdown(birth.date_naive(), now.date_naive());
    Ok(Report::new(birth.clone(), now, age, records))
}

fn emit(report: &Report<Local>, config: &Config) -> Result<()> {
    match config.format {
        OutputFormat::Text => print!("{}", report.to_text()),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }

    if let Some(dir) = &config.svg_dir {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
        for theme in [Theme::Dark, Theme::Light] {
            let path = dir.join(theme.file_name());
            fs::write(&path, svg::generate_svg(report, theme))
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }
        info!(dir = %dir.display(), "wrote SVG cards");
    }

    Ok(())
}

/// Recomputes every `period` until Ctrl-C. Each tick replaces the previous output.
async fn watch(
    engine: &MilestoneEngine,
    config: &Config,
    birth: &DateTime<Local>,
    period: Duration,
) -> Result<()> {
    let mut ticker = tokio::time::interval(period);
    info!(interval_secs = period.as_secs(), "watching, press Ctrl-C to stop");

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let report = evaluate(engine, config, birth)?;
                if config.format == OutputFormat::Text {
                    // Clear the terminal so only the newest report shows.
                    print!("\x1B[2J\x1B[H");
                }
                emit(&report, config)?;
            }
            signal = tokio::signal::ctrl_c() => {
                signal.context("Failed to listen for Ctrl-C")?;
                info!("stopped");
                return Ok(());
            }
        }
    }
}
