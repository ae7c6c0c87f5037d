use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::engine::{RecordOrder, Selections};
use crate::unit::Unit;

/// Environment variable consulted when no birth date is passed.
pub const BIRTH_ENV: &str = "MILESTONES_BIRTH";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "milestones")]
#[command(about = "Time elapsed since a birth date and the round-number milestones ahead", long_about = None)]
pub struct Cli {
    /// Birth date: YYYY-MM-DD, DD/MM/YYYY or YYYY-MM-DDTHH:MM[:SS] [env: MILESTONES_BIRTH]
    pub birth: Option<String>,

    /// Milestone to track for a unit, e.g. `years=30` (repeatable)
    #[arg(long = "select", value_name = "UNIT=VALUE", value_parser = parse_selection)]
    pub select: Vec<(Unit, i64)>,

    /// JSON file of milestone picks, e.g. {"years": 30, "days": 10000}
    #[arg(long, value_name = "FILE")]
    pub selections: Option<PathBuf>,

    /// Show milestones landing today first, then the soonest
    #[arg(long)]
    pub sort: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Recompute on a timer until interrupted
    #[arg(long)]
    pub watch: bool,

    /// Seconds between recomputations in watch mode
    #[arg(long, default_value = "5", value_parser = clap::value_parser!(u64).range(1..))]
    pub interval: u64,

    /// Also write dark_mode.svg and light_mode.svg into this directory
    #[arg(long, value_name = "DIR")]
    pub svg_dir: Option<PathBuf>,

    /// Log engine details
    #[arg(short, long)]
    pub verbose: bool,
}

/// Resolved run settings.
#[derive(Debug, Clone)]
pub struct Config {
    pub birth: String,
    pub selections: Selections,
    pub order: RecordOrder,
    pub format: OutputFormat,
    /// `Some` in watch mode.
    pub refresh: Option<Duration>,
    pub svg_dir: Option<PathBuf>,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let birth = match cli.birth {
            Some(birth) => birth,
            None => std::env::var(BIRTH_ENV)
                .with_context(|| format!("no birth date given and {BIRTH_ENV} is not set"))?,
        };

        // Command-line picks override the file.
        let mut selections = match &cli.selections {
            Some(path) => load_selections(path)?,
            None => Selections::new(),
        };
        selections.merge(cli.select.into_iter().collect());

        Ok(Self {
            birth,
            selections,
            order: if cli.sort {
                RecordOrder::Proximity
            } else {
                RecordOrder::Canonical
            },
            format: cli.format,
            refresh: cli.watch.then(|| Duration::from_secs(cli.interval)),
            svg_dir: cli.svg_dir,
        })
    }
}

/// Reads a JSON object mapping unit names to milestone values.
pub fn load_selections(path: &Path) -> Result<Selections> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read selections file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse selections file {}", path.display()))
}

fn parse_selection(s: &str) -> Result<(Unit, i64)> {
    let Some((unit, value)) = s.split_once('=') else {
        bail!("expected UNIT=VALUE, got {s:?}");
    };
    let unit: Unit = unit.parse()?;
    let value: i64 = value
        .trim()
        .parse()
        .with_context(|| format!("milestone for {unit} is not a whole number"))?;
    if value <= 0 {
        bail!("milestone for {unit} must be positive");
    }
    Ok((unit, value))
}
