mod input;
mod output;

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;

use trendline::services::{Analytics, StreakEngine, StreakSummary, TrendEngine};
use trendline::types::{CalendarDate, Config, Window, WindowKey, WindowSelection};

/// Time-series analytics for personal tracking records
#[derive(Parser)]
#[command(name = "trendline")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// JSON array of records (`-` reads stdin)
    #[arg(long, short, global = true, default_value = "-")]
    input: PathBuf,

    /// Window: week, month, 3months, 6months, year, all
    #[arg(long, short, global = true, value_parser = WindowKey::from_str)]
    window: Option<WindowKey>,

    /// Explicit window start (YYYY-MM-DD), used with --to
    #[arg(
        long,
        global = true,
        requires = "to",
        conflicts_with = "window",
        value_parser = CalendarDate::from_str
    )]
    from: Option<CalendarDate>,

    /// Explicit window end (YYYY-MM-DD), used with --from
    #[arg(long, global = true, requires = "from", value_parser = CalendarDate::from_str)]
    to: Option<CalendarDate>,

    /// Use this date as today
    #[arg(long, global = true, value_parser = CalendarDate::from_str)]
    today: Option<CalendarDate>,

    /// Config file (defaults to ~/.trendline/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Debug logging on stderr
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Commands {
    /// Series, summary, comparison, trend, streak and categories (default)
    Report,

    /// Gap-free bucketed series
    Series,

    /// Compare with the preceding window of equal length
    Compare,

    /// First-half vs. second-half trend
    Trend,

    /// Current and longest daily streak
    Streak,

    /// Category breakdown collapsed to the top N
    Categories {
        /// Number of categories kept before "other"
        #[arg(long)]
        top: Option<usize>,
    },
}

impl Cli {
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    fn selection(&self, config: &Config) -> WindowSelection {
        match (self.from, self.to) {
            (Some(start), Some(end)) => WindowSelection::Fixed(Window::new(start, end)),
            _ => WindowSelection::Symbolic(self.window.unwrap_or(config.default_window)),
        }
    }

    pub fn run(self) -> anyhow::Result<()> {
        let mut config = Config::load(self.config.as_deref()).context("failed to load config")?;
        if let Some(Commands::Categories { top: Some(top) }) = &self.command {
            config.top_n = *top;
            config.validate()?;
        }

        let today = self.today.unwrap_or_else(CalendarDate::today);
        let selection = self.selection(&config);

        let normalized = input::read_records(&self.input)
            .with_context(|| format!("failed to read records from {}", self.input.display()))?;
        if !normalized.skipped.is_empty() {
            tracing::warn!(
                skipped = normalized.skipped.len(),
                kept = normalized.records.len(),
                "some records were skipped"
            );
        }
        let records = normalized.records;

        let analytics = Analytics::new(config);

        match self.command.unwrap_or(Commands::Report) {
            Commands::Report => {
                let report = analytics.report(&records, &selection, today)?;
                emit(self.json, &report, || output::render_report(&report))
            }
            Commands::Series => {
                let series = analytics.series(&records, &selection, today)?;
                emit(self.json, &series, || output::render_series(&series))
            }
            Commands::Compare => {
                let cmp = analytics.comparison(&records, &selection, today)?;
                emit(self.json, &cmp, || output::render_comparison(&cmp))
            }
            Commands::Trend => {
                let series = analytics.series(&records, &selection, today)?;
                let trend = TrendEngine::trend(&series);
                emit(self.json, &trend, || output::render_trend(&trend))
            }
            Commands::Streak => {
                let streak = StreakSummary {
                    current: StreakEngine::current(&records, today),
                    longest: StreakEngine::longest(&records),
                };
                emit(self.json, &streak, || output::render_streak(&streak))
            }
            Commands::Categories { .. } => {
                let categories = analytics.top_categories(&records, &selection, today)?;
                emit(self.json, &categories, || output::render_categories(&categories))
            }
        }
    }
}

fn emit<T: Serialize>(json: bool, value: &T, text: impl FnOnce() -> String) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        print!("{}", text());
    }
    Ok(())
}
