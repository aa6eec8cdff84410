//! One-call analytics over a record set
//!
//! Each tracker view (expenses, climbing, journal activity) maps its own
//! records into [`Record`]s and asks for a [`Report`]; the window is resolved
//! once and every statistic is computed from that same window.

use crate::services::{Aggregator, ComparisonEngine, StreakEngine, TopNCollapser, TrendEngine};
use crate::types::{
    CalendarDate, CategoryTotals, Comparison, Config, Direction, Record, Result, Series,
    SeriesSummary, Trend, Window, WindowSelection,
};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StreakSummary {
    pub current: u32,
    pub longest: u32,
}

/// Everything a tracker view shows for one window
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub series: Series,
    pub summary: SeriesSummary,
    pub comparison: Comparison,
    pub trend: Trend,
    pub trend_direction: Direction,
    pub streak: StreakSummary,
    pub top_categories: CategoryTotals,
}

pub struct Analytics {
    config: Config,
}

impl Analytics {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Concrete window for a selection, relative to `today`
    pub fn resolve_window(
        &self,
        records: &[Record],
        selection: &WindowSelection,
        today: CalendarDate,
    ) -> Result<Window> {
        let window = match selection {
            WindowSelection::Fixed(window) => *window,
            WindowSelection::Symbolic(key) => {
                key.resolve(today, Aggregator::earliest(records), self.config.epoch)
            }
        };
        window.validate()?;
        tracing::debug!(%window, "resolved window");
        Ok(window)
    }

    pub fn series(
        &self,
        records: &[Record],
        selection: &WindowSelection,
        today: CalendarDate,
    ) -> Result<Series> {
        let window = self.resolve_window(records, selection, today)?;
        Aggregator::series(records, &window)
    }

    pub fn comparison(
        &self,
        records: &[Record],
        selection: &WindowSelection,
        today: CalendarDate,
    ) -> Result<Comparison> {
        let window = self.resolve_window(records, selection, today)?;
        ComparisonEngine::for_selection(records, selection, &window)
    }

    /// Top categories of the window, collapsed to the configured N
    pub fn top_categories(
        &self,
        records: &[Record],
        selection: &WindowSelection,
        today: CalendarDate,
    ) -> Result<CategoryTotals> {
        let window = self.resolve_window(records, selection, today)?;
        Ok(self.collapse(records, &window))
    }

    pub fn report(
        &self,
        records: &[Record],
        selection: &WindowSelection,
        today: CalendarDate,
    ) -> Result<Report> {
        let window = self.resolve_window(records, selection, today)?;

        let series = Aggregator::series(records, &window)?;
        let summary = Aggregator::summary(&series);
        let comparison = ComparisonEngine::for_selection(records, selection, &window)?;
        let trend = TrendEngine::trend(&series);
        let streak = StreakSummary {
            current: StreakEngine::current(records, today),
            longest: StreakEngine::longest(records),
        };
        let top_categories = self.collapse(records, &window);

        Ok(Report {
            series,
            summary,
            comparison,
            trend_direction: trend.direction(),
            trend,
            streak,
            top_categories,
        })
    }

    fn collapse(&self, records: &[Record], window: &Window) -> CategoryTotals {
        TopNCollapser::collapse(&Aggregator::by_category(records, window), self.config.top_n)
    }
}

impl Default for Analytics {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
