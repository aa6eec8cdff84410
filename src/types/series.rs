//! Bucketed series types

use super::{CalendarDate, Record, Result, TrendlineError, Window};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Largest `end - start` (in days) still bucketed by day
pub const DAY_GRANULARITY_MAX_SPAN: i64 = 30;
/// Largest `end - start` (in days) still bucketed by week
pub const WEEK_GRANULARITY_MAX_SPAN: i64 = 180;

/// Time unit at which records are grouped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Day,
    Week,
    Month,
}

impl Granularity {
    /// ≤30 → day, 31–180 → week, >180 → month
    pub fn for_span(span_days: i64) -> Self {
        if span_days <= DAY_GRANULARITY_MAX_SPAN {
            Self::Day
        } else if span_days <= WEEK_GRANULARITY_MAX_SPAN {
            Self::Week
        } else {
            Self::Month
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
        }
    }

    /// Calendar-aligned start of the period containing `date`
    /// (the day itself, its Monday, or the first of its month)
    pub fn period_start(&self, date: CalendarDate) -> CalendarDate {
        match self {
            Self::Day => date,
            Self::Week => date.week_start(),
            Self::Month => date.month_start(),
        }
    }

    /// Calendar-aligned last day of the period containing `date`
    pub fn period_end(&self, date: CalendarDate) -> CalendarDate {
        match self {
            Self::Day => date,
            Self::Week => {
                let start = date.week_start();
                start.add_days(6).unwrap_or(start)
            }
            Self::Month => date.month_end(),
        }
    }

    /// Stable key of the period containing `date`.
    ///
    /// Day and week keys are the aligned start's `YYYY-MM-DD`, month keys are
    /// `YYYY-MM`; within one granularity they sort chronologically.
    pub fn key_for(&self, date: CalendarDate) -> String {
        match self {
            Self::Day | Self::Week => self.period_start(date).day_key(),
            Self::Month => date.month_key(),
        }
    }

    /// Parse a key produced by [`Granularity::key_for`] back to its aligned start
    pub fn parse_key(&self, key: &str) -> Result<CalendarDate> {
        let invalid = || TrendlineError::InvalidPeriodKey(key.to_string());
        let date = match self {
            Self::Day | Self::Week => {
                if key.len() != 10 {
                    return Err(invalid());
                }
                CalendarDate::parse(key).map_err(|_| invalid())?
            }
            Self::Month => {
                if key.len() != 7 {
                    return Err(invalid());
                }
                CalendarDate::parse(&format!("{}-01", key)).map_err(|_| invalid())?
            }
        };

        if self.period_start(date) != date {
            return Err(invalid());
        }
        Ok(date)
    }

    /// Short human label for a (possibly clipped) period
    pub fn display_label(&self, start: CalendarDate, end: CalendarDate) -> String {
        match self {
            Self::Day => start.short_label(),
            Self::Week if start == end => start.short_label(),
            Self::Week if start.month() == end.month() => {
                format!("{}–{}", start.short_label(), end.day())
            }
            Self::Week => format!("{}–{}", start.short_label(), end.short_label()),
            Self::Month => start.as_naive().format("%b '%y").to_string(),
        }
    }
}

/// Category subtotals in first-seen order
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct CategoryTotals {
    entries: IndexMap<String, f64>,
}

impl CategoryTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `value` to `category`, appending it if unseen
    pub fn add(mut self, category: &str, value: f64) -> Self {
        match self.entries.get_mut(category) {
            Some(total) => *total += value,
            None => {
                self.entries.insert(category.to_string(), value);
            }
        }
        self
    }

    pub fn get(&self, category: &str) -> Option<f64> {
        self.entries.get(category).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(name, total)| (name.as_str(), *total))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.entries.values().sum()
    }
}

impl From<IndexMap<String, f64>> for CategoryTotals {
    fn from(entries: IndexMap<String, f64>) -> Self {
        Self { entries }
    }
}

impl FromIterator<(String, f64)> for CategoryTotals {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |acc, (name, value)| acc.add(&name, value))
    }
}

/// One period of a series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bucket {
    pub period_key: String,
    pub period_start: CalendarDate,
    pub period_end: CalendarDate,
    pub display_label: String,
    pub total: f64,
    pub by_category: CategoryTotals,
    pub count: u64,
}

impl Bucket {
    /// Zero-valued bucket covering `[start, end]`
    pub fn empty(period_key: String, start: CalendarDate, end: CalendarDate, label: String) -> Self {
        Self {
            period_key,
            period_start: start,
            period_end: end,
            display_label: label,
            total: 0.0,
            by_category: CategoryTotals::new(),
            count: 0,
        }
    }

    pub fn contains(&self, date: CalendarDate) -> bool {
        self.period_start <= date && date <= self.period_end
    }

    /// This bucket with `record` folded in
    pub fn with_record(self, record: &Record) -> Self {
        Self {
            total: self.total + record.value,
            by_category: self.by_category.add(record.category_name(), record.value),
            count: self.count.saturating_add(1),
            ..self
        }
    }
}

/// Contiguous buckets spanning a whole window
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub window: Window,
    pub granularity: Granularity,
    pub buckets: Vec<Bucket>,
}

impl Series {
    pub fn totals(&self) -> Vec<f64> {
        self.buckets.iter().map(|b| b.total).collect()
    }

    pub fn total(&self) -> f64 {
        self.buckets.iter().map(|b| b.total).sum()
    }

    pub fn record_count(&self) -> u64 {
        self.buckets.iter().map(|b| b.count).sum()
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn bucket(&self, period_key: &str) -> Option<&Bucket> {
        self.buckets.iter().find(|b| b.period_key == period_key)
    }
}
