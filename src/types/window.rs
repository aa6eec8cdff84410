//! Analysis windows: concrete inclusive date ranges and the symbolic ranges
//! a user picks from.

use super::{CalendarDate, Result, TrendlineError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Inclusive date range `[start, end]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Window {
    pub start: CalendarDate,
    pub end: CalendarDate,
}

impl Window {
    pub fn new(start: CalendarDate, end: CalendarDate) -> Self {
        Self { start, end }
    }

    /// Fails with `InvalidWindow` if `end < start`
    pub fn validate(&self) -> Result<()> {
        if self.end < self.start {
            return Err(TrendlineError::InvalidWindow {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }

    /// `end - start` in days (0 for a single-day window)
    pub fn span_days(&self) -> i64 {
        CalendarDate::days_between(self.start, self.end)
    }

    /// Number of calendar days covered, both ends included
    pub fn len_days(&self) -> i64 {
        self.span_days() + 1
    }

    pub fn contains(&self, date: CalendarDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// The equal-length window ending the day before this one starts.
    /// `None` when that window would leave the representable date range.
    pub fn preceding(&self) -> Option<Window> {
        let end = self.start.pred()?;
        let start = self.start.add_days(-self.len_days())?;
        Some(Window { start, end })
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Symbolic range, resolved against "today" before aggregation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WindowKey {
    #[serde(rename = "week")]
    Week,
    #[serde(rename = "month")]
    Month,
    #[serde(rename = "3months")]
    ThreeMonths,
    #[serde(rename = "6months")]
    SixMonths,
    #[serde(rename = "year")]
    Year,
    #[serde(rename = "all")]
    All,
}

impl WindowKey {
    pub const ALL_KEYS: [WindowKey; 6] = [
        Self::Week,
        Self::Month,
        Self::ThreeMonths,
        Self::SixMonths,
        Self::Year,
        Self::All,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Week => "week",
            Self::Month => "month",
            Self::ThreeMonths => "3months",
            Self::SixMonths => "6months",
            Self::Year => "year",
            Self::All => "all",
        }
    }

    /// Resolve to a concrete window ending today.
    ///
    /// Fixed ranges cover the last 7 days or the last 1/3/6/12 calendar
    /// months. `All` starts at the earliest record date, or `epoch` when there
    /// are no records, and never starts after today.
    pub fn resolve(
        &self,
        today: CalendarDate,
        earliest: Option<CalendarDate>,
        epoch: CalendarDate,
    ) -> Window {
        let months_back = |n: i32| {
            today
                .add_months(-n)
                .and_then(CalendarDate::succ)
                .unwrap_or(today)
        };

        let start = match self {
            Self::Week => today.add_days(-6).unwrap_or(today),
            Self::Month => months_back(1),
            Self::ThreeMonths => months_back(3),
            Self::SixMonths => months_back(6),
            Self::Year => months_back(12),
            Self::All => earliest.unwrap_or(epoch).min(today),
        };

        Window { start, end: today }
    }
}

impl fmt::Display for WindowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WindowKey {
    type Err = TrendlineError;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_ascii_lowercase();
        Self::ALL_KEYS
            .into_iter()
            .find(|k| k.as_str() == key)
            .ok_or_else(|| TrendlineError::UnknownWindow(s.to_string()))
    }
}

/// What the caller asked for: a symbolic range or an explicit window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowSelection {
    Symbolic(WindowKey),
    Fixed(Window),
}

impl WindowSelection {
    pub fn is_all_time(&self) -> bool {
        matches!(self, Self::Symbolic(WindowKey::All))
    }
}

impl From<WindowKey> for WindowSelection {
    fn from(key: WindowKey) -> Self {
        Self::Symbolic(key)
    }
}

impl From<Window> for WindowSelection {
    fn from(window: Window) -> Self {
        Self::Fixed(window)
    }
}
