//! Derived statistics over a series or a record set

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Increase,
    Decrease,
    Flat,
}

impl Direction {
    pub fn from_delta(delta: f64) -> Self {
        if delta > 0.0 {
            Self::Increase
        } else if delta < 0.0 {
            Self::Decrease
        } else {
            Self::Flat
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            Self::Increase => "↑",
            Self::Decrease => "↓",
            Self::Flat => "→",
        }
    }
}

/// Current window against the equal-length window right before it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub current_total: f64,
    pub previous_total: f64,
    pub delta: f64,
    /// `None` when the previous total is zero and the current one is positive
    pub delta_percent: Option<f64>,
    pub direction: Direction,
    pub comparable: bool,
}

impl Comparison {
    /// Comparison for a window with nothing to compare against
    pub fn not_comparable(current_total: f64) -> Self {
        Self {
            current_total,
            previous_total: 0.0,
            delta: 0.0,
            delta_percent: None,
            direction: Direction::Flat,
            comparable: false,
        }
    }
}

/// First-half vs. second-half average of a series
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Trend {
    pub first_half_average: f64,
    pub second_half_average: f64,
    pub percent_change: f64,
}

impl Trend {
    pub fn direction(&self) -> Direction {
        Direction::from_delta(self.percent_change)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BestPeriod {
    pub period_key: String,
    pub display_label: String,
    pub total: f64,
}

/// Headline numbers of a series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesSummary {
    pub total: f64,
    pub record_count: u64,
    pub bucket_count: usize,
    /// Buckets holding at least one record
    pub active_buckets: usize,
    pub average_per_bucket: f64,
    pub best_period: Option<BestPeriod>,
}
