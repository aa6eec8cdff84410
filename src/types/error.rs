use thiserror::Error;

use super::CalendarDate;

/// trendline error types
#[derive(Error, Debug)]
pub enum TrendlineError {
    /// Window whose end falls before its start
    #[error("invalid window: end {end} is before start {start}")]
    InvalidWindow {
        start: CalendarDate,
        end: CalendarDate,
    },

    /// A record date that is not a calendar date
    #[error("unparseable record date: {0}")]
    UnparseableRecordDate(String),

    /// A record value that is not a finite number
    #[error("invalid record value: {0}")]
    InvalidRecordValue(f64),

    /// Period key that does not match its granularity's format
    #[error("invalid period key: {0}")]
    InvalidPeriodKey(String),

    /// Symbolic window key that is not one of the known ranges
    #[error("unknown window: {0}")]
    UnknownWindow(String),

    /// File I/O error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse JSON input
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("config error: {0}")]
    Config(String),
}

/// Result type alias for trendline
pub type Result<T> = std::result::Result<T, TrendlineError>;
