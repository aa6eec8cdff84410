//! Record types fed into the analytics engines

use super::CalendarDate;
use serde::{Deserialize, Serialize};

/// Category assigned to records that carry none
pub const UNCATEGORIZED: &str = "uncategorized";

/// A dated value: an expense, a climbing send, a journal-linked activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub date: CalendarDate,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Record {
    pub fn new(date: CalendarDate, value: f64) -> Self {
        Self {
            date,
            value,
            category: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Category used for breakdowns (None → "uncategorized")
    pub fn category_name(&self) -> &str {
        self.category.as_deref().unwrap_or(UNCATEGORIZED)
    }
}

/// Record as handed over by the data layer, date still unparsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    pub date: String,
    pub value: f64,
    #[serde(default)]
    pub category: Option<String>,
}

/// Why a raw record was left out of the analysis
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedRecord {
    /// Position in the input slice
    pub index: usize,
    pub reason: String,
}
