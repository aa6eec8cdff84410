//! Record normalization service
//!
//! Turns raw records from the data layer into typed [`Record`]s so every
//! engine sees the same calendar dates and category names.

use crate::types::{CalendarDate, RawRecord, Record, Result, SkippedRecord, TrendlineError};
use serde::Deserialize;
use serde_json::Value;

/// Outcome of normalizing a batch: the usable records plus what was dropped
#[derive(Debug, Clone, Default)]
pub struct NormalizedRecords {
    pub records: Vec<Record>,
    pub skipped: Vec<SkippedRecord>,
}

/// Normalize a single raw record.
///
/// Transformations:
/// - Date: `YYYY-MM-DD` or a timestamp reduced to its literal date
/// - Category: trimmed, blank → None
///
/// # Examples
/// ```
/// use trendline::types::RawRecord;
/// use trendline::services::normalizer::normalize_record;
///
/// let raw = RawRecord {
///     date: "2024-03-10T23:30:00-08:00".into(),
///     value: 12.5,
///     category: Some("  groceries ".into()),
/// };
/// let record = normalize_record(&raw).unwrap();
/// assert_eq!(record.date.to_string(), "2024-03-10");
/// assert_eq!(record.category.as_deref(), Some("groceries"));
/// ```
pub fn normalize_record(raw: &RawRecord) -> Result<Record> {
    let date = CalendarDate::parse(&raw.date)?;

    if !raw.value.is_finite() {
        return Err(TrendlineError::InvalidRecordValue(raw.value));
    }

    Ok(Record {
        date,
        value: raw.value,
        category: normalize_category(raw.category.as_deref()),
    })
}

/// Normalize a batch, skipping (and logging) records that cannot be used.
/// A bad record never fails the whole batch.
pub fn normalize_records(raw: &[RawRecord]) -> NormalizedRecords {
    collect_normalized(raw.iter().map(normalize_record))
}

/// Normalize untyped JSON elements, as read from a records file.
///
/// An element with the wrong shape (date not a string, value missing or not
/// a number) is skipped with its index, like a record with a bad date.
pub fn normalize_values(values: &[Value]) -> NormalizedRecords {
    collect_normalized(values.iter().map(|value| {
        RawRecord::deserialize(value)
            .map_err(TrendlineError::from)
            .and_then(|raw| normalize_record(&raw))
    }))
}

fn collect_normalized(results: impl Iterator<Item = Result<Record>>) -> NormalizedRecords {
    results
        .enumerate()
        .fold(NormalizedRecords::default(), |mut acc, (index, result)| {
            match result {
                Ok(record) => acc.records.push(record),
                Err(e) => {
                    tracing::warn!(index, "skipping record: {}", e);
                    acc.skipped.push(SkippedRecord {
                        index,
                        reason: e.to_string(),
                    });
                }
            }
            acc
        })
}

fn normalize_category(category: Option<&str>) -> Option<String> {
    category
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(String::from)
}
