//! Aggregator service for folding records into series and window totals

use crate::services::{granularity, Bucketer};
use crate::types::{
    BestPeriod, Bucket, CalendarDate, CategoryTotals, Granularity, Record, Result, Series, SeriesSummary,
    Window,
};
use std::collections::HashMap;

/// Aggregator for computing series and window statistics
pub struct Aggregator;

impl Aggregator {
    /// Series over `window` at the granularity its length calls for
    pub fn series(records: &[Record], window: &Window) -> Result<Series> {
        let granularity = granularity::select(window)?;
        Self::series_at(records, window, granularity)
    }

    /// Series over `window` at a caller-chosen granularity
    pub fn series_at(records: &[Record], window: &Window, granularity: Granularity) -> Result<Series> {
        let skeleton = Bucketer::skeleton(window, granularity)?;
        Ok(Self::aggregate(records, skeleton))
    }

    /// Fold records into a bucket skeleton.
    ///
    /// Records outside the skeleton's window are dropped. Bucket order is the
    /// skeleton's and is never re-sorted.
    pub fn aggregate(records: &[Record], skeleton: Series) -> Series {
        let Series {
            window,
            granularity,
            buckets,
        } = skeleton;

        let index: HashMap<&str, usize> = buckets
            .iter()
            .enumerate()
            .map(|(i, b)| (b.period_key.as_str(), i))
            .collect();

        // Assign each in-window record to its bucket position
        let groups: Vec<Vec<&Record>> = records
            .iter()
            .filter(|r| window.contains(r.date))
            .fold(vec![Vec::new(); buckets.len()], |mut groups, record| {
                let key = granularity.key_for(record.date);
                match index.get(key.as_str()) {
                    Some(&i) => groups[i].push(record),
                    // Unreachable while skeleton and records share a window
                    None => tracing::error!(key = %key, "no bucket for record, skipping"),
                }
                groups
            });

        let buckets = buckets
            .into_iter()
            .zip(groups)
            .map(|(bucket, members)| members.into_iter().fold(bucket, |b, r| b.with_record(r)))
            .collect();

        Series {
            window,
            granularity,
            buckets,
        }
    }

    /// Sum of record values dated inside `window`
    pub fn total(records: &[Record], window: &Window) -> f64 {
        records
            .iter()
            .filter(|r| window.contains(r.date))
            .map(|r| r.value)
            .sum()
    }

    /// Category subtotals inside `window`, in first-seen order (None → "uncategorized")
    pub fn by_category(records: &[Record], window: &Window) -> CategoryTotals {
        records
            .iter()
            .filter(|r| window.contains(r.date))
            .fold(CategoryTotals::new(), |acc, r| acc.add(r.category_name(), r.value))
    }

    /// Earliest record date, used to resolve the `all` window
    pub fn earliest(records: &[Record]) -> Option<CalendarDate> {
        records.iter().map(|r| r.date).min()
    }

    /// Totals, averages and the best period of a series
    pub fn summary(series: &Series) -> SeriesSummary {
        let total = series.total();
        let bucket_count = series.len();
        let average_per_bucket = if bucket_count == 0 {
            0.0
        } else {
            total / bucket_count as f64
        };

        // First bucket with the highest positive total wins
        let best_period = series
            .buckets
            .iter()
            .filter(|b| b.total > 0.0)
            .fold(None, |best: Option<&Bucket>, b| match best {
                Some(current) if current.total >= b.total => Some(current),
                _ => Some(b),
            })
            .map(|b| BestPeriod {
                period_key: b.period_key.clone(),
                display_label: b.display_label.clone(),
                total: b.total,
            });

        SeriesSummary {
            total,
            record_count: series.record_count(),
            bucket_count,
            active_buckets: series.buckets.iter().filter(|b| b.count > 0).count(),
            average_per_bucket,
            best_period,
        }
    }
}
