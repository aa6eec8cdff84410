//! Bucket skeleton generation
//!
//! Periods are calendar-aligned (day, Monday-started week, calendar month)
//! and clipped to the window, so the first and last buckets may be partial.

use crate::types::{Bucket, Granularity, Result, Series, Window};

/// Builds empty, gap-free series for a window
pub struct Bucketer;

impl Bucketer {
    /// One zero-valued bucket per period from `window.start` to `window.end`.
    pub fn bucket(window: &Window, granularity: Granularity) -> Result<Vec<Bucket>> {
        window.validate()?;

        let mut buckets = Vec::new();
        let mut cursor = Some(window.start);

        while let Some(start) = cursor.filter(|d| *d <= window.end) {
            let end = granularity.period_end(start).min(window.end);
            buckets.push(Bucket::empty(
                granularity.key_for(start),
                start,
                end,
                granularity.display_label(start, end),
            ));
            cursor = end.succ();
        }

        Ok(buckets)
    }

    /// Empty series over `window`, ready for [`crate::services::Aggregator::aggregate`]
    pub fn skeleton(window: &Window, granularity: Granularity) -> Result<Series> {
        Ok(Series {
            window: *window,
            granularity,
            buckets: Self::bucket(window, granularity)?,
        })
    }
}
