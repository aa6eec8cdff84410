//! Period-over-period comparison

use crate::services::Aggregator;
use crate::types::{Comparison, Direction, Record, Result, Window, WindowSelection};

/// Compares a window against the equal-length window right before it
pub struct ComparisonEngine;

impl ComparisonEngine {
    /// Compare `window` with its immediately preceding, non-overlapping window
    /// of the same length. Not comparable if that window cannot be formed.
    pub fn compare(records: &[Record], window: &Window) -> Result<Comparison> {
        window.validate()?;
        let current_total = Aggregator::total(records, window);

        let Some(previous) = window.preceding() else {
            tracing::debug!(%window, "no preceding window");
            return Ok(Comparison::not_comparable(current_total));
        };

        tracing::debug!(current = %window, %previous, "comparing windows");
        let previous_total = Aggregator::total(records, &previous);
        Ok(Self::from_totals(current_total, previous_total))
    }

    /// Compare a resolved window, treating the `all` selection as not comparable
    pub fn for_selection(
        records: &[Record],
        selection: &WindowSelection,
        window: &Window,
    ) -> Result<Comparison> {
        if selection.is_all_time() {
            window.validate()?;
            return Ok(Comparison::not_comparable(Aggregator::total(records, window)));
        }
        Self::compare(records, window)
    }

    /// Delta, percent and direction from two totals.
    ///
    /// Percent is `None` when the previous total is zero and the current one
    /// is positive (only the absolute delta is meaningful), and `0` when the
    /// previous total is zero otherwise.
    pub fn from_totals(current_total: f64, previous_total: f64) -> Comparison {
        let delta = current_total - previous_total;
        let delta_percent = if previous_total == 0.0 {
            if current_total > 0.0 {
                None
            } else {
                Some(0.0)
            }
        } else {
            Some(delta / previous_total * 100.0)
        };

        Comparison {
            current_total,
            previous_total,
            delta,
            delta_percent,
            direction: Direction::from_delta(delta),
            comparable: true,
        }
    }
}
