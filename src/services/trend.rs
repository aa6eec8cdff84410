//! First-half vs. second-half trend over a series

use crate::types::{Series, Trend};

pub struct TrendEngine;

impl TrendEngine {
    pub fn trend(series: &Series) -> Trend {
        Self::from_totals(&series.totals())
    }

    /// Split at `n / 2`; the second half gets the extra element when `n` is odd.
    pub fn from_totals(totals: &[f64]) -> Trend {
        let (first, second) = totals.split_at(totals.len() / 2);
        let first_half_average = average(first);
        let second_half_average = average(second);

        let percent_change = if first_half_average == 0.0 {
            0.0
        } else {
            (second_half_average - first_half_average) / first_half_average * 100.0
        };

        Trend {
            first_half_average,
            second_half_average,
            percent_change,
        }
    }
}

fn average(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}
