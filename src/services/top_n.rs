//! Top-N category collapsing

use crate::types::CategoryTotals;
use indexmap::IndexMap;

/// Name of the synthetic bucket holding everything past the top N
pub const OTHER_CATEGORY: &str = "other";

pub struct TopNCollapser;

impl TopNCollapser {
    /// Keep the `n` largest categories and sum the rest into `"other"`.
    ///
    /// Ties keep their original order. `"other"` is only added when at least
    /// one category was dropped and the dropped remainder is positive.
    pub fn collapse(totals: &CategoryTotals, n: usize) -> CategoryTotals {
        let mut ranked: Vec<(&str, f64)> = totals.iter().collect();
        // Stable sort: equal values stay in insertion order
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        let split = n.min(ranked.len());
        let (kept, dropped) = ranked.split_at(split);

        let collapsed: CategoryTotals = kept
            .iter()
            .map(|(name, value)| (name.to_string(), *value))
            .collect::<IndexMap<_, _>>()
            .into();

        let remainder: f64 = dropped.iter().map(|(_, value)| value).sum();
        if !dropped.is_empty() && remainder > 0.0 {
            collapsed.add(OTHER_CATEGORY, remainder)
        } else {
            collapsed
        }
    }
}
