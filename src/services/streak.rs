//! Consecutive-day activity streaks

use crate::types::{CalendarDate, Record};
use std::collections::{BTreeSet, HashSet};

pub struct StreakEngine;

impl StreakEngine {
    /// Days in a row with at least one record, counting back from `today`.
    /// Zero when `today` has no record.
    pub fn current(records: &[Record], today: CalendarDate) -> u32 {
        let active: HashSet<CalendarDate> = records.iter().map(|r| r.date).collect();

        let run = std::iter::successors(Some(today), |d| d.pred())
            .take_while(|d| active.contains(d))
            .count();
        u32::try_from(run).unwrap_or(u32::MAX)
    }

    /// Longest run of consecutive active days anywhere in the record set
    pub fn longest(records: &[Record]) -> u32 {
        let active: BTreeSet<CalendarDate> = records.iter().map(|r| r.date).collect();

        let (longest, _) = active
            .iter()
            .fold((0u32, None::<(CalendarDate, u32)>), |(longest, run), &day| {
                let length = match run {
                    Some((prev, len)) if prev.succ() == Some(day) => len.saturating_add(1),
                    _ => 1,
                };
                (longest.max(length), Some((day, length)))
            });
        longest
    }
}
