//! Calendar date value type and the date arithmetic shared by every engine
//!
//! A `CalendarDate` is a plain (year, month, day) triple. It never carries a
//! time of day or an offset, so a record logged at 23:30 local time stays on
//! the day it was written for, whatever the viewer's timezone.

use super::{Result, TrendlineError};
use chrono::{Datelike, Days, Local, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// 1970-01-01
    pub fn unix_epoch() -> Self {
        Self(NaiveDate::default())
    }

    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn as_naive(self) -> NaiveDate {
        self.0
    }

    /// The local calendar day right now. Resolve once per computation and pass it down.
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    /// Parse a record date.
    ///
    /// Accepts `YYYY-MM-DD`, or a timestamp starting with one
    /// (`2024-03-10T23:30:00-08:00`, `2024-03-10 08:00`). The date part is
    /// taken literally; any offset is ignored rather than applied.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let unparseable = || TrendlineError::UnparseableRecordDate(input.to_string());

        let date_part = trimmed.get(..10).ok_or_else(unparseable)?;
        match trimmed.as_bytes().get(10) {
            None | Some(b'T') | Some(b't') | Some(b' ') => {}
            Some(_) => return Err(unparseable()),
        }

        NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
            .map(Self)
            .map_err(|_| unparseable())
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    pub fn month(self) -> u32 {
        self.0.month()
    }

    pub fn day(self) -> u32 {
        self.0.day()
    }

    /// Canonical day key, `YYYY-MM-DD`
    pub fn day_key(self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }

    /// Month key, `YYYY-MM`
    pub fn month_key(self) -> String {
        self.0.format("%Y-%m").to_string()
    }

    /// Monday of the week containing this date
    pub fn week_start(self) -> Self {
        let offset = u64::from(self.0.weekday().num_days_from_monday());
        // Only fails in the first days of chrono's representable range.
        self.0
            .checked_sub_days(Days::new(offset))
            .map(Self)
            .unwrap_or(self)
    }

    pub fn month_start(self) -> Self {
        Self(self.0.with_day(1).unwrap_or(self.0))
    }

    pub fn month_end(self) -> Self {
        self.month_start()
            .add_months(1)
            .and_then(|next| next.add_days(-1))
            .unwrap_or(self)
    }

    /// Whole calendar days from `a` to `b` (negative when `b` is earlier)
    pub fn days_between(a: Self, b: Self) -> i64 {
        b.0.signed_duration_since(a.0).num_days()
    }

    pub fn is_same_day(self, other: Self) -> bool {
        self == other
    }

    /// Shift by `n` days. `None` only outside chrono's date range.
    pub fn add_days(self, n: i64) -> Option<Self> {
        let magnitude = Days::new(n.unsigned_abs());
        let shifted = if n >= 0 {
            self.0.checked_add_days(magnitude)
        } else {
            self.0.checked_sub_days(magnitude)
        };
        shifted.map(Self)
    }

    /// Shift by `n` calendar months, clamping the day to the target month's
    /// length (Jan 31 + 1 month is the last day of February).
    pub fn add_months(self, n: i32) -> Option<Self> {
        let magnitude = Months::new(n.unsigned_abs());
        let shifted = if n >= 0 {
            self.0.checked_add_months(magnitude)
        } else {
            self.0.checked_sub_months(magnitude)
        };
        shifted.map(Self)
    }

    pub fn succ(self) -> Option<Self> {
        self.0.succ_opt().map(Self)
    }

    pub fn pred(self) -> Option<Self> {
        self.0.pred_opt().map(Self)
    }

    /// Short label such as `Jan 5`
    pub fn short_label(self) -> String {
        self.0.format("%b %-d").to_string()
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.day_key())
    }
}

impl FromStr for CalendarDate {
    type Err = TrendlineError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::from_ymd(y, m, d).unwrap()
    }

    // ========== keys ==========

    #[test]
    fn test_unix_epoch() {
        assert_eq!(CalendarDate::unix_epoch().to_string(), "1970-01-01");
    }

    #[test]
    fn test_day_key_zero_padded() {
        assert_eq!(date(2024, 1, 5).day_key(), "2024-01-05");
        assert_eq!(date(2024, 1, 5).to_string(), "2024-01-05");
    }

    #[test]
    fn test_month_key() {
        assert_eq!(date(2024, 3, 31).month_key(), "2024-03");
    }

    // ========== week_start ==========

    #[test]
    fn test_week_start_sunday_goes_back_to_monday() {
        // 2024-01-07 is a Sunday
        assert_eq!(date(2024, 1, 7).week_start(), date(2024, 1, 1));
    }

    #[test]
    fn test_week_start_monday_is_itself() {
        assert_eq!(date(2024, 1, 8).week_start(), date(2024, 1, 8));
    }

    #[test]
    fn test_week_start_crosses_year() {
        // 2025-01-01 is a Wednesday
        assert_eq!(date(2025, 1, 1).week_start(), date(2024, 12, 30));
    }

    // ========== month bounds ==========

    #[test]
    fn test_month_end_leap_february() {
        assert_eq!(date(2024, 2, 10).month_end(), date(2024, 2, 29));
        assert_eq!(date(2023, 2, 10).month_end(), date(2023, 2, 28));
    }

    #[test]
    fn test_month_end_december() {
        assert_eq!(date(2024, 12, 3).month_end(), date(2024, 12, 31));
        assert_eq!(date(2024, 12, 3).month_start(), date(2024, 12, 1));
    }

    // ========== arithmetic ==========

    #[test]
    fn test_days_between_calendar_semantics() {
        assert_eq!(CalendarDate::days_between(date(2024, 1, 1), date(2024, 1, 31)), 30);
        assert_eq!(CalendarDate::days_between(date(2024, 1, 31), date(2024, 1, 1)), -30);
        // Across a DST change in most northern timezones
        assert_eq!(CalendarDate::days_between(date(2024, 3, 9), date(2024, 3, 11)), 2);
    }

    #[test]
    fn test_add_days_negative() {
        assert_eq!(date(2024, 3, 1).add_days(-1), Some(date(2024, 2, 29)));
        assert_eq!(date(2024, 3, 1).add_days(0), Some(date(2024, 3, 1)));
    }

    #[test]
    fn test_add_months_clamps_day() {
        assert_eq!(date(2024, 1, 31).add_months(1), Some(date(2024, 2, 29)));
        assert_eq!(date(2024, 3, 31).add_months(-1), Some(date(2024, 2, 29)));
        assert_eq!(date(2024, 11, 15).add_months(3), Some(date(2025, 2, 15)));
    }

    #[test]
    fn test_is_same_day() {
        assert!(date(2024, 1, 1).is_same_day(date(2024, 1, 1)));
        assert!(!date(2024, 1, 1).is_same_day(date(2024, 1, 2)));
    }

    // ========== parse ==========

    #[test]
    fn test_parse_plain_date() {
        assert_eq!(CalendarDate::parse("2024-03-10").unwrap(), date(2024, 3, 10));
        assert_eq!(CalendarDate::parse(" 2024-03-10 ").unwrap(), date(2024, 3, 10));
    }

    #[test]
    fn test_parse_timestamp_keeps_literal_date() {
        // Late evening with a negative offset must not roll into the next day
        assert_eq!(
            CalendarDate::parse("2024-03-10T23:30:00-08:00").unwrap(),
            date(2024, 3, 10)
        );
        assert_eq!(
            CalendarDate::parse("2024-03-10T00:15:00+09:00").unwrap(),
            date(2024, 3, 10)
        );
        assert_eq!(CalendarDate::parse("2024-03-10 08:00").unwrap(), date(2024, 3, 10));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(CalendarDate::parse("").is_err());
        assert!(CalendarDate::parse("yesterday").is_err());
        assert!(CalendarDate::parse("2024-13-01").is_err());
        assert!(CalendarDate::parse("2023-02-29").is_err());
        assert!(CalendarDate::parse("2024-03-101").is_err());
    }

    #[test]
    fn test_parse_error_variant() {
        let err = CalendarDate::parse("10/03/2024").unwrap_err();
        assert!(matches!(err, TrendlineError::UnparseableRecordDate(s) if s == "10/03/2024"));
    }

    #[test]
    fn test_serde_as_day_key() {
        let json = serde_json::to_string(&date(2024, 7, 4)).unwrap();
        assert_eq!(json, "\"2024-07-04\"");
        let back: CalendarDate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, date(2024, 7, 4));
    }

    #[test]
    fn test_short_label() {
        assert_eq!(date(2024, 1, 5).short_label(), "Jan 5");
    }
}
