//! Granularity selection from window length

use crate::types::{Granularity, Result, Window};

/// Pick the bucket size for a window from `end - start` in days.
///
/// ≤30 days → day, 31–180 → week, anything longer → month.
/// Fails with `InvalidWindow` if the window ends before it starts.
pub fn select(window: &Window) -> Result<Granularity> {
    window.validate()?;
    let granularity = Granularity::for_span(window.span_days());
    tracing::debug!(%window, granularity = granularity.label(), "selected granularity");
    Ok(granularity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CalendarDate, TrendlineError};

    fn window_of_span(span: i64) -> Window {
        let start = CalendarDate::from_ymd(2024, 1, 1).unwrap();
        Window::new(start, start.add_days(span).unwrap())
    }

    #[test]
    fn test_select_short_window_is_day() {
        assert_eq!(select(&window_of_span(7)).unwrap(), Granularity::Day);
    }

    #[test]
    fn test_select_medium_window_is_week() {
        assert_eq!(select(&window_of_span(45)).unwrap(), Granularity::Week);
    }

    #[test]
    fn test_select_long_window_is_month() {
        assert_eq!(select(&window_of_span(400)).unwrap(), Granularity::Month);
    }

    #[test]
    fn test_select_boundaries() {
        assert_eq!(select(&window_of_span(0)).unwrap(), Granularity::Day);
        assert_eq!(select(&window_of_span(30)).unwrap(), Granularity::Day);
        assert_eq!(select(&window_of_span(31)).unwrap(), Granularity::Week);
        assert_eq!(select(&window_of_span(180)).unwrap(), Granularity::Week);
        assert_eq!(select(&window_of_span(181)).unwrap(), Granularity::Month);
    }

    #[test]
    fn test_select_reversed_window_fails() {
        let end = CalendarDate::from_ymd(2024, 1, 1).unwrap();
        let start = CalendarDate::from_ymd(2024, 1, 2).unwrap();
        let err = select(&Window::new(start, end)).unwrap_err();
        assert!(matches!(err, TrendlineError::InvalidWindow { .. }));
    }
}
