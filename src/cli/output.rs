//! Plain-text rendering of analytics results

use trendline::services::{Report, StreakSummary};
use trendline::types::{CategoryTotals, Comparison, Series, SeriesSummary, Trend};

const BAR_WIDTH: usize = 20;

/// Format a bar based on value ratio
/// Example: value=5, max=10, width=8 → "▓▓▓▓░░░░"
pub fn format_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 || width == 0 || value <= 0.0 {
        return "░".repeat(width);
    }
    let ratio = value / max;
    let filled = (ratio * width as f64).round() as usize;
    let filled = filled.min(width);
    let empty = width.saturating_sub(filled);
    format!("{}{}", "▓".repeat(filled), "░".repeat(empty))
}

/// Format a number with two decimals and thousands separators
pub fn format_amount(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (int_part, frac_part) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let len = int_part.len();
    let mut grouped = String::with_capacity(len + len / 3);
    // Digits are ASCII, so byte indexing is safe
    for (i, ch) in int_part.bytes().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch as char);
    }

    let sign = if value < 0.0 && formatted != "0.00" { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, frac_part)
}

pub fn render_series(series: &Series) -> String {
    let max = series.buckets.iter().map(|b| b.total).fold(0.0, f64::max);
    let label_width = series
        .buckets
        .iter()
        .map(|b| b.display_label.chars().count())
        .max()
        .unwrap_or(0);

    let header = format!(
        "{} ({} buckets, by {})\n",
        series.window,
        series.len(),
        series.granularity.label()
    );
    let rows: String = series
        .buckets
        .iter()
        .map(|bucket| {
            format!(
                "{:<width$}  {}  {:>12}  {:>4}\n",
                bucket.display_label,
                format_bar(bucket.total, max, BAR_WIDTH),
                format_amount(bucket.total),
                bucket.count,
                width = label_width
            )
        })
        .collect();
    header + &rows
}

pub fn render_summary(summary: &SeriesSummary) -> String {
    let best = summary
        .best_period
        .as_ref()
        .map(|b| format!("{} ({})", b.display_label, format_amount(b.total)))
        .unwrap_or_else(|| "N/A".to_string());

    format!(
        "Total: {}  Records: {}  Active periods: {}/{}  Average: {}  Best: {}\n",
        format_amount(summary.total),
        summary.record_count,
        summary.active_buckets,
        summary.bucket_count,
        format_amount(summary.average_per_bucket),
        best
    )
}

pub fn render_comparison(cmp: &Comparison) -> String {
    if !cmp.comparable {
        return format!(
            "Current: {}  (no previous period to compare)\n",
            format_amount(cmp.current_total)
        );
    }

    let percent = cmp
        .delta_percent
        .map(|p| format!("{:+.2}%", p))
        .unwrap_or_else(|| "n/a".to_string());

    format!(
        "Current: {}  Previous: {}  Change: {} {} ({})\n",
        format_amount(cmp.current_total),
        format_amount(cmp.previous_total),
        cmp.direction.arrow(),
        format_amount(cmp.delta),
        percent
    )
}

pub fn render_trend(trend: &Trend) -> String {
    format!(
        "First half avg: {}  Second half avg: {}  Trend: {} {:+.2}%\n",
        format_amount(trend.first_half_average),
        format_amount(trend.second_half_average),
        trend.direction().arrow(),
        trend.percent_change
    )
}

pub fn render_streak(streak: &StreakSummary) -> String {
    format!(
        "Current streak: {} day(s)  Longest: {} day(s)\n",
        streak.current, streak.longest
    )
}

pub fn render_categories(categories: &CategoryTotals) -> String {
    if categories.is_empty() {
        return "No data for this period\n".to_string();
    }

    let max = categories.iter().map(|(_, v)| v).fold(0.0, f64::max);
    let name_width = categories
        .iter()
        .map(|(name, _)| name.chars().count())
        .max()
        .unwrap_or(0);

    categories
        .iter()
        .map(|(name, value)| {
            format!(
                "{:<width$}  {}  {:>12}\n",
                name,
                format_bar(value, max, BAR_WIDTH),
                format_amount(value),
                width = name_width
            )
        })
        .collect()
}

pub fn render_report(report: &Report) -> String {
    [
        render_series(&report.series),
        render_summary(&report.summary),
        render_comparison(&report.comparison),
        render_trend(&report.trend),
        render_streak(&report.streak),
        render_categories(&report.top_categories),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use trendline::services::{Aggregator, ComparisonEngine};
    use trendline::types::{CalendarDate, Record, Window};

    // ========== format_bar tests ==========

    #[test]
    fn test_format_bar_zero() {
        assert_eq!(format_bar(0.0, 10.0, 8), "░░░░░░░░");
    }

    #[test]
    fn test_format_bar_max() {
        assert_eq!(format_bar(10.0, 10.0, 8), "▓▓▓▓▓▓▓▓");
    }

    #[test]
    fn test_format_bar_half() {
        assert_eq!(format_bar(5.0, 10.0, 8), "▓▓▓▓░░░░");
    }

    #[test]
    fn test_format_bar_zero_max() {
        assert_eq!(format_bar(3.0, 0.0, 8), "░░░░░░░░");
    }

    #[test]
    fn test_format_bar_negative_value() {
        assert_eq!(format_bar(-3.0, 10.0, 4), "░░░░");
    }

    #[test]
    fn test_format_bar_zero_width() {
        assert_eq!(format_bar(5.0, 10.0, 0), "");
    }

    // ========== format_amount tests ==========

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(12.5), "12.50");
        assert_eq!(format_amount(1234567.891), "1,234,567.89");
        assert_eq!(format_amount(-1500.0), "-1,500.00");
    }

    // ========== renderers ==========

    #[test]
    fn test_render_comparison_undefined_percent() {
        let text = render_comparison(&ComparisonEngine::from_totals(5.0, 0.0));
        assert!(text.contains("n/a"));
        assert!(text.contains("↑"));
    }

    #[test]
    fn test_render_categories_empty() {
        assert_eq!(render_categories(&CategoryTotals::new()), "No data for this period\n");
    }

    #[test]
    fn test_render_series_one_line_per_bucket() {
        let start = CalendarDate::from_ymd(2024, 1, 1).unwrap();
        let end = CalendarDate::from_ymd(2024, 1, 3).unwrap();
        let records = vec![Record::new(start, 1500.0)];
        let series = Aggregator::series(&records, &Window::new(start, end)).unwrap();

        let text = render_series(&series);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("3 buckets, by day"));
        assert!(lines[1].starts_with("Jan 1"));
        assert!(lines[1].contains("1,500.00"));
        assert!(lines[2].contains("0.00"));
    }

    #[test]
    fn test_render_categories_rows() {
        let categories = CategoryTotals::new().add("rent", 800.0).add("food", 200.0);
        let text = render_categories(&categories);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("rent"));
        assert!(lines[0].contains("▓".repeat(BAR_WIDTH).as_str()));
        assert!(lines[1].contains("200.00"));
    }
}
