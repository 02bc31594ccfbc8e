use chrono::{Datelike, NaiveDate};
use std::time::Duration;

use crate::config::PLOT_CONFIG;

pub struct TimeUtils;

impl TimeUtils {
    /// Parse a backend date string into a plot x coordinate (whole days since 0001-01-01).
    pub fn date_to_plot_x(date: &str) -> Option<f64> {
        NaiveDate::parse_from_str(date.trim(), PLOT_CONFIG.date_format)
            .ok()
            .map(|d| d.num_days_from_ce() as f64)
    }

    /// Inverse of [`date_to_plot_x`](Self::date_to_plot_x), for axis labels.
    /// Fractional days are rounded to the nearest day.
    pub fn plot_x_to_date(x: f64) -> Option<String> {
        if !x.is_finite() || x < i32::MIN as f64 || x > i32::MAX as f64 {
            return None;
        }
        NaiveDate::from_num_days_from_ce_opt(x.round() as i32)
            .map(|d| d.format(PLOT_CONFIG.date_format).to_string())
    }

    /// Short human form: `850ms`, `2.4s`, `1.5m`.
    pub fn format_elapsed(duration: Duration) -> String {
        let millis = duration.as_millis();
        if millis < 1_000 {
            return format!("{}ms", millis);
        }
        let seconds = duration.as_secs_f64();
        if seconds < 60.0 {
            format!("{:.1}s", seconds)
        } else {
            format!("{:.1}m", seconds / 60.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_round_trip_through_plot_x() {
        let x = TimeUtils::date_to_plot_x("2023-06-01").unwrap();
        let next = TimeUtils::date_to_plot_x("2023-06-02").unwrap();
        assert_eq!(next - x, 1.0);
        assert_eq!(TimeUtils::plot_x_to_date(x).as_deref(), Some("2023-06-01"));
        assert_eq!(TimeUtils::plot_x_to_date(x + 0.4).as_deref(), Some("2023-06-01"));
    }

    #[test]
    fn unparseable_dates_are_rejected() {
        assert!(TimeUtils::date_to_plot_x("0").is_none());
        assert!(TimeUtils::date_to_plot_x("2023-13-01").is_none());
        assert!(TimeUtils::date_to_plot_x("").is_none());
        assert!(TimeUtils::plot_x_to_date(f64::NAN).is_none());
    }

    #[test]
    fn elapsed_formatting() {
        assert_eq!(TimeUtils::format_elapsed(Duration::from_millis(850)), "850ms");
        assert_eq!(TimeUtils::format_elapsed(Duration::from_millis(2_400)), "2.4s");
        assert_eq!(TimeUtils::format_elapsed(Duration::from_secs(90)), "1.5m");
    }
}
