//! Consecutive-day streak over daily review counts.

use crate::calendar::{format_date, parse_date, previous_day};
use crate::types::DailyStat;
use chrono::NaiveDate;
use std::ops::ControlFlow;

/// Count consecutive calendar days with reviews, ending at the most recent
/// recorded day.
///
/// The streak is 0 when the most recent day is more than one day away from
/// `today` in either direction. Otherwise the days are walked newest first and
/// the walk stops at the first day that does not directly precede the
/// previous one.
pub fn compute_streak(stats: &[DailyStat], today: NaiveDate) -> u32 {
    let mut sorted: Vec<&DailyStat> = stats.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    let Some(latest) = sorted.first().and_then(|stat| parse_date(&stat.date)) else {
        return 0;
    };

    if (today - latest).num_days().abs() > 1 {
        return 0;
    }

    let walked = sorted
        .iter()
        .skip(1)
        .try_fold((latest, 1u32), |(expected, streak), stat| match previous_day(expected) {
            Some(day) if format_date(day) == stat.date => ControlFlow::Continue((day, streak + 1)),
            _ => ControlFlow::Break(streak),
        });

    match walked {
        ControlFlow::Continue((_, streak)) | ControlFlow::Break(streak) => streak,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(dates: &[&str]) -> Vec<DailyStat> {
        dates
            .iter()
            .map(|date| DailyStat {
                date: date.to_string(),
                count: 1,
            })
            .collect()
    }

    fn day(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    #[test]
    fn empty_history_has_no_streak() {
        assert_eq!(compute_streak(&[], day("2024-01-03")), 0);
    }

    #[test]
    fn three_consecutive_days_ending_today() {
        let history = stats(&["2024-01-01", "2024-01-02", "2024-01-03"]);
        assert_eq!(compute_streak(&history, day("2024-01-03")), 3);
    }

    #[test]
    fn streak_survives_until_end_of_next_day() {
        let history = stats(&["2024-01-01", "2024-01-02"]);
        assert_eq!(compute_streak(&history, day("2024-01-03")), 2);
    }

    #[test]
    fn gap_before_today_breaks_streak() {
        let history = stats(&["2024-01-01"]);
        assert_eq!(compute_streak(&history, day("2024-01-05")), 0);
        assert_eq!(compute_streak(&history, day("2024-01-03")), 0);
    }

    #[test]
    fn input_order_does_not_matter() {
        let history = stats(&["2024-01-03", "2024-01-01", "2024-01-02"]);
        assert_eq!(compute_streak(&history, day("2024-01-03")), 3);
    }

    #[test]
    fn walk_stops_at_first_gap() {
        let history = stats(&["2023-12-25", "2023-12-26", "2024-01-01", "2024-01-02"]);
        assert_eq!(compute_streak(&history, day("2024-01-02")), 2);
    }

    #[test]
    fn walk_crosses_month_and_year() {
        let history = stats(&[
            "2023-12-30",
            "2023-12-31",
            "2024-01-01",
            "2024-02-28",
            "2024-02-29",
            "2024-03-01",
        ]);
        assert_eq!(compute_streak(&history, day("2024-03-01")), 3);
        assert_eq!(compute_streak(&history[..3], day("2024-01-01")), 3);
    }

    #[test]
    fn latest_day_one_ahead_of_today_still_counts() {
        let history = stats(&["2024-01-04", "2024-01-03"]);
        assert_eq!(compute_streak(&history, day("2024-01-03")), 2);
    }

    #[test]
    fn unparseable_latest_date_has_no_streak() {
        let history = stats(&["2024-01-03", "not-a-date"]);
        assert_eq!(compute_streak(&history, day("2024-01-03")), 0);
    }
}
