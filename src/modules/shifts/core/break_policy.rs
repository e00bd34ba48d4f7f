// Mandatory break derived from how long a shift lasts.
//
// Responsibilities
// - Place a shift's wall-clock start and end on the timeline, rolling the end
//   into the next day when it is earlier than the start.
// - Map elapsed time to break minutes with a two-step threshold policy.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, Utc};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BreakPolicy {
    pub long_threshold_hours: f64,
    pub long_break_minutes: u32,
    pub short_threshold_hours: f64,
    pub short_break_minutes: u32,
}

impl Default for BreakPolicy {
    fn default() -> Self {
        Self {
            long_threshold_hours: 9.0,
            long_break_minutes: 45,
            short_threshold_hours: 6.0,
            short_break_minutes: 30,
        }
    }
}

impl BreakPolicy {
    /// Thresholds are exclusive: exactly 9h earns the short break.
    pub fn break_minutes(&self, elapsed: TimeDelta) -> u32 {
        let hours = elapsed.num_seconds() as f64 / 3600.0;
        if hours > self.long_threshold_hours {
            self.long_break_minutes
        } else if hours > self.short_threshold_hours {
            self.short_break_minutes
        } else {
            0
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl ShiftWindow {
    pub fn resolve(date: NaiveDate, start_time: NaiveTime, end_time: NaiveTime) -> Self {
        let start = date.and_time(start_time).and_utc();
        let mut end = date.and_time(end_time).and_utc();
        if end < start {
            end += TimeDelta::days(1);
        }
        Self { start, end }
    }

    pub fn elapsed(&self) -> TimeDelta {
        self.end - self.start
    }
}

#[cfg(test)]
mod break_policy_tests {
    use super::*;
    use rstest::rstest;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn hours(value: f64) -> TimeDelta {
        TimeDelta::seconds((value * 3600.0).round() as i64)
    }

    #[rstest]
    #[case(9.0, 30)]
    #[case(9.01, 45)]
    #[case(12.0, 45)]
    #[case(6.0, 0)]
    #[case(6.01, 30)]
    #[case(0.0, 0)]
    fn it_should_apply_the_default_thresholds(#[case] elapsed: f64, #[case] expected: u32) {
        assert_eq!(BreakPolicy::default().break_minutes(hours(elapsed)), expected);
    }

    #[rstest]
    fn it_should_honour_a_configured_policy() {
        let policy = BreakPolicy {
            long_threshold_hours: 8.0,
            long_break_minutes: 60,
            short_threshold_hours: 4.0,
            short_break_minutes: 15,
        };
        assert_eq!(policy.break_minutes(hours(8.5)), 60);
        assert_eq!(policy.break_minutes(hours(5.0)), 15);
        assert_eq!(policy.break_minutes(hours(4.0)), 0);
    }

    #[rstest]
    fn it_should_roll_an_overnight_end_into_the_next_day() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let window = ShiftWindow::resolve(date, time(22, 0), time(6, 0));

        assert_eq!(window.start.to_rfc3339(), "2024-03-10T22:00:00+00:00");
        assert_eq!(window.end.to_rfc3339(), "2024-03-11T06:00:00+00:00");
        assert_eq!(window.elapsed(), TimeDelta::hours(8));
    }

    #[rstest]
    fn it_should_keep_a_same_day_shift_on_its_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let window = ShiftWindow::resolve(date, time(8, 0), time(17, 0));
        assert_eq!(window.elapsed(), TimeDelta::hours(9));
        assert_eq!(BreakPolicy::default().break_minutes(window.elapsed()), 30);
    }
}
