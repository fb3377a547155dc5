// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::time::{Duration, SystemTime};

use crate::DateConfig;

/// Milliseconds in a second.
pub const MS_PER_SECOND: u64 = 1_000;

/// Milliseconds in a minute.
pub const MS_PER_MINUTE: u64 = 60 * MS_PER_SECOND;

/// Milliseconds in an hour.
pub const MS_PER_HOUR: u64 = 60 * MS_PER_MINUTE;

/// Milliseconds in a day.
pub const MS_PER_DAY: u64 = 24 * MS_PER_HOUR;

/// Milliseconds in an approximate year of 365.25 days.
///
/// The quarter day keeps the value integral (31 557 600 000 ms), so every step of the
/// decomposition is exact integer arithmetic.
pub const MS_PER_YEAR: u64 = MS_PER_DAY * 1461 / 4;

const NANOS_PER_MILLI: u32 = 1_000_000;

/// Time remaining until a countdown target, broken down into nested units.
///
/// Each unit only counts what is left over after all larger units have been taken out, so
/// the values roll over the way a clock face does. Two views of the sub-day remainder are
/// provided: `hours` with `minutes`, and `minutes_in_day` alone.
///
/// Once the target has passed every field is zero. Snapshots are plain values: each
/// sampling produces a new one that replaces the previous one.
///
/// # Examples
///
/// ```
/// use countdown::{MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE, TimeRemaining};
///
/// let remaining = TimeRemaining::from_millis(2 * MS_PER_DAY + 3 * MS_PER_HOUR + 4 * MS_PER_MINUTE);
///
/// assert_eq!(remaining.days, 2);
/// assert_eq!(remaining.hours, 3);
/// assert_eq!(remaining.minutes, 4);
/// assert_eq!(remaining.minutes_in_day, 184);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(rename_all = "camelCase"))]
pub struct TimeRemaining {
    /// Whole 365.25-day years remaining.
    pub years: u64,
    /// Whole days remaining within the current partial year (0-365).
    pub days: u64,
    /// Whole hours remaining within the current partial day (0-23).
    pub hours: u64,
    /// Whole minutes remaining within the current partial hour (0-59).
    pub minutes: u64,
    /// Whole minutes remaining within the current partial day (0-1439).
    pub minutes_in_day: u64,
    /// Whole seconds remaining within the current partial minute (0-59).
    pub seconds: u64,
    /// Total milliseconds remaining.
    pub total_ms: u64,
}

impl TimeRemaining {
    /// The terminal state reached once the target has passed.
    pub const ELAPSED: Self = Self {
        years: 0,
        days: 0,
        hours: 0,
        minutes: 0,
        minutes_in_day: 0,
        seconds: 0,
        total_ms: 0,
    };

    /// Breaks down a number of remaining milliseconds.
    #[must_use]
    pub const fn from_millis(total_ms: u64) -> Self {
        // The sub-day views are computed from independent remainders rather than derived from
        // one another.
        Self {
            years: total_ms / MS_PER_YEAR,
            days: (total_ms % MS_PER_YEAR) / MS_PER_DAY,
            hours: (total_ms % MS_PER_DAY) / MS_PER_HOUR,
            minutes: (total_ms % MS_PER_HOUR) / MS_PER_MINUTE,
            minutes_in_day: (total_ms % MS_PER_DAY) / MS_PER_MINUTE,
            seconds: (total_ms % MS_PER_MINUTE) / MS_PER_SECOND,
            total_ms,
        }
    }

    /// Returns `true` once the target has been reached or passed.
    #[must_use]
    pub const fn is_elapsed(&self) -> bool {
        self.total_ms == 0
    }

    /// The total remaining time as a [`Duration`].
    #[must_use]
    pub const fn to_duration(&self) -> Duration {
        Duration::from_millis(self.total_ms)
    }
}

/// Computes the time remaining from `now` until the end of the configured target date.
///
/// The computation is pure and never fails. `now` is taken at millisecond precision. When
/// `now` is at or past the target, the result is [`TimeRemaining::ELAPSED`].
///
/// # Examples
///
/// ```
/// use std::time::{Duration, SystemTime};
///
/// use countdown::{DateConfig, TimeRemaining, decompose};
/// use jiff::tz::TimeZone;
///
/// let config = DateConfig::with_time_zone("2026-02-13", TimeZone::UTC)?;
///
/// let one_minute_before = config.target_system_time() - Duration::from_secs(60);
/// let remaining = decompose(&config, one_minute_before);
/// assert_eq!(remaining.minutes, 1);
/// assert_eq!(remaining.total_ms, 60_000);
///
/// let after = config.target_system_time() + Duration::from_millis(1);
/// assert_eq!(decompose(&config, after), TimeRemaining::ELAPSED);
/// # Ok::<(), countdown::Error>(())
/// ```
#[must_use]
pub fn decompose(config: &DateConfig, now: SystemTime) -> TimeRemaining {
    TimeRemaining::from_millis(remaining_millis(config.target_system_time(), now))
}

fn remaining_millis(target: SystemTime, now: SystemTime) -> u64 {
    // A partial millisecond on `now` is dropped, which leaves it on the remaining side.
    target.duration_since(now).map_or(0, |remaining| {
        let partial = remaining.subsec_nanos() % NANOS_PER_MILLI != 0;
        let millis = remaining.as_millis() + u128::from(partial);

        u64::try_from(millis).unwrap_or(u64::MAX)
    })
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use jiff::tz::{self, TimeZone};
    use rstest::rstest;

    use super::*;

    fn config_utc(date: &str) -> DateConfig {
        DateConfig::with_time_zone(date, TimeZone::UTC).unwrap()
    }

    fn at(timestamp: &str) -> SystemTime {
        SystemTime::from(timestamp.parse::<Timestamp>().unwrap())
    }

    #[test]
    fn assert_types() {
        static_assertions::assert_impl_all!(TimeRemaining: Send, Sync, Copy);
    }

    #[test]
    fn year_is_fractional() {
        assert_eq!(MS_PER_YEAR, 31_557_600_000);
        assert_eq!(MS_PER_YEAR, MS_PER_DAY * 365 + MS_PER_DAY / 4);
    }

    #[test]
    fn one_minute_before_end_of_target_day() {
        let remaining = decompose(&config_utc("2026-02-13"), at("2026-02-13T23:59:00Z"));

        assert_eq!(
            remaining,
            TimeRemaining {
                years: 0,
                days: 0,
                hours: 0,
                minutes: 0,
                minutes_in_day: 0,
                seconds: 59,
                total_ms: 59_999,
            }
        );
    }

    #[test]
    fn final_day_is_counted_in_full() {
        let remaining = decompose(&config_utc("2026-02-13"), at("2026-02-12T23:59:00Z"));

        assert_eq!(remaining.days, 1);
        assert_eq!(remaining.hours, 0);
        assert_eq!(remaining.minutes, 0);
        assert_eq!(remaining.minutes_in_day, 0);
        assert_eq!(remaining.seconds, 59);
        assert_eq!(remaining.total_ms, MS_PER_DAY + 59_999);
    }

    #[test]
    fn start_of_target_day_has_a_day_left() {
        let remaining = decompose(&config_utc("2026-02-13"), at("2026-02-13T00:00:00Z"));

        assert_eq!(remaining.days, 0);
        assert_eq!(remaining.hours, 23);
        assert_eq!(remaining.minutes, 59);
        assert_eq!(remaining.minutes_in_day, 1439);
        assert_eq!(remaining.seconds, 59);
        assert_eq!(remaining.total_ms, MS_PER_DAY - 1);
    }

    #[test]
    fn years_days_hours_away() {
        let config = config_utc("2049-12-31");
        // Three 365.25-day years carry 18 hours into the sub-day remainder.
        let offset = Duration::from_millis(3 * MS_PER_YEAR + 10 * MS_PER_DAY + 11 * MS_PER_HOUR);
        let now = config.target_system_time() - offset;

        let remaining = decompose(&config, now);

        assert_eq!(remaining.years, 3);
        assert_eq!(remaining.days, 10);
        assert_eq!(remaining.hours, 5);
        assert_eq!(remaining.minutes, 0);
        assert_eq!(remaining.minutes_in_day, 300);
        assert_eq!(remaining.seconds, 0);
    }

    #[test]
    fn quarter_days_of_whole_years_carry_into_hours() {
        let remaining = TimeRemaining::from_millis(3 * MS_PER_YEAR + 10 * MS_PER_DAY + 5 * MS_PER_HOUR);

        assert_eq!(remaining.years, 3);
        assert_eq!(remaining.days, 10);
        assert_eq!(remaining.hours, 23);
        assert_eq!(remaining.minutes_in_day, 23 * 60);
    }

    #[rstest]
    #[case::exactly_at_target(Duration::ZERO)]
    #[case::one_milli_after(Duration::from_millis(1))]
    #[case::one_day_after(Duration::from_secs(86_400))]
    #[case::decade_after(Duration::from_millis(10 * MS_PER_YEAR))]
    fn clamped_at_or_after_target(#[case] after: Duration) {
        let config = config_utc("2026-02-13");

        let remaining = decompose(&config, config.target_system_time() + after);

        assert_eq!(remaining, TimeRemaining::ELAPSED);
        assert!(remaining.is_elapsed());
    }

    #[test]
    fn sub_millisecond_now_is_truncated() {
        let config = config_utc("2026-02-13");
        let whole = config.target_system_time() - Duration::from_millis(1_500);

        let remaining = decompose(&config, whole + Duration::from_micros(400));

        assert_eq!(remaining.total_ms, 1_500);
        assert_eq!(remaining.seconds, 1);
    }

    #[test]
    fn sub_millisecond_past_target_is_elapsed() {
        let config = config_utc("2026-02-13");

        let remaining = decompose(&config, config.target_system_time() + Duration::from_micros(400));

        assert!(remaining.is_elapsed());
    }

    #[test]
    fn local_time_zone_shifts_the_target() {
        let config = DateConfig::with_time_zone("2026-02-13", TimeZone::fixed(tz::offset(2))).unwrap();

        let remaining = decompose(&config, at("2026-02-13T21:00:00Z"));

        // 23:59:59.999+02:00 is 21:59:59.999Z.
        assert_eq!(remaining.total_ms, MS_PER_HOUR - 1);
        assert_eq!(remaining.minutes, 59);
        assert_eq!(remaining.seconds, 59);
    }

    #[test]
    fn remaining_never_increases_as_time_passes() {
        let config = config_utc("2027-06-30");
        let start = at("2026-01-01T00:00:00Z");
        let steps = [
            Duration::from_millis(1),
            Duration::from_millis(999),
            Duration::from_secs(59),
            Duration::from_secs(3_599),
            Duration::from_secs(86_399),
            Duration::from_millis(MS_PER_YEAR),
        ];

        let mut now = start;
        let mut previous = decompose(&config, now);

        for step in steps.iter().cycle().take(60) {
            now += *step;
            let current = decompose(&config, now);

            assert!(current.total_ms <= previous.total_ms, "{current:?} > {previous:?}");
            previous = current;
        }

        assert!(previous.is_elapsed());
    }

    #[test]
    fn units_stay_within_rollover_ranges() {
        // Walk a little over a year with a stride that is coprime to every unit.
        let stride = 7 * MS_PER_HOUR + 13 * MS_PER_MINUTE + 17 * MS_PER_SECOND + 19;
        let mut total_ms = 0;

        while total_ms < MS_PER_YEAR + MS_PER_DAY {
            let remaining = TimeRemaining::from_millis(total_ms);

            assert!(remaining.days <= 365, "{remaining:?}");
            assert!(remaining.hours <= 23, "{remaining:?}");
            assert!(remaining.minutes <= 59, "{remaining:?}");
            assert!(remaining.seconds <= 59, "{remaining:?}");
            assert!(remaining.minutes_in_day <= 1439, "{remaining:?}");
            assert_eq!(remaining.minutes_in_day, remaining.hours * 60 + remaining.minutes, "{remaining:?}");

            total_ms += stride;
        }
    }

    #[test]
    fn parts_reconstruct_total() {
        let total_ms = 4 * MS_PER_YEAR + 200 * MS_PER_DAY + 13 * MS_PER_HOUR + 42 * MS_PER_MINUTE + 7_321;
        let r = TimeRemaining::from_millis(total_ms);

        let rebuilt = r.years * MS_PER_YEAR
            + r.days * MS_PER_DAY
            + r.hours * MS_PER_HOUR
            + r.minutes * MS_PER_MINUTE
            + r.seconds * MS_PER_SECOND;

        assert_eq!(total_ms - rebuilt, 321);
    }

    #[test]
    fn days_can_reach_365_in_the_quarter_day() {
        let remaining = TimeRemaining::from_millis(MS_PER_YEAR - 1);

        assert_eq!(remaining.years, 0);
        assert_eq!(remaining.days, 365);
        assert_eq!(remaining.hours, 5);
    }

    #[test]
    fn decompose_is_idempotent() {
        let config = config_utc("2030-01-01");
        let now = at("2026-10-15T08:30:12.345Z");

        assert_eq!(decompose(&config, now), decompose(&config, now));
    }

    #[test]
    fn to_duration_matches_total() {
        let remaining = TimeRemaining::from_millis(90_061_001);

        assert_eq!(remaining.to_duration(), Duration::from_millis(90_061_001));
        assert!(!remaining.is_elapsed());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(TimeRemaining::from_millis(MS_PER_HOUR + 5 * MS_PER_MINUTE)).unwrap();

        assert_eq!(json["minutesInDay"], 65);
        assert_eq!(json["totalMs"], 3_900_000);
        assert_eq!(json["hours"], 1);
    }
}
