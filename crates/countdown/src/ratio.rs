// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::TimeRemaining;

/// The number of years that fill the years ring completely.
pub const YEARS_RING_SPAN: u64 = 10;

const DAYS_RING_SPAN: u64 = 365;
const HOURS_RING_SPAN: u64 = 24;
const MINUTES_IN_DAY_RING_SPAN: u64 = 1440;

/// Fill percentages of the countdown rings.
///
/// Each value is the share of one ring that is filled, where `100.0` is a full ring. Only
/// `years` is clamped; the other values are linear in their unit and stay within range
/// because the decomposition already rolls them over.
///
/// The mapper knows nothing about angles or pixels. Renderers typically turn a value into
/// an arc sweep of `value / 100 * 2π`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(rename_all = "camelCase"))]
pub struct RingPercentages {
    /// Progress within a ten-year span, clamped to 100.
    pub years: f64,
    /// Progress through a 365-day year.
    pub days: f64,
    /// Progress through a 24-hour day.
    pub hours: f64,
    /// Progress through the 1440 minutes of a day.
    pub minutes_in_day: f64,
}

/// Maps a remaining-time snapshot to ring fill percentages.
///
/// # Examples
///
/// ```
/// use countdown::{MS_PER_DAY, MS_PER_YEAR, TimeRemaining, ring_percentages};
///
/// let remaining = TimeRemaining::from_millis(25 * MS_PER_YEAR + 73 * MS_PER_DAY);
/// let rings = ring_percentages(&remaining);
///
/// assert_eq!(rings.years, 100.0);
/// assert_eq!(rings.days, 20.0);
/// ```
#[must_use]
pub fn ring_percentages(remaining: &TimeRemaining) -> RingPercentages {
    RingPercentages {
        years: percent_of(remaining.years, YEARS_RING_SPAN).min(100.0),
        days: percent_of(remaining.days, DAYS_RING_SPAN),
        hours: percent_of(remaining.hours, HOURS_RING_SPAN),
        minutes_in_day: percent_of(remaining.minutes_in_day, MINUTES_IN_DAY_RING_SPAN),
    }
}

#[expect(
    clippy::cast_precision_loss,
    reason = "ring counts and spans are far below the 2^52 limit of exact f64 integers"
)]
fn percent_of(value: u64, span: u64) -> f64 {
    value as f64 * 100.0 / span as f64
}
