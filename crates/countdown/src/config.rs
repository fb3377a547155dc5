// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use std::time::SystemTime;

use jiff::Timestamp;
use jiff::civil::Date;
use jiff::tz::TimeZone;

use crate::{Error, Result};

const DATE_FORMAT: &str = "%Y-%m-%d";
const LABEL_FORMAT: &str = "%B %-d, %Y";

/// The countdown target.
///
/// A target is a calendar date that is counted down to its very end: the last millisecond
/// of that day (23:59:59.999) in the local time zone. The full final day is therefore part
/// of the countdown.
///
/// The configuration is built once at startup and never changes afterwards. The end-of-day
/// instant is resolved when the configuration is created, so an invalid date is reported
/// immediately rather than producing a wrong countdown later.
///
/// Dates must be written with a four-digit year and two-digit month and day. The end of the
/// day has to fit in a [`Timestamp`], whose range ends in the evening of 9999-12-30 UTC, so
/// `9999-12-31` is rejected in every time zone.
///
/// # Examples
///
/// ```
/// use countdown::DateConfig;
/// use jiff::tz::TimeZone;
///
/// let config = DateConfig::with_time_zone("2026-02-13", TimeZone::UTC)?;
///
/// assert_eq!(config.end_date().to_string(), "2026-02-13");
/// assert_eq!(config.target().to_string(), "2026-02-13T23:59:59.999Z");
/// assert_eq!(config.label(), "February 13, 2026");
///
/// assert!("2026-02-30".parse::<DateConfig>().is_err());
/// # Ok::<(), countdown::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateConfig {
    end_date: Date,
    target: Timestamp,
}

impl DateConfig {
    /// The target used when none is configured.
    pub const DEFAULT_END_DATE: &'static str = "2026-02-13";

    /// Creates a configuration from a `YYYY-MM-DD` string using the system time zone.
    ///
    /// # Errors
    ///
    /// Returns an error if `end_date` is not a valid calendar date, or if the end of that
    /// day cannot be represented in the system time zone.
    pub fn parse(end_date: &str) -> Result<Self> {
        Self::with_time_zone(end_date, TimeZone::system())
    }

    /// Creates a configuration from a `YYYY-MM-DD` string, resolving the end of the day in
    /// the given time zone.
    ///
    /// # Errors
    ///
    /// Returns an error if `end_date` is not a valid calendar date, or if the end of that
    /// day cannot be represented in `time_zone`.
    pub fn with_time_zone(end_date: &str, time_zone: TimeZone) -> Result<Self> {
        let trimmed = end_date.trim();
        let invalid = |source| Error::InvalidDate {
            input: end_date.to_string(),
            source,
        };

        if !has_date_shape(trimmed) {
            return Err(invalid(None));
        }

        let date = Date::strptime(DATE_FORMAT, trimmed).map_err(|source| invalid(Some(source)))?;

        Self::from_date(date, &time_zone)
    }

    /// Creates a configuration from an already validated calendar date.
    ///
    /// # Errors
    ///
    /// Returns an error if the end of `date` cannot be represented in `time_zone`.
    pub fn from_date(date: Date, time_zone: &TimeZone) -> Result<Self> {
        let target = date
            .at(23, 59, 59, 999_000_000)
            .to_zoned(time_zone.clone())
            .map_err(|source| Error::EndOfDay { date, source })?
            .timestamp();

        Ok(Self { end_date: date, target })
    }

    /// The target calendar date.
    #[must_use]
    pub fn end_date(&self) -> Date {
        self.end_date
    }

    /// The last millisecond of the target date.
    #[must_use]
    pub fn target(&self) -> Timestamp {
        self.target
    }

    /// The last millisecond of the target date as [`SystemTime`].
    #[must_use]
    pub fn target_system_time(&self) -> SystemTime {
        SystemTime::from(self.target)
    }

    /// The target date in long form, such as `February 13, 2026`.
    #[must_use]
    pub fn label(&self) -> String {
        self.end_date.strftime(LABEL_FORMAT).to_string()
    }
}

// `strptime` accepts unpadded fields, so the fixed `YYYY-MM-DD` layout is checked first.
fn has_date_shape(input: &str) -> bool {
    input.len() == 10
        && input.bytes().enumerate().all(|(index, byte)| match index {
            4 | 7 => byte == b'-',
            _ => byte.is_ascii_digit(),
        })
}

impl FromStr for DateConfig {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Display for DateConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.end_date, f)
    }
}
