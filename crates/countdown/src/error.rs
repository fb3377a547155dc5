// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use jiff::civil::Date;
use thiserror::Error;

/// The result type for fallible countdown operations.
pub type Result<T> = std::result::Result<T, Error>;

/// An error raised while configuring or rendering a countdown.
///
/// Computing the remaining time never fails. Errors only come from building a
/// [`DateConfig`][crate::DateConfig] out of user input, which should be treated as fatal at
/// startup, and from renderers reporting that they could not draw a frame.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The target date is not a valid `YYYY-MM-DD` calendar date.
    #[error("invalid target date {input:?}, expected YYYY-MM-DD")]
    InvalidDate {
        /// The rejected input.
        input: String,
        /// The underlying parse failure, absent when the input is not shaped like a date.
        source: Option<jiff::Error>,
    },

    /// The last millisecond of the target date cannot be expressed in the time zone.
    ///
    /// This happens for dates whose end falls past the supported timestamp range, which ends
    /// in the evening of 9999-12-30 UTC, and for local times that never occur.
    #[error("the end of {date} cannot be represented in the local time zone")]
    EndOfDay {
        /// The target date.
        date: Date,
        /// The underlying conversion failure.
        source: jiff::Error,
    },

    /// A renderer failed to draw a frame.
    #[error("render failed: {0}")]
    Render(Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Wraps a renderer failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use countdown::Error;
    ///
    /// let error = Error::render("terminal closed");
    /// assert_eq!(error.to_string(), "render failed: terminal closed");
    /// ```
    pub fn render(error: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Render(error.into())
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use std::error::Error as _;
    use std::io;

    use super::*;

    #[test]
    fn assert_types() {
        static_assertions::assert_impl_all!(Error: Send, Sync, std::error::Error);
    }

    #[test]
    fn invalid_date_exposes_source() {
        let source = Date::strptime("%Y-%m-%d", "nope").unwrap_err();
        let error = Error::InvalidDate {
            input: "nope".to_string(),
            source: Some(source),
        };

        assert_eq!(error.to_string(), "invalid target date \"nope\", expected YYYY-MM-DD");
        assert!(error.source().is_some());
    }

    #[test]
    fn misshapen_date_has_no_source() {
        let error = Error::InvalidDate {
            input: "2026-2-3".to_string(),
            source: None,
        };

        assert_eq!(error.to_string(), "invalid target date \"2026-2-3\", expected YYYY-MM-DD");
        assert!(error.source().is_none());
    }

    #[test]
    fn render_wraps_io_error() {
        let error = Error::render(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));

        assert!(matches!(error, Error::Render(_)));
        assert_eq!(error.to_string(), "render failed: pipe closed");
    }
}
