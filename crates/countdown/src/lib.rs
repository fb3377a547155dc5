// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg_attr(
    test,
    allow(
        clippy::float_cmp,
        clippy::unchecked_time_subtraction,
        reason = "allow these lints in tests to improve the readability of the tests"
    )
)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Countdown arithmetic for concentric progress-ring displays.
//!
//! Given a fixed target date and the current instant, this crate computes how much time
//! remains as a hierarchy of nested units and maps each unit onto the fill ratio of one
//! visual ring. A driver samples the countdown periodically and hands every snapshot to a
//! renderer.
//!
//! # Quick Start
//!
//! ```no_run
//! use countdown::{DateConfig, Frame, Renderer, SamplingDriver};
//! use tick::Clock;
//!
//! struct Print;
//!
//! impl Renderer for Print {
//!     fn render(&mut self, frame: &Frame) -> countdown::Result<()> {
//!         let r = frame.remaining;
//!         println!("{}y {}d {:02}:{:02}:{:02}", r.years, r.days, r.hours, r.minutes, r.seconds);
//!         Ok(())
//!     }
//! }
//!
//! # async fn run(clock: &Clock) -> countdown::Result<()> {
//! let config: DateConfig = "2049-12-31".parse()?;
//! let mut handle = SamplingDriver::new(config, clock).start(Print);
//!
//! // ... later, when the view is torn down:
//! handle.stop();
//! # Ok(())
//! # }
//! ```
//!
//! # Overview
//!
//! - [`DateConfig`] - The immutable countdown target, interpreted as the last millisecond
//!   of a calendar date in the local time zone.
//! - [`decompose`] - Pure function producing a [`TimeRemaining`] snapshot for an instant.
//! - [`ring_percentages`] - Pure function mapping a snapshot to [`RingPercentages`].
//! - [`NumeralScale`] - Display scale for the central minutes numeral.
//! - [`SamplingDriver`] - Samples the countdown on a fixed cadence and feeds a [`Renderer`].
//! - [`DriverHandle`] - Stops a running driver; stopping is idempotent.
//! - [`Error`] - Errors raised while building the configuration or rendering.
//!
//! # Approximate years
//!
//! A year is always 365.25 days. The arithmetic is deliberately not calendar-exact, so the
//! `days` count can drift by one relative to a calendar count around year boundaries.
//!
//! # Features
//!
//! - `serde` - Implements `Serialize` for [`TimeRemaining`], [`RingPercentages`] and
//!   [`Frame`] using camel-case field names.

mod config;
mod driver;
mod error;
mod numeral;
mod ratio;
mod remaining;

pub use config::DateConfig;
pub use driver::{DriverHandle, Frame, Renderer, SamplingDriver};
pub use error::{Error, Result};
pub use numeral::NumeralScale;
pub use ratio::{RingPercentages, YEARS_RING_SPAN, ring_percentages};
pub use remaining::{MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE, MS_PER_SECOND, MS_PER_YEAR, TimeRemaining, decompose};
