// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::time::Duration;

use futures_util::StreamExt;
use tick::{Clock, PeriodicTimer};
use tokio::task::JoinHandle;
use tracing::Instrument;

use crate::{DateConfig, Result, RingPercentages, TimeRemaining, decompose, ring_percentages};

/// One sampled countdown snapshot together with its ring percentages.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(rename_all = "camelCase"))]
pub struct Frame {
    /// Zero for the sample taken at start, incremented by one on every tick.
    pub tick: u64,
    /// The remaining time at the moment of sampling.
    pub remaining: TimeRemaining,
    /// Ring percentages derived from `remaining`.
    pub percentages: RingPercentages,
}

impl Frame {
    /// Creates a frame, deriving the ring percentages from `remaining`.
    #[must_use]
    pub fn new(tick: u64, remaining: TimeRemaining) -> Self {
        Self {
            tick,
            remaining,
            percentages: ring_percentages(&remaining),
        }
    }
}

/// Draws countdown frames.
///
/// A renderer is a function of the latest frame only; it should not depend on frames it
/// has seen before. When drawing fails, the error is logged and the frame is skipped; the
/// next tick is rendered normally.
pub trait Renderer: Send {
    /// Draws a single frame.
    ///
    /// # Errors
    ///
    /// Returns an error if the frame could not be drawn.
    fn render(&mut self, frame: &Frame) -> Result<()>;
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn render(&mut self, frame: &Frame) -> Result<()> {
        (**self).render(frame)
    }
}

/// Periodically samples a countdown and hands each frame to a [`Renderer`].
///
/// The driver takes one sample as soon as it starts and then one per period (one second by
/// default) for as long as it runs. Every sample is a fresh [`Frame`] that replaces the
/// previous one. Once the target has passed, the driver keeps rendering the all-zero state.
///
/// The driver reads time from a [`Clock`], so tests can control its cadence with
/// `tick::ClockControl`.
///
/// # Examples
///
/// ```
/// use countdown::{DateConfig, SamplingDriver};
/// use jiff::tz::TimeZone;
/// use tick::Clock;
///
/// # fn sample(clock: &Clock) -> countdown::Result<()> {
/// let config = DateConfig::with_time_zone("2049-12-31", TimeZone::UTC)?;
/// let driver = SamplingDriver::new(config, clock);
///
/// let frame = driver.sample(0);
/// assert!(frame.percentages.years <= 100.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SamplingDriver {
    config: DateConfig,
    clock: Clock,
    period: Duration,
}

impl SamplingDriver {
    /// The default sampling period.
    pub const DEFAULT_PERIOD: Duration = Duration::from_secs(1);

    /// Creates a driver for `config` that samples every [`DEFAULT_PERIOD`][Self::DEFAULT_PERIOD].
    #[must_use]
    pub fn new(config: DateConfig, clock: &Clock) -> Self {
        Self {
            config,
            clock: clock.clone(),
            period: Self::DEFAULT_PERIOD,
        }
    }

    /// Overrides the sampling period.
    ///
    /// > **Note**: The timer resolution is 1ms; shorter periods are rounded up to it.
    #[must_use]
    pub fn with_period(self, period: Duration) -> Self {
        Self { period, ..self }
    }

    /// The countdown target.
    #[must_use]
    pub fn config(&self) -> &DateConfig {
        &self.config
    }

    /// The sampling period.
    #[must_use]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Samples the countdown at the clock's current time.
    #[must_use]
    pub fn sample(&self, tick: u64) -> Frame {
        Frame::new(tick, decompose(&self.config, self.clock.system_time()))
    }

    /// Starts sampling in a background task and returns the handle that stops it.
    ///
    /// The first frame is rendered right away, the following ones once per period.
    ///
    /// # Panics
    ///
    /// Panics if called outside of a Tokio runtime context.
    pub fn start(self, renderer: impl Renderer + 'static) -> DriverHandle {
        tracing::debug!(
            target_date = %self.config,
            period_ms = self.period.as_millis(),
            "starting countdown sampling"
        );

        let span = tracing::debug_span!("countdown_driver", target_date = %self.config);

        DriverHandle {
            task: Some(tokio::spawn(self.run(renderer).instrument(span))),
        }
    }

    async fn run(self, mut renderer: impl Renderer) {
        let mut timer = PeriodicTimer::new(&self.clock, self.period);
        let mut reported_elapsed = false;
        let mut render_failing = false;
        let mut tick = 0;

        loop {
            let frame = self.sample(tick);
            tracing::trace!(tick, total_ms = frame.remaining.total_ms, "countdown sampled");

            if frame.remaining.is_elapsed() && !reported_elapsed {
                reported_elapsed = true;
                tracing::info!(target_date = %self.config, "countdown reached its target");
            }

            // Only the first failure of a streak is a warning; a closed output fails every tick.
            match renderer.render(&frame) {
                Err(error) if render_failing => {
                    tracing::debug!(tick, %error, "frame still failing to render");
                }
                Err(error) => {
                    render_failing = true;
                    tracing::warn!(tick, %error, "skipping frame that failed to render");
                }
                Ok(()) if render_failing => {
                    render_failing = false;
                    tracing::info!(tick, "rendering recovered");
                }
                Ok(()) => {}
            }

            if timer.next().await.is_none() {
                break;
            }

            tick += 1;
        }
    }
}

/// Stops a running [`SamplingDriver`].
///
/// Stopping is idempotent: [`stop`][Self::stop] can be called any number of times, and
/// dropping the handle stops the driver if it is still running.
#[derive(Debug)]
pub struct DriverHandle {
    task: Option<JoinHandle<()>>,
}

impl DriverHandle {
    /// Stops the driver by cancelling its background task.
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            tracing::debug!("stopped countdown sampling");
        }
    }

    /// Returns `true` once [`stop`][Self::stop] has been called.
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.task.is_none()
    }
}

impl Drop for DriverHandle {
    fn drop(&mut self) {
        self.stop();
    }
}
