// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg_attr(
    test,
    allow(clippy::float_cmp, reason = "allow these lints in tests to improve the readability of the tests")
)]

//! A terminal watch face that counts down to a target date.
//!
//! # Usage
//!
//! ```bash
//! countdown-face --target 2049-12-31
//! ```
//!
//! Three outer rings show the years, days and hours left; the inner ring shows the minutes
//! left in the current day. The face is redrawn once per second until Ctrl-C.
//!
//! With `--once`, a single frame is drawn and the program exits. With `--json`, frames are
//! written as JSON lines instead of being drawn.

use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use countdown::{DateConfig, Renderer, SamplingDriver};
use tick::Clock;
use tracing_subscriber::EnvFilter;

mod face;
mod json;

use face::TerminalFace;
use json::JsonLines;

#[derive(Parser, Debug)]
#[command(name = "countdown-face", version, about = "Counts down to a target date on concentric rings")]
struct Cli {
    /// Target date; the countdown ends at the last millisecond of this day, local time
    #[arg(long, env = "COUNTDOWN_TARGET", value_name = "YYYY-MM-DD", default_value = DateConfig::DEFAULT_END_DATE)]
    target: String,

    /// Draw a single frame and exit
    #[arg(long)]
    once: bool,

    /// Write frames as JSON lines instead of drawing them
    #[arg(long)]
    json: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    #[arg(long, hide = true, default_value_t = 1000, value_name = "MILLISECONDS")]
    period_ms: u64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let config: DateConfig = cli.target.parse().context("failed to read the countdown target")?;

    if cli.no_color {
        colored::control::set_override(false);
    }

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start the runtime")?
        .block_on(run(&cli, config))
}

async fn run(cli: &Cli, config: DateConfig) -> Result<()> {
    let clock = Clock::new_tokio();
    let driver = SamplingDriver::new(config, &clock).with_period(Duration::from_millis(cli.period_ms));

    let mut renderer: Box<dyn Renderer> = if cli.json {
        Box::new(JsonLines::new(io::stdout()))
    } else {
        Box::new(TerminalFace::new(io::stdout(), driver.config()).in_place(!cli.once))
    };

    if cli.once {
        return renderer.render(&driver.sample(0)).context("failed to draw the countdown");
    }

    let mut handle = driver.start(renderer);

    tokio::signal::ctrl_c()
        .await
        .context("failed to listen for Ctrl-C")?;

    handle.stop();
    Ok(())
}
