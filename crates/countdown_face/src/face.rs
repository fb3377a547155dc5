// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Draws countdown frames as text rings on a terminal.

use std::io::Write;

use colored::Colorize;
use countdown::{DateConfig, Error, Frame, NumeralScale, Renderer};

const BAR_WIDTH: usize = 30;
const FACE_WIDTH: usize = 52;
const CLEAR_SCREEN: &str = "\x1b[H\x1b[2J";
const FILLED: &str = "█";
const EMPTY: &str = "░";

/// A 24-bit terminal color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

const YEARS_COLOR: Rgb = Rgb(0xF4, 0x3F, 0x5E);
const DAYS_COLOR: Rgb = Rgb(0x10, 0xB9, 0x81);
const HOURS_COLOR: Rgb = Rgb(0x3B, 0x82, 0xF6);
const MINUTES_COLOR: Rgb = Rgb(0xF5, 0x9E, 0x0B);

/// One of the outer rings, ready to draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingSpec {
    pub id: char,
    pub label: &'static str,
    pub color: Rgb,
    pub count: u64,
    pub percent: f64,
}

impl RingSpec {
    fn caption(&self) -> String {
        format!("{} • {:02}", self.label, self.count)
    }
}

/// The outer rings of a frame, from the outermost (years) inwards.
pub fn rings(frame: &Frame) -> [RingSpec; 3] {
    let remaining = &frame.remaining;
    let percentages = &frame.percentages;

    [
        RingSpec {
            id: 'A',
            label: "YEARS",
            color: YEARS_COLOR,
            count: remaining.years,
            percent: percentages.years,
        },
        RingSpec {
            id: 'B',
            label: "DAYS",
            color: DAYS_COLOR,
            count: remaining.days,
            percent: percentages.days,
        },
        RingSpec {
            id: 'C',
            label: "HOURS",
            color: HOURS_COLOR,
            count: remaining.hours,
            percent: percentages.hours,
        },
    ]
}

/// Renders a percentage as a bar of `width` cells.
pub fn bar(percent: f64, width: usize) -> String {
    let filled = filled_cells(percent, width);

    format!("{}{}", FILLED.repeat(filled), EMPTY.repeat(width - filled))
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    reason = "the fraction is clamped to [0, 1] and bar widths are small"
)]
fn filled_cells(percent: f64, width: usize) -> usize {
    let fraction = (percent / 100.0).clamp(0.0, 1.0);

    (fraction * width as f64).round() as usize
}

fn centered(text: &str) -> String {
    format!("{text:^width$}", width = FACE_WIDTH)
}

/// Spells out the central numeral, spacing the digits according to its scale.
pub fn numeral(value: u64) -> String {
    let gap = match NumeralScale::for_value(value) {
        NumeralScale::Large => "  ",
        NumeralScale::Medium => " ",
        NumeralScale::Small => "",
    };

    format!("{value:02}")
        .chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(gap)
}

/// A [`Renderer`] that draws frames as colored text.
///
/// When drawing in place, every frame starts by moving the cursor home and clearing the
/// screen so the face is redrawn over the previous one.
#[derive(Debug)]
pub struct TerminalFace<W> {
    out: W,
    label: String,
    in_place: bool,
}

impl<W: Write + Send> TerminalFace<W> {
    pub fn new(out: W, config: &DateConfig) -> Self {
        Self {
            out,
            label: config.label(),
            in_place: false,
        }
    }

    #[must_use]
    pub fn in_place(self, in_place: bool) -> Self {
        Self { in_place, ..self }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw(&self, frame: &Frame) -> String {
        let mut lines = Vec::new();

        for ring in rings(frame) {
            let Rgb(r, g, b) = ring.color;
            lines.push(format!(
                "  {} {:<11} {} {:>5.1}%",
                ring.id.to_string().dimmed(),
                ring.caption().bold(),
                bar(ring.percent, BAR_WIDTH).truecolor(r, g, b),
                ring.percent,
            ));
        }

        let Rgb(r, g, b) = MINUTES_COLOR;
        let minutes_in_day = frame.remaining.minutes_in_day;

        lines.push(String::new());
        lines.push(centered(&numeral(minutes_in_day)).bold().to_string());
        lines.push(centered("M I N U T E S").truecolor(r, g, b).to_string());
        lines.push(centered(&bar(frame.percentages.minutes_in_day, BAR_WIDTH)).truecolor(r, g, b).to_string());
        lines.push(String::new());
        lines.push(centered(&self.label).dimmed().to_string());

        let mut text = if self.in_place { CLEAR_SCREEN.to_string() } else { String::new() };
        text.push_str(&lines.join("\n"));
        text.push('\n');
        text
    }
}

impl<W: Write + Send> Renderer for TerminalFace<W> {
    fn render(&mut self, frame: &Frame) -> countdown::Result<()> {
        let text = self.draw(frame);

        self.out
            .write_all(text.as_bytes())
            .and_then(|()| self.out.flush())
            .map_err(Error::render)
    }
}
