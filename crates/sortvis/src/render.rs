#![forbid(unsafe_code)]

//! Frame drawing for the interactive front end.
//!
//! The screen is a status line followed by two stacked lane panels. Each
//! panel has a title row, a metrics row, and a field of vertical bars whose
//! height follows the element value and whose colour follows its state.
//!
//! Layout math is kept in small pure functions so it can be tested without
//! a terminal.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};

use sortvis_core::session::Lane;
use sortvis_core::{Comparison, ElementState, LaneId, Status};

const BAR: char = '█';

/// Colour for an element state.
#[must_use]
pub fn state_color(state: ElementState) -> Color {
    match state {
        ElementState::Default => Color::Cyan,
        ElementState::Comparing => Color::Yellow,
        ElementState::Swapping => Color::Red,
        ElementState::Sorted => Color::Green,
    }
}

/// Rows filled for `value` out of `max` in a field `rows` tall.
///
/// Rounds up so every positive value shows at least one row.
#[must_use]
pub fn bar_height(value: u32, max: u32, rows: u16) -> u16 {
    if max == 0 || rows == 0 {
        return 0;
    }
    let value = u64::from(value.min(max));
    let filled = (value * u64::from(rows)).div_ceil(u64::from(max));
    filled as u16
}

/// Element drawn in screen column `x` of a field `width` wide holding `n`
/// elements.
///
/// With room to spare each element gets an equal run of columns and the
/// leftover columns on the right stay empty. With more elements than
/// columns, columns sample the sequence evenly.
#[must_use]
pub fn column_element(x: u16, width: u16, n: usize) -> Option<usize> {
    if n == 0 || width == 0 || x >= width {
        return None;
    }
    if n <= usize::from(width) {
        let cell = usize::from(width) / n;
        let idx = usize::from(x) / cell;
        (idx < n).then_some(idx)
    } else {
        Some(usize::from(x) * n / usize::from(width))
    }
}

/// Metrics row for a lane.
#[must_use]
pub fn metrics_line(lane: &Lane) -> String {
    let m = lane.metrics();
    let mut line = format!(
        "Comparisons: {} | Time Elapsed: {:.2} seconds",
        m.comparisons,
        m.time_elapsed_seconds()
    );
    if m.is_complete {
        line.push_str(" | Complete");
    }
    line
}

/// Top status line: session state, settings, and key hints.
#[must_use]
pub fn status_line(session: &Comparison) -> String {
    let cfg = session.config();
    let status = match session.status() {
        Status::Idle => "Ready",
        Status::Running => "Running",
        Status::Paused => "Paused",
        Status::Finished => "Finished",
    };
    format!(
        "[{status}] speed {} | size {} | {} | sound {} | space start  p pause  r reset  d order  +/- speed  [/] size  a/b algo  s sound  q quit",
        cfg.speed,
        cfg.size,
        cfg.distribution.label(),
        if session.sound_active() { "on" } else { "off" },
    )
}

fn fit(text: &str, width: u16) -> String {
    text.chars().take(usize::from(width)).collect()
}

/// Draw one full frame. Nothing is flushed.
pub fn draw<W: Write>(out: &mut W, session: &Comparison, width: u16, height: u16) -> io::Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0), Print(fit(&status_line(session), width)))?;

    let body = height.saturating_sub(1);
    let panel = body / 2;
    for (i, id) in LaneId::BOTH.into_iter().enumerate() {
        let top = 1 + panel * i as u16;
        draw_lane(out, session.lane(id), top, width, panel)?;
    }
    queue!(out, ResetColor)
}

fn draw_lane<W: Write>(out: &mut W, lane: &Lane, top: u16, width: u16, height: u16) -> io::Result<()> {
    if height == 0 {
        return Ok(());
    }
    queue!(out, MoveTo(0, top), Print(fit(&lane.title(), width)))?;
    if height < 2 {
        return Ok(());
    }
    queue!(out, MoveTo(0, top + 1), Print(fit(&metrics_line(lane), width)))?;

    let rows = height.saturating_sub(3);
    let elements = lane.elements();
    let max = elements.len() as u32;
    for r in 0..rows {
        // Row 0 is the top of the field.
        let threshold = rows - r;
        queue!(out, MoveTo(0, top + 2 + r))?;
        let mut color = None;
        for x in 0..width {
            let Some(e) = column_element(x, width, elements.len()).map(|i| elements[i]) else {
                break;
            };
            if bar_height(e.value, max, rows) >= threshold {
                let want = state_color(e.state);
                if color != Some(want) {
                    queue!(out, SetForegroundColor(want))?;
                    color = Some(want);
                }
                queue!(out, Print(BAR))?;
            } else {
                queue!(out, Print(' '))?;
            }
        }
    }
    queue!(out, ResetColor)
}
