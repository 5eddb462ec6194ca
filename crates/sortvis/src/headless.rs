#![forbid(unsafe_code)]

//! Headless runner: drives a comparison to completion on a simulated clock.
//!
//! Each tick advances time by exactly one pacing delay, so every tick
//! consumes one step per incomplete lane and reported elapsed times equal
//! what an uninterrupted interactive run at the same speed would show.

use std::io::{self, Write};

use sortvis_core::pacing::delay_for_speed;
use sortvis_core::{Comparison, LaneId};

/// Run both lanes to completion and write one summary line per lane.
///
/// Returns the number of ticks taken.
pub fn run<W: Write>(session: &mut Comparison, out: &mut W) -> io::Result<u64> {
    let dt = delay_for_speed(session.config().speed);
    session.reset();
    session.start();

    let mut ticks = 0u64;
    while !session.is_finished() {
        session.tick(dt);
        ticks += 1;
    }
    tracing::info!(ticks, "headless run complete");

    for id in LaneId::BOTH {
        if let Some(summary) = session.lane(id).summary() {
            writeln!(out, "{summary}")?;
        }
    }
    Ok(ticks)
}
