//! Time ruler drawn above the tracks

use crate::theme::{GRID_COLOR, MARGIN_LEFT, MARGIN_TOP, RULER_BG_COLOR, RULER_HEIGHT};
use crate::SvgBuilder;
use std::io::{self, Write};

/// Tick spacings, in seconds, that read well on a ruler
const INTERVALS: [f64; 14] = [
    0.1, 0.5, 1.0, 2.0, 5.0, 10.0, 15.0, 30.0, 60.0, 120.0, 300.0, 600.0, 1800.0, 3600.0,
];

/// Number of marks the ruler aims for across the whole timeline
const TARGET_MARKS: f64 = 12.0;

/// Absorbs float error so a tick landing exactly on the end is kept
const TICK_EPSILON: f64 = 1e-9;

/// Picks the smallest friendly interval giving at most ~12 marks.
///
/// Durations too long for the coarsest step still get that step.
pub fn calculate_time_interval(duration_seconds: f64) -> f64 {
    let ideal = duration_seconds / TARGET_MARKS;
    INTERVALS
        .iter()
        .copied()
        .find(|&interval| interval >= ideal)
        .unwrap_or(INTERVALS[INTERVALS.len() - 1])
}

/// Formats a ruler label: `12.5s`, `1:30` or `1:01:05`
pub fn format_time(seconds: f64) -> String {
    if seconds < 60.0 {
        return format!("{seconds:.1}s");
    }

    let total_minutes = (seconds / 60.0) as u64;
    let secs = seconds as u64 % 60;

    if total_minutes < 60 {
        return format!("{total_minutes}:{secs:02}");
    }

    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;
    format!("{hours}:{minutes:02}:{secs:02}")
}

/// Tick positions from 0 up to and including `duration_seconds`
pub fn tick_times(duration_seconds: f64, interval: f64) -> impl Iterator<Item = f64> {
    (0u64..)
        .map(move |i| i as f64 * interval)
        .take_while(move |&time| time <= duration_seconds + TICK_EPSILON)
}

/// Draws the ruler group: background band, then one tick and label per interval
pub fn draw_ruler<W: Write>(
    builder: &mut SvgBuilder<W>,
    content_width: f64,
    duration_seconds: f64,
    time_scale: f64,
) -> io::Result<()> {
    builder.start_group(Some("time-ruler"), Some("ruler"))?;

    let ruler_y = MARGIN_TOP;
    builder.write_rect(
        MARGIN_LEFT,
        ruler_y,
        content_width,
        RULER_HEIGHT,
        Some(RULER_BG_COLOR),
        Some(GRID_COLOR),
        None,
        Some("ruler-bg"),
        None,
    )?;

    let interval = calculate_time_interval(duration_seconds);
    log::debug!("ruler interval {interval}s over {duration_seconds}s");

    for time in tick_times(duration_seconds, interval) {
        let x = MARGIN_LEFT + time * time_scale;
        builder.write_line(
            x,
            ruler_y,
            x,
            ruler_y + RULER_HEIGHT,
            Some(GRID_COLOR),
            1.0,
            Some("tick"),
        )?;
        builder.write_text(
            x,
            ruler_y + RULER_HEIGHT / 2.0,
            &format_time(time),
            Some("middle"),
            None,
            Some("ruler-text"),
        )?;
    }

    builder.end_group()
}
