//! Worked-hours arithmetic: instants, elapsed time, rounding.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// Round to 2 decimal places, half away from zero.
/// Every derived hour value goes through this so that
/// `hours_worked - overtime_hours` reproduces the regular-hours figure
/// without drift beyond 0.01.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Combine a calendar day with a time-of-day into a concrete instant on that
/// day, zeroing seconds and sub-seconds.
pub fn to_instant(day: NaiveDate, time: NaiveTime) -> NaiveDateTime {
    let truncated = NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(time);
    day.and_time(truncated)
}

/// Signed elapsed time between two instants, in hours rounded to 2 decimals.
/// Negative when `end` precedes `start`.
pub fn elapsed_hours(start: NaiveDateTime, end: NaiveDateTime) -> f64 {
    round2(raw_hours(start, end))
}

/// Hours worked between clock-in and clock-out on `day`.
///
/// A negative raw duration means the shift crossed midnight; 24 hours are
/// added exactly once, before rounding. Shifts longer than 24 hours are out
/// of scope and produce a deterministic but incorrect value.
pub fn worked_hours(day: NaiveDate, clock_in: NaiveTime, clock_out: NaiveTime) -> f64 {
    let start = to_instant(day, clock_in);
    let end = to_instant(day, clock_out);

    let mut hours = raw_hours(start, end);
    if hours < 0.0 {
        hours += 24.0; // overnight correction
    }

    round2(hours)
}

fn raw_hours(start: NaiveDateTime, end: NaiveDateTime) -> f64 {
    let minutes = (end - start).num_minutes();
    minutes as f64 / 60.0
}
