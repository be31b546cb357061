use chrono::{NaiveDate, NaiveTime, Timelike};

/// Excel serial day number for a calendar date (epoch 1899-12-30).
pub(crate) fn date_serial(d: NaiveDate) -> f64 {
    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30).unwrap_or(d);
    (d - excel_epoch).num_days() as f64
}

/// Excel fraction-of-day for a time of day.
pub(crate) fn time_serial(t: NaiveTime) -> f64 {
    t.num_seconds_from_midnight() as f64 / 86400.0
}
