//! Time utilities: parsing HH:MM, display formatting.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    if let Some(s) = input {
        let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
        Ok(Some(t))
    } else {
        Ok(None)
    }
}

/// 12-hour display form used in rendered reports, e.g. 14:30 -> "02:30 PM".
pub fn format_time_display(t: NaiveTime) -> String {
    t.format("%I:%M %p").to_string()
}
