use crate::core::calculator::hours::worked_hours;
use crate::core::calculator::overtime::overtime_hours;
use crate::core::calculator::round2;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A single saved work day.
///
/// `hours_worked` and `overtime_hours` are derived from the clock times and
/// the daily threshold; they are recomputed on construction and never edited
/// directly. Replaced wholesale when the user saves the same day again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    pub date: NaiveDate, // serialized as "YYYY-MM-DD"
    #[serde(with = "hhmm")]
    pub clock_in: NaiveTime,
    #[serde(with = "hhmm")]
    pub clock_out: NaiveTime,
    pub hours_worked: f64,
    pub overtime_hours: f64,
}

impl TimeEntry {
    /// Build an entry for `date`, computing the derived hour fields from the
    /// clock times and the overtime `threshold`.
    pub fn new(date: NaiveDate, clock_in: NaiveTime, clock_out: NaiveTime, threshold: f64) -> Self {
        let hours = worked_hours(date, clock_in, clock_out);
        let overtime = overtime_hours(hours, threshold);

        Self {
            date,
            clock_in,
            clock_out,
            hours_worked: hours,
            overtime_hours: overtime,
        }
    }

    /// Canonical calendar-day identity, independent of any time-of-day.
    pub fn day_key(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn regular_hours(&self) -> f64 {
        round2(self.hours_worked - self.overtime_hours)
    }

    pub fn clock_in_str(&self) -> String {
        self.clock_in.format("%H:%M").to_string()
    }

    pub fn clock_out_str(&self) -> String {
        self.clock_out.format("%H:%M").to_string()
    }
}

/// Strict "HH:MM" (de)serialization for clock times.
/// The stored layout keeps times as 24-hour strings, not chrono's default
/// "HH:MM:SS".
mod hhmm {
    use chrono::NaiveTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, "%H:%M").map_err(serde::de::Error::custom)
    }
}
