//! Overtime derivation from total worked hours.

use super::hours::round2;

/// Default daily hour count beyond which worked time counts as overtime.
/// Only a default: the effective threshold comes from the configuration and
/// is passed in by callers.
pub const DEFAULT_DAILY_THRESHOLD: f64 = 9.6;

pub fn overtime_hours(total_hours: f64, threshold: f64) -> f64 {
    if total_hours > threshold {
        round2(total_hours - threshold)
    } else {
        0.0
    }
}
