use crate::models::TimeEntry;
use crate::utils::formatting::format_hours;
use crate::utils::time::format_time_display;
use serde::Serialize;

/// Flat record for CSV/JSON export of an entry.
#[derive(Serialize, Clone, Debug)]
pub struct EntryExport {
    pub date: String,
    pub clock_in: String,
    pub clock_out: String,
    pub hours_worked: f64,
    pub overtime_hours: f64,
}

impl EntryExport {
    pub fn from_entry(e: &TimeEntry) -> Self {
        Self {
            date: e.day_key(),
            clock_in: e.clock_in_str(),
            clock_out: e.clock_out_str(),
            hours_worked: e.hours_worked,
            overtime_hours: e.overtime_hours,
        }
    }
}

/// Column headers for the rendered report formats (PDF / XLSX).
pub(crate) fn report_headers() -> Vec<&'static str> {
    vec![
        "Date",
        "Clock-in",
        "Clock-out",
        "Hours Worked",
        "Overtime Hours",
    ]
}

/// One display row of the rendered report: 12-hour clock times, two-decimal
/// hours, `-` placeholder when there is no overtime.
pub(crate) fn entry_to_report_row(e: &TimeEntry) -> Vec<String> {
    vec![
        e.day_key(),
        format_time_display(e.clock_in),
        format_time_display(e.clock_out),
        format_hours(e.hours_worked),
        if e.overtime_hours > 0.0 {
            format_hours(e.overtime_hours)
        } else {
            "-".to_string()
        },
    ]
}

/// Footer row summing overtime across the exported selection.
pub(crate) fn report_footer(total_overtime: f64) -> Vec<String> {
    vec![
        "Total Overtime".to_string(),
        String::new(),
        String::new(),
        String::new(),
        format_hours(total_overtime),
    ]
}
