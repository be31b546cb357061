use crate::core::session::{Session, SessionDefaults, TimeField};
use crate::errors::AppResult;
use crate::models::TimeEntry;
use crate::store::{EntryStore, FileStore};
use crate::ui::messages::{success, warning};
use crate::utils::formatting::format_hours;
use chrono::{NaiveDate, NaiveTime};

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Stage the provided time edits on the session for `date`, save the
    /// resulting entry and mirror the collection back to storage.
    ///
    /// Omitted fields keep the loaded (or default) value, so `add` both
    /// creates new entries and partially updates existing ones.
    pub fn apply(
        store_file: &FileStore,
        defaults: &SessionDefaults,
        date: NaiveDate,
        start: Option<NaiveTime>,
        end: Option<NaiveTime>,
    ) -> AppResult<TimeEntry> {
        let mut entries = EntryStore::load(store_file);
        let mut session = Session::on_date_selected(&entries, date, defaults);

        if let Some(t) = start {
            session.on_field_edited(TimeField::ClockIn, &t.format("%H:%M").to_string());
        }
        if let Some(t) = end {
            session.on_field_edited(TimeField::ClockOut, &t.format("%H:%M").to_string());
        }

        let entry = session.on_save(&mut entries)?;

        // best-effort mirror: a failed write is reported, not fatal
        if let Err(e) = entries.persist(store_file) {
            warning(format!("Entry saved in memory only: {}", e));
        }

        success(format!(
            "Saved {}: {} - {} | worked {} h | overtime {} h",
            entry.day_key(),
            entry.clock_in_str(),
            entry.clock_out_str(),
            format_hours(entry.hours_worked),
            format_hours(entry.overtime_hours),
        ));

        Ok(entry)
    }
}
