use crate::core::session::{Session, SessionDefaults};
use crate::errors::AppResult;
use crate::store::{EntryStore, FileStore};
use crate::ui::messages::{info, success, warning};
use chrono::NaiveDate;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Remove the saved entry for `date`, if any. A day that was never saved
    /// is a no-op, never an error. Returns whether an entry was removed.
    pub fn apply(
        store_file: &FileStore,
        defaults: &SessionDefaults,
        date: NaiveDate,
    ) -> AppResult<bool> {
        let mut entries = EntryStore::load(store_file);
        let mut session = Session::on_date_selected(&entries, date, defaults);

        let removed = session.on_delete(&mut entries, defaults);

        if removed {
            if let Err(e) = entries.persist(store_file) {
                warning(format!("Entry removed in memory only: {}", e));
            }
            success(format!("Entry for {} has been deleted.", date));
            info(format!(
                "Form reset to a default draft ({} - {}).",
                session.clock_in(),
                session.clock_out()
            ));
        } else {
            info(format!("No saved entry for {}, nothing to delete.", date));
        }

        Ok(removed)
    }
}
