use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::{Session, SessionDefaults, SessionState};
use crate::errors::{AppError, AppResult};
use crate::store::{EntryStore, FileStore};
use crate::ui::messages::info;
use crate::utils::date;
use crate::utils::formatting::format_hours;

/// Show the saved entry (or a synthesized draft) for a date.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { date: date_arg } = cmd {
        let d = match date_arg {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => date::today(),
        };

        let store_file = FileStore::new(&cfg.store);
        let entries = EntryStore::load(&store_file);
        let defaults = SessionDefaults::from_config(cfg);

        let session = Session::on_date_selected(&entries, d, &defaults);

        let label = match session.state() {
            SessionState::ViewingExisting => "saved entry",
            SessionState::ViewingDraft => "draft",
        };

        println!("\n=== {} ({}) ===", session.date(), label);
        println!("Clock-in : {}", session.clock_in());
        println!("Clock-out: {}", session.clock_out());
        println!("Worked   : {} h", format_hours(session.hours_worked()));
        println!("Overtime : {} h", format_hours(session.overtime_hours()));

        if session.state() == SessionState::ViewingDraft {
            info("No saved entry for this date; showing a default draft. Use `add` to save it.");
        }
    }

    Ok(())
}
