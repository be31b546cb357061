use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::core::session::SessionDefaults;
use crate::errors::{AppError, AppResult};
use crate::store::FileStore;
use crate::utils::date;
use crate::utils::time::parse_optional_time;

/// Add or update the entry for a date.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { date, start, end } = cmd {
        //
        // 1. Parse date (mandatory)
        //
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;

        //
        // 2. Parse clock times (optional; omitted fields keep loaded/default values)
        //
        let start_parsed = parse_optional_time(start.as_ref())?;
        let end_parsed = parse_optional_time(end.as_ref())?;

        //
        // 3. Execute logic
        //
        let store_file = FileStore::new(&cfg.store);
        let defaults = SessionDefaults::from_config(cfg);

        AddLogic::apply(&store_file, &defaults, d, start_parsed, end_parsed)?;
    }

    Ok(())
}
