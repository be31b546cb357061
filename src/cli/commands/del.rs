use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::core::session::SessionDefaults;
use crate::errors::{AppError, AppResult};
use crate::store::FileStore;
use crate::ui::messages::{info, warning};
use crate::utils::date;

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { date: date_str } = cmd {
        let d = date::parse_date(date_str).ok_or_else(|| AppError::InvalidDate(date_str.into()))?;

        let prompt = format!("Delete the entry for {}? This action is irreversible.", d);
        if !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let store_file = FileStore::new(&cfg.store);
        let defaults = SessionDefaults::from_config(cfg);

        DeleteLogic::apply(&store_file, &defaults, d)?;
    }

    Ok(())
}
