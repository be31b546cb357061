use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::{ENTRIES_KEY, EntryStore, FileStore};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - an empty entries store (prod or test mode)
pub fn handle(cli: &Cli) -> AppResult<()> {
    println!("⚙️  Initializing rTimecard…");

    let cfg = Config::init_all(cli.store.clone(), cli.test)?;

    let store_file = FileStore::new(&cfg.store);

    // Seed an empty collection so a fresh install lists/export as empty
    // instead of warning about a missing store file.
    if !store_file.path_for(ENTRIES_KEY).exists() {
        EntryStore::new().persist(&store_file)?;
    }

    println!(
        "🗄️  Entries store : {}",
        store_file.path_for(ENTRIES_KEY).display()
    );
    println!("🎉 rTimecard initialization completed!");

    Ok(())
}
