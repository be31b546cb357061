use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;
use crate::store::FileStore;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup { file, compress } = cmd {
        let store_file = FileStore::new(&cfg.store);
        BackupLogic::backup(&store_file, file, *compress)?;
    }
    Ok(())
}
