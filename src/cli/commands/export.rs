use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::store::FileStore;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    {
        let store_file = FileStore::new(&cfg.store);
        ExportLogic::export(&store_file, cfg, format.clone(), file, range, *force)?;
    }
    Ok(())
}
