use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::export::ExportLogic;
use crate::errors::AppResult;
use crate::models::Session;
use crate::store::LogStore;

pub fn handle(cmd: &Commands, cfg: &Config, session: &Session) -> AppResult<()> {
    if let Commands::Export { file, force } = cmd {
        let store = LogStore::new(cfg.log_path());
        ExportLogic::export(&store, session, file.as_deref(), *force)?;
    }
    Ok(())
}
