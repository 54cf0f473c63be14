use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::EditLogic;
use crate::errors::AppResult;
use crate::models::Session;
use crate::store::LogStore;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config, session: &Session) -> AppResult<()> {
    if let Commands::Edit { row, column, value } = cmd {
        let store = LogStore::new(cfg.log_path());
        let old = EditLogic::apply(&store, session, *row, column, value)?;
        success(format!("Row {row}, '{column}': '{old}' -> '{value}'"));
    }
    Ok(())
}
