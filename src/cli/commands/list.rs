use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::log_row::{COL_JOB_NUMBER, format_money};
use crate::models::{Role, Session};
use crate::store::{LogSnapshot, LogStore};
use crate::ui::messages::{header, info};
use crate::utils::table::Table;

/// Admin dashboard: the whole log as a text table.
pub fn handle(cmd: &Commands, cfg: &Config, session: &Session) -> AppResult<()> {
    if let Commands::List { job } = cmd {
        session.require(Role::Admin)?;

        let store = LogStore::new(cfg.log_path());
        let table = match store.read_all()? {
            LogSnapshot::Missing => {
                info("No entries have been submitted yet.");
                return Ok(());
            }
            LogSnapshot::Present(t) => t,
        };

        if table.is_empty() {
            info("The log exists but has no entries.");
            return Ok(());
        }

        // row index stays the one `edit --row` expects, even when filtered
        let typed = table.to_log_rows();
        let shown: Vec<usize> = (0..table.len())
            .filter(|&i| {
                job.as_deref()
                    .is_none_or(|j| table.cell(i, COL_JOB_NUMBER) == Some(j))
            })
            .collect();

        let rows: Vec<Vec<String>> = shown
            .iter()
            .map(|&i| {
                let mut line = Vec::with_capacity(table.headers.len() + 1);
                line.push(i.to_string());
                line.extend(table.rows[i].iter().cloned());
                line
            })
            .collect();

        if rows.is_empty() {
            info("No rows match the given job number.");
            return Ok(());
        }

        let mut headers = Vec::with_capacity(table.headers.len() + 1);
        headers.push("Row".to_string());
        headers.extend(table.headers.iter().cloned());

        header(format!(
            "Hotel log history: {} ({} of {} rows)",
            store.path().display(),
            rows.len(),
            table.len()
        ));
        print!("{}", Table::fitted(&headers, &rows).render());

        let total: f64 = shown.iter().filter_map(|&i| typed[i].room.actual_cost).sum();
        println!("\nTotal actual cost: {}", format_money(Some(total)));
    }
    Ok(())
}
