use crate::errors::{AppError, AppResult};
use crate::models::{Role, Session};
use crate::store::LogStore;
use crate::ui::messages::{info, success, warning};
use crate::utils::path::expand_tilde;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Full-table download of the stored log, byte for byte.
    ///
    /// - `file = None` writes to stdout
    /// - `file = Some(path)` needs an absolute path; an existing file is only
    ///   replaced with `force` or after confirmation
    ///
    /// Returns the number of bytes written (0 when there is no log yet).
    pub fn export(
        store: &LogStore,
        session: &Session,
        file: Option<&str>,
        force: bool,
    ) -> AppResult<usize> {
        session.require(Role::Admin)?;

        let target = match file {
            Some(f) => {
                let path = expand_tilde(f);
                if !path.is_absolute() {
                    return Err(AppError::Validation(format!(
                        "output file path must be absolute: {f}"
                    )));
                }
                Some(path)
            }
            None => None,
        };

        let Some(bytes) = store.raw_bytes()? else {
            info("No entries have been submitted yet. Nothing to export.");
            return Ok(0);
        };

        match target {
            Some(path) => {
                ensure_writable(&path, force)?;
                fs::write(&path, &bytes)?;
                success(format!("CSV export completed: {}", path.display()));
            }
            None => {
                let mut out = io::stdout().lock();
                out.write_all(&bytes)?;
                out.flush()?;
            }
        }

        Ok(bytes.len())
    }
}

/// Asks before replacing an existing file unless `force` is set.
fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));

    eprint!("Overwrite? [y/N]: ");
    io::stderr().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let ans = answer.trim().to_ascii_lowercase();

    if ans == "y" || ans == "yes" {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::from(io::Error::other(
            "Export cancelled: existing file not overwritten",
        )))
    }
}
