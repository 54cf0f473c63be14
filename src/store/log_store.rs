use crate::errors::{AppError, AppResult};
use crate::models::LogRow;
use crate::store::lock::{LockGuard, sibling};
use crate::store::table::LogTable;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// What `read_all` found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSnapshot {
    /// Nothing has ever been submitted.
    Missing,
    /// The log exists; it may still have zero rows.
    Present(LogTable),
}

/// Sole writer of the shared CSV log.
///
/// Every mutation is a locked read-modify-write of the whole file; the new
/// content goes to a temporary sibling that is renamed over the log, so a
/// failure at any point leaves the previous file untouched.
#[derive(Debug, Clone)]
pub struct LogStore {
    path: PathBuf,
}

impl LogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn read_all(&self) -> AppResult<LogSnapshot> {
        Ok(match self.load()? {
            Some(table) => LogSnapshot::Present(table),
            None => LogSnapshot::Missing,
        })
    }

    /// The stored serialization, byte for byte. `None` if no log exists.
    pub fn raw_bytes(&self) -> AppResult<Option<Vec<u8>>> {
        match fs::read(&self.path) {
            Ok(b) => Ok(Some(b)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(self.read_error(e)),
        }
    }

    /// Add a batch after the existing rows and return the new row count.
    pub fn append(&self, rows: &[LogRow]) -> AppResult<usize> {
        if rows.is_empty() {
            debug!(log = %self.path.display(), "append called with no rows, nothing to do");
            return Ok(self.load()?.map(|t| t.len()).unwrap_or(0));
        }

        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir).map_err(|e| write_error(dir, e))?;
        }

        let _lock = LockGuard::acquire(&self.path)?;

        // any read/parse failure aborts here, before anything is written
        let mut table = self.load()?.unwrap_or_default();
        let before = table.len();
        table.push_rows(rows);

        self.persist(&table)?;

        info!(
            log = %self.path.display(),
            added = rows.len(),
            previous = before,
            total = table.len(),
            "rows appended"
        );
        Ok(table.len())
    }

    /// Overwrite one cell with raw text and return its previous value.
    pub fn update_cell(&self, row_index: usize, column: &str, value: &str) -> AppResult<String> {
        if !self.path.exists() {
            return Err(no_entries());
        }

        let _lock = LockGuard::acquire(&self.path)?;

        let mut table = self.load()?.ok_or_else(no_entries)?;

        if row_index >= table.len() {
            return Err(AppError::Validation(format!(
                "row {row_index} is out of range (log has {} rows)",
                table.len()
            )));
        }

        let col = table
            .column_index(column)
            .ok_or_else(|| AppError::Validation(format!("unknown column '{column}'")))?;

        let old = std::mem::replace(&mut table.rows[row_index][col], value.to_string());
        self.persist(&table)?;

        info!(
            log = %self.path.display(),
            row = row_index,
            column,
            "cell updated"
        );
        Ok(old)
    }

    fn load(&self) -> AppResult<Option<LogTable>> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.read_error(e)),
        };

        LogTable::from_reader(file).map(Some).map_err(|e| {
            AppError::Storage(format!("cannot parse {}: {e}", self.path.display()))
        })
    }

    fn persist(&self, table: &LogTable) -> AppResult<()> {
        let bytes = table
            .to_csv_bytes()
            .map_err(|e| AppError::Storage(format!("cannot serialize log: {e}")))?;
        let tmp = sibling(&self.path, ".tmp");

        let staged = (|| -> io::Result<()> {
            let mut f = File::create(&tmp)?;
            f.write_all(&bytes)?;
            f.sync_all()
        })();

        let result = staged
            .map_err(|e| write_error(&tmp, e))
            .and_then(|()| fs::rename(&tmp, &self.path).map_err(|e| write_error(&self.path, e)));

        if let Err(e) = result {
            let _ = fs::remove_file(&tmp);
            return Err(e);
        }

        debug!(log = %self.path.display(), bytes = bytes.len(), "log persisted");
        Ok(())
    }

    fn read_error(&self, e: io::Error) -> AppError {
        AppError::Storage(format!("cannot read {}: {e}", self.path.display()))
    }

}

fn write_error(path: &Path, e: io::Error) -> AppError {
    AppError::Storage(format!("cannot write {}: {e}", path.display()))
}

fn no_entries() -> AppError {
    AppError::Validation("no entries have been submitted yet".into())
}
