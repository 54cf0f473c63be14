//! Exclusive lock around a read-modify-write cycle of the log.
//!
//! A sibling `<log>.lock` file created with `create_new`; whoever creates it
//! owns the log until the guard drops. The file holds the owner's PID; a lock
//! older than any write cycle could take is left over from a killed process
//! and gets reclaimed.

use crate::errors::{AppError, AppResult};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

const RETRIES: u32 = 50;
const RETRY_DELAY: Duration = Duration::from_millis(100);
const STALE_AFTER: Duration = Duration::from_secs(60);

#[derive(Debug)]
pub(crate) struct LockGuard {
    path: PathBuf,
}

impl LockGuard {
    pub(crate) fn acquire(log_path: &Path) -> AppResult<Self> {
        let path = sibling(log_path, ".lock");

        for attempt in 0..RETRIES {
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(mut f) => {
                    let guard = Self { path };
                    writeln!(f, "{}", std::process::id()).map_err(|e| {
                        AppError::Storage(format!("cannot lock {}: {e}", log_path.display()))
                    })?;
                    tracing::trace!(lock = %guard.path.display(), attempt, "log lock acquired");
                    return Ok(guard);
                }
                Err(e) if e.kind() == ErrorKind::AlreadyExists && is_stale(&path) => {
                    tracing::warn!(
                        lock = %path.display(),
                        holder = %holder(&path),
                        "removing stale lock file"
                    );
                    let _ = fs::remove_file(&path);
                }
                Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                    tracing::debug!(lock = %path.display(), attempt, "log is locked, waiting");
                    thread::sleep(RETRY_DELAY);
                }
                Err(e) => {
                    return Err(AppError::Storage(format!(
                        "cannot lock {}: {e}",
                        log_path.display()
                    )));
                }
            }
        }

        Err(AppError::Storage(format!(
            "log is busy (lock file {} held by process {})",
            path.display(),
            holder(&path)
        )))
    }
}

fn is_stale(lock: &Path) -> bool {
    fs::metadata(lock)
        .and_then(|m| m.modified())
        .ok()
        .and_then(|t| t.elapsed().ok())
        .is_some_and(|age| age > STALE_AFTER)
}

fn holder(lock: &Path) -> String {
    fs::read_to_string(lock)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".into())
}

impl Drop for LockGuard {
    fn drop(&mut self) {
        if let Err(e) = fs::remove_file(&self.path) {
            tracing::warn!(lock = %self.path.display(), error = %e, "failed to remove lock file");
        }
    }
}

/// `hotel_log.csv` -> `hotel_log.csv<suffix>` in the same directory.
pub(crate) fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut s = path.as_os_str().to_owned();
    s.push(suffix);
    PathBuf::from(s)
}
