//! Unified application error type.
//! All modules (store, core, notify, cli) return AppError so the CLI can
//! print one consistent message per failure.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // Authentication
    // ---------------------------
    /// Wrong role, wrong secret or unknown role. Never says which.
    #[error("Invalid credentials")]
    Auth,

    // ---------------------------
    // Input validation
    // ---------------------------
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    // ---------------------------
    // Log file
    // ---------------------------
    #[error("Storage error: {0}")]
    Storage(String),

    // ---------------------------
    // Notification (non-fatal after a successful append)
    // ---------------------------
    #[error("Notification error: {0}")]
    Notification(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Wrapped library errors
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type AppResult<T> = Result<T, AppError>;
