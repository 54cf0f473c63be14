//! Persistence of the shared hotel log.
//!
//! The log is one CSV file: first line holds the column headers, every
//! following line is one room of one submission, oldest first. Every
//! mutation rewrites the whole file.

mod lock;
pub mod log_store;
pub mod table;

pub use log_store::{LogSnapshot, LogStore};
pub use table::LogTable;
