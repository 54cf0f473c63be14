//! Best-effort e-mail summary of a submission.

pub mod smtp;
pub mod summary;

pub use smtp::{SmtpNotifier, SmtpSettings};
pub use summary::Summary;

use crate::errors::AppResult;

/// Receives a finished batch after it has been written to the log.
pub trait Notifier {
    fn notify(&self, summary: &Summary) -> AppResult<()>;
}
