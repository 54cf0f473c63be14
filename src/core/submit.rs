use crate::core::builder;
use crate::errors::{AppError, AppResult};
use crate::models::{AdminInfo, HotelInfo, Role, RoomEntry, Session};
use crate::notify::{Notifier, Summary};
use crate::store::LogStore;
use tracing::warn;

/// What happened on a submit. The append is the durable fact; the
/// notification result is reported alongside it.
#[derive(Debug)]
pub struct SubmitOutcome {
    pub rows_written: usize,
    pub total_rows: usize,
    pub summary: Summary,
    /// `None` when no notification was requested.
    pub notification: Option<AppResult<()>>,
}

pub struct SubmitLogic;

impl SubmitLogic {
    pub fn apply(
        store: &LogStore,
        session: &Session,
        hotel: &HotelInfo,
        admin: &AdminInfo,
        rooms: &[RoomEntry],
        notifier: Option<&dyn Notifier>,
    ) -> AppResult<SubmitOutcome> {
        session.require(Role::Employee)?;

        let rows = builder::build(hotel, admin, rooms)?;
        let total_rows = store.append(&rows)?;

        let summary = Summary::from_rows(&rows)
            .ok_or_else(|| AppError::Validation("submission has no rooms".into()))?;

        let notification = notifier.map(|n| {
            let res = n.notify(&summary);
            if let Err(e) = &res {
                warn!(error = %e, "notification failed, log entry kept");
            }
            res
        });

        Ok(SubmitOutcome {
            rows_written: rows.len(),
            total_rows,
            summary,
            notification,
        })
    }
}
