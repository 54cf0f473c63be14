use crate::errors::AppResult;
use crate::models::{Role, Session};
use crate::store::LogStore;

pub struct EditLogic;

impl EditLogic {
    /// Admin-only single cell edit; returns the previous value.
    ///
    /// The new value is stored as typed, whatever the column holds.
    pub fn apply(
        store: &LogStore,
        session: &Session,
        row: usize,
        column: &str,
        value: &str,
    ) -> AppResult<String> {
        session.require(Role::Admin)?;
        store.update_cell(row, column, value)
    }
}
