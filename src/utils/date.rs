//! Calendar-date handling for the form layer.
//!
//! The log stores dates as `MM/DD/YYYY` strings with no time zone. Input is
//! accepted either in that form or as ISO `YYYY-MM-DD`.

use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

pub const STORED_FORMAT: &str = "%m/%d/%Y";
const INPUT_FORMATS: [&str; 2] = ["%Y-%m-%d", STORED_FORMAT];

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    INPUT_FORMATS
        .iter()
        .find_map(|f| NaiveDate::parse_from_str(s, f).ok())
}

pub fn to_stored(d: NaiveDate) -> String {
    d.format(STORED_FORMAT).to_string()
}

/// Parse any accepted input form and return the stored `MM/DD/YYYY` string.
pub fn normalize(s: &str) -> AppResult<String> {
    parse_date(s)
        .map(to_stored)
        .ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso_input_is_normalized() {
        assert_eq!(normalize("2025-03-07").unwrap(), "03/07/2025");
    }

    #[test]
    fn stored_input_is_kept() {
        assert_eq!(normalize("12/31/2024").unwrap(), "12/31/2024");
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(matches!(normalize("31/12/2024"), Err(AppError::InvalidDate(_))));
        assert!(matches!(normalize("tomorrow"), Err(AppError::InvalidDate(_))));
    }
}
