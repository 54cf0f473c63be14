use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const COL_HOTEL_NAME: &str = "Hotel Name";
pub const COL_HOTEL_ADDRESS: &str = "Hotel Address";
pub const COL_HOTEL_PHONE: &str = "Hotel Phone";
pub const COL_HOTEL_CONTACT: &str = "Hotel Contact";
pub const COL_CONFIRMATION: &str = "Confirmation #";
pub const COL_NIGHTLY_RATE: &str = "Nightly Rate";
pub const COL_ROOM: &str = "Room #";
pub const COL_EMPLOYEE_DAY: &str = "Employee (Day)";
pub const COL_EMPLOYEE_NIGHT: &str = "Employee (Night)";
pub const COL_CHECK_IN: &str = "Check-In";
pub const COL_CHECK_OUT: &str = "Check-Out";
pub const COL_ACTUAL_COST: &str = "Actual Cost";
pub const COL_PREPARED_BY: &str = "Prepared By";
pub const COL_DATE_PREPARED: &str = "Date Prepared";
pub const COL_JOB_NUMBER: &str = "Job Number";

/// Canonical column order of a freshly created log.
pub const COLUMNS: [&str; 15] = [
    COL_HOTEL_NAME,
    COL_HOTEL_ADDRESS,
    COL_HOTEL_PHONE,
    COL_HOTEL_CONTACT,
    COL_CONFIRMATION,
    COL_NIGHTLY_RATE,
    COL_ROOM,
    COL_EMPLOYEE_DAY,
    COL_EMPLOYEE_NIGHT,
    COL_CHECK_IN,
    COL_CHECK_OUT,
    COL_ACTUAL_COST,
    COL_PREPARED_BY,
    COL_DATE_PREPARED,
    COL_JOB_NUMBER,
];

/// Hotel section of the form, shared by every room of a submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HotelInfo {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub contact: String,
    pub confirmation: String,
    pub nightly_rate: Option<f64>,
}

/// Administrative section of the form, shared by every room of a submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminInfo {
    pub prepared_by: String,
    /// MM/DD/YYYY
    pub date_prepared: String,
    pub job_number: String,
}

/// One room line of the form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoomEntry {
    pub room_number: String,
    #[serde(default)]
    pub employee_day: String,
    #[serde(default)]
    pub employee_night: String,
    pub check_in: String,
    pub check_out: String,
    #[serde(default)]
    pub actual_cost: Option<f64>,
}

/// One persisted record: a single room's stay within one submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogRow {
    pub hotel: HotelInfo,
    pub room: RoomEntry,
    pub admin: AdminInfo,
    /// Columns this type does not model (legacy or hand-added), plus money
    /// cells whose text is not a number.
    pub extra: BTreeMap<String, String>,
}

/// Money cells are written with two decimals; `None` is an empty cell.
pub fn format_money(value: Option<f64>) -> String {
    value.map(|v| format!("{v:.2}")).unwrap_or_default()
}

impl LogRow {
    /// Column/value pairs in canonical order, followed by the extension
    /// columns in key order.
    pub fn to_record(&self) -> Vec<(String, String)> {
        let mut out: Vec<(String, String)> = vec![
            (COL_HOTEL_NAME.into(), self.hotel.name.clone()),
            (COL_HOTEL_ADDRESS.into(), self.hotel.address.clone()),
            (COL_HOTEL_PHONE.into(), self.hotel.phone.clone()),
            (COL_HOTEL_CONTACT.into(), self.hotel.contact.clone()),
            (COL_CONFIRMATION.into(), self.hotel.confirmation.clone()),
            (COL_NIGHTLY_RATE.into(), format_money(self.hotel.nightly_rate)),
            (COL_ROOM.into(), self.room.room_number.clone()),
            (COL_EMPLOYEE_DAY.into(), self.room.employee_day.clone()),
            (COL_EMPLOYEE_NIGHT.into(), self.room.employee_night.clone()),
            (COL_CHECK_IN.into(), self.room.check_in.clone()),
            (COL_CHECK_OUT.into(), self.room.check_out.clone()),
            (COL_ACTUAL_COST.into(), format_money(self.room.actual_cost)),
            (COL_PREPARED_BY.into(), self.admin.prepared_by.clone()),
            (COL_DATE_PREPARED.into(), self.admin.date_prepared.clone()),
            (COL_JOB_NUMBER.into(), self.admin.job_number.clone()),
        ];

        for (k, v) in &self.extra {
            // an extension key never shadows a modelled column
            if !COLUMNS.contains(&k.as_str()) {
                out.push((k.clone(), v.clone()));
            }
        }
        out
    }

    /// Rebuild a typed row from one raw table row. Never fails: cells are
    /// free text after an admin edit, so anything that does not fit a typed
    /// field lands in `extra`.
    pub fn from_record<'a, I>(cells: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut row = LogRow::default();

        for (col, val) in cells {
            let v = val.to_string();
            match col {
                COL_HOTEL_NAME => row.hotel.name = v,
                COL_HOTEL_ADDRESS => row.hotel.address = v,
                COL_HOTEL_PHONE => row.hotel.phone = v,
                COL_HOTEL_CONTACT => row.hotel.contact = v,
                COL_CONFIRMATION => row.hotel.confirmation = v,
                COL_NIGHTLY_RATE => match parse_money(val) {
                    Some(m) => row.hotel.nightly_rate = m,
                    None => {
                        row.extra.insert(col.to_string(), v);
                    }
                },
                COL_ROOM => row.room.room_number = v,
                COL_EMPLOYEE_DAY => row.room.employee_day = v,
                COL_EMPLOYEE_NIGHT => row.room.employee_night = v,
                COL_CHECK_IN => row.room.check_in = v,
                COL_CHECK_OUT => row.room.check_out = v,
                COL_ACTUAL_COST => match parse_money(val) {
                    Some(m) => row.room.actual_cost = m,
                    None => {
                        row.extra.insert(col.to_string(), v);
                    }
                },
                COL_PREPARED_BY => row.admin.prepared_by = v,
                COL_DATE_PREPARED => row.admin.date_prepared = v,
                COL_JOB_NUMBER => row.admin.job_number = v,
                other => {
                    row.extra.insert(other.to_string(), v);
                }
            }
        }

        row
    }
}

/// `Some(None)` for an empty cell, `Some(Some(x))` for a number, `None` when
/// the text is not a number at all.
fn parse_money(s: &str) -> Option<Option<f64>> {
    let t = s.trim().trim_start_matches('$');
    if t.is_empty() {
        return Some(None);
    }
    t.replace(',', "").parse::<f64>().ok().map(Some)
}
