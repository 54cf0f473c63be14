use crate::models::{LogRow, RoomEntry};
use std::fmt::Write;

/// Plain-text digest of one submission.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub hotel_name: String,
    pub job_number: String,
    pub prepared_by: String,
    pub rooms: Vec<RoomEntry>,
}

impl Summary {
    /// Shared fields come from the first row. `None` for an empty batch.
    pub fn from_rows(rows: &[LogRow]) -> Option<Self> {
        let first = rows.first()?;
        Some(Self {
            hotel_name: first.hotel.name.clone(),
            job_number: first.admin.job_number.clone(),
            prepared_by: first.admin.prepared_by.clone(),
            rooms: rows.iter().map(|r| r.room.clone()).collect(),
        })
    }

    pub fn subject(&self) -> String {
        format!(
            "Hotel stay logged: {} (Job {})",
            self.hotel_name, self.job_number
        )
    }

    pub fn body(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Hotel: {}", self.hotel_name);
        let _ = writeln!(out, "Job Number: {}", self.job_number);
        let _ = writeln!(out, "Prepared By: {}", self.prepared_by);
        let _ = writeln!(out, "Rooms: {}", self.rooms.len());
        out.push('\n');

        for r in &self.rooms {
            let cost = r
                .actual_cost
                .map(|c| format!("${c:.2}"))
                .unwrap_or_else(|| "n/a".to_string());
            let _ = writeln!(
                out,
                "Room {} | Day: {} | Night: {} | In: {} | Out: {} | Cost: {}",
                r.room_number, r.employee_day, r.employee_night, r.check_in, r.check_out, cost
            );
        }
        out
    }
}
