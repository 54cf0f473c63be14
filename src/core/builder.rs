//! Turns one filled-in form into one log row per room.

use crate::errors::{AppError, AppResult};
use crate::models::{AdminInfo, HotelInfo, LogRow, RoomEntry};
use std::collections::BTreeMap;

pub const MIN_ROOMS: usize = 1;
pub const MAX_ROOMS: usize = 20;

/// Pure: no I/O. Dates must already be `MM/DD/YYYY`; they are copied as-is.
pub fn build(hotel: &HotelInfo, admin: &AdminInfo, rooms: &[RoomEntry]) -> AppResult<Vec<LogRow>> {
    if !(MIN_ROOMS..=MAX_ROOMS).contains(&rooms.len()) {
        return Err(AppError::Validation(format!(
            "a submission needs between {MIN_ROOMS} and {MAX_ROOMS} rooms, got {}",
            rooms.len()
        )));
    }

    check_money("nightly rate", hotel.nightly_rate)?;
    for (i, room) in rooms.iter().enumerate() {
        check_money(&format!("actual cost of room {}", i + 1), room.actual_cost)?;
    }

    let hotel = HotelInfo {
        nightly_rate: hotel.nightly_rate.map(unsigned_zero),
        ..hotel.clone()
    };

    Ok(rooms
        .iter()
        .map(|room| LogRow {
            hotel: hotel.clone(),
            room: RoomEntry {
                actual_cost: room.actual_cost.map(unsigned_zero),
                ..room.clone()
            },
            admin: admin.clone(),
            extra: BTreeMap::new(),
        })
        .collect())
}

/// `-0.0` would otherwise be written as "-0.00".
fn unsigned_zero(v: f64) -> f64 {
    if v == 0.0 { 0.0 } else { v }
}

fn check_money(label: &str, value: Option<f64>) -> AppResult<()> {
    match value {
        Some(v) if !v.is_finite() || v < 0.0 => Err(AppError::Validation(format!(
            "{label} must be a non-negative amount, got {v}"
        ))),
        _ => Ok(()),
    }
}
