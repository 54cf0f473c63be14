pub mod log_row;
pub mod role;

pub use log_row::{AdminInfo, HotelInfo, LogRow, RoomEntry};
pub use role::{Role, Session};
