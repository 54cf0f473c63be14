//! hotellog main entrypoint.

use hotellog::run;
use hotellog::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
