//! Coloured one-line messages for the terminal user.
//!
//! Diagnostics go through `tracing` on stderr; these are the lines a user is
//! meant to read. `NO_COLOR` disables the ANSI codes.

use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

fn colour_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

fn paint<T: fmt::Display>(colour: &str, icon: &str, msg: T) -> String {
    if colour_enabled() {
        format!("{colour}{BOLD}{icon}{RESET} {msg}")
    } else {
        format!("{icon} {msg}")
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", paint(FG_BLUE, ICON_INFO, msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", paint(FG_GREEN, ICON_OK, msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", paint(FG_YELLOW, ICON_WARN, msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", paint(FG_RED, ICON_ERR, msg));
}

/// Section title above a table.
pub fn header<T: fmt::Display>(msg: T) {
    if colour_enabled() {
        println!("{FG_BLUE}{BOLD}== {msg}{RESET}\n");
    } else {
        println!("== {msg}\n");
    }
}
