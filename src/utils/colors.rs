/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const MAGENTA: &str = "\x1b[35m";

/// Wrap `value` in `color`, unless the value is blank.
pub fn colorize(value: &str, color: &str) -> String {
    if value.trim().is_empty() {
        return value.to_string();
    }
    format!("{color}{value}{RESET}")
}

/// Counters: zero in grey, anything else in `color`.
pub fn colorize_count(n: u64, color: &str) -> String {
    if n == 0 {
        format!("{GREY}0{RESET}")
    } else {
        colorize(&n.to_string(), color)
    }
}
