//! ANSI color helper utilities for terminal output.

use crate::models::OpenStatus;
use regex::Regex;
use std::sync::LazyLock;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const BOLD_GREEN: &str = "\x1b[1;32m";
pub const BOLD_BLUE: &str = "\x1b[1;34m";
pub const BOLD_YELLOW: &str = "\x1b[1;33m";
pub const BOLD_RED: &str = "\x1b[1;31m";

/// Open → green, closed → red.
pub fn color_for_status(status: OpenStatus) -> &'static str {
    match status {
        OpenStatus::Open => GREEN,
        OpenStatus::Closed => RED,
    }
}

pub fn paint(value: &str, color: &str, enabled: bool) -> String {
    if !enabled || value.is_empty() {
        return value.to_string();
    }
    format!("{color}{value}{RESET}")
}

static ANSI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap());

/// Returns the text with ANSI color sequences removed.
pub fn strip_ansi(value: &str) -> String {
    ANSI_RE.replace_all(value, "").into_owned()
}
