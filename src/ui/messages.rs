//! User-facing status lines for the CLI.
//!
//! Colored with an icon by default; plain text tags once `color: false`
//! has been applied through [`set_color`].

use crate::utils::colors::{BOLD_BLUE, BOLD_GREEN, BOLD_RED, BOLD_YELLOW, paint};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

static COLOR: AtomicBool = AtomicBool::new(true);

#[derive(Clone, Copy)]
enum Kind {
    Info,
    Success,
    Warning,
    Error,
}

impl Kind {
    fn icon(self) -> &'static str {
        match self {
            Kind::Info => "ℹ️",
            Kind::Success => "✅",
            Kind::Warning => "⚠️",
            Kind::Error => "❌",
        }
    }

    fn tag(self) -> &'static str {
        match self {
            Kind::Info => "info:",
            Kind::Success => "ok:",
            Kind::Warning => "warning:",
            Kind::Error => "error:",
        }
    }

    fn color(self) -> &'static str {
        match self {
            Kind::Info => BOLD_BLUE,
            Kind::Success => BOLD_GREEN,
            Kind::Warning => BOLD_YELLOW,
            Kind::Error => BOLD_RED,
        }
    }
}

/// Switch every following message between colored and plain output.
pub fn set_color(enabled: bool) {
    COLOR.store(enabled, Ordering::Relaxed);
}

fn line<T: fmt::Display>(kind: Kind, msg: T) -> String {
    if COLOR.load(Ordering::Relaxed) {
        format!("{} {}", paint(kind.icon(), kind.color(), true), msg)
    } else {
        format!("{} {}", kind.tag(), msg)
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", line(Kind::Info, msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", line(Kind::Success, msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", line(Kind::Warning, msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", line(Kind::Error, msg));
}
